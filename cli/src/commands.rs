pub mod demo;
pub mod report;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};
use parkr_common::config::DEFAULT_SLOTS;

#[derive(Parser)]
#[command(name = "parkr")]
#[command(about = "A tiny parking lot simulator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Number of slots in the lot
    #[arg(long, global = true, default_value_t = DEFAULT_SLOTS)]
    pub slots: usize,

    /// Less decorative output, repeat for even less (-qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Park a car and a bike, wait, then let the car leave
    #[command(alias = "d")]
    Demo {
        /// Seconds the vehicles stay parked
        #[arg(long, default_value_t = 3)]
        delay: u64,
    },
    /// Read park/leave/status requests from standard input
    #[command(alias = "s")]
    Shell,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CommandLine::try_parse_from(["parkr", "demo"]).unwrap();
        assert_eq!(cli.slots, DEFAULT_SLOTS);
        assert_eq!(cli.quiet, 0);
        assert!(!cli.no_banner);
        assert!(matches!(cli.command, Commands::Demo { delay: 3 }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CommandLine::try_parse_from(["parkr", "s", "--slots", "2", "-qq", "--no-banner"])
            .unwrap();
        assert_eq!(cli.slots, 2);
        assert_eq!(cli.quiet, 2);
        assert!(cli.no_banner);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn test_demo_delay() {
        let cli = CommandLine::try_parse_from(["parkr", "demo", "--delay", "0"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo { delay: 0 }));
    }
}
