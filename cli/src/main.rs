mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, demo, shell};
use parkr_common::config::{Config, DEFAULT_DELAY};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let delay: Duration = match commands.command {
        Commands::Demo { delay } => Duration::from_secs(delay),
        Commands::Shell => DEFAULT_DELAY,
    };

    let cfg = Config {
        slots: commands.slots,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        delay,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Demo { .. } => {
            print::header("smart parking lot demo", cfg.quiet);
            demo::demo(&cfg)
        }
        Commands::Shell => {
            print::header("parking shell", cfg.quiet);
            shell::shell(&cfg)
        }
    }
}
