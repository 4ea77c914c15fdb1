use std::time::Duration;

pub const DEFAULT_SLOTS: usize = 4;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

pub struct Config {
    /// Number of slots the lot is built with.
    pub slots: usize,
    /// Quiet level. Every step hides more of the decorative output.
    pub quiet: u8,
    /// Skips the banner printed on startup.
    pub no_banner: bool,
    /// Simulated stay used by the demo between arrival and departure.
    ///
    /// The demo really sleeps for this long.
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS,
            quiet: 0,
            no_banner: false,
            delay: DEFAULT_DELAY,
        }
    }
}
