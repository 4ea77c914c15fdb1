use std::thread;
use std::time::{Duration, Instant};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.enable_steady_tick(TICK);
    pb
}

/// Blocks for `delay` while a spinner counts down the remaining time.
pub fn wait(delay: Duration) {
    let pb = new_spinner();
    let start = Instant::now();

    loop {
        let elapsed = start.elapsed();
        if elapsed >= delay {
            break;
        }
        let remaining = delay - elapsed;
        pb.set_message(format!(
            "Vehicles are parked, {} left...",
            format!("{:.1}s", remaining.as_secs_f64()).yellow().bold()
        ));
        thread::sleep(remaining.min(TICK));
    }

    pb.finish_and_clear();
}
