use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

use crate::terminal::colors;

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// The spinner only appears once a download actually reports progress.
fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new_spinner();
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
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn report_download_progress(bytes: u64) {
    get_spinner().set_message(
        format!(
            "Downloading OUI registry... {}",
            HumanBytes(bytes).to_string().green().bold()
        )
        .color(colors::TEXT_DEFAULT)
        .to_string(),
    );
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}
