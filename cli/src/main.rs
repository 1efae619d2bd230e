mod commands;
mod terminal;

use commands::{CommandLine, resolve};
use terminal::{logging, spinner};
use vendor6_common::config::Config;
use vendor6_core::source::{self, ProgressCallback};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.to_config();

    let progress: ProgressCallback = Box::new(spinner::report_download_progress);
    let registry = source::open_registry(&cfg, Some(progress)).await;
    spinner::finish();
    let registry = registry?;

    if commands.addresses.is_empty() {
        resolve::interactive(&registry, &cfg)
    } else {
        resolve::batch(&commands.addresses, &registry, &cfg)
    }
}
