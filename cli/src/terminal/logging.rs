use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "warn";

/// Prefixes each event with a level marker. Debug output also names the module
/// that emitted it.
pub struct Vendor6Formatter;

fn level_marker(level: Level) -> ColoredString {
    match level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        _ => "[?]".blue(),
    }
}

impl<S, N> FormatEvent<S, N> for Vendor6Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{} ", level_marker(*meta.level()))?;

        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", format!("{}:", meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the stderr subscriber. Verbosity follows `RUST_LOG`.
pub fn init_logging() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(Vendor6Formatter)
        .try_init();
}
