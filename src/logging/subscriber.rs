//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Tracing target for stage headers.
pub(super) const STAGE_TARGET: &str = "nexus::stage";

/// Tracing target for dry-run messages.
pub(super) const DRY_RUN_TARGET: &str = "nexus::dry_run";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::Layer`] that appends all events to a log file
/// with timestamps and ANSI codes stripped.
#[derive(Debug)]
pub struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open (or create) the per-command log file under the cache directory.
    ///
    /// Returns `None` if the cache directory cannot be created or the file
    /// cannot be opened.
    pub(super) fn for_command(command: &str) -> Option<Self> {
        Self::at(&log_file_path(command)?, command)
    }

    /// Truncate `path`, record which command and build started the run, and
    /// return a layer appending to it.
    ///
    /// Returns `None` if the file cannot be written.
    #[must_use]
    pub fn at(path: &Path, command: &str) -> Option<Self> {
        let header = format!(
            "# nexus {} {command} started {} UTC\n",
            crate::commands::version::version(),
            format_utc_datetime(),
        );
        fs::write(path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

/// Fixed-width tag naming the kind of a log file line.
fn file_tag(level: tracing::Level, target: &str) -> &'static str {
    match (level, target) {
        (tracing::Level::INFO, STAGE_TARGET) => "stage",
        (tracing::Level::INFO, DRY_RUN_TARGET) => "dry-run",
        (tracing::Level::ERROR, _) => "error",
        (tracing::Level::WARN, _) => "warn",
        (tracing::Level::DEBUG | tracing::Level::TRACE, _) => "debug",
        _ => "info",
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let tag = file_tag(*metadata.level(), metadata.target());

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = strip_ansi(&extractor.message);

        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{} {tag:<7} {msg}", format_utc_time()).ok();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits nexus-style
/// console output.
struct NexusFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for NexusFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == STAGE_TARGET => {
                writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO if target == DRY_RUN_TARGET => {
                writeln!(writer, "  \x1b[33m[DRY RUN]\x1b[0m {msg}")
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console output goes to stdout (info and below) and stderr (warnings and
/// errors); `debug` lowers the console filter to `DEBUG`. Every event at
/// `DEBUG` and above is also appended to `$XDG_CACHE_HOME/nexus/<command>.log`.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(debug: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(NexusFormatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = FileLayer::for_command(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
