use std::fmt::Write as _;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::filter::{FilterExt, filter_fn};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FormatEvent, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::terminal::print::PRINT_TARGET;

pub struct ReconFormatter;

impl<S, N> FormatEvent<S, N> for ReconFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Collects the `raw_msg` field of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            let _ = write!(self.0, "{:?}", value);
        }
    }
}

/// Filter directive for a `-v` count, unless `RUST_LOG` says otherwise.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info,tower_http=warn",
        1 => "debug,hyper=info,tower_http=debug",
        _ => "trace",
    }
}

fn is_print(meta: &Metadata<'_>) -> bool {
    meta.target() == PRINT_TARGET
}

/// Command output goes to `out` regardless of the filter; diagnostics go to `err`.
fn subscriber<O, E>(filter: EnvFilter, out: O, err: E) -> impl Subscriber + Send + Sync
where
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let results = tracing_subscriber::fmt::layer()
        .event_format(ReconFormatter)
        .with_writer(out)
        .with_filter(filter_fn(is_print));

    let logs = tracing_subscriber::fmt::layer()
        .event_format(ReconFormatter)
        .with_writer(err)
        .with_filter(filter.and(filter_fn(|meta| !is_print(meta))));

    tracing_subscriber::registry().with(results).with(logs)
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = subscriber(filter, std::io::stdout, std::io::stderr).try_init();
}
