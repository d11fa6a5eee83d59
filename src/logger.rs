use std::{
    collections::HashMap,
    fs::OpenOptions,
    path::PathBuf,
};
use nu_ansi_term::{Color, Style};
use serde::Deserialize;
use termcolor::ColorChoice;
use tracing::{field::Visit, Level};
use tracing_log::NormalizeEvent;
use tracing_subscriber::{
    filter::{FilterFn, LevelFilter},
    fmt::FormatEvent,
    prelude::*,
};

use crate::{prelude::*, args::{Args, ColorWhen}};


#[derive(Debug, confique::Config)]
pub(crate) struct LogConfig {
    /// Specifies what log messages to emit, based on the module path and log
    /// level.
    ///
    /// This is a map where the key specifies a module path prefix, and the
    /// value specifies a minimum log level. For each log message, the entry
    /// with the longest prefix matching the log's module path is chosen. If
    /// no such entry exists, the log is not emitted. Example:
    ///
    ///    [log]
    ///    filters.pizzeria = "trace"
    ///    filters.hyper = "debug"
    #[config(default = { "pizzeria": "debug" })]
    pub(crate) filters: Filters,

    /// If this is set, log messages are also written to this file.
    pub(crate) file: Option<PathBuf>,

    /// If this is set to `false`, log messages are not written to stdout.
    #[config(default = true)]
    pub(crate) stdout: bool,
}

#[derive(Debug, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub(crate) struct Filters(HashMap<String, LevelFilter>);

impl TryFrom<HashMap<String, String>> for Filters {
    type Error = String;
    fn try_from(value: HashMap<String, String>) -> Result<Self, Self::Error> {
        value.into_iter()
            .map(|(target_prefix, level)| {
                let level = parse_level_filter(&level)?;
                Ok((target_prefix, level))
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

fn parse_level_filter(s: &str) -> Result<LevelFilter, String> {
    match s {
        "off" => Ok(LevelFilter::OFF),
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        other => Err(format!("invalid log level '{other}'")),
    }
}

/// Installs our own logger globally. Must only be called once!
pub(crate) fn init(config: &LogConfig, args: &Args) -> Result<()> {
    let filter = {
        let filters = config.filters.0.clone();
        let max_level = filters.values().max().copied().unwrap_or(LevelFilter::OFF);
        let filter = FilterFn::new(move |metadata| {
            // In practice there are only very few entries, so a linear scan
            // is fine. See the config doc comment for the exact semantics.
            filters.iter()
                .filter(|(target_prefix, _)| metadata.target().starts_with(*target_prefix))
                .max_by_key(|(target_prefix, _)| target_prefix.len())
                .map(|(_, level_filter)| metadata.level() <= level_filter)
                .unwrap_or(false)
        });
        filter.with_max_level_hint(max_level)
    };

    macro_rules! subscriber {
        ($writer:expr) => {
            tracing_subscriber::fmt::layer()
                .event_format(EventFormatter(args.stdout_color()))
                .with_writer($writer)
        };
    }

    let stdout_output = if config.stdout {
        Some(subscriber!(std::io::stdout))
    } else {
        None
    };

    let file_output = config.file.as_ref()
        .map(|path| -> Result<std::fs::File> {
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .with_context(|| format!("failed to open/create log file '{}'", path.display()))
        })
        .transpose()?
        .map(|file| subscriber!(file).with_ansi(args.color == ColorWhen::Always));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_output)
        .with(stdout_output)
        .init();

    Ok(())
}

type TracingWriter<'a> = tracing_subscriber::fmt::format::Writer<'a>;

/// Compact single-line format: timestamp, level, target, message, then any
/// remaining fields as `key=value`.
#[derive(Clone, Copy)]
struct EventFormatter(ColorChoice);

impl<S, N> FormatEvent<S, N> for EventFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: TracingWriter<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let use_ansi = self.0 == ColorChoice::Always
            || (writer.has_ansi_escapes() && self.0 != ColorChoice::Never);

        // Logs forwarded from the `log` crate carry dummy metadata; normalize
        // to get the real target and level.
        let normalized_metadata = event.normalized_metadata();
        let metadata = normalized_metadata.as_ref().unwrap_or(event.metadata());

        let dim_style = Style::new().dimmed();
        let level_style = match *metadata.level() {
            Level::ERROR => Style::new().fg(Color::Red).bold(),
            Level::WARN => Style::new().fg(Color::Yellow).bold(),
            Level::INFO => Style::new().fg(Color::Green),
            Level::DEBUG => Style::new().fg(Color::Blue),
            Level::TRACE => Style::new().fg(Color::Magenta),
        };
        let body_style = match *metadata.level() {
            Level::ERROR => Style::new().fg(Color::Red),
            Level::WARN => Style::new().fg(Color::Yellow),
            Level::INFO => Style::new(),
            Level::DEBUG => Style::new().dimmed(),
            Level::TRACE => Style::new().fg(Color::DarkGray),
        };

        macro_rules! wr {
            ($style:expr, $fmt:literal $($args:tt)*) => {{
                with_style(&mut writer, use_ansi, $style, |w| {
                    write!(w, $fmt $($args)*)
                })?;
            }};
        }

        wr!(dim_style, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S.%3f"));
        wr!(level_style, "{:5}", metadata.level());
        wr!(dim_style, " {} >  ", metadata.target());

        struct Collector {
            message: Option<String>,
            fields: Vec<(&'static str, String)>,
        }

        impl Visit for Collector {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                let name = field.name();
                if name == "message" {
                    self.message = Some(format!("{value:?}"));
                } else if !name.starts_with("log.") {
                    self.fields.push((name, format!("{value:?}")));
                }
            }
        }

        let mut collector = Collector { message: None, fields: Vec::new() };
        event.record(&mut collector);

        if let Some(msg) = &collector.message {
            wr!(body_style, "{msg}");
        }
        for (name, value) in &collector.fields {
            wr!(body_style.italic(), " {name}");
            wr!(body_style, "={value}");
        }

        writeln!(writer)
    }
}

fn with_style(
    out: &mut TracingWriter<'_>,
    use_ansi: bool,
    style: Style,
    f: impl FnOnce(&mut TracingWriter<'_>) -> std::fmt::Result,
) -> std::fmt::Result {
    if use_ansi {
        write!(out, "{}", style.prefix())?;
    }
    f(out)?;
    if use_ansi {
        write!(out, "{}", style.suffix())?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use tracing_subscriber::filter::LevelFilter;
    use super::Filters;

    #[test]
    fn filters_parse_valid_levels() {
        let map = HashMap::from([
            ("pizzeria".to_owned(), "trace".to_owned()),
            ("hyper".to_owned(), "warn".to_owned()),
        ]);
        let filters = Filters::try_from(map).unwrap();
        assert_eq!(filters.0["pizzeria"], LevelFilter::TRACE);
        assert_eq!(filters.0["hyper"], LevelFilter::WARN);
    }

    #[test]
    fn filters_reject_unknown_level() {
        let map = HashMap::from([("pizzeria".to_owned(), "loud".to_owned())]);
        assert!(Filters::try_from(map).is_err());
    }
}
