//! Tracing bridge to the browser console.
//!
//! # Design
//! - A `tracing_subscriber` layer renders each event to one line and hands it
//!   to a plain function sink, so formatting is testable without a browser.
//! - The wasm build installs the layer once with a max-level filter.

use std::fmt::{self, Write as _};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Destination for rendered log lines.
pub type ConsoleSink = fn(Level, &str);

/// Errors raised while installing logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Installing the tracing subscriber failed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Layer forwarding events to a [`ConsoleSink`].
#[derive(Clone, Copy, Debug)]
pub struct ConsoleLayer {
    sink: ConsoleSink,
}

impl ConsoleLayer {
    /// Layer writing to `sink`.
    #[must_use]
    pub const fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format_line(*meta.level(), meta.target(), &visitor.message, &visitor.fields);
        (self.sink)(*meta.level(), &line);
    }
}

/// Render `LEVEL target: message key=value ...`.
#[must_use]
pub fn format_line(level: Level, target: &str, message: &str, fields: &[(String, String)]) -> String {
    let mut line = format!("{level} {target}: {message}");
    for (key, value) in fields {
        let _ = write!(line, " {key}={value}");
    }
    line
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

/// Install the console layer as the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: Level) -> Result<(), TelemetryError> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer::new(browser_sink))
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(target_arch = "wasm32")]
fn browser_sink(level: Level, line: &str) {
    match level {
        Level::ERROR => gloo::console::error!(line),
        Level::WARN => gloo::console::warn!(line),
        Level::DEBUG | Level::TRACE => gloo::console::debug!(line),
        Level::INFO => gloo::console::log!(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tracing_subscriber::layer::SubscriberExt;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn events_are_rendered_with_fields() {
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(capture));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "board", generation = 3, "dropping stale list response");
            tracing::info!(target: "board", user = "u1", "signed in");
        });
        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::WARN);
        assert_eq!(lines[0].1, "WARN board: dropping stale list response generation=3");
        assert_eq!(lines[1].1, "INFO board: signed in user=u1");
    }

    #[test]
    fn format_line_without_fields() {
        assert_eq!(format_line(Level::ERROR, "t", "boom", &[]), "ERROR t: boom");
    }
}
