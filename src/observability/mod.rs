//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → basket-otlp.json
//! ```
//!
//! Traces land in `~/.local/share/zellij/basket/basket-otlp.json`. The file
//! rotates at 10 MiB and keeps three timestamped backups. Verbosity comes
//! from the `trace_level` plugin option and defaults to `info`.
//!
//! ```rust,no_run
//! use basket::observability::init_tracing;
//! use basket::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin loaded");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
