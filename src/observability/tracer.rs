//! Tracer provider backed by a local OTLP JSON file.
//!
//! Plugins run sandboxed without network access, so spans are appended to a
//! rotating file rather than shipped to a collector.

use super::file_writer::RotatingFileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "Basket";

/// Writes each exported batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: RotatingFileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: RotatingFileWriter::new(file_path),
            formatter: SpanFormatter::new(resource, SCOPE_NAME),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports every finished span to `file_path`
/// immediately (simple, non-batched export).
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    fn resource() -> Resource {
        Resource::new(vec![KeyValue::new("service.name", "Basket")])
    }

    #[test]
    fn empty_batch_writes_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basket-otlp.json");
        let exporter = FileSpanExporter::new(path.clone(), resource());

        exporter.write_batch(&[]).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        let doc: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
    }

    #[test]
    fn refuses_export_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basket-otlp.json");
        let mut exporter = FileSpanExporter::new(path.clone(), resource());

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!path.exists());
    }
}
