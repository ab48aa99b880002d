//! Subscriber setup: `tracing` macros → OpenTelemetry layer → trace file.

use super::tracer::{self, SCOPE_NAME};
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "basket-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter directive comes from `config.trace_level` (default `info`).
/// Tracing stays off when the data directory cannot be created, and a second
/// call is a no-op because the global subscriber is already set.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
