use std::fmt::Write as _;

/// Fire-and-forget usage-event sink.
///
/// Implementations must never block or fail the search path; the engine
/// calls `record` synchronously at stage boundaries (adapter call
/// start/end, cache hit/miss, rate-limit reject) and ignores the result.
pub trait TelemetrySink: Send + Sync {
    /// Record one usage event with its attributes.
    fn record(&self, event: &str, attrs: &[(&str, String)]);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn record(&self, _event: &str, _attrs: &[(&str, String)]) {}
}

/// Sink that emits events through `tracing` at info level under the
/// `valigia::telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&self, event: &str, attrs: &[(&str, String)]) {
        let mut rendered = String::new();
        for (k, v) in attrs {
            let _ = write!(rendered, " {k}={v}");
        }
        tracing::info!(target: "valigia::telemetry", event, attrs = %rendered.trim_start());
    }
}
