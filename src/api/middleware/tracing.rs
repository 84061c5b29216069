//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request (method, path, HTTP version) and logs the
/// response status with latency in milliseconds.
///
/// ```text
/// INFO request{method=GET uri=/abc123 version=HTTP/1.1}: finished processing request latency=2 ms status=302
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
