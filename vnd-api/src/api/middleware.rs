use axum::http::{Method, header};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    tower_http::trace::DefaultOnRequest,
    DefaultOnResponse,
>;

/// Request spans at INFO with the status logged on completion, and CORS
/// limited to the methods the vendor routes answer.
pub fn create_middleware_stack()
-> ServiceBuilder<Stack<CorsLayer, Stack<HttpTraceLayer, Identity>>> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    ServiceBuilder::new().layer(trace).layer(cors)
}
