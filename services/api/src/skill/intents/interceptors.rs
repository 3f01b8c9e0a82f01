use crate::{
    models::Response,
    skill::{HandlerInput, RequestInterceptor, ResponseInterceptor},
};
use tracing::info;

/// Logs every incoming request envelope.
pub struct RequestLogger;

impl RequestInterceptor for RequestLogger {
    fn process(&self, input: &HandlerInput) {
        info!(envelope = ?input.request_envelope, "Request Envelope");
    }
}

/// Logs every outgoing response.
pub struct ResponseLogger;

impl ResponseInterceptor for ResponseLogger {
    fn process(&self, _input: &HandlerInput, response: &Response) {
        info!(?response, "Response");
    }
}
