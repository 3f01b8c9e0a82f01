//! Per-turn handler input.

use super::response::ResponseBuilder;
use crate::models::{Intent, Request, RequestEnvelope};
use buybitcoin_core::phrases;
use rand::rngs::StdRng;
use serde_json::{Map, Value};

/// Session attribute holding the last thing worth repeating.
pub const LAST_SPEECH: &str = "lastSpeech";

/// Everything a handler gets to look at, and the builder it answers through.
///
/// Session attributes start as a copy of what the platform sent and are
/// echoed back in the response envelope, which is how they survive to the
/// next turn.
pub struct HandlerInput {
    pub request_envelope: RequestEnvelope,
    pub session_attributes: Map<String, Value>,
    pub response_builder: ResponseBuilder,
    rng: StdRng,
}

impl HandlerInput {
    pub fn new(request_envelope: RequestEnvelope, rng: StdRng) -> Self {
        let session_attributes = request_envelope
            .session
            .as_ref()
            .map(|s| s.attributes.clone())
            .unwrap_or_default();
        Self {
            request_envelope,
            session_attributes,
            response_builder: ResponseBuilder::default(),
            rng,
        }
    }

    pub fn request(&self) -> &Request {
        &self.request_envelope.request
    }

    pub fn intent(&self) -> Option<&Intent> {
        self.request().intent.as_ref()
    }

    pub fn supports_apl(&self) -> bool {
        self.request_envelope
            .context
            .system
            .device
            .supported_interfaces
            .supports_apl()
    }

    /// Picks a random phrase from `table` using this turn's RNG.
    pub fn pick(&mut self, table: &[&'static str]) -> &'static str {
        phrases::pick(table, &mut self.rng)
    }

    pub fn last_speech(&self) -> Option<&str> {
        self.session_attributes.get(LAST_SPEECH).and_then(Value::as_str)
    }

    pub fn set_last_speech(&mut self, speech: impl Into<String>) {
        self.session_attributes
            .insert(LAST_SPEECH.to_string(), Value::String(speech.into()));
    }
}
