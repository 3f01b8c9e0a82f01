//! Envelope fixtures shared by the skill tests.

use crate::models::RequestEnvelope;
use rand::{SeedableRng, rngs::StdRng};
use serde_json::{Value, json};

pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Builds request envelopes the way the platform would send them.
pub(crate) struct TestEnvelope {
    value: Value,
}

impl TestEnvelope {
    fn with_request(request: Value) -> Self {
        Self {
            value: json!({
                "version": "1.0",
                "session": {
                    "new": false,
                    "sessionId": "amzn1.echo-api.session.test",
                    "application": { "applicationId": "amzn1.ask.skill.test" },
                    "attributes": {}
                },
                "context": {
                    "System": {
                        "application": { "applicationId": "amzn1.ask.skill.test" },
                        "device": { "deviceId": "device-test", "supportedInterfaces": {} }
                    }
                },
                "request": request
            }),
        }
    }

    pub(crate) fn launch() -> Self {
        Self::with_request(json!({
            "type": "LaunchRequest",
            "requestId": "amzn1.echo-api.request.launch",
            "locale": "en-US"
        }))
    }

    pub(crate) fn session_ended() -> Self {
        Self::with_request(json!({
            "type": "SessionEndedRequest",
            "requestId": "amzn1.echo-api.request.ended",
            "reason": "USER_INITIATED"
        }))
    }

    /// An intent request whose dialog is already `COMPLETED`.
    pub(crate) fn intent(name: &str) -> Self {
        Self::with_request(json!({
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.intent",
            "locale": "en-US",
            "dialogState": "COMPLETED",
            "intent": { "name": name, "confirmationStatus": "NONE", "slots": {} }
        }))
    }

    pub(crate) fn dialog_state(mut self, state: &str) -> Self {
        self.value["request"]["dialogState"] = json!(state);
        self
    }

    pub(crate) fn without_dialog_state(mut self) -> Self {
        if let Some(request) = self.value["request"].as_object_mut() {
            request.remove("dialogState");
        }
        self
    }

    /// A slot the platform filled but could not resolve against a catalog.
    pub(crate) fn slot(mut self, name: &str, raw: &str) -> Self {
        self.value["request"]["intent"]["slots"][name] = json!({ "name": name, "value": raw });
        self
    }

    /// A slot that resolved to a canonical catalog value.
    pub(crate) fn resolved_slot(mut self, name: &str, raw: &str, canonical: &str) -> Self {
        self.value["request"]["intent"]["slots"][name] = json!({
            "name": name,
            "value": raw,
            "resolutions": {
                "resolutionsPerAuthority": [{
                    "authority": format!("amzn1.er-authority.echo-sdk.test.{name}"),
                    "status": { "code": "ER_SUCCESS_MATCH" },
                    "values": [{ "value": { "name": canonical, "id": canonical.to_lowercase() } }]
                }]
            }
        });
        self
    }

    pub(crate) fn with_apl(mut self) -> Self {
        self.value["context"]["System"]["device"]["supportedInterfaces"]
            ["Alexa.Presentation.APL"] = json!({ "runtime": { "maxVersion": "1.1" } });
        self
    }

    pub(crate) fn attribute(mut self, key: &str, value: Value) -> Self {
        self.value["session"]["attributes"][key] = value;
        self
    }

    pub(crate) fn application_id(mut self, id: &str) -> Self {
        self.value["session"]["application"]["applicationId"] = json!(id);
        self.value["context"]["System"]["application"]["applicationId"] = json!(id);
        self
    }

    pub(crate) fn json(self) -> Value {
        self.value
    }

    pub(crate) fn build(self) -> RequestEnvelope {
        serde_json::from_value(self.value).expect("test envelope should deserialize")
    }
}
