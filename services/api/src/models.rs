//! Request and Response Envelopes
//!
//! This module defines the JSON documents exchanged with the voice platform.
//! Only the fields the skill reads or writes are modelled; unknown fields are
//! ignored on the way in. Every type derives `ToSchema` so the endpoint shows
//! up with a complete schema in the generated OpenAPI document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use utoipa::ToSchema;

pub const RESPONSE_VERSION: &str = "1.0";

fn default_version() -> String {
    RESPONSE_VERSION.to_string()
}

// --- Inbound ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

impl RequestEnvelope {
    /// The skill id this request was addressed to, from the session or, for
    /// out-of-session requests, from the context.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or(self.context.system.application.as_ref())
            .map(|a| a.application_id.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    /// Attributes the platform stored for this session on the previous turn.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default)]
    pub device: Device,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default)]
    pub supported_interfaces: SupportedInterfaces,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SupportedInterfaces {
    #[serde(
        rename = "Alexa.Presentation.APL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Object)]
    pub apl: Option<Value>,
}

impl SupportedInterfaces {
    /// Whether the device can render an APL visual document.
    pub fn supports_apl(&self) -> bool {
        self.apl.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// `LaunchRequest`, `IntentRequest`, `SessionEndedRequest`, ...
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<DialogState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Why the session ended, on `SessionEndedRequest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    Started,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    /// What the user actually said, if the slot was filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<ResolutionAuthority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionAuthority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    pub status: ResolutionStatus,
    #[serde(default)]
    pub values: Vec<ResolutionValueWrapper>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolutionStatus {
    pub code: ResolutionCode,
}

/// Outcome of entity resolution for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResolutionCode {
    #[serde(rename = "ER_SUCCESS_MATCH")]
    SuccessMatch,
    #[serde(rename = "ER_SUCCESS_NO_MATCH")]
    SuccessNoMatch,
    #[serde(rename = "ER_ERROR_TIMEOUT")]
    ErrorTimeout,
    #[serde(rename = "ER_ERROR_EXCEPTION")]
    ErrorException,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolutionValueWrapper {
    pub value: ResolutionValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolutionValue {
    /// The canonical value the slot resolved to.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// --- Outbound ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Persisted by the platform and sent back on the next turn.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub session_attributes: Map<String, Value>,
    pub response: Response,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Wraps `speech` in a `<speak>` element unless it already is one.
    pub fn ssml(speech: impl Into<String>) -> Self {
        let speech = speech.into();
        let ssml = if speech.trim_start().starts_with("<speak>") {
            speech
        } else {
            format!("<speak>{speech}</speak>")
        };
        OutputSpeech::Ssml { ssml }
    }

    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum Card {
    Standard {
        title: String,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<CardImage>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum Directive {
    /// Hands slot elicitation back to the platform's dialog model.
    #[serde(rename = "Dialog.Delegate")]
    DialogDelegate {
        #[serde(
            rename = "updatedIntent",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        updated_intent: Option<Intent>,
    },
    #[serde(rename = "Alexa.Presentation.APL.RenderDocument")]
    RenderDocument {
        token: String,
        #[schema(value_type = Object)]
        document: Value,
        #[schema(value_type = Object)]
        datasources: Value,
    },
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intent_request_json() -> Value {
        json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.1",
                "application": { "applicationId": "amzn1.ask.skill.buybitcoin" },
                "attributes": { "lastSpeech": "Hello again" }
            },
            "context": {
                "System": {
                    "application": { "applicationId": "amzn1.ask.skill.buybitcoin" },
                    "device": {
                        "deviceId": "device-1",
                        "supportedInterfaces": {
                            "Alexa.Presentation.APL": { "runtime": { "maxVersion": "1.1" } }
                        }
                    }
                }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "locale": "en-US",
                "dialogState": "COMPLETED",
                "intent": {
                    "name": "HowMuchIsCryptoInFiat",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "fiat": {
                            "name": "fiat",
                            "value": "dollars",
                            "resolutions": {
                                "resolutionsPerAuthority": [{
                                    "authority": "amzn1.er-authority.fiat",
                                    "status": { "code": "ER_SUCCESS_MATCH" },
                                    "values": [{ "value": { "name": "USD", "id": "usd" } }]
                                }]
                            }
                        },
                        "integer": { "name": "integer", "value": "2" },
                        "decimal": { "name": "decimal" }
                    }
                }
            }
        })
    }

    #[test]
    fn test_request_envelope_deserialization() {
        let envelope: RequestEnvelope = serde_json::from_value(intent_request_json()).unwrap();

        assert_eq!(envelope.request.request_type, "IntentRequest");
        assert_eq!(envelope.request.dialog_state, Some(DialogState::Completed));
        assert!(envelope.context.system.device.supported_interfaces.supports_apl());
        assert_eq!(envelope.application_id(), Some("amzn1.ask.skill.buybitcoin"));

        let session = envelope.session.as_ref().unwrap();
        assert_eq!(session.attributes["lastSpeech"], "Hello again");

        let intent = envelope.request.intent.as_ref().unwrap();
        assert_eq!(intent.name, "HowMuchIsCryptoInFiat");
        assert_eq!(intent.slots["integer"].value.as_deref(), Some("2"));
        assert_eq!(intent.slots["decimal"].value, None);

        let fiat = &intent.slots["fiat"];
        let authority = &fiat.resolutions.as_ref().unwrap().resolutions_per_authority[0];
        assert_eq!(authority.status.code, ResolutionCode::SuccessMatch);
        assert_eq!(authority.values[0].value.name, "USD");
    }

    #[test]
    fn test_minimal_launch_request() {
        let json = r#"{"request": {"type": "LaunchRequest"}}"#;
        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.version, "1.0");
        assert!(envelope.session.is_none());
        assert!(!envelope.context.system.device.supported_interfaces.supports_apl());
        assert_eq!(envelope.application_id(), None);
    }

    #[test]
    fn test_request_missing_type_is_rejected() {
        let json = r#"{"request": {"requestId": "r-1"}}"#;
        let result: Result<RequestEnvelope, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_resolution_code() {
        let status: ResolutionStatus =
            serde_json::from_str(r#"{"code": "ER_SOMETHING_NEW"}"#).unwrap();
        assert_eq!(status.code, ResolutionCode::Unknown);
    }

    #[test]
    fn test_unknown_dialog_state() {
        let request: Request = serde_json::from_value(json!({
            "type": "IntentRequest",
            "dialogState": "SOMETHING_NEW"
        }))
        .unwrap();
        assert_eq!(request.dialog_state, Some(DialogState::Unknown));
    }

    #[test]
    fn test_output_speech_wraps_ssml_once() {
        assert_eq!(OutputSpeech::ssml("Hi").text(), "<speak>Hi</speak>");
        assert_eq!(
            OutputSpeech::ssml("<speak>Hi</speak>").text(),
            "<speak>Hi</speak>"
        );
    }

    #[test]
    fn test_response_envelope_serialization() {
        let envelope = ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: Map::new(),
            response: Response {
                output_speech: Some(OutputSpeech::ssml("Hi")),
                reprompt: Some(Reprompt {
                    output_speech: OutputSpeech::ssml("Still there?"),
                }),
                card: Some(Card::Standard {
                    title: "Hi".to_string(),
                    text: String::new(),
                    image: Some(CardImage {
                        small_image_url: "https://example.com/s.png".to_string(),
                        large_image_url: "https://example.com/l.png".to_string(),
                    }),
                }),
                directives: vec![],
                should_end_session: Some(false),
            },
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "SSML", "ssml": "<speak>Hi</speak>" },
                    "reprompt": {
                        "outputSpeech": { "type": "SSML", "ssml": "<speak>Still there?</speak>" }
                    },
                    "card": {
                        "type": "Standard",
                        "title": "Hi",
                        "text": "",
                        "image": {
                            "smallImageUrl": "https://example.com/s.png",
                            "largeImageUrl": "https://example.com/l.png"
                        }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_directive_serialization() {
        let delegate = Directive::DialogDelegate {
            updated_intent: Some(Intent {
                name: "HowMuchIsCryptoInFiat".to_string(),
                confirmation_status: None,
                slots: HashMap::new(),
            }),
        };
        let value = serde_json::to_value(&delegate).unwrap();
        assert_eq!(value["type"], "Dialog.Delegate");
        assert_eq!(value["updatedIntent"]["name"], "HowMuchIsCryptoInFiat");

        let render = Directive::RenderDocument {
            token: "pagerToken".to_string(),
            document: json!({ "type": "APL" }),
            datasources: json!({}),
        };
        let value = serde_json::to_value(&render).unwrap();
        assert_eq!(value["type"], "Alexa.Presentation.APL.RenderDocument");
        assert_eq!(value["token"], "pagerToken");
        assert_eq!(value["document"]["type"], "APL");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "Request addressed to another skill".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"Request addressed to another skill"}"#);
    }
}
