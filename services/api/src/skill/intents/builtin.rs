//! Handlers for the platform's built-in intents.

use crate::{
    models::Response,
    skill::{
        SkillError,
        dispatch::{RequestHandler, is_intent_name, is_request_type},
        input::HandlerInput,
    },
};
use async_trait::async_trait;
use buybitcoin_core::phrases;
use tracing::info;

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const REPEAT_INTENT: &str = "AMAZON.RepeatIntent";

/// Explains the two questions and remembers the explanation for "repeat".
pub struct HelpIntentHandler;

#[async_trait]
impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "HelpIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_intent_name(input, HELP_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In HelpIntentHandler");

        input.set_last_speech(phrases::HELP);
        Ok(input
            .response_builder
            .speak(phrases::HELP)
            .ask(phrases::HELP)
            .response())
    }
}

pub struct FallbackIntentHandler;

#[async_trait]
impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &'static str {
        "FallbackIntentHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_intent_name(input, FALLBACK_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In FallbackIntentHandler");

        let speech = input.pick(phrases::FALLBACKS);
        Ok(input.response_builder.speak(speech).ask(speech).response())
    }
}

/// Says goodbye on stop, cancel, or when the platform ends the session.
pub struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "SessionEndedHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_request_type(input, "SessionEndedRequest")
            || is_intent_name(input, STOP_INTENT)
            || is_intent_name(input, CANCEL_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!(reason = ?input.request().reason, "In SessionEndedHandler");

        let speech = input.pick(phrases::GOODBYES);
        Ok(input
            .response_builder
            .speak(speech)
            .set_should_end_session(true)
            .response())
    }
}

pub struct RepeatHandler;

#[async_trait]
impl RequestHandler for RepeatHandler {
    fn name(&self) -> &'static str {
        "RepeatHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_intent_name(input, REPEAT_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In RepeatHandler");

        match input.last_speech().map(str::to_string) {
            Some(speech) => Ok(input.response_builder.speak(speech).response()),
            None => Ok(input
                .response_builder
                .speak(phrases::NOTHING_TO_REPEAT)
                .ask(phrases::NOTHING_TO_REPEAT)
                .response()),
        }
    }
}
