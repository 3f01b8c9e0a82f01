use crate::{
    models::Response,
    skill::{ExceptionHandler, HandlerInput, SkillError},
};
use buybitcoin_core::phrases;
use tracing::error;

/// Turns every failure into an apology and keeps the session open so the
/// user can try again.
pub struct CatchAllExceptionHandler;

impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, input: &mut HandlerInput, err: &SkillError) -> Response {
        error!(error = ?err, "Request failed: {err}");

        let speech = input.pick(phrases::APOLOGIES);
        input.response_builder.speak(speech).ask(speech).response()
    }
}
