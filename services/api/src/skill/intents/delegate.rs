use crate::{
    models::{Directive, DialogState, Response},
    skill::{
        SkillError,
        dispatch::{RequestHandler, is_intent_name},
        input::HandlerInput,
    },
};
use async_trait::async_trait;
use tracing::info;

/// Lets the platform's dialog model keep eliciting slots until the intent is
/// complete. Registered ahead of the handler that answers the same intent.
pub struct InProgressDelegateHandler {
    intent_name: &'static str,
}

impl InProgressDelegateHandler {
    pub fn new(intent_name: &'static str) -> Self {
        Self { intent_name }
    }
}

#[async_trait]
impl RequestHandler for InProgressDelegateHandler {
    fn name(&self) -> &'static str {
        "InProgressDelegateHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        // An envelope without a dialog state comes from a skill with no dialog
        // model, where the platform would reject a delegate. Answer it directly.
        is_intent_name(input, self.intent_name)
            && matches!(
                input.request().dialog_state,
                Some(DialogState::Started | DialogState::InProgress)
            )
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!(intent = self.intent_name, "In InProgressDelegateHandler");

        let current_intent = input.intent().cloned();
        Ok(input
            .response_builder
            .add_directive(Directive::DialogDelegate {
                updated_intent: current_intent,
            })
            .response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::test_support::{TestEnvelope, seeded_rng};

    fn accepts(envelope: TestEnvelope) -> bool {
        let input = HandlerInput::new(envelope.build(), seeded_rng());
        InProgressDelegateHandler::new("HowMuchIsCryptoInFiat").can_handle(&input)
    }

    #[test]
    fn test_only_unfinished_dialogs_are_delegated() {
        let intent = || TestEnvelope::intent("HowMuchIsCryptoInFiat");

        assert!(accepts(intent().dialog_state("STARTED")));
        assert!(accepts(intent().dialog_state("IN_PROGRESS")));
        assert!(!accepts(intent()));
        assert!(!accepts(intent().without_dialog_state()));
        assert!(!accepts(intent().dialog_state("SOMETHING_NEW")));
        assert!(!accepts(
            TestEnvelope::intent("HowManyCryptoCanIBuy").dialog_state("IN_PROGRESS")
        ));
    }
}
