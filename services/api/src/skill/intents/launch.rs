use crate::{
    models::Response,
    skill::{
        SkillError,
        apl::{AplDocuments, LAUNCH_LOGO_URL, VisualContent, attach_visual, hint_text},
        dispatch::{RequestHandler, is_request_type},
        input::HandlerInput,
    },
};
use async_trait::async_trait;
use buybitcoin_core::{phrases, price::FiatCurrency};
use tracing::info;

/// Greets the user when the skill is opened without a question.
pub struct LaunchRequestHandler {
    documents: AplDocuments,
}

impl LaunchRequestHandler {
    pub fn new(documents: AplDocuments) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "LaunchRequestHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_request_type(input, "LaunchRequest")
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In LaunchRequestHandler");

        let speech = input.pick(phrases::WELCOMES);
        let reprompt = input.pick(phrases::REPROMPTS);
        input.response_builder.speak(speech).ask(reprompt);

        let content = VisualContent {
            primary_text: "Hi".to_string(),
            secondary_text: String::new(),
            logo_url: LAUNCH_LOGO_URL,
            hint_text: hint_text(FiatCurrency::Usd),
        };
        attach_visual(input, &self.documents, &content).await?;

        Ok(input.response_builder.response())
    }
}
