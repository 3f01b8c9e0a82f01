//! Outbound response builder.

use crate::models::{Card, Directive, OutputSpeech, Reprompt, Response};

/// Accumulates one `Response`. Calls chain, and `response()` hands the result
/// over and leaves the builder empty.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn speak(&mut self, speech: impl Into<String>) -> &mut Self {
        self.response.output_speech = Some(OutputSpeech::ssml(speech));
        self
    }

    /// Sets the reprompt and keeps the session open for the user's answer.
    pub fn ask(&mut self, reprompt: impl Into<String>) -> &mut Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(reprompt),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn set_card(&mut self, card: Card) -> &mut Self {
        self.response.card = Some(card);
        self
    }

    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        self.response.directives.push(directive);
        self
    }

    pub fn set_should_end_session(&mut self, should_end_session: bool) -> &mut Self {
        self.response.should_end_session = Some(should_end_session);
        self
    }

    pub fn response(&mut self) -> Response {
        std::mem::take(&mut self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_and_ask() {
        let mut builder = ResponseBuilder::default();
        let response = builder.speak("Hello").ask("Anyone there?").response();

        assert_eq!(
            response.output_speech.as_ref().map(OutputSpeech::text),
            Some("<speak>Hello</speak>")
        );
        assert_eq!(
            response.reprompt.map(|r| r.output_speech.text().to_string()),
            Some("<speak>Anyone there?</speak>".to_string())
        );
        assert_eq!(response.should_end_session, Some(false));
    }

    #[test]
    fn test_speak_only_leaves_session_flag_unset() {
        let mut builder = ResponseBuilder::default();
        let response = builder.speak("Hello").response();
        assert!(response.reprompt.is_none());
        assert_eq!(response.should_end_session, None);
    }

    #[test]
    fn test_response_resets_builder() {
        let mut builder = ResponseBuilder::default();
        builder.speak("Bye").set_should_end_session(true);

        let first = builder.response();
        assert_eq!(first.should_end_session, Some(true));

        let second = builder.response();
        assert_eq!(second, Response::default());
    }

    #[test]
    fn test_directives_accumulate() {
        let mut builder = ResponseBuilder::default();
        let response = builder
            .add_directive(Directive::DialogDelegate {
                updated_intent: None,
            })
            .add_directive(Directive::DialogDelegate {
                updated_intent: None,
            })
            .response();
        assert_eq!(response.directives.len(), 2);
    }
}
