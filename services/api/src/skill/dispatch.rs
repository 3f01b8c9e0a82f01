//! Request dispatch.
//!
//! A `Skill` is an ordered list of request handlers, a list of exception
//! handlers, and two lists of interceptors. For every turn:
//!
//! 1. Request interceptors see the incoming envelope.
//! 2. The first request handler whose `can_handle` returns true produces the response.
//! 3. If it fails, or nobody accepted the request, the first exception handler
//!    that accepts the error produces the response instead.
//! 4. Response interceptors see the outgoing response.

use super::{error::SkillError, input::HandlerInput};
use crate::models::{RESPONSE_VERSION, RequestEnvelope, Response, ResponseEnvelope};
use async_trait::async_trait;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// Matches `LaunchRequest`, `SessionEndedRequest`, ...
pub fn is_request_type(input: &HandlerInput, request_type: &str) -> bool {
    input.request().request_type == request_type
}

/// Matches an `IntentRequest` for the named intent.
pub fn is_intent_name(input: &HandlerInput, name: &str) -> bool {
    is_request_type(input, "IntentRequest") && input.intent().is_some_and(|i| i.name == name)
}

#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Used in logs.
    fn name(&self) -> &'static str;

    fn can_handle(&self, input: &HandlerInput) -> bool;

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError>;
}

pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput, error: &SkillError) -> bool;

    fn handle(&self, input: &mut HandlerInput, error: &SkillError) -> Response;
}

pub trait RequestInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput);
}

pub trait ResponseInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput, response: &Response);
}

/// Collects handlers in registration order.
#[derive(Default)]
pub struct SkillBuilder {
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl SkillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Box::new(handler));
        self
    }

    pub fn add_exception_handler(mut self, handler: impl ExceptionHandler + 'static) -> Self {
        self.exception_handlers.push(Box::new(handler));
        self
    }

    pub fn add_global_request_interceptor(
        mut self,
        interceptor: impl RequestInterceptor + 'static,
    ) -> Self {
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn add_global_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            request_handlers: self.request_handlers,
            exception_handlers: self.exception_handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        }
    }
}

pub struct Skill {
    request_handlers: Vec<Box<dyn RequestHandler>>,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl Skill {
    /// Handles one turn with a freshly seeded RNG.
    pub async fn invoke(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, SkillError> {
        self.invoke_with_rng(envelope, StdRng::from_os_rng()).await
    }

    /// Handles one turn. Fails only when a handler error is not claimed by
    /// any exception handler.
    #[instrument(
        name = "skill_request",
        skip_all,
        fields(
            request_id = envelope.request.request_id.as_deref().unwrap_or_default(),
            request_type = %envelope.request.request_type,
        )
    )]
    pub async fn invoke_with_rng(
        &self,
        envelope: RequestEnvelope,
        rng: StdRng,
    ) -> Result<ResponseEnvelope, SkillError> {
        let mut input = HandlerInput::new(envelope, rng);

        for interceptor in &self.request_interceptors {
            interceptor.process(&input);
        }

        let outcome = match self.request_handlers.iter().find(|h| h.can_handle(&input)) {
            Some(handler) => {
                debug!(handler = handler.name(), "Dispatching request");
                handler.handle(&mut input).await
            }
            None => Err(SkillError::NoHandler {
                request_type: input.request().request_type.clone(),
                intent: input.intent().map(|i| i.name.clone()),
            }),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                match self
                    .exception_handlers
                    .iter()
                    .find(|h| h.can_handle(&input, &err))
                {
                    Some(handler) => {
                        // Drop whatever the failed handler had started building.
                        input.response_builder.response();
                        handler.handle(&mut input, &err)
                    }
                    None => return Err(err),
                }
            }
        };

        for interceptor in &self.response_interceptors {
            interceptor.process(&input, &response);
        }

        Ok(ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: input.session_attributes,
            response,
        })
    }
}
