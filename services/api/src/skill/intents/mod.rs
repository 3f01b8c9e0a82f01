//! Concrete handlers and the order they are registered in.

mod builtin;
mod conversion;
mod delegate;
mod exceptions;
mod interceptors;
mod launch;

pub use builtin::{
    CANCEL_INTENT, FALLBACK_INTENT, FallbackIntentHandler, HELP_INTENT, HelpIntentHandler,
    REPEAT_INTENT, RepeatHandler, STOP_INTENT, SessionEndedHandler,
};
pub use conversion::{
    HOW_MANY_INTENT, HOW_MUCH_INTENT, HowManyCryptoCanIBuyHandler, HowMuchIsCryptoInFiatHandler,
};
pub use delegate::InProgressDelegateHandler;
pub use exceptions::CatchAllExceptionHandler;
pub use interceptors::{RequestLogger, ResponseLogger};
pub use launch::LaunchRequestHandler;

use super::{Skill, SkillBuilder, apl::AplDocuments};
use buybitcoin_core::price::PriceClient;
use std::sync::Arc;

/// Builds the skill with every handler registered. The first handler whose
/// `can_handle` accepts the request wins, so the in-progress delegates must
/// come before the handlers that answer the same intents.
pub fn standard_skill(prices: Arc<dyn PriceClient>, documents: AplDocuments) -> Skill {
    SkillBuilder::new()
        .add_request_handler(LaunchRequestHandler::new(documents.clone()))
        .add_request_handler(InProgressDelegateHandler::new(HOW_MUCH_INTENT))
        .add_request_handler(InProgressDelegateHandler::new(HOW_MANY_INTENT))
        .add_request_handler(HowMuchIsCryptoInFiatHandler::new(
            prices.clone(),
            documents.clone(),
        ))
        .add_request_handler(HowManyCryptoCanIBuyHandler::new(prices, documents))
        .add_request_handler(HelpIntentHandler)
        .add_request_handler(FallbackIntentHandler)
        .add_request_handler(SessionEndedHandler)
        .add_request_handler(RepeatHandler)
        .add_exception_handler(CatchAllExceptionHandler)
        .add_global_request_interceptor(RequestLogger)
        .add_global_response_interceptor(ResponseLogger)
        .build()
}
