//! Skill Dispatch
//!
//! The voice platform posts one request envelope per conversational turn.
//! This module turns that envelope into a response envelope:
//!
//! - `dispatch`: handler traits, the `SkillBuilder` registration list, and `Skill::invoke`.
//! - `input`: the per-turn `HandlerInput` (envelope, session attributes, response builder, RNG).
//! - `response`: a chaining builder for the outbound `Response`.
//! - `slots`: typed slot resolution.
//! - `apl`: visual document loading and the datasource/card shared by the handlers.
//! - `intents`: the concrete handlers and the standard registration order.

pub mod apl;
pub mod dispatch;
mod error;
pub mod input;
pub mod intents;
pub mod response;
pub mod slots;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatch::{
    ExceptionHandler, RequestHandler, RequestInterceptor, ResponseInterceptor, Skill, SkillBuilder,
};
pub use error::SkillError;
pub use input::HandlerInput;
pub use intents::standard_skill;
