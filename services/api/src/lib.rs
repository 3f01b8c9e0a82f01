//! BuyBitcoin API Library Crate
//!
//! This library contains the web-facing half of the skill: configuration,
//! the request/response envelope models, the handler dispatcher and its
//! handlers, and the HTTP routing. The `api` binary is a thin wrapper around it.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod skill;
pub mod state;
