//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the resources every
//! request needs: the assembled skill and the loaded configuration.

use crate::{config::Config, skill::Skill};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
    pub config: Arc<Config>,
}
