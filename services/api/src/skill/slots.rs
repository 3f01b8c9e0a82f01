//! Slot Resolution
//!
//! A slot carries the raw words the user said and, optionally, the result of
//! matching them against a catalog of canonical values. Handlers only care
//! about one string per slot, so every slot is reduced to a `SlotValue`: the
//! canonical value when the platform found a match, the raw words otherwise.

use crate::models::{ResolutionCode, Slot};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotValue {
    /// The canonical value, or the raw words when there was no match.
    pub resolved: Option<String>,
    /// Whether `resolved` came from a successful catalog match.
    pub is_validated: bool,
}

impl SlotValue {
    fn unvalidated(slot: &Slot) -> Self {
        Self {
            resolved: slot.value.clone(),
            is_validated: false,
        }
    }
}

/// Resolved values for every slot of one intent, keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct SlotValues(HashMap<String, SlotValue>);

impl SlotValues {
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.0.get(name)
    }

    /// The resolved text of a slot, `None` when the slot is absent or unfilled.
    pub fn resolved(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.resolved.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn resolve_slot(slot: &Slot) -> SlotValue {
    let authority = slot
        .resolutions
        .as_ref()
        .and_then(|r| r.resolutions_per_authority.first());

    let Some(authority) = authority else {
        debug!(slot = %slot.name, "Slot has no resolutions");
        return SlotValue::unvalidated(slot);
    };

    match authority.status.code {
        ResolutionCode::SuccessMatch => match authority.values.first() {
            Some(matched) => SlotValue {
                resolved: Some(matched.value.name.clone()),
                is_validated: true,
            },
            None => {
                info!(slot = %slot.name, "Slot matched but carries no resolved value");
                SlotValue::unvalidated(slot)
            }
        },
        ResolutionCode::SuccessNoMatch => SlotValue::unvalidated(slot),
        code => {
            info!(slot = %slot.name, ?code, "Couldn't resolve slot, using raw value");
            SlotValue::unvalidated(slot)
        }
    }
}

pub fn get_slot_values(slots: &HashMap<String, Slot>) -> SlotValues {
    SlotValues(
        slots
            .values()
            .map(|slot| {
                let value = resolve_slot(slot);
                debug!(
                    slot = %slot.name,
                    raw = ?slot.value,
                    resolved = ?value.resolved,
                    is_validated = value.is_validated,
                    "Filled slot"
                );
                (slot.name.clone(), value)
            })
            .collect(),
    )
}
