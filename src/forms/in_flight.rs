//! Per-form-instance submission gate.
//!
//! DESIGN
//! ======
//! Every rendered form carries a random `form_id`. A submission registers the
//! id for as long as its backend call runs; a second submission with the same
//! id in that window is turned away. The registration is released by an RAII
//! guard, so every exit path (success, error, panic unwinding) frees it.
//!
//! The gate is advisory: a request without a readable id is simply not
//! tracked.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InFlight {
    inner: Arc<Mutex<HashSet<Uuid>>>,
}

/// Result of trying to start a submission.
pub enum Admission {
    /// The form instance is now marked in flight until the guard drops.
    Tracked(InFlightGuard),
    /// No usable form id; proceed without gating.
    Untracked,
    /// The same form instance already has a request outstanding.
    Busy,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to mark the form instance `raw_form_id` as submitting.
    #[must_use]
    pub fn admit(&self, raw_form_id: &str) -> Admission {
        let Some(id) = parse_form_id(raw_form_id) else {
            return Admission::Untracked;
        };
        let mut active = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if active.insert(id) {
            Admission::Tracked(InFlightGuard { registry: self.clone(), id })
        } else {
            Admission::Busy
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_active(&self, id: Uuid) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }

    fn release(&self, id: Uuid) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}

/// Holds a form instance's in-flight slot.
pub struct InFlightGuard {
    registry: InFlight,
    id: Uuid,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// Parse a `form_id` field; blank or malformed ids are ignored.
#[must_use]
pub fn parse_form_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Fresh id for a newly rendered form.
#[must_use]
pub fn new_form_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod tests;
