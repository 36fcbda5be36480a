//! Deferred UI Work
//!
//! Timer slots and the transient input-error flash.

use gloo_timers::callback::Timeout;
use hub_core::InputField;
use leptos::prelude::*;

/// Input error highlight duration
pub const FLASH_MS: u32 = 1500;
/// Modal close transition before swapping panes
pub const MODAL_TRANSITION_MS: u32 = 300;
/// Delay before focusing an input in a freshly shown modal
pub const FOCUS_DELAY_MS: u32 = 350;

/// Holds at most one pending timeout. Scheduling again drops, and so
/// cancels, the previous one.
#[derive(Clone, Copy)]
pub struct TimerSlot {
    handle: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self { handle: StoredValue::new_local(None) }
    }

    pub fn schedule(&self, millis: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, f);
        self.handle.update_value(|slot| *slot = Some(timeout));
    }

    pub fn cancel(&self) {
        self.handle.update_value(|slot| *slot = None);
    }
}

/// Input fields currently showing the error highlight
#[derive(Clone, Copy)]
pub struct FieldFlash {
    flagged: RwSignal<Vec<InputField>>,
    timer: TimerSlot,
}

impl FieldFlash {
    pub fn new() -> Self {
        Self { flagged: RwSignal::new(Vec::new()), timer: TimerSlot::new() }
    }

    /// Highlight `fields` for `FLASH_MS`
    pub fn flag(&self, fields: Vec<InputField>) {
        self.flagged.set(fields);
        let flagged = self.flagged;
        self.timer.schedule(FLASH_MS, move || flagged.set(Vec::new()));
    }

    pub fn is_flagged(&self, field: InputField) -> bool {
        self.flagged.with(|f| f.contains(&field))
    }

    /// CSS class for an input
    pub fn class(&self, base: &'static str, field: InputField) -> String {
        if self.is_flagged(field) {
            format!("{base} input-error")
        } else {
            base.to_string()
        }
    }
}

/// Focus an input after `FOCUS_DELAY_MS`
pub fn focus_later(slot: TimerSlot, target: NodeRef<leptos::html::Input>) {
    slot.schedule(FOCUS_DELAY_MS, move || {
        if let Some(input) = target.get_untracked() {
            let _ = input.focus();
        }
    });
}
