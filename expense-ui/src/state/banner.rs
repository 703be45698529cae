//! Message Banner
//!
//! Single-slot status message. A new message replaces the current one and
//! restarts the hide timer; timers started for older messages are ignored.

use leptos::*;

/// How long a message stays visible
pub const BANNER_TIMEOUT_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BannerMessage {
    pub text: String,
    pub severity: Severity,
    generation: u64,
}

/// Banner contents without any reactivity or timers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerSlot {
    current: Option<BannerMessage>,
    generation: u64,
}

impl BannerSlot {
    /// Replace the current message. Returns the token its timer must present.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.current = Some(BannerMessage {
            text: text.into(),
            severity,
            generation: self.generation,
        });
        self.generation
    }

    /// Hide the message shown with `generation`, if it is still current.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(message) if message.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&BannerMessage> {
        self.current.as_ref()
    }
}

/// Reactive banner handle shared through `DashboardState`
#[derive(Clone, Copy)]
pub struct Banner {
    slot: RwSignal<BannerSlot>,
}

impl Banner {
    pub fn new() -> Self {
        Self {
            slot: create_rw_signal(BannerSlot::default()),
        }
    }

    /// Show a message and schedule it to hide.
    pub fn show(&self, text: impl Into<String>, severity: Severity) {
        let mut generation = 0;
        self.slot.update(|slot| generation = slot.show(text, severity));

        let slot = self.slot;
        gloo_timers::callback::Timeout::new(BANNER_TIMEOUT_MS, move || {
            slot.update(|s| {
                s.expire(generation);
            });
        })
        .forget();
    }

    pub fn current(&self) -> Option<BannerMessage> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_message() {
        let mut slot = BannerSlot::default();
        slot.show("first", Severity::Success);
        slot.show("second", Severity::Error);

        let current = slot.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn test_expire_hides_current() {
        let mut slot = BannerSlot::default();
        let token = slot.show("saved", Severity::Success);

        assert!(slot.expire(token));
        assert!(slot.current().is_none());
        assert!(!slot.expire(token));
    }

    #[test]
    fn test_old_timer_does_not_hide_newer_message() {
        let mut slot = BannerSlot::default();
        let old = slot.show("Data refreshed successfully!", Severity::Success);
        let new = slot.show("Error loading expenses: offline", Severity::Error);

        assert!(!slot.expire(old));
        assert_eq!(slot.current().unwrap().text, "Error loading expenses: offline");

        assert!(slot.expire(new));
        assert!(slot.current().is_none());
    }
}
