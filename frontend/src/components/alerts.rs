//! Dismissible error banners that expire on their own.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::ALERT_TIMEOUT_MS;

/// One visible banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
}

/// Banners in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alerts {
    next_id: u64,
    items: Vec<Alert>,
}

impl Alerts {
    /// Append a banner and return its id.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Alert {
            id,
            message: message.into(),
        });
        id
    }

    /// Remove a banner. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|alert| alert.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Alert] {
        &self.items
    }

    /// Append a banner that should go away after [`ALERT_TIMEOUT_MS`].
    pub fn push_expiring(&mut self, message: impl Into<String>) -> Expiry {
        Expiry {
            id: self.push(message),
            delay_ms: ALERT_TIMEOUT_MS,
        }
    }
}

/// Scheduled removal of one banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expiry {
    pub id: u64,
    pub delay_ms: u32,
}

impl Expiry {
    /// Remove the banner if the user has not closed it already.
    pub fn apply(self, alerts: &mut Alerts) -> bool {
        alerts.dismiss(self.id)
    }
}

/// Show `message` and schedule its removal.
pub fn raise_alert(alerts: RwSignal<Alerts>, message: impl Into<String>) {
    let message = message.into();
    log::warn!("⚠️ {}", message);

    let Some(expiry) = alerts.try_update(|list| list.push_expiring(message)) else {
        return;
    };

    Timeout::new(expiry.delay_ms, move || {
        // the widget may be gone by now
        let _ = alerts.try_update(|list| expiry.apply(list));
    })
    .forget();
}

#[component]
pub fn AlertStack(alerts: RwSignal<Alerts>) -> impl IntoView {
    view! {
        <For
            each=move || alerts.with(|list| list.items().to_vec())
            key=|alert| alert.id
            children=move |alert| {
                let id = alert.id;
                view! {
                    <div class="alert alert-danger alert-dismissible fade show mt-3" role="alert">
                        {alert.message}
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| alerts.update(|list| {
                                list.dismiss(id);
                            })
                        ></button>
                    </div>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_stack_in_order() {
        let mut alerts = Alerts::default();
        let first = alerts.push("Please select a file first.");
        let second = alerts.push("file too large");

        assert_ne!(first, second);
        let messages: Vec<_> = alerts.items().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, ["Please select a file first.", "file too large"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut alerts = Alerts::default();
        let id = alerts.push("Network error occurred.");

        // user closes it, then the timer fires
        assert!(alerts.dismiss(id));
        assert!(!alerts.dismiss(id));
        assert!(alerts.items().is_empty());
    }

    #[test]
    fn test_dismiss_leaves_other_banners() {
        let mut alerts = Alerts::default();
        let first = alerts.push("one");
        alerts.push("two");

        alerts.dismiss(first);
        assert_eq!(alerts.items().len(), 1);
        assert_eq!(alerts.items()[0].message, "two");
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut alerts = Alerts::default();
        let first = alerts.push("one");
        alerts.dismiss(first);
        assert_ne!(alerts.push("two"), first);
    }

    #[test]
    fn test_expiry_removes_its_own_banner_after_five_seconds() {
        let mut alerts = Alerts::default();
        alerts.push("stays");
        let expiry = alerts.push_expiring("file too large");

        assert_eq!(expiry.delay_ms, 5_000);
        assert_eq!(alerts.items().len(), 2);

        assert!(expiry.apply(&mut alerts));
        let messages: Vec<_> = alerts.items().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, ["stays"]);
    }

    #[test]
    fn test_expiry_after_manual_close_is_a_no_op() {
        let mut alerts = Alerts::default();
        let expiry = alerts.push_expiring("Network error occurred.");
        let later = alerts.push("Please select a file first.");

        assert!(alerts.dismiss(expiry.id));
        assert!(!expiry.apply(&mut alerts));
        assert_eq!(alerts.items().len(), 1);
        assert_eq!(alerts.items()[0].id, later);
    }
}
