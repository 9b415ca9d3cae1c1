//! Transient success/error banner shown at the top of the dashboard.

use std::fmt;
use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::storage::use_config;
use crate::Icon;

const NOTIFICATION_CSS: Asset = asset!("/assets/styling/notification.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// At most one banner is shown; a new one replaces the old.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub current: Option<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn show(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            level,
            message: message.into(),
        });
        self.next_id
    }

    /// Error banner with `err`'s own message.
    pub fn failure(&mut self, err: &dyn fmt::Display) -> u64 {
        self.show(NotificationLevel::Error, err.to_string())
    }

    /// Hide banner `id`, unless it has already been replaced.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notes: &mut Signal<Notifications>, level: NotificationLevel, message: impl Into<String>) {
    notes.write().show(level, message);
}

/// Surface a failed load the user would otherwise only see as an empty view.
pub fn notify_failure(notes: &mut Signal<Notifications>, err: &dyn fmt::Display) {
    notes.write().failure(err);
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn NotificationBanner() -> Element {
    let mut notes = use_notifications();
    let secs = u64::from(use_config().ui.notification_secs);

    // Re-armed whenever a new banner replaces the current one
    use_effect(move || {
        let Some(id) = notes.read().current.as_ref().map(|n| n.id) else {
            return;
        };
        spawn(async move {
            sleep(Duration::from_secs(secs)).await;
            notes.write().dismiss(id);
        });
    });

    let Some(current) = notes().current else {
        return rsx! {};
    };

    rsx! {
        document::Stylesheet { href: NOTIFICATION_CSS }

        div {
            class: match current.level {
                NotificationLevel::Success => "notification success",
                NotificationLevel::Error => "notification error",
            },
            role: "alert",
            span { "{current.message}" }
            button {
                class: "notification-close",
                title: "Close",
                onclick: move |_| notes.write().dismiss(current.id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
