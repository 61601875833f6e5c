//! Notification center of the hosting shell
//!
//! Widgets forward [`NotificationEvent`]s here; [`NotificationHost`] renders them
//! as message bars. Non-error notifications close themselves after a delay.

use crate::shared::icons::icon;
use contracts::shared::notification::{NotificationEvent, NotificationVariant};
use leptos::prelude::*;
use thaw::*;

/// Сколько показывать информационные уведомления (мс)
pub const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub event: NotificationEvent,
}

/// Auto-dismiss delay for a variant. Errors stay until closed by the user.
pub fn auto_dismiss_after(variant: NotificationVariant) -> Option<u32> {
    match variant {
        NotificationVariant::Error => None,
        _ => Some(DISMISS_AFTER_MS),
    }
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    pub items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
            next_id: StoredValue::new(1),
        }
    }

    pub fn push(&self, event: NotificationEvent) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.update_value(|n| *n += 1);

        let delay = auto_dismiss_after(event.variant);
        self.items.update(|items| items.push(Toast { id, event }));

        if let Some(ms) = delay {
            let this = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                this.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

fn intent_for(variant: NotificationVariant) -> MessageBarIntent {
    match variant {
        NotificationVariant::Info => MessageBarIntent::Info,
        NotificationVariant::Success => MessageBarIntent::Success,
        NotificationVariant::Warning => MessageBarIntent::Warning,
        NotificationVariant::Error => MessageBarIntent::Error,
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let center =
        leptos::context::use_context::<NotificationCenter>().expect("NotificationCenter not found");

    view! {
        <div class="notification-host">
            <For
                each=move || center.items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="notification-host__item">
                            <MessageBar intent=intent_for(toast.event.variant)>
                                <div class="notification-host__content">
                                    <strong>{toast.event.title.clone()}</strong>
                                    <span>{toast.event.message.clone()}</span>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| center.dismiss(id)
                                >
                                    {icon("x")}
                                </Button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
