use leptos::prelude::*;
use snipdesk_app::Message;
use snipdesk_core::prelude::warn;

use crate::{browser, use_dispatcher};

/// The single toast. Each new notification schedules its own dismissal,
/// which is ignored if a newer one has replaced it by then.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let dispatcher = use_dispatcher();
    let state = dispatcher.state();
    let current = Memo::new(move |_| state.with(|s| s.notification.clone()));

    Effect::new(move || {
        let Some(id) = current.with(|n| n.as_ref().map(|n| n.id)) else {
            return;
        };
        let after_ms = state.with_untracked(|s| s.settings.ui.notification_ms);
        let scheduled = browser::set_timeout(after_ms, move || {
            dispatcher.dispatch(Message::DismissNotification { id })
        });
        if let Err(e) = scheduled {
            warn!("Failed to schedule notification dismissal: {}", e);
        }
    });

    let class = move || {
        current.with(|n| match n {
            Some(n) => format!("notification {} show", n.kind.class()),
            None => "notification".to_string(),
        })
    };
    let message = move || current.with(|n| n.as_ref().map(|n| n.message.clone()));

    view! {
        <div id="notification" class=class>
            {message}
        </div>
    }
}
