use crate::config::Config;
use crate::view::state::ViewHandle;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Blocking; the user has to acknowledge it.
    Error,
    /// Non-blocking; dismisses itself after `Config::TOAST_DURATION_MS`.
    Success,
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Notifier backed by the browser: errors open an alert, successes push a
/// toast into the view state and schedule its removal.
pub struct BrowserNotifier {
    view: ViewHandle,
}

impl BrowserNotifier {
    pub fn new(view: ViewHandle) -> Self {
        Self { view }
    }
}

impl Notifier for BrowserNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => gloo::dialogs::alert(&format!("❌ {message}")),
            NotificationKind::Success => {
                let id = self.view.update(|v| v.push_toast(message));
                let view = self.view.clone();

                spawn_local(async move {
                    TimeoutFuture::new(Config::TOAST_DURATION_MS).await;
                    view.update(|v| v.dismiss_toast(id));
                });
            }
        }
    }
}
