use dioxus::prelude::*;

use crate::util::generate_id;

#[cfg(not(target_arch = "wasm32"))]
const TOAST_AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= 5 {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for view in views {
                    ToastCard { view, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    use_auto_dismiss(toasts, view.id.clone());

    let class = format!("toast {}", view.theme);
    rsx! {
        li {
            class: class,
            span { class: "toast-icon", "{view.icon}" }
            p { "{view.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Fechar"
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn use_auto_dismiss(toasts: Signal<Vec<ToastMessage>>, id: String) {
    use_future(move || {
        let mut toasts = toasts;
        let id = id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });
}

// no timer on wasm; the dismiss button stays available
#[cfg(target_arch = "wasm32")]
fn use_auto_dismiss(_toasts: Signal<Vec<ToastMessage>>, _id: String) {}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("toast-info", "ℹ️"),
            ToastKind::Success => ("toast-success", "✅"),
            ToastKind::Warning => ("toast-warning", "⚠️"),
            ToastKind::Error => ("toast-error", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_unique_ids() {
        let first = ToastMessage::new(ToastKind::Info, "a");
        let second = ToastMessage::new(ToastKind::Info, "b");
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("toast-"));
    }

    #[test]
    fn views_pick_theme_by_kind() {
        let view = ToastView::from(ToastMessage::new(ToastKind::Error, "falhou"));
        assert_eq!(view.theme, "toast-error");
        assert_eq!(view.text, "falhou");
    }
}
