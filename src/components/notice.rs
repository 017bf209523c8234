//! Blocking notice dialog, the web equivalent of a native alert.

use leptos::prelude::*;

/// Content for a pending notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
        }
    }

    /// Notice for a rejected operation.
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self::new("Erro", message)
    }
}

/// A dismissible blocking notice with a title, a message, and a single
/// OK button that runs `on_dismiss`.
#[component]
pub fn NoticeDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog notice" role="alertdialog">
                <h2 class="notice__title">{title}</h2>
                <p class="notice__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_dismiss.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
