//! Login overlay dialog hosted by the home screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::Notice;
use crate::state::session::{SessionState, sign_in};

/// Modal login form.
///
/// On success the overlay closes (an admin sign-in additionally gets a
/// one-time informational notice); on failure a generic notice appears
/// and the entered values stay in place so the user can retry.
#[component]
pub fn LoginModal(
    email: RwSignal<String>,
    password: RwSignal<String>,
    on_close: Callback<()>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let entered_email = email.get();
        let entered_password = password.get();
        leptos::task::spawn_local(async move {
            match sign_in(session, &entered_email, &entered_password).await {
                Ok(()) => {
                    on_close.run(());
                    if session.get_untracked().is_admin() {
                        notice.set(Some(Notice::new(
                            "Bem-vindo",
                            "Você tem acesso às funcionalidades administrativas.",
                        )));
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("sign-in failed: {e}");
                    notice.set(Some(Notice::error("Falha ao fazer login. Tente novamente.")));
                }
            }
        });
    });

    let go_to_sign_up = move |_| {
        on_close.run(());
        navigate("/signup", NavigateOptions::default());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog login-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="login-modal__header">
                    <h2>"Login"</h2>
                    <button class="login-modal__close" on:click=move |_| on_close.run(()) title="Fechar">
                        "\u{2715}"
                    </button>
                </div>

                <label class="dialog__label">
                    "E-mail"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Senha"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button class="btn btn--primary login-modal__submit" on:click=move |_| submit.run(())>
                    {move || if session.get().loading { "Entrando..." } else { "Entrar" }}
                </button>

                <button class="login-modal__sign-up" on:click=go_to_sign_up>
                    "Não tem uma conta? "
                    <span class="login-modal__link">"Cadastre-se"</span>
                </button>
            </div>
        </div>
    }
}
