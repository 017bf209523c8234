//! Patient sign-up screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::notice::{Notice, NoticeDialog};
use crate::state::forms::PatientSignUpForm;
use crate::util::dimensions::{Viewport, px};

/// Patient account creation. Validation is presence + password equality
/// only; an accepted submission is logged and the fields are cleared (no
/// backend yet).
#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(PatientSignUpForm::default());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_back = Callback::new(move |()| navigate("/", NavigateOptions::default()));

    let submit = move |_| {
        let current = form.get();
        match current.validate() {
            Ok(()) => {
                match serde_json::to_string(&current) {
                    Ok(payload) => leptos::logging::log!("patient sign-up accepted: {payload}"),
                    Err(e) => leptos::logging::warn!("patient sign-up not serializable: {e}"),
                }
                form.update(PatientSignUpForm::reset);
                notice.set(Some(Notice::new("Sucesso", "Conta criada com sucesso!")));
            }
            Err(e) => notice.set(Some(Notice::error(&e.to_string()))),
        }
    };

    let vp = Viewport::current();

    view! {
        <div class="sign-up-page">
            <Header title="Cadastro" on_back=on_back/>

            <div class="sign-up-page__content">
                <h1 class="sign-up-page__title" style:font-size=px(vp.moderate_scale(24.0))>
                    "Criar uma conta"
                </h1>
                <p class="sign-up-page__subtitle">
                    "Preencha os dados abaixo para criar sua conta e começar a agendar consultas"
                </p>

                <div class="form">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Nome completo"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="email"
                        placeholder="E-mail"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="text"
                        inputmode="tel"
                        placeholder="Telefone"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />

                    <div class="form__password">
                        <input
                            class="form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Senha"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            class="form__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>

                    <div class="form__password">
                        <input
                            class="form__input"
                            type=move || if show_confirm.get() { "text" } else { "password" }
                            placeholder="Confirmar senha"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                        <button
                            class="form__toggle"
                            on:click=move |_| show_confirm.update(|v| *v = !*v)
                        >
                            {move || if show_confirm.get() { "Ocultar" } else { "Mostrar" }}
                        </button>
                    </div>

                    <button
                        class="btn btn--primary form__submit"
                        style:height=px(vp.scale_height(48.0))
                        on:click=submit
                    >
                        "Cadastrar"
                    </button>
                </div>
            </div>

            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! {
                            <NoticeDialog
                                title=n.title
                                message=n.message
                                on_dismiss=Callback::new(move |()| notice.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
