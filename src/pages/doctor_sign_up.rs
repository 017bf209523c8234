//! Doctor registration screen, restricted to the administrator.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::notice::{Notice, NoticeDialog};
use crate::state::forms::DoctorSignUpForm;
use crate::state::nav::{Destination, NavState};
use crate::state::session::SessionState;
use crate::util::dimensions::{Viewport, px};

/// Medical specialties offered by the registration picker.
const SPECIALTIES: [&str; 10] = [
    "Cardiologia",
    "Dermatologia",
    "Neurologia",
    "Ortopedia",
    "Pediatria",
    "Ginecologia",
    "Urologia",
    "Oftalmologia",
    "Otorrinolaringologia",
    "Psiquiatria",
];

/// Doctor registration form.
///
/// Gated twice: the tab bar only offers this screen to admins, and the
/// screen re-checks on render — a non-admin gets a blocking
/// access-denied notice whose dismissal forces the tab back to home, and
/// no form is rendered. Submission re-checks the gate a third time in
/// the form validation itself.
#[component]
pub fn DoctorSignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let form = RwSignal::new(DoctorSignUpForm::default());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let show_specialties = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let denied = RwSignal::new(false);

    let is_admin = move || session.get().is_admin();

    // Self-enforced gate, independent of how the screen was reached.
    Effect::new(move || {
        if !is_admin() {
            denied.set(true);
        }
    });

    let back_home = Callback::new(move |()| nav.update(|n| n.active = Destination::Home));

    let submit = move |_| {
        let current = form.get();
        match current.validate(session.get_untracked().is_admin()) {
            Ok(()) => {
                match serde_json::to_string(&current) {
                    Ok(payload) => leptos::logging::log!("doctor sign-up accepted: {payload}"),
                    Err(e) => leptos::logging::warn!("doctor sign-up not serializable: {e}"),
                }
                form.update(DoctorSignUpForm::reset);
                notice.set(Some(Notice::new("Sucesso", "Médico cadastrado com sucesso!")));
            }
            Err(e) => notice.set(Some(Notice::error(&e.to_string()))),
        }
    };

    let vp = Viewport::current();

    view! {
        {move || {
            denied
                .get()
                .then(|| {
                    view! {
                        <NoticeDialog
                            title="Acesso Negado"
                            message="Você não tem permissão para acessar esta área."
                            on_dismiss=back_home
                        />
                    }
                })
        }}

        <Show when=is_admin>
            <div class="doctor-sign-up-page">
                <Header title="Cadastro de Médico" on_back=back_home/>

                <div class="doctor-sign-up-page__content">
                    <h1
                        class="doctor-sign-up-page__title"
                        style:font-size=px(vp.moderate_scale(24.0))
                    >
                        "Criar conta de médico"
                    </h1>
                    <p class="doctor-sign-up-page__subtitle">
                        "Preencha os dados abaixo para cadastrar um novo médico"
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
                            type="text"
                            inputmode="numeric"
                            placeholder="CRM"
                            prop:value=move || form.get().crm
                            on:input=move |ev| form.update(|f| f.crm = event_target_value(&ev))
                        />

                        <div class="form__picker">
                            <button
                                class="form__input form__picker-toggle"
                                class:form__placeholder=move || form.get().specialty.is_empty()
                                on:click=move |_| show_specialties.update(|v| *v = !*v)
                            >
                                {move || {
                                    let chosen = form.get().specialty;
                                    if chosen.is_empty() { "Especialidade".to_owned() } else { chosen }
                                }}
                                <span class="form__picker-chevron">
                                    {move || if show_specialties.get() { "\u{25B4}" } else { "\u{25BE}" }}
                                </span>
                            </button>
                            <Show when=move || show_specialties.get()>
                                <div class="form__picker-list">
                                    {SPECIALTIES
                                        .into_iter()
                                        .map(|specialty| {
                                            let choose = move |_| {
                                                form.update(|f| f.specialty = specialty.to_owned());
                                                show_specialties.set(false);
                                            };
                                            view! {
                                                <button class="form__picker-item" on:click=choose>
                                                    {specialty}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>

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
                        <input
                            class="form__input"
                            type="text"
                            inputmode="numeric"
                            placeholder="Valor da consulta (R$)"
                            prop:value=move || form.get().price
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />

                        <div class="form__password">
                            <input
                                class="form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Senha"
                                prop:value=move || form.get().password
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev));
                                }
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
                            "Cadastrar Médico"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

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
    }
}
