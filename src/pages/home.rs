//! Welcome/Home screen, host of the login overlay.

use leptos::prelude::*;

use crate::components::login_modal::LoginModal;
use crate::components::notice::{Notice, NoticeDialog};
use crate::state::session::SessionState;
use crate::util::dimensions::{Viewport, px};

/// Specialty filter chips shown on the home screen; the first is the
/// default selection.
const SPECIALTY_FILTERS: [&str; 6] = [
    "Todas",
    "Cardiologia",
    "Dermatologia",
    "Neurologia",
    "Ortopedia",
    "Pediatria",
];

/// Home screen — greeting, search, appointment sections, and the login
/// overlay. A signed-in user sees their name and a sign-out action where
/// the login button was.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let show_login = RwSignal::new(false);
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let open_login = move |_| show_login.set(true);
    let close_login = Callback::new(move |()| show_login.set(false));
    let sign_out = move |_| session.update(SessionState::sign_out);

    let user_name = move || session.get().user.map(|u| u.name);

    let vp = Viewport::current();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <div class="home-page__header-top">
                    <h1 class="home-page__title" style:font-size=px(vp.moderate_scale(24.0))>
                        "Olá, bom dia!"
                    </h1>
                    {move || match user_name() {
                        Some(name) => {
                            view! {
                                <button class="home-page__session" on:click=sign_out title="Sair">
                                    <span class="home-page__user">{name}</span>
                                    " \u{00b7} Sair"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <button class="home-page__session" on:click=open_login title="Entrar">
                                    "\u{1F464}"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <p class="home-page__subtitle">"Como podemos ajudar você hoje?"</p>

                <div class="home-page__search">
                    <input
                        class="home-page__search-input"
                        type="search"
                        placeholder="Buscar médicos ou especialidades"
                        style:height=px(vp.scale_height(40.0))
                    />
                </div>
            </header>

            <section class="home-page__section">
                <div class="home-page__section-header">
                    <h2 class="home-page__section-title">"Próximas Consultas"</h2>
                    <button class="home-page__see-all">"Ver todas"</button>
                </div>
            </section>

            <section class="home-page__section">
                <h2 class="home-page__section-title">"Especialidades"</h2>
                <div class="home-page__specialties">
                    {SPECIALTY_FILTERS
                        .into_iter()
                        .enumerate()
                        .map(|(i, specialty)| {
                            let active = i == 0;
                            view! {
                                <button class="chip" class:chip--active=active>
                                    {specialty}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-page__section home-page__section--last">
                <h2 class="home-page__section-title">"Médicos Disponíveis"</h2>
            </section>

            <Show when=move || show_login.get()>
                <LoginModal
                    email=login_email
                    password=login_password
                    on_close=close_login
                    notice=notice
                />
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
        </div>
    }
}
