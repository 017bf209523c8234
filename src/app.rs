//! Root application component with routing, context providers, and the
//! main-area tab shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::tab_bar::TabBar;
use crate::pages::{doctor_sign_up::DoctorSignUpPage, home::HomePage, sign_up::SignUpPage};
use crate::state::nav::{Destination, NavState, resolve_active};
use crate::state::session::SessionState;
use crate::util::dimensions::{bottom_inset, px, status_bar_height};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and navigation stores and provides them via context;
/// every screen reads them with `expect_context`, which fails fast when
/// a screen is mounted outside this root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let nav = RwSignal::new(NavState::default());

    provide_context(session);
    provide_context(nav);

    view! {
        <Stylesheet id="leptos" href="/pkg/consulta-ja.css"/>
        <Title text="Consulta Já"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=MainArea/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}

/// Main area: the active tab's screen over the bottom tab bar.
#[component]
fn MainArea() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    // Tab fallback: when the active destination disappears (admin signed
    // out while the doctor tab was focused), drop back to home.
    Effect::new(move || {
        let resolved = resolve_active(nav.get().active, session.get().is_admin());
        if resolved != nav.get_untracked().active {
            nav.update(|n| n.active = resolved);
        }
    });

    view! {
        <div
            class="main-area"
            style:padding-top=px(status_bar_height())
            style:padding-bottom=px(bottom_inset())
        >
            <div class="main-area__screen">
                {move || match nav.get().active {
                    Destination::Home => view! { <HomePage/> }.into_any(),
                    Destination::DoctorOnboarding => view! { <DoctorSignUpPage/> }.into_any(),
                }}
            </div>
            <TabBar/>
        </div>
    }
}
