//! Bottom tab bar over the destinations available to the current role.

use leptos::prelude::*;

use crate::state::nav::{NavState, available_destinations};
use crate::state::session::SessionState;
use crate::util::dimensions::{Viewport, px};

/// Bottom navigation bar for the main area.
///
/// The destination set is recomputed from the session on every role
/// change, so the doctor-onboarding tab appears the moment an admin
/// signs in and disappears the moment the role is gone.
#[component]
pub fn TabBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let tabs = move || available_destinations(session.get().is_admin());

    view! {
        <nav class="tab-bar" style:height=px(Viewport::current().scale_height(60.0))>
            {move || {
                tabs()
                    .into_iter()
                    .map(|dest| {
                        let select = move |_| nav.update(|n| n.active = dest);
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || nav.get().active == dest
                                on:click=select
                            >
                                <span
                                    class="tab-bar__icon"
                                    style:font-size=px(Viewport::current().moderate_scale(24.0))
                                >
                                    {dest.icon()}
                                </span>
                                <span class="tab-bar__label">{dest.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
