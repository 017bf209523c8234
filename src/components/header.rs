//! Screen header with a centered title and optional back action.

use leptos::prelude::*;

use crate::util::dimensions::{Viewport, px};

/// Header bar for stacked screens.
#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(into, optional)] on_back: Option<Callback<()>>,
) -> impl IntoView {
    let vp = Viewport::current();

    view! {
        <header class="header" style:height=px(vp.scale_height(56.0))>
            <div class="header__side">
                {on_back.map(|cb| {
                    view! {
                        <button class="header__back" on:click=move |_| cb.run(()) title="Voltar">
                            "\u{2039}"
                        </button>
                    }
                })}
            </div>
            <span class="header__title" style:font-size=px(vp.moderate_scale(18.0))>
                {title}
            </span>
            <div class="header__side"></div>
        </header>
    }
}
