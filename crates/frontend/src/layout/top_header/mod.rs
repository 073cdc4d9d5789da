//! TopHeader: sidebar toggle, application title and current user

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let user_name = move || {
        auth_state.with(|a| {
            a.user
                .as_ref()
                .map(|u| u.nombre.clone().unwrap_or_else(|| format!("Usuario {}", u.id_usuario)))
                .unwrap_or_else(|| "Invitado".to_string())
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Gestión administrativa"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_name}</span>
                </div>
            </div>
        </div>
    }
}
