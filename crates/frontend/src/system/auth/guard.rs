use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when a session user is present
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <div class="alert alert--error">"Usuario no autenticado."</div> }
        >
            {children()}
        </Show>
    }
}
