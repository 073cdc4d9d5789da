use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::TAB_TAREAS;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created.
    tabs_store.init_router_integration(TAB_TAREAS, tab_label_for_key(TAB_TAREAS));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Session gating happens per page, so the shell is always rendered.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
