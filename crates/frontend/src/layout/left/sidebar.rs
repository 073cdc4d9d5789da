//! Sidebar with one entry per section

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{TAB_TAREAS, TAB_VENTAS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// `(tab key, icon)`
const MENU_ITEMS: &[(&str, &str)] = &[(TAB_TAREAS, "tasks"), (TAB_VENTAS, "sales")];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {MENU_ITEMS
                .iter()
                .map(|&(key, icon_name)| {
                    let label = tab_label_for_key(key);
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.with(|a| a.as_deref() == Some(key))
                            }
                            on:click=move |_| ctx.open_tab(key, label)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
