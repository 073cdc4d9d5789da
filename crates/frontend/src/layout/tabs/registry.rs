//! Tab content registry: maps a tab key to its page

use super::tab_labels::{TAB_TAREAS, TAB_VENTAS, TAB_VENTA_DETALLE};
use crate::domain::a001_tarea::ui::list::TareasList;
use crate::domain::a002_venta::ui::detalle::VentaDetalle;
use crate::domain::a002_venta::ui::list::VentasList;
use crate::system::auth::guard::RequireSession;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        TAB_TAREAS => view! { <TareasList /> }.into_any(),
        TAB_VENTAS => view! { <VentasList /> }.into_any(),
        TAB_VENTA_DETALLE => view! {
            <RequireSession>
                <VentaDetalle />
            </RequireSession>
        }
        .into_any(),
        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Página no encontrada"</div> }.into_any()
        }
    }
}
