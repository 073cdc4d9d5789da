use crate::shared::pagination::{page_window, resolve_page_request, PageItem};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// PaginationControls component - previous link, page window, next link
///
/// Every link carries its target in `data-page`; the click handler re-validates
/// the value against `total_pages` so only pages in range are dispatched.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when a valid page is selected
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let handle_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        let raw = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-page"));
        let Some(raw) = raw else {
            return;
        };
        if let Some(page) = resolve_page_request(&raw, total_pages.get_untracked()) {
            on_page_change.run(page);
        }
    };

    let render_item = move |item: PageItem| {
        let class = format!(
            "page-item{}{}",
            if item.active { " active" } else { "" },
            if item.disabled { " disabled" } else { "" },
        );
        let link = if item.disabled {
            view! {
                <a class="page-link" href="#" aria-disabled="true" on:click=|ev: ev::MouseEvent| ev.prevent_default()>
                    {item.label()}
                </a>
            }
            .into_any()
        } else {
            view! {
                <a class="page-link" href="#" data-page=item.target.to_string() on:click=handle_click>
                    {item.label()}
                </a>
            }
            .into_any()
        };
        view! { <li class=class>{link}</li> }
    };

    view! {
        <nav class="pagination-controls" aria-label="Paginación">
            <ul class="pagination">
                {move || {
                    page_window(current_page.get(), total_pages.get())
                        .into_iter()
                        .map(render_item)
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
