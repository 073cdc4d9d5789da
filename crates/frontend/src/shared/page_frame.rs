//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_tareas--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// `PAGE_CAT_LIST` or `PAGE_CAT_DETAIL`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
