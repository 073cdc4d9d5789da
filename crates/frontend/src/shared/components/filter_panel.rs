use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsing only hides the content, so the filter fields keep their state.
pub fn collapsible_class(expanded: bool) -> &'static str {
    if expanded {
        "filter-panel__collapsible filter-panel__collapsible--expanded"
    } else {
        "filter-panel__collapsible filter-panel__collapsible--collapsed"
    }
}

/// Collapsible panel holding the filter fields of a list page
#[component]
pub fn FilterPanel(
    /// Number of active filters, shown as a badge
    #[prop(into)]
    active_filters_count: Signal<usize>,
    /// Filter fields
    children: Children,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
            </div>

            <div class=move || collapsible_class(is_expanded.get())>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_panel_is_hidden_by_class() {
        assert!(collapsible_class(false).ends_with("--collapsed"));
        assert!(collapsible_class(true).ends_with("--expanded"));
        assert!(collapsible_class(false).starts_with("filter-panel__collapsible "));
    }
}
