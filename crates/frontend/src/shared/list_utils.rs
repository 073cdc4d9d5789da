/// List helpers: status/text filtering, load sequencing and the debounced search box
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::config::config;

/// Value of the status select meaning "no status filter"
pub const ALL_STATUSES: &str = "all";

/// Records that can be narrowed by the filter panel
pub trait Searchable {
    /// Label compared against the status select value
    fn status_key(&self) -> String;

    /// Whether the record matches an already lower-cased search text
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Status + free-text filter of a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// `None` or `"all"` disables the status filter
    pub status: Option<String>,
    pub search: String,
}

impl ListFilter {
    pub fn new(status: &str, search: &str) -> Self {
        let status = match status.trim() {
            "" | ALL_STATUSES => None,
            s => Some(s.to_string()),
        };
        Self {
            status,
            search: search.trim().to_lowercase(),
        }
    }

    pub fn accepts<T: Searchable>(&self, item: &T) -> bool {
        if let Some(status) = &self.status {
            if &item.status_key() != status {
                return false;
            }
        }
        self.search.is_empty() || item.matches_filter(&self.search)
    }

    /// Keeps the records accepted by the filter, preserving order
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|i| self.accepts(*i)).cloned().collect()
    }
}

/// What the table body of a list page shows
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// Inline error row with this text
    Failed(String),
    /// No session user
    Unauthenticated,
}

/// Monotonic ticket issued per list load.
///
/// A response is applied only when its ticket is still the latest one, so a
/// slow stale request cannot overwrite the result of a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Search box that reports its value after the configured debounce delay
#[component]
pub fn SearchInput(
    /// Search text currently applied to the list
    #[prop(into)]
    value: Signal<String>,
    /// Callback with the raw input value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            config().lists.search_debounce_ms as i32,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        status: &'static str,
        text: &'static str,
    }

    impl Searchable for Row {
        fn status_key(&self) -> String {
            self.status.to_string()
        }

        fn matches_filter(&self, needle: &str) -> bool {
            self.text.to_lowercase().contains(needle)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { status: "pendiente", text: "Revisar Caja" },
            Row { status: "finalizada", text: "Cerrar caja" },
            Row { status: "pendiente", text: "Inventario" },
        ]
    }

    #[test]
    fn test_all_status_keeps_everything() {
        let filter = ListFilter::new("all", "");
        assert_eq!(filter.apply(&rows()).len(), 3);
        assert_eq!(ListFilter::new("", "  ").status, None);
    }

    #[test]
    fn test_status_and_search_combine() {
        let filter = ListFilter::new("pendiente", "CAJA");
        let result = filter.apply(&rows());
        assert_eq!(result, vec![rows()[0].clone()]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = ListFilter::new("all", "caja");
        assert_eq!(filter.apply(&rows()).len(), 2);
    }

    #[test]
    fn test_sequence_marks_older_tickets_stale() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
