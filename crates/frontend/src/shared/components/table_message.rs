use leptos::prelude::*;

/// Full-width table row used for loading, empty and error states
#[component]
pub fn TableMessageRow(
    #[prop(into)] text: String,
    /// Number of columns the row spans
    columns: usize,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    view! {
        <tr class="table__row table__row--message">
            <td
                class="table__cell table__cell--center"
                class:text-danger=error
                colspan=columns.to_string()
            >
                {text}
            </td>
        </tr>
    }
}
