//! Sub-page opened after creating a venta or from the detail button.
//! Shows the sale stored under `data_venta`.

use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::storage::get_data_venta;

/// Top-level fields of the stored sale as `(key, text)` pairs
pub fn detail_fields(data: &Value) -> Vec<(String, String)> {
    match data {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::Null => "-".to_string(),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn VentaDetalle() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    // Re-read on every tab switch: a new venta may have been stored meanwhile.
    let data = Signal::derive(move || {
        tabs_store.active.track();
        get_data_venta()
    });

    let body = move || match data.get() {
        None => view! {
            <div class="alert alert--info">"No hay una venta seleccionada."</div>
        }
        .into_any(),
        Some(value) => {
            let raw = serde_json::to_string_pretty(&value).unwrap_or_default();
            let fields = detail_fields(&value);
            view! {
                <div class="details-grid">
                    {fields
                        .into_iter()
                        .map(|(key, text)| view! {
                            <div class="details-grid__label">{key}</div>
                            <div class="details-grid__value">{text}</div>
                        })
                        .collect_view()}
                </div>
                <pre class="json-view">{raw}</pre>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id="a002_venta--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("sales")}
                    <h1 class="page__title">"Detalle de venta"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| tabs_store.open_tab("a002_ventas", "Ventas")
                    >
                        "Volver a ventas"
                    </Button>
                </div>
            </div>
            <div class="page__content">{body}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_fields_keep_order_and_stringify() {
        let value: Value = serde_json::from_str(
            r#"{"id_venta": 41, "fecha_hora": "2024-06-01T10:00:00", "total": null, "estado": true}"#,
        )
        .unwrap();
        let fields = detail_fields(&value);
        assert_eq!(fields[0], ("id_venta".to_string(), "41".to_string()));
        assert_eq!(fields[1].1, "2024-06-01T10:00:00");
        assert_eq!(fields[2].1, "-");
        assert_eq!(fields[3].1, "true");
    }

    #[test]
    fn test_non_object_has_no_fields() {
        assert!(detail_fields(&Value::from(3)).is_empty());
    }
}
