/// CSV export of list data with a browser download
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::dialogs::notify;

pub const EMPTY_EXPORT_MESSAGE: &str = "No hay datos para exportar.";

/// Build CSV text from serializable records.
///
/// The header is the key list of the first record; every value is quoted and
/// embedded quotes are doubled. Returns `None` when there is nothing to export.
pub fn build_csv<T: Serialize>(rows: &[T]) -> Result<Option<String>, String> {
    let values = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Failed to serialize rows: {}", e))?;

    let header: Vec<String> = match values.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(_) => return Err("Rows must serialize to JSON objects".to_string()),
        None => return Ok(None),
    };

    let mut lines = Vec::with_capacity(values.len() + 1);
    lines.push(header.join(","));
    for value in &values {
        let row: Vec<String> = header
            .iter()
            .map(|key| quote_cell(&cell_text(value.get(key))))
            .collect();
        lines.push(row.join(","));
    }

    Ok(Some(lines.join("\r\n")))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Export rows to a CSV file and trigger the download.
///
/// Returns `Ok(false)` without touching the DOM when `rows` is empty.
pub fn export_to_csv<T: Serialize>(rows: &[T], filename: &str) -> Result<bool, String> {
    let Some(csv_content) = build_csv(rows)? else {
        return Ok(false);
    };

    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;

    Ok(true)
}

/// Export the cache of a list page, telling the user when it is empty
pub fn export_cache<T: Serialize>(rows: &[T], filename: &str) {
    match export_to_csv(rows, filename) {
        Ok(true) => log::info!("Exported {} rows to {}", rows.len(), filename),
        Ok(false) => notify(EMPTY_EXPORT_MESSAGE),
        Err(e) => log::error!("CSV export failed: {}", e),
    }
}

/// Create a Blob with CSV content
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger the browser download of a Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        nota: String,
        fin: Option<String>,
        activo: bool,
    }

    #[test]
    fn test_empty_rows_produce_nothing() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(build_csv(&rows).unwrap(), None);
    }

    #[test]
    fn test_header_plus_one_line_per_row() {
        let rows = vec![
            Row { id: 1, nota: "simple".into(), fin: None, activo: true },
            Row { id: 2, nota: "dice \"hola\", adiós".into(), fin: Some("2024-01-01".into()), activo: false },
            Row { id: 3, nota: String::new(), fin: None, activo: true },
        ];
        let csv = build_csv(&rows).unwrap().unwrap();
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines.len(), rows.len() + 1);
        assert_eq!(lines[0], "id,nota,fin,activo");
        assert_eq!(lines[1], r#""1","simple","","true""#);
        assert_eq!(lines[2], r#""2","dice ""hola"", adiós","2024-01-01","false""#);
    }

    #[test]
    fn test_venta_total_is_exported_as_received() {
        let ventas: Vec<contracts::domain::a002_venta::Venta> = serde_json::from_str(
            r#"[
                {"id_venta": 1, "fecha_hora": "2024-06-01T10:00:00", "total": "12.50", "estado": true},
                {"id_venta": 2, "fecha_hora": "2024-06-01T11:00:00", "total": 12, "estado": false}
            ]"#,
        )
        .unwrap();
        let csv = build_csv(&ventas).unwrap().unwrap();
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert!(lines[1].contains(r#","12.50","#), "{}", lines[1]);
        assert!(lines[2].contains(r#","12","#), "{}", lines[2]);
    }
}
