use serde::{Deserialize, Serialize};

/// Status labels a tarea can carry. The API stores the label verbatim.
pub const ESTADOS_TAREA: &[&str] = &["pendiente", "en_proceso", "finalizada"];

/// Task record as returned by the tareas service.
///
/// Field order is significant: CSV export uses it as the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarea {
    pub id_tarea: i64,
    pub id_usuario: i64,
    #[serde(default)]
    pub descripcion: String,
    pub fecha_hora_init: String,
    #[serde(default)]
    pub fecha_hora_fin: Option<String>,
    #[serde(default)]
    pub estado: String,
}

/// Body for create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TareaDto {
    pub id_usuario: i64,
    pub descripcion: String,
    /// RFC 3339 UTC timestamp
    pub fecha_hora_init: String,
    pub fecha_hora_fin: Option<String>,
    pub estado: String,
}

/// Query for the server-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TareasPageQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
}

/// Server page of tareas. Totals are optional: older API versions omit them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TareasPaginadas {
    #[serde(default)]
    pub tareas: Vec<Tarea>,
    #[serde(default)]
    pub total_tareas: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tarea_without_end_date() {
        let json = r#"{
            "id_tarea": 7,
            "id_usuario": 3,
            "descripcion": "Revisar inventario",
            "fecha_hora_init": "2024-05-02T08:30:00.000Z",
            "estado": "pendiente"
        }"#;
        let tarea: Tarea = serde_json::from_str(json).unwrap();
        assert_eq!(tarea.id_tarea, 7);
        assert_eq!(tarea.fecha_hora_fin, None);
    }

    #[test]
    fn test_paginated_response_without_totals() {
        let page: TareasPaginadas = serde_json::from_str(r#"{"tareas": []}"#).unwrap();
        assert!(page.tareas.is_empty());
        assert_eq!(page.total_pages, None);
        assert_eq!(page.total_tareas, None);
    }

    #[test]
    fn test_query_skips_missing_dates() {
        let query = TareasPageQuery {
            page: 2,
            page_size: 10,
            fecha_inicio: None,
            fecha_fin: Some("2024-06-30".to_string()),
        };
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("fecha_inicio").is_none());
        assert_eq!(value["fecha_fin"], "2024-06-30");
    }
}
