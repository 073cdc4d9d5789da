//! Reconciles what the tareas services return with the page being shown.
//!
//! Operarios get their whole set and are paginated here; every other role
//! gets a server page whose status/search filtering only covers that page.

use contracts::domain::a001_tarea::{Tarea, TareasPaginadas};

use crate::shared::list_utils::{ListFilter, Searchable};
use crate::shared::pagination::{page_slice, total_pages_for};

impl Searchable for Tarea {
    fn status_key(&self) -> String {
        self.estado.clone()
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.descripcion.to_lowercase().contains(needle)
    }
}

/// Result of the fetch step, by role
#[derive(Debug, Clone)]
pub enum TareasSource {
    /// Complete set owned by an operario
    Owned(Vec<Tarea>),
    /// One server page for privileged roles
    ServerPage(TareasPaginadas),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTareas {
    /// Fetched records before filtering; replaces the page cache
    pub cache: Vec<Tarea>,
    /// Records displayed on the requested page
    pub rows: Vec<Tarea>,
    pub total_pages: usize,
}

pub fn reconcile(
    source: TareasSource,
    page: usize,
    page_size: usize,
    filter: &ListFilter,
) -> LoadedTareas {
    match source {
        TareasSource::Owned(all) => {
            let filtered = filter.apply(&all);
            LoadedTareas {
                total_pages: total_pages_for(filtered.len(), page_size),
                rows: page_slice(&filtered, page, page_size),
                cache: all,
            }
        }
        TareasSource::ServerPage(resp) => {
            let rows = filter.apply(&resp.tareas);
            let total_pages = match resp.total_pages {
                Some(n) if n > 0 => n,
                _ => {
                    let count = resp
                        .total_tareas
                        .filter(|&n| n > 0)
                        .unwrap_or(rows.len());
                    total_pages_for(count, page_size)
                }
            };
            LoadedTareas {
                cache: resp.tareas,
                rows,
                total_pages,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::page_window;

    fn tarea(id: i64, estado: &str, descripcion: &str) -> Tarea {
        Tarea {
            id_tarea: id,
            id_usuario: 9,
            descripcion: descripcion.to_string(),
            fecha_hora_init: "2024-05-01T08:00:00.000Z".to_string(),
            fecha_hora_fin: None,
            estado: estado.to_string(),
        }
    }

    fn owned(n: i64) -> Vec<Tarea> {
        (1..=n)
            .map(|i| {
                let estado = if i % 3 == 0 { "finalizada" } else { "pendiente" };
                tarea(i, estado, &format!("Tarea numero {}", i))
            })
            .collect()
    }

    #[test]
    fn test_operario_total_pages_is_ceil() {
        for n in [0, 1, 9, 10, 11, 25, 40] {
            let loaded = reconcile(
                TareasSource::Owned(owned(n)),
                1,
                10,
                &ListFilter::default(),
            );
            let expected = ((n as usize) + 9) / 10;
            assert_eq!(loaded.total_pages, expected.max(1), "n = {}", n);
            assert_eq!(loaded.cache.len(), n as usize);
        }
    }

    #[test]
    fn test_operario_pages_cover_filtered_set_once() {
        let all = owned(37);
        let filter = ListFilter::new("pendiente", "tarea");
        let expected = filter.apply(&all);
        let first = reconcile(TareasSource::Owned(all.clone()), 1, 10, &filter);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let loaded = reconcile(TareasSource::Owned(all.clone()), page, 10, &filter);
            assert!(loaded.rows.len() <= 10);
            seen.extend(loaded.rows);
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_server_page_filters_only_the_slice() {
        let resp = TareasPaginadas {
            tareas: vec![
                tarea(1, "pendiente", "Llamar proveedor"),
                tarea(2, "finalizada", "Cerrar caja"),
            ],
            total_tareas: Some(42),
            total_pages: Some(5),
            ..Default::default()
        };
        let loaded = reconcile(
            TareasSource::ServerPage(resp),
            3,
            10,
            &ListFilter::new("finalizada", ""),
        );
        assert_eq!(loaded.rows.len(), 1);
        assert_eq!(loaded.cache.len(), 2);
        assert_eq!(loaded.total_pages, 5);
    }

    #[test]
    fn test_server_totals_fallback() {
        let resp = TareasPaginadas {
            tareas: owned(10),
            total_tareas: Some(31),
            total_pages: None,
            ..Default::default()
        };
        let loaded = reconcile(TareasSource::ServerPage(resp), 1, 10, &ListFilter::default());
        assert_eq!(loaded.total_pages, 4);

        let resp = TareasPaginadas {
            tareas: owned(3),
            total_tareas: Some(0),
            total_pages: Some(0),
            ..Default::default()
        };
        let loaded = reconcile(TareasSource::ServerPage(resp), 1, 10, &ListFilter::default());
        assert_eq!(loaded.total_pages, 1);
    }

    #[test]
    fn test_empty_server_page_shows_single_disabled_page() {
        let resp: TareasPaginadas =
            serde_json::from_str(r#"{"tareas": [], "total_tareas": 0, "total_pages": 1}"#).unwrap();
        let loaded = reconcile(TareasSource::ServerPage(resp), 1, 10, &ListFilter::default());
        assert!(loaded.rows.is_empty());
        assert_eq!(loaded.total_pages, 1);

        let items = page_window(1, loaded.total_pages);
        assert_eq!(items.len(), 3);
        assert!(items.first().map(|i| i.disabled).unwrap_or(false));
        assert!(items.last().map(|i| i.disabled).unwrap_or(false));
        assert_eq!(items[1].target, 1);
    }
}
