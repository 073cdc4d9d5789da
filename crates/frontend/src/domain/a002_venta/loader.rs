//! Client-side paging of the ventas list.
//!
//! The sales service only returns the complete list, so every role filters
//! and slices locally.

use contracts::domain::a002_venta::Venta;

use super::status::EstadoVenta;
use crate::shared::list_utils::{ListFilter, Searchable};
use crate::shared::pagination::{page_slice, total_pages_for};

impl Searchable for Venta {
    fn status_key(&self) -> String {
        EstadoVenta::from_flag(self.estado).key().to_string()
    }

    fn matches_filter(&self, needle: &str) -> bool {
        self.id_venta.to_string().contains(needle)
            || self.nombre_usuario.to_lowercase().contains(needle)
            || self.metodo_pago.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedVentas {
    pub rows: Vec<Venta>,
    pub total_pages: usize,
}

pub fn paginate(all: &[Venta], page: usize, page_size: usize, filter: &ListFilter) -> LoadedVentas {
    let filtered = filter.apply(all);
    LoadedVentas {
        total_pages: total_pages_for(filtered.len(), page_size),
        rows: page_slice(&filtered, page, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venta(id: i64, usuario: &str, metodo: &str, estado: bool) -> Venta {
        Venta {
            id_venta: id,
            fecha_hora: "2024-06-01T10:00:00".to_string(),
            nombre_usuario: usuario.to_string(),
            metodo_pago: metodo.to_string(),
            total: (10.0 * id as f64).into(),
            estado,
        }
    }

    fn ventas() -> Vec<Venta> {
        (1..=25)
            .map(|i| {
                let metodo = if i % 2 == 0 { "Efectivo" } else { "Tarjeta" };
                venta(i, if i < 10 { "Ana" } else { "Luis" }, metodo, i % 5 != 0)
            })
            .collect()
    }

    #[test]
    fn test_status_filter_uses_keys() {
        let loaded = paginate(&ventas(), 1, 10, &ListFilter::new("cancelada", ""));
        let ids: Vec<i64> = loaded.rows.iter().map(|v| v.id_venta).collect();
        assert_eq!(ids, vec![5, 10, 15, 20, 25]);
        assert_eq!(loaded.total_pages, 1);
    }

    #[test]
    fn test_search_matches_user_method_or_id() {
        let all = ventas();
        assert_eq!(paginate(&all, 1, 50, &ListFilter::new("all", "ana")).rows.len(), 9);
        assert_eq!(paginate(&all, 1, 50, &ListFilter::new("all", "EFECTIVO")).rows.len(), 12);
        let by_id = paginate(&all, 1, 50, &ListFilter::new("all", "23"));
        assert_eq!(by_id.rows.len(), 1);
        assert_eq!(by_id.rows[0].id_venta, 23);
    }

    #[test]
    fn test_pages_partition_list() {
        let all = ventas();
        let filter = ListFilter::default();
        let first = paginate(&all, 1, 10, &filter);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(paginate(&all, page, 10, &filter).rows);
        }
        assert_eq!(seen, all);
    }
}
