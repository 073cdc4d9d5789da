use contracts::domain::a002_venta::Venta;
use leptos::prelude::*;
use std::fmt::Display;

use crate::domain::a002_venta::loader::paginate;
use crate::shared::config::config;
use crate::shared::list_utils::{ListFilter, LoadStatus, RequestSequence, ALL_STATUSES};

#[derive(Clone, Debug)]
pub struct VentasListState {
    /// Complete list from the last load; exported as-is
    pub cache: Vec<Venta>,
    pub rows: Vec<Venta>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub estado_filter: String,
    pub search: String,
    pub status: LoadStatus,
    pub sequence: RequestSequence,
}

impl Default for VentasListState {
    fn default() -> Self {
        Self {
            cache: Vec::new(),
            rows: Vec::new(),
            page: 1,
            page_size: config().lists.page_size,
            total_pages: 1,
            estado_filter: ALL_STATUSES.to_string(),
            search: String::new(),
            status: LoadStatus::Loading,
            sequence: RequestSequence::default(),
        }
    }
}

impl VentasListState {
    /// Issues the ticket for a new load and shows the loading row
    pub fn begin_load(&mut self) -> u64 {
        self.status = LoadStatus::Loading;
        self.sequence.issue()
    }

    /// Applies the complete list fetched by the load holding `ticket`,
    /// paginated with the filters active right now.
    ///
    /// Returns `false` and changes nothing for a stale ticket. A failure
    /// leaves the cursor and the cache untouched.
    pub fn apply_load<E: Display>(
        &mut self,
        ticket: u64,
        page: usize,
        result: Result<Vec<Venta>, E>,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        match result {
            Ok(all) => {
                let filter = ListFilter::new(&self.estado_filter, &self.search);
                let loaded = paginate(&all, page, self.page_size, &filter);
                self.page = page;
                self.total_pages = loaded.total_pages;
                self.rows = loaded.rows;
                self.cache = all;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("Failed to load ventas: {}", e);
                self.status = LoadStatus::Failed("Error al cargar los datos.".to_string());
            }
        }
        true
    }
}

pub fn create_state() -> RwSignal<VentasListState> {
    RwSignal::new(VentasListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ventas(n: i64) -> Vec<Venta> {
        (1..=n)
            .map(|id| Venta {
                id_venta: id,
                fecha_hora: "2024-06-01T10:00:00".to_string(),
                nombre_usuario: "Ana".to_string(),
                metodo_pago: "Efectivo".to_string(),
                total: 5.0.into(),
                estado: id % 4 != 0,
            })
            .collect()
    }

    fn state_on_page_two() -> VentasListState {
        let mut state = VentasListState {
            page_size: 10,
            ..VentasListState::default()
        };
        let ticket = state.begin_load();
        assert!(state.apply_load::<String>(ticket, 2, Ok(ventas(25))));
        state
    }

    #[test]
    fn test_success_paginates_with_current_filter() {
        let mut state = state_on_page_two();
        assert_eq!((state.page, state.total_pages), (2, 3));
        assert_eq!(state.rows.first().map(|v| v.id_venta), Some(11));

        state.estado_filter = "cancelada".to_string();
        let ticket = state.begin_load();
        assert!(state.apply_load::<String>(ticket, 1, Ok(ventas(25))));
        assert_eq!(state.total_pages, 1);
        assert!(state.rows.iter().all(|v| !v.estado));
        assert_eq!(state.cache.len(), 25);
    }

    #[test]
    fn test_failure_keeps_pagination() {
        let mut state = state_on_page_two();
        let ticket = state.begin_load();
        assert!(state.apply_load::<&str>(ticket, 3, Err("500")));
        assert_eq!((state.page, state.total_pages), (2, 3));
        assert_eq!(state.cache.len(), 25);
        assert_eq!(
            state.status,
            LoadStatus::Failed("Error al cargar los datos.".to_string())
        );
    }

    #[test]
    fn test_stale_response_changes_nothing() {
        let mut state = state_on_page_two();
        let slow = state.begin_load();
        let fresh = state.begin_load();

        assert!(!state.apply_load::<String>(slow, 1, Ok(ventas(3))));
        assert_eq!((state.page, state.total_pages), (2, 3));
        assert_eq!(state.cache.len(), 25);
        assert_eq!(state.status, LoadStatus::Loading);

        assert!(state.apply_load::<String>(fresh, 1, Ok(ventas(3))));
        assert_eq!((state.page, state.total_pages), (1, 1));
    }
}
