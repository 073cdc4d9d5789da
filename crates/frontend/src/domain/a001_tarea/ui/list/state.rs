use contracts::domain::a001_tarea::Tarea;
use leptos::prelude::*;
use std::fmt::Display;

use crate::domain::a001_tarea::loader::LoadedTareas;
use crate::shared::config::config;
use crate::shared::list_utils::{LoadStatus, RequestSequence, ALL_STATUSES};

#[derive(Clone, Debug)]
pub struct TareasListState {
    /// Rows shown on the current page
    pub rows: Vec<Tarea>,
    /// Last fetched records, used by the edit modal and the CSV export
    pub cache: Vec<Tarea>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub estado_filter: String,
    pub search: String,
    /// `datetime-local` values of the server-side date range
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub status: LoadStatus,
    pub sequence: RequestSequence,
}

impl Default for TareasListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            cache: Vec::new(),
            page: 1,
            page_size: config().lists.page_size,
            total_pages: 1,
            estado_filter: ALL_STATUSES.to_string(),
            search: String::new(),
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            status: LoadStatus::Loading,
            sequence: RequestSequence::default(),
        }
    }
}

impl TareasListState {
    /// Issues the ticket for a new load and shows the loading row
    pub fn begin_load(&mut self) -> u64 {
        self.status = LoadStatus::Loading;
        self.sequence.issue()
    }

    /// Applies the outcome of the load holding `ticket`.
    ///
    /// Returns `false` when a newer load was started meanwhile; nothing is
    /// changed then. A failure only swaps the status, the cursor stays as is.
    pub fn apply_load<E: Display>(
        &mut self,
        ticket: u64,
        page: usize,
        result: Result<LoadedTareas, E>,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        match result {
            Ok(loaded) => {
                self.page = page;
                self.total_pages = loaded.total_pages;
                self.rows = loaded.rows;
                self.cache = loaded.cache;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("Failed to load tareas: {}", e);
                self.status = LoadStatus::Failed("Error al cargar tareas.".to_string());
            }
        }
        true
    }
}

pub fn create_state() -> RwSignal<TareasListState> {
    RwSignal::new(TareasListState::default())
}
