use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::TareaFormValues;
use crate::domain::a001_tarea::api;
use crate::shared::dialogs::notify;

/// Form state of the tarea modal
#[derive(Clone, Copy)]
pub struct TareaFormViewModel {
    /// `Some` when editing an existing tarea
    pub id_tarea: Option<i64>,
    pub id_usuario: RwSignal<String>,
    pub descripcion: RwSignal<String>,
    pub fecha_hora_init: RwSignal<String>,
    pub fecha_hora_fin: RwSignal<String>,
    pub estado: RwSignal<String>,
    pub saving: RwSignal<bool>,
}

impl TareaFormViewModel {
    pub fn new(id_tarea: Option<i64>, initial: TareaFormValues) -> Self {
        Self {
            id_tarea,
            id_usuario: RwSignal::new(initial.id_usuario),
            descripcion: RwSignal::new(initial.descripcion),
            fecha_hora_init: RwSignal::new(initial.fecha_hora_init),
            fecha_hora_fin: RwSignal::new(initial.fecha_hora_fin),
            estado: RwSignal::new(initial.estado),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id_tarea.is_some()
    }

    pub fn values(&self) -> TareaFormValues {
        TareaFormValues {
            id_usuario: self.id_usuario.get_untracked(),
            descripcion: self.descripcion.get_untracked(),
            fecha_hora_init: self.fecha_hora_init.get_untracked(),
            fecha_hora_fin: self.fecha_hora_fin.get_untracked(),
            estado: self.estado.get_untracked(),
        }
    }

    /// Submit the form. `on_saved` runs before the acknowledgment; on failure
    /// the form stays open.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let (ok_message, fail_message) = if self.is_edit_mode() {
            ("Tarea actualizada correctamente.", "No se pudo actualizar la tarea.")
        } else {
            ("Tarea creada correctamente.", "No se pudo crear la tarea.")
        };

        let dto = match self.values().to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                log::error!("Invalid tarea form: {}", e);
                notify(fail_message);
                return;
            }
        };

        let id_tarea = self.id_tarea;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let result = match id_tarea {
                Some(id) => api::update_by_id(id, &dto).await,
                None => api::create(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(tarea) => {
                    log::info!("Tarea {} saved", tarea.id_tarea);
                    on_saved.run(());
                    notify(ok_message);
                }
                Err(e) => {
                    log::error!("Failed to save tarea: {}", e);
                    notify(fail_message);
                }
            }
        });
    }
}
