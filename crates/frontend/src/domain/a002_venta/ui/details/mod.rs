//! Payment method edit modal of a venta

use contracts::domain::a002_venta::{ActualizarVenta, MetodoPago, Venta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_venta::api;
use crate::shared::components::ui::select::Select as FormSelect;
use crate::shared::dialogs::notify;
use crate::shared::modal::Modal;

/// Id of the method whose name matches the one shown on the venta
pub fn preselect_metodo(metodos: &[MetodoPago], metodo_pago: &str) -> Option<i64> {
    let wanted = metodo_pago.trim();
    metodos
        .iter()
        .find(|m| m.nombre.trim().eq_ignore_ascii_case(wanted))
        .map(|m| m.id_tipo)
}

/// Select options: `(id_tipo, nombre)`
pub fn metodo_options(metodos: &[MetodoPago]) -> Vec<(String, String)> {
    metodos
        .iter()
        .map(|m| (m.id_tipo.to_string(), m.nombre.clone()))
        .collect()
}

pub const ACTUALIZACION_OK: &str = "Venta actualizada exitosamente.";
pub const ACTUALIZACION_FALLIDA: &str = "No se pudo actualizar la venta.";

/// What the form does once the update call returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStep {
    /// Close the modal first, then acknowledge; the list reloads after
    CloseThenNotify(&'static str),
    /// Modal stays open with the failure acknowledgment
    StayOpen(&'static str),
}

pub fn update_step<E>(result: &Result<(), E>) -> UpdateStep {
    match result {
        Ok(()) => UpdateStep::CloseThenNotify(ACTUALIZACION_OK),
        Err(_) => UpdateStep::StayOpen(ACTUALIZACION_FALLIDA),
    }
}

#[component]
pub fn VentaEditForm(venta: Venta, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let id_venta = venta.id_venta;
    let metodo_actual = venta.metodo_pago.clone();
    let metodos = RwSignal::new(Vec::<MetodoPago>::new());
    let tipo_pago = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match api::get_metodos_pago().await {
            Ok(list) => {
                if let Some(id) = preselect_metodo(&list, &metodo_actual) {
                    tipo_pago.set(id.to_string());
                } else if let Some(first) = list.first() {
                    tipo_pago.set(first.id_tipo.to_string());
                }
                metodos.set(list);
            }
            Err(e) => {
                log::error!("Failed to load metodos de pago: {}", e);
                notify("Error al cargar los métodos de pago.");
            }
        }
    });

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let Ok(id_tipo) = tipo_pago.get_untracked().parse::<i64>() else {
            log::error!("No payment method selected for venta {}", id_venta);
            notify(ACTUALIZACION_FALLIDA);
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let result = api::update_venta(id_venta, &ActualizarVenta { tipo_pago: id_tipo }).await;
            saving.set(false);
            if let Err(e) = &result {
                log::error!("Failed to update venta {}: {}", id_venta, e);
            }
            match update_step(&result) {
                UpdateStep::CloseThenNotify(message) => {
                    on_saved.run(());
                    notify(message);
                }
                UpdateStep::StayOpen(message) => notify(message),
            }
        });
    };

    let options = Signal::derive(move || metodos.with(|m| metodo_options(m)));
    let footer = move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| save()
                >
                    "Guardar"
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=format!("Editar venta #{}", id_venta) on_close=on_cancel footer=footer>
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }
            >
                <Show
                    when=move || metodos.with(|m| !m.is_empty())
                    fallback=|| view! { <p class="form__hint">"No se encontraron métodos de pago"</p> }
                >
                    <FormSelect label="Método de pago" id="edit-tipo-pago" value=tipo_pago options=options disabled=Signal::derive(move || saving.get()) />
                </Show>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metodos() -> Vec<MetodoPago> {
        vec![
            MetodoPago { id_tipo: 1, nombre: "Efectivo".to_string() },
            MetodoPago { id_tipo: 2, nombre: "Tarjeta".to_string() },
            MetodoPago { id_tipo: 5, nombre: "Transferencia".to_string() },
        ]
    }

    #[test]
    fn test_preselect_by_name() {
        assert_eq!(preselect_metodo(&metodos(), "tarjeta"), Some(2));
        assert_eq!(preselect_metodo(&metodos(), " Transferencia "), Some(5));
        assert_eq!(preselect_metodo(&metodos(), "Nequi"), None);
    }

    #[test]
    fn test_options_use_ids_as_values() {
        let options = metodo_options(&metodos());
        assert_eq!(options[2], ("5".to_string(), "Transferencia".to_string()));
    }

    #[test]
    fn test_update_closes_before_acknowledging() {
        assert_eq!(
            update_step::<String>(&Ok(())),
            UpdateStep::CloseThenNotify("Venta actualizada exitosamente.")
        );
        assert_eq!(
            update_step(&Err("409")),
            UpdateStep::StayOpen("No se pudo actualizar la venta.")
        );
    }
}
