use contracts::domain::a001_tarea::ESTADOS_TAREA;
use leptos::prelude::*;
use thaw::*;

use super::model::TareaFormValues;
use super::view_model::TareaFormViewModel;
use crate::shared::components::ui::input::Input as FormInput;
use crate::shared::components::ui::select::Select as FormSelect;
use crate::shared::modal::Modal;

#[component]
pub fn TareaForm(
    /// Tarea being edited; `None` creates a new one
    id_tarea: Option<i64>,
    initial: TareaFormValues,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TareaFormViewModel::new(id_tarea, initial);

    let title = match id_tarea {
        Some(id) => format!("Editar tarea #{}", id),
        None => "Nueva tarea".to_string(),
    };
    let estado_options = Signal::derive(|| {
        ESTADOS_TAREA
            .iter()
            .map(|e| (e.to_string(), e.to_string()))
            .collect::<Vec<_>>()
    });

    let locked = Signal::derive(move || vm.saving.get());

    let footer = move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=locked
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <FormInput
                    label="Usuario (id)"
                    id="tarea-id_usuario"
                    input_type="number"
                    value=vm.id_usuario
                    disabled=locked
                    required=true
                />
                <FormInput
                    label="Descripción"
                    id="tarea-descripcion"
                    value=vm.descripcion
                    disabled=locked
                    placeholder="Describe la tarea"
                />
                <FormInput
                    label="Inicio"
                    id="tarea-fecha_hora_init"
                    input_type="datetime-local"
                    value=vm.fecha_hora_init
                    disabled=locked
                    required=true
                />
                <FormInput
                    label="Fin"
                    id="tarea-fecha_hora_fin"
                    input_type="datetime-local"
                    value=vm.fecha_hora_fin
                    disabled=locked
                />
                <FormSelect
                    label="Estado"
                    id="tarea-estado"
                    value=vm.estado
                    disabled=locked
                    options=estado_options
                />
            </form>
        </Modal>
    }
}
