pub mod state;

use contracts::domain::a002_venta::{NuevaVenta, Venta};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::HtmlInputElement;

use self::state::create_state;
use super::details::VentaEditForm;
use crate::domain::a002_venta::api;
use crate::domain::a002_venta::status::{
    request_transition, resolve_submission, EstadoVenta, SubmitOutcome, ToggleStep,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{tab_label_for_key, TAB_VENTA_DETALLE};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_message::TableMessageRow;
use crate::shared::components::ui::select::Select as FormSelect;
use crate::shared::date_utils::{format_wall_clock, local_wall_clock_iso};
use crate::shared::dialogs::{confirm, notify};
use crate::shared::export::export_cache;
use crate::shared::icons::icon;
use crate::shared::list_utils::{LoadStatus, SearchInput, ALL_STATUSES};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use crate::system::auth::storage::save_data_venta;

const COLUMNS: usize = 7;

#[component]
pub fn VentasList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth, _) = use_auth();
    let state = create_state();
    let editing = RwSignal::new(None::<Venta>);
    let estado_filter = RwSignal::new(ALL_STATUSES.to_string());

    let load_page = move |page: usize| {
        if auth.with_untracked(|a| a.user.is_none()) {
            state.update(|s| {
                s.sequence.issue();
                s.rows.clear();
                s.cache.clear();
                s.status = LoadStatus::Unauthenticated;
            });
            return;
        }

        let mut ticket = 0;
        state.update(|s| ticket = s.begin_load());

        spawn_local(async move {
            let fetched = api::get_ventas().await;
            let mut applied = false;
            state.update(|s| applied = s.apply_load(ticket, page, fetched));
            if !applied {
                log!("Discarding stale ventas response (ticket {})", ticket);
            }
        });
    };

    let reload = move || load_page(state.with_untracked(|s| s.page));

    Effect::new(move |_| {
        let estado = estado_filter.get();
        auth.track();
        untrack(move || {
            state.update(|s| s.estado_filter = estado);
            load_page(1);
        });
    });

    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.search = text);
        load_page(1);
    });

    let open_detalle = move || {
        tabs_store.open_tab(TAB_VENTA_DETALLE, tab_label_for_key(TAB_VENTA_DETALLE));
    };

    let create_venta = move || {
        let Some(user) = auth.get_untracked().user else {
            notify("Usuario no autenticado.");
            return;
        };
        let nueva = NuevaVenta {
            id_usuario: user.id_usuario,
            fecha_hora: local_wall_clock_iso(),
        };
        log!("Creating venta for user {} at {}", nueva.id_usuario, nueva.fecha_hora);
        spawn_local(async move {
            match api::create_venta(&nueva).await {
                Ok(resp) => {
                    save_data_venta(&resp.data_venta);
                    notify("Venta creada exitosamente.");
                    open_detalle();
                }
                Err(e) => {
                    log::error!("Failed to create venta: {}", e);
                    notify("No se pudo crear la venta.");
                }
            }
        });
    };

    let show_detalle = move |venta: Venta| match serde_json::to_value(&venta) {
        Ok(value) => {
            save_data_venta(&value);
            open_detalle();
        }
        Err(e) => log::error!("Failed to serialize venta {}: {}", venta.id_venta, e),
    };

    let open_edit = move |id_venta: i64| {
        spawn_local(async move {
            match api::get_venta_by_id(id_venta).await {
                Ok(venta) => editing.set(Some(venta)),
                Err(e) => {
                    log::error!("Failed to load venta {}: {}", id_venta, e);
                    notify("No se pudieron cargar los datos de la venta.");
                }
            }
        });
    };

    let toggle_estado = move |venta: &Venta, input: HtmlInputElement| {
        let id_venta = venta.id_venta;
        let step = request_transition(EstadoVenta::from_flag(venta.estado), input.checked(), confirm);
        match step {
            ToggleStep::Unchanged => {}
            ToggleStep::Rejected {
                restore_checked,
                message,
            } => {
                input.set_checked(restore_checked);
                notify(message);
            }
            ToggleStep::Declined { restore_checked } => input.set_checked(restore_checked),
            ToggleStep::Submit { nuevo_estado } => {
                spawn_local(async move {
                    let result = api::cambiar_estado(id_venta, nuevo_estado).await;
                    if let Err(e) = &result {
                        log::error!("Failed to cancel venta {}: {}", id_venta, e);
                    }
                    match resolve_submission(&result) {
                        SubmitOutcome::Reload { message } => {
                            notify(message);
                            reload();
                        }
                        SubmitOutcome::Revert {
                            restore_checked,
                            message,
                        } => {
                            input.set_checked(restore_checked);
                            notify(message);
                        }
                    }
                });
            }
        }
    };

    let export = move || {
        let cache = state.with_untracked(|s| s.cache.clone());
        export_cache(&cache, "ventas.csv");
    };

    let estado_options = Signal::derive(|| {
        vec![
            (ALL_STATUSES.to_string(), "Todas".to_string()),
            (EstadoVenta::Activa.key().to_string(), "Activas".to_string()),
            (EstadoVenta::Cancelada.key().to_string(), "Canceladas".to_string()),
        ]
    });

    let active_filters_count = Signal::derive(move || {
        state.with(|s| usize::from(s.estado_filter != ALL_STATUSES) + usize::from(!s.search.is_empty()))
    });

    let render_row = move |venta: Venta| {
        let estado = EstadoVenta::from_flag(venta.estado);
        let badge_color = match estado {
            EstadoVenta::Activa => BadgeColor::Success,
            EstadoVenta::Cancelada => BadgeColor::Danger,
        };
        let id_venta = venta.id_venta;
        let for_toggle = venta.clone();
        let for_detalle = venta.clone();
        view! {
            <TableRow>
                <TableCell><TableCellLayout>{venta.id_venta}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>{format_wall_clock(&venta.fecha_hora)}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{venta.nombre_usuario.clone()}</TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{venta.metodo_pago.clone()}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <span class="table__number">{format!("{:.2}", venta.total.value())}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=badge_color>
                            {estado.label()}
                        </Badge>
                        <input
                            type="checkbox"
                            role="switch"
                            class="form-check-input venta-status-switch"
                            id=format!("switch-{}", id_venta)
                            prop:checked=venta.estado
                            on:change=move |ev| {
                                toggle_estado(&for_toggle, event_target::<HtmlInputElement>(&ev))
                            }
                        />
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title="Editar"
                            on_click=move |_| open_edit(id_venta)
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title="Detalles"
                            on_click=move |_| show_detalle(for_detalle.clone())
                        >
                            {icon("eye")}
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a002_ventas--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("sales")}
                    <h1 class="page__title">"Ventas"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| create_venta()>
                        {icon("plus")}
                        " Nueva venta"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " Exportar CSV"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel active_filters_count=active_filters_count>
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FormSelect label="Estado" id="filter-estado-venta" value=estado_filter options=estado_options />
                        <SearchInput value=search_value on_change=on_search placeholder="Buscar por id, usuario o método de pago..." />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                                <TableHeaderCell>"Método de pago"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let (status, rows) = state.with(|s| (s.status.clone(), s.rows.clone()));
                                match status {
                                    LoadStatus::Loading => view! {
                                        <TableMessageRow text="Cargando ventas..." columns=COLUMNS />
                                    }
                                    .into_any(),
                                    LoadStatus::Unauthenticated => view! {
                                        <TableMessageRow text="Usuario no autenticado." columns=COLUMNS error=true />
                                    }
                                    .into_any(),
                                    LoadStatus::Failed(msg) => view! {
                                        <TableMessageRow text=msg columns=COLUMNS error=true />
                                    }
                                    .into_any(),
                                    LoadStatus::Loaded if rows.is_empty() => view! {
                                        <TableMessageRow text="No se encontraron ventas." columns=COLUMNS />
                                    }
                                    .into_any(),
                                    LoadStatus::Loaded => {
                                        rows.into_iter().map(render_row).collect_view().into_any()
                                    }
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    on_page_change=Callback::new(load_page)
                />
            </div>

            {move || {
                editing.get().map(|venta| {
                    view! {
                        <VentaEditForm
                            venta=venta
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                reload();
                            })
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    }
                })
            }}
        </PageFrame>
    }
}
