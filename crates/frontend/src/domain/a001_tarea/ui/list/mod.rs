pub mod state;

use contracts::domain::a001_tarea::{Tarea, TareasPageQuery, ESTADOS_TAREA};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use super::details::{TareaForm, TareaFormValues};
use crate::domain::a001_tarea::api;
use crate::domain::a001_tarea::loader::{reconcile, TareasSource};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_message::TableMessageRow;
use crate::shared::components::ui::badge::{estado_tarea_variant, Badge as UiBadge};
use crate::shared::components::ui::input::Input as FormInput;
use crate::shared::components::ui::select::Select as FormSelect;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs::notify;
use crate::shared::export::export_cache;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFilter, LoadStatus, SearchInput, ALL_STATUSES};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;

const COLUMNS: usize = 7;

/// Form currently shown in the modal: `(id_tarea, values)`
type OpenForm = Option<(Option<i64>, TareaFormValues)>;

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn TareasList() -> impl IntoView {
    let (auth, _) = use_auth();
    let state = create_state();
    let open_form = RwSignal::<OpenForm>::new(None);

    let estado_filter = RwSignal::new(ALL_STATUSES.to_string());
    let fecha_inicio = RwSignal::new(String::new());
    let fecha_fin = RwSignal::new(String::new());

    let is_operario = Signal::derive(move || auth.get().is_operario());

    let load_page = move |page: usize| {
        let Some(user) = auth.get_untracked().user else {
            state.update(|s| {
                s.sequence.issue();
                s.rows.clear();
                s.cache.clear();
                s.status = LoadStatus::Unauthenticated;
            });
            return;
        };

        let mut ticket = 0;
        state.update(|s| ticket = s.begin_load());
        let (filter, page_size, query) = state.with_untracked(|s| {
            (
                ListFilter::new(&s.estado_filter, &s.search),
                s.page_size,
                TareasPageQuery {
                    page,
                    page_size: s.page_size,
                    fecha_inicio: non_empty(s.fecha_inicio.clone()),
                    fecha_fin: non_empty(s.fecha_fin.clone()),
                },
            )
        });

        spawn_local(async move {
            let fetched = if user.is_operario() {
                api::get_by_user(user.id_usuario)
                    .await
                    .map(TareasSource::Owned)
            } else {
                api::get_paginated(&query)
                    .await
                    .map(TareasSource::ServerPage)
            };
            let result = fetched.map(|source| reconcile(source, page, page_size, &filter));

            let mut applied = false;
            state.update(|s| applied = s.apply_load(ticket, page, result));
            if !applied {
                log!("Discarding stale tareas response (ticket {})", ticket);
            }
        });
    };

    // Initial load, then back to page 1 whenever a filter or the session changes.
    Effect::new(move |_| {
        let estado = estado_filter.get();
        let inicio = fecha_inicio.get();
        let fin = fecha_fin.get();
        auth.track();
        untrack(move || {
            state.update(|s| {
                s.estado_filter = estado;
                s.fecha_inicio = inicio;
                s.fecha_fin = fin;
            });
            load_page(1);
        });
    });

    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.search = text);
        load_page(1);
    });

    let open_create = move || {
        let id_usuario = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id_usuario));
        open_form.set(Some((None, TareaFormValues::new_for(id_usuario))));
    };

    let open_edit = move |id_tarea: i64| {
        let found = state.with_untracked(|s| {
            s.cache.iter().find(|t| t.id_tarea == id_tarea).cloned()
        });
        match found {
            Some(tarea) => open_form.set(Some((Some(id_tarea), TareaFormValues::from_tarea(&tarea)))),
            None => notify("No se encontró la tarea para editar (recarga la página)."),
        }
    };

    let export = move || {
        let (cache, page) = state.with_untracked(|s| (s.cache.clone(), s.page));
        export_cache(&cache, &format!("tareas_page{}.csv", page));
    };

    let estado_options = Signal::derive(|| {
        std::iter::once((ALL_STATUSES.to_string(), "Todos".to_string()))
            .chain(ESTADOS_TAREA.iter().map(|e| (e.to_string(), e.to_string())))
            .collect::<Vec<_>>()
    });

    let active_filters_count = Signal::derive(move || {
        state.with(|s| {
            [
                s.estado_filter != ALL_STATUSES,
                !s.search.is_empty(),
                !s.fecha_inicio.is_empty(),
                !s.fecha_fin.is_empty(),
            ]
            .iter()
            .filter(|active| **active)
            .count()
        })
    });

    let render_row = move |tarea: Tarea| {
        let id_tarea = tarea.id_tarea;
        let fin = tarea
            .fecha_hora_fin
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string());
        view! {
            <TableRow>
                <TableCell><TableCellLayout>{tarea.id_tarea}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{tarea.id_usuario}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{tarea.descripcion.clone()}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{format_datetime(&tarea.fecha_hora_init)}</TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{fin}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <UiBadge variant=estado_tarea_variant(&tarea.estado).to_string()>
                            {tarea.estado.clone()}
                        </UiBadge>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Show when=move || !is_operario.get()>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                attr:title="Editar"
                                on_click=move |_| open_edit(id_tarea)
                            >
                                {icon("edit")}
                            </Button>
                        </Show>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a001_tareas--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("tasks")}
                    <h1 class="page__title">"Tareas"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || !is_operario.get()>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                            {icon("plus")}
                            " Nueva tarea"
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " Exportar CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_page(state.with_untracked(|s| s.page))
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel active_filters_count=active_filters_count>
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FormSelect label="Estado" id="filter-estado" value=estado_filter options=estado_options />
                        <FormInput label="Desde" id="filter-fecha-inicio" input_type="date" value=fecha_inicio />
                        <FormInput label="Hasta" id="filter-fecha-fin" input_type="date" value=fecha_fin />
                        <SearchInput value=search_value on_change=on_search placeholder="Buscar por descripción..." />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                                <TableHeaderCell>"Descripción"</TableHeaderCell>
                                <TableHeaderCell>"Inicio"</TableHeaderCell>
                                <TableHeaderCell>"Fin"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let (status, rows) = state.with(|s| (s.status.clone(), s.rows.clone()));
                                match status {
                                    LoadStatus::Loading => view! {
                                        <TableMessageRow text="Cargando..." columns=COLUMNS />
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
                                        <TableMessageRow text="No se encontraron tareas." columns=COLUMNS />
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
                open_form.get().map(|(id_tarea, initial)| {
                    let on_saved = Callback::new(move |_| {
                        open_form.set(None);
                        let target = if id_tarea.is_some() {
                            state.with_untracked(|s| s.page)
                        } else {
                            1
                        };
                        load_page(target);
                    });
                    view! {
                        <TareaForm
                            id_tarea=id_tarea
                            initial=initial
                            on_saved=on_saved
                            on_cancel=Callback::new(move |_| open_form.set(None))
                        />
                    }
                })
            }}
        </PageFrame>
    }
}
