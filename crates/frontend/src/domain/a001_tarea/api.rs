use contracts::domain::a001_tarea::{Tarea, TareaDto, TareasPageQuery, TareasPaginadas};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, fetch_json, send_json};
use crate::shared::error::ApiError;

/// Fetch every tarea owned by a user
pub async fn get_by_user(id_usuario: i64) -> Result<Vec<Tarea>, ApiError> {
    fetch_json(Request::get(&api_url(&format!("/tareas/usuario/{}", id_usuario)))).await
}

/// Fetch one server page of tareas, optionally bounded by a date range
pub async fn get_paginated(query: &TareasPageQuery) -> Result<TareasPaginadas, ApiError> {
    let qs = serde_qs::to_string(query)?;
    fetch_json(Request::get(&api_url(&format!("/tareas/pag?{}", qs)))).await
}

/// Create new tarea
pub async fn create(dto: &TareaDto) -> Result<Tarea, ApiError> {
    send_json(Request::post(&api_url("/tareas")), dto).await
}

/// Update tarea
pub async fn update_by_id(id_tarea: i64, dto: &TareaDto) -> Result<Tarea, ApiError> {
    send_json(Request::put(&api_url(&format!("/tareas/{}", id_tarea))), dto).await
}
