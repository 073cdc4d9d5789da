use contracts::domain::a002_venta::{
    ActualizarVenta, CambiarEstadoVenta, MetodoPago, NuevaVenta, NuevaVentaResponse, Venta,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, fetch_json, send_json, send_json_no_content};
use crate::shared::error::ApiError;

/// Fetch all ventas
pub async fn get_ventas() -> Result<Vec<Venta>, ApiError> {
    fetch_json(Request::get(&api_url("/ventas"))).await
}

/// Fetch venta by ID
pub async fn get_venta_by_id(id_venta: i64) -> Result<Venta, ApiError> {
    fetch_json(Request::get(&api_url(&format!("/ventas/{}", id_venta)))).await
}

/// Create an empty venta; lines are added on the detail page
pub async fn create_venta(data: &NuevaVenta) -> Result<NuevaVentaResponse, ApiError> {
    send_json(Request::post(&api_url("/ventas")), data).await
}

/// Change the payment method of a venta
pub async fn update_venta(id_venta: i64, data: &ActualizarVenta) -> Result<(), ApiError> {
    send_json_no_content(Request::put(&api_url(&format!("/ventas/{}", id_venta))), data).await
}

pub async fn cambiar_estado(id_venta: i64, estado: bool) -> Result<(), ApiError> {
    send_json_no_content(
        Request::patch(&api_url(&format!("/ventas/{}/estado", id_venta))),
        &CambiarEstadoVenta { estado },
    )
    .await
}

pub async fn get_metodos_pago() -> Result<Vec<MetodoPago>, ApiError> {
    fetch_json(Request::get(&api_url("/ventas/metodos-pago"))).await
}
