pub mod aggregate;

pub use aggregate::{
    ActualizarVenta, CambiarEstadoVenta, Importe, MetodoPago, NuevaVenta, NuevaVentaResponse, Venta,
};
