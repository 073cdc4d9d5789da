pub mod detalle;
pub mod details;
pub mod list;
