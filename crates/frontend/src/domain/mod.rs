pub mod a001_tarea;
pub mod a002_venta;
