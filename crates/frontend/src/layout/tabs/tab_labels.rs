//! Tab keys and titles, shared by the sidebar, the registry and URL restore

pub const TAB_TAREAS: &str = "a001_tareas";
pub const TAB_VENTAS: &str = "a002_ventas";
pub const TAB_VENTA_DETALLE: &str = "a002_venta_detalle";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        TAB_TAREAS => "Tareas",
        TAB_VENTAS => "Ventas",
        TAB_VENTA_DETALLE => "Detalle de venta",
        _ => "Desconocido",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        assert_eq!(tab_label_for_key(TAB_TAREAS), "Tareas");
        assert_eq!(tab_label_for_key(TAB_VENTA_DETALLE), "Detalle de venta");
        assert_eq!(tab_label_for_key("x"), "Desconocido");
    }
}
