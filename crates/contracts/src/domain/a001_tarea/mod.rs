pub mod aggregate;

pub use aggregate::{Tarea, TareaDto, TareasPageQuery, TareasPaginadas, ESTADOS_TAREA};
