use chrono::{Local, TimeZone};
use contracts::domain::a001_tarea::{Tarea, TareaDto, ESTADOS_TAREA};
use std::fmt::Display;
use thiserror::Error;

use crate::shared::date_utils::{datetime_input_to_utc_in, to_datetime_input_in};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid user id: {0:?}")]
    InvalidUsuario(String),
    #[error("invalid start date: {0:?}")]
    InvalidFechaInicio(String),
}

/// Raw values of the tarea form inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TareaFormValues {
    pub id_usuario: String,
    pub descripcion: String,
    /// `datetime-local` value
    pub fecha_hora_init: String,
    /// `datetime-local` value, blank when the tarea is open
    pub fecha_hora_fin: String,
    pub estado: String,
}

impl Default for TareaFormValues {
    fn default() -> Self {
        Self {
            id_usuario: String::new(),
            descripcion: String::new(),
            fecha_hora_init: String::new(),
            fecha_hora_fin: String::new(),
            estado: ESTADOS_TAREA[0].to_string(),
        }
    }
}

impl TareaFormValues {
    /// Blank form for a new tarea, owned by `id_usuario` when known
    pub fn new_for(id_usuario: Option<i64>) -> Self {
        Self {
            id_usuario: id_usuario.map(|id| id.to_string()).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn from_tarea_in<Tz: TimeZone>(tarea: &Tarea, tz: &Tz) -> Self {
        Self {
            id_usuario: tarea.id_usuario.to_string(),
            descripcion: tarea.descripcion.clone(),
            fecha_hora_init: to_datetime_input_in(&tarea.fecha_hora_init, tz),
            fecha_hora_fin: tarea
                .fecha_hora_fin
                .as_deref()
                .map(|v| to_datetime_input_in(v, tz))
                .unwrap_or_default(),
            estado: tarea.estado.clone(),
        }
    }

    pub fn from_tarea(tarea: &Tarea) -> Self {
        Self::from_tarea_in(tarea, &Local)
    }

    /// Coerce the inputs, reading date inputs as wall-clock time in `tz`.
    ///
    /// An unreadable end date is sent as `null`.
    pub fn to_dto_in<Tz>(&self, tz: &Tz) -> Result<TareaDto, FormError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let id_usuario = self
            .id_usuario
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::InvalidUsuario(self.id_usuario.clone()))?;
        let fecha_hora_init = datetime_input_to_utc_in(&self.fecha_hora_init, tz)
            .ok_or_else(|| FormError::InvalidFechaInicio(self.fecha_hora_init.clone()))?;

        Ok(TareaDto {
            id_usuario,
            descripcion: self.descripcion.clone(),
            fecha_hora_init,
            fecha_hora_fin: datetime_input_to_utc_in(&self.fecha_hora_fin, tz),
            estado: self.estado.clone(),
        })
    }

    pub fn to_dto(&self) -> Result<TareaDto, FormError> {
        self.to_dto_in(&Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn values() -> TareaFormValues {
        TareaFormValues {
            id_usuario: " 7 ".to_string(),
            descripcion: "Inventario mensual".to_string(),
            fecha_hora_init: "2024-05-01T08:30".to_string(),
            fecha_hora_fin: String::new(),
            estado: "en_proceso".to_string(),
        }
    }

    #[test]
    fn test_to_dto_converts_local_input_to_utc() {
        let bogota = FixedOffset::west_opt(5 * 3600).unwrap();
        let dto = values().to_dto_in(&bogota).unwrap();
        assert_eq!(dto.id_usuario, 7);
        assert_eq!(dto.fecha_hora_init, "2024-05-01T13:30:00.000Z");
        assert_eq!(dto.fecha_hora_fin, None);
        assert_eq!(dto.estado, "en_proceso");
    }

    #[test]
    fn test_invalid_required_fields_fail() {
        let mut v = values();
        v.id_usuario = "abc".to_string();
        assert_eq!(
            v.to_dto_in(&Utc),
            Err(FormError::InvalidUsuario("abc".to_string()))
        );

        let mut v = values();
        v.fecha_hora_init = "mañana".to_string();
        assert!(matches!(
            v.to_dto_in(&Utc),
            Err(FormError::InvalidFechaInicio(_))
        ));
    }

    #[test]
    fn test_invalid_end_date_becomes_null() {
        let mut v = values();
        v.fecha_hora_fin = "not a date".to_string();
        let dto = v.to_dto_in(&Utc).unwrap();
        assert_eq!(dto.fecha_hora_fin, None);
    }

    #[test]
    fn test_from_tarea_fills_inputs() {
        let tarea = Tarea {
            id_tarea: 3,
            id_usuario: 12,
            descripcion: "Revisar caja".to_string(),
            fecha_hora_init: "2024-05-01T13:30:00.000Z".to_string(),
            fecha_hora_fin: Some("2024-05-01T15:00:00Z".to_string()),
            estado: "finalizada".to_string(),
        };
        let v = TareaFormValues::from_tarea_in(&tarea, &Utc);
        assert_eq!(v.id_usuario, "12");
        assert_eq!(v.fecha_hora_init, "2024-05-01T13:30");
        assert_eq!(v.fecha_hora_fin, "2024-05-01T15:00");
        assert_eq!(v.estado, "finalizada");

        let dto = v.to_dto_in(&Utc).unwrap();
        assert_eq!(dto.fecha_hora_init, tarea.fecha_hora_init);
    }

    #[test]
    fn test_new_form_defaults() {
        let v = TareaFormValues::new_for(Some(5));
        assert_eq!(v.id_usuario, "5");
        assert_eq!(v.estado, "pendiente");
        assert!(v.fecha_hora_init.is_empty());
    }
}
