use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sale as listed by the ventas service.
///
/// `estado == true` means the sale is active; `false` means cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venta {
    pub id_venta: i64,
    pub fecha_hora: String,
    #[serde(default)]
    pub nombre_usuario: String,
    #[serde(default)]
    pub metodo_pago: String,
    #[serde(default)]
    pub total: Importe,
    pub estado: bool,
}

/// Payload for the one-step sale creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevaVenta {
    pub id_usuario: i64,
    pub fecha_hora: String,
}

/// Response of sale creation. `data_venta` is kept opaque: the detail page renders it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevaVentaResponse {
    pub data_venta: serde_json::Value,
}

/// Only the payment method is mutable on an existing sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualizarVenta {
    pub tipo_pago: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CambiarEstadoVenta {
    pub estado: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetodoPago {
    pub id_tipo: i64,
    pub nombre: String,
}

/// Sale total as the API sent it, either a JSON number or a decimal string
/// ("125.50"). The text is kept verbatim for export; `value()` is for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Importe {
    raw: String,
    value: f64,
}

impl Importe {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text received from the API; empty when the total was missing or null
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<f64> for Importe {
    fn from(value: f64) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }
}

impl Serialize for Importe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.raw.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&self.raw)
        }
    }
}

impl<'de> Deserialize<'de> for Importe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(serde_json::Number),
            Text(String),
            Null,
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(Self {
                value: n.as_f64().unwrap_or_default(),
                raw: n.to_string(),
            }),
            Wire::Text(s) => {
                let raw = s.trim().to_string();
                let value = raw.parse::<f64>().map_err(serde::de::Error::custom)?;
                Ok(Self { raw, value })
            }
            Wire::Null => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_as_number_or_string() {
        let a: Venta = serde_json::from_str(
            r#"{"id_venta":1,"fecha_hora":"2024-01-01T10:00:00","nombre_usuario":"ana","metodo_pago":"Efectivo","total":12.5,"estado":true}"#,
        )
        .unwrap();
        let b: Venta = serde_json::from_str(
            r#"{"id_venta":2,"fecha_hora":"2024-01-01T10:00:00","nombre_usuario":"ana","metodo_pago":"Efectivo","total":"12.50","estado":false}"#,
        )
        .unwrap();
        assert_eq!(a.total.value(), 12.5);
        assert_eq!(b.total.value(), 12.5);
        assert!(!b.estado);
    }

    #[test]
    fn test_total_rejects_garbage() {
        let res: Result<Venta, _> = serde_json::from_str(
            r#"{"id_venta":3,"fecha_hora":"x","total":"doce","estado":true}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_null_total_is_zero() {
        let v: Venta =
            serde_json::from_str(r#"{"id_venta":4,"fecha_hora":"x","total":null,"estado":true}"#)
                .unwrap();
        assert_eq!(v.total.value(), 0.0);
        assert_eq!(v.total.as_str(), "");
        assert_eq!(serde_json::to_value(&v).unwrap()["total"], serde_json::Value::Null);
    }

    #[test]
    fn test_total_keeps_api_text() {
        let whole: Venta =
            serde_json::from_str(r#"{"id_venta":5,"fecha_hora":"x","total":12,"estado":true}"#)
                .unwrap();
        let decimal: Venta =
            serde_json::from_str(r#"{"id_venta":6,"fecha_hora":"x","total":" 12.50","estado":true}"#)
                .unwrap();
        assert_eq!(whole.total.as_str(), "12");
        assert_eq!(decimal.total.as_str(), "12.50");
        assert_eq!(serde_json::to_value(&decimal).unwrap()["total"], "12.50");
    }
}
