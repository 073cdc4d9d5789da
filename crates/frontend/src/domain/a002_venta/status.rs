//! Cancellation workflow of the sale status switch.
//!
//! A venta is either active or cancelled and only `active -> cancelled` is
//! allowed. The previous state always comes from the loaded record.

pub const CANCELADA_NO_HABILITABLE: &str = "La venta ya fue cancelada, no se puede habilitar";
pub const CONFIRMAR_CANCELACION: &str =
    "¿Estás seguro de que deseas cancelar esta venta? No se puede revertir la acción";
pub const CANCELACION_OK: &str = "La venta ha sido cancelada exitosamente.";
pub const CANCELACION_FALLIDA: &str = "No se pudo cancelar la venta.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoVenta {
    Activa,
    Cancelada,
}

impl EstadoVenta {
    pub fn from_flag(estado: bool) -> Self {
        if estado {
            Self::Activa
        } else {
            Self::Cancelada
        }
    }

    /// Value used by the status filter select
    pub fn key(self) -> &'static str {
        match self {
            Self::Activa => "activa",
            Self::Cancelada => "cancelada",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Activa => "Activo",
            Self::Cancelada => "Inactivo",
        }
    }
}

/// What to do after the user flipped the switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleStep {
    /// Switch already shows the recorded state
    Unchanged,
    /// Cancelled sales cannot be re-enabled; restore the switch and tell the user
    Rejected {
        restore_checked: bool,
        message: &'static str,
    },
    /// User declined the confirmation; restore the switch
    Declined { restore_checked: bool },
    /// Send the new status to the server
    Submit { nuevo_estado: bool },
}

/// Decide the next step for a switch change. `confirm` is only asked for a
/// legal `active -> cancelled` transition.
pub fn request_transition(
    current: EstadoVenta,
    requested_checked: bool,
    confirm: impl FnOnce(&str) -> bool,
) -> ToggleStep {
    match (current, requested_checked) {
        (EstadoVenta::Activa, true) | (EstadoVenta::Cancelada, false) => ToggleStep::Unchanged,
        (EstadoVenta::Cancelada, true) => ToggleStep::Rejected {
            restore_checked: false,
            message: CANCELADA_NO_HABILITABLE,
        },
        (EstadoVenta::Activa, false) => {
            if confirm(CONFIRMAR_CANCELACION) {
                ToggleStep::Submit {
                    nuevo_estado: false,
                }
            } else {
                ToggleStep::Declined {
                    restore_checked: true,
                }
            }
        }
    }
}

/// Outcome of the status call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Acknowledge and reload the whole list
    Reload { message: &'static str },
    /// Put the switch back and report the failure
    Revert {
        restore_checked: bool,
        message: &'static str,
    },
}

pub fn resolve_submission<E>(result: &Result<(), E>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::Reload {
            message: CANCELACION_OK,
        },
        Err(_) => SubmitOutcome::Revert {
            restore_checked: true,
            message: CANCELACION_FALLIDA,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cancelled_cannot_be_reenabled() {
        let asked = Cell::new(false);
        let step = request_transition(EstadoVenta::Cancelada, true, |_| {
            asked.set(true);
            true
        });
        assert_eq!(
            step,
            ToggleStep::Rejected {
                restore_checked: false,
                message: CANCELADA_NO_HABILITABLE,
            }
        );
        assert!(!asked.get());
    }

    #[test]
    fn test_declined_confirmation_keeps_active() {
        let step = request_transition(EstadoVenta::Activa, false, |msg| {
            assert_eq!(msg, CONFIRMAR_CANCELACION);
            false
        });
        assert_eq!(
            step,
            ToggleStep::Declined {
                restore_checked: true
            }
        );
    }

    #[test]
    fn test_confirmed_cancellation_submits_false() {
        let step = request_transition(EstadoVenta::Activa, false, |_| true);
        assert_eq!(
            step,
            ToggleStep::Submit {
                nuevo_estado: false
            }
        );
    }

    #[test]
    fn test_no_change_never_asks() {
        let step = request_transition(EstadoVenta::Activa, true, |_| panic!("not asked"));
        assert_eq!(step, ToggleStep::Unchanged);
    }

    #[test]
    fn test_failed_submission_reverts_to_checked() {
        let failed: Result<(), &str> = Err("503");
        assert_eq!(
            resolve_submission(&failed),
            SubmitOutcome::Revert {
                restore_checked: true,
                message: CANCELACION_FALLIDA,
            }
        );
        let ok: Result<(), &str> = Ok(());
        assert_eq!(
            resolve_submission(&ok),
            SubmitOutcome::Reload {
                message: CANCELACION_OK
            }
        );
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(EstadoVenta::from_flag(true), EstadoVenta::Activa);
        assert_eq!(EstadoVenta::from_flag(false).key(), "cancelada");
    }
}
