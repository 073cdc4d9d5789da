//! Blocking browser dialogs used for acknowledgments and confirmations.

/// Show a blocking message. Silently skipped when there is no window.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Ask for confirmation. Anything but an explicit "OK" counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
