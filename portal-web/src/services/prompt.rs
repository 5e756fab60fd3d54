//! Blocking browser notifications.

use lib_core::UserPrompt;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available for alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("window.alert failed: {:?}", e);
        }
    }

    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available to open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("Failed to open {}: {:?}", url, e);
        }
    }
}
