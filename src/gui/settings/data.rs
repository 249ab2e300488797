use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::notice::SUCCESS_DISPLAY;

pub const SETTINGS_FILE: &str = "settings.json";

const MIN_DISPLAY_MS: u64 = 250;
const MAX_DISPLAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    pub success_display_ms: u64,
    pub confirm_delete: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            dark_mode: true,
            zoom: 1.0,
            success_display_ms: SUCCESS_DISPLAY.as_millis() as u64,
            confirm_delete: true,
        }
    }
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay before the form resets after a successful submission, clamped to a
    /// range the user can actually read.
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms.clamp(MIN_DISPLAY_MS, MAX_DISPLAY_MS))
    }

    pub fn zoom_factor(&self) -> f32 {
        if self.zoom.is_finite() { self.zoom.clamp(0.5, 3.0) } else { 1.0 }
    }
}
