//! Player preferences
//!
//! In-memory only. Affects feel and presentation; gameplay constants live
//! in [`crate::consts`].

use crate::consts::PLAYER_FOVY;
use crate::sim::FirstPersonController;

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // === Controls ===
    /// Radians of turn per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Invert vertical look
    pub invert_y: bool,
    /// Walk speed (units/s)
    pub move_speed: f32,

    // === View ===
    /// Vertical field of view in degrees
    pub fovy: f32,

    // === HUD ===
    /// Show the camera target readout
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.003,
            invert_y: false,
            move_speed: 5.0,
            fovy: PLAYER_FOVY,
            show_hud: true,
        }
    }
}

impl From<&Settings> for FirstPersonController {
    fn from(settings: &Settings) -> Self {
        Self {
            sensitivity: settings.mouse_sensitivity,
            move_speed: settings.move_speed,
            invert_y: settings.invert_y,
        }
    }
}

impl Settings {
    /// Field of view clamped to something a perspective matrix can use
    pub fn effective_fovy(&self) -> f32 {
        self.fovy.clamp(10.0, 120.0)
    }

    /// Flip `show_hud` on a fresh `h`/`H` press; auto-repeats are ignored.
    /// Returns true if the key was consumed.
    pub fn hud_key(&mut self, key: &str, repeat: bool) -> bool {
        if repeat || !matches!(key, "h" | "H") {
            return false;
        }
        self.show_hud = !self.show_hud;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_from_settings() {
        let settings = Settings {
            mouse_sensitivity: 0.01,
            move_speed: 2.0,
            invert_y: true,
            ..Default::default()
        };
        let controller = FirstPersonController::from(&settings);
        assert_eq!(controller.sensitivity, 0.01);
        assert_eq!(controller.move_speed, 2.0);
        assert!(controller.invert_y);
    }

    #[test]
    fn test_defaults_match_range_constants() {
        let settings = Settings::default();
        assert_eq!(settings.fovy, PLAYER_FOVY);
        assert!(settings.show_hud);
        assert_eq!(
            FirstPersonController::from(&settings),
            FirstPersonController::default()
        );
    }

    #[test]
    fn test_hud_key_ignores_repeats() {
        let mut settings = Settings::default();
        assert!(settings.hud_key("h", false));
        assert!(!settings.show_hud);

        // Holding the key must not flicker
        for _ in 0..5 {
            assert!(!settings.hud_key("h", true));
        }
        assert!(!settings.show_hud);

        assert!(settings.hud_key("H", false));
        assert!(settings.show_hud);
        assert!(!settings.hud_key("j", false));
        assert!(settings.show_hud);
    }

    #[test]
    fn test_fovy_clamped() {
        let settings = Settings {
            fovy: 500.0,
            ..Default::default()
        };
        assert_eq!(settings.effective_fovy(), 120.0);
    }
}
