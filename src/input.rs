//! Raw pointer input delivered by the host viewport.

use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard modifier state at the time of the press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS.
    pub command: bool,
}

impl From<egui::Modifiers> for KeyModifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self {
            ctrl: m.ctrl,
            alt: m.alt,
            shift: m.shift,
            command: m.mac_cmd || m.command,
        }
    }
}

/// A pointer button press inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: PointerButton,
    pub modifiers: KeyModifiers,
    /// Position relative to the viewport's top-left corner, in points.
    pub screen_pos: [f32; 2],
}

impl PointerDown {
    pub fn primary(screen_pos: [f32; 2], modifiers: KeyModifiers) -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers,
            screen_pos,
        }
    }

    /// Primary button with Ctrl or Command held.
    pub fn is_measure_click(&self) -> bool {
        self.button == PointerButton::Primary && (self.modifiers.ctrl || self.modifiers.command)
    }
}

/// Resolves a screen position to a world-space point.
///
/// Returns `None` when no point can be resolved (no camera, degenerate
/// viewport); the click is then ignored.
pub trait WorldPicker {
    fn pick(&self, screen_pos: [f32; 2]) -> Option<DVec3>;
}

impl<F> WorldPicker for F
where
    F: Fn([f32; 2]) -> Option<DVec3>,
{
    fn pick(&self, screen_pos: [f32; 2]) -> Option<DVec3> {
        self(screen_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_click_needs_primary_and_modifier() {
        let ctrl = KeyModifiers {
            ctrl: true,
            ..Default::default()
        };
        let cmd = KeyModifiers {
            command: true,
            ..Default::default()
        };
        assert!(PointerDown::primary([0.0, 0.0], ctrl).is_measure_click());
        assert!(PointerDown::primary([0.0, 0.0], cmd).is_measure_click());
        assert!(!PointerDown::primary([0.0, 0.0], KeyModifiers::default()).is_measure_click());

        let secondary = PointerDown {
            button: PointerButton::Secondary,
            modifiers: ctrl,
            screen_pos: [0.0, 0.0],
        };
        assert!(!secondary.is_measure_click());
    }
}
