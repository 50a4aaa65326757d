use super::panel_trait::{Panel, PanelState};
use crate::data::gizmo::{GizmoSettings, FONT_SIZE_RANGE, SPHERE_SIZE_RANGE};
use crate::engine::MeasureEngine;

/// Gizmo style controls.
///
/// The panel edits its own draft and pushes a copy to the engine on every
/// change, so the engine stays the only owner of the live settings.
pub struct StylePanel {
    state: PanelState,
    draft: GizmoSettings,
}

impl Default for StylePanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Gizmo Settings"),
            draft: GizmoSettings::default(),
        }
    }
}

impl StylePanel {
    pub fn draft(&self) -> &GizmoSettings {
        &self.draft
    }

    pub fn set_font_size(&mut self, engine: &mut MeasureEngine, size: u32) {
        self.draft.font_size = size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        self.apply(engine);
    }

    pub fn set_sphere_size(&mut self, engine: &mut MeasureEngine, size: f64) {
        self.draft.sphere_size = size.clamp(*SPHERE_SIZE_RANGE.start(), *SPHERE_SIZE_RANGE.end());
        self.apply(engine);
    }

    pub fn set_text_color(&mut self, engine: &mut MeasureEngine, color: egui::Color32) {
        self.draft.text_color = color;
        self.apply(engine);
    }

    pub fn set_show_coordinates(&mut self, engine: &mut MeasureEngine, show: bool) {
        self.draft.show_coordinates = show;
        self.apply(engine);
    }

    /// Restore default font size, text color, sphere size and coordinate display.
    pub fn reset(&mut self, engine: &mut MeasureEngine) {
        self.draft = GizmoSettings {
            line_width: self.draft.line_width,
            ..GizmoSettings::default()
        };
        self.apply(engine);
    }

    fn apply(&self, engine: &mut MeasureEngine) {
        engine.set_gizmo_settings(self.draft.clone());
    }
}

impl Panel for StylePanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn attach(&mut self, engine: &mut MeasureEngine) {
        self.draft = engine.settings().clone();
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, engine: &mut MeasureEngine) {
        let mut font_size = self.draft.font_size;
        if ui
            .add(egui::Slider::new(&mut font_size, FONT_SIZE_RANGE).text("Gizmo Font Size"))
            .changed()
        {
            self.set_font_size(engine, font_size);
        }

        let mut sphere = self.draft.sphere_size;
        if ui
            .add(egui::Slider::new(&mut sphere, SPHERE_SIZE_RANGE).text("Sphere Size"))
            .changed()
        {
            self.set_sphere_size(engine, sphere);
        }

        ui.horizontal(|ui| {
            ui.label("Text Color");
            let mut c = self.draft.text_color;
            if ui.color_edit_button_srgba(&mut c).changed() {
                self.set_text_color(engine, c);
            }
        });

        let mut show = self.draft.show_coordinates;
        if ui.checkbox(&mut show, "Show Coordinates").changed() {
            self.set_show_coordinates(engine, show);
        }

        if ui.button("Reset to Default").clicked() {
            self.reset(engine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_are_clamped_and_pushed_to_engine() {
        let mut engine = MeasureEngine::default();
        let mut panel = StylePanel::default();
        panel.attach(&mut engine);

        panel.set_font_size(&mut engine, 100);
        assert_eq!(engine.settings().font_size, 32);

        panel.set_sphere_size(&mut engine, 0.0);
        assert_eq!(engine.settings().sphere_size, 0.01);

        panel.set_text_color(&mut engine, egui::Color32::RED);
        assert_eq!(engine.settings().text_color, egui::Color32::RED);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut engine = MeasureEngine::default();
        let mut panel = StylePanel::default();
        panel.set_font_size(&mut engine, 20);
        panel.set_sphere_size(&mut engine, 0.4);
        panel.set_show_coordinates(&mut engine, false);
        panel.reset(&mut engine);
        assert_eq!(engine.settings(), &GizmoSettings::default());
        assert_eq!(panel.draft(), engine.settings());
        assert!(engine.settings().show_coordinates);
    }

    #[test]
    fn reset_shows_coordinates_again_in_history() {
        use crate::panels::HistoryPanel;
        use glam::DVec3;

        let mut engine = MeasureEngine::default();
        let mut style = StylePanel::default();
        let mut history = HistoryPanel::default();
        style.attach(&mut engine);
        history.attach(&mut engine);

        engine.set_active(true);
        engine.record_point(DVec3::ZERO);
        engine.record_point(DVec3::X);
        style.set_show_coordinates(&mut engine, false);
        history.sync(&engine);
        assert_eq!(history.rows()[0].coordinates, None);

        style.reset(&mut engine);
        history.sync(&engine);
        assert_eq!(
            history.rows()[0].coordinates.as_deref(),
            Some("From: (0.00, 0.00, 0.00) To: (1.00, 0.00, 0.00)")
        );
    }
}
