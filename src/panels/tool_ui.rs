use super::panel_trait::{Panel, PanelState};
use crate::data::snap::SnapMode;
use crate::data::status::{distance_text, status_text};
use crate::engine::MeasureEngine;

/// Enable toggle, snap-mode dropdown, status prompt and clear buttons.
pub struct ToolPanel {
    state: PanelState,
}

impl Default for ToolPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Measurement Tool"),
        }
    }
}

impl ToolPanel {
    pub const ENABLE_LABEL: &'static str = "Enable Measurement Tool";
    pub const CLEAR_CURRENT_LABEL: &'static str = "Clear Current";
    pub const CLEAR_ALL_LABEL: &'static str = "Clear All";

    pub fn status(engine: &MeasureEngine) -> String {
        status_text(
            engine.is_active(),
            engine.pending_point().is_some(),
            engine.snap_mode(),
        )
    }

    pub fn distance(engine: &MeasureEngine) -> String {
        distance_text(
            engine.is_active(),
            engine.pending_point().is_some(),
            engine.last_distance(),
        )
    }
}

impl Panel for ToolPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, engine: &mut MeasureEngine) {
        let mut active = engine.is_active();
        if ui.checkbox(&mut active, Self::ENABLE_LABEL).changed() {
            engine.set_active(active);
        }

        let mut mode = engine.snap_mode();
        egui::ComboBox::from_label("Snap Mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for m in SnapMode::ALL {
                    ui.selectable_value(&mut mode, m, m.label());
                }
            });
        if mode != engine.snap_mode() {
            engine.set_snap_mode(mode);
        }

        ui.add_space(6.0);
        ui.add(egui::Label::new(Self::status(engine)).wrap());
        ui.label(egui::RichText::new(Self::distance(engine)).strong());

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button(Self::CLEAR_CURRENT_LABEL).clicked() {
                engine.clear_current();
            }
            if ui.button(Self::CLEAR_ALL_LABEL).clicked() {
                engine.clear_all_history();
            }
        });
    }
}
