use egui::Ui;

use crate::engine::MeasureEngine;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            visible: true,
        }
    }
}

/// A section of the measurement side panel.
pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    /// Hook the panel up to the engine (subscriptions, initial values).
    fn attach(&mut self, _engine: &mut MeasureEngine) {}

    /// Pull pending notifications and refresh cached display state.
    fn sync(&mut self, _engine: &MeasureEngine) {}

    fn render_panel(&mut self, ui: &mut Ui, engine: &mut MeasureEngine);
}
