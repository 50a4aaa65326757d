//! The measurement tool window: side panel sections plus the 3D viewport.

use eframe::egui;
use egui_phosphor::regular::{PLAY, STOP};

use crate::config::MeasureConfig;
use crate::engine::MeasureEngine;
use crate::panels::{HistoryPanel, Panel, StylePanel, ToolPanel};
use crate::viewport::Viewport;

pub struct MeasureApp {
    pub engine: MeasureEngine,
    pub panels: Vec<Box<dyn Panel>>,
    pub viewport: Viewport,
    /// Mirrors the host's live-run mode; entering it drops the pending point.
    pub live_run: bool,
}

impl Default for MeasureApp {
    fn default() -> Self {
        Self::new(&MeasureConfig::default())
    }
}

impl MeasureApp {
    pub fn new(cfg: &MeasureConfig) -> Self {
        let mut engine = MeasureEngine::new(cfg.gizmo.clone(), cfg.snap_mode);
        engine.set_active(cfg.start_active);

        let mut panels: Vec<Box<dyn Panel>> = vec![
            Box::new(ToolPanel::default()),
            Box::new(StylePanel::default()),
            Box::new(HistoryPanel::default()),
        ];
        for p in &mut panels {
            p.attach(&mut engine);
        }

        Self {
            engine,
            panels,
            viewport: Viewport::default(),
            live_run: false,
        }
    }

    pub fn set_live_run(&mut self, live: bool) {
        if live && !self.live_run {
            self.engine.enter_live_run();
        }
        self.live_run = live;
    }

    /// Flip a side panel section's visibility.  Returns the new state, or
    /// `None` when no panel has that title.
    pub fn toggle_panel(&mut self, title: &str) -> Option<bool> {
        let panel = self.panels.iter_mut().find(|p| p.title() == title)?;
        let state = panel.state_mut();
        state.visible = !state.visible;
        Some(state.visible)
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("measure_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("Panels", |ui| {
                    let mut toggled = None;
                    for p in &self.panels {
                        if ui.selectable_label(p.state().visible, p.title()).clicked() {
                            toggled = Some(p.title());
                        }
                    }
                    if let Some(title) = toggled {
                        self.toggle_panel(title);
                    }
                });
                ui.heading("Viewport Measure Tool");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.live_run {
                        format!("{STOP} Stop")
                    } else {
                        format!("{PLAY} Live Run")
                    };
                    if ui.button(label).clicked() {
                        self.set_live_run(!self.live_run);
                    }
                });
            });
        });
    }

    fn side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("measure_side_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for panel in &mut self.panels {
                        if !panel.state().visible {
                            continue;
                        }
                        egui::CollapsingHeader::new(panel.title())
                            .default_open(true)
                            .show(ui, |ui| {
                                panel.render_panel(ui, &mut self.engine);
                            });
                        ui.add_space(4.0);
                    }
                });
            });
    }
}

impl eframe::App for MeasureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for panel in &mut self.panels {
            panel.sync(&self.engine);
        }

        self.top_bar(ctx);
        self.side_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.engine);
            });

        if self.engine.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn config_seeds_engine_and_panels() {
        let cfg = MeasureConfig {
            start_active: true,
            snap_mode: crate::data::snap::SnapMode::AxisY,
            ..Default::default()
        };
        let app = MeasureApp::new(&cfg);
        assert!(app.engine.is_active());
        assert_eq!(app.engine.snap_mode(), crate::data::snap::SnapMode::AxisY);
        let titles: Vec<_> = app.panels.iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["Measurement Tool", "Gizmo Settings", "Measurement History"]);
    }

    #[test]
    fn entering_live_run_drops_pending_point() {
        let mut app = MeasureApp::default();
        app.engine.set_active(true);
        app.engine.record_point(DVec3::ONE);
        app.set_live_run(true);
        assert!(app.engine.pending_point().is_none());

        // Already live: no second reset.
        app.engine.record_point(DVec3::ZERO);
        app.set_live_run(true);
        assert!(app.engine.pending_point().is_some());
    }

    #[test]
    fn panels_menu_hides_and_shows_sections() {
        let mut app = MeasureApp::default();
        assert_eq!(app.toggle_panel("Gizmo Settings"), Some(false));
        let visible: Vec<_> = app.panels.iter().map(|p| p.state().visible).collect();
        assert_eq!(visible, [true, false, true]);
        assert_eq!(app.toggle_panel("Gizmo Settings"), Some(true));
        assert_eq!(app.toggle_panel("Nope"), None);
    }
}
