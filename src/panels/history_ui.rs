use std::sync::mpsc::Receiver;

use egui::{Color32, RichText};
use egui_phosphor::regular::TRASH;

use super::panel_trait::{Panel, PanelState};
use crate::data::measurement::{format_point, MeasurementLine};
use crate::data::status::history_count_text;
use crate::engine::MeasureEngine;
use crate::events::{EventFilter, EventKind, MeasureEvent};

/// Preformatted view of one history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub index: usize,
    pub name: String,
    pub tag: &'static str,
    pub tag_color: Color32,
    pub distance: String,
    pub coordinates: Option<String>,
}

impl HistoryRow {
    pub fn from_line(index: usize, line: &MeasurementLine, show_coordinates: bool) -> Self {
        let mode = line.snap_mode();
        Self {
            index,
            name: line.name().to_string(),
            tag: mode.tag(),
            tag_color: mode.color(),
            distance: format!("Distance: {:.3}m", line.distance()),
            coordinates: show_coordinates.then(|| {
                format!(
                    "From: {} To: {}",
                    format_point(line.start()),
                    format_point(line.end())
                )
            }),
        }
    }
}

/// Scrollable list of recorded measurements.
///
/// Rows are rebuilt when the engine reports a history change, and when the
/// gizmo settings change (the coordinate toggle lives there).
pub struct HistoryPanel {
    state: PanelState,
    history_rx: Option<Receiver<MeasureEvent>>,
    rows: Vec<HistoryRow>,
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Measurement History"),
            history_rx: None,
            rows: Vec::new(),
        }
    }
}

impl HistoryPanel {
    pub const EMPTY_LABEL: &'static str = "No measurements yet";

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn count_text(&self) -> String {
        history_count_text(self.rows.len())
    }

    fn rebuild(&mut self, engine: &MeasureEngine) {
        let show_coordinates = engine.settings().show_coordinates;
        self.rows = engine
            .history()
            .iter()
            .enumerate()
            .map(|(i, line)| HistoryRow::from_line(i, line, show_coordinates))
            .collect();
    }
}

impl Panel for HistoryPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn attach(&mut self, engine: &mut MeasureEngine) {
        let filter = EventFilter::only(EventKind::HISTORY_CHANGED | EventKind::SETTINGS_CHANGED);
        self.history_rx = Some(engine.subscribe(filter));
        self.rebuild(engine);
    }

    fn sync(&mut self, engine: &MeasureEngine) {
        let Some(rx) = &self.history_rx else {
            return;
        };
        // Several changes in one frame collapse into one rebuild.
        let changed = rx.try_iter().count() > 0;
        if changed {
            self.rebuild(engine);
        }
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, engine: &mut MeasureEngine) {
        ui.label(RichText::new(self.count_text()).size(10.0).color(Color32::GRAY));

        let mut remove = None;
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .min_scrolled_height(100.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.rows.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(RichText::new(Self::EMPTY_LABEL).size(10.0).color(Color32::GRAY));
                    });
                    return;
                }
                for row in &self.rows {
                    egui::Frame::group(ui.style())
                        .fill(Color32::from_black_alpha(60))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&row.name).size(11.0).strong());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .button(RichText::new(TRASH).size(10.0))
                                            .on_hover_text("Remove measurement")
                                            .clicked()
                                        {
                                            remove = Some(row.index);
                                        }
                                        ui.label(
                                            RichText::new(row.tag).size(9.0).color(row.tag_color),
                                        );
                                    },
                                );
                            });
                            ui.label(RichText::new(&row.distance).size(10.0));
                            if let Some(coords) = &row.coordinates {
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(coords).size(9.0).color(Color32::GRAY),
                                    )
                                    .wrap(),
                                );
                            }
                        });
                }
            });

        if let Some(index) = remove {
            engine.remove_at(index);
        }
    }
}
