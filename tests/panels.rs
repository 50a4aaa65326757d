use glam::DVec3;
use viewport_measure::panels::{HistoryPanel, Panel, StylePanel, ToolPanel};
use viewport_measure::{GizmoSettings, MeasureEngine, SnapMode};

#[test]
fn tool_panel_prompts_follow_engine_state() {
    let mut engine = MeasureEngine::default();
    assert_eq!(
        ToolPanel::status(&engine),
        "Tool is disabled. Enable the tool to start measuring."
    );
    assert_eq!(ToolPanel::distance(&engine), "Distance: -");

    engine.set_active(true);
    engine.set_snap_mode(SnapMode::AxisX);
    assert_eq!(ToolPanel::status(&engine), "Hold Ctrl+Click to place first point (X-Axis)");

    engine.record_point(DVec3::ZERO);
    assert_eq!(ToolPanel::status(&engine), "Hold Ctrl+Click to place second point (X-Axis)");
    assert_eq!(ToolPanel::distance(&engine), "Distance: -");

    engine.record_point(DVec3::new(2.5, 9.0, 9.0));
    assert_eq!(ToolPanel::distance(&engine), "Distance: 2.500m");
}

#[test]
fn history_panel_refreshes_on_sync() {
    let mut engine = MeasureEngine::default();
    let mut panel = HistoryPanel::default();
    panel.attach(&mut engine);
    assert!(panel.rows().is_empty());
    assert_eq!(panel.count_text(), "0 measurements");

    engine.set_active(true);
    engine.record_point(DVec3::ZERO);
    engine.record_point(DVec3::new(1.0, 2.0, 2.0));
    // Rows only change after sync.
    assert!(panel.rows().is_empty());
    panel.sync(&engine);

    let rows = panel.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tag, "FREE");
    assert_eq!(rows[0].distance, "Distance: 3.000m");
    assert_eq!(
        rows[0].coordinates.as_deref(),
        Some("From: (0.00, 0.00, 0.00) To: (1.00, 2.00, 2.00)")
    );
    assert_eq!(panel.count_text(), "1 measurement");

    let mut style = StylePanel::default();
    style.attach(&mut engine);
    style.set_show_coordinates(&mut engine, false);
    panel.sync(&engine);
    assert_eq!(panel.rows()[0].coordinates, None);

    style.reset(&mut engine);
    panel.sync(&engine);
    assert!(panel.rows()[0].coordinates.is_some());

    engine.clear_all_history();
    panel.sync(&engine);
    assert!(panel.rows().is_empty());
}

#[test]
fn style_panel_pushes_clamped_values() {
    let mut engine = MeasureEngine::default();
    let mut panel = StylePanel::default();
    panel.attach(&mut engine);

    panel.set_font_size(&mut engine, 100);
    panel.set_sphere_size(&mut engine, 0.0);
    assert_eq!(engine.settings().font_size, 32);
    assert_eq!(engine.settings().sphere_size, 0.01);

    panel.reset(&mut engine);
    assert_eq!(*engine.settings(), GizmoSettings::default());
}

#[test]
fn distance_readout_resets_when_newest_line_is_removed() {
    let mut engine = MeasureEngine::default();
    engine.set_active(true);
    engine.record_point(DVec3::ZERO);
    engine.record_point(DVec3::X);
    engine.record_point(DVec3::ZERO);
    engine.record_point(DVec3::Y * 2.0);
    assert_eq!(ToolPanel::distance(&engine), "Distance: 2.000m");

    engine.remove_at(1);
    assert_eq!(ToolPanel::distance(&engine), "Distance: -");
}
