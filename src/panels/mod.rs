pub mod history_ui;
pub mod panel_trait;
pub mod style_ui;
pub mod tool_ui;

pub use history_ui::{HistoryPanel, HistoryRow};
pub use panel_trait::{Panel, PanelState};
pub use style_ui::StylePanel;
pub use tool_ui::ToolPanel;
