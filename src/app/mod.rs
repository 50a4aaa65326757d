//! Application shell for the measurement tool.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`measure_app`]   | eframe [`MeasureApp`]: side panels, live-run toggle, viewport |
//! | [`run`]           | [`run_viewport_measure()`] entry point |

mod measure_app;
mod run;

pub use measure_app::MeasureApp;
pub use run::run_viewport_measure;
