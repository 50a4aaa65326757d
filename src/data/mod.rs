pub mod gizmo;
pub mod measurement;
pub mod snap;
pub mod status;
