//! Controller layer: terminal input parsing and command orchestration.

pub mod events;
pub mod orchestration;
