//! Controller layer: form collection and validation, institution panel, and submission orchestration.

pub mod events;
pub mod form;
pub mod institutions;
pub mod orchestration;
