//! Contextual feedback overlays.

mod modal;

pub use modal::{ModalCard, ModalCardProps};
