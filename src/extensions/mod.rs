//! Interaction add-ons layered on top of the core model.

pub mod sticky_label;

pub use sticky_label::{
    LabelAlign, StickyLabel, StickyLabelLayout, compose_label_text, place_sticky_label,
};
