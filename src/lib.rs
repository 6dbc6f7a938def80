//! Animated ring chart widget for egui.
//!
//! Values become arcs on a ring, revealed by one of three animations
//! ([`RenderMode`]), with a percentage label in the middle.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod painter;
pub mod render;
pub mod segments;
pub mod widget;

pub use color::ColorGenerator;
pub use config::{RenderMode, StyleConfig, StyleSpec};
pub use render::Canvas;
pub use widget::StatsView;
