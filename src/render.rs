use egui::{Color32, Pos2, Rect, Stroke};

use crate::{
    config::{RenderMode, StyleConfig},
    geometry::Geometry,
    segments::{Segment, NOMINAL_ITEMS},
};

/// Offset both SPLIT arcs open from, relative to the segment start.
pub const SPLIT_OFFSET: f32 = -45.0;

/// A stroked arc along the ellipse inscribed in `oval`. Angles in degrees,
/// clockwise from 3 o'clock; a negative sweep runs counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOp {
    pub oval: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelOp {
    pub text: String,
    pub baseline: Pos2,
    pub size: f32,
    pub color: Color32,
}

/// Surface the renderer paints on. Arcs are stroke-only with round caps
/// and joins.
pub trait Canvas {
    fn draw_arc(&mut self, arc: &ArcOp);
    fn draw_label(&mut self, label: &LabelOp);
}

pub struct Renderer<'a> {
    pub values: &'a [f32],
    pub segments: &'a [Segment],
    pub progress: &'a [f32],
    pub geometry: Geometry,
    pub style: &'a StyleConfig,
}

impl<'a> Renderer<'a> {
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if self.values.is_empty() || !self.geometry.is_drawable() {
            return;
        }

        for (i, segment) in self.segments.iter().enumerate() {
            let stroke = Stroke::new(self.style.stroke_width, segment.color);
            let mut arc = |start_angle: f32, sweep_angle: f32| {
                // Zero-length arcs (zero-sum data, progress at 0) are skipped.
                if sweep_angle != 0.0 && sweep_angle.is_finite() && start_angle.is_finite() {
                    canvas.draw_arc(&ArcOp {
                        oval: self.geometry.oval,
                        start_angle,
                        sweep_angle,
                        stroke,
                    });
                }
            };

            match self.style.mode {
                RenderMode::Rotate => {
                    let p = self.progress_at(0);
                    arc(segment.start_angle + p * 360.0, segment.sweep_angle * p);
                }
                RenderMode::Sequential => {
                    arc(segment.start_angle, segment.sweep_angle * self.progress_at(i));
                }
                RenderMode::Split => {
                    let half = segment.sweep_angle * self.progress_at(0) / 2.0;
                    let start = segment.start_angle + SPLIT_OFFSET;
                    arc(start, -half);
                    arc(start, half);
                }
            }
        }

        if let Some(text) = label_text(self.values) {
            let center = self.geometry.center;
            canvas.draw_label(&LabelOp {
                text,
                baseline: Pos2::new(center.x, center.y + self.style.text_size / 4.0),
                size: self.style.text_size,
                color: self.style.text_color,
            });
        }
    }

    fn progress_at(&self, i: usize) -> f32 {
        self.progress.get(i).copied().unwrap_or(0.0)
    }
}

/// `value[0] / (value[0] * 4) * n * 100`. Only the first entry takes part;
/// `None` when that is undefined (first entry zero, or no entries).
pub fn label_value(values: &[f32]) -> Option<f32> {
    let first = *values.first()?;
    let value = first / (first * NOMINAL_ITEMS) * values.len() as f32 * 100.0;
    value.is_finite().then(|| value)
}

pub fn label_text(values: &[f32]) -> Option<String> {
    label_value(values).map(|v| format!("{:.2}%", v))
}
