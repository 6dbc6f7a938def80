use egui::{Align2, FontId, Painter, Pos2, Shape};

use crate::render::{ArcOp, Canvas, LabelOp};

// degrees per polyline step
const STEP_DEGREES: f32 = 4.0;

/// Paints onto an egui layer. egui has no arc primitive, so arcs become
/// polylines with a dot at each end for the round caps.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        PainterCanvas { painter }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn draw_arc(&mut self, arc: &ArcOp) {
        let points = arc_points(arc);
        let cap = arc.stroke.width / 2.0;

        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            self.painter.circle_filled(first, cap, arc.stroke.color);
            self.painter.circle_filled(last, cap, arc.stroke.color);
        }
        self.painter.add(Shape::line(points, arc.stroke));
    }

    fn draw_label(&mut self, label: &LabelOp) {
        self.painter.text(
            label.baseline,
            Align2::CENTER_BOTTOM,
            &label.text,
            FontId::proportional(label.size),
            label.color,
        );
    }
}

/// Points along the arc, screen space (y grows downwards, so positive
/// angles run clockwise).
pub fn arc_points(arc: &ArcOp) -> Vec<Pos2> {
    let center = arc.oval.center();
    let rx = arc.oval.width() / 2.0;
    let ry = arc.oval.height() / 2.0;

    let steps = ((arc.sweep_angle.abs() / STEP_DEGREES).ceil() as usize).max(1);

    (0..=steps)
        .map(|i| {
            let angle = (arc.start_angle + arc.sweep_angle * i as f32 / steps as f32).to_radians();
            Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32, Rect, Stroke};

    fn arc(start_angle: f32, sweep_angle: f32) -> ArcOp {
        ArcOp {
            oval: Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)),
            start_angle,
            sweep_angle,
            stroke: Stroke::new(4.0, Color32::RED),
        }
    }

    fn near(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn quarter_from_top_runs_clockwise() {
        let points = arc_points(&arc(-90.0, 90.0));

        assert!(near(points[0], pos2(50.0, 0.0)));
        assert!(near(*points.last().unwrap(), pos2(100.0, 50.0)));
        assert_eq!(points.len(), 90 / 4 + 2);
    }

    #[test]
    fn negative_sweep_runs_counter_clockwise() {
        let points = arc_points(&arc(-90.0, -90.0));
        assert!(near(*points.last().unwrap(), pos2(0.0, 50.0)));
    }

    #[test]
    fn tiny_arc_still_has_two_points() {
        assert_eq!(arc_points(&arc(0.0, 0.5)).len(), 2);
    }
}
