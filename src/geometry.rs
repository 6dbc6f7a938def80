use egui::{pos2, Pos2, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub radius: f32,
    pub center: Pos2,
    pub oval: Rect,
}

impl Geometry {
    /// `radius = min(w, h) / 2 - stroke`. The radius is left negative for
    /// surfaces smaller than the stroke; check `is_drawable` before painting.
    pub fn compute(width: f32, height: f32, stroke_width: f32) -> Geometry {
        let radius = width.min(height) / 2.0 - stroke_width;
        let center = pos2(width / 2.0, height / 2.0);
        let oval = Rect::from_min_max(
            pos2(center.x - radius, center.y - radius),
            pos2(center.x + radius, center.y + radius),
        );

        Geometry {
            radius,
            center,
            oval,
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0
    }

    pub fn translate(&self, origin: Pos2) -> Geometry {
        let offset = origin.to_vec2();
        Geometry {
            radius: self.radius,
            center: self.center + offset,
            oval: self.oval.translate(offset),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::compute(0.0, 0.0, 0.0)
    }
}
