use egui::Color32;

use crate::color::ColorGenerator;

/// 12 o'clock, where the first segment starts.
pub const ORIGIN_ANGLE: f32 = -90.0;

pub const NOMINAL_ITEMS: f32 = 4.0;

/// One dataset entry laid out on the ring. Angles are in degrees,
/// clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Color32,
}

pub type SegmentSet = Vec<Segment>;

/// Lays `values` out clockwise from `ORIGIN_ANGLE`.
///
/// Each sweep is `value / sum * 360 * n / 4`, so a dataset only closes the
/// circle when it has exactly four entries. A zero sum lays out zero-length
/// segments. Entries beyond `palette` get a generated color.
pub fn layout(values: &[f32], palette: &[Color32], colors: &mut ColorGenerator) -> SegmentSet {
    // Summed in f64 so tiny or huge entries neither flush nor overflow.
    let total: f64 = values.iter().map(|&v| f64::from(v)).sum();
    let circle = 360.0 * values.len() as f64 / f64::from(NOMINAL_ITEMS);
    let laid_out = total > 0.0 && total.is_finite();
    if !laid_out && !values.is_empty() {
        log::warn!("dataset of {} entries sums to {}, laying out empty arcs", values.len(), total);
    }

    let mut start_angle = ORIGIN_ANGLE;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let sweep_angle = if laid_out {
                (f64::from(value) / total * circle) as f32
            } else {
                0.0
            };
            let color = palette
                .get(i)
                .copied()
                .unwrap_or_else(|| colors.next_color());

            let segment = Segment {
                start_angle,
                sweep_angle,
                color,
            };
            start_angle += sweep_angle;
            segment
        })
        .collect()
}

pub fn total_sweep(segments: &[Segment]) -> f32 {
    segments.iter().map(|s| s.sweep_angle).sum()
}
