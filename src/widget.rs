use std::time::Duration;

use egui::{Rect, Response, Sense, Ui, Vec2, Widget};

use crate::{
    animation::AnimationEngine,
    color::ColorGenerator,
    config::{StyleConfig, StyleSpec},
    geometry::Geometry,
    painter::PainterCanvas,
    render::{Canvas, Renderer},
    segments::{self, SegmentSet},
};

/// Ring chart of a handful of proportional values with an animated reveal.
///
/// The host owns the clock and the surface: it calls [`StatsView::on_resize`]
/// when the surface changes size, [`StatsView::tick`] once per frame and
/// [`StatsView::render`] to paint. Inside egui, `ui.add(&mut view)` does all
/// three.
pub struct StatsView {
    style: StyleConfig,
    values: Vec<f32>,
    segments: SegmentSet,
    engine: AnimationEngine,
    geometry: Geometry,
    size: Option<Vec2>,
    colors: ColorGenerator,
    last_tick: Option<f64>,
}

impl StatsView {
    pub fn new(spec: &StyleSpec, mut colors: ColorGenerator) -> Self {
        let style = spec.resolve(&mut colors);

        StatsView {
            engine: AnimationEngine::new(style.mode),
            style,
            values: Vec::new(),
            segments: Vec::new(),
            geometry: Geometry::default(),
            size: None,
            colors,
            last_tick: None,
        }
    }

    /// Replaces the style. Metrics and palette apply from the next redraw;
    /// the current dataset is laid out again and its animation restarts.
    pub fn configure(&mut self, spec: &StyleSpec) {
        self.style = spec.resolve(&mut self.colors);
        self.engine.set_mode(self.style.mode);

        if let Some(size) = self.size {
            self.on_resize(size.x, size.y);
        }

        let values = std::mem::take(&mut self.values);
        self.set_data(values);
    }

    /// Replaces the dataset and restarts the reveal from zero. Negative or
    /// non-finite entries are drawn as zero.
    pub fn set_data(&mut self, values: impl Into<Vec<f32>>) {
        let mut values = values.into();
        for (i, v) in values.iter_mut().enumerate() {
            if !v.is_finite() || *v < 0.0 {
                log::warn!("entry {} is {}, using 0", i, v);
                *v = 0.0;
            }
        }

        self.segments = segments::layout(&values, &self.style.colors, &mut self.colors);
        self.values = values;

        // Nothing to reveal, so nothing to keep repainting for
        if self.values.is_empty() {
            self.engine.stop();
        } else {
            self.engine.restart(self.values.len());
        }
        self.last_tick = None;

        log::debug!(
            "assigned {} values, {} mode",
            self.values.len(),
            self.style.mode
        );
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.size = Some(Vec2::new(width, height));
        self.geometry = Geometry::compute(width, height, self.style.stroke_width);

        if !self.geometry.is_drawable() {
            log::warn!(
                "surface {}x{} is too small for stroke width {}",
                width,
                height,
                self.style.stroke_width
            );
        }
    }

    /// Advances the animation to host time `now` (seconds). The first tick
    /// after construction or a data assignment only sets the reference
    /// point. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let dt = match self.last_tick {
            Some(last) if now > last => {
                Duration::try_from_secs_f64(now - last).unwrap_or(Duration::ZERO)
            }
            _ => Duration::ZERO,
        };
        self.last_tick = Some(now);

        self.engine.advance(dt)
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.render_with(canvas, self.geometry);
    }

    fn render_with<C: Canvas + ?Sized>(&self, canvas: &mut C, geometry: Geometry) {
        Renderer {
            values: &self.values,
            segments: &self.segments,
            progress: self.engine.progress(),
            geometry,
            style: &self.style,
        }
        .draw(canvas);
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn segments(&self) -> &[segments::Segment] {
        &self.segments
    }

    pub fn progress(&self) -> &[f32] {
        self.engine.progress()
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        let mut canvas = PainterCanvas::new(&painter);
        self.render_with(&mut canvas, self.geometry.translate(rect.min));
    }
}

impl Widget for &mut StatsView {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = ui.available_size();

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if self.size != Some(rect.size()) {
            self.on_resize(rect.width(), rect.height());
        }

        let time = ui.input().time;
        self.tick(time);

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        // Keep frames coming until every timeline has finished
        if self.is_animating() {
            ui.ctx().request_repaint();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::RenderMode, render::tests::RecordingCanvas};
    use egui::Color32;

    fn view(mode: RenderMode) -> StatsView {
        let mut view = StatsView::new(
            &StyleSpec::default().with_mode(mode),
            ColorGenerator::seeded(11),
        );
        view.on_resize(200.0, 200.0);
        view
    }

    #[test]
    fn ticks_are_measured_from_first_tick_after_assignment() {
        let mut v = view(RenderMode::Rotate);
        v.tick(100.0);
        v.set_data(vec![1.0, 1.0]);

        assert!(v.tick(250.0));
        assert_eq!(v.progress(), &[0.0]);

        v.tick(251.0);
        assert!((v.progress()[0] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn clock_going_backwards_is_a_zero_step() {
        let mut v = view(RenderMode::Rotate);
        v.set_data(vec![1.0]);
        v.tick(5.0);
        v.tick(4.0);
        assert_eq!(v.progress(), &[0.0]);
    }

    #[test]
    fn non_finite_clock_is_a_zero_step() {
        let mut v = view(RenderMode::Rotate);
        v.set_data(vec![1.0]);
        v.tick(1.0);

        v.tick(f64::INFINITY);
        assert_eq!(v.progress(), &[0.0]);

        v.tick(f64::NAN);
        v.tick(2.0);
        v.tick(3.0);
        assert!((v.progress()[0] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn empty_data_stops_the_animation() {
        let mut v = view(RenderMode::Rotate);
        v.set_data(vec![1.0, 2.0]);
        v.tick(0.0);
        v.tick(0.5);
        assert!(v.is_animating());

        v.set_data(Vec::new());
        assert!(!v.is_animating());
        assert!(v.engine().timelines().is_empty());
        assert!(!v.tick(1.0));

        let mut seq = view(RenderMode::Sequential);
        seq.set_data(Vec::new());
        assert!(!seq.is_animating());
        assert_eq!(seq.progress(), &[0.0]);
    }

    #[test]
    fn invalid_entries_become_zero() {
        let mut v = view(RenderMode::Rotate);
        v.set_data(vec![f32::NAN, -3.0, 2.0, f32::INFINITY]);

        assert_eq!(v.values(), &[0.0, 0.0, 2.0, 0.0]);
        for s in v.segments() {
            assert!(s.sweep_angle.is_finite());
        }
    }

    #[test]
    fn reconfigure_relayouts_and_restarts() {
        let mut v = view(RenderMode::Rotate);
        v.set_data(vec![1.0, 1.0, 1.0, 1.0]);
        v.tick(0.0);
        v.tick(3.0);
        assert!(!v.is_animating());

        let spec = StyleSpec {
            stroke_width: 10.0,
            ..StyleSpec::default()
        }
        .with_mode(RenderMode::Sequential)
        .with_colors(&[Color32::RED])
        .unwrap();
        v.configure(&spec);

        assert_eq!(v.geometry().radius, 90.0);
        assert_eq!(v.segments()[0].color, Color32::RED);
        assert_eq!(v.progress().len(), 5);
        assert_eq!(v.engine().active_timelines(), 1);

        let mut canvas = RecordingCanvas::default();
        v.render(&mut canvas);
        assert!(canvas.arcs.is_empty());
        assert_eq!(canvas.labels.len(), 1);
    }
}
