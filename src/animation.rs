use std::time::Duration;

use crate::config::RenderMode;

// ROTATE / SPLIT use one timeline, SEQUENTIAL one per step
pub const SWEEP_DURATION: Duration = Duration::from_millis(2000);

pub const STEP_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    Idle,
    Running,
    Completed,
    Canceled,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    duration: Duration,
    elapsed: Duration,
    state: TimelineState,
}

impl Timeline {
    pub fn new(duration: Duration) -> Self {
        Timeline {
            duration,
            elapsed: Duration::ZERO,
            state: TimelineState::Idle,
        }
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn start(&mut self) {
        if self.state == TimelineState::Idle {
            self.state = TimelineState::Running;
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, TimelineState::Idle | TimelineState::Running) {
            self.state = TimelineState::Canceled;
        }
    }

    /// Moves a running timeline forward by `dt` and returns whatever part of
    /// `dt` was left once it completed.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        if self.state != TimelineState::Running {
            return dt;
        }

        let remaining = self.duration.saturating_sub(self.elapsed);
        if dt >= remaining {
            self.elapsed = self.duration;
            self.state = TimelineState::Completed;
            dt - remaining
        } else {
            self.elapsed += dt;
            Duration::ZERO
        }
    }

    pub fn progress(&self) -> f32 {
        if self.state == TimelineState::Completed || self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug)]
pub struct AnimationEngine {
    mode: RenderMode,
    timelines: Vec<Timeline>,
    progress: Vec<f32>,
}

impl AnimationEngine {
    pub fn new(mode: RenderMode) -> Self {
        AnimationEngine {
            mode,
            timelines: Vec::new(),
            progress: vec![0.0],
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Switches mode. Running timelines are canceled; the caller restarts.
    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            self.cancel_all();
            self.mode = mode;
        }
    }

    /// Cancels whatever is running and starts the reveal for a dataset of
    /// `entries` values from zero.
    ///
    /// SEQUENTIAL allocates `entries + 1` timelines; the last one runs but
    /// no segment reads it.
    pub fn restart(&mut self, entries: usize) {
        self.cancel_all();

        let (count, duration) = match self.mode {
            RenderMode::Rotate | RenderMode::Split => (1, SWEEP_DURATION),
            RenderMode::Sequential => (entries + 1, STEP_DURATION),
        };

        self.progress = vec![0.0; count];
        self.timelines = (0..count).map(|_| Timeline::new(duration)).collect();
        self.timelines[0].start();

        log::debug!(
            "started {} animation: {} timeline(s) of {:?}",
            self.mode,
            count,
            duration
        );
    }

    /// Cancels everything and resets progress without starting anything.
    pub fn stop(&mut self) {
        self.cancel_all();
        self.progress = vec![0.0];
    }

    fn cancel_all(&mut self) {
        for timeline in self.timelines.iter_mut() {
            timeline.cancel();
        }
        self.timelines.clear();
    }

    /// Feeds `dt` of clock time to the timelines, in order. Time left over
    /// when one completes goes to the next. Returns `true` if any timeline
    /// ticked, meaning the widget needs a redraw.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut budget = dt;
        let mut ticked = false;

        for (i, timeline) in self.timelines.iter_mut().enumerate() {
            match timeline.state() {
                TimelineState::Completed => continue,
                TimelineState::Idle => timeline.start(),
                TimelineState::Running => {}
                TimelineState::Canceled => break,
            }

            budget = timeline.advance(budget);
            self.progress[i] = timeline.progress();
            ticked = true;

            if timeline.state() != TimelineState::Completed {
                break;
            }
            log::trace!("timeline {} completed", i);
        }

        ticked
    }

    pub fn progress(&self) -> &[f32] {
        &self.progress
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    pub fn active_timelines(&self) -> usize {
        self.timelines
            .iter()
            .filter(|t| t.state() == TimelineState::Running)
            .count()
    }

    pub fn is_animating(&self) -> bool {
        self.timelines
            .iter()
            .any(|t| matches!(t.state(), TimelineState::Idle | TimelineState::Running))
    }
}
