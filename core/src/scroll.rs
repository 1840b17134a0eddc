use crate::spring::{Spring, SpringConfig};

pub const BACK_TO_TOP_THRESHOLD: f64 = 0.15;
pub const PROGRESS_BAR_SPRING: SpringConfig = SpringConfig::new(120.0, 20.0, 0.2);
pub const BACK_TO_TOP_SPRING: SpringConfig = SpringConfig::new(120.0, 20.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if !range.is_finite() || range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub bar_scale: f64,
    pub show_back_to_top: bool,
    pub settled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    raw: f64,
    bar: Spring,
    visibility: Spring,
    show_back_to_top: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            raw: 0.0,
            bar: Spring::new(PROGRESS_BAR_SPRING, 0.0),
            visibility: Spring::new(BACK_TO_TOP_SPRING, 0.0),
            show_back_to_top: false,
        }
    }

    pub fn observe(&mut self, progress: f64) {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.raw = progress;
        self.bar.set_target(progress);
        self.visibility.set_target(progress);
    }

    pub fn is_settled(&self) -> bool {
        self.bar.is_at_rest() && self.visibility.is_at_rest()
    }

    pub fn advance(&mut self, dt_ms: f64) -> ScrollFrame {
        self.bar.step(dt_ms);
        let smoothed = self.visibility.step(dt_ms);
        self.show_back_to_top = smoothed > BACK_TO_TOP_THRESHOLD;
        self.frame()
    }

    pub fn frame(&self) -> ScrollFrame {
        ScrollFrame {
            bar_scale: self.bar.value().clamp(0.0, 1.0),
            show_back_to_top: self.show_back_to_top,
            settled: self.is_settled(),
        }
    }

    pub fn smoothed_progress(&self) -> f64 {
        self.visibility.value().clamp(0.0, 1.0)
    }
}
