#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

// Longer gaps (background tabs) are treated as one frame.
const MAX_FRAME_MS: f64 = 64.0;
const SUBSTEP_MS: f64 = 1.0;

/// Semi-implicit Euler in fixed sub-steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let mut remaining = dt_ms.clamp(0.0, MAX_FRAME_MS);
        let mass = self.config.mass.max(f64::EPSILON);
        while remaining > 0.0 {
            let dt = remaining.min(SUBSTEP_MS) / 1000.0;
            let spring = -self.config.stiffness * (self.value - self.target);
            let damper = -self.config.damping * self.velocity;
            self.velocity += (spring + damper) / mass * dt;
            self.value += self.velocity * dt;
            remaining -= SUBSTEP_MS;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: SpringConfig = SpringConfig::new(120.0, 20.0, 0.2);

    fn settle(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(16.0);
        }
    }

    #[test]
    fn idle_spring_stays_put() {
        let mut spring = Spring::new(CONFIG, 0.3);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(16.0), 0.3);
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(CONFIG, 0.0);
        spring.set_target(1.0);
        settle(&mut spring, 120);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn overdamped_config_does_not_overshoot() {
        assert!(CONFIG.damping_ratio() >= 1.0);
        let mut spring = Spring::new(CONFIG, 0.0);
        spring.set_target(1.0);
        let mut last = 0.0;
        for _ in 0..200 {
            let value = spring.step(16.0);
            assert!(value <= 1.0 + 1e-9);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn frame_pacing_does_not_change_outcome() {
        let mut coarse = Spring::new(CONFIG, 0.0);
        let mut fine = Spring::new(CONFIG, 0.0);
        coarse.set_target(0.5);
        fine.set_target(0.5);
        coarse.step(32.0);
        fine.step(16.0);
        fine.step(16.0);
        assert!((coarse.value() - fine.value()).abs() < 1e-9);
    }

    #[test]
    fn long_gap_is_capped() {
        let mut capped = Spring::new(CONFIG, 0.0);
        let mut frame = Spring::new(CONFIG, 0.0);
        capped.set_target(1.0);
        frame.set_target(1.0);
        capped.step(10_000.0);
        frame.step(MAX_FRAME_MS);
        assert_eq!(capped.value(), frame.value());
    }
}
