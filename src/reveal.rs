//! Progressive count-up of result values.
//!
//! Pure helpers for a presentation layer that animates a finished
//! [`ImpactResult`] from zero to its final values.  The caller owns the timer;
//! nothing here sleeps or knows about wall-clock time beyond reporting the
//! configured frame interval.

use serde::Serialize;

use crate::config::ImpactConfig;
use crate::constants::{REVEAL_DURATION_MS, REVEAL_STEPS};
use crate::impact::ImpactResult;

/// Cubic ease-out: fast start, gentle landing.  `progress` is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value to display at `progress` of the way through the animation.
#[inline]
pub fn reveal(final_value: f64, progress: f64) -> f64 {
    final_value * ease_out_cubic(progress)
}

/// Display snapshot of an [`ImpactResult`] mid-animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealedResult {
    pub population_affected: u64,
    pub infrastructure_damage: u64,
    pub shockwave_radius: u32,
    pub fireball_radius: u32,
    pub tsunami_radius: u32,
    /// Floored to two decimals until the final frame.
    pub probability: f64,
}

impl From<ImpactResult> for RevealedResult {
    fn from(result: ImpactResult) -> Self {
        Self {
            population_affected: result.population_affected,
            infrastructure_damage: result.infrastructure_damage,
            shockwave_radius: result.shockwave_radius,
            fireball_radius: result.fireball_radius,
            tsunami_radius: result.tsunami_radius,
            probability: result.probability,
        }
    }
}

/// Fixed-length frame schedule for the count-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    pub duration_ms: u64,
    pub steps: u32,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            duration_ms: REVEAL_DURATION_MS,
            steps: REVEAL_STEPS,
        }
    }
}

impl From<&ImpactConfig> for RevealSchedule {
    fn from(config: &ImpactConfig) -> Self {
        Self {
            duration_ms: config.reveal_duration_ms,
            steps: config.reveal_steps,
        }
    }
}

impl RevealSchedule {
    /// Time between consecutive frames.
    pub fn step_interval_ms(&self) -> u64 {
        self.duration_ms / u64::from(self.steps.max(1))
    }

    /// Linear progress after `step` frames, saturating at 1.
    pub fn progress(&self, step: u32) -> f64 {
        if self.steps == 0 {
            return 1.0;
        }
        (f64::from(step) / f64::from(self.steps)).min(1.0)
    }

    /// Snapshot shown after `step` frames.  Frame `steps` is the exact result.
    pub fn frame(&self, result: &ImpactResult, step: u32) -> RevealedResult {
        if self.progress(step) >= 1.0 {
            return RevealedResult::from(*result);
        }
        let eased = ease_out_cubic(self.progress(step));
        let scale_u64 = |v: u64| (v as f64 * eased).floor() as u64;
        let scale_u32 = |v: u32| (f64::from(v) * eased).floor() as u32;

        RevealedResult {
            population_affected: scale_u64(result.population_affected),
            infrastructure_damage: scale_u64(result.infrastructure_damage),
            shockwave_radius: scale_u32(result.shockwave_radius),
            fireball_radius: scale_u32(result.fireball_radius),
            tsunami_radius: scale_u32(result.tsunami_radius),
            probability: (result.probability * eased * 100.0).floor() / 100.0,
        }
    }

    /// All frames from the first tick (step 1) to the final one.
    pub fn frames<'a>(
        &'a self,
        result: &'a ImpactResult,
    ) -> impl Iterator<Item = RevealedResult> + 'a {
        (1..=self.steps).map(move |step| self.frame(result, step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImpactResult {
        ImpactResult {
            population_affected: 5_000_000,
            infrastructure_damage: 250_000_000_000,
            shockwave_radius: 250,
            fireball_radius: 100,
            tsunami_radius: 500,
            probability: 37.5,
        }
    }

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn ease_is_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_cubic(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn reveal_scales_final_value() {
        assert_eq!(reveal(1000.0, 0.0), 0.0);
        assert_eq!(reveal(1000.0, 1.0), 1000.0);
        assert_eq!(reveal(1000.0, 0.5), 875.0);
    }

    #[test]
    fn default_schedule_is_two_seconds_in_sixty_steps() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.duration_ms, 2000);
        assert_eq!(schedule.steps, 60);
        assert_eq!(schedule.step_interval_ms(), 33);
    }

    #[test]
    fn final_frame_equals_result() {
        let schedule = RevealSchedule::default();
        let result = sample();
        let last = schedule.frames(&result).last().expect("non-empty schedule");
        assert_eq!(last.population_affected, result.population_affected);
        assert_eq!(last.infrastructure_damage, result.infrastructure_damage);
        assert_eq!(last.tsunami_radius, result.tsunami_radius);
        assert_eq!(last.probability, 37.5);
        assert_eq!(schedule.frames(&result).count(), 60);
    }

    #[test]
    fn final_frame_keeps_full_probability_precision() {
        let schedule = RevealSchedule::default();
        let result = ImpactResult {
            probability: 42.123456,
            ..sample()
        };
        let last = schedule.frames(&result).last().expect("non-empty schedule");
        assert_eq!(last.probability, 42.123456);
        assert_eq!(last, RevealedResult::from(result));

        let penultimate = schedule.frame(&result, schedule.steps - 1);
        assert_eq!(penultimate.probability, 42.12);
    }

    #[test]
    fn frames_count_up_monotonically() {
        let schedule = RevealSchedule::default();
        let result = sample();
        let frames: Vec<_> = schedule.frames(&result).collect();
        for pair in frames.windows(2) {
            assert!(pair[0].population_affected <= pair[1].population_affected);
            assert!(pair[0].shockwave_radius <= pair[1].shockwave_radius);
            assert!(pair[0].probability <= pair[1].probability);
        }
    }

    #[test]
    fn schedule_follows_config() {
        let config = ImpactConfig {
            reveal_steps: 10,
            reveal_duration_ms: 500,
            ..Default::default()
        };
        let schedule = RevealSchedule::from(&config);
        assert_eq!(schedule.step_interval_ms(), 50);
        assert_eq!(schedule.progress(5), 0.5);
        assert_eq!(schedule.progress(15), 1.0);
    }
}
