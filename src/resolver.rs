//! Spin Resolver: decides win/lose, picks the landing sector and computes how
//! far the wheel has to turn to show it under the pointer.
//!
//! The win roll and the sector pick are independent. A loss can stop on any
//! sector, and on a win the disclosed prize is the sector the wheel stops on.

use serde::Serialize;

use crate::config::Configuration;
use crate::error::SpinError;
use crate::model::WheelState;
use crate::wheel;

/// Uniform source of values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Random values for one spin, drawn before the state transition runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinDraw {
    /// Scaled to `[0, 100)` and compared against the win rate.
    pub roll: f64,
    /// Scaled to `[0, prize_count)` to pick the landing sector.
    pub sector_unit: f64,
}

impl SpinDraw {
    pub fn from_source<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let roll = rng.next_unit();
        let sector_unit = rng.next_unit();
        Self { roll, sector_unit }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpinOutcome {
    pub is_win: bool,
    pub target_sector_index: usize,
    pub prize_label: String,
    pub rotation_delta: f64,
}

/// Guard for the Idle -> Spinning transition.
pub fn check_can_start(config: &Configuration, wheel_state: &WheelState) -> Result<(), SpinError> {
    if wheel_state.is_spinning {
        return Err(SpinError::AlreadySpinning);
    }
    if config.prizes.is_empty() {
        return Err(SpinError::NoPrizes);
    }
    Ok(())
}

/// Returns the outcome and the new cumulative rotation to animate to.
pub fn resolve_spin(
    config: &Configuration,
    wheel_state: &WheelState,
    draw: SpinDraw,
) -> Result<(SpinOutcome, f64), SpinError> {
    check_can_start(config, wheel_state)?;
    let count = config.prizes.len();

    // `<=` keeps a win possible at rate 0 when the roll is exactly 0
    let r = draw.roll * 100.0;
    let is_win = r <= config.win_rate;

    let target_sector_index = ((draw.sector_unit * count as f64).floor() as usize).min(count - 1);
    let rotation_delta = wheel::landing_rotation(wheel_state.rotation, target_sector_index, count);

    let outcome = SpinOutcome {
        is_win,
        target_sector_index,
        prize_label: config.prizes[target_sector_index].clone(),
        rotation_delta,
    };
    Ok((outcome, wheel_state.rotation + rotation_delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_SPINS;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Seeded(StdRng);

    impl RandomSource for Seeded {
        fn next_unit(&mut self) -> f64 {
            self.0.random::<f64>()
        }
    }

    fn cfg(prizes: &[&str], win_rate: f64) -> Configuration {
        Configuration {
            prizes: prizes.iter().map(|p| p.to_string()).collect(),
            win_rate,
        }
    }

    fn idle(rotation: f64) -> WheelState {
        WheelState { is_spinning: false, rotation }
    }

    fn draw(roll: f64, sector_unit: f64) -> SpinDraw {
        SpinDraw { roll, sector_unit }
    }

    #[test]
    fn refuses_while_spinning() {
        let wheel = WheelState { is_spinning: true, rotation: 0.0 };
        let err = resolve_spin(&cfg(&["A"], 50.0), &wheel, draw(0.1, 0.1)).unwrap_err();
        assert_eq!(err, SpinError::AlreadySpinning);
    }

    #[test]
    fn refuses_without_prizes() {
        let err = resolve_spin(&cfg(&[], 50.0), &idle(0.0), draw(0.1, 0.1)).unwrap_err();
        assert_eq!(err, SpinError::NoPrizes);
        assert_eq!(err.to_string(), "Please enter at least one prize");
    }

    #[test]
    fn spinning_is_reported_before_missing_prizes() {
        let wheel = WheelState { is_spinning: true, rotation: 0.0 };
        assert_eq!(check_can_start(&cfg(&[], 50.0), &wheel), Err(SpinError::AlreadySpinning));
        assert_eq!(check_can_start(&cfg(&["A"], 50.0), &idle(0.0)), Ok(()));
    }

    #[test]
    fn sector_pick_is_uniform_bucket() {
        let c = cfg(&["A", "B", "C", "D"], 50.0);
        let (o, _) = resolve_spin(&c, &idle(0.0), draw(0.9, 0.0)).unwrap();
        assert_eq!(o.target_sector_index, 0);
        let (o, _) = resolve_spin(&c, &idle(0.0), draw(0.9, 0.26)).unwrap();
        assert_eq!(o.target_sector_index, 1);
        assert_eq!(o.prize_label, "B");
        let (o, _) = resolve_spin(&c, &idle(0.0), draw(0.9, 0.999_999)).unwrap();
        assert_eq!(o.target_sector_index, 3);
    }

    #[test]
    fn win_threshold_is_inclusive() {
        let c = cfg(&["A"], 25.0);
        assert!(resolve_spin(&c, &idle(0.0), draw(0.25, 0.0)).unwrap().0.is_win);
        assert!(!resolve_spin(&c, &idle(0.0), draw(0.250_001, 0.0)).unwrap().0.is_win);
    }

    #[test]
    fn zero_rate_still_wins_on_exact_zero_roll() {
        let c = cfg(&["A", "B"], 0.0);
        let (o, _) = resolve_spin(&c, &idle(0.0), draw(0.0, 0.5)).unwrap();
        assert!(o.is_win);
        let (o, _) = resolve_spin(&c, &idle(0.0), draw(f64::EPSILON, 0.5)).unwrap();
        assert!(!o.is_win);
    }

    #[test]
    fn full_rate_always_wins() {
        let mut rng = Seeded(StdRng::seed_from_u64(7));
        let c = cfg(&["A", "B", "C"], 100.0);
        let mut wheel = idle(0.0);
        for _ in 0..10_000 {
            let (o, target) = resolve_spin(&c, &wheel, SpinDraw::from_source(&mut rng)).unwrap();
            assert!(o.is_win);
            wheel.rotation = target;
        }
    }

    #[test]
    fn zero_rate_loses_for_every_positive_roll() {
        let mut rng = Seeded(StdRng::seed_from_u64(11));
        let c = cfg(&["A", "B", "C"], 0.0);
        for _ in 0..10_000 {
            let d = SpinDraw::from_source(&mut rng);
            let (o, _) = resolve_spin(&c, &idle(0.0), d).unwrap();
            assert_eq!(o.is_win, d.roll == 0.0);
        }
    }

    #[test]
    fn rotation_is_forward_and_lands_on_target() {
        let mut rng = Seeded(StdRng::seed_from_u64(3));
        let c = cfg(&["A", "B", "C", "D", "E", "F", "G"], 50.0);
        let mut wheel = idle(0.0);
        for _ in 0..10_000 {
            let (o, target) = resolve_spin(&c, &wheel, SpinDraw::from_source(&mut rng)).unwrap();
            assert!(target > wheel.rotation);
            assert!(target - wheel.rotation >= f64::from(MIN_SPINS) * 360.0 - 1e-6);
            assert!((o.rotation_delta - (target - wheel.rotation)).abs() < 1e-6);
            assert_eq!(wheel::sector_at_pointer(target, c.prizes.len()), Some(o.target_sector_index));
            assert_eq!(o.prize_label, c.prizes[o.target_sector_index]);
            wheel.rotation = target;
        }
    }

    #[test]
    fn two_prize_full_rate_discloses_landing_sector() {
        let mut rng = Seeded(StdRng::seed_from_u64(99));
        let c = cfg(&["A", "B"], 100.0);
        let mut seen = [false; 2];
        for _ in 0..1_000 {
            let (o, target) = resolve_spin(&c, &idle(123.0), SpinDraw::from_source(&mut rng)).unwrap();
            assert!(o.is_win);
            assert!(o.prize_label == "A" || o.prize_label == "B");
            let landed = wheel::sector_at_pointer(target, 2).unwrap();
            assert_eq!(c.prizes[landed], o.prize_label);
            seen[landed] = true;
        }
        assert_eq!(seen, [true, true]);
    }
}
