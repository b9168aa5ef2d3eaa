//! Sector geometry for the wheel.
//!
//! Angles are in degrees, clockwise, with 0 at the top of the wheel (where the
//! pointer sits). Label placement uses CSS rotation whose 0 points right, hence
//! the -90 offset in [`label_rotation`].

use crate::config::{MIN_SPINS, PALETTE};

#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub start_deg: f64,
    pub end_deg: f64,
    pub color: &'static str,
}

pub fn sector_angle(count: usize) -> f64 {
    360.0 / count as f64
}

pub fn sector_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn sectors(count: usize) -> Vec<Sector> {
    if count == 0 {
        return Vec::new();
    }
    let angle = sector_angle(count);
    (0..count)
        .map(|i| Sector {
            start_deg: i as f64 * angle,
            // pin the final edge so the arcs close the circle exactly
            end_deg: if i + 1 == count { 360.0 } else { (i + 1) as f64 * angle },
            color: sector_color(i),
        })
        .collect()
}

/// CSS background for `count` equal sectors.
pub fn conic_gradient(count: usize) -> String {
    let stops: Vec<String> = sectors(count)
        .iter()
        .map(|s| format!("{} {}deg {}deg", s.color, s.start_deg, s.end_deg))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

pub fn bisector(index: usize, count: usize) -> f64 {
    (index as f64 + 0.5) * sector_angle(count)
}

pub fn label_rotation(index: usize, count: usize) -> f64 {
    bisector(index, count) - 90.0
}

/// Degrees to add to `current` so sector `index` stops under the pointer,
/// always moving forward and always including [`MIN_SPINS`] full turns.
pub fn landing_rotation(current: f64, index: usize, count: usize) -> f64 {
    let desired_mod = (360.0 - bisector(index, count)).rem_euclid(360.0);
    let current_mod = current.rem_euclid(360.0);
    let mut delta = desired_mod - current_mod;
    if delta <= 0.0 {
        delta += 360.0;
    }
    delta + f64::from(MIN_SPINS) * 360.0
}

/// Sector currently under the pointer for a wheel rotated by `rotation`.
pub fn sector_at_pointer(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let angle = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let idx = (angle / sector_angle(count)).floor() as usize;
    Some(idx.min(count - 1))
}
