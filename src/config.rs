//! Fixed widget constants and the user-editable configuration.

use serde::{Deserialize, Serialize};

/// Sector colors, assigned cyclically (`PALETTE[i % 10]`).
pub const PALETTE: [&str; 10] = [
    "#FECACA", // red
    "#FDE68A", // amber
    "#A7F3D0", // emerald
    "#BFDBFE", // blue
    "#DDD6FE", // violet
    "#FBCFE8", // pink
    "#C7D2FE", // indigo
    "#99F6E4", // teal
    "#FED7AA", // orange
    "#E9D5FF", // purple
];

/// Full extra turns added to every spin.
pub const MIN_SPINS: u32 = 5;
/// Length of the spin transition; the disclosure timer uses the same value.
pub const SPIN_DURATION_MS: u32 = 4000;
pub const SPIN_EASING: &str = "cubic-bezier(0.17, 0.67, 0.12, 0.99)";
pub const DEFAULT_WIN_RATE: f64 = 50.0;
/// UX guideline only, more prizes are still rendered.
pub const RECOMMENDED_MAX_PRIZES: usize = 10;
pub const DEFAULT_PRIZE_COUNT: usize = 5;

pub fn default_prizes() -> Vec<String> {
    (1..=DEFAULT_PRIZE_COUNT).map(|i| format!("Prize {}", i)).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Display order is insertion order; duplicates allowed.
    pub prizes: Vec<String>,
    /// Percentage in [0, 100].
    pub win_rate: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            prizes: default_prizes(),
            win_rate: DEFAULT_WIN_RATE,
        }
    }
}

impl Configuration {
    pub fn is_startable(&self) -> bool {
        !self.prizes.is_empty() && (0.0..=100.0).contains(&self.win_rate)
    }

    /// Text-area representation, one prize per line.
    pub fn as_text(&self) -> String {
        self.prizes.join("\n")
    }

    pub fn rate_text(&self) -> String {
        format!("{}", self.win_rate)
    }
}
