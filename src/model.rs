//! Widget state for one prize wheel and the reducer driving it.
//! The state machine is Idle -> Spinning -> Idle; the only way out of Spinning
//! is the timed `FinishSpin` dispatched by the wheel component.

use log::{debug, info, warn};
use std::rc::Rc;
use yew::Reducible;

use crate::config::{Configuration, default_prizes};
use crate::error::WinRateError;
use crate::input::{exceeds_recommended, parse_prizes, parse_win_rate};
use crate::resolver::{SpinDraw, SpinOutcome, resolve_spin};
use crate::wheel::sector_at_pointer;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelState {
    pub is_spinning: bool,
    /// Total degrees ever applied. Never decreases, reset keeps it too.
    pub rotation: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultDisplay {
    #[default]
    Empty,
    InProgress,
    Win(String),
    Lose,
}

impl ResultDisplay {
    pub fn text(&self) -> String {
        match self {
            ResultDisplay::Empty => String::new(),
            ResultDisplay::InProgress => "Spinning...".to_string(),
            ResultDisplay::Win(label) => format!("Congratulations! You won: {}", label),
            ResultDisplay::Lose => "Sorry, no prize this time".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ResultDisplay::Win(_) => "result-win",
            ResultDisplay::Lose => "result-lose",
            _ => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    /// Active configuration; the prize list may be empty while the text area is blank.
    pub config: Configuration,
    pub wheel: WheelState,
    /// Raw field contents, kept as typed.
    pub prize_text: String,
    pub rate_text: String,
    pub rate_error: Option<WinRateError>,
    /// Outcome fixed at spin start, disclosed by `FinishSpin`.
    pub pending: Option<SpinOutcome>,
    pub result: ResultDisplay,
    /// Bumped on every accepted spin so a disclosure can only finish its own spin.
    pub spin_id: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        let config = Configuration::default();
        Self {
            prize_text: config.as_text(),
            rate_text: config.rate_text(),
            config,
            wheel: WheelState::default(),
            rate_error: None,
            pending: None,
            result: ResultDisplay::Empty,
            spin_id: 0,
        }
    }
}

impl WidgetState {
    pub fn start_enabled(&self) -> bool {
        !self.wheel.is_spinning && self.rate_error.is_none() && self.config.is_startable()
    }

    /// Labels drawn on the wheel: placeholders stand in for an empty list.
    pub fn display_prizes(&self) -> Vec<String> {
        if self.config.prizes.is_empty() {
            default_prizes()
        } else {
            self.config.prizes.clone()
        }
    }

    pub fn over_recommended(&self) -> bool {
        exceeds_recommended(self.config.prizes.len())
    }
}

#[derive(Clone, Debug)]
pub enum WheelAction {
    PrizeInput(String),
    RateInput(String),
    StartSpin(SpinDraw),
    FinishSpin { spin_id: u64 },
    Reset,
}

impl Reducible for WidgetState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use WheelAction::*;
        let mut new = (*self).clone();
        match action {
            PrizeInput(text) => {
                new.config.prizes = parse_prizes(&text);
                new.prize_text = text;
                debug!("prize list now has {} entries", new.config.prizes.len());
            }
            RateInput(text) => {
                match parse_win_rate(&text) {
                    Ok(rate) => {
                        new.config.win_rate = rate;
                        new.rate_error = None;
                    }
                    Err(e) => {
                        debug!("rejected win rate: {}", e);
                        new.rate_error = Some(e);
                    }
                }
                new.rate_text = text;
            }
            StartSpin(draw) => match resolve_spin(&new.config, &new.wheel, draw) {
                Ok((outcome, target)) => {
                    info!(
                        "spin {} started: {}",
                        new.spin_id + 1,
                        serde_json::to_string(&outcome).unwrap_or_default()
                    );
                    debug!(
                        "rotation {} -> {}, pointer over sector {:?}",
                        new.wheel.rotation,
                        target,
                        sector_at_pointer(target, new.config.prizes.len())
                    );
                    new.wheel.is_spinning = true;
                    new.wheel.rotation = target;
                    new.spin_id += 1;
                    new.pending = Some(outcome);
                    new.result = ResultDisplay::InProgress;
                }
                Err(e) => {
                    warn!("spin refused: {}", e);
                    return self;
                }
            },
            FinishSpin { spin_id } => {
                if !new.wheel.is_spinning || spin_id != new.spin_id {
                    warn!("stale disclosure for spin {} ignored", spin_id);
                    return self;
                }
                new.wheel.is_spinning = false;
                new.result = match new.pending.take() {
                    Some(o) if o.is_win => ResultDisplay::Win(o.prize_label),
                    Some(_) => ResultDisplay::Lose,
                    None => ResultDisplay::Empty,
                };
                info!("spin {} finished: {:?}", spin_id, new.result);
            }
            Reset => {
                if new.wheel.is_spinning {
                    warn!("reset ignored while spinning");
                    return self;
                }
                new.config = Configuration::default();
                new.prize_text = new.config.as_text();
                new.rate_text = new.config.rate_text();
                new.rate_error = None;
                new.pending = None;
                new.result = ResultDisplay::Empty;
                debug!("configuration reset, rotation kept at {}", new.wheel.rotation);
            }
        }
        Rc::new(new)
    }
}
