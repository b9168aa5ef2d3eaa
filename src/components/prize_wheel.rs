use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use super::{
    config_panel::ConfigPanel, controls_panel::ControlsPanel, result_banner::ResultBanner,
    wheel_view::WheelView,
};
use crate::config::SPIN_DURATION_MS;
use crate::error::SpinError;
use crate::model::{WheelAction, WidgetState};
use crate::resolver::{JsRandom, SpinDraw, check_can_start};

/// One self-contained wheel. Every instance owns its own state.
#[function_component]
pub fn PrizeWheel() -> Html {
    let state = use_reducer(WidgetState::default);

    // Disclosure timer, one per accepted spin. Never cancelled: a started spin
    // always discloses its outcome.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(
            (state.spin_id, state.wheel.is_spinning),
            move |&(spin_id, spinning)| {
                if spinning {
                    debug!("scheduling disclosure of spin {} in {}ms", spin_id, SPIN_DURATION_MS);
                    Timeout::new(SPIN_DURATION_MS, move || {
                        dispatcher.dispatch(WheelAction::FinishSpin { spin_id });
                    })
                    .forget();
                }
                || ()
            },
        );
    }

    let on_prize_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(WheelAction::PrizeInput(text)))
    };
    let on_rate_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(WheelAction::RateInput(text)))
    };
    let on_start = {
        let state = state.clone();
        Callback::from(move |_| match check_can_start(&state.config, &state.wheel) {
            Ok(()) => state.dispatch(WheelAction::StartSpin(SpinDraw::from_source(&mut JsRandom))),
            Err(SpinError::NoPrizes) => {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(&SpinError::NoPrizes.to_string());
                }
            }
            Err(SpinError::AlreadySpinning) => debug!("start ignored, wheel is spinning"),
        })
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(WheelAction::Reset))
    };

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:32px; align-items:flex-start; justify-content:center; padding:16px;">
            <div style="display:flex; flex-direction:column; align-items:center; gap:16px;">
                <WheelView prizes={state.display_prizes()} rotation={state.wheel.rotation} />
                <ResultBanner text={state.result.text()} class={state.result.css_class()} />
            </div>
            <div style="display:flex; flex-direction:column; gap:12px; min-width:260px;">
                <ConfigPanel
                    prize_text={state.prize_text.clone()}
                    rate_text={state.rate_text.clone()}
                    rate_error={state.rate_error.as_ref().map(|e| e.to_string())}
                    over_recommended={state.over_recommended()}
                    {on_prize_input}
                    {on_rate_input}
                />
                <ControlsPanel
                    start_enabled={state.start_enabled()}
                    spinning={state.wheel.is_spinning}
                    {on_start}
                    {on_reset}
                />
            </div>
        </div>
    }
}
