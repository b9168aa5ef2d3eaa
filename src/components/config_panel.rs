use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::RECOMMENDED_MAX_PRIZES;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfigPanelProps {
    pub prize_text: String,
    pub rate_text: String,
    pub rate_error: Option<String>,
    pub over_recommended: bool,
    pub on_prize_input: Callback<String>,
    pub on_rate_input: Callback<String>,
}

#[function_component]
pub fn ConfigPanel(props: &ConfigPanelProps) -> Html {
    let prize_cb = {
        let cb = props.on_prize_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };
    let rate_cb = {
        let cb = props.on_rate_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let hint_style = "font-size:11px; opacity:0.7;";
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;">
        <label style="font-weight:600;">{"Prizes (one per line)"}</label>
        <textarea id="prize-input" rows="8" value={props.prize_text.clone()} oninput={prize_cb}
            style="resize:vertical; font:inherit; padding:6px; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#e6edf3;" />
        { if props.over_recommended {
            html!{ <div style={hint_style}>{ format!("More than {} prizes may be hard to read.", RECOMMENDED_MAX_PRIZES) }</div> }
        } else { html!{} } }
        <label style="font-weight:600;">{"Win rate (%)"}</label>
        <input id="rate-input" type="number" min="0" max="100" step="any" value={props.rate_text.clone()} oninput={rate_cb}
            style="font:inherit; padding:4px 6px; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#e6edf3;" />
        { if let Some(err) = &props.rate_error {
            html!{ <div class="rate-error" style="font-size:12px; color:#f85149;">{ format!("Enter a number from 0 to 100 ({})", err) }</div> }
        } else { html!{} } }
    </div>}
}
