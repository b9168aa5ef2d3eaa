use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub start_enabled: bool,
    pub spinning: bool,
    pub on_start: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:8px;">
        <button onclick={start_cb} disabled={!props.start_enabled} style="flex:1; padding:8px 12px; font-weight:600;">
            { if props.spinning { "Spinning..." } else { "Start" } }
        </button>
        <button onclick={reset_cb} disabled={props.spinning} style="padding:8px 12px;">{"Reset"}</button>
    </div>}
}
