use super::prize_wheel::PrizeWheel;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div id="root" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; padding:24px 12px; box-sizing:border-box;">
            <h1 style="margin:0 0 8px 0; font-size:26px; color:#58a6ff;">{"Prize Wheel"}</h1>
            <p style="margin:0 0 16px 0; opacity:0.75; font-size:14px;">{"Enter your prizes, set the win rate, and spin."}</p>
            <PrizeWheel />
        </div>
    }
}
