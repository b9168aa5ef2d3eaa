use yew::prelude::*;

use crate::config::{SPIN_DURATION_MS, SPIN_EASING};
use crate::wheel::{conic_gradient, label_rotation};

#[derive(Properties, PartialEq, Clone)]
pub struct WheelViewProps {
    pub prizes: Vec<String>,
    /// Cumulative rotation in degrees.
    pub rotation: f64,
}

/// Fully regenerated from props on every render.
#[function_component(WheelView)]
pub fn wheel_view(props: &WheelViewProps) -> Html {
    let count = props.prizes.len();
    let disc_style = format!(
        "position:relative; width:340px; height:340px; border-radius:50%; border:6px solid #30363d; box-sizing:border-box; overflow:hidden; background:{}; transform:rotate({}deg); transition:transform {}ms {};",
        conic_gradient(count),
        props.rotation,
        SPIN_DURATION_MS,
        SPIN_EASING
    );
    // each label is a zero-height bar from the center to the rim, pivoting on the center
    let labels = props.prizes.iter().enumerate().map(|(i, prize)| {
        let style = format!(
            "position:absolute; top:50%; left:50%; width:50%; height:0; transform-origin:0 0; transform:rotate({}deg);",
            label_rotation(i, count)
        );
        html! {
            <div class="wheel-label" style={style}>
                <span style="position:absolute; right:18px; top:0; transform:translateY(-50%); max-width:65%; overflow:hidden; text-overflow:ellipsis; white-space:nowrap; font-size:14px; font-weight:600; color:#1f2328;">
                    { prize.clone() }
                </span>
            </div>
        }
    });

    html! {
        <div style="position:relative; padding-top:14px;">
            <div style="position:absolute; top:0; left:50%; transform:translateX(-50%); width:0; height:0; border-left:14px solid transparent; border-right:14px solid transparent; border-top:28px solid #f85149; z-index:2;"></div>
            <div class="wheel-disc" style={disc_style}>
                { for labels }
            </div>
        </div>
    }
}
