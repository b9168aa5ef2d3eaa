use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultBannerProps {
    pub text: String,
    /// `result-win`, `result-lose` or empty.
    pub class: &'static str,
}

#[function_component(ResultBanner)]
pub fn result_banner(props: &ResultBannerProps) -> Html {
    html! {
        <div id="result-text" class={props.class} style="min-height:28px; font-size:18px; font-weight:600; text-align:center;">
            { props.text.clone() }
        </div>
    }
}
