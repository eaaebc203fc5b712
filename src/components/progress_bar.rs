use yew::prelude::*;

use crate::hooks::use_animate::{animated_width, use_animate_in};

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// 0-100
    pub percent: f64,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("progress-fill"))]
    pub fill_class: AttrValue,
}

/// Horizontal bar that grows to `percent` shortly after mount.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let ready = use_animate_in();
    let style = animated_width(props.percent, ready);

    html! {
        <div class="progress">
            if let Some(label) = &props.label {
                <div class="progress-label">
                    <span>{label}</span>
                    <span>{format!("{:.1}%", props.percent)}</span>
                </div>
            }
            <div class="progress-track">
                <div class={props.fill_class.clone()} {style}></div>
            </div>
        </div>
    }
}
