use yew::prelude::*;

use crate::hooks::use_animate::use_animate_in;
use crate::utils::{format::thousands, metrics::percentage_of_max};

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub bars: Vec<(String, f64)>,
    #[prop_or_default]
    pub unit: AttrValue,
    /// Index of a bar to emphasise, e.g. the current year.
    #[prop_or_default]
    pub highlight: Option<usize>,
}

/// Vertical bars sized relative to the tallest one.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let ready = use_animate_in();
    let values: Vec<f64> = props.bars.iter().map(|(_, v)| *v).collect();
    let heights = percentage_of_max(&values);

    html! {
        <div class="bar-chart">
            { for props.bars.iter().zip(heights).enumerate().map(|(i, ((label, value), height))| {
                let height = if ready { height } else { 0.0 };
                let class = classes!("bar", (props.highlight == Some(i)).then_some("bar-highlight"));
                html! {
                    <div class="bar-column" key={label.clone()}>
                        <span class="bar-value">{format!("{} {}", thousands(*value, 0), props.unit)}</span>
                        <div class="bar-slot">
                            <div {class} style={format!("height: {height:.1}%;")}></div>
                        </div>
                        <span class="bar-label">{label}</span>
                    </div>
                }
            }) }
        </div>
    }
}
