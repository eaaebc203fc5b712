use yew::prelude::*;

use super::palette_color;
use crate::utils::metrics::{MetricInput, donut_segments, shares_or_zero};

const RADIUS: f64 = 40.0;
const STROKE: f64 = 14.0;

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub items: Vec<MetricInput>,
    #[prop_or_default]
    pub center_label: AttrValue,
    #[prop_or_default]
    pub center_value: AttrValue,
}

/// Ring of arcs sized by each item's share of the total.
#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let shares = shares_or_zero(&props.items);
    let segments = donut_segments(&shares, RADIUS);
    let size = (RADIUS + STROKE) * 2.0;
    let center = size / 2.0;

    html! {
        <div class="donut-chart">
            <svg viewBox={format!("0 0 {size} {size}")} class="donut-svg">
                <circle cx={center.to_string()} cy={center.to_string()} r={RADIUS.to_string()}
                    fill="none" class="donut-track" stroke-width={STROKE.to_string()} />
                { for segments.iter().enumerate().filter(|(_, s)| s.length > 0.0).map(|(i, s)| html! {
                    <circle
                        key={s.category.clone()}
                        cx={center.to_string()}
                        cy={center.to_string()}
                        r={RADIUS.to_string()}
                        fill="none"
                        stroke={palette_color(i)}
                        stroke-width={STROKE.to_string()}
                        stroke-dasharray={s.dash_array.clone()}
                        stroke-dashoffset={format!("{:.2}", s.dash_offset)}
                        transform={format!("rotate(-90 {center} {center})")}
                    />
                }) }
                <text x={center.to_string()} y={(center - 2.0).to_string()} text-anchor="middle" class="donut-value">
                    {&props.center_value}
                </text>
                <text x={center.to_string()} y={(center + 10.0).to_string()} text-anchor="middle" class="donut-label">
                    {&props.center_label}
                </text>
            </svg>
            <ul class="donut-legend">
                { for segments.iter().enumerate().map(|(i, s)| html! {
                    <li key={s.category.clone()}>
                        <span class="legend-swatch" style={format!("background: {};", palette_color(i))}></span>
                        <span class="legend-name">{&s.category}</span>
                        <span class="legend-value">{format!("{:.1}%", s.percentage)}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
