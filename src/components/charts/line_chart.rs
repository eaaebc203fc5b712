use std::rc::Rc;
use yew::prelude::*;

use super::palette_color;
use crate::utils::chart::{SeriesPoint, area_points, polyline_points, series_max};

/// Which value of each point to draw, and how to name it.
#[derive(Clone, PartialEq)]
pub struct LineSeries {
    pub index: usize,
    pub name: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub data: Rc<Vec<SeriesPoint>>,
    pub series: Vec<LineSeries>,
    #[prop_or(600.0)]
    pub width: f64,
    #[prop_or(220.0)]
    pub height: f64,
    /// Shade the area under the first series.
    #[prop_or(false)]
    pub filled: bool,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let data: &[SeriesPoint] = &props.data;

    // Shared scale so series are comparable
    let max = props
        .series
        .iter()
        .map(|s| series_max(data, |p| p.value(s.index)))
        .fold(0.0, f64::max);

    let lines: Vec<(usize, &LineSeries, String)> = props
        .series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            polyline_points(data, |p| p.value(s.index), max, props.height, props.width)
                .ok()
                .map(|points| (i, s, points))
        })
        .collect();

    if lines.is_empty() {
        return html! {
            <div class="chart-empty">{"Not enough data points to draw a trend."}</div>
        };
    }

    let area = props
        .filled
        .then(|| lines.first())
        .flatten()
        .map(|(i, _, points)| {
            html! {
                <polygon
                    points={area_points(points, props.height, props.width)}
                    fill={palette_color(*i)}
                    fill-opacity="0.12"
                />
            }
        });

    let first_label = data.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = data.last().map(|p| p.label.clone()).unwrap_or_default();

    html! {
        <div class="line-chart">
            <svg
                viewBox={format!("0 -4 {} {}", props.width, props.height + 8.0)}
                preserveAspectRatio="none"
                class="line-chart-svg"
            >
                <line x1="0" y1={props.height.to_string()} x2={props.width.to_string()} y2={props.height.to_string()} class="chart-axis" />
                {area}
                { for lines.iter().map(|(i, s, points)| html! {
                    <polyline
                        key={s.name.to_string()}
                        points={points.clone()}
                        fill="none"
                        stroke={palette_color(*i)}
                        stroke-width="2.5"
                        stroke-linejoin="round"
                        stroke-linecap="round"
                        vector-effect="non-scaling-stroke"
                    />
                }) }
            </svg>
            <div class="chart-x-labels">
                <span>{first_label}</span>
                <span>{last_label}</span>
            </div>
            <div class="chart-legend">
                { for lines.iter().map(|(i, s, _)| html! {
                    <span class="legend-item" key={s.name.to_string()}>
                        <span class="legend-swatch" style={format!("background: {};", palette_color(*i))}></span>
                        {&s.name}
                    </span>
                }) }
            </div>
        </div>
    }
}
