use std::rc::Rc;
use yew::prelude::*;

use super::ModalFrame;
use crate::components::charts::line_chart::{LineChart, LineSeries};
use crate::components::progress_bar::ProgressBar;
use crate::models::metrics::{CardAccent, MetricCard};
use crate::utils::chart::SeriesPoint;

#[derive(Properties, PartialEq)]
pub struct MetricsModalProps {
    pub card: MetricCard,
    pub on_close: Callback<()>,
}

/// Expanded view of a metric card.
#[function_component(MetricsModal)]
pub fn metrics_modal(props: &MetricsModalProps) -> Html {
    let card = &props.card;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let detail = match &card.accent {
        Some(CardAccent::Progress(percent)) => html! {
            <ProgressBar percent={*percent} label={AttrValue::from("Progress")} />
        },
        Some(CardAccent::Trend(samples)) => {
            let data = Rc::new(trend_points(samples));
            html! {
                <LineChart
                    {data}
                    series={vec![LineSeries { index: 0, name: card.title.clone().into() }]}
                    height={160.0}
                />
            }
        }
        None => html! {},
    };

    html! {
        <ModalFrame title={card.title.clone()} on_close={props.on_close.clone()}>
            <div class="metric-detail">
                <span class="metric-icon large">{card.icon}</span>
                <p class="metric-value">{&card.value}</p>
                <p class={classes!("metric-change", card.change_type.css_class())}>
                    {format!("{} {}", card.change_type.arrow(), card.change)}
                </p>
                if !card.subtitle.is_empty() {
                    <p class="metric-subtitle">{&card.subtitle}</p>
                }
                {detail}
            </div>
            <div class="modal-action">
                <button class="btn" onclick={close}>{"Close"}</button>
            </div>
        </ModalFrame>
    }
}

/// Labels trailing samples relative to the latest one.
fn trend_points(samples: &[f64]) -> Vec<SeriesPoint> {
    let last = samples.len().saturating_sub(1);
    samples
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let label = if i == last { "Now".to_string() } else { format!("-{}", last - i) };
            SeriesPoint::new(label, vec![*v])
        })
        .collect()
}
