use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::models::metrics::{CardAccent, MetricCard};
use crate::utils::chart::{polyline_points, series_max};

const SPARK_WIDTH: f64 = 120.0;
const SPARK_HEIGHT: f64 = 32.0;

#[derive(Properties, PartialEq)]
pub struct MetricCardViewProps {
    pub card: MetricCard,
    #[prop_or_default]
    pub on_select: Option<Callback<MetricCard>>,
}

#[function_component(MetricCardView)]
pub fn metric_card_view(props: &MetricCardViewProps) -> Html {
    let card = &props.card;

    let onclick = props.on_select.clone().map(|on_select| {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(card.clone()))
    });
    let card_class = classes!("metric-card", onclick.is_some().then_some("clickable"));

    let accent = match &card.accent {
        Some(CardAccent::Progress(percent)) => html! { <ProgressBar percent={*percent} /> },
        Some(CardAccent::Trend(samples)) => sparkline(samples),
        None => html! {},
    };

    html! {
        <div class={card_class} {onclick}>
            <div class="metric-card-header">
                <span class="metric-icon">{card.icon}</span>
                <h3>{&card.title}</h3>
            </div>
            <p class="metric-value">{&card.value}</p>
            <p class={classes!("metric-change", card.change_type.css_class())}>
                {format!("{} {}", card.change_type.arrow(), card.change)}
                if !card.subtitle.is_empty() {
                    <span class="metric-subtitle">{format!(" {}", card.subtitle)}</span>
                }
            </p>
            {accent}
        </div>
    }
}

/// Small trend line; nothing for fewer than two samples.
fn sparkline(samples: &[f64]) -> Html {
    let max = series_max(samples, |v| *v);
    match polyline_points(samples, |v| *v, max, SPARK_HEIGHT, SPARK_WIDTH) {
        Ok(points) => html! {
            <svg
                class="sparkline"
                viewBox={format!("0 -2 {SPARK_WIDTH} {}", SPARK_HEIGHT + 4.0)}
                preserveAspectRatio="none"
            >
                <polyline {points} fill="none" stroke="currentColor" stroke-width="2" />
            </svg>
        },
        Err(_) => html! {},
    }
}
