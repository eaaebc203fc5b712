use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::charts::line_chart::{LineChart, LineSeries};
use crate::components::charts::palette_color;
use crate::components::charts::trend_chart::TrendChart;
use crate::mock_data;
use crate::models::analytics::{Period, aggregate, period_over_period};
use crate::models::metrics::ChangeType;
use crate::utils::chart::{SeriesPoint, line_dataset};
use crate::utils::format::{percent, tonnes};

const SCOPE_SERIES: [(usize, &str); 3] = [(0, "Scope 1"), (1, "Scope 2"), (2, "Scope 3")];

#[function_component(AnalyticsSection)]
pub fn analytics_section() -> Html {
    let period = use_state(Period::default);
    let months = use_memo((), |_| mock_data::monthly_emissions());
    let points = use_memo((*period, months.clone()), |(period, months)| {
        aggregate(months, *period)
    });

    let on_period = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(next) = Period::all().iter().find(|p| p.label() == select.value()) {
                period.set(*next);
            }
        })
    };

    let series: Vec<LineSeries> = SCOPE_SERIES
        .iter()
        .map(|(index, name)| LineSeries {
            index: *index,
            name: (*name).into(),
        })
        .collect();

    html! {
        <div class="section analytics">
            <div class="card-header">
                <h3>{"Emissions Analytics"}</h3>
                <label class="form-inline">
                    <span>{"Duration"}</span>
                    <select onchange={on_period}>
                        { for Period::all().iter().map(|p| html! {
                            <option value={p.label()} selected={*p == *period}>{p.label()}</option>
                        }) }
                    </select>
                </label>
            </div>

            <div class="metric-grid">
                { for SCOPE_SERIES.iter().chain(std::iter::once(&(3, "Total"))).map(|(index, name)| {
                    summary_card(name, &points, *index, *period)
                }) }
            </div>

            <div class="card">
                <h3>{format!("{} emissions by scope", period.label())}</h3>
                <LineChart data={points.clone()} {series} />
            </div>

            <div class="card">
                <TrendChart id="analytics-trend" data={points.clone()} />
            </div>

            <details class="card">
                <summary>{"Chart data (JSON)"}</summary>
                <pre class="chart-export">{export_json(&points)}</pre>
            </details>
        </div>
    }
}

/// Latest value of one series with its change over the previous bucket.
fn summary_card(name: &str, points: &[SeriesPoint], index: usize, period: Period) -> Html {
    let latest = points.last().map(|p| p.value(index)).unwrap_or_default();
    let change = period_over_period(points, index);

    html! {
        <div class="metric-card" key={name.to_string()}>
            <h3>{name}</h3>
            <p class="metric-value">{tonnes(latest)}</p>
            if let Some(change) = change {
                <p class={classes!("metric-change", ChangeType::from_delta(change).css_class())}>
                    {format!("{} {} vs previous {}", ChangeType::from_delta(change).arrow(), percent(change.abs()), period_noun(period))}
                </p>
            }
        </div>
    }
}

/// Per-scope datasets with their labels, as consumed by Chart.js.
fn export_json(points: &[SeriesPoint]) -> String {
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    let datasets: Vec<_> = SCOPE_SERIES
        .iter()
        .map(|(index, name)| line_dataset(*name, points, |p| p.value(*index), palette_color(*index)))
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({ "labels": labels, "datasets": datasets }))
        .unwrap_or_else(|e| format!("Failed to serialise chart data: {e}"))
}

fn period_noun(period: Period) -> &'static str {
    match period {
        Period::Monthly => "month",
        Period::Quarterly => "quarter",
        Period::Yearly => "year",
    }
}
