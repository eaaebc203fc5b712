use yew::prelude::*;

use super::{CardGrid, use_card_modal};
use crate::components::charts::donut_chart::DonutChart;
use crate::components::charts::line_chart::{LineChart, LineSeries};
use crate::components::status::fetch_status;
use crate::hooks::use_fetch::use_fetch;
use crate::mock_data;
use crate::models::analytics::{Period, aggregate, latest};
use crate::models::targets::DashboardData;
use crate::services::api::EsgClient;
use crate::utils::format::{percent, tonnes};
use crate::utils::metrics::MetricInput;

#[function_component(Overview)]
pub fn overview() -> Html {
    let dashboard = use_fetch(|client: EsgClient| async move { client.fetch_dashboard_data().await });
    let (on_select, card_modal) = use_card_modal();

    let trend = use_memo((), |_| {
        latest(aggregate(&mock_data::monthly_emissions(), Period::Monthly), 12)
    });

    // Live figures replace the fallback breakdown once they arrive.
    let (scope_items, total) = match dashboard.state.data() {
        Some(data) if data.scope_sum() > 0.0 => (scope_breakdown(data), data.total_or_scope_sum()),
        _ => {
            let items = mock_data::emissions_by_scope();
            let total = items.iter().map(|i| i.value).sum();
            (items, total)
        }
    };

    html! {
        <div class="section overview">
            <CardGrid cards={mock_data::overview_cards()} on_select={Some(on_select)} />

            {fetch_status(&dashboard.state, dashboard.refetch.clone())}
            if let Some(data) = dashboard.state.data() {
                <div class="card live-figures">
                    <h3>{"Latest reported figures"}</h3>
                    <dl class="figures">
                        <dt>{"Total emissions"}</dt>
                        <dd>{tonnes(data.total_or_scope_sum())}</dd>
                        <dt>{"Reduction vs baseline"}</dt>
                        <dd>{percent(data.reduction_percent)}</dd>
                        <dt>{"Renewable share"}</dt>
                        <dd>{percent(data.renewable_share)}</dd>
                    </dl>
                </div>
            }

            <div class="chart-row">
                <div class="card">
                    <h3>{"Emissions by Scope"}</h3>
                    <DonutChart
                        items={scope_items}
                        center_label="Total"
                        center_value={tonnes(total)}
                    />
                </div>
                <div class="card grow">
                    <h3>{"Monthly Emissions Trend"}</h3>
                    <LineChart
                        data={trend.clone()}
                        series={vec![LineSeries { index: 3, name: "Total".into() }]}
                        filled={true}
                    />
                </div>
            </div>

            {card_modal}
        </div>
    }
}

fn scope_breakdown(data: &DashboardData) -> Vec<MetricInput> {
    vec![
        MetricInput::new("Scope 1", data.scope1),
        MetricInput::new("Scope 2", data.scope2),
        MetricInput::new("Scope 3", data.scope3),
    ]
}
