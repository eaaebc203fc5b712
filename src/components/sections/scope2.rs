use yew::prelude::*;

use super::{CardGrid, use_card_modal};
use crate::components::charts::donut_chart::DonutChart;
use crate::components::charts::palette_color;
use crate::components::emissions_manager::EmissionsManager;
use crate::components::progress_bar::ProgressBar;
use crate::mock_data;
use crate::models::emissions::Scope;
use crate::utils::format::{percent, tonnes};
use crate::utils::metrics::shares_or_zero;

#[function_component(Scope2Section)]
pub fn scope2_section() -> Html {
    let (on_select, card_modal) = use_card_modal();
    let sources = mock_data::scope2_sources();
    let shares = shares_or_zero(&sources);
    let total: f64 = sources.iter().map(|s| s.value).sum();

    html! {
        <div class="section scope2">
            <p class="section-intro">
                {"Indirect emissions from purchased electricity, steam, heating and cooling."}
            </p>
            <CardGrid cards={mock_data::scope2_cards()} on_select={Some(on_select)} />

            <div class="chart-row">
                <div class="card">
                    <h3>{"Emissions by Source"}</h3>
                    <DonutChart items={sources} center_label="Scope 2" center_value={tonnes(total)} />
                </div>
                <div class="card grow">
                    <h3>{"Source Breakdown"}</h3>
                    { for shares.iter().enumerate().map(|(i, share)| html! {
                        <div class="breakdown-row" key={share.category.clone()}>
                            <span class="legend-swatch" style={format!("background: {};", palette_color(i))}></span>
                            <ProgressBar
                                percent={share.percentage_of_total}
                                label={AttrValue::from(format!("{} · {}", share.category, tonnes(share.value)))}
                            />
                        </div>
                    }) }
                    <p class="form-hint">
                        {format!("Shares of {} total: {}", tonnes(total), shares.iter().map(|s| percent(s.percentage_of_total)).collect::<Vec<_>>().join(" / "))}
                    </p>
                </div>
            </div>

            <EmissionsManager
                title="Purchased Energy"
                scope={Scope::Scope2}
                entries={mock_data::scope2_entries()}
            />
            {card_modal}
        </div>
    }
}
