use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::mock_data;
use crate::utils::format::{percent, tonnes};
use crate::utils::metrics::shares_or_zero;

/// Value-chain categories, each shown as its share of Scope 3.
#[function_component(Scope3Section)]
pub fn scope3_section() -> Html {
    let categories = mock_data::scope3_categories();
    let total: f64 = categories.iter().map(|c| c.value).sum();
    let mut shares = shares_or_zero(&categories);
    shares.sort_by(|a, b| b.value.total_cmp(&a.value));

    html! {
        <div class="section scope3">
            <p class="section-intro">
                {"Other indirect emissions across the value chain."}
            </p>
            <div class="card">
                <div class="card-header">
                    <h3>{"Emissions by Category"}</h3>
                    <strong>{tonnes(total)}</strong>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Category"}</th>
                            <th class="numeric">{"Emissions"}</th>
                            <th class="numeric">{"Share"}</th>
                            <th class="bar-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for shares.iter().map(|share| html! {
                            <tr key={share.category.clone()}>
                                <td>{&share.category}</td>
                                <td class="numeric">{tonnes(share.value)}</td>
                                <td class="numeric">{percent(share.percentage_of_total)}</td>
                                <td class="bar-cell"><ProgressBar percent={share.percentage_of_total} /></td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
