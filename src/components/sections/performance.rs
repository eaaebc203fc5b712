use yew::prelude::*;

use crate::components::charts::bar_chart::BarChart;
use crate::mock_data;
use crate::models::metrics::ChangeType;
use crate::utils::format::{percent, tonnes};

#[function_component(PerformanceSection)]
pub fn performance_section() -> Html {
    let years = mock_data::yearly_performance();
    let highlight = years.len().checked_sub(1);

    let changes: Vec<(String, f64, f64)> = years
        .windows(2)
        .filter_map(|pair| {
            let [(_, before), (year, after)] = pair else {
                return None;
            };
            (*before > 0.0).then(|| (year.clone(), *after, (after - before) / before * 100.0))
        })
        .collect();

    let overall = match (years.first(), years.last()) {
        (Some((first_year, first)), Some((_, last))) if *first > 0.0 && years.len() > 1 => {
            Some((first_year.clone(), (last - first) / first * 100.0))
        }
        _ => None,
    };

    html! {
        <div class="section performance">
            <div class="card">
                <div class="card-header">
                    <h3>{"Year-over-Year Emissions"}</h3>
                    if let Some((since, change)) = overall {
                        <span class={ChangeType::from_delta(change).css_class()}>
                            {format!("{} since {since}", percent(change))}
                        </span>
                    }
                </div>
                <BarChart bars={years} unit="t" {highlight} />
            </div>

            <div class="card">
                <h3>{"Annual Change"}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Year"}</th>
                            <th class="numeric">{"Emissions"}</th>
                            <th class="numeric">{"Change"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for changes.iter().rev().map(|(year, value, change)| {
                            let change_type = ChangeType::from_delta(*change);
                            html! {
                                <tr key={year.clone()}>
                                    <td>{year}</td>
                                    <td class="numeric">{tonnes(*value)}</td>
                                    <td class={classes!("numeric", change_type.css_class())}>
                                        {format!("{} {}", change_type.arrow(), percent(change.abs()))}
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
