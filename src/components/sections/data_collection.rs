use yew::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::mock_data;
use crate::models::reporting::CollectionStatus;
use crate::utils::format::{percent, thousands};
use crate::utils::metrics::progress_percent;

#[function_component(DataCollectionSection)]
pub fn data_collection_section() -> Html {
    let sources = mock_data::data_sources();
    let received: u32 = sources.iter().map(|s| s.records_received).sum();
    let expected: u32 = sources.iter().map(|s| s.records_expected).sum();
    let overall = progress_percent(f64::from(received), f64::from(expected));
    let complete = sources
        .iter()
        .filter(|s| s.status() == CollectionStatus::Complete)
        .count();

    html! {
        <div class="section data-collection">
            <div class="card">
                <div class="card-header">
                    <h3>{"Collection Progress"}</h3>
                    <span>{format!("{complete} of {} sources complete", sources.len())}</span>
                </div>
                <ProgressBar percent={overall} label={AttrValue::from("Records received")} />
            </div>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Source"}</th>
                            <th>{"Owner"}</th>
                            <th class="numeric">{"Records"}</th>
                            <th class="numeric">{"Completeness"}</th>
                            <th>{"Status"}</th>
                            <th>{"Last updated"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for sources.iter().map(|source| {
                            let status = source.status();
                            html! {
                                <tr key={source.name.clone()}>
                                    <td>{&source.name}</td>
                                    <td>{&source.owner}</td>
                                    <td class="numeric">
                                        {format!(
                                            "{} / {}",
                                            thousands(f64::from(source.records_received), 0),
                                            thousands(f64::from(source.records_expected), 0),
                                        )}
                                    </td>
                                    <td class="numeric">{percent(source.completeness())}</td>
                                    <td><span class={classes!("badge", status.css_class())}>{status.label()}</span></td>
                                    <td>{source.last_updated.format("%d %b %Y").to_string()}</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
