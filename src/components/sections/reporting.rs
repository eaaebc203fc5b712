use chrono::Utc;
use yew::prelude::*;

use crate::components::charts::donut_chart::DonutChart;
use crate::mock_data;
use crate::models::reporting::{ReportStatus, framework_counts};
use crate::utils::metrics::MetricInput;

#[function_component(ReportingSection)]
pub fn reporting_section() -> Html {
    let reports = use_state(mock_data::reports);

    let on_generate = {
        let reports = reports.clone();
        Callback::from(move |index: usize| {
            let mut next = (*reports).clone();
            if let Some(report) = next.get_mut(index) {
                report.generate(Utc::now());
                gloo::console::log!(format!("Generated report: {}", report.name));
                reports.set(next);
            }
        })
    };

    let coverage: Vec<MetricInput> = framework_counts(&reports)
        .into_iter()
        .map(|(framework, count)| MetricInput::new(framework.label(), count as f64))
        .collect();
    let generated = reports.iter().filter(|r| r.is_generated()).count();

    html! {
        <div class="section reporting">
            <div class="chart-row">
                <div class="card grow">
                    <h3>{"Framework Reports"}</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Report"}</th>
                                <th>{"Framework"}</th>
                                <th>{"Period"}</th>
                                <th>{"Status"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for reports.iter().enumerate().map(|(index, report)| {
                                let onclick = {
                                    let on_generate = on_generate.clone();
                                    Callback::from(move |_: MouseEvent| on_generate.emit(index))
                                };
                                let status = match &report.status {
                                    ReportStatus::Draft => html! { <span class="badge badge-planned">{"Draft"}</span> },
                                    ReportStatus::Generated(at) => html! {
                                        <span class="badge badge-completed">
                                            {format!("Generated {}", at.format("%d %b %Y %H:%M"))}
                                        </span>
                                    },
                                };
                                html! {
                                    <tr key={report.name.clone()}>
                                        <td>{&report.name}</td>
                                        <td>{report.framework.label()}</td>
                                        <td>{&report.period}</td>
                                        <td>{status}</td>
                                        <td>
                                            <button class="btn btn-small" {onclick}>
                                                {if report.is_generated() { "Regenerate" } else { "Generate" }}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
                <div class="card">
                    <h3>{"Framework Coverage"}</h3>
                    <DonutChart
                        items={coverage}
                        center_label="Generated"
                        center_value={format!("{generated}/{}", reports.len())}
                    />
                </div>
            </div>
        </div>
    }
}
