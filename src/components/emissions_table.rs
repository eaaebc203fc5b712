use yew::prelude::*;

use crate::models::emissions::EmissionEntry;
use crate::utils::format::thousands;

#[derive(Properties, PartialEq)]
pub struct EmissionsTableProps {
    pub entries: Vec<EmissionEntry>,
    pub on_view: Callback<usize>,
    pub on_edit: Callback<usize>,
    pub on_delete: Callback<usize>,
}

#[function_component(EmissionsTable)]
pub fn emissions_table(props: &EmissionsTableProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <div class="table-empty">{"No entries yet. Add one to get started."}</div>
        };
    }

    let row_action = |callback: &Callback<usize>, index: usize| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(index))
    };

    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Period"}</th>
                        <th>{"Facility"}</th>
                        <th>{"Fuel / Source"}</th>
                        <th class="numeric">{"Quantity"}</th>
                        <th class="numeric">{"Factor (kg CO₂e/unit)"}</th>
                        <th class="numeric">{"Emissions (tCO₂e)"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                        <tr key={index}>
                            <td>{entry.period()}</td>
                            <td>{&entry.facility_id}</td>
                            <td>{entry.fuel_type.label()}</td>
                            <td class="numeric">
                                {format!("{} {}", thousands(entry.quantity, 0), entry.fuel_type.unit())}
                            </td>
                            <td class="numeric">
                                {format!("{:.3}", entry.effective_factor())}
                                if entry.use_custom {
                                    <span class="badge badge-custom">{"custom"}</span>
                                }
                            </td>
                            <td class="numeric">{thousands(entry.emissions_tonnes(), 2)}</td>
                            <td class="row-actions">
                                <button class="btn btn-small" onclick={row_action(&props.on_view, index)}>{"View"}</button>
                                <button class="btn btn-small" onclick={row_action(&props.on_edit, index)}>{"Edit"}</button>
                                <button class="btn btn-small btn-danger" onclick={row_action(&props.on_delete, index)}>{"Delete"}</button>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
