use yew::prelude::*;

use super::{CardGrid, use_card_modal};
use crate::mock_data;

#[function_component(EsgKpisSection)]
pub fn esg_kpis_section() -> Html {
    let (on_select, card_modal) = use_card_modal();

    html! {
        <div class="section esg-kpis">
            { for mock_data::esg_kpis().into_iter().map(|(pillar, cards)| html! {
                <section class="kpi-pillar" key={pillar}>
                    <h2>{pillar}</h2>
                    <CardGrid {cards} on_select={Some(on_select.clone())} />
                </section>
            }) }
            {card_modal}
        </div>
    }
}
