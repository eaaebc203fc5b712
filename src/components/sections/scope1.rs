use yew::prelude::*;

use super::{CardGrid, use_card_modal};
use crate::components::emissions_manager::EmissionsManager;
use crate::mock_data;
use crate::models::emissions::Scope;

#[function_component(Scope1Section)]
pub fn scope1_section() -> Html {
    let (on_select, card_modal) = use_card_modal();

    html! {
        <div class="section scope1">
            <p class="section-intro">
                {"Direct emissions from owned or controlled sources."}
            </p>
            <CardGrid cards={mock_data::scope1_cards()} on_select={Some(on_select)} />
            <EmissionsManager
                title="Stationary Combustion"
                scope={Scope::Scope1}
                entries={mock_data::stationary_entries()}
            />
            {card_modal}
        </div>
    }
}
