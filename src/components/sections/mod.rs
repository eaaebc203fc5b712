pub mod analytics;
pub mod chatbot;
pub mod data_collection;
pub mod esg_kpis;
pub mod overview;
pub mod performance;
pub mod reporting;
pub mod scope1;
pub mod scope2;
pub mod scope3;
pub mod targets;

use yew::prelude::*;

use crate::components::metric_card::MetricCardView;
use crate::components::modals::MetricsModal;
use crate::models::metrics::MetricCard;
use crate::models::section::Section;

/// The component for the active section.
pub fn render(section: Section) -> Html {
    match section {
        Section::Overview => html! { <overview::Overview /> },
        Section::Scope1 => html! { <scope1::Scope1Section /> },
        Section::Scope2 => html! { <scope2::Scope2Section /> },
        Section::Scope3 => html! { <scope3::Scope3Section /> },
        Section::Targets => html! { <targets::TargetsSection /> },
        Section::Performance => html! { <performance::PerformanceSection /> },
        Section::EsgKpis => html! { <esg_kpis::EsgKpisSection /> },
        Section::Analytics => html! { <analytics::AnalyticsSection /> },
        Section::DataCollection => html! { <data_collection::DataCollectionSection /> },
        Section::Reporting => html! { <reporting::ReportingSection /> },
        Section::Chatbot => html! { <chatbot::ChatbotSection /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: Vec<MetricCard>,
    #[prop_or_default]
    pub on_select: Option<Callback<MetricCard>>,
}

/// Row of metric cards.
#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class="metric-grid">
            { for props.cards.iter().map(|card| html! {
                <MetricCardView
                    key={card.title.clone()}
                    card={card.clone()}
                    on_select={props.on_select.clone()}
                />
            }) }
        </div>
    }
}

/// Selection state for opening a metric card in the details modal.
/// Returns the card click handler and the modal to render, if open.
#[hook]
pub fn use_card_modal() -> (Callback<MetricCard>, Html) {
    let selected = use_state(|| None::<MetricCard>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |card| selected.set(Some(card)))
    };

    let modal = match (*selected).clone() {
        Some(card) => {
            let on_close = Callback::from(move |()| selected.set(None));
            html! { <MetricsModal {card} {on_close} /> }
        }
        None => html! {},
    };

    (on_select, modal)
}
