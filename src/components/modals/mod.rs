pub mod entry_modal;
pub mod metrics_modal;
pub mod review_modal;
pub mod view_modal;

pub use entry_modal::EntryModal;
pub use metrics_modal::MetricsModal;
pub use review_modal::ReviewModal;
pub use view_modal::ViewModal;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay dialog shared by every modal; clicking the backdrop closes it.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the box must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-box" role="dialog" aria-modal="true" onclick={stop}>
                <div class="modal-header">
                    <h3>{&props.title}</h3>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
