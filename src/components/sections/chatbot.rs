use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::chat::{ChatMessage, GREETING, Role, reply_to};

const SUGGESTIONS: [&str; 4] = [
    "What is Scope 3?",
    "How are targets tracked?",
    "What does tCO2e mean?",
    "Which reports are supported?",
];

/// Canned-response assistant; nothing leaves the browser.
#[function_component(ChatbotSection)]
pub fn chatbot_section() -> Html {
    let messages = use_state(|| vec![ChatMessage::assistant(GREETING)]);
    let input = use_state(String::new);

    let send = {
        let messages = messages.clone();
        let input = input.clone();
        Callback::from(move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }
            let mut next = (*messages).clone();
            let reply = reply_to(&text);
            next.push(ChatMessage::user(text));
            next.push(ChatMessage::assistant(reply));
            messages.set(next);
            input.set(String::new());
        })
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onsubmit = {
        let send = send.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit((*input).clone());
        })
    };

    html! {
        <div class="section chatbot card">
            <div class="chat-log" aria-live="polite">
                { for messages.iter().enumerate().map(|(i, message)| {
                    let class = match message.role {
                        Role::User => "chat-bubble user",
                        Role::Assistant => "chat-bubble assistant",
                    };
                    html! {
                        <div {class} key={i}>
                            <p>{&message.text}</p>
                            <time>{message.sent_at.format("%H:%M").to_string()}</time>
                        </div>
                    }
                }) }
            </div>
            <div class="chat-suggestions">
                { for SUGGESTIONS.iter().map(|suggestion| {
                    let send = send.clone();
                    let onclick = Callback::from(move |_: MouseEvent| send.emit((*suggestion).to_string()));
                    html! { <button class="btn btn-small" key={*suggestion} {onclick}>{*suggestion}</button> }
                }) }
            </div>
            <form class="chat-input" {onsubmit}>
                <input
                    type="text"
                    placeholder="Ask about emissions, targets or reporting..."
                    value={(*input).clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary">{"Send"}</button>
            </form>
        </div>
    }
}
