//! Contact Form
//!
//! Name/email/message form. There is no backend: submission is
//! simulated with a short delay, then the fields clear and a transient
//! status line confirms the "transmission" before fading out.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{ButtonSize, CyberButton};
use crate::theme::colors::NeonColor;

/// How long the simulated uplink takes.
const SUBMIT_DELAY_SECS: u64 = 2;
/// How long the confirmation line stays visible.
const STATUS_LINGER_SECS: u64 = 4;

/// Simulated-submission contact form.
#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut status: Signal<Option<&'static str>> = use_signal(|| None);
    let mut status_is_error = use_signal(|| false);

    let submit = move |_| {
        if submitting() {
            return;
        }
        let filled = !name.read().trim().is_empty()
            && !email.read().trim().is_empty()
            && !message.read().trim().is_empty();
        if !filled {
            status_is_error.set(true);
            status.set(Some("all channels required"));
            return;
        }

        submitting.set(true);
        status_is_error.set(false);
        status.set(None);

        spawn(async move {
            // No server behind this form; the uplink is pretend
            tokio::time::sleep(Duration::from_secs(SUBMIT_DELAY_SECS)).await;
            tracing::info!("contact transmission simulated");

            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            submitting.set(false);
            status.set(Some("message sent - I'll get back to you soon"));

            tokio::time::sleep(Duration::from_secs(STATUS_LINGER_SECS)).await;
            status.set(None);
        });
    };

    let button_label = if submitting() {
        "TRANSMITTING..."
    } else {
        "SEND MESSAGE"
    };
    let status_class = if status_is_error() {
        "form-status error"
    } else {
        "form-status"
    };

    rsx! {
        div { class: "contact-form",
            div { class: "form-field",
                label { class: "neon-cyan", "Name" }
                input {
                    r#type: "text",
                    class: "neon-border-cyan",
                    placeholder: "Enter your name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div { class: "form-field",
                label { class: "neon-pink", "Email" }
                input {
                    r#type: "email",
                    class: "neon-border-pink",
                    placeholder: "Enter your email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            div { class: "form-field",
                label { class: "neon-green", "Message" }
                textarea {
                    class: "neon-border-green",
                    rows: 5,
                    placeholder: "Enter your message",
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }

            CyberButton {
                variant: NeonColor::Cyan,
                size: ButtonSize::Lg,
                class: "cyber-btn-full".to_string(),
                onclick: submit,
                "{button_label}"
            }

            if let Some(text) = status() {
                p { class: "{status_class}", "{text}" }
            }
        }
    }
}
