use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

/// Inline error box. Renders nothing for an empty message.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "alert alert-danger",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            " {message}"
        }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            "{label}"
        }
    }
}
