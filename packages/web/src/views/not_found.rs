use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section {
            h1 { class: "large text-primary", "Page Not Found" }
            p { class: "lead", "Sorry, /{path} does not exist" }
            Link { class: "btn btn-light", to: Route::Developers {}, "Back To Developers" }
        }
    }
}
