use dioxus::prelude::*;

use crate::icons::FaCode;
use crate::Icon;

/// Top bar with the brand; `children` supplies the links for the current
/// session state.
#[component]
pub fn Navbar(#[props(default)] on_brand: EventHandler<()>, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            h1 {
                class: "navbar-brand",
                onclick: move |_| on_brand.call(()),
                Icon { icon: FaCode, width: 20, height: 20 }
                " DevConnector"
            }
            ul {
                class: "navbar-links",
                {children}
            }
        }
    }
}
