use dioxus::prelude::*;

use crate::forms::{ProfileFormState, STATUS_OPTIONS};

/// Inputs shared by the create and edit profile pages, bound to `form`.
#[component]
pub fn ProfileFields(form: Signal<ProfileFormState>) -> Element {
    let mut form = form;
    let mut show_social = use_signal(|| false);
    let state = form();

    rsx! {
        select {
            name: "status",
            required: true,
            value: "{state.status}",
            onchange: move |evt: FormEvent| form.write().status = evt.value(),
            option { value: "", "* Select Professional Status" }
            for status in STATUS_OPTIONS.iter() {
                option { key: "{status}", value: "{status}", "{status}" }
            }
        }
        small { class: "form-text", "Where you are at in your career" }

        input {
            r#type: "text",
            placeholder: "Company",
            value: "{state.company}",
            oninput: move |evt: FormEvent| form.write().company = evt.value(),
        }
        input {
            r#type: "text",
            placeholder: "Website",
            value: "{state.website}",
            oninput: move |evt: FormEvent| form.write().website = evt.value(),
        }
        input {
            r#type: "text",
            placeholder: "Location",
            value: "{state.location}",
            oninput: move |evt: FormEvent| form.write().location = evt.value(),
        }
        input {
            r#type: "text",
            placeholder: "* Skills",
            required: true,
            value: "{state.skills}",
            oninput: move |evt: FormEvent| form.write().skills = evt.value(),
        }
        small { class: "form-text", "Comma separated values (eg. HTML,CSS,JavaScript,PHP)" }
        input {
            r#type: "text",
            placeholder: "Github Username",
            value: "{state.githubusername}",
            oninput: move |evt: FormEvent| form.write().githubusername = evt.value(),
        }
        textarea {
            placeholder: "A short bio of yourself",
            value: "{state.bio}",
            oninput: move |evt: FormEvent| form.write().bio = evt.value(),
        }

        button {
            class: "btn btn-light",
            r#type: "button",
            onclick: move |_| show_social.toggle(),
            if show_social() { "Hide Social Network Links" } else { "Add Social Network Links" }
        }

        if show_social() {
            input {
                r#type: "text",
                placeholder: "YouTube URL",
                value: "{state.youtube}",
                oninput: move |evt: FormEvent| form.write().youtube = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Twitter URL",
                value: "{state.twitter}",
                oninput: move |evt: FormEvent| form.write().twitter = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Facebook URL",
                value: "{state.facebook}",
                oninput: move |evt: FormEvent| form.write().facebook = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "LinkedIn URL",
                value: "{state.linkedin}",
                oninput: move |evt: FormEvent| form.write().linkedin = evt.value(),
            }
            input {
                r#type: "text",
                placeholder: "Instagram URL",
                value: "{state.instagram}",
                oninput: move |evt: FormEvent| form.write().instagram = evt.value(),
            }
        }
    }
}
