//! Add experience and add education pages.

use dioxus::prelude::*;
use ui::icons::{FaBriefcase, FaGraduationCap};
use ui::{
    use_client, use_session_guard, EducationFormState, ErrorAlert, ExperienceFormState, Icon,
};

use crate::Route;

#[component]
pub fn AddExperience() -> Element {
    use_session_guard();
    let client = use_client();
    let nav = use_navigator();
    let mut form = use_signal(ExperienceFormState::default);
    let mut error = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(String::new());
            let state = form();
            if let Err(message) = state.validate() {
                error.set(message);
                return;
            }

            saving.set(true);
            match client.add_experience(&state.to_request()).await {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(e.user_message("Error adding experience"));
                }
            }
        });
    };

    let state = form();

    rsx! {
        section {
            h1 { class: "large text-primary", "Add An Experience" }
            p {
                class: "lead",
                Icon { icon: FaBriefcase, width: 16, height: 16 }
                " Add any developer/programming positions that you have had in the past"
            }
            small { "* = required field" }

            ErrorAlert { message: error() }

            form {
                class: "form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "* Job Title",
                    required: true,
                    value: "{state.title}",
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "* Company",
                    required: true,
                    value: "{state.company}",
                    oninput: move |evt: FormEvent| form.write().company = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Location",
                    value: "{state.location}",
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                h4 { "From Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: "{state.from}",
                    oninput: move |evt: FormEvent| form.write().from = evt.value(),
                }
                h4 { "To Date" }
                input {
                    r#type: "date",
                    disabled: state.current,
                    value: "{state.to}",
                    oninput: move |evt: FormEvent| form.write().to = evt.value(),
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: state.current,
                        onchange: move |evt: FormEvent| form.write().current = evt.checked(),
                    }
                    " Current Job"
                }
                textarea {
                    placeholder: "Job Description",
                    value: "{state.description}",
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Submit" }
                    }
                    Link { class: "btn btn-light", to: Route::Dashboard {}, "Go Back" }
                }
            }
        }
    }
}

#[component]
pub fn AddEducation() -> Element {
    use_session_guard();
    let client = use_client();
    let nav = use_navigator();
    let mut form = use_signal(EducationFormState::default);
    let mut error = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(String::new());
            let state = form();
            if let Err(message) = state.validate() {
                error.set(message);
                return;
            }

            saving.set(true);
            match client.add_education(&state.to_request()).await {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(e.user_message("Error adding education"));
                }
            }
        });
    };

    let state = form();

    rsx! {
        section {
            h1 { class: "large text-primary", "Add Your Education" }
            p {
                class: "lead",
                Icon { icon: FaGraduationCap, width: 16, height: 16 }
                " Add any school, bootcamp, etc that you have attended"
            }
            small { "* = required field" }

            ErrorAlert { message: error() }

            form {
                class: "form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "* School or Bootcamp",
                    required: true,
                    value: "{state.school}",
                    oninput: move |evt: FormEvent| form.write().school = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "* Degree or Certificate",
                    required: true,
                    value: "{state.degree}",
                    oninput: move |evt: FormEvent| form.write().degree = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "* Field Of Study",
                    required: true,
                    value: "{state.fieldofstudy}",
                    oninput: move |evt: FormEvent| form.write().fieldofstudy = evt.value(),
                }
                h4 { "From Date" }
                input {
                    r#type: "date",
                    required: true,
                    value: "{state.from}",
                    oninput: move |evt: FormEvent| form.write().from = evt.value(),
                }
                h4 { "To Date" }
                input {
                    r#type: "date",
                    disabled: state.current,
                    value: "{state.to}",
                    oninput: move |evt: FormEvent| form.write().to = evt.value(),
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: state.current,
                        onchange: move |evt: FormEvent| form.write().current = evt.checked(),
                    }
                    " Current School"
                }
                textarea {
                    placeholder: "Program Description",
                    value: "{state.description}",
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Submit" }
                    }
                    Link { class: "btn btn-light", to: Route::Dashboard {}, "Go Back" }
                }
            }
        }
    }
}
