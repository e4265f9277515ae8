//! Experience and education tables shared by the dashboard and the profile
//! page. Delete buttons appear only when an `on_delete` handler is given.

use api::{Education, Experience};
use dioxus::prelude::*;

use crate::format::date_range;
use crate::icons::FaTrashCan;
use crate::Icon;

#[component]
pub fn ExperienceTable(
    experience: Vec<Experience>,
    #[props(default)] on_delete: Option<EventHandler<String>>,
) -> Element {
    if experience.is_empty() {
        return rsx! {
            p { class: "muted", "No experience credentials" }
        };
    }
    let rows: Vec<(Experience, String)> = experience
        .into_iter()
        .map(|entry| {
            let years = period(&entry.from, entry.to.as_deref(), entry.is_current());
            (entry, years)
        })
        .collect();

    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { "Company" }
                    th { "Title" }
                    th { "Years" }
                    if on_delete.is_some() {
                        th {}
                    }
                }
            }
            tbody {
                for (entry, years) in rows {
                    tr {
                        key: "{entry.id}",
                        td { "{entry.company}" }
                        td { "{entry.title}" }
                        td { "{years}" }
                        if let Some(on_delete) = on_delete {
                            td { {delete_button(entry.id.clone(), on_delete)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EducationTable(
    education: Vec<Education>,
    #[props(default)] on_delete: Option<EventHandler<String>>,
) -> Element {
    if education.is_empty() {
        return rsx! {
            p { class: "muted", "No education credentials" }
        };
    }
    let rows: Vec<(Education, String)> = education
        .into_iter()
        .map(|entry| {
            let years = period(&entry.from, entry.to.as_deref(), entry.is_current());
            (entry, years)
        })
        .collect();

    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { "School" }
                    th { "Degree" }
                    th { "Years" }
                    if on_delete.is_some() {
                        th {}
                    }
                }
            }
            tbody {
                for (entry, years) in rows {
                    tr {
                        key: "{entry.id}",
                        td { "{entry.school}" }
                        td { "{entry.degree}" }
                        td { "{years}" }
                        if let Some(on_delete) = on_delete {
                            td { {delete_button(entry.id.clone(), on_delete)} }
                        }
                    }
                }
            }
        }
    }
}

fn period(from: &str, to: Option<&str>, current: bool) -> String {
    date_range(from, if current { None } else { to })
}

fn delete_button(id: String, on_delete: EventHandler<String>) -> Element {
    rsx! {
        button {
            class: "btn btn-danger",
            title: "Delete",
            onclick: move |_| on_delete.call(id.clone()),
            Icon { icon: FaTrashCan, width: 14, height: 14 }
        }
    }
}
