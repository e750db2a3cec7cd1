use std::rc::Rc;

use dioxus::prelude::*;

use crate::app_config;
use crate::domain::entities::project::Project;
use crate::domain::entities::query::{FilterField, SortIndicator, SortKey, SortSpec};
use crate::infra::seed::repo::EmbeddedRepo;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::query_service::QueryService;

/// Sort options offered in the toolbar, in menu order.
const SORT_MENU: [(SortKey, &str); 4] = [
    (SortKey::Client, "Name"),
    (SortKey::Country, "Country"),
    (SortKey::Date, "Date"),
    (SortKey::Progress, "Progress"),
];

const TEXT_COLOR: &str = "#cccccc";
const BORDER_COLOR: &str = "#818181";

fn toolbar_button_style() -> String {
    format!(
        "display: flex; align-items: center; gap: 2px; justify-content: center; width: 88px; padding: 8px 0; \
         color: {TEXT_COLOR}; background: transparent; border: 1px solid #afafaf; border-radius: 2px; cursor: pointer;"
    )
}

fn dropdown_panel_style(open: bool) -> String {
    format!(
        "position: absolute; top: 48px; z-index: 10; display: {}; flex-direction: column; \
         background: #111827; border: 1px solid #afafaf; border-radius: 2px;",
        if open { "flex" } else { "none" }
    )
}

fn input_style() -> String {
    format!(
        "background: #030712; color: {TEXT_COLOR}; border: 1px solid #444; border-radius: 2px; padding: 4px 8px;"
    )
}

fn pager_button_style() -> &'static str {
    "display: flex; align-items: center; justify-content: center; min-width: 100px; padding: 8px; \
     background: #cccccc; border: none; border-radius: 2px; cursor: pointer;"
}

#[component]
fn SideBar() -> Element {
    let icon_style = format!("color: {TEXT_COLOR}; font-size: 22px; cursor: pointer;");
    rsx! {
        nav {
            style: "width: 6%; min-width: 56px; position: fixed; left: 0; top: 0; bottom: 0; display: flex; flex-direction: column; align-items: center; gap: 24px; padding: 16px; border-right: 1px solid {BORDER_COLOR};",
            div { style: "color: {TEXT_COLOR}; font-size: 20px; padding-top: 4px; margin-bottom: 12px;", "Logo" }
            div { style: "{icon_style}", title: "Projects", "🗀" }
            div { style: "{icon_style}", title: "Clients", "👤" }
            div { style: "{icon_style}", title: "Settings", "⚙" }
        }
    }
}

#[component]
fn ProgressBar(progress: u8) -> Element {
    rsx! {
        div {
            style: "min-width: 100%; height: 8px; border-radius: 9999px; background: #cacaca;",
            div { style: "height: 8px; width: {progress}%; border-radius: 9999px; background: #22c55e;" }
        }
    }
}

#[component]
fn ProjectRow(project: Project) -> Element {
    let Project {
        client,
        country,
        email,
        project: project_name,
        status,
        progress,
        date,
        image,
    } = project;
    let cell = "padding: 8px;";
    rsx! {
        tr {
            td { style: "{cell}",
                img {
                    style: "object-fit: cover; width: 60px; height: 60px; border-radius: 9999px;",
                    src: "{image}",
                    alt: "{client}",
                }
            }
            td { style: "{cell}", "{client}" }
            td { style: "{cell}", "{country}" }
            td { style: "{cell}", "{email}" }
            td { style: "{cell}", "{project_name}" }
            td { style: "{cell}", ProgressBar { progress } }
            td { style: "{cell}", "{status}" }
            td { style: "{cell}", "{date}" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let service = use_hook(|| {
        QueryService::from_repository(&EmbeddedRepo::default(), &app_config())
            .map(Rc::new)
            .map_err(|err| format!("{err:#}"))
    });

    // The hook result never changes after the first render, so the early
    // return keeps hook order stable.
    let service = match service {
        Ok(service) => service,
        Err(err) => {
            return rsx! {
                div {
                    p { "Failed to load projects: {err}" }
                }
            };
        }
    };
    use_context_provider(|| service);

    rsx! {
        div {
            style: "display: flex; height: 100vh; margin-left: 7%; background: #0b0f19; font-family: sans-serif;",
            SideBar {}
            div { style: "width: 100%;", ProjectTable {} }
        }
    }
}

#[component]
fn ProjectTable() -> Element {
    let service = use_context::<Rc<QueryService>>();
    let state = AppState::new();
    let AppState {
        mut sort,
        mut search,
        mut filters,
        mut page,
        mut sort_menu_open,
        mut filter_panel_open,
    } = state;

    // One query per state change; the effect only writes back the clamped page.
    let result = use_memo(move || service.query_page(&state.query_state()));
    use_effect(move || {
        let clamped = result.read().page;
        if clamped != *page.peek() {
            page.set(clamped);
        }
    });

    let result = result();
    let indicator = SortIndicator::from_sort(sort()).glyph();
    let filters_snapshot = filters();
    let filter_label = if filters_snapshot.is_empty() {
        "Filter ▾"
    } else {
        "Filter • ▾"
    };
    let search_text = search();
    let has_previous = result.has_previous();
    let has_next = result.has_next();
    let current_page = result.page;
    let total_pages = result.total_pages;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: space-between; height: 100%; padding: 16px; color: {TEXT_COLOR};",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    style: "display: flex; gap: 8px; align-items: center;",

                    div {
                        style: "position: relative; display: flex;",
                        button {
                            style: toolbar_button_style(),
                            onclick: move |_| sort_menu_open.set(!sort_menu_open()),
                            "{indicator} Sort ▾"
                        }
                        div {
                            style: format!("{} width: 88px;", dropdown_panel_style(sort_menu_open())),
                            for (sort_key, label) in SORT_MENU {
                                button {
                                    key: "{label}",
                                    style: "padding: 8px 0; background: #111827; color: {TEXT_COLOR}; border: none; cursor: pointer;",
                                    onclick: move |_| {
                                        sort.set(Some(SortSpec::toggle(sort(), sort_key)));
                                        sort_menu_open.set(false);
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }

                    div {
                        style: "position: relative;",
                        button {
                            style: toolbar_button_style(),
                            onclick: move |_| filter_panel_open.set(!filter_panel_open()),
                            "{filter_label}"
                        }
                        div {
                            style: format!(
                                "{} gap: 8px; padding: 8px 16px 16px;",
                                dropdown_panel_style(filter_panel_open())
                            ),
                            for field in FilterField::ALL {
                                div {
                                    key: "{field:?}",
                                    label { style: "display: block;", {format!("Filter by {}:", field.label())} }
                                    input {
                                        style: format!("{} margin-top: 4px;", input_style()),
                                        r#type: "text",
                                        value: filters_snapshot.get(field).to_string(),
                                        oninput: move |event| filters.write().set(field, event.value()),
                                    }
                                }
                            }
                        }
                    }
                }

                input {
                    style: input_style(),
                    r#type: "text",
                    placeholder: "Search",
                    value: search_text,
                    oninput: move |event| search.set(event.value()),
                }
            }

            div {
                style: "height: 100%; margin: 40px 0;",
                if result.is_empty() {
                    p { style: "font-size: 20px; display: flex; justify-content: center;", "No results" }
                } else {
                    div {
                        style: "border: 1px solid {BORDER_COLOR}; border-radius: 2px;",
                        table {
                            style: "min-width: 100%; font-size: 14px; border-collapse: collapse;",
                            thead {
                                tr {
                                    style: "border-bottom: 1px solid {BORDER_COLOR}; text-align: left;",
                                    th { style: "padding: 8px;", "Image" }
                                    th { style: "padding: 8px;", "Name" }
                                    th { style: "padding: 8px;", "Country" }
                                    th { style: "padding: 8px;", "Email" }
                                    th { style: "padding: 8px;", "Project Name" }
                                    th { style: "padding: 8px;", "Task Progress" }
                                    th { style: "padding: 8px;", "Status" }
                                    th { style: "padding: 8px;", "Date" }
                                }
                            }
                            tbody {
                                for (idx, project) in result.visible.iter().enumerate() {
                                    ProjectRow { key: "{idx}", project: project.clone() }
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                button {
                    style: pager_button_style(),
                    disabled: !has_previous,
                    onclick: move |_| page.set(current_page.saturating_sub(1).max(1)),
                    "‹ Previous"
                }
                span { "Page {current_page} of {total_pages}" }
                button {
                    style: pager_button_style(),
                    disabled: !has_next,
                    onclick: move |_| page.set(current_page + 1),
                    "Next ›"
                }
            }
        }
    }
}

