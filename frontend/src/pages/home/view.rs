//! View rendering for the home page.
//!
//! Layout: a welcome header, the connection card (connect button or
//! spreadsheet/sheet selectors plus disconnect), a four-tab action bar, and
//! the active tab's pane. Loaded test cases render under the connection card
//! whenever a sheet is selected, capped to a preview grid.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{AnalysisType, GenerationForm};
use common::model::test_case::TestCase;
use common::responses::{ArrangeResponse, GenerateResponse, ModifyResponse};

use super::helpers::{ARRANGEMENT_PROMPT_GROUPS, QUICK_MODIFICATION_PROMPTS};
use super::messages::Msg;
use super::state::{HomePage, Tab};

/// Test cases shown in the preview grid before collapsing to a count.
const TEST_CASE_PREVIEW_LIMIT: usize = 12;

pub fn view(page: &HomePage, ctx: &Context<HomePage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="home-root">
            { build_header(page) }
            { build_connection_card(page, link) }
            {
                if page.workflow.connected {
                    html! {
                        <>
                            { build_tab_bar(page, link) }
                            { build_active_tab(page, link) }
                            { build_test_case_grid(page) }
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_header(page: &HomePage) -> Html {
    let greeting = page
        .session
        .user()
        .map(|user| format!("Welcome back, {}!", user.username))
        .unwrap_or_else(|| "Welcome!".to_string());
    html! {
        <header class="home-header">
            <h1>{ greeting }</h1>
            <p>{ "Generate, analyze, and organize test cases in your spreadsheets." }</p>
        </header>
    }
}

/// Builds the connection card: a connect button while disconnected, the
/// spreadsheet/sheet selectors and disconnect button once connected.
fn build_connection_card(page: &HomePage, link: &Scope<HomePage>) -> Html {
    if !page.workflow.connected {
        let onclick = link.callback(|_| Msg::Connect);
        return html! {
            <section class="card connection-card">
                <h2>{ "Spreadsheet Connection" }</h2>
                <p>{ "Connect your spreadsheet account to get started." }</p>
                <button class="btn btn-primary" {onclick} disabled={page.connecting}>
                    { if page.connecting { "Connecting..." } else { "Connect Spreadsheet Account" } }
                </button>
                {
                    if !page.connection_status.is_empty() {
                        html! { <p class="connection-status">{ &page.connection_status }</p> }
                    } else {
                        html! {}
                    }
                }
            </section>
        };
    }

    let on_spreadsheet = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::SpreadsheetPicked(select.value())
    });
    let on_sheet = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::SheetPicked(select.value())
    });
    let on_disconnect = link.callback(|_| Msg::Disconnect);

    html! {
        <section class="card connection-card">
            <div class="connection-head">
                <h2>{ "Spreadsheet Connection" }</h2>
                <span class="badge badge-connected">{ "Connected" }</span>
                <button class="btn btn-danger" onclick={on_disconnect} disabled={page.disconnecting}>
                    { if page.disconnecting { "Disconnecting..." } else { "Disconnect" } }
                </button>
            </div>
            <div class="selector-row">
                <label for="spreadsheet-select">{ "Spreadsheet" }</label>
                <select id="spreadsheet-select" onchange={on_spreadsheet}>
                    <option value="" selected={page.workflow.selected_spreadsheet.is_none()}>
                        { "Select a spreadsheet" }
                    </option>
                    {
                        for page.workflow.spreadsheets.iter().map(|spreadsheet| {
                            let selected = page.workflow.selected_spreadsheet_id()
                                == Some(spreadsheet.id.as_str());
                            html! {
                                <option value={spreadsheet.id.clone()} {selected}>
                                    { &spreadsheet.name }
                                </option>
                            }
                        })
                    }
                </select>
            </div>
            {
                if page.workflow.selected_spreadsheet.is_some() {
                    html! {
                        <div class="selector-row">
                            <label for="sheet-select">{ "Sheet" }</label>
                            <select id="sheet-select" onchange={on_sheet}>
                                <option value="" selected={page.workflow.selected_sheet.is_none()}>
                                    { "Select a sheet" }
                                </option>
                                {
                                    for page.workflow.sheets.iter().map(|sheet| {
                                        let selected = page.workflow.selected_sheet.as_deref()
                                            == Some(sheet.name.as_str());
                                        html! {
                                            <option value={sheet.name.clone()} {selected}>
                                                { &sheet.name }
                                            </option>
                                        }
                                    })
                                }
                            </select>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_tab_bar(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let tab_button = |tab: Tab, label: &str| {
        let active = if page.active_tab == tab { "tab active" } else { "tab" };
        let onclick = link.callback(move |_| Msg::SetTab(tab));
        html! {
            <button class={active} {onclick}>{ label }</button>
        }
    };

    html! {
        <nav class="tab-bar">
            { tab_button(Tab::Generate, "Generate") }
            { tab_button(Tab::Analyze, "Analyze") }
            { tab_button(Tab::Modify, "Modify") }
            { tab_button(Tab::Arrange, "Arrange") }
        </nav>
    }
}

fn build_active_tab(page: &HomePage, link: &Scope<HomePage>) -> Html {
    match page.active_tab {
        Tab::Generate => build_generate_tab(page, link),
        Tab::Analyze => build_analyze_tab(page, link),
        Tab::Modify => build_modify_tab(page, link),
        Tab::Arrange => build_arrange_tab(page, link),
    }
}

/// Builds the generation form: what-to-generate toggles with count selects,
/// the three description fields with inline errors, and the submit button.
fn build_generate_tab(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let on_module = text_input(link, Msg::UpdateModule);
    let on_summary = textarea_input(link, Msg::UpdateSummary);
    let on_criteria = textarea_input(link, Msg::UpdateCriteria);
    let on_toggle_cases = link.callback(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::ToggleCases(input.checked())
    });
    let on_toggle_scenarios = link.callback(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::ToggleScenarios(input.checked())
    });
    let on_case_count = count_select(link, Msg::SetCaseCount);
    let on_scenario_count = count_select(link, Msg::SetScenarioCount);
    let on_submit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Generate
    });

    html! {
        <section class="card tab-pane">
            <h2>{ "Generate Test Cases" }</h2>
            <form onsubmit={on_submit}>
                <div class="generation-options">
                    <label class="checkbox-row">
                        <input type="checkbox"
                            checked={page.form.generate_test_cases}
                            onchange={on_toggle_cases} />
                        { "Test cases" }
                        <select onchange={on_case_count}
                            disabled={!page.form.generate_test_cases}>
                            { for GenerationForm::CASE_COUNT_CHOICES.iter().map(|&count| html! {
                                <option value={count.to_string()}
                                    selected={page.form.test_cases_count == count}>
                                    { count }
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="checkbox-row">
                        <input type="checkbox"
                            checked={page.form.generate_test_scenarios}
                            onchange={on_toggle_scenarios} />
                        { "Test scenarios" }
                        <select onchange={on_scenario_count}
                            disabled={!page.form.generate_test_scenarios}>
                            { for GenerationForm::SCENARIO_COUNT_CHOICES.iter().map(|&count| html! {
                                <option value={count.to_string()}
                                    selected={page.form.test_scenarios_count == count}>
                                    { count }
                                </option>
                            }) }
                        </select>
                    </label>
                    { field_error(page, "generation") }
                    { field_error(page, "spreadsheet") }
                </div>

                <div class="form-field">
                    <label for="module-input">{ "Module" }</label>
                    <input id="module-input" type="text"
                        value={page.form.module.clone()}
                        placeholder="e.g. Authentication"
                        oninput={on_module} />
                    { field_error(page, "module") }
                </div>
                <div class="form-field">
                    <label for="summary-input">{ "Summary" }</label>
                    <textarea id="summary-input"
                        value={page.form.summary.clone()}
                        placeholder="What does this feature do?"
                        oninput={on_summary} />
                    { field_error(page, "summary") }
                </div>
                <div class="form-field">
                    <label for="criteria-input">{ "Acceptance Criteria" }</label>
                    <textarea id="criteria-input"
                        value={page.form.acceptance_criteria.clone()}
                        placeholder="One criterion per line"
                        oninput={on_criteria} />
                    { field_error(page, "acceptanceCriteria") }
                </div>

                <button class="btn btn-primary" type="submit" disabled={page.generating}>
                    { if page.generating { "Generating..." } else { "Generate" } }
                </button>
            </form>
            { build_generated_content(page.generated.as_ref()) }
        </section>
    }
}

fn build_analyze_tab(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let on_type = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::SetAnalysisType(AnalysisType::from_str_or_default(&select.value()))
    });
    let on_analyze = link.callback(|_| Msg::Analyze);

    html! {
        <section class="card tab-pane">
            <h2>{ "Analyze Test Cases" }</h2>
            <div class="form-field">
                <label for="analysis-type">{ "Analysis type" }</label>
                <select id="analysis-type" onchange={on_type}>
                    { for AnalysisType::ALL.iter().map(|&kind| html! {
                        <option value={kind.as_str()} selected={page.analysis_type == kind}>
                            { kind.label() }
                        </option>
                    }) }
                </select>
            </div>
            <button class="btn btn-primary" onclick={on_analyze} disabled={page.analyzing}>
                { if page.analyzing { "Analyzing..." } else { "Analyze" } }
            </button>
            {
                if let Some(analysis) = &page.analysis_result {
                    html! {
                        <div class="result-panel">
                            <h3>{ "Analysis" }</h3>
                            <pre class="analysis-text">{ analysis }</pre>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_modify_tab(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let on_prompt = textarea_input(link, Msg::UpdateModificationPrompt);
    let on_modify = link.callback(|_| Msg::Modify);

    html! {
        <section class="card tab-pane">
            <h2>{ "Modify Test Cases" }</h2>
            <div class="quick-prompts">
                { for QUICK_MODIFICATION_PROMPTS.iter().map(|&prompt| {
                    let onclick = link
                        .callback(move |_| Msg::UpdateModificationPrompt(prompt.to_string()));
                    html! {
                        <button class="chip" {onclick}>{ prompt }</button>
                    }
                }) }
            </div>
            <div class="form-field">
                <label for="modification-prompt">{ "What should change?" }</label>
                <textarea id="modification-prompt"
                    value={page.modification_prompt.clone()}
                    placeholder="Describe the modification in plain language"
                    oninput={on_prompt} />
            </div>
            <button class="btn btn-primary" onclick={on_modify} disabled={page.modifying}>
                { if page.modifying { "Applying..." } else { "Apply Modification" } }
            </button>
            { build_modification_result(page.modification_result.as_ref()) }
        </section>
    }
}

fn build_modification_result(result: Option<&ModifyResponse>) -> Html {
    let Some(result) = result else {
        return html! {};
    };
    html! {
        <div class="result-panel">
            <h3>{ "Modifications" }</h3>
            <p>{ &result.summary }</p>
            <ul class="modification-list">
                { for result.modifications.iter().map(|change| html! {
                    <li>
                        <span class="mod-id">{ &change.test_case_id }</span>
                        <span class="mod-action">{ &change.action }</span>
                        <span class="mod-reason">{ &change.reason }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn build_arrange_tab(page: &HomePage, link: &Scope<HomePage>) -> Html {
    let on_prompt = textarea_input(link, Msg::UpdateArrangementPrompt);
    let on_arrange = link.callback(|_| Msg::Arrange);

    html! {
        <section class="card tab-pane">
            <h2>{ "Arrange Test Cases" }</h2>
            <div class="prompt-groups">
                { for ARRANGEMENT_PROMPT_GROUPS.iter().map(|(group, prompts)| html! {
                    <div class="prompt-group">
                        <h4>{ *group }</h4>
                        { for prompts.iter().map(|&prompt| {
                            let onclick = link
                                .callback(move |_| Msg::UpdateArrangementPrompt(prompt.to_string()));
                            html! { <button class="chip" {onclick}>{ prompt }</button> }
                        }) }
                    </div>
                }) }
            </div>
            <div class="form-field">
                <label for="arrangement-prompt">{ "How should the sheet be organized?" }</label>
                <textarea id="arrangement-prompt"
                    value={page.arrangement_prompt.clone()}
                    placeholder="Describe the ordering or grouping you want"
                    oninput={on_prompt} />
            </div>
            <button class="btn btn-primary" onclick={on_arrange} disabled={page.arranging}>
                { if page.arranging { "Arranging..." } else { "Arrange" } }
            </button>
            { build_arrangement_result(page.arrangement_result.as_ref()) }
        </section>
    }
}

fn build_arrangement_result(result: Option<&ArrangeResponse>) -> Html {
    let Some(result) = result else {
        return html! {};
    };
    html! {
        <div class="result-panel">
            <h3>{ "Arrangement" }</h3>
            <p><strong>{ "Intent: " }</strong>{ &result.intent }</p>
            <p><strong>{ "Strategy: " }</strong>{ &result.arrangement_strategy }</p>
            <p>{ &result.summary }</p>
            <p class="arranged-count">
                { format!("{} test cases arranged", result.arranged_count) }
            </p>
            <pre class="changes-text">{ &result.changes }</pre>
        </div>
    }
}

/// Cards for the sheets a generation run created, with what landed in each.
fn build_generated_content(generated: Option<&GenerateResponse>) -> Html {
    let Some(generated) = generated else {
        return html! {};
    };
    html! {
        <div class="result-panel generated-content">
            <h3>{ "Created Sheets" }</h3>
            <div class="sheet-cards">
                { for generated.created_sheets.iter().map(|sheet| html! {
                    <div class="sheet-card">
                        <h4>{ &sheet.name }</h4>
                        <p>{ format!("{}: {}", sheet.kind, sheet.count) }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

/// Preview grid of the loaded test cases, capped with an overflow note.
fn build_test_case_grid(page: &HomePage) -> Html {
    if page.workflow.selected_sheet.is_none() || page.workflow.test_cases.is_empty() {
        return html! {};
    }
    let total = page.workflow.test_cases.len();
    let shown = page.workflow.test_cases.iter().take(TEST_CASE_PREVIEW_LIMIT);

    html! {
        <section class="card test-case-grid">
            <h2>{ format!("Test Cases ({total})") }</h2>
            <div class="case-cards">
                { for shown.map(build_test_case_card) }
            </div>
            {
                if total > TEST_CASE_PREVIEW_LIMIT {
                    html! {
                        <p class="overflow-note">
                            { format!("Showing {TEST_CASE_PREVIEW_LIMIT} of {total} test cases") }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn build_test_case_card(case: &TestCase) -> Html {
    html! {
        <div class="case-card">
            <div class="case-head">
                <span class="case-id">{ &case.id }</span>
                <span class={format!("case-type {}", case.test_case_type.to_lowercase())}>
                    { &case.test_case_type }
                </span>
            </div>
            <p class="case-summary">{ &case.summary }</p>
            <div class="case-meta">
                <span>{ &case.module }</span>
                <span>{ &case.status }</span>
                <span>{ &case.environment }</span>
            </div>
        </div>
    }
}

fn field_error(page: &HomePage, field: &str) -> Html {
    match page.errors.get(field) {
        Some(message) => html! { <span class="field-error">{ *message }</span> },
        None => html! {},
    }
}

/// `oninput` handler for a text `<input>`, forwarding the value as `make`'s
/// message.
fn text_input(link: &Scope<HomePage>, make: fn(String) -> Msg) -> Callback<InputEvent> {
    link.callback(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        make(input.value())
    })
}

fn textarea_input(link: &Scope<HomePage>, make: fn(String) -> Msg) -> Callback<InputEvent> {
    link.callback(move |event: InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        make(area.value())
    })
}

/// `onchange` handler for a numeric `<select>`; unparsable values are
/// ignored via a fallback to the current default.
fn count_select(link: &Scope<HomePage>, make: fn(u32) -> Msg) -> Callback<Event> {
    link.callback(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        make(select.value().parse().unwrap_or(0))
    })
}
