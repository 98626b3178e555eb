//! Update function for the home page, Elm style: one entry point that
//! mutates the state for a message and kicks off the follow-up network
//! work.
//!
//! Invariants enforced here
//! - One in-flight request per logical action; a second trigger while the
//!   flag is set is a no-op.
//! - Selection changes invalidate everything downstream and advance the
//!   load epoch, so stale responses are dropped in the `*Loaded` arms.
//! - A failed remote call only resets its own flag and surfaces a message;
//!   it never clears unrelated state.

use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::GenerationForm;
use common::requests::{AnalyzeRequest, ArrangeRequest, GenerateRequest, ModifyRequest};
use common::responses::{
    AnalysisResponse, ArrangeResponse, AuthUrlResponse, GenerateResponse, ModifyResponse,
    SheetListResponse, StatusResponse, TestCaseListResponse,
};

use super::helpers::{confirm, generation_summary, open_auth_popup, sheet_list_path, test_cases_path};
use super::messages::Msg;
use super::state::{HomePage, SheetPick};
use crate::api;
use crate::toast::show_toast;

pub fn update(page: &mut HomePage, ctx: &Context<HomePage>, msg: Msg) -> bool {
    let link = ctx.link();
    match msg {
        Msg::SessionChanged(session) => {
            page.session = session;
            true
        }
        Msg::SetTab(tab) => {
            page.active_tab = tab;
            true
        }

        Msg::StatusChecked(result) => {
            if let Some((connected, spreadsheets)) = result {
                page.workflow.apply_status(connected, spreadsheets);
            }
            page.connection_status.clear();
            true
        }
        Msg::SpreadsheetPicked(id) => {
            let id = (!id.is_empty()).then_some(id);
            let epoch = page.workflow.select_spreadsheet(id.as_deref());
            page.clear_operation_results();
            page.errors.remove("spreadsheet");
            if let (Some(epoch), Some(spreadsheet_id)) =
                (epoch, page.workflow.selected_spreadsheet_id())
            {
                if page.workflow.connected {
                    load_sheets(link, spreadsheet_id.to_string(), epoch);
                }
            }
            true
        }
        Msg::SheetPicked(name) => {
            let name = (!name.is_empty()).then_some(name);
            match page.workflow.select_sheet(name) {
                SheetPick::Rejected => false,
                SheetPick::Cleared => {
                    page.clear_operation_results();
                    true
                }
                SheetPick::Selected(epoch) => {
                    page.clear_operation_results();
                    if let Some((spreadsheet_id, sheet_name)) = page.workflow.current_target() {
                        load_test_cases(
                            link,
                            spreadsheet_id.to_string(),
                            sheet_name.to_string(),
                            epoch,
                        );
                    }
                    true
                }
            }
        }
        Msg::SheetsLoaded { epoch, sheets } => page.workflow.commit_sheets(epoch, sheets),
        Msg::TestCasesLoaded { epoch, test_cases } => {
            page.workflow.commit_test_cases(epoch, test_cases)
        }

        Msg::Connect => {
            if page.connecting {
                return false;
            }
            page.connecting = true;
            page.connection_status = "Connecting your spreadsheet account...".to_string();
            let link = link.clone();
            spawn_local(async move {
                match api::get_json::<AuthUrlResponse>("/api/sheets/auth-url").await {
                    Ok(response) => {
                        if !open_auth_popup(&response.auth_url, link.clone()) {
                            link.send_message(Msg::ConnectFailed(
                                "authorization window was blocked".to_string(),
                            ));
                        }
                    }
                    Err(err) => link.send_message(Msg::ConnectFailed(err.to_string())),
                }
            });
            true
        }
        Msg::AuthPopupClosed => {
            // The popup closing proves nothing by itself; the status check
            // is the authoritative answer.
            page.connecting = false;
            page.connection_status.clear();
            check_connection(link);
            true
        }
        Msg::ConnectFailed(message) => {
            error!(format!("spreadsheet connect failed: {message}"));
            page.connecting = false;
            page.connection_status = "Failed to connect your spreadsheet account".to_string();
            true
        }

        Msg::Disconnect => {
            if page.disconnecting {
                return false;
            }
            if !confirm("Disconnect your spreadsheet account? Loaded spreadsheets, sheets, and results will be cleared.") {
                return false;
            }
            page.disconnecting = true;
            let link = link.clone();
            spawn_local(async move {
                let result = api::delete_json::<serde_json::Value>("/api/sheets/disconnect")
                    .await
                    .map(|_| ())
                    .map_err(|err| err.to_string());
                link.send_message(Msg::DisconnectSettled(result));
            });
            true
        }
        Msg::DisconnectSettled(Ok(())) => {
            page.disconnecting = false;
            page.workflow.clear_connection();
            page.clear_operation_results();
            page.generated = None;
            show_toast("Spreadsheet account disconnected.");
            true
        }
        Msg::DisconnectSettled(Err(message)) => {
            page.disconnecting = false;
            show_toast(&format!("Failed to disconnect: {message}"));
            true
        }

        Msg::UpdateModule(value) => {
            page.form.module = value;
            page.errors.remove("module");
            true
        }
        Msg::UpdateSummary(value) => {
            page.form.summary = value;
            page.errors.remove("summary");
            true
        }
        Msg::UpdateCriteria(value) => {
            page.form.acceptance_criteria = value;
            page.errors.remove("acceptanceCriteria");
            true
        }
        Msg::ToggleCases(on) => {
            page.form.generate_test_cases = on;
            page.errors.remove("generation");
            true
        }
        Msg::ToggleScenarios(on) => {
            page.form.generate_test_scenarios = on;
            page.errors.remove("generation");
            true
        }
        Msg::SetCaseCount(count) => {
            // 0 is the unparsable-select sentinel; keep the current count.
            if count > 0 {
                page.form.test_cases_count = count;
            }
            true
        }
        Msg::SetScenarioCount(count) => {
            if count > 0 {
                page.form.test_scenarios_count = count;
            }
            true
        }

        Msg::Generate => {
            let errors = page
                .form
                .validate(page.workflow.selected_spreadsheet.is_some());
            if !errors.is_empty() {
                page.errors = errors;
                return true;
            }
            if page.generating {
                return false;
            }
            page.generating = true;
            page.errors.clear();

            // Validation guarantees a spreadsheet is selected here.
            let Some(spreadsheet_id) = page.workflow.selected_spreadsheet_id() else {
                page.generating = false;
                return true;
            };
            let request = GenerateRequest {
                module: page.form.module.clone(),
                summary: page.form.summary.clone(),
                acceptance_criteria: page.form.acceptance_criteria.clone(),
                spreadsheet_id: spreadsheet_id.to_string(),
                generate_test_cases: page.form.generate_test_cases,
                generate_test_scenarios: page.form.generate_test_scenarios,
                test_cases_count: page.form.test_cases_count,
                test_scenarios_count: page.form.test_scenarios_count,
            };
            let link = link.clone();
            spawn_local(async move {
                let result = api::post_json::<_, GenerateResponse>("/api/sheets/generate", &request)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::GenerateSettled(result));
            });
            true
        }
        Msg::GenerateSettled(Ok(response)) => {
            page.generating = false;
            show_toast(&generation_summary(&response));
            page.generated = Some(response);
            page.form = GenerationForm::default();
            // Created sheets change the sheet list; reflect them.
            if let Some(spreadsheet_id) = page.workflow.selected_spreadsheet_id() {
                load_sheets(link, spreadsheet_id.to_string(), page.workflow.epoch());
            }
            true
        }
        Msg::GenerateSettled(Err(message)) => {
            page.generating = false;
            show_toast(&format!("Failed to generate content: {message}"));
            true
        }

        Msg::SetAnalysisType(analysis_type) => {
            page.analysis_type = analysis_type;
            true
        }
        Msg::Analyze => {
            let Some((spreadsheet_id, sheet_name)) = page.workflow.current_target() else {
                show_toast("Please select a sheet first");
                return false;
            };
            if page.analyzing {
                return false;
            }
            page.analyzing = true;
            let request = AnalyzeRequest {
                spreadsheet_id: spreadsheet_id.to_string(),
                sheet_name: sheet_name.to_string(),
                analysis_type: page.analysis_type,
            };
            let link = link.clone();
            spawn_local(async move {
                let result = api::post_json::<_, AnalysisResponse>("/api/sheets/analyze", &request)
                    .await
                    .map(|response| response.analysis)
                    .map_err(|err| err.to_string());
                link.send_message(Msg::AnalyzeSettled(result));
            });
            true
        }
        Msg::AnalyzeSettled(Ok(analysis)) => {
            page.analyzing = false;
            page.analysis_result = Some(analysis);
            true
        }
        Msg::AnalyzeSettled(Err(message)) => {
            // Prior analysis stays on screen.
            page.analyzing = false;
            show_toast(&format!("Failed to analyze test cases: {message}"));
            true
        }

        Msg::UpdateModificationPrompt(value) => {
            page.modification_prompt = value;
            true
        }
        Msg::Modify => {
            let Some((spreadsheet_id, sheet_name)) = page.workflow.current_target() else {
                show_toast("Please select a sheet first");
                return false;
            };
            if page.modification_prompt.trim().is_empty() {
                show_toast("Please enter a modification prompt");
                return false;
            }
            if page.modifying {
                return false;
            }
            page.modifying = true;
            let request = ModifyRequest {
                spreadsheet_id: spreadsheet_id.to_string(),
                sheet_name: sheet_name.to_string(),
                modification_prompt: page.modification_prompt.clone(),
            };
            let link = link.clone();
            spawn_local(async move {
                let result = api::post_json::<_, ModifyResponse>("/api/sheets/modify", &request)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::ModifySettled(result));
            });
            true
        }
        Msg::ModifySettled(Ok(response)) => {
            page.modifying = false;
            show_toast(&format!(
                "Successfully modified test cases: {}",
                response.summary
            ));
            page.modification_result = Some(response);
            page.modification_prompt.clear();
            reload_test_cases(page, link);
            true
        }
        Msg::ModifySettled(Err(message)) => {
            // Prompt stays put for correction.
            page.modifying = false;
            show_toast(&format!("Failed to modify test cases: {message}"));
            true
        }

        Msg::UpdateArrangementPrompt(value) => {
            page.arrangement_prompt = value;
            true
        }
        Msg::Arrange => {
            let Some((spreadsheet_id, sheet_name)) = page.workflow.current_target() else {
                show_toast("Please select a sheet first");
                return false;
            };
            if page.arrangement_prompt.trim().is_empty() {
                show_toast("Please enter arrangement instructions");
                return false;
            }
            if page.arranging {
                return false;
            }
            page.arranging = true;
            let request = ArrangeRequest {
                spreadsheet_id: spreadsheet_id.to_string(),
                sheet_name: sheet_name.to_string(),
                custom_prompt: page.arrangement_prompt.clone(),
            };
            let link = link.clone();
            spawn_local(async move {
                let result =
                    api::post_json::<_, ArrangeResponse>("/api/sheets/custom-prompt", &request)
                        .await
                        .map_err(|err| err.to_string());
                link.send_message(Msg::ArrangeSettled(result));
            });
            true
        }
        Msg::ArrangeSettled(Ok(response)) => {
            page.arranging = false;
            show_toast(&format!(
                "Successfully arranged test cases: {}",
                response.summary
            ));
            page.arrangement_result = Some(response);
            page.arrangement_prompt.clear();
            reload_test_cases(page, link);
            true
        }
        Msg::ArrangeSettled(Err(message)) => {
            page.arranging = false;
            show_toast(&format!("Failed to arrange test cases: {message}"));
            true
        }
    }
}

/// Background connection check. Failures are logged and reported as `None`;
/// nothing user-blocking.
pub fn check_connection(link: &Scope<HomePage>) {
    let link = link.clone();
    spawn_local(async move {
        match api::get_json::<StatusResponse>("/api/sheets/status").await {
            Ok(status) => link.send_message(Msg::StatusChecked(Some((
                status.connected,
                status.spreadsheets,
            )))),
            Err(err) => {
                error!(format!("connection status check failed: {err}"));
                link.send_message(Msg::StatusChecked(None));
            }
        }
    });
}

fn load_sheets(link: &Scope<HomePage>, spreadsheet_id: String, epoch: u32) {
    let link = link.clone();
    spawn_local(async move {
        match api::get_json::<SheetListResponse>(&sheet_list_path(&spreadsheet_id)).await {
            Ok(response) => link.send_message(Msg::SheetsLoaded {
                epoch,
                sheets: response.sheets,
            }),
            Err(err) => error!(format!("loading sheets failed: {err}")),
        }
    });
}

fn load_test_cases(link: &Scope<HomePage>, spreadsheet_id: String, sheet_name: String, epoch: u32) {
    let link = link.clone();
    spawn_local(async move {
        match api::get_json::<TestCaseListResponse>(&test_cases_path(&spreadsheet_id, &sheet_name))
            .await
        {
            Ok(response) => link.send_message(Msg::TestCasesLoaded {
                epoch,
                test_cases: response.test_cases,
            }),
            Err(err) => error!(format!("loading test cases failed: {err}")),
        }
    });
}

/// Re-fetch the rows for the current selection after a mutating action.
fn reload_test_cases(page: &HomePage, link: &Scope<HomePage>) {
    if let Some((spreadsheet_id, sheet_name)) = page.workflow.current_target() {
        load_test_cases(
            link,
            spreadsheet_id.to_string(),
            sheet_name.to_string(),
            page.workflow.epoch(),
        );
    }
}
