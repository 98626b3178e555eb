//! Helpers for the home page: endpoint paths, the authorization popup
//! watcher, confirm dialog, and prompt presets.

use gloo_timers::future::TimeoutFuture;
use yew::html::Scope;
use yew::platform::spawn_local;

use common::responses::GenerateResponse;

use super::messages::Msg;
use super::state::HomePage;
use crate::api;

pub fn sheet_list_path(spreadsheet_id: &str) -> String {
    format!(
        "/api/sheets/list?spreadsheetId={}",
        api::query_escape(spreadsheet_id)
    )
}

pub fn test_cases_path(spreadsheet_id: &str, sheet_name: &str) -> String {
    format!(
        "/api/sheets/test-cases?spreadsheetId={}&sheetName={}",
        api::query_escape(spreadsheet_id),
        api::query_escape(sheet_name)
    )
}

/// Interactive confirmation; `false` when the dialog is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Opens the third-party authorization URL in a popup and polls until that
/// window closes, then reports back. The close is a heuristic (the user may
/// have closed it without finishing); the caller's follow-up status check
/// decides what actually happened.
pub fn open_auth_popup(url: &str, link: Scope<HomePage>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let popup = window
        .open_with_url_and_target_and_features(
            url,
            "sheets-auth",
            "width=500,height=600,scrollbars=yes,resizable=yes",
        )
        .ok()
        .flatten();
    let Some(popup) = popup else {
        return false;
    };

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            if popup.closed().unwrap_or(true) {
                break;
            }
        }
        // Give the backend a beat to persist the authorization result.
        TimeoutFuture::new(1_000).await;
        link.send_message(Msg::AuthPopupClosed);
    });
    true
}

fn count_phrase(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Builds the success toast for a generation run, naming what was produced.
pub fn generation_summary(response: &GenerateResponse) -> String {
    let mut parts = Vec::new();
    if !response.test_cases.is_empty() {
        parts.push(count_phrase(response.test_cases.len(), "test case"));
    }
    if !response.test_scenarios.is_empty() {
        parts.push(count_phrase(response.test_scenarios.len(), "test scenario"));
    }
    if parts.is_empty() {
        "Generation finished, but nothing was produced".to_string()
    } else {
        format!(
            "Successfully generated {} and added to your spreadsheet!",
            parts.join(" and ")
        )
    }
}

pub const QUICK_MODIFICATION_PROMPTS: [&str; 5] = [
    "Change PC_1, PC_2, PC_3 test case type to Negative",
    "Update all test cases with status 'Not Tested' to 'In Progress'",
    "Add validation steps to PC_5, PC_6, PC_7",
    "Change environment of PC_10-PC_15 from 'Test' to 'Production'",
    "Delete PC_20 as it is duplicate",
];

pub const ARRANGEMENT_PROMPT_GROUPS: [(&str, [&str; 4]); 4] = [
    (
        "Workflow Arrangement",
        [
            "Arrange this into proper workflow",
            "Organize these tests by user journey flow",
            "Create a logical testing sequence for this module",
            "Arrange by business process workflow",
        ],
    ),
    (
        "Priority & Risk",
        [
            "Sort by execution priority for regression testing",
            "Arrange by risk level and business impact",
            "Prioritize for smoke testing",
            "Order by critical path dependencies",
        ],
    ),
    (
        "Technical Organization",
        [
            "Group by module and arrange by complexity",
            "Organize for parallel execution",
            "Arrange by technical dependencies",
            "Sort by automation potential",
        ],
    ),
    (
        "Team & Execution",
        [
            "Organize these tests for a new QA engineer",
            "Arrange for efficient manual testing",
            "Create dependency-based test execution order",
            "Group for different team members",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::test_case::{TestCase, TestScenario};

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.into(),
            summary: String::new(),
            module: String::new(),
            submodule: String::new(),
            test_case_type: String::new(),
            status: String::new(),
            environment: String::new(),
            test_steps: String::new(),
            expected_results: String::new(),
        }
    }

    #[test]
    fn sheet_names_are_escaped_in_query() {
        let path = test_cases_path("ss-1", "Auth - Test Cases");
        assert_eq!(
            path,
            "/api/sheets/test-cases?spreadsheetId=ss-1&sheetName=Auth%20-%20Test%20Cases"
        );
    }

    #[test]
    fn generation_summary_names_both_kinds() {
        let response = GenerateResponse {
            test_cases: vec![case("PC_1"), case("PC_2")],
            test_scenarios: vec![TestScenario {
                id: "TS_1".into(),
                title: String::new(),
                description: String::new(),
            }],
            created_sheets: Vec::new(),
            message: String::new(),
        };
        assert_eq!(
            generation_summary(&response),
            "Successfully generated 2 test cases and 1 test scenario and added to your spreadsheet!"
        );
    }

    #[test]
    fn generation_summary_uses_singular_for_one() {
        let response = GenerateResponse {
            test_cases: vec![case("PC_1")],
            test_scenarios: Vec::new(),
            created_sheets: Vec::new(),
            message: String::new(),
        };
        assert_eq!(
            generation_summary(&response),
            "Successfully generated 1 test case and added to your spreadsheet!"
        );
    }
}
