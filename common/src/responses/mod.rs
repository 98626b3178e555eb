use serde::{Deserialize, Serialize};

use crate::model::spreadsheet::{SheetInfo, Spreadsheet};
use crate::model::test_case::{TestCase, TestScenario};

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Response of `GET /api/sheets/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub connected: bool,
    #[serde(default)]
    pub spreadsheets: Vec<Spreadsheet>,
}

/// Response of `GET /api/sheets/auth-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

/// Response of `GET /api/sheets/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetListResponse {
    pub sheets: Vec<SheetInfo>,
}

/// Response of `GET /api/sheets/test-cases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseListResponse {
    pub test_cases: Vec<TestCase>,
}

/// One sheet created or rewritten by a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSheet {
    pub name: String,
    /// Either `"testCases"` or `"testScenarios"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}

/// Response of `POST /api/sheets/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub test_scenarios: Vec<TestScenario>,
    #[serde(default)]
    pub created_sheets: Vec<CreatedSheet>,
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /api/sheets/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// One itemized change from a modification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    pub test_case_id: String,
    /// `"update"`, `"delete"`, or `"add"`.
    pub action: String,
    pub reason: String,
}

/// Response of `POST /api/sheets/modify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyResponse {
    pub summary: String,
    #[serde(default)]
    pub modifications: Vec<Modification>,
}

/// Response of `POST /api/sheets/custom-prompt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeResponse {
    pub intent: String,
    pub arrangement_strategy: String,
    pub summary: String,
    pub changes: String,
    pub arranged_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_defaults_spreadsheets_when_disconnected() {
        let status: StatusResponse = serde_json::from_str(r#"{"connected": false}"#).unwrap();
        assert!(!status.connected);
        assert!(status.spreadsheets.is_empty());
    }

    #[test]
    fn created_sheet_reads_type_field() {
        let sheet: CreatedSheet = serde_json::from_str(
            r#"{"name": "Auth - Test Cases", "type": "testCases", "count": 20}"#,
        )
        .unwrap();
        assert_eq!(sheet.kind, "testCases");
        assert_eq!(sheet.count, 20);
    }

    #[test]
    fn arrange_response_round_trip() {
        let arranged: ArrangeResponse = serde_json::from_str(
            r#"{
                "intent": "workflow",
                "arrangementStrategy": "Grouped by user journey",
                "summary": "Reordered 14 cases",
                "changes": "Moved login cases first",
                "arrangedCount": 14
            }"#,
        )
        .unwrap();
        assert_eq!(arranged.arranged_count, 14);
        assert_eq!(arranged.intent, "workflow");
    }
}
