use serde::{Deserialize, Serialize};

/// Request payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Request payload for `POST /api/sheets/generate`.
///
/// Carries the form fields together with the target spreadsheet and the two
/// generation knobs. At least one of the flags must be set; the frontend
/// validates that before a request is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub module: String,
    pub summary: String,
    pub acceptance_criteria: String,
    pub spreadsheet_id: String,
    pub generate_test_cases: bool,
    pub generate_test_scenarios: bool,
    pub test_cases_count: u32,
    pub test_scenarios_count: u32,
}

/// Request payload for `POST /api/sheets/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub analysis_type: crate::form::AnalysisType,
}

/// Request payload for `POST /api/sheets/modify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRequest {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub modification_prompt: String,
}

/// Request payload for `POST /api/sheets/custom-prompt` (free-text
/// arrangement).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeRequest {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub custom_prompt: String,
}
