use common::form::AnalysisType;
use common::model::spreadsheet::{SheetInfo, Spreadsheet};
use common::model::test_case::TestCase;
use common::responses::{ArrangeResponse, GenerateResponse, ModifyResponse};

use super::state::Tab;
use crate::session::SessionHandle;

pub enum Msg {
    SessionChanged(SessionHandle),
    SetTab(Tab),

    /// Background connection check settled; `None` means it failed
    /// (non-blocking, already logged).
    StatusChecked(Option<(bool, Vec<Spreadsheet>)>),
    /// Spreadsheet dropdown changed; empty string clears the selection.
    SpreadsheetPicked(String),
    /// Sheet dropdown changed; empty string clears the selection.
    SheetPicked(String),
    SheetsLoaded {
        epoch: u32,
        sheets: Vec<SheetInfo>,
    },
    TestCasesLoaded {
        epoch: u32,
        test_cases: Vec<TestCase>,
    },

    Connect,
    /// The authorization popup closed. Completion is inferred, not
    /// guaranteed; the follow-up status check is authoritative.
    AuthPopupClosed,
    ConnectFailed(String),
    Disconnect,
    DisconnectSettled(Result<(), String>),

    UpdateModule(String),
    UpdateSummary(String),
    UpdateCriteria(String),
    ToggleCases(bool),
    ToggleScenarios(bool),
    SetCaseCount(u32),
    SetScenarioCount(u32),
    Generate,
    GenerateSettled(Result<GenerateResponse, String>),

    SetAnalysisType(AnalysisType),
    Analyze,
    AnalyzeSettled(Result<String, String>),

    UpdateModificationPrompt(String),
    Modify,
    ModifySettled(Result<ModifyResponse, String>),

    UpdateArrangementPrompt(String),
    Arrange,
    ArrangeSettled(Result<ArrangeResponse, String>),
}
