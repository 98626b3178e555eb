//! State for the home page workflow orchestrator.
//!
//! The selection/load machinery lives in [`Workflow`], a plain struct with no
//! framework ties: it owns the connection flag, spreadsheet/sheet selections,
//! loaded data, and the load epoch used to discard stale responses. The
//! surrounding [`HomePage`] struct adds per-action in-flight flags, form
//! input, and operation results; it is mutated exclusively by `update::update`.

use std::collections::BTreeMap;

use yew::context::ContextHandle;

use common::form::{AnalysisType, GenerationForm};
use common::model::spreadsheet::{SheetInfo, Spreadsheet};
use common::model::test_case::TestCase;
use common::responses::{ArrangeResponse, GenerateResponse, ModifyResponse};

use crate::session::SessionHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Generate,
    Analyze,
    Modify,
    Arrange,
}

/// Outcome of a sheet pick. A cleared selection still invalidates
/// downstream state, so callers must treat it as a change; only a rejected
/// pick leaves the workflow untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPick {
    /// No spreadsheet selected; nothing changed.
    Rejected,
    /// Selection cleared; loaded rows invalidated.
    Cleared,
    /// Sheet selected under the returned epoch.
    Selected(u32),
}

/// Connection, selection, and loaded-data state with stale-response
/// protection.
///
/// Every selection change bumps `epoch`; async loads capture the epoch they
/// were issued under and their results are committed only if it still
/// matches. A response for a superseded selection is silently dropped, so an
/// old sheet's rows can never overwrite a newer selection's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workflow {
    pub connected: bool,
    pub spreadsheets: Vec<Spreadsheet>,
    pub selected_spreadsheet: Option<Spreadsheet>,
    pub sheets: Vec<SheetInfo>,
    pub selected_sheet: Option<String>,
    pub test_cases: Vec<TestCase>,
    epoch: u32,
}

impl Workflow {
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn selected_spreadsheet_id(&self) -> Option<&str> {
        self.selected_spreadsheet.as_ref().map(|s| s.id.as_str())
    }

    /// Both halves of the selection, when present. Loads and mutating
    /// actions that need a sheet go through this.
    pub fn current_target(&self) -> Option<(&str, &str)> {
        match (&self.selected_spreadsheet, &self.selected_sheet) {
            (Some(spreadsheet), Some(sheet)) => Some((spreadsheet.id.as_str(), sheet.as_str())),
            _ => None,
        }
    }

    /// Applies a `/api/sheets/status` result. While connected, existing
    /// selections are kept under a refreshed spreadsheet list. A
    /// disconnected report (server-side revocation, an abandoned
    /// authorization popup) cascades like a disconnect, so a later
    /// reconnect starts from a clean slate instead of resurrecting stale
    /// selections.
    pub fn apply_status(&mut self, connected: bool, spreadsheets: Vec<Spreadsheet>) {
        if connected {
            self.connected = true;
            self.spreadsheets = spreadsheets;
        } else {
            self.clear_connection();
        }
    }

    /// Selects a spreadsheet by id (`None` clears the selection). Cascades:
    /// the sheet selection, the sheet list, and loaded test cases are always
    /// cleared, and the epoch advances so in-flight loads for the previous
    /// selection are discarded on arrival.
    ///
    /// Returns the new epoch when a spreadsheet ended up selected, so the
    /// caller can issue the sheet-list load under it.
    pub fn select_spreadsheet(&mut self, id: Option<&str>) -> Option<u32> {
        self.selected_spreadsheet = id.and_then(|id| {
            self.spreadsheets
                .iter()
                .find(|s| s.id == id)
                .cloned()
        });
        self.selected_sheet = None;
        self.sheets.clear();
        self.test_cases.clear();
        self.epoch += 1;
        self.selected_spreadsheet.as_ref().map(|_| self.epoch)
    }

    /// Selects a sheet (`None` clears it). Rejected when no spreadsheet is
    /// selected. On every accepted pick, including a clear, loaded test
    /// cases are dropped and the epoch advances.
    pub fn select_sheet(&mut self, name: Option<String>) -> SheetPick {
        if self.selected_spreadsheet.is_none() {
            return SheetPick::Rejected;
        }
        self.selected_sheet = name.filter(|n| !n.is_empty());
        self.test_cases.clear();
        self.epoch += 1;
        match self.selected_sheet {
            Some(_) => SheetPick::Selected(self.epoch),
            None => SheetPick::Cleared,
        }
    }

    /// Commits a sheet-list response issued under `epoch`. Stale responses
    /// are rejected.
    pub fn commit_sheets(&mut self, epoch: u32, sheets: Vec<SheetInfo>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.sheets = sheets;
        true
    }

    /// Commits a test-case response issued under `epoch`. The list is
    /// replaced wholesale; stale responses are rejected.
    pub fn commit_test_cases(&mut self, epoch: u32, test_cases: Vec<TestCase>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.test_cases = test_cases;
        true
    }

    /// Full downstream invalidation after a successful disconnect.
    pub fn clear_connection(&mut self) {
        self.connected = false;
        self.spreadsheets.clear();
        self.selected_spreadsheet = None;
        self.sheets.clear();
        self.selected_sheet = None;
        self.test_cases.clear();
        self.epoch += 1;
    }
}

pub struct HomePage {
    pub session: SessionHandle,
    pub _listener: ContextHandle<SessionHandle>,

    pub workflow: Workflow,
    pub active_tab: Tab,

    pub form: GenerationForm,
    pub errors: BTreeMap<&'static str, &'static str>,
    pub generated: Option<GenerateResponse>,

    pub analysis_type: AnalysisType,
    pub analysis_result: Option<String>,
    pub modification_prompt: String,
    pub modification_result: Option<ModifyResponse>,
    pub arrangement_prompt: String,
    pub arrangement_result: Option<ArrangeResponse>,

    pub connection_status: String,

    pub connecting: bool,
    pub disconnecting: bool,
    pub generating: bool,
    pub analyzing: bool,
    pub modifying: bool,
    pub arranging: bool,

    /// Guards the first-render connection check.
    pub checked: bool,
}

impl HomePage {
    pub fn new(session: SessionHandle, listener: ContextHandle<SessionHandle>) -> Self {
        Self {
            session,
            _listener: listener,
            workflow: Workflow::default(),
            active_tab: Tab::Generate,
            form: GenerationForm::default(),
            errors: BTreeMap::new(),
            generated: None,
            analysis_type: AnalysisType::General,
            analysis_result: None,
            modification_prompt: String::new(),
            modification_result: None,
            arrangement_prompt: String::new(),
            arrangement_result: None,
            connection_status: String::new(),
            connecting: false,
            disconnecting: false,
            generating: false,
            analyzing: false,
            modifying: false,
            arranging: false,
            checked: false,
        }
    }

    /// Discards every operation result. Runs when the selection changes or
    /// the connection is severed; the results describe data that is no
    /// longer on screen.
    pub fn clear_operation_results(&mut self) {
        self.analysis_result = None;
        self.modification_result = None;
        self.arrangement_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_workflow() -> Workflow {
        let mut workflow = Workflow::default();
        workflow.apply_status(
            true,
            vec![
                Spreadsheet {
                    id: "ss-a".into(),
                    name: "Sprint A".into(),
                },
                Spreadsheet {
                    id: "ss-b".into(),
                    name: "Sprint B".into(),
                },
            ],
        );
        workflow
    }

    fn selected_epoch(pick: SheetPick) -> u32 {
        match pick {
            SheetPick::Selected(epoch) => epoch,
            other => panic!("expected a selected sheet, got {other:?}"),
        }
    }

    fn case(id: &str) -> TestCase {
        TestCase {
            id: id.into(),
            summary: "s".into(),
            module: "m".into(),
            submodule: String::new(),
            test_case_type: "Positive".into(),
            status: "Not Tested".into(),
            environment: "Test".into(),
            test_steps: String::new(),
            expected_results: String::new(),
        }
    }

    #[test]
    fn selecting_new_spreadsheet_clears_sheet_selection() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        workflow.select_sheet(Some("Sheet1".into()));
        assert_eq!(workflow.selected_sheet.as_deref(), Some("Sheet1"));

        workflow.select_spreadsheet(Some("ss-b"));
        assert_eq!(workflow.selected_spreadsheet_id(), Some("ss-b"));
        assert!(workflow.selected_sheet.is_none());
        assert!(workflow.sheets.is_empty());
        assert!(workflow.test_cases.is_empty());
    }

    #[test]
    fn sheet_selection_without_spreadsheet_is_rejected() {
        let mut workflow = connected_workflow();
        assert_eq!(
            workflow.select_sheet(Some("Sheet1".into())),
            SheetPick::Rejected
        );
        assert!(workflow.selected_sheet.is_none());
    }

    #[test]
    fn clearing_sheet_selection_invalidates_loaded_rows() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let epoch = selected_epoch(workflow.select_sheet(Some("S1".into())));
        workflow.commit_test_cases(epoch, vec![case("PC_1")]);

        assert_eq!(workflow.select_sheet(None), SheetPick::Cleared);
        assert!(workflow.selected_sheet.is_none());
        assert!(workflow.test_cases.is_empty());
        // A late response for the cleared selection must not land.
        assert!(!workflow.commit_test_cases(epoch, vec![case("PC_2")]));
    }

    #[test]
    fn stale_test_case_response_is_discarded() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let stale = selected_epoch(workflow.select_sheet(Some("S1".into())));
        let current = selected_epoch(workflow.select_sheet(Some("S2".into())));

        // S2's rows land first, then S1's late response arrives.
        assert!(workflow.commit_test_cases(current, vec![case("PC_2")]));
        assert!(!workflow.commit_test_cases(stale, vec![case("PC_1")]));
        assert_eq!(workflow.test_cases, vec![case("PC_2")]);
    }

    #[test]
    fn stale_sheet_list_response_is_discarded() {
        let mut workflow = connected_workflow();
        let stale = workflow.select_spreadsheet(Some("ss-a")).unwrap();
        let current = workflow.select_spreadsheet(Some("ss-b")).unwrap();

        let sheet = |name: &str| SheetInfo {
            id: 0,
            name: name.into(),
        };
        assert!(workflow.commit_sheets(current, vec![sheet("B1")]));
        assert!(!workflow.commit_sheets(stale, vec![sheet("A1")]));
        assert_eq!(workflow.sheets[0].name, "B1");
    }

    #[test]
    fn reload_with_same_selection_is_idempotent() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let epoch = selected_epoch(workflow.select_sheet(Some("S1".into())));

        let rows = vec![case("PC_1"), case("PC_2")];
        assert!(workflow.commit_test_cases(epoch, rows.clone()));
        assert!(workflow.commit_test_cases(epoch, rows.clone()));
        assert_eq!(workflow.test_cases, rows);
    }

    #[test]
    fn clearing_spreadsheet_clears_everything_downstream() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let epoch = selected_epoch(workflow.select_sheet(Some("S1".into())));
        workflow.commit_test_cases(epoch, vec![case("PC_1")]);

        assert_eq!(workflow.select_spreadsheet(None), None);
        assert!(workflow.selected_spreadsheet.is_none());
        assert!(workflow.selected_sheet.is_none());
        assert!(workflow.test_cases.is_empty());
    }

    #[test]
    fn disconnect_cascade_clears_connection_and_all_lists() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let epoch = selected_epoch(workflow.select_sheet(Some("S1".into())));
        workflow.commit_sheets(epoch, vec![SheetInfo { id: 0, name: "S1".into() }]);
        workflow.commit_test_cases(epoch, vec![case("PC_1")]);

        workflow.clear_connection();
        assert!(!workflow.connected);
        assert!(workflow.spreadsheets.is_empty());
        assert!(workflow.selected_spreadsheet.is_none());
        assert!(workflow.sheets.is_empty());
        assert!(workflow.selected_sheet.is_none());
        assert!(workflow.test_cases.is_empty());
        // Pending loads for the old connection must not land either.
        assert!(!workflow.commit_test_cases(epoch, vec![case("PC_9")]));
    }

    #[test]
    fn status_check_failure_keeps_disconnected_state() {
        let mut workflow = Workflow::default();
        workflow.apply_status(false, Vec::new());
        assert!(!workflow.connected);
        assert!(workflow.spreadsheets.is_empty());
    }

    #[test]
    fn disconnected_status_report_clears_stale_selection() {
        let mut workflow = connected_workflow();
        workflow.select_spreadsheet(Some("ss-a"));
        let epoch = selected_epoch(workflow.select_sheet(Some("S1".into())));
        workflow.commit_test_cases(epoch, vec![case("PC_1")]);

        // Server-side revocation surfaces through a status re-check.
        workflow.apply_status(false, Vec::new());
        assert!(!workflow.connected);
        assert!(workflow.spreadsheets.is_empty());
        assert!(workflow.selected_spreadsheet.is_none());
        assert!(workflow.selected_sheet.is_none());
        assert!(workflow.test_cases.is_empty());
        assert!(!workflow.commit_test_cases(epoch, vec![case("PC_9")]));

        // A reconnect starts clean instead of resurrecting the old selection.
        workflow.apply_status(
            true,
            vec![Spreadsheet {
                id: "ss-c".into(),
                name: "Sprint C".into(),
            }],
        );
        assert!(workflow.selected_spreadsheet.is_none());
        assert!(workflow.sheets.is_empty());
    }
}
