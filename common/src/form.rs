//! Generation form model and validation.
//!
//! The form is plain data so the frontend can reset it wholesale after a
//! successful run and the validation rules stay unit-testable outside the
//! browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Analysis flavor selectable on the analyze tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    #[default]
    General,
    Coverage,
    Quality,
    Duplicates,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::General,
        AnalysisType::Coverage,
        AnalysisType::Quality,
        AnalysisType::Duplicates,
    ];

    /// Stable identifier, also the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::General => "general",
            AnalysisType::Coverage => "coverage",
            AnalysisType::Quality => "quality",
            AnalysisType::Duplicates => "duplicates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::General => "General Analysis",
            AnalysisType::Coverage => "Coverage Analysis",
            AnalysisType::Quality => "Quality Assessment",
            AnalysisType::Duplicates => "Duplicate Detection",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .unwrap_or_default()
    }
}

/// Per-field validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Input state of the generation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationForm {
    pub module: String,
    pub summary: String,
    pub acceptance_criteria: String,
    pub generate_test_cases: bool,
    pub generate_test_scenarios: bool,
    pub test_cases_count: u32,
    pub test_scenarios_count: u32,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            module: String::new(),
            summary: String::new(),
            acceptance_criteria: String::new(),
            generate_test_cases: true,
            generate_test_scenarios: true,
            test_cases_count: 20,
            test_scenarios_count: 10,
        }
    }
}

impl GenerationForm {
    pub const CASE_COUNT_CHOICES: [u32; 5] = [10, 15, 20, 25, 30];
    pub const SCENARIO_COUNT_CHOICES: [u32; 5] = [5, 8, 10, 15, 20];

    /// Validates the form against the selection context.
    ///
    /// Returns one message per offending field; an empty map means the form
    /// may be submitted. No network call is issued while this is non-empty.
    pub fn validate(&self, spreadsheet_selected: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.module.trim().is_empty() {
            errors.insert("module", "Module name is required");
        }
        if self.summary.trim().is_empty() {
            errors.insert("summary", "Summary is required");
        }
        if self.acceptance_criteria.trim().is_empty() {
            errors.insert("acceptanceCriteria", "Acceptance criteria is required");
        }
        if !spreadsheet_selected {
            errors.insert("spreadsheet", "Please select a spreadsheet");
        }
        if !self.generate_test_cases && !self.generate_test_scenarios {
            errors.insert(
                "generation",
                "Please select at least one option to generate (Test Cases or Test Scenarios)",
            );
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> GenerationForm {
        GenerationForm {
            module: "Login".into(),
            summary: "test".into(),
            acceptance_criteria: "crit".into(),
            ..GenerationForm::default()
        }
    }

    #[test]
    fn valid_form_yields_no_errors() {
        assert!(filled_form().validate(true).is_empty());
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = GenerationForm::default().validate(false);
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["acceptanceCriteria", "module", "spreadsheet", "summary"]
        );
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let form = GenerationForm {
            module: "   ".into(),
            ..filled_form()
        };
        let errors = form.validate(true);
        assert_eq!(errors.get("module"), Some(&"Module name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn both_flags_off_yields_only_generation_error() {
        let form = GenerationForm {
            generate_test_cases: false,
            generate_test_scenarios: false,
            ..filled_form()
        };
        let errors = form.validate(true);
        assert!(errors.contains_key("generation"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_spreadsheet_flags_spreadsheet_field() {
        let errors = filled_form().validate(false);
        assert_eq!(errors.get("spreadsheet"), Some(&"Please select a spreadsheet"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn analysis_type_wire_names_round_trip() {
        for t in AnalysisType::ALL {
            assert_eq!(AnalysisType::from_str_or_default(t.as_str()), t);
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
        assert_eq!(
            AnalysisType::from_str_or_default("nonsense"),
            AnalysisType::General
        );
    }
}
