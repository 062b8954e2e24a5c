use super::record::RecordField;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub field: RecordField,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Missing,
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatValidationResult {
    pub is_valid: bool,
    pub missing_fields: Vec<RecordField>,
    pub issues: Vec<ValidationIssue>,
}
