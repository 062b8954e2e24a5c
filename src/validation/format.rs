use crate::models::{ExtractedRecord, FormatValidationResult, RecordField, ValidationIssue, ValidationIssueType};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ID_FORMAT: Regex = Regex::new(r"^[0-9]{3}-[0-9]{4}-[0-9]{7}[0-9]?-?[0-9]?$").unwrap();
    static ref DATE_FORMAT: Regex = Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").unwrap();
    static ref SEX_FORMAT: Regex = Regex::new(r"^[MF]$").unwrap();
    static ref TEXT_FORMAT: Regex = Regex::new(r"^[A-Za-z0-9\s]+$").unwrap();
}

/// FormatValidator reports which fields were not recognized and which values
/// break their field format, typically after a user edit.
pub struct FormatValidator;

impl FormatValidator {
    pub fn validate(record: &ExtractedRecord) -> FormatValidationResult {
        let mut issues = Vec::new();
        let missing_fields = record.missing_fields();

        for field in RecordField::ALL {
            let value = record.get(field);

            if value.is_empty() {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Missing,
                    field,
                    message: format!("{} was not recognized", field.label()),
                });
            } else if !Self::format_for(field).is_match(value) {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Malformed,
                    field,
                    message: format!("{} has an unexpected format: {}", field.label(), value),
                });
            }
        }

        FormatValidationResult {
            is_valid: issues.is_empty(),
            missing_fields,
            issues,
        }
    }

    fn format_for(field: RecordField) -> &'static Regex {
        match field {
            RecordField::IdNumber => &*ID_FORMAT,
            RecordField::DateOfBirth | RecordField::IssuedDate | RecordField::ExpiryDate => &*DATE_FORMAT,
            RecordField::Sex => &*SEX_FORMAT,
            RecordField::Name | RecordField::Nationality => &*TEXT_FORMAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::FieldExtractor;

    fn complete_record() -> ExtractedRecord {
        ExtractedRecord {
            id_number: "123-4567-8901234-5".to_string(),
            name: "Abebe Kebede".to_string(),
            date_of_birth: "05/03/1990".to_string(),
            nationality: "Ethiopian".to_string(),
            issued_date: "01/02/2020".to_string(),
            expiry_date: "01/02/2030".to_string(),
            sex: "M".to_string(),
        }
    }

    #[test]
    fn test_complete_record_is_valid() {
        let result = FormatValidator::validate(&complete_record());
        assert!(result.is_valid);
        assert!(result.missing_fields.is_empty());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut record = complete_record();
        record.nationality.clear();
        record.sex.clear();

        let result = FormatValidator::validate(&record);
        assert!(!result.is_valid);
        assert_eq!(result.missing_fields, vec![RecordField::Nationality, RecordField::Sex]);
        assert!(result
            .issues
            .iter()
            .all(|issue| issue.issue_type == ValidationIssueType::Missing));
    }

    #[test]
    fn test_user_edits_are_checked() {
        let mut record = complete_record();
        record.set(RecordField::DateOfBirth, "5 March 1990");
        record.set(RecordField::Sex, "Male");
        record.set(RecordField::IdNumber, "123-4567-8901");

        let result = FormatValidator::validate(&record);
        let malformed: Vec<RecordField> = result
            .issues
            .iter()
            .filter(|issue| issue.issue_type == ValidationIssueType::Malformed)
            .map(|issue| issue.field)
            .collect();
        assert_eq!(
            malformed,
            vec![RecordField::IdNumber, RecordField::DateOfBirth, RecordField::Sex]
        );
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_id_format_accepts_check_digit_variants() {
        for id in ["123-4567-8901234", "123-4567-89012345", "123-4567-8901234-5"] {
            let mut record = complete_record();
            record.set(RecordField::IdNumber, id);
            assert!(FormatValidator::validate(&record).is_valid, "{} rejected", id);
        }
    }

    #[test]
    fn test_extracted_values_satisfy_formats() {
        let text = "ID 123-4567-8901234\nName: J0hn, Doe\nDOB 1/2/1985\nSex: female\nNationality: ET.\nExpiry 3/4/2030";
        let result = FormatValidator::validate(&FieldExtractor::extract(text));

        assert!(result
            .issues
            .iter()
            .all(|issue| issue.issue_type == ValidationIssueType::Missing));
        assert_eq!(result.missing_fields, vec![RecordField::IssuedDate]);
    }
}
