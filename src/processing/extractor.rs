use log::debug;

use crate::models::ExtractedRecord;

use super::lines::normalize_lines;
use super::matchers::{clean_text, correct_id_number, normalize_date, reduce_sex, repair_collapsed_date};
use super::patterns::{
    contains_any, DateField, DATE_PATTERN, DOB_KEYWORDS, ID_PATTERN, NAME_LABELS, NATIONALITY_LABELS, SEX_LABELS,
};

/// FieldExtractor turns the raw text of one OCR run into an `ExtractedRecord`.
///
/// Tie-breaks:
/// - ID number: every matching line overwrites, so the last one wins.
/// - Dates: a line feeds at most one date field, chosen by the first keyword
///   set (birth, issue, expiry) found on the line or the line above it.
/// - Labels: name, nationality and sex are tried in that order and only the
///   first label found on a line is read.
/// - Date of birth fallback: the last line with both a birth keyword and a
///   date wins.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(text: &str) -> ExtractedRecord {
        let lines = normalize_lines(text);
        let mut record = Self::scan_lines(&lines);

        if record.date_of_birth.chars().count() == 8 {
            record.date_of_birth = repair_collapsed_date(&record.date_of_birth);
        }

        if record.date_of_birth.is_empty() {
            if let Some(date) = Self::recover_date_of_birth(&lines) {
                debug!("Recovered date of birth from fallback pass: {}", date);
                record.date_of_birth = date;
            }
        }

        record.name = clean_text(&record.name);
        record.nationality = clean_text(&record.nationality);
        record.sex = clean_text(&record.sex);

        record
    }

    fn scan_lines(lines: &[&str]) -> ExtractedRecord {
        let (record, _) = lines
            .iter()
            .fold((ExtractedRecord::default(), None), |(mut record, prev), line| {
                Self::scan_line(&mut record, line, prev);
                (record, Some(*line))
            });
        record
    }

    fn scan_line(record: &mut ExtractedRecord, line: &str, prev: Option<&str>) {
        if ID_PATTERN.is_match(line) {
            record.id_number = correct_id_number(line);
            debug!("ID number candidate: {}", record.id_number);
        }

        if let Some(found) = DATE_PATTERN.find(line) {
            let date = normalize_date(found.as_str());
            let lower_line = line.to_lowercase();
            let lower_prev = prev.map(str::to_lowercase);

            let field = DateField::PRIORITY
                .iter()
                .find(|field| field.matches(&lower_line, lower_prev.as_deref()));

            match field {
                Some(DateField::DateOfBirth) => record.date_of_birth = date,
                Some(DateField::IssuedDate) => record.issued_date = date,
                Some(DateField::ExpiryDate) => record.expiry_date = date,
                None => debug!("Unlabelled date ignored: {}", date),
            }
        }

        Self::scan_labels(record, line);
    }

    fn scan_labels(record: &mut ExtractedRecord, line: &str) {
        let lower_line = line.to_lowercase();

        if contains_any(&lower_line, NAME_LABELS) {
            record.name = Self::name_value(line).to_string();
        } else if contains_any(&lower_line, NATIONALITY_LABELS) {
            record.nationality = Self::value_after_colon(line).unwrap_or_default().to_string();
        } else if contains_any(&lower_line, SEX_LABELS) {
            record.sex = reduce_sex(Self::value_after_colon(line).unwrap_or_default());
        }
    }

    // The segment between the first and second colon.
    fn value_after_colon(line: &str) -> Option<&str> {
        line.split(':').nth(1).map(str::trim).filter(|value| !value.is_empty())
    }

    fn name_value(line: &str) -> &str {
        Self::value_after_colon(line)
            .or_else(|| line.split("Name").nth(1).map(str::trim).filter(|value| !value.is_empty()))
            .unwrap_or_default()
    }

    /// Looser date of birth scan: keyword and date on the same line.
    pub fn recover_date_of_birth(lines: &[&str]) -> Option<String> {
        lines
            .iter()
            .filter(|line| contains_any(&line.to_lowercase(), DOB_KEYWORDS))
            .filter_map(|line| DATE_PATTERN.find(line))
            .map(|found| normalize_date(found.as_str()))
            .last()
    }
}
