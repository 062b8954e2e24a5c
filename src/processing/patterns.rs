// Fixed recognizers for identity card fields.
// Keyword lists include misreads seen in real OCR output, keep them lowercase.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Three digits, four digits, seven digits, then an optional extra digit,
    /// dash and digit for engines that merge or split the check digit.
    /// Word boundaries are ASCII-only so a stray accented letter from OCR
    /// does not hide the number.
    pub static ref ID_PATTERN: Regex =
        Regex::new(r"(?-u:\b)[0-9]{3}-[0-9]{4}-[0-9]{7}[0-9]?-?[0-9]?(?-u:\b)").unwrap();

    pub static ref DATE_PATTERN: Regex =
        Regex::new(r"(?-u:\b)[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}(?-u:\b)").unwrap();

    /// Day, month and year groups used when normalizing a date fragment.
    pub static ref DATE_PARTS_PATTERN: Regex =
        Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").unwrap();

    /// A date of birth whose second slash was lost: `DD/MYYYY`.
    pub static ref COLLAPSED_DOB_PATTERN: Regex =
        Regex::new(r"([0-9]{2})/([0-9])([0-9]{4})").unwrap();

    pub static ref NON_TEXT_PATTERN: Regex = Regex::new(r"[^A-Za-z0-9\s]").unwrap();

    pub static ref MALE_PATTERN: Regex = Regex::new(r"(?i)m").unwrap();
}

pub const DOB_KEYWORDS: &[&str] = &["date of birth", "dob", "dateot binh", "dateofbirth", "birth"];

pub const ISSUED_KEYWORDS: &[&str] = &[
    "issued date",
    "issuing date",
    "1ssuing date",
    "ssuing",
    "ssin dat",
    "awuing date",
    "issue date",
    "issuing",
];

pub const EXPIRY_KEYWORDS: &[&str] = &["expiry date", "expiration date", "piry date", "expiry", "expire"];

pub const NAME_LABELS: &[&str] = &["name:", "name"];

pub const NATIONALITY_LABELS: &[&str] = &["nationality:", "hationality", "tionality"];

pub const SEX_LABELS: &[&str] = &["sex:"];

/// The three dated fields, in the order their keyword sets are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    DateOfBirth,
    IssuedDate,
    ExpiryDate,
}

impl DateField {
    /// First match wins, so a line carrying both a birth and an issue
    /// keyword is read as a date of birth.
    pub const PRIORITY: [DateField; 3] = [
        DateField::DateOfBirth,
        DateField::IssuedDate,
        DateField::ExpiryDate,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DateField::DateOfBirth => DOB_KEYWORDS,
            DateField::IssuedDate => ISSUED_KEYWORDS,
            DateField::ExpiryDate => EXPIRY_KEYWORDS,
        }
    }

    /// Match against the current line or, for label-above-value layouts,
    /// the line before it. Both must already be lowercased.
    pub fn matches(&self, lower_line: &str, lower_prev: Option<&str>) -> bool {
        self.keywords().iter().any(|keyword| {
            lower_line.contains(keyword) || lower_prev.map_or(false, |prev| prev.contains(keyword))
        })
    }
}

pub fn contains_any(lower_line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower_line.contains(keyword))
}
