use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields read off an identity card. A field that could not be
/// recognized is an empty string, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub id_number: String,
    pub name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub issued_date: String,
    pub expiry_date: String,
    pub sex: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    IdNumber,
    Name,
    DateOfBirth,
    Nationality,
    IssuedDate,
    ExpiryDate,
    Sex,
}

impl RecordField {
    /// Display order of the fields on the editable form.
    pub const ALL: [RecordField; 7] = [
        RecordField::IdNumber,
        RecordField::Name,
        RecordField::DateOfBirth,
        RecordField::Nationality,
        RecordField::IssuedDate,
        RecordField::ExpiryDate,
        RecordField::Sex,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RecordField::IdNumber => "idNumber",
            RecordField::Name => "name",
            RecordField::DateOfBirth => "dateOfBirth",
            RecordField::Nationality => "nationality",
            RecordField::IssuedDate => "issuedDate",
            RecordField::ExpiryDate => "expiryDate",
            RecordField::Sex => "sex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordField::IdNumber => "ID Number",
            RecordField::Name => "Name",
            RecordField::DateOfBirth => "Date of Birth",
            RecordField::Nationality => "Nationality",
            RecordField::IssuedDate => "Issued Date",
            RecordField::ExpiryDate => "Expiry Date",
            RecordField::Sex => "Sex",
        }
    }

    /// Look a field up by its camelCase key, ignoring case.
    pub fn from_key(key: &str) -> Option<RecordField> {
        RecordField::ALL
            .iter()
            .copied()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ExtractedRecord {
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::IdNumber => &self.id_number,
            RecordField::Name => &self.name,
            RecordField::DateOfBirth => &self.date_of_birth,
            RecordField::Nationality => &self.nationality,
            RecordField::IssuedDate => &self.issued_date,
            RecordField::ExpiryDate => &self.expiry_date,
            RecordField::Sex => &self.sex,
        }
    }

    /// Overwrite a field with a user edit. Edits are taken verbatim and are
    /// not normalized.
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::IdNumber => &mut self.id_number,
            RecordField::Name => &mut self.name,
            RecordField::DateOfBirth => &mut self.date_of_birth,
            RecordField::Nationality => &mut self.nationality,
            RecordField::IssuedDate => &mut self.issued_date,
            RecordField::ExpiryDate => &mut self.expiry_date,
            RecordField::Sex => &mut self.sex,
        };
        *slot = value.into();
    }

    /// Fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}
