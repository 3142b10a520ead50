//! Closed category vocabularies and total lookup functions.
//!
//! Every categorical field is an explicit enum with an `Na` sentinel and a
//! total `from_raw` lookup: unknown input degrades to `Na`, it never fails.
//! Lookups are case-insensitive over trimmed input, and every `as_str()`
//! value is itself a valid lookup key so re-standardising already-canonical
//! data is a no-op.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel string for "value present but unrecognized/unmapped".
///
/// Distinct from an absent value, which serialises as an empty cell.
pub const NA: &str = "NA";

/// Claimant gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Na,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Na => NA,
        }
    }

    /// Total lookup: lowercased, trimmed raw value to category.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "m" | "male" => Sex::Male,
            "f" | "female" => Sex::Female,
            _ => Sex::Na,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relation of the claimant to the policy-holding employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Employee,
    Spouse,
    Child,
    Parent,
    ParentInLaw,
    Sibling,
    #[default]
    Na,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Employee => "Employee",
            Relation::Spouse => "Spouse",
            Relation::Child => "Child",
            Relation::Parent => "Parent",
            Relation::ParentInLaw => "Parent-In-Law",
            Relation::Sibling => "Sibling",
            Relation::Na => NA,
        }
    }

    /// Total lookup: lowercased, trimmed raw value to category.
    ///
    /// "FATHER" and "mother " both land on `Parent`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "self" | "employee" | "emp" => Relation::Employee,
            "spouse" | "wife" | "husband" => Relation::Spouse,
            "child" | "son" | "daughter" | "dependent child" | "dependant child" => Relation::Child,
            "parent" | "father" | "mother" => Relation::Parent,
            "parent-in-law" | "father-in-law" | "mother-in-law" => Relation::ParentInLaw,
            "sibling" | "brother" | "sister" => Relation::Sibling,
            _ => Relation::Na,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal claim-status code, the first stage of the two-stage status
/// lookup. Raw insurer wording maps onto a code; the code maps onto the
/// readable label stored in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatusCode {
    /// Settled / approved / paid.
    S,
    /// Rejected / denied / repudiated.
    R,
    /// Pending / under process.
    P,
}

impl ClaimStatusCode {
    /// First-stage lookup: lowercased, trimmed raw value to internal code.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "s" | "settled" | "approved" | "approve" | "paid" | "closed" | "closed - settled" => {
                Some(ClaimStatusCode::S)
            }
            "r" | "rejected" | "denied" | "declined" | "repudiated" | "closed - rejected" => {
                Some(ClaimStatusCode::R)
            }
            "p" | "pending" | "open" | "in process" | "under process" | "under review" => {
                Some(ClaimStatusCode::P)
            }
            _ => None,
        }
    }
}

/// Readable claim status, the second stage of the two-stage lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Settled,
    Rejected,
    Pending,
    #[default]
    Na,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Settled => "Settled",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Na => NA,
        }
    }

    /// Second-stage lookup: internal code to readable label.
    pub fn from_code(code: ClaimStatusCode) -> Self {
        match code {
            ClaimStatusCode::S => ClaimStatus::Settled,
            ClaimStatusCode::R => ClaimStatus::Rejected,
            ClaimStatusCode::P => ClaimStatus::Pending,
        }
    }

    /// Both stages combined; unknown at either stage degrades to `Na`.
    pub fn from_raw(raw: &str) -> Self {
        match ClaimStatusCode::from_raw(raw) {
            Some(code) => ClaimStatus::from_code(code),
            None => ClaimStatus::Na,
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracts the ICD chapter letter from a raw ailment code.
///
/// The chapter is the first uppercase ASCII letter found anywhere in the
/// string; lowercase codes and purely numeric codes yield `None`. The NA
/// sentinel also yields `None`, so a serialised letterless record reads
/// back as letterless instead of landing on chapter N.
pub fn ailment_letter(raw: &str) -> Option<char> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(NA) {
        return None;
    }
    trimmed.chars().find(char::is_ascii_uppercase)
}

/// Total lookup from ICD-10 chapter letter to ailment group description.
///
/// Letters without an entry yield the `NA` sentinel.
pub fn ailment_group_description(letter: char) -> &'static str {
    match letter {
        'A' | 'B' => "Infectious and parasitic diseases",
        'C' => "Neoplasms",
        'D' => "Neoplasms, blood and immune disorders",
        'E' => "Endocrine, nutritional and metabolic diseases",
        'F' => "Mental and behavioural disorders",
        'G' => "Diseases of the nervous system",
        'H' => "Diseases of the eye and ear",
        'I' => "Diseases of the circulatory system",
        'J' => "Diseases of the respiratory system",
        'K' => "Diseases of the digestive system",
        'L' => "Diseases of the skin and subcutaneous tissue",
        'M' => "Diseases of the musculoskeletal system and connective tissue",
        'N' => "Diseases of the genitourinary system",
        'O' => "Pregnancy, childbirth and the puerperium",
        'P' => "Conditions originating in the perinatal period",
        'Q' => "Congenital malformations and chromosomal abnormalities",
        'R' => "Symptoms, signs and abnormal findings",
        'S' | 'T' => "Injury, poisoning and external causes",
        'U' => "Codes for special purposes",
        'V' | 'W' | 'X' | 'Y' => "External causes of morbidity and mortality",
        'Z' => "Factors influencing health status and contact with health services",
        _ => NA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_lookup() {
        assert_eq!(Sex::from_raw("M"), Sex::Male);
        assert_eq!(Sex::from_raw("  female "), Sex::Female);
        assert_eq!(Sex::from_raw("unknown"), Sex::Na);
        assert_eq!(Sex::from_raw(""), Sex::Na);
    }

    #[test]
    fn test_relation_lookup() {
        assert_eq!(Relation::from_raw("FATHER"), Relation::Parent);
        assert_eq!(Relation::from_raw("self"), Relation::Employee);
        assert_eq!(Relation::from_raw("Wife"), Relation::Spouse);
        assert_eq!(Relation::from_raw("mother-in-law"), Relation::ParentInLaw);
        assert_eq!(Relation::from_raw("cousin"), Relation::Na);
    }

    #[test]
    fn test_claim_status_two_stage() {
        assert_eq!(ClaimStatusCode::from_raw("approved"), Some(ClaimStatusCode::S));
        assert_eq!(
            ClaimStatus::from_code(ClaimStatusCode::S),
            ClaimStatus::Settled
        );
        assert_eq!(ClaimStatus::from_raw("approved"), ClaimStatus::Settled);
        assert_eq!(ClaimStatus::from_raw("DENIED"), ClaimStatus::Rejected);
        assert_eq!(ClaimStatus::from_raw("under review"), ClaimStatus::Pending);
        assert_eq!(ClaimStatus::from_raw("gibberish"), ClaimStatus::Na);
    }

    #[test]
    fn test_lookups_accept_their_own_output() {
        for sex in [Sex::Male, Sex::Female] {
            assert_eq!(Sex::from_raw(sex.as_str()), sex);
        }
        for relation in [
            Relation::Employee,
            Relation::Spouse,
            Relation::Child,
            Relation::Parent,
            Relation::ParentInLaw,
            Relation::Sibling,
        ] {
            assert_eq!(Relation::from_raw(relation.as_str()), relation);
        }
        for status in [
            ClaimStatus::Settled,
            ClaimStatus::Rejected,
            ClaimStatus::Pending,
        ] {
            assert_eq!(ClaimStatus::from_raw(status.as_str()), status);
        }
    }

    #[test]
    fn test_ailment_letter() {
        assert_eq!(ailment_letter("S72.0"), Some('S'));
        assert_eq!(ailment_letter("icd-C50"), Some('C'));
        assert_eq!(ailment_letter("s72.0"), None);
        assert_eq!(ailment_letter("1234"), None);
        assert_eq!(ailment_letter(""), None);
        assert_eq!(ailment_letter("NA"), None);
        assert_eq!(ailment_letter(" na "), None);
    }

    #[test]
    fn test_ailment_group_description() {
        assert_eq!(
            ailment_group_description('S'),
            "Injury, poisoning and external causes"
        );
        assert_eq!(
            ailment_group_description('O'),
            "Pregnancy, childbirth and the puerperium"
        );
        assert_eq!(ailment_group_description('0'), NA);
    }
}
