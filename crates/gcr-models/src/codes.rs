//! Closed code sets of the GCR format and their lookup tables.
//!
//! Every set here is a fixed table: action codes (split into owner and
//! coordinator codes), flight types, identifier types, message types,
//! footnote kinds and the twelve month abbreviations used in dates.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// ActionCode
// ---------------------------------------------------------------------------

/// The single-letter action at the start of every flight line.
///
/// Owner (operator) codes `N`, `D`, `C`, `R` appear in requests; coordinator
/// codes `K`, `X`, `H`, `U`, `W` appear in replies.
///
/// # Examples
///
/// ```
/// use gcr_models::ActionCode;
///
/// let code = ActionCode::from_char('K').unwrap();
/// assert_eq!(code, ActionCode::Confirm);
/// assert!(code.is_coordinator());
/// assert_eq!(code.to_string(), "K");
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum ActionCode {
    /// New schedule.
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    New,
    /// Delete schedule.
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Delete,
    /// Schedule to be changed.
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    Change,
    /// Revised schedule.
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    Revised,
    /// Confirmation.
    #[serde(rename = "K")]
    #[strum(serialize = "K")]
    Confirm,
    /// Cancelled.
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cancel,
    /// Holding.
    #[serde(rename = "H")]
    #[strum(serialize = "H")]
    Hold,
    /// Refusal.
    #[serde(rename = "U")]
    #[strum(serialize = "U")]
    Refuse,
    /// Wrong.
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Wrong,
}

/// Codes sent by the aircraft owner or operator.
pub const OWNER_ACTION_CODES: [ActionCode; 4] = [
    ActionCode::New,
    ActionCode::Delete,
    ActionCode::Change,
    ActionCode::Revised,
];

/// Codes sent by the slot coordinator.
pub const COORDINATOR_ACTION_CODES: [ActionCode; 5] = [
    ActionCode::Confirm,
    ActionCode::Cancel,
    ActionCode::Hold,
    ActionCode::Refuse,
    ActionCode::Wrong,
];

/// All nine action codes, owner codes first.
pub const ALL_ACTION_CODES: [ActionCode; 9] = [
    ActionCode::New,
    ActionCode::Delete,
    ActionCode::Change,
    ActionCode::Revised,
    ActionCode::Confirm,
    ActionCode::Cancel,
    ActionCode::Hold,
    ActionCode::Refuse,
    ActionCode::Wrong,
];

impl ActionCode {
    /// Look up the code for its wire letter.
    pub fn from_char(c: char) -> Option<Self> {
        ALL_ACTION_CODES.into_iter().find(|code| code.as_char() == c)
    }

    /// The wire letter.
    pub fn as_char(self) -> char {
        match self {
            Self::New => 'N',
            Self::Delete => 'D',
            Self::Change => 'C',
            Self::Revised => 'R',
            Self::Confirm => 'K',
            Self::Cancel => 'X',
            Self::Hold => 'H',
            Self::Refuse => 'U',
            Self::Wrong => 'W',
        }
    }

    /// `true` for `N`, `D`, `C`, `R`.
    pub fn is_owner(self) -> bool {
        OWNER_ACTION_CODES.contains(&self)
    }

    /// `true` for `K`, `X`, `H`, `U`, `W`.
    pub fn is_coordinator(self) -> bool {
        COORDINATOR_ACTION_CODES.contains(&self)
    }

    /// Human-readable meaning of the code.
    pub fn description(self) -> &'static str {
        match self {
            Self::New => "New schedule",
            Self::Delete => "Delete schedule",
            Self::Change => "Schedule to be changed",
            Self::Revised => "Revised schedule",
            Self::Confirm => "Confirmation",
            Self::Cancel => "Cancelled",
            Self::Hold => "Holding",
            Self::Refuse => "Refusal",
            Self::Wrong => "Wrong",
        }
    }

    /// Outcome of a coordinator reply line; `None` for owner codes.
    pub fn reply_status(self) -> Option<ReplyStatus> {
        let (description, class) = match self {
            Self::Confirm => ("Slot Confirmed", StatusClass::Confirmed),
            Self::Cancel => ("Slot Cancelled", StatusClass::Cancelled),
            Self::Hold => ("Request Held", StatusClass::Held),
            Self::Refuse => ("Request Refused", StatusClass::Refused),
            Self::Wrong => ("Wrong/Invalid Request", StatusClass::Error),
            Self::New | Self::Delete | Self::Change | Self::Revised => return None,
        };
        Some(ReplyStatus { description, class })
    }
}

impl TryFrom<char> for ActionCode {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or_else(|| ModelError::InvalidCode {
            kind: "action code",
            value: c.to_string(),
            expected: "N, D, C, R, K, X, H, U or W",
        })
    }
}

// ---------------------------------------------------------------------------
// ReplyStatus
// ---------------------------------------------------------------------------

/// Coarse outcome of a coordinator reply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusClass {
    /// Slot allocated.
    Confirmed,
    /// Slot withdrawn.
    Cancelled,
    /// Request parked by the coordinator.
    Held,
    /// Request declined.
    Refused,
    /// Request could not be processed.
    Error,
}

/// Description and class of a coordinator reply line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyStatus {
    /// E.g. `"Slot Confirmed"`.
    pub description: &'static str,
    /// Coarse outcome.
    pub class: StatusClass,
}

// ---------------------------------------------------------------------------
// FlightType
// ---------------------------------------------------------------------------

/// Nature of the flight, last token of a flight line.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum FlightType {
    /// General aviation.
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    GeneralAviation,
    /// State or diplomatic flight.
    #[serde(rename = "I")]
    #[strum(serialize = "I")]
    StateDiplomatic,
    /// Business aviation or air taxi.
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    BusinessAviation,
}

/// All flight types.
pub const FLIGHT_TYPES: [FlightType; 3] = [
    FlightType::GeneralAviation,
    FlightType::StateDiplomatic,
    FlightType::BusinessAviation,
];

impl FlightType {
    /// Parse a one-letter token; anything else, including the empty string, is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        FLIGHT_TYPES
            .into_iter()
            .find(|t| code.len() == 1 && code.starts_with(t.as_char()))
    }

    /// The wire letter.
    pub fn as_char(self) -> char {
        match self {
            Self::GeneralAviation => 'D',
            Self::StateDiplomatic => 'I',
            Self::BusinessAviation => 'N',
        }
    }

    /// Human-readable meaning of the type.
    pub fn description(self) -> &'static str {
        match self {
            Self::GeneralAviation => "General Aviation",
            Self::StateDiplomatic => "State/Diplomatic",
            Self::BusinessAviation => "Business Aviation/Air taxi",
        }
    }
}

impl TryFrom<char> for FlightType {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        FLIGHT_TYPES
            .into_iter()
            .find(|t| t.as_char() == c)
            .ok_or_else(|| ModelError::InvalidCode {
                kind: "flight type",
                value: c.to_string(),
                expected: "D, I or N",
            })
    }
}

// ---------------------------------------------------------------------------
// IdentifierType
// ---------------------------------------------------------------------------

/// Whether flights are identified by flight number or by registration.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum IdentifierType {
    /// Flight number, header line `/FLT`.
    Flt,
    /// Aircraft registration, header line `/REG`.
    Reg,
}

impl IdentifierType {
    /// Parse the second header line (`/FLT` or `/REG`).
    pub fn from_header_line(line: &str) -> Option<Self> {
        match line {
            "/FLT" => Some(Self::Flt),
            "/REG" => Some(Self::Reg),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MessageType
// ---------------------------------------------------------------------------

/// Overall nature of a message, inferred from its action codes.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageType {
    /// Owner codes only, or no flights at all.
    Request,
    /// Coordinator codes only.
    Reply,
    /// Both owner and coordinator codes.
    Mixed,
}

// ---------------------------------------------------------------------------
// FootnoteKind
// ---------------------------------------------------------------------------

/// Kind of free-text remark.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
pub enum FootnoteKind {
    /// Supplementary information.
    #[serde(rename = "SI")]
    #[strum(serialize = "SI")]
    Supplementary,
    /// General information.
    #[serde(rename = "GI")]
    #[strum(serialize = "GI")]
    General,
}

impl FootnoteKind {
    /// The two-letter wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supplementary => "SI",
            Self::General => "GI",
        }
    }
}

// ---------------------------------------------------------------------------
// Months
// ---------------------------------------------------------------------------

/// Month abbreviations accepted in `DDMMM` dates.
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// `true` if `month` is one of [`MONTHS`].
pub fn is_month(month: &str) -> bool {
    MONTHS.contains(&month)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
