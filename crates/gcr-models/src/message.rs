//! The GCR message tree.
//!
//! ```text
//! Message
//! ├── Header (identifier type, coordinated airport)
//! ├── AirportSection*
//! │   └── FlightLine+
//! ├── Footnote* (SI / GI)
//! └── MessageType (request / reply / mixed)
//! ```
//!
//! Field names serialise in camelCase, matching the field paths reported by
//! [`validate`](crate::validate) (e.g. `airportSections[0].flights[1].time`).

use serde::{Deserialize, Serialize};

use crate::airport::ICAOAirportCode;
use crate::codes::{ActionCode, FlightType, FootnoteKind, IdentifierType, MessageType};

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The message header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// `/FLT` or `/REG`.
    pub identifier_type: IdentifierType,
    /// First airport code of the body. Not cross-checked against the sections.
    pub airport: ICAOAirportCode,
}

// ---------------------------------------------------------------------------
// FlightLine
// ---------------------------------------------------------------------------

/// One arrival or departure of one aircraft at the coordinated airport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightLine {
    /// What is being asked for or answered.
    pub action_code: ActionCode,
    /// Flight number or registration, depending on the header.
    pub identifier: String,
    /// `DDMMM`, e.g. `08JUN`.
    pub date: String,
    /// Seats, 0–999. Encoded zero-padded to three digits.
    pub seat_count: u16,
    /// 3–4 character aircraft type designator.
    pub aircraft_type: String,
    /// Arrival (origin + time) or departure (time + destination).
    pub is_arrival: bool,
    /// Origin when arriving, destination when departing.
    pub other_airport: ICAOAirportCode,
    /// `HHMM`.
    pub time: String,
    /// Nature of the flight.
    pub flight_type: FlightType,
    /// Coordinator slot identifier, without the `ID.` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
}

// ---------------------------------------------------------------------------
// AirportSection
// ---------------------------------------------------------------------------

/// Flights grouped under one coordinated airport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirportSection {
    /// The coordinated airport.
    pub airport: ICAOAirportCode,
    /// Never empty in a decoded message.
    pub flights: Vec<FlightLine>,
}

// ---------------------------------------------------------------------------
// Footnote
// ---------------------------------------------------------------------------

/// A free-text SI or GI remark.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Footnote {
    /// SI or GI.
    #[serde(rename = "type")]
    pub kind: FootnoteKind,
    /// Remark text; lines of a block footnote are joined by `\n`.
    pub text: String,
}

impl Footnote {
    /// Supplementary information (`SI`).
    pub fn supplementary(text: impl Into<String>) -> Self {
        Self {
            kind: FootnoteKind::Supplementary,
            text: text.into(),
        }
    }

    /// General information (`GI`).
    pub fn general(text: impl Into<String>) -> Self {
        Self {
            kind: FootnoteKind::General,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A complete GCR message.
///
/// Produced by [`decode`](crate::decode) or assembled by hand (see
/// [`MessageBuilder`](crate::MessageBuilder)).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifier type and coordinated airport.
    pub header: Header,
    /// Ordered airport sections.
    pub airport_sections: Vec<AirportSection>,
    /// Ordered SI / GI remarks.
    pub footnotes: Vec<Footnote>,
    /// Inferred from the action codes present.
    pub message_type: MessageType,
}

impl Message {
    /// Iterate over every flight line of every section, in order.
    pub fn flights(&self) -> impl Iterator<Item = &FlightLine> {
        self.airport_sections.iter().flat_map(|s| s.flights.iter())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Infer the message type from the action codes of all flights.
pub(crate) fn classify(sections: &[AirportSection]) -> MessageType {
    let mut has_owner = false;
    let mut has_coordinator = false;

    for flight in sections.iter().flat_map(|s| &s.flights) {
        has_owner |= flight.action_code.is_owner();
        has_coordinator |= flight.action_code.is_coordinator();
    }

    match (has_owner, has_coordinator) {
        (true, true) => MessageType::Mixed,
        (false, true) => MessageType::Reply,
        _ => MessageType::Request,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
