//! # GCR Message Builder
//!
//! Fluent builder for assembling a [`Message`] by hand, for one aircraft
//! flying one or more legs through one or more coordinated airports.
//!
//! ## Quick example
//!
//! ```rust
//! use gcr_models::{encode, ActionCode, Aircraft, FlightType, IdentifierType, MessageBuilder};
//!
//! let msg = MessageBuilder::new(
//!     IdentifierType::Reg,
//!     "EDDF",
//!     Aircraft::new("HBIEV", 10, "G159", FlightType::GeneralAviation),
//! )
//! .departure(ActionCode::New, "08JUN", "0750", "LOWW")
//! .supplementary("IF NOT AVBL PLS CFM NEXT LATER POSS")
//! .build()
//! .unwrap();
//!
//! assert_eq!(
//!     encode(&msg),
//!     "GCR\n/REG\nEDDF\nN HBIEV 08JUN 010G159 0750LOWW D\nSI IF NOT AVBL PLS CFM NEXT LATER POSS"
//! );
//! ```

use tracing::debug;

use crate::airport::ICAOAirportCode;
use crate::codes::{ActionCode, FlightType, IdentifierType};
use crate::message::{classify, AirportSection, FlightLine, Footnote, Header, Message};
use crate::validate::{validate, ValidationError};

/// The aircraft shared by every leg of a built message.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    /// Flight number or registration.
    pub identifier: String,
    /// Seats, 0–999.
    pub seat_count: u16,
    /// 3–4 character type designator.
    pub aircraft_type: String,
    /// Nature of the flight.
    pub flight_type: FlightType,
}

impl Aircraft {
    /// Describe the aircraft.
    pub fn new(
        identifier: impl Into<String>,
        seat_count: u16,
        aircraft_type: impl Into<String>,
        flight_type: FlightType,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            seat_count,
            aircraft_type: aircraft_type.into(),
            flight_type,
        }
    }
}

/// Builder for a [`Message`].
///
/// Legs are added to the current airport section; [`airport`](Self::airport)
/// opens another one. Nothing is checked until [`build`](Self::build).
pub struct MessageBuilder {
    identifier_type: IdentifierType,
    aircraft: Aircraft,
    sections: Vec<AirportSection>,
    footnotes: Vec<Footnote>,
    errors: Vec<ValidationError>,
}

impl MessageBuilder {
    /// Start a message for `aircraft` at the coordinated `airport`.
    pub fn new(identifier_type: IdentifierType, airport: &str, aircraft: Aircraft) -> Self {
        Self {
            identifier_type,
            aircraft,
            sections: vec![AirportSection {
                airport: ICAOAirportCode::new(airport),
                flights: Vec::new(),
            }],
            footnotes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Open a new section for another coordinated airport.
    pub fn airport(mut self, airport: &str) -> Self {
        self.sections.push(AirportSection {
            airport: ICAOAirportCode::new(airport),
            flights: Vec::new(),
        });
        self
    }

    // ── Legs ─────────────────────────────────────────────────────────

    /// Arrival from `origin` at `time` (`HHMM`) on `date` (`DDMMM`).
    pub fn arrival(self, action: ActionCode, date: &str, origin: &str, time: &str) -> Self {
        self.leg(action, date, true, origin, time)
    }

    /// Departure at `time` (`HHMM`) on `date` (`DDMMM`) to `destination`.
    pub fn departure(self, action: ActionCode, date: &str, time: &str, destination: &str) -> Self {
        self.leg(action, date, false, destination, time)
    }

    /// Attach a slot id to the most recently added leg.
    pub fn slot_id(mut self, slot_id: impl Into<String>) -> Self {
        let last = self
            .sections
            .last_mut()
            .and_then(|section| section.flights.last_mut());
        match last {
            Some(flight) => flight.slot_id = Some(slot_id.into()),
            None => self.errors.push(ValidationError {
                field: "slotId".to_string(),
                message: "Slot ID given before any flight".to_string(),
                line: None,
            }),
        }
        self
    }

    fn leg(
        mut self,
        action_code: ActionCode,
        date: &str,
        is_arrival: bool,
        other_airport: &str,
        time: &str,
    ) -> Self {
        let flight = FlightLine {
            action_code,
            identifier: self.aircraft.identifier.clone(),
            date: date.to_string(),
            seat_count: self.aircraft.seat_count,
            aircraft_type: self.aircraft.aircraft_type.clone(),
            is_arrival,
            other_airport: ICAOAirportCode::new(other_airport),
            time: time.to_string(),
            flight_type: self.aircraft.flight_type,
            slot_id: None,
        };
        if let Some(section) = self.sections.last_mut() {
            section.flights.push(flight);
        }
        self
    }

    // ── Footnotes ────────────────────────────────────────────────────

    /// Add an `SI` remark. Empty text is skipped.
    pub fn supplementary(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.footnotes.push(Footnote::supplementary(text));
        }
        self
    }

    /// Add a `GI` remark. Empty text is skipped.
    pub fn general(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.footnotes.push(Footnote::general(text));
        }
        self
    }

    // ── Build ────────────────────────────────────────────────────────

    /// Assemble and validate the message.
    ///
    /// Sections without legs are dropped. The header airport is the first
    /// airport given, and the message type is inferred from the action codes.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found in the assembled message.
    pub fn build(self) -> Result<Message, Vec<ValidationError>> {
        let header = Header {
            identifier_type: self.identifier_type,
            airport: self
                .sections
                .first()
                .map(|s| s.airport.clone())
                .unwrap_or_default(),
        };

        let airport_sections: Vec<AirportSection> = self
            .sections
            .into_iter()
            .filter(|s| !s.flights.is_empty())
            .collect();
        let message_type = classify(&airport_sections);

        let message = Message {
            header,
            airport_sections,
            footnotes: self.footnotes,
            message_type,
        };

        let mut errors = self.errors;
        errors.extend(validate(&message).errors);
        if errors.is_empty() {
            debug!(
                sections = message.airport_sections.len(),
                %message_type,
                "built GCR message"
            );
            Ok(message)
        } else {
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::MessageType;
    use crate::{decode, encode};

    fn aircraft() -> Aircraft {
        Aircraft::new("ABC123", 10, "G159", FlightType::GeneralAviation)
    }

    #[test]
    fn build_arrival_and_departure() {
        let msg = MessageBuilder::new(IdentifierType::Flt, "EDDF", aircraft())
            .arrival(ActionCode::New, "08JUN", "LSZH", "0900")
            .departure(ActionCode::New, "08JUN", "1100", "LSZH")
            .build()
            .unwrap();

        assert_eq!(msg.header.airport.as_str(), "EDDF");
        assert_eq!(msg.message_type, MessageType::Request);
        let flights = &msg.airport_sections[0].flights;
        assert_eq!(flights.len(), 2);
        assert!(flights[0].is_arrival);
        assert_eq!(flights[0].other_airport.as_str(), "LSZH");
        assert!(!flights[1].is_arrival);
        assert_eq!(flights[1].time, "1100");
        assert_eq!(flights[1].identifier, "ABC123");
    }

    #[test]
    fn build_two_airports() {
        let msg = MessageBuilder::new(IdentifierType::Flt, "EDDF", aircraft())
            .departure(ActionCode::New, "30OCT", "0900", "EDDL")
            .airport("EDDL")
            .arrival(ActionCode::New, "30OCT", "EDDF", "1000")
            .build()
            .unwrap();

        assert_eq!(msg.airport_sections.len(), 2);
        assert_eq!(msg.airport_sections[1].airport.as_str(), "EDDL");
        assert_eq!(decode(&encode(&msg)).unwrap(), msg);
    }

    #[test]
    fn slot_id_attaches_to_last_leg() {
        let msg = MessageBuilder::new(IdentifierType::Flt, "EDDF", aircraft())
            .arrival(ActionCode::Refuse, "30OCT", "EDDL", "1000")
            .arrival(ActionCode::Confirm, "30OCT", "EDDL", "1030")
            .slot_id("EDDF3010070001")
            .build()
            .unwrap();

        let flights = &msg.airport_sections[0].flights;
        assert_eq!(flights[0].slot_id, None);
        assert_eq!(flights[1].slot_id.as_deref(), Some("EDDF3010070001"));
        assert_eq!(msg.message_type, MessageType::Reply);
    }

    #[test]
    fn slot_id_before_any_leg_is_an_error() {
        let errors = MessageBuilder::new(IdentifierType::Flt, "EDDF", aircraft())
            .slot_id("EDDF3010070001")
            .arrival(ActionCode::Confirm, "30OCT", "EDDL", "1030")
            .build()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "slotId");
    }

    #[test]
    fn empty_sections_are_dropped() {
        let msg = MessageBuilder::new(IdentifierType::Flt, "EDDF", aircraft())
            .departure(ActionCode::New, "30OCT", "0900", "EDDL")
            .airport("EDDL")
            .build()
            .unwrap();
        assert_eq!(msg.airport_sections.len(), 1);
    }

    #[test]
    fn no_legs_is_an_error() {
        let errors = MessageBuilder::new(IdentifierType::Reg, "EDDF", aircraft())
            .build()
            .unwrap_err();
        assert_eq!(errors[0].field, "airportSections");
    }

    #[test]
    fn invalid_fields_are_all_reported() {
        let errors = MessageBuilder::new(
            IdentifierType::Reg,
            "EDD",
            Aircraft::new("", 1000, "G1", FlightType::GeneralAviation),
        )
        .departure(ActionCode::New, "08JUNE", "7:50", "LOWW")
        .build()
        .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "header.airport",
                "airportSections[0].airport",
                "airportSections[0].flights[0].identifier",
                "airportSections[0].flights[0].date",
                "airportSections[0].flights[0].seatCount",
                "airportSections[0].flights[0].aircraftType",
                "airportSections[0].flights[0].time",
            ]
        );
    }

    #[test]
    fn footnotes_skip_empty_text() {
        let msg = MessageBuilder::new(IdentifierType::Reg, "EDDF", aircraft())
            .departure(ActionCode::New, "08JUN", "0750", "LOWW")
            .supplementary("")
            .general("BRGDS")
            .build()
            .unwrap();
        assert_eq!(msg.footnotes, vec![Footnote::general("BRGDS")]);
    }
}
