//! Semantic checks over an assembled [`Message`].
//!
//! Independent of decoding: a decoded message always passes, but a message
//! edited or built by hand may not. Every violation is reported, each tagged
//! with the path of the offending field.

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::message::{FlightLine, Message};
use crate::shape;

/// One violated rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted / indexed path, e.g. `airportSections[0].flights[1].time`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
    /// Source line, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            line: None,
        }
    }
}

/// Outcome of [`validate`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    /// Every violation, in field order.
    pub errors: Vec<ValidationError>,
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

const ICAO_MESSAGE: &str = "Airport must be a 4-letter ICAO code";

/// Check every field of `message`.
///
/// Action code, flight type and identifier type are closed enums and cannot
/// hold an out-of-set value, so only the free-form fields are checked here.
/// Dates must have the `DDMMM` shape and name one of the twelve months.
///
/// # Examples
///
/// ```
/// use gcr_models::{decode, validate, ICAOAirportCode};
///
/// let mut msg = decode("GCR\n/FLT\nEDDF\nNABC123 08JUN 010G159 LSZH0900 D").unwrap();
/// assert!(validate(&msg).valid);
///
/// msg.header.airport = ICAOAirportCode::new("XX");
/// let result = validate(&msg);
/// assert!(!result.valid);
/// assert_eq!(result.errors[0].field, "header.airport");
/// ```
pub fn validate(message: &Message) -> ValidationResult {
    let mut errors = Vec::new();

    if !message.header.airport.is_valid() {
        errors.push(ValidationError::new("header.airport", ICAO_MESSAGE));
    }

    if message.airport_sections.is_empty() {
        errors.push(ValidationError::new(
            "airportSections",
            "At least one airport section is required",
        ));
    }

    for (i, section) in message.airport_sections.iter().enumerate() {
        let prefix = format!("airportSections[{i}]");

        if !section.airport.is_valid() {
            errors.push(ValidationError::new(format!("{prefix}.airport"), ICAO_MESSAGE));
        }
        if section.flights.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.flights"),
                "At least one flight line is required",
            ));
        }

        for (j, flight) in section.flights.iter().enumerate() {
            validate_flight(flight, &format!("{prefix}.flights[{j}]"), &mut errors);
        }
    }

    errors.into()
}

fn validate_flight(flight: &FlightLine, prefix: &str, errors: &mut Vec<ValidationError>) {
    let mut check = |ok: bool, field: &str, message: &str| {
        if !ok {
            errors.push(ValidationError::new(format!("{prefix}.{field}"), message));
        }
    };

    check(
        !flight.identifier.is_empty(),
        "identifier",
        "Identifier is required",
    );
    if shape::is_ddmmm(&flight.date) {
        check(
            codes::is_month(&flight.date[2..]),
            "date",
            "Date must use a three-letter month (JAN-DEC)",
        );
    } else {
        check(false, "date", "Date must be in DDMMM format (e.g., 08JUN)");
    }
    check(flight.seat_count <= 999, "seatCount", "Seat count must be 0-999");
    check(
        shape::is_aircraft_type(&flight.aircraft_type),
        "aircraftType",
        "Aircraft type must be 3-4 alphanumeric characters",
    );
    check(flight.other_airport.is_valid(), "otherAirport", ICAO_MESSAGE);
    check(
        shape::is_hhmm(&flight.time),
        "time",
        "Time must be in HHMM format",
    );
    if let Some(slot_id) = &flight.slot_id {
        check(
            !slot_id.is_empty() && shape::is_upper_alnum(slot_id),
            "slotId",
            "Slot ID must be uppercase letters and digits",
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::ICAOAirportCode;
    use crate::decode;

    const TWO_AIRPORTS: &str = "GCR\n/FLT\nEDDF\nN ABC123 30OCT 010G159 0900EDDL D\nNABC456 30OCT 010G159 EDDL1100 D\nEDDL\nNABC123 30OCT 010G159 EDDF1000 D";

    fn fields(result: &ValidationResult) -> Vec<&str> {
        result.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn decoded_message_is_valid() {
        let msg = decode(TWO_AIRPORTS).unwrap();
        let result = validate(&msg);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn bad_header_airport_is_single_error() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.header.airport = ICAOAirportCode::new("XX");
        let result = validate(&msg);
        assert!(!result.valid);
        assert_eq!(fields(&result), vec!["header.airport"]);
    }

    #[test]
    fn bad_time_is_tagged_with_path() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.airport_sections[0].flights[1].time = "25:00".into();
        let result = validate(&msg);
        assert_eq!(fields(&result), vec!["airportSections[0].flights[1].time"]);
        assert!(result.errors[0].message.contains("HHMM"));
    }

    #[test]
    fn validate_is_repeatable() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.airport_sections[1].flights[0].aircraft_type = "B".into();
        assert_eq!(validate(&msg), validate(&msg));
    }

    #[test]
    fn each_mutation_adds_one_error() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.airport_sections[0].flights[0].identifier.clear();
        assert_eq!(validate(&msg).errors.len(), 1);

        msg.airport_sections[1].flights[0].seat_count = 1000;
        let result = validate(&msg);
        assert_eq!(
            fields(&result),
            vec![
                "airportSections[0].flights[0].identifier",
                "airportSections[1].flights[0].seatCount",
            ]
        );

        msg.airport_sections[1].airport = ICAOAirportCode::new("eddl");
        let result = validate(&msg);
        assert_eq!(result.errors.len(), 3);
        assert!(fields(&result).contains(&"airportSections[1].airport"));
        assert!(fields(&result).contains(&"airportSections[0].flights[0].identifier"));
    }

    #[test]
    fn date_shape_and_month() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.airport_sections[0].flights[0].date = "8JUN".into();
        msg.airport_sections[0].flights[1].date = "08XYZ".into();
        let result = validate(&msg);
        assert_eq!(
            fields(&result),
            vec![
                "airportSections[0].flights[0].date",
                "airportSections[0].flights[1].date",
            ]
        );
        assert!(result.errors[0].message.contains("DDMMM"));
        assert!(result.errors[1].message.contains("month"));
    }

    #[test]
    fn other_airport_and_slot_id() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        let flight = &mut msg.airport_sections[0].flights[0];
        flight.other_airport = ICAOAirportCode::new("ED1L");
        flight.slot_id = Some(String::new());
        let result = validate(&msg);
        assert_eq!(
            fields(&result),
            vec![
                "airportSections[0].flights[0].otherAirport",
                "airportSections[0].flights[0].slotId",
            ]
        );
    }

    #[test]
    fn empty_message_structure() {
        let mut msg = decode(TWO_AIRPORTS).unwrap();
        msg.airport_sections[1].flights.clear();
        assert_eq!(fields(&validate(&msg)), vec!["airportSections[1].flights"]);

        msg.airport_sections.clear();
        assert_eq!(fields(&validate(&msg)), vec!["airportSections"]);
    }

    #[test]
    fn result_serialises_without_absent_lines() {
        let result = ValidationResult::from(vec![ValidationError::new("header.airport", ICAO_MESSAGE)]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["field"], "header.airport");
        assert!(json["errors"][0].get("line").is_none());
    }
}
