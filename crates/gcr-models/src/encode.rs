//! [`Message`] → GCR text.

use std::fmt;

use crate::message::{FlightLine, Footnote, Message};

/// Encode a message in canonical GCR layout.
///
/// The message is not validated first; see [`validate`](crate::validate).
/// Seats are always zero-padded to three digits and slot ids are always
/// written in the ` / ID.<slot>` form. Footnotes whose text spans several
/// lines are written as a bare `SI`/`GI` line followed by the text lines, so
/// [`decode`](crate::decode) reads them back unchanged.
///
/// # Examples
///
/// ```
/// use gcr_models::{decode, encode};
///
/// let msg = decode("GCR\n/FLT\nEDDF\nNABC123 08JUN 010G159 LSZH0900 D\nGI BRGDS").unwrap();
/// assert_eq!(
///     encode(&msg),
///     "GCR\n/FLT\nEDDF\nNABC123 08JUN 010G159 LSZH0900 D\nGI BRGDS"
/// );
/// ```
pub fn encode(message: &Message) -> String {
    let mut lines: Vec<String> = vec![
        "GCR".to_string(),
        format!("/{}", message.header.identifier_type),
    ];

    for section in &message.airport_sections {
        lines.push(section.airport.to_string());
        lines.extend(section.flights.iter().map(encode_flight_line));
    }

    for footnote in &message.footnotes {
        encode_footnote(footnote, &mut lines);
    }

    lines.join("\n")
}

/// One flight line, arrival or departure layout.
pub fn encode_flight_line(flight: &FlightLine) -> String {
    flight.to_string()
}

impl fmt::Display for FlightLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_arrival { "" } else { " " };
        write!(
            f,
            "{}{separator}{} {} {:03}{} ",
            self.action_code, self.identifier, self.date, self.seat_count, self.aircraft_type
        )?;
        if self.is_arrival {
            write!(f, "{}{}", self.other_airport, self.time)?;
        } else {
            write!(f, "{}{}", self.time, self.other_airport)?;
        }
        write!(f, " {}", self.flight_type)?;
        if let Some(slot_id) = &self.slot_id {
            write!(f, " / ID.{slot_id}")?;
        }
        Ok(())
    }
}

fn encode_footnote(footnote: &Footnote, lines: &mut Vec<String>) {
    let token = footnote.kind.as_str();
    if footnote.text.is_empty() {
        lines.push(token.to_string());
    } else if footnote.text.contains('\n') {
        lines.push(token.to_string());
        lines.extend(footnote.text.lines().map(str::to_string));
    } else {
        lines.push(format!("{token} {}", footnote.text));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
