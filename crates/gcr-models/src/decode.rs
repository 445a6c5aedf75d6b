//! GCR text → [`Message`].
//!
//! The decoder walks the non-blank lines once, top to bottom. After the two
//! header lines every line is, in order of precedence, an inline footnote
//! (`SI text`), the start of a block footnote (`SI` alone), an airport code,
//! or a flight line. The first malformed flight line aborts the decode.

use tracing::{debug, trace, warn};

use crate::airport::ICAOAirportCode;
use crate::codes::{self, ActionCode, FlightType, FootnoteKind, IdentifierType};
use crate::error::{Direction, ParseError};
use crate::message::{classify, AirportSection, FlightLine, Footnote, Header, Message};
use crate::shape;

/// Decode a GCR message.
///
/// Lines may end in LF or CRLF; surrounding whitespace and blank lines are
/// ignored. Error line numbers count non-blank lines only.
///
/// # Errors
///
/// Returns a structural [`ParseError`] when the header is missing or wrong or
/// no airport section holds a flight, and a format error carrying the line
/// number for the first flight line that does not parse.
///
/// # Examples
///
/// ```
/// use gcr_models::{decode, MessageType};
///
/// let msg = decode("GCR\n/REG\nEDDF\nN HBIEV 08JUN 010G159 0750LOWW D").unwrap();
/// let flight = &msg.airport_sections[0].flights[0];
/// assert!(!flight.is_arrival);
/// assert_eq!(flight.other_airport.as_str(), "LOWW");
/// assert_eq!(flight.seat_count, 10);
/// assert_eq!(msg.message_type, MessageType::Request);
/// ```
pub fn decode(text: &str) -> Result<Message, ParseError> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(ParseError::TooFewLines);
    }

    if lines[0] != "GCR" {
        return Err(ParseError::MissingGcrHeader {
            line: 1,
            value: lines[0].to_string(),
        });
    }

    let identifier_type =
        IdentifierType::from_header_line(lines[1]).ok_or_else(|| ParseError::InvalidIdentifierType {
            line: 2,
            value: lines[1].to_string(),
        })?;

    let mut header_airport: Option<ICAOAirportCode> = None;
    let mut sections: Vec<AirportSection> = Vec::new();
    let mut footnotes: Vec<Footnote> = Vec::new();
    let mut current = Section::default();

    let mut index = 2;
    while index < lines.len() {
        let line = lines[index];

        if let Some(footnote) = inline_footnote(line) {
            trace!(line = index + 1, kind = %footnote.kind, "inline footnote");
            footnotes.push(footnote);
            index += 1;
            continue;
        }

        if let Some(kind) = block_footnote_start(line) {
            index += 1;
            let start = index;
            while index < lines.len() && !is_footnote_line(lines[index]) {
                index += 1;
            }
            trace!(line = start, lines = index - start, %kind, "block footnote");
            footnotes.push(Footnote {
                kind,
                text: lines[start..index].join("\n"),
            });
            continue;
        }

        if shape::is_icao(line) {
            let airport = ICAOAirportCode::new(line);
            if header_airport.is_none() {
                header_airport = Some(airport.clone());
            }
            current.flush_into(&mut sections);
            current = Section {
                airport: Some(airport),
                flights: Vec::new(),
            };
            index += 1;
            continue;
        }

        let flight = parse_flight_line(line, index + 1)?;
        current.flights.push(flight);
        index += 1;
    }
    current.flush_into(&mut sections);

    if sections.is_empty() {
        return Err(ParseError::NoFlightLines);
    }

    let message_type = classify(&sections);
    debug!(
        sections = sections.len(),
        footnotes = footnotes.len(),
        %message_type,
        "decoded GCR message"
    );

    Ok(Message {
        header: Header {
            identifier_type,
            airport: header_airport.unwrap_or_default(),
        },
        airport_sections: sections,
        footnotes,
        message_type,
    })
}

/// Flights collected since the last airport code line.
#[derive(Default)]
struct Section {
    airport: Option<ICAOAirportCode>,
    flights: Vec<FlightLine>,
}

impl Section {
    /// Move the section into `sections` if it is named and holds a flight.
    fn flush_into(&mut self, sections: &mut Vec<AirportSection>) {
        let flights = std::mem::take(&mut self.flights);
        match self.airport.take() {
            Some(airport) if !flights.is_empty() => {
                debug!(%airport, flights = flights.len(), "airport section closed");
                sections.push(AirportSection { airport, flights });
            }
            Some(airport) => {
                debug!(%airport, "dropping airport section without flights");
            }
            None if !flights.is_empty() => {
                warn!(
                    flights = flights.len(),
                    "dropping flight lines that precede any airport code"
                );
            }
            None => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Footnotes
// ---------------------------------------------------------------------------

fn footnote_kind(token: &str) -> Option<FootnoteKind> {
    match token {
        "SI" => Some(FootnoteKind::Supplementary),
        "GI" => Some(FootnoteKind::General),
        _ => None,
    }
}

/// `SI <text>` or `GI <text>`.
fn inline_footnote(line: &str) -> Option<Footnote> {
    let (token, text) = (line.get(..2)?, line.get(2..)?);
    let kind = footnote_kind(token)?;
    let text = text.strip_prefix(' ')?;
    Some(Footnote {
        kind,
        text: text.trim().to_string(),
    })
}

/// A bare `SI` or `GI` line.
fn block_footnote_start(line: &str) -> Option<FootnoteKind> {
    footnote_kind(line)
}

/// Either footnote form; ends a block footnote.
fn is_footnote_line(line: &str) -> bool {
    block_footnote_start(line).is_some() || inline_footnote(line).is_some()
}

// ---------------------------------------------------------------------------
// Flight lines
// ---------------------------------------------------------------------------

/// Parse one flight line. `line_no` is 1-based.
fn parse_flight_line(line: &str, line_no: usize) -> Result<FlightLine, ParseError> {
    let first = line.chars().next().unwrap_or(' ');
    let action_code = ActionCode::from_char(first).ok_or(ParseError::InvalidActionCode {
        line: line_no,
        code: first,
    })?;

    // Arrivals put the identifier right after the action code.
    let is_arrival = line.as_bytes().get(1) != Some(&b' ');

    let (main, slot_id) = match split_slot_id(line) {
        Some((main, slot)) => (main, Some(slot.to_string())),
        None => (line, None),
    };

    let rest = main.get(if is_arrival { 1 } else { 2 }..).unwrap_or("");

    let parts = split_fields(rest);
    if parts.len() < 4 {
        return Err(ParseError::TooFewParts {
            line: line_no,
            value: rest.to_string(),
        });
    }

    let identifier = parts[0].to_string();

    let date = parts[1];
    if !shape::is_ddmmm(date) {
        return Err(ParseError::InvalidDate {
            line: line_no,
            value: date.to_string(),
        });
    }
    let month = &date[2..];
    if !codes::is_month(month) {
        return Err(ParseError::InvalidMonth {
            line: line_no,
            value: month.to_string(),
        });
    }

    let (seat_count, aircraft_type) =
        split_seats_aircraft(parts[2]).ok_or_else(|| ParseError::InvalidSeatAircraft {
            line: line_no,
            value: parts[2].to_string(),
        })?;

    let (other_airport, time) = split_routing(parts[3], is_arrival).ok_or_else(|| {
        ParseError::InvalidRouting {
            line: line_no,
            direction: if is_arrival {
                Direction::Arrival
            } else {
                Direction::Departure
            },
            value: parts[3].to_string(),
        }
    })?;

    // A slash left over from `D/ ID.…` sticks to the flight type.
    let flight_type_token = parts.get(4).copied().unwrap_or("");
    let flight_type_token = flight_type_token
        .strip_suffix('/')
        .unwrap_or(flight_type_token);
    let flight_type =
        FlightType::from_code(flight_type_token).ok_or_else(|| ParseError::InvalidFlightType {
            line: line_no,
            value: flight_type_token.to_string(),
        })?;

    Ok(FlightLine {
        action_code,
        identifier,
        date: date.to_string(),
        seat_count,
        aircraft_type: aircraft_type.to_string(),
        is_arrival,
        other_airport: ICAOAirportCode::new(other_airport),
        time: time.to_string(),
        flight_type,
        slot_id,
    })
}

/// Split on whitespace runs. Leading whitespace yields an empty first field,
/// so a doubled separator after the action code shifts every field by one.
fn split_fields(rest: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    if rest.starts_with(char::is_whitespace) {
        fields.push("");
    }
    fields.extend(rest.split_whitespace());
    fields
}

/// Split off a trailing slot id suffix.
///
/// Matches `[ws] / [ws] ID[.]<A-Z0-9>+[/]` at the end of the line. Returns the
/// trimmed line before the suffix and the slot id. When several slashes could
/// start the suffix the leftmost one wins.
fn split_slot_id(line: &str) -> Option<(&str, &str)> {
    line.match_indices('/').find_map(|(slash, _)| {
        let after = line[slash + 1..].trim_start();
        let after = after.strip_prefix("ID")?;
        let after = after.strip_prefix('.').unwrap_or(after);
        let slot = after.strip_suffix('/').unwrap_or(after);
        (!slot.is_empty() && shape::is_upper_alnum(slot)).then_some((line[..slash].trim(), slot))
    })
}

/// `SSS` + aircraft type, e.g. `010G159`.
fn split_seats_aircraft(token: &str) -> Option<(u16, &str)> {
    let seats = token.get(..3)?;
    let aircraft = token.get(3..)?;
    if !shape::is_digits(seats, 3) || !shape::is_aircraft_type(aircraft) {
        return None;
    }
    Some((seats.parse().ok()?, aircraft))
}

/// Arrival `AAAAHHMM` or departure `HHMMAAAA`; returns `(airport, time)`.
fn split_routing(token: &str, is_arrival: bool) -> Option<(&str, &str)> {
    let (head, tail) = (token.get(..4)?, token.get(4..)?);
    let (airport, time) = if is_arrival { (head, tail) } else { (tail, head) };
    (shape::is_icao(airport) && shape::is_hhmm(time)).then_some((airport, time))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
