//! Four-letter ICAO designators as they appear in GCR messages.
//!
//! A code shows up in three places: the header airport, the line that opens
//! an airport section, and the routing token of every flight line
//! (`LSZH0900` for an arrival, `0750LOWW` for a departure).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shape;

/// An ICAO airport designator such as `EDDF` or `LOWW`.
///
/// The decoder only ever produces well-formed codes. Hand-assembled messages
/// go through [`ICAOAirportCode::new`], which accepts anything, and
/// [`validate`](crate::validate) flags the bad ones afterwards. Parse with
/// [`FromStr`] or [`TryFrom`] to reject them up front instead.
///
/// # Examples
///
/// ```
/// use gcr_models::{decode, ICAOAirportCode};
///
/// let msg = decode("GCR\n/REG\nEDDF\nN HBIEV 08JUN 010G159 0750LOWW D").unwrap();
/// let destination = &msg.airport_sections[0].flights[0].other_airport;
/// assert_eq!(*destination, "LOWW".parse::<ICAOAirportCode>().unwrap());
///
/// let err = "eddf".parse::<ICAOAirportCode>().unwrap_err();
/// assert!(err.to_string().contains("uppercase"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ICAOAirportCode(String);

impl ICAOAirportCode {
    /// Wrap `code` as-is. Call [`is_valid`](Self::is_valid) or run the
    /// validator before relying on its shape.
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// The designator text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code could open an airport section.
    pub fn is_valid(&self) -> bool {
        shape::is_icao(&self.0)
    }

    fn check(code: &str) -> Result<(), ModelError> {
        let reason = if code.len() != 4 {
            format!("expected 4 letters, got {}", code.chars().count())
        } else if !shape::is_icao(code) {
            "only uppercase ASCII letters are allowed".to_string()
        } else {
            return Ok(());
        };
        Err(ModelError::InvalidICAOCode {
            value: code.to_string(),
            reason,
        })
    }
}

impl fmt::Display for ICAOAirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ICAOAirportCode {
    type Err = ModelError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::check(code)?;
        Ok(Self::new(code))
    }
}

impl TryFrom<&str> for ICAOAirportCode {
    type Error = ModelError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl TryFrom<String> for ICAOAirportCode {
    type Error = ModelError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::check(&code)?;
        Ok(Self(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;

    #[test]
    fn decoded_airports_are_valid() {
        let msg = decode(
            "GCR\n/FLT\nEDDF\nN ABC123 30OCT 010G159 0900EDDL D\nEDDL\nNABC123 30OCT 010G159 EDDF1000 D",
        )
        .unwrap();
        assert!(msg.header.airport.is_valid());
        for section in &msg.airport_sections {
            assert!(section.airport.is_valid());
            assert!(section.flights.iter().all(|f| f.other_airport.is_valid()));
        }
        assert_eq!(msg.airport_sections[1].flights[0].other_airport, msg.header.airport);
    }

    #[test]
    fn hand_edited_header_is_kept_but_invalid() {
        let code = ICAOAirportCode::new("EDF");
        assert_eq!(code.to_string(), "EDF");
        assert!(!code.is_valid());
        assert!(!ICAOAirportCode::default().is_valid());
    }

    #[test]
    fn parse_reports_length() {
        let err = ICAOAirportCode::try_from("EDDFX").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidICAOCode {
                value: "EDDFX".into(),
                reason: "expected 4 letters, got 5".into(),
            }
        );
    }

    #[test]
    fn parse_reports_characters() {
        for code in ["eddf", "ED1F", "ED F"] {
            let err = ICAOAirportCode::try_from(code.to_string()).unwrap_err();
            assert!(err.to_string().contains("uppercase ASCII letters"), "{code}");
        }
    }

    #[test]
    fn routing_token_airport_round_trips_through_json() {
        let code: ICAOAirportCode = "EPWR".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"EPWR\"");
        assert_eq!(serde_json::from_str::<ICAOAirportCode>(&json).unwrap(), code);
    }
}
