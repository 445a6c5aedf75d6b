//! Error types for the `gcr-models` crate.
//!
//! Fallible constructors of model newtypes return [`ModelError`]. The decoder
//! returns [`ParseError`], which is terminal: a failed decode never yields a
//! partial message.
//!
//! Validation problems are not errors in this sense; they are collected as
//! data in a [`ValidationResult`](crate::ValidationResult).

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// An ICAO airport code was not exactly 4 uppercase ASCII letters.
    #[error("invalid ICAO airport code \"{value}\": {reason}")]
    InvalidICAOCode {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A single-letter code did not name a known variant.
    #[error("invalid {kind} \"{value}\": expected one of {expected}")]
    InvalidCode {
        /// What kind of code was parsed (e.g. `"action code"`).
        kind: &'static str,
        /// The value that failed validation.
        value: String,
        /// The accepted values.
        expected: &'static str,
    },
}

/// Which layout a flight line was parsed with.
///
/// Arrival lines carry `<origin><time>`, departure lines `<time><destination>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Inbound to the coordinated airport.
    Arrival,
    /// Outbound from the coordinated airport.
    Departure,
}

/// Errors returned by [`decode`](crate::decode).
///
/// Structural errors concern the message frame and carry at most a coarse
/// line number. Format errors concern a single flight line and always carry
/// its 1-based line number (counted over the non-blank lines of the input).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Fewer than three non-blank lines.
    #[error("invalid GCR message: too few lines")]
    TooFewLines,

    /// The first line is not `GCR`.
    #[error("invalid GCR message: must start with GCR")]
    MissingGcrHeader {
        /// Always line 1.
        line: usize,
        /// The line found instead.
        value: String,
    },

    /// The second line is neither `/FLT` nor `/REG`.
    #[error("invalid identifier type: must be /FLT or /REG")]
    InvalidIdentifierType {
        /// Always line 2.
        line: usize,
        /// The line found instead.
        value: String,
    },

    /// The body contained no airport section with at least one flight.
    #[error("no valid flight lines found")]
    NoFlightLines,

    /// A flight line did not start with one of the nine action codes.
    #[error("invalid action code: {code}")]
    InvalidActionCode {
        /// 1-based line number.
        line: usize,
        /// The leading character.
        code: char,
    },

    /// A flight line had fewer than four whitespace-separated tokens.
    #[error("invalid flight line format: too few parts")]
    TooFewParts {
        /// 1-based line number.
        line: usize,
        /// The line after the action code was removed.
        value: String,
    },

    /// The date token is not two digits followed by three letters.
    #[error("invalid date format: {value}")]
    InvalidDate {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// The date token names an unknown month.
    #[error("invalid month: {value}")]
    InvalidMonth {
        /// 1-based line number.
        line: usize,
        /// The three-letter month.
        value: String,
    },

    /// The seats/aircraft token is not `SSS` + 3–4 alphanumerics.
    #[error("invalid seat/aircraft format: {value}")]
    InvalidSeatAircraft {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// The routing/time token does not match the line's direction.
    #[error("invalid {direction} routing/time format: {value}")]
    InvalidRouting {
        /// 1-based line number.
        line: usize,
        /// Layout expected for this line.
        direction: Direction,
        /// The offending token.
        value: String,
    },

    /// The flight type token is missing or not one of `D`, `I`, `N`.
    #[error("invalid flight type: {value}")]
    InvalidFlightType {
        /// 1-based line number.
        line: usize,
        /// The offending token, empty when missing.
        value: String,
    },
}

impl ParseError {
    /// The 1-based line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::TooFewLines | Self::NoFlightLines => None,
            Self::MissingGcrHeader { line, .. }
            | Self::InvalidIdentifierType { line, .. }
            | Self::InvalidActionCode { line, .. }
            | Self::TooFewParts { line, .. }
            | Self::InvalidDate { line, .. }
            | Self::InvalidMonth { line, .. }
            | Self::InvalidSeatAircraft { line, .. }
            | Self::InvalidRouting { line, .. }
            | Self::InvalidFlightType { line, .. } => Some(*line),
        }
    }

    /// The offending input, if the error captured one.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::TooFewLines | Self::NoFlightLines | Self::InvalidActionCode { .. } => None,
            Self::MissingGcrHeader { value, .. }
            | Self::InvalidIdentifierType { value, .. }
            | Self::TooFewParts { value, .. }
            | Self::InvalidDate { value, .. }
            | Self::InvalidMonth { value, .. }
            | Self::InvalidSeatAircraft { value, .. }
            | Self::InvalidRouting { value, .. }
            | Self::InvalidFlightType { value, .. } => Some(value),
        }
    }

    /// `true` for errors about the message frame rather than a flight line.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::TooFewLines
                | Self::MissingGcrHeader { .. }
                | Self::InvalidIdentifierType { .. }
                | Self::NoFlightLines
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_icao() {
        let err = ModelError::InvalidICAOCode {
            value: "XX".into(),
            reason: "must be exactly 4 uppercase ASCII letters".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ICAO airport code \"XX\": must be exactly 4 uppercase ASCII letters"
        );
    }

    #[test]
    fn error_display_code() {
        let err = ModelError::InvalidCode {
            kind: "flight type",
            value: "Q".into(),
            expected: "D, I or N",
        };
        assert_eq!(err.to_string(), "invalid flight type \"Q\": expected one of D, I or N");
    }

    #[test]
    fn routing_error_names_direction() {
        let err = ParseError::InvalidRouting {
            line: 4,
            direction: Direction::Departure,
            value: "LOWW0750".into(),
        };
        assert_eq!(err.to_string(), "invalid departure routing/time format: LOWW0750");
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.details(), Some("LOWW0750"));
    }

    #[test]
    fn structural_errors_have_coarse_lines() {
        assert_eq!(ParseError::TooFewLines.line(), None);
        assert_eq!(ParseError::NoFlightLines.line(), None);
        let err = ParseError::MissingGcrHeader {
            line: 1,
            value: "/FLT".into(),
        };
        assert!(err.is_structural());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn format_errors_are_not_structural() {
        let err = ParseError::InvalidActionCode { line: 3, code: 'Z' };
        assert!(!err.is_structural());
        assert_eq!(err.to_string(), "invalid action code: Z");
        assert_eq!(err.details(), None);
    }
}
