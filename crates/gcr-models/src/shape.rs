//! Fixed-width token shapes shared by the decoder and the validator.
//!
//! Only ASCII upper-case letters and digits are accepted; lower-case input is
//! rejected rather than folded.

/// Exactly 4 uppercase ASCII letters.
pub(crate) fn is_icao(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Exactly `n` ASCII digits.
pub(crate) fn is_digits(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|b| b.is_ascii_digit())
}

/// `HHMM`; the clock value itself is not checked.
pub(crate) fn is_hhmm(s: &str) -> bool {
    is_digits(s, 4)
}

/// `DDMMM`: two digits then three uppercase letters.
pub(crate) fn is_ddmmm(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[2..].iter().all(u8::is_ascii_uppercase)
}

/// Uppercase letters and digits only.
pub(crate) fn is_upper_alnum(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// 3 or 4 uppercase alphanumerics.
pub(crate) fn is_aircraft_type(s: &str) -> bool {
    (3..=4).contains(&s.len()) && is_upper_alnum(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icao_shape() {
        assert!(is_icao("EDDF"));
        assert!(!is_icao("eddf"));
        assert!(!is_icao("EDD"));
        assert!(!is_icao("ED1F"));
    }

    #[test]
    fn date_shape() {
        assert!(is_ddmmm("08JUN"));
        assert!(is_ddmmm("99XYZ"));
        assert!(!is_ddmmm("8JUN"));
        assert!(!is_ddmmm("08jun"));
        assert!(!is_ddmmm("08JUNE"));
        // multi-byte input must not panic on slicing
        assert!(!is_ddmmm("0é8J"));
    }

    #[test]
    fn time_shape() {
        assert!(is_hhmm("0750"));
        assert!(is_hhmm("9999"));
        assert!(!is_hhmm("25:00"));
        assert!(!is_hhmm("075"));
    }

    #[test]
    fn aircraft_shape() {
        assert!(is_aircraft_type("G159"));
        assert!(is_aircraft_type("TBM"));
        assert!(!is_aircraft_type("C5"));
        assert!(!is_aircraft_type("B7478"));
        assert!(!is_aircraft_type("g159"));
    }
}
