//! Unique-patient-identifier (UPI) derivation.
//!
//! A UPI is a deterministic 12-character identifier derived from a patient's
//! name and birth date. It is never user-supplied.
//!
//! ## Canonical UPI form
//! - Length: 12
//! - Characters 1-3: first three characters of the last name, lower-cased,
//!   right-padded with the filler character `x` when shorter.
//! - Characters 4-6: same for the first name.
//! - Characters 7-12: `YYMMDD` from the birth date, or six filler characters
//!   when the birth date is unknown.
//!
//! Example: `("Smith", "John", 1980-05-03)` derives `smijoh800503`;
//! `("Ng", "Jo", None)` derives `ngxjoxxxxxxx`.
//!
//! Derivation is pure: the same inputs always yield the same UPI. Different
//! patients can collide (twins, common names); collisions are deliberately
//! NOT resolved here. The storage facade enforces uniqueness by rejecting
//! duplicate UPIs on write.

use chrono::NaiveDate;

/// Padding character used for short names and missing birth dates.
pub const FILLER: char = 'x';

/// Canonical UPI length.
pub const UPI_LEN: usize = 12;

/// Error type for UPI operations.
#[derive(Debug, thiserror::Error)]
pub enum UpiError {
    /// An externally supplied identifier did not match the canonical form.
    #[error("Invalid UPI: {0}")]
    InvalidFormat(String),
}

/// Result type for UPI operations.
pub type UpiResult<T> = Result<T, UpiError>;

/// A validated unique patient identifier in canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Upi(String);

impl Upi {
    /// Derives a UPI from name parts and an optional birth date.
    ///
    /// Names are trimmed and lower-cased before the first three characters
    /// are taken; shorter names are right-padded with [`FILLER`]. An absent
    /// birth date yields six filler characters in place of the `YYMMDD`
    /// suffix.
    pub fn derive(last_name: &str, first_name: &str, birth_date: Option<NaiveDate>) -> Self {
        let mut upi = String::with_capacity(UPI_LEN);
        push_name_part(&mut upi, last_name);
        push_name_part(&mut upi, first_name);
        match birth_date {
            Some(date) => upi.push_str(&date.format("%y%m%d").to_string()),
            None => upi.extend(std::iter::repeat(FILLER).take(6)),
        }
        Self(upi)
    }

    /// Validates an externally supplied identifier (from storage or an
    /// import) against the canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`UpiError::InvalidFormat`] when the input is not exactly
    /// [`UPI_LEN`] lowercase alphanumeric characters.
    pub fn parse(input: &str) -> UpiResult<Self> {
        let ok = input.chars().count() == UPI_LEN
            && input
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !ok {
            return Err(UpiError::InvalidFormat(input.to_owned()));
        }
        Ok(Self(input.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Upi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Upi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives a UPI and returns it as a plain string.
///
/// Convenience wrapper over [`Upi::derive`] for callers that only need the
/// string form.
pub fn generate_upi(last_name: &str, first_name: &str, birth_date: Option<NaiveDate>) -> String {
    Upi::derive(last_name, first_name, birth_date).0
}

/// Appends up to three lower-cased characters of `name`, padding to three
/// with the filler.
fn push_name_part(out: &mut String, name: &str) {
    let mut count = 0;
    for c in name.trim().chars().flat_map(char::to_lowercase) {
        if count == 3 {
            break;
        }
        out.push(c);
        count += 1;
    }
    for _ in count..3 {
        out.push(FILLER);
    }
}
