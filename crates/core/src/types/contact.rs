//! Contact field types for the checkout form.
//!
//! Indian phone numbers and PIN codes have fixed widths, so both are
//! validated structurally rather than with a character-class sweep at each
//! use site.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input is not exactly 10 ASCII digits.
    #[error("phone number must be exactly 10 digits")]
    NotTenDigits,
}

/// A 10-digit phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Required number of digits.
    pub const DIGITS: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::NotTenDigits`] unless the input is exactly
    /// ten ASCII digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.len() == Self::DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(PhoneError::NotTenDigits)
        }
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing a [`Pincode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PincodeError {
    /// The input is not exactly 6 ASCII digits.
    #[error("PIN code must be exactly 6 digits")]
    NotSixDigits,
}

/// A 6-digit postal PIN code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    /// Required number of digits.
    pub const DIGITS: usize = 6;

    /// Parse a `Pincode` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PincodeError::NotSixDigits`] unless the input is exactly
    /// six ASCII digits.
    pub fn parse(s: &str) -> Result<Self, PincodeError> {
        if s.len() == Self::DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(PincodeError::NotSixDigits)
        }
    }

    /// Returns the PIN code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::parse("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_phone_wrong_length() {
        assert!(Phone::parse("12345").is_err());
        assert!(Phone::parse("98765432101").is_err());
        assert!(Phone::parse("").is_err());
    }

    #[test]
    fn test_phone_non_digits() {
        assert!(Phone::parse("98765-4321").is_err());
        assert!(Phone::parse("98765４3210").is_err()); // full-width digit
    }

    #[test]
    fn test_pincode_valid() {
        let pin = Pincode::parse("641001").unwrap();
        assert_eq!(pin.as_str(), "641001");
    }

    #[test]
    fn test_pincode_invalid() {
        assert!(Pincode::parse("64100").is_err());
        assert!(Pincode::parse("6410011").is_err());
        assert!(Pincode::parse("64100a").is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let phone = Phone::parse("9876543210").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"9876543210\"");
    }
}
