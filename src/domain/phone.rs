//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Characters a user-entered number may contain: digits, keypad letters,
/// a plus sign, dial symbols and common separators.
/// Fewest trailing digits two differently formatted numbers must share to
/// be treated as the same line.
const MIN_MATCH_DIGITS: usize = 7;

static DIALABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z+*#().,;/\-\s]+$").expect("Failed to compile dialable regex")
});

/// A phone number in canonical dialable form.
///
/// Construction normalizes the raw input the way the platform dialer does:
/// digits are kept, a `+` is kept only when it leads,
/// keypad letters become their digit, and every other separator is dropped.
///
/// # Example
///
/// ```
/// use contacts_gateway::domain::PhoneNumber;
///
/// let phone = PhoneNumber::normalize("+1 (555) 010-0111").unwrap();
/// assert_eq!(phone.as_str(), "+15550100111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a raw phone number string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input contains characters
    /// that never appear in a dialable number, or if nothing dialable remains.
    pub fn normalize(raw: &str) -> Result<Self, ValidationError> {
        if !DIALABLE.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        let mut normalized = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_ascii_digit() {
                normalized.push(c);
            } else if c == '+' && normalized.is_empty() {
                normalized.push('+');
            } else if let Some(digit) = Self::keypad_digit(c) {
                normalized.push(digit);
            }
        }

        if !normalized.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Map a keypad letter to the digit printed under it.
    fn keypad_digit(c: char) -> Option<char> {
        let digit = match c.to_ascii_uppercase() {
            'A'..='C' => '2',
            'D'..='F' => '3',
            'G'..='I' => '4',
            'J'..='L' => '5',
            'M'..='O' => '6',
            'P'..='S' => '7',
            'T'..='V' => '8',
            'W'..='Z' => '9',
            _ => return None,
        };
        Some(digit)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no leading plus).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether two numbers reach the same line.
    ///
    /// Numbers match when their digits are equal, or when the shorter one has
    /// at least seven digits and the longer one ends with it. This lets an
    /// incoming `+15550100007` find a contact saved as `(555) 010-0007`.
    pub fn matches_loosely(&self, other: &PhoneNumber) -> bool {
        let ours = self.digits_only();
        let theirs = other.digits_only();
        if ours == theirs {
            return true;
        }

        let (shorter, longer) = if ours.len() <= theirs.len() {
            (&ours, &theirs)
        } else {
            (&theirs, &ours)
        };
        shorter.len() >= MIN_MATCH_DIGITS && longer.ends_with(shorter.as_str())
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::normalize(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
