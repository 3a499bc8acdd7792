use std::str::FromStr;

/// Outcome of a guarded numeric conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SafeNumber<T> {
    /// The field was strictly numeric and converted
    Parsed(T),
    /// The field was absent or malformed; carries the caller's default
    Defaulted(T),
}

impl<T: Copy> SafeNumber<T> {
    #[must_use]
    pub fn value(self) -> T {
        match self {
            SafeNumber::Parsed(v) | SafeNumber::Defaulted(v) => v,
        }
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        matches!(self, SafeNumber::Defaulted(_))
    }
}

/// Convert a report field to a number, or fall back to `default`.
///
/// The field must be non-empty and consist only of ASCII digits. Signs,
/// decimal points and whitespace are rejected, matching the digit-only
/// groups of the METAR grammar.
pub fn safe_number<T: FromStr + Copy>(raw: Option<&str>, default: T) -> SafeNumber<T> {
    let Some(raw) = raw else {
        return SafeNumber::Defaulted(default);
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!("Field {:?} is not strictly numeric, using default", raw);
        return SafeNumber::Defaulted(default);
    }

    match raw.parse::<T>() {
        Ok(value) => SafeNumber::Parsed(value),
        Err(_) => {
            tracing::debug!("Field {:?} out of range, using default", raw);
            SafeNumber::Defaulted(default)
        }
    }
}
