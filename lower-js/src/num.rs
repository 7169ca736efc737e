use core::hash::Hash;
use core::hash::Hasher;
use serde::Serialize;
use serde::Serializer;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

// This provides Eq for f64.
#[derive(Copy, Clone, Debug)]
pub struct JsNumber(pub f64);

impl JsNumber {
  /// Parses the source text of a numeric literal.
  ///
  /// Handles decimal (with fraction and exponent), `0x`/`0o`/`0b` prefixes,
  /// legacy octal (`017`), and `_` separators. Returns `None` for malformed text.
  pub fn from_literal(raw: &str) -> Option<JsNumber> {
    let clean = raw.replace('_', "");
    if clean.is_empty() {
      return None;
    };
    let bytes = clean.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
      let radix = match bytes[1] {
        b'x' | b'X' => Some(16),
        b'o' | b'O' => Some(8),
        b'b' | b'B' => Some(2),
        _ => None,
      };
      if let Some(radix) = radix {
        return parse_radix(&clean[2..], radix);
      };
    };
    if bytes.len() > 1
      && bytes[0] == b'0'
      && bytes.iter().all(|c| c.is_ascii_digit())
    {
      // Legacy octal only if every digit is octal; `089` is decimal.
      if bytes.iter().all(|c| (b'0'..=b'7').contains(c)) {
        return parse_radix(&clean[1..], 8);
      };
    };
    if !bytes
      .iter()
      .all(|c| c.is_ascii_digit() || matches!(c, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
      return None;
    };
    clean.parse::<f64>().ok().map(JsNumber)
  }
}

fn parse_radix(digits: &str, radix: u32) -> Option<JsNumber> {
  if digits.is_empty() {
    return None;
  };
  let mut value = 0f64;
  for c in digits.chars() {
    let d = c.to_digit(radix)?;
    value = value * radix as f64 + d as f64;
  }
  Some(JsNumber(value))
}

impl Display for JsNumber {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl PartialEq for JsNumber {
  fn eq(&self, other: &Self) -> bool {
    if self.0.is_nan() {
      return other.0.is_nan();
    };
    self.0.eq(&other.0)
  }
}

impl Eq for JsNumber {}

impl Ord for JsNumber {
  fn cmp(&self, other: &Self) -> Ordering {
    // Only NaNs cannot be compared, and we treat them as equal.
    self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
  }
}

impl PartialOrd for JsNumber {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Hash for JsNumber {
  fn hash<H: Hasher>(&self, state: &mut H) {
    if !self.0.is_nan() {
      self.0.to_bits().hash(state);
    };
  }
}

impl Serialize for JsNumber {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(self.0)
  }
}
