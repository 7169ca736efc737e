use crate::cst::CstKind;
use crate::error::LowerError;
use crate::error::LowerErrorType;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::max;
use std::cmp::min;
use std::ops::Add;
use std::ops::AddAssign;

/// A half-open range of UTF-8 byte offsets into the source the CST was parsed from.
///
/// Serialises as a two-element array `[start, end]`, which is also the form the
/// CST producer emits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  /// Creates a best-effort location for synthetic nodes where only one side of
  /// the range is known.
  ///
  /// If both bounds are missing, an empty location at offset 0 is returned.
  pub fn best_effort(start: Option<Loc>, end: Option<Loc>) -> Loc {
    match (start, end) {
      (Some(mut start), Some(end)) => {
        start.extend(end);
        start
      }
      (Some(start), None) => start,
      (None, Some(end)) => end,
      (None, None) => Loc(0, 0),
    }
  }

  pub fn error(self, typ: LowerErrorType, kind: CstKind) -> LowerError {
    LowerError::new(typ, self, kind)
  }

  pub fn is_empty(&self) -> bool {
    self.0 >= self.1
  }

  pub fn len(&self) -> usize {
    self.1.saturating_sub(self.0)
  }

  /// Returns the source text covered by this location, if it lies within `source`.
  pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
    source.get(self.0..self.1)
  }

  pub fn extend(&mut self, other: Loc) {
    self.0 = min(self.0, other.0);
    self.1 = max(self.1, other.1);
  }

  pub fn add_option(self, rhs: Option<Loc>) -> Loc {
    let mut new = self;
    if let Some(rhs) = rhs {
      new.extend(rhs);
    };
    new
  }
}

impl Add for Loc {
  type Output = Loc;

  fn add(self, rhs: Self) -> Self::Output {
    let mut new = self;
    new.extend(rhs);
    new
  }
}

impl AddAssign for Loc {
  fn add_assign(&mut self, rhs: Self) {
    self.extend(rhs);
  }
}
