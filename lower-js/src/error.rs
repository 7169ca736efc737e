use crate::cst::CstKind;
use crate::loc::Loc;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;

/// A stable classification of failures raised while lowering a CST.
///
/// Diagnostic codes (prefix `LW`) are assigned per variant and are stable:
/// - `LW0001`: [`LowerErrorType::UnsupportedGrammarNode`]
/// - `LW0002`: [`LowerErrorType::MalformedCst`]
/// - `LW0003`: [`LowerErrorType::InvalidAssignmentTarget`]
/// - `LW0004`: [`LowerErrorType::InvalidEscape`]
/// - `LW0005`: [`LowerErrorType::MalformedLiteral`]
/// - `LW0006`: [`LowerErrorType::TypeSyntaxInJs`]
/// - `LW0007`: [`LowerErrorType::InvalidCoverGrammar`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LowerErrorType {
  /// No lowering exists for this grammar rule in the position it was found.
  UnsupportedGrammarNode,
  /// The node matched a lowering case but lacks a required child or terminal.
  MalformedCst(&'static str),
  InvalidAssignmentTarget,
  InvalidEscape,
  MalformedLiteral(&'static str),
  TypeSyntaxInJs,
  /// A cover grammar fragment that is neither a valid expression nor a valid parameter list.
  InvalidCoverGrammar,
}

impl LowerErrorType {
  /// Stable diagnostic code for this error variant.
  pub fn code(&self) -> &'static str {
    match self {
      LowerErrorType::UnsupportedGrammarNode => "LW0001",
      LowerErrorType::MalformedCst(_) => "LW0002",
      LowerErrorType::InvalidAssignmentTarget => "LW0003",
      LowerErrorType::InvalidEscape => "LW0004",
      LowerErrorType::MalformedLiteral(_) => "LW0005",
      LowerErrorType::TypeSyntaxInJs => "LW0006",
      LowerErrorType::InvalidCoverGrammar => "LW0007",
    }
  }

  /// Human-readable message describing this error.
  pub fn message(&self, kind: &CstKind) -> String {
    match self {
      LowerErrorType::UnsupportedGrammarNode => format!("unsupported grammar node {:?}", kind),
      LowerErrorType::MalformedCst(expected) => {
        format!("malformed {:?} node: expected {}", kind, expected)
      }
      LowerErrorType::InvalidAssignmentTarget => "invalid assignment target".into(),
      LowerErrorType::InvalidEscape => "invalid escape sequence".into(),
      LowerErrorType::MalformedLiteral(what) => format!("malformed {} literal", what),
      LowerErrorType::TypeSyntaxInJs => {
        format!("TypeScript syntax {:?} is not allowed in JavaScript", kind)
      }
      LowerErrorType::InvalidCoverGrammar => {
        "parenthesized list is neither an expression nor arrow parameters".into()
      }
    }
  }
}

#[derive(Clone, thiserror::Error)]
#[error("{} [{}]", .typ.message(.kind), .typ.code())]
pub struct LowerError {
  pub typ: LowerErrorType,
  pub loc: Loc,
  /// The grammar rule or terminal being lowered when the error was raised.
  pub kind: CstKind,
}

impl LowerError {
  pub fn new(typ: LowerErrorType, loc: Loc, kind: CstKind) -> LowerError {
    LowerError { typ, loc, kind }
  }

  pub fn code(&self) -> &'static str {
    self.typ.code()
  }
}

impl Debug for LowerError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc [{}:{}]", self, self.loc.0, self.loc.1)
  }
}

impl PartialEq for LowerError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for LowerError {}

pub type LowerResult<T> = Result<T, LowerError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_display_includes_code_and_kind() {
    let err = Loc(3, 9).error(
      LowerErrorType::UnsupportedGrammarNode,
      CstKind::WithStatement,
    );
    assert_eq!(err.code(), "LW0001");
    assert_eq!(
      err.to_string(),
      "unsupported grammar node WithStatement [LW0001]"
    );
    assert_eq!(
      format!("{err:?}"),
      "unsupported grammar node WithStatement [LW0001] around loc [3:9]"
    );
  }

  #[test]
  fn malformed_message_names_expectation() {
    let typ = LowerErrorType::MalformedCst("identifier terminal");
    assert_eq!(
      typ.message(&CstKind::BindingIdentifier),
      "malformed BindingIdentifier node: expected identifier terminal"
    );
  }
}
