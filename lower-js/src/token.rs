use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::loc::Loc;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

/// Source position of a punctuator or keyword, kept on AST nodes for round-tripping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Drive, DriveMut, Serialize)]
pub struct Token {
  #[drive(skip)]
  pub kind: CstKind,
  #[drive(skip)]
  pub loc: Loc,
}

pub fn make_token(kind: CstKind, loc: Loc) -> Token {
  Token { kind, loc }
}

impl Token {
  pub fn from_cst(cst: &CstNode) -> Token {
    make_token(cst.kind, cst.loc)
  }

  /// The fixed spelling of this token's kind, if it has one.
  pub fn text(&self) -> Option<&'static str> {
    self.kind.fixed_text()
  }
}
