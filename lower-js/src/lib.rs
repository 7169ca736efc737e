use ast::node::Node;
use ast::stx::Program;
use cst::CstNode;
use error::LowerResult;
use lower::Lowerer;
use serde::Deserialize;
use serde::Serialize;

pub use ast::stx::SourceType;

pub mod ast;
pub mod cst;
pub mod error;
pub mod loc;
pub mod lower;
pub mod num;
pub mod operator;
pub mod token;

/// Which syntax the CST may contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
  Js,
  #[default]
  Ts,
}

impl Dialect {
  pub fn allows_typescript(self) -> bool {
    matches!(self, Dialect::Ts)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LowerOptions {
  pub dialect: Dialect,
  /// Source type for a `Program` root; inferred from its items when `None`.
  /// `Script` and `Module` roots always determine their own source type.
  pub source_type: Option<SourceType>,
  /// Whether to attach punctuator and keyword tokens to AST nodes.
  pub tokens: bool,
  /// Whether an empty `()` outside an arrow head lowers to an `undefined` identifier instead of failing.
  pub empty_parens: bool,
}

impl Default for LowerOptions {
  fn default() -> Self {
    LowerOptions {
      dialect: Dialect::Ts,
      source_type: None,
      tokens: true,
      empty_parens: true,
    }
  }
}

/// Lowers a CST rooted at a `Module`, `Script` or `Program` rule.
pub fn lower(cst: &CstNode, options: LowerOptions) -> LowerResult<Node<Program>> {
  let mut lowerer = Lowerer::new(options);
  lowerer.lower_program(cst)
}

/// Reads a CST from the producer's JSON form and lowers it.
pub fn lower_json(json: &str, options: LowerOptions) -> Result<Node<Program>, LowerJsonError> {
  let cst = CstNode::from_json(json)?;
  Ok(lower(&cst, options)?)
}

#[derive(Debug, thiserror::Error)]
pub enum LowerJsonError {
  #[error("invalid CST JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Lower(#[from] error::LowerError),
}
