//! CST to AST lowering.
//!
//! A [`Lowerer`] is one lowering session over one CST. Its methods are spread
//! across the submodules by grammar area, and every method takes the CST node
//! it lowers by reference; the tree must outlive the session as results of
//! cover grammar fragments are memoised by node address.

use crate::ast::expr::Expr;
use crate::ast::func::Param;
use crate::ast::node::Node;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerError;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::loc::Loc;
use crate::token::Token;
use crate::LowerOptions;
use ahash::HashMap;
use ahash::HashMapExt;

pub mod class;
pub mod expr;
pub mod func;
pub mod ident;
pub mod import_export;
pub mod lit;
pub mod pat;
pub mod program;
pub mod stmt;
#[cfg(test)]
mod tests;
pub mod ts;

pub struct Lowerer {
  options: LowerOptions,
  // Keyed by `CstNode::id`. Cover fragments have a different lowering per
  // calling context, so expression and parameter readings are cached apart.
  expr_memo: HashMap<usize, Expr>,
  param_memo: HashMap<usize, Vec<Param>>,
}

impl Lowerer {
  pub fn new(options: LowerOptions) -> Lowerer {
    Lowerer {
      options,
      expr_memo: HashMap::new(),
      param_memo: HashMap::new(),
    }
  }

  pub fn options(&self) -> &LowerOptions {
    &self.options
  }

  /// Drops memoised results. Must be called before reusing the session for another tree.
  pub fn reset(&mut self) {
    self.expr_memo.clear();
    self.param_memo.clear();
  }

  /// The token for a terminal, if tokens are being kept.
  pub(crate) fn token(&self, cst: &CstNode) -> Option<Token> {
    self.options.tokens.then(|| Token::from_cst(cst))
  }

  pub(crate) fn opt_token(&self, cst: Option<&CstNode>) -> Option<Token> {
    cst.and_then(|c| self.token(c))
  }

  /// The token for the first direct child of `kind`.
  pub(crate) fn child_token(&self, cst: &CstNode, kind: CstKind) -> Option<Token> {
    self.opt_token(cst.find(kind))
  }

  /// Fails if `cst` is a TypeScript-only production and the session is lowering JavaScript.
  pub(crate) fn check_dialect(&self, cst: &CstNode) -> LowerResult<()> {
    if cst.kind.is_typescript() {
      return self.check_ts_syntax(cst);
    };
    Ok(())
  }

  /// Fails if the session is lowering JavaScript. For TypeScript-only uses of
  /// shared terminals, such as `abstract` or a definite `!`.
  pub(crate) fn check_ts_syntax(&self, cst: &CstNode) -> LowerResult<()> {
    if !self.options.dialect.allows_typescript() {
      return Err(cst.loc.error(LowerErrorType::TypeSyntaxInJs, cst.kind));
    };
    Ok(())
  }
}

pub(crate) fn node<S: derive_visitor::Drive + derive_visitor::DriveMut>(
  cst: &CstNode,
  stx: S,
) -> Node<S> {
  Node::new(cst.loc, stx)
}

pub(crate) fn malformed(cst: &CstNode, expected: &'static str) -> LowerError {
  cst.loc.error(LowerErrorType::MalformedCst(expected), cst.kind)
}

pub(crate) fn unsupported(cst: &CstNode) -> LowerError {
  cst
    .loc
    .error(LowerErrorType::UnsupportedGrammarNode, cst.kind)
}

pub(crate) fn require<'c>(
  cst: &'c CstNode,
  kind: CstKind,
  expected: &'static str,
) -> LowerResult<&'c CstNode> {
  cst.find(kind).ok_or_else(|| malformed(cst, expected))
}

/// Span from the first to the last of `nodes`.
pub(crate) fn span(nodes: &[&CstNode]) -> Loc {
  Loc::best_effort(nodes.first().map(|n| n.loc), nodes.last().map(|n| n.loc))
}

/// One entry of a comma-separated list: the nodes before the comma, and the comma.
///
/// `parts` is empty for an elision.
#[derive(Debug)]
pub(crate) struct ListItem<'c> {
  pub parts: Vec<&'c CstNode>,
  pub comma: Option<&'c CstNode>,
}

/// Splits a flattened list on commas, pairing each item with the comma that follows it.
///
/// A trailing comma stays on the last item; nothing after it becomes an item.
pub(crate) fn split_list<'c>(children: impl IntoIterator<Item = &'c CstNode>) -> Vec<ListItem<'c>> {
  let mut items = Vec::new();
  let mut parts = Vec::new();
  for c in children {
    if c.is(CstKind::Comma) {
      items.push(ListItem {
        parts: std::mem::take(&mut parts),
        comma: Some(c),
      });
    } else {
      parts.push(c);
    };
  }
  if !parts.is_empty() {
    items.push(ListItem { parts, comma: None });
  };
  items
}

/// Flattened children with a leading `open` and trailing `close` terminal removed.
pub(crate) fn between(cst: &CstNode, open: CstKind, close: CstKind) -> Vec<&CstNode> {
  let mut children = cst.flat_children();
  if children.last().is_some_and(|c| c.is(close)) {
    children.pop();
  };
  if children.first().is_some_and(|c| c.is(open)) {
    children.remove(0);
  };
  children
}
