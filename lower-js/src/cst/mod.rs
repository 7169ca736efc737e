//! The concrete syntax tree consumed by the lowering engine.
//!
//! Rule nodes have `children` and no `value`; terminal nodes have a `value`
//! and no `children`. Single-child wrapper rules (see
//! [`CstKind::is_passthrough`]) and list rules (see [`CstKind::is_list`]) may
//! be present or omitted by the producer.

pub mod build;
mod kind;

pub use kind::CstKind;

use crate::loc::Loc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CstNode {
  #[serde(rename = "name")]
  pub kind: CstKind,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<CstNode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(default)]
  pub loc: Loc,
}

impl CstNode {
  pub fn terminal(kind: CstKind, value: impl Into<String>, loc: Loc) -> CstNode {
    CstNode {
      kind,
      children: Vec::new(),
      value: Some(value.into()),
      loc,
    }
  }

  /// Creates a rule node spanning its children.
  pub fn rule(kind: CstKind, children: Vec<CstNode>) -> CstNode {
    let loc = Loc::best_effort(
      children.first().map(|c| c.loc),
      children.last().map(|c| c.loc),
    );
    CstNode {
      kind,
      children,
      value: None,
      loc,
    }
  }

  /// Reads a CST in the producer's JSON form.
  pub fn from_json(json: &str) -> serde_json::Result<CstNode> {
    serde_json::from_str(json)
  }

  pub fn is_terminal(&self) -> bool {
    self.value.is_some() || (self.children.is_empty() && self.kind.is_terminal())
  }

  /// The terminal's source text, falling back to the kind's fixed spelling.
  pub fn text(&self) -> Option<&str> {
    self.value.as_deref().or_else(|| self.kind.fixed_text())
  }

  pub fn is(&self, kind: CstKind) -> bool {
    self.kind == kind
  }

  /// First direct child of the given kind.
  pub fn find(&self, kind: CstKind) -> Option<&CstNode> {
    self.children.iter().find(|c| c.kind == kind)
  }

  pub fn find_any(&self, kinds: &[CstKind]) -> Option<&CstNode> {
    self.children.iter().find(|c| kinds.contains(&c.kind))
  }

  pub fn has(&self, kind: CstKind) -> bool {
    self.find(kind).is_some()
  }

  pub fn position(&self, kind: CstKind) -> Option<usize> {
    self.children.iter().position(|c| c.kind == kind)
  }

  /// Direct children that are rule nodes.
  pub fn rules(&self) -> impl Iterator<Item = &CstNode> {
    self.children.iter().filter(|c| !c.is_terminal())
  }

  pub fn first_rule(&self) -> Option<&CstNode> {
    self.rules().next()
  }

  /// Descends through single-child wrapper rules.
  pub fn unwrap_passthrough(&self) -> &CstNode {
    let mut node = self;
    while node.kind.is_passthrough() && node.children.len() == 1 {
      node = &node.children[0];
    }
    node
  }

  /// Children with nested list rules spliced in, recursively.
  pub fn flat_children(&self) -> Vec<&CstNode> {
    let mut out = Vec::new();
    flatten_into(&self.children, &mut out);
    out
  }

  /// Identity of this node for the duration of a lowering session.
  pub(crate) fn id(&self) -> usize {
    self as *const CstNode as usize
  }
}

fn flatten_into<'a>(children: &'a [CstNode], out: &mut Vec<&'a CstNode>) {
  for c in children {
    if c.kind.is_list() && !c.is_terminal() {
      flatten_into(&c.children, out);
    } else {
      out.push(c);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::build::layout;
  use super::build::rule;
  use super::build::tok;
  use super::*;

  #[test]
  fn reads_producer_json() {
    let cst = CstNode::from_json(
      r#"{
        "name": "IdentifierReference",
        "children": [{ "name": "IdentifierName", "value": "foo", "loc": [0, 3] }],
        "loc": [0, 3]
      }"#,
    )
    .unwrap();
    assert_eq!(cst.kind, CstKind::IdentifierReference);
    assert_eq!(cst.children[0].value.as_deref(), Some("foo"));
    assert!(cst.children[0].is_terminal());
    assert!(!cst.is_terminal());
  }

  #[test]
  fn flattens_nested_lists() {
    let list = rule(CstKind::ArgumentList, vec![
      rule(CstKind::ArgumentList, vec![tok("a"), tok(",")]),
      tok("b"),
    ]);
    let args = rule(CstKind::Arguments, vec![tok("("), list, tok(")")]);
    let kinds: Vec<_> = args.flat_children().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![
      CstKind::ParenthesisOpen,
      CstKind::IdentifierName,
      CstKind::Comma,
      CstKind::IdentifierName,
      CstKind::ParenthesisClose,
    ]);
  }

  #[test]
  fn unwraps_single_child_wrappers() {
    let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![rule(
      CstKind::ConditionalExpression,
      vec![rule(CstKind::IdentifierReference, vec![tok("x")])],
    )]));
    assert_eq!(cst.unwrap_passthrough().kind, CstKind::IdentifierReference);
  }
}
