//! Helpers for constructing CSTs by hand, for producers, fixtures and tests.
//!
//! Nodes built here carry empty locations until passed through [`layout`],
//! which assigns every terminal a span in a synthesised source string.

use super::CstKind;
use super::CstNode;
use crate::loc::Loc;

pub fn rule(kind: CstKind, children: Vec<CstNode>) -> CstNode {
  CstNode {
    kind,
    children,
    value: None,
    loc: Loc::default(),
  }
}

/// A terminal whose kind is inferred from its text.
pub fn tok(text: &str) -> CstNode {
  term(infer_terminal_kind(text), text)
}

pub fn term(kind: CstKind, text: &str) -> CstNode {
  CstNode {
    kind,
    children: Vec::new(),
    value: Some(text.to_string()),
    loc: Loc::default(),
  }
}

pub fn id_ref(name: &str) -> CstNode {
  rule(CstKind::IdentifierReference, vec![tok(name)])
}

pub fn binding_id(name: &str) -> CstNode {
  rule(CstKind::BindingIdentifier, vec![tok(name)])
}

fn infer_terminal_kind(text: &str) -> CstKind {
  if let Some(kind) = CstKind::from_fixed_text(text) {
    return kind;
  };
  let first = text.chars().next().unwrap_or(' ');
  if text.starts_with("#!") {
    CstKind::Hashbang
  } else if first == '#' {
    CstKind::PrivateIdentifier
  } else if first == '"' || first == '\'' {
    CstKind::StringLiteral
  } else if first == '/' {
    CstKind::RegularExpressionLiteral
  } else if first == '`' {
    if text.len() > 1 && text.ends_with('`') {
      CstKind::NoSubstitutionTemplate
    } else {
      CstKind::TemplateHead
    }
  } else if first == '}' {
    if text.ends_with('`') {
      CstKind::TemplateTail
    } else {
      CstKind::TemplateMiddle
    }
  } else if first.is_ascii_digit() || (first == '.' && text.len() > 1) {
    if text.ends_with('n') {
      CstKind::BigIntLiteral
    } else {
      CstKind::NumericLiteral
    }
  } else {
    CstKind::IdentifierName
  }
}

/// Assigns contiguous locations to every node, separating terminals by a single space.
///
/// Returns the laid-out tree and the source text its locations index into.
pub fn layout(root: CstNode) -> (CstNode, String) {
  let mut source = String::new();
  let root = layout_node(root, &mut source);
  (root, source)
}

fn layout_node(mut node: CstNode, source: &mut String) -> CstNode {
  if node.is_terminal() {
    if !source.is_empty() {
      source.push(' ');
    };
    let start = source.len();
    source.push_str(node.text().unwrap_or_default());
    node.loc = Loc(start, source.len());
    return node;
  };
  let children = std::mem::take(&mut node.children);
  node.children = children
    .into_iter()
    .map(|c| layout_node(c, source))
    .collect();
  node.loc = match (node.children.first(), node.children.last()) {
    (Some(first), Some(last)) => Loc(first.loc.0, last.loc.1),
    _ => Loc(source.len(), source.len()),
  };
  node
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn infers_terminal_kinds() {
    assert_eq!(tok("=>").kind, CstKind::EqualsChevronRight);
    assert_eq!(tok("foo").kind, CstKind::IdentifierName);
    assert_eq!(tok("#priv").kind, CstKind::PrivateIdentifier);
    assert_eq!(tok("'s'").kind, CstKind::StringLiteral);
    assert_eq!(tok("/a+/g").kind, CstKind::RegularExpressionLiteral);
    assert_eq!(tok("`a`").kind, CstKind::NoSubstitutionTemplate);
    assert_eq!(tok("`a${").kind, CstKind::TemplateHead);
    assert_eq!(tok("}b${").kind, CstKind::TemplateMiddle);
    assert_eq!(tok("}c`").kind, CstKind::TemplateTail);
    assert_eq!(tok("12n").kind, CstKind::BigIntLiteral);
    assert_eq!(tok("0x1f").kind, CstKind::NumericLiteral);
    assert_eq!(tok(".5").kind, CstKind::NumericLiteral);
  }

  #[test]
  fn layout_assigns_spans_matching_source() {
    let (cst, source) = layout(rule(CstKind::ExpressionStatement, vec![
      rule(CstKind::AdditiveExpression, vec![id_ref("a"), tok("+"), id_ref("bc")]),
      tok(";"),
    ]));
    assert_eq!(source, "a + bc ;");
    assert_eq!(cst.loc, Loc(0, 8));
    let add = &cst.children[0];
    assert_eq!(add.loc, Loc(0, 6));
    assert_eq!(add.children[2].loc.slice(&source), Some("bc"));
  }
}
