use super::malformed;
use super::Lowerer;
use crate::ast::expr::pat::IdPat;
use crate::ast::expr::IdExpr;
use crate::ast::expr::PrivateName;
use crate::ast::node::Node;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::error::LowerResult;

/// Descends through rule nodes to the first terminal that has text.
pub(crate) fn first_terminal(cst: &CstNode) -> Option<&CstNode> {
  if cst.is_terminal() {
    return cst.text().map(|_| cst);
  };
  cst.children.iter().find_map(first_terminal)
}

/// Decodes `\uXXXX` and `\u{X...}` escapes in identifier text.
pub fn decode_identifier(raw: &str) -> Option<String> {
  if !raw.contains('\\') {
    return Some(raw.to_string());
  };
  let mut out = String::with_capacity(raw.len());
  let mut chars = raw.chars().peekable();
  while let Some(c) = chars.next() {
    if c != '\\' {
      out.push(c);
      continue;
    };
    if chars.next()? != 'u' {
      return None;
    };
    let cp = if chars.peek() == Some(&'{') {
      chars.next();
      let mut hex = String::new();
      loop {
        match chars.next()? {
          '}' => break,
          h => hex.push(h),
        }
      }
      if hex.is_empty() {
        return None;
      };
      u32::from_str_radix(&hex, 16).ok()?
    } else {
      let hex: String = chars.by_ref().take(4).collect();
      if hex.len() != 4 {
        return None;
      };
      u32::from_str_radix(&hex, 16).ok()?
    };
    out.push(char::from_u32(cp)?);
  }
  Some(out)
}

impl Lowerer {
  fn identifier_name(&self, cst: &CstNode) -> LowerResult<String> {
    let terminal = first_terminal(cst).ok_or_else(|| malformed(cst, "identifier terminal"))?;
    let raw = terminal
      .text()
      .ok_or_else(|| malformed(terminal, "identifier text"))?;
    decode_identifier(raw).ok_or_else(|| terminal.loc.error(LowerErrorType::InvalidEscape, terminal.kind))
  }

  /// Lowers an identifier reference, label, property name or contextual keyword used as a name.
  pub fn lower_identifier_like(&mut self, cst: &CstNode) -> LowerResult<Node<IdExpr>> {
    let name = self.identifier_name(cst)?;
    Ok(Node::new(cst.loc, IdExpr { name }))
  }

  pub fn lower_binding_identifier(&mut self, cst: &CstNode) -> LowerResult<Node<IdPat>> {
    let name = self.identifier_name(cst)?;
    Ok(Node::new(cst.loc, IdPat::new(name)))
  }

  pub fn lower_private_identifier(&mut self, cst: &CstNode) -> LowerResult<Node<PrivateName>> {
    let terminal = first_terminal(cst).ok_or_else(|| malformed(cst, "private name"))?;
    let raw = terminal
      .text()
      .ok_or_else(|| malformed(terminal, "private name text"))?;
    let decoded = decode_identifier(raw)
      .ok_or_else(|| terminal.loc.error(LowerErrorType::InvalidEscape, terminal.kind))?;
    let name = if decoded.starts_with('#') {
      decoded
    } else {
      format!("#{decoded}")
    };
    let raw = (raw != name).then(|| raw.to_string());
    Ok(Node::new(cst.loc, PrivateName { name, raw }))
  }
}
