use super::malformed;
use super::unsupported;
use super::Lowerer;
use crate::ast::expr::lit::LitBigIntExpr;
use crate::ast::expr::lit::LitBoolExpr;
use crate::ast::expr::lit::LitNullExpr;
use crate::ast::expr::lit::LitNumExpr;
use crate::ast::expr::lit::LitRegexExpr;
use crate::ast::expr::lit::LitStrExpr;
use crate::ast::expr::lit::LitTemplateExpr;
use crate::ast::expr::lit::TemplateElement;
use crate::ast::expr::lit::TemplateValue;
use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::loc::Loc;
use crate::num::JsNumber;
use num_bigint::BigInt;

#[derive(Clone, Copy, PartialEq, Eq)]
enum EscapeMode {
  String,
  Template,
}

/// Decodes the escapes of string literal contents (without quotes).
///
/// Lone surrogates cannot be represented and become U+FFFD.
pub fn decode_string(raw: &str) -> Option<String> {
  decode_escapes(raw, EscapeMode::String)
}

/// Decodes the cooked value of a template chunk, or `None` if it contains an escape
/// only permitted in tagged templates.
pub fn decode_template(raw: &str) -> Option<String> {
  decode_escapes(raw, EscapeMode::Template)
}

fn push_code_unit(out: &mut String, pending_high: &mut Option<u32>, unit: u32) {
  if let Some(high) = pending_high.take() {
    if (0xDC00..=0xDFFF).contains(&unit) {
      let cp = 0x10000 + ((high - 0xD800) << 10) + (unit - 0xDC00);
      out.push(char::from_u32(cp).unwrap_or('\u{FFFD}'));
      return;
    };
    out.push('\u{FFFD}');
  };
  if (0xD800..=0xDBFF).contains(&unit) {
    *pending_high = Some(unit);
  } else {
    out.push(char::from_u32(unit).unwrap_or('\u{FFFD}'));
  };
}

fn decode_escapes(raw: &str, mode: EscapeMode) -> Option<String> {
  let mut out = String::with_capacity(raw.len());
  let mut pending_high = None;
  let mut chars = raw.chars().peekable();
  while let Some(c) = chars.next() {
    if c == '\r' && mode == EscapeMode::Template {
      // Template line terminators are normalised to LF.
      chars.next_if_eq(&'\n');
      push_code_unit(&mut out, &mut pending_high, '\n' as u32);
      continue;
    };
    if c != '\\' {
      push_code_unit(&mut out, &mut pending_high, c as u32);
      continue;
    };
    let e = chars.next()?;
    let unit: u32 = match e {
      'n' => '\n' as u32,
      't' => '\t' as u32,
      'r' => '\r' as u32,
      'b' => 0x08,
      'f' => 0x0C,
      'v' => 0x0B,
      '\n' | '\u{2028}' | '\u{2029}' => continue,
      '\r' => {
        chars.next_if_eq(&'\n');
        continue;
      }
      'x' => {
        let hex: String = chars.by_ref().take(2).collect();
        if hex.len() != 2 {
          return None;
        };
        u32::from_str_radix(&hex, 16).ok()?
      }
      'u' => {
        if chars.next_if_eq(&'{').is_some() {
          let mut hex = String::new();
          loop {
            match chars.next()? {
              '}' => break,
              h => hex.push(h),
            }
          }
          let cp = u32::from_str_radix(&hex, 16).ok()?;
          if cp > 0x10FFFF {
            return None;
          };
          if cp > 0xFFFF {
            if pending_high.take().is_some() {
              out.push('\u{FFFD}');
            };
            out.push(char::from_u32(cp)?);
            continue;
          };
          cp
        } else {
          let hex: String = chars.by_ref().take(4).collect();
          if hex.len() != 4 {
            return None;
          };
          u32::from_str_radix(&hex, 16).ok()?
        }
      }
      '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => 0,
      '0'..='7' => {
        if mode == EscapeMode::Template {
          return None;
        };
        // Legacy octal: up to three digits, with a value of at most 0o377.
        let mut value = e.to_digit(8)?;
        let max_len = if e <= '3' { 3 } else { 2 };
        let mut len = 1;
        while len < max_len {
          match chars.peek().and_then(|d| d.to_digit(8)) {
            Some(d) => {
              value = value * 8 + d;
              chars.next();
              len += 1;
            }
            None => break,
          }
        }
        value
      }
      '8' | '9' => {
        if mode == EscapeMode::Template {
          return None;
        };
        e as u32
      }
      other => other as u32,
    };
    push_code_unit(&mut out, &mut pending_high, unit);
  }
  if pending_high.is_some() {
    out.push('\u{FFFD}');
  };
  Some(out)
}

/// Canonical decimal digits of a bigint literal such as `0x1F_FFn`.
pub fn bigint_value(raw: &str) -> Option<String> {
  let digits = raw.strip_suffix('n')?.replace('_', "");
  let (digits, radix) = match digits.get(..2) {
    Some("0x" | "0X") => (&digits[2..], 16),
    Some("0o" | "0O") => (&digits[2..], 8),
    Some("0b" | "0B") => (&digits[2..], 2),
    _ => (digits.as_str(), 10),
  };
  if digits.is_empty() {
    return None;
  };
  BigInt::parse_bytes(digits.as_bytes(), radix).map(|v| v.to_string())
}

/// Splits `/pattern/flags`.
pub fn split_regex(raw: &str) -> Option<(&str, &str)> {
  let body = raw.strip_prefix('/')?;
  let end = body.rfind('/')?;
  Some((&body[..end], &body[end + 1..]))
}

impl Lowerer {
  /// Lowers a literal terminal, or a `Literal` wrapper around one.
  pub fn lower_literal(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let cst = cst.unwrap_passthrough();
    let loc = cst.loc;
    Ok(match cst.kind {
      CstKind::KeywordNull => Node::new(loc, LitNullExpr {}).into(),
      CstKind::KeywordTrue => Node::new(loc, LitBoolExpr { value: true }).into(),
      CstKind::KeywordFalse => Node::new(loc, LitBoolExpr { value: false }).into(),
      CstKind::NumericLiteral => self.lower_number(cst)?.into(),
      CstKind::BigIntLiteral => {
        let raw = cst.text().ok_or_else(|| malformed(cst, "bigint text"))?;
        let value = bigint_value(raw)
          .ok_or_else(|| loc.error(LowerErrorType::MalformedLiteral("bigint"), cst.kind))?;
        Node::new(loc, LitBigIntExpr {
          value,
          raw: raw.to_string(),
        })
        .into()
      }
      CstKind::StringLiteral => self.lower_string_literal(cst)?.into(),
      CstKind::RegularExpressionLiteral => {
        let raw = cst.text().ok_or_else(|| malformed(cst, "regex text"))?;
        let (pattern, flags) = split_regex(raw)
          .ok_or_else(|| loc.error(LowerErrorType::MalformedLiteral("regex"), cst.kind))?;
        Node::new(loc, LitRegexExpr {
          pattern: pattern.to_string(),
          flags: flags.to_string(),
        })
        .into()
      }
      _ => return Err(unsupported(cst)),
    })
  }

  pub fn lower_number(&mut self, cst: &CstNode) -> LowerResult<Node<LitNumExpr>> {
    let raw = cst.text().ok_or_else(|| malformed(cst, "number text"))?;
    let value = JsNumber::from_literal(raw)
      .ok_or_else(|| cst.loc.error(LowerErrorType::MalformedLiteral("numeric"), cst.kind))?;
    Ok(Node::new(cst.loc, LitNumExpr {
      value,
      raw: raw.to_string(),
    }))
  }

  pub fn lower_string_literal(&mut self, cst: &CstNode) -> LowerResult<Node<LitStrExpr>> {
    let cst = cst.unwrap_passthrough();
    if !cst.is(CstKind::StringLiteral) {
      return Err(malformed(cst, "string literal"));
    };
    let raw = cst.text().ok_or_else(|| malformed(cst, "string text"))?;
    let inner = raw
      .get(1..raw.len().saturating_sub(1))
      .filter(|_| raw.len() >= 2)
      .ok_or_else(|| cst.loc.error(LowerErrorType::MalformedLiteral("string"), cst.kind))?;
    let value =
      decode_string(inner).ok_or_else(|| cst.loc.error(LowerErrorType::InvalidEscape, cst.kind))?;
    Ok(Node::new(cst.loc, LitStrExpr {
      value,
      raw: raw.to_string(),
    }))
  }

  /// Lowers a `TemplateLiteral` (or `SubstitutionTemplate`) into quasis and expressions.
  ///
  /// Escapes that cannot be cooked are only an error outside tagged templates.
  pub fn lower_template(&mut self, cst: &CstNode, tagged: bool) -> LowerResult<Node<LitTemplateExpr>> {
    let mut parts = Vec::new();
    collect_template_parts(cst, &mut parts);
    let mut quasis = Vec::new();
    let mut expressions = Vec::new();
    for part in parts {
      match part.kind {
        CstKind::NoSubstitutionTemplate
        | CstKind::TemplateHead
        | CstKind::TemplateMiddle
        | CstKind::TemplateTail => {
          let text = part.text().ok_or_else(|| malformed(part, "template text"))?;
          // Strip the leading "`" or "}" and the trailing "`" or "${".
          let tail = matches!(part.kind, CstKind::NoSubstitutionTemplate | CstKind::TemplateTail);
          let close = if tail { 1 } else { 2 };
          if text.len() < 1 + close {
            return Err(part.loc.error(LowerErrorType::MalformedLiteral("template"), part.kind));
          };
          let raw_text = &text[1..text.len() - close];
          let cooked = decode_template(raw_text);
          if cooked.is_none() && !tagged {
            return Err(part.loc.error(LowerErrorType::InvalidEscape, part.kind));
          };
          let raw = raw_text.replace("\r\n", "\n").replace('\r', "\n");
          let loc = Loc(part.loc.0 + 1, part.loc.1.saturating_sub(close).max(part.loc.0 + 1));
          quasis.push(Node::new(loc, TemplateElement {
            value: TemplateValue { raw, cooked },
            tail,
          }));
        }
        _ => expressions.push(self.lower_expr(part)?),
      }
    }
    if quasis.len() != expressions.len() + 1 {
      return Err(malformed(cst, "alternating template chunks and substitutions"));
    };
    Ok(Node::new(cst.loc, LitTemplateExpr {
      quasis,
      expressions,
    }))
  }
}

fn collect_template_parts<'c>(cst: &'c CstNode, out: &mut Vec<&'c CstNode>) {
  if cst.is_terminal() {
    out.push(cst);
    return;
  };
  for c in cst.flat_children() {
    if c.is(CstKind::SubstitutionTemplate) || c.is(CstKind::TemplateLiteral) {
      collect_template_parts(c, out);
    } else {
      out.push(c);
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cst::build::id_ref;
  use crate::cst::build::layout;
  use crate::cst::build::rule;
  use crate::cst::build::tok;
  use crate::LowerOptions;

  fn lowerer() -> Lowerer {
    Lowerer::new(LowerOptions::default())
  }

  #[test]
  fn decodes_string_escapes() {
    assert_eq!(decode_string(r"a\nb").as_deref(), Some("a\nb"));
    assert_eq!(decode_string(r"\x41B\u{43}").as_deref(), Some("ABC"));
    assert_eq!(decode_string(r"\uD83D\uDE00").as_deref(), Some("\u{1F600}"));
    assert_eq!(decode_string(r"\101").as_deref(), Some("A"));
    assert_eq!(decode_string(r"\0").as_deref(), Some("\0"));
    assert_eq!(decode_string("a\\\nb").as_deref(), Some("ab"));
    assert_eq!(decode_string(r"\q").as_deref(), Some("q"));
    assert_eq!(decode_string(r"\uD800").as_deref(), Some("\u{FFFD}"));
    assert_eq!(decode_string(r"\x4"), None);
  }

  #[test]
  fn template_cooking_rejects_octal() {
    assert_eq!(decode_template(r"\101"), None);
    assert_eq!(decode_template("a\r\nb").as_deref(), Some("a\nb"));
  }

  #[test]
  fn bigints_are_canonical_decimal() {
    assert_eq!(bigint_value("0x1Fn").as_deref(), Some("31"));
    assert_eq!(bigint_value("1_000n").as_deref(), Some("1000"));
    assert_eq!(bigint_value("0b101n").as_deref(), Some("5"));
    assert_eq!(bigint_value("12"), None);
  }

  #[test]
  fn lowers_literal_terminals() {
    let mut l = lowerer();
    let (cst, _) = layout(rule(CstKind::Literal, vec![tok("0x10")]));
    match l.lower_literal(&cst).unwrap() {
      Expr::LitNum(n) => {
        assert_eq!(n.stx.value, JsNumber(16.0));
        assert_eq!(n.stx.raw, "0x10");
      }
      other => panic!("expected number, got {other:?}"),
    };

    let (cst, _) = layout(tok("/a\\/b/gi"));
    match l.lower_literal(&cst).unwrap() {
      Expr::LitRegex(r) => {
        assert_eq!(r.stx.pattern, "a\\/b");
        assert_eq!(r.stx.flags, "gi");
      }
      other => panic!("expected regex, got {other:?}"),
    };

    let (cst, _) = layout(tok("'it\\'s'"));
    let s = l.lower_string_literal(&cst).unwrap();
    assert_eq!(s.stx.value, "it's");
    assert_eq!(s.stx.raw, "'it\\'s'");
  }

  #[test]
  fn malformed_number_is_reported() {
    let mut l = lowerer();
    let (cst, _) = layout(tok("1x"));
    let err = l.lower_literal(&cst).unwrap_err();
    assert_eq!(err.typ, LowerErrorType::MalformedLiteral("numeric"));
    assert_eq!(err.code(), "LW0005");
  }

  #[test]
  fn template_quasis_surround_substitutions() {
    let mut l = lowerer();
    let (cst, source) = layout(rule(CstKind::TemplateLiteral, vec![rule(
      CstKind::SubstitutionTemplate,
      vec![
        tok("`a${"),
        id_ref("x"),
        rule(CstKind::TemplateSpans, vec![tok("}b`")]),
      ],
    )]));
    let tpl = l.lower_template(&cst, false).unwrap();
    assert_eq!(tpl.stx.quasis.len(), 2);
    assert_eq!(tpl.stx.expressions.len(), 1);
    assert_eq!(tpl.stx.quasis[0].stx.value.raw, "a");
    assert_eq!(tpl.stx.quasis[0].loc.slice(&source), Some("a"));
    assert!(!tpl.stx.quasis[0].stx.tail);
    assert_eq!(tpl.stx.quasis[1].stx.value.cooked.as_deref(), Some("b"));
    assert!(tpl.stx.quasis[1].stx.tail);
  }

  #[test]
  fn uncookable_escape_fails_only_untagged() {
    let mut l = lowerer();
    let (cst, _) = layout(rule(CstKind::TemplateLiteral, vec![tok("`\\unicode`")]));
    assert_eq!(
      l.lower_template(&cst, false).unwrap_err().typ,
      LowerErrorType::InvalidEscape
    );
    let tpl = l.lower_template(&cst, true).unwrap();
    assert_eq!(tpl.stx.quasis[0].stx.value.cooked, None);
    assert_eq!(tpl.stx.quasis[0].stx.value.raw, "\\unicode");
  }
}
