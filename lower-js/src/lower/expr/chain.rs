//! Member access, calls, `new`, tagged templates and optional chains.
//!
//! The grammar nests these left-recursively (`MemberExpression . IdentifierName`,
//! `CallExpression Arguments`, `OptionalExpression OptionalChain`, ...). The
//! rules are first flattened into a head followed by segments, then folded left.

use super::is_chain_rule;
use crate::ast::expr::CallArg;
use crate::ast::expr::CallArgs;
use crate::ast::expr::CallExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::MemberExpr;
use crate::ast::expr::MemberProp;
use crate::ast::expr::NewExpr;
use crate::ast::expr::OptionalCallExpr;
use crate::ast::expr::OptionalMemberExpr;
use crate::ast::expr::SpreadElement;
use crate::ast::expr::TaggedTemplateExpr;
use crate::ast::expr::ThisExpr;
use crate::ast::node::Node;
use crate::ast::ts::expr::TsInstantiationExpr;
use crate::ast::ts::expr::TsNonNullExpr;
use crate::ast::ts::TsTypeArgs;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::loc::Loc;
use crate::lower::between;
use crate::lower::malformed;
use crate::lower::split_list;
use crate::lower::Lowerer;
use crate::token::Token;

/// Splices nested chain rules at the head position into `out`.
fn flatten_chain<'c>(cst: &'c CstNode, out: &mut Vec<&'c CstNode>) {
  let mut seen_head = false;
  for c in cst.flat_children() {
    if seen_head || c.is(CstKind::KeywordNew) {
      out.push(c);
      continue;
    };
    seen_head = true;
    let inner = c.unwrap_passthrough();
    if is_chain_rule(inner.kind) && !inner.is_terminal() {
      flatten_chain(inner, out);
    } else {
      out.push(c);
    };
  }
}

fn is_template(cst: &CstNode) -> bool {
  matches!(
    cst.kind,
    CstKind::TemplateLiteral | CstKind::SubstitutionTemplate | CstKind::NoSubstitutionTemplate
  )
}

struct Chain {
  expr: Expr,
  /// Set once a `?.` has been seen; later segments are part of the optional chain.
  optional: bool,
}

impl Chain {
  fn member(&mut self, end: Loc, prop: MemberProp, optional: bool, question_dot_token: Option<Token>) {
    let object = std::mem::replace(&mut self.expr, placeholder());
    let loc = object.loc() + end;
    self.optional |= optional;
    self.expr = if self.optional {
      Node::new(loc, OptionalMemberExpr {
        object,
        prop,
        optional,
        question_dot_token,
      })
      .into()
    } else {
      Node::new(loc, MemberExpr { object, prop }).into()
    };
  }

  fn call(
    &mut self,
    end: Loc,
    args: CallArgs,
    type_arguments: Option<Node<TsTypeArgs>>,
    optional: bool,
    question_dot_token: Option<Token>,
  ) {
    let callee = std::mem::replace(&mut self.expr, placeholder());
    let loc = callee.loc() + end;
    self.optional |= optional;
    self.expr = if self.optional {
      Node::new(loc, OptionalCallExpr {
        callee,
        args,
        optional,
        type_arguments,
        question_dot_token,
      })
      .into()
    } else {
      Node::new(loc, CallExpr {
        callee,
        args,
        type_arguments,
      })
      .into()
    };
  }

  fn wrap(&mut self, f: impl FnOnce(Expr) -> Expr) {
    let inner = std::mem::replace(&mut self.expr, placeholder());
    self.expr = f(inner);
  }
}

fn placeholder() -> Expr {
  Node::new(Loc::default(), ThisExpr {}).into()
}

impl Lowerer {
  /// Lowers a member, call, `new` or optional chain expression.
  pub fn lower_chain(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let mut parts = Vec::new();
    flatten_chain(cst, &mut parts);
    let head_at = parts
      .iter()
      .position(|p| !p.is(CstKind::KeywordNew))
      .ok_or_else(|| malformed(cst, "chain base"))?;
    let mut news: Vec<&CstNode> = parts[..head_at].to_vec();
    let mut chain = Chain {
      expr: self.lower_expr(parts[head_at])?,
      optional: false,
    };
    let segments = &parts[head_at + 1..];
    let mut i = 0;
    while i < segments.len() {
      let seg = segments[i];
      match seg.kind {
        CstKind::Dot => {
          let name = segments.get(i + 1).ok_or_else(|| malformed(seg, "property name"))?;
          let property = self.lower_member_name(name)?;
          chain.member(
            name.loc,
            MemberProp {
              property,
              computed: false,
              dot_token: self.token(seg),
              l_bracket_token: None,
              r_bracket_token: None,
            },
            false,
            None,
          );
          i += 2;
        }
        CstKind::QuestionDot => {
          let qd = self.token(seg);
          let next = segments.get(i + 1).ok_or_else(|| malformed(seg, "optional chain segment"))?;
          match next.kind {
            CstKind::Arguments => {
              let args = self.lower_arguments(next)?;
              chain.call(next.loc, args, None, true, qd);
              i += 2;
            }
            CstKind::TSTypeArguments => {
              self.check_dialect(next)?;
              let type_args = self.lower_type_args(next)?;
              let args_cst = segments
                .get(i + 2)
                .filter(|a| a.is(CstKind::Arguments))
                .ok_or_else(|| malformed(seg, "arguments after type arguments"))?;
              let args = self.lower_arguments(args_cst)?;
              chain.call(args_cst.loc, args, Some(type_args), true, qd);
              i += 3;
            }
            CstKind::BracketOpen => {
              let (prop, end, used) = self.lower_computed_segment(&segments[i + 1..], seg)?;
              chain.member(end, prop, true, qd);
              i += 1 + used;
            }
            _ => {
              let property = self.lower_member_name(next)?;
              chain.member(
                next.loc,
                MemberProp {
                  property,
                  computed: false,
                  dot_token: None,
                  l_bracket_token: None,
                  r_bracket_token: None,
                },
                true,
                qd,
              );
              i += 2;
            }
          };
        }
        CstKind::BracketOpen => {
          let (prop, end, used) = self.lower_computed_segment(&segments[i..], seg)?;
          chain.member(end, prop, false, None);
          i += used;
        }
        CstKind::Arguments => {
          let args = self.lower_arguments(seg)?;
          self.apply_arguments(&mut chain, &mut news, seg.loc, args, None);
          i += 1;
        }
        CstKind::TSTypeArguments => {
          self.check_dialect(seg)?;
          let type_args = self.lower_type_args(seg)?;
          match segments.get(i + 1) {
            Some(next) if next.is(CstKind::Arguments) => {
              let args = self.lower_arguments(next)?;
              self.apply_arguments(&mut chain, &mut news, next.loc, args, Some(type_args));
              i += 2;
            }
            Some(next) if is_template(next) => {
              let quasi = self.lower_template(next, true)?;
              chain.wrap(|tag| {
                Node::new(tag.loc() + next.loc, TaggedTemplateExpr {
                  tag,
                  quasi,
                  type_arguments: Some(type_args),
                })
                .into()
              });
              i += 2;
            }
            _ => {
              chain.wrap(|expression| {
                Node::new(expression.loc() + seg.loc, TsInstantiationExpr {
                  expression,
                  type_arguments: type_args,
                })
                .into()
              });
              i += 1;
            }
          };
        }
        _ if is_template(seg) => {
          let quasi = self.lower_template(seg, true)?;
          chain.wrap(|tag| {
            Node::new(tag.loc() + seg.loc, TaggedTemplateExpr {
              tag,
              quasi,
              type_arguments: None,
            })
            .into()
          });
          i += 1;
        }
        CstKind::Exclamation => {
          self.check_dialect(seg)?;
          let exclamation_token = self.token(seg);
          chain.wrap(|expression| {
            Node::new(expression.loc() + seg.loc, TsNonNullExpr {
              expression,
              exclamation_token,
            })
            .into()
          });
          i += 1;
        }
        _ => return Err(malformed(seg, "member, call or template segment")),
      };
    }
    // `new X` without arguments.
    while let Some(new) = news.pop() {
      let new_token = self.token(new);
      chain.wrap(|callee| {
        Node::new(new.loc + callee.loc(), NewExpr {
          callee,
          args: CallArgs::default(),
          type_arguments: None,
          new_token,
        })
        .into()
      });
    }
    Ok(chain.expr)
  }

  /// Arguments complete the innermost pending `new`, or else form a call.
  fn apply_arguments(
    &mut self,
    chain: &mut Chain,
    news: &mut Vec<&CstNode>,
    end: Loc,
    args: CallArgs,
    type_arguments: Option<Node<TsTypeArgs>>,
  ) {
    if chain.optional {
      chain.call(end, args, type_arguments, false, None);
      return;
    };
    match news.pop() {
      Some(new) => {
        let new_token = self.token(new);
        chain.wrap(|callee| {
          Node::new(new.loc + end, NewExpr {
            callee,
            args,
            type_arguments,
            new_token,
          })
          .into()
        });
      }
      None => chain.call(end, args, type_arguments, false, None),
    };
  }

  /// `[ Expression ]` at the start of `segments`. Returns the property, its end and the number of nodes used.
  fn lower_computed_segment(
    &mut self,
    segments: &[&CstNode],
    at: &CstNode,
  ) -> LowerResult<(MemberProp, Loc, usize)> {
    let (Some(open), Some(inner), Some(close)) = (segments.first(), segments.get(1), segments.get(2)) else {
      return Err(malformed(at, "computed member `[expr]`"));
    };
    if !close.is(CstKind::BracketClose) {
      return Err(malformed(close, "`]`"));
    };
    let prop = MemberProp {
      property: self.lower_expr(inner)?,
      computed: true,
      dot_token: None,
      l_bracket_token: self.token(open),
      r_bracket_token: self.token(close),
    };
    Ok((prop, close.loc, 3))
  }

  /// The name after `.` or `?.`: an identifier name (any keyword included) or a private name.
  fn lower_member_name(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let cst = cst.unwrap_passthrough();
    if cst.is(CstKind::PrivateIdentifier) {
      return Ok(Expr::PrivateName(self.lower_private_identifier(cst)?));
    };
    Ok(Expr::Id(self.lower_identifier_like(cst)?))
  }

  /// `Arguments`: `( ArgumentList? )`.
  pub fn lower_arguments(&mut self, cst: &CstNode) -> LowerResult<CallArgs> {
    let mut arguments = Vec::new();
    for item in split_list(between(cst, CstKind::ParenthesisOpen, CstKind::ParenthesisClose)) {
      let argument = match item.parts.as_slice() {
        [dots, arg] if dots.is(CstKind::DotDotDot) => {
          Expr::Spread(Node::new(dots.loc + arg.loc, SpreadElement {
            argument: self.lower_expr(arg)?,
            ellipsis_token: self.token(dots),
          }))
        }
        [arg] => self.lower_expr(arg)?,
        _ => return Err(malformed(cst, "argument")),
      };
      arguments.push(CallArg {
        argument,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(CallArgs {
      arguments,
      l_paren_token: self.child_token(cst, CstKind::ParenthesisOpen),
      r_paren_token: self.child_token(cst, CstKind::ParenthesisClose),
    })
  }
}
