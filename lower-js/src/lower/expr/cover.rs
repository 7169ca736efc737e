//! Cover grammar fragments whose meaning depends on what follows them.
//!
//! `(a, b)` is a parenthesized sequence unless followed by `=>`, and `async(a, b)`
//! is a call unless followed by `=>`. The same node is read either as an
//! expression or as a parameter list, and each reading is cached separately.

use crate::ast::expr::pat::Pat;
use crate::ast::expr::pat::RestPat;
use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::ParenExpr;
use crate::ast::expr::SequenceExpr;
use crate::ast::expr::SequenceItem;
use crate::ast::func::Param;
use crate::ast::node::Node;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerError;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::lower::between;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::span;
use crate::lower::split_list;
use crate::lower::Lowerer;
use tracing::debug;
use tracing::trace;

fn invalid_cover(cst: &CstNode) -> LowerError {
  cst.loc.error(LowerErrorType::InvalidCoverGrammar, cst.kind)
}

/// Contents between the parentheses, with a lone `Expression` spliced open.
fn cover_contents(cst: &CstNode) -> Vec<&CstNode> {
  let inner = between(cst, CstKind::ParenthesisOpen, CstKind::ParenthesisClose);
  match inner.as_slice() {
    [expr] if expr.is(CstKind::Expression) && expr.children.len() > 1 => expr.flat_children(),
    _ => inner,
  }
}

impl Lowerer {
  /// Reads `CoverParenthesizedExpressionAndArrowParameterList` as an expression.
  pub(crate) fn lower_cover_paren_expr(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let contents = cover_contents(cst);
    if contents.is_empty() {
      if !self.options().empty_parens {
        return Err(invalid_cover(cst));
      };
      debug!(start = cst.loc.0, "lowering empty parentheses to `undefined`");
      return Ok(Expr::Id(node(cst, IdExpr {
        name: "undefined".to_string(),
      })));
    };
    if contents
      .iter()
      .any(|c| matches!(c.kind, CstKind::DotDotDot | CstKind::TSTypeAnnotation | CstKind::Question))
    {
      return Err(invalid_cover(cst));
    };
    let mut items = split_list(contents.iter().copied());
    if items.last().is_some_and(|i| i.comma.is_some()) {
      return Err(invalid_cover(cst));
    };
    let expression = if items.len() == 1 {
      let item = items.remove(0);
      let [only] = item.parts.as_slice() else {
        return Err(invalid_cover(cst));
      };
      self.lower_expr(only)?
    } else {
      let mut expressions = Vec::with_capacity(items.len());
      for item in items {
        let [part] = item.parts.as_slice() else {
          return Err(invalid_cover(cst));
        };
        expressions.push(SequenceItem {
          expression: self.lower_expr(part)?,
          comma_token: self.opt_token(item.comma),
        });
      }
      Expr::Sequence(Node::new(span(&contents), SequenceExpr { expressions }))
    };
    Ok(Expr::Paren(node(cst, ParenExpr {
      expression,
      l_paren_token: self.child_token(cst, CstKind::ParenthesisOpen),
      r_paren_token: self.child_token(cst, CstKind::ParenthesisClose),
    })))
  }

  /// Reads `CoverParenthesizedExpressionAndArrowParameterList` as arrow parameters.
  pub(crate) fn lower_cover_params(&mut self, cst: &CstNode) -> LowerResult<Vec<Param>> {
    if let Some(params) = self.param_memo.get(&cst.id()) {
      trace!(kind = ?cst.kind, start = cst.loc.0, "reusing parameter lowering");
      return Ok(params.clone());
    };
    let items = split_list(cover_contents(cst));
    let count = items.len();
    let mut params = Vec::with_capacity(count);
    for (i, item) in items.into_iter().enumerate() {
      let last = i + 1 == count && item.comma.is_none();
      let pat = self.lower_param_parts(cst, &item.parts, last, Lowerer::cover_param_to_pat, invalid_cover)?;
      params.push(Param {
        param: pat,
        comma_token: self.opt_token(item.comma),
      });
    }
    self.param_memo.insert(cst.id(), params.clone());
    Ok(params)
  }

  /// Reads the `Arguments` of `CoverCallExpressionAndAsyncArrowHead` as async arrow parameters.
  pub(crate) fn lower_async_arrow_head_params(&mut self, cst: &CstNode) -> LowerResult<Vec<Param>> {
    if let Some(params) = self.param_memo.get(&cst.id()) {
      trace!(kind = ?cst.kind, start = cst.loc.0, "reusing parameter lowering");
      return Ok(params.clone());
    };
    let args = cst
      .find(CstKind::Arguments)
      .ok_or_else(|| malformed(cst, "async arrow arguments"))?;
    let mut params: Vec<Param> = Vec::new();
    let mut pending_rest: Option<&CstNode> = None;
    let mut need_comma = false;
    for c in between(args, CstKind::ParenthesisOpen, CstKind::ParenthesisClose) {
      match c.kind {
        CstKind::DotDotDot => pending_rest = Some(c),
        CstKind::Comma => {
          if pending_rest.is_some() {
            return Err(invalid_cover(c));
          };
          let comma_token = self.token(c);
          let last = params.last_mut().ok_or_else(|| invalid_cover(c))?;
          if !need_comma || last.param.is_rest() {
            return Err(invalid_cover(c));
          };
          last.comma_token = comma_token;
          need_comma = false;
        }
        _ => {
          if need_comma {
            return Err(invalid_cover(c));
          };
          need_comma = true;
          let param = if c.is(CstKind::SpreadElement) {
            let argument = c
              .children
              .iter()
              .find(|a| !a.is(CstKind::DotDotDot))
              .ok_or_else(|| invalid_cover(c))?;
            Pat::Rest(Node::new(c.loc, RestPat {
              argument: self.cover_param_to_pat(argument)?,
              type_annotation: None,
              ellipsis_token: self.child_token(c, CstKind::DotDotDot),
            }))
          } else {
            let pat = self.cover_param_to_pat(c)?;
            match pending_rest.take() {
              Some(dots) => Pat::Rest(Node::new(dots.loc + c.loc, RestPat {
                argument: pat,
                type_annotation: None,
                ellipsis_token: self.token(dots),
              })),
              None => pat,
            }
          };
          params.push(Param {
            param,
            comma_token: None,
          });
        }
      };
    }
    if pending_rest.is_some() {
      return Err(invalid_cover(args));
    };
    self.param_memo.insert(cst.id(), params.clone());
    Ok(params)
  }
}
