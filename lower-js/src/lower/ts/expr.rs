use super::types::const_type;
use crate::ast::expr::Expr;
use crate::ast::ts::expr::TsAsExpr;
use crate::ast::ts::expr::TsNonNullExpr;
use crate::ast::ts::expr::TsSatisfiesExpr;
use crate::ast::ts::expr::TsTypeAssertion;
use crate::ast::ts::types::TsType;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::unsupported;
use crate::lower::Lowerer;

impl Lowerer {
  /// The type after `as`, where a bare `const` is allowed.
  fn lower_asserted_type(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let inner = cst.unwrap_passthrough();
    if inner.is(CstKind::KeywordConst) {
      return Ok(const_type(inner));
    };
    self.lower_ts_type(inner)
  }

  /// `x as T`, `x as const`, `x satisfies T`, `x!` and `<T>x`.
  pub fn lower_ts_expr(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    self.check_dialect(cst)?;
    Ok(match cst.kind {
      CstKind::TSAsExpression | CstKind::TSSatisfiesExpression => {
        let [expression, op, ty] = cst.children.as_slice() else {
          return Err(malformed(cst, "operand, keyword and type"));
        };
        let expression = self.lower_expr(expression)?;
        match op.kind {
          CstKind::KeywordAs => Expr::TsAs(node(cst, TsAsExpr {
            expression,
            type_annotation: self.lower_asserted_type(ty)?,
            as_token: self.token(op),
          })),
          CstKind::KeywordSatisfies => Expr::TsSatisfies(node(cst, TsSatisfiesExpr {
            expression,
            type_annotation: self.lower_ts_type(ty)?,
            satisfies_token: self.token(op),
          })),
          _ => return Err(malformed(op, "`as` or `satisfies`")),
        }
      }
      CstKind::TSNonNullExpression => {
        let [expression, bang] = cst.children.as_slice() else {
          return Err(malformed(cst, "operand and `!`"));
        };
        Expr::TsNonNull(node(cst, TsNonNullExpr {
          expression: self.lower_expr(expression)?,
          exclamation_token: self.token(bang),
        }))
      }
      CstKind::TSTypeAssertion => {
        let [open, ty, close, expression] = cst.children.as_slice() else {
          return Err(malformed(cst, "`<T>` and operand"));
        };
        if !open.is(CstKind::ChevronLeft) || !close.is(CstKind::ChevronRight) {
          return Err(malformed(cst, "`<` and `>`"));
        };
        Expr::TsTypeAssertion(node(cst, TsTypeAssertion {
          type_annotation: self.lower_asserted_type(ty)?,
          expression: self.lower_expr(expression)?,
        }))
      }
      _ => return Err(unsupported(cst)),
    })
  }
}
