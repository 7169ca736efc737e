pub mod chain;
pub mod cover;
pub mod object;

use super::between;
use super::malformed;
use super::node;
use super::pat::expr_to_pat;
use super::split_list;
use super::unsupported;
use super::Lowerer;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::AssignExpr;
use crate::ast::expr::AwaitExpr;
use crate::ast::expr::BinaryExpr;
use crate::ast::expr::CondExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::ImportCallExpr;
use crate::ast::expr::LogicalExpr;
use crate::ast::expr::MetaPropertyExpr;
use crate::ast::expr::ParenExpr;
use crate::ast::expr::SequenceExpr;
use crate::ast::expr::SequenceItem;
use crate::ast::expr::SpreadElement;
use crate::ast::expr::SuperExpr;
use crate::ast::expr::ThisExpr;
use crate::ast::expr::UnaryExpr;
use crate::ast::expr::UpdateExpr;
use crate::ast::expr::YieldExpr;
use crate::ast::node::Node;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::operator::Associativity;
use crate::operator::OperatorName;
use crate::operator::ASSIGNMENT_OPERATOR_MAPPING;
use crate::operator::BINARY_OPERATOR_MAPPING;
use crate::operator::UNARY_OPERATOR_MAPPING;
use crate::token::Token;
use tracing::trace;

/// Rules whose expression reading is cached per node.
fn is_memoised(kind: CstKind) -> bool {
  matches!(
    kind,
    CstKind::CoverParenthesizedExpressionAndArrowParameterList
      | CstKind::CoverCallExpressionAndAsyncArrowHead
      | CstKind::ParenthesizedExpression
  )
}

fn is_binary_rule(kind: CstKind) -> bool {
  matches!(
    kind,
    CstKind::AdditiveExpression
      | CstKind::BitwiseANDExpression
      | CstKind::BitwiseORExpression
      | CstKind::BitwiseXORExpression
      | CstKind::CoalesceExpression
      | CstKind::EqualityExpression
      | CstKind::ExponentiationExpression
      | CstKind::LogicalANDExpression
      | CstKind::LogicalORExpression
      | CstKind::MultiplicativeExpression
      | CstKind::RelationalExpression
      | CstKind::ShiftExpression
      | CstKind::ShortCircuitExpression
  )
}

pub(crate) fn is_chain_rule(kind: CstKind) -> bool {
  matches!(
    kind,
    CstKind::CallExpression
      | CstKind::CoverCallExpressionAndAsyncArrowHead
      | CstKind::LeftHandSideExpression
      | CstKind::MemberExpression
      | CstKind::NewExpression
      | CstKind::OptionalExpression
      | CstKind::SuperCall
      | CstKind::SuperProperty
  )
}

/// Builds a `LogicalExpression` for `&&`, `||` and `??`, and a `BinaryExpression` otherwise.
pub(crate) fn binary(
  operator: OperatorName,
  left: Expr,
  right: Expr,
  operator_token: Option<Token>,
) -> Expr {
  let loc = left.loc() + right.loc();
  if operator.is_logical() {
    Node::new(loc, LogicalExpr {
      operator,
      left,
      right,
      operator_token,
    })
    .into()
  } else {
    Node::new(loc, BinaryExpr {
      operator,
      left,
      right,
      operator_token,
    })
    .into()
  }
}

/// Whether `expr` may be the operand of `++`/`--` or a compound assignment.
fn is_simple_target(expr: &Expr) -> bool {
  match expr {
    Expr::Id(_)
    | Expr::Member(_)
    | Expr::TsAs(_)
    | Expr::TsNonNull(_)
    | Expr::TsSatisfies(_)
    | Expr::TsTypeAssertion(_) => true,
    Expr::Paren(p) => is_simple_target(&p.stx.expression),
    _ => false,
  }
}

impl Lowerer {
  /// Lowers any expression-position CST node.
  ///
  /// Wrapper rules with a single child are skipped. Cover grammar fragments and
  /// parenthesized expressions are lowered once per node and reused.
  pub fn lower_expr(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let cst = cst.unwrap_passthrough();
    if !is_memoised(cst.kind) {
      return self.lower_expr_uncached(cst);
    };
    if let Some(expr) = self.expr_memo.get(&cst.id()) {
      trace!(kind = ?cst.kind, start = cst.loc.0, "reusing expression lowering");
      return Ok(expr.clone());
    };
    let expr = self.lower_expr_uncached(cst)?;
    self.expr_memo.insert(cst.id(), expr.clone());
    Ok(expr)
  }

  fn lower_expr_uncached(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    if cst.is_terminal() {
      return self.lower_terminal_expr(cst);
    };
    let kind = cst.kind;
    Ok(match kind {
      CstKind::IdentifierReference
      | CstKind::Identifier
      | CstKind::BindingIdentifier
      | CstKind::LabelIdentifier => Expr::Id(self.lower_identifier_like(cst)?),
      CstKind::TemplateLiteral | CstKind::SubstitutionTemplate => {
        Expr::LitTemplate(self.lower_template(cst, false)?)
      }
      CstKind::ArrayLiteral => Expr::LitArr(self.lower_array_literal(cst)?),
      CstKind::ObjectLiteral => Expr::LitObj(self.lower_object_literal(cst)?),
      CstKind::ParenthesizedExpression => {
        let inner = between(cst, CstKind::ParenthesisOpen, CstKind::ParenthesisClose);
        let [inner] = inner.as_slice() else {
          return Err(malformed(cst, "parenthesized expression"));
        };
        Expr::Paren(node(cst, ParenExpr {
          expression: self.lower_expr(inner)?,
          l_paren_token: self.child_token(cst, CstKind::ParenthesisOpen),
          r_paren_token: self.child_token(cst, CstKind::ParenthesisClose),
        }))
      }
      CstKind::CoverParenthesizedExpressionAndArrowParameterList => self.lower_cover_paren_expr(cst)?,
      k if is_binary_rule(k) => self.lower_binary(cst)?,
      k if is_chain_rule(k) => self.lower_chain(cst)?,
      CstKind::OptionalChain => return Err(malformed(cst, "optional chain base")),
      CstKind::ConditionalExpression => self.lower_conditional(cst)?,
      CstKind::AssignmentExpression => self.lower_assignment(cst)?,
      CstKind::Expression => self.lower_sequence(cst)?,
      CstKind::UnaryExpression => self.lower_unary(cst)?,
      CstKind::UpdateExpression => self.lower_update(cst)?,
      CstKind::AwaitExpression => {
        let argument = cst
          .children
          .get(1)
          .ok_or_else(|| malformed(cst, "await operand"))?;
        Expr::Await(node(cst, AwaitExpr {
          argument: self.lower_expr(argument)?,
          await_token: self.child_token(cst, CstKind::KeywordAwait),
        }))
      }
      CstKind::YieldExpression => {
        let argument = match cst.children.iter().skip(1).find(|c| !c.is(CstKind::Asterisk)) {
          Some(a) => Some(self.lower_expr(a)?),
          None => None,
        };
        Expr::Yield(node(cst, YieldExpr {
          argument,
          delegate: cst.has(CstKind::Asterisk),
          yield_token: self.child_token(cst, CstKind::KeywordYield),
          star_token: self.child_token(cst, CstKind::Asterisk),
        }))
      }
      CstKind::SpreadElement => Expr::Spread(self.lower_spread(cst)?),
      CstKind::MetaProperty | CstKind::NewTarget | CstKind::ImportMeta => self.lower_meta_property(cst)?,
      CstKind::ImportCall => self.lower_import_call(cst)?,
      CstKind::ArrowFunction | CstKind::AsyncArrowFunction => Expr::ArrowFunc(self.lower_arrow(cst)?),
      CstKind::FunctionExpression
      | CstKind::GeneratorExpression
      | CstKind::AsyncFunctionExpression
      | CstKind::AsyncGeneratorExpression => Expr::Func(self.lower_func_expr(cst)?),
      CstKind::ClassExpression => Expr::Class(self.lower_class_expr(cst)?),
      CstKind::TSAsExpression
      | CstKind::TSSatisfiesExpression
      | CstKind::TSNonNullExpression
      | CstKind::TSTypeAssertion => self.lower_ts_expr(cst)?,
      // Wrappers the producer kept with extra children, e.g. a literal with trivia.
      CstKind::Literal | CstKind::PrimaryExpression => {
        let inner = cst.first_rule().or(cst.children.first());
        self.lower_expr(inner.ok_or_else(|| malformed(cst, "expression"))?)?
      }
      _ => return Err(unsupported(cst)),
    })
  }

  fn lower_terminal_expr(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    Ok(match cst.kind {
      CstKind::KeywordThis => Expr::This(node(cst, ThisExpr {})),
      CstKind::KeywordSuper => Expr::Super(node(cst, SuperExpr {})),
      CstKind::NumericLiteral
      | CstKind::StringLiteral
      | CstKind::BigIntLiteral
      | CstKind::RegularExpressionLiteral
      | CstKind::KeywordNull
      | CstKind::KeywordTrue
      | CstKind::KeywordFalse => self.lower_literal(cst)?,
      CstKind::NoSubstitutionTemplate => Expr::LitTemplate(self.lower_template(cst, false)?),
      // `#x in obj`.
      CstKind::PrivateIdentifier => Expr::PrivateName(self.lower_private_identifier(cst)?),
      k if k == CstKind::IdentifierName || k.is_keyword() => {
        Expr::Id(self.lower_identifier_like(cst)?)
      }
      _ => return Err(unsupported(cst)),
    })
  }

  /// Folds a flat `operand op operand ...` chain.
  ///
  /// All operators of one chain share a precedence level; `**` folds to the right.
  fn lower_binary(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let children = cst.flat_children();
    if children.len() % 2 == 0 {
      return Err(malformed(cst, "operand after operator"));
    };
    let mut operands = Vec::with_capacity(children.len() / 2 + 1);
    let mut operators = Vec::with_capacity(children.len() / 2);
    for (i, c) in children.iter().enumerate() {
      if i % 2 == 0 {
        operands.push(self.lower_expr(c)?);
      } else {
        let op = BINARY_OPERATOR_MAPPING
          .get(&c.kind)
          .copied()
          .ok_or_else(|| malformed(c, "binary operator"))?;
        operators.push((op, self.token(c)));
      };
    }
    let right_assoc = operators
      .first()
      .is_some_and(|(op, _)| op.associativity() == Associativity::Right);
    if right_assoc {
      let mut acc = operands.pop().ok_or_else(|| malformed(cst, "operand"))?;
      while let Some((op, tok)) = operators.pop() {
        let left = operands.pop().ok_or_else(|| malformed(cst, "operand"))?;
        acc = binary(op, left, acc, tok);
      }
      Ok(acc)
    } else {
      let mut operands = operands.into_iter();
      let mut acc = operands.next().ok_or_else(|| malformed(cst, "operand"))?;
      for ((op, tok), right) in operators.into_iter().zip(operands) {
        acc = binary(op, acc, right, tok);
      }
      Ok(acc)
    }
  }

  fn lower_conditional(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let (Some(q), Some(c)) = (cst.position(CstKind::Question), cst.position(CstKind::Colon)) else {
      return Err(malformed(cst, "conditional `?` and `:`"));
    };
    let test = q.checked_sub(1).and_then(|i| cst.children.get(i));
    let consequent = cst.children.get(q + 1);
    let alternate = cst.children.get(c + 1);
    let (Some(test), Some(consequent), Some(alternate)) = (test, consequent, alternate) else {
      return Err(malformed(cst, "conditional operand"));
    };
    Ok(Expr::Cond(node(cst, CondExpr {
      test: self.lower_expr(test)?,
      consequent: self.lower_expr(consequent)?,
      alternate: self.lower_expr(alternate)?,
      question_token: self.child_token(cst, CstKind::Question),
      colon_token: self.child_token(cst, CstKind::Colon),
    })))
  }

  /// `lhs op rhs`. Object and array literal targets of `=` become destructuring patterns.
  fn lower_assignment(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let [lhs, op, rhs] = cst.children.as_slice() else {
      return Err(malformed(cst, "assignment target, operator and value"));
    };
    let operator = ASSIGNMENT_OPERATOR_MAPPING
      .get(&op.kind)
      .copied()
      .ok_or_else(|| malformed(op, "assignment operator"))?;
    let target = lhs.unwrap_passthrough();
    let left = if operator == OperatorName::Assignment {
      match target.kind {
        CstKind::ObjectLiteral | CstKind::ArrayLiteral => self.cst_to_pat(target)?,
        _ => expr_to_pat(self.lower_expr(target)?, target.kind)?,
      }
    } else {
      let expr = self.lower_expr(target)?;
      if !is_simple_target(&expr) {
        return Err(target.loc.error(LowerErrorType::InvalidAssignmentTarget, target.kind));
      };
      match expr {
        Expr::Id(id) => expr_to_pat(Expr::Id(id), target.kind)?,
        other => Pat::Expr(other),
      }
    };
    Ok(Expr::Assign(node(cst, AssignExpr {
      operator,
      left,
      right: self.lower_expr(rhs)?,
      operator_token: self.token(op),
    })))
  }

  /// `Expression`: one or more comma-separated expressions.
  fn lower_sequence(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let items = split_list(cst.flat_children());
    if let [item] = items.as_slice() {
      if item.comma.is_none() {
        if let [only] = item.parts.as_slice() {
          return self.lower_expr(only);
        };
      };
    };
    let mut expressions = Vec::with_capacity(items.len());
    for item in items {
      let [part] = item.parts.as_slice() else {
        return Err(malformed(cst, "sequence item"));
      };
      expressions.push(SequenceItem {
        expression: self.lower_expr(part)?,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(Expr::Sequence(node(cst, SequenceExpr { expressions })))
  }

  pub(crate) fn lower_unary(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let [op, operand] = cst.children.as_slice() else {
      return Err(malformed(cst, "unary operator and operand"));
    };
    let argument = self.lower_expr(operand)?;
    match op.kind {
      CstKind::KeywordAwait => Ok(Expr::Await(node(cst, AwaitExpr {
        argument,
        await_token: self.token(op),
      }))),
      CstKind::PlusPlus | CstKind::HyphenHyphen => self.update(cst, op, argument, true),
      _ => {
        let operator = UNARY_OPERATOR_MAPPING
          .get(&op.kind)
          .copied()
          .ok_or_else(|| malformed(op, "unary operator"))?;
        Ok(Expr::Unary(node(cst, UnaryExpr {
          operator,
          prefix: true,
          argument,
          operator_token: self.token(op),
        })))
      }
    }
  }

  fn lower_update(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let [first, second] = cst.children.as_slice() else {
      return Err(malformed(cst, "update operator and operand"));
    };
    let (op, operand, prefix) = if matches!(first.kind, CstKind::PlusPlus | CstKind::HyphenHyphen) {
      (first, second, true)
    } else {
      (second, first, false)
    };
    let argument = self.lower_expr(operand)?;
    self.update(cst, op, argument, prefix)
  }

  fn update(&mut self, cst: &CstNode, op: &CstNode, argument: Expr, prefix: bool) -> LowerResult<Expr> {
    if !is_simple_target(&argument) {
      return Err(argument.loc().error(LowerErrorType::InvalidAssignmentTarget, cst.kind));
    };
    let operator = match (op.kind, prefix) {
      (CstKind::PlusPlus, true) => OperatorName::PrefixIncrement,
      (CstKind::PlusPlus, false) => OperatorName::PostfixIncrement,
      (CstKind::HyphenHyphen, true) => OperatorName::PrefixDecrement,
      (CstKind::HyphenHyphen, false) => OperatorName::PostfixDecrement,
      _ => return Err(malformed(op, "`++` or `--`")),
    };
    Ok(Expr::Update(node(cst, UpdateExpr {
      operator,
      prefix,
      argument,
      operator_token: self.token(op),
    })))
  }

  /// `SpreadElement`, or any `... expr` pair.
  pub(crate) fn lower_spread(&mut self, cst: &CstNode) -> LowerResult<Node<SpreadElement>> {
    let argument = cst
      .children
      .iter()
      .find(|c| !c.is(CstKind::DotDotDot))
      .ok_or_else(|| malformed(cst, "spread argument"))?;
    Ok(node(cst, SpreadElement {
      argument: self.lower_expr(argument)?,
      ellipsis_token: self.child_token(cst, CstKind::DotDotDot),
    }))
  }

  /// `new.target` and `import.meta`.
  fn lower_meta_property(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    if cst.is(CstKind::MetaProperty) {
      if let [inner] = cst.children.as_slice() {
        return self.lower_meta_property(inner);
      };
    };
    let (Some(meta), Some(property)) = (cst.children.first(), cst.children.last()) else {
      return Err(malformed(cst, "meta property"));
    };
    if !cst.has(CstKind::Dot) || cst.children.len() != 3 {
      return Err(malformed(cst, "`.` between meta and property"));
    };
    Ok(Expr::MetaProperty(node(cst, MetaPropertyExpr {
      meta: Node::new(meta.loc, IdExpr {
        name: meta.text().unwrap_or_default().to_string(),
      }),
      property: Node::new(property.loc, IdExpr {
        name: property.text().unwrap_or_default().to_string(),
      }),
      dot_token: self.child_token(cst, CstKind::Dot),
    })))
  }

  /// `import(source)` and `import(source, options)`.
  fn lower_import_call(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    let inner: Vec<&CstNode> = cst
      .flat_children()
      .into_iter()
      .filter(|c| !matches!(c.kind, CstKind::KeywordImport | CstKind::ParenthesisOpen | CstKind::ParenthesisClose))
      .collect();
    let mut args = split_list(inner).into_iter();
    let source = match args.next().as_ref().map(|a| a.parts.as_slice()) {
      Some([source]) => self.lower_expr(source)?,
      _ => return Err(malformed(cst, "import source")),
    };
    let options = match args.next().as_ref().map(|a| a.parts.as_slice()) {
      Some([options]) => Some(self.lower_expr(options)?),
      Some(_) => return Err(malformed(cst, "import options")),
      None => None,
    };
    Ok(Expr::ImportCall(node(cst, ImportCallExpr {
      source,
      options,
      import_token: self.child_token(cst, CstKind::KeywordImport),
    })))
  }
}
