use super::expr_value;
use super::ts_lowerer;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::BinaryExpr;
use crate::ast::expr::Expr;
use crate::ast::func::FuncBody;
use crate::ast::node::Node;
use crate::cst::build::id_ref;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::lower::Lowerer;
use crate::operator::OperatorName;
use crate::util::test::assert_same_shape;
use crate::LowerOptions;
use serde_json::json;

fn paren(inner: Vec<CstNode>) -> CstNode {
  let mut children = vec![tok("(")];
  children.extend(inner);
  children.push(tok(")"));
  rule(CstKind::CoverParenthesizedExpressionAndArrowParameterList, children)
}

#[test]
fn subtraction_is_left_associative() {
  let value = expr_value(rule(CstKind::AdditiveExpression, vec![
    id_ref("a"),
    tok("-"),
    id_ref("b"),
    tok("-"),
    id_ref("c"),
  ]));
  assert_same_shape(
    json!({
      "type": "BinaryExpression",
      "operator": "-",
      "left": {
        "type": "BinaryExpression",
        "operator": "-",
        "left": { "type": "Identifier", "name": "a" },
        "right": { "type": "Identifier", "name": "b" },
      },
      "right": { "type": "Identifier", "name": "c" },
    }),
    value,
  );
}

#[test]
fn exponentiation_is_right_associative() {
  let (cst, _) = layout(rule(CstKind::ExponentiationExpression, vec![
    id_ref("a"),
    tok("**"),
    id_ref("b"),
    tok("**"),
    id_ref("c"),
  ]));
  let outer: Node<BinaryExpr> = ts_lowerer().lower_expr(&cst).unwrap().try_into().unwrap();
  assert_eq!(outer.stx.operator, OperatorName::Exponentiation);
  assert!(matches!(&outer.stx.left, Expr::Id(id) if id.stx.name == "a"));
  let Expr::Binary(inner) = &outer.stx.right else {
    panic!("expected the right operand to nest");
  };
  assert!(matches!(&inner.stx.right, Expr::Id(id) if id.stx.name == "c"));
  // The nested operand spans `b ** c` only.
  assert_eq!(inner.loc.0, cst.children[2].loc.0);
}

#[test]
fn short_circuit_operators_are_logical() {
  let value = expr_value(rule(CstKind::ShortCircuitExpression, vec![
    id_ref("a"),
    tok("??"),
    id_ref("b"),
  ]));
  assert_eq!(value["type"], "LogicalExpression");
  assert_eq!(value["operator"], "??");
}

#[test]
fn optional_flag_belongs_to_the_segment_after_question_dot() {
  // a?.b.c?.()
  let value = expr_value(rule(CstKind::OptionalExpression, vec![
    id_ref("a"),
    rule(CstKind::OptionalChain, vec![
      tok("?."),
      tok("b"),
      tok("."),
      tok("c"),
      tok("?."),
      rule(CstKind::Arguments, vec![tok("("), tok(")")]),
    ]),
  ]));
  assert_same_shape(
    json!({
      "type": "OptionalCallExpression",
      "callee": {
        "type": "OptionalMemberExpression",
        "object": {
          "type": "OptionalMemberExpression",
          "object": { "type": "Identifier", "name": "a" },
          "property": { "type": "Identifier", "name": "b" },
          "computed": false,
          "optional": true,
        },
        "property": { "type": "Identifier", "name": "c" },
        "computed": false,
        "optional": false,
      },
      "arguments": [],
      "optional": true,
    }),
    value,
  );
}

#[test]
fn members_before_the_first_question_dot_are_plain() {
  // a.b?.[c]
  let (cst, _) = layout(rule(CstKind::OptionalExpression, vec![
    rule(CstKind::MemberExpression, vec![id_ref("a"), tok("."), tok("b")]),
    rule(CstKind::OptionalChain, vec![tok("?."), tok("["), id_ref("c"), tok("]")]),
  ]));
  let Expr::OptionalMember(outer) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an optional member expression");
  };
  assert!(outer.stx.optional);
  assert!(outer.stx.prop.computed);
  assert!(matches!(&outer.stx.object, Expr::Member(_)));
}

#[test]
fn new_without_arguments_wraps_the_whole_member_chain() {
  // new a.b
  let (cst, _) = layout(rule(CstKind::NewExpression, vec![
    tok("new"),
    rule(CstKind::MemberExpression, vec![id_ref("a"), tok("."), tok("b")]),
  ]));
  let Expr::New(new) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected a new expression");
  };
  assert!(new.stx.args.arguments.is_empty());
  assert!(matches!(&new.stx.callee, Expr::Member(_)));
  assert_eq!(new.loc, cst.loc);
}

#[test]
fn parenthesized_group_without_arrow_is_a_sequence() {
  let value = expr_value(paren(vec![rule(CstKind::Expression, vec![
    id_ref("a"),
    tok(","),
    id_ref("b"),
  ])]));
  assert_same_shape(
    json!({
      "type": "ParenthesizedExpression",
      "expression": {
        "type": "SequenceExpression",
        "expressions": [
          { "expression": { "type": "Identifier", "name": "a" } },
          { "expression": { "type": "Identifier", "name": "b" } },
        ],
      },
    }),
    value,
  );
}

#[test]
fn cover_node_is_read_per_context() {
  // (a, ...b) => a
  let (cst, _) = layout(rule(CstKind::ArrowFunction, vec![
    paren(vec![id_ref("a"), tok(","), tok("..."), id_ref("b")]),
    tok("=>"),
    id_ref("a"),
  ]));
  let mut l = ts_lowerer();
  // A rest element cannot appear in a parenthesized expression.
  let err = l.lower_expr(&cst.children[0]).unwrap_err();
  assert_eq!(err.typ, LowerErrorType::InvalidCoverGrammar);

  let Expr::ArrowFunc(arrow) = l.lower_expr(&cst).unwrap() else {
    panic!("expected an arrow function");
  };
  let params = &arrow.stx.func.params;
  assert_eq!(params.len(), 2);
  assert!(matches!(&params[0].param, Pat::Id(id) if id.stx.name == "a"));
  assert!(params[0].comma_token.is_some());
  assert!(params[1].param.is_rest());
  assert!(params[1].comma_token.is_none());
  assert!(arrow.stx.expression);
  assert!(arrow.stx.arrow_token.is_some());
}

#[test]
fn same_pair_is_a_sequence_or_two_parameters() {
  // (x, y) => x
  let (cst, _) = layout(rule(CstKind::ArrowFunction, vec![
    paren(vec![id_ref("x"), tok(","), id_ref("y")]),
    tok("=>"),
    id_ref("x"),
  ]));
  let mut l = ts_lowerer();
  let Expr::Paren(group) = l.lower_expr(&cst.children[0]).unwrap() else {
    panic!("expected a parenthesized expression");
  };
  assert!(matches!(&group.stx.expression, Expr::Sequence(_)));

  let Expr::ArrowFunc(arrow) = l.lower_expr(&cst).unwrap() else {
    panic!("expected an arrow function");
  };
  let names: Vec<_> = arrow
    .stx
    .func
    .params
    .iter()
    .map(|p| match &p.param {
      Pat::Id(id) => id.stx.name.as_str(),
      other => panic!("expected an identifier parameter, got {other:?}"),
    })
    .collect();
  assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn trailing_comma_keeps_its_separator() {
  // [a, b,]
  let (cst, _) = layout(rule(CstKind::ArrayLiteral, vec![
    tok("["),
    id_ref("a"),
    tok(","),
    id_ref("b"),
    tok(","),
    tok("]"),
  ]));
  let Expr::LitArr(arr) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an array literal");
  };
  assert_eq!(arr.stx.elements.len(), 2);
  assert!(arr.stx.elements.iter().all(|e| e.comma_token.is_some()));
}

#[test]
fn async_call_head_becomes_arrow_parameters() {
  // async (x, ...xs) => x + xs.length
  let value = expr_value(rule(CstKind::AsyncArrowFunction, vec![
    rule(CstKind::CoverCallExpressionAndAsyncArrowHead, vec![
      id_ref("async"),
      rule(CstKind::Arguments, vec![
        tok("("),
        id_ref("x"),
        tok(","),
        tok("..."),
        id_ref("xs"),
        tok(")"),
      ]),
    ]),
    tok("=>"),
    rule(CstKind::AdditiveExpression, vec![
      id_ref("x"),
      tok("+"),
      rule(CstKind::MemberExpression, vec![id_ref("xs"), tok("."), tok("length")]),
    ]),
  ]));
  assert_same_shape(
    json!({
      "type": "ArrowFunctionExpression",
      "id": null,
      "params": [
        { "param": { "type": "Identifier", "name": "x" } },
        { "param": { "type": "RestElement", "argument": { "type": "Identifier", "name": "xs" } } },
      ],
      "body": {
        "type": "BinaryExpression",
        "operator": "+",
        "left": { "type": "Identifier", "name": "x" },
        "right": {
          "type": "MemberExpression",
          "object": { "type": "Identifier", "name": "xs" },
          "property": { "type": "Identifier", "name": "length" },
          "computed": false,
        },
      },
      "generator": false,
      "async": true,
      "expression": true,
    }),
    value,
  );
}

#[test]
fn async_call_without_arrow_stays_a_call() {
  let (cst, _) = layout(rule(CstKind::CoverCallExpressionAndAsyncArrowHead, vec![
    id_ref("async"),
    rule(CstKind::Arguments, vec![tok("("), id_ref("x"), tok(")")]),
  ]));
  let Expr::Call(call) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected a call expression");
  };
  assert!(matches!(&call.stx.callee, Expr::Id(id) if id.stx.name == "async"));
  assert_eq!(call.stx.args.arguments.len(), 1);
}

#[test]
fn empty_parentheses_need_an_arrow_unless_allowed() {
  let (cst, _) = layout(paren(Vec::new()));
  let Expr::Id(id) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an identifier");
  };
  assert_eq!(id.stx.name, "undefined");

  let mut strict = Lowerer::new(LowerOptions {
    empty_parens: false,
    ..LowerOptions::default()
  });
  assert_eq!(
    strict.lower_expr(&cst).unwrap_err().typ,
    LowerErrorType::InvalidCoverGrammar
  );
}

#[test]
fn array_literal_target_becomes_a_pattern() {
  // [a, ...b] = c
  let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::ArrayLiteral, vec![
      tok("["),
      id_ref("a"),
      tok(","),
      tok("..."),
      id_ref("b"),
      tok("]"),
    ]),
    tok("="),
    id_ref("c"),
  ]));
  let Expr::Assign(assign) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an assignment");
  };
  let Pat::Arr(arr) = &assign.stx.left else {
    panic!("expected an array pattern");
  };
  assert_eq!(arr.stx.elements.len(), 2);
  assert!(matches!(&arr.stx.elements[1].element, Some(Pat::Rest(_))));
}

#[test]
fn compound_assignment_needs_a_simple_target() {
  let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::AdditiveExpression, vec![id_ref("a"), tok("+"), id_ref("b")]),
    tok("+="),
    tok("1"),
  ]));
  assert_eq!(
    ts_lowerer().lower_expr(&cst).unwrap_err().typ,
    LowerErrorType::InvalidAssignmentTarget
  );

  let (ok, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::MemberExpression, vec![id_ref("a"), tok("."), tok("b")]),
    tok("+="),
    tok("1"),
  ]));
  let Expr::Assign(assign) = ts_lowerer().lower_expr(&ok).unwrap() else {
    panic!("expected an assignment");
  };
  assert_eq!(assign.stx.operator, OperatorName::AssignmentAddition);
  assert!(matches!(&assign.stx.left, Pat::Expr(Expr::Member(_))));
}

#[test]
fn block_arrow_body_marks_directives() {
  // () => { "use strict"; }
  let (cst, _) = layout(rule(CstKind::ArrowFunction, vec![
    paren(Vec::new()),
    tok("=>"),
    rule(CstKind::ConciseBody, vec![
      tok("{"),
      rule(CstKind::FunctionBody, vec![rule(CstKind::ExpressionStatement, vec![
        tok("\"use strict\""),
        tok(";"),
      ])]),
      tok("}"),
    ]),
  ]));
  let Expr::ArrowFunc(arrow) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an arrow function");
  };
  assert!(!arrow.stx.expression);
  assert!(arrow.stx.func.params.is_empty());
  let Some(FuncBody::Block(block)) = &arrow.stx.func.body else {
    panic!("expected a block body");
  };
  let value = serde_json::to_value(&block.stx.body[0]).unwrap();
  assert_eq!(value["directive"], "use strict");
}

#[test]
fn concise_body_may_hold_a_braced_expression() {
  // x => function () {}
  let (cst, _) = layout(rule(CstKind::ArrowFunction, vec![
    tok("x"),
    tok("=>"),
    rule(CstKind::ConciseBody, vec![rule(CstKind::ExpressionBody, vec![rule(
      CstKind::AssignmentExpression,
      vec![rule(CstKind::FunctionExpression, vec![
        tok("function"),
        tok("("),
        tok(")"),
        tok("{"),
        tok("}"),
      ])],
    )])]),
  ]));
  let Expr::ArrowFunc(arrow) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an arrow function");
  };
  assert!(arrow.stx.expression);
  let Some(FuncBody::Expression(Expr::Func(f))) = &arrow.stx.func.body else {
    panic!("expected a function expression body");
  };
  assert!(matches!(&f.stx.func.body, Some(FuncBody::Block(b)) if b.stx.body.is_empty()));

  // x => class {}
  let (cst, _) = layout(rule(CstKind::ArrowFunction, vec![
    tok("x"),
    tok("=>"),
    rule(CstKind::ConciseBody, vec![rule(CstKind::ClassExpression, vec![
      tok("class"),
      rule(CstKind::ClassTail, vec![tok("{"), tok("}")]),
    ])]),
  ]));
  let Expr::ArrowFunc(arrow) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an arrow function");
  };
  assert!(arrow.stx.expression);
  assert!(matches!(&arrow.stx.func.body, Some(FuncBody::Expression(Expr::Class(_)))));
}
