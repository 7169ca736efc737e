use super::lower_stmt;
use super::ts_lowerer;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::Expr;
use crate::ast::stmt::decl::VarDeclKind;
use crate::ast::stmt::ForHead;
use crate::ast::stmt::ForInit;
use crate::ast::stmt::Stmt;
use crate::cst::build::binding_id;
use crate::cst::build::id_ref;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::operator::OperatorName;

fn empty() -> CstNode {
  rule(CstKind::EmptyStatement, vec![tok(";")])
}

#[test]
fn for_clauses_are_classified() {
  // for (let i = 0; i < n; i++) ;
  let Stmt::For(f) = lower_stmt(rule(CstKind::ForStatement, vec![
    tok("for"),
    tok("("),
    rule(CstKind::LexicalDeclaration, vec![
      rule(CstKind::LetOrConst, vec![tok("let")]),
      rule(CstKind::LexicalBinding, vec![
        binding_id("i"),
        rule(CstKind::Initializer, vec![tok("="), tok("0")]),
      ]),
      tok(";"),
    ]),
    rule(CstKind::RelationalExpression, vec![id_ref("i"), tok("<"), id_ref("n")]),
    tok(";"),
    rule(CstKind::UpdateExpression, vec![id_ref("i"), tok("++")]),
    tok(")"),
    empty(),
  ])) else {
    panic!("expected a `for` statement");
  };
  let Some(ForInit::VarDecl(init)) = &f.stx.init else {
    panic!("expected a declaration initializer");
  };
  assert_eq!(init.stx.kind, VarDeclKind::Let);
  assert!(matches!(&init.stx.declarations[0].declarator.stx.init, Some(Expr::LitNum(_))));
  assert!(matches!(&f.stx.test, Some(Expr::Binary(b)) if b.stx.operator == OperatorName::LessThan));
  assert!(matches!(
    &f.stx.update,
    Some(Expr::Update(u)) if u.stx.operator == OperatorName::PostfixIncrement && !u.stx.prefix
  ));
  assert!(matches!(&f.stx.body, Stmt::Empty(_)));
}

#[test]
fn for_clauses_may_be_empty_or_expressions() {
  // for (;;) ;
  let Stmt::For(f) = lower_stmt(rule(CstKind::ForStatement, vec![
    tok("for"),
    tok("("),
    tok(";"),
    tok(";"),
    tok(")"),
    empty(),
  ])) else {
    panic!("expected a `for` statement");
  };
  assert!(f.stx.init.is_none());
  assert!(f.stx.test.is_none());
  assert!(f.stx.update.is_none());

  // for (x; ; ) ;
  let Stmt::For(f) = lower_stmt(rule(CstKind::ForStatement, vec![
    tok("for"),
    tok("("),
    id_ref("x"),
    tok(";"),
    tok(";"),
    tok(")"),
    empty(),
  ])) else {
    panic!("expected a `for` statement");
  };
  assert!(matches!(&f.stx.init, Some(ForInit::Expr(Expr::Id(id))) if id.stx.name == "x"));
  assert!(f.stx.test.is_none());

  // for (x) ;
  let (cst, _) = layout(rule(CstKind::ForStatement, vec![
    tok("for"),
    tok("("),
    id_ref("x"),
    tok(")"),
    empty(),
  ]));
  assert!(matches!(
    ts_lowerer().lower_stmt(&cst).unwrap_err().typ,
    LowerErrorType::MalformedCst(_)
  ));
}

fn var_in_head(op: &str) -> CstNode {
  rule(CstKind::ForInOfStatement, vec![
    tok("for"),
    tok("("),
    tok("var"),
    rule(CstKind::VariableDeclaration, vec![
      binding_id("x"),
      rule(CstKind::Initializer, vec![tok("="), tok("1")]),
    ]),
    tok(op),
    id_ref("o"),
    tok(")"),
    empty(),
  ])
}

#[test]
fn legacy_for_in_keeps_its_initializer() {
  // for (var x = 1 in o) ;
  let Stmt::ForIn(f) = lower_stmt(var_in_head("in")) else {
    panic!("expected a `for-in` statement");
  };
  let ForHead::VarDecl(decl) = &f.stx.left else {
    panic!("expected a declaration head");
  };
  assert_eq!(decl.stx.kind, VarDeclKind::Var);
  let declarator = &decl.stx.declarations[0].declarator.stx;
  assert!(matches!(&declarator.id, Pat::Id(id) if id.stx.name == "x"));
  assert!(matches!(&declarator.init, Some(Expr::LitNum(_))));
  assert!(matches!(&f.stx.right, Expr::Id(id) if id.stx.name == "o"));
  assert!(f.stx.in_token.is_some());

  // for (var x = 1 of o) ;
  let (cst, _) = layout(var_in_head("of"));
  assert!(matches!(
    ts_lowerer().lower_stmt(&cst).unwrap_err().typ,
    LowerErrorType::MalformedCst(_)
  ));
}

#[test]
fn for_of_with_lexical_binding_and_await() {
  // for await (const x of xs) ;
  let Stmt::ForOf(f) = lower_stmt(rule(CstKind::ForInOfStatement, vec![
    tok("for"),
    tok("await"),
    tok("("),
    rule(CstKind::ForDeclaration, vec![
      rule(CstKind::LetOrConst, vec![tok("const")]),
      rule(CstKind::ForBinding, vec![binding_id("x")]),
    ]),
    tok("of"),
    id_ref("xs"),
    tok(")"),
    empty(),
  ])) else {
    panic!("expected a `for-of` statement");
  };
  assert!(f.stx.await_);
  assert!(f.stx.await_token.is_some());
  let ForHead::VarDecl(decl) = &f.stx.left else {
    panic!("expected a declaration head");
  };
  assert_eq!(decl.stx.kind, VarDeclKind::Const);
  assert!(decl.stx.declarations[0].declarator.stx.init.is_none());

  // for (x.y in o) ;
  let Stmt::ForIn(f) = lower_stmt(rule(CstKind::ForInOfStatement, vec![
    tok("for"),
    tok("("),
    rule(CstKind::MemberExpression, vec![id_ref("x"), tok("."), tok("y")]),
    tok("in"),
    id_ref("o"),
    tok(")"),
    empty(),
  ])) else {
    panic!("expected a `for-in` statement");
  };
  assert!(matches!(&f.stx.left, ForHead::Pat(Pat::Expr(Expr::Member(_)))));
}

#[test]
fn switch_cases_unify_case_and_default() {
  // switch (x) { case 1: a; break; default: case 2: }
  let Stmt::Switch(s) = lower_stmt(rule(CstKind::SwitchStatement, vec![
    tok("switch"),
    tok("("),
    id_ref("x"),
    tok(")"),
    rule(CstKind::CaseBlock, vec![
      tok("{"),
      rule(CstKind::CaseClauses, vec![rule(CstKind::CaseClause, vec![
        tok("case"),
        tok("1"),
        tok(":"),
        rule(CstKind::ExpressionStatement, vec![id_ref("a"), tok(";")]),
        rule(CstKind::BreakStatement, vec![tok("break"), tok(";")]),
      ])]),
      rule(CstKind::DefaultClause, vec![tok("default"), tok(":")]),
      rule(CstKind::CaseClauses, vec![rule(CstKind::CaseClause, vec![
        tok("case"),
        tok("2"),
        tok(":"),
      ])]),
      tok("}"),
    ]),
  ])) else {
    panic!("expected a switch");
  };
  assert!(matches!(&s.stx.discriminant, Expr::Id(id) if id.stx.name == "x"));
  let cases: Vec<_> = s.stx.cases.iter().map(|c| &c.stx).collect();
  assert_eq!(cases.len(), 3);
  assert!(matches!(&cases[0].test, Some(Expr::LitNum(_))));
  assert_eq!(cases[0].consequent.len(), 2);
  assert!(matches!(&cases[0].consequent[1], Stmt::Break(_)));
  assert!(cases[1].test.is_none());
  assert!(cases[1].consequent.is_empty());
  assert!(cases[1].case_token.is_some());
  assert!(matches!(&cases[2].test, Some(Expr::LitNum(_))));
  assert!(s.stx.l_brace_token.is_some());
}
