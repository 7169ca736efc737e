use super::lower_stmt;
use super::ts_lowerer;
use crate::ast::class::ClassMember;
use crate::ast::class::MethodDef;
use crate::ast::class::MethodKind;
use crate::ast::expr::lit::ObjMember;
use crate::ast::expr::lit::PropKind;
use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::cst::build::binding_id;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::cst::CstNode;

/// `kind` with `head` before an empty parameter list and body, e.g. `get x() {}`.
fn method(kind: CstKind, head: Vec<CstNode>) -> CstNode {
  let mut children = head;
  children.extend([tok("("), tok(")"), tok("{"), tok("}")]);
  rule(kind, children)
}

fn class_methods(elements: Vec<CstNode>) -> Vec<Node<MethodDef>> {
  let mut body = vec![tok("{")];
  body.push(rule(CstKind::ClassBody, elements));
  body.push(tok("}"));
  let Stmt::ClassDecl(decl) = lower_stmt(rule(CstKind::ClassDeclaration, vec![
    tok("class"),
    binding_id("C"),
    rule(CstKind::ClassTail, body),
  ])) else {
    panic!("expected a class declaration");
  };
  decl
    .stx
    .class
    .body
    .stx
    .body
    .iter()
    .map(|m| match m {
      ClassMember::Method(m) => m.clone(),
      other => panic!("expected a method, got {other:?}"),
    })
    .collect()
}

fn key_name(m: &MethodDef) -> &str {
  match &m.key {
    Expr::Id(id) => &id.stx.name,
    other => panic!("expected an identifier key, got {other:?}"),
  }
}

#[test]
fn accessors_differ_from_methods_named_get_and_set() {
  // class C { get x() {} set x(v) {} get() {} set() {} }
  let methods = class_methods(vec![
    rule(CstKind::ClassElement, vec![method(CstKind::MethodDefinition, vec![tok("get"), tok("x")])]),
    rule(CstKind::ClassElement, vec![rule(CstKind::MethodDefinition, vec![
      tok("set"),
      tok("x"),
      tok("("),
      rule(CstKind::PropertySetParameterList, vec![rule(CstKind::FormalParameter, vec![binding_id("v")])]),
      tok(")"),
      tok("{"),
      tok("}"),
    ])]),
    rule(CstKind::ClassElement, vec![method(CstKind::MethodDefinition, vec![tok("get")])]),
    rule(CstKind::ClassElement, vec![method(CstKind::MethodDefinition, vec![tok("set")])]),
  ]);
  let kinds: Vec<_> = methods.iter().map(|m| (key_name(&m.stx), m.stx.kind)).collect();
  assert_eq!(kinds, vec![
    ("x", MethodKind::Get),
    ("x", MethodKind::Set),
    ("get", MethodKind::Method),
    ("set", MethodKind::Method),
  ]);
  assert_eq!(methods[1].stx.value.stx.func.params.len(), 1);
  assert!(methods[0].stx.value.stx.func.params.is_empty());
}

#[test]
fn only_an_instance_constructor_is_a_constructor() {
  // class C { constructor() {} static constructor() {} "constructor"() {} }
  let methods = class_methods(vec![
    rule(CstKind::ClassElement, vec![method(CstKind::MethodDefinition, vec![tok("constructor")])]),
    rule(CstKind::ClassElement, vec![
      tok("static"),
      method(CstKind::MethodDefinition, vec![tok("constructor")]),
    ]),
    rule(CstKind::ClassElement, vec![method(CstKind::MethodDefinition, vec![tok("\"constructor\"")])]),
  ]);
  assert_eq!(methods[0].stx.kind, MethodKind::Constructor);
  assert!(!methods[0].stx.modifiers.static_);
  assert_eq!(methods[1].stx.kind, MethodKind::Method);
  assert!(methods[1].stx.modifiers.static_);
  assert_eq!(methods[2].stx.kind, MethodKind::Constructor);
}

#[test]
fn async_and_generator_methods() {
  // class C { async a() {} *g() {} async *ag() {} }
  let methods = class_methods(vec![
    rule(CstKind::ClassElement, vec![method(CstKind::AsyncMethod, vec![tok("async"), tok("a")])]),
    rule(CstKind::ClassElement, vec![method(CstKind::GeneratorMethod, vec![tok("*"), tok("g")])]),
    rule(CstKind::ClassElement, vec![method(CstKind::AsyncGeneratorMethod, vec![
      tok("async"),
      tok("*"),
      tok("ag"),
    ])]),
  ]);
  let flags: Vec<_> = methods
    .iter()
    .map(|m| {
      let func = &m.stx.value.stx.func;
      (key_name(&m.stx), func.async_, func.generator, m.stx.kind)
    })
    .collect();
  assert_eq!(flags, vec![
    ("a", true, false, MethodKind::Method),
    ("g", false, true, MethodKind::Method),
    ("ag", true, true, MethodKind::Method),
  ]);
  let ag = &methods[2].stx.value.stx.func;
  assert!(ag.async_token.is_some());
  assert!(ag.star_token.is_some());
  assert!(ag.function_token.is_none());
}

#[test]
fn object_literal_accessors_and_methods() {
  // ({ get a() {}, set a(v) {}, b() {}, *c() {} })
  let (cst, _) = layout(rule(CstKind::ObjectLiteral, vec![
    tok("{"),
    rule(CstKind::PropertyDefinition, vec![method(CstKind::MethodDefinition, vec![tok("get"), tok("a")])]),
    tok(","),
    rule(CstKind::PropertyDefinition, vec![rule(CstKind::MethodDefinition, vec![
      tok("set"),
      tok("a"),
      tok("("),
      binding_id("v"),
      tok(")"),
      tok("{"),
      tok("}"),
    ])]),
    tok(","),
    rule(CstKind::PropertyDefinition, vec![method(CstKind::MethodDefinition, vec![tok("b")])]),
    tok(","),
    rule(CstKind::PropertyDefinition, vec![method(CstKind::GeneratorMethod, vec![tok("*"), tok("c")])]),
    tok("}"),
  ]));
  let Expr::LitObj(obj) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an object literal");
  };
  let props: Vec<_> = obj
    .stx
    .properties
    .iter()
    .map(|p| match &p.property {
      ObjMember::Prop(p) => &p.stx,
      ObjMember::Spread(_) => panic!("expected a property"),
    })
    .collect();
  let shapes: Vec<_> = props.iter().map(|p| (p.kind, p.method)).collect();
  assert_eq!(shapes, vec![
    (PropKind::Get, false),
    (PropKind::Set, false),
    (PropKind::Init, true),
    (PropKind::Init, true),
  ]);
  assert!(props.iter().all(|p| matches!(&p.value, Expr::Func(_)) && !p.shorthand));
  let Expr::Func(setter) = &props[1].value else {
    unreachable!();
  };
  assert_eq!(setter.stx.func.params.len(), 1);
  let Expr::Func(generator) = &props[3].value else {
    unreachable!();
  };
  assert!(generator.stx.func.generator);

  let value = serde_json::to_value(&obj).unwrap();
  assert_eq!(value["properties"][0]["property"]["kind"], "get");
  assert_eq!(value["properties"][1]["property"]["kind"], "set");
  assert_eq!(value["properties"][2]["property"]["method"], true);
}
