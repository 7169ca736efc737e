use super::js_lowerer;
use super::lower_stmt;
use super::stmt_value;
use super::ts_lowerer;
use crate::ast::expr::pat::ObjPatProp;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::Expr;
use crate::ast::stmt::Stmt;
use crate::cst::build::binding_id;
use crate::cst::build::id_ref;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::error::LowerErrorType;
use crate::util::test::assert_same_shape;
use serde_json::json;

#[test]
fn object_binding_with_default_and_rest() {
  // const {a, b = 1, ...rest} = obj;
  let value = stmt_value(rule(CstKind::LexicalDeclaration, vec![
    rule(CstKind::LetOrConst, vec![tok("const")]),
    rule(CstKind::LexicalBinding, vec![
      rule(CstKind::ObjectBindingPattern, vec![
        tok("{"),
        rule(CstKind::BindingPropertyList, vec![
          rule(CstKind::SingleNameBinding, vec![binding_id("a")]),
          tok(","),
          rule(CstKind::SingleNameBinding, vec![
            binding_id("b"),
            rule(CstKind::Initializer, vec![tok("="), tok("1")]),
          ]),
          tok(","),
        ]),
        rule(CstKind::BindingRestProperty, vec![tok("..."), binding_id("rest")]),
        tok("}"),
      ]),
      rule(CstKind::Initializer, vec![tok("="), id_ref("obj")]),
    ]),
    tok(";"),
  ]));
  assert_same_shape(
    json!({
      "type": "VariableDeclaration",
      "kind": "const",
      "declarations": [{
        "declarator": {
          "type": "VariableDeclarator",
          "id": {
            "type": "ObjectPattern",
            "properties": [
              {
                "property": {
                  "type": "Property",
                  "key": { "type": "Identifier", "name": "a" },
                  "value": { "type": "Identifier", "name": "a" },
                  "kind": "init",
                  "shorthand": true,
                  "computed": false,
                },
              },
              {
                "property": {
                  "type": "Property",
                  "key": { "type": "Identifier", "name": "b" },
                  "value": {
                    "type": "AssignmentPattern",
                    "left": { "type": "Identifier", "name": "b" },
                    "right": { "type": "NumericLiteral", "value": 1.0, "raw": "1" },
                  },
                  "kind": "init",
                  "shorthand": true,
                  "computed": false,
                },
              },
              {
                "property": {
                  "type": "RestElement",
                  "argument": { "type": "Identifier", "name": "rest" },
                },
              },
            ],
          },
          "init": { "type": "Identifier", "name": "obj" },
        },
      }],
    }),
    value,
  );
}

#[test]
fn array_binding_keeps_elisions() {
  // let [, , x] = y;
  let Stmt::VarDecl(decl) = lower_stmt(rule(CstKind::LexicalDeclaration, vec![
    rule(CstKind::LetOrConst, vec![tok("let")]),
    rule(CstKind::LexicalBinding, vec![
      rule(CstKind::ArrayBindingPattern, vec![
        tok("["),
        rule(CstKind::Elision, vec![tok(","), tok(",")]),
        binding_id("x"),
        tok("]"),
      ]),
      rule(CstKind::Initializer, vec![tok("="), id_ref("y")]),
    ]),
  ])) else {
    panic!("expected a variable declaration");
  };
  let Pat::Arr(arr) = &decl.stx.declarations[0].declarator.stx.id else {
    panic!("expected an array pattern");
  };
  let elements: Vec<_> = arr.stx.elements.iter().map(|e| e.element.is_some()).collect();
  assert_eq!(elements, vec![false, false, true]);
  // Every elision is followed by its comma; the last element has none.
  assert!(arr.stx.elements[0].comma_token.is_some());
  assert!(arr.stx.elements[1].comma_token.is_some());
  assert!(arr.stx.elements[2].comma_token.is_none());
}

#[test]
fn shorthand_default_becomes_assignment_pattern() {
  // ({a = 1} = b)
  let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::ObjectLiteral, vec![
      tok("{"),
      rule(CstKind::PropertyDefinition, vec![rule(CstKind::CoverInitializedName, vec![
        id_ref("a"),
        rule(CstKind::Initializer, vec![tok("="), tok("1")]),
      ])]),
      tok("}"),
    ]),
    tok("="),
    id_ref("b"),
  ]));
  let Expr::Assign(assign) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an assignment");
  };
  let Pat::Obj(obj) = &assign.stx.left else {
    panic!("expected an object pattern");
  };
  let ObjPatProp::Prop(prop) = &obj.stx.properties[0].property else {
    panic!("expected a property");
  };
  assert!(prop.stx.shorthand);
  assert!(matches!(&prop.stx.value, Pat::Assign(a) if matches!(&a.stx.left, Pat::Id(id) if id.stx.name == "a")));
}

#[test]
fn rest_element_must_be_last_in_assignment_target() {
  // [...a, b] = c
  let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::ArrayLiteral, vec![
      tok("["),
      tok("..."),
      id_ref("a"),
      tok(","),
      id_ref("b"),
      tok("]"),
    ]),
    tok("="),
    id_ref("c"),
  ]));
  assert_eq!(
    ts_lowerer().lower_expr(&cst).unwrap_err().typ,
    LowerErrorType::InvalidAssignmentTarget
  );
}

#[test]
fn function_parameters_pair_with_commas() {
  // function f(a = 1, ...b) {}
  let value = stmt_value(rule(CstKind::FunctionDeclaration, vec![
    tok("function"),
    binding_id("f"),
    rule(CstKind::FormalParameters, vec![
      tok("("),
      rule(CstKind::FormalParameterList, vec![
        rule(CstKind::FormalParameter, vec![
          binding_id("a"),
          rule(CstKind::Initializer, vec![tok("="), tok("1")]),
        ]),
        tok(","),
        rule(CstKind::FunctionRestParameter, vec![rule(CstKind::BindingRestElement, vec![
          tok("..."),
          binding_id("b"),
        ])]),
      ]),
      tok(")"),
    ]),
    tok("{"),
    rule(CstKind::FunctionBody, Vec::new()),
    tok("}"),
  ]));
  assert_same_shape(
    json!({
      "type": "FunctionDeclaration",
      "id": { "type": "Identifier", "name": "f" },
      "params": [
        {
          "param": {
            "type": "AssignmentPattern",
            "left": { "type": "Identifier", "name": "a" },
            "right": { "type": "NumericLiteral", "value": 1.0, "raw": "1" },
          },
        },
        { "param": { "type": "RestElement", "argument": { "type": "Identifier", "name": "b" } } },
      ],
      "body": { "type": "BlockStatement", "body": [] },
      "generator": false,
      "async": false,
    }),
    value,
  );
}

#[test]
fn parameter_properties_are_typescript_only() {
  let (cst, _) = layout(rule(CstKind::FormalParameter, vec![tok("private"), binding_id("x")]));
  let Pat::ParamProp(prop) = ts_lowerer().lower_formal_param(&cst).unwrap() else {
    panic!("expected a parameter property");
  };
  assert!(matches!(&prop.stx.parameter, Pat::Id(id) if id.stx.name == "x"));
  assert_eq!(
    js_lowerer().lower_formal_param(&cst).unwrap_err().typ,
    LowerErrorType::TypeSyntaxInJs
  );
}

#[test]
fn renamed_binding_property_with_bare_key() {
  // const { a: b = 2 } = o;
  let Stmt::VarDecl(decl) = lower_stmt(rule(CstKind::LexicalDeclaration, vec![
    rule(CstKind::LetOrConst, vec![tok("const")]),
    rule(CstKind::LexicalBinding, vec![
      rule(CstKind::ObjectBindingPattern, vec![
        tok("{"),
        rule(CstKind::BindingProperty, vec![
          tok("a"),
          tok(":"),
          rule(CstKind::BindingElement, vec![
            binding_id("b"),
            rule(CstKind::Initializer, vec![tok("="), tok("2")]),
          ]),
        ]),
        tok("}"),
      ]),
      rule(CstKind::Initializer, vec![tok("="), id_ref("o")]),
    ]),
    tok(";"),
  ])) else {
    panic!("expected a variable declaration");
  };
  let Pat::Obj(obj) = &decl.stx.declarations[0].declarator.stx.id else {
    panic!("expected an object pattern");
  };
  let ObjPatProp::Prop(prop) = &obj.stx.properties[0].property else {
    panic!("expected a property");
  };
  assert!(!prop.stx.shorthand);
  assert!(prop.stx.colon_token.is_some());
  assert!(matches!(&prop.stx.key, Expr::Id(id) if id.stx.name == "a"));
  let Pat::Assign(assign) = &prop.stx.value else {
    panic!("expected a default value");
  };
  assert!(matches!(&assign.stx.left, Pat::Id(id) if id.stx.name == "b"));
  assert!(matches!(&assign.stx.right, Expr::LitNum(_)));

  // const { a: c } = o; with a bare value
  let Stmt::VarDecl(decl) = lower_stmt(rule(CstKind::LexicalDeclaration, vec![
    rule(CstKind::LetOrConst, vec![tok("const")]),
    rule(CstKind::LexicalBinding, vec![
      rule(CstKind::ObjectBindingPattern, vec![
        tok("{"),
        rule(CstKind::BindingProperty, vec![tok("a"), tok(":"), tok("c")]),
        tok("}"),
      ]),
      rule(CstKind::Initializer, vec![tok("="), id_ref("o")]),
    ]),
  ])) else {
    panic!("expected a variable declaration");
  };
  let Pat::Obj(obj) = &decl.stx.declarations[0].declarator.stx.id else {
    panic!("expected an object pattern");
  };
  let ObjPatProp::Prop(prop) = &obj.stx.properties[0].property else {
    panic!("expected a property");
  };
  assert!(matches!(&prop.stx.value, Pat::Id(id) if id.stx.name == "c"));
}

#[test]
fn bare_initializer_values() {
  // let x = 1;
  let Stmt::VarDecl(decl) = lower_stmt(rule(CstKind::LexicalDeclaration, vec![
    rule(CstKind::LetOrConst, vec![tok("let")]),
    rule(CstKind::LexicalBinding, vec![
      binding_id("x"),
      rule(CstKind::Initializer, vec![tok("="), tok("1")]),
    ]),
    tok(";"),
  ])) else {
    panic!("expected a variable declaration");
  };
  let declarator = &decl.stx.declarations[0].declarator.stx;
  assert!(matches!(&declarator.init, Some(Expr::LitNum(_))));
  assert!(declarator.equals_token.is_some());

  let (empty, _) = layout(rule(CstKind::Initializer, vec![tok("=")]));
  assert!(matches!(
    ts_lowerer().lower_initializer(&empty).unwrap_err().typ,
    LowerErrorType::MalformedCst(_)
  ));
}

#[test]
fn shorthand_default_with_bare_name() {
  // ({a = "x"} = b)
  let (cst, _) = layout(rule(CstKind::AssignmentExpression, vec![
    rule(CstKind::ObjectLiteral, vec![
      tok("{"),
      rule(CstKind::PropertyDefinition, vec![rule(CstKind::CoverInitializedName, vec![
        tok("a"),
        rule(CstKind::Initializer, vec![tok("="), tok("\"x\"")]),
      ])]),
      tok("}"),
    ]),
    tok("="),
    id_ref("b"),
  ]));
  let Expr::Assign(assign) = ts_lowerer().lower_expr(&cst).unwrap() else {
    panic!("expected an assignment");
  };
  let Pat::Obj(obj) = &assign.stx.left else {
    panic!("expected an object pattern");
  };
  let ObjPatProp::Prop(prop) = &obj.stx.properties[0].property else {
    panic!("expected a property");
  };
  assert!(matches!(&prop.stx.key, Expr::Id(id) if id.stx.name == "a"));
  let Pat::Assign(value) = &prop.stx.value else {
    panic!("expected an assignment pattern");
  };
  assert!(matches!(&value.stx.left, Pat::Id(id) if id.stx.name == "a"));
  assert!(matches!(&value.stx.right, Expr::LitStr(s) if s.stx.value == "x"));
}
