use super::js_lowerer;
use super::lower_stmt;
use super::ts_lowerer;
use crate::ast::expr::Expr;
use crate::ast::stmt::Stmt;
use crate::ast::ts::decl::TsModuleKind;
use crate::ast::ts::decl::TsModuleName;
use crate::ast::ts::decl::TsModuleRef;
use crate::ast::ts::types::TsKeyword;
use crate::ast::ts::types::TsType;
use crate::ast::ts::types::TsTypeElement;
use crate::ast::ts::TsEntityName;
use crate::cst::build::binding_id;
use crate::cst::build::id_ref;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::term;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::error::LowerErrorType;

#[test]
fn interface_with_heritage_and_members() {
  // interface A<T> extends B, C.D<T> { readonly x?: string; }
  let Stmt::TsInterface(iface) = lower_stmt(rule(CstKind::TSInterfaceDeclaration, vec![
    tok("interface"),
    binding_id("A"),
    rule(CstKind::TSTypeParameters, vec![tok("<"), binding_id("T"), tok(">")]),
    tok("extends"),
    rule(CstKind::TSExpressionWithTypeArguments, vec![id_ref("B")]),
    tok(","),
    rule(CstKind::TSExpressionWithTypeArguments, vec![
      rule(CstKind::TSEntityName, vec![tok("C"), tok("."), tok("D")]),
      rule(CstKind::TSTypeArguments, vec![tok("<"), tok("T"), tok(">")]),
    ]),
    rule(CstKind::TSInterfaceBody, vec![
      tok("{"),
      rule(CstKind::TSPropertySignature, vec![
        tok("readonly"),
        tok("x"),
        tok("?"),
        rule(CstKind::TSTypeAnnotation, vec![tok(":"), tok("string")]),
      ]),
      tok(";"),
      tok("}"),
    ]),
  ])) else {
    panic!("expected an interface");
  };
  let iface = &iface.stx;
  assert_eq!(iface.id.stx.name, "A");
  assert_eq!(iface.type_parameters.as_ref().unwrap().stx.params[0].param.stx.name, "T");
  assert_eq!(iface.extends.len(), 2);
  assert!(matches!(&iface.extends[0].stx.expression, TsEntityName::Id(id) if id.stx.name == "B"));
  let TsEntityName::Qualified(q) = &iface.extends[1].stx.expression else {
    panic!("expected a qualified heritage name");
  };
  assert_eq!(q.stx.right.stx.name, "D");
  assert!(iface.extends[1].stx.type_arguments.is_some());

  let [TsTypeElement::PropertySignature(prop)] = iface.body.stx.body.as_slice() else {
    panic!("expected one property signature");
  };
  assert!(prop.stx.readonly);
  assert!(prop.stx.optional);
  let ann = prop.stx.type_annotation.as_ref().unwrap();
  assert!(matches!(&ann.stx.type_annotation, TsType::Keyword(k) if k.stx.keyword == TsKeyword::String));
}

#[test]
fn const_enum_members() {
  // const enum E { A, B = 1, "c" }
  let Stmt::TsEnum(e) = lower_stmt(rule(CstKind::TSEnumDeclaration, vec![
    tok("const"),
    tok("enum"),
    binding_id("E"),
    tok("{"),
    rule(CstKind::TSEnumMember, vec![tok("A")]),
    tok(","),
    rule(CstKind::TSEnumMember, vec![
      tok("B"),
      rule(CstKind::Initializer, vec![tok("="), tok("1")]),
    ]),
    tok(","),
    rule(CstKind::TSEnumMember, vec![tok("\"c\"")]),
    tok("}"),
  ])) else {
    panic!("expected an enum");
  };
  assert!(e.stx.const_);
  let members: Vec<_> = e.stx.members.iter().map(|m| &m.member.stx).collect();
  assert_eq!(members.len(), 3);
  assert!(members[0].initializer.is_none());
  assert!(matches!(&members[1].initializer, Some(Expr::LitNum(_))));
  assert!(matches!(&members[2].id, Expr::LitStr(s) if s.stx.value == "c"));
  assert!(e.stx.members[2].comma_token.is_none());
}

#[test]
fn dotted_namespace_name_is_qualified() {
  // namespace A.B { ; }
  let Stmt::TsModule(m) = lower_stmt(rule(CstKind::TSModuleDeclaration, vec![
    tok("namespace"),
    rule(CstKind::TSEntityName, vec![tok("A"), tok("."), tok("B")]),
    rule(CstKind::TSModuleBlock, vec![
      tok("{"),
      rule(CstKind::EmptyStatement, vec![tok(";")]),
      tok("}"),
    ]),
  ])) else {
    panic!("expected a module declaration");
  };
  assert_eq!(m.stx.kind, TsModuleKind::Namespace);
  let TsModuleName::Entity(TsEntityName::Qualified(q)) = &m.stx.id else {
    panic!("expected a qualified name");
  };
  assert!(matches!(&q.stx.left, TsEntityName::Id(id) if id.stx.name == "A"));
  assert_eq!(m.stx.body.as_ref().unwrap().stx.body.len(), 1);
}

#[test]
fn only_string_named_modules_may_omit_a_body() {
  // declare module "m";
  let Stmt::TsModule(m) = lower_stmt(rule(CstKind::TSAmbientDeclaration, vec![
    tok("declare"),
    rule(CstKind::TSModuleDeclaration, vec![tok("module"), tok("\"m\""), tok(";")]),
  ])) else {
    panic!("expected a module declaration");
  };
  assert!(m.stx.declare);
  assert!(m.stx.body.is_none());
  assert!(matches!(&m.stx.id, TsModuleName::Str(s) if s.stx.value == "m"));

  let (bodiless, _) = layout(rule(CstKind::TSModuleDeclaration, vec![tok("namespace"), tok("N"), tok(";")]));
  assert!(matches!(
    ts_lowerer().lower_stmt(&bodiless).unwrap_err().typ,
    LowerErrorType::MalformedCst(_)
  ));
}

#[test]
fn declared_function_has_no_body() {
  // declare function f(): void;
  let (cst, _) = layout(rule(CstKind::TSAmbientDeclaration, vec![
    tok("declare"),
    rule(CstKind::FunctionDeclaration, vec![
      tok("function"),
      binding_id("f"),
      tok("("),
      tok(")"),
      rule(CstKind::TSTypeAnnotation, vec![tok(":"), tok("void")]),
      tok(";"),
    ]),
  ]));
  let Stmt::TsDeclareFunction(f) = ts_lowerer().lower_stmt(&cst).unwrap() else {
    panic!("expected a declared function");
  };
  assert!(f.stx.func.declare);
  assert!(f.stx.func.body.is_none());
  // The declaration covers the `declare` keyword.
  assert_eq!(f.loc, cst.loc);
  let value = serde_json::to_value(&f).unwrap();
  assert_eq!(value["type"], "TSDeclareFunction");
  assert_eq!(value["returnType"]["typeAnnotation"]["type"], "TSVoidKeyword");
}

#[test]
fn import_equals_forms() {
  // import fs = require("fs");
  let Stmt::TsImportEquals(req) = lower_stmt(rule(CstKind::TSImportEqualsDeclaration, vec![
    tok("import"),
    binding_id("fs"),
    tok("="),
    rule(CstKind::TSExternalModuleReference, vec![
      tok("require"),
      tok("("),
      term(CstKind::StringLiteral, "\"fs\""),
      tok(")"),
    ]),
    tok(";"),
  ])) else {
    panic!("expected an import-equals declaration");
  };
  assert!(!req.stx.is_export);
  assert!(matches!(&req.stx.module_reference, TsModuleRef::External(e) if e.stx.expression.stx.value == "fs"));

  // export import A = B.C;
  let (cst, _) = layout(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    rule(CstKind::TSImportEqualsDeclaration, vec![
      tok("import"),
      binding_id("A"),
      tok("="),
      rule(CstKind::TSEntityName, vec![tok("B"), tok("."), tok("C")]),
      tok(";"),
    ]),
  ]));
  let Stmt::TsImportEquals(alias) = ts_lowerer().lower_stmt(&cst).unwrap() else {
    panic!("expected an import-equals declaration");
  };
  assert!(alias.stx.is_export);
  assert_eq!(alias.loc, cst.loc);
  assert!(matches!(&alias.stx.module_reference, TsModuleRef::Entity(TsEntityName::Qualified(_))));
}

#[test]
fn as_const_and_non_null() {
  // x as const
  let (as_const, _) = layout(rule(CstKind::TSAsExpression, vec![id_ref("x"), tok("as"), tok("const")]));
  let Expr::TsAs(e) = ts_lowerer().lower_expr(&as_const).unwrap() else {
    panic!("expected an `as` expression");
  };
  assert!(matches!(
    &e.stx.type_annotation,
    TsType::Reference(r) if matches!(&r.stx.type_name, TsEntityName::Id(id) if id.stx.name == "const")
  ));

  // x!.y
  let (non_null, _) = layout(rule(CstKind::MemberExpression, vec![
    rule(CstKind::TSNonNullExpression, vec![id_ref("x"), tok("!")]),
    tok("."),
    tok("y"),
  ]));
  let Expr::Member(m) = ts_lowerer().lower_expr(&non_null).unwrap() else {
    panic!("expected a member expression");
  };
  assert!(matches!(&m.stx.object, Expr::TsNonNull(_)));
}

#[test]
fn typescript_syntax_fails_in_javascript() {
  let cases = vec![
    rule(CstKind::TSAsExpression, vec![id_ref("x"), tok("as"), tok("string")]),
    rule(CstKind::TSTypeAliasDeclaration, vec![
      tok("type"),
      binding_id("T"),
      tok("="),
      tok("number"),
      tok(";"),
    ]),
    rule(CstKind::TSInterfaceDeclaration, vec![
      tok("interface"),
      binding_id("I"),
      rule(CstKind::TSInterfaceBody, vec![tok("{"), tok("}")]),
    ]),
  ];
  for case in cases {
    let (cst, _) = layout(case);
    let err = match cst.kind {
      CstKind::TSAsExpression => js_lowerer().lower_expr(&cst).unwrap_err(),
      _ => js_lowerer().lower_stmt(&cst).unwrap_err(),
    };
    assert_eq!(err.typ, LowerErrorType::TypeSyntaxInJs, "{:?}", cst.kind);
    assert_eq!(err.loc, cst.loc);
  }
}

#[test]
fn enum_with_misordered_braces_is_malformed() {
  // enum E } A {
  let (cst, _) = layout(rule(CstKind::TSEnumDeclaration, vec![
    tok("enum"),
    binding_id("E"),
    tok("}"),
    rule(CstKind::TSEnumMember, vec![tok("A")]),
    tok("{"),
  ]));
  let err = ts_lowerer().lower_stmt(&cst).unwrap_err();
  assert_eq!(err.typ, LowerErrorType::MalformedCst("enum body"));
  assert_eq!(err.loc, cst.loc);
}
