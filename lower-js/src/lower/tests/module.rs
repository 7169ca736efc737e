use super::js_lowerer;
use super::lower_stmt;
use super::stmt_value;
use super::ts_lowerer;
use crate::ast::import_export::ExportDefaultKind;
use crate::ast::import_export::ImportSpec;
use crate::ast::import_export::ModuleExportName;
use crate::ast::import_export::ModuleItemKind;
use crate::ast::stmt::Stmt;
use crate::cst::build::binding_id;
use crate::cst::build::id_ref;
use crate::cst::build::layout;
use crate::cst::build::rule;
use crate::cst::build::term;
use crate::cst::build::tok;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::util::test::assert_same_shape;
use serde_json::json;

fn from(source: &str) -> CstNode {
  rule(CstKind::FromClause, vec![
    tok("from"),
    rule(CstKind::ModuleSpecifier, vec![term(CstKind::StringLiteral, source)]),
  ])
}

#[test]
fn default_and_named_imports() {
  // import d, { type T, a as b } from "m";
  let value = stmt_value(rule(CstKind::ImportDeclaration, vec![
    tok("import"),
    rule(CstKind::ImportClause, vec![
      rule(CstKind::ImportedDefaultBinding, vec![binding_id("d")]),
      tok(","),
      rule(CstKind::NamedImports, vec![
        tok("{"),
        rule(CstKind::ImportsList, vec![
          rule(CstKind::ImportSpecifier, vec![tok("type"), tok("T")]),
          tok(","),
          rule(CstKind::ImportSpecifier, vec![tok("a"), tok("as"), binding_id("b")]),
        ]),
        tok("}"),
      ]),
    ]),
    from("\"m\""),
    tok(";"),
  ]));
  assert_same_shape(
    json!({
      "type": "ImportDeclaration",
      "specifiers": [
        {
          "specifier": {
            "type": "ImportDefaultSpecifier",
            "local": { "type": "Identifier", "name": "d" },
          },
        },
        {
          "specifier": {
            "type": "ImportSpecifier",
            "imported": { "type": "Identifier", "name": "T" },
            "local": { "type": "Identifier", "name": "T" },
            "importKind": "type",
          },
        },
        {
          "specifier": {
            "type": "ImportSpecifier",
            "imported": { "type": "Identifier", "name": "a" },
            "local": { "type": "Identifier", "name": "b" },
            "importKind": "value",
          },
        },
      ],
      "source": { "type": "StringLiteral", "value": "m", "raw": "\"m\"" },
      "importKind": "value",
    }),
    value,
  );
}

#[test]
fn specifier_named_type_is_not_a_modifier() {
  // import { type } from "m";
  let Stmt::Import(import) = lower_stmt(rule(CstKind::ImportDeclaration, vec![
    tok("import"),
    rule(CstKind::ImportClause, vec![rule(CstKind::NamedImports, vec![
      tok("{"),
      rule(CstKind::ImportSpecifier, vec![tok("type")]),
      tok("}"),
    ])]),
    from("\"m\""),
  ])) else {
    panic!("expected an import");
  };
  let ImportSpec::Named(spec) = &import.stx.specifiers[0].specifier else {
    panic!("expected a named specifier");
  };
  assert_eq!(spec.stx.local.stx.name, "type");
  assert_eq!(spec.stx.import_kind, ModuleItemKind::Value);
}

#[test]
fn type_only_import_marks_every_specifier() {
  // import type { a, b as c } from "m";
  let Stmt::Import(import) = lower_stmt(rule(CstKind::ImportDeclaration, vec![
    tok("import"),
    tok("type"),
    rule(CstKind::ImportClause, vec![rule(CstKind::NamedImports, vec![
      tok("{"),
      rule(CstKind::ImportsList, vec![
        rule(CstKind::ImportSpecifier, vec![tok("a")]),
        tok(","),
        rule(CstKind::ImportSpecifier, vec![tok("b"), tok("as"), binding_id("c")]),
      ]),
      tok("}"),
    ])]),
    from("\"m\""),
    tok(";"),
  ])) else {
    panic!("expected an import");
  };
  assert_eq!(import.stx.import_kind, ModuleItemKind::Type);
  let kinds: Vec<_> = import
    .stx
    .specifiers
    .iter()
    .map(|s| match &s.specifier {
      ImportSpec::Named(n) => n.stx.import_kind,
      _ => panic!("expected named specifiers"),
    })
    .collect();
  assert_eq!(kinds, vec![ModuleItemKind::Type, ModuleItemKind::Type]);
}

#[test]
fn namespace_import_with_attributes() {
  // import * as ns from "./a.json" with { type: "json" };
  let Stmt::Import(import) = lower_stmt(rule(CstKind::ImportDeclaration, vec![
    tok("import"),
    rule(CstKind::ImportClause, vec![rule(CstKind::NameSpaceImport, vec![
      tok("*"),
      tok("as"),
      binding_id("ns"),
    ])]),
    from("\"./a.json\""),
    rule(CstKind::WithClause, vec![
      tok("with"),
      tok("{"),
      rule(CstKind::WithEntries, vec![tok("type"), tok(":"), tok("\"json\"")]),
      tok("}"),
    ]),
    tok(";"),
  ])) else {
    panic!("expected an import");
  };
  let ImportSpec::Namespace(ns) = &import.stx.specifiers[0].specifier else {
    panic!("expected a namespace specifier");
  };
  assert_eq!(ns.stx.local.stx.name, "ns");
  assert!(ns.stx.star_token.is_some());
  assert_eq!(import.stx.source.stx.value, "./a.json");
  assert_eq!(import.stx.attributes.len(), 1);
  assert_eq!(import.stx.attributes[0].stx.key.name(), "type");
  assert_eq!(import.stx.attributes[0].stx.value.stx.value, "json");
}

#[test]
fn export_star_as_namespace() {
  // export * as ns from "m";
  let Stmt::ExportAll(all) = lower_stmt(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    tok("*"),
    tok("as"),
    tok("ns"),
    from("\"m\""),
    tok(";"),
  ])) else {
    panic!("expected an export-all declaration");
  };
  assert!(matches!(&all.stx.exported, Some(ModuleExportName::Id(id)) if id.stx.name == "ns"));
  assert_eq!(all.stx.source.stx.value, "m");
  assert!(all.stx.star_token.is_some());
  assert!(all.stx.semicolon_token.is_some());
}

#[test]
fn export_specifiers_combine_clause_and_specifier_kinds() {
  // export { type A, b as "c" };
  let Stmt::ExportNamed(named) = lower_stmt(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    rule(CstKind::NamedExports, vec![
      tok("{"),
      rule(CstKind::ExportsList, vec![
        rule(CstKind::ExportSpecifier, vec![tok("type"), tok("A")]),
        tok(","),
        rule(CstKind::ExportSpecifier, vec![tok("b"), tok("as"), tok("\"c\"")]),
      ]),
      tok("}"),
    ]),
    tok(";"),
  ])) else {
    panic!("expected a named export");
  };
  assert_eq!(named.stx.export_kind, ModuleItemKind::Value);
  let specs: Vec<_> = named.stx.specifiers.iter().map(|s| &s.specifier.stx).collect();
  assert_eq!(specs[0].export_kind, ModuleItemKind::Type);
  assert_eq!(specs[1].export_kind, ModuleItemKind::Value);
  assert!(matches!(&specs[1].exported, ModuleExportName::Str(s) if s.stx.value == "c"));
  assert!(named.stx.specifiers[0].comma_token.is_some());
  assert!(named.stx.specifiers[1].comma_token.is_none());
}

#[test]
fn type_only_export_fails_in_javascript() {
  // export type { T } from "m";
  let (cst, _) = layout(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    tok("type"),
    rule(CstKind::NamedExports, vec![tok("{"), tok("T"), tok("}")]),
    from("\"m\""),
  ]));
  let Stmt::ExportNamed(named) = ts_lowerer().lower_stmt(&cst).unwrap() else {
    panic!("expected a named export");
  };
  assert_eq!(named.stx.export_kind, ModuleItemKind::Type);
  assert_eq!(named.stx.specifiers[0].specifier.stx.export_kind, ModuleItemKind::Type);
  assert!(named.stx.source.is_some());

  assert_eq!(
    js_lowerer().lower_stmt(&cst).unwrap_err().typ,
    LowerErrorType::TypeSyntaxInJs
  );
}

#[test]
fn export_default_expression_and_declaration() {
  // export default x;
  let Stmt::ExportDefault(default) = lower_stmt(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    tok("default"),
    id_ref("x"),
    tok(";"),
  ])) else {
    panic!("expected a default export");
  };
  assert!(matches!(&default.stx.declaration, ExportDefaultKind::Expr(_)));
  assert!(default.stx.default_token.is_some());

  // export const y = 1;
  let Stmt::ExportNamed(named) = lower_stmt(rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    rule(CstKind::LexicalDeclaration, vec![
      rule(CstKind::LetOrConst, vec![tok("const")]),
      rule(CstKind::LexicalBinding, vec![
        binding_id("y"),
        rule(CstKind::Initializer, vec![tok("="), tok("1")]),
      ]),
      tok(";"),
    ]),
  ])) else {
    panic!("expected a named export");
  };
  assert!(matches!(&named.stx.declaration, Some(Stmt::VarDecl(_))));
  assert!(named.stx.specifiers.is_empty());
}
