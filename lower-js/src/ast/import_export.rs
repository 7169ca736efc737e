use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::expr::lit::LitStrExpr;
use super::expr::pat::IdPat;
use super::expr::Expr;
use super::expr::IdExpr;
use super::node::Node;
use super::stmt::decl::ClassDecl;
use super::stmt::decl::FuncDecl;
use super::stmt::decl::TsDeclareFunction;
use super::stmt::Stmt;
use super::ts::decl::TsInterfaceDecl;
use crate::token::Token;

/// Whether an import or export is erased on emit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleItemKind {
  #[default]
  Value,
  Type,
}

impl ModuleItemKind {
  /// Type-only if either the clause or the specifier says so.
  pub fn or(self, other: ModuleItemKind) -> ModuleItemKind {
    if self == ModuleItemKind::Type || other == ModuleItemKind::Type {
      ModuleItemKind::Type
    } else {
      ModuleItemKind::Value
    }
  }

  pub fn from_type_flag(is_type: bool) -> ModuleItemKind {
    if is_type {
      ModuleItemKind::Type
    } else {
      ModuleItemKind::Value
    }
  }
}

/// An identifier or, since ES2022, a string naming an export.
#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleExportName {
  Id(Node<IdExpr>),
  Str(Node<LitStrExpr>),
}

impl ModuleExportName {
  pub fn name(&self) -> &str {
    match self {
      ModuleExportName::Id(id) => &id.stx.name,
      ModuleExportName::Str(s) => &s.stx.value,
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportAttribute", rename_all = "camelCase")]
pub struct ImportAttribute {
  pub key: ModuleExportName,
  pub value: Node<LitStrExpr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportDefaultSpecifier", rename_all = "camelCase")]
pub struct ImportDefaultSpecifier {
  pub local: Node<IdPat>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportNamespaceSpecifier", rename_all = "camelCase")]
pub struct ImportNamespaceSpecifier {
  pub local: Node<IdPat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub star_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub as_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportSpecifier", rename_all = "camelCase")]
pub struct ImportSpecifier {
  pub imported: ModuleExportName,
  pub local: Node<IdPat>,
  #[drive(skip)]
  pub import_kind: ModuleItemKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub as_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportSpec {
  Default(Node<ImportDefaultSpecifier>),
  Namespace(Node<ImportNamespaceSpecifier>),
  Named(Node<ImportSpecifier>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecItem {
  pub specifier: ImportSpec,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportDeclaration", rename_all = "camelCase")]
pub struct ImportDecl {
  pub specifiers: Vec<ImportSpecItem>,
  pub source: Node<LitStrExpr>,
  #[drive(skip)]
  pub import_kind: ModuleItemKind,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub attributes: Vec<Node<ImportAttribute>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportSpecifier", rename_all = "camelCase")]
pub struct ExportSpecifier {
  pub local: ModuleExportName,
  pub exported: ModuleExportName,
  #[drive(skip)]
  pub export_kind: ModuleItemKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub as_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSpecItem {
  pub specifier: Node<ExportSpecifier>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportNamedDeclaration", rename_all = "camelCase")]
pub struct ExportNamedDecl {
  pub declaration: Option<Stmt>,
  pub specifiers: Vec<ExportSpecItem>,
  pub source: Option<Node<LitStrExpr>>,
  #[drive(skip)]
  pub export_kind: ModuleItemKind,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub attributes: Vec<Node<ImportAttribute>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub export_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
  Class(Node<ClassDecl>),
  Expr(Expr),
  Func(Node<FuncDecl>),
  TsDeclareFunction(Node<TsDeclareFunction>),
  TsInterface(Node<TsInterfaceDecl>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportDefaultDeclaration", rename_all = "camelCase")]
pub struct ExportDefaultDecl {
  pub declaration: ExportDefaultKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub export_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportAllDeclaration", rename_all = "camelCase")]
pub struct ExportAllDecl {
  pub exported: Option<ModuleExportName>,
  pub source: Node<LitStrExpr>,
  #[drive(skip)]
  pub export_kind: ModuleItemKind,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub attributes: Vec<Node<ImportAttribute>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub export_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub star_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}
