use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::types::TsType;
use super::types::TsTypeElement;
use super::TsEntityName;
use super::TsExprWithTypeArgs;
use super::TsTypeParams;
use crate::ast::expr::lit::LitStrExpr;
use crate::ast::expr::pat::IdPat;
use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::import_export::ModuleItemKind;
use crate::ast::is_false;
use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::token::Token;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSInterfaceBody", rename_all = "camelCase")]
pub struct TsInterfaceBody {
  pub body: Vec<TsTypeElement>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSInterfaceDeclaration", rename_all = "camelCase")]
pub struct TsInterfaceDecl {
  pub id: Node<IdPat>,
  pub body: Node<TsInterfaceBody>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub extends: Vec<Node<TsExprWithTypeArgs>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub interface_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeAliasDeclaration", rename_all = "camelCase")]
pub struct TsTypeAliasDecl {
  pub id: Node<IdPat>,
  pub type_annotation: TsType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equals_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSEnumMember", rename_all = "camelCase")]
pub struct TsEnumMember {
  /// An identifier or string literal.
  pub id: Expr,
  pub initializer: Option<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsEnumMemberItem {
  pub member: Node<TsEnumMember>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSEnumDeclaration", rename_all = "camelCase")]
pub struct TsEnumDecl {
  pub id: Node<IdPat>,
  pub members: Vec<TsEnumMemberItem>,
  #[drive(skip)]
  #[serde(rename = "const", skip_serializing_if = "is_false")]
  pub const_: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enum_token: Option<Token>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TsModuleKind {
  Global,
  Module,
  Namespace,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsModuleName {
  Entity(TsEntityName),
  Str(Node<LitStrExpr>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSModuleBlock", rename_all = "camelCase")]
pub struct TsModuleBlock {
  pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSModuleDeclaration", rename_all = "camelCase")]
pub struct TsModuleDecl {
  pub id: TsModuleName,
  /// `None` for the shorthand ambient form `declare module "x";`.
  pub body: Option<Node<TsModuleBlock>>,
  #[drive(skip)]
  pub kind: TsModuleKind,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub keyword_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSExternalModuleReference", rename_all = "camelCase")]
pub struct TsExternalModuleRef {
  pub expression: Node<LitStrExpr>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsModuleRef {
  Entity(TsEntityName),
  External(Node<TsExternalModuleRef>),
}

/// `import x = require("y")` and `import x = A.B`.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSImportEqualsDeclaration", rename_all = "camelCase")]
pub struct TsImportEqualsDecl {
  pub id: Node<IdPat>,
  pub module_reference: TsModuleRef,
  #[drive(skip)]
  pub import_kind: ModuleItemKind,
  #[drive(skip)]
  pub is_export: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equals_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSExportAssignment", rename_all = "camelCase")]
pub struct TsExportAssignment {
  pub expression: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub export_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equals_token: Option<Token>,
}

/// `export as namespace X;`
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSNamespaceExportDeclaration", rename_all = "camelCase")]
pub struct TsNamespaceExportDecl {
  pub id: Node<IdExpr>,
}
