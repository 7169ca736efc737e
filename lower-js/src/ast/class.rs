use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::expr::pat::IdPat;
use super::expr::Expr;
use super::expr::FuncExpr;
use super::is_false;
use super::node::Node;
use super::stmt::Stmt;
use super::ts::types::TsIndexSignature;
use super::ts::TsExprWithTypeArgs;
use super::ts::TsTypeAnn;
use super::ts::TsTypeArgs;
use super::ts::TsTypeParams;
use crate::token::Token;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
  Public,
  Private,
  Protected,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
  Constructor,
  Method,
  Get,
  Set,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Decorator", rename_all = "camelCase")]
pub struct Decorator {
  pub expression: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub at_token: Option<Token>,
}

/// Shape shared by class declarations and expressions.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
  pub id: Option<Node<IdPat>>,
  pub super_class: Option<Expr>,
  pub body: Node<ClassBody>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub decorators: Vec<Node<Decorator>>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub implements: Vec<Node<TsExprWithTypeArgs>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub super_type_arguments: Option<Node<TsTypeArgs>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
  #[drive(skip)]
  #[serde(rename = "abstract", skip_serializing_if = "is_false")]
  pub abstract_: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub class_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub extends_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassBody", rename_all = "camelCase")]
pub struct ClassBody {
  pub body: Vec<ClassMember>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassMember {
  IndexSignature(Node<TsIndexSignature>),
  Method(Node<MethodDef>),
  Property(Node<PropertyDef>),
  StaticBlock(Node<StaticBlock>),
}

/// Modifiers that may precede a class element.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassElemModifiers {
  #[serde(rename = "static")]
  pub static_: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub accessibility: Option<Accessibility>,
  #[serde(rename = "abstract", skip_serializing_if = "is_false")]
  pub abstract_: bool,
  #[serde(rename = "override", skip_serializing_if = "is_false")]
  pub override_: bool,
  #[serde(skip_serializing_if = "is_false")]
  pub readonly: bool,
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "is_false")]
  pub accessor: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MethodDefinition", rename_all = "camelCase")]
pub struct MethodDef {
  pub key: Expr,
  pub value: Node<FuncExpr>,
  #[drive(skip)]
  pub kind: MethodKind,
  #[drive(skip)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(flatten)]
  pub modifiers: ClassElemModifiers,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub decorators: Vec<Node<Decorator>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "PropertyDefinition", rename_all = "camelCase")]
pub struct PropertyDef {
  pub key: Expr,
  pub value: Option<Expr>,
  #[drive(skip)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(flatten)]
  pub modifiers: ClassElemModifiers,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub definite: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub decorators: Vec<Node<Decorator>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "StaticBlock", rename_all = "camelCase")]
pub struct StaticBlock {
  pub body: Vec<Stmt>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub static_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}
