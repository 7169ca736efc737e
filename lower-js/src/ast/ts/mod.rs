pub mod decl;
pub mod expr;
pub mod types;

use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;
use types::TsType;

use super::class::ClassElemModifiers;
use super::expr::pat::Pat;
use super::expr::IdExpr;
use super::is_false;
use super::node::Node;
use crate::loc::Loc;
use crate::token::Token;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeAnnotation", rename_all = "camelCase")]
pub struct TsTypeAnn {
  pub type_annotation: TsType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeParameter", rename_all = "camelCase")]
pub struct TsTypeParam {
  #[drive(skip)]
  pub name: String,
  pub constraint: Option<TsType>,
  pub default: Option<TsType>,
  #[drive(skip)]
  #[serde(rename = "in", skip_serializing_if = "is_false")]
  pub in_: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub out: bool,
  #[drive(skip)]
  #[serde(rename = "const", skip_serializing_if = "is_false")]
  pub const_: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeParamItem {
  pub param: Node<TsTypeParam>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeParameterDeclaration", rename_all = "camelCase")]
pub struct TsTypeParams {
  pub params: Vec<TsTypeParamItem>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeParameterInstantiation", rename_all = "camelCase")]
pub struct TsTypeArgs {
  pub params: Vec<TsType>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsEntityName {
  Id(Node<IdExpr>),
  Qualified(Node<TsQualifiedName>),
}

impl TsEntityName {
  pub fn loc(&self) -> Loc {
    match self {
      TsEntityName::Id(n) => n.loc,
      TsEntityName::Qualified(n) => n.loc,
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSQualifiedName", rename_all = "camelCase")]
pub struct TsQualifiedName {
  pub left: TsEntityName,
  pub right: Node<IdExpr>,
}

/// An entity name with optional type arguments, as in `extends` and `implements` lists.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSExpressionWithTypeArguments", rename_all = "camelCase")]
pub struct TsExprWithTypeArgs {
  pub expression: TsEntityName,
  pub type_arguments: Option<Node<TsTypeArgs>>,
}

/// A constructor parameter declared with an accessibility or `readonly` modifier.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSParameterProperty", rename_all = "camelCase")]
pub struct TsParamProp {
  pub parameter: Pat,
  #[drive(skip)]
  #[serde(flatten)]
  pub modifiers: ClassElemModifiers,
}
