use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::types::TsType;
use super::TsTypeArgs;
use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::token::Token;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSAsExpression", rename_all = "camelCase")]
pub struct TsAsExpr {
  pub expression: Expr,
  pub type_annotation: TsType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub as_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSSatisfiesExpression", rename_all = "camelCase")]
pub struct TsSatisfiesExpr {
  pub expression: Expr,
  pub type_annotation: TsType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub satisfies_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSNonNullExpression", rename_all = "camelCase")]
pub struct TsNonNullExpr {
  pub expression: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclamation_token: Option<Token>,
}

/// `<T>expr`
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeAssertion", rename_all = "camelCase")]
pub struct TsTypeAssertion {
  pub type_annotation: TsType,
  pub expression: Expr,
}

/// `f<T>` not followed by a call.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSInstantiationExpression", rename_all = "camelCase")]
pub struct TsInstantiationExpr {
  pub expression: Expr,
  pub type_arguments: Node<TsTypeArgs>,
}
