use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::expr::pat::IdPat;
use super::expr::pat::Pat;
use super::expr::Expr;
use super::is_false;
use super::node::Node;
use super::stmt::BlockStmt;
use super::ts::TsTypeAnn;
use super::ts::TsTypeParams;
use crate::token::Token;

/// A parameter paired with the comma that follows it.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
  pub param: Pat,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FuncBody {
  Block(Node<BlockStmt>),
  // Arrow functions only.
  Expression(Expr),
}

/// Shape shared by function declarations, expressions, arrows and methods.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Func {
  pub id: Option<Node<IdPat>>,
  pub params: Vec<Param>,
  /// `None` for overload signatures, abstract methods and ambient declarations.
  pub body: Option<FuncBody>,
  #[drive(skip)]
  pub generator: bool,
  #[drive(skip)]
  #[serde(rename = "async")]
  pub async_: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub return_type: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub async_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub function_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub star_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

impl Func {
  /// The trailing rest parameter, if any.
  pub fn rest(&self) -> Option<&Pat> {
    self.params.last().map(|p| &p.param).filter(|p| p.is_rest())
  }
}
