use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use crate::ast::class::Class;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::Expr;
use crate::ast::func::Func;
use crate::ast::is_false;
use crate::ast::node::Node;
use crate::token::Token;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarDeclKind {
  Const,
  Let,
  Var,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclarator", rename_all = "camelCase")]
pub struct VarDeclarator {
  pub id: Pat,
  pub init: Option<Expr>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub definite: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equals_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarDeclaratorItem {
  pub declarator: Node<VarDeclarator>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclaration", rename_all = "camelCase")]
pub struct VarDecl {
  #[drive(skip)]
  pub kind: VarDeclKind,
  pub declarations: Vec<VarDeclaratorItem>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub declare: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub kind_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FunctionDeclaration", rename_all = "camelCase")]
pub struct FuncDecl {
  #[serde(flatten)]
  pub func: Func,
}

/// A function signature without a body: an overload or an ambient declaration.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSDeclareFunction", rename_all = "camelCase")]
pub struct TsDeclareFunction {
  #[serde(flatten)]
  pub func: Func,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassDeclaration", rename_all = "camelCase")]
pub struct ClassDecl {
  #[serde(flatten)]
  pub class: Class,
}
