use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::lit::PropKind;
use super::Expr;
use crate::ast::is_false;
use crate::ast::node::Node;
use crate::ast::ts::TsParamProp;
use crate::ast::ts::TsTypeAnn;
use crate::loc::Loc;
use crate::token::Token;

/// Targets of bindings and assignments.
///
/// `Expr` holds member expressions and TypeScript wrappers used as assignment
/// targets. `Rest` may only appear last in its enclosing list.
#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pat {
  Arr(Node<ArrPat>),
  Assign(Node<AssignPat>),
  Expr(Expr),
  Id(Node<IdPat>),
  Obj(Node<ObjPat>),
  ParamProp(Node<TsParamProp>),
  Rest(Node<RestPat>),
}

impl Pat {
  pub fn loc(&self) -> Loc {
    match self {
      Pat::Arr(n) => n.loc,
      Pat::Assign(n) => n.loc,
      Pat::Expr(e) => e.loc(),
      Pat::Id(n) => n.loc,
      Pat::Obj(n) => n.loc,
      Pat::ParamProp(n) => n.loc,
      Pat::Rest(n) => n.loc,
    }
  }

  pub fn is_rest(&self) -> bool {
    matches!(self, Pat::Rest(_))
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrPatElem {
  /// `None` is an elision.
  pub element: Option<Pat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayPattern", rename_all = "camelCase")]
pub struct ArrPat {
  pub elements: Vec<ArrPatElem>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_bracket_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_bracket_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentPattern", rename_all = "camelCase")]
pub struct AssignPat {
  pub left: Pat,
  pub right: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub equals_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Identifier", rename_all = "camelCase")]
pub struct IdPat {
  #[drive(skip)]
  pub name: String,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
}

impl IdPat {
  pub fn new(name: impl Into<String>) -> IdPat {
    IdPat {
      name: name.into(),
      optional: false,
      type_annotation: None,
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property", rename_all = "camelCase")]
pub struct PatProperty {
  pub key: Expr,
  pub value: Pat,
  #[drive(skip)]
  pub kind: PropKind,
  #[drive(skip)]
  pub shorthand: bool,
  #[drive(skip)]
  pub computed: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjPatProp {
  Prop(Node<PatProperty>),
  Rest(Node<RestPat>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjPatItem {
  pub property: ObjPatProp,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectPattern", rename_all = "camelCase")]
pub struct ObjPat {
  pub properties: Vec<ObjPatItem>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RestElement", rename_all = "camelCase")]
pub struct RestPat {
  pub argument: Pat,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ellipsis_token: Option<Token>,
}
