use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::Expr;
use super::SpreadElement;
use crate::ast::node::Node;
use crate::num::JsNumber;
use crate::token::Token;

/// An array literal element paired with the comma that follows it; `None` is an elision.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayElem {
  pub element: Option<Expr>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayExpression", rename_all = "camelCase")]
pub struct LitArrExpr {
  pub elements: Vec<ArrayElem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_bracket_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_bracket_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BigIntLiteral", rename_all = "camelCase")]
pub struct LitBigIntExpr {
  /// Canonical decimal digits without the `n` suffix.
  #[drive(skip)]
  pub value: String,
  #[drive(skip)]
  pub raw: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BooleanLiteral", rename_all = "camelCase")]
pub struct LitBoolExpr {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "NullLiteral")]
pub struct LitNullExpr {}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "NumericLiteral", rename_all = "camelCase")]
pub struct LitNumExpr {
  #[drive(skip)]
  pub value: JsNumber,
  #[drive(skip)]
  pub raw: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RegExpLiteral", rename_all = "camelCase")]
pub struct LitRegexExpr {
  #[drive(skip)]
  pub pattern: String,
  #[drive(skip)]
  pub flags: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "StringLiteral", rename_all = "camelCase")]
pub struct LitStrExpr {
  #[drive(skip)]
  pub value: String,
  /// Source text including quotes.
  #[drive(skip)]
  pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateValue {
  pub raw: String,
  /// `None` when the raw text contains an escape that is only legal in tagged templates.
  pub cooked: Option<String>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TemplateElement", rename_all = "camelCase")]
pub struct TemplateElement {
  #[drive(skip)]
  pub value: TemplateValue,
  #[drive(skip)]
  pub tail: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TemplateLiteral", rename_all = "camelCase")]
pub struct LitTemplateExpr {
  pub quasis: Vec<Node<TemplateElement>>,
  pub expressions: Vec<Expr>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
  Init,
  Get,
  Set,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property", rename_all = "camelCase")]
pub struct ObjProperty {
  pub key: Expr,
  /// A `FunctionExpression` when `method` or when `kind` is an accessor.
  pub value: Expr,
  #[drive(skip)]
  pub kind: PropKind,
  #[drive(skip)]
  pub method: bool,
  #[drive(skip)]
  pub shorthand: bool,
  #[drive(skip)]
  pub computed: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjMember {
  Prop(Node<ObjProperty>),
  Spread(Node<SpreadElement>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjMemberItem {
  pub property: ObjMember,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectExpression", rename_all = "camelCase")]
pub struct LitObjExpr {
  pub properties: Vec<ObjMemberItem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}
