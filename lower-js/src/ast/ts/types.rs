use derive_more::derive::From;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;

use super::TsEntityName;
use super::TsTypeAnn;
use super::TsTypeArgs;
use super::TsTypeParam;
use super::TsTypeParams;
use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::func::Param;
use crate::ast::is_false;
use crate::ast::node::Node;
use crate::loc::Loc;
use crate::token::Token;

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsType {
  Array(Node<TsArrayType>),
  Conditional(Node<TsConditionalType>),
  Constructor(Node<TsConstructorType>),
  Function(Node<TsFunctionType>),
  IndexedAccess(Node<TsIndexedAccessType>),
  Infer(Node<TsInferType>),
  Intersection(Node<TsIntersectionType>),
  Keyword(Node<TsKeywordType>),
  Literal(Node<TsLiteralType>),
  Mapped(Node<TsMappedType>),
  NamedTupleMember(Node<TsNamedTupleMember>),
  Optional(Node<TsOptionalType>),
  Predicate(Node<TsTypePredicate>),
  Reference(Node<TsTypeReference>),
  Rest(Node<TsRestType>),
  This(Node<TsThisType>),
  Tuple(Node<TsTupleType>),
  TypeLiteral(Node<TsTypeLiteral>),
  TypeOperator(Node<TsTypeOperator>),
  TypeQuery(Node<TsTypeQuery>),
  Union(Node<TsUnionType>),
}

impl TsType {
  pub fn loc(&self) -> Loc {
    match self {
      TsType::Array(n) => n.loc,
      TsType::Conditional(n) => n.loc,
      TsType::Constructor(n) => n.loc,
      TsType::Function(n) => n.loc,
      TsType::IndexedAccess(n) => n.loc,
      TsType::Infer(n) => n.loc,
      TsType::Intersection(n) => n.loc,
      TsType::Keyword(n) => n.loc,
      TsType::Literal(n) => n.loc,
      TsType::Mapped(n) => n.loc,
      TsType::NamedTupleMember(n) => n.loc,
      TsType::Optional(n) => n.loc,
      TsType::Predicate(n) => n.loc,
      TsType::Reference(n) => n.loc,
      TsType::Rest(n) => n.loc,
      TsType::This(n) => n.loc,
      TsType::Tuple(n) => n.loc,
      TsType::TypeLiteral(n) => n.loc,
      TsType::TypeOperator(n) => n.loc,
      TsType::TypeQuery(n) => n.loc,
      TsType::Union(n) => n.loc,
    }
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TsKeyword {
  Any,
  BigInt,
  Boolean,
  Intrinsic,
  Never,
  Null,
  Number,
  Object,
  String,
  Symbol,
  Undefined,
  Unknown,
  Void,
}

impl TsKeyword {
  pub fn from_name(name: &str) -> Option<TsKeyword> {
    Some(match name {
      "any" => TsKeyword::Any,
      "bigint" => TsKeyword::BigInt,
      "boolean" => TsKeyword::Boolean,
      "intrinsic" => TsKeyword::Intrinsic,
      "never" => TsKeyword::Never,
      "null" => TsKeyword::Null,
      "number" => TsKeyword::Number,
      "object" => TsKeyword::Object,
      "string" => TsKeyword::String,
      "symbol" => TsKeyword::Symbol,
      "undefined" => TsKeyword::Undefined,
      "unknown" => TsKeyword::Unknown,
      "void" => TsKeyword::Void,
      _ => return None,
    })
  }

  pub fn type_name(self) -> &'static str {
    match self {
      TsKeyword::Any => "TSAnyKeyword",
      TsKeyword::BigInt => "TSBigIntKeyword",
      TsKeyword::Boolean => "TSBooleanKeyword",
      TsKeyword::Intrinsic => "TSIntrinsicKeyword",
      TsKeyword::Never => "TSNeverKeyword",
      TsKeyword::Null => "TSNullKeyword",
      TsKeyword::Number => "TSNumberKeyword",
      TsKeyword::Object => "TSObjectKeyword",
      TsKeyword::String => "TSStringKeyword",
      TsKeyword::Symbol => "TSSymbolKeyword",
      TsKeyword::Undefined => "TSUndefinedKeyword",
      TsKeyword::Unknown => "TSUnknownKeyword",
      TsKeyword::Void => "TSVoidKeyword",
    }
  }
}

/// A predefined type such as `number`; the `type` tag names the keyword.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq)]
pub struct TsKeywordType {
  #[drive(skip)]
  pub keyword: TsKeyword,
}

impl Serialize for TsKeywordType {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("TsKeywordType", 1)?;
    s.serialize_field("type", self.keyword.type_name())?;
    s.end()
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSArrayType", rename_all = "camelCase")]
pub struct TsArrayType {
  pub element_type: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSConditionalType", rename_all = "camelCase")]
pub struct TsConditionalType {
  pub check_type: TsType,
  pub extends_type: TsType,
  pub true_type: TsType,
  pub false_type: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSFunctionType", rename_all = "camelCase")]
pub struct TsFunctionType {
  pub params: Vec<Param>,
  pub return_type: Node<TsTypeAnn>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSConstructorType", rename_all = "camelCase")]
pub struct TsConstructorType {
  pub params: Vec<Param>,
  pub return_type: Node<TsTypeAnn>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
  #[drive(skip)]
  #[serde(rename = "abstract")]
  pub abstract_: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSIndexedAccessType", rename_all = "camelCase")]
pub struct TsIndexedAccessType {
  pub object_type: TsType,
  pub index_type: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSInferType", rename_all = "camelCase")]
pub struct TsInferType {
  pub type_parameter: Node<TsTypeParam>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSIntersectionType", rename_all = "camelCase")]
pub struct TsIntersectionType {
  pub types: Vec<TsType>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSUnionType", rename_all = "camelCase")]
pub struct TsUnionType {
  pub types: Vec<TsType>,
}

/// A literal type; `literal` is a string, number, bigint, boolean, template or negated number.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSLiteralType", rename_all = "camelCase")]
pub struct TsLiteralType {
  pub literal: Expr,
}

/// `+`, `-` or bare presence of a mapped type modifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TsMappedModifier {
  Plus,
  Minus,
  Present,
}

impl Serialize for TsMappedModifier {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      TsMappedModifier::Plus => serializer.serialize_str("+"),
      TsMappedModifier::Minus => serializer.serialize_str("-"),
      TsMappedModifier::Present => serializer.serialize_bool(true),
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSMappedType", rename_all = "camelCase")]
pub struct TsMappedType {
  pub type_parameter: Node<TsTypeParam>,
  pub name_type: Option<TsType>,
  pub type_annotation: Option<TsType>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub optional: Option<TsMappedModifier>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub readonly: Option<TsMappedModifier>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSNamedTupleMember", rename_all = "camelCase")]
pub struct TsNamedTupleMember {
  pub label: Node<IdExpr>,
  pub element_type: TsType,
  #[drive(skip)]
  pub optional: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSOptionalType", rename_all = "camelCase")]
pub struct TsOptionalType {
  pub type_annotation: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSRestType", rename_all = "camelCase")]
pub struct TsRestType {
  pub type_annotation: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsPredicateName {
  Id(Node<IdExpr>),
  This(Node<TsThisType>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypePredicate", rename_all = "camelCase")]
pub struct TsTypePredicate {
  pub parameter_name: TsPredicateName,
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[drive(skip)]
  pub asserts: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeReference", rename_all = "camelCase")]
pub struct TsTypeReference {
  pub type_name: TsEntityName,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSThisType")]
pub struct TsThisType {}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTupleElem {
  pub element: TsType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTupleType", rename_all = "camelCase")]
pub struct TsTupleType {
  pub element_types: Vec<TsTupleElem>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeLiteral", rename_all = "camelCase")]
pub struct TsTypeLiteral {
  pub members: Vec<TsTypeElement>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TsTypeOperatorKind {
  Keyof,
  Readonly,
  Unique,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeOperator", rename_all = "camelCase")]
pub struct TsTypeOperator {
  #[drive(skip)]
  pub operator: TsTypeOperatorKind,
  pub type_annotation: TsType,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSTypeQuery", rename_all = "camelCase")]
pub struct TsTypeQuery {
  pub expr_name: TsEntityName,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
}

/// Members of interface bodies and type literals.
#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsTypeElement {
  CallSignature(Node<TsCallSignature>),
  ConstructSignature(Node<TsConstructSignature>),
  IndexSignature(Node<TsIndexSignature>),
  MethodSignature(Node<TsMethodSignature>),
  PropertySignature(Node<TsPropertySignature>),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSCallSignatureDeclaration", rename_all = "camelCase")]
pub struct TsCallSignature {
  pub params: Vec<Param>,
  pub return_type: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSConstructSignatureDeclaration", rename_all = "camelCase")]
pub struct TsConstructSignature {
  pub params: Vec<Param>,
  pub return_type: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSIndexSignature", rename_all = "camelCase")]
pub struct TsIndexSignature {
  pub parameters: Vec<Param>,
  pub type_annotation: Option<Node<TsTypeAnn>>,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub readonly: bool,
  #[drive(skip)]
  #[serde(rename = "static", skip_serializing_if = "is_false")]
  pub static_: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TsMethodSignatureKind {
  Method,
  Get,
  Set,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSMethodSignature", rename_all = "camelCase")]
pub struct TsMethodSignature {
  pub key: Expr,
  #[drive(skip)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[drive(skip)]
  pub kind: TsMethodSignatureKind,
  pub params: Vec<Param>,
  pub return_type: Option<Node<TsTypeAnn>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_parameters: Option<Node<TsTypeParams>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TSPropertySignature", rename_all = "camelCase")]
pub struct TsPropertySignature {
  pub key: Expr,
  #[drive(skip)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub optional: bool,
  #[drive(skip)]
  #[serde(skip_serializing_if = "is_false")]
  pub readonly: bool,
  pub type_annotation: Option<Node<TsTypeAnn>>,
}
