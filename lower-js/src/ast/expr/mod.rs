pub mod lit;
pub mod pat;

use derive_more::derive::From;
use derive_more::derive::TryInto;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use lit::LitArrExpr;
use lit::LitBigIntExpr;
use lit::LitBoolExpr;
use lit::LitNullExpr;
use lit::LitNumExpr;
use lit::LitObjExpr;
use lit::LitRegexExpr;
use lit::LitStrExpr;
use lit::LitTemplateExpr;
use pat::Pat;
use serde::Serialize;

use super::class::Class;
use super::func::Func;
use super::node::Node;
use super::ts::expr::TsAsExpr;
use super::ts::expr::TsInstantiationExpr;
use super::ts::expr::TsNonNullExpr;
use super::ts::expr::TsSatisfiesExpr;
use super::ts::expr::TsTypeAssertion;
use super::ts::TsTypeArgs;
use crate::loc::Loc;
use crate::operator::OperatorName;
use crate::token::Token;

// We must wrap each variant with Node<T> as otherwise we won't be able to visit Node<T> instead of just T.
#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize, TryInto)]
#[serde(untagged)]
pub enum Expr {
  ArrowFunc(Node<ArrowFuncExpr>),
  Assign(Node<AssignExpr>),
  Await(Node<AwaitExpr>),
  Binary(Node<BinaryExpr>),
  Call(Node<CallExpr>),
  Class(Node<ClassExpr>),
  Cond(Node<CondExpr>),
  Func(Node<FuncExpr>),
  Id(Node<IdExpr>),
  ImportCall(Node<ImportCallExpr>),
  Logical(Node<LogicalExpr>),
  Member(Node<MemberExpr>),
  MetaProperty(Node<MetaPropertyExpr>),
  New(Node<NewExpr>),
  OptionalCall(Node<OptionalCallExpr>),
  OptionalMember(Node<OptionalMemberExpr>),
  Paren(Node<ParenExpr>),
  PrivateName(Node<PrivateName>),
  Sequence(Node<SequenceExpr>),
  Spread(Node<SpreadElement>),
  Super(Node<SuperExpr>),
  TaggedTemplate(Node<TaggedTemplateExpr>),
  This(Node<ThisExpr>),
  Unary(Node<UnaryExpr>),
  Update(Node<UpdateExpr>),
  Yield(Node<YieldExpr>),

  // Literals.
  LitArr(Node<LitArrExpr>),
  LitBigInt(Node<LitBigIntExpr>),
  LitBool(Node<LitBoolExpr>),
  LitNull(Node<LitNullExpr>),
  LitNum(Node<LitNumExpr>),
  LitObj(Node<LitObjExpr>),
  LitRegex(Node<LitRegexExpr>),
  LitStr(Node<LitStrExpr>),
  LitTemplate(Node<LitTemplateExpr>),

  // TypeScript.
  TsAs(Node<TsAsExpr>),
  TsInstantiation(Node<TsInstantiationExpr>),
  TsNonNull(Node<TsNonNullExpr>),
  TsSatisfies(Node<TsSatisfiesExpr>),
  TsTypeAssertion(Node<TsTypeAssertion>),
}

impl Expr {
  pub fn loc(&self) -> Loc {
    match self {
      Expr::ArrowFunc(n) => n.loc,
      Expr::Assign(n) => n.loc,
      Expr::Await(n) => n.loc,
      Expr::Binary(n) => n.loc,
      Expr::Call(n) => n.loc,
      Expr::Class(n) => n.loc,
      Expr::Cond(n) => n.loc,
      Expr::Func(n) => n.loc,
      Expr::Id(n) => n.loc,
      Expr::ImportCall(n) => n.loc,
      Expr::Logical(n) => n.loc,
      Expr::Member(n) => n.loc,
      Expr::MetaProperty(n) => n.loc,
      Expr::New(n) => n.loc,
      Expr::OptionalCall(n) => n.loc,
      Expr::OptionalMember(n) => n.loc,
      Expr::Paren(n) => n.loc,
      Expr::PrivateName(n) => n.loc,
      Expr::Sequence(n) => n.loc,
      Expr::Spread(n) => n.loc,
      Expr::Super(n) => n.loc,
      Expr::TaggedTemplate(n) => n.loc,
      Expr::This(n) => n.loc,
      Expr::Unary(n) => n.loc,
      Expr::Update(n) => n.loc,
      Expr::Yield(n) => n.loc,
      Expr::LitArr(n) => n.loc,
      Expr::LitBigInt(n) => n.loc,
      Expr::LitBool(n) => n.loc,
      Expr::LitNull(n) => n.loc,
      Expr::LitNum(n) => n.loc,
      Expr::LitObj(n) => n.loc,
      Expr::LitRegex(n) => n.loc,
      Expr::LitStr(n) => n.loc,
      Expr::LitTemplate(n) => n.loc,
      Expr::TsAs(n) => n.loc,
      Expr::TsInstantiation(n) => n.loc,
      Expr::TsNonNull(n) => n.loc,
      Expr::TsSatisfies(n) => n.loc,
      Expr::TsTypeAssertion(n) => n.loc,
    }
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrowFunctionExpression", rename_all = "camelCase")]
pub struct ArrowFuncExpr {
  #[serde(flatten)]
  pub func: Func,
  /// True for a concise body; derived from the body shape.
  #[drive(skip)]
  pub expression: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub arrow_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentExpression", rename_all = "camelCase")]
pub struct AssignExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Pat,
  pub right: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operator_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AwaitExpression", rename_all = "camelCase")]
pub struct AwaitExpr {
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub await_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BinaryExpression", rename_all = "camelCase")]
pub struct BinaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Expr,
  pub right: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operator_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "LogicalExpression", rename_all = "camelCase")]
pub struct LogicalExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Expr,
  pub right: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operator_token: Option<Token>,
}

/// A call argument or array element paired with the comma that follows it.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallArg {
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Default, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallArgs {
  pub arguments: Vec<CallArg>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CallExpression", rename_all = "camelCase")]
pub struct CallExpr {
  pub callee: Expr,
  #[serde(flatten)]
  pub args: CallArgs,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "OptionalCallExpression", rename_all = "camelCase")]
pub struct OptionalCallExpr {
  pub callee: Expr,
  #[serde(flatten)]
  pub args: CallArgs,
  #[drive(skip)]
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question_dot_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "NewExpression", rename_all = "camelCase")]
pub struct NewExpr {
  pub callee: Expr,
  #[serde(flatten)]
  pub args: CallArgs,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub new_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassExpression", rename_all = "camelCase")]
pub struct ClassExpr {
  #[serde(flatten)]
  pub class: Class,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ConditionalExpression", rename_all = "camelCase")]
pub struct CondExpr {
  pub test: Expr,
  pub consequent: Expr,
  pub alternate: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FunctionExpression", rename_all = "camelCase")]
pub struct FuncExpr {
  #[serde(flatten)]
  pub func: Func,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Identifier", rename_all = "camelCase")]
pub struct IdExpr {
  #[drive(skip)]
  pub name: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportExpression", rename_all = "camelCase")]
pub struct ImportCallExpr {
  pub source: Expr,
  pub options: Option<Expr>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import_token: Option<Token>,
}

/// The property of a member access: an identifier, a private name, or a computed expression.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProp {
  pub property: Expr,
  #[drive(skip)]
  pub computed: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dot_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_bracket_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_bracket_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MemberExpression", rename_all = "camelCase")]
pub struct MemberExpr {
  pub object: Expr,
  #[serde(flatten)]
  pub prop: MemberProp,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "OptionalMemberExpression", rename_all = "camelCase")]
pub struct OptionalMemberExpr {
  pub object: Expr,
  #[serde(flatten)]
  pub prop: MemberProp,
  #[drive(skip)]
  pub optional: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question_dot_token: Option<Token>,
}

/// `new.target` or `import.meta`.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MetaProperty", rename_all = "camelCase")]
pub struct MetaPropertyExpr {
  pub meta: Node<IdExpr>,
  pub property: Node<IdExpr>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dot_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ParenthesizedExpression", rename_all = "camelCase")]
pub struct ParenExpr {
  pub expression: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "PrivateIdentifier", rename_all = "camelCase")]
pub struct PrivateName {
  /// Always starts with `#`.
  #[drive(skip)]
  pub name: String,
  /// Source text, kept only when escape decoding changed it.
  #[drive(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw: Option<String>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceItem {
  pub expression: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comma_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SequenceExpression", rename_all = "camelCase")]
pub struct SequenceExpr {
  pub expressions: Vec<SequenceItem>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SpreadElement", rename_all = "camelCase")]
pub struct SpreadElement {
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ellipsis_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Super")]
pub struct SuperExpr {}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TaggedTemplateExpression", rename_all = "camelCase")]
pub struct TaggedTemplateExpr {
  pub tag: Expr,
  pub quasi: Node<LitTemplateExpr>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub type_arguments: Option<Node<TsTypeArgs>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThisExpression")]
pub struct ThisExpr {}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "UnaryExpression", rename_all = "camelCase")]
pub struct UnaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  #[drive(skip)]
  pub prefix: bool,
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operator_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "UpdateExpression", rename_all = "camelCase")]
pub struct UpdateExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  #[drive(skip)]
  pub prefix: bool,
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operator_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "YieldExpression", rename_all = "camelCase")]
pub struct YieldExpr {
  pub argument: Option<Expr>,
  #[drive(skip)]
  pub delegate: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub yield_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub star_token: Option<Token>,
}
