pub mod decl;

use decl::ClassDecl;
use decl::FuncDecl;
use decl::TsDeclareFunction;
use decl::VarDecl;
use derive_more::derive::From;
use derive_more::derive::TryInto;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;

use super::expr::pat::Pat;
use super::expr::Expr;
use super::expr::IdExpr;
use super::import_export::ExportAllDecl;
use super::import_export::ExportDefaultDecl;
use super::import_export::ExportNamedDecl;
use super::import_export::ImportDecl;
use super::node::Node;
use super::ts::decl::TsEnumDecl;
use super::ts::decl::TsExportAssignment;
use super::ts::decl::TsImportEqualsDecl;
use super::ts::decl::TsInterfaceDecl;
use super::ts::decl::TsModuleDecl;
use super::ts::decl::TsNamespaceExportDecl;
use super::ts::decl::TsTypeAliasDecl;
use crate::loc::Loc;
use crate::token::Token;

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize, TryInto)]
#[serde(untagged)]
pub enum Stmt {
  Block(Node<BlockStmt>),
  Break(Node<BreakStmt>),
  ClassDecl(Node<ClassDecl>),
  Continue(Node<ContinueStmt>),
  Debugger(Node<DebuggerStmt>),
  DoWhile(Node<DoWhileStmt>),
  Empty(Node<EmptyStmt>),
  ExportAll(Node<ExportAllDecl>),
  ExportDefault(Node<ExportDefaultDecl>),
  ExportNamed(Node<ExportNamedDecl>),
  Expr(Node<ExprStmt>),
  For(Node<ForStmt>),
  ForIn(Node<ForInStmt>),
  ForOf(Node<ForOfStmt>),
  FuncDecl(Node<FuncDecl>),
  If(Node<IfStmt>),
  Import(Node<ImportDecl>),
  Labeled(Node<LabeledStmt>),
  Return(Node<ReturnStmt>),
  Switch(Node<SwitchStmt>),
  Throw(Node<ThrowStmt>),
  Try(Node<TryStmt>),
  VarDecl(Node<VarDecl>),
  While(Node<WhileStmt>),
  With(Node<WithStmt>),

  // TypeScript.
  TsDeclareFunction(Node<TsDeclareFunction>),
  TsEnum(Node<TsEnumDecl>),
  TsExportAssignment(Node<TsExportAssignment>),
  TsImportEquals(Node<TsImportEqualsDecl>),
  TsInterface(Node<TsInterfaceDecl>),
  TsModule(Node<TsModuleDecl>),
  TsNamespaceExport(Node<TsNamespaceExportDecl>),
  TsTypeAlias(Node<TsTypeAliasDecl>),
}

impl Stmt {
  pub fn loc(&self) -> Loc {
    match self {
      Stmt::Block(n) => n.loc,
      Stmt::Break(n) => n.loc,
      Stmt::ClassDecl(n) => n.loc,
      Stmt::Continue(n) => n.loc,
      Stmt::Debugger(n) => n.loc,
      Stmt::DoWhile(n) => n.loc,
      Stmt::Empty(n) => n.loc,
      Stmt::ExportAll(n) => n.loc,
      Stmt::ExportDefault(n) => n.loc,
      Stmt::ExportNamed(n) => n.loc,
      Stmt::Expr(n) => n.loc,
      Stmt::For(n) => n.loc,
      Stmt::ForIn(n) => n.loc,
      Stmt::ForOf(n) => n.loc,
      Stmt::FuncDecl(n) => n.loc,
      Stmt::If(n) => n.loc,
      Stmt::Import(n) => n.loc,
      Stmt::Labeled(n) => n.loc,
      Stmt::Return(n) => n.loc,
      Stmt::Switch(n) => n.loc,
      Stmt::Throw(n) => n.loc,
      Stmt::Try(n) => n.loc,
      Stmt::VarDecl(n) => n.loc,
      Stmt::While(n) => n.loc,
      Stmt::With(n) => n.loc,
      Stmt::TsDeclareFunction(n) => n.loc,
      Stmt::TsEnum(n) => n.loc,
      Stmt::TsExportAssignment(n) => n.loc,
      Stmt::TsImportEquals(n) => n.loc,
      Stmt::TsInterface(n) => n.loc,
      Stmt::TsModule(n) => n.loc,
      Stmt::TsNamespaceExport(n) => n.loc,
      Stmt::TsTypeAlias(n) => n.loc,
    }
  }

  /// Overrides the span, as when a wrapper such as `declare` widens the statement.
  pub fn set_loc(&mut self, loc: Loc) {
    match self {
      Stmt::Block(n) => n.loc = loc,
      Stmt::Break(n) => n.loc = loc,
      Stmt::ClassDecl(n) => n.loc = loc,
      Stmt::Continue(n) => n.loc = loc,
      Stmt::Debugger(n) => n.loc = loc,
      Stmt::DoWhile(n) => n.loc = loc,
      Stmt::Empty(n) => n.loc = loc,
      Stmt::ExportAll(n) => n.loc = loc,
      Stmt::ExportDefault(n) => n.loc = loc,
      Stmt::ExportNamed(n) => n.loc = loc,
      Stmt::Expr(n) => n.loc = loc,
      Stmt::For(n) => n.loc = loc,
      Stmt::ForIn(n) => n.loc = loc,
      Stmt::ForOf(n) => n.loc = loc,
      Stmt::FuncDecl(n) => n.loc = loc,
      Stmt::If(n) => n.loc = loc,
      Stmt::Import(n) => n.loc = loc,
      Stmt::Labeled(n) => n.loc = loc,
      Stmt::Return(n) => n.loc = loc,
      Stmt::Switch(n) => n.loc = loc,
      Stmt::Throw(n) => n.loc = loc,
      Stmt::Try(n) => n.loc = loc,
      Stmt::VarDecl(n) => n.loc = loc,
      Stmt::While(n) => n.loc = loc,
      Stmt::With(n) => n.loc = loc,
      Stmt::TsDeclareFunction(n) => n.loc = loc,
      Stmt::TsEnum(n) => n.loc = loc,
      Stmt::TsExportAssignment(n) => n.loc = loc,
      Stmt::TsImportEquals(n) => n.loc = loc,
      Stmt::TsInterface(n) => n.loc = loc,
      Stmt::TsModule(n) => n.loc = loc,
      Stmt::TsNamespaceExport(n) => n.loc = loc,
      Stmt::TsTypeAlias(n) => n.loc = loc,
    };
  }

  pub fn is_module_item(&self) -> bool {
    matches!(
      self,
      Stmt::ExportAll(_)
        | Stmt::ExportDefault(_)
        | Stmt::ExportNamed(_)
        | Stmt::Import(_)
        | Stmt::TsExportAssignment(_)
    )
  }
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BlockStatement", rename_all = "camelCase")]
pub struct BlockStmt {
  pub body: Vec<Stmt>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BreakStatement", rename_all = "camelCase")]
pub struct BreakStmt {
  pub label: Option<Node<IdExpr>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub break_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ContinueStatement", rename_all = "camelCase")]
pub struct ContinueStmt {
  pub label: Option<Node<IdExpr>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub continue_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DebuggerStatement", rename_all = "camelCase")]
pub struct DebuggerStmt {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub debugger_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DoWhileStatement", rename_all = "camelCase")]
pub struct DoWhileStmt {
  pub body: Stmt,
  pub test: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub do_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub while_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "EmptyStatement", rename_all = "camelCase")]
pub struct EmptyStmt {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExpressionStatement", rename_all = "camelCase")]
pub struct ExprStmt {
  pub expression: Expr,
  /// Raw string contents when this statement is part of a directive prologue.
  #[drive(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub directive: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
  VarDecl(Node<VarDecl>),
  Expr(Expr),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForStatement", rename_all = "camelCase")]
pub struct ForStmt {
  pub init: Option<ForInit>,
  pub test: Option<Expr>,
  pub update: Option<Expr>,
  pub body: Stmt,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub for_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

/// Left side of a `for-in` or `for-of` loop.
#[derive(Clone, Debug, Drive, DriveMut, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForHead {
  VarDecl(Node<VarDecl>),
  Pat(Pat),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForInStatement", rename_all = "camelCase")]
pub struct ForInStmt {
  pub left: ForHead,
  pub right: Expr,
  pub body: Stmt,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub for_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub in_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForOfStatement", rename_all = "camelCase")]
pub struct ForOfStmt {
  pub left: ForHead,
  pub right: Expr,
  pub body: Stmt,
  #[drive(skip)]
  #[serde(rename = "await")]
  pub await_: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub for_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub await_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub of_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "IfStatement", rename_all = "camelCase")]
pub struct IfStmt {
  pub test: Expr,
  pub consequent: Stmt,
  pub alternate: Option<Stmt>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub if_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub else_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_paren_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_paren_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "LabeledStatement", rename_all = "camelCase")]
pub struct LabeledStmt {
  pub label: Node<IdExpr>,
  pub body: Stmt,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ReturnStatement", rename_all = "camelCase")]
pub struct ReturnStmt {
  pub argument: Option<Expr>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub return_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

/// A `case` clause, or the `default` clause when `test` is `None`.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchCase", rename_all = "camelCase")]
pub struct SwitchCase {
  pub test: Option<Expr>,
  pub consequent: Vec<Stmt>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub case_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub colon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchStatement", rename_all = "camelCase")]
pub struct SwitchStmt {
  pub discriminant: Expr,
  pub cases: Vec<Node<SwitchCase>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub switch_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub l_brace_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r_brace_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThrowStatement", rename_all = "camelCase")]
pub struct ThrowStmt {
  pub argument: Expr,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub throw_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub semicolon_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CatchClause", rename_all = "camelCase")]
pub struct CatchClause {
  pub param: Option<Pat>,
  pub body: Node<BlockStmt>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub catch_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TryStatement", rename_all = "camelCase")]
pub struct TryStmt {
  pub block: Node<BlockStmt>,
  pub handler: Option<Node<CatchClause>>,
  pub finalizer: Option<Node<BlockStmt>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub try_token: Option<Token>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub finally_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WhileStatement", rename_all = "camelCase")]
pub struct WhileStmt {
  pub test: Expr,
  pub body: Stmt,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub while_token: Option<Token>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WithStatement", rename_all = "camelCase")]
pub struct WithStmt {
  pub object: Expr,
  pub body: Stmt,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub with_token: Option<Token>,
}
