pub mod decl;
pub mod loops;

use super::between;
use super::malformed;
use super::node;
use super::require;
use super::unsupported;
use super::Lowerer;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::IdExpr;
use crate::ast::node::Node;
use crate::ast::stmt::BlockStmt;
use crate::ast::stmt::BreakStmt;
use crate::ast::stmt::CatchClause;
use crate::ast::stmt::ContinueStmt;
use crate::ast::stmt::DebuggerStmt;
use crate::ast::stmt::EmptyStmt;
use crate::ast::stmt::ExprStmt;
use crate::ast::stmt::IfStmt;
use crate::ast::stmt::LabeledStmt;
use crate::ast::stmt::ReturnStmt;
use crate::ast::stmt::Stmt;
use crate::ast::stmt::SwitchCase;
use crate::ast::stmt::SwitchStmt;
use crate::ast::stmt::ThrowStmt;
use crate::ast::stmt::TryStmt;
use crate::ast::stmt::WithStmt;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::lower::pat::with_type_annotation;

/// The node between `(` and `)` in `if (...)`, `while (...)`, `with (...)` and `switch (...)`.
fn paren_operand(cst: &CstNode) -> LowerResult<&CstNode> {
  let open = cst
    .position(CstKind::ParenthesisOpen)
    .ok_or_else(|| malformed(cst, "`(`"))?;
  cst
    .children
    .get(open + 1)
    .filter(|c| !c.is(CstKind::ParenthesisClose))
    .ok_or_else(|| malformed(cst, "parenthesized operand"))
}

/// The statement after `)`.
fn body_after_paren(cst: &CstNode) -> LowerResult<&CstNode> {
  let close = cst
    .position(CstKind::ParenthesisClose)
    .ok_or_else(|| malformed(cst, "`)`"))?;
  cst
    .children
    .get(close + 1)
    .ok_or_else(|| malformed(cst, "statement body"))
}

impl Lowerer {
  pub fn lower_statement_list<'c>(&mut self, items: impl IntoIterator<Item = &'c CstNode>) -> LowerResult<Vec<Stmt>> {
    let mut body = Vec::new();
    for item in items {
      body.push(self.lower_stmt(item)?);
    }
    Ok(body)
  }

  pub fn lower_stmt(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let cst = cst.unwrap_passthrough();
    Ok(match cst.kind {
      CstKind::BlockStatement | CstKind::Block => Stmt::Block(self.lower_block(cst)?),
      CstKind::EmptyStatement => Stmt::Empty(node(cst, EmptyStmt {
        semicolon_token: self.child_token(cst, CstKind::Semicolon),
      })),
      CstKind::ExpressionStatement => {
        let expression = require_first(cst, "expression")?;
        Stmt::Expr(node(cst, ExprStmt {
          expression: self.lower_expr(expression)?,
          directive: None,
          semicolon_token: self.child_token(cst, CstKind::Semicolon),
        }))
      }
      CstKind::IfStatement => self.lower_if(cst)?,
      CstKind::DoWhileStatement
      | CstKind::WhileStatement
      | CstKind::ForStatement
      | CstKind::ForInOfStatement => self.lower_loop(cst)?,
      CstKind::ContinueStatement => Stmt::Continue(node(cst, ContinueStmt {
        label: self.lower_jump_label(cst)?,
        continue_token: self.child_token(cst, CstKind::KeywordContinue),
        semicolon_token: self.child_token(cst, CstKind::Semicolon),
      })),
      CstKind::BreakStatement => Stmt::Break(node(cst, BreakStmt {
        label: self.lower_jump_label(cst)?,
        break_token: self.child_token(cst, CstKind::KeywordBreak),
        semicolon_token: self.child_token(cst, CstKind::Semicolon),
      })),
      CstKind::ReturnStatement => {
        let argument = match child_after(cst, CstKind::KeywordReturn) {
          Some(a) => Some(self.lower_expr(a)?),
          None => None,
        };
        Stmt::Return(node(cst, ReturnStmt {
          argument,
          return_token: self.child_token(cst, CstKind::KeywordReturn),
          semicolon_token: self.child_token(cst, CstKind::Semicolon),
        }))
      }
      CstKind::WithStatement => Stmt::With(node(cst, WithStmt {
        object: self.lower_expr(paren_operand(cst)?)?,
        body: self.lower_stmt(body_after_paren(cst)?)?,
        with_token: self.child_token(cst, CstKind::KeywordWith),
      })),
      CstKind::SwitchStatement => self.lower_switch(cst)?,
      CstKind::LabelledStatement => {
        let label = require_first(cst, "label")?;
        let body = cst
          .children
          .iter()
          .skip_while(|c| !c.is(CstKind::Colon))
          .nth(1)
          .ok_or_else(|| malformed(cst, "labelled item"))?;
        let body = if body.unwrap_passthrough().is(CstKind::FunctionDeclaration) {
          self.lower_func_decl(body.unwrap_passthrough())?
        } else {
          self.lower_stmt(body)?
        };
        Stmt::Labeled(node(cst, LabeledStmt {
          label: self.lower_identifier_like(label)?,
          body,
          colon_token: self.child_token(cst, CstKind::Colon),
        }))
      }
      CstKind::ThrowStatement => {
        let argument = child_after(cst, CstKind::KeywordThrow).ok_or_else(|| malformed(cst, "thrown expression"))?;
        Stmt::Throw(node(cst, ThrowStmt {
          argument: self.lower_expr(argument)?,
          throw_token: self.child_token(cst, CstKind::KeywordThrow),
          semicolon_token: self.child_token(cst, CstKind::Semicolon),
        }))
      }
      CstKind::TryStatement => self.lower_try(cst)?,
      CstKind::DebuggerStatement => Stmt::Debugger(node(cst, DebuggerStmt {
        debugger_token: self.child_token(cst, CstKind::KeywordDebugger),
        semicolon_token: self.child_token(cst, CstKind::Semicolon),
      })),
      CstKind::ImportDeclaration => self.lower_import(cst)?,
      CstKind::ExportDeclaration => self.lower_export(cst)?,
      _ => match self.lower_decl(cst)? {
        Some(decl) => decl,
        None => return Err(unsupported(cst)),
      },
    })
  }

  /// `{ StatementList? }`, with or without a `Block` inside `BlockStatement`.
  pub fn lower_block(&mut self, cst: &CstNode) -> LowerResult<Node<BlockStmt>> {
    if let [inner] = cst.children.as_slice() {
      if inner.is(CstKind::Block) {
        return self.lower_block(inner);
      };
    };
    let body = self.lower_statement_list(between(cst, CstKind::BraceOpen, CstKind::BraceClose))?;
    Ok(node(cst, BlockStmt {
      body,
      l_brace_token: self.child_token(cst, CstKind::BraceOpen),
      r_brace_token: self.child_token(cst, CstKind::BraceClose),
    }))
  }

  fn lower_jump_label(&mut self, cst: &CstNode) -> LowerResult<Option<Node<IdExpr>>> {
    match cst.find_any(&[CstKind::LabelIdentifier, CstKind::Identifier, CstKind::IdentifierName]) {
      Some(l) => Ok(Some(self.lower_identifier_like(l)?)),
      None => Ok(None),
    }
  }

  fn lower_if(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let consequent = body_after_paren(cst)?;
    let alternate = match cst.position(CstKind::KeywordElse) {
      Some(at) => {
        let alt = cst
          .children
          .get(at + 1)
          .ok_or_else(|| malformed(cst, "else branch"))?;
        Some(self.lower_stmt(alt)?)
      }
      None => None,
    };
    Ok(Stmt::If(node(cst, IfStmt {
      test: self.lower_expr(paren_operand(cst)?)?,
      consequent: self.lower_stmt(consequent)?,
      alternate,
      if_token: self.child_token(cst, CstKind::KeywordIf),
      else_token: self.child_token(cst, CstKind::KeywordElse),
      l_paren_token: self.child_token(cst, CstKind::ParenthesisOpen),
      r_paren_token: self.child_token(cst, CstKind::ParenthesisClose),
    })))
  }

  /// `case` and `default` clauses unify into `SwitchCase`, in source order.
  fn lower_switch(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let case_block = require(cst, CstKind::CaseBlock, "case block")?;
    let mut cases = Vec::new();
    for clause in case_block.flat_children() {
      let test = match clause.kind {
        CstKind::CaseClause => {
          let test = child_after(clause, CstKind::KeywordCase).ok_or_else(|| malformed(clause, "case test"))?;
          Some(self.lower_expr(test)?)
        }
        CstKind::DefaultClause => None,
        CstKind::BraceOpen | CstKind::BraceClose => continue,
        _ => return Err(malformed(clause, "case clause")),
      };
      let consequent = clause
        .children
        .iter()
        .skip_while(|c| !c.is(CstKind::Colon))
        .skip(1)
        .flat_map(|c| if c.kind.is_list() { c.flat_children() } else { vec![c] });
      let consequent = self.lower_statement_list(consequent)?;
      cases.push(node(clause, SwitchCase {
        test,
        consequent,
        case_token: self.opt_token(clause.find_any(&[CstKind::KeywordCase, CstKind::KeywordDefault])),
        colon_token: self.child_token(clause, CstKind::Colon),
      }));
    }
    Ok(Stmt::Switch(node(cst, SwitchStmt {
      discriminant: self.lower_expr(paren_operand(cst)?)?,
      cases,
      switch_token: self.child_token(cst, CstKind::KeywordSwitch),
      l_brace_token: self.child_token(case_block, CstKind::BraceOpen),
      r_brace_token: self.child_token(case_block, CstKind::BraceClose),
    })))
  }

  fn lower_try(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let block = require(cst, CstKind::Block, "try block")?;
    let handler = match cst.find(CstKind::Catch) {
      Some(c) => Some(self.lower_catch(c)?),
      None => None,
    };
    let finally = cst.find(CstKind::Finally);
    let finalizer = match finally {
      Some(f) => Some(self.lower_block(require(f, CstKind::Block, "finally block")?)?),
      None => None,
    };
    if handler.is_none() && finalizer.is_none() {
      return Err(malformed(cst, "catch or finally"));
    };
    Ok(Stmt::Try(node(cst, TryStmt {
      block: self.lower_block(block)?,
      handler,
      finalizer,
      try_token: self.child_token(cst, CstKind::KeywordTry),
      finally_token: finally.and_then(|f| self.child_token(f, CstKind::KeywordFinally)),
    })))
  }

  /// `catch ( CatchParameter ) Block`, or `catch Block` without a binding.
  fn lower_catch(&mut self, cst: &CstNode) -> LowerResult<Node<CatchClause>> {
    let param = match cst.find(CstKind::CatchParameter) {
      Some(p) => {
        let target = p
          .children
          .iter()
          .find(|c| !c.is(CstKind::TSTypeAnnotation))
          .ok_or_else(|| malformed(p, "catch binding"))?;
        let ann = match p.find(CstKind::TSTypeAnnotation) {
          Some(a) => Some(self.lower_type_ann(a)?),
          None => None,
        };
        let pat: Pat = self.lower_binding_target(target)?;
        Some(with_type_annotation(pat, ann, false))
      }
      None => None,
    };
    let body = require(cst, CstKind::Block, "catch block")?;
    Ok(node(cst, CatchClause {
      param,
      body: self.lower_block(body)?,
      catch_token: self.child_token(cst, CstKind::KeywordCatch),
    }))
  }
}

/// The first child, which for most statements is the leading rule.
fn require_first<'c>(cst: &'c CstNode, expected: &'static str) -> LowerResult<&'c CstNode> {
  cst.children.first().ok_or_else(|| malformed(cst, expected))
}

/// The child following the `kind` terminal, unless it is the closing `;`.
pub(crate) fn child_after(cst: &CstNode, kind: CstKind) -> Option<&CstNode> {
  let at = cst.position(kind)?;
  cst.children.get(at + 1).filter(|c| !c.is(CstKind::Semicolon))
}
