//! `do`/`while`, `for`, `for-in`, `for-of` and `for await`.

use super::body_after_paren;
use super::paren_operand;
use crate::ast::stmt::decl::VarDeclKind;
use crate::ast::stmt::DoWhileStmt;
use crate::ast::stmt::ForHead;
use crate::ast::stmt::ForInit;
use crate::ast::stmt::ForInStmt;
use crate::ast::stmt::ForOfStmt;
use crate::ast::stmt::ForStmt;
use crate::ast::stmt::Stmt;
use crate::ast::stmt::WhileStmt;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::lower::ident::first_terminal;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::span;
use crate::lower::unsupported;
use crate::lower::Lowerer;

/// Splits the contents of `for ( ... )` into its three clauses.
///
/// Clauses are delimited by `;`, except that a `LexicalDeclaration` carries
/// its own `;` and so closes the first clause by itself.
fn for_clauses(inner: Vec<&CstNode>) -> Option<[Vec<&CstNode>; 3]> {
  let mut clauses: Vec<Vec<&CstNode>> = Vec::new();
  let mut current = Vec::new();
  for c in inner {
    match c.kind {
      CstKind::Semicolon => clauses.push(std::mem::take(&mut current)),
      CstKind::LexicalDeclaration if clauses.is_empty() && current.is_empty() => {
        clauses.push(vec![c]);
      }
      _ => current.push(c),
    };
  }
  clauses.push(current);
  clauses.try_into().ok()
}

/// Children strictly between the statement's `(` and `)`.
fn paren_contents(cst: &CstNode) -> Vec<&CstNode> {
  let open = cst.position(CstKind::ParenthesisOpen).map_or(0, |o| o + 1);
  let close = cst
    .position(CstKind::ParenthesisClose)
    .unwrap_or(cst.children.len());
  cst
    .children
    .get(open..close)
    .map(|s| s.iter().collect())
    .unwrap_or_default()
}

impl Lowerer {
  pub(crate) fn lower_loop(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    match cst.kind {
      CstKind::DoWhileStatement => {
        let body = cst
          .children
          .get(1)
          .ok_or_else(|| malformed(cst, "do body"))?;
        Ok(Stmt::DoWhile(node(cst, DoWhileStmt {
          body: self.lower_stmt(body)?,
          test: self.lower_expr(paren_operand(cst)?)?,
          do_token: self.child_token(cst, CstKind::KeywordDo),
          while_token: self.child_token(cst, CstKind::KeywordWhile),
          semicolon_token: self.child_token(cst, CstKind::Semicolon),
        })))
      }
      CstKind::WhileStatement => Ok(Stmt::While(node(cst, WhileStmt {
        test: self.lower_expr(paren_operand(cst)?)?,
        body: self.lower_stmt(body_after_paren(cst)?)?,
        while_token: self.child_token(cst, CstKind::KeywordWhile),
      }))),
      CstKind::ForStatement => self.lower_for(cst),
      CstKind::ForInOfStatement => self.lower_for_in_of(cst),
      _ => Err(unsupported(cst)),
    }
  }

  fn lower_for(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let [init, test, update] =
      for_clauses(paren_contents(cst)).ok_or_else(|| malformed(cst, "three `for` clauses"))?;
    let init = match init.as_slice() {
      [] => None,
      [decl] if decl.is(CstKind::LexicalDeclaration) || decl.is(CstKind::VariableStatement) => {
        Some(ForInit::VarDecl(self.lower_var_decl(decl)?))
      }
      [var, declarators @ ..] if var.is(CstKind::KeywordVar) => Some(ForInit::VarDecl(self.lower_var_parts(
        span(&init),
        VarDeclKind::Var,
        var,
        declarators,
        None,
      )?)),
      [expr] => Some(ForInit::Expr(self.lower_expr(expr)?)),
      _ => return Err(malformed(cst, "`for` initializer")),
    };
    let test = match test.as_slice() {
      [] => None,
      [t] => Some(self.lower_expr(t)?),
      _ => return Err(malformed(cst, "`for` test")),
    };
    let update = match update.as_slice() {
      [] => None,
      [u] => Some(self.lower_expr(u)?),
      _ => return Err(malformed(cst, "`for` update")),
    };
    Ok(Stmt::For(node(cst, ForStmt {
      init,
      test,
      update,
      body: self.lower_stmt(body_after_paren(cst)?)?,
      for_token: self.child_token(cst, CstKind::KeywordFor),
      l_paren_token: self.child_token(cst, CstKind::ParenthesisOpen),
      r_paren_token: self.child_token(cst, CstKind::ParenthesisClose),
    })))
  }

  fn lower_for_in_of(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let inner = paren_contents(cst);
    let op_at = inner
      .iter()
      .position(|c| c.is(CstKind::KeywordIn) || c.is(CstKind::KeywordOf))
      .ok_or_else(|| malformed(cst, "`in` or `of`"))?;
    let op = inner[op_at];
    let [right] = &inner[op_at + 1..] else {
      return Err(malformed(cst, "`for-in`/`for-of` right side"));
    };
    let left = self.lower_for_head(cst, &inner[..op_at], op.is(CstKind::KeywordIn))?;
    let right = self.lower_expr(right)?;
    let body = self.lower_stmt(body_after_paren(cst)?)?;
    let for_token = self.child_token(cst, CstKind::KeywordFor);
    let l_paren_token = self.child_token(cst, CstKind::ParenthesisOpen);
    let r_paren_token = self.child_token(cst, CstKind::ParenthesisClose);
    if op.is(CstKind::KeywordIn) {
      if cst.has(CstKind::KeywordAwait) {
        return Err(malformed(cst, "`for await` with `of`"));
      };
      return Ok(Stmt::ForIn(node(cst, ForInStmt {
        left,
        right,
        body,
        for_token,
        in_token: self.token(op),
        l_paren_token,
        r_paren_token,
      })));
    };
    Ok(Stmt::ForOf(node(cst, ForOfStmt {
      left,
      right,
      body,
      await_: cst.has(CstKind::KeywordAwait),
      for_token,
      await_token: self.child_token(cst, CstKind::KeywordAwait),
      of_token: self.token(op),
      l_paren_token,
      r_paren_token,
    })))
  }

  /// The left side of `for-in`/`for-of`: a declaration of one binding, or an assignment target.
  ///
  /// `for (var x = init in obj)` keeps its initializer; no other head may have one.
  fn lower_for_head(&mut self, at: &CstNode, parts: &[&CstNode], is_in: bool) -> LowerResult<ForHead> {
    let loc = span(parts);
    Ok(match parts {
      [decl] if decl.is(CstKind::ForDeclaration) || decl.is(CstKind::LexicalDeclaration) => {
        let kind_cst = decl
          .children
          .first()
          .ok_or_else(|| malformed(decl, "`let` or `const`"))?;
        let keyword = first_terminal(kind_cst).unwrap_or(kind_cst);
        let kind = var_kind(keyword).ok_or_else(|| malformed(keyword, "`let` or `const`"))?;
        let bindings: Vec<&CstNode> = decl.children[1..].iter().collect();
        ForHead::VarDecl(self.lower_var_parts(decl.loc, kind, keyword, &bindings, None)?)
      }
      [decl] if decl.is(CstKind::VariableStatement) => ForHead::VarDecl(self.lower_var_decl(decl)?),
      [var, rest @ ..] if var.is(CstKind::KeywordVar) => {
        let has_init = rest
          .iter()
          .any(|r| r.is(CstKind::Initializer) || r.find(CstKind::Initializer).is_some());
        if has_init && !is_in {
          return Err(malformed(var, "`for-of` binding without initializer"));
        };
        ForHead::VarDecl(self.lower_var_parts(loc, VarDeclKind::Var, var, rest, None)?)
      }
      [target] => ForHead::Pat(self.cst_to_pat(target.unwrap_passthrough())?),
      _ => return Err(malformed(at, "`for` head")),
    })
  }
}

pub(crate) fn var_kind(keyword: &CstNode) -> Option<VarDeclKind> {
  match keyword.kind {
    CstKind::KeywordVar => Some(VarDeclKind::Var),
    CstKind::KeywordLet => Some(VarDeclKind::Let),
    CstKind::KeywordConst => Some(VarDeclKind::Const),
    _ => None,
  }
}
