use super::loops::var_kind;
use crate::ast::node::Node;
use crate::ast::stmt::decl::VarDecl;
use crate::ast::stmt::decl::VarDeclarator;
use crate::ast::stmt::decl::VarDeclaratorItem;
use crate::ast::stmt::decl::VarDeclKind;
use crate::ast::stmt::Stmt;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::loc::Loc;
use crate::lower::ident::first_terminal;
use crate::lower::malformed;
use crate::lower::pat::with_type_annotation;
use crate::lower::span;
use crate::lower::split_list;
use crate::lower::Lowerer;

impl Lowerer {
  /// Declarations that may appear as statements. Returns `None` for any other kind.
  pub(crate) fn lower_decl(&mut self, cst: &CstNode) -> LowerResult<Option<Stmt>> {
    Ok(Some(match cst.kind {
      CstKind::VariableStatement | CstKind::LexicalDeclaration => Stmt::VarDecl(self.lower_var_decl(cst)?),
      CstKind::FunctionDeclaration
      | CstKind::GeneratorDeclaration
      | CstKind::AsyncFunctionDeclaration
      | CstKind::AsyncGeneratorDeclaration => self.lower_func_decl(cst)?,
      CstKind::ClassDeclaration => Stmt::ClassDecl(self.lower_class_decl(cst)?),
      k if k.is_typescript() => {
        self.check_dialect(cst)?;
        match self.lower_ts_decl(cst)? {
          Some(stmt) => stmt,
          None => return Ok(None),
        }
      }
      _ => return Ok(None),
    }))
  }

  /// `VariableStatement` or `LexicalDeclaration`.
  pub fn lower_var_decl(&mut self, cst: &CstNode) -> LowerResult<Node<VarDecl>> {
    let head = cst
      .children
      .first()
      .ok_or_else(|| malformed(cst, "declaration keyword"))?;
    let keyword = first_terminal(head).ok_or_else(|| malformed(head, "declaration keyword"))?;
    let kind = var_kind(keyword).ok_or_else(|| malformed(keyword, "`var`, `let` or `const`"))?;
    let semicolon = cst.children.last().filter(|c| c.is(CstKind::Semicolon));
    let end = cst.children.len() - usize::from(semicolon.is_some());
    let parts: Vec<&CstNode> = cst.children[1..end].iter().collect();
    self.lower_var_parts(cst.loc, kind, keyword, &parts, semicolon)
  }

  /// Builds a declaration from its keyword and the declarator list that follows it.
  pub(crate) fn lower_var_parts(
    &mut self,
    loc: Loc,
    kind: VarDeclKind,
    keyword: &CstNode,
    parts: &[&CstNode],
    semicolon: Option<&CstNode>,
  ) -> LowerResult<Node<VarDecl>> {
    let mut flat = Vec::new();
    for p in parts {
      if p.kind.is_list() {
        flat.extend(p.flat_children());
      } else {
        flat.push(*p);
      };
    }
    let mut declarations = Vec::new();
    for item in split_list(flat) {
      let declarator = match item.parts.as_slice() {
        [d] if matches!(
          d.kind,
          CstKind::VariableDeclaration | CstKind::LexicalBinding | CstKind::ForBinding
        ) =>
        {
          let parts: Vec<&CstNode> = d.children.iter().collect();
          self.lower_declarator(d.loc, &parts)?
        }
        [] => return Err(malformed(keyword, "declarator")),
        parts => self.lower_declarator(span(parts), parts)?,
      };
      declarations.push(VarDeclaratorItem {
        declarator,
        comma_token: self.opt_token(item.comma),
      });
    }
    if declarations.is_empty() {
      return Err(malformed(keyword, "declarator"));
    };
    Ok(Node::new(loc, VarDecl {
      kind,
      declarations,
      declare: false,
      kind_token: self.token(keyword),
      semicolon_token: self.opt_token(semicolon),
    }))
  }

  /// `target ('!')? TSTypeAnnotation? Initializer?`.
  fn lower_declarator(&mut self, loc: Loc, parts: &[&CstNode]) -> LowerResult<Node<VarDeclarator>> {
    let Some((target, rest)) = parts.split_first() else {
      return Err(loc.error(
        LowerErrorType::MalformedCst("binding target"),
        CstKind::VariableDeclaration,
      ));
    };
    let mut definite = false;
    let mut ann = None;
    let mut init = None;
    for p in rest {
      match p.kind {
        CstKind::Exclamation => {
          self.check_ts_syntax(p)?;
          definite = true;
        }
        CstKind::TSTypeAnnotation => ann = Some(self.lower_type_ann(p)?),
        CstKind::Initializer => init = Some(self.lower_initializer(p)?),
        _ => return Err(malformed(p, "declarator part")),
      };
    }
    let id = with_type_annotation(self.lower_binding_target(target)?, ann, false);
    let (init, equals_token) = match init {
      Some((expr, eq)) => (Some(expr), eq),
      None => (None, None),
    };
    Ok(Node::new(loc, VarDeclarator {
      id,
      init,
      definite,
      equals_token,
    }))
  }
}

#[cfg(test)]
mod tests {
  use crate::ast::stmt::decl::VarDeclKind;
  use crate::ast::stmt::Stmt;
  use crate::cst::build::binding_id;
  use crate::cst::build::layout;
  use crate::cst::build::rule;
  use crate::cst::build::tok;
  use crate::cst::CstKind;
  use crate::error::LowerErrorType;
  use crate::lower::Lowerer;
  use crate::Dialect;
  use crate::LowerOptions;

  #[test]
  fn declarators_pair_with_commas() {
    let (cst, _) = layout(rule(CstKind::VariableStatement, vec![
      tok("var"),
      rule(CstKind::VariableDeclarationList, vec![
        rule(CstKind::VariableDeclaration, vec![binding_id("a")]),
        tok(","),
        rule(CstKind::VariableDeclaration, vec![
          binding_id("b"),
          rule(CstKind::Initializer, vec![tok("="), tok("1")]),
        ]),
      ]),
      tok(";"),
    ]));
    let mut l = Lowerer::new(LowerOptions::default());
    let Stmt::VarDecl(decl) = l.lower_stmt(&cst).unwrap() else {
      panic!("expected a variable declaration");
    };
    assert_eq!(decl.stx.kind, VarDeclKind::Var);
    assert_eq!(decl.stx.declarations.len(), 2);
    assert!(decl.stx.declarations[0].comma_token.is_some());
    assert!(decl.stx.declarations[1].comma_token.is_none());
    assert!(decl.stx.declarations[1].declarator.stx.init.is_some());
    assert!(decl.stx.semicolon_token.is_some());
  }

  #[test]
  fn definite_assignment_is_typescript_only() {
    let (cst, _) = layout(rule(CstKind::LexicalDeclaration, vec![
      rule(CstKind::LetOrConst, vec![tok("let")]),
      rule(CstKind::LexicalBinding, vec![binding_id("x"), tok("!")]),
    ]));
    let mut ts = Lowerer::new(LowerOptions::default());
    let Stmt::VarDecl(decl) = ts.lower_stmt(&cst).unwrap() else {
      panic!("expected a variable declaration");
    };
    assert!(decl.stx.declarations[0].declarator.stx.definite);

    let mut js = Lowerer::new(LowerOptions {
      dialect: Dialect::Js,
      ..LowerOptions::default()
    });
    assert_eq!(
      js.lower_stmt(&cst).unwrap_err().typ,
      LowerErrorType::TypeSyntaxInJs
    );
  }
}
