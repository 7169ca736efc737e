use super::malformed;
use super::node;
use super::Lowerer;
use crate::ast::expr::Expr;
use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::ast::stx::Program;
use crate::ast::stx::SourceType;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use tracing::debug;
use tracing::debug_span;

/// Marks the directive prologue of a program or function body.
///
/// Leading expression statements consisting of exactly one string literal are
/// directives; the first statement of any other shape ends the prologue.
pub(crate) fn mark_directives(body: &mut [Stmt]) {
  for stmt in body {
    let Stmt::Expr(expr_stmt) = stmt else {
      break;
    };
    let Expr::LitStr(lit) = &expr_stmt.stx.expression else {
      break;
    };
    let raw = &lit.stx.raw;
    let directive = raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default().to_string();
    expr_stmt.stx.directive = Some(directive);
  }
}

impl Lowerer {
  /// Lowers a `Module`, `Script` or `Program` root.
  ///
  /// Memoised cover results from any previous tree are dropped first, so a
  /// session may lower several programs in turn.
  pub fn lower_program(&mut self, cst: &CstNode) -> LowerResult<Node<Program>> {
    let span = debug_span!("lower_program", root = ?cst.kind, end = cst.loc.1);
    let _guard = span.enter();
    self.reset();
    if !matches!(cst.kind, CstKind::Module | CstKind::Script | CstKind::Program) {
      return Err(malformed(cst, "`Module`, `Script` or `Program` root"));
    };
    let mut hashbang = None;
    let mut items = Vec::new();
    for c in cst.flat_children() {
      if c.is(CstKind::Hashbang) {
        if !items.is_empty() || hashbang.is_some() {
          return Err(malformed(c, "hashbang at the start of the source"));
        };
        let text = c.text().unwrap_or_default();
        hashbang = Some(text.strip_prefix("#!").unwrap_or(text).to_string());
        continue;
      };
      items.push(c);
    }
    let mut body = self.lower_statement_list(items)?;
    mark_directives(&mut body);
    let source_type = match cst.kind {
      CstKind::Script => SourceType::Script,
      CstKind::Module => SourceType::Module,
      _ => self.options().source_type.unwrap_or_else(|| {
        if body.iter().any(Stmt::is_module_item) {
          SourceType::Module
        } else {
          SourceType::Script
        }
      }),
    };
    debug!(?source_type, items = body.len(), "lowered program");
    Ok(node(cst, Program {
      body,
      source_type,
      hashbang,
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::mark_directives;
  use crate::ast::stmt::Stmt;
  use crate::ast::stx::SourceType;
  use crate::cst::build::id_ref;
  use crate::cst::build::layout;
  use crate::cst::build::rule;
  use crate::cst::build::term;
  use crate::cst::build::tok;
  use crate::cst::CstKind;
  use crate::cst::CstNode;
  use crate::lower::Lowerer;
  use crate::LowerOptions;

  fn expr_stmt(expr: CstNode) -> CstNode {
    rule(CstKind::ExpressionStatement, vec![expr, tok(";")])
  }

  #[test]
  fn prologue_stops_at_first_non_string() {
    let (cst, _) = layout(rule(CstKind::Script, vec![rule(CstKind::StatementList, vec![
      expr_stmt(term(CstKind::StringLiteral, "'use strict'")),
      expr_stmt(id_ref("x")),
      expr_stmt(term(CstKind::StringLiteral, "\"not a directive\"")),
    ])]));
    let mut l = Lowerer::new(LowerOptions::default());
    let mut program = l.lower_program(&cst).unwrap();
    let directives: Vec<_> = program
      .stx
      .body
      .iter()
      .map(|s| match s {
        Stmt::Expr(e) => e.stx.directive.clone(),
        _ => None,
      })
      .collect();
    assert_eq!(directives, vec![Some("use strict".to_string()), None, None]);
    // Marking is idempotent.
    mark_directives(&mut program.stx.body);
    assert!(matches!(&program.stx.body[2], Stmt::Expr(e) if e.stx.directive.is_none()));
  }

  #[test]
  fn program_source_type_is_inferred_from_items() {
    let (cst, _) = layout(rule(CstKind::Program, vec![
      rule(CstKind::ImportDeclaration, vec![
        tok("import"),
        rule(CstKind::ModuleSpecifier, vec![term(CstKind::StringLiteral, "\"m\"")]),
        tok(";"),
      ]),
    ]));
    let mut l = Lowerer::new(LowerOptions::default());
    assert_eq!(l.lower_program(&cst).unwrap().stx.source_type, SourceType::Module);

    let (script, _) = layout(rule(CstKind::Program, vec![expr_stmt(id_ref("x"))]));
    assert_eq!(l.lower_program(&script).unwrap().stx.source_type, SourceType::Script);

    let mut forced = Lowerer::new(LowerOptions {
      source_type: Some(SourceType::Module),
      ..LowerOptions::default()
    });
    assert_eq!(forced.lower_program(&script).unwrap().stx.source_type, SourceType::Module);
  }

  #[test]
  fn hashbang_is_split_off() {
    let (cst, _) = layout(rule(CstKind::Module, vec![
      term(CstKind::Hashbang, "#!/usr/bin/env node"),
      expr_stmt(id_ref("x")),
    ]));
    let mut l = Lowerer::new(LowerOptions::default());
    let program = l.lower_program(&cst).unwrap();
    assert_eq!(program.stx.hashbang.as_deref(), Some("/usr/bin/env node"));
    assert_eq!(program.stx.body.len(), 1);
    assert_eq!(program.stx.source_type, SourceType::Module);
  }
}
