use lower_js::cst::build::binding_id;
use lower_js::cst::build::id_ref;
use lower_js::cst::build::layout;
use lower_js::cst::build::rule;
use lower_js::cst::build::tok;
use lower_js::cst::CstKind;
use lower_js::cst::CstNode;
use lower_js::lower;
use lower_js::LowerOptions;
use lower_js::SourceType;

fn expression_statement(name: &str) -> CstNode {
  rule(CstKind::ExpressionStatement, vec![id_ref(name), tok(";")])
}

#[test]
fn program_without_module_items_is_a_script() {
  let (cst, _) = layout(rule(CstKind::Program, vec![expression_statement("a")]));
  let program = lower(&cst, LowerOptions::default()).unwrap();
  assert_eq!(program.stx.source_type, SourceType::Script);
}

#[test]
fn explicit_source_type_overrides_inference() {
  let (cst, _) = layout(rule(CstKind::Program, vec![expression_statement("a")]));
  let program = lower(&cst, LowerOptions {
    source_type: Some(SourceType::Module),
    ..LowerOptions::default()
  })
  .unwrap();
  assert_eq!(program.stx.source_type, SourceType::Module);
}

#[test]
fn module_and_script_roots_decide_for_themselves() {
  let (script, _) = layout(rule(CstKind::Script, vec![expression_statement("a")]));
  let program = lower(&script, LowerOptions {
    source_type: Some(SourceType::Module),
    ..LowerOptions::default()
  })
  .unwrap();
  assert_eq!(program.stx.source_type, SourceType::Script);

  // export const b = 1;
  let (module, _) = layout(rule(CstKind::Module, vec![rule(CstKind::ExportDeclaration, vec![
    tok("export"),
    rule(CstKind::LexicalDeclaration, vec![
      rule(CstKind::LetOrConst, vec![tok("const")]),
      rule(CstKind::LexicalBinding, vec![
        binding_id("b"),
        rule(CstKind::Initializer, vec![tok("="), tok("1")]),
      ]),
      tok(";"),
    ]),
  ])]));
  let program = lower(&module, LowerOptions::default()).unwrap();
  assert_eq!(program.stx.source_type, SourceType::Module);
  assert_eq!(program.stx.body.len(), 1);
}
