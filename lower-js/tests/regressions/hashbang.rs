use lower_js::cst::build::id_ref;
use lower_js::cst::build::layout;
use lower_js::cst::build::rule;
use lower_js::cst::build::tok;
use lower_js::cst::CstKind;
use lower_js::error::LowerErrorType;
use lower_js::lower;
use lower_js::LowerOptions;

#[test]
fn hashbang_is_kept_without_its_marker() {
  let (cst, source) = layout(rule(CstKind::Script, vec![
    tok("#!/usr/bin/env node"),
    rule(CstKind::ExpressionStatement, vec![id_ref("main"), tok(";")]),
  ]));
  let program = lower(&cst, LowerOptions::default()).unwrap();
  assert_eq!(program.stx.hashbang.as_deref(), Some("/usr/bin/env node"));
  assert_eq!(program.stx.body.len(), 1);
  assert_eq!(program.loc.1, source.len());
}

#[test]
fn hashbang_after_a_statement_is_malformed() {
  let (cst, _) = layout(rule(CstKind::Script, vec![
    rule(CstKind::ExpressionStatement, vec![id_ref("main"), tok(";")]),
    tok("#!/usr/bin/env node"),
  ]));
  let err = lower(&cst, LowerOptions::default()).unwrap_err();
  assert!(matches!(err.typ, LowerErrorType::MalformedCst(_)), "{err:?}");
  assert_eq!(err.kind, CstKind::Hashbang);
}
