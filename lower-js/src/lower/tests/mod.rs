mod class;
mod expr;
mod module;
mod pat;
mod stmt;
mod ts;

use super::Lowerer;
use crate::ast::stmt::Stmt;
use crate::cst::build::layout;
use crate::cst::CstNode;
use crate::Dialect;
use crate::LowerOptions;
use serde_json::Value;

fn ts_lowerer() -> Lowerer {
  Lowerer::new(LowerOptions::default())
}

fn js_lowerer() -> Lowerer {
  Lowerer::new(LowerOptions {
    dialect: Dialect::Js,
    ..LowerOptions::default()
  })
}

fn expr_value(cst: CstNode) -> Value {
  let (cst, _) = layout(cst);
  let expr = ts_lowerer().lower_expr(&cst).unwrap();
  serde_json::to_value(&expr).unwrap()
}

fn lower_stmt(cst: CstNode) -> Stmt {
  let (cst, _) = layout(cst);
  ts_lowerer().lower_stmt(&cst).unwrap()
}

fn stmt_value(cst: CstNode) -> Value {
  serde_json::to_value(lower_stmt(cst)).unwrap()
}
