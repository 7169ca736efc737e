use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Deserialize;
use serde::Serialize;

use super::stmt::Stmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
  #[default]
  Script,
  Module,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Program", rename_all = "camelCase")]
pub struct Program {
  pub body: Vec<Stmt>,
  #[drive(skip)]
  pub source_type: SourceType,
  #[drive(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hashbang: Option<String>,
}
