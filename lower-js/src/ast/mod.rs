//! ESTree-shaped output syntax.
//!
//! Every syntax struct serialises with an ESTree `type` tag and camelCase
//! fields; [`node::Node`] adds `start`/`end`. Enums are untagged so that the
//! tag of the wrapped struct is the only `type` emitted. Token fields and
//! TypeScript-only fields are omitted from JSON when absent.

pub mod class;
pub mod expr;
pub mod func;
pub mod import_export;
pub mod node;
pub mod stmt;
pub mod stx;
pub mod ts;

pub(crate) fn is_false(v: &bool) -> bool {
  !*v
}
