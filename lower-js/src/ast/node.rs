use crate::loc::Loc;
use derive_visitor::Drive;
use derive_visitor::DriveMut;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

#[derive(Clone, Drive, DriveMut, PartialEq)]
pub struct Node<S: Drive + DriveMut> {
  // Derived from the originating CST span; synthetic nodes get a best-effort location.
  #[drive(skip)]
  pub loc: Loc,
  pub stx: Box<S>,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      stx: Box::new(stx),
    }
  }

  /// Maps the syntax, keeping the location.
  pub fn map_stx<T: Drive + DriveMut, F: FnOnce(S) -> T>(self, f: F) -> Node<T> {
    Node {
      loc: self.loc,
      stx: Box::new(f(*self.stx)),
    }
  }

  /// Wraps the node inside another node with the same loc, with syntax derived from the provided callback.
  pub fn wrap<T: Drive + DriveMut, F: FnOnce(Node<S>) -> T>(self, f: F) -> Node<T> {
    let loc = self.loc;
    let stx = f(self);
    Node::new(loc, stx)
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

// Every syntax struct serialises with its own `type` tag; the node adds the span.
impl<S: Serialize + Drive + DriveMut> Serialize for Node<S> {
  fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    #[derive(Serialize)]
    struct Spanned<'a, S> {
      #[serde(flatten)]
      stx: &'a S,
      start: usize,
      end: usize,
    }
    Spanned {
      stx: self.stx.as_ref(),
      start: self.loc.0,
      end: self.loc.1,
    }
    .serialize(serializer)
  }
}

#[cfg(test)]
mod tests {
  use super::Node;
  use crate::ast::expr::IdExpr;
  use crate::loc::Loc;
  use serde_json::json;

  #[test]
  fn node_serialises_type_and_span() {
    let node = Node::new(Loc(4, 7), IdExpr {
      name: "foo".into(),
    });
    assert_eq!(
      serde_json::to_value(&node).unwrap(),
      json!({ "type": "Identifier", "name": "foo", "start": 4, "end": 7 })
    );
  }

  #[test]
  fn map_stx_keeps_loc() {
    let node = Node::new(Loc(1, 2), IdExpr { name: "a".into() });
    let mapped = node.map_stx(|id| IdExpr {
      name: format!("{}b", id.name),
    });
    assert_eq!(mapped.loc, Loc(1, 2));
    assert_eq!(mapped.stx.name, "ab");
  }
}
