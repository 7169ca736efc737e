use crate::ast::class::MethodKind;
use crate::ast::expr::lit::ArrayElem;
use crate::ast::expr::lit::LitArrExpr;
use crate::ast::expr::lit::LitObjExpr;
use crate::ast::expr::lit::ObjMember;
use crate::ast::expr::lit::ObjMemberItem;
use crate::ast::expr::lit::ObjProperty;
use crate::ast::expr::lit::PropKind;
use crate::ast::expr::pat::IdPat;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::AssignExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::SpreadElement;
use crate::ast::node::Node;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::lower::between;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::require;
use crate::lower::span;
use crate::lower::split_list;
use crate::lower::unsupported;
use crate::lower::Lowerer;
use crate::operator::OperatorName;

impl Lowerer {
  pub fn lower_array_literal(&mut self, cst: &CstNode) -> LowerResult<Node<LitArrExpr>> {
    let mut elements = Vec::new();
    for item in split_list(between(cst, CstKind::BracketOpen, CstKind::BracketClose)) {
      let element = match item.parts.as_slice() {
        [] => None,
        [dots, arg] if dots.is(CstKind::DotDotDot) => {
          Some(Expr::Spread(Node::new(dots.loc + arg.loc, SpreadElement {
            argument: self.lower_expr(arg)?,
            ellipsis_token: self.token(dots),
          })))
        }
        [elem] => Some(self.lower_expr(elem)?),
        _ => return Err(malformed(cst, "array element")),
      };
      elements.push(ArrayElem {
        element,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(node(cst, LitArrExpr {
      elements,
      l_bracket_token: self.child_token(cst, CstKind::BracketOpen),
      r_bracket_token: self.child_token(cst, CstKind::BracketClose),
    }))
  }

  pub fn lower_object_literal(&mut self, cst: &CstNode) -> LowerResult<Node<LitObjExpr>> {
    let mut properties = Vec::new();
    for item in split_list(between(cst, CstKind::BraceOpen, CstKind::BraceClose)) {
      let property = match item.parts.as_slice() {
        [def] if def.is(CstKind::PropertyDefinition) => {
          let parts: Vec<&CstNode> = def.children.iter().collect();
          self.lower_property_definition(def, &parts)?
        }
        [] => return Err(malformed(cst, "property definition")),
        parts => self.lower_property_definition(cst, parts)?,
      };
      properties.push(ObjMemberItem {
        property,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(node(cst, LitObjExpr {
      properties,
      l_brace_token: self.child_token(cst, CstKind::BraceOpen),
      r_brace_token: self.child_token(cst, CstKind::BraceClose),
    }))
  }

  /// One `PropertyDefinition`, given its children. `at` supplies the location.
  fn lower_property_definition(&mut self, at: &CstNode, parts: &[&CstNode]) -> LowerResult<ObjMember> {
    let loc = span(parts);
    Ok(match parts {
      [dots, arg] if dots.is(CstKind::DotDotDot) => ObjMember::Spread(Node::new(loc, SpreadElement {
        argument: self.lower_expr(arg)?,
        ellipsis_token: self.token(dots),
      })),
      [spread] if spread.is(CstKind::SpreadElement) => ObjMember::Spread(self.lower_spread(spread)?),
      [method]
        if matches!(
          method.unwrap_passthrough().kind,
          CstKind::MethodDefinition | CstKind::GeneratorMethod | CstKind::AsyncMethod | CstKind::AsyncGeneratorMethod
        ) =>
      {
        let m = self.lower_method_definition(method.unwrap_passthrough())?;
        let kind = match m.kind {
          MethodKind::Get => PropKind::Get,
          MethodKind::Set => PropKind::Set,
          _ => PropKind::Init,
        };
        ObjMember::Prop(Node::new(loc, ObjProperty {
          key: m.key,
          value: Expr::Func(m.value),
          kind,
          method: kind == PropKind::Init,
          shorthand: false,
          computed: m.computed,
          colon_token: None,
        }))
      }
      // `{ a = 1 }`, only valid once reinterpreted as a pattern.
      [cover] if cover.is(CstKind::CoverInitializedName) => {
        let id = cover
          .children
          .first()
          .filter(|c| !c.is(CstKind::Initializer))
          .ok_or_else(|| malformed(cover, "shorthand name"))?;
        let init = require(cover, CstKind::Initializer, "initializer")?;
        let name = self.lower_identifier_like(id)?;
        let (right, operator_token) = self.lower_initializer(init)?;
        let value = Expr::Assign(node(cover, AssignExpr {
          operator: OperatorName::Assignment,
          left: Pat::Id(Node::new(name.loc, IdPat::new(name.stx.name.clone()))),
          right,
          operator_token,
        }));
        ObjMember::Prop(Node::new(loc, ObjProperty {
          key: Expr::Id(name),
          value,
          kind: PropKind::Init,
          method: false,
          shorthand: true,
          computed: false,
          colon_token: None,
        }))
      }
      [single] => {
        let name = self.lower_identifier_like(single)?;
        ObjMember::Prop(Node::new(loc, ObjProperty {
          key: Expr::Id(name.clone()),
          value: Expr::Id(name),
          kind: PropKind::Init,
          method: false,
          shorthand: true,
          computed: false,
          colon_token: None,
        }))
      }
      [key, colon, value] if colon.is(CstKind::Colon) => {
        let (key, computed) = self.lower_prop_name(key)?;
        ObjMember::Prop(Node::new(loc, ObjProperty {
          key,
          value: self.lower_expr(value)?,
          kind: PropKind::Init,
          method: false,
          shorthand: false,
          computed,
          colon_token: self.token(colon),
        }))
      }
      _ => return Err(unsupported(at)),
    })
  }

  /// Lowers a property, method, member or enum key. Returns the key and whether it is computed.
  pub fn lower_prop_name(&mut self, cst: &CstNode) -> LowerResult<(Expr, bool)> {
    let cst = cst.unwrap_passthrough();
    Ok(match cst.kind {
      CstKind::ComputedPropertyName => {
        let inner = between(cst, CstKind::BracketOpen, CstKind::BracketClose);
        let [expr] = inner.as_slice() else {
          return Err(malformed(cst, "computed key expression"));
        };
        (self.lower_expr(expr)?, true)
      }
      CstKind::StringLiteral => (Expr::LitStr(self.lower_string_literal(cst)?), false),
      CstKind::NumericLiteral | CstKind::BigIntLiteral => (self.lower_literal(cst)?, false),
      CstKind::PrivateIdentifier => (Expr::PrivateName(self.lower_private_identifier(cst)?), false),
      _ => (Expr::Id(self.lower_identifier_like(cst)?), false),
    })
  }
}
