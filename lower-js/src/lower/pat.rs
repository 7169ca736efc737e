use super::between;
use super::malformed;
use super::require;
use super::split_list;
use super::Lowerer;
use crate::ast::expr::lit::ObjMember;
use crate::ast::expr::lit::PropKind;
use crate::ast::expr::pat::ArrPat;
use crate::ast::expr::pat::ArrPatElem;
use crate::ast::expr::pat::AssignPat;
use crate::ast::expr::pat::IdPat;
use crate::ast::expr::pat::ObjPat;
use crate::ast::expr::pat::ObjPatItem;
use crate::ast::expr::pat::ObjPatProp;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::pat::PatProperty;
use crate::ast::expr::pat::RestPat;
use crate::ast::expr::Expr;
use crate::ast::expr::ThisExpr;
use crate::ast::node::Node;
use crate::ast::ts::TsTypeAnn;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerError;
use crate::error::LowerErrorType;
use crate::error::LowerResult;
use crate::operator::OperatorName;
use crate::token::Token;

fn invalid_target(cst: &CstNode) -> LowerError {
  cst.loc.error(LowerErrorType::InvalidAssignmentTarget, cst.kind)
}

/// Attaches `?` and a type annotation to the base of a pattern.
///
/// Extends the pattern's location over the annotation. Targets that cannot
/// carry an annotation are returned unchanged.
pub fn with_type_annotation(pat: Pat, ann: Option<Node<TsTypeAnn>>, optional: bool) -> Pat {
  if ann.is_none() && !optional {
    return pat;
  };
  let end = ann.as_ref().map(|a| a.loc);
  match pat {
    Pat::Id(mut n) => {
      n.loc = n.loc.add_option(end);
      n.stx.optional |= optional;
      n.stx.type_annotation = ann;
      Pat::Id(n)
    }
    Pat::Arr(mut n) => {
      n.loc = n.loc.add_option(end);
      n.stx.optional |= optional;
      n.stx.type_annotation = ann;
      Pat::Arr(n)
    }
    Pat::Obj(mut n) => {
      n.loc = n.loc.add_option(end);
      n.stx.optional |= optional;
      n.stx.type_annotation = ann;
      Pat::Obj(n)
    }
    Pat::Rest(mut n) => {
      n.loc = n.loc.add_option(end);
      n.stx.type_annotation = ann;
      Pat::Rest(n)
    }
    Pat::Assign(mut n) => {
      n.loc = n.loc.add_option(end);
      n.stx.type_annotation = ann;
      Pat::Assign(n)
    }
    Pat::ParamProp(mut n) => {
      let inner = std::mem::replace(&mut n.stx.parameter, Pat::Expr(placeholder()));
      n.stx.parameter = with_type_annotation(inner, ann, optional);
      Pat::ParamProp(n)
    }
    other @ Pat::Expr(_) => other,
  }
}

fn placeholder() -> Expr {
  Node::new(Default::default(), ThisExpr {}).into()
}

/// Converts an already lowered expression into an assignment pattern.
///
/// Object and array literals convert recursively (spreads become rest elements),
/// `=` assignments become defaults, and member or TypeScript wrapper targets pass
/// through. Anything else is an invalid target; `kind` names the CST rule for the error.
pub fn expr_to_pat(expr: Expr, kind: CstKind) -> LowerResult<Pat> {
  let loc = expr.loc();
  let invalid = || loc.error(LowerErrorType::InvalidAssignmentTarget, kind);
  Ok(match expr {
    Expr::Id(n) => Pat::Id(Node::new(n.loc, IdPat::new(n.stx.name))),
    Expr::LitObj(n) => {
      let count = n.stx.properties.len();
      let mut properties = Vec::with_capacity(count);
      for (i, item) in n.stx.properties.into_iter().enumerate() {
        let property = match item.property {
          ObjMember::Prop(p) => {
            let p_loc = p.loc;
            let p = *p.stx;
            if p.method || p.kind != PropKind::Init {
              return Err(p_loc.error(LowerErrorType::InvalidAssignmentTarget, kind));
            };
            ObjPatProp::Prop(Node::new(p_loc, PatProperty {
              key: p.key,
              value: expr_to_pat(p.value, kind)?,
              kind: PropKind::Init,
              shorthand: p.shorthand,
              computed: p.computed,
              colon_token: p.colon_token,
            }))
          }
          ObjMember::Spread(s) => {
            if i + 1 != count || item.comma_token.is_some() {
              return Err(s.loc.error(LowerErrorType::InvalidAssignmentTarget, kind));
            };
            let s_loc = s.loc;
            let s = *s.stx;
            ObjPatProp::Rest(Node::new(s_loc, RestPat {
              argument: expr_to_pat(s.argument, kind)?,
              type_annotation: None,
              ellipsis_token: s.ellipsis_token,
            }))
          }
        };
        properties.push(ObjPatItem {
          property,
          comma_token: item.comma_token,
        });
      }
      Pat::Obj(Node::new(n.loc, ObjPat {
        properties,
        optional: false,
        type_annotation: None,
        l_brace_token: n.stx.l_brace_token,
        r_brace_token: n.stx.r_brace_token,
      }))
    }
    Expr::LitArr(n) => {
      let count = n.stx.elements.len();
      let mut elements = Vec::with_capacity(count);
      for (i, elem) in n.stx.elements.into_iter().enumerate() {
        let element = match elem.element {
          None => None,
          Some(Expr::Spread(s)) => {
            if i + 1 != count || elem.comma_token.is_some() {
              return Err(s.loc.error(LowerErrorType::InvalidAssignmentTarget, kind));
            };
            let s_loc = s.loc;
            let s = *s.stx;
            Some(Pat::Rest(Node::new(s_loc, RestPat {
              argument: expr_to_pat(s.argument, kind)?,
              type_annotation: None,
              ellipsis_token: s.ellipsis_token,
            })))
          }
          Some(e) => Some(expr_to_pat(e, kind)?),
        };
        elements.push(ArrPatElem {
          element,
          comma_token: elem.comma_token,
        });
      }
      Pat::Arr(Node::new(n.loc, ArrPat {
        elements,
        optional: false,
        type_annotation: None,
        l_bracket_token: n.stx.l_bracket_token,
        r_bracket_token: n.stx.r_bracket_token,
      }))
    }
    Expr::Assign(n) => {
      if n.stx.operator != OperatorName::Assignment {
        return Err(invalid());
      };
      let a = *n.stx;
      Pat::Assign(Node::new(n.loc, AssignPat {
        left: a.left,
        right: a.right,
        type_annotation: None,
        equals_token: a.operator_token,
      }))
    }
    e @ (Expr::Member(_)
    | Expr::TsAs(_)
    | Expr::TsNonNull(_)
    | Expr::TsSatisfies(_)
    | Expr::TsTypeAssertion(_)) => Pat::Expr(e),
    Expr::Paren(n) => match n.stx.expression {
      inner @ (Expr::Id(_) | Expr::Member(_) | Expr::Paren(_)) => expr_to_pat(inner, kind)?,
      _ => return Err(invalid()),
    },
    _ => return Err(invalid()),
  })
}

impl Lowerer {
  /// `Initializer`: `=` AssignmentExpression.
  pub(crate) fn lower_initializer(&mut self, cst: &CstNode) -> LowerResult<(Expr, Option<Token>)> {
    let value = cst
      .children
      .iter()
      .find(|c| !c.is(CstKind::Equals))
      .ok_or_else(|| malformed(cst, "initializer value"))?;
    Ok((self.lower_expr(value)?, self.child_token(cst, CstKind::Equals)))
  }

  /// Applies the `?`, type annotation and initializer children of `cst` to `target`.
  pub(crate) fn decorate_binding(&mut self, cst: &CstNode, target: Pat) -> LowerResult<Pat> {
    let optional = cst.has(CstKind::Question);
    let ann = match cst.find(CstKind::TSTypeAnnotation) {
      Some(a) => Some(self.lower_type_ann(a)?),
      None => None,
    };
    let pat = with_type_annotation(target, ann, optional);
    Ok(match cst.find(CstKind::Initializer) {
      Some(init) => {
        let (right, equals_token) = self.lower_initializer(init)?;
        Pat::Assign(Node::new(cst.loc, AssignPat {
          left: pat,
          right,
          type_annotation: None,
          equals_token,
        }))
      }
      None => pat,
    })
  }

  /// A parameter given as loose parts: an optional `...`, the target, then any of
  /// `?`, a type annotation and an initializer.
  ///
  /// A rest parameter must be `last` and cannot have an initializer.
  pub(crate) fn lower_param_parts(
    &mut self,
    at: &CstNode,
    parts: &[&CstNode],
    last: bool,
    to_pat: fn(&mut Lowerer, &CstNode) -> LowerResult<Pat>,
    fail: fn(&CstNode) -> LowerError,
  ) -> LowerResult<Pat> {
    let (rest, parts) = match parts.split_first() {
      Some((dots, tail)) if dots.is(CstKind::DotDotDot) => (Some(*dots), tail),
      _ => (None, parts),
    };
    let Some((target, modifiers)) = parts.split_first() else {
      return Err(fail(at));
    };
    let mut optional = false;
    let mut ann = None;
    let mut init = None;
    for m in modifiers {
      match m.kind {
        CstKind::Question => optional = true,
        CstKind::TSTypeAnnotation => ann = Some(self.lower_type_ann(m)?),
        CstKind::Initializer if rest.is_none() => init = Some(*m),
        _ => return Err(fail(m)),
      };
    }
    let mut pat = to_pat(self, target)?;
    if let Some(dots) = rest {
      if !last {
        return Err(fail(dots));
      };
      pat = Pat::Rest(Node::new(dots.loc + target.loc, RestPat {
        argument: pat,
        type_annotation: None,
        ellipsis_token: self.token(dots),
      }));
    };
    pat = with_type_annotation(pat, ann, optional);
    if let Some(init) = init {
      let (right, equals_token) = self.lower_initializer(init)?;
      pat = Pat::Assign(Node::new(target.loc + init.loc, AssignPat {
        left: pat,
        right,
        type_annotation: None,
        equals_token,
      }));
    };
    Ok(pat)
  }

  /// Lowers `BindingIdentifier`, `BindingPattern`, `ObjectBindingPattern` or `ArrayBindingPattern`.
  pub fn lower_binding_target(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let cst = cst.unwrap_passthrough();
    match cst.kind {
      CstKind::BindingIdentifier | CstKind::Identifier | CstKind::IdentifierReference => {
        Ok(Pat::Id(self.lower_binding_identifier(cst)?))
      }
      _ if cst.is_terminal() => Ok(Pat::Id(self.lower_binding_identifier(cst)?)),
      CstKind::BindingPattern | CstKind::ObjectBindingPattern | CstKind::ArrayBindingPattern => {
        self.lower_binding_pattern(cst)
      }
      _ => self.lower_binding_element(cst),
    }
  }

  pub fn lower_binding_pattern(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let cst = cst.unwrap_passthrough();
    match cst.kind {
      CstKind::ObjectBindingPattern => Ok(Pat::Obj(self.lower_object_binding_pattern(cst)?)),
      CstKind::ArrayBindingPattern => Ok(Pat::Arr(self.lower_array_binding_pattern(cst)?)),
      _ => Err(malformed(cst, "object or array binding pattern")),
    }
  }

  /// Lowers one binding element, with its optional marker, type annotation and default.
  ///
  /// Accepts `BindingElement`, `SingleNameBinding`, `FormalParameter`,
  /// `BindingRestElement` and `FunctionRestParameter`.
  pub fn lower_binding_element(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    match cst.kind {
      CstKind::BindingRestElement | CstKind::FunctionRestParameter | CstKind::BindingRestProperty => {
        return Ok(Pat::Rest(self.lower_rest_element(cst)?));
      }
      CstKind::BindingIdentifier
      | CstKind::BindingPattern
      | CstKind::ObjectBindingPattern
      | CstKind::ArrayBindingPattern => return self.lower_binding_target(cst),
      _ if cst.is_terminal() => return self.lower_binding_target(cst),
      _ => {}
    };
    let target = cst
      .rules()
      .find(|c| {
        !matches!(
          c.kind,
          CstKind::TSTypeAnnotation | CstKind::Initializer | CstKind::Decorator
        )
      })
      .ok_or_else(|| malformed(cst, "binding target"))?;
    let base = match target.kind {
      CstKind::SingleNameBinding
      | CstKind::BindingElement
      | CstKind::BindingRestElement
      | CstKind::FunctionRestParameter
      | CstKind::FormalParameter => self.lower_binding_element(target)?,
      _ => self.lower_binding_target(target)?,
    };
    self.decorate_binding(cst, base)
  }

  /// `...` followed by a binding target and an optional type annotation.
  pub fn lower_rest_element(&mut self, cst: &CstNode) -> LowerResult<Node<RestPat>> {
    let inner = cst
      .children
      .iter()
      .find(|c| !matches!(c.kind, CstKind::DotDotDot | CstKind::TSTypeAnnotation))
      .ok_or_else(|| malformed(cst, "rest target"))?;
    if inner.is(CstKind::BindingRestElement) {
      return self.lower_rest_element(inner);
    };
    let argument = self.lower_binding_target(inner)?;
    let type_annotation = match cst.find(CstKind::TSTypeAnnotation) {
      Some(a) => Some(self.lower_type_ann(a)?),
      None => None,
    };
    Ok(Node::new(cst.loc, RestPat {
      argument,
      type_annotation,
      ellipsis_token: self.child_token(cst, CstKind::DotDotDot),
    }))
  }

  pub fn lower_object_binding_pattern(&mut self, cst: &CstNode) -> LowerResult<Node<ObjPat>> {
    let mut properties = Vec::new();
    for item in split_list(between(cst, CstKind::BraceOpen, CstKind::BraceClose)) {
      let Some(&part) = item.parts.first() else {
        return Err(malformed(cst, "binding property"));
      };
      let property = match part.kind {
        CstKind::BindingRestProperty | CstKind::BindingRestElement => {
          ObjPatProp::Rest(self.lower_rest_element(part)?)
        }
        CstKind::DotDotDot => {
          let target = item
            .parts
            .get(1)
            .ok_or_else(|| malformed(cst, "rest target"))?;
          ObjPatProp::Rest(Node::new(part.loc + target.loc, RestPat {
            argument: self.lower_binding_target(target)?,
            type_annotation: None,
            ellipsis_token: self.token(part),
          }))
        }
        _ => ObjPatProp::Prop(self.lower_binding_property(part)?),
      };
      properties.push(ObjPatItem {
        property,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(Node::new(cst.loc, ObjPat {
      properties,
      optional: false,
      type_annotation: None,
      l_brace_token: self.child_token(cst, CstKind::BraceOpen),
      r_brace_token: self.child_token(cst, CstKind::BraceClose),
    }))
  }

  /// `BindingProperty`: a `SingleNameBinding` shorthand, or `PropertyName : BindingElement`.
  fn lower_binding_property(&mut self, cst: &CstNode) -> LowerResult<Node<PatProperty>> {
    if let Some(colon_at) = cst.position(CstKind::Colon) {
      let colon = &cst.children[colon_at];
      let key_cst = cst.children[..colon_at]
        .first()
        .ok_or_else(|| malformed(cst, "property name"))?;
      let value_cst = cst
        .children
        .get(colon_at + 1)
        .ok_or_else(|| malformed(cst, "property value"))?;
      let (key, computed) = self.lower_prop_name(key_cst)?;
      let value = self.lower_binding_element(value_cst)?;
      return Ok(Node::new(cst.loc, PatProperty {
        key,
        value,
        kind: PropKind::Init,
        shorthand: false,
        computed,
        colon_token: self.token(colon),
      }));
    };
    // Shorthand: the key is the bound name.
    let single = if cst.is(CstKind::SingleNameBinding) || cst.has(CstKind::BindingIdentifier) {
      cst
    } else {
      require(cst, CstKind::SingleNameBinding, "single name binding")?
    };
    let id = if single.is(CstKind::BindingIdentifier) {
      single
    } else {
      require(single, CstKind::BindingIdentifier, "binding identifier")?
    };
    let key = Expr::Id(self.lower_identifier_like(id)?);
    let value = self.lower_binding_element(single)?;
    Ok(Node::new(cst.loc, PatProperty {
      key,
      value,
      kind: PropKind::Init,
      shorthand: true,
      computed: false,
      colon_token: None,
    }))
  }

  pub fn lower_array_binding_pattern(&mut self, cst: &CstNode) -> LowerResult<Node<ArrPat>> {
    let mut children = Vec::new();
    for c in between(cst, CstKind::BracketOpen, CstKind::BracketClose) {
      if c.is(CstKind::BindingElisionElement) {
        children.extend(c.flat_children());
      } else {
        children.push(c);
      };
    }
    let mut elements = Vec::new();
    for item in split_list(children) {
      let element = match item.parts.as_slice() {
        [] => None,
        [dots, target, ..] if dots.is(CstKind::DotDotDot) => {
          Some(Pat::Rest(Node::new(dots.loc + target.loc, RestPat {
            argument: self.lower_binding_target(target)?,
            type_annotation: None,
            ellipsis_token: self.token(dots),
          })))
        }
        [elem, ..] => Some(self.lower_binding_element(elem)?),
      };
      elements.push(ArrPatElem {
        element,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(Node::new(cst.loc, ArrPat {
      elements,
      optional: false,
      type_annotation: None,
      l_bracket_token: self.child_token(cst, CstKind::BracketOpen),
      r_bracket_token: self.child_token(cst, CstKind::BracketClose),
    }))
  }

  /// Converts a CST fragment parsed as an expression into an assignment pattern.
  ///
  /// Used for destructuring assignment and `for-in`/`for-of` heads, where object
  /// literal shorthand defaults (`CoverInitializedName`) only exist at the CST level.
  pub fn cst_to_pat(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let cst = cst.unwrap_passthrough();
    match cst.kind {
      CstKind::IdentifierReference | CstKind::BindingIdentifier | CstKind::Identifier => {
        Ok(Pat::Id(self.lower_binding_identifier(cst)?))
      }
      CstKind::ObjectLiteral => self.object_literal_to_pat(cst),
      CstKind::ArrayLiteral => self.array_literal_to_pat(cst),
      CstKind::ObjectBindingPattern | CstKind::ArrayBindingPattern | CstKind::BindingPattern => {
        self.lower_binding_pattern(cst)
      }
      CstKind::AssignmentExpression if cst.has(CstKind::Equals) => {
        let left = cst.children.first().ok_or_else(|| malformed(cst, "assignment target"))?;
        let right = cst.children.last().ok_or_else(|| malformed(cst, "assignment value"))?;
        Ok(Pat::Assign(Node::new(cst.loc, AssignPat {
          left: self.cst_to_pat(left)?,
          right: self.lower_expr(right)?,
          type_annotation: None,
          equals_token: self.child_token(cst, CstKind::Equals),
        })))
      }
      _ => {
        let expr = self.lower_expr(cst)?;
        expr_to_pat(expr, cst.kind)
      }
    }
  }

  fn object_literal_to_pat(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let items = split_list(between(cst, CstKind::BraceOpen, CstKind::BraceClose));
    let count = items.len();
    let mut properties = Vec::with_capacity(count);
    for (i, item) in items.into_iter().enumerate() {
      let Some(&def) = item.parts.first() else {
        return Err(malformed(cst, "property definition"));
      };
      let parts: Vec<&CstNode> = if def.is(CstKind::PropertyDefinition) {
        def.children.iter().collect()
      } else {
        item.parts.clone()
      };
      let property = match parts.as_slice() {
        [dots, target] if dots.is(CstKind::DotDotDot) => {
          if i + 1 != count || item.comma.is_some() {
            return Err(invalid_target(def));
          };
          ObjPatProp::Rest(Node::new(def.loc, RestPat {
            argument: self.cst_to_pat(target)?,
            type_annotation: None,
            ellipsis_token: self.token(dots),
          }))
        }
        [single] if single.is(CstKind::CoverInitializedName) => {
          ObjPatProp::Prop(self.cover_initialized_name_to_pat(single)?)
        }
        [single] if single.is(CstKind::MethodDefinition) => return Err(invalid_target(single)),
        [single] => {
          let name = self.lower_identifier_like(single)?;
          let value = Pat::Id(Node::new(name.loc, IdPat::new(name.stx.name.clone())));
          ObjPatProp::Prop(Node::new(def.loc, PatProperty {
            key: Expr::Id(name),
            value,
            kind: PropKind::Init,
            shorthand: true,
            computed: false,
            colon_token: None,
          }))
        }
        [key, colon, value] if colon.is(CstKind::Colon) => {
          let (key, computed) = self.lower_prop_name(key)?;
          ObjPatProp::Prop(Node::new(def.loc, PatProperty {
            key,
            value: self.cst_to_pat(value)?,
            kind: PropKind::Init,
            shorthand: false,
            computed,
            colon_token: self.token(colon),
          }))
        }
        _ => return Err(invalid_target(def)),
      };
      properties.push(ObjPatItem {
        property,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(Pat::Obj(Node::new(cst.loc, ObjPat {
      properties,
      optional: false,
      type_annotation: None,
      l_brace_token: self.child_token(cst, CstKind::BraceOpen),
      r_brace_token: self.child_token(cst, CstKind::BraceClose),
    })))
  }

  /// `{ x = 1 }` as a pattern: shorthand property whose value is an `AssignmentPattern`.
  pub(crate) fn cover_initialized_name_to_pat(&mut self, cst: &CstNode) -> LowerResult<Node<PatProperty>> {
    let id = cst
      .children
      .first()
      .filter(|c| !c.is(CstKind::Initializer))
      .ok_or_else(|| malformed(cst, "shorthand name"))?;
    let init = require(cst, CstKind::Initializer, "initializer")?;
    let name = self.lower_identifier_like(id)?;
    let left = Pat::Id(Node::new(name.loc, IdPat::new(name.stx.name.clone())));
    let (right, equals_token) = self.lower_initializer(init)?;
    Ok(Node::new(cst.loc, PatProperty {
      key: Expr::Id(name),
      value: Pat::Assign(Node::new(cst.loc, AssignPat {
        left,
        right,
        type_annotation: None,
        equals_token,
      })),
      kind: PropKind::Init,
      shorthand: true,
      computed: false,
      colon_token: None,
    }))
  }

  fn array_literal_to_pat(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let items = split_list(between(cst, CstKind::BracketOpen, CstKind::BracketClose));
    let count = items.len();
    let mut elements = Vec::with_capacity(count);
    for (i, item) in items.into_iter().enumerate() {
      let parts: Vec<&CstNode> = match item.parts.as_slice() {
        [spread] if spread.is(CstKind::SpreadElement) => spread.children.iter().collect(),
        parts => parts.to_vec(),
      };
      let element = match parts.as_slice() {
        [] => None,
        [dots, target] if dots.is(CstKind::DotDotDot) => {
          if i + 1 != count || item.comma.is_some() {
            return Err(invalid_target(dots));
          };
          Some(Pat::Rest(Node::new(dots.loc + target.loc, RestPat {
            argument: self.cst_to_pat(target)?,
            type_annotation: None,
            ellipsis_token: self.token(dots),
          })))
        }
        [elem] => Some(self.cst_to_pat(elem)?),
        _ => return Err(malformed(cst, "array element")),
      };
      elements.push(ArrPatElem {
        element,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(Pat::Arr(Node::new(cst.loc, ArrPat {
      elements,
      optional: false,
      type_annotation: None,
      l_bracket_token: self.child_token(cst, CstKind::BracketOpen),
      r_bracket_token: self.child_token(cst, CstKind::BracketClose),
    })))
  }

  /// Reads one item of a cover grammar parameter list as a parameter pattern.
  ///
  /// Finds the innermost identifier or pattern shape; `a = 1` becomes a default.
  pub fn cover_param_to_pat(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    let cst = cst.unwrap_passthrough();
    match cst.kind {
      CstKind::IdentifierReference
      | CstKind::BindingIdentifier
      | CstKind::Identifier
      | CstKind::IdentifierName => Ok(Pat::Id(self.lower_binding_identifier(cst)?)),
      CstKind::BindingElement
      | CstKind::SingleNameBinding
      | CstKind::FormalParameter
      | CstKind::BindingRestElement => self.lower_binding_element(cst),
      CstKind::AssignmentExpression if cst.has(CstKind::Equals) => {
        let left = cst.children.first().ok_or_else(|| malformed(cst, "parameter"))?;
        let right = cst.children.last().ok_or_else(|| malformed(cst, "default value"))?;
        Ok(Pat::Assign(Node::new(cst.loc, AssignPat {
          left: self.cover_param_to_pat(left)?,
          right: self.lower_expr(right)?,
          type_annotation: None,
          equals_token: self.child_token(cst, CstKind::Equals),
        })))
      }
      CstKind::ObjectLiteral
      | CstKind::ArrayLiteral
      | CstKind::BindingPattern
      | CstKind::ObjectBindingPattern
      | CstKind::ArrayBindingPattern => self.cst_to_pat(cst),
      _ => Err(cst.loc.error(LowerErrorType::InvalidCoverGrammar, cst.kind)),
    }
  }
}
