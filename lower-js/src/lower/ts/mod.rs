//! TypeScript syntax: annotations, type parameters and arguments, entity names.
//!
//! Every entry point checks the session dialect first, so a JavaScript session
//! fails with `TypeSyntaxInJs` at the outermost TypeScript production.

pub mod decl;
pub mod expr;
pub mod types;

use super::between;
use super::malformed;
use super::node;
use super::split_list;
use super::Lowerer;
use crate::ast::node::Node;
use crate::ast::ts::TsEntityName;
use crate::ast::ts::TsQualifiedName;
use crate::ast::ts::TsTypeAnn;
use crate::ast::ts::TsTypeArgs;
use crate::ast::ts::TsTypeParam;
use crate::ast::ts::TsTypeParamItem;
use crate::ast::ts::TsTypeParams;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::token::Token;

impl Lowerer {
  /// `: Type`. The colon is optional so that `=> Type` return positions can share it.
  pub fn lower_type_ann(&mut self, cst: &CstNode) -> LowerResult<Node<TsTypeAnn>> {
    self.check_dialect(cst)?;
    let ty = cst
      .children
      .iter()
      .find(|c| !c.is(CstKind::Colon))
      .ok_or_else(|| malformed(cst, "annotated type"))?;
    Ok(node(cst, TsTypeAnn {
      type_annotation: self.lower_ts_type(ty)?,
      colon_token: self.child_token(cst, CstKind::Colon),
    }))
  }

  /// An annotation made from a bare type, as after `=>` or `is`.
  pub(crate) fn type_ann_from(&mut self, ty: &CstNode, lead: Option<&CstNode>) -> LowerResult<Node<TsTypeAnn>> {
    let type_annotation = self.lower_ts_type(ty)?;
    let colon_token: Option<Token> = lead.filter(|l| l.is(CstKind::Colon)).and_then(|l| self.token(l));
    Ok(node(ty, TsTypeAnn {
      type_annotation,
      colon_token,
    }))
  }

  /// `<A, B extends C = D>`.
  pub fn lower_type_params(&mut self, cst: &CstNode) -> LowerResult<Node<TsTypeParams>> {
    self.check_dialect(cst)?;
    let mut params = Vec::new();
    for item in split_list(between(cst, CstKind::ChevronLeft, CstKind::ChevronRight)) {
      let [param] = item.parts.as_slice() else {
        return Err(malformed(cst, "type parameter"));
      };
      params.push(TsTypeParamItem {
        param: self.lower_type_param(param)?,
        comma_token: self.opt_token(item.comma),
      });
    }
    if params.is_empty() {
      return Err(malformed(cst, "type parameter"));
    };
    Ok(node(cst, TsTypeParams { params }))
  }

  /// `const? in? out? Name (extends Constraint)? (= Default)?`, or a bare name.
  pub(crate) fn lower_type_param(&mut self, cst: &CstNode) -> LowerResult<Node<TsTypeParam>> {
    if !cst.is(CstKind::TSTypeParameter) {
      let id = self.lower_binding_identifier(cst)?;
      return Ok(Node::new(id.loc, TsTypeParam {
        name: id.stx.name,
        constraint: None,
        default: None,
        in_: false,
        out: false,
        const_: false,
      }));
    };
    let mut param = TsTypeParam {
      name: String::new(),
      constraint: None,
      default: None,
      in_: false,
      out: false,
      const_: false,
    };
    let mut named = false;
    let mut i = 0;
    while let Some(c) = cst.children.get(i) {
      match c.kind {
        CstKind::KeywordConst if !named => param.const_ = true,
        CstKind::KeywordIn if !named => param.in_ = true,
        // `out` alone is a parameter named "out".
        CstKind::KeywordOut if !named && cst.children.len() > i + 1 && !is_param_tail(&cst.children[i + 1]) => {
          param.out = true
        }
        CstKind::KeywordExtends | CstKind::Equals => {
          let ty = cst
            .children
            .get(i + 1)
            .ok_or_else(|| malformed(c, "type after `extends` or `=`"))?;
          let ty = self.lower_ts_type(ty)?;
          if c.is(CstKind::Equals) {
            param.default = Some(ty);
          } else {
            param.constraint = Some(ty);
          };
          i += 1;
        }
        _ if !named => {
          param.name = self.lower_binding_identifier(c)?.stx.name;
          named = true;
        }
        _ => return Err(malformed(c, "type parameter part")),
      };
      i += 1;
    }
    if !named {
      return Err(malformed(cst, "type parameter name"));
    };
    Ok(node(cst, param))
  }

  /// `<A, B>`.
  pub fn lower_type_args(&mut self, cst: &CstNode) -> LowerResult<Node<TsTypeArgs>> {
    self.check_dialect(cst)?;
    let mut params = Vec::new();
    for item in split_list(between(cst, CstKind::ChevronLeft, CstKind::ChevronRight)) {
      let [ty] = item.parts.as_slice() else {
        return Err(malformed(cst, "type argument"));
      };
      params.push(self.lower_ts_type(ty)?);
    }
    Ok(node(cst, TsTypeArgs { params }))
  }

  /// `A` or `A.B.C`, from a `TSEntityName`, an identifier, or a dotted member expression.
  ///
  /// Dotted names fold to the left: `A.B.C` is `(A.B).C`.
  pub fn lower_entity_name(&mut self, cst: &CstNode) -> LowerResult<TsEntityName> {
    let cst = cst.unwrap_passthrough();
    if cst.is_terminal() || cst.children.len() == 1 {
      return Ok(TsEntityName::Id(self.lower_identifier_like(cst)?));
    };
    let mut parts = cst.children.iter().filter(|c| !c.is(CstKind::Dot));
    let first = parts.next().ok_or_else(|| malformed(cst, "entity name"))?;
    let mut name = self.lower_entity_name(first)?;
    for part in parts {
      let right = self.lower_identifier_like(part)?;
      name = TsEntityName::Qualified(Node::new(name.loc() + right.loc, TsQualifiedName { left: name, right }));
    }
    Ok(name)
  }
}

fn is_param_tail(c: &CstNode) -> bool {
  matches!(c.kind, CstKind::KeywordExtends | CstKind::Equals)
}
