use crate::ast::expr::Expr;
use crate::ast::expr::IdExpr;
use crate::ast::func::Param;
use crate::ast::node::Node;
use crate::ast::ts::types::TsArrayType;
use crate::ast::ts::types::TsCallSignature;
use crate::ast::ts::types::TsConditionalType;
use crate::ast::ts::types::TsConstructorType;
use crate::ast::ts::types::TsConstructSignature;
use crate::ast::ts::types::TsFunctionType;
use crate::ast::ts::types::TsIndexedAccessType;
use crate::ast::ts::types::TsIndexSignature;
use crate::ast::ts::types::TsInferType;
use crate::ast::ts::types::TsIntersectionType;
use crate::ast::ts::types::TsKeyword;
use crate::ast::ts::types::TsKeywordType;
use crate::ast::ts::types::TsLiteralType;
use crate::ast::ts::types::TsMappedModifier;
use crate::ast::ts::types::TsMappedType;
use crate::ast::ts::types::TsMethodSignature;
use crate::ast::ts::types::TsMethodSignatureKind;
use crate::ast::ts::types::TsNamedTupleMember;
use crate::ast::ts::types::TsOptionalType;
use crate::ast::ts::types::TsPredicateName;
use crate::ast::ts::types::TsPropertySignature;
use crate::ast::ts::types::TsRestType;
use crate::ast::ts::types::TsThisType;
use crate::ast::ts::types::TsTupleElem;
use crate::ast::ts::types::TsTupleType;
use crate::ast::ts::types::TsType;
use crate::ast::ts::types::TsTypeElement;
use crate::ast::ts::types::TsTypeLiteral;
use crate::ast::ts::types::TsTypeOperator;
use crate::ast::ts::types::TsTypeOperatorKind;
use crate::ast::ts::types::TsTypePredicate;
use crate::ast::ts::types::TsTypeQuery;
use crate::ast::ts::types::TsTypeReference;
use crate::ast::ts::types::TsUnionType;
use crate::ast::ts::TsEntityName;
use crate::ast::ts::TsTypeAnn;
use crate::ast::ts::TsTypeParam;
use crate::ast::ts::TsTypeParams;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::loc::Loc;
use crate::lower::between;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::split_list;
use crate::lower::unsupported;
use crate::lower::Lowerer;

/// Parameter list nodes of a signature: everything from the first `(` or
/// parameter rule up to the matching `)`.
fn signature_params(children: &[CstNode]) -> Vec<&CstNode> {
  let mut out = Vec::new();
  let mut depth = 0;
  for c in children {
    match c.kind {
      CstKind::FormalParameters | CstKind::UniqueFormalParameters if depth == 0 => out.push(c),
      CstKind::ParenthesisOpen => depth += 1,
      CstKind::ParenthesisClose => depth -= 1,
      _ if depth > 0 => out.push(c),
      _ => {}
    };
  }
  out
}

/// Whether a terminal separates members of a type literal or interface body.
fn is_member_separator(c: &CstNode) -> bool {
  c.is(CstKind::Semicolon) || c.is(CstKind::Comma)
}

/// `+`, `-` or nothing before a mapped type's `readonly` or `?`.
fn mapped_modifier(sign: Option<&CstNode>) -> TsMappedModifier {
  match sign.map(|s| s.kind) {
    Some(CstKind::Plus) => TsMappedModifier::Plus,
    Some(CstKind::Hyphen) => TsMappedModifier::Minus,
    _ => TsMappedModifier::Present,
  }
}

impl Lowerer {
  pub fn lower_ts_type(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let cst = cst.unwrap_passthrough();
    self.check_dialect(cst)?;
    if cst.is_terminal() {
      return self.lower_terminal_type(cst);
    };
    Ok(match cst.kind {
      CstKind::TSParenthesizedType => {
        let inner = between(cst, CstKind::ParenthesisOpen, CstKind::ParenthesisClose);
        let [inner] = inner.as_slice() else {
          return Err(malformed(cst, "parenthesized type"));
        };
        self.lower_ts_type(inner)?
      }
      CstKind::TSPredefinedType | CstKind::TSThisType => {
        let [keyword] = cst.children.as_slice() else {
          return Err(malformed(cst, "type keyword"));
        };
        let mut ty = self.lower_terminal_type(keyword)?;
        set_type_loc(&mut ty, cst);
        ty
      }
      CstKind::TSTypeReference => self.lower_type_reference(cst)?,
      CstKind::TSEntityName | CstKind::IdentifierReference | CstKind::Identifier => {
        TsType::Reference(node(cst, TsTypeReference {
          type_name: self.lower_entity_name(cst)?,
          type_arguments: None,
        }))
      }
      CstKind::TSUnionType | CstKind::TSIntersectionType => {
        let sep = if cst.is(CstKind::TSUnionType) {
          CstKind::Bar
        } else {
          CstKind::Ampersand
        };
        let mut types = Vec::new();
        for c in cst.children.iter().filter(|c| !c.is(sep)) {
          types.push(self.lower_ts_type(c)?);
        }
        // A leading `|` or `&` on a single member.
        if types.len() == 1 {
          return types.pop().ok_or_else(|| malformed(cst, "type"));
        };
        if types.is_empty() {
          return Err(malformed(cst, "member types"));
        };
        match sep {
          CstKind::Bar => TsType::Union(node(cst, TsUnionType { types })),
          _ => TsType::Intersection(node(cst, TsIntersectionType { types })),
        }
      }
      CstKind::TSArrayType => {
        let element = cst.children.first().ok_or_else(|| malformed(cst, "element type"))?;
        TsType::Array(node(cst, TsArrayType {
          element_type: self.lower_ts_type(element)?,
        }))
      }
      CstKind::TSIndexedAccessType => {
        let [object, open, index, close] = cst.children.as_slice() else {
          return Err(malformed(cst, "`T[K]`"));
        };
        if !open.is(CstKind::BracketOpen) || !close.is(CstKind::BracketClose) {
          return Err(malformed(cst, "`[` and `]`"));
        };
        TsType::IndexedAccess(node(cst, TsIndexedAccessType {
          object_type: self.lower_ts_type(object)?,
          index_type: self.lower_ts_type(index)?,
        }))
      }
      CstKind::TSTupleType => self.lower_tuple(cst)?,
      CstKind::TSNamedTupleMember => self.lower_named_tuple_member(cst)?,
      CstKind::TSOptionalType => {
        let inner = cst.children.first().ok_or_else(|| malformed(cst, "optional element type"))?;
        TsType::Optional(node(cst, TsOptionalType {
          type_annotation: self.lower_ts_type(inner)?,
        }))
      }
      CstKind::TSRestType => {
        let inner = cst
          .children
          .iter()
          .find(|c| !c.is(CstKind::DotDotDot))
          .ok_or_else(|| malformed(cst, "rest element type"))?;
        TsType::Rest(node(cst, TsRestType {
          type_annotation: self.lower_ts_type(inner)?,
        }))
      }
      CstKind::TSFunctionType | CstKind::TSConstructorType => self.lower_fn_type(cst)?,
      CstKind::TSLiteralType => TsType::Literal(node(cst, TsLiteralType {
        literal: self.lower_literal_type(cst)?,
      })),
      CstKind::TSTypeQuery => {
        let name = cst
          .children
          .iter()
          .find(|c| !c.is(CstKind::KeywordTypeof) && !c.is(CstKind::TSTypeArguments))
          .ok_or_else(|| malformed(cst, "queried name"))?;
        let type_arguments = match cst.find(CstKind::TSTypeArguments) {
          Some(a) => Some(self.lower_type_args(a)?),
          None => None,
        };
        TsType::TypeQuery(node(cst, TsTypeQuery {
          expr_name: self.lower_entity_name(name)?,
          type_arguments,
        }))
      }
      CstKind::TSTypeOperator => {
        let [op, operand] = cst.children.as_slice() else {
          return Err(malformed(cst, "type operator and operand"));
        };
        let operator = match op.kind {
          CstKind::KeywordKeyof => TsTypeOperatorKind::Keyof,
          CstKind::KeywordUnique => TsTypeOperatorKind::Unique,
          CstKind::KeywordReadonly => TsTypeOperatorKind::Readonly,
          _ => return Err(malformed(op, "`keyof`, `unique` or `readonly`")),
        };
        TsType::TypeOperator(node(cst, TsTypeOperator {
          operator,
          type_annotation: self.lower_ts_type(operand)?,
        }))
      }
      CstKind::TSConditionalType => {
        let [check, extends, ext, question, t, colon, f] = cst.children.as_slice() else {
          return Err(malformed(cst, "`A extends B ? C : D`"));
        };
        if !extends.is(CstKind::KeywordExtends) || !question.is(CstKind::Question) || !colon.is(CstKind::Colon) {
          return Err(malformed(cst, "`extends`, `?` and `:`"));
        };
        TsType::Conditional(node(cst, TsConditionalType {
          check_type: self.lower_ts_type(check)?,
          extends_type: self.lower_ts_type(ext)?,
          true_type: self.lower_ts_type(t)?,
          false_type: self.lower_ts_type(f)?,
        }))
      }
      CstKind::TSInferType => {
        let name = cst.children.get(1).ok_or_else(|| malformed(cst, "inferred name"))?;
        let constraint = match cst.position(CstKind::KeywordExtends) {
          Some(at) => {
            let c = cst.children.get(at + 1).ok_or_else(|| malformed(cst, "constraint"))?;
            Some(self.lower_ts_type(c)?)
          }
          None => None,
        };
        let id = self.lower_binding_identifier(name)?;
        TsType::Infer(node(cst, TsInferType {
          type_parameter: Node::new(
            Loc::best_effort(Some(id.loc), constraint.as_ref().map(|c| c.loc())),
            TsTypeParam {
              name: id.stx.name,
              constraint,
              default: None,
              in_: false,
              out: false,
              const_: false,
            },
          ),
        }))
      }
      CstKind::TSTypePredicate => self.lower_type_predicate(cst)?,
      CstKind::TSMappedType => self.lower_mapped_type(cst)?,
      CstKind::TSTypeLiteral => TsType::TypeLiteral(node(cst, TsTypeLiteral {
        members: self.lower_type_members(cst)?,
      })),
      _ => return Err(unsupported(cst)),
    })
  }

  /// Keyword types, `this`, and bare identifiers as references.
  fn lower_terminal_type(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    if cst.is(CstKind::KeywordThis) {
      return Ok(TsType::This(node(cst, TsThisType {})));
    };
    let name = cst.text().ok_or_else(|| malformed(cst, "type name"))?;
    if let Some(keyword) = TsKeyword::from_name(name) {
      return Ok(TsType::Keyword(node(cst, TsKeywordType { keyword })));
    };
    match cst.kind {
      CstKind::StringLiteral
      | CstKind::NumericLiteral
      | CstKind::BigIntLiteral
      | CstKind::KeywordTrue
      | CstKind::KeywordFalse
      | CstKind::NoSubstitutionTemplate => Ok(TsType::Literal(node(cst, TsLiteralType {
        literal: self.lower_literal_type(cst)?,
      }))),
      _ => Ok(TsType::Reference(node(cst, TsTypeReference {
        type_name: TsEntityName::Id(self.lower_identifier_like(cst)?),
        type_arguments: None,
      }))),
    }
  }

  /// `Name TSTypeArguments?`. A lone predefined name is a keyword type.
  fn lower_type_reference(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let name = cst
      .children
      .iter()
      .find(|c| !c.is(CstKind::TSTypeArguments))
      .ok_or_else(|| malformed(cst, "type name"))?;
    let type_arguments = match cst.find(CstKind::TSTypeArguments) {
      Some(a) => Some(self.lower_type_args(a)?),
      None => None,
    };
    if type_arguments.is_none() {
      let inner = name.unwrap_passthrough();
      if let Some(keyword) = inner.is_terminal().then(|| inner.text()).flatten().and_then(TsKeyword::from_name) {
        return Ok(TsType::Keyword(node(cst, TsKeywordType { keyword })));
      };
    };
    Ok(TsType::Reference(node(cst, TsTypeReference {
      type_name: self.lower_entity_name(name)?,
      type_arguments,
    })))
  }

  /// The literal of a literal type: a string, number, bigint, boolean,
  /// template, or a negated number.
  fn lower_literal_type(&mut self, cst: &CstNode) -> LowerResult<Expr> {
    if cst.is_terminal() {
      return self.lower_expr(cst);
    };
    match cst.children.as_slice() {
      [minus, _] if minus.is(CstKind::Hyphen) => self.lower_unary(cst),
      [lit] => self.lower_literal_type(lit),
      _ => match cst.kind {
        CstKind::TemplateLiteral | CstKind::SubstitutionTemplate => self.lower_expr(cst),
        _ => Err(malformed(cst, "literal type")),
      },
    }
  }

  fn lower_tuple(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let mut element_types = Vec::new();
    for item in split_list(between(cst, CstKind::BracketOpen, CstKind::BracketClose)) {
      let [element] = item.parts.as_slice() else {
        return Err(malformed(cst, "tuple element"));
      };
      element_types.push(TsTupleElem {
        element: self.lower_ts_type(element)?,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(TsType::Tuple(node(cst, TsTupleType { element_types })))
  }

  /// `...? label ?? : Type`. A rest label wraps the member in a rest type.
  fn lower_named_tuple_member(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let rest = cst.children.first().filter(|c| c.is(CstKind::DotDotDot));
    let parts = &cst.children[usize::from(rest.is_some())..];
    let colon_at = parts
      .iter()
      .position(|c| c.is(CstKind::Colon))
      .ok_or_else(|| malformed(cst, "`:` after tuple label"))?;
    let label = parts.first().ok_or_else(|| malformed(cst, "tuple label"))?;
    let element = parts.get(colon_at + 1).ok_or_else(|| malformed(cst, "tuple element type"))?;
    let member = TsType::NamedTupleMember(node(cst, TsNamedTupleMember {
      label: self.lower_identifier_like(label)?,
      element_type: self.lower_ts_type(element)?,
      optional: parts[..colon_at].iter().any(|c| c.is(CstKind::Question)),
    }));
    if rest.is_some() {
      return Ok(TsType::Rest(node(cst, TsRestType {
        type_annotation: member,
      })));
    };
    Ok(member)
  }

  /// `abstract? new? <T>? (params) => Return`.
  fn lower_fn_type(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let arrow_at = cst
      .position(CstKind::EqualsChevronRight)
      .ok_or_else(|| malformed(cst, "`=>`"))?;
    let ret = cst
      .children
      .get(arrow_at + 1)
      .ok_or_else(|| malformed(cst, "return type"))?;
    let type_parameters = match cst.find(CstKind::TSTypeParameters) {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    let params = self.lower_formal_params(cst, &signature_params(&cst.children[..arrow_at]))?;
    let return_type = self.type_ann_from(ret, None)?;
    if cst.is(CstKind::TSConstructorType) {
      return Ok(TsType::Constructor(node(cst, TsConstructorType {
        params,
        return_type,
        type_parameters,
        abstract_: cst.has(CstKind::KeywordAbstract),
      })));
    };
    Ok(TsType::Function(node(cst, TsFunctionType {
      params,
      return_type,
      type_parameters,
    })))
  }

  /// `asserts? (name | this) (is Type)?`.
  fn lower_type_predicate(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let asserts = cst.children.len() > 1
      && cst.children[0].is(CstKind::KeywordAsserts)
      && !cst.children[1].is(CstKind::KeywordIs);
    let parts = &cst.children[usize::from(asserts)..];
    let name = parts.first().ok_or_else(|| malformed(cst, "predicate parameter"))?;
    let parameter_name = match name.unwrap_passthrough() {
      n if n.is(CstKind::KeywordThis) || n.is(CstKind::TSThisType) => TsPredicateName::This(node(n, TsThisType {})),
      n => TsPredicateName::Id(self.lower_identifier_like(n)?),
    };
    let type_annotation = match parts {
      [_, is, ty] if is.is(CstKind::KeywordIs) => Some(self.type_ann_from(ty, None)?),
      [_] => None,
      _ => return Err(malformed(cst, "`is` and type")),
    };
    if !asserts && type_annotation.is_none() {
      return Err(malformed(cst, "`is` and type"));
    };
    Ok(TsType::Predicate(node(cst, TsTypePredicate {
      parameter_name,
      type_annotation,
      asserts,
    })))
  }

  /// `{ (+|-)?readonly? [K in C (as N)?] (+|-)??? (: T)?; }`.
  fn lower_mapped_type(&mut self, cst: &CstNode) -> LowerResult<TsType> {
    let parts = between(cst, CstKind::BraceOpen, CstKind::BraceClose);
    let open = parts
      .iter()
      .position(|c| c.is(CstKind::BracketOpen))
      .ok_or_else(|| malformed(cst, "`[`"))?;
    let close = parts
      .iter()
      .position(|c| c.is(CstKind::BracketClose))
      .ok_or_else(|| malformed(cst, "`]`"))?;
    let readonly = match &parts[..open] {
      [] => None,
      [r] if r.is(CstKind::KeywordReadonly) => Some(mapped_modifier(None)),
      [sign, r] if r.is(CstKind::KeywordReadonly) => Some(mapped_modifier(Some(*sign))),
      _ => return Err(malformed(cst, "`readonly` modifier")),
    };
    let (name, key_parts) = match parts.get(open + 1..close) {
      Some([name, rest @ ..]) => (*name, rest),
      _ => return Err(malformed(cst, "mapped key")),
    };
    let (constraint, name_type) = match key_parts {
      [in_, c] if in_.is(CstKind::KeywordIn) => (c, None),
      [in_, c, as_, n] if in_.is(CstKind::KeywordIn) && as_.is(CstKind::KeywordAs) => (c, Some(*n)),
      _ => return Err(malformed(cst, "`in` constraint")),
    };
    let id = self.lower_binding_identifier(name)?;
    let constraint = self.lower_ts_type(constraint)?;
    let type_parameter = Node::new(id.loc + constraint.loc(), TsTypeParam {
      name: id.stx.name,
      constraint: Some(constraint),
      default: None,
      in_: false,
      out: false,
      const_: false,
    });
    let name_type = match name_type {
      Some(n) => Some(self.lower_ts_type(n)?),
      None => None,
    };
    let mut optional = None;
    let mut type_annotation = None;
    let tail = &parts[close + 1..];
    let mut i = 0;
    while let Some(c) = tail.get(i) {
      match c.kind {
        CstKind::Question => optional = Some(mapped_modifier(None)),
        CstKind::Plus | CstKind::Hyphen if tail.get(i + 1).is_some_and(|q| q.is(CstKind::Question)) => {
          optional = Some(mapped_modifier(Some(*c)));
          i += 1;
        }
        CstKind::Colon => {
          let ty = tail.get(i + 1).ok_or_else(|| malformed(c, "mapped value type"))?;
          type_annotation = Some(self.lower_ts_type(ty)?);
          i += 1;
        }
        CstKind::Semicolon | CstKind::Comma => {}
        _ => return Err(malformed(c, "mapped type part")),
      };
      i += 1;
    }
    Ok(TsType::Mapped(node(cst, TsMappedType {
      type_parameter,
      name_type,
      type_annotation,
      optional,
      readonly,
    })))
  }

  /// Members between the braces of a type literal or interface body.
  pub(crate) fn lower_type_members(&mut self, cst: &CstNode) -> LowerResult<Vec<TsTypeElement>> {
    let mut members = Vec::new();
    for c in between(cst, CstKind::BraceOpen, CstKind::BraceClose) {
      if is_member_separator(c) {
        continue;
      };
      members.push(self.lower_type_element(c)?);
    }
    Ok(members)
  }

  fn lower_type_element(&mut self, cst: &CstNode) -> LowerResult<TsTypeElement> {
    self.check_dialect(cst)?;
    Ok(match cst.kind {
      CstKind::TSPropertySignature => TsTypeElement::PropertySignature(self.lower_property_signature(cst)?),
      CstKind::TSMethodSignature => TsTypeElement::MethodSignature(self.lower_method_signature(cst)?),
      CstKind::TSIndexSignature => TsTypeElement::IndexSignature(self.lower_index_signature(cst)?),
      CstKind::TSCallSignatureDeclaration => {
        let (params, return_type, type_parameters) = self.lower_signature(cst)?;
        TsTypeElement::CallSignature(node(cst, TsCallSignature {
          params,
          return_type,
          type_parameters,
        }))
      }
      CstKind::TSConstructSignatureDeclaration => {
        let (params, return_type, type_parameters) = self.lower_signature(cst)?;
        TsTypeElement::ConstructSignature(node(cst, TsConstructSignature {
          params,
          return_type,
          type_parameters,
        }))
      }
      _ => return Err(malformed(cst, "type member")),
    })
  }

  /// Type parameters, parameters and return annotation of a call-like signature.
  #[allow(clippy::type_complexity)]
  fn lower_signature(
    &mut self,
    cst: &CstNode,
  ) -> LowerResult<(Vec<Param>, Option<Node<TsTypeAnn>>, Option<Node<TsTypeParams>>)> {
    let type_parameters = match cst.find(CstKind::TSTypeParameters) {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    let params = self.lower_formal_params(cst, &signature_params(&cst.children))?;
    let return_type = match cst.find(CstKind::TSTypeAnnotation) {
      Some(a) => Some(self.lower_type_ann(a)?),
      None => None,
    };
    Ok((params, return_type, type_parameters))
  }

  /// `readonly? Name ?? TSTypeAnnotation?`.
  fn lower_property_signature(&mut self, cst: &CstNode) -> LowerResult<Node<TsPropertySignature>> {
    let readonly = cst.children.len() > 1
      && cst.children[0].is(CstKind::KeywordReadonly)
      && !matches!(cst.children[1].kind, CstKind::Question | CstKind::TSTypeAnnotation);
    let name = cst
      .children
      .get(usize::from(readonly))
      .ok_or_else(|| malformed(cst, "property name"))?;
    let (key, computed) = self.lower_prop_name(name)?;
    let type_annotation = match cst.find(CstKind::TSTypeAnnotation) {
      Some(a) => Some(self.lower_type_ann(a)?),
      None => None,
    };
    Ok(node(cst, TsPropertySignature {
      key,
      computed,
      optional: cst.has(CstKind::Question),
      readonly,
      type_annotation,
    }))
  }

  /// `(get | set)? Name ?? <T>? (params) TSTypeAnnotation?`.
  fn lower_method_signature(&mut self, cst: &CstNode) -> LowerResult<Node<TsMethodSignature>> {
    let head_len = cst
      .children
      .iter()
      .position(|c| {
        matches!(
          c.kind,
          CstKind::Question
            | CstKind::TSTypeParameters
            | CstKind::ParenthesisOpen
            | CstKind::FormalParameters
            | CstKind::UniqueFormalParameters
        )
      })
      .unwrap_or(cst.children.len());
    let (kind, name) = match &cst.children[..head_len] {
      [name] => (TsMethodSignatureKind::Method, name),
      [accessor, name] if accessor.is(CstKind::KeywordGet) => (TsMethodSignatureKind::Get, name),
      [accessor, name] if accessor.is(CstKind::KeywordSet) => (TsMethodSignatureKind::Set, name),
      _ => return Err(malformed(cst, "method signature name")),
    };
    let (key, computed) = self.lower_prop_name(name)?;
    let (params, return_type, type_parameters) = self.lower_signature(cst)?;
    Ok(node(cst, TsMethodSignature {
      key,
      computed,
      optional: cst.children.get(head_len).is_some_and(|c| c.is(CstKind::Question)),
      kind,
      params,
      return_type,
      type_parameters,
    }))
  }

  /// `static? readonly? [key: Type] TSTypeAnnotation?`, in type members and class bodies.
  pub fn lower_index_signature(&mut self, cst: &CstNode) -> LowerResult<Node<TsIndexSignature>> {
    self.check_dialect(cst)?;
    let open = cst
      .position(CstKind::BracketOpen)
      .ok_or_else(|| malformed(cst, "`[`"))?;
    let close = cst
      .position(CstKind::BracketClose)
      .ok_or_else(|| malformed(cst, "`]`"))?;
    let inner: Vec<&CstNode> = cst.children[open + 1..close].iter().collect();
    let parameters = self.lower_formal_params(cst, &inner)?;
    let type_annotation = match cst.children[close + 1..].iter().find(|c| c.is(CstKind::TSTypeAnnotation)) {
      Some(a) => Some(self.lower_type_ann(a)?),
      None => None,
    };
    let modifiers = &cst.children[..open];
    Ok(node(cst, TsIndexSignature {
      parameters,
      type_annotation,
      readonly: modifiers.iter().any(|c| c.is(CstKind::KeywordReadonly)),
      static_: modifiers.iter().any(|c| c.is(CstKind::KeywordStatic)),
    }))
  }
}

/// `as const` names the `const` type.
pub(crate) fn const_type(cst: &CstNode) -> TsType {
  TsType::Reference(node(cst, TsTypeReference {
    type_name: TsEntityName::Id(node(cst, IdExpr {
      name: "const".to_string(),
    })),
    type_arguments: None,
  }))
}

fn set_type_loc(ty: &mut TsType, cst: &CstNode) {
  match ty {
    TsType::Keyword(n) => n.loc = cst.loc,
    TsType::This(n) => n.loc = cst.loc,
    TsType::Reference(n) => n.loc = cst.loc,
    TsType::Literal(n) => n.loc = cst.loc,
    _ => {}
  };
}
