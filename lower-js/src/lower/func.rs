use super::malformed;
use super::node;
use super::split_list;
use super::unsupported;
use super::Lowerer;
use crate::ast::class::Accessibility;
use crate::ast::class::ClassElemModifiers;
use crate::ast::class::MethodKind;
use crate::ast::expr::pat::Pat;
use crate::ast::expr::ArrowFuncExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::FuncExpr;
use crate::ast::func::Func;
use crate::ast::func::FuncBody;
use crate::ast::func::Param;
use crate::ast::node::Node;
use crate::ast::stmt::decl::FuncDecl;
use crate::ast::stmt::decl::TsDeclareFunction;
use crate::ast::stmt::BlockStmt;
use crate::ast::stmt::Stmt;
use crate::ast::ts::TsParamProp;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::loc::Loc;

/// The pieces of any function-like production, found by scanning its children in order.
#[derive(Default)]
pub(crate) struct FuncShape<'c> {
  pub async_: Option<&'c CstNode>,
  pub function: Option<&'c CstNode>,
  pub star: Option<&'c CstNode>,
  pub id: Option<&'c CstNode>,
  pub type_params: Option<&'c CstNode>,
  pub l_paren: Option<&'c CstNode>,
  pub params: Vec<&'c CstNode>,
  pub r_paren: Option<&'c CstNode>,
  pub return_type: Option<&'c CstNode>,
  pub l_brace: Option<&'c CstNode>,
  pub body: Option<&'c CstNode>,
  pub r_brace: Option<&'c CstNode>,
}

impl<'c> FuncShape<'c> {
  pub fn scan(children: impl IntoIterator<Item = &'c CstNode>) -> FuncShape<'c> {
    let mut shape = FuncShape::default();
    let mut in_params = false;
    for c in children {
      if in_params {
        if c.is(CstKind::ParenthesisClose) {
          shape.r_paren = Some(c);
          in_params = false;
        } else {
          shape.params.push(c);
        };
        continue;
      };
      match c.kind {
        CstKind::KeywordAsync if shape.l_paren.is_none() => shape.async_ = Some(c),
        CstKind::KeywordFunction => shape.function = Some(c),
        CstKind::Asterisk => shape.star = Some(c),
        CstKind::BindingIdentifier => shape.id = Some(c),
        CstKind::TSTypeParameters => shape.type_params = Some(c),
        CstKind::ParenthesisOpen => {
          shape.l_paren = Some(c);
          in_params = true;
        }
        // Producers that fold the parentheses into the parameter rule.
        CstKind::FormalParameters | CstKind::UniqueFormalParameters | CstKind::ArrowFormalParameters
          if shape.l_paren.is_none() =>
        {
          shape.l_paren = c.find(CstKind::ParenthesisOpen);
          shape.r_paren = c.find(CstKind::ParenthesisClose);
          shape.params.push(c);
        }
        CstKind::TSTypeAnnotation => shape.return_type = Some(c),
        CstKind::BraceOpen => shape.l_brace = Some(c),
        CstKind::FunctionBody | CstKind::ClassStaticBlockBody => shape.body = Some(c),
        CstKind::BraceClose => shape.r_brace = Some(c),
        _ => {}
      };
    }
    shape
  }

  pub fn has_body(&self) -> bool {
    self.l_brace.is_some() || self.body.is_some()
  }
}

/// A method as read from `MethodDefinition`, before it becomes an object property or class member.
pub(crate) struct MethodParts {
  pub key: Expr,
  pub computed: bool,
  pub kind: MethodKind,
  pub optional: bool,
  pub value: Node<FuncExpr>,
}

fn is_arrow_block(cst: &CstNode) -> bool {
  matches!(
    cst.kind,
    CstKind::ConciseBody | CstKind::AsyncConciseBody | CstKind::FunctionBody
  )
}

pub(crate) fn accessibility(kind: CstKind) -> Option<Accessibility> {
  match kind {
    CstKind::KeywordPublic => Some(Accessibility::Public),
    CstKind::KeywordPrivate => Some(Accessibility::Private),
    CstKind::KeywordProtected => Some(Accessibility::Protected),
    _ => None,
  }
}

impl Lowerer {
  /// Builds the shared function shape. `id` is lowered only if present.
  pub(crate) fn lower_func_shape(&mut self, cst: &CstNode, shape: &FuncShape) -> LowerResult<Func> {
    let id = match shape.id {
      Some(id) => Some(self.lower_binding_identifier(id)?),
      None => None,
    };
    let type_parameters = match shape.type_params {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    let params = self.lower_formal_params(cst, &shape.params)?;
    let return_type = match shape.return_type {
      Some(rt) => Some(self.lower_type_ann(rt)?),
      None => None,
    };
    let body = if shape.has_body() {
      Some(FuncBody::Block(self.lower_function_body(cst, shape)?))
    } else {
      None
    };
    Ok(Func {
      id,
      params,
      body,
      generator: shape.star.is_some(),
      async_: shape.async_.is_some(),
      declare: false,
      type_parameters,
      return_type,
      async_token: self.opt_token(shape.async_),
      function_token: self.opt_token(shape.function),
      star_token: self.opt_token(shape.star),
      l_paren_token: self.opt_token(shape.l_paren),
      r_paren_token: self.opt_token(shape.r_paren),
    })
  }

  /// `{ FunctionBody }` as a block, with its directive prologue marked.
  fn lower_function_body(&mut self, cst: &CstNode, shape: &FuncShape) -> LowerResult<Node<BlockStmt>> {
    let loc = match (shape.l_brace, shape.r_brace, shape.body) {
      (Some(l), Some(r), _) => l.loc + r.loc,
      (_, _, Some(b)) => b.loc,
      _ => return Err(malformed(cst, "function body")),
    };
    let mut body = match shape.body {
      Some(b) => self.lower_statement_list(b.flat_children())?,
      None => Vec::new(),
    };
    super::program::mark_directives(&mut body);
    Ok(Node::new(loc, BlockStmt {
      body,
      l_brace_token: self.opt_token(shape.l_brace),
      r_brace_token: self.opt_token(shape.r_brace),
    }))
  }

  /// Lowers the nodes between a parameter list's parentheses.
  pub fn lower_formal_params(&mut self, cst: &CstNode, nodes: &[&CstNode]) -> LowerResult<Vec<Param>> {
    let mut flat = Vec::new();
    for &n in nodes {
      match n.kind {
        CstKind::FormalParameters
        | CstKind::UniqueFormalParameters
        | CstKind::PropertySetParameterList
        | CstKind::ArrowFormalParameters
        | CstKind::FormalParameterList => flat.extend(
          n.flat_children()
            .into_iter()
            .filter(|c| !matches!(c.kind, CstKind::ParenthesisOpen | CstKind::ParenthesisClose)),
        ),
        _ => flat.push(n),
      };
    }
    let items = split_list(flat);
    let count = items.len();
    let mut params = Vec::with_capacity(count);
    for (i, item) in items.into_iter().enumerate() {
      let last = i + 1 == count && item.comma.is_none();
      let param = match item.parts.as_slice() {
        [p] => self.lower_formal_param(p)?,
        // Parts of a parameter whose wrapper rule was omitted.
        parts => self.lower_param_parts(cst, parts, last, Lowerer::lower_binding_element, |c| {
          malformed(c, "parameter")
        })?,
      };
      if param.is_rest() && !last {
        return Err(malformed(cst, "rest parameter last"));
      };
      params.push(Param {
        param,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(params)
  }

  /// `FormalParameter`, `FunctionRestParameter`, or a bare binding element.
  ///
  /// Accessibility, `readonly` and `override` modifiers make a `TSParameterProperty`.
  pub fn lower_formal_param(&mut self, cst: &CstNode) -> LowerResult<Pat> {
    if cst.is(CstKind::FunctionRestParameter) || cst.is(CstKind::BindingRestElement) {
      return self.lower_binding_element(cst);
    };
    if let Some(decorator) = cst.find(CstKind::Decorator) {
      return Err(unsupported(decorator));
    };
    if cst.is(CstKind::TSParameterProperty) {
      self.check_dialect(cst)?;
    };
    let mut modifiers = ClassElemModifiers::default();
    let mut has_modifiers = false;
    for c in cst.children.iter().take_while(|c| c.is_terminal()) {
      match c.kind {
        CstKind::KeywordReadonly => modifiers.readonly = true,
        CstKind::KeywordOverride => modifiers.override_ = true,
        k => match accessibility(k) {
          Some(a) => modifiers.accessibility = Some(a),
          None => continue,
        },
      };
      has_modifiers = true;
    }
    let pat = self.lower_binding_element(cst)?;
    if !has_modifiers {
      return Ok(pat);
    };
    self.check_ts_syntax(cst)?;
    Ok(Pat::ParamProp(node(cst, TsParamProp {
      parameter: pat,
      modifiers,
    })))
  }

  pub fn lower_func_expr(&mut self, cst: &CstNode) -> LowerResult<Node<FuncExpr>> {
    let shape = FuncShape::scan(&cst.children);
    if !shape.has_body() {
      return Err(malformed(cst, "function body"));
    };
    let func = self.lower_func_shape(cst, &shape)?;
    Ok(node(cst, FuncExpr { func }))
  }

  /// A function declaration, or a `TSDeclareFunction` when it has no body.
  pub fn lower_func_decl(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let shape = FuncShape::scan(&cst.children);
    let func = self.lower_func_shape(cst, &shape)?;
    if func.body.is_none() {
      self.check_ts_syntax(cst)?;
      return Ok(Stmt::TsDeclareFunction(node(cst, TsDeclareFunction { func })));
    };
    Ok(Stmt::FuncDecl(node(cst, FuncDecl { func })))
  }

  /// `ArrowFunction` and `AsyncArrowFunction`.
  pub fn lower_arrow(&mut self, cst: &CstNode) -> LowerResult<Node<ArrowFuncExpr>> {
    let mut async_ = None;
    let mut type_params = None;
    let mut params = None;
    let mut return_type = None;
    let mut arrow = None;
    let mut body = None;
    let mut l_paren = None;
    let mut r_paren = None;
    for c in &cst.children {
      if arrow.is_some() {
        body = Some(c);
        break;
      };
      let p = c.unwrap_passthrough();
      match p.kind {
        CstKind::KeywordAsync => async_ = Some(p),
        CstKind::EqualsChevronRight => arrow = Some(p),
        CstKind::TSTypeParameters => type_params = Some(p),
        CstKind::TSTypeAnnotation => return_type = Some(p),
        CstKind::CoverParenthesizedExpressionAndArrowParameterList => {
          l_paren = p.find(CstKind::ParenthesisOpen);
          r_paren = p.find(CstKind::ParenthesisClose);
          params = Some(self.lower_cover_params(p)?);
        }
        CstKind::CoverCallExpressionAndAsyncArrowHead => {
          async_ = p.children.first().and_then(super::ident::first_terminal);
          if let Some(args) = p.find(CstKind::Arguments) {
            l_paren = args.find(CstKind::ParenthesisOpen);
            r_paren = args.find(CstKind::ParenthesisClose);
          };
          params = Some(self.lower_async_arrow_head_params(p)?);
        }
        CstKind::ArrowFormalParameters | CstKind::FormalParameters | CstKind::UniqueFormalParameters => {
          l_paren = p.find(CstKind::ParenthesisOpen);
          r_paren = p.find(CstKind::ParenthesisClose);
          params = Some(self.lower_formal_params(p, &[p])?);
        }
        CstKind::ParenthesisOpen => l_paren = Some(p),
        CstKind::ParenthesisClose => r_paren = Some(p),
        _ => {
          // A single unparenthesized parameter.
          let id = self.lower_binding_identifier(p)?;
          params = Some(vec![Param {
            param: Pat::Id(id),
            comma_token: None,
          }]);
        }
      };
    }
    let (Some(params), Some(body_cst)) = (params, body) else {
      return Err(malformed(cst, "arrow parameters and body"));
    };
    // Only body wrappers can hold the braces of a block body; anything below them is an expression.
    let mut block = body_cst;
    while matches!(block.kind, CstKind::ConciseBody | CstKind::AsyncConciseBody) {
      match block.children.as_slice() {
        [inner] if is_arrow_block(inner) => block = inner,
        _ => break,
      };
    }
    let (body, expression) = if is_arrow_block(block) && block.has(CstKind::BraceOpen) {
      let shape = FuncShape::scan(&block.children);
      (FuncBody::Block(self.lower_function_body(block, &shape)?), false)
    } else if block.is(CstKind::FunctionBody) {
      let shape = FuncShape {
        body: Some(block),
        ..FuncShape::default()
      };
      (FuncBody::Block(self.lower_function_body(block, &shape)?), false)
    } else {
      (FuncBody::Expression(self.lower_expr(body_cst.unwrap_passthrough())?), true)
    };
    let type_parameters = match type_params {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    let return_type = match return_type {
      Some(rt) => Some(self.lower_type_ann(rt)?),
      None => None,
    };
    Ok(node(cst, ArrowFuncExpr {
      func: Func {
        id: None,
        params,
        body: Some(body),
        generator: false,
        async_: async_.is_some(),
        declare: false,
        type_parameters,
        return_type,
        async_token: self.opt_token(async_),
        function_token: None,
        star_token: None,
        l_paren_token: self.opt_token(l_paren),
        r_paren_token: self.opt_token(r_paren),
      },
      expression,
      arrow_token: self.opt_token(arrow),
    }))
  }

  /// Reads `MethodDefinition` (or one of its generator and async forms).
  ///
  /// Everything before the key is a modifier: `async`, `*`, `get` or `set`. The
  /// function value spans from the type parameters or `(` to the end of the body.
  pub(crate) fn lower_method_definition(&mut self, cst: &CstNode) -> LowerResult<MethodParts> {
    if let [inner] = cst.children.as_slice() {
      if matches!(
        inner.kind,
        CstKind::MethodDefinition | CstKind::GeneratorMethod | CstKind::AsyncMethod | CstKind::AsyncGeneratorMethod
      ) {
        return self.lower_method_definition(inner);
      };
    };
    let key_end = cst
      .children
      .iter()
      .position(|c| {
        matches!(
          c.kind,
          CstKind::Question
            | CstKind::TSTypeParameters
            | CstKind::ParenthesisOpen
            | CstKind::UniqueFormalParameters
            | CstKind::PropertySetParameterList
            | CstKind::FormalParameters
        )
      })
      .ok_or_else(|| malformed(cst, "method parameters"))?;
    let key_at = key_end
      .checked_sub(1)
      .ok_or_else(|| malformed(cst, "method name"))?;
    let key_cst = &cst.children[key_at];
    let modifiers = &cst.children[..key_at];
    let mut kind = MethodKind::Method;
    for m in modifiers {
      match m.kind {
        CstKind::KeywordGet => kind = MethodKind::Get,
        CstKind::KeywordSet => kind = MethodKind::Set,
        CstKind::KeywordAsync | CstKind::Asterisk => {}
        _ => return Err(malformed(m, "method modifier")),
      };
    }
    let (key, computed) = self.lower_prop_name(key_cst)?;
    let optional = cst.children.get(key_end).is_some_and(|c| c.is(CstKind::Question));
    if optional {
      self.check_ts_syntax(cst)?;
    };
    let mut shape = FuncShape::scan(modifiers.iter().chain(&cst.children[key_end..]));
    // The key itself is never the function's name.
    shape.id = None;
    let func = self.lower_func_shape(cst, &shape)?;
    let start = shape.type_params.or(shape.l_paren).map(|c| c.loc);
    let end = shape.r_brace.or(shape.body).or(shape.return_type).or(shape.r_paren).map(|c| c.loc);
    let value = Node::new(Loc::best_effort(start, end), FuncExpr { func });
    Ok(MethodParts {
      key,
      computed,
      kind,
      optional,
      value,
    })
  }
}

/// Whether `key` names the class constructor: `constructor` as an identifier or string.
pub(crate) fn is_constructor_key(key: &Expr) -> bool {
  match key {
    Expr::Id(id) => id.stx.name == "constructor",
    Expr::LitStr(s) => s.stx.value == "constructor",
    _ => false,
  }
}
