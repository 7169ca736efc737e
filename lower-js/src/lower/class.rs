use super::func::is_constructor_key;
use super::func::FuncShape;
use super::malformed;
use super::node;
use super::split_list;
use super::Lowerer;
use crate::ast::class::Accessibility;
use crate::ast::class::Class;
use crate::ast::class::ClassBody;
use crate::ast::class::ClassElemModifiers;
use crate::ast::class::ClassMember;
use crate::ast::class::Decorator;
use crate::ast::class::MethodDef;
use crate::ast::class::MethodKind;
use crate::ast::class::PropertyDef;
use crate::ast::class::StaticBlock;
use crate::ast::expr::ClassExpr;
use crate::ast::node::Node;
use crate::ast::stmt::decl::ClassDecl;
use crate::ast::ts::TsExprWithTypeArgs;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::loc::Loc;

impl Lowerer {
  pub fn lower_decorator(&mut self, cst: &CstNode) -> LowerResult<Node<Decorator>> {
    let expression = cst
      .children
      .iter()
      .find(|c| !c.is(CstKind::At))
      .ok_or_else(|| malformed(cst, "decorator expression"))?;
    Ok(node(cst, Decorator {
      expression: self.lower_expr(expression)?,
      at_token: self.child_token(cst, CstKind::At),
    }))
  }

  fn lower_decorators<'c>(&mut self, nodes: impl IntoIterator<Item = &'c CstNode>) -> LowerResult<Vec<Node<Decorator>>> {
    let mut decorators = Vec::new();
    for d in nodes.into_iter().filter(|c| c.is(CstKind::Decorator)) {
      decorators.push(self.lower_decorator(d)?);
    }
    Ok(decorators)
  }

  pub fn lower_class_expr(&mut self, cst: &CstNode) -> LowerResult<Node<ClassExpr>> {
    let class = self.lower_class(cst)?;
    Ok(node(cst, ClassExpr { class }))
  }

  pub fn lower_class_decl(&mut self, cst: &CstNode) -> LowerResult<Node<ClassDecl>> {
    let class = self.lower_class(cst)?;
    Ok(node(cst, ClassDecl { class }))
  }

  /// Shared by declarations and expressions. `ClassTail` may be present or spliced in.
  fn lower_class(&mut self, cst: &CstNode) -> LowerResult<Class> {
    let mut parts = Vec::new();
    for c in &cst.children {
      if c.is(CstKind::ClassTail) {
        parts.extend(c.children.iter());
      } else {
        parts.push(c);
      };
    }
    let decorators = self.lower_decorators(parts.iter().copied())?;
    let mut class = Class {
      id: None,
      super_class: None,
      body: Node::new(Loc::default(), ClassBody {
        body: Vec::new(),
        l_brace_token: None,
        r_brace_token: None,
      }),
      decorators,
      implements: Vec::new(),
      super_type_arguments: None,
      type_parameters: None,
      abstract_: false,
      declare: false,
      class_token: None,
      extends_token: None,
    };
    let mut l_brace = None;
    let mut r_brace = None;
    let mut elements = Vec::new();
    for c in parts {
      match c.kind {
        CstKind::KeywordClass => class.class_token = self.token(c),
        CstKind::KeywordAbstract => {
          self.check_ts_syntax(c)?;
          class.abstract_ = true;
        }
        CstKind::KeywordDeclare => {
          self.check_ts_syntax(c)?;
          class.declare = true;
        }
        CstKind::BindingIdentifier => class.id = Some(self.lower_binding_identifier(c)?),
        CstKind::TSTypeParameters => class.type_parameters = Some(self.lower_type_params(c)?),
        CstKind::ClassHeritage => self.lower_class_heritage(c, &mut class)?,
        CstKind::TSClassImplements => {
          self.check_dialect(c)?;
          for item in split_list(c.children.iter().filter(|i| !i.is(CstKind::KeywordImplements))) {
            let [clause] = item.parts.as_slice() else {
              return Err(malformed(c, "implemented type"));
            };
            class.implements.push(self.lower_expr_with_type_args(clause)?);
          }
        }
        CstKind::BraceOpen => l_brace = Some(c),
        CstKind::BraceClose => r_brace = Some(c),
        CstKind::ClassBody | CstKind::ClassElementList => {
          elements.extend(c.flat_children().into_iter().filter(|e| e.is(CstKind::ClassElement)))
        }
        CstKind::ClassElement => elements.push(c),
        _ => {}
      };
    }
    let (Some(l), Some(r)) = (l_brace, r_brace) else {
      return Err(malformed(cst, "class body braces"));
    };
    let mut members = Vec::new();
    for element in elements {
      if let Some(member) = self.lower_class_element(element)? {
        members.push(member);
      };
    }
    class.body = Node::new(l.loc + r.loc, ClassBody {
      body: members,
      l_brace_token: self.token(l),
      r_brace_token: self.token(r),
    });
    Ok(class)
  }

  /// `extends LeftHandSideExpression TSTypeArguments?`.
  fn lower_class_heritage(&mut self, cst: &CstNode, class: &mut Class) -> LowerResult<()> {
    for c in &cst.children {
      match c.kind {
        CstKind::KeywordExtends => class.extends_token = self.token(c),
        CstKind::TSTypeArguments => {
          self.check_dialect(c)?;
          class.super_type_arguments = Some(self.lower_type_args(c)?);
        }
        _ => class.super_class = Some(self.lower_expr(c)?),
      };
    }
    if class.super_class.is_none() {
      return Err(malformed(cst, "superclass"));
    };
    Ok(())
  }

  /// An entity name with optional type arguments, in `implements` and interface `extends` lists.
  pub fn lower_expr_with_type_args(&mut self, cst: &CstNode) -> LowerResult<Node<TsExprWithTypeArgs>> {
    let (name, args) = match cst.kind {
      CstKind::TSExpressionWithTypeArguments | CstKind::TSInterfaceHeritage => (
        cst
          .children
          .iter()
          .find(|c| !c.is(CstKind::TSTypeArguments))
          .ok_or_else(|| malformed(cst, "heritage name"))?,
        cst.find(CstKind::TSTypeArguments),
      ),
      _ => (cst, None),
    };
    let type_arguments = match args {
      Some(a) => Some(self.lower_type_args(a)?),
      None => None,
    };
    Ok(node(cst, TsExprWithTypeArgs {
      expression: self.lower_entity_name(name)?,
      type_arguments,
    }))
  }

  /// One `ClassElement`: decorators and modifier keywords, then a method, field,
  /// static block or index signature. A lone `;` yields `None`.
  fn lower_class_element(&mut self, cst: &CstNode) -> LowerResult<Option<ClassMember>> {
    let decorators = self.lower_decorators(&cst.children)?;
    let mut modifiers = ClassElemModifiers::default();
    let mut inner = None;
    for c in &cst.children {
      match c.kind {
        CstKind::Decorator | CstKind::Semicolon => {}
        CstKind::KeywordStatic => modifiers.static_ = true,
        CstKind::KeywordAccessor => modifiers.accessor = true,
        CstKind::KeywordPublic | CstKind::KeywordPrivate | CstKind::KeywordProtected => {
          self.check_ts_syntax(c)?;
          modifiers.accessibility = Some(match c.kind {
            CstKind::KeywordPublic => Accessibility::Public,
            CstKind::KeywordPrivate => Accessibility::Private,
            _ => Accessibility::Protected,
          });
        }
        CstKind::KeywordAbstract => {
          self.check_ts_syntax(c)?;
          modifiers.abstract_ = true;
        }
        CstKind::KeywordOverride => {
          self.check_ts_syntax(c)?;
          modifiers.override_ = true;
        }
        CstKind::KeywordReadonly => {
          self.check_ts_syntax(c)?;
          modifiers.readonly = true;
        }
        CstKind::KeywordDeclare => {
          self.check_ts_syntax(c)?;
          modifiers.declare = true;
        }
        _ => inner = Some(c),
      };
    }
    let Some(inner) = inner else {
      if cst.has(CstKind::Semicolon) {
        return Ok(None);
      };
      return Err(malformed(cst, "class element"));
    };
    Ok(Some(match inner.kind {
      CstKind::MethodDefinition
      | CstKind::GeneratorMethod
      | CstKind::AsyncMethod
      | CstKind::AsyncGeneratorMethod => {
        let m = self.lower_method_definition(inner)?;
        let kind = if m.kind == MethodKind::Method && !m.computed && !modifiers.static_ && is_constructor_key(&m.key) {
          MethodKind::Constructor
        } else {
          m.kind
        };
        ClassMember::Method(node(cst, MethodDef {
          key: m.key,
          value: m.value,
          kind,
          computed: m.computed,
          modifiers,
          optional: m.optional,
          decorators,
        }))
      }
      CstKind::FieldDefinition => ClassMember::Property(self.lower_field(cst, inner, modifiers, decorators)?),
      CstKind::ClassStaticBlock => ClassMember::StaticBlock(self.lower_static_block(inner)?),
      CstKind::TSIndexSignature => {
        self.check_dialect(inner)?;
        let mut sig = self.lower_index_signature(inner)?;
        sig.stx.static_ |= modifiers.static_;
        sig.stx.readonly |= modifiers.readonly;
        sig.loc = cst.loc;
        ClassMember::IndexSignature(sig)
      }
      _ => return Err(malformed(inner, "class element")),
    }))
  }

  /// `ClassElementName ('?' | '!')? TSTypeAnnotation? Initializer?`.
  fn lower_field(
    &mut self,
    element: &CstNode,
    cst: &CstNode,
    modifiers: ClassElemModifiers,
    decorators: Vec<Node<Decorator>>,
  ) -> LowerResult<Node<PropertyDef>> {
    let name = cst.children.first().ok_or_else(|| malformed(cst, "field name"))?;
    let (key, computed) = self.lower_prop_name(name)?;
    let mut optional = false;
    let mut definite = false;
    let mut type_annotation = None;
    let mut value = None;
    for c in &cst.children[1..] {
      match c.kind {
        CstKind::Question => {
          self.check_ts_syntax(c)?;
          optional = true;
        }
        CstKind::Exclamation => {
          self.check_ts_syntax(c)?;
          definite = true;
        }
        CstKind::TSTypeAnnotation => type_annotation = Some(self.lower_type_ann(c)?),
        CstKind::Initializer => value = Some(self.lower_initializer(c)?.0),
        _ => return Err(malformed(c, "field part")),
      };
    }
    Ok(node(element, PropertyDef {
      key,
      value,
      computed,
      modifiers,
      optional,
      definite,
      type_annotation,
      decorators,
      semicolon_token: self.child_token(element, CstKind::Semicolon),
    }))
  }

  /// `static { ClassStaticBlockBody }`.
  fn lower_static_block(&mut self, cst: &CstNode) -> LowerResult<Node<StaticBlock>> {
    let shape = FuncShape::scan(&cst.children);
    let body = match shape.body {
      Some(b) => self.lower_statement_list(b.flat_children())?,
      None => Vec::new(),
    };
    Ok(node(cst, StaticBlock {
      body,
      static_token: self.child_token(cst, CstKind::KeywordStatic),
      l_brace_token: self.opt_token(shape.l_brace),
      r_brace_token: self.opt_token(shape.r_brace),
    }))
  }
}
