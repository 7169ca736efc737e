use crate::ast::expr::Expr;
use crate::ast::import_export::ModuleItemKind;
use crate::ast::node::Node;
use crate::ast::stmt::decl::TsDeclareFunction;
use crate::ast::stmt::Stmt;
use crate::ast::ts::decl::TsEnumDecl;
use crate::ast::ts::decl::TsEnumMember;
use crate::ast::ts::decl::TsEnumMemberItem;
use crate::ast::ts::decl::TsExportAssignment;
use crate::ast::ts::decl::TsExternalModuleRef;
use crate::ast::ts::decl::TsImportEqualsDecl;
use crate::ast::ts::decl::TsInterfaceBody;
use crate::ast::ts::decl::TsInterfaceDecl;
use crate::ast::ts::decl::TsModuleBlock;
use crate::ast::ts::decl::TsModuleDecl;
use crate::ast::ts::decl::TsModuleKind;
use crate::ast::ts::decl::TsModuleName;
use crate::ast::ts::decl::TsModuleRef;
use crate::ast::ts::decl::TsNamespaceExportDecl;
use crate::ast::ts::decl::TsTypeAliasDecl;
use crate::ast::ts::TsEntityName;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::lower::between;
use crate::lower::malformed;
use crate::lower::node;
use crate::lower::require;
use crate::lower::span;
use crate::lower::split_list;
use crate::lower::stmt::child_after;
use crate::lower::Lowerer;
use tracing::trace;

/// Marks a lowered declaration as ambient.
fn set_declare(stmt: Stmt) -> Stmt {
  match stmt {
    Stmt::VarDecl(mut n) => {
      n.stx.declare = true;
      Stmt::VarDecl(n)
    }
    Stmt::ClassDecl(mut n) => {
      n.stx.class.declare = true;
      Stmt::ClassDecl(n)
    }
    Stmt::FuncDecl(n) => {
      let mut func = n.stx.func;
      func.declare = true;
      Stmt::TsDeclareFunction(Node::new(n.loc, TsDeclareFunction { func }))
    }
    Stmt::TsDeclareFunction(mut n) => {
      n.stx.func.declare = true;
      Stmt::TsDeclareFunction(n)
    }
    Stmt::TsEnum(mut n) => {
      n.stx.declare = true;
      Stmt::TsEnum(n)
    }
    Stmt::TsInterface(mut n) => {
      n.stx.declare = true;
      Stmt::TsInterface(n)
    }
    Stmt::TsModule(mut n) => {
      n.stx.declare = true;
      Stmt::TsModule(n)
    }
    Stmt::TsTypeAlias(mut n) => {
      n.stx.declare = true;
      Stmt::TsTypeAlias(n)
    }
    other => other,
  }
}

impl Lowerer {
  /// TypeScript declarations. Returns `None` for TypeScript productions that are not declarations.
  pub(crate) fn lower_ts_decl(&mut self, cst: &CstNode) -> LowerResult<Option<Stmt>> {
    self.check_dialect(cst)?;
    let stmt = match cst.kind {
      CstKind::TSAmbientDeclaration => {
        let inner = child_after(cst, CstKind::KeywordDeclare).ok_or_else(|| malformed(cst, "declaration"))?;
        let mut stmt = self.lower_stmt(inner)?;
        stmt.set_loc(cst.loc);
        trace!(kind = ?inner.kind, "ambient declaration");
        set_declare(stmt)
      }
      CstKind::TSInterfaceDeclaration => Stmt::TsInterface(self.lower_interface(cst)?),
      CstKind::TSTypeAliasDeclaration => Stmt::TsTypeAlias(self.lower_type_alias(cst)?),
      CstKind::TSEnumDeclaration => Stmt::TsEnum(self.lower_enum(cst)?),
      CstKind::TSModuleDeclaration => Stmt::TsModule(self.lower_module_decl(cst)?),
      CstKind::TSImportEqualsDeclaration => Stmt::TsImportEquals(self.lower_import_equals(cst)?),
      CstKind::TSExportAssignment => {
        let expression = child_after(cst, CstKind::Equals).ok_or_else(|| malformed(cst, "exported expression"))?;
        Stmt::TsExportAssignment(node(cst, TsExportAssignment {
          expression: self.lower_expr(expression)?,
          export_token: self.child_token(cst, CstKind::KeywordExport),
          equals_token: self.child_token(cst, CstKind::Equals),
        }))
      }
      CstKind::TSNamespaceExportDeclaration => {
        let id = child_after(cst, CstKind::KeywordNamespace).ok_or_else(|| malformed(cst, "namespace name"))?;
        Stmt::TsNamespaceExport(node(cst, TsNamespaceExportDecl {
          id: self.lower_identifier_like(id)?,
        }))
      }
      _ => return Ok(None),
    };
    // `declare` written inside the declaration itself.
    if cst.kind != CstKind::TSAmbientDeclaration && cst.has(CstKind::KeywordDeclare) {
      return Ok(Some(set_declare(stmt)));
    };
    Ok(Some(stmt))
  }

  /// `interface Name<T> extends A, B.C<D> { ... }`.
  fn lower_interface(&mut self, cst: &CstNode) -> LowerResult<Node<TsInterfaceDecl>> {
    let id = require(cst, CstKind::BindingIdentifier, "interface name")
      .or_else(|_| child_after(cst, CstKind::KeywordInterface).ok_or_else(|| malformed(cst, "interface name")))?;
    let body_cst = require(cst, CstKind::TSInterfaceBody, "interface body")?;
    let type_parameters = match cst.find(CstKind::TSTypeParameters) {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    let mut extends = Vec::new();
    if let Some(at) = cst.position(CstKind::KeywordExtends) {
      let heritage: Vec<&CstNode> = cst.children[at + 1..]
        .iter()
        .take_while(|c| !c.is(CstKind::TSInterfaceBody))
        .flat_map(|c| match c.kind {
          CstKind::TSInterfaceHeritage if c.has(CstKind::Comma) => c.flat_children(),
          _ => vec![c],
        })
        .collect();
      for item in split_list(heritage) {
        let [h] = item.parts.as_slice() else {
          return Err(malformed(cst, "extended type"));
        };
        extends.push(self.lower_expr_with_type_args(h)?);
      }
    };
    Ok(node(cst, TsInterfaceDecl {
      id: self.lower_binding_identifier(id)?,
      body: node(body_cst, TsInterfaceBody {
        body: self.lower_type_members(body_cst)?,
      }),
      extends,
      type_parameters,
      declare: false,
      interface_token: self.child_token(cst, CstKind::KeywordInterface),
    }))
  }

  /// `type Name<T> = Type;`.
  fn lower_type_alias(&mut self, cst: &CstNode) -> LowerResult<Node<TsTypeAliasDecl>> {
    let id = child_after(cst, CstKind::KeywordType).ok_or_else(|| malformed(cst, "alias name"))?;
    let ty = child_after(cst, CstKind::Equals).ok_or_else(|| malformed(cst, "aliased type"))?;
    let type_parameters = match cst.find(CstKind::TSTypeParameters) {
      Some(tp) => Some(self.lower_type_params(tp)?),
      None => None,
    };
    Ok(node(cst, TsTypeAliasDecl {
      id: self.lower_binding_identifier(id)?,
      type_annotation: self.lower_ts_type(ty)?,
      type_parameters,
      declare: false,
      type_token: self.child_token(cst, CstKind::KeywordType),
      equals_token: self.child_token(cst, CstKind::Equals),
      semicolon_token: self.child_token(cst, CstKind::Semicolon),
    }))
  }

  /// `const? enum Name { A, B = 1, "c" }`.
  fn lower_enum(&mut self, cst: &CstNode) -> LowerResult<Node<TsEnumDecl>> {
    let id = child_after(cst, CstKind::KeywordEnum).ok_or_else(|| malformed(cst, "enum name"))?;
    let open = cst
      .position(CstKind::BraceOpen)
      .ok_or_else(|| malformed(cst, "enum body"))?;
    let close = cst
      .position(CstKind::BraceClose)
      .ok_or_else(|| malformed(cst, "enum body"))?;
    let mut members = Vec::new();
    let body = cst
      .children
      .get(open + 1..close)
      .ok_or_else(|| malformed(cst, "enum body"))?;
    for item in split_list(body) {
      let member = match item.parts.as_slice() {
        [m] if m.is(CstKind::TSEnumMember) => self.lower_enum_member(m, &m.children.iter().collect::<Vec<_>>())?,
        [] => return Err(malformed(cst, "enum member")),
        parts => self.lower_enum_member(parts[0], parts)?,
      };
      members.push(TsEnumMemberItem {
        member,
        comma_token: self.opt_token(item.comma),
      });
    }
    Ok(node(cst, TsEnumDecl {
      id: self.lower_binding_identifier(id)?,
      members,
      const_: cst.has(CstKind::KeywordConst),
      declare: false,
      enum_token: self.child_token(cst, CstKind::KeywordEnum),
    }))
  }

  fn lower_enum_member(&mut self, at: &CstNode, parts: &[&CstNode]) -> LowerResult<Node<TsEnumMember>> {
    let (name, init) = match parts {
      [name] => (*name, None),
      [name, init] if init.is(CstKind::Initializer) => (*name, Some(*init)),
      _ => return Err(malformed(at, "enum member")),
    };
    let id = match name.unwrap_passthrough() {
      n if n.is(CstKind::StringLiteral) => Expr::LitStr(self.lower_string_literal(n)?),
      n => Expr::Id(self.lower_identifier_like(n)?),
    };
    let initializer = match init {
      Some(i) => Some(self.lower_initializer(i)?.0),
      None => None,
    };
    let loc = match at.kind {
      CstKind::TSEnumMember => at.loc,
      _ => span(parts),
    };
    Ok(Node::new(loc, TsEnumMember { id, initializer }))
  }

  /// `namespace A.B { }`, `module "m" { }`, `declare module "m";` and `declare global { }`.
  fn lower_module_decl(&mut self, cst: &CstNode) -> LowerResult<Node<TsModuleDecl>> {
    let keyword = cst
      .children
      .iter()
      .find(|c| {
        matches!(
          c.kind,
          CstKind::KeywordModule | CstKind::KeywordNamespace | CstKind::KeywordGlobal
        )
      })
      .ok_or_else(|| malformed(cst, "`module`, `namespace` or `global`"))?;
    let kind = match keyword.kind {
      CstKind::KeywordModule => TsModuleKind::Module,
      CstKind::KeywordNamespace => TsModuleKind::Namespace,
      _ => TsModuleKind::Global,
    };
    let id = match kind {
      TsModuleKind::Global => TsModuleName::Entity(TsEntityName::Id(self.lower_identifier_like(keyword)?)),
      _ => {
        let name = child_after(cst, keyword.kind).ok_or_else(|| malformed(cst, "module name"))?;
        match name.unwrap_passthrough() {
          n if n.is(CstKind::StringLiteral) => TsModuleName::Str(self.lower_string_literal(n)?),
          n => TsModuleName::Entity(self.lower_entity_name(n)?),
        }
      }
    };
    let body = match cst.find(CstKind::TSModuleBlock) {
      Some(block) => {
        let items = between(block, CstKind::BraceOpen, CstKind::BraceClose);
        Some(node(block, TsModuleBlock {
          body: self.lower_statement_list(items)?,
        }))
      }
      None if matches!(id, TsModuleName::Str(_)) => None,
      None => return Err(malformed(cst, "module body")),
    };
    Ok(node(cst, TsModuleDecl {
      id,
      body,
      kind,
      declare: false,
      keyword_token: self.token(keyword),
    }))
  }

  /// `import type? x = require("m");` or `import x = A.B;`, optionally exported.
  fn lower_import_equals(&mut self, cst: &CstNode) -> LowerResult<Node<TsImportEqualsDecl>> {
    let eq = cst
      .position(CstKind::Equals)
      .ok_or_else(|| malformed(cst, "`=`"))?;
    let id = cst.children[..eq]
      .last()
      .ok_or_else(|| malformed(cst, "import name"))?;
    let reference = cst
      .children
      .get(eq + 1)
      .ok_or_else(|| malformed(cst, "module reference"))?;
    let module_reference = match reference.kind {
      CstKind::TSExternalModuleReference => {
        let source = require(reference, CstKind::StringLiteral, "module specifier")?;
        TsModuleRef::External(node(reference, TsExternalModuleRef {
          expression: self.lower_string_literal(source)?,
        }))
      }
      _ => TsModuleRef::Entity(self.lower_entity_name(reference)?),
    };
    let type_only = cst.children[..eq]
      .iter()
      .filter(|c| c.is(CstKind::KeywordType))
      .count()
      > usize::from(id.is(CstKind::KeywordType));
    Ok(node(cst, TsImportEqualsDecl {
      id: self.lower_binding_identifier(id)?,
      module_reference,
      import_kind: ModuleItemKind::from_type_flag(type_only),
      is_export: cst.has(CstKind::KeywordExport),
      import_token: self.child_token(cst, CstKind::KeywordImport),
      equals_token: self.token(&cst.children[eq]),
    }))
  }
}
