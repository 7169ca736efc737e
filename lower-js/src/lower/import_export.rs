use super::between;
use super::malformed;
use super::node;
use super::split_list;
use super::unsupported;
use super::Lowerer;
use crate::ast::expr::lit::LitStrExpr;
use crate::ast::expr::IdExpr;
use crate::ast::import_export::ExportAllDecl;
use crate::ast::import_export::ExportDefaultDecl;
use crate::ast::import_export::ExportDefaultKind;
use crate::ast::import_export::ExportNamedDecl;
use crate::ast::import_export::ExportSpecItem;
use crate::ast::import_export::ExportSpecifier;
use crate::ast::import_export::ImportAttribute;
use crate::ast::import_export::ImportDecl;
use crate::ast::import_export::ImportDefaultSpecifier;
use crate::ast::import_export::ImportNamespaceSpecifier;
use crate::ast::import_export::ImportSpec;
use crate::ast::import_export::ImportSpecItem;
use crate::ast::import_export::ImportSpecifier;
use crate::ast::import_export::ModuleExportName;
use crate::ast::import_export::ModuleItemKind;
use crate::ast::node::Node;
use crate::ast::stmt::Stmt;
use crate::ast::ts::decl::TsExportAssignment;
use crate::ast::ts::decl::TsNamespaceExportDecl;
use crate::cst::CstKind;
use crate::cst::CstNode;
use crate::error::LowerResult;
use crate::token::Token;

/// Whether `cst` is an `import`/`export` specifier's leading `type` modifier.
///
/// `{ type }` and `{ type as x }` name an import called `type`; `{ type x }` and
/// `{ type x as y }` are type-only specifiers.
fn has_type_modifier(parts: &[&CstNode]) -> bool {
  parts.first().is_some_and(|p| p.is(CstKind::KeywordType)) && matches!(parts.len(), 2 | 4)
}

impl Lowerer {
  /// A module specifier string, given directly, through `ModuleSpecifier` or as a `FromClause`.
  fn lower_module_source(&mut self, cst: &CstNode) -> LowerResult<Node<LitStrExpr>> {
    if cst.is(CstKind::FromClause) {
      let source = cst
        .children
        .iter()
        .find(|c| !c.is(CstKind::KeywordFrom))
        .ok_or_else(|| malformed(cst, "module specifier"))?;
      return self.lower_string_literal(source);
    };
    self.lower_string_literal(cst)
  }

  pub fn lower_module_export_name(&mut self, cst: &CstNode) -> LowerResult<ModuleExportName> {
    let cst = match cst.kind {
      CstKind::ModuleExportName => cst.children.first().ok_or_else(|| malformed(cst, "export name"))?,
      _ => cst,
    };
    Ok(match cst.unwrap_passthrough().kind {
      CstKind::StringLiteral => ModuleExportName::Str(self.lower_string_literal(cst)?),
      _ => ModuleExportName::Id(self.lower_identifier_like(cst)?),
    })
  }

  /// `with { key: "value", ... }`, also spelled `assert { ... }`.
  fn lower_import_attributes(&mut self, cst: Option<&CstNode>) -> LowerResult<Vec<Node<ImportAttribute>>> {
    let Some(cst) = cst else {
      return Ok(Vec::new());
    };
    let mut attributes = Vec::new();
    for item in split_list(between(cst, CstKind::BraceOpen, CstKind::BraceClose)
      .into_iter()
      .skip_while(|c| c.is(CstKind::KeywordWith) || c.is(CstKind::KeywordAssert) || c.is(CstKind::BraceOpen)))
    {
      let [key, colon, value] = item.parts.as_slice() else {
        return Err(malformed(cst, "attribute `key: \"value\"`"));
      };
      if !colon.is(CstKind::Colon) {
        return Err(malformed(colon, "`:`"));
      };
      let key_cst = match key.kind {
        CstKind::AttributeKey => key.children.first().ok_or_else(|| malformed(key, "attribute key"))?,
        _ => key,
      };
      let value = self.lower_string_literal(value)?;
      attributes.push(Node::new(key.loc + value.loc, ImportAttribute {
        key: self.lower_module_export_name(key_cst)?,
        value,
      }));
    }
    Ok(attributes)
  }

  /// `import ...;`, including `import type` and `import x = ...`.
  pub fn lower_import(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    if let Some(eq) = cst.find(CstKind::TSImportEqualsDeclaration) {
      return self.lower_ts_decl(eq).and_then(|s| s.ok_or_else(|| unsupported(eq)));
    };
    let type_only = cst.has(CstKind::KeywordType);
    if type_only {
      self.check_ts_syntax(cst)?;
    };
    let import_kind = ModuleItemKind::from_type_flag(type_only);
    let clause = cst.find(CstKind::ImportClause);
    let source_cst = cst
      .find_any(&[CstKind::FromClause, CstKind::ModuleSpecifier, CstKind::StringLiteral])
      .ok_or_else(|| malformed(cst, "module specifier"))?;
    let mut specifiers = Vec::new();
    let mut l_brace_token = None;
    let mut r_brace_token = None;
    if let Some(clause) = clause {
      for part in split_list(&clause.children) {
        let [spec] = part.parts.as_slice() else {
          return Err(malformed(clause, "import clause"));
        };
        let comma_token = self.opt_token(part.comma);
        match spec.kind {
          CstKind::NameSpaceImport => {
            let local = spec
              .children
              .last()
              .ok_or_else(|| malformed(spec, "namespace binding"))?;
            specifiers.push(ImportSpecItem {
              specifier: ImportSpec::Namespace(node(spec, ImportNamespaceSpecifier {
                local: self.lower_binding_identifier(local)?,
                star_token: self.child_token(spec, CstKind::Asterisk),
                as_token: self.child_token(spec, CstKind::KeywordAs),
              })),
              comma_token,
            });
          }
          CstKind::NamedImports => {
            l_brace_token = self.child_token(spec, CstKind::BraceOpen);
            r_brace_token = self.child_token(spec, CstKind::BraceClose);
            for item in split_list(between(spec, CstKind::BraceOpen, CstKind::BraceClose)) {
              let [named] = item.parts.as_slice() else {
                return Err(malformed(spec, "import specifier"));
              };
              specifiers.push(ImportSpecItem {
                specifier: ImportSpec::Named(self.lower_import_specifier(named, import_kind)?),
                comma_token: self.opt_token(item.comma),
              });
            }
          }
          _ => specifiers.push(ImportSpecItem {
            specifier: ImportSpec::Default(node(spec, ImportDefaultSpecifier {
              local: self.lower_binding_identifier(spec)?,
            })),
            comma_token,
          }),
        };
      }
    };
    let from = cst.find(CstKind::FromClause);
    Ok(Stmt::Import(node(cst, ImportDecl {
      specifiers,
      source: self.lower_module_source(source_cst)?,
      import_kind,
      attributes: self.lower_import_attributes(cst.find(CstKind::WithClause))?,
      import_token: self.child_token(cst, CstKind::KeywordImport),
      l_brace_token,
      r_brace_token,
      from_token: from.and_then(|f| self.child_token(f, CstKind::KeywordFrom)),
      semicolon_token: self.child_token(cst, CstKind::Semicolon),
    })))
  }

  /// `imported`, `imported as local`, and either with a leading `type`. `kind` is the declaration's kind.
  fn lower_import_specifier(&mut self, cst: &CstNode, kind: ModuleItemKind) -> LowerResult<Node<ImportSpecifier>> {
    let parts: Vec<&CstNode> = match cst.kind {
      CstKind::ImportSpecifier => cst.children.iter().collect(),
      _ => vec![cst],
    };
    let type_only = has_type_modifier(&parts);
    if type_only {
      self.check_ts_syntax(parts[0])?;
    };
    let names = &parts[usize::from(type_only)..];
    let (imported, local, as_token) = match names {
      [name] => {
        let local = self.lower_binding_identifier(name)?;
        let imported = ModuleExportName::Id(Node::new(local.loc, IdExpr {
          name: local.stx.name.clone(),
        }));
        (imported, local, None)
      }
      [imported, as_, local] if as_.is(CstKind::KeywordAs) => (
        self.lower_module_export_name(imported)?,
        self.lower_binding_identifier(local)?,
        self.token(as_),
      ),
      _ => return Err(malformed(cst, "import specifier")),
    };
    Ok(node(cst, ImportSpecifier {
      imported,
      local,
      import_kind: kind.or(ModuleItemKind::from_type_flag(type_only)),
      as_token,
    }))
  }

  /// `local`, `local as exported`, and either with a leading `type`. `kind` is the clause's kind.
  fn lower_export_specifier(&mut self, cst: &CstNode, kind: ModuleItemKind) -> LowerResult<Node<ExportSpecifier>> {
    let parts: Vec<&CstNode> = match cst.kind {
      CstKind::ExportSpecifier => cst.children.iter().collect(),
      _ => vec![cst],
    };
    let type_only = has_type_modifier(&parts);
    if type_only {
      self.check_ts_syntax(parts[0])?;
    };
    let names = &parts[usize::from(type_only)..];
    let (local, exported, as_token) = match names {
      [name] => {
        let local = self.lower_module_export_name(name)?;
        (local.clone(), local, None)
      }
      [local, as_, exported] if as_.is(CstKind::KeywordAs) => (
        self.lower_module_export_name(local)?,
        self.lower_module_export_name(exported)?,
        self.token(as_),
      ),
      _ => return Err(malformed(cst, "export specifier")),
    };
    Ok(node(cst, ExportSpecifier {
      local,
      exported,
      export_kind: kind.or(ModuleItemKind::from_type_flag(type_only)),
      as_token,
    }))
  }

  /// Every `export` form.
  pub fn lower_export(&mut self, cst: &CstNode) -> LowerResult<Stmt> {
    let export_token = self.child_token(cst, CstKind::KeywordExport);
    let semicolon_token = self.child_token(cst, CstKind::Semicolon);
    let rest: Vec<&CstNode> = cst
      .children
      .iter()
      .filter(|c| !c.is(CstKind::KeywordExport) && !c.is(CstKind::Semicolon))
      .collect();
    let type_only = rest.first().is_some_and(|c| c.is(CstKind::KeywordType));
    if type_only {
      self.check_ts_syntax(rest[0])?;
    };
    let kind = ModuleItemKind::from_type_flag(type_only);
    let rest = &rest[usize::from(type_only)..];
    match rest {
      // `export default ...`
      [default, decl] if default.is(CstKind::KeywordDefault) => {
        let decl = decl.unwrap_passthrough();
        let declaration = match decl.kind {
          CstKind::FunctionDeclaration
          | CstKind::GeneratorDeclaration
          | CstKind::AsyncFunctionDeclaration
          | CstKind::AsyncGeneratorDeclaration => match self.lower_func_decl(decl)? {
            Stmt::FuncDecl(f) => ExportDefaultKind::Func(f),
            Stmt::TsDeclareFunction(f) => ExportDefaultKind::TsDeclareFunction(f),
            _ => return Err(malformed(decl, "function declaration")),
          },
          CstKind::ClassDeclaration => ExportDefaultKind::Class(self.lower_class_decl(decl)?),
          CstKind::TSInterfaceDeclaration => match self.lower_decl(decl)? {
            Some(Stmt::TsInterface(i)) => ExportDefaultKind::TsInterface(i),
            _ => return Err(malformed(decl, "interface declaration")),
          },
          _ => ExportDefaultKind::Expr(self.lower_expr(decl)?),
        };
        Ok(Stmt::ExportDefault(node(cst, ExportDefaultDecl {
          declaration,
          export_token,
          default_token: self.token(default),
          semicolon_token,
        })))
      }
      // `export = x;`
      [eq, expr] if eq.is(CstKind::Equals) => {
        self.check_ts_syntax(eq)?;
        Ok(Stmt::TsExportAssignment(node(cst, TsExportAssignment {
          expression: self.lower_expr(expr)?,
          export_token,
          equals_token: self.token(eq),
        })))
      }
      // `export as namespace X;`
      [as_, namespace, id] if as_.is(CstKind::KeywordAs) && namespace.is(CstKind::KeywordNamespace) => {
        self.check_ts_syntax(as_)?;
        Ok(Stmt::TsNamespaceExport(node(cst, TsNamespaceExportDecl {
          id: self.lower_identifier_like(id)?,
        })))
      }
      [single] if single.is(CstKind::TSExportAssignment) || single.is(CstKind::TSNamespaceExportDeclaration) => {
        self.lower_ts_decl(single)?.ok_or_else(|| unsupported(single))
      }
      _ if rest.iter().any(|c| c.is(CstKind::Asterisk) || c.is(CstKind::ExportFromClause)) => {
        self.lower_export_all(cst, rest, kind, export_token, semicolon_token)
      }
      [named, tail @ ..] if named.is(CstKind::NamedExports) => {
        let mut specifiers = Vec::new();
        for item in split_list(between(named, CstKind::BraceOpen, CstKind::BraceClose)) {
          let [spec] = item.parts.as_slice() else {
            return Err(malformed(named, "export specifier"));
          };
          specifiers.push(ExportSpecItem {
            specifier: self.lower_export_specifier(spec, kind)?,
            comma_token: self.opt_token(item.comma),
          });
        }
        let from = tail.iter().find(|c| c.is(CstKind::FromClause));
        let source = match from {
          Some(f) => Some(self.lower_module_source(f)?),
          None => None,
        };
        let with = tail.iter().find(|c| c.is(CstKind::WithClause)).copied();
        Ok(Stmt::ExportNamed(node(cst, ExportNamedDecl {
          declaration: None,
          specifiers,
          source,
          export_kind: kind,
          attributes: self.lower_import_attributes(with)?,
          export_token,
          l_brace_token: self.child_token(named, CstKind::BraceOpen),
          r_brace_token: self.child_token(named, CstKind::BraceClose),
          from_token: from.and_then(|f| self.child_token(f, CstKind::KeywordFrom)),
          semicolon_token,
        })))
      }
      [decl] => {
        let mut declaration = self.lower_stmt(decl)?;
        if let Stmt::TsImportEquals(eq) = &mut declaration {
          eq.stx.is_export = true;
          eq.loc = cst.loc;
          return Ok(declaration);
        };
        Ok(Stmt::ExportNamed(node(cst, ExportNamedDecl {
          declaration: Some(declaration),
          specifiers: Vec::new(),
          source: None,
          export_kind: kind,
          attributes: Vec::new(),
          export_token,
          l_brace_token: None,
          r_brace_token: None,
          from_token: None,
          semicolon_token,
        })))
      }
      _ => Err(malformed(cst, "export body")),
    }
  }

  /// `export * from "m";` and `export * as ns from "m";`
  fn lower_export_all(
    &mut self,
    cst: &CstNode,
    rest: &[&CstNode],
    kind: ModuleItemKind,
    export_token: Option<Token>,
    semicolon_token: Option<Token>,
  ) -> LowerResult<Stmt> {
    let mut parts = Vec::new();
    for c in rest {
      if c.is(CstKind::ExportFromClause) {
        parts.extend(c.children.iter());
      } else {
        parts.push(*c);
      };
    }
    let star = parts
      .iter()
      .find(|c| c.is(CstKind::Asterisk))
      .copied()
      .ok_or_else(|| malformed(cst, "`*`"))?;
    let exported = match parts.iter().position(|c| c.is(CstKind::KeywordAs)) {
      Some(at) => {
        let name = parts.get(at + 1).ok_or_else(|| malformed(cst, "namespace export name"))?;
        Some(self.lower_module_export_name(name)?)
      }
      None => None,
    };
    let from = parts
      .iter()
      .find(|c| c.is(CstKind::FromClause))
      .copied()
      .ok_or_else(|| malformed(cst, "`from` clause"))?;
    let with = parts.iter().find(|c| c.is(CstKind::WithClause)).copied();
    Ok(Stmt::ExportAll(node(cst, ExportAllDecl {
      exported,
      source: self.lower_module_source(from)?,
      export_kind: kind,
      attributes: self.lower_import_attributes(with)?,
      export_token,
      star_token: self.token(star),
      from_token: self.child_token(from, CstKind::KeywordFrom),
      semicolon_token,
    })))
  }
}
