use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;

/// Grammar rule or terminal class of a CST node.
///
/// Rule variants use the production names of the ECMAScript grammar, with
/// TypeScript-only productions prefixed by `TS`. Terminal variants cover
/// punctuators, keywords (including contextual ones), and valued tokens.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CstKind {
  // Punctuators.
  Ampersand,
  AmpersandAmpersand,
  AmpersandAmpersandEquals,
  AmpersandEquals,
  Asterisk,
  AsteriskAsterisk,
  AsteriskAsteriskEquals,
  AsteriskEquals,
  At,
  Bar,
  BarBar,
  BarBarEquals,
  BarEquals,
  BraceClose,
  BraceOpen,
  BracketClose,
  BracketOpen,
  Caret,
  CaretEquals,
  ChevronLeft,
  ChevronLeftChevronLeft,
  ChevronLeftChevronLeftEquals,
  ChevronLeftEquals,
  ChevronRight,
  ChevronRightChevronRight,
  ChevronRightChevronRightChevronRight,
  ChevronRightChevronRightChevronRightEquals,
  ChevronRightChevronRightEquals,
  ChevronRightEquals,
  Colon,
  Comma,
  Dot,
  DotDotDot,
  Equals,
  EqualsChevronRight,
  EqualsEquals,
  EqualsEqualsEquals,
  Exclamation,
  ExclamationEquals,
  ExclamationEqualsEquals,
  Hyphen,
  HyphenEquals,
  HyphenHyphen,
  ParenthesisClose,
  ParenthesisOpen,
  Percent,
  PercentEquals,
  Plus,
  PlusEquals,
  PlusPlus,
  Question,
  QuestionDot,
  QuestionQuestion,
  QuestionQuestionEquals,
  Semicolon,
  Slash,
  SlashEquals,
  Tilde,

  // Keywords, reserved and contextual.
  KeywordAbstract,
  KeywordAccessor,
  KeywordAs,
  KeywordAssert,
  KeywordAsserts,
  KeywordAsync,
  KeywordAwait,
  KeywordBreak,
  KeywordCase,
  KeywordCatch,
  KeywordClass,
  KeywordConst,
  KeywordContinue,
  KeywordDebugger,
  KeywordDeclare,
  KeywordDefault,
  KeywordDelete,
  KeywordDo,
  KeywordElse,
  KeywordEnum,
  KeywordExport,
  KeywordExtends,
  KeywordFalse,
  KeywordFinally,
  KeywordFor,
  KeywordFrom,
  KeywordFunction,
  KeywordGet,
  KeywordGlobal,
  KeywordIf,
  KeywordImplements,
  KeywordImport,
  KeywordIn,
  KeywordInfer,
  KeywordInstanceof,
  KeywordInterface,
  KeywordIs,
  KeywordKeyof,
  KeywordLet,
  KeywordMeta,
  KeywordModule,
  KeywordNamespace,
  KeywordNew,
  KeywordNull,
  KeywordOf,
  KeywordOut,
  KeywordOverride,
  KeywordPrivate,
  KeywordProtected,
  KeywordPublic,
  KeywordReadonly,
  KeywordRequire,
  KeywordReturn,
  KeywordSatisfies,
  KeywordSet,
  KeywordStatic,
  KeywordSuper,
  KeywordSwitch,
  KeywordTarget,
  KeywordThis,
  KeywordThrow,
  KeywordTrue,
  KeywordTry,
  KeywordType,
  KeywordTypeof,
  KeywordUnique,
  KeywordVar,
  KeywordVoid,
  KeywordWhile,
  KeywordWith,
  KeywordYield,

  // Valued terminals.
  BigIntLiteral,
  Hashbang,
  IdentifierName,
  NoSubstitutionTemplate,
  NumericLiteral,
  PrivateIdentifier,
  RegularExpressionLiteral,
  StringLiteral,
  TemplateHead,
  TemplateMiddle,
  TemplateTail,

  // Roots and list/wrapper rules.
  Module,
  ModuleItem,
  ModuleItemList,
  Program,
  Script,
  StatementList,
  StatementListItem,
  Statement,
  Declaration,
  HoistableDeclaration,
  BreakableStatement,
  IterationStatement,
  LabelledItem,

  // Statements and declarations.
  Block,
  BlockStatement,
  BindingList,
  BreakStatement,
  CaseBlock,
  CaseClause,
  CaseClauses,
  Catch,
  CatchParameter,
  ContinueStatement,
  DebuggerStatement,
  DefaultClause,
  DoWhileStatement,
  EmptyStatement,
  ExpressionStatement,
  Finally,
  ForBinding,
  ForDeclaration,
  ForInOfStatement,
  ForStatement,
  IfStatement,
  Initializer,
  LabelledStatement,
  LetOrConst,
  LexicalBinding,
  LexicalDeclaration,
  ReturnStatement,
  SwitchStatement,
  ThrowStatement,
  TryStatement,
  VariableDeclaration,
  VariableDeclarationList,
  VariableStatement,
  WhileStatement,
  WithStatement,

  // Identifiers.
  BindingIdentifier,
  Identifier,
  IdentifierReference,
  LabelIdentifier,

  // Functions.
  ArrowFormalParameters,
  ArrowFunction,
  ArrowParameters,
  AsyncArrowBindingIdentifier,
  AsyncArrowFunction,
  AsyncConciseBody,
  AsyncFunctionDeclaration,
  AsyncFunctionExpression,
  AsyncGeneratorDeclaration,
  AsyncGeneratorExpression,
  ConciseBody,
  ExpressionBody,
  FormalParameter,
  FormalParameterList,
  FormalParameters,
  FunctionBody,
  FunctionDeclaration,
  FunctionExpression,
  FunctionRestParameter,
  GeneratorDeclaration,
  GeneratorExpression,
  PropertySetParameterList,
  UniqueFormalParameters,

  // Binding patterns.
  ArrayBindingPattern,
  BindingElement,
  BindingElementList,
  BindingElisionElement,
  BindingPattern,
  BindingProperty,
  BindingPropertyList,
  BindingRestElement,
  BindingRestProperty,
  Elision,
  ObjectBindingPattern,
  SingleNameBinding,

  // Classes.
  AsyncGeneratorMethod,
  AsyncMethod,
  ClassBody,
  ClassDeclaration,
  ClassElement,
  ClassElementList,
  ClassElementName,
  ClassExpression,
  ClassHeritage,
  ClassStaticBlock,
  ClassStaticBlockBody,
  ClassTail,
  Decorator,
  FieldDefinition,
  GeneratorMethod,
  MethodDefinition,

  // Expressions.
  AdditiveExpression,
  Arguments,
  ArgumentList,
  ArrayLiteral,
  AssignmentExpression,
  AwaitExpression,
  BitwiseANDExpression,
  BitwiseORExpression,
  BitwiseXORExpression,
  CallExpression,
  CoalesceExpression,
  ComputedPropertyName,
  ConditionalExpression,
  CoverCallExpressionAndAsyncArrowHead,
  CoverInitializedName,
  CoverParenthesizedExpressionAndArrowParameterList,
  ElementList,
  EqualityExpression,
  ExponentiationExpression,
  Expression,
  ImportCall,
  ImportMeta,
  LeftHandSideExpression,
  Literal,
  LiteralPropertyName,
  LogicalANDExpression,
  LogicalORExpression,
  MemberExpression,
  MetaProperty,
  MultiplicativeExpression,
  NewExpression,
  NewTarget,
  ObjectLiteral,
  OptionalChain,
  OptionalExpression,
  ParenthesizedExpression,
  PrimaryExpression,
  PropertyDefinition,
  PropertyDefinitionList,
  PropertyName,
  RelationalExpression,
  ShiftExpression,
  ShortCircuitExpression,
  SpreadElement,
  SubstitutionTemplate,
  SuperCall,
  SuperProperty,
  TemplateLiteral,
  TemplateMiddleList,
  TemplateSpans,
  UnaryExpression,
  UpdateExpression,
  YieldExpression,

  // Modules.
  AttributeKey,
  ExportDeclaration,
  ExportFromClause,
  ExportSpecifier,
  ExportsList,
  FromClause,
  ImportClause,
  ImportDeclaration,
  ImportedBinding,
  ImportedDefaultBinding,
  ImportSpecifier,
  ImportsList,
  ModuleExportName,
  ModuleSpecifier,
  NameSpaceImport,
  NamedExports,
  NamedImports,
  WithClause,
  WithEntries,

  // TypeScript.
  TSAmbientDeclaration,
  TSArrayType,
  TSAsExpression,
  TSCallSignatureDeclaration,
  TSClassImplements,
  TSConditionalType,
  TSConstructSignatureDeclaration,
  TSConstructorType,
  TSEntityName,
  TSEnumDeclaration,
  TSEnumMember,
  TSExportAssignment,
  TSExpressionWithTypeArguments,
  TSExternalModuleReference,
  TSFunctionType,
  TSImportEqualsDeclaration,
  TSIndexSignature,
  TSIndexedAccessType,
  TSInferType,
  TSInterfaceBody,
  TSInterfaceDeclaration,
  TSInterfaceHeritage,
  TSIntersectionType,
  TSLiteralType,
  TSMappedType,
  TSMethodSignature,
  TSModuleBlock,
  TSModuleDeclaration,
  TSNamedTupleMember,
  TSNamespaceExportDeclaration,
  TSNonNullExpression,
  TSOptionalType,
  TSParameterProperty,
  TSParenthesizedType,
  TSPredefinedType,
  TSPropertySignature,
  TSRestType,
  TSSatisfiesExpression,
  TSThisType,
  TSTupleType,
  TSType,
  TSTypeAliasDeclaration,
  TSTypeAnnotation,
  TSTypeArguments,
  TSTypeAssertion,
  TSTypeLiteral,
  TSTypeOperator,
  TSTypeParameter,
  TSTypeParameters,
  TSTypePredicate,
  TSTypeQuery,
  TSTypeReference,
  TSUnionType,
}

#[rustfmt::skip]
static FIXED_TEXT: &[(CstKind, &str)] = &[
  (CstKind::Ampersand, "&"),
  (CstKind::AmpersandAmpersand, "&&"),
  (CstKind::AmpersandAmpersandEquals, "&&="),
  (CstKind::AmpersandEquals, "&="),
  (CstKind::Asterisk, "*"),
  (CstKind::AsteriskAsterisk, "**"),
  (CstKind::AsteriskAsteriskEquals, "**="),
  (CstKind::AsteriskEquals, "*="),
  (CstKind::At, "@"),
  (CstKind::Bar, "|"),
  (CstKind::BarBar, "||"),
  (CstKind::BarBarEquals, "||="),
  (CstKind::BarEquals, "|="),
  (CstKind::BraceClose, "}"),
  (CstKind::BraceOpen, "{"),
  (CstKind::BracketClose, "]"),
  (CstKind::BracketOpen, "["),
  (CstKind::Caret, "^"),
  (CstKind::CaretEquals, "^="),
  (CstKind::ChevronLeft, "<"),
  (CstKind::ChevronLeftChevronLeft, "<<"),
  (CstKind::ChevronLeftChevronLeftEquals, "<<="),
  (CstKind::ChevronLeftEquals, "<="),
  (CstKind::ChevronRight, ">"),
  (CstKind::ChevronRightChevronRight, ">>"),
  (CstKind::ChevronRightChevronRightChevronRight, ">>>"),
  (CstKind::ChevronRightChevronRightChevronRightEquals, ">>>="),
  (CstKind::ChevronRightChevronRightEquals, ">>="),
  (CstKind::ChevronRightEquals, ">="),
  (CstKind::Colon, ":"),
  (CstKind::Comma, ","),
  (CstKind::Dot, "."),
  (CstKind::DotDotDot, "..."),
  (CstKind::Equals, "="),
  (CstKind::EqualsChevronRight, "=>"),
  (CstKind::EqualsEquals, "=="),
  (CstKind::EqualsEqualsEquals, "==="),
  (CstKind::Exclamation, "!"),
  (CstKind::ExclamationEquals, "!="),
  (CstKind::ExclamationEqualsEquals, "!=="),
  (CstKind::Hyphen, "-"),
  (CstKind::HyphenEquals, "-="),
  (CstKind::HyphenHyphen, "--"),
  (CstKind::ParenthesisClose, ")"),
  (CstKind::ParenthesisOpen, "("),
  (CstKind::Percent, "%"),
  (CstKind::PercentEquals, "%="),
  (CstKind::Plus, "+"),
  (CstKind::PlusEquals, "+="),
  (CstKind::PlusPlus, "++"),
  (CstKind::Question, "?"),
  (CstKind::QuestionDot, "?."),
  (CstKind::QuestionQuestion, "??"),
  (CstKind::QuestionQuestionEquals, "??="),
  (CstKind::Semicolon, ";"),
  (CstKind::Slash, "/"),
  (CstKind::SlashEquals, "/="),
  (CstKind::Tilde, "~"),
  (CstKind::KeywordAbstract, "abstract"),
  (CstKind::KeywordAccessor, "accessor"),
  (CstKind::KeywordAs, "as"),
  (CstKind::KeywordAssert, "assert"),
  (CstKind::KeywordAsserts, "asserts"),
  (CstKind::KeywordAsync, "async"),
  (CstKind::KeywordAwait, "await"),
  (CstKind::KeywordBreak, "break"),
  (CstKind::KeywordCase, "case"),
  (CstKind::KeywordCatch, "catch"),
  (CstKind::KeywordClass, "class"),
  (CstKind::KeywordConst, "const"),
  (CstKind::KeywordContinue, "continue"),
  (CstKind::KeywordDebugger, "debugger"),
  (CstKind::KeywordDeclare, "declare"),
  (CstKind::KeywordDefault, "default"),
  (CstKind::KeywordDelete, "delete"),
  (CstKind::KeywordDo, "do"),
  (CstKind::KeywordElse, "else"),
  (CstKind::KeywordEnum, "enum"),
  (CstKind::KeywordExport, "export"),
  (CstKind::KeywordExtends, "extends"),
  (CstKind::KeywordFalse, "false"),
  (CstKind::KeywordFinally, "finally"),
  (CstKind::KeywordFor, "for"),
  (CstKind::KeywordFrom, "from"),
  (CstKind::KeywordFunction, "function"),
  (CstKind::KeywordGet, "get"),
  (CstKind::KeywordGlobal, "global"),
  (CstKind::KeywordIf, "if"),
  (CstKind::KeywordImplements, "implements"),
  (CstKind::KeywordImport, "import"),
  (CstKind::KeywordIn, "in"),
  (CstKind::KeywordInfer, "infer"),
  (CstKind::KeywordInstanceof, "instanceof"),
  (CstKind::KeywordInterface, "interface"),
  (CstKind::KeywordIs, "is"),
  (CstKind::KeywordKeyof, "keyof"),
  (CstKind::KeywordLet, "let"),
  (CstKind::KeywordMeta, "meta"),
  (CstKind::KeywordModule, "module"),
  (CstKind::KeywordNamespace, "namespace"),
  (CstKind::KeywordNew, "new"),
  (CstKind::KeywordNull, "null"),
  (CstKind::KeywordOf, "of"),
  (CstKind::KeywordOut, "out"),
  (CstKind::KeywordOverride, "override"),
  (CstKind::KeywordPrivate, "private"),
  (CstKind::KeywordProtected, "protected"),
  (CstKind::KeywordPublic, "public"),
  (CstKind::KeywordReadonly, "readonly"),
  (CstKind::KeywordRequire, "require"),
  (CstKind::KeywordReturn, "return"),
  (CstKind::KeywordSatisfies, "satisfies"),
  (CstKind::KeywordSet, "set"),
  (CstKind::KeywordStatic, "static"),
  (CstKind::KeywordSuper, "super"),
  (CstKind::KeywordSwitch, "switch"),
  (CstKind::KeywordTarget, "target"),
  (CstKind::KeywordThis, "this"),
  (CstKind::KeywordThrow, "throw"),
  (CstKind::KeywordTrue, "true"),
  (CstKind::KeywordTry, "try"),
  (CstKind::KeywordType, "type"),
  (CstKind::KeywordTypeof, "typeof"),
  (CstKind::KeywordUnique, "unique"),
  (CstKind::KeywordVar, "var"),
  (CstKind::KeywordVoid, "void"),
  (CstKind::KeywordWhile, "while"),
  (CstKind::KeywordWith, "with"),
  (CstKind::KeywordYield, "yield"),
];

static TEXT_OF_KIND: Lazy<HashMap<CstKind, &'static str>> = Lazy::new(|| {
  let mut map = HashMap::<CstKind, &'static str>::new();
  for &(kind, text) in FIXED_TEXT {
    map.insert(kind, text);
  }
  map
});

static KIND_OF_TEXT: Lazy<HashMap<&'static str, CstKind>> = Lazy::new(|| {
  let mut map = HashMap::<&'static str, CstKind>::new();
  for &(kind, text) in FIXED_TEXT {
    map.insert(text, kind);
  }
  map
});

impl CstKind {
  /// The fixed source spelling of a punctuator or keyword terminal.
  pub fn fixed_text(self) -> Option<&'static str> {
    TEXT_OF_KIND.get(&self).copied()
  }

  /// The punctuator or keyword terminal spelled exactly as `text`.
  pub fn from_fixed_text(text: &str) -> Option<CstKind> {
    KIND_OF_TEXT.get(text).copied()
  }

  pub fn is_keyword(self) -> bool {
    self.fixed_text().is_some_and(|t| t.as_bytes()[0].is_ascii_alphabetic())
  }

  pub fn is_terminal(self) -> bool {
    self.fixed_text().is_some()
      || matches!(
        self,
        CstKind::BigIntLiteral
          | CstKind::Hashbang
          | CstKind::IdentifierName
          | CstKind::NoSubstitutionTemplate
          | CstKind::NumericLiteral
          | CstKind::PrivateIdentifier
          | CstKind::RegularExpressionLiteral
          | CstKind::StringLiteral
          | CstKind::TemplateHead
          | CstKind::TemplateMiddle
          | CstKind::TemplateTail
      )
  }

  /// Rules that, when they have exactly one child, contribute nothing beyond that child.
  pub fn is_passthrough(self) -> bool {
    matches!(
      self,
      CstKind::AdditiveExpression
        | CstKind::ArrowParameters
        | CstKind::AssignmentExpression
        | CstKind::AsyncConciseBody
        | CstKind::BindingPattern
        | CstKind::BitwiseANDExpression
        | CstKind::BitwiseORExpression
        | CstKind::BitwiseXORExpression
        | CstKind::BreakableStatement
        | CstKind::CallExpression
        | CstKind::ClassElementName
        | CstKind::CoalesceExpression
        | CstKind::ConciseBody
        | CstKind::ConditionalExpression
        | CstKind::Declaration
        | CstKind::EqualityExpression
        | CstKind::ExponentiationExpression
        | CstKind::Expression
        | CstKind::ExpressionBody
        | CstKind::ForBinding
        | CstKind::HoistableDeclaration
        | CstKind::ImportedBinding
        | CstKind::ImportedDefaultBinding
        | CstKind::IterationStatement
        | CstKind::LabelledItem
        | CstKind::LeftHandSideExpression
        | CstKind::Literal
        | CstKind::LiteralPropertyName
        | CstKind::LogicalANDExpression
        | CstKind::LogicalORExpression
        | CstKind::MemberExpression
        | CstKind::ModuleItem
        | CstKind::ModuleSpecifier
        | CstKind::MultiplicativeExpression
        | CstKind::NewExpression
        | CstKind::PrimaryExpression
        | CstKind::PropertyName
        | CstKind::RelationalExpression
        | CstKind::ShiftExpression
        | CstKind::ShortCircuitExpression
        | CstKind::Statement
        | CstKind::StatementListItem
        | CstKind::TSType
        | CstKind::UnaryExpression
        | CstKind::UpdateExpression
    )
  }

  /// Rules whose children are spliced into the enclosing list.
  pub fn is_list(self) -> bool {
    matches!(
      self,
      CstKind::ArgumentList
        | CstKind::BindingElementList
        | CstKind::BindingList
        | CstKind::BindingPropertyList
        | CstKind::CaseClauses
        | CstKind::ClassElementList
        | CstKind::ElementList
        | CstKind::Elision
        | CstKind::ExportsList
        | CstKind::FormalParameterList
        | CstKind::ImportsList
        | CstKind::ModuleItemList
        | CstKind::OptionalChain
        | CstKind::PropertyDefinitionList
        | CstKind::StatementList
        | CstKind::TemplateMiddleList
        | CstKind::TemplateSpans
        | CstKind::VariableDeclarationList
        | CstKind::WithEntries
    )
  }

  pub fn is_typescript(self) -> bool {
    matches!(
      self,
      CstKind::TSAmbientDeclaration
        | CstKind::TSArrayType
        | CstKind::TSAsExpression
        | CstKind::TSCallSignatureDeclaration
        | CstKind::TSClassImplements
        | CstKind::TSConditionalType
        | CstKind::TSConstructSignatureDeclaration
        | CstKind::TSConstructorType
        | CstKind::TSEntityName
        | CstKind::TSEnumDeclaration
        | CstKind::TSEnumMember
        | CstKind::TSExportAssignment
        | CstKind::TSExpressionWithTypeArguments
        | CstKind::TSExternalModuleReference
        | CstKind::TSFunctionType
        | CstKind::TSImportEqualsDeclaration
        | CstKind::TSIndexSignature
        | CstKind::TSIndexedAccessType
        | CstKind::TSInferType
        | CstKind::TSInterfaceBody
        | CstKind::TSInterfaceDeclaration
        | CstKind::TSInterfaceHeritage
        | CstKind::TSIntersectionType
        | CstKind::TSLiteralType
        | CstKind::TSMappedType
        | CstKind::TSMethodSignature
        | CstKind::TSModuleBlock
        | CstKind::TSModuleDeclaration
        | CstKind::TSNamedTupleMember
        | CstKind::TSNamespaceExportDeclaration
        | CstKind::TSNonNullExpression
        | CstKind::TSOptionalType
        | CstKind::TSParameterProperty
        | CstKind::TSParenthesizedType
        | CstKind::TSPredefinedType
        | CstKind::TSPropertySignature
        | CstKind::TSRestType
        | CstKind::TSSatisfiesExpression
        | CstKind::TSThisType
        | CstKind::TSTupleType
        | CstKind::TSType
        | CstKind::TSTypeAliasDeclaration
        | CstKind::TSTypeAnnotation
        | CstKind::TSTypeArguments
        | CstKind::TSTypeAssertion
        | CstKind::TSTypeLiteral
        | CstKind::TSTypeOperator
        | CstKind::TSTypeParameter
        | CstKind::TSTypeParameters
        | CstKind::TSTypePredicate
        | CstKind::TSTypeQuery
        | CstKind::TSTypeReference
        | CstKind::TSUnionType
    )
  }
}

#[cfg(test)]
mod tests {
  use super::CstKind;

  #[test]
  fn fixed_text_is_bidirectional() {
    assert_eq!(CstKind::from_fixed_text("=>"), Some(CstKind::EqualsChevronRight));
    assert_eq!(CstKind::EqualsChevronRight.fixed_text(), Some("=>"));
    assert_eq!(CstKind::from_fixed_text("async"), Some(CstKind::KeywordAsync));
    assert_eq!(CstKind::from_fixed_text("foo"), None);
  }

  #[test]
  fn classifies_kinds() {
    assert!(CstKind::KeywordLet.is_keyword());
    assert!(!CstKind::Comma.is_keyword());
    assert!(CstKind::Comma.is_terminal());
    assert!(CstKind::StringLiteral.is_terminal());
    assert!(!CstKind::ArrowFunction.is_terminal());
    assert!(CstKind::TSUnionType.is_typescript());
    assert!(!CstKind::ArrowFunction.is_typescript());
  }
}
