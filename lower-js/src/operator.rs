use crate::cst::CstKind;
use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::Serializer;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OperatorName {
  Addition,
  Assignment,
  AssignmentAddition,
  AssignmentBitwiseAnd,
  AssignmentBitwiseLeftShift,
  AssignmentBitwiseOr,
  AssignmentBitwiseRightShift,
  AssignmentBitwiseUnsignedRightShift,
  AssignmentBitwiseXor,
  AssignmentDivision,
  AssignmentExponentiation,
  AssignmentLogicalAnd,
  AssignmentLogicalOr,
  AssignmentMultiplication,
  AssignmentNullishCoalescing,
  AssignmentRemainder,
  AssignmentSubtraction,
  BitwiseAnd,
  BitwiseLeftShift,
  BitwiseNot,
  BitwiseOr,
  BitwiseRightShift,
  BitwiseUnsignedRightShift,
  BitwiseXor,
  Delete,
  Division,
  Equality,
  Exponentiation,
  GreaterThan,
  GreaterThanOrEqual,
  In,
  Inequality,
  Instanceof,
  LessThan,
  LessThanOrEqual,
  LogicalAnd,
  LogicalNot,
  LogicalOr,
  Multiplication,
  NullishCoalescing,
  PostfixDecrement,
  PostfixIncrement,
  PrefixDecrement,
  PrefixIncrement,
  Remainder,
  StrictEquality,
  StrictInequality,
  Subtraction,
  Typeof,
  UnaryNegation,
  UnaryPlus,
  Void,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Associativity {
  Left,
  Right,
}

#[derive(Debug)]
pub struct Operator {
  pub name: OperatorName,
  /// ESTree spelling of the operator.
  pub text: &'static str,
  pub associativity: Associativity,
}

impl OperatorName {
  pub fn text(self) -> &'static str {
    OPERATORS[&self].text
  }

  pub fn associativity(self) -> Associativity {
    OPERATORS[&self].associativity
  }

  /// `&&`, `||` and `??`, which lower to `LogicalExpression`.
  pub fn is_logical(self) -> bool {
    matches!(
      self,
      OperatorName::LogicalAnd | OperatorName::LogicalOr | OperatorName::NullishCoalescing
    )
  }
}

impl Serialize for OperatorName {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.text())
  }
}

#[rustfmt::skip]
pub static OPERATORS: Lazy<HashMap<OperatorName, Operator>> = Lazy::new(|| {
  use Associativity::*;
  use OperatorName::*;
  let mut map = HashMap::<OperatorName, Operator>::new();
  let mut add = |name, text, associativity| {
    map.insert(name, Operator { name, text, associativity });
  };
  add(Addition, "+", Left);
  add(Assignment, "=", Right);
  add(AssignmentAddition, "+=", Right);
  add(AssignmentBitwiseAnd, "&=", Right);
  add(AssignmentBitwiseLeftShift, "<<=", Right);
  add(AssignmentBitwiseOr, "|=", Right);
  add(AssignmentBitwiseRightShift, ">>=", Right);
  add(AssignmentBitwiseUnsignedRightShift, ">>>=", Right);
  add(AssignmentBitwiseXor, "^=", Right);
  add(AssignmentDivision, "/=", Right);
  add(AssignmentExponentiation, "**=", Right);
  add(AssignmentLogicalAnd, "&&=", Right);
  add(AssignmentLogicalOr, "||=", Right);
  add(AssignmentMultiplication, "*=", Right);
  add(AssignmentNullishCoalescing, "??=", Right);
  add(AssignmentRemainder, "%=", Right);
  add(AssignmentSubtraction, "-=", Right);
  add(BitwiseAnd, "&", Left);
  add(BitwiseLeftShift, "<<", Left);
  add(BitwiseNot, "~", Right);
  add(BitwiseOr, "|", Left);
  add(BitwiseRightShift, ">>", Left);
  add(BitwiseUnsignedRightShift, ">>>", Left);
  add(BitwiseXor, "^", Left);
  add(Delete, "delete", Right);
  add(Division, "/", Left);
  add(Equality, "==", Left);
  add(Exponentiation, "**", Right);
  add(GreaterThan, ">", Left);
  add(GreaterThanOrEqual, ">=", Left);
  add(In, "in", Left);
  add(Inequality, "!=", Left);
  add(Instanceof, "instanceof", Left);
  add(LessThan, "<", Left);
  add(LessThanOrEqual, "<=", Left);
  add(LogicalAnd, "&&", Left);
  add(LogicalNot, "!", Right);
  add(LogicalOr, "||", Left);
  add(Multiplication, "*", Left);
  add(NullishCoalescing, "??", Left);
  add(PostfixDecrement, "--", Left);
  add(PostfixIncrement, "++", Left);
  add(PrefixDecrement, "--", Right);
  add(PrefixIncrement, "++", Right);
  add(Remainder, "%", Left);
  add(StrictEquality, "===", Left);
  add(StrictInequality, "!==", Left);
  add(Subtraction, "-", Left);
  add(Typeof, "typeof", Right);
  add(UnaryNegation, "-", Right);
  add(UnaryPlus, "+", Right);
  add(Void, "void", Right);
  map
});

#[rustfmt::skip]
pub static BINARY_OPERATOR_MAPPING: Lazy<HashMap<CstKind, OperatorName>> = Lazy::new(|| {
  let mut map = HashMap::<CstKind, OperatorName>::new();
  map.insert(CstKind::Plus, OperatorName::Addition);
  map.insert(CstKind::Ampersand, OperatorName::BitwiseAnd);
  map.insert(CstKind::ChevronLeftChevronLeft, OperatorName::BitwiseLeftShift);
  map.insert(CstKind::Bar, OperatorName::BitwiseOr);
  map.insert(CstKind::ChevronRightChevronRight, OperatorName::BitwiseRightShift);
  map.insert(CstKind::ChevronRightChevronRightChevronRight, OperatorName::BitwiseUnsignedRightShift);
  map.insert(CstKind::Caret, OperatorName::BitwiseXor);
  map.insert(CstKind::Slash, OperatorName::Division);
  map.insert(CstKind::EqualsEquals, OperatorName::Equality);
  map.insert(CstKind::AsteriskAsterisk, OperatorName::Exponentiation);
  map.insert(CstKind::ChevronRight, OperatorName::GreaterThan);
  map.insert(CstKind::ChevronRightEquals, OperatorName::GreaterThanOrEqual);
  map.insert(CstKind::KeywordIn, OperatorName::In);
  map.insert(CstKind::ExclamationEquals, OperatorName::Inequality);
  map.insert(CstKind::KeywordInstanceof, OperatorName::Instanceof);
  map.insert(CstKind::ChevronLeft, OperatorName::LessThan);
  map.insert(CstKind::ChevronLeftEquals, OperatorName::LessThanOrEqual);
  map.insert(CstKind::AmpersandAmpersand, OperatorName::LogicalAnd);
  map.insert(CstKind::BarBar, OperatorName::LogicalOr);
  map.insert(CstKind::Asterisk, OperatorName::Multiplication);
  map.insert(CstKind::QuestionQuestion, OperatorName::NullishCoalescing);
  map.insert(CstKind::Percent, OperatorName::Remainder);
  map.insert(CstKind::EqualsEqualsEquals, OperatorName::StrictEquality);
  map.insert(CstKind::ExclamationEqualsEquals, OperatorName::StrictInequality);
  map.insert(CstKind::Hyphen, OperatorName::Subtraction);
  map
});

#[rustfmt::skip]
pub static ASSIGNMENT_OPERATOR_MAPPING: Lazy<HashMap<CstKind, OperatorName>> = Lazy::new(|| {
  let mut map = HashMap::<CstKind, OperatorName>::new();
  map.insert(CstKind::Equals, OperatorName::Assignment);
  map.insert(CstKind::PlusEquals, OperatorName::AssignmentAddition);
  map.insert(CstKind::AmpersandEquals, OperatorName::AssignmentBitwiseAnd);
  map.insert(CstKind::ChevronLeftChevronLeftEquals, OperatorName::AssignmentBitwiseLeftShift);
  map.insert(CstKind::BarEquals, OperatorName::AssignmentBitwiseOr);
  map.insert(CstKind::ChevronRightChevronRightEquals, OperatorName::AssignmentBitwiseRightShift);
  map.insert(CstKind::ChevronRightChevronRightChevronRightEquals, OperatorName::AssignmentBitwiseUnsignedRightShift);
  map.insert(CstKind::CaretEquals, OperatorName::AssignmentBitwiseXor);
  map.insert(CstKind::SlashEquals, OperatorName::AssignmentDivision);
  map.insert(CstKind::AsteriskAsteriskEquals, OperatorName::AssignmentExponentiation);
  map.insert(CstKind::AmpersandAmpersandEquals, OperatorName::AssignmentLogicalAnd);
  map.insert(CstKind::BarBarEquals, OperatorName::AssignmentLogicalOr);
  map.insert(CstKind::AsteriskEquals, OperatorName::AssignmentMultiplication);
  map.insert(CstKind::QuestionQuestionEquals, OperatorName::AssignmentNullishCoalescing);
  map.insert(CstKind::PercentEquals, OperatorName::AssignmentRemainder);
  map.insert(CstKind::HyphenEquals, OperatorName::AssignmentSubtraction);
  map
});

#[rustfmt::skip]
pub static UNARY_OPERATOR_MAPPING: Lazy<HashMap<CstKind, OperatorName>> = Lazy::new(|| {
  let mut map = HashMap::<CstKind, OperatorName>::new();
  map.insert(CstKind::Tilde, OperatorName::BitwiseNot);
  map.insert(CstKind::KeywordDelete, OperatorName::Delete);
  map.insert(CstKind::Exclamation, OperatorName::LogicalNot);
  map.insert(CstKind::KeywordTypeof, OperatorName::Typeof);
  map.insert(CstKind::Hyphen, OperatorName::UnaryNegation);
  map.insert(CstKind::Plus, OperatorName::UnaryPlus);
  map.insert(CstKind::KeywordVoid, OperatorName::Void);
  map
});

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn operators_have_estree_spellings() {
    assert_eq!(OperatorName::NullishCoalescing.text(), "??");
    assert_eq!(OperatorName::Instanceof.text(), "instanceof");
    assert_eq!(
      serde_json::to_string(&OperatorName::AssignmentLogicalOr).unwrap(),
      "\"||=\""
    );
  }

  #[test]
  fn only_exponentiation_is_right_associative_among_binary() {
    for name in BINARY_OPERATOR_MAPPING.values() {
      let expected = if *name == OperatorName::Exponentiation {
        Associativity::Right
      } else {
        Associativity::Left
      };
      assert_eq!(name.associativity(), expected, "{name:?}");
    }
  }
}
