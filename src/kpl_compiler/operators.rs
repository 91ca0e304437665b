// Operator catalog
//
// One entry per symbol/arity/position combination: prefix `++` and suffix `++`
// are different operators. The discriminant is the operator's stable id and
// is what equality compares.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorType {
    Unary,
    Binary,
    Ternary,
    Assignment,
}

impl OperatorType {
    /// Number of operands an operation of this type takes
    pub fn arity(self) -> usize {
        match self {
            OperatorType::Unary => 1,
            OperatorType::Binary | OperatorType::Assignment => 2,
            OperatorType::Ternary => 3,
        }
    }
}

/// Outcome of comparing a pending operator against an incoming one.
///
/// `Continue` means the pending operator binds tighter and should be reduced
/// now. `Equal` means same priority, left-to-right: chaining continues.
/// `Stop` means keep the pending operator on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityOrder {
    Stop = -1,
    Equal = 0,
    Continue = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    SuffixIncrement = 0,
    SuffixDecrement = 1,

    PrefixIncrement = 2,
    PrefixDecrement = 3,
    UnaryMinus = 4,
    BinaryNot = 5,

    Multiplication = 6,
    Division = 7,

    Addition = 8,
    Subtraction = 9,

    GreaterThan = 10,
    SmallerThan = 11,
    GreaterEqualsThan = 12,
    SmallerEqualsThan = 13,

    EqualsTo = 14,
    NotEqualsTo = 15,

    BinaryAnd = 16,
    BinaryOr = 17,

    TernaryConditional = 18,

    Assignment = 19,
    AssignmentAddition = 20,
    AssignmentSubtraction = 21,
    AssignmentMultiplication = 22,
    AssignmentDivision = 23,
}

struct OperatorInfo {
    symbol: &'static str,
    op_type: OperatorType,
    priority: u32,
    right_to_left: bool,
    conditional: bool,
}

const fn op(
    symbol: &'static str,
    op_type: OperatorType,
    priority: u32,
    right_to_left: bool,
    conditional: bool,
) -> OperatorInfo {
    OperatorInfo {
        symbol,
        op_type,
        priority,
        right_to_left,
        conditional,
    }
}

// Indexed by operator id. Lower priority number binds tighter.
const OPERATORS: [OperatorInfo; 24] = [
    op("++", OperatorType::Unary, 0, false, false),
    op("--", OperatorType::Unary, 0, false, false),
    op("++", OperatorType::Unary, 1, true, false),
    op("--", OperatorType::Unary, 1, true, false),
    op("-", OperatorType::Unary, 1, true, false),
    op("!", OperatorType::Unary, 1, true, false),
    op("*", OperatorType::Binary, 2, false, false),
    op("/", OperatorType::Binary, 2, false, false),
    op("+", OperatorType::Binary, 3, false, false),
    op("-", OperatorType::Binary, 3, false, false),
    op(">", OperatorType::Binary, 4, false, true),
    op("<", OperatorType::Binary, 4, false, true),
    op(">=", OperatorType::Binary, 4, false, true),
    op("<=", OperatorType::Binary, 4, false, true),
    op("==", OperatorType::Binary, 5, false, true),
    op("!=", OperatorType::Binary, 5, false, true),
    op("&&", OperatorType::Binary, 6, false, false),
    op("||", OperatorType::Binary, 6, false, false),
    op("?=", OperatorType::Ternary, 7, false, false),
    op("=", OperatorType::Assignment, 8, true, false),
    op("+=", OperatorType::Assignment, 8, true, false),
    op("-=", OperatorType::Assignment, 8, true, false),
    op("*=", OperatorType::Assignment, 8, true, false),
    op("/=", OperatorType::Assignment, 8, true, false),
];

impl Operator {
    pub const ALL: [Operator; 24] = [
        Operator::SuffixIncrement,
        Operator::SuffixDecrement,
        Operator::PrefixIncrement,
        Operator::PrefixDecrement,
        Operator::UnaryMinus,
        Operator::BinaryNot,
        Operator::Multiplication,
        Operator::Division,
        Operator::Addition,
        Operator::Subtraction,
        Operator::GreaterThan,
        Operator::SmallerThan,
        Operator::GreaterEqualsThan,
        Operator::SmallerEqualsThan,
        Operator::EqualsTo,
        Operator::NotEqualsTo,
        Operator::BinaryAnd,
        Operator::BinaryOr,
        Operator::TernaryConditional,
        Operator::Assignment,
        Operator::AssignmentAddition,
        Operator::AssignmentSubtraction,
        Operator::AssignmentMultiplication,
        Operator::AssignmentDivision,
    ];

    fn info(self) -> &'static OperatorInfo {
        &OPERATORS[self as usize]
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn operator_type(self) -> OperatorType {
        self.info().op_type
    }

    pub fn priority(self) -> u32 {
        self.info().priority
    }

    pub fn has_right_to_left(self) -> bool {
        self.info().right_to_left
    }

    /// Comparison operators
    pub fn is_conditional(self) -> bool {
        self.info().conditional
    }

    pub fn is_unary(self) -> bool {
        self.operator_type() == OperatorType::Unary
    }

    pub fn is_binary(self) -> bool {
        self.operator_type() == OperatorType::Binary
    }

    pub fn is_ternary(self) -> bool {
        self.operator_type() == OperatorType::Ternary
    }

    pub fn is_assignment(self) -> bool {
        self.operator_type() == OperatorType::Assignment
    }

    /// Unary operators written after their operand
    pub fn is_suffix(self) -> bool {
        matches!(self, Operator::SuffixIncrement | Operator::SuffixDecrement)
    }

    pub fn arity(self) -> usize {
        self.operator_type().arity()
    }

    /// Decide whether `self` (pending) must be reduced before `other` is pushed.
    ///
    /// A tie where either side is right-to-left yields `Stop`, which is what
    /// makes `a = b = c` and `- - x` group to the right.
    pub fn compare_priority(self, other: Operator) -> PriorityOrder {
        let (mine, theirs) = (self.priority(), other.priority());
        if mine == theirs {
            if self.has_right_to_left() || other.has_right_to_left() {
                PriorityOrder::Stop
            } else {
                PriorityOrder::Equal
            }
        } else if mine < theirs {
            PriorityOrder::Continue
        } else {
            PriorityOrder::Stop
        }
    }

    /// Every operator spelled `symbol`, in id order
    pub fn with_symbol(symbol: &str) -> Vec<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .filter(|op| op.symbol() == symbol)
            .collect()
    }

    /// The operator spelled `symbol` with the given type, preferring the
    /// prefix form when a unary symbol has both positions.
    pub fn find(symbol: &str, op_type: OperatorType) -> Option<Operator> {
        let mut candidates = Operator::ALL
            .iter()
            .copied()
            .filter(|op| op.symbol() == symbol && op.operator_type() == op_type);
        let first = candidates.next()?;
        if first.is_suffix() {
            Some(candidates.next().unwrap_or(first))
        } else {
            Some(first)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod tests;
