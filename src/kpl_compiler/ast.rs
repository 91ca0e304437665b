// Abstract Syntax Tree definitions for the scripting language
//
// Every fragment the parser produces is a `Node`. Composite nodes own their
// children outright; a `FunctionCall` names its callable by id and owns only
// its argument list.

use std::fmt;

use crate::kpl_compiler::code_space::ScriptCode;
use crate::kpl_compiler::datatypes::DataType;
use crate::kpl_compiler::error::CompilerError;
use crate::kpl_compiler::functions::{Callable, CallableId};
use crate::kpl_compiler::operators::{Operator, OperatorType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Identifier,
    LiteralInteger,
    TypeConstant,
    Stopchar,
    Arguments,
    Operator,
    Operation,
    FunctionCall,
    Scope,
    CommandArguments,
    Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Identifier(Identifier),
    LiteralInteger(LiteralInteger),
    TypeConstant(TypeConstant),
    Stopchar(Stopchar),
    Arguments(ArgumentList),
    Operator(Operator),
    Operation(Operation),
    FunctionCall(FunctionCall),
    Scope(Scope),
    CommandArguments(ArgumentList),
    Command(Command),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Identifier(_) => NodeKind::Identifier,
            Node::LiteralInteger(_) => NodeKind::LiteralInteger,
            Node::TypeConstant(_) => NodeKind::TypeConstant,
            Node::Stopchar(_) => NodeKind::Stopchar,
            Node::Arguments(_) => NodeKind::Arguments,
            Node::Operator(_) => NodeKind::Operator,
            Node::Operation(_) => NodeKind::Operation,
            Node::FunctionCall(_) => NodeKind::FunctionCall,
            Node::Scope(_) => NodeKind::Scope,
            Node::CommandArguments(_) => NodeKind::CommandArguments,
            Node::Command(_) => NodeKind::Command,
        }
    }

    /// Value-producing statements, as opposed to purely structural fragments
    pub fn is_statement(&self) -> bool {
        match self {
            Node::Identifier(_)
            | Node::LiteralInteger(_)
            | Node::TypeConstant(_)
            | Node::Arguments(_)
            | Node::Operation(_)
            | Node::FunctionCall(_)
            | Node::Scope(_) => true,
            Node::Stopchar(_) | Node::Operator(_) | Node::Command(_) | Node::CommandArguments(_) => {
                false
            }
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    pub fn is_any(&self, kinds: &[NodeKind]) -> bool {
        kinds.contains(&self.kind())
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Identifier(n) => write!(f, "{}", n),
            Node::LiteralInteger(n) => write!(f, "{}", n),
            Node::TypeConstant(n) => write!(f, "{}", n),
            Node::Stopchar(n) => write!(f, "{}", n),
            Node::Arguments(n) | Node::CommandArguments(n) => write!(f, "{}", n),
            Node::Operator(n) => write!(f, "{}", n),
            Node::Operation(n) => write!(f, "{}", n),
            Node::FunctionCall(n) => write!(f, "{}", n),
            Node::Scope(n) => write!(f, "{}", n),
            Node::Command(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! impl_from_node {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::$variant(value)
            }
        })*
    };
}

impl_from_node! {
    Identifier => Identifier,
    LiteralInteger => LiteralInteger,
    TypeConstant => TypeConstant,
    Stopchar => Stopchar,
    Operator => Operator,
    Operation => Operation,
    FunctionCall => FunctionCall,
    Scope => Scope,
    Command => Command,
}

// Identifiers

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    pub fn new(name: &str) -> Result<Self, CompilerError> {
        if !Identifier::is_valid(name) {
            return Err(CompilerError::InvalidIdentifier(name.to_string()));
        }
        Ok(Identifier {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `[_a-zA-Z][_a-zA-Z0-9]*`, matched against the whole text
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// Literals

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiteralInteger {
    value: i32,
}

impl LiteralInteger {
    pub fn new(value: i32) -> Self {
        LiteralInteger { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Radix picked from the text: `0x`/`0X` is hexadecimal, any other
    /// leading `0` followed by more digits is octal, the rest is decimal.
    pub fn radix_of(text: &str) -> u32 {
        let bytes = text.as_bytes();
        if bytes.len() <= 1 || bytes[0] != b'0' {
            10
        } else if bytes[1] == b'x' || bytes[1] == b'X' {
            16
        } else {
            8
        }
    }

    pub fn parse(text: &str) -> Result<Self, CompilerError> {
        let radix = LiteralInteger::radix_of(text);
        let digits = if radix == 16 { &text[2..] } else { text };
        // from_str_radix takes a sign, a literal never carries one
        if digits.starts_with(['+', '-']) {
            return Err(CompilerError::InvalidLiteral(text.to_string()));
        }
        i32::from_str_radix(digits, radix)
            .map(LiteralInteger::new)
            .map_err(|_| CompilerError::InvalidLiteral(text.to_string()))
    }

    /// `(0|0[xX])?[0-9]+`, matched against the whole text.
    ///
    /// Octal digit range is not checked here: `"089"` passes and only fails
    /// in `parse`. Hex letters do not pass.
    pub fn is_valid(text: &str) -> bool {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for LiteralInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Typed constants

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeConstant {
    value: ScriptCode,
    data_type: Option<DataType>,
}

impl TypeConstant {
    pub fn new(code: ScriptCode) -> Self {
        TypeConstant {
            value: code,
            data_type: DataType::find_type_from_value(code),
        }
    }

    /// Resolve a symbolic name such as `Blue` or `Swarm`
    pub fn from_name(name: &str) -> Option<Self> {
        let data_type = DataType::find_type_from_value_name(name)?;
        Some(TypeConstant::new(
            data_type.native().get_identifier_value(name),
        ))
    }

    pub fn value(&self) -> ScriptCode {
        self.value
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    pub fn is_valid_name(name: &str) -> bool {
        DataType::find_type_from_value_name(name).is_some()
    }

    pub fn is_valid_code(code: ScriptCode) -> bool {
        DataType::find_type_from_value(code).is_some()
    }
}

impl fmt::Display for TypeConstant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self
            .data_type
            .map(|dt| dt.native().get_value_identifier(self.value))
            .unwrap_or("");
        if name.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}", name)
        }
    }
}

// Punctuation

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stopchar {
    Semicolon,
    Comma,
    Colon,
}

impl Stopchar {
    pub fn symbol(self) -> char {
        match self {
            Stopchar::Semicolon => ';',
            Stopchar::Comma => ',',
            Stopchar::Colon => ':',
        }
    }

    pub fn from_char(c: char) -> Option<Stopchar> {
        match c {
            ';' => Some(Stopchar::Semicolon),
            ',' => Some(Stopchar::Comma),
            ':' => Some(Stopchar::Colon),
            _ => None,
        }
    }
}

impl fmt::Display for Stopchar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Argument lists, shared by call arguments and command arguments

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentList {
    args: Vec<Node>,
}

impl ArgumentList {
    pub fn new() -> Self {
        ArgumentList { args: Vec::new() }
    }

    /// Append an argument. Only value-producing nodes are accepted.
    pub fn add(&mut self, arg: impl Into<Node>) -> Result<(), CompilerError> {
        let arg = arg.into();
        if !arg.is_statement() {
            return Err(CompilerError::InvalidArgument(format!(
                "{:?} '{}' does not produce a value",
                arg.kind(),
                arg
            )));
        }
        self.args.push(arg);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.args.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.args.iter()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

// Operations

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    operator: Operator,
    operands: Vec<Node>,
}

impl Operation {
    fn checked(
        operator: Operator,
        expected: OperatorType,
        operands: Vec<Node>,
    ) -> Result<Self, CompilerError> {
        if operator.operator_type() != expected {
            return Err(CompilerError::BadOperation(format!(
                "operator '{}' is {:?}, not {:?}",
                operator,
                operator.operator_type(),
                expected
            )));
        }
        if let Some(operand) = operands.iter().find(|n| !n.is_statement()) {
            return Err(CompilerError::BadOperation(format!(
                "operand '{}' of '{}' does not produce a value",
                operand, operator
            )));
        }
        Ok(Operation { operator, operands })
    }

    pub fn unary(operator: Operator, operand: impl Into<Node>) -> Result<Self, CompilerError> {
        Operation::checked(operator, OperatorType::Unary, vec![operand.into()])
    }

    pub fn binary(
        operator: Operator,
        left: impl Into<Node>,
        right: impl Into<Node>,
    ) -> Result<Self, CompilerError> {
        Operation::checked(
            operator,
            OperatorType::Binary,
            vec![left.into(), right.into()],
        )
    }

    pub fn ternary(
        operator: Operator,
        condition: impl Into<Node>,
        when_true: impl Into<Node>,
        when_false: impl Into<Node>,
    ) -> Result<Self, CompilerError> {
        Operation::checked(
            operator,
            OperatorType::Ternary,
            vec![condition.into(), when_true.into(), when_false.into()],
        )
    }

    /// The destination of an assignment is always an identifier
    pub fn assignment(
        operator: Operator,
        destination: Identifier,
        source: impl Into<Node>,
    ) -> Result<Self, CompilerError> {
        Operation::checked(
            operator,
            OperatorType::Assignment,
            vec![Node::Identifier(destination), source.into()],
        )
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn operand(&self, index: usize) -> Option<&Node> {
        self.operands.get(index)
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    pub fn is_unary(&self) -> bool {
        self.operator.is_unary()
    }

    pub fn is_binary(&self) -> bool {
        self.operator.is_binary()
    }

    pub fn is_ternary(&self) -> bool {
        self.operator.is_ternary()
    }

    pub fn is_assignment(&self) -> bool {
        self.operator.is_assignment()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ops = &self.operands;
        match self.operator.operator_type() {
            OperatorType::Unary if self.operator.is_suffix() => {
                write!(f, "{}{}", ops[0], self.operator)
            }
            OperatorType::Unary => write!(f, "{}{}", self.operator, ops[0]),
            OperatorType::Ternary => write!(f, "{} ? {} : {}", ops[0], ops[1], ops[2]),
            OperatorType::Binary | OperatorType::Assignment => {
                write!(f, "{} {} {}", ops[0], self.operator, ops[1])
            }
        }
    }
}

// Function calls

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    callable: CallableId,
    name: String,
    args: ArgumentList,
}

impl FunctionCall {
    /// Bind `args` to `callable`; the argument count must match its parameters.
    pub fn new(callable: &Callable, args: ArgumentList) -> Result<Self, CompilerError> {
        if args.len() != callable.parameter_count() {
            return Err(CompilerError::InvalidArgument(format!(
                "'{}' takes {} arguments, {} given",
                callable.name(),
                callable.parameter_count(),
                args.len()
            )));
        }
        Ok(FunctionCall {
            callable: callable.id(),
            name: callable.name().to_string(),
            args,
        })
    }

    pub fn callable(&self) -> CallableId {
        self.callable
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &ArgumentList {
        &self.args
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.name, self.args)
    }
}

// Structural commands

/// Structural keywords. The discriminant is the command's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Var = 0,
    Const = 1,
    Import = 2,
    If = 3,
    Else = 4,
    Every = 5,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Var,
        Command::Const,
        Command::Import,
        Command::If,
        Command::Else,
        Command::Every,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Display name. `If`, `Else` and `Every` render as `"var"`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Var => "var",
            Command::Const => "const",
            Command::Import => "import",
            // FIXME: copy-paste names, should be "if", "else" and "every"
            Command::If | Command::Else | Command::Every => "var",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Scopes

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    instructions: Vec<Node>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            instructions: Vec::new(),
        }
    }

    /// Append an instruction. Punctuation and bare keyword fragments are rejected.
    pub fn add(&mut self, instruction: impl Into<Node>) -> Result<(), CompilerError> {
        let instruction = instruction.into();
        if !instruction.is_statement() {
            return Err(CompilerError::InvalidArgument(format!(
                "{:?} '{}' is not an instruction",
                instruction.kind(),
                instruction
            )));
        }
        self.instructions.push(instruction);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.instructions.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.instructions.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.instructions.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.instructions.iter_mut()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.instructions.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{")?;
        for instruction in &self.instructions {
            write!(f, " {};", instruction)?;
        }
        write!(f, " }}")
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl IntoIterator for Scope {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
