// AST node tests

#[cfg(test)]
mod tests {
    use crate::kpl_compiler::ast::{
        ArgumentList, Command, FunctionCall, Identifier, LiteralInteger, Node, NodeKind,
        Operation, Scope, Stopchar, TypeConstant,
    };
    use crate::kpl_compiler::code_space::{command_value, read_only};
    use crate::kpl_compiler::datatypes::DataType;
    use crate::kpl_compiler::error::CompilerError;
    use crate::kpl_compiler::functions::{CallableKind, CallableRegistry};
    use crate::kpl_compiler::operators::Operator;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    #[test]
    fn test_identifier_validation() {
        assert!(Identifier::is_valid("a"));
        assert!(Identifier::is_valid("_tmp1"));
        assert!(Identifier::is_valid("MyMana"));
        assert!(!Identifier::is_valid(""));
        assert!(!Identifier::is_valid("1abc"));
        assert!(!Identifier::is_valid("a-b"));
        assert!(!Identifier::is_valid("a b"));
        assert!(!Identifier::is_valid("é"));

        assert_eq!(
            Identifier::new("9lives"),
            Err(CompilerError::InvalidIdentifier("9lives".to_string()))
        );
    }

    #[test]
    fn test_literal_parsing() {
        assert_eq!(LiteralInteger::parse("42").unwrap().value(), 42);
        assert_eq!(LiteralInteger::parse("0x1A").unwrap().value(), 26);
        assert_eq!(LiteralInteger::parse("0X10").unwrap().value(), 16);
        assert_eq!(LiteralInteger::parse("017").unwrap().value(), 15);
        assert_eq!(LiteralInteger::parse("0").unwrap().value(), 0);
        assert!(matches!(
            LiteralInteger::parse("abc"),
            Err(CompilerError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_literal_rejects_sign() {
        for text in ["0x-1A", "0x+1A", "+5", "-5", "0-7"] {
            assert!(
                matches!(LiteralInteger::parse(text), Err(CompilerError::InvalidLiteral(_))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_literal_validation_does_not_check_octal_digits() {
        assert!(LiteralInteger::is_valid("089"));
        assert!(matches!(
            LiteralInteger::parse("089"),
            Err(CompilerError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_literal_validation() {
        assert!(LiteralInteger::is_valid("0x10"));
        assert!(LiteralInteger::is_valid("123"));
        assert!(!LiteralInteger::is_valid("0x1A"));
        assert!(!LiteralInteger::is_valid("0x"));
        assert!(!LiteralInteger::is_valid(""));
        assert!(!LiteralInteger::is_valid("12a"));
        assert!(!LiteralInteger::is_valid("-1"));
    }

    #[test]
    fn test_radix_detection() {
        assert_eq!(LiteralInteger::radix_of("10"), 10);
        assert_eq!(LiteralInteger::radix_of("0"), 10);
        assert_eq!(LiteralInteger::radix_of("010"), 8);
        assert_eq!(LiteralInteger::radix_of("0x10"), 16);
    }

    #[test]
    fn test_type_constant_rendering() {
        let blue = TypeConstant::new(command_value::BLUE);
        assert_eq!(blue.to_string(), "Blue");
        assert_eq!(blue.data_type(), Some(DataType::Team));

        // Valid spell without a symbolic name
        let burn = TypeConstant::new(read_only::BURN);
        assert_eq!(burn.data_type(), Some(DataType::Spell));
        assert_eq!(burn.to_string(), read_only::BURN.to_string());

        let unknown = TypeConstant::new(5);
        assert_eq!(unknown.data_type(), None);
        assert_eq!(unknown.to_string(), "5");
    }

    #[test]
    fn test_type_constant_from_name() {
        let swarm = TypeConstant::from_name("Swarm").unwrap();
        assert_eq!(swarm.value(), read_only::INSECT_PLAGUE);
        assert_eq!(swarm.to_string(), "Swarm");
        assert!(TypeConstant::from_name("Nope").is_none());
        assert!(TypeConstant::is_valid_name("Yellow"));
        assert!(TypeConstant::is_valid_code(read_only::SHAMAN));
        assert!(!TypeConstant::is_valid_code(0));
    }

    #[test]
    fn test_stopchar() {
        assert_eq!(Stopchar::from_char(';'), Some(Stopchar::Semicolon));
        assert_eq!(Stopchar::from_char('.'), None);
        assert_eq!(Stopchar::Colon.to_string(), ":");
    }

    #[test]
    fn test_unary_rendering() {
        let suffix = Operation::unary(Operator::SuffixIncrement, ident("x")).unwrap();
        assert_eq!(suffix.to_string(), "x++");
        let prefix = Operation::unary(Operator::PrefixDecrement, ident("x")).unwrap();
        assert_eq!(prefix.to_string(), "--x");
        let minus = Operation::unary(Operator::UnaryMinus, LiteralInteger::new(3)).unwrap();
        assert_eq!(minus.to_string(), "-3");
        assert!(minus.is_unary());
        assert_eq!(minus.operand_count(), 1);
    }

    #[test]
    fn test_binary_and_nested_rendering() {
        let product =
            Operation::binary(Operator::Multiplication, ident("b"), LiteralInteger::new(2)).unwrap();
        let sum = Operation::binary(Operator::Addition, ident("a"), product).unwrap();
        assert_eq!(sum.to_string(), "a + b * 2");
        assert_eq!(sum.operator(), Operator::Addition);
        assert!(sum.operand(1).unwrap().is(NodeKind::Operation));
    }

    #[test]
    fn test_ternary_and_assignment_rendering() {
        let cond = Operation::binary(Operator::GreaterThan, ident("a"), LiteralInteger::new(0))
            .unwrap();
        let pick = Operation::ternary(
            Operator::TernaryConditional,
            cond,
            ident("a"),
            LiteralInteger::new(0),
        )
        .unwrap();
        assert_eq!(pick.to_string(), "a > 0 ? a : 0");

        let assign = Operation::assignment(Operator::AssignmentAddition, ident("a"), pick).unwrap();
        assert_eq!(assign.to_string(), "a += a > 0 ? a : 0");
        assert!(assign.is_assignment());
        assert_eq!(assign.operand(0).and_then(Node::as_identifier), Some(&ident("a")));
    }

    #[test]
    fn test_operation_rejects_wrong_operator_type() {
        let result = Operation::binary(Operator::UnaryMinus, ident("a"), ident("b"));
        assert!(matches!(result, Err(CompilerError::BadOperation(_))));
        let result = Operation::unary(Operator::Assignment, ident("a"));
        assert!(matches!(result, Err(CompilerError::BadOperation(_))));
    }

    #[test]
    fn test_operation_rejects_non_value_operand() {
        let result = Operation::binary(Operator::Addition, ident("a"), Stopchar::Comma);
        assert!(matches!(result, Err(CompilerError::BadOperation(_))));
        let result = Operation::unary(Operator::BinaryNot, Command::Var);
        assert!(matches!(result, Err(CompilerError::BadOperation(_))));
    }

    #[test]
    fn test_argument_list() {
        let mut args = ArgumentList::new();
        assert_eq!(args.to_string(), "()");
        args.add(ident("a")).unwrap();
        args.add(LiteralInteger::new(7)).unwrap();
        assert_eq!(args.to_string(), "(a, 7)");
        assert_eq!(args.len(), 2);

        assert!(matches!(
            args.add(Operator::Addition),
            Err(CompilerError::InvalidArgument(_))
        ));
        assert!(matches!(
            args.add(Stopchar::Semicolon),
            Err(CompilerError::InvalidArgument(_))
        ));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_function_call_arity() {
        let mut registry = CallableRegistry::with_builtins();
        let getter = registry.get("GAME_TURN").unwrap();
        let call = FunctionCall::new(getter, ArgumentList::new()).unwrap();
        assert_eq!(call.to_string(), "GAME_TURN()");
        assert_eq!(call.callable(), getter.id());

        let mut args = ArgumentList::new();
        args.add(LiteralInteger::new(1)).unwrap();
        assert!(matches!(
            FunctionCall::new(getter, args.clone()),
            Err(CompilerError::InvalidArgument(_))
        ));

        registry.register(
            "AddMana",
            vec![("amount".to_string(), DataType::Integer)],
            false,
            CallableKind::Command(0),
        );
        let add_mana = registry.get("AddMana").unwrap();
        let call = FunctionCall::new(add_mana, args).unwrap();
        assert_eq!(call.to_string(), "AddMana(1)");
        assert_eq!(call.arguments().len(), 1);
    }

    #[test]
    fn test_node_equality() {
        let a: Node = ident("a").into();
        assert_eq!(a, Node::from(ident("a")));
        assert_ne!(a, Node::from(ident("b")));
        assert_ne!(Node::from(LiteralInteger::new(1)), Node::from(TypeConstant::new(1)));
        assert_eq!(Node::from(Operator::Addition), Node::Operator(Operator::Addition));
        assert_ne!(Node::from(Operator::Addition), Node::from(Operator::Subtraction));
        assert_ne!(
            Node::Arguments(ArgumentList::new()),
            Node::CommandArguments(ArgumentList::new())
        );
    }

    #[test]
    fn test_statement_kinds() {
        assert!(Node::from(ident("a")).is_statement());
        assert!(Node::from(LiteralInteger::new(1)).is_statement());
        assert!(Node::from(Scope::new()).is_statement());
        assert!(Node::Arguments(ArgumentList::new()).is_statement());
        assert!(!Node::CommandArguments(ArgumentList::new()).is_statement());
        assert!(!Node::from(Command::If).is_statement());
        assert!(!Node::from(Stopchar::Comma).is_statement());
        assert!(!Node::from(Operator::Division).is_statement());

        let node = Node::from(Command::Else);
        assert!(node.is_any(&[NodeKind::Scope, NodeKind::Command]));
        assert!(!node.is_any(&[NodeKind::Scope]));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Var.to_string(), "var");
        assert_eq!(Command::Const.to_string(), "const");
        assert_eq!(Command::Import.to_string(), "import");
        for (index, command) in Command::ALL.iter().enumerate() {
            assert_eq!(command.id() as usize, index);
        }
    }

    // Known discrepancy kept for compatibility with existing tooling
    #[test]
    fn test_command_if_else_every_render_as_var() {
        assert_eq!(Command::If.to_string(), "var");
        assert_eq!(Command::Else.to_string(), "var");
        assert_eq!(Command::Every.to_string(), "var");
        assert_ne!(Command::If, Command::Var);
    }

    #[test]
    fn test_scope() {
        let mut scope = Scope::new();
        assert_eq!(scope.to_string(), "{}");
        assert!(scope.is_empty());

        scope
            .add(Operation::unary(Operator::SuffixIncrement, ident("i")).unwrap())
            .unwrap();
        scope
            .add(
                Operation::assignment(Operator::Assignment, ident("a"), LiteralInteger::new(1))
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(scope.len(), 2);
        assert_eq!(scope.to_string(), "{ i++; a = 1; }");

        if let Some(first) = scope.get_mut(0) {
            *first = ident("j").into();
        }
        assert_eq!(scope.get(0), Some(&Node::from(ident("j"))));

        let mut outer = Scope::new();
        outer.add(scope).unwrap();
        assert_eq!(outer.to_string(), "{ { j; a = 1; }; }");
        assert_eq!(outer.iter().count(), 1);
    }

    #[test]
    fn test_scope_rejects_non_instructions() {
        let mut scope = Scope::new();
        assert!(matches!(
            scope.add(Stopchar::Semicolon),
            Err(CompilerError::InvalidArgument(_))
        ));
        assert!(matches!(
            scope.add(Operator::Addition),
            Err(CompilerError::InvalidArgument(_))
        ));
        assert!(matches!(
            scope.add(Command::Every),
            Err(CompilerError::InvalidArgument(_))
        ));
        assert!(scope.is_empty());

        scope.add(Scope::new()).unwrap();
        scope.add(ident("x")).unwrap();
        assert_eq!(scope.len(), 2);
    }
}
