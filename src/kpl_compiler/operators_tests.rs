// Operator catalog tests

#[cfg(test)]
mod tests {
    use crate::kpl_compiler::operators::{Operator, OperatorType, PriorityOrder};

    #[test]
    fn test_ids_follow_catalog_order() {
        for (index, op) in Operator::ALL.iter().enumerate() {
            assert_eq!(op.id() as usize, index, "{:?}", op);
        }
    }

    #[test]
    fn test_same_priority_left_to_right_is_equal() {
        assert_eq!(
            Operator::Addition.compare_priority(Operator::Subtraction),
            PriorityOrder::Equal
        );
        assert_eq!(
            Operator::Multiplication.compare_priority(Operator::Division),
            PriorityOrder::Equal
        );
    }

    #[test]
    fn test_same_priority_right_to_left_stops() {
        assert_eq!(
            Operator::Assignment.compare_priority(Operator::Assignment),
            PriorityOrder::Stop
        );
        assert_eq!(
            Operator::PrefixIncrement.compare_priority(Operator::UnaryMinus),
            PriorityOrder::Stop
        );
        assert_eq!(
            Operator::AssignmentAddition.compare_priority(Operator::Assignment),
            PriorityOrder::Stop
        );
    }

    #[test]
    fn test_tighter_pending_operator_continues() {
        assert_eq!(
            Operator::Multiplication.compare_priority(Operator::Addition),
            PriorityOrder::Continue
        );
        assert_eq!(
            Operator::Addition.compare_priority(Operator::Multiplication),
            PriorityOrder::Stop
        );
        assert_eq!(
            Operator::SuffixIncrement.compare_priority(Operator::Assignment),
            PriorityOrder::Continue
        );
    }

    #[test]
    fn test_priority_order_discriminants() {
        assert_eq!(PriorityOrder::Stop as i32, -1);
        assert_eq!(PriorityOrder::Equal as i32, 0);
        assert_eq!(PriorityOrder::Continue as i32, 1);
    }

    #[test]
    fn test_symbols_shared_across_positions() {
        assert_eq!(
            Operator::with_symbol("++"),
            vec![Operator::SuffixIncrement, Operator::PrefixIncrement]
        );
        assert_eq!(
            Operator::with_symbol("-"),
            vec![Operator::UnaryMinus, Operator::Subtraction]
        );
        assert!(Operator::with_symbol("%").is_empty());
    }

    #[test]
    fn test_find_prefers_prefix_form() {
        assert_eq!(
            Operator::find("++", OperatorType::Unary),
            Some(Operator::PrefixIncrement)
        );
        assert_eq!(
            Operator::find("--", OperatorType::Unary),
            Some(Operator::PrefixDecrement)
        );
        assert_eq!(
            Operator::find("-", OperatorType::Binary),
            Some(Operator::Subtraction)
        );
        assert_eq!(
            Operator::find("-", OperatorType::Unary),
            Some(Operator::UnaryMinus)
        );
        assert_eq!(Operator::find("*", OperatorType::Unary), None);
        assert_eq!(
            Operator::find("?=", OperatorType::Ternary),
            Some(Operator::TernaryConditional)
        );
    }

    #[test]
    fn test_type_queries() {
        assert!(Operator::BinaryNot.is_unary());
        assert!(Operator::BinaryAnd.is_binary());
        assert!(Operator::TernaryConditional.is_ternary());
        assert!(Operator::AssignmentDivision.is_assignment());
        assert!(Operator::SuffixDecrement.is_suffix());
        assert!(!Operator::PrefixDecrement.is_suffix());

        assert_eq!(Operator::UnaryMinus.arity(), 1);
        assert_eq!(Operator::EqualsTo.arity(), 2);
        assert_eq!(Operator::Assignment.arity(), 2);
        assert_eq!(Operator::TernaryConditional.arity(), 3);
    }

    #[test]
    fn test_conditional_operators() {
        let conditional: Vec<Operator> = Operator::ALL
            .iter()
            .copied()
            .filter(|op| op.is_conditional())
            .collect();
        assert_eq!(
            conditional,
            vec![
                Operator::GreaterThan,
                Operator::SmallerThan,
                Operator::GreaterEqualsThan,
                Operator::SmallerEqualsThan,
                Operator::EqualsTo,
                Operator::NotEqualsTo,
            ]
        );
        assert!(!Operator::BinaryAnd.is_conditional());
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(Operator::NotEqualsTo.to_string(), "!=");
        assert_eq!(Operator::AssignmentMultiplication.to_string(), "*=");
        assert_eq!(Operator::BinaryOr.to_string(), "||");
    }
}
