use crate::error_handling::*;
use log::trace;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    negative,
}

impl UnaryOperator {
    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            negative => -value,
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use UnaryOperator::*;
        match s {
            "-" => Ok(negative),
            _ => Err(CalcError::invalid_operator(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    /// Division fails on an exact zero divisor; no epsilon.
    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;

        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            _ => Err(CalcError::invalid_operator(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    unary(UnaryOperator),
    binary(BinaryOperator),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punctuation {
    paren,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackNode {
    operator(Operator),
    punctuation(Punctuation),
}

impl StackNode {
    fn precedence(&self) -> i32 {
        use Operator::*;
        use BinaryOperator::*;
        match self {
            Self::punctuation(_) => 0,
            Self::operator(binary(operator)) =>
                match operator {
                    addition | subtraction => 1,
                    multiplication | division => 2,
                },
            Self::operator(unary(_)) => 3,
        }
    }

    fn is_paren(&self) -> bool {
        matches!(self, Self::punctuation(Punctuation::paren))
    }
}

/// The two stacks of the shunting-yard: operands waiting to be combined and
/// operators (or open brackets) waiting to be applied.
pub struct Yard {
    operands: Vec<f64>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self{operands: Vec::new(), stack: Vec::new()}
    }

    pub fn add_number(&mut self, content: &str) -> Result<()> {
        let value = content.parse().map_err(|_| CalcError::invalid_number(content.into()))?;
        self.add_value(value);
        Ok(())
    }

    pub fn add_value(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Reduces every pending operator that binds at least as tightly, which
    /// makes equal precedence left-associative.
    pub fn add_operator(&mut self, operator: BinaryOperator) -> Result<()> {
        let node = StackNode::operator(Operator::binary(operator));
        let precedence = node.precedence();
        while let Some(top) = self.stack.last() {
            if top.is_paren() || precedence > top.precedence() {
                break;
            }
            self.reduce()?;
        }
        self.stack.push(node);
        Ok(())
    }

    // A prefix has no left operand, so nothing on the stack can be reduced yet.
    pub fn add_prefix(&mut self, operator: UnaryOperator) {
        self.stack.push(StackNode::operator(Operator::unary(operator)));
    }

    pub fn add_left_paren(&mut self) {
        self.stack.push(StackNode::punctuation(Punctuation::paren));
    }

    pub fn add_right_paren(&mut self) -> Result<()> {
        if !self.stack.iter().any(StackNode::is_paren) {
            return Err(CalcError::inconsistent_brackets);
        }
        while let Some(is_paren) = self.stack.last().map(StackNode::is_paren) {
            if is_paren {
                self.stack.pop();
                return Ok(());
            }
            self.reduce()?;
        }
        Err(CalcError::inconsistent_brackets)
    }

    /// Pops one operator and its operands, applies it and pushes the result.
    pub fn reduce(&mut self) -> Result<()> {
        let operator = match self.stack.pop() {
            Some(StackNode::operator(operator)) => operator,
            Some(StackNode::punctuation(_)) => return Err(CalcError::invalid_operator("(".into())),
            None => return Err(CalcError::insufficient_operands),
        };

        let value = match operator {
            Operator::unary(operator) => {
                let value = self.operands.pop().ok_or(CalcError::insufficient_operands)?;
                operator.call(value)
            },
            Operator::binary(operator) => {
                let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
                    return Err(CalcError::insufficient_operands);
                };
                operator.call(left, right)?
            },
        };
        trace!("reduced {:?} to {}", operator, value);
        self.operands.push(value);
        Ok(())
    }

    /// Drains the operator stack and yields the single remaining operand.
    pub fn finish(&mut self) -> Result<f64> {
        if self.stack.iter().any(StackNode::is_paren) {
            return Err(CalcError::inconsistent_brackets);
        }
        while !self.stack.is_empty() {
            self.reduce()?;
        }
        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(CalcError::invalid_expression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use BinaryOperator::*;

    #[test]
    fn arithmetic_core() {
        assert_eq!(addition.call(2.0, 3.0), Ok(5.0));
        assert_eq!(subtraction.call(2.0, 3.0), Ok(-1.0));
        assert_eq!(multiplication.call(2.0, 3.0), Ok(6.0));
        assert_eq!(division.call(3.0, 4.0), Ok(0.75));
        assert_eq!(UnaryOperator::negative.call(2.5), -2.5);
    }

    #[test]
    fn division_by_exact_zero_only() {
        assert_eq!(division.call(1.0, 0.0), Err(CalcError::division_by_zero));
        assert_eq!(division.call(1.0, -0.0), Err(CalcError::division_by_zero));
        assert_eq!(division.call(1.0, 0.5), Ok(2.0));
        assert_eq!(division.call(0.0, 2.0), Ok(0.0));
    }

    #[test]
    fn operators_parse_from_symbols() {
        assert_eq!("*".parse::<BinaryOperator>(), Ok(multiplication));
        assert_eq!("-".parse::<UnaryOperator>(), Ok(UnaryOperator::negative));
        assert_eq!("^".parse::<BinaryOperator>(), Err(CalcError::invalid_operator("^".into())));
        assert_eq!("+".parse::<UnaryOperator>(), Err(CalcError::invalid_operator("+".into())));
    }

    #[test]
    fn precedence_ranks() {
        let rank = |operator| StackNode::operator(Operator::binary(operator)).precedence();
        assert_eq!(rank(addition), rank(subtraction));
        assert_eq!(rank(multiplication), rank(division));
        assert!(rank(addition) < rank(multiplication));
        assert!(StackNode::operator(Operator::unary(UnaryOperator::negative)).precedence() > rank(division));
        assert_eq!(StackNode::punctuation(Punctuation::paren).precedence(), 0);
    }

    #[test]
    fn reduce_takes_right_operand_first() {
        let mut yard = Yard::new();
        yard.add_value(10.0);
        yard.add_value(4.0);
        yard.stack.push(StackNode::operator(Operator::binary(subtraction)));
        yard.reduce().unwrap();
        assert_eq!(yard.operands, vec![6.0]);
        assert!(yard.stack.is_empty());
    }

    #[test]
    fn reduce_needs_an_operator_and_two_operands() {
        let mut yard = Yard::new();
        yard.add_value(1.0);
        assert_eq!(yard.reduce(), Err(CalcError::insufficient_operands));
        yard.stack.push(StackNode::operator(Operator::binary(addition)));
        assert_eq!(yard.reduce(), Err(CalcError::insufficient_operands));
    }

    #[test]
    fn equal_precedence_reduces_left_to_right() {
        let mut yard = Yard::new();
        yard.add_value(10.0);
        yard.add_operator(subtraction).unwrap();
        yard.add_value(4.0);
        yard.add_operator(subtraction).unwrap();
        assert_eq!(yard.operands, vec![6.0]);
        yard.add_value(3.0);
        assert_eq!(yard.finish(), Ok(3.0));
    }

    #[test]
    fn brackets_must_balance() {
        let mut yard = Yard::new();
        yard.add_value(4.0);
        yard.add_operator(multiplication).unwrap();
        assert_eq!(yard.add_right_paren(), Err(CalcError::inconsistent_brackets));

        let mut yard = Yard::new();
        yard.add_left_paren();
        yard.add_value(4.0);
        assert_eq!(yard.finish(), Err(CalcError::inconsistent_brackets));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let mut yard = Yard::new();
        assert_eq!(yard.add_number("1.2.3"), Err(CalcError::invalid_number("1.2.3".into())));
        assert_eq!(yard.add_number("-"), Err(CalcError::invalid_number("-".into())));
        assert_eq!(yard.add_number("-2.5"), Ok(()));
        assert_eq!(yard.finish(), Ok(-2.5));
    }

    #[test]
    fn leftover_operands_are_invalid() {
        let mut yard = Yard::new();
        yard.add_value(1.0);
        yard.add_value(2.0);
        assert_eq!(yard.finish(), Err(CalcError::invalid_expression));
        assert_eq!(Yard::new().finish(), Err(CalcError::invalid_expression));
    }
}
