use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("expression is empty")]
    empty_expression,

    #[error("invalid character, '{0}', encountered")]
    invalid_character(char),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("inconsistent brackets")]
    inconsistent_brackets,

    #[error("not enough operators or operands")]
    insufficient_operands,

    #[error("invalid expression")]
    invalid_expression,

    #[error("division by zero")]
    division_by_zero,

    #[error("invalid operator '{0}'")]
    invalid_operator(String),

    #[error("variable, '{0}', is not defined")]
    undefined(String),

    #[error("could not read input: {0}")]
    unreadable_input(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;

impl From<std::io::Error> for CalcError {
    fn from(error: std::io::Error) -> Self {
        CalcError::unreadable_input(error.to_string())
    }
}
