use crate::error_handling::*;
use crate::parsing::*;
use crate::resolving::*;
use crate::scanning::*;
use log::debug;

/// Evaluates `expression` in a single pass over its tokens.
///
/// Names missing from `variables` are requested from `supplier` once and
/// then kept in `variables`, so later occurrences (and later calls with the
/// same map) reuse the value.
pub fn evaluate<F>(expression: &str, variables: &mut Bindings, mut supplier: F) -> Result<f64>
where
    F: FnMut(&str) -> Result<f64>,
{
    let mut source = StringScanner::new(expression);
    if source.is_empty() {
        return Err(CalcError::empty_expression);
    }

    let mut yard = Yard::new();
    source.advance()?;
    while let Some(token) = source.get_current() {
        handle_token(&mut yard, token, variables, &mut supplier)?;
        source.advance()?;
    }

    let value = yard.finish()?;
    debug!("'{}' evaluated to {}", expression.trim(), value);
    Ok(value)
}

fn handle_token<F>(yard: &mut Yard, token: &Token, variables: &mut Bindings, supplier: &mut F) -> Result<()>
where
    F: FnMut(&str) -> Result<f64>,
{
    use TokenKind::*;
    match token.kind {
        number => yard.add_number(&token.content),
        identifier => {
            let value = resolve(&token.content, variables, supplier)?;
            yard.add_value(value);
            Ok(())
        },
        operator => yard.add_operator(token.content.parse()?),
        prefix => {
            yard.add_prefix(token.content.parse()?);
            Ok(())
        },
        punctuation => match token.content.as_str() {
            "(" => {
                yard.add_left_paren();
                Ok(())
            },
            ")" => yard.add_right_paren(),
            other => Err(CalcError::invalid_operator(other.into())),
        },
    }
}
