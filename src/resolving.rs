use crate::error_handling::*;
use log::{debug, trace};
use std::collections::HashMap;

/// Variable values owned by the caller. Entries added while evaluating stay
/// for as long as the caller keeps the map.
pub type Bindings = HashMap<String, f64>;

/// Looks `name` up in `variables`, asking `supplier` only when it is unbound.
/// A supplied value is cached, so the supplier sees each name once per map.
pub fn resolve<F>(name: &str, variables: &mut Bindings, supplier: &mut F) -> Result<f64>
where
    F: FnMut(&str) -> Result<f64>,
{
    if let Some(&value) = variables.get(name) {
        trace!("'{}' already bound to {}", name, value);
        return Ok(value);
    }
    let value = supplier(name)?;
    debug!("bound '{}' to {}", name, value);
    variables.insert(name.to_owned(), value);
    Ok(value)
}

/// A supplier for callers that cannot provide values on demand.
pub fn undefined(name: &str) -> Result<f64> {
    Err(CalcError::undefined(name.into()))
}
