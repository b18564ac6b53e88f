#![allow(nonstandard_style)]

pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod prompting;
pub mod resolving;
pub mod scanning;

pub use error_handling::{CalcError, Result};
pub use evaluating::evaluate;
pub use prompting::Prompter;
pub use resolving::{undefined, Bindings};
