use crate::error_handling::*;
use std::io::{BufRead, Write};

/// Asks for variable values on `output` and reads the answers from `input`,
/// one number per line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self{input, output}
    }

    pub fn ask(&mut self, name: &str) -> Result<f64> {
        write!(self.output, "Input a value of variable {}: ", name)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CalcError::unreadable_input(format!("no value given for '{}'", name)));
        }
        let answer = line.trim();
        answer.parse().map_err(|_| CalcError::invalid_number(answer.into()))
    }
}
