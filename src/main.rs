use clap::Parser;
use std::io::{BufRead, Write};
use varcalc::*;

/// Evaluates arithmetic expressions, asking for the value of each unknown
/// variable the first time it appears.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate (if not provided, reads it from stdin)
    expression: Option<String>,

    /// Binds a variable up front, e.g. `--var x=2.5`
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    variables: Vec<(String, f64)>,

    /// Keeps reading expressions until an empty line, reusing variable values
    #[arg(short, long)]
    repeat: bool,

    /// Fails on unknown variables instead of asking for them
    #[arg(long)]
    no_prompt: bool,
}

fn parse_binding(text: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = text.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(format!("'{}' is not a variable name", name));
    }
    let value = value.trim().parse().map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.to_string(), value))
}

fn calculate<R: BufRead>(expression: &str, variables: &mut Bindings, input: &mut R, no_prompt: bool) -> Result<f64> {
    if no_prompt {
        return evaluate(expression, variables, undefined);
    }
    let mut prompter = Prompter::new(input, std::io::stdout());
    evaluate(expression, variables, |name: &str| prompter.ask(name))
}

fn report(result: Result<f64>) {
    match result {
        Ok(value) => println!("Result: {:?}", value),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut variables: Bindings = args.variables.into_iter().collect();
    let mut input = std::io::stdin().lock();

    if let Some(expression) = args.expression {
        report(calculate(&expression, &mut variables, &mut input, args.no_prompt));
        return;
    }

    loop {
        print!("Input expression: ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                report(Err(e.into()));
                break;
            },
        }

        if args.repeat && line.trim().is_empty() {
            break;
        }

        report(calculate(&line, &mut variables, &mut input, args.no_prompt));

        if !args.repeat {
            break;
        }
    }
}
