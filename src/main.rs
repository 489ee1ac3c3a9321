use std::{fs, process};

use clap::{ArgAction, Parser};
use reckon::{
    calculate,
    interpreter::{
        calculator::{CalculatorOptions, ExpressionCalculator, Policy},
        lexer::expression_tokenizer,
        value::core::Variant,
    },
};
use tracing::Level;

/// reckon evaluates expressions over numbers, strings, dates and arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the expression from this file instead of the command line.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<String>,

    /// Binds a variable, as NAME=VALUE. The value is evaluated as an
    /// expression when it is one and taken as text otherwise.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Uses the strict coercion policy, which only widens numbers.
    #[arg(short, long)]
    strict: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(long)]
    tokens: bool,

    /// Prints the compiled postfix instructions before the result.
    #[arg(long)]
    postfix: bool,

    /// Logs compilation and evaluation; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let source = match (&args.file, &args.expression) {
        (Some(path), _) => fs::read_to_string(path).unwrap_or_else(|_| {
                               fail(&format!("Failed to read the input file '{path}'. Perhaps this file does not exist?"))
                           }),
        (None, Some(expression)) => expression.clone(),
        (None, None) => fail("Nothing to evaluate: pass an expression or --file"),
    };

    if args.tokens {
        for token in expression_tokenizer().tokenize(&source) {
            println!("{:>4}:{:<4} {:?} {:?}",
                     token.line(),
                     token.column(),
                     token.kind(),
                     token.value());
        }
        return;
    }

    let options = CalculatorOptions { policy: if args.strict { Policy::Strict } else { Policy::Permissive },
                                      ..CalculatorOptions::default() };
    let mut calculator = ExpressionCalculator::with_options(options);

    for binding in &args.vars {
        let Some((name, value)) = binding.split_once('=') else {
            fail(&format!("Invalid variable binding '{binding}', expected NAME=VALUE"));
        };
        calculator.variables_mut().insert(name.trim(), literal(value));
    }

    if let Err(e) = calculator.set_expression(&source) {
        fail(&e.to_string());
    }

    if args.postfix {
        for instruction in calculator.program().instructions() {
            println!("{instruction}");
        }
    }

    match calculator.evaluate() {
        Ok(value) => println!("{value}"),
        Err(e) => fail(&e.to_string()),
    }
}

/// Reads a `--var` value: a literal or expression if it evaluates, plain
/// text otherwise.
fn literal(value: &str) -> Variant {
    calculate(value).unwrap_or_else(|_| Variant::from(value))
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}
