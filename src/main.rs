use std::{env, process, rc::Rc, sync::Arc};

use opgraph::{
    operator::{Operator, OperatorDescriptor, OperatorRegistry, TypeValidationError, registry},
    runtime::{
        EvaluationError, Value, ValueType, VariableRef,
        value_type::{ANY, LIST},
        variable::{Constant, Deferred, OperatorVariable},
    },
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Expression tree accepted by `opgraph eval`, e.g.
/// `{"apply":{"op":"+","args":[{"integer":3},{"integer":4}]}}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Expr {
    Boolean(bool),
    Integer(i32),
    Double(f64),
    String(String),
    List(Vec<Expr>),
    Apply { op: String, args: Vec<Expr> },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid expression: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
    #[error("type error: {0}")]
    Validation(#[from] TypeValidationError),
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("list item {index} is {got}, but the list holds {expected}")]
    MixedList {
        index: usize,
        expected: &'static ValueType,
        got: &'static ValueType,
    },
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let json = args.iter().any(|arg| arg == "--json");
    args.retain(|arg| arg != "--verbose" && arg != "--json");

    init_logging(verbose);

    if args.len() < 2 {
        print_help();
        return;
    }

    let registry = registry::global();
    let result = match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
            Ok(())
        }
        "list" => list_operators(registry, json),
        "describe" => {
            if args.len() < 3 {
                eprintln!("Usage: opgraph describe <symbol>");
                return;
            }
            describe_operator(registry, &args[2])
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: opgraph eval '<json expression>'");
                return;
            }
            eval_expression(registry, &args[2], json)
        }
        other => {
            eprintln!("Error: unknown command `{}`", other);
            print_help();
            process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help() {
    println!(
        "\
opgraph CLI

Usage:
  opgraph list [--json]
  opgraph describe <symbol>
  opgraph eval '<json expression>' [--json]

Expressions:
  {{\"integer\": 3}}  {{\"double\": 1.5}}  {{\"boolean\": true}}  {{\"string\": \"a\"}}
  {{\"list\": [<expr>, ...]}}
  {{\"apply\": {{\"op\": \"<symbol>\", \"args\": [<expr>, ...]}}}}

Flags:
  --json             Print machine-readable output
  --verbose          Log registry and evaluation events (RUST_LOG overrides)
"
    );
}

fn list_operators(registry: &OperatorRegistry, json: bool) -> Result<(), CliError> {
    let descriptors = registry.describe();
    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }
    for descriptor in &descriptors {
        println!("{}", signature_line(descriptor));
    }
    Ok(())
}

fn signature_line(descriptor: &OperatorDescriptor) -> String {
    format!(
        "{:<24} {:<6} ({}) -> {}",
        descriptor.unique_name,
        descriptor.symbol,
        descriptor.inputs.join(", "),
        descriptor.output
    )
}

fn describe_operator(registry: &OperatorRegistry, symbol: &str) -> Result<(), CliError> {
    let operator = registry
        .get_by_symbol(symbol)
        .or_else(|| registry.get_by_name(symbol))
        .ok_or_else(|| CliError::UnknownOperator(symbol.to_string()))?;
    println!("{}", serde_json::to_string_pretty(&operator.descriptor())?);
    Ok(())
}

fn eval_expression(registry: &OperatorRegistry, source: &str, json: bool) -> Result<(), CliError> {
    let expr: Expr = serde_json::from_str(source)?;
    let variable = build(registry, expr)?;
    let declared = variable.value_type();
    let value = variable.value()?;
    debug!(declared = %declared, actual = %value.value_type(), "evaluated expression");

    if json {
        let output = serde_json::json!({
            "value": value.to_string(),
            "type": value.value_type(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} : {}", value, value.value_type());
    }
    Ok(())
}

/// Turns an expression tree into a graph of variables, validating each node.
fn build(registry: &OperatorRegistry, expr: Expr) -> Result<VariableRef, CliError> {
    let variable: VariableRef = match expr {
        Expr::Boolean(v) => Constant::shared(v),
        Expr::Integer(v) => Constant::shared(v),
        Expr::Double(v) => Constant::shared(v),
        Expr::String(v) => Constant::shared(v),
        Expr::List(items) => {
            let items = items
                .into_iter()
                .map(|item| build(registry, item))
                .collect::<Result<Vec<_>, _>>()?;
            let element_type = list_element_type(&items)?;
            Deferred::shared(&LIST, move || {
                let values = items
                    .iter()
                    .map(|item| item.value())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(element_type, values))
            })
        }
        Expr::Apply { op, args } => {
            let operator = lookup(registry, &op)?;
            let inputs = args
                .into_iter()
                .map(|arg| build(registry, arg))
                .collect::<Result<Vec<_>, _>>()?;
            Rc::new(OperatorVariable::checked(operator, inputs)?)
        }
    };
    Ok(variable)
}

/// The one type shared by every item; an empty list holds `ANY`.
fn list_element_type(items: &[VariableRef]) -> Result<&'static ValueType, CliError> {
    let Some(first) = items.first() else {
        return Ok(&ANY);
    };
    let expected = first.value_type();
    for (index, item) in items.iter().enumerate().skip(1) {
        let got = item.value_type();
        if got != expected {
            return Err(CliError::MixedList {
                index,
                expected,
                got,
            });
        }
    }
    Ok(expected)
}

fn lookup(registry: &OperatorRegistry, op: &str) -> Result<Arc<Operator>, CliError> {
    registry
        .get_by_symbol(op)
        .or_else(|| registry.get_by_name(op))
        .cloned()
        .ok_or_else(|| CliError::UnknownOperator(op.to_string()))
}
