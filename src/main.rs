use std::{fs, process::ExitCode};

use clap::Parser;
use doppio::{
    error::Error,
    interpreter::{environment::Environment, lexer::tokenize},
    parse,
};
use log::info;

/// doppio evaluates arithmetic expressions with variables, factorials and a
/// library of math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells doppio to read expressions from a file, one per line, instead of
    /// evaluating `contents` directly. Blank lines and lines starting with `#`
    /// are skipped.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before evaluation, e.g. `-D x=2.5`. May be repeated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_binding)]
    defines: Vec<(String, f64)>,

    /// Starts from an empty environment instead of the builtin math library.
    #[arg(long)]
    no_builtins: bool,

    /// Prints the folded expression tree instead of evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(long)]
    tokens: bool,

    contents: String,
}

/// Parses a `NAME=VALUE` command line binding.
fn parse_binding(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

/// Reads the expression file at `path`.
fn read_script(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read the input file '{path}': {e}."))
}

fn run_line(line: &str, args: &Args, env: &Environment) -> Result<(), Error> {
    if args.tokens {
        let rendered: Vec<String> = tokenize(line).iter()
                                                  .map(|t| format!("{}({})", t.kind, t.text(line)))
                                                  .collect();
        println!("{}", rendered.join(" "));
        return Ok(());
    }

    let expr = parse(line)?;
    if args.tree {
        println!("{expr}");
    } else {
        println!("{}", env.eval(&expr)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut env = if args.no_builtins { Environment::new() } else { Environment::with_builtins() };
    for (name, value) in &args.defines {
        env.set_variable(name.clone(), *value);
    }

    let script = if args.file {
        match read_script(&args.contents) {
            Ok(script) => script,
            Err(message) => {
                eprintln!("{message}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let lines: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|l| !l.is_empty() && !l.starts_with('#'))
              .collect()
    } else {
        vec![script.as_str()]
    };
    info!("evaluating {} expression(s)", lines.len());

    let mut status = ExitCode::SUCCESS;
    for line in lines {
        if let Err(e) = run_line(line, &args, &env) {
            eprintln!("{e}");
            status = ExitCode::FAILURE;
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_reports_the_cause() {
        let path = "no/such/dir/expressions.txt";
        let message = read_script(path).unwrap_err();
        let cause = fs::read_to_string(path).unwrap_err().to_string();

        assert!(message.contains(path), "{message}");
        assert!(message.contains(&cause), "{message}");
    }

    #[test]
    fn bindings_are_name_value_pairs() {
        assert_eq!(parse_binding("x=2.5"), Ok(("x".to_string(), 2.5)));
        assert_eq!(parse_binding(" y = 3 "), Ok(("y".to_string(), 3.0)));
        assert!(parse_binding("x").is_err());
        assert!(parse_binding("x=abc").is_err());
    }
}
