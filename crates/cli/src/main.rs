//! mdgloss CLI - convert Google-style docstrings to Markdown
//!
//! Usage:
//!   mdgloss [OPTIONS] [FILE]
//!
//! Reads one docstring section from FILE (or stdin when FILE is absent or
//! `-`), preprocesses it, and prints the Markdown to stdout.

use std::env;
use std::fs;
use std::io::Read;
use std::process;

use mdgloss_core::{Preprocessor, PreprocessorConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let cli = parse_args(args)?;

    let input = match cli.file.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            buffer
        }
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path, e))?
        }
    };

    let mut config = match cli.config_path.as_deref() {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read '{}': {}", path, e))?;
            PreprocessorConfig::from_json(&raw).map_err(|e| e.to_string())?
        }
        None => PreprocessorConfig::default(),
    };
    if cli.anchors {
        config.header_anchor_enabled = true;
    }

    let result = Preprocessor::new(&config).preprocess_section(&input, cli.signature.as_deref());

    let mut output = String::new();
    if let Some(title) = &result.title {
        output.push_str(title);
        output.push_str("\n\n");
    }
    output.push_str(&result.body);
    output.push('\n');

    match cli.output.as_deref() {
        Some(path) => fs::write(path, output)
            .map_err(|e| format!("failed to write '{}': {}", path, e)),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
struct Cli {
    file: Option<String>,
    signature: Option<String>,
    config_path: Option<String>,
    output: Option<String>,
    anchors: bool,
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdgloss {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "--anchors" => cli.anchors = true,
            "--sig" => {
                i += 1;
                cli.signature = Some(expect_value(args, i, "--sig")?);
            }
            "--config" => {
                i += 1;
                cli.config_path = Some(expect_value(args, i, "--config")?);
            }
            "-o" | "--output" => {
                i += 1;
                cli.output = Some(expect_value(args, i, "--output")?);
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if cli.file.is_some() {
                    return Err("multiple input files specified".to_string());
                }
                cli.file = Some(arg.clone());
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn expect_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn print_help() {
    eprintln!(
        r#"mdgloss - Google-style docstring to Markdown converter

USAGE:
    mdgloss [OPTIONS] [FILE]

    Reads one docstring section from FILE (or stdin when FILE is absent
    or `-`) and prints the rewritten Markdown.

OPTIONS:
    --sig <SIGNATURE>    Signature rendered as the document title
    --anchors            Append {{#symbol}} heading anchors to titles
    --config <FILE>      Load a JSON configuration file
    -o, --output <FILE>  Write output to FILE instead of stdout
    -h, --help           Print help information
    -V, --version        Print version information

EXAMPLES:
    mdgloss docstring.txt
    mdgloss --sig 'frob(value, scale)' docstring.txt
    mdgloss --anchors --sig 'frob(value)' - < docstring.txt
"#
    );
}
