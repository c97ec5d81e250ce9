//! `cfc_parser`: grammar-based collaborator for `parsercfc`.
//!
//! Speaks the stdout protocol the Driver expects (§6): a JSON array of
//! names per file, or `--batch` line-delimited JSON objects. Deliberately
//! knows nothing about the textual scanner or macro model in
//! `parsercfc-core` — it is meant to be swappable for any binary
//! implementing the same protocol.

mod errors;
mod visitor;

use errors::{TsParserError, TsParserResult};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tree_sitter::Parser;
use visitor::collect_function_names;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> TsParserResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err(TsParserError::NoInput);
    }

    if args[0] == "--batch" {
        run_batch(&args[1..])
    } else {
        run_single(&args[0])
    }
}

fn build_parser() -> TsParserResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c::LANGUAGE.into())
        .map_err(TsParserError::Grammar)?;
    Ok(parser)
}

fn parse_file(parser: &mut Parser, path: &Path) -> TsParserResult<Vec<String>> {
    let source = fs::read(path).map_err(|source| TsParserError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| TsParserError::NoTree(path.to_path_buf()))?;
    Ok(collect_function_names(&source, tree.root_node()))
}

fn run_single(path_str: &str) -> TsParserResult<()> {
    let path = PathBuf::from(path_str);
    let mut parser = build_parser()?;
    let names = parse_file(&mut parser, &path)?;
    println!("{}", serde_json::to_string(&names)?);
    Ok(())
}

#[derive(Serialize)]
struct BatchLine<'a> {
    path: &'a str,
    fc: Vec<String>,
}

fn run_batch(paths: &[String]) -> TsParserResult<()> {
    let mut parser = build_parser()?;
    for path_str in paths {
        let path = PathBuf::from(path_str);
        match parse_file(&mut parser, &path) {
            Ok(names) => {
                let line = BatchLine {
                    path: path_str,
                    fc: names,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
            Err(err) => {
                log::warn!("{path_str}: {err}");
            }
        }
    }
    Ok(())
}
