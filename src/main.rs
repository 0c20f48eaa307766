//! linemark CLI - convert a Markdown file to an HTML fragment file.
//!
//! Usage: `linemark <input> <output>`. The input is read in full, converted,
//! and the fragment written to the output path (overwriting it). Nothing is
//! written on failure: conversion happens entirely in memory first.

use std::fs;
use std::process::ExitCode;

use anyhow::Context;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: linemark <input> <output>");
        return ExitCode::from(2);
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("linemark: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &str, output_path: &str) -> anyhow::Result<()> {
    let source = fs::read_to_string(input_path)
        .with_context(|| format!("cannot read input file `{input_path}`"))?;

    let html = linemark::to_html(&source);

    fs::write(output_path, html)
        .with_context(|| format!("cannot write output file `{output_path}`"))?;

    Ok(())
}
