//! The `check` and `print` commands.

use crate::output;
use recast_diagnostic::emit;
use recast_parser::parse;
use recast_syntax::TreePrinter;
use std::fs;

pub fn check(file: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (tree, diagnostics) = parse(&source);

    for diagnostic in &diagnostics {
        emit(&source, file, diagnostic);
    }

    if !diagnostics.is_empty() {
        output::error(&format!("{} error(s) found", diagnostics.len()));
        return Err("parse error".to_string());
    }

    output::success(&format!(
        "OK - {} declaration(s) parsed",
        tree.declarations.len()
    ));
    Ok(())
}

pub fn print(file: &str) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (tree, diagnostics) = parse(&source);

    for diagnostic in &diagnostics {
        emit(&source, file, diagnostic);
    }

    let mut printer = TreePrinter::new();
    tree.visit(&mut printer, 0);
    print!("{}", printer.finish());

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err("parse error".to_string())
    }
}
