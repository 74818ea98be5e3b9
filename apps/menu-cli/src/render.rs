//! # Output Rendering
//!
//! Writes a [`SolveResult`] (or a bare menu listing) as text or JSON.
//!
//! ## Text Layout
//! ```text
//! Goal: $10.00
//! 9 combinations
//!
//!   1. carrots + ice cream                    $1.00 + $9.00
//!   2. fries + coffee                         $2.00 + $8.00
//!   ...
//! ```

use std::io::Write;

use serde::Serialize;

use menu_core::{Item, Money, Outcome, SolveResult};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Renders a solve result.
pub fn render_result<W: Write>(out: &mut W, result: &SolveResult, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Text => write_result_text(out, result),
    }
}

/// Renders the parsed menu: goal and items in price order.
pub fn render_menu<W: Write>(
    out: &mut W,
    goal: Money,
    items: &[Item],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct MenuView<'a> {
                goal: Money,
                items: &'a [Item],
            }
            write_json(out, &MenuView { goal, items })
        }
        OutputFormat::Text => {
            writeln!(out, "Goal: {}", goal)?;
            writeln!(out, "{} items", items.len())?;
            writeln!(out)?;
            let width = name_width(items);
            for item in items {
                writeln!(out, "  {:<width$}  {:>10}", item.name, item.price.to_string())?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_result_text<W: Write>(out: &mut W, result: &SolveResult) -> CliResult<()> {
    if let (Outcome::Malformed, Some(error)) = (result.outcome(), &result.error) {
        writeln!(out, "{}", error)?;
        return Ok(());
    }

    writeln!(out, "Goal: {}", result.goal)?;
    writeln!(out, "{} {}", result.count, plural(result.count))?;

    if let Some(error) = &result.error {
        writeln!(out, "{}", error)?;
        return Ok(());
    }

    if let Some(solution) = &result.solution {
        writeln!(out)?;
        let width = solution
            .iter()
            .map(|subset| names(subset).len())
            .max()
            .unwrap_or(0);
        for (n, subset) in solution.iter().enumerate() {
            writeln!(
                out,
                "{:>4}. {:<width$}  {}",
                n + 1,
                names(subset),
                prices(subset)
            )?;
        }
    }
    Ok(())
}

fn plural(count: u64) -> &'static str {
    if count == 1 {
        "combination"
    } else {
        "combinations"
    }
}

fn names(subset: &[Item]) -> String {
    subset
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn prices(subset: &[Item]) -> String {
    subset
        .iter()
        .map(|item| item.price.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn name_width(items: &[Item]) -> usize {
    items.iter().map(|item| item.name.len()).max().unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
