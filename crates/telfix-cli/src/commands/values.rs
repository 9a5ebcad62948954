use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use telfix_core::{diff_values, render_runs, DiffRun};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Raw field value; pass an empty string for a missing field
    pub original: String,
    /// Normalized replacement; pass an empty string for a removal
    pub suggested: String,
}

#[derive(Debug, Serialize)]
struct ValueDiffDto {
    old: Option<Vec<DiffRun>>,
    new: Option<Vec<DiffRun>>,
    old_html: Option<String>,
    new_html: Option<String>,
}

pub fn diff_field(ctx: &Context, args: DiffArgs) -> Result<()> {
    let field = diff_values(
        present(&args.original),
        present(&args.suggested),
        ctx.profile,
    );
    let old_html = field.old.as_deref().map(render_runs);
    let new_html = field.new.as_deref().map(render_runs);

    if ctx.json {
        return print_json(&ValueDiffDto {
            old: field.old,
            new: field.new,
            old_html,
            new_html,
        });
    }

    println!("old: {}", old_html.as_deref().unwrap_or("(none)"));
    println!("new: {}", new_html.as_deref().unwrap_or("(none)"));
    Ok(())
}

fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
