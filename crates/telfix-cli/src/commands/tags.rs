use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use telfix_core::diff_tag_keys_html;

#[derive(Debug, Args)]
pub struct DiffTagsArgs {
    pub old_key: String,
    pub new_key: String,
}

#[derive(Debug, Serialize)]
struct KeyDiffDto {
    old_key: String,
    new_key: String,
    old_html: String,
    new_html: String,
}

pub fn diff_keys(ctx: &Context, args: DiffTagsArgs) -> Result<()> {
    let (old_html, new_html) = diff_tag_keys_html(&args.old_key, &args.new_key);

    if ctx.json {
        return print_json(&KeyDiffDto {
            old_key: args.old_key,
            new_key: args.new_key,
            old_html,
            new_html,
        });
    }

    println!("old: {old_html}");
    println!("new: {new_html}");
    Ok(())
}
