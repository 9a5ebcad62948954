use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::io;
use std::path::PathBuf;
use telfix_core::{
    diff_tag_keys_html, diff_values_html, FieldRecordDto, RenderedRecordDto, ReportOutputDto,
};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// JSON file with the validator's flagged records
    pub file: PathBuf,
}

pub fn render_report(ctx: &Context, args: ReportArgs) -> Result<()> {
    let contents = match fs::read_to_string(&args.file) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(not_found(format!("record file {}", args.file.display())));
        }
        Err(source) => {
            return Err(anyhow::Error::new(source)
                .context(format!("read record file {}", args.file.display())));
        }
    };
    let records: Vec<FieldRecordDto> = serde_json::from_str(&contents)
        .map_err(|source| invalid_input(format!("parse {}: {source}", args.file.display())))?;
    debug!(count = records.len(), "records loaded");

    let entries: Vec<RenderedRecordDto> = records
        .into_iter()
        .map(|record| render_record(ctx, record))
        .collect();

    if ctx.json {
        return print_json(&ReportOutputDto {
            generated_at: Utc::now().timestamp(),
            locale: ctx.locale.clone(),
            entries,
        });
    }

    for entry in &entries {
        let id = entry.record.id.as_deref().unwrap_or("-");
        println!("{} [{}]", entry.record.key, id);
        if let (Some(old_key_html), Some(new_key_html)) =
            (entry.old_key_html.as_deref(), entry.new_key_html.as_deref())
        {
            println!("  key old: {old_key_html}");
            println!("  key new: {new_key_html}");
        }
        println!("  old: {}", entry.old_html.as_deref().unwrap_or("(none)"));
        println!("  new: {}", entry.new_html.as_deref().unwrap_or("(none)"));
    }
    Ok(())
}

fn render_record(ctx: &Context, record: FieldRecordDto) -> RenderedRecordDto {
    let (old_html, new_html) = diff_values_html(
        record.original.as_deref(),
        record.suggested.as_deref(),
        ctx.profile,
    );
    let (old_key_html, new_key_html) = match record.suggested_key.as_deref() {
        Some(new_key) if new_key != record.key => {
            let (old, new) = diff_tag_keys_html(&record.key, new_key);
            (Some(old), Some(new))
        }
        _ => (None, None),
    };
    RenderedRecordDto {
        record,
        old_html,
        new_html,
        old_key_html,
        new_key_html,
    }
}
