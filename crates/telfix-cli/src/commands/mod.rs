use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use telfix_core::SeparatorProfile;

pub mod completions;
pub mod report;
pub mod tags;
pub mod values;

pub struct Context {
    pub json: bool,
    pub locale: Option<String>,
    pub profile: SeparatorProfile,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
