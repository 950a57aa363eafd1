use std::path::PathBuf;

use clap::Args;
use csdecl_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Path to csdecl.toml (defaults to ./csdecl.toml)
    #[arg(short, long, default_value = "csdecl.toml")]
    pub config: PathBuf,

    /// Print the symbols as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::inspect(&manifest)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.types)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
