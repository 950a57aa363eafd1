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
pub struct RenderCommand {
    /// Path to csdecl.toml (defaults to ./csdecl.toml)
    #[arg(short, long, default_value = "csdecl.toml")]
    pub config: PathBuf,

    /// Write the C# source to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = ops::render(&manifest, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
