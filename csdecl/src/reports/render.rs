//! Render command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Result of rendering a manifest.
#[derive(Debug)]
pub enum RenderReport {
    /// Source to print on stdout.
    Printed { source: String },
    /// Source written to a file.
    Written { path: PathBuf, types: usize },
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Printed { source } => out.preformatted(source.trim_end()),
            Self::Written { path, types } => out.preformatted(&format!(
                "✓ Wrote {} type{} to {}",
                types,
                if *types == 1 { "" } else { "s" },
                path.display()
            )),
        }
    }
}
