//! Inspect operation - the declared-symbol view.

use csdecl_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::InspectReport;

pub fn inspect(manifest: &Manifest) -> Result<InspectReport> {
    let types = manifest
        .symbols()
        .wrap_err("Failed to collect declared symbols")?;
    Ok(InspectReport { types })
}
