//! Check operation - manifest validation.

use std::path::Path;

use csdecl_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest is validated when it is parsed; this also builds the syntax
/// tree once and collects warnings for declarations that are legal but
/// probably unintended.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    manifest.lower().wrap_err("Validation failed")?;

    let mut warnings = Vec::new();
    if manifest.type_count() == 0 {
        warnings.push("manifest declares no types".to_string());
    }
    for enumeration in &manifest.enums {
        if enumeration.members.is_empty() {
            warnings.push(format!("enum '{}' has no members", enumeration.name));
        }
    }
    for interface in &manifest.interfaces {
        if !interface.name.starts_with('I') {
            warnings.push(format!(
                "interface '{}' does not follow the 'I' prefix convention",
                interface.name
            ));
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        classes: manifest.classes.len(),
        interfaces: manifest.interfaces.len(),
        enums: manifest.enums.len(),
        warnings,
    })
}
