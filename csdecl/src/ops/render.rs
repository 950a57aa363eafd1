//! Render operation - manifest to C# source.

use std::path::Path;

use csdecl_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::RenderReport;

/// Lower the manifest and either return the source or write it to `output`.
pub fn render(manifest: &Manifest, output: Option<&Path>) -> Result<RenderReport> {
    let unit = manifest
        .lower()
        .wrap_err("Failed to build the compilation unit")?;
    let source = unit.to_string();

    match output {
        Some(path) => {
            std::fs::write(path, &source)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            Ok(RenderReport::Written {
                path: path.to_path_buf(),
                types: manifest.type_count(),
            })
        }
        None => Ok(RenderReport::Printed { source }),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
[[class]]
name = "User"
modifiers = ["public"]

[[class.field]]
name = "_id"
type = "int"
modifiers = ["private"]
"#;

    #[test]
    fn test_render_prints_source() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let RenderReport::Printed { source } = render(&manifest, None).unwrap() else {
            panic!("expected printed source");
        };
        assert_eq!(source, "public class User\n{\n    private int _id;\n}\n");
    }

    #[test]
    fn test_render_writes_file() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("User.cs");

        let report = render(&manifest, Some(&path)).unwrap();
        assert!(matches!(report, RenderReport::Written { types: 1, .. }));
        assert!(
            std::fs::read_to_string(&path)
                .unwrap()
                .starts_with("public class User")
        );
    }

    #[test]
    fn test_render_reports_unwritable_output() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("User.cs");
        assert!(render(&manifest, Some(&path)).is_err());
    }
}
