//! compatibilitytool.vdf interpretation

use crate::error::{ProtonError, Result};
use crate::vdf::Document;

use std::path::{Path, PathBuf};

/// A custom compatibility tool declared by a compatibilitytool.vdf
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTool {
    pub internal_name: String,
    pub install_path: PathBuf,
}

/// Read the tool entry from a decoded compatibilitytool.vdf
///
/// Returns `Ok(None)` for tools that don't run Windows software on Linux.
/// The install path is either "." (the directory holding the manifest) or
/// relative to the compatibilitytools.d root.
pub fn parse_custom_tool(
    doc: &Document,
    manifest_path: &Path,
    tools_root: &Path,
) -> Result<Option<CustomTool>> {
    let context = manifest_path.display().to_string();
    let compat_tools = doc
        .path_doc(&["compatibilitytools", "compat_tools"])
        .ok_or_else(|| ProtonError::decode(&context, "missing compatibilitytools/compat_tools"))?;

    let Some((internal_name, tool_info)) = compat_tools.iter().next() else {
        return Err(ProtonError::decode(&context, "no compat tool declared"));
    };
    let tool_info = tool_info
        .as_doc()
        .ok_or_else(|| ProtonError::decode(&context, "compat tool entry is not a block"))?;

    let field = |name: &str| {
        tool_info
            .get_str(name)
            .ok_or_else(|| ProtonError::decode(&context, format!("missing '{}'", name)))
    };
    let install_path = field("install_path")?;
    let from_oslist = field("from_oslist")?;
    let to_oslist = field("to_oslist")?;

    if from_oslist != "windows" || to_oslist != "linux" {
        return Ok(None);
    }

    let install_path = if install_path == "." {
        manifest_path.parent().unwrap_or(tools_root).to_path_buf()
    } else {
        tools_root.join(install_path)
    };

    Ok(Some(CustomTool {
        internal_name: internal_name.to_string(),
        install_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdf::parse_text;

    fn manifest(install_path: &str, from: &str, to: &str) -> Document {
        let text = format!(
            r#"
"compatibilitytools"
{{
  "compat_tools"
  {{
    "Proton-GE"
    {{
      "install_path" "{}"
      "display_name" "Proton GE"
      "from_oslist"  "{}"
      "to_oslist"    "{}"
    }}
  }}
}}
"#,
            install_path, from, to
        );
        parse_text(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_dot_install_path_is_manifest_dir() {
        let root = Path::new("/steam/compatibilitytools.d");
        let path = root.join("Proton-GE/compatibilitytool.vdf");
        let tool = parse_custom_tool(&manifest(".", "windows", "linux"), &path, root)
            .unwrap()
            .unwrap();
        assert_eq!(tool.internal_name, "Proton-GE");
        assert_eq!(tool.install_path, root.join("Proton-GE"));
    }

    #[test]
    fn test_relative_install_path() {
        let root = Path::new("/steam/compatibilitytools.d");
        let path = root.join("compatibilitytool.vdf");
        let tool = parse_custom_tool(&manifest("Proton-GE", "windows", "linux"), &path, root)
            .unwrap()
            .unwrap();
        assert_eq!(tool.install_path, root.join("Proton-GE"));
    }

    #[test]
    fn test_windows_to_windows_is_excluded() {
        let root = Path::new("/steam/compatibilitytools.d");
        let path = root.join("x/compatibilitytool.vdf");
        let tool = parse_custom_tool(&manifest(".", "windows", "windows"), &path, root).unwrap();
        assert!(tool.is_none());
    }

    #[test]
    fn test_missing_structure_is_error() {
        let doc = parse_text(br#""compatibilitytools" { }"#).unwrap();
        let root = Path::new("/r");
        assert!(parse_custom_tool(&doc, &root.join("compatibilitytool.vdf"), root).is_err());
    }
}
