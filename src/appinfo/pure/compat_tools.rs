//! SteamPlay compat tool lookup inside appinfo sections

use crate::appinfo::types::CatalogEntry;
use crate::error::{ProtonError, Result};
use crate::vdf::{Document, Value};

/// Every name a compat tool answers to: its key plus its aliases
///
/// A single tool may have several valid names, eg. "proton_316" and
/// "proton_316_beta". The "aliases" field has only been seen holding one
/// string, but a list of strings is accepted too.
fn tool_names<'a>(key: &'a str, tool: &'a Document) -> Result<Vec<&'a str>> {
    let mut names = vec![key];
    match tool.get_ci("aliases") {
        None => {}
        Some(Value::Str(alias)) => names.push(alias),
        Some(Value::List(aliases)) => {
            for alias in aliases {
                let alias = alias.as_str().ok_or_else(|| {
                    ProtonError::Format(format!(
                        "unexpected non-string alias for compat tool '{}' in appinfo.vdf",
                        key
                    ))
                })?;
                names.push(alias);
            }
        }
        Some(other) => {
            return Err(ProtonError::Format(format!(
                "unexpected type {:?} for 'aliases' of compat tool '{}' in appinfo.vdf",
                other, key
            )));
        }
    }
    Ok(names)
}

/// Find the app ID of the compat tool called `name`
pub fn find_compat_tool_app_id(entries: &[CatalogEntry], name: &str) -> Result<Option<u64>> {
    for entry in entries {
        let Some(compat_tools) = entry
            .data
            .path_doc(&["appinfo", "extended", "compat_tools"])
        else {
            continue;
        };

        for (key, tool) in compat_tools.iter() {
            let Some(tool) = tool.as_doc() else {
                continue;
            };
            if tool_names(key, tool)?.contains(&name) {
                return Ok(tool.get_ci("appid").and_then(Value::as_u64));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn s(v: &str) -> Value {
        Value::Str(v.to_string())
    }

    fn entry(app_id: u32, tools: Vec<(&str, Document)>) -> CatalogEntry {
        let compat_tools: Document = tools.into_iter().map(|(k, d)| (k, Value::Doc(d))).collect();
        let extended: Document = [("compat_tools", Value::Doc(compat_tools))].into_iter().collect();
        let appinfo: Document = [("extended", Value::Doc(extended))].into_iter().collect();
        CatalogEntry {
            app_id,
            info_state: 2,
            last_updated: 0,
            access_token: 0,
            sha1: [0; 20],
            change_number: 0,
            data: [("appinfo", Value::Doc(appinfo))].into_iter().collect(),
        }
    }

    fn tool(appid: i64, aliases: Option<Value>) -> Document {
        let mut doc: Document = [("appid", Value::Int(appid))].into_iter().collect();
        if let Some(aliases) = aliases {
            doc.insert("aliases", aliases);
        }
        doc
    }

    #[test]
    fn test_match_by_key() {
        let entries = vec![entry(891390, vec![("proton_513", tool(1245040, None))])];
        assert_eq!(find_compat_tool_app_id(&entries, "proton_513").unwrap(), Some(1245040));
        assert_eq!(find_compat_tool_app_id(&entries, "proton_7").unwrap(), None);
    }

    #[test]
    fn test_match_by_string_alias() {
        let entries = vec![entry(
            891390,
            vec![("proton_316", tool(961940, Some(s("proton_316_beta"))))],
        )];
        assert_eq!(
            find_compat_tool_app_id(&entries, "proton_316_beta").unwrap(),
            Some(961940)
        );
    }

    #[test]
    fn test_match_by_list_alias() {
        let aliases = Value::List(vec![s("a"), s("b")]);
        let entries = vec![entry(1, vec![("proton_x", tool(42, Some(aliases)))])];
        assert_eq!(find_compat_tool_app_id(&entries, "b").unwrap(), Some(42));
    }

    #[test]
    fn test_unexpected_alias_type() {
        let entries = vec![entry(1, vec![("proton_x", tool(42, Some(Value::Int(3))))])];
        let err = find_compat_tool_app_id(&entries, "proton_x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_sections_without_compat_tools_are_ignored() {
        let plain = CatalogEntry {
            data: Document::new(),
            ..entry(10, vec![])
        };
        let entries = vec![plain, entry(2, vec![("proton_7", tool(1887720, None))])];
        assert_eq!(find_compat_tool_app_id(&entries, "proton_7").unwrap(), Some(1887720));
    }
}
