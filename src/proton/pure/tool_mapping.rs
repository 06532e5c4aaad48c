//! Compat tool name selection from config.vdf

use crate::proton::types::ToolMappings;
use crate::vdf::Document;

const STEAM_CONFIG_PATH: [&str; 4] = ["InstallConfigStore", "Software", "Valve", "Steam"];

/// Which mapping a candidate comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mapping {
    CompatToolMapping,
    ToolMapping,
}

/// Which key of the mapping a candidate uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    App,
    Default,
}

/// Candidate sources, highest priority first
const CANDIDATE_SOURCES: [(Mapping, Key); 4] = [
    (Mapping::CompatToolMapping, Key::App),
    (Mapping::CompatToolMapping, Key::Default),
    (Mapping::ToolMapping, Key::App),
    (Mapping::ToolMapping, Key::Default),
];

/// Extract both mappings from a decoded config.vdf; a missing one is empty
pub fn tool_mappings(config: &Document) -> ToolMappings {
    let steam = config.path_doc(&STEAM_CONFIG_PATH);
    let mapping = |name: &str| {
        steam
            .and_then(|doc| doc.get_doc(name))
            .cloned()
            .unwrap_or_default()
    };

    ToolMappings {
        compat_tool_mapping: mapping("CompatToolMapping"),
        tool_mapping: mapping("ToolMapping"),
    }
}

/// Configured compat tool names in priority order, empty names dropped
pub fn candidate_tool_names(mappings: &ToolMappings, app_id: Option<u64>) -> Vec<String> {
    let app_key = app_id.map(|id| id.to_string());

    CANDIDATE_SOURCES
        .iter()
        .filter_map(|(mapping, key)| {
            let doc = match mapping {
                Mapping::CompatToolMapping => &mappings.compat_tool_mapping,
                Mapping::ToolMapping => &mappings.tool_mapping,
            };
            let key = match key {
                Key::App => app_key.as_deref()?,
                Key::Default => "0",
            };
            doc.get(key)?.as_doc()?.get_str("name")
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The compat tool to use for an app, if any is configured
pub fn select_tool_name(mappings: &ToolMappings, app_id: Option<u64>) -> Option<String> {
    candidate_tool_names(mappings, app_id).into_iter().next()
}
