mod tool_mapping;

pub use tool_mapping::{candidate_tool_names, select_tool_name, tool_mappings};
