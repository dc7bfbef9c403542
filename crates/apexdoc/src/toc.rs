//! Table-of-contents document as published alongside the Apex reference.
//!
//! The file is a nested JSON structure: a top-level `toc` array of entries,
//! each entry a node with `id`, `text`, `children` and an `a_attr.href` link.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ApexDocError, Result};

/// Characters that older exports leave behind in `text` values.
const INVISIBLE_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DocumentTree {
    #[serde(default)]
    pub toc: Vec<Node>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "clean_text")]
    pub text: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_attr: Option<LinkAttr>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LinkAttr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Node {
    /// Relative documentation link, if the node carries a non-empty one.
    pub fn href(&self) -> Option<&str> {
        self.a_attr
            .as_ref()
            .and_then(|attr| attr.href.as_deref())
            .filter(|href| !href.is_empty())
    }
}

impl DocumentTree {
    /// Load the table of contents from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ApexDocError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tree: DocumentTree =
            serde_json::from_str(&contents).map_err(|source| ApexDocError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), entries = tree.toc.len(), "Loaded table of contents");
        Ok(tree)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find the entry with the given id among the top-level entries and
    /// their direct children, in document order.
    pub fn find_entry(&self, id: &str) -> Option<&Node> {
        self.toc.iter().find_map(|entry| {
            if entry.id.as_deref() == Some(id) {
                return Some(entry);
            }
            entry
                .children
                .iter()
                .find(|child| child.id.as_deref() == Some(id))
        })
    }
}

pub fn strip_invisible(text: &str) -> String {
    text.chars()
        .filter(|c| !INVISIBLE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn clean_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|text| strip_invisible(&text)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_is_cleaned_on_load() {
        let node: Node = serde_json::from_value(json!({
            "text": "\u{200B}String Class\u{FEFF} ",
            "a_attr": { "href": "apex_methods_system_string.htm" }
        }))
        .unwrap();
        assert_eq!(node.text, "String Class");
        assert_eq!(node.href(), Some("apex_methods_system_string.htm"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_missing_and_empty_links() {
        let node: Node = serde_json::from_value(json!({ "text": "Methods" })).unwrap();
        assert_eq!(node.href(), None);

        let node: Node =
            serde_json::from_value(json!({ "text": "Methods", "a_attr": { "href": "" } })).unwrap();
        assert_eq!(node.href(), None);
    }

    #[test]
    fn test_null_text_defaults_to_empty() {
        let node: Node = serde_json::from_value(json!({ "text": null, "children": [] })).unwrap();
        assert_eq!(node.text, "");
    }

    #[test]
    fn test_find_entry_nested_under_first_toc_entry() {
        let tree = DocumentTree::from_json_str(
            r#"{"toc": [{"id": "apex_dev_guide", "text": "Apex Developer Guide",
                        "children": [{"id": "apex_intro"}, {"id": "apex_reference", "text": "Reference"}]}]}"#,
        )
        .unwrap();
        assert_eq!(tree.find_entry("apex_reference").unwrap().text, "Reference");
        assert_eq!(tree.find_entry("apex_dev_guide").unwrap().text, "Apex Developer Guide");
        assert!(tree.find_entry("apex_missing").is_none());
    }

    #[test]
    fn test_load_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apexdoc.json");
        fs::write(&path, "{ not json").unwrap();

        let err = DocumentTree::load(&path).unwrap_err();
        assert!(matches!(err, ApexDocError::Parse { .. }));
        assert!(err.to_string().contains("apexdoc.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DocumentTree::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ApexDocError::Read { .. }));
    }
}
