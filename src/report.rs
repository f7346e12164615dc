use serde::Serialize;
use std::path::PathBuf;

use crate::locator::{Lookup, Origin};

/// Machine-readable summary of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub root: PathBuf,
    pub found: bool,
    pub marker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl Report {
    pub fn new(lookup: &Lookup, marker: &str) -> Self {
        Self {
            root: lookup.root.clone(),
            found: lookup.matched.is_some(),
            marker: marker.to_string(),
            origin: lookup.matched.as_ref().map(|m| m.origin),
            level: lookup.matched.as_ref().map(|m| m.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Candidate;
    use serde_json::json;

    #[test]
    fn test_report_for_match() {
        let lookup = Lookup {
            root: PathBuf::from("/opt/tool"),
            matched: Some(Candidate {
                path: PathBuf::from("/opt/tool"),
                origin: Origin::ModuleDir,
                level: 2,
            }),
        };

        let value = serde_json::to_value(Report::new(&lookup, "src")).unwrap();

        assert_eq!(
            value,
            json!({
                "root": "/opt/tool",
                "found": true,
                "marker": "src",
                "origin": "module_dir",
                "level": 2
            })
        );
    }

    #[test]
    fn test_report_for_fallback_omits_origin() {
        let lookup = Lookup {
            root: PathBuf::from("/"),
            matched: None,
        };

        let value = serde_json::to_value(Report::new(&lookup, "src")).unwrap();

        assert_eq!(value, json!({ "root": "/", "found": false, "marker": "src" }));
    }
}
