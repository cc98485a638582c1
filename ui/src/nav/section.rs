use serde::{Deserialize, Serialize};

/// Id the call-to-action button scrolls to when nobody overrides it.
pub const REQUEST_ACCESS_SECTION: &str = "request-access";

/// A named region of the landing page. The id doubles as the DOM anchor and
/// the url fragment, so it has to be unique within one header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn aria_label(&self) -> String {
        format!("Navigate to {} section", self.label)
    }
}

pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("migrations", "Migrations"),
        Section::new("ai-copilot", "AI Co-Pilot"),
        Section::new("pricing", "Pricing"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_ids_are_unique() {
        let sections = default_sections();
        let ids: HashSet<_> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), sections.len());
        assert!(!ids.contains(REQUEST_ACCESS_SECTION));
    }

    #[test]
    fn aria_label_uses_label() {
        let s = Section::new("ai-copilot", "AI Co-Pilot");
        assert_eq!(s.aria_label(), "Navigate to AI Co-Pilot section");
    }

    #[test]
    fn sections_load_from_json() {
        let raw = r#"[{"id":"faq","label":"FAQ"}]"#;
        let sections: Vec<Section> = serde_json::from_str(raw).unwrap();
        assert_eq!(sections, vec![Section::new("faq", "FAQ")]);
    }
}
