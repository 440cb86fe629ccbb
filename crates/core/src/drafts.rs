//! Form drafts for admin-managed content.
//!
//! Drafts are the editable shape of a project or category before it is
//! written to the gateway. Validation is presence-only: no format, URL or
//! uniqueness checks are performed locally.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category slug preselected in a fresh project draft.
pub const DEFAULT_PROJECT_CATEGORY: &str = "madera";

// ---------------------------------------------------------------------------
// ProjectDraft
// ---------------------------------------------------------------------------

/// Editable fields of a gallery project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub order_index: i32,
}

fn default_category() -> String {
    DEFAULT_PROJECT_CATEGORY.to_string()
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            category: default_category(),
            order_index: 0,
        }
    }
}

impl ProjectDraft {
    /// Require a title and an image reference.
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_blank(&self.title) || is_blank(&self.image_url) {
            return Err(CoreError::Validation(
                "Project requires a non-empty title and image_url".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CategoryDraft
// ---------------------------------------------------------------------------

/// Editable fields of a project category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub display_order: i32,
}

impl CategoryDraft {
    /// Require a name and a slug.
    pub fn validate(&self) -> Result<(), CoreError> {
        if is_blank(&self.name) || is_blank(&self.slug) {
            return Err(CoreError::Validation(
                "Category requires a non-empty name and slug".into(),
            ));
        }
        Ok(())
    }

    /// Copy of the draft with its slug lower-cased, as submitted to the
    /// gateway.
    pub fn normalized(&self) -> Self {
        Self {
            slug: normalize_slug(&self.slug),
            ..self.clone()
        }
    }
}

/// Lower-case a free-form slug. No other normalisation is applied.
pub fn normalize_slug(slug: &str) -> String {
    slug.to_lowercase()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn fresh_project_draft_defaults() {
        let draft = ProjectDraft::default();
        assert_eq!(draft.category, "madera");
        assert_eq!(draft.order_index, 0);
        assert!(draft.title.is_empty());
    }

    #[test]
    fn project_requires_title_and_image() {
        let mut draft = ProjectDraft {
            title: "Caja".into(),
            ..ProjectDraft::default()
        };
        assert_matches!(draft.validate(), Err(CoreError::Validation(_)));

        draft.image_url = "https://x/y.jpg".into();
        assert!(draft.validate().is_ok());

        draft.title = "   ".into();
        assert_matches!(draft.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn project_image_is_not_format_checked() {
        let draft = ProjectDraft {
            title: "Llavero".into(),
            image_url: "not a url".into(),
            ..ProjectDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn category_requires_name_and_slug() {
        let draft = CategoryDraft {
            name: "Madera".into(),
            slug: String::new(),
            display_order: 1,
        };
        assert_matches!(draft.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn category_slug_is_lowercased() {
        let draft = CategoryDraft {
            name: "Cuero".into(),
            slug: "Cuero-Fino".into(),
            display_order: 2,
        };
        let normalized = draft.normalized();
        assert_eq!(normalized.slug, "cuero-fino");
        assert_eq!(normalized.name, "Cuero");
    }

    #[test]
    fn project_draft_deserializes_with_defaults() {
        let draft: ProjectDraft =
            serde_json::from_str(r#"{"title":"Caja","image_url":"https://x/y.jpg"}"#).unwrap();
        assert_eq!(draft.category, "madera");
        assert_eq!(draft.description, "");
    }
}
