//! Wire Models
//!
//! Data structures matching the extension's REST resources.

use serde::{Deserialize, Serialize};

/// Identifier of a resolved checklist.
pub type ChecklistId = u32;

/// Identifier of a persisted checklist item.
pub type ItemId = u32;

/// A single entry on a checklist.
///
/// Records always come from the server, so `id` is present. The
/// transient "not yet saved" state lives in the API layer, which only
/// hands a record back once the server has confirmed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ItemId,
    pub description: String,
    #[serde(default)]
    pub checked: bool,
}

/// The checklist container, associated 1:1 with a review request.
///
/// Only `id` is consumed downstream; it keys the item collection's
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
}

/// A reusable, user-owned list of default item descriptions.
///
/// `id` is absent until the template is first saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}
