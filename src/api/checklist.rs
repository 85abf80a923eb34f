//! List resource client.
//!
//! The checklist container itself. It is resolved once per review page
//! and everything downstream only needs its id.

use serde::Serialize;

use super::http::{ApiError, ApiRoot};
use super::resource::{self, RestResource};
use crate::models::{Checklist, ChecklistId};

/// Address of a checklist, saved or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistRef {
    id: Option<ChecklistId>,
}

impl ChecklistRef {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RestResource for ChecklistRef {
    const ENVELOPE: &'static str = "checklist";

    type Record = Checklist;

    fn is_new(&self) -> bool {
        self.id.is_none()
    }

    fn url(&self, root: &ApiRoot) -> String {
        let url = root.join("checklists/");
        match self.id {
            Some(id) => format!("{}{}/", url, id),
            None => url,
        }
    }
}

#[derive(Serialize)]
struct CreateChecklistFields {
    review_request_id: u32,
}

/// Get or create the checklist for a review request.
///
/// The server treats POST on the collection as get-or-create, so this is
/// safe to call on every page load.
pub async fn get_or_create(
    root: &ApiRoot,
    review_request_id: u32,
) -> Result<Checklist, ApiError> {
    resource::save_fields(
        root,
        &ChecklistRef::new(),
        &CreateChecklistFields { review_request_id },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROOT: &str = "/api/extensions/rbchecklist.extension.Checklist/";

    #[test]
    fn unsaved_checklist_addresses_collection() {
        let root = ApiRoot::new(ROOT);
        assert_eq!(
            ChecklistRef::new().url(&root),
            format!("{}checklists/", ROOT),
        );
    }

    #[test]
    fn saved_checklist_addresses_record() {
        let root = ApiRoot::new(ROOT);
        let saved = ChecklistRef { id: Some(42) };
        assert_eq!(saved.url(&root), format!("{}checklists/42/", ROOT));
    }

    #[test]
    fn parse_unwraps_checklist_envelope() {
        let response = json!({"checklist": {"id": 42, "checklist_items": {}}});
        let checklist = ChecklistRef::parse(&response).unwrap();
        assert_eq!(checklist, Checklist { id: 42 });
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let response = json!({"stat": "fail"});
        assert!(matches!(
            ChecklistRef::parse(&response),
            Err(ApiError::Malformed(_)),
        ));
    }
}
