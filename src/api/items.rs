//! Item collection and item resource clients.
//!
//! Items live under their checklist
//! (`checklists/<listId>/checklist-items/`), so every item address goes
//! through the collection. The collection is bound to its checklist id
//! exactly once, after the list resource resolves.

use serde::Serialize;
use serde_json::Value;

use super::http::{request_json, ApiError, ApiRoot, Method};
use super::resource::{self, RestResource};
use crate::models::{ChecklistId, ChecklistItem, ItemId};

/// Envelope key for item records and the collection mapping.
const ITEM_ENVELOPE: &str = "checklist_item";

/// Fields sent when creating or mutating an item. Absent fields are
/// omitted from the payload so the server keeps its current values.
#[derive(Debug, Default, Serialize)]
pub struct ItemFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// The ordered set of items belonging to one checklist.
///
/// `fetch` and `create` require the owning checklist id; calling them
/// before `bind` is a bug in the caller and panics rather than issuing a
/// malformed request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistItemCollection {
    checklist_id: Option<ChecklistId>,
}

impl ChecklistItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the owning checklist. Set exactly once.
    pub fn bind(&mut self, checklist_id: ChecklistId) {
        assert!(
            self.checklist_id.is_none(),
            "checklistId is already set",
        );
        self.checklist_id = Some(checklist_id);
    }

    fn checklist_id(&self) -> ChecklistId {
        self.checklist_id.expect("checklistId must be set")
    }

    /// The collection endpoint.
    pub fn url(&self, root: &ApiRoot) -> String {
        root.join(&format!(
            "checklists/{}/checklist-items/",
            self.checklist_id(),
        ))
    }

    /// A reference to a not-yet-saved item in this collection.
    pub fn new_item(&self) -> ItemRef<'_> {
        ItemRef {
            collection: self,
            id: None,
        }
    }

    /// A reference to a persisted item in this collection.
    pub fn item(&self, item: &ChecklistItem) -> ItemRef<'_> {
        ItemRef {
            collection: self,
            id: Some(item.id),
        }
    }

    /// Fetch all items, in server order.
    pub async fn fetch(&self, root: &ApiRoot) -> Result<Vec<ChecklistItem>, ApiError> {
        let url = self.url(root);
        let response = request_json(Method::Get, &url, None).await?;
        parse_item_map(&response)
    }

    /// Create a new item from a description.
    ///
    /// The confirmed record is only returned on success, so a failed
    /// save never produces a phantom entry.
    pub async fn create(
        &self,
        root: &ApiRoot,
        description: &str,
    ) -> Result<ChecklistItem, ApiError> {
        let fields = ItemFields {
            description: Some(description),
            ..Default::default()
        };
        resource::save_fields(root, &self.new_item(), &fields).await
    }

    /// Persist a new description, returning the confirmed record.
    pub async fn update_description(
        &self,
        root: &ApiRoot,
        item: &ChecklistItem,
        description: &str,
    ) -> Result<ChecklistItem, ApiError> {
        let fields = ItemFields {
            description: Some(description),
            ..Default::default()
        };
        resource::save_fields(root, &self.item(item), &fields).await
    }

    /// Persist a checked state, returning the confirmed record.
    pub async fn set_checked(
        &self,
        root: &ApiRoot,
        item: &ChecklistItem,
        checked: bool,
    ) -> Result<ChecklistItem, ApiError> {
        let fields = ItemFields {
            checked: Some(checked),
            ..Default::default()
        };
        resource::save_fields(root, &self.item(item), &fields).await
    }

    /// Delete an item from the server.
    pub async fn remove(&self, root: &ApiRoot, item: &ChecklistItem) -> Result<(), ApiError> {
        resource::destroy(root, &self.item(item)).await
    }
}

/// An item addressed within its owning collection.
#[derive(Debug, Clone, Copy)]
pub struct ItemRef<'a> {
    collection: &'a ChecklistItemCollection,
    id: Option<ItemId>,
}

impl RestResource for ItemRef<'_> {
    const ENVELOPE: &'static str = ITEM_ENVELOPE;

    type Record = ChecklistItem;

    fn is_new(&self) -> bool {
        self.id.is_none()
    }

    fn url(&self, root: &ApiRoot) -> String {
        let url = self.collection.url(root);
        match self.id {
            Some(id) => format!("{}{}/", url, id),
            None => url,
        }
    }
}

/// Flatten the collection response's id → record mapping into a vector,
/// keeping the server's order.
fn parse_item_map(value: &Value) -> Result<Vec<ChecklistItem>, ApiError> {
    let mapping = value
        .get(ITEM_ENVELOPE)
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ApiError::Malformed(format!("expected a `{}` mapping", ITEM_ENVELOPE))
        })?;

    mapping.values().map(ItemRef::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROOT: &str = "/api/extensions/rbchecklist.extension.Checklist/";

    fn root() -> ApiRoot {
        ApiRoot::new(ROOT)
    }

    fn bound(checklist_id: ChecklistId) -> ChecklistItemCollection {
        let mut collection = ChecklistItemCollection::new();
        collection.bind(checklist_id);
        collection
    }

    #[test]
    fn collection_url_is_namespaced_by_checklist() {
        let collection = bound(42);
        assert_eq!(
            collection.url(&root()),
            format!("{}checklists/42/checklist-items/", ROOT),
        );
    }

    #[test]
    fn new_item_addresses_collection_endpoint() {
        let collection = bound(42);
        assert_eq!(
            collection.new_item().url(&root()),
            format!("{}checklists/42/checklist-items/", ROOT),
        );
    }

    #[test]
    fn saved_item_addresses_record_endpoint() {
        let collection = bound(42);
        let item = ChecklistItem {
            id: 7,
            description: "review line 10".to_string(),
            checked: false,
        };
        assert_eq!(
            collection.item(&item).url(&root()),
            format!("{}checklists/42/checklist-items/7/", ROOT),
        );
    }

    #[test]
    #[should_panic(expected = "checklistId must be set")]
    fn unbound_collection_fails_fast() {
        ChecklistItemCollection::new().url(&root());
    }

    #[test]
    #[should_panic(expected = "checklistId is already set")]
    fn collection_binds_exactly_once() {
        let mut collection = ChecklistItemCollection::new();
        collection.bind(1);
        collection.bind(2);
    }

    #[test]
    fn parse_accepts_enveloped_record() {
        // The create response from the item resource.
        let response = json!({
            "checklist_item": {
                "id": 7,
                "description": "review line 10",
                "checked": false,
            }
        });
        let item = ItemRef::parse(&response).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.description, "review line 10");
        assert!(!item.checked);
    }

    #[test]
    fn parse_accepts_bare_record() {
        let response = json!({"id": 3, "description": "check style", "checked": true});
        let item = ItemRef::parse(&response).unwrap();
        assert_eq!(item.id, 3);
        assert!(item.checked);
    }

    #[test]
    fn collection_fetch_mapping_preserves_server_order() {
        let response = json!({
            "checklist_item": {
                "3": {"id": 3, "description": "third", "checked": false},
                "1": {"id": 1, "description": "first", "checked": true},
                "2": {"id": 2, "description": "second", "checked": false},
            }
        });
        let items = parse_item_map(&response).unwrap();
        let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn parse_item_map_rejects_missing_envelope() {
        let response = json!({"items": []});
        assert!(matches!(
            parse_item_map(&response),
            Err(ApiError::Malformed(_)),
        ));
    }

    #[test]
    fn absent_fields_are_omitted_from_payloads() {
        let fields = ItemFields {
            description: Some("review line 10"),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"description": "review line 10"}),
        );

        let fields = ItemFields {
            checked: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&fields).unwrap(), json!({"checked": true}));
    }
}
