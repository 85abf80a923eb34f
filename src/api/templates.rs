//! Template resource client.
//!
//! Checklist templates are user-owned lists of default item
//! descriptions, managed from the account page. Unlike items they are a
//! top-level resource (`checklist-templates/`).

use serde::Serialize;
use serde_json::Value;

use super::http::{request_json, ApiError, ApiRoot, Method};
use super::resource::{self, RestResource};
use crate::models::ChecklistTemplate;

const TEMPLATE_ENVELOPE: &str = "checklist_template";
const COLLECTION_ENVELOPE: &str = "checklist_templates";

/// Address of a template, saved or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateRef {
    id: Option<u32>,
}

impl TemplateRef {
    pub fn of(template: &ChecklistTemplate) -> Self {
        Self { id: template.id }
    }
}

impl RestResource for TemplateRef {
    const ENVELOPE: &'static str = TEMPLATE_ENVELOPE;

    type Record = ChecklistTemplate;

    fn is_new(&self) -> bool {
        self.id.is_none()
    }

    fn url(&self, root: &ApiRoot) -> String {
        let url = root.join("checklist-templates/");
        match self.id {
            Some(id) => format!("{}{}/", url, id),
            None => url,
        }
    }
}

/// Fields sent when saving a template. The host form-field convention
/// carries the item list as a JSON-encoded string; absent values are
/// omitted.
#[derive(Debug, Default, Serialize)]
struct TemplateFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<String>,
}

/// Fetch every template owned by the current user.
pub async fn fetch_all(root: &ApiRoot) -> Result<Vec<ChecklistTemplate>, ApiError> {
    let url = root.join("checklist-templates/");
    let response = request_json(Method::Get, &url, None).await?;
    parse_template_list(&response)
}

/// Persist a template (create when new, update otherwise), returning the
/// confirmed record.
pub async fn save(
    root: &ApiRoot,
    template: &ChecklistTemplate,
) -> Result<ChecklistTemplate, ApiError> {
    let items = serde_json::to_string(&template.items)
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let fields = TemplateFields {
        title: Some(&template.title),
        items: Some(items),
    };
    resource::save_fields(root, &TemplateRef::of(template), &fields).await
}

/// Delete a saved template.
pub async fn remove(root: &ApiRoot, template: &ChecklistTemplate) -> Result<(), ApiError> {
    resource::destroy(root, &TemplateRef::of(template)).await
}

fn parse_template_list(value: &Value) -> Result<Vec<ChecklistTemplate>, ApiError> {
    let records = value
        .get(COLLECTION_ENVELOPE)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ApiError::Malformed(format!("expected a `{}` array", COLLECTION_ENVELOPE))
        })?;

    records.iter().map(TemplateRef::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROOT: &str = "/api/extensions/rbchecklist.extension.Checklist/";

    #[test]
    fn template_addresses_follow_save_state() {
        let root = ApiRoot::new(ROOT);
        let unsaved = ChecklistTemplate::default();
        assert_eq!(
            TemplateRef::of(&unsaved).url(&root),
            format!("{}checklist-templates/", ROOT),
        );

        let saved = ChecklistTemplate {
            id: Some(5),
            ..Default::default()
        };
        assert_eq!(
            TemplateRef::of(&saved).url(&root),
            format!("{}checklist-templates/5/", ROOT),
        );
    }

    #[test]
    fn parse_template_list_unwraps_array_envelope() {
        let response = json!({
            "checklist_templates": [
                {"id": 1, "title": "Security", "items": ["check auth"]},
                {"id": 2, "title": "Style", "items": []},
            ]
        });
        let templates = parse_template_list(&response).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].title, "Security");
        assert_eq!(templates[1].id, Some(2));
    }

    #[test]
    fn template_items_are_sent_as_json_string() {
        let fields = TemplateFields {
            title: Some("Security"),
            items: Some(
                serde_json::to_string(&vec!["check auth", "check input"]).unwrap(),
            ),
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "title": "Security",
                "items": "[\"check auth\",\"check input\"]",
            }),
        );
    }
}
