//! Generic REST resource seam.
//!
//! The host application nests records under a per-resource envelope key
//! and addresses a resource at its collection endpoint until it has an
//! id. Each entity implements this capability set once; the free
//! functions below do the HTTP.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::http::{request_json, ApiError, ApiRoot, Method};

/// A reference to one remote resource: where it lives, whether it has
/// been persisted yet, and what its records look like.
pub trait RestResource {
    /// Envelope key single records are nested under.
    const ENVELOPE: &'static str;

    /// The record type carried in server responses.
    type Record: DeserializeOwned;

    /// Whether the resource has been persisted yet.
    fn is_new(&self) -> bool;

    /// Address of this resource: the collection endpoint while new,
    /// `<collection><id>/` once saved.
    fn url(&self, root: &ApiRoot) -> String;

    /// Decode a server record. Individual-resource responses are
    /// enveloped; records inside a collection response are bare, so both
    /// shapes are accepted.
    fn parse(value: &Value) -> Result<Self::Record, ApiError> {
        let record = unwrap_envelope(value, Self::ENVELOPE);
        serde_json::from_value(record.clone()).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

/// Return the record under `key` if the value is enveloped, the value
/// itself otherwise.
pub fn unwrap_envelope<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(value)
}

/// Persist `fields` to the resource: POST while new, PUT once saved.
/// Returns the confirmed record; nothing is committed locally until the
/// caller sees it.
pub async fn save_fields<R, P>(
    root: &ApiRoot,
    resource: &R,
    fields: &P,
) -> Result<R::Record, ApiError>
where
    R: RestResource,
    P: Serialize,
{
    let method = if resource.is_new() {
        Method::Post
    } else {
        Method::Put
    };
    let body = serde_json::to_value(fields).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = request_json(method, &resource.url(root), Some(&body)).await?;
    R::parse(&response)
}

/// Delete a saved resource.
pub async fn destroy<R: RestResource>(root: &ApiRoot, resource: &R) -> Result<(), ApiError> {
    request_json(Method::Delete, &resource.url(root), None)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_envelope_detects_wrapper() {
        let enveloped = json!({"checklist_item": {"id": 1}});
        assert_eq!(unwrap_envelope(&enveloped, "checklist_item"), &json!({"id": 1}));
    }

    #[test]
    fn unwrap_envelope_passes_bare_record_through() {
        let bare = json!({"id": 1, "description": "x"});
        assert_eq!(unwrap_envelope(&bare, "checklist_item"), &bare);
    }
}
