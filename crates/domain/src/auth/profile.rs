//! Normalized identity profile

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider identifier carried by every profile built from Intercom data.
pub const PROVIDER_NAME: &str = "intercom";

/// Provider-agnostic view of an Intercom user.
///
/// Built fresh from each successful profile fetch and never mutated
/// afterwards. Fields are copied verbatim from the upstream payload;
/// nothing is validated or defaulted, so a missing `user_id` yields a
/// profile without an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    /// Always [`PROVIDER_NAME`].
    pub provider: String,
    /// Intercom `user_id`.
    pub id: Option<String>,
    /// Display name as reported by Intercom.
    pub name: Option<String>,
    /// Email as reported by Intercom.
    pub email: Option<String>,
    /// The decoded response payload, unmodified.
    pub raw_profile: Value,
}

impl NormalizedProfile {
    /// Maps a decoded `/users` payload into a profile.
    ///
    /// Only JSON strings populate the typed fields. Any other shape
    /// (number, null, nested object, or a payload that is not an object at
    /// all) leaves the field empty; the value stays reachable through
    /// [`raw_profile`](Self::raw_profile).
    #[must_use]
    pub fn from_raw(raw_profile: Value) -> Self {
        let field = |key: &str| {
            raw_profile
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Self {
            provider: PROVIDER_NAME.to_string(),
            id: field("user_id"),
            name: field("name"),
            email: field("email"),
            raw_profile,
        }
    }

    /// Looks up a provider-specific field that has no typed counterpart.
    #[must_use]
    pub fn raw_field(&self, key: &str) -> Option<&Value> {
        self.raw_profile.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_raw_maps_fields() {
        let raw = json!({"user_id": "42", "name": "Ann", "email": "a@x.com"});
        let profile = NormalizedProfile::from_raw(raw.clone());

        assert_eq!(
            profile,
            NormalizedProfile {
                provider: "intercom".to_string(),
                id: Some("42".to_string()),
                name: Some("Ann".to_string()),
                email: Some("a@x.com".to_string()),
                raw_profile: raw,
            }
        );
    }

    #[test]
    fn test_missing_user_id_stays_absent() {
        let profile = NormalizedProfile::from_raw(json!({"name": "Ann"}));
        assert_eq!(profile.id, None);
        assert_eq!(profile.name.as_deref(), Some("Ann"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_extra_fields_preserved() {
        let raw = json!({
            "user_id": "7",
            "app": {"id_code": "abc123", "name": "Acme"},
            "avatar": {"image_url": null}
        });
        let profile = NormalizedProfile::from_raw(raw);

        assert_eq!(
            profile.raw_field("app").and_then(|app| app.get("id_code")),
            Some(&json!("abc123"))
        );
        assert!(profile.raw_field("missing").is_none());
    }

    #[test]
    fn test_non_string_values_are_not_coerced() {
        let profile = NormalizedProfile::from_raw(json!({"user_id": 42, "name": null}));
        assert_eq!(profile.id, None);
        assert_eq!(profile.name, None);
        assert_eq!(profile.raw_field("user_id"), Some(&json!(42)));
    }

    #[test]
    fn test_non_object_payload_yields_empty_profile() {
        let profile = NormalizedProfile::from_raw(json!(["not", "an", "object"]));
        assert_eq!(profile.provider, PROVIDER_NAME);
        assert_eq!(profile.id, None);
        assert_eq!(profile.raw_profile, json!(["not", "an", "object"]));
    }
}
