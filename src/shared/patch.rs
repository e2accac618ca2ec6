// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Unset => keep `current`; Null => None; Value(v) => Some(v).
    pub fn resolve(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        note: PatchField<String>,
    }

    #[test]
    fn omitted_field_deserializes_to_unset() {
        let p: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert!(p.title.is_unset());
        assert!(p.note.is_unset());
    }

    #[test]
    fn explicit_null_deserializes_to_null() {
        let p: Payload = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert!(p.title.is_unset());
        assert!(p.note.is_null());
    }

    #[test]
    fn value_deserializes_to_value() {
        let p: Payload = serde_json::from_str(r#"{"title": "Backend CV"}"#).unwrap();
        assert_eq!(p.title.as_value().map(String::as_str), Some("Backend CV"));
    }

    #[test]
    fn resolve_applies_patch_semantics() {
        let current = Some("old".to_string());
        assert_eq!(
            PatchField::<String>::Unset.resolve(current.clone()),
            Some("old".to_string())
        );
        assert_eq!(PatchField::<String>::Null.resolve(current.clone()), None);
        assert_eq!(
            PatchField::Value("new".to_string()).resolve(current),
            Some("new".to_string())
        );
    }
}
