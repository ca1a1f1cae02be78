//! User record and the update body applied to it.

use serde::{Deserialize, Serialize};

/// A user as held by the system of record.
///
/// `id` stays `None` until the store assigns one and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Creates an unsaved user with just a name and an age.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            age,
            gender: None,
            email: None,
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    // == Apply Patch ==
    /// Copies the four mutable fields from `patch`, leaving `id` untouched.
    ///
    /// Every field is copied as-is, so an omitted optional field clears the
    /// stored value.
    pub fn apply(&mut self, patch: UserPatch) {
        self.name = patch.name;
        self.age = patch.age;
        self.gender = patch.gender;
        self.email = patch.email;
    }
}

/// Body of an update request. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserPatch {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            age,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize_without_id() {
        let json = r#"{"name": "Ann", "age": 30, "gender": "F", "email": "ann@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(user.age, 30);
        assert_eq!(user.email.as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn test_user_serialize_field_names() {
        let user = User {
            id: Some(1),
            ..User::new("Ann", 30)
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["age"], 30);
        assert!(json["gender"].is_null());
    }

    #[test]
    fn test_builders_set_optional_fields() {
        let user = User::new("Ann", 30)
            .with_gender("F")
            .with_email("ann@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["gender"], "F");
        assert_eq!(json["email"], "ann@example.com");
        assert!(json["id"].is_null());
    }

    #[test]
    fn test_patch_ignores_id() {
        let json = r#"{"id": 99, "name": "Annie", "age": 31}"#;
        let patch: UserPatch = serde_json::from_str(json).unwrap();

        let mut user = User {
            id: Some(1),
            ..User::new("Ann", 30).with_email("ann@example.com")
        };
        user.apply(patch);

        assert_eq!(user.id, Some(1));
        assert_eq!(user.name.as_deref(), Some("Annie"));
        assert_eq!(user.age, 31);
        // Omitted fields are copied over as empty
        assert_eq!(user.email, None);
    }
}
