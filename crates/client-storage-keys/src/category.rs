//! Human-readable grouping of storage keys.

use serde::{Deserialize, Serialize};

use crate::StorageKey;

/// Category a storage key belongs to.
///
/// Grouping is for readability only. It never changes a key's literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCategory {
    Auth,
    Profile,
    Ui,
}

impl KeyCategory {
    pub const ALL: &'static [KeyCategory] = &[Self::Auth, Self::Profile, Self::Ui];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Profile => "profile",
            Self::Ui => "ui",
        }
    }

    /// Keys in this category, in declaration order.
    pub fn keys(self) -> impl Iterator<Item = StorageKey> {
        StorageKey::ALL
            .iter()
            .copied()
            .filter(move |key| key.category() == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys() {
        let auth: Vec<_> = KeyCategory::Auth.keys().collect();
        assert_eq!(
            auth,
            vec![
                StorageKey::IsLoggedIn,
                StorageKey::UserId,
                StorageKey::UserEmail,
                StorageKey::UserName,
                StorageKey::UserType,
                StorageKey::UserStatus,
                StorageKey::User,
            ]
        );

        let profile: Vec<_> = KeyCategory::Profile.keys().collect();
        assert_eq!(profile, vec![StorageKey::ProfileComplete, StorageKey::HasProfile]);

        let ui: Vec<_> = KeyCategory::Ui.keys().collect();
        assert_eq!(ui, vec![StorageKey::SidebarCollapsed]);
    }

    #[test]
    fn test_categories_partition_registry() {
        let total: usize = KeyCategory::ALL.iter().map(|c| c.keys().count()).sum();
        assert_eq!(total, StorageKey::ALL.len());
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(KeyCategory::Ui.as_str(), "ui");
        let json = serde_json::to_string(&KeyCategory::Profile).unwrap();
        assert_eq!(json, "\"profile\"");
        let category: KeyCategory = serde_json::from_str("\"auth\"").unwrap();
        assert_eq!(category, KeyCategory::Auth);
    }
}
