//! Storage key constants.
//!
//! Every key is declared exactly once in the `storage_keys!` table below. The
//! table expands into the [`StorageKey`] enum, its name/literal/category
//! lookups, the [`StorageKeys`] string constants and the [`KeySet`] flags,
//! so none of them can drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{KeyCategory, StorageKeyError, StorageKeyResult};

macro_rules! storage_keys {
    (
        $(
            $(#[$($meta:tt)*])*
            $variant:ident => $name:ident = $literal:literal in $category:ident;
        )+
    ) => {
        /// A sanctioned client-side storage key.
        ///
        /// Code that reads or writes persisted state should take a
        /// `StorageKey` rather than a `&str`, so only registered keys can
        /// reach the storage layer.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum StorageKey {
            $(
                $(#[$($meta)*])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl StorageKey {
            /// Every registered key, in declaration order.
            pub const ALL: &'static [StorageKey] = &[$(Self::$variant),+];

            /// The literal string used against the host storage.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// The logical name, e.g. `USER_EMAIL`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($name),)+
                }
            }

            /// The single-key [`KeySet`] for this key.
            pub const fn as_set(self) -> KeySet {
                match self {
                    $(Self::$variant => KeySet::$name,)+
                }
            }

            pub const fn category(self) -> KeyCategory {
                match self {
                    $(Self::$variant => KeyCategory::$category,)+
                }
            }

            /// Look up a key by its logical name. Case-sensitive.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        bitflags::bitflags! {
            /// A set of [`StorageKey`]s.
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct KeySet: u32 {
                $(
                    $(#[$($meta)*])*
                    const $name = 1 << (StorageKey::$variant as u32);
                )+
            }
        }

        /// Storage key literals, addressable by logical name.
        pub struct StorageKeys;

        impl StorageKeys {
            $(
                $(#[$($meta)*])*
                pub const $name: &'static str = $literal;
            )+
        }
    };
}

storage_keys! {
    // Auth
    /// Whether a user session is active
    IsLoggedIn => IS_LOGGED_IN = "isLoggedIn" in Auth;
    /// Authenticated user's ID
    UserId => USER_ID = "userId" in Auth;
    /// Authenticated user's email
    UserEmail => USER_EMAIL = "userEmail" in Auth;
    /// Authenticated user's display name
    UserName => USER_NAME = "userName" in Auth;
    /// Account type
    UserType => USER_TYPE = "userType" in Auth;
    /// Account status
    UserStatus => USER_STATUS = "userStatus" in Auth;
    /// Full user object (JSON)
    User => USER = "user" in Auth;

    // Profile
    /// Whether onboarding has been completed
    ProfileComplete => PROFILE_COMPLETE = "profileComplete" in Profile;
    /// Whether a profile record exists
    HasProfile => HAS_PROFILE = "hasProfile" in Profile;

    // UI
    /// Sidebar collapsed preference
    SidebarCollapsed => SIDEBAR_COLLAPSED = "sidebarCollapsed" in Ui;
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for StorageKey {
    type Err = StorageKeyError;

    /// Parse a storage key literal. There is no fallback: anything outside
    /// the registry is an error.
    fn from_str(s: &str) -> StorageKeyResult<Self> {
        Self::from_literal(s).ok_or_else(|| StorageKeyError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = StorageKeyError;

    fn try_from(value: &str) -> StorageKeyResult<Self> {
        value.parse()
    }
}

impl From<StorageKey> for &'static str {
    fn from(key: StorageKey) -> Self {
        key.as_str()
    }
}
