//! Client-side storage keys for the web app.
//!
//! Every key the frontend persists (auth flags, profile completion flags,
//! UI preferences) is declared once here, so reads and writes can never
//! disagree on spelling.
//!
//! - [`StorageKey`]: the typed key. Functions that touch storage should take
//!   this rather than `&str`.
//! - [`StorageKeys`]: the same literals as `&'static str` constants.
//! - [`KeySet`]: flags over `StorageKey`, the set of valid keys as a value.
//! - [`REGISTRY`]: name/literal lookups and validation of untyped strings.
//!
//! ```
//! use client_storage_keys::{registry, StorageKey, StorageKeys};
//!
//! assert_eq!(StorageKeys::USER_EMAIL, "userEmail");
//! assert_eq!(StorageKey::UserEmail.as_str(), "userEmail");
//! assert_eq!(registry().get("USER_EMAIL"), Some("userEmail"));
//! assert!(registry().validate("userMail").is_err());
//! ```
//!
//! The registry is read-only:
//!
//! ```compile_fail,E0596
//! use client_storage_keys::{KeyRegistry, REGISTRY};
//!
//! let registry: &mut KeyRegistry = &mut REGISTRY;
//! ```

mod category;
mod error;
mod key_set;
mod keys;
mod registry;

pub use category::KeyCategory;
pub use error::{StorageKeyError, StorageKeyResult};
pub use keys::{KeySet, StorageKey, StorageKeys};
pub use registry::{registry, KeyRegistry, REGISTRY};
