//! Strongly-typed identity tokens.
//!
//! Registries key their entries by a token handed out at registration time,
//! never by comparing the registered values themselves.
//!
//! ## Phantom Type パターン
//! `Id<T>` は共通実装を一つだけ持ち、`T` は実行時に使わないマーカー型です。
//! 新しい ID 種別はマーカー型を一つ追加するだけで定義できます。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for each id family.
pub trait IdMarker: Send + Sync + 'static {
    /// Display prefix, e.g. `"observer-"`.
    fn prefix() -> &'static str;
}

/// Generic ULID-backed identifier.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Listener のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {}

impl IdMarker for Listener {
    fn prefix() -> &'static str {
        "observer-"
    }
}

/// Identity of one subscription in a subject's registry.
pub type ObserverId = Id<Listener>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_id_displays_with_prefix() {
        let ulid = Ulid::new();
        let observer = ObserverId::from_ulid(ulid);

        assert_eq!(observer.as_ulid(), ulid);
        assert_eq!(observer.to_string(), format!("observer-{ulid}"));
    }

    #[test]
    fn from_trait_works() {
        let ulid = Ulid::new();
        let id: ObserverId = ulid.into();
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn ids_can_be_serialized() {
        let id = ObserverId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: ObserverId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(id, deserialized);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        assert_eq!(size_of::<ObserverId>(), size_of::<Ulid>());
        assert_eq!(size_of::<ObserverId>(), 16);
    }
}
