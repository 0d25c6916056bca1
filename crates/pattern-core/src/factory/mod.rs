//! Factory dispatchers: closed enum in, fresh product out.
//!
//! Every `create` call builds a new instance; nothing is cached or pooled.
//! The kind enums are exhaustive, so there is no "unknown kind" error path.

pub mod exercise;
pub mod menu;
pub mod transport;

pub use self::exercise::{Exercise, ExerciseFactory, ExerciseKind, Gym, MuscleGroup};
pub use self::menu::{MenuFactory, Order};
pub use self::transport::{CargoDelivery, Transport, TransportFactory, TransportKind};

/// Maps a discriminant to a freshly constructed product.
pub trait Factory {
    type Kind: Copy + std::fmt::Debug;
    type Product;

    fn create(&self, kind: Self::Kind) -> Self::Product;
}
