//! Domain model (ids, size variants, prices, errors).

pub mod errors;
pub mod ids;
pub mod price;
pub mod variant;

pub use self::errors::{ObserverError, PatternError};
pub use self::ids::{Id, IdMarker, ObserverId};
pub use self::price::{Price, PriceTable};
pub use self::variant::Size;
