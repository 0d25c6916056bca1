//! pattern-core
//!
//! A small in-memory composition library: decorator chains, strategy slots,
//! a subject/observer registry, and factory dispatchers.
//!
//! # モジュール構成
//! - **domain**: 値オブジェクト（ids, size, price, errors）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator）
//! - **decorator**: Component trait, BaseEntity, Decorated chain
//! - **strategy**: Slot と差し替え可能な振る舞い
//! - **observer**: Subject / Observer registry（同期・fail-fast）
//! - **factory**: Factory trait と具象ファクトリ
//!
//! The core never prints. Operations return plain values (prices, strings,
//! counters) and the driver decides how to present them.

pub mod decorator;
pub mod domain;
pub mod factory;
pub mod observer;
pub mod ports;
pub mod strategy;

pub use self::decorator::{BaseEntity, Component, ComponentExt, Decorated};
pub use self::domain::{ObserverError, ObserverId, PatternError, Price, PriceTable, Size};
pub use self::factory::Factory;
pub use self::observer::{Observer, StateSource, Subject, Subscription};
pub use self::strategy::Slot;
