//! Registry - strategy 型の発見とインスタンス構築
//!
//! # 三層構造
//! - **discovery**: `submit_strategy!` が埋めるリンク時サイドテーブル
//! - **catalog**: strategy 型ごとに 1 エントリ（`Lifetime` 付き）
//! - **provider**: catalog のエントリを共有インスタンスに変換
//!
//! # 流れ
//! 1. 各 strategy モジュールが `submit_strategy!` で自己登録
//! 2. `StrategyCatalog::discover()` が全登録を `TypeId` 単位で集める
//! 3. `StrategyProvider` が lifetime に従ってインスタンスを返す
//! 4. `StrategyFactory` が key → strategy の表を作る

pub mod catalog;
pub mod discovery;
pub mod provider;

pub use self::catalog::{CatalogEntry, Lifetime, StrategyCatalog};
pub use self::discovery::{
    ConstructFn, DiscoverableStrategy, StrategyContext, StrategyRegistration, TypeIdFn,
    TypeNameFn, discovered,
};
pub use self::provider::{ProviderScope, StrategyProvider};

#[doc(hidden)]
pub use inventory;
