//! StrategyCatalog - strategy 型の一覧とインスタンスの寿命
//!
//! catalog は capability → 実装 の対応表です。
//! インスタンスは作らず、構築は `StrategyProvider` が担当します。
//!
//! # 学習ポイント
//! - `TypeId` をキーにした重複排除（再登録は置き換え）
//! - serde の `rename_all` で設定ファイルの表記に合わせる

use serde::{Deserialize, Serialize};

use super::discovery::{self, StrategyRegistration};

/// Lifetime of the instances built from one registration.
///
/// - `Singleton`: built once, shared by every scope
/// - `Scoped`: built once per `ProviderScope`
/// - `Transient`: built on every resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    #[default]
    Singleton,
    Scoped,
    Transient,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub registration: StrategyRegistration,
    pub lifetime: Lifetime,
}

/// StrategyCatalog は strategy 型ごとに最大 1 エントリを保持
///
/// # 冪等性
/// - 同じ型（同じ `TypeId`）の再登録はエントリを置き換える
/// - discovery を 2 回実行しても catalog は変わらない
/// - 登録時に渡した名前ではなく型そのもので判定する
#[derive(Debug, Clone, Default)]
pub struct StrategyCatalog {
    entries: Vec<CatalogEntry>,
}

impl StrategyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every discovered strategy type under `lifetime`.
    pub fn discover(lifetime: Lifetime) -> Self {
        let mut catalog = Self::new();
        catalog.add_discovered(lifetime);
        catalog
    }

    /// Add every discovered strategy type. Returns how many were seen.
    pub fn add_discovered(&mut self, lifetime: Lifetime) -> usize {
        let mut seen = 0;
        for registration in discovery::discovered() {
            tracing::debug!(type_name = registration.type_name(), ?lifetime, "discovered strategy");
            self.register(*registration, lifetime);
            seen += 1;
        }
        seen
    }

    /// Register one type. Returns the lifetime of the entry it replaced.
    pub fn register(
        &mut self,
        registration: StrategyRegistration,
        lifetime: Lifetime,
    ) -> Option<Lifetime> {
        let entry = CatalogEntry {
            registration,
            lifetime,
        };
        match self
            .entries
            .iter_mut()
            .find(|e| e.registration.type_id() == registration.type_id())
        {
            Some(existing) => {
                let previous = existing.lifetime;
                *existing = entry;
                Some(previous)
            }
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|e| e.registration.type_name())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{AverageStrategy, DelayStrategy};

    #[test]
    fn discover_finds_every_builtin() {
        let catalog = StrategyCatalog::discover(Lifetime::Singleton);
        assert_eq!(catalog.len(), 3);
        assert!(
            catalog
                .entries()
                .iter()
                .all(|e| e.lifetime == Lifetime::Singleton)
        );
    }

    #[test]
    fn discovering_twice_does_not_duplicate() {
        let mut catalog = StrategyCatalog::new();
        let first = catalog.add_discovered(Lifetime::Singleton);
        let second = catalog.add_discovered(Lifetime::Transient);

        assert_eq!(first, second);
        assert_eq!(catalog.len(), first);
        assert!(
            catalog
                .entries()
                .iter()
                .all(|e| e.lifetime == Lifetime::Transient)
        );
    }

    #[test]
    fn register_replaces_same_type() {
        let mut catalog = StrategyCatalog::new();
        let delay = StrategyRegistration::of::<DelayStrategy>();
        let average = StrategyRegistration::of::<AverageStrategy>();

        assert_eq!(catalog.register(delay, Lifetime::Scoped), None);
        assert_eq!(catalog.register(average, Lifetime::Scoped), None);
        assert_eq!(
            catalog.register(delay, Lifetime::Transient),
            Some(Lifetime::Scoped)
        );
        assert_eq!(
            catalog.type_names(),
            vec![
                std::any::type_name::<DelayStrategy>(),
                std::any::type_name::<AverageStrategy>(),
            ]
        );
    }

    #[test]
    fn explicit_registration_after_discovery_replaces_submitted_entry() {
        let mut catalog = StrategyCatalog::discover(Lifetime::Singleton);
        let replaced = catalog.register(
            StrategyRegistration::of::<DelayStrategy>(),
            Lifetime::Transient,
        );

        assert_eq!(replaced, Some(Lifetime::Singleton));
        assert_eq!(catalog.len(), 3);
        let delay = catalog
            .entries()
            .iter()
            .find(|e| e.registration.type_id() == std::any::TypeId::of::<DelayStrategy>())
            .unwrap();
        assert_eq!(delay.lifetime, Lifetime::Transient);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = StrategyCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.type_names().is_empty());
    }

    #[test]
    fn lifetime_reads_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            lifetime: Lifetime,
        }
        let w: Wrapper = serde_json::from_str(r#"{"lifetime":"scoped"}"#).unwrap();
        assert_eq!(w.lifetime, Lifetime::Scoped);
    }
}
