//! StrategyProvider - lifetime に従って strategy インスタンスを構築
//!
//! # 所有権
//! - singleton: provider の共有状態が保持し、全ての scope より長生き
//! - scoped: それを構築した `ProviderScope` が保持
//! - transient: 解決した呼び出し側が所有
//!
//! provider 自身から scoped 登録を解決した場合は root scope を使います。
//!
//! # 学習ポイント
//! - `OnceLock` による遅延初期化キャッシュ（ロック不要の読み出し）
//! - `Arc` で共有状態を scope 間で共有

use std::sync::{Arc, OnceLock};

use super::catalog::{CatalogEntry, Lifetime, StrategyCatalog};
use super::discovery::StrategyContext;
use crate::ports::IntentStrategy;

type Slot = OnceLock<Arc<dyn IntentStrategy>>;

struct ProviderShared {
    entries: Vec<CatalogEntry>,
    context: StrategyContext,
    singletons: Vec<Slot>,
}

impl ProviderShared {
    fn build(&self, entry: &CatalogEntry) -> Arc<dyn IntentStrategy> {
        let strategy = entry.registration.construct(&self.context);
        tracing::trace!(
            type_name = entry.registration.type_name(),
            key = strategy.key(),
            lifetime = ?entry.lifetime,
            "constructed strategy"
        );
        strategy
    }
}

/// ProviderScope resolves strategies and caches the scoped ones.
pub struct ProviderScope {
    shared: Arc<ProviderShared>,
    scoped: Vec<Slot>,
}

impl ProviderScope {
    fn new(shared: Arc<ProviderShared>) -> Self {
        let scoped = empty_slots(shared.entries.len());
        Self { shared, scoped }
    }

    /// One instance per registered type.
    pub fn strategies(&self) -> Vec<Arc<dyn IntentStrategy>> {
        self.shared
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry.lifetime {
                Lifetime::Singleton => self.shared.singletons[i]
                    .get_or_init(|| self.shared.build(entry))
                    .clone(),
                Lifetime::Scoped => self.scoped[i]
                    .get_or_init(|| self.shared.build(entry))
                    .clone(),
                Lifetime::Transient => self.shared.build(entry),
            })
            .collect()
    }
}

/// StrategyProvider owns the catalog and the construction context.
pub struct StrategyProvider {
    root: ProviderScope,
}

impl StrategyProvider {
    pub fn new(catalog: StrategyCatalog, context: StrategyContext) -> Self {
        let entries = catalog.entries().to_vec();
        let shared = Arc::new(ProviderShared {
            singletons: empty_slots(entries.len()),
            entries,
            context,
        });
        Self {
            root: ProviderScope::new(shared),
        }
    }

    pub fn strategies(&self) -> Vec<Arc<dyn IntentStrategy>> {
        self.root.strategies()
    }

    pub fn create_scope(&self) -> ProviderScope {
        ProviderScope::new(self.root.shared.clone())
    }

    pub fn len(&self) -> usize {
        self.root.shared.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn empty_slots(n: usize) -> Vec<Slot> {
    (0..n).map(|_| OnceLock::new()).collect()
}
