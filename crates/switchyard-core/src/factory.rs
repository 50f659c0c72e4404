//! StrategyFactory - `UserIntent` から strategy を引く
//!
//! # 設計
//! - 全ての strategy インスタンスから一度だけ構築
//! - 構築後は読み取り専用なので、ロックなしで `Arc` 共有できる
//! - key は `Intent` の正規テキスト（`UserIntent::lookup_key` を参照）
//!
//! # 学習ポイント
//! - `HashMap<String, Arc<dyn Trait>>` による動的ディスパッチ表
//! - 構築時の重複検出（Fail-fast）と、引けなかった場合の型付きエラー

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{BuildError, DispatchError, UserIntent};
use crate::ports::IntentStrategy;

/// StrategyFactory は key → strategy の表
///
/// # 使用例
/// ```ignore
/// let factory = StrategyFactory::new(vec![delay, average])?;
/// let strategy = factory.get_strategy(&UserIntent::new(Intent::Delay))?;
/// strategy.process(&user_intent).await?;
/// ```
pub struct StrategyFactory {
    strategies: HashMap<String, Arc<dyn IntentStrategy>>,
}

impl StrategyFactory {
    /// strategy を key で索引化
    ///
    /// # Errors
    /// - `DuplicateKey`: 2 つの strategy が同じ key を宣言している
    pub fn new<I>(strategies: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Arc<dyn IntentStrategy>>,
    {
        let mut map: HashMap<String, Arc<dyn IntentStrategy>> = HashMap::new();
        for strategy in strategies {
            let key = strategy.key().to_string();
            if map.contains_key(&key) {
                tracing::error!(%key, "two strategies declare the same key");
                return Err(BuildError::DuplicateKey(key));
            }
            map.insert(key, strategy);
        }

        let factory = Self { strategies: map };
        tracing::debug!(keys = ?factory.keys(), "strategy factory built");
        Ok(factory)
    }

    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// `user_intent` に対応する strategy を返す
    ///
    /// 見つからない場合は `DispatchError::UnhandledIntent`（同じインスタンスを返し続ける）
    pub fn get_strategy(
        &self,
        user_intent: &UserIntent,
    ) -> Result<Arc<dyn IntentStrategy>, DispatchError> {
        self.strategies
            .get(&user_intent.lookup_key())
            .cloned()
            .ok_or(DispatchError::UnhandledIntent(user_intent.intent))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// 登録済みの key（ソート済み）
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.strategies.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HandlerError, Intent};
    use async_trait::async_trait;
    use rstest::rstest;

    struct Keyed(&'static str);

    #[async_trait]
    impl IntentStrategy for Keyed {
        fn key(&self) -> &str {
            self.0
        }

        async fn process(&self, _user_intent: &UserIntent) -> Result<(), HandlerError> {
            Ok(())
        }
    }

    fn keyed(keys: &[&'static str]) -> Vec<Arc<dyn IntentStrategy>> {
        keys.iter()
            .map(|k| Arc::new(Keyed(*k)) as Arc<dyn IntentStrategy>)
            .collect()
    }

    #[rstest]
    #[case(Intent::Delay, "Delay")]
    #[case(Intent::Available, "Available")]
    #[case(Intent::Average, "Average")]
    #[case(Intent::from_value(0), "Delay")]
    fn resolves_registered_key(#[case] intent: Intent, #[case] key: &str) {
        let strategies = keyed(&["Delay", "Available", "Average"]);
        let expected = strategies
            .iter()
            .find(|s| s.key() == key)
            .cloned()
            .unwrap();
        let factory = StrategyFactory::new(strategies).unwrap();

        let resolved = factory.get_strategy(&UserIntent::new(intent)).unwrap();
        assert!(Arc::ptr_eq(&resolved, &expected));
    }

    #[rstest]
    #[case(Intent::Other)]
    #[case(Intent::from_value(17))]
    fn unregistered_intent_is_unhandled(#[case] intent: Intent) {
        let factory = StrategyFactory::new(keyed(&["Delay", "Available", "Average"])).unwrap();
        let err = factory.get_strategy(&UserIntent::new(intent)).err().unwrap();
        assert_eq!(err, DispatchError::UnhandledIntent(intent));
        assert!(err.to_string().contains(&intent.to_string()));
        assert_eq!(factory.len(), 3);
    }

    #[test]
    fn duplicate_key_fails_construction() {
        let result = StrategyFactory::new(keyed(&["Delay", "Average", "Delay"]));
        assert!(matches!(result, Err(BuildError::DuplicateKey(key)) if key == "Delay"));
    }

    #[test]
    fn empty_factory_handles_nothing() {
        let factory = StrategyFactory::new(Vec::new()).unwrap();
        assert!(factory.is_empty());
        for intent in Intent::KNOWN {
            assert!(factory.get_strategy(&UserIntent::new(intent)).is_err());
        }
        assert!(StrategyFactory::empty().is_empty());
    }

    #[test]
    fn repeated_lookups_return_same_instance() {
        let factory = StrategyFactory::new(keyed(&["Delay"])).unwrap();
        let intent = UserIntent::new(Intent::Delay);

        let a = factory.get_strategy(&intent).unwrap();
        let b = factory.get_strategy(&intent).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.keys(), vec!["Delay"]);
    }

    #[test]
    fn keys_are_sorted() {
        let factory = StrategyFactory::new(keyed(&["Delay", "Available", "Average"])).unwrap();
        assert_eq!(factory.keys(), vec!["Available", "Average", "Delay"]);
        assert!(factory.contains_key("Average"));
        assert!(!factory.contains_key("Other"));
    }
}
