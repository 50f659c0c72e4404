//! AppBuilder - composition root（アプリケーションの構築とワイヤリング）
//!
//! strategy の発見、lifetime の決定、display sink の接続、factory の構築を行います。
//! 配線の誤りは全て `build()` で検出し、最初の dispatch より前に失敗させます。
//!
//! # 学習ポイント
//! - Builder パターン（所有権を受け取って `Self` を返すチェーン）
//! - 起動時検証（Fail-fast 設計）
//! - 設定の「記録」と「適用」を分ける（lifetime は `build()` で確定）

use std::sync::Arc;

use super::dispatcher::Dispatcher;
use crate::config::SwitchyardConfig;
use crate::domain::BuildError;
use crate::factory::StrategyFactory;
use crate::impls::ConsoleDisplay;
use crate::ports::DisplaySink;
use crate::registry::{
    Lifetime, ProviderScope, StrategyCatalog, StrategyContext, StrategyProvider,
    StrategyRegistration,
};

/// AppBuilder は `App` を構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new()
///     .discover()
///     .lifetime(Lifetime::Scoped)
///     .expect_keys(&["Delay"])
///     .build()?;
/// app.dispatcher().dispatch(&UserIntent::new(Intent::Delay)).await?;
/// ```
///
/// # lifetime の適用
/// - `lifetime()` は呼び出し順に関係なく `build()` 時に適用される
/// - `discover()` / `register()` で追加した型は builder の lifetime を使う
/// - `register_with_lifetime()` で個別に指定した型はその lifetime を使う
///
/// # Fail-fast 設計
/// - 同じ key の strategy が 2 つ → `BuildError::DuplicateKey`
/// - `expect_keys()` の key が未登録 → `BuildError::MissingKeys`
pub struct AppBuilder {
    discover: bool,
    registrations: Vec<(StrategyRegistration, Option<Lifetime>)>,
    lifetime: Lifetime,
    display: Option<Arc<dyn DisplaySink>>,
    expected_keys: Option<Vec<String>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            discover: false,
            registrations: Vec::new(),
            lifetime: Lifetime::default(),
            display: None,
            expected_keys: None,
        }
    }

    /// 設定から builder を作成（lifetime, console の delay, expected keys）
    ///
    /// strategy は別途 `discover()` / `register()` で追加します。
    pub fn from_config(config: &SwitchyardConfig) -> Self {
        let mut builder = Self::new()
            .lifetime(config.lifetime)
            .with_display(Arc::new(ConsoleDisplay::from_config(&config.display)));
        if !config.dispatch.expected_keys.is_empty() {
            builder.expected_keys = Some(config.dispatch.expected_keys.clone());
        }
        builder
    }

    /// 個別指定のない strategy に適用する lifetime
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// プログラムにリンクされた全ての strategy 型を追加
    ///
    /// 何度呼んでも結果は同じです。
    pub fn discover(mut self) -> Self {
        self.discover = true;
        self
    }

    /// strategy 型を 1 つ手動で追加
    ///
    /// discover 済みの型を再登録した場合はエントリが置き換わります（重複しない）。
    pub fn register(mut self, registration: StrategyRegistration) -> Self {
        self.registrations.push((registration, None));
        self
    }

    /// builder の lifetime を使わずに strategy 型を追加
    pub fn register_with_lifetime(
        mut self,
        registration: StrategyRegistration,
        lifetime: Lifetime,
    ) -> Self {
        self.registrations.push((registration, Some(lifetime)));
        self
    }

    pub fn with_display(mut self, display: Arc<dyn DisplaySink>) -> Self {
        self.display = Some(display);
        self
    }

    /// 登録されていなければならない key のリストを設定
    pub fn expect_keys(mut self, keys: &[&str]) -> Self {
        self.expected_keys = Some(keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// catalog を組み立てる
    ///
    /// 発見した型を先に入れ、手動登録で上書きします。
    fn catalog(&self) -> StrategyCatalog {
        let mut catalog = StrategyCatalog::new();
        if self.discover {
            let seen = catalog.add_discovered(self.lifetime);
            tracing::debug!(seen, lifetime = ?self.lifetime, "strategy discovery finished");
        }
        for (registration, lifetime) in &self.registrations {
            catalog.register(*registration, lifetime.unwrap_or(self.lifetime));
        }
        catalog
    }

    /// AppBuilder を構築して App を生成
    ///
    /// # Errors
    /// - `DuplicateKey`: 2 つの strategy が同じ key を宣言している
    /// - `MissingKeys`: expected key に対応する strategy がない
    pub fn build(self) -> Result<App, BuildError> {
        let catalog = self.catalog();
        let display = self
            .display
            .unwrap_or_else(|| Arc::new(ConsoleDisplay::default()));
        let provider = StrategyProvider::new(catalog, StrategyContext::new(display));
        let factory = StrategyFactory::new(provider.strategies())?;

        if let Some(expected) = &self.expected_keys {
            let missing: Vec<String> = expected
                .iter()
                .filter(|k| !factory.contains_key(k))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingKeys(missing));
            }
        }

        tracing::info!(keys = ?factory.keys(), lifetime = ?self.lifetime, "app built");
        Ok(App {
            provider,
            factory: Arc::new(factory),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// App は全ての strategy インスタンスと root factory を所有
///
/// # 所有権
/// - strategy インスタンス: `StrategyProvider`（lifetime ごとのキャッシュ）
/// - factory: `Arc` で `Dispatcher` と共有（読み取り専用）
pub struct App {
    provider: StrategyProvider,
    factory: Arc<StrategyFactory>,
}

impl App {
    pub fn factory(&self) -> Arc<StrategyFactory> {
        self.factory.clone()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.factory.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.factory.keys()
    }

    /// 独自の factory を持つ scope を開く
    ///
    /// - `Scoped`: scope ごとに新しく構築
    /// - `Singleton`: app と共有
    /// - `Transient`: この scope の factory 用に新しく構築
    pub fn scope(&self) -> Result<AppScope, BuildError> {
        let scope = self.provider.create_scope();
        let factory = StrategyFactory::new(scope.strategies())?;
        Ok(AppScope {
            _scope: scope,
            factory: Arc::new(factory),
        })
    }
}

/// AppScope は 1 つの scope とその factory を束ねる
pub struct AppScope {
    _scope: ProviderScope,
    factory: Arc<StrategyFactory>,
}

impl AppScope {
    pub fn factory(&self) -> Arc<StrategyFactory> {
        self.factory.clone()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.factory.clone())
    }
}
