//! Discovery - strategy 型のリンク時自己登録
//!
//! 各 strategy モジュールは impl の隣で `submit_strategy!(TheType)` を呼びます。
//! マクロが `StrategyRegistration` を `inventory` のサイドテーブルに置くので、
//! `discovered()` はバイナリにリンクされた全ての具象 strategy を列挙できます。
//! 中央の一覧を手で保守する必要はありません。
//!
//! # 学習ポイント
//! - `inventory::submit!` / `inventory::collect!` によるリンク時レジストリ
//! - 非キャプチャ closure → fn pointer への coercion（static 初期化子で使える）
//! - `TypeId` による型の同一性判定（名前文字列に依存しない）
//!
//! # 制約
//! `DiscoverableStrategy`（`Sized`）を実装した型だけが登録できるため、
//! trait object や capability 自体はテーブルに入りません。

use std::any::{self, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::ports::{DisplaySink, IntentStrategy};

/// StrategyContext は strategy の構築時に渡される依存
#[derive(Clone)]
pub struct StrategyContext {
    display: Arc<dyn DisplaySink>,
}

impl StrategyContext {
    pub fn new(display: Arc<dyn DisplaySink>) -> Self {
        Self { display }
    }

    pub fn display(&self) -> Arc<dyn DisplaySink> {
        self.display.clone()
    }
}

/// DiscoverableStrategy は `StrategyContext` から構築できる具象 strategy 型
pub trait DiscoverableStrategy: IntentStrategy + Sized + 'static {
    fn from_context(context: &StrategyContext) -> Self;
}

pub type ConstructFn = fn(&StrategyContext) -> Arc<dyn IntentStrategy>;
pub type TypeIdFn = fn() -> TypeId;
pub type TypeNameFn = fn() -> &'static str;

/// StrategyRegistration は strategy 型とコンストラクタを結びつける
///
/// # 同一性
/// - 型の同一性は `type_id()`（`TypeId`）で判定
/// - `type_name()` はログ用のラベルに過ぎない
/// - key（`IntentStrategy::key`）はインスタンスができるまで分からない
///
/// `TypeId::of` / `type_name` は const で呼べないため、fn pointer で保持します。
#[derive(Clone, Copy)]
pub struct StrategyRegistration {
    type_id: TypeIdFn,
    type_name: TypeNameFn,
    construct: ConstructFn,
}

impl StrategyRegistration {
    pub const fn new(type_id: TypeIdFn, type_name: TypeNameFn, construct: ConstructFn) -> Self {
        Self {
            type_id,
            type_name,
            construct,
        }
    }

    /// サイドテーブルを経由しない `T` の登録
    pub fn of<T: DiscoverableStrategy>() -> Self {
        Self::new(TypeId::of::<T>, any::type_name::<T>, construct_strategy::<T>)
    }

    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    pub fn construct(&self, context: &StrategyContext) -> Arc<dyn IntentStrategy> {
        (self.construct)(context)
    }
}

impl fmt::Debug for StrategyRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistration")
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}

fn construct_strategy<T: DiscoverableStrategy>(context: &StrategyContext) -> Arc<dyn IntentStrategy> {
    Arc::new(T::from_context(context))
}

inventory::collect!(StrategyRegistration);

/// リンクされたプログラム全体から submit された登録の一覧
///
/// 列挙順は不定です。
pub fn discovered() -> impl Iterator<Item = &'static StrategyRegistration> {
    inventory::iter::<StrategyRegistration>.into_iter()
}

/// strategy 型を discovery テーブルに登録する
///
/// # 使用例
/// ```ignore
/// pub struct PingStrategy { display: Arc<dyn DisplaySink> }
///
/// impl DiscoverableStrategy for PingStrategy {
///     fn from_context(context: &StrategyContext) -> Self {
///         Self { display: context.display() }
///     }
/// }
///
/// switchyard_core::submit_strategy!(PingStrategy);
/// ```
#[macro_export]
macro_rules! submit_strategy {
    ($ty:ty) => {
        $crate::registry::inventory::submit! {
            $crate::registry::StrategyRegistration::new(
                || ::core::any::TypeId::of::<$ty>(),
                || ::core::any::type_name::<$ty>(),
                |context: &$crate::registry::StrategyContext|
                    -> ::std::sync::Arc<dyn $crate::ports::IntentStrategy> {
                    ::std::sync::Arc::new(
                        <$ty as $crate::registry::DiscoverableStrategy>::from_context(context),
                    )
                },
            )
        }
    };
}
