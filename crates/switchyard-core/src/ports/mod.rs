//! Ports - the seams between the dispatch core and the outside.
//!
//! - **IntentStrategy**: the capability every handler implements
//! - **DisplaySink**: where handlers send their observable effect

pub mod display;
pub mod strategy;

pub use self::display::DisplaySink;
pub use self::strategy::IntentStrategy;
