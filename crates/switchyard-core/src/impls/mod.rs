//! Impls - implementations of the ports.
//!
//! # Included
//! - **ConsoleDisplay**: waits, then prints to stdout
//! - **RecordingDisplay**: keeps messages in memory (tests, dry runs)

pub mod console_display;
pub mod recording_display;

pub use self::console_display::ConsoleDisplay;
pub use self::recording_display::RecordingDisplay;
