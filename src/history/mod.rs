//! Move history for undo.

pub mod undo;

pub use undo::UndoHistory;
