//! Interactive runtime for unitwise: a line-editing REPL over the
//! conversion-query parser.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
