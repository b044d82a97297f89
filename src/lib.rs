//! tidydown - a download-folder tidying utility
//!
//! This library provides utilities for selecting folder entries older than a
//! retention window, relocating them into dated `YYYY-MM` subfolders, and
//! reporting the result on the console. One invocation performs one pass over
//! a single folder; nothing is scanned recursively and no state is kept
//! between runs.

pub mod cli;
pub mod output;
pub mod path_probe;
pub mod relocator;
pub mod selector;

pub use output::Console;
pub use path_probe::PathKind;
pub use relocator::{RelocateError, relocate};
pub use selector::{SelectError, select};

pub use cli::{Cli, RunSummary, run, run_folder};
