//! Calculator core for two-operand arithmetic.
//!
//! This module provides:
//! - The input state machine (digit entry, operators, equals, clear, delete)
//! - Operator arithmetic without any dynamic evaluation
//! - Display formatting with digit grouping
//! - Keyboard mapping and clipboard copying for front ends

mod clipboard;
mod format;
mod input;
mod operator;
mod state;

pub use clipboard::{ClipboardError, clipboard_text, copy_to_clipboard};
pub use format::{NumberFormat, format_for_display, stringify_result};
pub use input::{CalcEvent, Key, event_for_key, parse_keys};
pub use operator::{ArithmeticFailure, Operator};
pub use state::{Calculator, Display, ERROR_SENTINEL, Mode};
