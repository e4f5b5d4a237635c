//! Exit-node selection menu for the panel widget.
//!
//! [`ExitNodeRegistry`] holds the current exit-node candidates and decides
//! when the menu needs rebuilding; [`MenuEntry`] is the toolkit-agnostic
//! descriptor the UI layer renders from.

mod menu;

pub use menu::{ExitNodeRegistry, MenuEntry};
