//! # Ni
//!
//! A modal, terminal-resident text viewer/editor in the vi family.
//!
//! Ni owns the whole terminal path itself: it switches the terminal into
//! raw mode, decodes escape sequences off the raw byte stream, keeps the
//! file in an in-memory row store with tab-expanded render forms, and
//! repaints by composing each frame into one buffer written in a single
//! syscall.
//!
//! ## Core Concepts
//!
//! - **Scoped raw mode**: the original terminal configuration is restored
//!   on every exit path by an RAII guard
//! - **Semantic key events**: multi-byte escape sequences decode into a
//!   closed event set; incomplete sequences degrade to a bare Esc
//! - **Derived render forms**: each row keeps raw bytes plus a
//!   tab-expanded display form, regenerated on every mutation
//! - **Single-write frames**: rows, status bar, and message bar are
//!   composed into one buffer and flushed atomically to avoid tearing
//! - **Modal dispatch**: one key per turn routed through the
//!   Normal/Insert/Command state machine
//!
//! ## Example
//!
//! ```rust
//! use ni::{Editor, Key};
//!
//! // A session for a 24x80 terminal with a two-row buffer.
//! let mut editor = Editor::new(24, 80);
//! editor.buffer_mut().append_row(b"hello");
//! editor.buffer_mut().append_row(b"world");
//!
//! editor.process_key(Key::Char(b'j'));
//! assert_eq!(editor.cursor(), (0, 1));
//!
//! let frame = editor.render_frame();
//! assert!(!frame.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod editor;
pub mod error;
pub mod input;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Row, TextBuffer, TAB_STOP};
pub use editor::{Editor, Mode};
pub use error::{Error, Result};
pub use input::{Key, KeyDecoder};
pub use terminal::{window_size, FrameBuffer, RawMode};

/// Version string baked in from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
