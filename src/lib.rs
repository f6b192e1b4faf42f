//! Meme canvas layout: aspect-preserving image fit, caption placement, and
//! speech controls.
//!
//! Pure geometry and state; no pixel decoding, no DOM, no audio. The core
//! [`fit()`] is `no_std` and allocation-free.
//!
//! # Modules
//!
//! - [`fit`](mod@fit) — Fit a content image into a fixed container
//! - [`color`] — sRGB colors and hex/named parsing
//! - [`draw`] — Draw commands a rendering surface replays
//! - [`caption`] — Top/bottom caption placement
//! - [`speech`] — Voice labels and selection, volume indicator
//! - [`session`] — Editor session: control state and event handlers
//! - [`config`] — Canvas configuration
//! - `query` — Query string configuration (feature `query`)
//! - `svg` — SVG rendering surface (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod fit;

#[cfg(feature = "alloc")]
pub mod caption;
#[cfg(feature = "alloc")]
pub mod config;
#[cfg(feature = "alloc")]
pub mod draw;
#[cfg(feature = "alloc")]
pub mod session;
#[cfg(feature = "alloc")]
pub mod speech;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use color::Color;
pub use fit::{Aspect, FitError, FitPolicy, FitResult, checked_fit, fit, fit_with, validate};

#[cfg(feature = "alloc")]
pub use caption::{CaptionPlacement, CaptionPosition, CaptionStyle, Captions};
#[cfg(feature = "alloc")]
pub use config::CanvasConfig;
#[cfg(feature = "alloc")]
pub use draw::{DrawCommand, TextAlign, TextBaseline, TextPaint};
#[cfg(feature = "alloc")]
pub use session::{Controls, LoadedImage, MemeSession, SessionError};
#[cfg(feature = "alloc")]
pub use speech::{Utterance, Voice, VoiceList, VoiceOption, Volume, VolumeLevel};
