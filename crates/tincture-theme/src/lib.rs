//! # tincture-theme: nine colors in, a named color tree out
//!
//! Turns a palette of one background, one foreground and seven accents into
//! a tree of shades, hue roles and semantic aliases, then formats every
//! color for a logic-less template.
//!
//! # Architecture
//!
//! ```text
//! "282936-e9e9f4-ff5555-..."
//!     │
//!     ▼
//! palette.rs:  decode the nine hex groups
//!     │
//!     ▼
//! shade.rs:    foreground + c1..c7 mixed toward the background (p10..p125)
//!     │
//!     ▼
//! role.rs:     pick which accent is red, yellow, ..., magenta
//!     │
//!     ▼
//! fallback.rs: the numbered `todo` placeholder group
//!     │
//!     ▼
//! semantic.rs: ui / syntax / terminal aliases from a JSON document
//!     │
//!     ▼
//! format.rs:   hex, hex_bgr, per-channel hex / decimal / fraction
//!     │
//!     ▼
//! template.rs: {{ ui.error.hex }} substitution
//! ```
//!
//! `theme.rs` runs the middle stages in order; `tree.rs` holds the result.
//! Aliases share nodes rather than copying colors, so `red.p50` and
//! `c1.p50` are the same entry when `c1` is the red accent.

pub mod config;
pub mod error;
pub mod fallback;
pub mod format;
pub mod palette;
pub mod role;
pub mod semantic;
pub mod shade;
pub mod template;
pub mod theme;
pub mod tree;

pub use config::ThemeConfig;
pub use error::{Occupant, Result, ThemeError};
pub use fallback::FallbackConfig;
pub use format::{FormattedNode, format};
pub use palette::{MalformedPalette, Palette};
pub use role::{DistanceMetric, Role, RoleAssignment, RoleConfig, assign_roles};
pub use semantic::{SemanticConfig, SemanticValue};
pub use shade::{ShadeRatios, ShadeSet, build_shades};
pub use template::{render, render_palette};
pub use theme::build;
pub use tree::{Branch, ColorNode, ColorTree, NodeId};
