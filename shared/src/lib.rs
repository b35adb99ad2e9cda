//! Content model and interaction state for the launchpad landing-page
//! sections.
//!
//! Everything here is independent of the browser: the Yew frontend renders
//! these payloads, and the same types can be validated or inspected natively.

mod error;
mod variant;

pub mod content;
pub mod outline;
pub mod page;
pub mod sections;
pub mod theme;

pub use content::{CallToAction, Emphasis, IconName, Media, NavLink, SocialLink};
pub use error::ConfigError;
pub use outline::{Block, Outline, Section};
pub use page::{PageConfig, SectionConfig};
pub use theme::{Theme, ThemeBackend, ThemeController};
