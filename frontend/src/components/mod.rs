// Building blocks shared by the section components.

pub mod error_banner;
pub mod icons;
pub mod media;
pub mod motion;
pub mod section_heading;
pub mod theme_toggle;
