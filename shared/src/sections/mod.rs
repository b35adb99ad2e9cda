//! Content payloads and variant tags, one module per page section.

pub mod about;
pub mod contact;
pub mod content_block;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_we_work;
pub mod navbar;
pub mod previous_work;
pub mod pricing;
pub mod team;
pub mod testimonials;
pub mod trust_bar;
