//! Page footer, copyright line and newsletter signup state.

use serde::{Deserialize, Serialize};

use crate::{
    content::{NavLink, SocialLink},
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

const DEFAULT_COMPANY: &str = "Company";
const DEFAULT_NEWSLETTER_PLACEHOLDER: &str = "Enter your email";

closed_variant! {
    /// Footer layouts.
    pub enum FooterVariant for "footer" default Simple {
        /// One link row.
        Simple => "simple",
        /// Link columns.
        Columns => "columns",
        /// Social icons only.
        SocialOnly => "social-only",
        /// Newsletter signup.
        Newsletter => "newsletter",
        /// Everything above.
        Full => "full",
    }
}

impl FooterVariant {
    /// Arrangement of the link, social and newsletter row.
    pub fn layout_class(self) -> &'static str {
        match self {
            FooterVariant::Simple | FooterVariant::Full => {
                "flex flex-col gap-6 md:flex-row md:items-center md:justify-between"
            },
            FooterVariant::Columns => "flex flex-col gap-6",
            FooterVariant::SocialOnly | FooterVariant::Newsletter => {
                "flex flex-col items-center gap-6"
            },
        }
    }

    /// Renders link columns.
    pub fn shows_columns(self) -> bool {
        matches!(self, FooterVariant::Columns | FooterVariant::Full)
    }

    /// Renders the flat link row.
    pub fn shows_links(self) -> bool {
        matches!(self, FooterVariant::Simple | FooterVariant::Full)
    }

    /// Renders social icons.
    pub fn shows_socials(self) -> bool {
        matches!(self, FooterVariant::SocialOnly | FooterVariant::Full)
    }

    /// Renders the newsletter form.
    pub fn shows_newsletter(self) -> bool {
        matches!(self, FooterVariant::Newsletter | FooterVariant::Full)
    }
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column title.
    pub title: String,
    /// Links under the title.
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Footer content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Name in the generated copyright line.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Replaces the generated copyright line.
    #[serde(default)]
    pub copyright: Option<String>,
    /// Flat link row.
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Link columns.
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    /// Social icons.
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Placeholder of the newsletter email input.
    #[serde(default)]
    pub newsletter_placeholder: Option<String>,
}

impl FooterContent {
    /// Company shown in the copyright line.
    pub fn company(&self) -> &str {
        self.company_name.as_deref().unwrap_or(DEFAULT_COMPANY)
    }

    /// Placeholder of the newsletter email input.
    pub fn placeholder(&self) -> &str {
        self.newsletter_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_NEWSLETTER_PLACEHOLDER)
    }

    /// Copyright line for `year`.
    pub fn copyright_line(&self, year: u32) -> String {
        match &self.copyright {
            Some(text) => text.clone(),
            None => format!("© {year} {}. All rights reserved.", self.company()),
        }
    }

    /// Blocks rendered when a newsletter handler is or is not wired; the
    /// signup form needs one.
    pub fn outline_with(&self, variant: FooterVariant, newsletter_wired: bool) -> Outline {
        let mut outline = Outline::new();
        outline
            .push_if(variant.shows_columns() && !self.columns.is_empty(), Block::Columns)
            .push_if(variant.shows_links() && !self.links.is_empty(), Block::Links)
            .push_if(variant.shows_socials() && !self.socials.is_empty(), Block::Socials)
            .push_if(variant.shows_newsletter() && newsletter_wired, Block::Newsletter)
            .push(Block::Copyright);
        outline
    }
}

impl Section for FooterContent {
    type Variant = FooterVariant;

    /// Assumes a newsletter handler is wired; see
    /// [`FooterContent::outline_with`].
    fn outline(&self, variant: FooterVariant) -> Outline {
        self.outline_with(variant, true)
    }
}

/// Email typed into the newsletter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
}

impl NewsletterForm {
    /// Replaces the typed email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Currently typed email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Hands out the email for the subscribe callback and clears the input.
    pub fn submit(&mut self) -> String {
        tracing::debug!("newsletter signup submitted");
        std::mem::take(&mut self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::IconName;

    fn link(label: &str) -> NavLink {
        NavLink {
            label: label.to_string(),
            href: format!("#{label}"),
            external: false,
        }
    }

    #[test]
    fn copyright_defaults_to_company_line() {
        let mut footer = FooterContent::default();
        assert_eq!(footer.copyright_line(2026), "© 2026 Company. All rights reserved.");
        footer.company_name = Some("TWT".to_string());
        assert_eq!(footer.copyright_line(2026), "© 2026 TWT. All rights reserved.");
        footer.copyright = Some("All yours".to_string());
        assert_eq!(footer.copyright_line(2026), "All yours");
    }

    #[test]
    fn full_footer_shows_every_populated_block() {
        let footer = FooterContent {
            links: vec![link("about")],
            columns: vec![FooterColumn {
                title: "Company".to_string(),
                links: vec![link("team")],
            }],
            socials: vec![SocialLink {
                icon: IconName::Github,
                href: "https://github.com".to_string(),
                label: None,
            }],
            ..FooterContent::default()
        };

        assert_eq!(
            footer.outline(FooterVariant::Full).blocks(),
            &[Block::Columns, Block::Links, Block::Socials, Block::Newsletter, Block::Copyright]
        );
        assert_eq!(
            footer.outline_with(FooterVariant::Newsletter, false).blocks(),
            &[Block::Copyright]
        );
        assert_eq!(
            footer.outline(FooterVariant::Simple).blocks(),
            &[Block::Links, Block::Copyright]
        );
    }

    #[test]
    fn newsletter_submit_clears_email() {
        let mut form = NewsletterForm::default();
        form.set_email("me@example.com");
        assert_eq!(form.submit(), "me@example.com");
        assert_eq!(form.email(), "");
    }
}
