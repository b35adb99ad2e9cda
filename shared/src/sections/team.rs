//! Team members.

use serde::{Deserialize, Serialize};

use crate::{
    outline::{heading, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Team section layouts.
    pub enum TeamVariant for "team" default Grid {
        /// Plain responsive grid.
        Grid => "grid",
        /// Bordered cards with bio and socials.
        Cards => "cards",
        /// Horizontally scrolling strip.
        Carousel => "carousel",
        /// One line per member.
        Minimal => "minimal",
        /// Centred, wrapping row.
        Centered => "centered",
    }
}

impl TeamVariant {
    /// Classes for the member container.
    pub fn layout_class(self) -> &'static str {
        match self {
            TeamVariant::Grid => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            TeamVariant::Cards => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6",
            TeamVariant::Carousel => "flex gap-6 overflow-x-auto snap-x snap-mandatory",
            TeamVariant::Minimal => "flex flex-col gap-4",
            TeamVariant::Centered => "flex flex-wrap justify-center gap-8",
        }
    }

    /// Classes for one member card.
    pub fn card_class(self) -> &'static str {
        match self {
            TeamVariant::Cards => {
                "rounded-lg border p-6 bg-white shadow-sm hover:shadow-lg hover:-translate-y-1.5 \
                 transition"
            },
            TeamVariant::Carousel => "shrink-0 snap-start w-64",
            _ => "",
        }
    }

    /// Avatar size classes.
    pub fn avatar_class(self) -> &'static str {
        match self {
            TeamVariant::Cards => "w-28 h-28",
            _ => "w-32 h-32",
        }
    }

    /// Bio and social links are shown.
    pub fn shows_details(self) -> bool {
        self == TeamVariant::Cards
    }
}

/// A profile link of a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSocial {
    /// Network name, shown as the link text.
    pub kind: String,
    /// Profile URL.
    pub href: String,
}

/// One team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name.
    pub name: String,
    /// Job title.
    #[serde(default)]
    pub role: Option<String>,
    /// Photo URL.
    #[serde(default)]
    pub photo: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Profile links.
    #[serde(default)]
    pub social: Vec<TeamSocial>,
}

impl TeamMember {
    /// `Name — Role` line used by the minimal layout.
    pub fn summary_line(&self) -> String {
        match &self.role {
            Some(role) => format!("{} — {}", self.name, role),
            None => self.name.clone(),
        }
    }
}

/// Team section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Members in display order.
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl Section for TeamContent {
    type Variant = TeamVariant;

    fn outline(&self, _variant: TeamVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.items(self.members.len());
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_includes_role_when_present() {
        let mut member = TeamMember {
            name: "Ada".to_string(),
            role: Some("CEO".to_string()),
            photo: None,
            bio: None,
            social: Vec::new(),
        };
        assert_eq!(member.summary_line(), "Ada — CEO");
        member.role = None;
        assert_eq!(member.summary_line(), "Ada");
    }
}
