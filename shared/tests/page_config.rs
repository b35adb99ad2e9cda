//! Page configuration loading and validation.

#[cfg(test)]
mod tests {
    use launchpad_shared::{
        sections::{
            about::AboutVariant, contact::ContactVariant, content_block::ContentBlockVariant,
            cta::CtaVariant, faq::FaqVariant, features::FeaturesVariant, footer::FooterVariant,
            hero::HeroVariant, how_we_work::HowWeWorkVariant, navbar::NavbarVariant,
            previous_work::WorkVariant, pricing::PricingVariant, team::TeamVariant,
            testimonials::TestimonialVariant, trust_bar::TrustBarVariant,
        },
        Block, ConfigError, Outline, PageConfig, SectionConfig,
    };
    use serde_json::{json, Value};

    #[test]
    fn bundled_pages_parse() {
        let landing = PageConfig::landing().expect("landing page parses");
        let names: Vec<_> = landing.sections.iter().map(SectionConfig::name).collect();
        assert_eq!(
            names,
            [
                "navbar",
                "hero",
                "about",
                "features",
                "how-we-work",
                "how-we-work",
                "faq",
                "team",
                "cta",
                "footer"
            ]
        );

        let showcase = PageConfig::showcase().expect("showcase page parses");
        assert!(showcase
            .sections
            .iter()
            .any(|section| section.outline().has(Block::FloatingLink)));
        assert!(showcase
            .sections
            .iter()
            .any(|section| section.outline().has(Block::BillingToggle)));
    }

    #[test]
    fn unknown_variant_is_rejected_at_load() {
        let raw = r#"{
            "title": "Broken",
            "sections": [
                { "section": "hero", "variant": "diagonal", "content": { "headline": "Hi" } }
            ]
        }"#;

        match PageConfig::from_json(raw) {
            Err(ConfigError::InvalidVariant {
                section,
                value,
            }) => {
                assert_eq!(section, "hero");
                assert_eq!(value, "diagonal");
            },
            other => panic!("expected an invalid variant, got {other:?}"),
        }
    }

    #[test]
    fn unknown_field_kind_is_rejected_at_load() {
        let raw = r#"{
            "title": "Broken",
            "sections": [
                {
                    "section": "contact",
                    "content": {
                        "fields": [{ "name": "budget", "label": "Budget", "type": "slider" }]
                    }
                }
            ]
        }"#;

        match PageConfig::from_json(raw) {
            Err(ConfigError::InvalidFieldKind {
                field,
                kind,
            }) => {
                assert_eq!(field, "budget");
                assert_eq!(kind, "slider");
            },
            other => panic!("expected an invalid field kind, got {other:?}"),
        }
    }

    #[test]
    fn variant_defaults_apply_when_omitted() {
        let raw = r#"{
            "title": "Defaults",
            "sections": [
                { "section": "features", "content": {} },
                { "section": "footer", "content": {} }
            ]
        }"#;

        let page = PageConfig::from_json(raw).expect("defaults parse");
        match &page.sections[0] {
            SectionConfig::Features {
                variant, ..
            } => assert_eq!(*variant, FeaturesVariant::Grid),
            other => panic!("unexpected section {}", other.name()),
        }
        match &page.sections[1] {
            SectionConfig::Footer {
                variant, ..
            } => assert_eq!(*variant, FooterVariant::Simple),
            other => panic!("unexpected section {}", other.name()),
        }
    }

    #[test]
    fn empty_lists_render_heading_and_empty_region() {
        let raw = r#"{
            "title": "Empty",
            "sections": [
                { "section": "features", "content": { "headline": "Services", "subheadline": "None yet" } },
                { "section": "testimonials", "variant": "carousel", "content": { "headline": "Quotes" } },
                { "section": "team", "variant": "minimal", "content": { "headline": "Team" } },
                { "section": "faq", "variant": "grid", "content": { "headline": "FAQ" } }
            ]
        }"#;

        let page = PageConfig::from_json(raw).expect("empty lists parse");
        for section in &page.sections {
            let outline = section.outline();
            assert!(outline.has(Block::Headline), "{}", section.name());
            assert!(outline.has(Block::Items), "{}", section.name());
            assert_eq!(outline.item_count(), 0, "{}", section.name());
        }
    }

    #[test]
    fn every_tag_parses_back_to_its_variant() {
        fn check<V>(all: &[V])
        where
            V: Copy + PartialEq + std::fmt::Debug + std::fmt::Display + std::str::FromStr,
        {
            for variant in all {
                let parsed = variant.to_string().parse::<V>().ok();
                assert_eq!(parsed, Some(*variant));
            }
        }

        check(NavbarVariant::ALL);
        check(HeroVariant::ALL);
        check(AboutVariant::ALL);
        check(FeaturesVariant::ALL);
        check(HowWeWorkVariant::ALL);
        check(FaqVariant::ALL);
        check(TeamVariant::ALL);
        check(TestimonialVariant::ALL);
        check(PricingVariant::ALL);
        check(ContactVariant::ALL);
        check(FooterVariant::ALL);
        check(CtaVariant::ALL);
        check(TrustBarVariant::ALL);
        check(WorkVariant::ALL);
        check(ContentBlockVariant::ALL);
    }

    #[test]
    fn out_of_enum_tag_names_its_section() {
        let err = "sideways".parse::<TeamVariant>().expect_err("not a team layout");
        assert_eq!(err.to_string(), "unknown team variant `sideways`");
    }

    #[test]
    fn malformed_json_and_unknown_sections_stay_parse_errors() {
        let err = PageConfig::from_json("{ \"title\": ").expect_err("truncated json");
        assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");

        let raw = r#"{ "title": "T", "sections": [{ "section": "gallery", "content": {} }] }"#;
        let err = PageConfig::from_json(raw).expect_err("gallery is not a section");
        assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");
    }

    /// Outline of `content` rendered as `section` under `variant`.
    fn outline_for(section: &str, variant: &str, content: &Value) -> Outline {
        let config: SectionConfig = serde_json::from_value(json!({
            "section": section,
            "variant": variant,
            "content": content,
        }))
        .unwrap_or_else(|err| panic!("{section}/{variant}: {err}"));
        config.outline()
    }

    /// Checks every variant of one section against full and empty content.
    fn check_outlines<V>(
        all: &[V],
        section: &str,
        full: Value,
        empty: Value,
        expected: impl Fn(V, bool) -> (Vec<Block>, usize),
    ) where
        V: Copy + std::fmt::Display,
    {
        for &variant in all {
            for (content, populated) in [(&full, true), (&empty, false)] {
                let tag = variant.to_string();
                let outline = outline_for(section, &tag, content);
                let (blocks, items) = expected(variant, populated);
                assert_eq!(outline.blocks(), blocks.as_slice(), "{section}/{tag} populated={populated}");
                assert_eq!(outline.item_count(), items, "{section}/{tag} populated={populated}");
            }
        }
    }

    fn link() -> Value {
        json!({ "label": "Go", "href": "#go" })
    }

    fn image() -> Value {
        json!({ "kind": "image", "src": "/a.png", "alt": "A" })
    }

    #[test]
    fn every_variant_emits_present_blocks_and_omits_absent_ones() {
        use Block::*;

        check_outlines(
            NavbarVariant::ALL,
            "navbar",
            json!({ "logo": "Acme", "links": [link()], "cta": link() }),
            json!({}),
            |_, full| {
                if full {
                    (vec![Headline, Links, Actions], 0)
                } else {
                    (vec![Links], 0)
                }
            },
        );

        check_outlines(
            HeroVariant::ALL,
            "hero",
            json!({
                "headline": "Build",
                "subheadline": "Fast",
                "cta": [link()],
                "media": image(),
                "decoration": "blob",
                "video_src": "/bg.mp4",
            }),
            json!({ "headline": "Build" }),
            |variant, full| {
                if !full {
                    return (vec![Headline], 0);
                }
                let mut blocks = vec![Decoration];
                if variant == HeroVariant::Video {
                    blocks.push(BackgroundVideo);
                }
                blocks.extend([Headline, Subheadline, Actions, Media]);
                (blocks, 0)
            },
        );

        check_outlines(
            AboutVariant::ALL,
            "about",
            json!({
                "headline": "About",
                "subheadline": "Us",
                "items": [{ "title": "Since 1999" }],
                "media": image(),
                "decoration": "dots",
            }),
            json!({}),
            |variant, full| {
                if !full {
                    return (vec![], 0);
                }
                let mut blocks = vec![Decoration, Headline, Subheadline];
                if variant.shows_media() {
                    blocks.push(Media);
                }
                if variant.shows_items() {
                    blocks.push(Items);
                    return (blocks, 1);
                }
                (blocks, 0)
            },
        );

        let heading_and_items = |full: bool, count: usize| {
            if full {
                (vec![Headline, Subheadline, Items], count)
            } else {
                (vec![Items], 0)
            }
        };

        check_outlines(
            FeaturesVariant::ALL,
            "features",
            json!({
                "headline": "Features",
                "subheadline": "All of them",
                "features": [
                    { "title": "Fast", "description": "Very" },
                    { "title": "Safe", "description": "Also" }
                ],
            }),
            json!({}),
            |_, full| heading_and_items(full, 2),
        );

        check_outlines(
            HowWeWorkVariant::ALL,
            "how-we-work",
            json!({
                "headline": "Process",
                "subheadline": "Three steps",
                "steps": [{ "title": "Plan" }, { "title": "Build" }, { "title": "Ship" }],
                "media": image(),
                "decoration": "grid",
            }),
            json!({}),
            |variant, full| {
                if !full {
                    return (vec![Items], 0);
                }
                let mut blocks = vec![Decoration, Headline, Subheadline];
                if variant == HowWeWorkVariant::Split {
                    blocks.push(Media);
                }
                blocks.push(Items);
                (blocks, 3)
            },
        );

        check_outlines(
            FaqVariant::ALL,
            "faq",
            json!({
                "headline": "FAQ",
                "subheadline": "Asked often",
                "items": [{ "question": "Why?", "answer": "Because." }],
            }),
            json!({}),
            |_, full| heading_and_items(full, 1),
        );

        check_outlines(
            TeamVariant::ALL,
            "team",
            json!({
                "headline": "Team",
                "subheadline": "People",
                "members": [{ "name": "Ada" }, { "name": "Linus" }],
            }),
            json!({}),
            |_, full| heading_and_items(full, 2),
        );

        check_outlines(
            TestimonialVariant::ALL,
            "testimonials",
            json!({
                "headline": "Quotes",
                "subheadline": "From customers",
                "testimonials": [
                    { "id": "1", "name": "Ana", "quote": "Great", "video": "/ana.mp4" },
                    { "id": "2", "name": "Ben", "quote": "Solid" }
                ],
            }),
            json!({}),
            |variant, full| {
                let count = match variant {
                    TestimonialVariant::Hero | TestimonialVariant::Video => 1,
                    _ => 2,
                };
                heading_and_items(full, count)
            },
        );

        check_outlines(
            PricingVariant::ALL,
            "pricing",
            json!({
                "headline": "Pricing",
                "subheadline": "Plans",
                "plans": [{ "name": "Basic", "price": "10$" }],
                "show_billing_toggle": true,
            }),
            json!({}),
            |_, full| {
                if full {
                    (vec![Headline, Subheadline, BillingToggle, Items], 1)
                } else {
                    (vec![Items], 0)
                }
            },
        );

        check_outlines(
            ContactVariant::ALL,
            "contact",
            json!({
                "headline": "Contact",
                "subheadline": "Say hi",
                "fields": [{ "name": "email", "label": "Email", "type": "email" }],
                "cta": [link()],
                "whatsapp_number": "+15550100",
            }),
            json!({}),
            |variant, full| match (variant, full) {
                (ContactVariant::Form, true) => (vec![Headline, Subheadline, Form, Items], 1),
                (ContactVariant::Form, false) => (vec![Form, Items], 0),
                (ContactVariant::WhatsappFloat, true) => (vec![FloatingLink], 0),
                (_, true) => (vec![Headline, Subheadline, Actions], 0),
                (_, false) => (vec![], 0),
            },
        );

        check_outlines(
            CtaVariant::ALL,
            "cta",
            json!({
                "headline": "Ready?",
                "subheadline": "Start today",
                "primary": link(),
                "secondary": link(),
            }),
            json!({ "headline": "Ready?", "primary": link() }),
            |_, full| {
                if full {
                    (vec![Headline, Subheadline, Actions], 0)
                } else {
                    (vec![Headline, Actions], 0)
                }
            },
        );

        check_outlines(
            TrustBarVariant::ALL,
            "trust-bar",
            json!({ "title": "Trusted by", "items": [{ "label": "Acme" }, { "label": "Globex" }] }),
            json!({}),
            |_, full| {
                if full {
                    (vec![Headline, Items], 2)
                } else {
                    (vec![Items], 0)
                }
            },
        );

        check_outlines(
            WorkVariant::ALL,
            "previous-work",
            json!({
                "headline": "Work",
                "subheadline": "Recent",
                "items": [{ "title": "Portal", "tags": ["web"] }],
            }),
            json!({}),
            |_, full| heading_and_items(full, 1),
        );

        check_outlines(
            ContentBlockVariant::ALL,
            "content-block",
            json!({
                "headline": "Story",
                "subheadline": "How it began",
                "body": "Once upon a time.",
                "media": image(),
                "cta": [link()],
            }),
            json!({}),
            |variant, full| {
                if !full {
                    return (vec![], 0);
                }
                let mut blocks = Vec::new();
                if variant.shows_media() {
                    blocks.push(Media);
                }
                blocks.extend([Headline, Subheadline, Body, Actions]);
                (blocks, 0)
            },
        );

        check_outlines(
            FooterVariant::ALL,
            "footer",
            json!({
                "columns": [{ "title": "Company", "links": [link()] }],
                "links": [link()],
                "socials": [{ "icon": "github", "href": "https://github.com" }],
            }),
            json!({}),
            |variant, full| {
                let mut blocks = Vec::new();
                if full && variant.shows_columns() {
                    blocks.push(Columns);
                }
                if full && variant.shows_links() {
                    blocks.push(Links);
                }
                if full && variant.shows_socials() {
                    blocks.push(Socials);
                }
                if variant.shows_newsletter() {
                    blocks.push(Newsletter);
                }
                blocks.push(Copyright);
                (blocks, 0)
            },
        );
    }
}
