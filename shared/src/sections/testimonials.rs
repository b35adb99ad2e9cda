//! Customer quotes and star ratings.

use serde::{Deserialize, Serialize};

use crate::{
    outline::{heading, Outline, Section},
    variant::closed_variant,
};

/// Number of star slots in a rating.
pub const MAX_RATING: u8 = 5;

closed_variant! {
    /// Testimonial layouts.
    pub enum TestimonialVariant for "testimonials" default Grid {
        /// Card grid.
        Grid => "grid",
        /// Snap-scrolling strip of centred cards.
        Carousel => "carousel",
        /// The first testimonial, large.
        Hero => "hero",
        /// Cards in a single row.
        Inline => "inline",
        /// Video testimonials only.
        Video => "video",
    }
}

impl TestimonialVariant {
    /// Classes for the item container.
    pub fn layout_class(self) -> &'static str {
        match self {
            TestimonialVariant::Grid => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 w-full",
            TestimonialVariant::Carousel => {
                "flex overflow-x-auto gap-6 w-full py-4 snap-x snap-mandatory"
            },
            TestimonialVariant::Hero => "flex flex-col md:flex-row items-center gap-12 w-full",
            TestimonialVariant::Inline => "flex flex-col md:flex-row gap-6 w-full",
            TestimonialVariant::Video => "flex flex-col md:flex-row gap-6",
        }
    }
}

/// One customer quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialItem {
    /// Stable key for list rendering.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Customer role or company.
    #[serde(default)]
    pub role: Option<String>,
    /// The quote.
    pub quote: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Star rating out of [`MAX_RATING`].
    #[serde(default)]
    pub rating: Option<u8>,
    /// Video URL for the video layout.
    #[serde(default)]
    pub video: Option<String>,
}

impl TestimonialItem {
    /// Filled state of each star slot; `None` when there is no rating to
    /// show. Ratings above the maximum fill every slot.
    pub fn stars(&self) -> Option<[bool; MAX_RATING as usize]> {
        let rating = self.rating.filter(|rating| *rating > 0)?;
        let mut slots = [false; MAX_RATING as usize];
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = index < usize::from(rating);
        }
        Some(slots)
    }
}

/// Testimonial section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// All testimonials.
    #[serde(default)]
    pub testimonials: Vec<TestimonialItem>,
}

impl TestimonialsContent {
    /// Testimonials the layout actually shows.
    pub fn visible(&self, variant: TestimonialVariant) -> Vec<&TestimonialItem> {
        match variant {
            TestimonialVariant::Grid | TestimonialVariant::Carousel | TestimonialVariant::Inline => {
                self.testimonials.iter().collect()
            },
            TestimonialVariant::Hero => self.testimonials.first().into_iter().collect(),
            TestimonialVariant::Video => {
                self.testimonials.iter().filter(|item| item.video.is_some()).collect()
            },
        }
    }
}

impl Section for TestimonialsContent {
    type Variant = TestimonialVariant;

    fn outline(&self, variant: TestimonialVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.items(self.visible(variant).len());
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, rating: Option<u8>, video: Option<&str>) -> TestimonialItem {
        TestimonialItem {
            id: id.to_string(),
            name: format!("Customer {id}"),
            role: None,
            quote: "Great work".to_string(),
            avatar: None,
            rating,
            video: video.map(str::to_string),
        }
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(item("a", Some(3), None).stars(), Some([true, true, true, false, false]));
        assert_eq!(item("b", Some(9), None).stars(), Some([true; 5]));
        assert_eq!(item("c", Some(0), None).stars(), None);
        assert_eq!(item("d", None, None).stars(), None);
    }

    #[test]
    fn layouts_pick_their_testimonials() {
        let content = TestimonialsContent {
            testimonials: vec![
                item("a", None, None),
                item("b", None, Some("/b.mp4")),
                item("c", None, Some("/c.mp4")),
            ],
            ..TestimonialsContent::default()
        };

        assert_eq!(content.outline(TestimonialVariant::Grid).item_count(), 3);
        assert_eq!(content.outline(TestimonialVariant::Inline).item_count(), 3);
        let hero = content.visible(TestimonialVariant::Hero);
        assert_eq!(hero.len(), 1);
        assert_eq!(hero[0].id, "a");
        let ids: Vec<_> = content
            .visible(TestimonialVariant::Video)
            .into_iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }
}
