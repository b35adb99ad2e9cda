//! Pricing plans and the billing period switch.

use serde::{Deserialize, Serialize};

use crate::{
    content::{CallToAction, Emphasis},
    outline::{heading, Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Pricing layouts.
    pub enum PricingVariant for "pricing" default Grid {
        /// Plan cards side by side.
        Grid => "grid",
        /// Recommended plan emphasised.
        Highlight => "highlight",
        /// Single plan, simple call to action.
        Minimal => "minimal",
        /// Plan selection driven by the billing switch.
        Interactive => "interactive",
    }
}

impl PricingVariant {
    /// Card chrome shared by every plan.
    pub fn layout_class(self) -> &'static str {
        match self {
            PricingVariant::Grid | PricingVariant::Highlight => "shadow-sm",
            PricingVariant::Minimal => "shadow-none",
            PricingVariant::Interactive => {
                "shadow-sm transition hover:-translate-y-1 hover:shadow-lg"
            },
        }
    }

    /// Card classes for `plan` under this layout.
    pub fn card_class(self, plan: &PricingPlan) -> &'static str {
        if self.highlights(plan) {
            "border-blue-600 bg-blue-50"
        } else {
            "bg-white"
        }
    }

    /// The plan gets the recommended badge and tint.
    pub fn highlights(self, plan: &PricingPlan) -> bool {
        plan.recommended && self == PricingVariant::Highlight
    }

    /// Grid classes for `plan_count` cards.
    pub fn grid_class(self, plan_count: usize) -> &'static str {
        if plan_count > 1 {
            "md:grid-cols-2 lg:grid-cols-3"
        } else {
            "md:grid-cols-1"
        }
    }
}

/// Billing period shown by the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPeriod {
    /// Billed every month.
    #[default]
    Monthly,
    /// Billed once a year.
    Yearly,
}

impl BillingPeriod {
    /// Both periods in switch order.
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    /// The other period.
    pub fn toggled(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }
}

/// One price plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Plan name.
    pub name: String,
    /// Display price, e.g. `30$`.
    pub price: String,
    /// Suffix after the price, e.g. `/mo`.
    #[serde(default)]
    pub billing_cycle: Option<String>,
    /// Included features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Signup button.
    #[serde(default)]
    pub cta: Option<CallToAction>,
    /// Emphasised by the highlight layout.
    #[serde(default)]
    pub recommended: bool,
}

/// Pricing section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Plans in display order.
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
    /// Render the monthly/yearly switch.
    #[serde(default)]
    pub show_billing_toggle: bool,
}

impl PricingPlan {
    /// Weight of the signup button. Plan buttons stay muted unless marked
    /// primary.
    pub fn cta_emphasis(&self) -> Emphasis {
        self.cta
            .as_ref()
            .map_or(Emphasis::Secondary, |cta| cta.emphasis_or(Emphasis::Secondary))
    }
}

impl PricingContent {
    /// Plans listed while `period` is active. The period only moves the
    /// switch indicator; the list is the same for both.
    pub fn plans_for(&self, _period: BillingPeriod) -> &[PricingPlan] {
        &self.plans
    }
}

impl Section for PricingContent {
    type Variant = PricingVariant;

    fn outline(&self, _variant: PricingVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline
            .push_if(self.show_billing_toggle, Block::BillingToggle)
            .items(self.plans.len());
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, recommended: bool) -> PricingPlan {
        PricingPlan {
            name: name.to_string(),
            price: "0$".to_string(),
            billing_cycle: None,
            features: vec!["One school".to_string()],
            cta: None,
            recommended,
        }
    }

    #[test]
    fn billing_switch_keeps_plan_list() {
        let content = PricingContent {
            plans: vec![plan("free", false), plan("basic", true), plan("premium", false)],
            show_billing_toggle: true,
            ..PricingContent::default()
        };

        let mut period = BillingPeriod::default();
        let before = content.plans_for(period).as_ptr();
        let names_before: Vec<_> = content.plans_for(period).iter().map(|p| &p.name).collect();

        period = period.toggled();
        assert_eq!(period, BillingPeriod::Yearly);
        assert_eq!(content.plans_for(period).as_ptr(), before);
        let names_after: Vec<_> = content.plans_for(period).iter().map(|p| &p.name).collect();
        assert_eq!(names_before, names_after);
        assert_eq!(period.toggled(), BillingPeriod::Monthly);
    }

    #[test]
    fn only_highlight_layout_emphasises_recommended() {
        let recommended = plan("basic", true);
        let regular = plan("free", false);
        assert!(PricingVariant::Highlight.highlights(&recommended));
        assert!(!PricingVariant::Highlight.highlights(&regular));
        assert!(!PricingVariant::Grid.highlights(&recommended));
        assert_eq!(PricingVariant::Grid.card_class(&recommended), "bg-white");
    }

    #[test]
    fn billing_toggle_follows_flag() {
        let mut content = PricingContent::default();
        assert!(!content.outline(PricingVariant::Grid).has(Block::BillingToggle));
        content.show_billing_toggle = true;
        assert!(content.outline(PricingVariant::Grid).has(Block::BillingToggle));
    }

    #[test]
    fn plan_buttons_are_muted_unless_marked_primary() {
        let mut plan = plan("basic", true);
        plan.cta = Some(CallToAction::new("Get Started", "#contact"));
        assert_eq!(plan.cta_emphasis(), Emphasis::Secondary);

        let marked: CallToAction =
            serde_json::from_str(r##"{ "label": "Go", "href": "#go", "emphasis": "primary" }"##)
                .expect("cta parses");
        plan.cta = Some(marked);
        assert_eq!(plan.cta_emphasis(), Emphasis::Primary);

        // elsewhere an unmarked button keeps the brand fill
        assert_eq!(CallToAction::new("Go", "#go").emphasis_or(Emphasis::Primary), Emphasis::Primary);
    }
}
