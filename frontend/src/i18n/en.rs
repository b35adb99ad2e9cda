pub mod theme_toggle {
    pub const LIGHT_MODE: &str = "Light mode";
    pub const DARK_MODE: &str = "Dark mode";
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod navbar {
    pub const TOGGLE_MENU_ARIA: &str = "Toggle Menu";
    pub const MAIN_NAV_ARIA: &str = "Main navigation";
}

pub mod hero {
    pub const REGION_ARIA: &str = "Hero section";
}

pub mod about {
    pub const REGION_ARIA: &str = "About section";
}

pub mod how_we_work {
    pub const REGION_ARIA: &str = "How we work section";
}

pub mod team {
    pub const REGION_ARIA: &str = "Meet our team";
}

pub mod previous_work {
    pub const REGION_ARIA: &str = "Previous Work / Portfolio Section";
}

pub mod trust_bar {
    pub const REGION_ARIA: &str = "Trust indicators";
}

pub mod testimonials {
    pub const ATTRIBUTION_TEMPLATE: &str = "{}, {}";
    pub const RATING_ARIA_TEMPLATE: &str = "Rated {} out of 5";
}

pub mod pricing {
    pub const MONTHLY: &str = "Monthly";
    pub const YEARLY: &str = "Yearly";
    pub const RECOMMENDED: &str = "Recommended";
    pub const BILLING_ARIA: &str = "Billing period";
    pub const PRICE_TEMPLATE: &str = "{} {}";
}

pub mod contact {
    pub const SUBMIT: &str = "Submit";
    pub const WHATSAPP_ARIA: &str = "Chat on WhatsApp";
    pub const SENT: &str = "Thanks! We will get back to you shortly.";
    pub const SELECT_PLACEHOLDER: &str = "Select an option";
}

pub mod footer {
    pub const SUBSCRIBE: &str = "Subscribe";
    pub const SOCIAL_ARIA: &str = "Social links";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to home";
}
