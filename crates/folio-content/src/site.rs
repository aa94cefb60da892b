#![forbid(unsafe_code)]

//! Site-wide identity and copy: the landing hero, about page, and footer.

/// Owner name shown in the landing hero.
pub const NAME: &str = "Grace Tulsa";

/// Role line under the name.
pub const ROLE: &str = "Product & UI designer";

/// Wordmark in the page header.
pub const WORDMARK: &str = "Tulsa ⟡ Designer";

/// One-line pitch on the landing page.
pub const TAGLINE: &str = "Crafting simple, useful interfaces that make people's lives easier.";

/// Landing blurb.
pub const BLURB: &str = "I design thoughtful digital products — from rapid prototypes to \
production-ready interfaces. I focus on clarity, accessibility, and delightful \
micro-interactions.";

/// Contact address used by the footer's copy affordance.
pub const EMAIL: &str = "hello@example.com";

/// External link labels shown in the footer.
pub const FOOTER_LINKS: &[&str] = &["Resume", "LinkedIn"];

/// Copyright line.
pub const COPYRIGHT: &str = "© 2025 Tulsa";

/// About page paragraphs.
pub const ABOUT: &[&str] = &[
    "This is a placeholder for your about section. You can add information \
about yourself, your background, interests, or anything else you'd like to \
share.",
    "Feel free to customize this section with your own content, experiences, \
and personality.",
];

/// Contact card copy on the landing page.
pub const CONTACT_HEADING: &str = "Let's work together";
pub const CONTACT_LINE: &str = "Available for freelance and full-time roles.";
