// DOM wiring constants used by the web frontend.

// Mount point in index.html; the page is rendered under it
pub const APP_ROOT_ID: &str = "app";

// Ids stamped on the follower and hero content for stylesheet hooks
pub const FOLLOWER_ID: &str = "cursor-follower";
pub const HERO_CONTENT_ID: &str = "hero-content";

// Gallery card class; the reveal observer targets these
pub const CARD_CLASS: &str = "project-card";
pub const REVEALED_CLASS: &str = "revealed";

// Portion of a card that must be visible before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Static page copy
pub const BRAND: &str = "OBSIDIAN_ARCHIVE";
pub const NAV_LINKS: [&str; 2] = ["Sector_01", "Neural_Link"];
pub const HERO_STATUS: &str = "System Intelligence: Active";
pub const HERO_TITLE: &str = "ALPHA";
pub const HERO_SUBTITLE: &str = "COLLECTIVE";
pub const HERO_TAGLINE: [&str; 2] = [
    "A high-fidelity digital repository designed for",
    "the next generation of technical excellence.",
];
pub const CONTACT_CTA: &str = "ESTABLISH_CONNECTION";
pub const FOOTER_BADGES: [&str; 4] = ["shield", "zap", "target", "share"];
pub const FOOTER_NOTE: [&str; 2] = ["v1.0.4 Built for EpicTech AI", "All rights reserved // 2024"];
