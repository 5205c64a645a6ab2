//! Page render tree.
//!
//! [`RenderTree::mount`] builds the static DOM once (nav, hero, gallery,
//! footer and the follower overlay). Afterwards only two things change:
//! the follower translation and the hero opacity/scale, written through
//! [`RenderTree::apply_follower`] and [`RenderTree::apply_hero`].
//! Dropping the tree removes the page from the document.

use crate::constants::*;
use crate::core::{
    reveal_delay_sec, resolve_asset_url, HeroTransform, ProjectRecord, BASE_PATH,
    FOLLOWER_SIZE_PX, REVEAL_DURATION_SEC, REVEAL_OFFSET_Y_PX,
};
use crate::dom::{self, el};
use glam::Vec2;
use web_sys as web;

pub struct RenderTree {
    root: web::HtmlElement,
    follower: web::HtmlElement,
    hero_content: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
}

impl RenderTree {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        projects: &[ProjectRecord],
    ) -> anyhow::Result<Self> {
        let root = el(document, "div", "page", None)?;

        let follower = build_follower(document)?;
        dom::append(&root, &follower)?;
        dom::append(&root, &el(document, "div", "scanlines", None)?)?;
        dom::append(&root, &build_nav(document)?)?;

        let (hero, hero_content) = build_hero(document)?;
        dom::append(&root, &hero)?;

        let (gallery, cards) = build_gallery(document, projects)?;
        dom::append(&root, &gallery)?;
        dom::append(&root, &build_footer(document)?)?;

        dom::append(host, &root)?;
        log::info!("[mount] render tree built ({} cards)", cards.len());

        Ok(Self {
            root,
            follower,
            hero_content,
            cards,
        })
    }

    pub fn apply_follower(&self, pos: Vec2) {
        dom::set_style(&self.follower, "transform", &dom::translate_px(pos.x, pos.y));
    }

    pub fn apply_hero(&self, t: HeroTransform) {
        dom::set_style(&self.hero_content, "opacity", &format!("{:.4}", t.opacity));
        dom::set_style(&self.hero_content, "transform", &format!("scale({:.4})", t.scale));
    }

    pub fn cards(&self) -> &[web::HtmlElement] {
        &self.cards
    }
}

impl Drop for RenderTree {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn build_follower(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let ring = el(document, "div", "cursor-follower", None)?;
    ring.set_id(FOLLOWER_ID);
    let size = format!("{}px", FOLLOWER_SIZE_PX);
    dom::set_style(&ring, "width", &size);
    dom::set_style(&ring, "height", &size);
    dom::append(&ring, &el(document, "div", "cursor-dot", None)?)?;
    Ok(ring)
}

fn build_nav(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let nav = el(document, "nav", "site-nav", None)?;
    let brand = el(document, "div", "brand", None)?;
    dom::append(&brand, &el(document, "span", "brand-mark", None)?)?;
    dom::append(&brand, &el(document, "span", "brand-name", Some(BRAND))?)?;
    dom::append(&nav, &brand)?;

    let links = el(document, "div", "nav-links", None)?;
    for label in NAV_LINKS {
        dom::append(&links, &el(document, "span", "nav-link", Some(label))?)?;
    }
    dom::append(&nav, &links)?;
    Ok(nav)
}

fn build_hero(document: &web::Document) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let section = el(document, "section", "hero", None)?;
    let content = el(document, "div", "hero-content", None)?;
    content.set_id(HERO_CONTENT_ID);

    let status = el(document, "div", "status-pill", None)?;
    dom::append(&status, &el(document, "span", "status-icon", None)?)?;
    dom::append(&status, &el(document, "span", "status-text", Some(HERO_STATUS))?)?;
    dom::append(&content, &status)?;

    let h1 = el(document, "h1", "hero-title", None)?;
    dom::append(&h1, &build_glitch_text(document, HERO_TITLE)?)?;
    dom::append(&h1, &el(document, "br", "", None)?)?;
    dom::append(&h1, &el(document, "span", "text-outline", Some(HERO_SUBTITLE))?)?;
    dom::append(&content, &h1)?;

    let tagline = el(document, "p", "hero-tagline", Some(HERO_TAGLINE[0]))?;
    dom::append(&tagline, &el(document, "br", "", None)?)?;
    _ = tagline.append_with_str_1(HERO_TAGLINE[1]);
    dom::append(&content, &tagline)?;

    dom::append(&section, &content)?;
    dom::append(&section, &el(document, "div", "hero-glow", None)?)?;
    Ok((section, content))
}

// Base text plus two offset copies revealed on hover.
fn build_glitch_text(document: &web::Document, text: &str) -> anyhow::Result<web::HtmlElement> {
    let wrap = el(document, "span", "glitch", None)?;
    dom::append(&wrap, &el(document, "span", "glitch-base", Some(text))?)?;
    dom::append(&wrap, &el(document, "span", "glitch-red", Some(text))?)?;
    dom::append(&wrap, &el(document, "span", "glitch-blue", Some(text))?)?;
    Ok(wrap)
}

fn build_gallery(
    document: &web::Document,
    projects: &[ProjectRecord],
) -> anyhow::Result<(web::HtmlElement, Vec<web::HtmlElement>)> {
    let section = el(document, "section", "gallery", None)?;
    let grid = el(document, "div", "gallery-grid", None)?;

    let mut cards = Vec::with_capacity(projects.len());
    for (i, project) in projects.iter().enumerate() {
        let card = build_card(document, project, i)?;
        dom::append(&grid, &card)?;
        cards.push(card);
    }
    dom::append(&section, &grid)?;
    Ok((section, cards))
}

fn build_card(
    document: &web::Document,
    project: &ProjectRecord,
    index: usize,
) -> anyhow::Result<web::HtmlElement> {
    let card = el(document, "div", CARD_CLASS, None)?;
    _ = card.set_attribute("data-project-id", &project.id.to_string());
    dom::set_style(&card, "opacity", "0");
    dom::set_style(
        &card,
        "transform",
        &format!("translateY({}px)", REVEAL_OFFSET_Y_PX),
    );
    dom::set_style(
        &card,
        "transition",
        &format!(
            "opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s",
            d = REVEAL_DURATION_SEC,
            delay = reveal_delay_sec(index)
        ),
    );

    let img = el(document, "img", "card-image", None)?;
    _ = img.set_attribute("src", &resolve_asset_url(BASE_PATH, project.image_ref));
    _ = img.set_attribute("alt", project.title);
    dom::append(&card, &img)?;

    let body = el(document, "div", "card-body", None)?;
    let top = el(document, "div", "card-top", None)?;
    dom::append(&top, &el(document, "div", "card-tag", Some(project.stream_label().as_str()))?)?;
    dom::append(&top, &el(document, "span", "chevron", None)?)?;
    dom::append(&body, &top)?;

    let bottom = el(document, "div", "card-bottom", None)?;
    dom::append(&bottom, &el(document, "p", "card-category", Some(project.category))?)?;
    dom::append(&bottom, &el(document, "h3", "card-title", Some(project.title))?)?;
    dom::append(&body, &bottom)?;
    dom::append(&card, &body)?;

    dom::append(&card, &el(document, "div", "card-shade", None)?)?;
    Ok(card)
}

fn build_footer(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let footer = el(document, "footer", "site-footer", None)?;
    let grid = el(document, "div", "footer-grid", None)?;

    let contact = el(document, "div", "footer-contact", None)?;
    dom::append(&contact, &el(document, "h4", "footer-label", Some("Contact_Inquiry"))?)?;
    dom::append(&contact, &el(document, "div", "footer-cta", Some(CONTACT_CTA))?)?;
    dom::append(&grid, &contact)?;

    let badges = el(document, "div", "footer-badges", None)?;
    for name in FOOTER_BADGES {
        let badge = el(document, "div", "badge", None)?;
        _ = badge.set_attribute("data-icon", name);
        dom::append(&badges, &badge)?;
    }
    dom::append(&grid, &badges)?;

    let note = el(document, "p", "footer-note", Some(FOOTER_NOTE[0]))?;
    dom::append(&note, &el(document, "br", "", None)?)?;
    _ = note.append_with_str_1(FOOTER_NOTE[1]);
    dom::append(&grid, &note)?;

    dom::append(&footer, &grid)?;
    Ok(footer)
}
