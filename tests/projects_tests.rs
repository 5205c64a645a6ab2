// Host-side tests for the static gallery list and asset resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
}

use crate::core::constants::*;
use crate::core::projects::*;
use std::collections::HashSet;

#[test]
fn project_ids_are_unique() {
    let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn projects_keep_display_order() {
    let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        vec!["NEURAL_VOID", "CYBER_CORE", "SYNTH_ETHOS", "QUANTUM_OS"]
    );
    assert_eq!(PROJECTS[0].category, "AI ARCHITECTURE");
    assert_eq!(PROJECTS[3].category, "SYSTEM DESIGN");
}

#[test]
fn stream_label_uses_project_id() {
    assert_eq!(PROJECTS[1].stream_label(), "DATA_STREAM_2");
}

#[test]
fn absolute_image_refs_pass_through() {
    for p in PROJECTS {
        assert_eq!(resolve_asset_url(BASE_PATH, p.image_ref), p.image_ref);
    }
    assert_eq!(
        resolve_asset_url(BASE_PATH, "//cdn.example.com/a.png"),
        "//cdn.example.com/a.png"
    );
    assert_eq!(
        resolve_asset_url(BASE_PATH, "data:image/png;base64,AAAA"),
        "data:image/png;base64,AAAA"
    );
}

#[test]
fn relative_refs_join_base_path_once() {
    assert_eq!(resolve_asset_url("/first-test/", "img/a.png"), "/first-test/img/a.png");
    assert_eq!(resolve_asset_url("/first-test/", "/img/a.png"), "/first-test/img/a.png");
    assert_eq!(resolve_asset_url("/first-test", "./img/a.png"), "/first-test/img/a.png");
    assert_eq!(resolve_asset_url("/", "a.png"), "/a.png");
}

#[test]
fn query_containing_scheme_is_not_absolute() {
    // "://" appears, but not as a scheme prefix.
    assert_eq!(
        resolve_asset_url("/base/", "img.png?next=https://x"),
        "/base/img.png?next=https://x"
    );
}

#[test]
fn any_scheme_passes_through() {
    for url in [
        "mailto:ops@example.com",
        "blob:https://example.com/uuid",
        "data:,",
        "HTTPS://EXAMPLE.COM/a.png",
        "git+ssh://host/repo",
    ] {
        assert_eq!(resolve_asset_url(BASE_PATH, url), url);
    }
}

#[test]
fn colon_after_path_segment_is_relative() {
    assert_eq!(resolve_asset_url("/base/", "img/a:b.png"), "/base/img/a:b.png");
    assert_eq!(resolve_asset_url("/base/", "1x:2.png"), "/base/1x:2.png");
    assert_eq!(resolve_asset_url("/base/", "#frag:x"), "/base/#frag:x");
}

#[test]
fn reveal_delay_staggers_by_index() {
    assert_eq!(reveal_delay_sec(0), 0.0);
    assert!((reveal_delay_sec(1) - REVEAL_STAGGER_SEC).abs() < 1e-6);
    assert!((reveal_delay_sec(3) - 0.3).abs() < 1e-6);
}
