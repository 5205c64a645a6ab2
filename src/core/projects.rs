use crate::core::constants::REVEAL_STAGGER_SEC;

/// One gallery entry. Records are static; list order is render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image_ref: &'static str,
}

impl ProjectRecord {
    /// Tag shown in the card's top-left corner.
    pub fn stream_label(&self) -> String {
        format!("DATA_STREAM_{}", self.id)
    }
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "NEURAL_VOID",
        category: "AI ARCHITECTURE",
        image_ref: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1200",
    },
    ProjectRecord {
        id: 2,
        title: "CYBER_CORE",
        category: "BLOCKCHAIN",
        image_ref: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?q=80&w=1200",
    },
    ProjectRecord {
        id: 3,
        title: "SYNTH_ETHOS",
        category: "DIGITAL ART",
        image_ref: "https://images.unsplash.com/photo-1633167606207-d840b5070fc2?q=80&w=1200",
    },
    ProjectRecord {
        id: 4,
        title: "QUANTUM_OS",
        category: "SYSTEM DESIGN",
        image_ref: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=1200",
    },
];

// Protocol-relative (`//host`) or a URL scheme: ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")
// followed by ':' before any path, query or fragment delimiter.
fn is_absolute_url(s: &str) -> bool {
    if s.starts_with("//") {
        return true;
    }
    let Some(colon) = s.find(':') else {
        return false;
    };
    let scheme = &s[..colon];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Resolve an image reference against the deployment base path.
///
/// Anything carrying a scheme (`https:`, `data:`, `mailto:`, ...) and
/// protocol-relative URLs pass through; relative references are joined to
/// `base` with exactly one `/` between them.
pub fn resolve_asset_url(base: &str, image_ref: &str) -> String {
    if is_absolute_url(image_ref) {
        return image_ref.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = image_ref.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", base, rel)
}

/// Transition delay for the gallery card at `index`.
#[inline]
pub fn reveal_delay_sec(index: usize) -> f32 {
    index as f32 * REVEAL_STAGGER_SEC
}
