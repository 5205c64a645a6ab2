// Animation core tuning constants shared by the web frontend and host tests.

// Follower overlay geometry (CSS px). The ring is a square box.
pub const FOLLOWER_SIZE_PX: f32 = 40.0;
pub const FOLLOWER_HALF_SIZE_PX: f32 = FOLLOWER_SIZE_PX * 0.5;

// Follower spring parameters
pub const FOLLOWER_DAMPING: f32 = 25.0;
pub const FOLLOWER_STIFFNESS: f32 = 250.0;
pub const FOLLOWER_MASS: f32 = 0.5;

// Rest detection: below both thresholds the follower snaps onto its target
pub const FOLLOWER_REST_DELTA_PX: f32 = 0.5;
pub const FOLLOWER_REST_SPEED_PX_PER_SEC: f32 = 10.0;

// Longest step integrated in one frame (backgrounded tabs resume with huge dt)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Hero fade/shrink activation window over scroll progress
pub const HERO_SCROLL_WINDOW: [f32; 2] = [0.0, 0.2];
pub const HERO_OPACITY_RANGE: [f32; 2] = [1.0, 0.0];
pub const HERO_SCALE_RANGE: [f32; 2] = [1.0, 0.9];

// Gallery "appear once" reveal timing
pub const REVEAL_DURATION_SEC: f32 = 0.8;
pub const REVEAL_STAGGER_SEC: f32 = 0.1;
pub const REVEAL_OFFSET_Y_PX: f32 = 40.0;

// Deployment path prefix for relative asset references
pub const BASE_PATH: &str = "/first-test/";
