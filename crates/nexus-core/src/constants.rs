// Page-wide tuning constants shared by the web front-end.

// Asset
pub const PHONE_ASSET_PATH: &str = "phone.glb";
pub const ASSET_SCALE: f32 = 2.0; // glTF phones are authored at half the scene size
pub const ASSET_REFLECTIVITY: f32 = 1.5; // environment boost applied to every asset part

// Materials tagged as a screen inside the asset
pub const SCREEN_MATERIAL_TAG: &str = "screen";
pub const SCREEN_EMISSIVE_HEX: u32 = 0x1a1a2e;
pub const SCREEN_EMISSIVE_INTENSITY: f32 = 0.3;

// Timings (milliseconds)
pub const LOADER_HIDE_DELAY_MS: i32 = 500;
pub const PREORDER_REVERT_MS: i32 = 1500;
pub const ICON_PRESS_MS: i32 = 150;
pub const APP_LAUNCH_VISIBLE_MS: i32 = 1000;
pub const APP_LAUNCH_FADE_MS: i32 = 300;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const MAX_LIGHTS: usize = 8;
/// Longest step fed to time-based animation; a tab that was hidden resumes from here.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Pointer follow (hero)
pub const POINTER_YAW_RANGE: f32 = std::f32::consts::PI * 0.2;
pub const POINTER_PITCH_RANGE: f32 = std::f32::consts::PI * 0.1;

// Display tilt driven by scroll
pub const DISPLAY_TILT_GAIN: f32 = 0.3;
pub const DISPLAY_TILT_CENTER: f32 = 0.5;

// Reveal observers
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;
pub const CARD_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.2;
pub const SECTION_HIDDEN_TRANSFORM: &str = "translateY(40px)";
pub const SECTION_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const SECTION_TRANSITION: &str = "all 0.8s cubic-bezier(0.16, 1, 0.3, 1)";
