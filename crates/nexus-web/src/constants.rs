// DOM ids, class names and selectors the page script relies on

pub const LOADER_ID: &str = "loader";
pub const HIDDEN_CLASS: &str = "hidden";

pub const DISPLAY_SECTION_ID: &str = "display";

pub const PRICE_DISPLAY_ID: &str = "price-display";
pub const STORAGE_INPUT_SELECTOR: &str = "input[name=\"storage\"]";

pub const PREORDER_BUTTON_ID: &str = "preorder-btn";
pub const PREORDER_ADDED_CLASS: &str = "added";

pub const THEME_BUTTON_SELECTOR: &str = ".control-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const PHONE_SCREEN_SELECTOR: &str = ".phone-screen";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const CARD_REVEAL_SELECTOR: &str = ".feature-card, .spec-category";
pub const VISIBLE_CLASS: &str = "visible";
pub const SECTION_REVEAL_SELECTOR: &str =
    ".features-header, .display-content, .demo-header, .specs-header, .cta-content";

pub const APP_ICON_SELECTOR: &str = ".app-icon";
pub const APP_ICON_INNER_SELECTOR: &str = ".app-icon-inner";
pub const DOCK_ICON_SELECTOR: &str = ".dock-icon";
pub const PRESSED_TRANSFORM: &str = "scale(0.9)";

pub const APP_LAUNCH_CLASS: &str = "app-launch-overlay";
// background is appended per app
pub const APP_LAUNCH_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
border-radius:40px;display:flex;align-items:center;justify-content:center;color:white;\
font-size:24px;font-weight:600;opacity:0;transform:scale(0.5);\
transition:all 0.3s cubic-bezier(0.16, 1, 0.3, 1);z-index:100;";

pub const DEBUG_GLOBAL: &str = "NexusDebug";
