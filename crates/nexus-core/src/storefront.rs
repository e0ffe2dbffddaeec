//! Rules behind the page's click handlers: storage pricing, theme switch,
//! pre-order feedback, anchor targets and the demo app launcher.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageOption {
    Gb256,
    Gb512,
    Tb1,
}

impl StorageOption {
    pub const ALL: [StorageOption; 3] = [StorageOption::Gb256, StorageOption::Gb512, StorageOption::Tb1];

    /// Parse the `value` attribute of a storage radio input.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "256" => Some(StorageOption::Gb256),
            "512" => Some(StorageOption::Gb512),
            "1024" => Some(StorageOption::Tb1),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            StorageOption::Gb256 => "256",
            StorageOption::Gb512 => "512",
            StorageOption::Tb1 => "1024",
        }
    }

    /// Price in whole US dollars.
    pub fn price_usd(self) -> u32 {
        match self {
            StorageOption::Gb256 => 1199,
            StorageOption::Gb512 => 1399,
            StorageOption::Tb1 => 1599,
        }
    }

    pub fn price_label(self) -> String {
        format_price(self.price_usd())
    }
}

/// `1199` -> `"$1,199"`.
pub fn format_price(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Anything other than `"light"` (including a missing attribute) is dark.
    pub fn from_data_attr(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

pub const PREORDER_CONFIRMATION: &str = "Added to Cart \u{2713}";

/// Label state of the pre-order button.
///
/// Every click hands out a fresh token; only the revert carrying the latest
/// token restores the label, so overlapping timers cannot flip it back early.
#[derive(Clone, Debug, PartialEq)]
pub struct PreorderButton {
    original: String,
    confirming: bool,
    latest: u32,
}

impl PreorderButton {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            confirming: false,
            latest: 0,
        }
    }

    pub fn click(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.confirming = true;
        self.latest
    }

    /// Returns true when the label actually changed back.
    pub fn revert(&mut self, token: u32) -> bool {
        if token != self.latest || !self.confirming {
            return false;
        }
        self.confirming = false;
        true
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn label(&self) -> &str {
        if self.confirming {
            PREORDER_CONFIRMATION
        } else {
            &self.original
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Element id targeted by an in-page link, e.g. `"#specs"` -> `"specs"`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Background of the launch overlay for a demo app.
pub fn app_launch_background(app: &str) -> &'static str {
    match app {
        "weather" => "linear-gradient(135deg, #48b2fe 0%, #0779e4 100%)",
        "camera" => "linear-gradient(135deg, #666 0%, #333 100%)",
        "music" => "linear-gradient(135deg, #fc5c7d 0%, #6a82fb 100%)",
        _ => "linear-gradient(135deg, #8e8e93 0%, #636366 100%)",
    }
}

/// `"weather"` -> `"Weather"`.
pub fn app_title(app: &str) -> String {
    let mut chars = app.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
