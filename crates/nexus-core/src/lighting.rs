use glam::Vec3;

/// Convert a `0xRRGGBB` sRGB colour to linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Directional light shining from `position` towards the origin.
    Directional { position: Vec3 },
    /// Point light with a cut-off `range` (0 = infinite).
    Point { position: Vec3, range: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: u32,
    pub intensity: f32,
}

impl Light {
    pub const fn ambient(color: u32, intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    pub const fn directional(color: u32, intensity: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Directional { position },
            color,
            intensity,
        }
    }

    pub const fn point(color: u32, intensity: f32, range: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point { position, range },
            color,
            intensity,
        }
    }

    /// Shader tag: 0 ambient, 1 directional, 2 point.
    pub fn kind_tag(&self) -> f32 {
        match self.kind {
            LightKind::Ambient => 0.0,
            LightKind::Directional { .. } => 1.0,
            LightKind::Point { .. } => 2.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self.kind {
            LightKind::Ambient => Vec3::ZERO,
            LightKind::Directional { position } | LightKind::Point { position, .. } => position,
        }
    }

    pub fn range(&self) -> f32 {
        match self.kind {
            LightKind::Point { range, .. } => range,
            _ => 0.0,
        }
    }
}
