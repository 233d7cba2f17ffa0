use egui::{lerp, Color32, Rgba};

/// The stock chart colors.
pub mod palette {
    use egui::Color32;

    pub const GRADIENT_PURPLE: Color32 = Color32::from_rgb(0x7B, 0x75, 0xFF);
    pub const GRADIENT_NEON_BLUE: Color32 = Color32::from_rgb(0x6F, 0xEA, 0xFF);

    /// Bottom color of the default area fill, fading to white at the top.
    pub const GRADIENT_UPPER_BLUE: Color32 = Color32::from_rgb(0xC2, 0xE8, 0xFF);

    pub const ORANGE_START: Color32 = Color32::from_rgb(0xEC, 0x23, 0x01);
    pub const ORANGE_END: Color32 = Color32::from_rgb(0xFF, 0x78, 0x2C);

    /// Fill of the hover indicator knob.
    pub const INDICATOR_KNOB: Color32 = Color32::from_rgb(0xFF, 0x57, 0xA6);
}

/// A two-color linear gradient used to stroke the chart line.
///
/// `start` is drawn at the left edge of the chart, `end` at the right edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GradientColor {
    pub start: Color32,
    pub end: Color32,
}

impl Default for GradientColor {
    fn default() -> Self {
        Self::BLUE
    }
}

impl GradientColor {
    pub const ORANGE: Self = Self::new(palette::ORANGE_START, palette::ORANGE_END);
    pub const BLUE: Self = Self::new(palette::GRADIENT_PURPLE, palette::GRADIENT_NEON_BLUE);
    pub const GREEN: Self = Self::new(
        Color32::from_rgb(0x0B, 0xCD, 0xF7),
        Color32::from_rgb(0xA2, 0xFE, 0xAE),
    );
    pub const SKY: Self = Self::new(
        Color32::from_rgb(0x05, 0x91, 0xFF),
        Color32::from_rgb(0x29, 0xD9, 0xFE),
    );
    pub const PURPLE: Self = Self::new(
        Color32::from_rgb(0x4A, 0xBB, 0xFB),
        Color32::from_rgb(0x8C, 0x00, 0xFF),
    );
    pub const MAGENTA: Self = Self::new(
        palette::INDICATOR_KNOB,
        Color32::from_rgb(0xFF, 0x28, 0x64),
    );
    pub const SUNSET: Self = Self::new(
        Color32::from_rgb(0xFF, 0x8E, 0x2D),
        Color32::from_rgb(0xFF, 0x4E, 0x7A),
    );

    pub const fn new(start: Color32, end: Color32) -> Self {
        Self { start, end }
    }

    /// The gradient color at `t` ∈ `[0, 1]`, interpolated in linear space.
    ///
    /// Out-of-range `t` is clamped.
    pub fn color_at(&self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        Color32::from(lerp(Rgba::from(self.start)..=Rgba::from(self.end), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let gradient = GradientColor::default();
        assert_eq!(gradient.color_at(0.0), gradient.start);
        assert_eq!(gradient.color_at(1.0), gradient.end);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let gradient = GradientColor::ORANGE;
        assert_eq!(gradient.color_at(-1.0), gradient.color_at(0.0));
        assert_eq!(gradient.color_at(2.0), gradient.color_at(1.0));
    }
}
