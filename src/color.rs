// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/stroke style using this color's own alpha
    pub fn to_css(&self) -> String {
        self.to_css_with_alpha(self.a as f64 / 255.0)
    }

    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.max(0.0).min(1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x3b82f6ff);
        assert_eq!((c.r, c.g, c.b, c.a), (0x3b, 0x82, 0xf6, 0xff));
    }

    #[test]
    fn css_alpha_is_clamped() {
        let c = Color::from_u32(0x9696ffff);
        assert_eq!(c.to_css_with_alpha(0.1), "rgba(150, 150, 255, 0.1)");
        assert_eq!(c.to_css_with_alpha(-0.5), "rgba(150, 150, 255, 0)");
        assert_eq!(c.to_css(), "rgba(150, 150, 255, 1)");
    }
}
