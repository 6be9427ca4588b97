// Tunables for the particle background. Defaults reproduce the site's look:
// 100 slow particles in the blue/purple/pink palette, joined by faint lines.

use crate::color::Color;
use std::ops::Range;

#[derive(Clone, Debug)]
pub struct BackgroundConfig {
    pub particle_count: usize,
    pub palette: Vec<Color>,
    pub radius: Range<f64>,
    pub speed: Range<f64>,
    pub line_color: Color,
    pub link: LineConfig,
    pub pointer: LineConfig,
}

// A family of connecting lines: drawn when two points are closer than
// `max_distance`, with opacity `base_alpha - distance / falloff`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineConfig {
    pub max_distance: f64,
    pub base_alpha: f64,
    pub falloff: f64,
    pub width: f64,
}

impl LineConfig {
    pub fn opacity(&self, distance: f64) -> Option<f64> {
        if distance < self.max_distance {
            Some(self.base_alpha - distance / self.falloff)
        } else {
            None
        }
    }
}

impl BackgroundConfig {
    pub const PARTICLE_COUNT: usize = 100;
    pub const PALETTE: [Color; 4] = [
        Color::from_u32(0x3b82f6ff),
        Color::from_u32(0x8b5cf6ff),
        Color::from_u32(0x6366f1ff),
        Color::from_u32(0xec4899ff),
    ];
    pub const LINE_COLOR: Color = Color::from_u32(0x9696ffff);
    pub const OPACITY_FALLOFF: f64 = 500.0;
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig {
            particle_count: BackgroundConfig::PARTICLE_COUNT,
            palette: BackgroundConfig::PALETTE.to_vec(),
            radius: 0.5..2.5,
            speed: -0.25..0.25,
            line_color: BackgroundConfig::LINE_COLOR,
            link: LineConfig {
                max_distance: 100.0,
                base_alpha: 0.2,
                falloff: BackgroundConfig::OPACITY_FALLOFF,
                width: 0.5,
            },
            pointer: LineConfig {
                max_distance: 150.0,
                base_alpha: 0.3,
                falloff: BackgroundConfig::OPACITY_FALLOFF,
                width: 0.8,
            },
        }
    }
}
