// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::BackgroundConfig;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Width and height must be positive, the caller skips empty viewports
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &BackgroundConfig,
    ) -> Particle {
        let pos_x = rng.gen_range(0.0, width);
        let pos_y = rng.gen_range(0.0, height);
        let radius = rng.gen_range(config.radius.start, config.radius.end);
        let vel_x = rng.gen_range(config.speed.start, config.speed.end);
        let vel_y = rng.gen_range(config.speed.start, config.speed.end);
        let color = config
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(config.line_color);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // Moves by one step of velocity, re-entering from the opposite edge
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap(self.pos[0] + self.vel[0], width);
        self.pos[1] = wrap(self.pos[1] + self.vel[1], height);
    }
}

// Folds a coordinate into [0, extent), keeping the overshoot past the edge
pub fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(x: f64, y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle::new(x, y, vel_x, vel_y, 1.0, BackgroundConfig::LINE_COLOR)
    }

    #[test]
    fn exiting_right_reenters_left_with_overshoot() {
        let mut p = particle_at(800.0 - 0.01, 10.0, 0.5, 0.0);
        p.advance(800.0, 600.0);
        assert!((p.pos[0] - 0.49).abs() < 1e-9, "x = {}", p.pos[0]);
    }

    #[test]
    fn exiting_left_and_top_reenters_opposite_edge() {
        let mut p = particle_at(0.1, 0.2, -0.25, -0.25);
        p.advance(800.0, 600.0);
        assert!((p.pos[0] - 799.85).abs() < 1e-9);
        assert!(p.pos[1] < 600.0);
        assert!((p.pos[1] - 599.95).abs() < 1e-9);
    }

    #[test]
    fn wrap_never_returns_extent() {
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(-1e-20, 800.0), 0.0);
        assert!(wrap(-1e-20, 800.0) < 800.0);
    }

    #[test]
    fn random_particles_respect_ranges() {
        let config = BackgroundConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 320.0, 240.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 320.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 240.0);
            assert!(p.radius >= 0.5 && p.radius < 2.5);
            assert!(p.vel[0] >= -0.25 && p.vel[0] < 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] < 0.25);
            assert!(config.palette.contains(&p.color));
        }
    }
}
