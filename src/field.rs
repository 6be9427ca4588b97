//! The particle field: the set of particles living in one viewport size,
//! the last pointer position, and the per-frame update and draw pass.

use crate::config::BackgroundConfig;
use crate::particle::Particle;
use crate::renderer::{Stroke, Surface};
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    config: BackgroundConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<Vector2<f64>>,
}

impl ParticleField {
    /// An empty field with no viewport yet. Call [`ParticleField::resize`]
    /// once the viewport size is known.
    pub fn new(config: BackgroundConfig) -> Self {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: None,
        }
    }

    /// A field with an explicit particle set, mostly useful to script frames.
    pub fn with_particles(
        config: BackgroundConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        ParticleField {
            config,
            width,
            height,
            particles,
            pointer: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Adopts a new viewport size and reseeds. Particles from the previous
    /// size are always discarded, positions are not carried over.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.seed(rng);
    }

    /// Replaces the whole particle set with `particle_count` fresh random
    /// particles. An empty viewport leaves the field empty.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut particles = Vec::with_capacity(self.config.particle_count);
        if self.has_area() {
            for _ in 0..self.config.particle_count {
                particles.push(Particle::random(rng, self.width, self.height, &self.config));
            }
        }
        self.particles = particles;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some([x, y]);
    }

    pub fn advance(&mut self) {
        if !self.has_area() {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Clears the surface and draws every particle, the links between close
    /// pairs (each pair once, lower index first) and the lines to the pointer.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.has_area() {
            return;
        }
        surface.clear(self.width, self.height);

        let link = self.config.link;
        let pointer = self.config.pointer;
        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.pos, p.radius, p.color);

            for other in &self.particles[i + 1..] {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(p.pos, other.pos));
                if let Some(alpha) = link.opacity(distance) {
                    surface.stroke_line(
                        p.pos,
                        other.pos,
                        Stroke {
                            color: self.config.line_color,
                            alpha,
                            width: link.width,
                        },
                    );
                }
            }

            if let Some(target) = self.pointer {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(p.pos, target));
                if let Some(alpha) = pointer.opacity(distance) {
                    surface.stroke_line(
                        p.pos,
                        target,
                        Stroke {
                            color: self.config.line_color,
                            alpha,
                            width: pointer.width,
                        },
                    );
                }
            }
        }
    }

    /// One animation tick: move everything, then draw the settled frame.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.advance();
        self.draw(surface);
    }
}
