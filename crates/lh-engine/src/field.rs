//! The particle field behind the orb.
//!
//! A fixed pool is re-simulated every frame. In ambient mode particles rise
//! and wrap; in attraction mode they are pulled toward the center and
//! respawn off-screen once captured. Intensity is fed by pointer moves and
//! decays every frame, so a released hold relaxes smoothly.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::geometry::{Point, Viewport};

/// Which behavior the field is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// Slow upward drift.
    #[default]
    Ambient,
    /// Pulled toward the center.
    Attraction,
}

/// One particle in the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Drawn radius.
    pub radius: f32,
    /// Upward speed in ambient mode, per frame.
    pub rise_speed: f32,
    /// Drawn opacity.
    pub opacity: f32,
}

/// The particle pool and its simulation state.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    mode: FieldMode,
    intensity: f32,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field for a viewport, seeding its RNG.
    pub fn new(config: FieldConfig, viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
            mode: FieldMode::Ambient,
            intensity: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.resize(viewport);
        field
    }

    /// Reinitialize the whole pool for a new viewport.
    ///
    /// In-flight attraction motion is discarded, not migrated.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let rng = &mut self.rng;
        self.particles = (0..self.config.pool_size)
            .map(|_| Particle {
                x: random_below(rng, viewport.width),
                y: random_below(rng, viewport.height),
                radius: rng.random_range(0.6..3.1),
                rise_speed: rng.random_range(0.12..0.52),
                opacity: rng.random_range(0.25..0.75),
            })
            .collect();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            particles = self.particles.len(),
            "particle field reinitialized"
        );
    }

    /// Switch behavior.
    pub fn set_mode(&mut self, mode: FieldMode) {
        self.mode = mode;
    }

    /// Set the intensity from a pointer move.
    pub fn feed_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, self.config.intensity_cap);
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        match self.mode {
            FieldMode::Ambient => self.step_ambient(),
            FieldMode::Attraction => self.step_attraction(),
        }
        self.intensity *= self.config.decay;
    }

    fn step_ambient(&mut self) {
        let height = self.viewport.height;
        for p in &mut self.particles {
            p.y -= p.rise_speed;
            if p.y < 0.0 {
                p.y = height;
            }
        }
    }

    fn step_attraction(&mut self) {
        let center = self.viewport.center();
        let respawn_radius = self.viewport.max_side();
        let cfg = &self.config;
        let boost = cfg.base_speed + self.intensity * cfg.intensity_gain;

        for p in &mut self.particles {
            let dx = center.x - p.x;
            let dy = center.y - p.y;
            let distance = dx.hypot(dy);
            let speed = boost * (cfg.falloff / (distance + cfg.softening));
            let norm = if distance > 0.0 { distance } else { 1.0 };
            p.x += dx / norm * speed;
            p.y += dy / norm * speed;

            if distance < cfg.capture_radius {
                let angle = self.rng.random_range(0.0..TAU);
                p.x = center.x + angle.cos() * respawn_radius;
                p.y = center.y + angle.sin() * respawn_radius;
            }
        }
    }

    /// The pool.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current behavior.
    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// Current intensity.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Distance of a particle from the viewport center.
    pub fn distance_to_center(&self, p: &Particle) -> f32 {
        self.viewport.center().distance_to(Point::new(p.x, p.y))
    }
}

fn random_below(rng: &mut StdRng, bound: f32) -> f32 {
    if bound > 0.0 {
        rng.random_range(0.0..bound)
    } else {
        0.0
    }
}
