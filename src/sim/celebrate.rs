//! Fireworks celebration
//!
//! A celebration opens a fixed wall-clock window after a spin settles.
//! While the window is open, rockets launch at random playfield positions
//! with a fixed per-tick chance; each counts down, bursts into a cloud of
//! decaying sparks, and is dropped once every spark has faded. Fireworks
//! already in flight when the window closes run to completion.

use glam::Vec2;
use rand::Rng;

use crate::config::{EngineConfig, FIREWORK_COLORS};

/// Downward acceleration applied to sparks (pixels/tick²)
const GRAVITY: f32 = 0.1;
/// Full opacity at spawn
const FULL_ALPHA: f32 = 255.0;
/// Rockets keep clear of the playfield edges
const SPAWN_MARGIN: f32 = 50.0;
/// Rockets keep clear of the input area at the bottom
const BOTTOM_CLEARANCE: f32 = 200.0;

/// One decaying spark from a firework burst
#[derive(Debug, Clone)]
pub struct Particle {
    pos: Vec2,
    vel: Vec2,
    color: u32,
    lifetime: u32,
    size: f32,
    alpha: f32,
    fade_rate: f32,
}

impl Particle {
    fn spawn<R: Rng>(pos: Vec2, color: u32, rng: &mut R) -> Self {
        let lifetime = rng.random_range(40..=80u32);
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-8.0..-4.0)),
            color,
            lifetime,
            size: rng.random_range(2..=4u32) as f32,
            alpha: FULL_ALPHA,
            fade_rate: FULL_ALPHA / lifetime as f32,
        }
    }

    /// Advance one tick: gravity, integration, fade. Returns whether the
    /// spark is still alive.
    pub fn update(&mut self) -> bool {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.alpha = (self.alpha - self.fade_rate).max(0.0);
        self.lifetime > 0
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Remaining opacity, 0-255
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// A rocket that bursts into sparks after a short countdown
#[derive(Debug, Clone)]
pub struct Firework {
    pos: Vec2,
    countdown: u32,
    color: u32,
    exploded: bool,
    particles: Vec<Particle>,
}

impl Firework {
    fn spawn<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            countdown: rng.random_range(5..=15),
            color: FIREWORK_COLORS[rng.random_range(0..FIREWORK_COLORS.len())],
            exploded: false,
            particles: Vec::new(),
        }
    }

    /// Advance one tick. Returns whether the firework is still alive:
    /// not yet exploded, or still holding live sparks.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.exploded {
            self.countdown = self.countdown.saturating_sub(1);
            if self.countdown == 0 {
                self.explode(rng);
            }
        } else {
            self.particles.retain_mut(|p| p.update());
        }
        !self.particles.is_empty() || !self.exploded
    }

    fn explode<R: Rng>(&mut self, rng: &mut R) {
        self.exploded = true;
        let count = rng.random_range(40..=80);
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(self.pos, self.color, rng));
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// False while still in the rocket phase
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Owns all live fireworks and the celebration time window
#[derive(Debug, Clone)]
pub struct CelebrationController {
    fireworks: Vec<Firework>,
    active: bool,
    started_at_ms: u64,
    duration_ms: u64,
    spawn_chance: f32,
    field_width: f32,
    field_height: f32,
}

impl CelebrationController {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            fireworks: Vec::new(),
            active: false,
            started_at_ms: 0,
            duration_ms: config.celebration_duration_ms,
            spawn_chance: config.firework_spawn_chance,
            field_width: config.field_width,
            field_height: config.field_height,
        }
    }

    /// Open the celebration window from `now_ms`, resetting any prior window
    pub fn start(&mut self, now_ms: u64) {
        self.active = true;
        self.started_at_ms = now_ms;
        log::info!("Celebration started");
    }

    /// Advance one tick: expire the window, maybe launch a rocket, advance
    /// every live firework and drop the completed ones.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        if self.active {
            if now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms {
                self.active = false;
            } else if rng.random::<f32>() < self.spawn_chance {
                let pos = Vec2::new(
                    rng.random_range(SPAWN_MARGIN..self.field_width - SPAWN_MARGIN),
                    rng.random_range(SPAWN_MARGIN..self.field_height - BOTTOM_CLEARANCE),
                );
                self.fireworks.push(Firework::spawn(pos, rng));
            }
        }
        self.fireworks.retain_mut(|fw| fw.update(rng));
    }

    /// Whether the spawn window is still open (live fireworks may outlast it)
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_falls_and_fades() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Particle::spawn(Vec2::new(100.0, 100.0), 0x00FFFF, &mut rng);
        let vy = p.vel.y;
        let alpha = p.alpha();
        assert!(p.update());
        assert_eq!(p.vel.y, vy + GRAVITY);
        assert!(p.alpha() < alpha);
    }

    #[test]
    fn test_particle_dies_at_zero_lifetime() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Particle::spawn(Vec2::ZERO, 0x00FFFF, &mut rng);
        let lifetime = p.lifetime;
        for i in 1..=lifetime {
            let alive = p.update();
            assert_eq!(alive, i < lifetime);
        }
        assert!(p.alpha() < 1.0);
    }

    #[test]
    fn test_firework_explodes_after_countdown() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut fw = Firework::spawn(Vec2::new(200.0, 300.0), &mut rng);
        let countdown = fw.countdown;
        assert!((5..=15).contains(&countdown));

        for _ in 0..countdown - 1 {
            assert!(fw.update(&mut rng));
            assert!(!fw.exploded());
        }
        assert!(fw.update(&mut rng));
        assert!(fw.exploded());
        assert!((40..=80).contains(&fw.particles().len()));
    }

    #[test]
    fn test_firework_drains_to_empty_then_dies() {
        let mut rng = Pcg32::seed_from_u64(19);
        let mut fw = Firework::spawn(Vec2::new(200.0, 300.0), &mut rng);
        while !fw.exploded() {
            fw.update(&mut rng);
        }

        let mut last = fw.particles().len();
        loop {
            let alive = fw.update(&mut rng);
            let count = fw.particles().len();
            assert!(count <= last, "spark count must never grow");
            if count == 0 {
                assert!(!alive, "empty exploded firework must report dead");
                break;
            }
            assert!(alive);
            last = count;
        }
    }

    #[test]
    fn test_window_expires_but_fireworks_finish() {
        let config = EngineConfig {
            firework_spawn_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let mut celebration = CelebrationController::new(&config);
        celebration.start(1000);

        celebration.tick(1001, &mut rng);
        assert!(celebration.is_active());
        assert!(!celebration.fireworks().is_empty());

        // Window closes exactly at start + duration; no new rockets after
        celebration.tick(1000 + config.celebration_duration_ms, &mut rng);
        assert!(!celebration.is_active());
        let live = celebration.fireworks().len();

        let mut ticks = 0;
        while !celebration.fireworks().is_empty() {
            celebration.tick(10_000_000, &mut rng);
            assert!(celebration.fireworks().len() <= live);
            ticks += 1;
            assert!(ticks < 200, "stray fireworks never completed");
        }
    }

    #[test]
    fn test_inactive_controller_spawns_nothing() {
        let config = EngineConfig {
            firework_spawn_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let mut celebration = CelebrationController::new(&config);
        for now in 0..50 {
            celebration.tick(now, &mut rng);
        }
        assert!(celebration.fireworks().is_empty());
    }
}
