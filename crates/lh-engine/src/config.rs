/// Tuning for the particle field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles in the pool.
    pub pool_size: usize,
    /// Per-frame multiplicative intensity decay (< 1).
    pub decay: f32,
    /// Distance to center below which an attracted particle respawns.
    pub capture_radius: f32,
    /// Attraction speed before intensity is added.
    pub base_speed: f32,
    /// How much intensity adds to attraction speed.
    pub intensity_gain: f32,
    /// Numerator of the distance falloff.
    pub falloff: f32,
    /// Added to the distance before dividing, keeps near-center speeds finite.
    pub softening: f32,
    /// Upper bound on intensity fed from a single move.
    pub intensity_cap: f32,
    /// Orb offset bound as a fraction of the smaller viewport side.
    pub offset_fraction: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            pool_size: 200,
            decay: 0.94,
            capture_radius: 16.0,
            base_speed: 8.0,
            intensity_gain: 0.1,
            falloff: 420.0,
            softening: 120.0,
            intensity_cap: 90.0,
            offset_fraction: 0.12,
        }
    }
}

impl FieldConfig {
    /// Set the pool size.
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Set the per-frame decay factor (clamped to 0.0..1.0).
    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay.clamp(0.0, 0.999);
        self
    }
}

/// Timing and tuning for an interactive session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Presses shorter than this (ms) are rejected.
    pub min_hold_ms: f64,
    /// How long the "hold longer" hint stays up (ms).
    pub hint_ms: f64,
    /// Delay between a qualifying release and the result reveal (ms).
    pub reveal_delay_ms: f64,
    /// Interval of the haptic pulse while holding (ms).
    pub pulse_interval_ms: f64,
    /// How long to wait for the native handler before opening the web page (ms).
    pub fallback_ms: f64,
    /// RNG seed for the particle field.
    pub field_seed: u64,
    /// Particle field tuning.
    pub field: FieldConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_hold_ms: 600.0,
            hint_ms: 1800.0,
            reveal_delay_ms: 380.0,
            pulse_interval_ms: 110.0,
            fallback_ms: 1400.0,
            field_seed: 42,
            field: FieldConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the minimum qualifying hold duration (ms).
    pub fn with_min_hold(mut self, ms: f64) -> Self {
        self.min_hold_ms = ms;
        self
    }

    /// Set the fallback navigation delay (ms).
    pub fn with_fallback(mut self, ms: f64) -> Self {
        self.fallback_ms = ms;
        self
    }

    /// Set the particle field RNG seed.
    pub fn with_field_seed(mut self, seed: u64) -> Self {
        self.field_seed = seed;
        self
    }

    /// Replace the particle field tuning.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }
}
