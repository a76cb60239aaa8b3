//! Stateful blend engine with its own random generator.

use layermix_core::{Position, Rgba};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::composite::blend_with_config;
use crate::config::BlendConfig;
use crate::mode::BlendMode;

/// A [`BlendConfig`] paired with a private [`StdRng`].
///
/// With a seed in the config, Dissolve results are reproducible across runs.
///
/// # Example
///
/// ```rust
/// use layermix_core::Rgba;
/// use layermix_ops::{BlendConfig, BlendEngine, BlendMode};
///
/// let mut a = BlendEngine::new(BlendConfig::default().with_seed(7));
/// let mut b = BlendEngine::new(BlendConfig::default().with_seed(7));
/// let top = Rgba::WHITE.with_alpha(0.5);
/// for _ in 0..16 {
///     assert_eq!(
///         a.blend(Rgba::BLACK, top, BlendMode::Dissolve, None),
///         b.blend(Rgba::BLACK, top, BlendMode::Dissolve, None),
///     );
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BlendEngine {
    config: BlendConfig,
    rng: StdRng,
}

impl BlendEngine {
    /// Creates an engine, seeding from `config.seed` or from entropy.
    pub fn new(config: BlendConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(?config, "Created blend engine");
        Self { config, rng }
    }

    /// Active configuration.
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Restarts the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Blends with this engine's config and generator.
    pub fn blend(
        &mut self,
        base: Rgba,
        blend: Rgba,
        mode: BlendMode,
        position: Option<Position>,
    ) -> Rgba {
        blend_with_config(base, blend, mode, position, &self.config, &mut self.rng)
    }
}

impl Default for BlendEngine {
    fn default() -> Self {
        Self::new(BlendConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(engine: &mut BlendEngine) -> Vec<Rgba> {
        let top = Rgba::WHITE.with_alpha(0.5);
        (0..64)
            .map(|_| engine.blend(Rgba::BLACK, top, BlendMode::Dissolve, None))
            .collect()
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut engine = BlendEngine::new(BlendConfig::default().with_seed(3));
        let first = draws(&mut engine);
        engine.reseed(3);
        assert_eq!(draws(&mut engine), first);
        assert_eq!(engine.config().seed, Some(3));
    }

    #[test]
    fn test_dissolve_mixes_both_inputs() {
        let mut engine = BlendEngine::new(BlendConfig::default().with_seed(11));
        let out = draws(&mut engine);
        assert!(out.contains(&Rgba::BLACK));
        assert!(out.contains(&Rgba::WHITE.with_alpha(0.5)));
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<BlendEngine>();
    }
}
