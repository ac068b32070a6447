use crate::{
    algorithm::cache::{CacheStats, WeightCache},
    algorithm::sampler::FieldSampler,
    analysis::weights::WeightTable,
    io::configuration::{
        DEFAULT_ITERATIONS, DEFAULT_NEIGHBORHOOD, DEFAULT_RESULT_SIZE, DEFAULT_TEMPERATURE,
    },
    io::error::{Result, invalid_parameter},
    math::random::UniformSource,
    spatial::{Field, Sample},
};

/// Width and height of a generated field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Dimensions {
    /// Explicit width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Square of the given side length
    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid_parameter(
                "result_size",
                &format!("{}x{}", self.width, self.height),
                &"result width and height must be positive",
            ));
        }
        Ok(self)
    }
}

impl From<usize> for Dimensions {
    fn from(side: usize) -> Self {
        Self::square(side)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

/// Generation parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Neighborhood (receptor) size `n`
    pub neighborhood: usize,
    /// Sampling temperature
    pub temperature: f64,
    /// Number of full sweeps, each `width * height` proposals
    pub iterations: usize,
    /// Result field size
    pub dimensions: Dimensions,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            neighborhood: DEFAULT_NEIGHBORHOOD,
            temperature: DEFAULT_TEMPERATURE,
            iterations: DEFAULT_ITERATIONS,
            dimensions: Dimensions::square(DEFAULT_RESULT_SIZE),
        }
    }
}

/// Sample-driven texture synthesizer
///
/// Owns the sample and a memoized weight table per neighborhood size.
/// Random sources are always passed in by the caller.
pub struct ConvChain {
    sample: Sample,
    cache: WeightCache,
}

impl ConvChain {
    /// Create a synthesizer for the given sample
    pub fn new(sample: Sample) -> Self {
        Self {
            sample,
            cache: WeightCache::new(),
        }
    }

    /// Replace the sample, invalidating every cached weight table
    pub fn set_sample(&mut self, sample: Sample) {
        self.sample = sample;
        self.cache.invalidate();
    }

    /// Current sample
    pub const fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Weight cache hit and miss counts
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// Weight table for neighborhood size `n`, built on first request
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or exceeds the supported maximum
    pub fn weights(&mut self, n: usize) -> Result<&WeightTable> {
        let sample = &self.sample;
        self.cache
            .get_or_build(n, || WeightTable::build(sample, n))
    }

    /// Generate a new field from random noise
    ///
    /// Initializes a field of `size` by coin flips, then runs `iterations`
    /// full sweeps. Zero iterations returns the initial noise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `n` is zero or exceeds the supported maximum
    /// - `size` has zero width or height
    pub fn generate<R>(
        &mut self,
        size: impl Into<Dimensions>,
        n: usize,
        temperature: f64,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Field>
    where
        R: UniformSource + ?Sized,
    {
        let dimensions = size.into().validate()?;
        let weights = self.weights(n)?;
        let sampler = FieldSampler::new(weights, n, temperature)?;

        let mut field = Field::random(dimensions.width, dimensions.height, rng)?;
        sampler.run(&mut field, iterations, rng);
        Ok(field)
    }

    /// Generate a new field using a configuration
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ConvChain::generate`]
    pub fn generate_with<R>(&mut self, config: &GenerationConfig, rng: &mut R) -> Result<Field>
    where
        R: UniformSource + ?Sized,
    {
        self.generate(
            config.dimensions,
            config.neighborhood,
            config.temperature,
            config.iterations,
            rng,
        )
    }

    /// Continue evolving a field for an exact number of proposals
    ///
    /// With no field supplied, a fresh one of `size` is initialized from
    /// `rng` first. `tries` defaults to one sweep (`width * height`);
    /// `Some(0)` returns the field unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `n` is zero or exceeds the supported maximum
    /// - `size` has zero width or height
    /// - The supplied field's dimensions differ from `size`
    pub fn iterate<R>(
        &mut self,
        field: Option<Field>,
        size: impl Into<Dimensions>,
        n: usize,
        temperature: f64,
        tries: Option<usize>,
        rng: &mut R,
    ) -> Result<Field>
    where
        R: UniformSource + ?Sized,
    {
        let dimensions = size.into().validate()?;
        let weights = self.weights(n)?;
        let sampler = FieldSampler::new(weights, n, temperature)?;

        let mut field = match field {
            Some(field) => {
                if field.width() != dimensions.width || field.height() != dimensions.height {
                    return Err(invalid_parameter(
                        "field",
                        &format!("{}x{}", field.width(), field.height()),
                        &format!(
                            "field does not match the result size {}x{}",
                            dimensions.width, dimensions.height
                        ),
                    ));
                }
                field
            }
            None => Field::random(dimensions.width, dimensions.height, rng)?,
        };

        let proposals = tries.unwrap_or_else(|| dimensions.area());
        sampler.run_proposals(&mut field, proposals, rng);
        Ok(field)
    }
}
