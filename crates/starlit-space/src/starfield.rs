//! Procedural starfield generation: a cube of randomly scattered stars, placed
//! once and then moved as a single group by [`FrameTransform`].

use glam::DVec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::StarfieldError;
use crate::motion::{FrameTransform, StarfieldState};

/// Half-width of the cube stars are scattered in.
pub const DEFAULT_EXTENT: f64 = 400.0;

/// A single star, in the local space of the star group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarPoint {
    /// Each coordinate lies in `[-extent, extent]`.
    pub position: DVec3,
}

/// Scatter `count` stars over `[-400, 400]` on every axis.
///
/// With a seed the layout is reproducible. Without one a fresh layout is drawn
/// from the thread RNG, which is what a live scene uses.
pub fn generate_points(count: u32, seed: Option<u64>) -> Result<Vec<StarPoint>, StarfieldError> {
    match seed {
        Some(seed) => {
            generate_points_with(count, DEFAULT_EXTENT, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => generate_points_with(count, DEFAULT_EXTENT, &mut rand::rng()),
    }
}

/// Scatter `count` stars over `[-extent, extent]` using the given random source.
///
/// Three draws are consumed per star, in x, y, z order.
pub fn generate_points_with<R: Rng>(
    count: u32,
    extent: f64,
    rng: &mut R,
) -> Result<Vec<StarPoint>, StarfieldError> {
    if count == 0 {
        return Err(StarfieldError::InvalidArgument(
            "star count must be greater than zero".to_string(),
        ));
    }
    if !extent.is_finite() || extent <= 0.0 {
        return Err(StarfieldError::InvalidArgument(format!(
            "extent must be finite and positive, got {extent}"
        )));
    }

    let span = extent * 2.0;
    let mut draw = || rng.random::<f64>() * span - extent;
    let points: Vec<StarPoint> = (0..count)
        .map(|_| StarPoint {
            position: DVec3::new(draw(), draw(), draw()),
        })
        .collect();

    log::debug!("Generated {count} stars within +/-{extent}");
    Ok(points)
}

/// A starfield as a scene holds it: stars scattered once at construction,
/// plus the angle that turns them frame after frame.
///
/// The star positions never change after construction; only the group
/// transform returned by [`advance`](Self::advance) does.
#[derive(Debug, Clone)]
pub struct Starfield {
    points: Vec<StarPoint>,
    state: StarfieldState,
    step: f64,
    origin: DVec3,
}

impl Starfield {
    /// Build a starfield of `count` stars advancing `step` degrees per frame.
    pub fn new(count: u32, step: f64, seed: Option<u64>) -> Result<Self, StarfieldError> {
        validate_step(step)?;
        Ok(Self::from_points(generate_points(count, seed)?, step))
    }

    /// Build a starfield from an injected random source.
    pub fn with_rng<R: Rng>(
        count: u32,
        step: f64,
        extent: f64,
        rng: &mut R,
    ) -> Result<Self, StarfieldError> {
        validate_step(step)?;
        Ok(Self::from_points(
            generate_points_with(count, extent, rng)?,
            step,
        ))
    }

    fn from_points(points: Vec<StarPoint>, step: f64) -> Self {
        Self {
            points,
            state: StarfieldState::new(),
            step,
            origin: DVec3::ZERO,
        }
    }

    /// Place the star group at `origin`.
    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    /// Advance one frame. Call exactly once per rendered frame.
    pub fn advance(&mut self) -> FrameTransform {
        self.state.tick(self.step)
    }

    pub fn points(&self) -> &[StarPoint] {
        &self.points
    }

    pub fn theta(&self) -> f64 {
        self.state.theta()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// World-space star positions under `transform`, in generation order.
    pub fn world_positions(&self, transform: &FrameTransform) -> impl Iterator<Item = DVec3> + '_ {
        let affine = transform.to_affine(self.origin);
        self.points
            .iter()
            .map(move |star| affine.transform_point3(star.position))
    }
}

fn validate_step(step: f64) -> Result<(), StarfieldError> {
    if step.is_finite() && step >= 0.0 {
        Ok(())
    } else {
        Err(StarfieldError::InvalidArgument(format!(
            "step must be finite and non-negative, got {step}"
        )))
    }
}
