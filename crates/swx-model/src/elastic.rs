//! Isotropic elastic material in Lamé parameterization.

use serde::{Deserialize, Serialize};

/// Isotropic linear elastic material: density plus the two Lamé parameters.
///
/// This is the degenerate case of the anisotropic model; converting into
/// [`crate::AnisotropicMaterial`] embeds it in the 21-coefficient basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticMaterial {
    /// Density ρ [kg/m³]
    pub density: f64,
    /// First Lamé parameter λ [Pa]
    pub lambda: f64,
    /// Shear modulus μ (second Lamé parameter) [Pa]
    pub mu: f64,
}

impl ElasticMaterial {
    pub fn new(density: f64, lambda: f64, mu: f64) -> Self {
        Self {
            density,
            lambda,
            mu,
        }
    }

    /// Convert from engineering constants E (Young's modulus) and ν
    /// (Poisson's ratio).
    pub fn from_young_poisson(density: f64, youngs_modulus: f64, poissons_ratio: f64) -> Self {
        let lambda = youngs_modulus * poissons_ratio
            / ((1.0 + poissons_ratio) * (1.0 - 2.0 * poissons_ratio));
        let mu = youngs_modulus / (2.0 * (1.0 + poissons_ratio));
        Self {
            density,
            lambda,
            mu,
        }
    }

    /// P-wave speed √((λ + 2μ)/ρ).
    pub fn p_wave_speed(&self) -> f64 {
        ((self.lambda + 2.0 * self.mu) / self.density).sqrt()
    }

    /// S-wave speed √(μ/ρ).
    pub fn s_wave_speed(&self) -> f64 {
        (self.mu / self.density).sqrt()
    }
}
