//! Anisotropic elastic medium: 21-coefficient Voigt stiffness plus density.

use nalgebra::Matrix6;
use nalgebra::linalg::SymmetricEigen;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::elastic::ElasticMaterial;
use crate::kernels::christoffel;
use crate::sampling::SAMPLING_DIRECTIONS;
use crate::tensor::{StiffnessTensor, expand};

/// Controls for the wave-speed estimator.
///
/// The exact anisotropic bound costs 200 symmetric 3×3 eigen-decompositions
/// per call. With `anisotropic_analysis` disabled, `max_wave_speed` returns
/// 0.0 and callers fall back to other bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSpeedConfig {
    /// Enable the Christoffel eigenvalue scan over the sampling directions.
    pub anisotropic_analysis: bool,
}

impl Default for WaveSpeedConfig {
    fn default() -> Self {
        Self {
            anisotropic_analysis: true,
        }
    }
}

/// Elastic medium with a general anisotropic stiffness tensor.
///
/// The 21 independent coefficients c_ab (a ≤ b) of the symmetric 6×6 Voigt
/// matrix, Voigt order 1→11, 2→22, 3→33, 4→23, 5→13, 6→12. The matrix is
/// assumed symmetric positive semi-definite for physically valid media; this
/// is not enforced. Freely copyable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnisotropicMaterial {
    /// Density ρ [kg/m³]
    pub density: f64,
    pub c11: f64,
    pub c12: f64,
    pub c13: f64,
    pub c14: f64,
    pub c15: f64,
    pub c16: f64,
    pub c22: f64,
    pub c23: f64,
    pub c24: f64,
    pub c25: f64,
    pub c26: f64,
    pub c33: f64,
    pub c34: f64,
    pub c35: f64,
    pub c36: f64,
    pub c44: f64,
    pub c45: f64,
    pub c46: f64,
    pub c55: f64,
    pub c56: f64,
    pub c66: f64,
}

impl From<ElasticMaterial> for AnisotropicMaterial {
    /// Embed an isotropic material in the anisotropic basis:
    /// c11 = c22 = c33 = λ + 2μ, c12 = c13 = c23 = λ, c44 = c55 = c66 = μ,
    /// all coupling terms zero.
    fn from(m: ElasticMaterial) -> Self {
        Self {
            density: m.density,
            c11: m.lambda + 2.0 * m.mu,
            c12: m.lambda,
            c13: m.lambda,
            c14: 0.0,
            c15: 0.0,
            c16: 0.0,
            c22: m.lambda + 2.0 * m.mu,
            c23: m.lambda,
            c24: 0.0,
            c25: 0.0,
            c26: 0.0,
            c33: m.lambda + 2.0 * m.mu,
            c34: 0.0,
            c35: 0.0,
            c36: 0.0,
            c44: m.mu,
            c45: 0.0,
            c46: 0.0,
            c55: m.mu,
            c56: 0.0,
            c66: m.mu,
        }
    }
}

impl AnisotropicMaterial {
    /// Canonical coefficient c_ab with 1-based Voigt indices, a ≤ b after
    /// swapping.
    ///
    /// # Panics
    /// Panics if an index is outside 1..=6.
    pub fn coefficient(&self, a: usize, b: usize) -> f64 {
        *self.coefficient_ref(a, b)
    }

    /// Mutable access to a canonical coefficient; same index contract as
    /// [`Self::coefficient`].
    pub fn coefficient_mut(&mut self, a: usize, b: usize) -> &mut f64 {
        let (lo, hi) = (a.min(b), a.max(b));
        match (lo, hi) {
            (1, 1) => &mut self.c11,
            (1, 2) => &mut self.c12,
            (1, 3) => &mut self.c13,
            (1, 4) => &mut self.c14,
            (1, 5) => &mut self.c15,
            (1, 6) => &mut self.c16,
            (2, 2) => &mut self.c22,
            (2, 3) => &mut self.c23,
            (2, 4) => &mut self.c24,
            (2, 5) => &mut self.c25,
            (2, 6) => &mut self.c26,
            (3, 3) => &mut self.c33,
            (3, 4) => &mut self.c34,
            (3, 5) => &mut self.c35,
            (3, 6) => &mut self.c36,
            (4, 4) => &mut self.c44,
            (4, 5) => &mut self.c45,
            (4, 6) => &mut self.c46,
            (5, 5) => &mut self.c55,
            (5, 6) => &mut self.c56,
            (6, 6) => &mut self.c66,
            _ => panic!("Voigt indices out of range: ({a}, {b})"),
        }
    }

    fn coefficient_ref(&self, a: usize, b: usize) -> &f64 {
        let (lo, hi) = (a.min(b), a.max(b));
        match (lo, hi) {
            (1, 1) => &self.c11,
            (1, 2) => &self.c12,
            (1, 3) => &self.c13,
            (1, 4) => &self.c14,
            (1, 5) => &self.c15,
            (1, 6) => &self.c16,
            (2, 2) => &self.c22,
            (2, 3) => &self.c23,
            (2, 4) => &self.c24,
            (2, 5) => &self.c25,
            (2, 6) => &self.c26,
            (3, 3) => &self.c33,
            (3, 4) => &self.c34,
            (3, 5) => &self.c35,
            (3, 6) => &self.c36,
            (4, 4) => &self.c44,
            (4, 5) => &self.c45,
            (4, 6) => &self.c46,
            (5, 5) => &self.c55,
            (5, 6) => &self.c56,
            (6, 6) => &self.c66,
            _ => panic!("Voigt indices out of range: ({a}, {b})"),
        }
    }

    /// Assemble the symmetric 6×6 Voigt stiffness matrix.
    pub fn voigt_matrix(&self) -> Matrix6<f64> {
        let mut c = Matrix6::zeros();
        for a in 1..=6 {
            for b in a..=6 {
                let value = self.coefficient(a, b);
                c[(a - 1, b - 1)] = value;
                c[(b - 1, a - 1)] = value;
            }
        }
        c
    }

    /// Rebuild a material from a 6×6 Voigt matrix, reading the upper
    /// triangle.
    pub fn from_voigt_matrix(density: f64, c: &Matrix6<f64>) -> Self {
        let mut m = AnisotropicMaterial::from(ElasticMaterial::new(density, 0.0, 0.0));
        for a in 1..=6 {
            for b in a..=6 {
                *m.coefficient_mut(a, b) = c[(a - 1, b - 1)];
            }
        }
        m
    }

    /// Stiffness coefficients in a rotated coordinate frame: C' = Nᵗ·C·N,
    /// density unchanged.
    ///
    /// `n` is a 6×6 Bond-style rotation operator, e.g. built by
    /// [`crate::transform::rotation_operator`]. No validation is performed;
    /// a malformed operator silently yields a non-physical material.
    pub fn rotated(&self, n: &Matrix6<f64>) -> Self {
        let rotated_c = n.transpose() * self.voigt_matrix() * n;
        Self::from_voigt_matrix(self.density, &rotated_c)
    }

    /// Expand to the full 81-entry elasticity tensor.
    pub fn full_tensor(&self) -> StiffnessTensor {
        expand(self)
    }

    /// Bounding P-wave speed √((λ̄ + 2μ̄)/ρ) from the isotropically averaged
    /// moduli μ̄ = (c44 + c55 + c66)/3, λ̄ = (c11 + c22 + c33)/3 − 2μ̄.
    pub fn p_wave_speed(&self) -> f64 {
        let mu_bar = (self.c44 + self.c55 + self.c66) / 3.0;
        let lambda_bar = (self.c11 + self.c22 + self.c33) / 3.0 - 2.0 * mu_bar;
        ((lambda_bar + 2.0 * mu_bar) / self.density).sqrt()
    }

    /// Bounding S-wave speed √(μ̄/ρ).
    pub fn s_wave_speed(&self) -> f64 {
        let mu_bar = (self.c44 + self.c55 + self.c66) / 3.0;
        (mu_bar / self.density).sqrt()
    }

    /// Exact wave-speed bound over the fixed direction set.
    ///
    /// For each sampling direction n the Christoffel matrix M_ik(n) is built
    /// from the full tensor and its eigenvalues (real, since M is symmetric)
    /// enter a running maximum; the result is √(max_ev/ρ). The directions are
    /// independent, so the scan runs in parallel; the max-reduction is
    /// order-insensitive and the result deterministic for a given material.
    ///
    /// Accuracy is bounded by the angular coverage of
    /// [`crate::sampling::SAMPLING_DIRECTIONS`]; no iterative refinement is
    /// performed. Returns 0.0 when `config.anisotropic_analysis` is false.
    pub fn max_wave_speed(&self, config: &WaveSpeedConfig) -> f64 {
        if !config.anisotropic_analysis {
            return 0.0;
        }

        let tensor = self.full_tensor();
        let max_ev = SAMPLING_DIRECTIONS
            .as_slice()
            .par_iter()
            .map(|direction| {
                let m = christoffel(&tensor, direction);
                let eigen = SymmetricEigen::new(m);
                eigen.eigenvalues.iter().fold(0.0_f64, |acc, &ev| acc.max(ev))
            })
            .reduce(|| 0.0, f64::max);

        (max_ev / self.density).sqrt()
    }

    /// Precondition check for test suites: density > 0 and the Voigt matrix
    /// symmetric positive semi-definite (within a relative tolerance). Not
    /// invoked by any numeric path.
    pub fn is_physically_valid(&self) -> bool {
        if !(self.density > 0.0) {
            return false;
        }
        let c = self.voigt_matrix();
        let scale = c.abs().max().max(1.0);
        let eigen = SymmetricEigen::new(c);
        eigen.eigenvalues.iter().all(|&ev| ev >= -1.0e-9 * scale)
    }
}
