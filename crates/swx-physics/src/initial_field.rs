//! Initial conditions evaluated over quadrature points.

use nalgebra::DMatrix;
use swx_model::ElasticMaterial;

/// Evolved quantities per point: six stress components followed by three
/// particle velocities.
pub const NUM_QUANTITIES: usize = 9;

/// Initial condition for the wavefield, dispatched by variant.
#[derive(Debug, Clone)]
pub enum InitialField {
    /// Homogeneous zero field.
    Zero,
    /// Travelling sinusoidal plane wave.
    Planarwave(Planarwave),
}

impl InitialField {
    /// Fill `dofs_qp` (one row per point, [`NUM_QUANTITIES`] columns) with
    /// the field at `time`.
    ///
    /// # Panics
    /// Panics if `dofs_qp` is smaller than `points.len()` × `NUM_QUANTITIES`.
    pub fn evaluate(&self, time: f64, points: &[[f64; 3]], dofs_qp: &mut DMatrix<f64>) {
        match self {
            InitialField::Zero => dofs_qp.fill(0.0),
            InitialField::Planarwave(wave) => wave.evaluate(time, points, dofs_qp),
        }
    }
}

/// Plane wave with a fixed wave vector and per-quantity amplitudes.
///
/// Every quantity oscillates as a·sin(k·x − ωt + φ) with a common phase
/// argument; the phase velocity ω/|k| is the material's P-wave speed.
#[derive(Debug, Clone)]
pub struct Planarwave {
    wave_vector: [f64; 3],
    amplitudes: [f64; NUM_QUANTITIES],
    angular_frequency: f64,
    phase: f64,
}

impl Planarwave {
    /// Choose `phase` in [0, 2π].
    pub fn new(
        material: &ElasticMaterial,
        wave_vector: [f64; 3],
        amplitudes: [f64; NUM_QUANTITIES],
        phase: f64,
    ) -> Self {
        let wave_number = (wave_vector[0] * wave_vector[0]
            + wave_vector[1] * wave_vector[1]
            + wave_vector[2] * wave_vector[2])
            .sqrt();
        Self {
            wave_vector,
            amplitudes,
            angular_frequency: material.p_wave_speed() * wave_number,
            phase,
        }
    }

    /// Temporal period 2π/ω.
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.angular_frequency
    }

    fn evaluate(&self, time: f64, points: &[[f64; 3]], dofs_qp: &mut DMatrix<f64>) {
        for (p, point) in points.iter().enumerate() {
            let argument = self.wave_vector[0] * point[0]
                + self.wave_vector[1] * point[1]
                + self.wave_vector[2] * point[2]
                - self.angular_frequency * time
                + self.phase;
            let oscillation = argument.sin();
            for (q, amplitude) in self.amplitudes.iter().enumerate() {
                dofs_qp[(p, q)] = amplitude * oscillation;
            }
        }
    }
}
