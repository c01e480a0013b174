//! Coordinate-frame transformation operators for Voigt-notation stiffness.

use nalgebra::{Matrix3, Matrix6};

/// Build the 6×6 Bond-style rotation operator N for a 3×3 rotation matrix,
/// such that [`crate::AnisotropicMaterial::rotated`] (C' = Nᵗ·C·N) expresses
/// the same medium in the rotated frame.
///
/// Uses the Voigt order 11, 22, 33, 23, 13, 12. For rotations by multiples of
/// 90° the operator is a signed permutation and therefore orthogonal.
pub fn rotation_operator(r: &Matrix3<f64>) -> Matrix6<f64> {
    // Index pairs backing each Voigt slot.
    const PAIRS: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

    // Bond matrix for stress transformation, sigma' = M·sigma.
    let mut m = Matrix6::zeros();
    for (row, &(i, j)) in PAIRS.iter().enumerate() {
        for (col, &(k, l)) in PAIRS.iter().enumerate() {
            m[(row, col)] = if col < 3 {
                r[(i, k)] * r[(j, k)]
            } else {
                r[(i, k)] * r[(j, l)] + r[(i, l)] * r[(j, k)]
            };
        }
    }

    // rotated() applies N^T·C·N, so hand back N = M^T to realize M·C·M^T.
    m.transpose()
}
