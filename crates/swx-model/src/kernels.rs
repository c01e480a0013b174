//! Direction-contracted reduction kernels over the full elasticity tensor.

use nalgebra::Matrix3;

use crate::tensor::StiffnessTensor;

/// Christoffel matrix M_ik(n) = Σ_jl C[i,j,k,l]·n_j·n_l.
///
/// Symmetric for a tensor with full symmetries; its eigenvalues are ρ·v² for
/// plane waves propagating along `n`.
pub fn christoffel(c: &StiffnessTensor, n: &[f64; 3]) -> Matrix3<f64> {
    let mut m = Matrix3::zeros();
    for i in 0..3 {
        for k in 0..3 {
            let mut sum = 0.0;
            for j in 0..3 {
                for l in 0..3 {
                    sum += c.get(i, j, k, l) * n[j] * n[l];
                }
            }
            m[(i, k)] = sum;
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anisotropic::AnisotropicMaterial;
    use crate::elastic::ElasticMaterial;

    #[test]
    fn isotropic_christoffel_along_x_axis() {
        let (lambda, mu) = (2.3, 1.7);
        let tensor = AnisotropicMaterial::from(ElasticMaterial::new(1.0, lambda, mu)).full_tensor();
        let m = christoffel(&tensor, &[1.0, 0.0, 0.0]);

        // Longitudinal stiffness along the axis, shear transverse to it.
        assert!((m[(0, 0)] - (lambda + 2.0 * mu)).abs() < 1.0e-14);
        assert!((m[(1, 1)] - mu).abs() < 1.0e-14);
        assert!((m[(2, 2)] - mu).abs() < 1.0e-14);
        assert!(m[(0, 1)].abs() < 1.0e-14);
        assert!(m[(1, 2)].abs() < 1.0e-14);
    }

    #[test]
    fn christoffel_is_symmetric_for_generic_direction() {
        let mut material = AnisotropicMaterial::from(ElasticMaterial::new(1.0, 2.3, 1.7));
        material.c14 = 0.4;
        material.c25 = -0.2;
        let tensor = material.full_tensor();

        let inv_sqrt3 = 1.0 / 3.0_f64.sqrt();
        let m = christoffel(&tensor, &[inv_sqrt3, inv_sqrt3, inv_sqrt3]);
        for i in 0..3 {
            for k in 0..3 {
                assert!((m[(i, k)] - m[(k, i)]).abs() < 1.0e-14);
            }
        }
    }
}
