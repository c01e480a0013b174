//! Expansion of the 21 Voigt coefficients into the full 4th-order tensor.

use crate::anisotropic::AnisotropicMaterial;

/// The full symmetric elasticity tensor C[i,j,k,l] with i,j,k,l ∈ {0,1,2},
/// stored row-major over (i,j,k,l).
///
/// Satisfies C[i,j,k,l] = C[j,i,k,l] = C[i,j,l,k] = C[k,l,i,j]. Derived on
/// demand from the Voigt coefficients, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StiffnessTensor {
    entries: [f64; 81],
}

impl StiffnessTensor {
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        self.entries[((i * 3 + j) * 3 + k) * 3 + l]
    }

    pub fn as_slice(&self) -> &[f64; 81] {
        &self.entries
    }
}

/// Expand the 21 independent coefficients into all 81 tensor entries.
///
/// Each entry maps to exactly one canonical coefficient c_ab with
/// a = voigt(i,j), b = voigt(k,l), a ≤ b, under the Voigt pair map
/// 11→1, 22→2, 33→3, 23→4, 13→5, 12→6.
pub fn expand(m: &AnisotropicMaterial) -> StiffnessTensor {
    let mut t = [0.0; 81];
    t[0] = m.c11;
    t[1] = m.c16;
    t[2] = m.c15;
    t[3] = m.c16;
    t[4] = m.c12;
    t[5] = m.c14;
    t[6] = m.c15;
    t[7] = m.c14;
    t[8] = m.c13;
    t[9] = m.c16;
    t[10] = m.c66;
    t[11] = m.c56;
    t[12] = m.c66;
    t[13] = m.c26;
    t[14] = m.c46;
    t[15] = m.c56;
    t[16] = m.c46;
    t[17] = m.c36;
    t[18] = m.c15;
    t[19] = m.c56;
    t[20] = m.c55;
    t[21] = m.c56;
    t[22] = m.c25;
    t[23] = m.c45;
    t[24] = m.c55;
    t[25] = m.c45;
    t[26] = m.c35;
    t[27] = m.c16;
    t[28] = m.c66;
    t[29] = m.c56;
    t[30] = m.c66;
    t[31] = m.c26;
    t[32] = m.c46;
    t[33] = m.c56;
    t[34] = m.c46;
    t[35] = m.c36;
    t[36] = m.c12;
    t[37] = m.c26;
    t[38] = m.c25;
    t[39] = m.c26;
    t[40] = m.c22;
    t[41] = m.c24;
    t[42] = m.c25;
    t[43] = m.c24;
    t[44] = m.c23;
    t[45] = m.c14;
    t[46] = m.c46;
    t[47] = m.c45;
    t[48] = m.c46;
    t[49] = m.c24;
    t[50] = m.c44;
    t[51] = m.c45;
    t[52] = m.c44;
    t[53] = m.c34;
    t[54] = m.c15;
    t[55] = m.c56;
    t[56] = m.c55;
    t[57] = m.c56;
    t[58] = m.c25;
    t[59] = m.c45;
    t[60] = m.c55;
    t[61] = m.c45;
    t[62] = m.c35;
    t[63] = m.c14;
    t[64] = m.c46;
    t[65] = m.c45;
    t[66] = m.c46;
    t[67] = m.c24;
    t[68] = m.c44;
    t[69] = m.c45;
    t[70] = m.c44;
    t[71] = m.c34;
    t[72] = m.c13;
    t[73] = m.c36;
    t[74] = m.c35;
    t[75] = m.c36;
    t[76] = m.c23;
    t[77] = m.c34;
    t[78] = m.c35;
    t[79] = m.c34;
    t[80] = m.c33;
    StiffnessTensor { entries: t }
}
