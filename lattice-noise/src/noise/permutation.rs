//! The shared lattice hash.
//!
//! A fixed permutation of `0..=255`, stored twice in a row so that the sum of a
//! permutation entry and a byte-sized lattice index never needs to wrap.

use std::sync::LazyLock;

use crate::error::NoiseError;

/// Ken Perlin's reference permutation from the improved noise paper.
#[rustfmt::skip]
pub const PERLIN_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

static REFERENCE: LazyLock<PermutationTable> = LazyLock::new(|| {
    tracing::debug!("building reference permutation table");
    PermutationTable::from_reference(&PERLIN_PERMUTATION)
});

/// A 512-entry permutation table: a permutation of `0..=255` followed by a copy of itself.
///
/// Immutable once built. Both noise engines borrow it, so one table can back any
/// number of engines and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; 512],
}

impl PermutationTable {
    /// The process-wide table built from [`PERLIN_PERMUTATION`].
    ///
    /// Built on first use; every later call returns the same instance.
    #[must_use]
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    /// Builds a table from a caller-supplied permutation.
    ///
    /// Fails if any value appears twice, since a repeated entry would bias the hash.
    pub fn from_permutation(permutation: [u8; 256]) -> Result<Self, NoiseError> {
        let mut seen = [false; 256];
        for &value in &permutation {
            let slot = &mut seen[usize::from(value)];
            if *slot {
                return Err(NoiseError::NotAPermutation { value });
            }
            *slot = true;
        }
        Ok(Self::from_reference(&permutation))
    }

    const fn from_reference(permutation: &[u8; 256]) -> Self {
        let mut p = [0u8; 512];
        let mut i = 0;
        while i < 256 {
            p[i] = permutation[i];
            p[i + 256] = permutation[i];
            i += 1;
        }
        Self { p }
    }

    /// Entry at `index`, which must be below 512.
    #[inline]
    #[must_use]
    pub(crate) const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }

    /// The full duplicated table.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8; 512] {
        &self.p
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::reference().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn reference_is_a_permutation() {
        let mut sorted = PERLIN_PERMUTATION;
        sorted.sort_unstable();
        for (i, value) in sorted.iter().enumerate() {
            assert_eq!(usize::from(*value), i);
        }
    }

    #[test]
    fn second_half_mirrors_first() {
        let table = PermutationTable::reference();
        for i in 0..256 {
            assert_eq!(table.get(i), table.get(i + 256));
        }
        assert_eq!(table.get(0), 151);
        assert_eq!(table.get(255), 180);
    }

    #[test]
    fn reference_is_built_once() {
        let a = PermutationTable::reference();
        let b = PermutationTable::reference();
        assert!(ptr::eq(a, b));
    }

    #[test]
    fn duplicate_entry_rejected() {
        let mut permutation = PERLIN_PERMUTATION;
        permutation[1] = permutation[0];
        assert_eq!(
            PermutationTable::from_permutation(permutation),
            Err(NoiseError::NotAPermutation { value: 151 })
        );
    }

    #[test]
    fn custom_permutation_accepted() {
        let mut identity = [0u8; 256];
        for (i, value) in identity.iter_mut().enumerate() {
            *value = i as u8;
        }
        let table = PermutationTable::from_permutation(identity).expect("valid permutation");
        assert_eq!(table.get(300), 44);
    }
}
