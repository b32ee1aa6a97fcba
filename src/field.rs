// -*- mode: rust; -*-
//
// This file is part of fp25519.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using signed 64-bit
//! limbs in radix \\(2\^{51}\\) with 128-bit intermediate products.
//!
//! On x86_64 the limb products lower to single `MUL` instructions with
//! 128-bit outputs, so multiplication costs 25 multiplies plus carries.

use core::fmt;
use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A `FieldElement` represents an element of the field
/// \\(\mathbb{Z} / (2\^{255} - 19)\\).
///
/// The element is held in radix \\(2\^{51}\\) as five signed 64-bit
/// limbs, limb \\(i\\) contributing \\(\mathtt{limb}[i] \cdot
/// 2\^{51 i}\\) to the represented integer.  The representation is
/// *unsaturated* and *non-canonical*: limbs are allowed to grow past
/// 51 bits between reductions, a value has many limb encodings, and no
/// operation ever brings the integer into \\([0, p)\\) on its own
/// (see [`FieldElement::canonical`] for that).
///
/// The limbs are signed because [`Sub`] is a raw limb-wise difference:
/// its result may carry negative limbs, which [`FieldElement::reduce`]
/// later normalizes through arithmetic shifts.
///
/// `==` compares limb sequences exactly.  Two encodings of the same
/// field value are *not* `==` unless every limb matches; use
/// [`FieldElement::canonical_eq`] to compare values.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [i64; 5]);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:?})", &self.0[..])
    }
}

/// Renders the five limbs as a tuple, `(l0, l1, l2, l3, l4)`.
/// Diagnostic only; the format is not a stable encoding.
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]
        )
    }
}

impl<'b> AddAssign<&'b FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: &'b FieldElement) {
        for i in 0..5 {
            self.0[i] += rhs.0[i];
        }
    }
}

/// Limb-wise addition, with no carrying and no reduction.
///
/// The caller must ensure every input limb fits in 63 bits so the
/// limb-wise sum cannot overflow, and is responsible for calling
/// [`FieldElement::reduce`] before feeding the result to [`Mul`].
impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: &'b FieldElement) {
        for i in 0..5 {
            self.0[i] -= rhs.0[i];
        }
    }
}

/// Limb-wise subtraction, with no borrowing and no reduction.
///
/// Result limbs may be negative; [`FieldElement::reduce`] handles them.
/// The same 63-bit input bound as [`Add`] applies.
impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output -= rhs;
        output
    }
}

/// Limb-wise negation, consistent with [`Sub`]'s raw-limb semantics:
/// `-&a` has the same limbs as `&FieldElement::ZERO - &a`.
impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        let mut output = *self;
        for i in 0..5 {
            output.0[i] = -output.0[i];
        }
        output
    }
}

impl<'b> MulAssign<&'b FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: &'b FieldElement) {
        let result = (self as &FieldElement) * rhs;
        self.0 = result.0;
    }
}

/// Field multiplication, returning the product reduced to limbs below
/// \\(2\^{51}\\) (limb 0 may exceed that by at most the final 19-fold
/// term; see [`FieldElement::reduce`]).
///
/// Every input limb must have magnitude below \\(2\^{52}\\) so the
/// pairwise products keep full precision in 128 bits.  The bound is
/// not checked in release builds; violating it silently produces a
/// wrong result.
impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        /// Multiply two limbs with 128 bits of output.
        #[inline(always)]
        fn m(x: i64, y: i64) -> i128 {
            (x as i128) * (y as i128)
        }

        // Alias self, rhs for more readable formulas
        let a: &[i64; 5] = &self.0;
        let b: &[i64; 5] = &rhs.0;

        debug_assert!(a[0].unsigned_abs() < (1 << 52));
        debug_assert!(a[1].unsigned_abs() < (1 << 52));
        debug_assert!(a[2].unsigned_abs() < (1 << 52));
        debug_assert!(a[3].unsigned_abs() < (1 << 52));
        debug_assert!(a[4].unsigned_abs() < (1 << 52));
        debug_assert!(b[0].unsigned_abs() < (1 << 52));
        debug_assert!(b[1].unsigned_abs() < (1 << 52));
        debug_assert!(b[2].unsigned_abs() < (1 << 52));
        debug_assert!(b[3].unsigned_abs() < (1 << 52));
        debug_assert!(b[4].unsigned_abs() < (1 << 52));

        // Schoolbook convolution of two degree-4 polynomials in 2^51:
        // nine coefficients, each at most sum of five 104-bit products,
        // so below 2^107.
        let r0: i128 = m(a[0], b[0]);
        let r1: i128 = m(a[0], b[1]) + m(a[1], b[0]);
        let r2: i128 = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]);
        let r3: i128 = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]);
        let r4: i128 = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);
        let r5: i128 = m(a[1], b[4]) + m(a[2], b[3]) + m(a[3], b[2]) + m(a[4], b[1]);
        let r6: i128 = m(a[2], b[4]) + m(a[3], b[3]) + m(a[4], b[2]);
        let r7: i128 = m(a[3], b[4]) + m(a[4], b[3]);
        let r8: i128 = m(a[4], b[4]);

        // Coefficient k sits at bit position 51k, and 51 * 5 = 255 with
        // 2^255 = 19 (mod p), so coefficients 5..9 fold back into 0..4
        // scaled by 19.
        let mut c0: i128 = r0 + 19 * r5;
        let mut c1: i128 = r1 + 19 * r6;
        let mut c2: i128 = r2 + 19 * r7;
        let mut c3: i128 = r3 + 19 * r8;
        let mut c4: i128 = r4;

        // One carry pass over the wide coefficients.  Afterwards c1..c4
        // lie in [0, 2^51) and c0 below 2^51 + 19 * 5 * 2^53 < 2^60, so
        // everything narrows to i64 without loss.
        let carry = c0 >> 51;
        c1 += carry;
        c0 -= carry << 51;
        let carry = c1 >> 51;
        c2 += carry;
        c1 -= carry << 51;
        let carry = c2 >> 51;
        c3 += carry;
        c2 -= carry << 51;
        let carry = c3 >> 51;
        c4 += carry;
        c3 -= carry << 51;
        let carry = c4 >> 51;
        c0 += 19 * carry;
        c4 -= carry << 51;

        let narrowed = FieldElement([c0 as i64, c1 as i64, c2 as i64, c3 as i64, c4 as i64]);

        // c0 still holds up to ~2^60: the first pass pushes that surplus
        // up through the limbs, and the second settles the 19-fold term
        // the first pass can emit from limb 4.
        narrowed.reduce().reduce()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl FieldElement {
    /// The zero element.
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The one element.
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// The element \\(-1 \pmod p\\), in canonical form.
    pub const MINUS_ONE: FieldElement = FieldElement([
        2251799813685228,
        2251799813685247,
        2251799813685247,
        2251799813685247,
        2251799813685247,
    ]);

    /// Construct a `FieldElement` from five raw limbs, taken verbatim.
    ///
    /// No validation and no normalization: the limbs are stored as
    /// given, whether or not they satisfy any operation's input bound.
    pub const fn from_limbs(limbs: [i64; 5]) -> FieldElement {
        FieldElement(limbs)
    }

    /// The raw limbs of this element.
    pub const fn to_limbs(&self) -> [i64; 5] {
        self.0
    }

    /// Carry-propagate so that each limb re-fits its nominal 51 bits,
    /// folding the top limb's overflow into limb 0 scaled by 19
    /// (\\(2\^{255} \equiv 19 \pmod p\\)).
    ///
    /// `>> 51` on a signed limb is floor division by \\(2\^{51}\\), so
    /// the ripple also normalizes the negative limbs a [`Sub`] leaves
    /// behind.
    ///
    /// A single pass leaves limbs 1..4 in \\([0, 2\^{51})\\) but limb 0
    /// still carries the fold term, up to \\(19 \cdot 2\^{12}\\) past
    /// \\(2\^{51}\\) for inputs near the 64-bit limit.  `reduce` twice
    /// to fully normalize after a worst-case multiplication; the tests
    /// pin an input where one pass is demonstrably not enough.
    pub fn reduce(&self) -> FieldElement {
        let mut limbs = self.0;

        let carry = limbs[0] >> 51;
        limbs[1] += carry;
        limbs[0] -= carry << 51;
        let carry = limbs[1] >> 51;
        limbs[2] += carry;
        limbs[1] -= carry << 51;
        let carry = limbs[2] >> 51;
        limbs[3] += carry;
        limbs[2] -= carry << 51;
        let carry = limbs[3] >> 51;
        limbs[4] += carry;
        limbs[3] -= carry << 51;

        let carry = limbs[4] >> 51;
        limbs[0] += 19 * carry;
        limbs[4] -= carry << 51;

        FieldElement(limbs)
    }

    /// Fully reduce into canonical form: the unique encoding with every
    /// limb in \\([0, 2\^{51})\\) and the represented integer in
    /// \\([0, p)\\).
    ///
    /// This is the only operation that produces canonical encodings;
    /// the arithmetic itself never pays for full reduction.  Intended
    /// for value-level comparison and for handing elements off to
    /// layers that expect a unique representative.
    pub fn canonical(&self) -> FieldElement {
        let mut limbs = self.reduce().reduce().0;

        // Two passes leave limbs 1..4 in [0, 2^51) and limb 0 in
        // [-19, 2^51 + 19); a negative limb 0 (from an element denoting
        // a negative integer) is lifted by adding p once.
        if limbs[0] < 0 {
            limbs[0] += (1 << 51) - 19;
            limbs[1] += (1 << 51) - 1;
            limbs[2] += (1 << 51) - 1;
            limbs[3] += (1 << 51) - 1;
            limbs[4] += (1 << 51) - 1;
            limbs = FieldElement(limbs).reduce().0;
        }

        // Let h be the represented integer, now in [0, 2^255 + 19).
        // h >= p exactly when h + 19 >= 2^255, so the carry of h + 19
        // out of the top limb says whether one more p must come off.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // r = h - pq = h + 19q - 2^255 q
        limbs[0] += 19 * q;

        let carry = limbs[0] >> 51;
        limbs[1] += carry;
        limbs[0] -= carry << 51;
        let carry = limbs[1] >> 51;
        limbs[2] += carry;
        limbs[1] -= carry << 51;
        let carry = limbs[2] >> 51;
        limbs[3] += carry;
        limbs[2] -= carry << 51;
        let carry = limbs[3] >> 51;
        limbs[4] += carry;
        limbs[3] -= carry << 51;
        // Discarding the carry out of limb 4 subtracts the 2^255 q term.
        limbs[4] -= (limbs[4] >> 51) << 51;

        FieldElement(limbs)
    }

    /// Value-level equality: do the two encodings denote the same
    /// element of the field?
    ///
    /// `==` is exact limb-sequence equality, which is the right notion
    /// for pinning down the arithmetic but too strict for field values;
    /// this compares canonical representatives instead.
    pub fn canonical_eq(&self, other: &FieldElement) -> bool {
        self.canonical() == other.canonical()
    }
}
