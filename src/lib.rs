// -*- mode: rust; -*-
//
// This file is part of fp25519.
// See LICENSE for licensing information.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

//! Arithmetic in \\(\mathbb{Z} / (2\^{255} - 19)\\), the base field of
//! Curve25519 and Ed25519.
//!
//! This crate is the arithmetic kernel only.  It provides the
//! unsaturated radix-\\(2\^{51}\\) representation of field elements and
//! the limb-level primitives — addition, subtraction, carry reduction,
//! and multiplication with reduction — that curve formulas, scalar
//! multiplication, and signature protocols are built on top of.  Point
//! arithmetic, byte encodings, and anything touching key material
//! belong to the callers.
//!
//! # Representation
//!
//! A [`FieldElement`] holds five signed 64-bit limbs, limb \\(i\\)
//! weighted by \\(2\^{51 i}\\).  The representation is non-canonical:
//! limbs grow past 51 bits between reductions and a field value has
//! many encodings.  `==` is exact limb-wise equality; use
//! [`FieldElement::canonical_eq`] when value equality is meant.
//!
//! Addition and subtraction are raw limb-wise operations with no
//! carrying; callers interleave [`FieldElement::reduce`] to bring limbs
//! back under multiplication's \\(2\^{52}\\) input bound.  After a
//! worst-case multiplication a single `reduce` pass is not always
//! enough; `reduce` twice to fully normalize.
//!
//! # Example
//!
//! ```
//! use fp25519::FieldElement;
//!
//! let a = FieldElement::from_limbs([1, 1, 1, 1, 1]);
//! let b = FieldElement::from_limbs([2, 2, 2, 2, 2]);
//!
//! // (1 + 2^51 + ... + 2^204) * 2, limb by limb
//! let sum = (&a + &b).reduce();
//! assert_eq!(sum, FieldElement::from_limbs([3, 3, 3, 3, 3]));
//!
//! // a * b mod 2^255 - 19, back in reduced limb form
//! let product = &a * &b;
//! assert_eq!(product, FieldElement::from_limbs([154, 118, 82, 46, 10]));
//! ```

mod field;

pub use crate::field::FieldElement;
