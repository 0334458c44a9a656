//! Projective coordinates and the Montgomery ladder.
//!
//! Scalar multiplication keeps its intermediate points in projective form
//! `(X : Y : Z)` with `x = X/Z`, `y = Y/Z`, so that the 576 ladder steps
//! need no field inversion. A single inversion converts the result back to
//! affine coordinates.
//!
//! ## Addition law
//!
//! The `add-2007-bl` formulas for Edwards curves with `a = 1`, `c = 1`:
//!
//! ```text
//! A = Z1·Z2     B = A²        C = X1·X2     D = Y1·Y2
//! E = d·C·D     F = B − E     G = B + E
//! X3 = A·F·((X1 + Y1)·(X2 + Y2) − C − D)
//! Y3 = A·G·(D − C)
//! Z3 = F·G
//! ```
//!
//! Since `d` is not a square in 𝔽ₚ the law is complete: the same formula
//! serves for doubling and for the identity, so the ladder has no special
//! cases.

use subtle::{Choice, ConditionallySelectable};

use super::field::FieldElement;
use super::params::D;
use super::point::CurvePoint;
use super::scalar::Scalar;
use crate::primitives::U576;

/// A point in projective coordinates.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// `(0 : 1 : 1)`.
    const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    fn from_affine(point: &CurvePoint) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
            z: FieldElement::ONE,
        }
    }

    /// Converts back to affine coordinates with one inversion.
    fn to_affine(self) -> CurvePoint {
        let z_inv = self.z.invert();
        CurvePoint::from_coordinates_unchecked(self.x * z_inv, self.y * z_inv)
    }

    /// Complete projective addition.
    fn add(&self, other: &Self) -> Self {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = D * c * d;
        let f = b - e;
        let g = b + e;

        let x3 = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y3 = a * g * (d - c);
        let z3 = f * g;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

/// Computes `scalar · point` with a Montgomery ladder.
///
/// The ladder walks all 576 scalar bits from the most significant down,
/// whatever the scalar's actual length. Each step performs one conditional
/// swap, one addition, one doubling and a second conditional swap, so the
/// sequence of field operations does not depend on the scalar.
pub(crate) fn scalar_mul(point: &CurvePoint, scalar: &Scalar) -> CurvePoint {
    let mut r0 = ProjectivePoint::IDENTITY;
    let mut r1 = ProjectivePoint::from_affine(point);

    for i in (0..U576::BITS).rev() {
        let bit = Choice::from(scalar.bit(i));

        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        r1 = r0.add(&r1);
        r0 = r0.add(&r0);
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
    }

    r0.to_affine()
}
