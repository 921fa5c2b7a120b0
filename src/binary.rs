//! Addition, scalar mixing and the product family.

use crate::Multivector;
use geo_traits::{Antiwedge, Dot, Geo, Wedge};
use num_traits::Float;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Sub};

impl<T: Float> Add for Multivector<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<T: Float> Sub for Multivector<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<T: Float> Geo<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    #[inline]
    fn geo(self, rhs: Multivector<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.coefficients();
        let [b0, b1, b2, b3] = rhs.coefficients();
        Multivector::new(
            a0 * b0 + a2 * b2,
            a0 * b1 + a1 * b0 - a2 * b3 + a3 * b2,
            a0 * b2 + a2 * b0,
            a0 * b3 + a1 * b2 - a2 * b1 + a3 * b0,
        )
    }
}

impl<T: Float> Wedge<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    #[inline]
    fn wedge(self, rhs: Multivector<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.coefficients();
        let [b0, b1, b2, b3] = rhs.coefficients();
        Multivector::new(
            a0 * b0,
            a0 * b1 + a1 * b0,
            a0 * b2 + a2 * b0,
            a0 * b3 + a1 * b2 - a2 * b1 + a3 * b0,
        )
    }
}

/// Closed form of `dual(dual(lhs) ^ dual(rhs))`.
impl<T: Float> Antiwedge<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    #[inline]
    fn antiwedge(self, rhs: Multivector<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.coefficients();
        let [b0, b1, b2, b3] = rhs.coefficients();
        Multivector::new(
            a0 * b3 + a3 * b0 - a1 * b2 + a2 * b1,
            a1 * b3 + a3 * b1,
            a2 * b3 + a3 * b2,
            a3 * b3,
        )
    }
}

impl<T: Float> Dot<Multivector<T>> for Multivector<T> {
    type Output = Multivector<T>;
    #[inline]
    fn dot(self, rhs: Multivector<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.coefficients();
        let [b0, b1, b2, b3] = rhs.coefficients();
        Multivector::new(
            a0 * b0 + a2 * b2,
            a0 * b1 + a1 * b0 - a2 * b3 + a3 * b2,
            a0 * b2 + a2 * b0,
            a0 * b3 + a3 * b0,
        )
    }
}

impl<T: Float> Mul for Multivector<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.geo(rhs)
    }
}

impl<T: Float> BitXor for Multivector<T> {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.wedge(rhs)
    }
}

impl<T: Float> BitAnd for Multivector<T> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.antiwedge(rhs)
    }
}

impl<T: Float> BitOr for Multivector<T> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.dot(rhs)
    }
}

/// A bare float embeds as the scalar blade; only index 0 takes part in
/// addition and subtraction.
macro_rules! impl_scalar_ops {
    ($($float:ty),*) => {
        $(
            impl Add<$float> for Multivector<$float> {
                type Output = Self;
                #[inline]
                fn add(self, rhs: $float) -> Self {
                    self.with_blade(crate::Blade::Scalar, self.scalar_part() + rhs)
                }
            }

            impl Add<Multivector<$float>> for $float {
                type Output = Multivector<$float>;
                #[inline]
                fn add(self, rhs: Multivector<$float>) -> Self::Output {
                    rhs.with_blade(crate::Blade::Scalar, self + rhs.scalar_part())
                }
            }

            impl Sub<$float> for Multivector<$float> {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: $float) -> Self {
                    self.with_blade(crate::Blade::Scalar, self.scalar_part() - rhs)
                }
            }

            impl Sub<Multivector<$float>> for $float {
                type Output = Multivector<$float>;
                #[inline]
                fn sub(self, rhs: Multivector<$float>) -> Self::Output {
                    let [b0, b1, b2, b3] = rhs.coefficients();
                    Multivector::new(self - b0, -b1, -b2, -b3)
                }
            }

            impl Mul<$float> for Multivector<$float> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $float) -> Self {
                    self.map(|a| a * rhs)
                }
            }

            impl Mul<Multivector<$float>> for $float {
                type Output = Multivector<$float>;
                #[inline]
                fn mul(self, rhs: Multivector<$float>) -> Self::Output {
                    rhs.map(|b| self * b)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blade;

    type Mv = Multivector<f64>;

    #[test]
    fn e0_squares_to_zero() {
        assert_eq!(Mv::zero(), Mv::E0 * Mv::E0);
    }

    #[test]
    fn e1_squares_to_one() {
        assert_eq!(Mv::ONE, Mv::E1 * Mv::E1);
    }

    #[test]
    fn pseudoscalar_squares_to_zero() {
        assert_eq!(Mv::zero(), Mv::E01 * Mv::E01);
    }

    #[test]
    fn basis_vectors_anticommute() {
        assert_eq!(Mv::E01, Mv::E0 * Mv::E1);
        assert_eq!(-Mv::E01, Mv::E1 * Mv::E0);
    }

    #[test]
    fn wedge_of_vector_with_itself_is_zero() {
        let v = Mv::new(0., 2., -3., 0.);
        assert_eq!(Mv::zero(), v ^ v);
    }

    #[test]
    fn wedge_of_basis_vectors() {
        assert_eq!(Mv::E01, Mv::E0 ^ Mv::E1);
        assert_eq!(-Mv::E01, Mv::E1 ^ Mv::E0);
    }

    #[test]
    fn vee_of_pseudoscalar_is_identity() {
        let a = Mv::new(2., 3., 5., 7.);
        assert_eq!(a, a & Mv::E01);
        assert_eq!(a, Mv::E01 & a);
    }

    #[test]
    fn vee_of_vectors_is_scalar() {
        let a = Mv::new(0., 2., 3., 0.);
        let b = Mv::new(0., 5., 7., 0.);
        assert_eq!(Mv::scalar(3. * 5. - 2. * 7.), a & b);
    }

    #[test]
    fn dot_drops_grade_raising_terms() {
        assert_eq!(Mv::zero(), Mv::E0 | Mv::E1);
        assert_eq!(Mv::ONE, Mv::E1 | Mv::E1);
        assert_eq!(-Mv::E0, Mv::E1 | Mv::E01);
    }

    #[test]
    fn scalar_addition_touches_scalar_only() {
        let b = Mv::new(1., 2., 3., 4.);
        assert_eq!(Mv::new(11., 2., 3., 4.), 10. + b);
        assert_eq!(Mv::new(11., 2., 3., 4.), b + 10.);
        assert_eq!(Mv::new(-9., 2., 3., 4.), b - 10.);
    }

    #[test]
    fn scalar_minus_multivector_negates_other_blades() {
        let b = Mv::new(1., 2., 3., 4.);
        assert_eq!(Mv::new(9., -2., -3., -4.), 10. - b);
        assert_eq!(Mv::scalar(10.) - b, 10. - b);
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let b = Multivector::new(1f32, 2., 3., 4.);
        assert_eq!(Multivector::new(2., 4., 6., 8.), 2. * b);
        assert_eq!(2. * b, b * 2.);
    }

    #[test]
    fn operators_do_not_alias_operands() {
        let a = Mv::new(1., 2., 3., 4.);
        let b = Mv::new(5., 6., 7., 8.);
        let _ = a * b + (a ^ b) - (a & b);
        assert_eq!(Mv::new(1., 2., 3., 4.), a);
        assert_eq!(8., b[Blade::E01]);
    }
}
