use crate::{Error, Multivector, Result};
use geo_traits::{CliffordConjugate, Dual, Geo, Norm, Norm2, Unitize};
use num_traits::Float;

/// Scalar part of `a * conjugate(a)`. Mathematically non-negative, but may
/// come out slightly below zero after cancellation.
impl<T: Float> Norm2 for Multivector<T> {
    type Output = T;
    #[inline]
    fn norm2(self) -> T {
        self.geo(self.conjugate()).scalar_part()
    }
}

impl<T: Float> Norm for Multivector<T> {
    type Output = T;
    #[inline]
    fn norm(self) -> T {
        self.norm2().abs().sqrt()
    }
}

/// Divides by the norm. A zero norm produces non-finite coefficients, the same
/// as dividing a float by zero; see [`Multivector::try_normalized`].
impl<T: Float> Unitize for Multivector<T> {
    type Output = Self;
    #[inline]
    fn unit(self) -> Self {
        let inv = T::one() / self.norm();
        self.map(|a| a * inv)
    }
}

impl<T: Float> Multivector<T> {
    /// Norm of the dual, for values stored in dual form.
    #[inline]
    pub fn inorm(self) -> T {
        self.dual().norm()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        self.unit()
    }

    pub fn try_normalized(self) -> Result<Self> {
        let norm = self.norm();
        if norm == T::zero() || !norm.is_finite() {
            tracing::debug!(norm = ?norm.to_f64(), "refusing to normalize multivector");
            return Err(Error::ZeroNorm);
        }
        Ok(self.unit())
    }
}
