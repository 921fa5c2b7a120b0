use crate::Multivector;
use geo_traits::{CliffordConjugate, Dual, GradeInvolution, Reverse};
use num_traits::Float;

impl<T: Float> Reverse for Multivector<T> {
    type Output = Self;
    #[inline]
    fn rev(self) -> Self {
        let [a0, a1, a2, a3] = self.coefficients();
        Multivector::new(a0, a1, a2, -a3)
    }
}

/// Maps each blade to its complement by reversing coefficient order.
impl<T: Float> Dual for Multivector<T> {
    type Output = Self;
    #[inline]
    fn dual(self) -> Self {
        let [a0, a1, a2, a3] = self.coefficients();
        Multivector::new(a3, a2, a1, a0)
    }
}

impl<T: Float> CliffordConjugate for Multivector<T> {
    type Output = Self;
    #[inline]
    fn conjugate(self) -> Self {
        let [a0, a1, a2, a3] = self.coefficients();
        Multivector::new(a0, -a1, -a2, -a3)
    }
}

impl<T: Float> GradeInvolution for Multivector<T> {
    type Output = Self;
    #[inline]
    fn grade_involution(self) -> Self {
        let [a0, a1, a2, a3] = self.coefficients();
        Multivector::new(a0, -a1, -a2, a3)
    }
}

impl<T: Float> Multivector<T> {
    /// Main involution, an alias for [`GradeInvolution::grade_involution`].
    #[inline]
    pub fn involute(self) -> Self {
        self.grade_involution()
    }
}

impl<T: Float> std::ops::Neg for Multivector<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Float> std::ops::Not for Multivector<T> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.dual()
    }
}
