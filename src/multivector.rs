use crate::{Blade, Error, Result};
use num_traits::Float;

/// A multivector of R(1,0,1): one coefficient per [`Blade`], in the order
/// `1, e0, e1, e01`.
///
/// Values are immutable once built. The `with_*` builders return a new
/// multivector rather than writing through an index.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Multivector<T> {
    coefficients: [T; Blade::COUNT],
}

impl<T> Multivector<T> {
    #[inline]
    pub const fn new(s: T, e0: T, e1: T, e01: T) -> Self {
        Multivector {
            coefficients: [s, e0, e1, e01],
        }
    }

    #[inline]
    pub const fn from_coefficients(coefficients: [T; Blade::COUNT]) -> Self {
        Multivector { coefficients }
    }
}

impl<T: Copy> Multivector<T> {
    #[inline]
    pub fn coefficients(&self) -> [T; Blade::COUNT] {
        self.coefficients
    }

    /// The coefficient at a raw blade index.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.coefficients
            .get(index)
            .copied()
            .ok_or(Error::InvalidIndex(index))
    }

    #[inline]
    pub fn with_blade(self, blade: Blade, value: T) -> Self {
        let mut coefficients = self.coefficients;
        coefficients[blade.index()] = value;
        Multivector { coefficients }
    }

    #[inline]
    pub fn with_coefficient(self, index: usize, value: T) -> Result<Self> {
        let blade = Blade::try_from(index)?;
        Ok(self.with_blade(blade, value))
    }

    #[inline]
    pub fn scalar_part(&self) -> T {
        self.coefficients[0]
    }

    #[inline]
    pub(crate) fn map(self, f: impl Fn(T) -> T) -> Self {
        Multivector {
            coefficients: self.coefficients.map(f),
        }
    }

    #[inline]
    pub(crate) fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let [a0, a1, a2, a3] = self.coefficients;
        let [b0, b1, b2, b3] = rhs.coefficients;
        Multivector::new(f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3))
    }
}

impl<T: Float> Multivector<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::from_coefficients([T::zero(); Blade::COUNT])
    }

    /// A multivector with `value` at `blade` and zero elsewhere.
    #[inline]
    pub fn blade(value: T, blade: Blade) -> Self {
        Self::zero().with_blade(blade, value)
    }

    #[inline]
    pub fn from_blade(value: T, index: usize) -> Result<Self> {
        Self::zero().with_coefficient(index, value)
    }

    #[inline]
    pub fn scalar(value: T) -> Self {
        Self::blade(value, Blade::Scalar)
    }

    #[inline]
    pub fn e0(value: T) -> Self {
        Self::blade(value, Blade::E0)
    }

    #[inline]
    pub fn e1(value: T) -> Self {
        Self::blade(value, Blade::E1)
    }

    #[inline]
    pub fn e01(value: T) -> Self {
        Self::blade(value, Blade::E01)
    }
}

macro_rules! impl_unit_blades {
    ($($float:ty),*) => {
        $(
            impl Multivector<$float> {
                pub const ONE: Self = Self::new(1., 0., 0., 0.);
                pub const E0: Self = Self::new(0., 1., 0., 0.);
                pub const E1: Self = Self::new(0., 0., 1., 0.);
                pub const E01: Self = Self::new(0., 0., 0., 1.);
            }
        )*
    };
}

impl_unit_blades!(f32, f64);

impl<T> std::ops::Index<Blade> for Multivector<T> {
    type Output = T;
    #[inline]
    fn index(&self, blade: Blade) -> &T {
        &self.coefficients[blade.index()]
    }
}

impl<T> std::ops::Index<usize> for Multivector<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.coefficients[index]
    }
}

impl<T: Float> num_traits::Zero for Multivector<T> {
    fn zero() -> Self {
        Multivector::zero()
    }

    fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }
}

impl<T: Float> num_traits::One for Multivector<T> {
    fn one() -> Self {
        Multivector::scalar(T::one())
    }
}

impl<T: Float> std::iter::Sum for Multivector<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Multivector::zero(), |acc, mv| acc + mv)
    }
}

impl<T: Float> geo_traits::FloatType for Multivector<T> {
    type Float = T;
}

impl geo_traits::ToF32 for Multivector<f64> {
    type Output = Multivector<f32>;
    #[inline]
    fn to_f32(self) -> Self::Output {
        Multivector::from_coefficients(self.coefficients.map(|c| c as f32))
    }
}

impl geo_traits::ToF64 for Multivector<f32> {
    type Output = Multivector<f64>;
    #[inline]
    fn to_f64(self) -> Self::Output {
        Multivector::from_coefficients(self.coefficients.map(|c| c as f64))
    }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Multivector<T> {}

unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Multivector<T> {}

#[cfg(feature = "rand")]
impl<T> rand::distributions::Distribution<Multivector<T>> for rand::distributions::Standard
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Multivector<T> {
        let one = T::one();
        Multivector::new(
            rng.gen_range(-one..=one),
            rng.gen_range(-one..=one),
            rng.gen_range(-one..=one),
            rng.gen_range(-one..=one),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Multivector::<f64>::zero(), Multivector::default());
        assert_eq!([0.; 4], Multivector::<f32>::default().coefficients());
    }

    #[test]
    fn from_blade_sets_single_coefficient() {
        let mv = Multivector::from_blade(2.5f64, 2).unwrap();
        assert_eq!([0., 0., 2.5, 0.], mv.coefficients());
        assert_eq!(Multivector::e1(2.5), mv);
    }

    #[test]
    fn from_blade_out_of_range() {
        assert_eq!(
            Err(Error::InvalidIndex(4)),
            Multivector::<f64>::from_blade(1., 4)
        );
    }

    #[test]
    fn unit_constants_match_constructors() {
        assert_eq!(Multivector::<f32>::E0, Multivector::from_blade(1., 1).unwrap());
        assert_eq!(Multivector::<f64>::E1, Multivector::from_blade(1., 2).unwrap());
        assert_eq!(Multivector::<f64>::E01, Multivector::from_blade(1., 3).unwrap());
        assert_eq!(Multivector::<f32>::ONE, Multivector::scalar(1.));
    }

    #[test]
    fn with_coefficient_returns_new_value() {
        let a = Multivector::new(1f64, 2., 3., 4.);
        let b = a.with_coefficient(3, -4.).unwrap();
        assert_eq!(4., a[3]);
        assert_eq!(-4., b[Blade::E01]);
        assert_eq!(Err(Error::InvalidIndex(7)), a.with_coefficient(7, 0.));
    }

    #[test]
    fn get_checks_range() {
        let a = Multivector::new(1f64, 2., 3., 4.);
        assert_eq!(Ok(3.), a.get(2));
        assert_eq!(Err(Error::InvalidIndex(4)), a.get(4));
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let a = Multivector::<f64>::zero();
        let _ = a[4];
    }

    #[test]
    fn sum_of_blades() {
        let total: Multivector<f64> = Blade::all()
            .map(|b| Multivector::blade(b.index() as f64, b))
            .sum();
        assert_eq!(Multivector::new(0., 1., 2., 3.), total);
    }

    #[test]
    fn cast_coefficient_buffer() {
        let mvs = [Multivector::new(1f32, 2., 3., 4.), Multivector::<f32>::E01];
        let flat: &[f32] = bytemuck::cast_slice(&mvs);
        assert_eq!(&[1., 2., 3., 4., 0., 0., 0., 1.], flat);
    }

    #[test]
    fn precision_round_trip() {
        use geo_traits::{ToF32, ToF64};
        let a = Multivector::new(0.5f32, -1., 2., 0.25);
        assert_eq!(a, a.to_f64().to_f32());
    }
}
