//! Basis blades of R(1,0,1).

use crate::{Error, Result};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// A basis element of the algebra, in coefficient order.
///
/// `e0` is the null (degenerate) basis vector, `e1` squares to one, and
/// `e01 = e0 ^ e1` is the pseudoscalar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, EnumIter, IntoStaticStr)]
pub enum Blade {
    #[strum(serialize = "1")]
    Scalar,
    #[strum(serialize = "e0")]
    E0,
    #[strum(serialize = "e1")]
    E1,
    #[strum(serialize = "e01")]
    E01,
}

impl Blade {
    pub const COUNT: usize = 4;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn grade(self) -> usize {
        match self {
            Blade::Scalar => 0,
            Blade::E0 | Blade::E1 => 1,
            Blade::E01 => 2,
        }
    }

    /// The basis name, `"1"` for the scalar blade.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Blade> {
        Blade::iter()
    }
}

impl TryFrom<usize> for Blade {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Blade::Scalar),
            1 => Ok(Blade::E0),
            2 => Ok(Blade::E1),
            3 => Ok(Blade::E01),
            _ => Err(Error::InvalidIndex(index)),
        }
    }
}

impl std::fmt::Display for Blade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_try_from() {
        for blade in Blade::all() {
            assert_eq!(Ok(blade), Blade::try_from(blade.index()));
        }
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(Err(Error::InvalidIndex(4)), Blade::try_from(4));
        assert_eq!(Err(Error::InvalidIndex(usize::MAX)), Blade::try_from(usize::MAX));
    }

    #[test]
    fn basis_names() {
        let names = Blade::all().map(Blade::name).collect::<Vec<_>>();
        assert_eq!(vec!["1", "e0", "e1", "e01"], names);
    }

    #[test]
    fn grades() {
        let grades = Blade::all().map(Blade::grade).collect::<Vec<_>>();
        assert_eq!(vec![0, 1, 1, 2], grades);
    }
}
