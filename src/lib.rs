//! Closed-form geometric algebra for R(1,0,1), the projective algebra of the
//! line: basis `{1, e0, e1, e01}` with `e0^2 = 0` and `e1^2 = 1`.
//!
//! [`Feature set`]
//!
//! Types:
//! - [x] Multivector
//! - [x] Blade
//!
//! Main products:
//! - [x] Mul
//! - [x] Geometric
//!
//! Inner products:
//! - [x] Dot
//!
//! Outer products:
//! - [x] Wedge
//! - [x] Antiwedge
//!
//! Sum products:
//! - [x] Addition
//! - [x] Subtraction
//! - [x] Scalar mixing
//!
//! Unary operations:
//! - [x] Neg
//! - [x] Dual
//! - [x] Reverse
//! - [x] Grade involution
//! - [x] Clifford conjugate
//!
//! Norm-based operations:
//! - [x] Norm
//! - [x] Ideal norm
//! - [x] Normalize
//!
//! [`Feature set`]: https://ga-developers.github.io/ga-benchmark-runs/2020.02.05/table_of_features.html
//!
//! ```
//! use clifford_r101::*;
//!
//! let e0 = Multivector::<f32>::E0;
//! let e01 = Multivector::<f32>::E01;
//!
//! assert_eq!("0", (e0 * e0).to_string());
//! assert_eq!("e01", e01.to_string());
//! assert_eq!("0", (e01 * e01).to_string());
//! ```

mod binary;
mod blade;
mod display;
mod error;
mod multivector;
mod norm;
mod unary;

pub use blade::Blade;
pub use error::{Error, Result};
pub use geo_traits::*;
pub use multivector::Multivector;
