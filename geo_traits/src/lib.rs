//! Operator vocabulary shared by the algebra types.
//!
//! Each trait names a single algebraic operator. Binary operators are generic
//! over the right-hand side so an algebra can mix operand types, and every
//! operator declares its own `Output`.

/// The geometric product.
pub trait Geo<Rhs> {
    type Output;
    fn geo(self, rhs: Rhs) -> Self::Output;
}

/// The outer product, grade-raising part of the geometric product.
pub trait Wedge<Rhs> {
    type Output;
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// The inner product, grade-lowering part of the geometric product.
pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// The regressive product, `dual(dual(lhs) ^ dual(rhs))`.
pub trait Antiwedge<Rhs> {
    type Output;
    fn antiwedge(self, rhs: Rhs) -> Self::Output;
}

/// Poincare duality.
pub trait Dual {
    type Output;
    fn dual(self) -> Self::Output;
}

pub trait Reverse {
    type Output;
    fn rev(self) -> Self::Output;
}

/// Main involution: negates odd grades.
pub trait GradeInvolution {
    type Output;
    fn grade_involution(self) -> Self::Output;
}

/// Clifford conjugation: reverse composed with the main involution.
pub trait CliffordConjugate {
    type Output;
    fn conjugate(self) -> Self::Output;
}

pub trait Norm2 {
    type Output;
    fn norm2(self) -> Self::Output;
}

pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

pub trait Unitize {
    type Output;
    fn unit(self) -> Self::Output;
}

pub trait FloatType {
    type Float: num_traits::Float;
}

pub trait ToF32 {
    type Output;
    fn to_f32(self) -> Self::Output;
}

pub trait ToF64 {
    type Output;
    fn to_f64(self) -> Self::Output;
}
