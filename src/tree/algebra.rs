//! The algebraic requirements that annotation types must satisfy in order to
//! be used with a `DualTree`.  These traits are implemented by the host
//! system that embeds the tree (e.g. transforms for the downward annotation
//! and bounding volumes for the upward annotation); nothing in this crate
//! implements them for concrete types.
//!
//! None of the laws documented here are checked at runtime.  An annotation
//! type that violates them will produce silently incorrect cached values:
//! no operation in this crate will ever panic or return an error because of
//! a bad annotation type.

/// A type with an associative combination operator.
///
/// Law: `a.combine(&b).combine(&c) == a.combine(&b.combine(&c))`.
pub trait Semigroup {
    fn combine(&self, other: &Self) -> Self;
}

/// A [`Semigroup`] with a two sided identity value.
///
/// Law: `T::empty().combine(&a) == a.combine(&T::empty()) == a`.
pub trait Monoid: Semigroup {
    fn empty() -> Self;
}

/// An action of a downward annotation type on an upward annotation type.
///
/// Laws (the action must be a monoid homomorphism):
/// - `d.act(&u1.combine(&u2)) == d.act(&u1).combine(&d.act(&u2))`
/// - `d1.combine(&d2).act(&u) == d1.act(&d2.act(&u))`
///
/// The second law fixes the composition direction once for the whole crate:
/// the outermost downward annotation (closest to the root) is applied last.
pub trait Action<U>: Semigroup {
    fn act(&self, u: &U) -> U;
}

/// Extracts one component of a structured upward annotation.  This powers
/// [`DualTree::get_u_component`](super::DualTree::get_u_component), which
/// lets a caller read a single field of the upward value while only
/// requiring an action on that field's type rather than on all of `U`.
pub trait Project<T> {
    fn project(&self) -> T;
}

/// Combines two optional annotation values, treating `None` as the absent
/// or identity value.  The left operand stays on the left.
pub fn combine_option<T>(a: Option<&T>, b: Option<&T>) -> Option<T>
where
    T: Semigroup + Clone,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(a.combine(b)),
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Applies an optional downward value to an upward value.  `None` is the
/// identity action and leaves the value unchanged.
pub fn act_option<D, U>(d: Option<&D>, u: &U) -> U
where
    D: Action<U>,
    U: Clone,
{
    match d {
        Some(d) => d.act(u),
        None => u.clone(),
    }
}
