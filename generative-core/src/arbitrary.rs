//! The `Arbitrary` capability and its combinators.
//!
//! An arbitrary knows how to produce a value from a random source and how to
//! propose simpler variants of a value it produced. Combinators wrap a parent
//! arbitrary; whether shrinking survives the transformation is decided by
//! whether a reverse function is supplied, and that choice is visible in the
//! returned type:
//!
//! | combinator            | type                  | shrinks |
//! |-----------------------|-----------------------|---------|
//! | `map`                 | [`Map`]               | never   |
//! | `map_reversible`      | [`MapReversible`]     | via reverse |
//! | `flat_map`            | [`FlatMap`]           | never   |
//! | `flat_map_reversible` | [`FlatMapReversible`] | via reverse |

use crate::{data::Seed, generator::Generator};
use rand::RngCore;
use std::rc::Rc;

/// A stateless source of random values of type `Self::Value`.
///
/// Implementations must always return a valid value from [`get`](Self::get).
/// Every candidate returned by [`shrink`](Self::shrink) must itself be a valid
/// value and strictly simpler than its input, so that repeated shrinking
/// terminates.
pub trait Arbitrary {
    /// The type of value produced.
    type Value;

    /// Draw a value from the random source.
    fn get(&self, rng: &mut dyn RngCore) -> Self::Value;

    /// Simpler candidates for `value`, simplest first.
    fn shrink(&self, _value: &Self::Value) -> Vec<Self::Value> {
        Vec::new()
    }

    /// Whether `value` is one this arbitrary could have produced.
    ///
    /// Replay during shrinking only reuses a recorded value when the
    /// arbitrary now drawing accepts it. Arbitraries that cannot tell keep
    /// the default and accept everything of the right type.
    fn accepts(&self, _value: &Self::Value) -> bool {
        true
    }

    /// An endless, lazily evaluated sequence of values drawn from `rng`.
    fn stream<'a>(&'a self, rng: &'a mut dyn RngCore) -> Stream<'a, Self>
    where
        Self: Sized,
    {
        Stream {
            arbitrary: self,
            rng,
        }
    }

    /// Transform generated values. The result cannot shrink.
    fn map<R, F>(self, forward: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> R,
    {
        Map {
            parent: self,
            forward,
        }
    }

    /// Transform generated values, keeping shrinking alive through `reverse`.
    ///
    /// `reverse` need not be a true inverse of `forward`, but the parent's
    /// shrinks of `reverse(r)`, once mapped forward, must be valid and simpler
    /// than `r`. This is not checked.
    fn map_reversible<R, F, G>(self, forward: F, reverse: G) -> MapReversible<Self, F, G>
    where
        Self: Sized,
        F: Fn(Self::Value) -> R,
        G: Fn(&R) -> Self::Value,
    {
        MapReversible {
            parent: self,
            forward,
            reverse,
        }
    }

    /// Dependent generation: use a drawn value to pick the next arbitrary.
    /// The result cannot shrink.
    fn flat_map<B, F>(self, forward: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        B: Arbitrary,
        F: Fn(Self::Value) -> B,
    {
        FlatMap {
            parent: self,
            forward,
        }
    }

    /// Dependent generation with shrinking through `reverse`.
    ///
    /// `reverse` maps a result back to the parent value that would regenerate
    /// an equivalent structure. Shrinks are the parent's shrinks of that value,
    /// each regenerated through `forward` from a fixed seed.
    fn flat_map_reversible<B, F, G>(self, forward: F, reverse: G) -> FlatMapReversible<Self, F, G>
    where
        Self: Sized,
        B: Arbitrary,
        F: Fn(Self::Value) -> B,
        G: Fn(&B::Value) -> Self::Value,
    {
        FlatMapReversible {
            parent: self,
            forward,
            reverse,
        }
    }

    /// Erase the concrete type behind a shareable [`Generator`].
    fn boxed(self) -> Generator<Self::Value>
    where
        Self: Sized + 'static,
    {
        Generator::new(self)
    }
}

/// Infinite iterator returned by [`Arbitrary::stream`].
pub struct Stream<'a, A: ?Sized> {
    arbitrary: &'a A,
    rng: &'a mut dyn RngCore,
}

impl<'a, A> Iterator for Stream<'a, A>
where
    A: Arbitrary + ?Sized,
{
    type Item = A::Value;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.arbitrary.get(&mut *self.rng))
    }
}

/// Result of [`Arbitrary::map`].
#[derive(Clone)]
pub struct Map<A, F> {
    parent: A,
    forward: F,
}

impl<A, F, R> Arbitrary for Map<A, F>
where
    A: Arbitrary,
    F: Fn(A::Value) -> R,
{
    type Value = R;

    fn get(&self, rng: &mut dyn RngCore) -> R {
        (self.forward)(self.parent.get(rng))
    }
}

/// Result of [`Arbitrary::map_reversible`].
#[derive(Clone)]
pub struct MapReversible<A, F, G> {
    parent: A,
    forward: F,
    reverse: G,
}

impl<A, F, G, R> Arbitrary for MapReversible<A, F, G>
where
    A: Arbitrary,
    F: Fn(A::Value) -> R,
    G: Fn(&R) -> A::Value,
{
    type Value = R;

    fn get(&self, rng: &mut dyn RngCore) -> R {
        (self.forward)(self.parent.get(rng))
    }

    fn shrink(&self, value: &R) -> Vec<R> {
        self.parent
            .shrink(&(self.reverse)(value))
            .into_iter()
            .map(&self.forward)
            .collect()
    }

    fn accepts(&self, value: &R) -> bool {
        self.parent.accepts(&(self.reverse)(value))
    }
}

/// Result of [`Arbitrary::flat_map`].
#[derive(Clone)]
pub struct FlatMap<A, F> {
    parent: A,
    forward: F,
}

impl<A, F, B> Arbitrary for FlatMap<A, F>
where
    A: Arbitrary,
    B: Arbitrary,
    F: Fn(A::Value) -> B,
{
    type Value = B::Value;

    fn get(&self, rng: &mut dyn RngCore) -> B::Value {
        let dependent = (self.forward)(self.parent.get(rng));
        dependent.get(rng)
    }
}

/// Result of [`Arbitrary::flat_map_reversible`].
#[derive(Clone)]
pub struct FlatMapReversible<A, F, G> {
    parent: A,
    forward: F,
    reverse: G,
}

impl<A, F, G, B> Arbitrary for FlatMapReversible<A, F, G>
where
    A: Arbitrary,
    B: Arbitrary,
    F: Fn(A::Value) -> B,
    G: Fn(&B::Value) -> A::Value,
{
    type Value = B::Value;

    fn get(&self, rng: &mut dyn RngCore) -> B::Value {
        let dependent = (self.forward)(self.parent.get(rng));
        dependent.get(rng)
    }

    fn shrink(&self, value: &B::Value) -> Vec<B::Value> {
        self.parent
            .shrink(&(self.reverse)(value))
            .into_iter()
            .enumerate()
            .map(|(index, smaller)| {
                // Shrinking takes no random source; regenerate reproducibly.
                let mut seed = Seed::from_u64(index as u64);
                (self.forward)(smaller).get(&mut seed)
            })
            .collect()
    }

    fn accepts(&self, value: &B::Value) -> bool {
        let source = (self.reverse)(value);
        self.parent.accepts(&source) && (self.forward)(source).accepts(value)
    }
}

impl<A> Arbitrary for &A
where
    A: Arbitrary + ?Sized,
{
    type Value = A::Value;

    fn get(&self, rng: &mut dyn RngCore) -> A::Value {
        (**self).get(rng)
    }

    fn shrink(&self, value: &A::Value) -> Vec<A::Value> {
        (**self).shrink(value)
    }

    fn accepts(&self, value: &A::Value) -> bool {
        (**self).accepts(value)
    }
}

impl<A> Arbitrary for Box<A>
where
    A: Arbitrary + ?Sized,
{
    type Value = A::Value;

    fn get(&self, rng: &mut dyn RngCore) -> A::Value {
        (**self).get(rng)
    }

    fn shrink(&self, value: &A::Value) -> Vec<A::Value> {
        (**self).shrink(value)
    }

    fn accepts(&self, value: &A::Value) -> bool {
        (**self).accepts(value)
    }
}

impl<A> Arbitrary for Rc<A>
where
    A: Arbitrary + ?Sized,
{
    type Value = A::Value;

    fn get(&self, rng: &mut dyn RngCore) -> A::Value {
        (**self).get(rng)
    }

    fn shrink(&self, value: &A::Value) -> Vec<A::Value> {
        (**self).shrink(value)
    }

    fn accepts(&self, value: &A::Value) -> bool {
        (**self).accepts(value)
    }
}
