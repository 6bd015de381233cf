//! Trial-facing generators.

use crate::{arbitrary::Arbitrary, trial::Trial};
use rand::RngCore;
use std::fmt::Debug;
use std::rc::Rc;

/// A shareable, type-erased [`Arbitrary`] that property code draws from.
///
/// Every capability (`get`, `shrink`, `stream`, and the combinators)
/// forwards to the wrapped arbitrary. Only [`draw`](Self::draw) involves a
/// trial, and the trial is always passed in explicitly, so one generator can
/// serve any number of trials, including the replays of a shrink search.
pub struct Generator<T> {
    inner: Rc<dyn Arbitrary<Value = T>>,
    label: Option<String>,
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Generator {
            inner: Rc::clone(&self.inner),
            label: self.label.clone(),
        }
    }
}

impl<T: 'static> Generator<T> {
    /// Wrap an arbitrary.
    pub fn new<A>(arbitrary: A) -> Self
    where
        A: Arbitrary<Value = T> + 'static,
    {
        Generator {
            inner: Rc::new(arbitrary),
            label: None,
        }
    }

    /// The same generator, reporting its values under `label`.
    pub fn named(&self, label: impl Into<String>) -> Self {
        Generator {
            inner: Rc::clone(&self.inner),
            label: Some(label.into()),
        }
    }

    /// The label values are reported under, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Draw the next value of `trial`.
    pub fn draw(&self, trial: &mut Trial) -> T
    where
        T: Clone + Debug,
    {
        trial.draw(self)
    }

    /// See [`Arbitrary::map`].
    pub fn map<R, F>(self, forward: F) -> Generator<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
    {
        Generator {
            inner: Rc::new(Arbitrary::map(self.inner, forward)),
            label: self.label,
        }
    }

    /// See [`Arbitrary::map_reversible`].
    pub fn map_reversible<R, F, G>(self, forward: F, reverse: G) -> Generator<R>
    where
        R: 'static,
        F: Fn(T) -> R + 'static,
        G: Fn(&R) -> T + 'static,
    {
        Generator {
            inner: Rc::new(Arbitrary::map_reversible(self.inner, forward, reverse)),
            label: self.label,
        }
    }

    /// See [`Arbitrary::flat_map`].
    pub fn flat_map<B, F>(self, forward: F) -> Generator<B::Value>
    where
        B: Arbitrary,
        B::Value: 'static,
        F: Fn(T) -> B + 'static,
    {
        Generator {
            inner: Rc::new(Arbitrary::flat_map(self.inner, forward)),
            label: self.label,
        }
    }

    /// See [`Arbitrary::flat_map_reversible`].
    pub fn flat_map_reversible<B, F, G>(self, forward: F, reverse: G) -> Generator<B::Value>
    where
        B: Arbitrary,
        B::Value: 'static,
        F: Fn(T) -> B + 'static,
        G: Fn(&B::Value) -> T + 'static,
    {
        Generator {
            inner: Rc::new(Arbitrary::flat_map_reversible(self.inner, forward, reverse)),
            label: self.label,
        }
    }
}

impl<T> Arbitrary for Generator<T> {
    type Value = T;

    fn get(&self, rng: &mut dyn RngCore) -> T {
        self.inner.get(rng)
    }

    fn shrink(&self, value: &T) -> Vec<T> {
        self.inner.shrink(value)
    }

    fn accepts(&self, value: &T) -> bool {
        self.inner.accepts(value)
    }
}
