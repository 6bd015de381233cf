//! The per-trial context handed to property bodies.

use crate::{
    arbitrary::Arbitrary,
    data::Seed,
    error::*,
    gen::{BoundedInt, ByteArray, ListOf},
    generator::Generator,
};
use log::trace;
use std::any::Any;
use std::fmt::Debug;
use std::rc::Rc;

/// Type-erased view of a generator, enough to shrink and describe its values.
trait ErasedSource {
    fn shrink_any(&self, value: &dyn Any) -> Vec<Rc<dyn Any>>;
    fn describe(&self, value: &dyn Any) -> String;
}

impl<T> ErasedSource for Generator<T>
where
    T: Clone + Debug + 'static,
{
    fn shrink_any(&self, value: &dyn Any) -> Vec<Rc<dyn Any>> {
        match value.downcast_ref::<T>() {
            Some(value) => self
                .shrink(value)
                .into_iter()
                .map(|candidate| Rc::new(candidate) as Rc<dyn Any>)
                .collect(),
            None => Vec::new(),
        }
    }

    fn describe(&self, value: &dyn Any) -> String {
        value
            .downcast_ref::<T>()
            .map(|value| format!("{value:?}"))
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// One value drawn during a trial, with the generator that produced it.
#[derive(Clone)]
pub(crate) struct Draw {
    label: Option<String>,
    value: Rc<dyn Any>,
    source: Rc<dyn ErasedSource>,
}

impl Draw {
    pub(crate) fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn value(&self) -> Rc<dyn Any> {
        Rc::clone(&self.value)
    }

    pub(crate) fn shrink(&self) -> Vec<Rc<dyn Any>> {
        self.source.shrink_any(&*self.value)
    }

    pub(crate) fn describe(&self) -> String {
        self.source.describe(&*self.value)
    }

    pub(crate) fn to_counterexample(&self) -> Counterexample {
        Counterexample {
            variable_name: self.label.clone(),
            value: self.describe(),
        }
    }
}

/// State of a single trial: its random source, pending variable label and
/// the record of every value drawn so far.
///
/// During shrink search the driver builds trials that replay previously
/// drawn values, position by position, instead of generating fresh ones.
pub struct Trial {
    index: usize,
    seed: Seed,
    pending_label: Option<String>,
    draws: Vec<Draw>,
    replay: Vec<Rc<dyn Any>>,
}

impl Trial {
    pub(crate) fn new(index: usize, seed: Seed) -> Self {
        Trial::replaying(index, seed, Vec::new())
    }

    pub(crate) fn replaying(index: usize, seed: Seed, replay: Vec<Rc<dyn Any>>) -> Self {
        Trial {
            index,
            seed,
            pending_label: None,
            draws: Vec::new(),
            replay,
        }
    }

    /// Zero-based index of this trial within the run.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The trial's random source, for drawing values outside of a generator.
    /// Values drawn this way are neither replayed nor shrunk.
    pub fn rng(&mut self) -> &mut Seed {
        &mut self.seed
    }

    /// Label the next drawn value in failure reports.
    pub fn named_var(&mut self, label: impl Into<String>) -> &mut Self {
        self.pending_label = Some(label.into());
        self
    }

    /// Draw the next value from `generator`.
    ///
    /// When replaying, the recorded value at this position is returned if it
    /// has the right type and `generator` accepts it. Otherwise replay ends
    /// and this and every later draw is generated fresh.
    pub fn draw<T>(&mut self, generator: &Generator<T>) -> T
    where
        T: Clone + Debug + 'static,
    {
        let position = self.draws.len();
        let label = self
            .pending_label
            .take()
            .or_else(|| generator.label().map(str::to_string));

        let replayed = self
            .replay
            .get(position)
            .and_then(|value| value.downcast_ref::<T>())
            .filter(|value| generator.accepts(value))
            .cloned();
        let value = match replayed {
            Some(value) => value,
            None => {
                if position < self.replay.len() {
                    // The draws have diverged from the recording.
                    trace!("replay stopped at draw {position}");
                    self.replay.clear();
                }
                generator.get(&mut self.seed)
            }
        };

        self.draws.push(Draw {
            label,
            value: Rc::new(value.clone()),
            source: Rc::new(generator.clone()),
        });
        value
    }

    /// Draw the next value from any arbitrary.
    pub fn draw_from<A>(&mut self, arbitrary: A) -> A::Value
    where
        A: Arbitrary + 'static,
        A::Value: Clone + Debug + 'static,
    {
        self.draw(&Generator::new(arbitrary))
    }

    /// Any `i32`.
    pub fn any_integer(&mut self) -> i32 {
        self.draw_from(BoundedInt::any())
    }

    /// An integer in `[low, high]`.
    pub fn any_bounded_integer(&mut self, low: i32, high: i32) -> Result<i32> {
        Ok(self.draw_from(BoundedInt::new(low, high)?))
    }

    /// An integer in `[1, bound - 1]`.
    pub fn any_positive_integer_less_than(&mut self, bound: i32) -> Result<i32> {
        Ok(self.draw_from(BoundedInt::positive_less_than(bound)?))
    }

    /// A byte vector of at most `max_len` bytes.
    pub fn any_byte_array_up_to_length(&mut self, max_len: usize) -> Vec<u8> {
        self.draw_from(ByteArray::up_to(max_len))
    }

    /// Exactly `length` values from `element`, drawn as a single value.
    pub fn list_of_length<A>(&mut self, element: A, length: usize) -> Vec<A::Value>
    where
        A: Arbitrary + 'static,
        A::Value: Clone + Debug + 'static,
    {
        self.draw_from(ListOf::new(element, length))
    }

    pub(crate) fn into_draws(self) -> Vec<Draw> {
        self.draws
    }
}
