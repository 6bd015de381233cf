//! The trial-and-shrink driver.

use crate::{
    data::*,
    error::*,
    trial::{Draw, Trial},
};
use log::{debug, info, trace};
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Once;

thread_local! {
    static PANICS_SILENCED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Run `f` with panic output suppressed on the current thread.
///
/// The first call wraps the installed panic hook once; other threads keep
/// reporting their panics through it.
fn with_silenced_panics<R>(f: impl FnOnce() -> R) -> R {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !PANICS_SILENCED.with(Cell::get) {
                previous(info);
            }
        }));
    });

    let was_silenced = PANICS_SILENCED.with(|silenced| silenced.replace(true));
    let result = f();
    PANICS_SILENCED.with(|silenced| silenced.set(was_silenced));
    result
}

/// What a property body may return.
///
/// Bodies signal failure by panicking (e.g. through `assert!`), by returning
/// `false`, or by returning an error. A returned
/// [`GenerativeError::InvalidConfiguration`] aborts the whole run.
pub trait Verdict {
    fn into_verdict(self) -> Result<()>;
}

impl Verdict for () {
    fn into_verdict(self) -> Result<()> {
        Ok(())
    }
}

impl Verdict for bool {
    fn into_verdict(self) -> Result<()> {
        if self {
            Ok(())
        } else {
            Err(GenerativeError::assertion("property returned false"))
        }
    }
}

impl Verdict for Result<()> {
    fn into_verdict(self) -> Result<()> {
        self
    }
}

impl Verdict for Result<bool> {
    fn into_verdict(self) -> Result<()> {
        self.and_then(|holds| holds.into_verdict())
    }
}

/// Outcome of running the body once.
enum TrialOutcome {
    Pass,
    Fail { message: String, draws: Vec<Draw> },
}

/// The smallest failure found by shrink search.
struct Minimized {
    message: String,
    draws: Vec<Draw>,
    shrinks: usize,
    steps: Vec<ShrinkStep>,
}

/// A property: a body run against many trials.
///
/// The body receives the trial index and the trial context it draws its
/// inputs from.
pub struct Property<F> {
    body: F,
    name: Option<String>,
}

impl<F, V> Property<F>
where
    F: Fn(usize, &mut Trial) -> V,
    V: Verdict,
{
    /// Create a new property from a body.
    pub fn new(body: F) -> Self {
        Property { body, name: None }
    }

    /// Name the property in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Run this property with the given configuration.
    ///
    /// Returns `Err` only for configuration errors. A failing property is an
    /// `Ok(TestResult::Fail)` carrying the shrunk counterexample.
    pub fn run(&self, config: &Config) -> Result<TestResult> {
        if config.test_limit == 0 {
            return Err(GenerativeError::invalid_configuration(
                "test limit must be a positive number of trials",
            ));
        }

        let run_seed = config.seed.unwrap_or_else(rand::random);
        let mut seed = Seed::from_u64(run_seed);

        for index in 0..config.test_limit {
            let trial_seed = seed.split();
            debug!("trial {index} starting");

            match self.execute(index, trial_seed, Vec::new())? {
                TrialOutcome::Pass => continue,
                TrialOutcome::Fail { message, draws } => {
                    info!("trial {index} failed: {message}; shrinking");
                    // Candidates that still fail would each print a panic message.
                    let minimized = with_silenced_panics(|| {
                        self.shrink_failure(index, trial_seed, message, draws, config)
                    });
                    info!(
                        "shrinking finished after {} shrinks",
                        minimized.shrinks
                    );

                    return Ok(TestResult::Fail {
                        counterexample: minimized
                            .draws
                            .iter()
                            .map(Draw::to_counterexample)
                            .collect(),
                        message: minimized.message,
                        tests_run: index + 1,
                        shrinks_performed: minimized.shrinks,
                        property_name: self.name.clone(),
                        seed: run_seed,
                        shrink_steps: minimized.steps,
                    });
                }
            }
        }

        Ok(TestResult::Pass {
            tests_run: config.test_limit,
            property_name: self.name.clone(),
        })
    }

    /// Run this property, turning a failure into an error.
    pub fn check(&self, config: &Config) -> Result<()> {
        self.run(config)?.into_result()
    }

    /// Run the body once, catching panics as failures.
    fn execute(&self, index: usize, seed: Seed, replay: Vec<Rc<dyn Any>>) -> Result<TrialOutcome> {
        let mut trial = Trial::replaying(index, seed, replay);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            (self.body)(index, &mut trial).into_verdict()
        }));

        let message = match outcome {
            Ok(Ok(())) => return Ok(TrialOutcome::Pass),
            Ok(Err(error @ GenerativeError::InvalidConfiguration { .. })) => return Err(error),
            Ok(Err(error)) => error.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        Ok(TrialOutcome::Fail {
            message,
            draws: trial.into_draws(),
        })
    }

    /// Greedy search for a smaller failing set of draws.
    ///
    /// Candidates for one draw are tried with every other draw replayed. The
    /// first candidate that still fails is adopted and the search restarts
    /// from the first draw, until a full pass adopts nothing.
    fn shrink_failure(
        &self,
        index: usize,
        seed: Seed,
        message: String,
        draws: Vec<Draw>,
        config: &Config,
    ) -> Minimized {
        let steps = draws
            .iter()
            .map(|draw| ShrinkStep {
                counterexample: draw.describe(),
                step: 0,
                variable_name: draw.label().map(str::to_string),
            })
            .collect();

        let mut best = Minimized {
            message,
            draws,
            shrinks: 0,
            steps,
        };

        'search: while best.shrinks < config.shrink_limit {
            for position in 0..best.draws.len() {
                for candidate in best.draws[position].shrink() {
                    let mut replay: Vec<Rc<dyn Any>> =
                        best.draws.iter().map(Draw::value).collect();
                    replay[position] = candidate;

                    match self.execute(index, seed, replay) {
                        Ok(TrialOutcome::Fail { message, draws }) => {
                            best.shrinks += 1;
                            if let Some(draw) = draws.get(position) {
                                debug!("shrink {}: {}", best.shrinks, draw.describe());
                                best.steps.push(ShrinkStep {
                                    counterexample: draw.describe(),
                                    step: best.shrinks,
                                    variable_name: draw.label().map(str::to_string),
                                });
                            }
                            best.message = message;
                            best.draws = draws;
                            continue 'search;
                        }
                        Ok(TrialOutcome::Pass) => trace!("candidate passed"),
                        Err(error) => trace!("candidate rejected: {error}"),
                    }
                }
            }
            break;
        }

        best
    }
}

/// Run `trials` trials of `body` and panic with the report if it fails.
///
/// A passing run prints nothing.
pub fn run_tests<F, V>(trials: usize, body: F)
where
    F: Fn(usize, &mut Trial) -> V,
    V: Verdict,
{
    let config = Config::default().with_tests(trials);
    match Property::new(body).run(&config) {
        Ok(TestResult::Pass { .. }) => {}
        Ok(result) => panic!("\n{result}"),
        Err(error) => panic!("{error}"),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "property panicked".to_string()
    }
}
