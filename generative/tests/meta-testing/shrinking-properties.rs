//! Shrinking correctness properties
//!
//! These properties ensure that shrinking terminates and that the driver
//! converges to minimal counterexamples.

use crate::arbitrary_seed;
use generative::*;

/// Property: integer shrinking reaches the nearest target in logarithmic steps
pub fn test_integer_shrinking_terminates() {
    run_tests(200, |_, trial: &mut Trial| {
        let start = trial.named_var("start").any_integer();
        let arb = BoundedInt::any();
        let target = arb.shrink_target(start);

        // The target is whichever of the bounds and zero lies closest.
        let distance = |v: i32, to: i32| (v as i64 - to as i64).abs();
        for candidate in [i32::MIN, 0, i32::MAX] {
            assert!(distance(start, target) <= distance(start, candidate));
        }

        // The first candidate jumps straight to the target.
        if let Some(&first) = arb.shrink(&start).first() {
            assert_eq!(first, target);
            assert!(arb.shrink(&first).is_empty());
        }

        // Halfway candidates halve the distance each step.
        let mut current = start;
        let mut steps = 0;
        loop {
            let shrinks = arb.shrink(&current);
            let Some(&next) = shrinks.get(1).or(shrinks.first()) else {
                break;
            };
            current = next;
            steps += 1;
        }
        assert_eq!(current, target);
        assert!(steps <= 33, "took {steps} steps from {start}");
    });
}

/// Property: byte array shrinking terminates within a bound linear in length
pub fn test_byte_array_shrinking_terminates() {
    let seeds = arbitrary_seed().named("seed");
    run_tests(50, move |_, trial: &mut Trial| {
        let mut seed = seeds.draw(trial);
        let arb = ByteArray::up_to(32);
        let start = arb.get(&mut seed);

        // Taking the last candidate is the slowest descent.
        let mut current = start.clone();
        let mut steps = 0;
        while let Some(next) = arb.shrink(&current).pop() {
            assert!(next.len() <= current.len());
            current = next;
            steps += 1;
        }
        assert!(current.is_empty());
        assert!(steps <= 10 * start.len(), "took {steps} steps from {start:?}");
    });
}

/// Property: arrays failing at length 8 shrink to exactly length 8
pub fn test_byte_array_shrinks_to_threshold() {
    for seed in 0..5 {
        let prop = Property::new(|_, trial: &mut Trial| {
            let data = trial.named_var("The Data").any_byte_array_up_to_length(16);
            assert!(data.len() < 8);
        });

        match prop.run(&Config::default().with_tests(100).with_seed(seed)) {
            Ok(TestResult::Fail { counterexample, .. }) => {
                assert_eq!(counterexample.len(), 1);
                assert_eq!(counterexample[0].variable_name.as_deref(), Some("The Data"));
                assert_eq!(counterexample[0].value, format!("{:?}", vec![0u8; 8]));
            }
            other => panic!("Expected a failure to shrink, got: {other:?}"),
        }
    }
}
