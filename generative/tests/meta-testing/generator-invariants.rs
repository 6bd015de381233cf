//! Generator invariant properties
//!
//! These properties check that primitive arbitraries only ever produce values
//! inside the constraints they advertise, and that their shrinks do too.

use crate::{arbitrary_bounds, arbitrary_seed};
use generative::*;

/// Property: bounded integers stay within their bounds
pub fn test_bounded_integer_is_bounded() {
    run_tests(1000, |_, trial: &mut Trial| -> Result<()> {
        let bound1 = trial.named_var("bound1").any_integer();
        let bound2 = trial.named_var("bound2").any_integer();
        let lower_bound = bound1.min(bound2);
        let upper_bound = bound1.max(bound2);
        let the_number = trial
            .named_var("theNumber")
            .any_bounded_integer(lower_bound, upper_bound)?;
        assert!(
            the_number >= lower_bound && the_number <= upper_bound,
            "Number should be between bounds"
        );
        Ok(())
    });
}

/// Property: every shrink of a bounded integer stays within the bounds
pub fn test_shrunken_integer_is_bounded() {
    let bounds = arbitrary_bounds().named("bounds");
    run_tests(1000, move |_, trial: &mut Trial| -> Result<()> {
        let (lower_bound, upper_bound) = bounds.draw(trial);
        let arb = BoundedInt::new(lower_bound, upper_bound)?;
        let the_number = arb.get(trial.rng());
        for shrink in arb.shrink(&the_number) {
            assert!(
                shrink >= lower_bound && shrink <= upper_bound,
                "Shrink should be between bounds: {shrink}"
            );
        }
        Ok(())
    });
}

/// Property: byte arrays respect their length range
pub fn test_byte_array_lengths() {
    let seeds = arbitrary_seed().named("seed");
    let prop = Property::new(move |_, trial: &mut Trial| {
        let mut seed = seeds.draw(trial);
        let max_len = trial.named_var("max_len").any_bounded_integer(0, 64).unwrap() as usize;
        let arb = ByteArray::up_to(max_len);
        arb.stream(&mut seed).take(50).all(|bytes| {
            bytes.len() <= max_len && arb.shrink(&bytes).iter().all(|s| s.len() <= bytes.len())
        })
    });

    match prop.run(&Config::default().with_tests(50)) {
        Ok(TestResult::Pass { .. }) => println!("✓ Byte array length property passed"),
        result => panic!("Byte array length property failed: {result:?}"),
    }
}

/// Property: generated values and all their shrinks are accepted by their arbitrary
pub fn test_generated_values_are_accepted() {
    let bounds = arbitrary_bounds().named("bounds");
    run_tests(500, move |_, trial: &mut Trial| -> Result<()> {
        let (lower_bound, upper_bound) = bounds.draw(trial);
        let integers = BoundedInt::new(lower_bound, upper_bound)?;
        let the_number = integers.get(trial.rng());
        assert!(integers.accepts(&the_number));
        assert!(integers.shrink(&the_number).iter().all(|s| integers.accepts(s)));

        let max_len = trial.named_var("max_len").any_bounded_integer(0, 32)? as usize;
        let bytes = ByteArray::new(max_len / 2, max_len)?;
        let the_bytes = bytes.get(trial.rng());
        assert!(bytes.accepts(&the_bytes));
        assert!(bytes.shrink(&the_bytes).iter().all(|s| bytes.accepts(s)));
        assert!(!bytes.accepts(&vec![0; max_len + 1]));
        Ok(())
    });
}
