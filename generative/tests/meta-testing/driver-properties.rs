//! Driver properties
//!
//! These properties check how runs pass, fail and report.

use generative::*;
use std::cell::RefCell;

/// Property: a property that always holds passes silently
pub fn test_should_pass() {
    run_tests(20, |_, trial: &mut Trial| -> Result<()> {
        let the_int = trial.any_positive_integer_less_than(50)?;
        let should_be_even = the_int * 2;
        assert!(should_be_even % 2 == 0);
        Ok(())
    });
}

/// Property: a property that never holds is reported as failing
pub fn test_always_fails() {
    let prop = Property::new(|_, trial: &mut Trial| -> Result<()> {
        let the_int = trial.any_positive_integer_less_than(50)?;
        let should_be_even = the_int * 2;
        assert!(should_be_even % 2 == 1);
        Ok(())
    });

    match prop.run(&Config::default().with_tests(10)) {
        Ok(TestResult::Fail {
            tests_run,
            counterexample,
            ..
        }) => {
            assert_eq!(tests_run, 1);
            // Values in [1, 49] shrink to whichever bound is nearer.
            assert!(
                counterexample[0].value == "1" || counterexample[0].value == "49",
                "not shrunk to a bound: {}",
                counterexample[0].value
            );
        }
        result => panic!("Should have failed, got: {result:?}"),
    }
}

/// Property: a property that fails for some inputs names its variables
pub fn test_fails_for_some_inputs() {
    let prop = Property::new(|_, trial: &mut Trial| {
        let data = trial.named_var("The Data").any_byte_array_up_to_length(16);
        data.len() < 8
    })
    .with_name("fails_for_some_inputs");

    let result = prop.run(&Config::default().with_tests(20).with_seed(2024));
    match &result {
        Ok(failure @ TestResult::Fail { shrink_steps, .. }) => {
            assert!(!shrink_steps.is_empty());
            for step in shrink_steps {
                assert_eq!(step.variable_name.as_deref(), Some("The Data"));
            }
            let report = failure.to_string();
            assert!(report.contains("fails_for_some_inputs failed"));
            assert!(report.contains("The Data = [0, 0, 0, 0, 0, 0, 0, 0]"));
        }
        other => panic!("Should have failed, got: {other:?}"),
    }
}

/// Property: when nothing can shrink, the original failing value is reported
pub fn test_unshrinkable_failure_reports_original() {
    let generated = RefCell::new(Vec::new());
    let prop = Property::new(|_, trial: &mut Trial| {
        let gen = BoundedInt::new(0, 1000)
            .expect("valid bounds")
            .map(|n| n * 2)
            .boxed()
            .named("even");
        let value = gen.draw(trial);
        generated.borrow_mut().push(value);
        value < 100
    });

    match prop.run(&Config::default().with_tests(100).with_seed(99)) {
        Ok(TestResult::Fail {
            counterexample,
            shrinks_performed,
            tests_run,
            ..
        }) => {
            let generated = generated.borrow();
            assert_eq!(shrinks_performed, 0);
            assert_eq!(generated.len(), tests_run);
            assert_eq!(counterexample[0].value, generated[tests_run - 1].to_string());
        }
        other => panic!("Should have failed, got: {other:?}"),
    }
}
