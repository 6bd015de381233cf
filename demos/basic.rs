//! Basic example demonstrating generative property-based testing.

use generative::*;

fn main() -> Result<()> {
    println!("Generative Property-Based Testing Examples");
    println!();

    // Example 1: Simple integer property
    println!("Testing integer property: doubling gives an even number");
    let doubling = Property::new(|_, trial: &mut Trial| -> Result<()> {
        let n = trial.any_positive_integer_less_than(50)?;
        assert_eq!((n * 2) % 2, 0);
        Ok(())
    });
    match doubling.run(&Config::default())? {
        TestResult::Pass { .. } => println!("Doubling property passed"),
        result => println!("Doubling property failed:\n{result}"),
    }
    println!();

    // Example 2: Property that should fail (to demonstrate shrinking)
    println!("Testing property that should fail: all integers are positive");
    let positive = Property::new(|_, trial: &mut Trial| -> Result<()> {
        let x = trial.named_var("x").any_bounded_integer(-10, 10)?;
        assert!(x > 0, "{x} is not positive");
        Ok(())
    });
    match positive.run(&Config::default().with_tests(20))? {
        TestResult::Pass { .. } => println!("Positive property passed (unexpected)"),
        TestResult::Fail {
            counterexample,
            tests_run,
            shrinks_performed,
            ..
        } => {
            println!("Positive property failed as expected:");
            for input in counterexample {
                println!("  Counterexample: {input}");
            }
            println!("  Tests run: {tests_run}");
            println!("  Shrinks performed: {shrinks_performed}");
        }
    }
    println!();

    // Example 3: Combining arbitraries with flat_map
    println!("Testing dependent generator: a byte array of a drawn size");
    let sized = BoundedInt::new(0, 10)?.flat_map_reversible(
        |size| ByteArray::of_length(size as usize),
        |bytes: &Vec<u8>| bytes.len() as i32,
    );
    let sized = Generator::new(sized).named("bytes");
    let bounded = Property::new(move |_, trial: &mut Trial| sized.draw(trial).len() <= 10);
    match bounded.run(&Config::default())? {
        TestResult::Pass { .. } => println!("Sized byte array property passed"),
        result => println!("Sized byte array property failed:\n{result}"),
    }

    Ok(())
}
