//! Example demonstrating shrinking through combinators.

use generative::*;

fn show(label: &str, result: TestResult) {
    match result {
        TestResult::Fail {
            counterexample,
            shrinks_performed,
            ..
        } => {
            let inputs: Vec<String> = counterexample.iter().map(|c| c.to_string()).collect();
            println!(
                "{label} shrank to {}, shrinks: {shrinks_performed}",
                inputs.join(", ")
            );
        }
        result => println!("Unexpected result: {result:?}"),
    }
}

fn main() -> Result<()> {
    println!("Testing shrinking strategies");
    println!();

    // Integer shrinking: moves toward the nearest of zero and the bounds
    println!("Testing integer shrinking (should fail and shrink to 3)");
    let int_prop = Property::new(|_, trial: &mut Trial| -> Result<bool> {
        let x = trial.named_var("x").any_bounded_integer(-20, 20)?;
        Ok(!(3..=10).contains(&x))
    });
    show("Integer", int_prop.run(&Config::default().with_tests(50))?);
    println!();

    // Byte array shrinking: shorter first, then simpler bytes
    println!("Testing byte array shrinking (should fail and show truncation)");
    let bytes_prop = Property::new(|_, trial: &mut Trial| {
        trial.named_var("data").any_byte_array_up_to_length(32).len() < 5
    });
    show("Byte array", bytes_prop.run(&Config::default().with_tests(30))?);
    println!();

    // Reversible map: shrinking survives the transformation
    println!("Testing reversible map (should shrink the decimal string)");
    let digits = BoundedInt::new(0, 100_000)?
        .map_reversible(|n| n.to_string(), |s: &String| s.parse().unwrap_or(0))
        .boxed()
        .named("digits");
    let digits_prop = Property::new(move |_, trial: &mut Trial| {
        let text = digits.draw(trial);
        text.len() < 3 || text.len() > 4
    });
    show("Reversible map", digits_prop.run(&Config::default().with_tests(100))?);
    println!();

    // Lossy map: nothing to shrink, the original failure is reported
    println!("Testing lossy map (no shrinking available)");
    let lossy = BoundedInt::new(0, 100_000)?
        .map(|n| n.to_string())
        .boxed()
        .named("digits");
    let lossy_prop = Property::new(move |_, trial: &mut Trial| lossy.draw(trial).len() < 3);
    show("Lossy map", lossy_prop.run(&Config::default().with_tests(30))?);

    println!();
    println!("Shrinking demonstration complete");
    Ok(())
}
