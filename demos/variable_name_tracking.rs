//! Demonstration of variable name tracking in failure reporting.

use generative::*;

fn report<F, V>(prop: &Property<F>, config: &Config) -> Result<()>
where
    F: Fn(usize, &mut Trial) -> V,
    V: Verdict,
{
    match prop.run(config)? {
        TestResult::Pass { .. } => println!("   Unexpectedly passed"),
        result => {
            println!("   Property failed as expected:");
            for line in result.to_string().lines() {
                println!("   {line}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("Variable Name Tracking in Failure Reporting");
    println!("===========================================");
    println!();

    let config = Config::default().with_tests(50);

    // Example 1: Labeling through the trial
    println!("1. Labeling a draw with named_var");
    let prop = Property::new(|_, trial: &mut Trial| -> Result<bool> {
        let n = trial.named_var("n").any_bounded_integer(5, 20)?;
        Ok(n < 10)
    })
    .with_name("prop_small_numbers");
    report(&prop, &config)?;
    println!();

    // Example 2: Labeling through the generator
    println!("2. Labeling a generator once, for every draw");
    let text = ByteArray::new(5, 15)?
        .map_reversible(
            |bytes| bytes.iter().map(|b| char::from(b'a' + b % 26)).collect::<String>(),
            |text: &String| text.bytes().map(|b| b - b'a').collect(),
        )
        .boxed()
        .named("text");
    let string_prop = Property::new(move |_, trial: &mut Trial| text.draw(trial).len() < 8);
    report(&string_prop, &config)?;
    println!();

    // Example 3: Several draws, only some labeled
    println!("3. Mixing named and unnamed draws");
    let mixed = Property::new(|_, trial: &mut Trial| -> Result<()> {
        let x = trial.named_var("x").any_bounded_integer(0, 100)?;
        let y = trial.any_bounded_integer(0, 100)?;
        assert!(x + y < 50, "sum {} is too large", x + y);
        Ok(())
    });
    report(&mixed, &config)?;
    println!();

    println!("Named draws are reported as `name = value`; unnamed draws show the value alone.");
    Ok(())
}
