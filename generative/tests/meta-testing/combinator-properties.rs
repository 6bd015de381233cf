//! Combinator properties
//!
//! These properties ensure that map and flat_map keep generation and
//! shrinking consistent with the arbitrary they wrap.

use crate::arbitrary_seed;
use generative::*;
use std::collections::HashSet;

fn latin1(bytes: Vec<u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}

fn latin1_bytes(text: &String) -> Vec<u8> {
    text.chars().map(|c| c as u8).collect()
}

/// Property: a flat-mapped size realizes every length in range
pub fn test_flat_map_and_map_coverage() {
    run_tests(5, |_, trial: &mut Trial| -> Result<()> {
        let arbitrary_size = BoundedInt::new(0, 10)?;

        let arbitrary_byte_array_of_size = arbitrary_size.flat_map_reversible(
            |size| ByteArray::of_length(size as usize),
            |bytes: &Vec<u8>| bytes.len() as i32,
        );

        let as_string = arbitrary_byte_array_of_size.map_reversible(latin1, latin1_bytes);

        let strings = trial
            .named_var("The Strings")
            .list_of_length(as_string, 10000);

        let lengths: HashSet<usize> = strings.iter().map(|s| s.chars().count()).collect();
        assert_eq!(
            lengths.len(),
            11,
            "flat_map construction should generate strings of all 11 possible lengths"
        );
        Ok(())
    });
}

/// Property: map without a reverse never proposes shrinks
pub fn test_map_without_reverse_never_shrinks() {
    run_tests(200, |_, trial: &mut Trial| {
        let value = trial.named_var("value").any_integer();
        let doubled = BoundedInt::any().map(|x| x.wrapping_mul(2));
        let bytes = ByteArray::up_to(16).map(|b| b.len());

        assert!(doubled.shrink(&value).is_empty());
        assert!(bytes.shrink(&(value as usize)).is_empty());
    });
}

/// Property: with a true inverse, map_reversible shrinks exactly like its parent
pub fn test_map_reversible_soundness() {
    let seeds = arbitrary_seed().named("seed");
    run_tests(200, move |_, trial: &mut Trial| {
        let mut seed = seeds.draw(trial);
        let parent = ByteArray::up_to(12);
        let mapped = parent.map_reversible(latin1, latin1_bytes);

        let value = parent.get(&mut seed);
        let expected: Vec<String> = parent.shrink(&value).into_iter().map(latin1).collect();
        assert_eq!(mapped.shrink(&latin1(value)), expected);
    });
}

/// Property: with a true inverse, flat_map_reversible shrinks exactly like its parent
pub fn test_flat_map_reversible_soundness() {
    run_tests(200, |_, trial: &mut Trial| -> Result<()> {
        let value = trial.named_var("value").any_bounded_integer(-1000, 1000)?;
        let parent = BoundedInt::new(-1000, 1000)?;
        let tripled = parent.flat_map_reversible(|x| Constant::new(x * 3), |r: &i32| r / 3);

        let expected: Vec<i32> = parent.shrink(&value).iter().map(|x| x * 3).collect();
        assert_eq!(tripled.shrink(&(value * 3)), expected);
        Ok(())
    });
}
