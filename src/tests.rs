use pretty_assertions::assert_eq;

use crate::{strip_markers, Mode, Options};

mod attributes;
mod core;
mod elements;
mod errors;

#[track_caller]
fn strip(input: &str, expected: &str) {
    strip_opts(input, &Options::default(), expected);
}

#[track_caller]
fn strip_opts(input: &str, options: &Options, expected: &str) {
    let output = match strip_markers(input, options) {
        Ok(output) => output,
        Err(e) => panic!("strip failed: {}", e),
    };
    assert_eq!(output, expected);

    // A second pass over the output must find nothing left to remove.
    let again = match strip_markers(&output, options) {
        Ok(again) => again,
        Err(e) => panic!("restrip failed: {}", e),
    };
    assert_eq!(again, output);
}

/// Assert the input comes back byte for byte.
#[track_caller]
fn clean(input: &str) {
    strip(input, input);
}
