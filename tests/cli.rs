use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

// A 3-row, 4-column plain PPM with a non-default max color value and a
// comment line, so the header round-trip is actually exercised.
const INPUT: &str = "P3\n# test card\n4 3\n200\n\
                     10 10 10  20 20 20  30 30 30  40 40 40\n\
                     50 50 50  60 60 60  70 70 70  80 80 80\n\
                     90 90 90  100 100 100  110 110 110  120 120 120\n";

#[test]
fn carves_one_column_and_preserves_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "3"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let mut tokens = text.split_whitespace();
    assert_eq!(tokens.next(), Some("P3"));
    assert_eq!(tokens.next(), Some("3"), "width");
    assert_eq!(tokens.next(), Some("3"), "height");
    assert_eq!(tokens.next(), Some("200"), "max color value");
    assert_eq!(tokens.count(), 27, "3x3 pixels, three channels each");
}

#[test]
fn refuses_to_upscale() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    fs::write(&input, INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("out.ppm"))
        .args(&["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));
}

#[test]
fn reports_a_malformed_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    fs::write(&input, "this is not a ppm").unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("out.ppm"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}
