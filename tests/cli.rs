extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

#[test]
fn renders_one_frame_with_no_commands() {
    mandel()
        .args(&["--size", "16x16"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "frame 0: 16x16 center=(-0.5, 0) half_width=2 in_set=34 evaluated=240 filled=16",
        ))
        .stdout(predicate::str::contains("frame 1").not());
}

#[test]
fn renders_again_after_every_command() {
    mandel()
        .args(&["--size", "16x16", "in", "out", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 1: 16x16"))
        .stdout(predicate::str::contains("frame 2: 16x16 center=(-0.5, 0) half_width=2 in_set=34"))
        .stdout(predicate::str::contains("frame 3: 16x16 center=(-0.5, 0) half_width=2 in_set=34"));
}

#[test]
fn exhaustive_renderer_agrees() {
    mandel()
        .args(&["--size", "16x16", "--exhaustive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in_set=34 evaluated=256 filled=0"));
}

#[test]
fn preview_draws_the_set() {
    mandel()
        .args(&["--size", "16x16", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("..##########....\n"))
        .stdout(predicate::str::contains("................\n"));
}

#[test]
fn custom_framing_is_reported() {
    mandel()
        .args(&["--size", "8x4", "--center=-0.75,0.1", "--half-width", "0.5", "--grid", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 0: 8x4 center=(-0.75, 0.1) half_width=0.5"));
}

#[test]
fn unknown_commands_are_rejected() {
    mandel()
        .args(&["--size", "16x16", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: sideways"));
}

#[test]
fn zero_resolution_is_rejected() {
    mandel()
        .args(&["--size", "0x16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resolution must be non-zero, got 0x16"));
}

#[test]
fn zero_grid_is_rejected() {
    mandel()
        .args(&["--size", "16x16", "--grid", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tile grid must be between 1 and 64"));
}
