use assert_cmd::prelude::*;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::main_binary().unwrap().args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn run_solve_all() {
    let output = run(&["--moves", "R rR RRldR", "levels/simple.txt"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let expected_first = r"One push
#####
# @*#
#####
Moves: 1
Pushes: 1
LEVEL COMPLETE!
";
    assert!(out.starts_with(expected_first));
    assert_eq!(out.matches("LEVEL COMPLETE!").count(), 3);
    assert!(out.contains(
        r"Two boxes
  ####
###  #
#   *#
#  @*#
######
Moves: 5
Pushes: 3
"
    ));
    assert!(out.contains("RRldR"));
    assert!(out.ends_with("Solved 3 of 3 levels, 8 moves, 5 pushes\n"));
}

#[test]
fn run_undo_reset_skip() {
    let output = run(&["--moves", "> rl-=rR q", "levels/simple.txt"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert_eq!(out.matches("LEVEL COMPLETE!").count(), 1);
    assert!(out.starts_with("Walk first\n"));
    assert!(out.contains("skipped"));
    assert!(out.contains("quit"));
    assert!(out.contains("Solved 1 of 3 levels, 2 moves, 1 pushes"));
}

#[test]
fn run_from_level() {
    let output = run(&["--level", "3", "--moves", "RR", "levels/simple.txt"]);
    assert!(output.status.success());

    // script ran out before the level was solved
    let out = stdout(&output);
    assert!(out.starts_with("Two boxes\n"));
    assert!(out.contains("Moves: 2\nPushes: 2\n"));
    assert!(out.contains("Solved 0 of 1 levels, 2 moves, 2 pushes"));
}

#[test]
fn run_permissive_and_strict() {
    // walking into the gap goes nowhere and isn't counted
    let permissive = run(&["--moves", "R>R", "levels/broken.txt"]);
    assert!(permissive.status.success());
    let out = stdout(&permissive);
    assert!(out.contains("skipped"));
    assert_eq!(out.matches("invalid").count(), 1);
    assert!(out.contains("Solved 1 of 3 levels, 1 moves, 1 pushes"));

    let strict = run(&["--strict", "--moves", "R", "levels/broken.txt"]);
    assert!(strict.status.success());
    let out = stdout(&strict);
    assert_eq!(out.matches("invalid").count(), 2);
    assert!(out.contains("Solved 1 of 3 levels, 1 moves, 1 pushes"));
}

#[test]
fn run_bad_script() {
    Command::main_binary()
        .unwrap()
        .arg("--moves")
        .arg("rrx")
        .arg("levels/simple.txt")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid command 'x' at position 2\n");
}

#[test]
fn run_missing_file() {
    let output = run(&["--moves", "r", "levels/does-not-exist.txt"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.starts_with("Can't read file levels/does-not-exist.txt"));
}

#[test]
fn run_bad_args() {
    // doesn't check stderr - clap's message isn't worth pinning down
    Command::main_binary()
        .unwrap()
        .arg("--level")
        .arg("x")
        .arg("--moves")
        .arg("r")
        .arg("levels/simple.txt")
        .assert()
        .failure()
        .stdout("");

    Command::main_binary()
        .unwrap()
        .assert()
        .failure()
        .stdout("");
}
