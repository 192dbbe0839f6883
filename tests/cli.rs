// End-to-end tests driving the binary with temp word files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Lists {
    _dir: TempDir,
    words: PathBuf,
    candidates: PathBuf,
}

fn lists(words: &str, candidates: &str) -> Lists {
    let dir = TempDir::new().unwrap();
    let words_path = dir.path().join("words.txt");
    let candidates_path = dir.path().join("candidates.txt");
    fs::write(&words_path, words).unwrap();
    fs::write(&candidates_path, candidates).unwrap();
    Lists {
        _dir: dir,
        words: words_path,
        candidates: candidates_path,
    }
}

fn game() -> Command {
    Command::cargo_bin("words_virtuoso").unwrap()
}

#[test]
fn wrong_number_of_arguments() {
    game()
        .assert()
        .success()
        .stdout("Error: Wrong number of arguments.\n");

    game()
        .args(["a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout("Error: Wrong number of arguments.\n");
}

#[test]
fn missing_words_file() {
    let l = lists("crane\n", "crane\n");
    let missing = l.words.with_file_name("nothing.txt");
    game()
        .arg(&missing)
        .arg(&l.candidates)
        .assert()
        .success()
        .stdout(format!(
            "Error: The words file {} doesn't exist.\n",
            missing.display()
        ));
}

#[test]
fn missing_candidate_file() {
    let l = lists("crane\n", "crane\n");
    let missing = l.candidates.with_file_name("nothing.txt");
    game()
        .arg(&l.words)
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("The candidate words file"))
        .stdout(predicate::str::contains("Words Virtuoso").not());
}

#[test]
fn invalid_words_in_dictionary() {
    let l = lists("crane\nspeed\nab3de\n", "crane\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .assert()
        .success()
        .stdout(format!(
            "Error: 2 invalid words were found in the {} file.\n",
            l.words.display()
        ));
}

#[test]
fn candidates_not_in_dictionary() {
    let l = lists("crane\nmango\n", "plums\nMANGO\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .assert()
        .success()
        .stdout(format!(
            "Error: 1 candidate words are not included in the {} file.\n",
            l.words.display()
        ));
}

#[test]
fn plays_a_full_game() {
    let l = lists("crane\nmango\nquick\n", "mango\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .args(["--no-color", "--seed", "3"])
        .write_stdin("xyz\ncrane\nmango\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Words Virtuoso\nInput a 5-letter word:\n",
        ))
        .stdout(predicate::str::contains("The input isn't a 5-letter word."))
        .stdout(predicate::str::contains(" C  R (A)(N) E \n\nCER\n"))
        .stdout(predicate::str::contains("[M][A][N][G][O]"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains(
            "The solution was found after 2 tries in ",
        ));
}

#[test]
fn first_guess_win() {
    let l = lists("crane\nmango\n", "mango\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .arg("--no-color")
        .write_stdin("mango\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Amazing luck! The solution was found at once.",
        ));
}

#[test]
fn exit_ends_the_game() {
    let l = lists("crane\nmango\n", "mango\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .arg("--no-color")
        .write_stdin("crane\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nThe game is over.\n"))
        .stdout(predicate::str::contains("Correct!").not());
}

#[test]
fn closed_stdin_ends_the_game() {
    let l = lists("crane\nmango\n", "mango\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("The game is over."));
}

#[test]
fn undecodable_guess_is_rejected_and_play_continues() {
    let l = lists("crane\nmango\n", "mango\n");
    game()
        .arg(&l.words)
        .arg(&l.candidates)
        .arg("--no-color")
        .write_stdin(b"cr\xffne\nmango\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "One or more letters of the input aren't valid.",
        ))
        .stdout(predicate::str::contains(
            "Amazing luck! The solution was found at once.",
        ));
}
