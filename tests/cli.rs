use assert_cmd::Command;
use predicates::prelude::*;

fn decodex() -> Command {
    Command::cargo_bin("decodex").unwrap()
}

#[test]
fn enc_base64_literal() {
    decodex()
        .args(["enc", "--method", "base64", "-i", "Man"])
        .assert()
        .success()
        .stdout("TWFu\n");
}

#[test]
fn dec_base64_literal() {
    decodex()
        .args(["dec", "--method", "base64", "-i", "TWFu"])
        .assert()
        .success()
        .stdout("Man");
}

#[test]
fn enc_dec_rot13() {
    decodex()
        .args(["enc", "--method", "rot13", "-i", "Hello"])
        .assert()
        .success()
        .stdout("Uryyb\n");

    decodex()
        .args(["dec", "--method", "rot13", "-i", "Uryyb"])
        .assert()
        .success()
        .stdout("Hello");
}

#[test]
fn enc_caesar_with_shift() {
    decodex()
        .args(["enc", "--method", "caesar", "--shift", "3", "-i", "ABC"])
        .assert()
        .success()
        .stdout("DEF\n");
}

#[test]
fn enc_vigenere_with_key() {
    decodex()
        .args(["enc", "--method", "vigenere", "--key", "LEMON", "-i", "ATTACKATDAWN"])
        .assert()
        .success()
        .stdout("LXFOPVEFRNHR\n");
}

#[test]
fn enc_vigenere_missing_key_fails() {
    decodex()
        .args(["enc", "--method", "vigenere", "-i", "ATTACK"])
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("key"));
}

#[test]
fn dec_invalid_base64_fails() {
    decodex()
        .args(["dec", "--method", "base64", "-i", "not valid!!"])
        .assert()
        .failure()
        .code(10);
}

#[test]
fn unknown_method_fails() {
    decodex()
        .args(["enc", "--method", "rot99", "-i", "hello"])
        .assert()
        .failure()
        .code(13)
        .stderr(predicate::str::contains("unsupported method"));
}

#[test]
fn enc_reads_stdin() {
    decodex()
        .args(["enc", "--method", "hex"])
        .write_stdin("Hi")
        .assert()
        .success()
        .stdout("48 69\n");
}

#[test]
fn detect_base64_input() {
    decodex()
        .args(["detect", "--top", "30", "-i", "TWFu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Man"))
        .stdout(predicate::str::contains("Base64"));
}

#[test]
fn detect_unrecognized_input_reports_nothing() {
    decodex()
        .args(["detect", "-i", "zzz zzz"])
        .assert()
        .success();
}

#[test]
fn detect_json_output() {
    decodex()
        .args(["detect", "--json", "-i", "TWFu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": 1"))
        .stdout(predicate::str::contains("\"candidates\""));
}

#[test]
fn list_contains_all_methods() {
    let assert = decodex().args(["list"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for name in ["base64", "base32", "base58", "base85", "url", "html", "unicode", "hex", "binary", "octal", "rot13", "rot-n", "caesar", "vigenere", "morse"] {
        assert!(output.contains(name), "missing {} in list output", name);
    }
}

#[test]
fn list_json_output() {
    decodex()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"base64\""));
}

#[test]
fn info_shows_alphabet() {
    decodex()
        .args(["info", "base58"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"));
}

#[test]
fn info_accepts_alias() {
    decodex()
        .args(["info", "b64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:        base64"));
}

#[test]
fn enc_json_output() {
    decodex()
        .args(["enc", "--method", "morse", "--json", "-i", "SOS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"encoded\": \"... --- ...\""));
}

#[test]
fn dec_writes_to_file() {
    let dir = std::env::temp_dir().join("decodex-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.txt");

    decodex()
        .args(["dec", "--method", "base64", "-i", "TWFu", "-o", &format!("@{}", path.display())])
        .assert()
        .success();

    assert_eq!(std::fs::read(&path).unwrap(), b"Man");
    std::fs::remove_file(&path).ok();
}

#[test]
fn enc_reads_from_file() {
    let dir = std::env::temp_dir().join("decodex-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("in.txt");
    std::fs::write(&path, "Man").unwrap();

    decodex()
        .args(["enc", "--method", "base64", "-i", &format!("@{}", path.display())])
        .assert()
        .success()
        .stdout("TWFu\n");
    std::fs::remove_file(&path).ok();
}
