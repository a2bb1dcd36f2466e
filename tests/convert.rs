use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn stream_emits_one_json_line_per_document() {
    let env = TestEnv::new();
    env.cmd()
        .arg("json")
        .write_stdin("a: 1\n---\n- 1\n- 2\n---\nplain\n")
        .assert()
        .success()
        .stdout("{\"a\":1}\n[1,2]\n\"plain\"\n")
        .stderr("");
}

#[test]
fn reads_from_a_file_when_given() {
    let env = TestEnv::new();
    let file = env.write("docs.yaml", "a: 1\n---\nb: two\n");
    env.cmd()
        .arg("json")
        .arg(&file)
        .assert()
        .success()
        .stdout("{\"a\":1}\n{\"b\":\"two\"}\n");
}

#[test]
fn failing_document_does_not_abort_the_stream() {
    // A sequence-keyed mapping converts to no JSON value; the rest of the
    // stream still converts.
    let env = TestEnv::new();
    env.cmd()
        .arg("json")
        .write_stdin("a: 1\n---\n? [1, 2]\n: seq key\n---\nb: 2\n")
        .assert()
        .success()
        .stdout("{\"a\":1}\n{\"b\":2}\n")
        .stderr(contains("document 2"));
}

#[test]
fn syntax_error_is_diagnosed_without_hanging() {
    let env = TestEnv::new();
    env.cmd()
        .arg("json")
        .write_stdin("a: 1\n---\n[unclosed\n---\nb: 2\n")
        .assert()
        .success()
        .stdout("{\"a\":1}\n")
        .stderr(contains("document 2"));
}

#[test]
fn unreadable_input_file_fails() {
    let env = TestEnv::new();
    let file = env.missing("nope.yaml");
    env.cmd()
        .arg("json")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("cannot read"));
}
