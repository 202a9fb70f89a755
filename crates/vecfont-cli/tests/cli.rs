use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/Demo-Regular.ttx")
}

fn vecfont() -> Command {
    Command::cargo_bin("vecfont").unwrap()
}

#[test]
fn generate_writes_header_and_source() {
    let out = tempfile::tempdir().unwrap();
    let src = out.path().join("src");
    let include = out.path().join("include");
    vecfont()
        .arg("generate")
        .arg("--input")
        .arg(fixture())
        .arg("--source-dir")
        .arg(&src)
        .arg("--include-dir")
        .arg(&include)
        .assert()
        .success()
        .stdout(predicate::str::contains("FontDemoRegular.cc"))
        .stdout(predicate::str::contains("FontDemoRegular.h"));

    let source = std::fs::read_to_string(src.join("FontDemoRegular.cc")).unwrap();
    assert!(source.contains("GUIVectorPoint FontDemoRegular::degree_data_[] ="));
    assert!(source.contains("double FontDemoRegular::height_ = 700.000000;"));
    let header = std::fs::read_to_string(include.join("FontDemoRegular.h")).unwrap();
    assert!(header.contains("static GUIVectorPoint O_data_[];"));
}

#[test]
fn generate_with_banner_and_class_name() {
    let out = tempfile::tempdir().unwrap();
    let banner = out.path().join("LICENSE.txt");
    std::fs::write(&banner, "Copyright 2017 Continuum\n").unwrap();
    vecfont()
        .arg("generate")
        .arg("-i")
        .arg(fixture())
        .arg("--source-dir")
        .arg(out.path())
        .arg("--include-dir")
        .arg(out.path())
        .arg("--banner")
        .arg(&banner)
        .arg("--class-name")
        .arg("FontDemo")
        .assert()
        .success();
    let header = std::fs::read_to_string(out.path().join("FontDemo.h")).unwrap();
    assert!(header.starts_with("/*---"));
    assert!(header.contains("Copyright 2017 Continuum"));
}

#[test]
fn missing_reference_fails_without_output() {
    let out = tempfile::tempdir().unwrap();
    vecfont()
        .arg("generate")
        .arg("--input")
        .arg(fixture())
        .arg("--source-dir")
        .arg(out.path())
        .arg("--include-dir")
        .arg(out.path())
        .arg("--reference")
        .arg("Q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference glyph 'Q' not found"))
        .stderr(predicate::str::contains("glyph 'Q'"));
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn inspect_names_failing_glyph() {
    vecfont()
        .arg("inspect")
        .arg("--input")
        .arg(fixture())
        .arg("--reference")
        .arg("Q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("generating DemoRegular (glyph 'Q')"));
}

#[test]
fn missing_input_fails() {
    vecfont()
        .arg("inspect")
        .arg("--input")
        .arg("does-not-exist.ttx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.ttx"));
}

#[test]
fn inspect_prints_summary() {
    vecfont()
        .arg("inspect")
        .arg("--input")
        .arg(fixture())
        .arg("--slots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Font: DemoRegular"))
        .stdout(predicate::str::contains("Table glyphs: 4"))
        .stdout(predicate::str::contains("Height: 700.00"))
        .stdout(predicate::str::contains("0x4f 'O'"));
}

#[test]
fn dump_prints_json_commands() {
    vecfont()
        .arg("dump")
        .arg("--input")
        .arg(fixture())
        .arg("--glyph")
        .arg("Z")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identifier\": \"Z\""))
        .stdout(predicate::str::contains("\"kind\": \"move\""))
        .stdout(predicate::str::contains("\"advance_width\": 580"));
}

#[test]
fn dump_unknown_glyph_fails() {
    vecfont()
        .arg("dump")
        .arg("--input")
        .arg(fixture())
        .arg("--glyph")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the character map"));
}
