use std::fs;
use std::path::{Path, PathBuf};

use startpage::emit::{emit, output_path};
use startpage::pipeline::render_json;
use startpage::{convert, parse, Error, Mode, Options, Output};

const SAMPLE: &str = "#Work\nMail * mail.example.com\nDocs * docs.example.com\n#Personal\nBlog * blog.example.com\n";

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("emit_tests");
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn output_name_replaces_extension() {
    assert_eq!(output_path(Path::new("bookmarks.txt")), PathBuf::from("bookmarks.html"));
    assert_eq!(output_path(Path::new("a.tar.gz")), PathBuf::from("a.tar.html"));
    assert_eq!(output_path(Path::new("dir/links.md")), PathBuf::from("dir/links.html"));
    // an html input is its own target
    assert_eq!(output_path(Path::new("page.html")), PathBuf::from("page.html"));
}

#[test]
fn output_name_without_extension_appends_html() {
    assert_eq!(output_path(Path::new("notes")), PathBuf::from("notes.html"));
    assert_eq!(output_path(Path::new("dir.v2/notes")), PathBuf::from("dir.v2/notes.html"));
}

#[test]
fn convert_writes_page_next_to_input() {
    let input = scratch("scenario.txt");
    let _ = fs::remove_file(output_path(&input));
    fs::write(&input, SAMPLE).unwrap();

    let outcome = convert(&input, &Options::default()).unwrap();
    let expected = output_path(&input);
    assert_eq!(outcome.frames, 2);
    match &outcome.output {
        Output::Written(path) => assert_eq!(path, &expected),
        other => panic!("unexpected output: {:?}", other),
    }
    assert_eq!(
        outcome.written_message(),
        Some(format!("{} created with success", expected.display()))
    );
    let page = fs::read_to_string(&expected).unwrap();
    assert!(page.contains("<h2>Work</h2>"));
    assert!(page.contains("<h2>Personal</h2>"));
}

#[test]
fn rerun_is_byte_identical() {
    let input = scratch("idempotent.txt");
    fs::write(&input, SAMPLE).unwrap();
    convert(&input, &Options::default()).unwrap();
    let first = fs::read(output_path(&input)).unwrap();
    convert(&input, &Options::default()).unwrap();
    let second = fs::read(output_path(&input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_input_writes_nothing() {
    let input = scratch("malformed.txt");
    let _ = fs::remove_file(output_path(&input));
    fs::write(&input, "#Work\nMail * mail\nbroken\n").unwrap();
    let err = convert(&input, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(!output_path(&input).exists());
}

#[test]
fn empty_input_writes_nothing() {
    let input = scratch("empty.txt");
    let _ = fs::remove_file(output_path(&input));
    fs::write(&input, "\n\n").unwrap();
    let err = convert(&input, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("empty content"));
    assert!(!output_path(&input).exists());
}

#[test]
fn write_failure_names_target() {
    let frames = parse(SAMPLE).unwrap();
    let source = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
        .join("missing-dir")
        .join("links.txt");
    let err = emit(&source, &frames).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
    assert!(err.to_string().contains("links.html"));
}

#[test]
fn output_override() {
    let input = scratch("override.txt");
    let target = scratch("custom-page.html");
    fs::write(&input, SAMPLE).unwrap();
    let options = Options {
        mode: Mode::Html,
        output: Some(target.clone()),
    };
    convert(&input, &options).unwrap();
    assert!(target.exists());
}

#[test]
fn json_and_cli_modes_print_instead_of_writing() {
    let input = scratch("printed.txt");
    let _ = fs::remove_file(output_path(&input));
    fs::write(&input, SAMPLE).unwrap();

    let json = Options {
        mode: Mode::Json,
        output: None,
    };
    match convert(&input, &json).unwrap().output {
        Output::Printed(text) => {
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["frames"][0]["name"], "Work");
            assert_eq!(value["frames"][0]["links"][1]["url"], "docs.example.com");
        }
        other => panic!("unexpected output: {:?}", other),
    }

    let cli = Options {
        mode: Mode::Cli,
        output: None,
    };
    match convert(&input, &cli).unwrap().output {
        Output::Printed(text) => {
            assert!(text.contains("▸ Work (2 links)"));
            assert!(text.contains("  Blog → blog.example.com"));
        }
        other => panic!("unexpected output: {:?}", other),
    }
    assert!(!output_path(&input).exists());
}

#[test]
fn read_confirmation_names_source() {
    let input = scratch("confirm.txt");
    fs::write(&input, SAMPLE).unwrap();
    let options = Options {
        mode: Mode::Cli,
        output: None,
    };
    let outcome = convert(&input, &options).unwrap();
    assert_eq!(outcome.source, input);
    assert_eq!(
        outcome.read_message(),
        format!("Successfully read file: {}", input.display())
    );
    assert_eq!(outcome.written_message(), None);
}

#[test]
fn json_keeps_label_whitespace() {
    let frames = parse("#G\nA * b\n").unwrap();
    let json = render_json(&frames).unwrap();
    assert!(json.contains("\"label\": \"A \""));
}
