//! Integration tests for CLI behavior
//!
//! These tests run the `treewalk` binary against the trees in
//! `tests/fixtures` and check what it prints.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn treewalk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_treewalk"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        treewalk_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        treewalk_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_formats_in_walk_help() {
        treewalk_cmd()
            .args(["walk", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("outline"))
            .stdout(predicate::str::contains("markup"));
    }
}

mod events_command {
    use super::*;

    #[test]
    fn lists_events_in_firing_order() {
        treewalk_cmd()
            .arg("events")
            .assert()
            .success()
            .stdout("start\ntagOpen\ntext\ntagClose\nfinish\nerror\n");
    }
}

mod walk_command {
    use super::*;

    #[test]
    fn prints_outline_by_default() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .arg("--ignore-whitespace")
            .assert()
            .success()
            .stdout(
                "A tag is open: P\n\
                 A tag is open: STRONG\n\
                 Text: Paragraph\n\
                 A tag is closed: STRONG\n\
                 Text:  is a phrase delimited by a period.\n\
                 A tag is closed: P\n",
            );
    }

    #[test]
    fn prints_trace_with_root() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .args(["--format", "trace", "--ignore-whitespace", "--include-root"])
            .assert()
            .success()
            .stdout(
                "{started}{tag opened: DIV}{tag opened: P}{tag opened: STRONG}\
                 {text: Paragraph}{tag closed: STRONG}\
                 {text:  is a phrase delimited by a period.}{tag closed: P}\
                 {tag closed: DIV}{finished}\n",
            );
    }

    #[test]
    fn keeps_whitespace_text_without_flag() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .args(["--format", "trace"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{started}{text: \n  }{tag opened: P}"));
    }

    #[test]
    fn prints_escaped_markup_and_skips_comments() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("links.json"))
            .args(["--format", "markup"])
            .assert()
            .success()
            .stdout("<li><a href=\"/a?x=1&amp;y=2\">Tom &amp; Jerry</a></li>\n");
    }

    #[test]
    fn prints_one_event_per_line() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("links.json"))
            .args(["--format", "events", "--include-root"])
            .assert()
            .success()
            .stdout(
                "start\n\
                 tagOpen(ul)\n\
                 tagOpen(li)\n\
                 tagOpen(a)\n\
                 text(\"Tom & Jerry\")\n\
                 tagClose(a)\n\
                 tagClose(li)\n\
                 tagClose(ul)\n\
                 finish\n",
            );
    }

    #[test]
    fn reads_options_file() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .arg("--options")
            .arg(fixture("include_root.jsonc"))
            .args(["--format", "trace"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{started}{tag opened: DIV}{tag opened: P}"));
    }

    #[test]
    fn exits_zero_when_stop_tag_is_absent() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .args(["--format", "trace", "--ignore-whitespace", "--stop-at", "table"])
            .assert()
            .code(0)
            .stdout(predicate::str::ends_with("{finished}\n"));
    }
}

mod walk_errors {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn exits_one_when_walk_reports_error() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .args(["--format", "trace", "--ignore-whitespace", "--stop-at", "STRONG"])
            .assert()
            .code(1)
            .stdout(
                "{started}{tag opened: P}\
                 {error: Listener failed: stopped at <STRONG>}\n",
            )
            .stderr(predicate::str::contains("Walk reported an error"));
    }

    #[test]
    fn events_format_logs_error_before_exiting_one() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("links.json"))
            .args(["--format", "events", "--stop-at", "a"])
            .assert()
            .code(1)
            .stdout("start\ntagOpen(li)\nerror(Listener failed: stopped at <a>)\n");
    }

    #[test]
    fn rejects_non_object_root() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("text_root.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("root"));
    }

    #[test]
    fn reports_missing_tree_file() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("does_not_exist.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read tree"));
    }

    #[test]
    fn rejects_unknown_option_keys() {
        let temp = assert_fs::TempDir::new().unwrap();
        let options = temp.child("walk.json");
        options.write_str(r#"{ "ignoreComments": true }"#).unwrap();

        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .arg("--options")
            .arg(options.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("options"));
    }

    #[test]
    fn rejects_malformed_tree() {
        let temp = assert_fs::TempDir::new().unwrap();
        let tree = temp.child("tree.json");
        tree.write_str(r#"{ "name": "div", "children": [42] }"#).unwrap();

        treewalk_cmd()
            .arg("walk")
            .arg(tree.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("children[0]"));
    }

    #[test]
    fn rejects_unknown_format() {
        treewalk_cmd()
            .arg("walk")
            .arg(fixture("para.json"))
            .args(["--format", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("yaml"));
    }
}
