//! Output behavior of the walking commands on small fixture trees

use assert_cmd::Command;
use predicates::prelude::*;
use similar_asserts::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Fixture {
    work: TempDir,
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            work: TempDir::new().expect("work dir"),
            home: TempDir::new().expect("home dir"),
        }
    }

    fn write(&self, rel: &str, contents: &str) {
        let path = self.work.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, contents).expect("write");
    }

    fn root(&self) -> &Path {
        self.work.path()
    }

    fn run(&self, args: &[&str]) -> String {
        let output = Command::new(assert_cmd::cargo::cargo_bin!("aitk"))
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env_remove("XDG_CONFIG_HOME")
            .args(args)
            .output()
            .expect("run aitk");
        assert!(output.status.success(), "aitk {args:?} failed");
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }
}

#[test]
fn listing_has_one_line_per_entry_without_ignore_files() {
    let fx = Fixture::new();
    fx.write("proj/a.txt", "a");
    fx.write("proj/src/b.ts", "b");
    fx.write("proj/src/deep/c.md", "c");

    let out = fx.run(&["ls", "proj"]);
    // a.txt, src/, b.ts, deep/, c.md
    assert_eq!(out.lines().count(), 5);
    assert!(out.contains("src/\n"));
    assert!(out.contains("deep/\n"));
}

#[test]
fn log_pattern_hides_logs_in_every_mode() {
    let fx = Fixture::new();
    fx.write("proj/.aitkignore", ".aitkignore\n*.log\n");
    fx.write("proj/app.ts", "function run(): void {}\n");
    fx.write("proj/debug.log", "noise\n");
    fx.write("proj/nested/trace.log", "noise\n");

    for mode in ["ls", "cat", "types"] {
        let out = fx.run(&[mode, "proj"]);
        assert!(!out.contains(".log"), "{mode} leaked a log file:\n{out}");
    }
}

#[test]
fn nested_ignore_file_applies_to_its_subtree() {
    let fx = Fixture::new();
    fx.write("a/.aitkignore", "skip.txt\n");
    fx.write("a/skip.txt", "");
    fx.write("a/b/skip.txt", "");
    fx.write("a/b/keep.txt", "");

    let out = fx.run(&["ls", "--style", "flat", "--sort", "a"]);
    assert_eq!(out, "- a/.aitkignore\n- a/b/\n- a/b/keep.txt\n");
}

#[test]
fn negation_reincludes_a_file() {
    let fx = Fixture::new();
    fx.write("proj/.aitkignore", ".aitkignore\n*.txt\n!keep.txt\n");
    fx.write("proj/drop.txt", "");
    fx.write("proj/keep.txt", "");

    let out = fx.run(&["ls", "--style", "flat", "proj"]);
    assert_eq!(out, "- proj/keep.txt\n");
}

#[test]
fn dump_wraps_each_file_in_a_fence() {
    let fx = Fixture::new();
    fx.write("proj/hello.txt", "hello\n");
    fx.write("proj/sub/world.txt", "world");

    let out = fx.run(&["cat", "--sort", "proj"]);
    let expected = "# proj/hello.txt\n```\nhello\n\n```\n\n# proj/sub/world.txt\n```\nworld\n```\n\n";
    assert_eq!(out, expected);
}

#[test]
fn dump_is_byte_identical_across_runs() {
    let fx = Fixture::new();
    fx.write("proj/a.rs", "fn main() {}\n");
    fx.write("proj/b/c.json", "{\"k\": 1}\n");
    fx.write("proj/b/d/e.txt", "text");

    let first = fx.run(&["cat", "proj"]);
    let second = fx.run(&["cat", "proj"]);
    assert_eq!(first, second);
}

#[test]
fn dump_can_write_to_a_file() {
    let fx = Fixture::new();
    fx.write("proj/x.txt", "x");

    Command::new(assert_cmd::cargo::cargo_bin!("aitk"))
        .current_dir(fx.root())
        .env("HOME", fx.home.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["cat", "proj", "-o", "dump.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File contents dumped to dump.md"));

    let dumped = fs::read_to_string(fx.root().join("dump.md")).expect("dump file");
    assert_eq!(dumped, "# proj/x.txt\n```\nx\n```\n\n");
}

#[test]
fn dump_file_inside_the_walked_root_is_not_dumped() {
    let fx = Fixture::new();
    let big = "0123456789abcdef\n".repeat(1280);
    fx.write("a.txt", &big);

    let expected = format!("# a.txt\n```\n{big}\n```\n\n");
    for _ in 0..2 {
        Command::new(assert_cmd::cargo::cargo_bin!("aitk"))
            .current_dir(fx.root())
            .env("HOME", fx.home.path())
            .env_remove("XDG_CONFIG_HOME")
            .args(["cat", "--sort", "-o", "dump.md"])
            .assert()
            .success();

        let dumped = fs::read_to_string(fx.root().join("dump.md")).expect("dump file");
        assert_eq!(dumped, expected);
    }
}

#[cfg(unix)]
#[test]
fn symlinked_root_keeps_its_link_name() {
    let fx = Fixture::new();
    let target = TempDir::new().expect("target dir");
    fs::write(target.path().join("a.txt"), "a").expect("write");
    std::os::unix::fs::symlink(target.path(), fx.root().join("link")).expect("symlink");

    let out = fx.run(&["ls", "--style", "flat", "link"]);
    assert_eq!(out, "- link/a.txt\n");
}

#[test]
fn types_prints_signatures_per_source_file() {
    let fx = Fixture::new();
    fx.write(
        "proj/api.ts",
        "export function fetchUser(id: string): Promise<User> { return load(id); }\n",
    );
    fx.write("proj/README.md", "# readme\n");
    fx.write("proj/broken.ts", "class {{{{\n");

    let out = fx.run(&["types", "proj"]);
    assert_eq!(out, "# proj/api.ts\nfetchUser(id: string): Promise<User>\n\n\n");
}

#[test]
fn types_extension_filter_narrows_sources() {
    let fx = Fixture::new();
    fx.write("proj/a.js", "function a() {}\n");
    fx.write("proj/b.ts", "function b(): number { return 1; }\n");

    let out = fx.run(&["types", "--ext", ".ts", "proj"]);
    assert_eq!(out, "# proj/b.ts\nb(): number\n\n\n");
}
