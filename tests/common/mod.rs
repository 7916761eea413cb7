#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn lasttag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lasttag").unwrap();
    for var in [
        "LASTTAG_MATCH",
        "LASTTAG_RUNTIME",
        "LASTTAG_REGCTL",
        "LASTTAG_DOCKER",
        "LASTTAG_DEFAULT_REGISTRY",
        "LASTTAG_CONFIG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Stand-in for regctl (or a container engine): a shell script that records
/// its arguments, then runs `body`.
pub struct FakeTool {
    pub dir: TempDir,
    script: PathBuf,
    args_file: PathBuf,
}

impl FakeTool {
    /// Prints `tags` one per line and succeeds
    pub fn listing(tags: &[&str]) -> Self {
        Self::with_body(&format!("cat <<'TAGS'\n{}\nTAGS\n", tags.join("\n")))
    }

    /// Prints `tags` with tty (`\r\n`) line endings
    pub fn tty_listing(tags: &[&str]) -> Self {
        let lines: String = tags.iter().map(|tag| format!("{}\\r\\n", tag)).collect();
        Self::with_body(&format!("printf '{}'\n", lines))
    }

    /// Writes `stderr` and exits with `code`
    pub fn failing(stderr: &str, code: i32) -> Self {
        Self::with_body(&format!("echo '{}' >&2\nexit {}\n", stderr, code))
    }

    fn with_body(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("fake-tool.sh");
        let args_file = dir.path().join("args.txt");
        fs::write(
            &script,
            format!(
                "printf '%s\\n' \"$@\" > '{}'\n{}",
                args_file.display(),
                body
            ),
        )
        .unwrap();
        FakeTool {
            dir,
            script,
            args_file,
        }
    }

    /// Value for `--regctl` or `--docker`; run through sh so the script needs no exec bit
    pub fn command(&self) -> String {
        format!("sh {}", self.script.display())
    }

    /// Arguments of the last invocation, `None` if never invoked
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let contents = fs::read_to_string(&self.args_file).ok()?;
        Some(contents.lines().map(String::from).collect())
    }
}
