//! Common test utilities for termio tests
//!
//! Provides a scripted console (input from a string, output captured in
//! memory), a fake masked reader, and isolated config directories.

#![allow(dead_code)]

use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;
use termio::{Console, MaskedInput};

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>, FakeTerminal>;

/// Masked reader standing in for a terminal
///
/// Records how many times it was read so tests can assert that an
/// unsupported terminal is never touched.
#[derive(Debug, Default)]
pub struct FakeTerminal {
    pub interactive: bool,
    pub secrets: Vec<String>,
    pub reads: usize,
    pub failure: Option<io::ErrorKind>,
}

impl FakeTerminal {
    pub fn interactive(secrets: &[&str]) -> Self {
        Self {
            interactive: true,
            secrets: secrets.iter().rev().map(|s| s.to_string()).collect(),
            reads: 0,
            failure: None,
        }
    }

    /// Interactive terminal whose reads fail with `kind`
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            interactive: true,
            failure: Some(kind),
            ..Self::default()
        }
    }

    pub fn redirected() -> Self {
        Self::default()
    }
}

impl MaskedInput for FakeTerminal {
    fn supports_masking(&self) -> bool {
        self.interactive
    }

    fn read_masked(&mut self) -> io::Result<String> {
        self.reads += 1;
        if let Some(kind) = self.failure {
            return Err(io::Error::new(kind, "terminal read failed"));
        }
        self.secrets
            .pop()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more secrets"))
    }
}

/// Console reading `lines`, each terminated by `\n`
pub fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    scripted_raw(&input)
}

/// Console reading `input` verbatim
pub fn scripted_raw(input: &str) -> ScriptedConsole {
    console_over(input.as_bytes())
}

/// Console reading arbitrary bytes, valid UTF-8 or not
pub fn console_over(bytes: &[u8]) -> ScriptedConsole {
    Console::new(Cursor::new(bytes.to_vec()), Vec::new())
        .with_masked_input(FakeTerminal::redirected())
}

/// Everything written so far, consuming the console
pub fn output_of(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is UTF-8")
}

/// Count how many times `needle` occurs in `haystack`
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Isolated directory holding a config file, removed on drop
pub struct TestEnvironment {
    pub test_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    /// Creates `/tmp/termio_tests/{test_name}/config.toml` with `contents`
    pub fn with_config(test_name: &str, contents: &str) -> Self {
        let mut test_dir = std::env::temp_dir();
        test_dir.push("termio_tests");
        test_dir.push(test_name);

        let _ = fs::remove_dir_all(&test_dir);
        fs::create_dir_all(&test_dir).expect("Failed to create test directory");

        let config_path = test_dir.join("config.toml");
        fs::write(&config_path, contents).expect("Failed to write test config");

        Self {
            test_dir,
            config_path,
        }
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.test_dir);
    }
}
