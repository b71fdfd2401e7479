// Shared test helpers for building mail directories and configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use phishblock::dns::{HostResolver, Resolvability};
use phishblock::Config;
use tempfile::TempDir;

/// Temporary workspace with a mail directory, whitelist path and output path.
#[allow(dead_code)] // Used by other test files
pub struct TestEnv {
    pub dir: TempDir,
    pub maildir: PathBuf,
    pub whitelist: PathBuf,
    pub output: PathBuf,
}

#[allow(dead_code)] // Used by other test files
impl TestEnv {
    /// Creates an empty mail directory; whitelist and output do not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let maildir = dir.path().join("Spam/cur");
        fs::create_dir_all(&maildir).expect("Failed to create maildir");
        let whitelist = dir.path().join("whitelist.txt");
        let output = dir.path().join("blocker/phishingblocker.txt");
        TestEnv {
            dir,
            maildir,
            whitelist,
            output,
        }
    }

    /// Writes one mail file into the mail directory.
    pub fn add_mail(&self, name: &str, content: &str) {
        fs::write(self.maildir.join(name), content).expect("Failed to write mail");
    }

    /// Writes the whitelist file.
    pub fn write_whitelist(&self, content: &str) {
        fs::write(&self.whitelist, content).expect("Failed to write whitelist");
    }

    /// Config pointing at this workspace, DNS probe disabled.
    pub fn config(&self) -> Config {
        Config {
            maildir: self.maildir.clone(),
            whitelist: self.whitelist.clone(),
            output: self.output.clone(),
            dns_check: false,
            ..Default::default()
        }
    }

    /// Blocklist lines currently on disk.
    pub fn output_lines(&self) -> Vec<String> {
        read_lines(&self.output)
    }
}

/// Reads a file into trimmed lines.
#[allow(dead_code)] // Used by other test files
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read file")
        .lines()
        .map(|l| l.to_string())
        .collect()
}

/// Builds a raw mail with plain text body.
#[allow(dead_code)] // Used by other test files
pub fn plain_mail(body: &str) -> String {
    format!(
        "From: \"Prize Dept\" <win@spam.example>\nSubject: You won\nContent-Type: text/plain\n\n{body}\n"
    )
}

/// Resolver stub that returns a fixed answer and records every lookup.
#[allow(dead_code)] // Used by other test files
pub struct StubResolver {
    pub answer: Resolvability,
    pub lookups: RefCell<Vec<String>>,
}

#[allow(dead_code)] // Used by other test files
impl StubResolver {
    pub fn new(answer: Resolvability) -> Self {
        StubResolver {
            answer,
            lookups: RefCell::new(Vec::new()),
        }
    }
}

impl HostResolver for StubResolver {
    async fn resolve(&self, host: &str) -> Resolvability {
        self.lookups.borrow_mut().push(host.to_string());
        self.answer
    }
}
