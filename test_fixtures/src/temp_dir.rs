// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use rand::{Rng, rngs::ThreadRng};
use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

const WORDS: [&str; 10] = [
    "apple", "banana", "cherry", "grape", "kiwi", "lemon", "mango", "peach", "plum",
    "lime",
];

/// Temporary directory used by save / open tests. The directory is automatically
/// deleted when the [`TempDir`] struct is dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

fn generate_random_dir_name() -> String {
    let mut rng: ThreadRng = rand::rng();
    let word = WORDS[rng.random_range(0..WORDS.len())];
    let number: u32 = rng.random_range(0..1_000_000);
    format!("gap_editor-{word}-{number:06}")
}

/// Create a temporary directory with a random name under [`std::env::temp_dir`].
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(generate_random_dir_name());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}
