// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result};

/// Single slot clipboard. Each copy replaces the previous content wholesale, and the
/// bytes are owned, so later edits to the document never change what was copied.
///
/// This is an in-process slot owned by a [`crate::Document`]. Bridging it to the
/// operating system clipboard is up to the host.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    bytes: Vec<u8>,
}

impl Clipboard {
    /// Replace the content with `bytes`.
    pub fn put(&mut self, bytes: Vec<u8>) { self.bytes = bytes; }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    pub fn clear(&mut self) { self.bytes.clear(); }
}

mod impl_debug {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Debug for Clipboard {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(
                f,
                "Clipboard[{} bytes: {:?}]",
                self.bytes.len(),
                String::from_utf8_lossy(&self.bytes)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_put_replaces_wholesale() {
        let mut clipboard = Clipboard::default();
        assert!(clipboard.is_empty());

        clipboard.put(b"hello".to_vec());
        clipboard.put(b"hi".to_vec());
        assert_eq2!(clipboard.as_bytes(), b"hi");
        assert_eq2!(clipboard.len(), 2);

        clipboard.clear();
        assert!(clipboard.is_empty());
    }

    #[test]
    fn test_debug() {
        let mut clipboard = Clipboard::default();
        clipboard.put(b"a\nb".to_vec());
        assert_eq2!(format!("{clipboard:?}"), "Clipboard[3 bytes: \"a\\nb\"]");
    }
}
