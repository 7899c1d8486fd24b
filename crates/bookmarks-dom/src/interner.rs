//! String Interner - Deduplicate tag and attribute names
//!
//! A bookmark export repeats the same handful of names (`dt`, `a`, `href`,
//! `add_date`, ...) thousands of times. Each distinct name is stored once and
//! elements refer to it by a 4-byte ID.

use std::collections::HashMap;

/// Interned string ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner
///
/// All strings live in one buffer, separated by null terminators.
#[derive(Debug)]
pub struct StringInterner {
    buffer: String,
    map: HashMap<Box<str>, u32>,
    offsets: Vec<u32>,
}

impl StringInterner {
    /// Create an interner with the Netscape bookmark vocabulary pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            buffer: String::with_capacity(512),
            map: HashMap::with_capacity(64),
            offsets: Vec::with_capacity(64),
        };

        interner.intern("");

        const BOOKMARK_TAGS: &[&str] = &[
            "html", "head", "body", "meta", "title", "h1", "h3", "dl", "dt", "dd", "a", "p",
        ];

        const BOOKMARK_ATTRS: &[&str] = &[
            "href",
            "add_date",
            "last_modified",
            "last_visit",
            "icon",
            "icon_uri",
            "tags",
            "shortcuturl",
            "personal_toolbar_folder",
            "http-equiv",
            "content",
        ];

        for name in BOOKMARK_TAGS.iter().chain(BOOKMARK_ATTRS) {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.offsets.len() as u32;
        self.offsets.push(self.buffer.len() as u32);
        self.buffer.push_str(s);
        self.buffer.push('\0');
        self.map.insert(s.into(), idx);

        InternedString(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        let Some(&start) = self.offsets.get(id.0 as usize) else {
            return "";
        };
        let rest = &self.buffer[start as usize..];
        let end = rest.find('\0').unwrap_or(rest.len());
        &rest[..end]
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let id1 = interner.intern("folder");
        let id2 = interner.intern("folder");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_get_string() {
        let mut interner = StringInterner::new();
        let id = interner.intern("feeduri");
        assert_eq!(interner.get(id), "feeduri");
    }

    #[test]
    fn test_bookmark_vocabulary_preinterned() {
        let interner = StringInterner::new();
        assert!(interner.lookup("add_date").is_some());
        assert!(interner.lookup("h3").is_some());
        assert!(interner.lookup("blink").is_none());
        assert_eq!(interner.get(InternedString::EMPTY), "");
    }
}
