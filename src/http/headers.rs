//! Ordered, multi-valued header collection mirroring the WebIDL `Headers`
//! interface.
//!
//! Entries are kept in a plain vector in insertion order. A name may appear
//! any number of times; every operation that looks a name up does so with an
//! exact, case-sensitive byte comparison and acts on the *first* match only.
//! The one exception is [`Headers::get_set_cookie`], which collects every
//! `Set-Cookie` entry.
//!
//! Lookups are linear scans. Header counts are small and none of this sits on
//! a hot path.
//!
//! Both header names and values are stored as raw strings, without
//! validation. Use [`parser`](crate::http::parser) to build a collection from
//! a raw `name: value` block.

use std::fmt;
use std::slice;

use crate::http::HeaderName;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry at the end, even if `name` is already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Removes the first entry named exactly `name`. Later duplicates stay.
    pub fn delete(&mut self, name: &str) {
        if let Some(i) = self.position(name) {
            self.entries.remove(i);
        }
    }

    /// Returns the value of the first entry named exactly `name`.
    ///
    /// The returned slice borrows the stored entry.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every `Set-Cookie` value in order. Empty when there are none.
    pub fn get_set_cookie(&self) -> Vec<&str> {
        let name = HeaderName::SetCookie.as_str();
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Overwrites the value of the first entry named exactly `name`, keeping
    /// its position. Appends when there is no such entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value.into(),
            None => self.entries.push((name, value.into())),
        }
    }

    /// Iterates over `(name, value)` pairs in their current order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Serialises the entries as `name: value\r\n` lines.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

/// Borrowing iterator over a [`Headers`] collection, see [`Headers::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<K, V> Extend<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self {
            write!(f, "{}: {}\r\n", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(headers: &Headers) -> Vec<(&str, &str)> {
        headers.iter().collect()
    }

    #[test]
    fn append_keeps_duplicates_in_order() {
        let mut headers = Headers::new();
        headers.append("Accept", "application/json");
        headers.append("Accept", "text/html");

        assert_eq!(
            pairs(&headers),
            vec![("Accept", "application/json"), ("Accept", "text/html")]
        );
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn delete_removes_only_first_match() {
        let mut headers = Headers::new();
        headers.append("A", "1");
        headers.append("A", "2");
        headers.delete("A");

        assert_eq!(pairs(&headers), vec![("A", "2")]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut headers: Headers = [("A", "1")].into_iter().collect();
        headers.delete("B");
        headers.delete("a");
        assert_eq!(pairs(&headers), vec![("A", "1")]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut headers = Headers::new();
        headers.append("Content-Type", "text/plain");

        assert!(headers.has("Content-Type"));
        assert!(!headers.has("content-type"));
        assert_eq!(headers.get("CONTENT-TYPE"), None);
    }

    #[test]
    fn get_returns_first_value() {
        let mut headers = Headers::new();
        headers.append("A", "1");
        headers.append("A", "2");
        assert_eq!(headers.get("A"), Some("1"));
        assert_eq!(headers.get("B"), None);
    }

    #[test]
    fn set_overwrites_first_in_place() {
        let mut headers = Headers::new();
        headers.append("A", "1");
        headers.append("B", "2");
        headers.append("A", "4");
        headers.set("A", "3");

        assert_eq!(pairs(&headers), vec![("A", "3"), ("B", "2"), ("A", "4")]);
    }

    #[test]
    fn set_absent_appends() {
        let mut headers = Headers::new();
        headers.append("A", "1");
        headers.set("B", "2");
        assert_eq!(pairs(&headers), vec![("A", "1"), ("B", "2")]);
    }

    #[test]
    fn get_set_cookie_collects_all() {
        let mut headers = Headers::new();
        assert!(headers.get_set_cookie().is_empty());

        headers.append("Set-Cookie", "a");
        headers.append("Host", "example.org");
        headers.append("Set-Cookie", "b");
        headers.append("set-cookie", "c");
        assert_eq!(headers.get_set_cookie(), vec!["a", "b"]);
    }

    #[test]
    fn iteration_stops_early_and_restarts() {
        let headers: Headers = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();

        let first: Vec<_> = headers.iter().take_while(|(n, _)| *n != "B").collect();
        assert_eq!(first, vec![("A", "1")]);
        assert_eq!(headers.iter().count(), 3);
    }

    #[test]
    fn stringify_matches_display() {
        let mut headers = Headers::new();
        headers.append("Host", "example.org");
        headers.append("Accept", "*/*");

        assert_eq!(headers.stringify(), "Host: example.org\r\nAccept: */*\r\n");
        assert_eq!(headers.to_string(), headers.stringify());
    }
}
