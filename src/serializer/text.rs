//! Human-readable single-line rendering.
//!
//! ```text
//! 2026-10-15T08:12:01.123456789Z [info] started service=api version=1.2
//! ```
//! Annotations follow the message in key order. Not meant to be parsed.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::entry::Entry;
use crate::error::Result;
use crate::serializer::{write_record, Serializer};

/// Writes each entry as `<timestamp> [<level>] <message> k=v ...\n`.
#[derive(Debug)]
pub struct TextSerializer<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> TextSerializer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Consume the serializer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Append `s` with control characters escaped (`\n` becomes `\\n`), so a
/// field can never end the line early.
fn push_escaped(line: &mut String, s: &str) {
    for c in s.chars() {
        if c.is_control() {
            line.extend(c.escape_default());
        } else {
            line.push(c);
        }
    }
}

fn render(entry: &Entry<'_>) -> String {
    let mut line = String::with_capacity(64);
    push_escaped(&mut line, &entry.timestamp);
    line.push_str(" [");
    push_escaped(&mut line, &entry.level);
    line.push_str("] ");
    push_escaped(&mut line, &entry.message);
    for (key, value) in entry.data.iter() {
        line.push(' ');
        push_escaped(&mut line, key);
        line.push('=');
        push_escaped(&mut line, value);
    }
    line.push('\n');
    line
}

impl<W: Write + Send> Serializer for TextSerializer<W> {
    fn write(&self, entry: &Entry<'_>) -> Result<()> {
        write_record(&self.sink, render(entry).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Data;
    use std::borrow::Cow;

    fn write_one(entry: &Entry<'_>) -> String {
        let s = TextSerializer::new(Vec::new());
        s.write(entry).unwrap();
        String::from_utf8(s.into_inner()).unwrap()
    }

    #[test]
    fn test_text_serializer() {
        let data = Data::from([
            ("test".to_string(), "123".to_string()),
            ("test2".to_string(), "345".to_string()),
        ]);
        let entry = Entry::new("somelevel", "test123", Cow::Owned(data));
        let out = write_one(&entry);

        assert!(out.starts_with(&entry.timestamp));
        assert!(out.contains("[somelevel] test123"));
        assert_eq!(out.matches("test=123").count(), 1);
        assert_eq!(out.matches("test2=345").count(), 1);
        assert!(out.ends_with("test=123 test2=345\n"));
    }

    #[test]
    fn test_text_serializer_no_data() {
        let entry = Entry::new("otherlevel", "345test", Cow::Owned(Data::new()));
        let out = write_one(&entry);

        assert_eq!(out, format!("{} [otherlevel] 345test\n", entry.timestamp));
        assert!(!out.contains('='));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_text_escapes_line_breaks() {
        let data = Data::from([("k".to_string(), "v\nforged [info] x".to_string())]);
        let entry = Entry::new("info", "line one\r\nline two\t", Cow::Owned(data));
        let out = write_one(&entry);

        assert_eq!(out.lines().count(), 1);
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.ends_with(
            "[info] line one\\r\\nline two\\t k=v\\nforged [info] x\n"
        ));
    }

    #[test]
    fn test_text_key_order_is_stable() {
        let mut data = Data::new();
        data.insert("zeta".into(), "1".into());
        data.insert("alpha".into(), "2".into());
        data.insert("mid".into(), "3".into());
        let entry = Entry::new("info", "m", Cow::Owned(data));

        let first = write_one(&entry);
        let second = write_one(&entry);
        assert_eq!(first, second);
        assert!(first.ends_with(" alpha=2 mid=3 zeta=1\n"));
    }

    #[test]
    fn test_repeated_writes_append() {
        let s = TextSerializer::new(Vec::new());
        let entry = Entry::new("info", "again", Cow::Owned(Data::new()));
        for _ in 0..3 {
            s.write(&entry).unwrap();
        }
        let out = String::from_utf8(s.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 3);
    }
}
