//! Contains the source buffer that the scanner reads from and the span types pointing into it.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    io::Read,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files can't be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }
}

/// Where the characters of a [`SourceFile`] live.
enum Buffer {
    Mapped(MappedSource),
    Owned(String),
}

impl Buffer {
    fn content(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.borrow_mapped_str(),
            Self::Owned(string) => string.as_str(),
        }
    }
}

/// Represents a complete, immutable source buffer handed to the scanner.
///
/// The buffer is either memory mapped from a file or owned in memory (standard input, strings
/// passed by library callers).
#[derive(Getters)]
pub struct SourceFile {
    buffer: Buffer,

    /// Gets the path used to refer to the source in diagnostics.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    fn new(full_path: PathBuf, buffer: Buffer) -> Arc<Self> {
        let lines = line_ranges(buffer.content());
        Arc::new(Self {
            buffer,
            full_path,
            lines,
        })
    }

    /// Creates a source file that owns the given string.
    ///
    /// `name` is only used when printing diagnostics, e.g. `<stdin>`.
    #[must_use]
    pub fn in_memory(name: impl Into<PathBuf>, content: impl Into<String>) -> Arc<Self> {
        Self::new(name.into(), Buffer::Owned(content.into()))
    }

    /// Loads the source file by memory mapping the given file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let mapped = MappedSource::create(file)?;
        Ok(Self::new(path, Buffer::Mapped(mapped)))
    }

    /// Reads the reader to its end and keeps the content in memory.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred while reading.
    /// - [`Error::Utf8Error`]: The content is not valid UTF-8.
    pub fn read(mut reader: impl Read, name: impl Into<PathBuf>) -> Result<Arc<Self>, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let content = String::from_utf8(bytes).map_err(|error| error.utf8_error())?;

        Ok(Self::in_memory(name, content))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("lexis")
            .suffix(".lx")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.buffer.content() }

    /// Gets the line of the source file at the given line number, including its terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(&self.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Gets a [`Cursor`] placed at the first character of the source file.
    #[must_use]
    pub fn cursor<'a>(self: &'a Arc<Self>) -> Cursor<'a> {
        Cursor {
            source_file: self,
            offset: 0,
        }
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The end of the file is a valid location: it is placed right after the last character.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content().is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len() - 1);

        let line_start = self.lines[line].start;
        let column = self.content()[line_start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_ptr_value = Arc::as_ptr(&self.source_file) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source_file) as usize;

        self_ptr_value
            .cmp(&other_ptr_value)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or splits a UTF-8 character.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location { self.source_file.get_location(self.start).unwrap() }

    /// Gets the ending [`Location`] of the span (the position right after its last character).
    #[must_use]
    pub fn end_location(&self) -> Location { self.source_file.get_location(self.end).unwrap() }
}

/// Is a forward-only read position in a source file.
///
/// The offset never decreases and always rests on a character boundary.
#[derive(Debug, Clone, CopyGetters)]
#[allow(missing_copy_implementations)]
pub struct Cursor<'a> {
    /// Gets the source file that the cursor reads from.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,

    /// Gets the byte offset of the next character to be read.
    #[get_copy = "pub"]
    offset: ByteIndex,
}

impl<'a> Cursor<'a> {
    /// Peeks at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> { self.rest().chars().next() }

    /// Checks whether the unread part of the source starts with the given pattern.
    #[must_use]
    pub fn starts_with(&self, pattern: &str) -> bool { self.rest().starts_with(pattern) }

    /// Consumes characters while the predicate holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(character) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.next();
        }
    }

    /// Checks whether every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool { self.offset >= self.source_file.content().len() }

    /// Creates a span from the given start offset to the current offset.
    #[must_use]
    pub fn span_from(&self, start: ByteIndex) -> Span {
        Span::new(self.source_file.clone(), start, self.offset).unwrap()
    }

    fn rest(&self) -> &'a str { &self.source_file.content()[self.offset..] }
}

impl<'a> std::iter::Iterator for Cursor<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.peek()?;
        let index = self.offset;
        self.offset += character.len_utf8();

        Some((index, character))
    }
}

/// Computes the byte range of every line; `\n`, `\r\n` and a lone `\r` terminate a line.
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;

    for (index, byte) in bytes.iter().enumerate() {
        let ends_line = match byte {
            b'\n' => true,
            b'\r' => bytes.get(index + 1) != Some(&b'\n'),
            _ => false,
        };

        if ends_line {
            #[allow(clippy::range_plus_one)]
            ranges.push(start..index + 1);
            start = index + 1;
        }
    }

    ranges.push(start..text.len());

    ranges
}

#[cfg(test)]
mod tests;
