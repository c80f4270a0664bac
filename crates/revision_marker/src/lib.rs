// crates/revision_marker/src/lib.rs

//! Marker tokens that delimit a revision placeholder, plus the scanner that
//! finds them inside a single line.

use std::ops::Range;

/// Opening marker. The placeholder content starts right after it.
pub const OPEN_MARKER: &str = "$:";

/// Closing marker. The placeholder content ends right before it.
pub const CLOSE_MARKER: &str = ":$";

/// Location of one marker pair inside a line.
///
/// All offsets are byte offsets into the line the span was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Offset of the first byte of the opening marker.
    pub open: usize,
    /// Offset of the first byte of the closing marker.
    pub close: usize,
}

impl MarkerSpan {
    /// Byte range of the content strictly between the two markers.
    pub fn content(&self) -> Range<usize> {
        self.open + OPEN_MARKER.len()..self.close
    }

    /// Offset of the first byte after the closing marker.
    pub fn end(&self) -> usize {
        self.close + CLOSE_MARKER.len()
    }
}

/// Finds the leftmost marker pair in `line`.
///
/// The first opening marker starts the span and the first closing marker
/// beginning at or after the end of that opening marker ends it, so the two
/// markers never share a byte (`$:$` holds no span). Everything after the
/// closing marker is left for the caller; later pairs on the same line are
/// not reported.
///
/// A line break is never part of a span. Callers pass one line at a time,
/// with or without its terminator.
pub fn find_marker_span(line: &[u8]) -> Option<MarkerSpan> {
    let line = strip_terminator(line);
    let open = find(line, OPEN_MARKER.as_bytes(), 0)?;
    let close = find(line, CLOSE_MARKER.as_bytes(), open + OPEN_MARKER.len())?;
    Some(MarkerSpan { open, close })
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'\n') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|idx| idx + from)
}
