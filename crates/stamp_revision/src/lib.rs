// crates/stamp_revision/src/lib.rs

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use revision_marker::{find_marker_span, MarkerSpan};

pub mod config;
pub mod logging;
pub mod services;

use services::RevisionSource;

/// Counters for one pass over the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StampReport {
    /// Lines read from the input, including an unterminated last line.
    pub lines_read: usize,
    /// Lines that held a marker pair and were stamped.
    pub lines_stamped: usize,
}

/// Replaces the content of the leftmost marker pair in `line` with `revision`.
///
/// Everything outside the pair, the markers themselves and any line
/// terminator are kept byte for byte. Lines without a complete pair, or whose
/// placeholder already holds `revision`, are returned borrowed.
pub fn stamp_line<'a>(line: &'a [u8], revision: &str) -> Cow<'a, [u8]> {
    splice(line, find_marker_span(line), revision)
}

fn splice<'a>(line: &'a [u8], span: Option<MarkerSpan>, revision: &str) -> Cow<'a, [u8]> {
    let Some(span) = span else {
        return Cow::Borrowed(line);
    };
    let content = span.content();
    if &line[content.clone()] == revision.as_bytes() {
        return Cow::Borrowed(line);
    }

    let mut stamped = Vec::with_capacity(line.len() - content.len() + revision.len());
    stamped.extend_from_slice(&line[..content.start]);
    stamped.extend_from_slice(revision.as_bytes());
    stamped.extend_from_slice(&line[content.end..]);
    Cow::Owned(stamped)
}

/// `&str` flavour of [`stamp_line`].
pub fn stamp_str<'a>(line: &'a str, revision: &str) -> Cow<'a, str> {
    let Some(span) = find_marker_span(line.as_bytes()) else {
        return Cow::Borrowed(line);
    };
    // Both markers are ASCII, so the range sits on char boundaries.
    let content = span.content();
    if line[content.clone()] == *revision {
        return Cow::Borrowed(line);
    }
    Cow::Owned(format!(
        "{}{}{}",
        &line[..content.start],
        revision,
        &line[content.end..]
    ))
}

/// Copies `reader` to `writer` line by line, stamping each line with `revision`.
///
/// Each line is written before the next one is read. Input is handled as raw
/// bytes, so text that is not valid UTF-8 passes through unchanged. The writer
/// is flushed once the input is drained.
pub fn stamp_stream<R, W>(mut reader: R, mut writer: W, revision: &str) -> io::Result<StampReport>
where
    R: BufRead,
    W: Write,
{
    let mut report = StampReport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        report.lines_read += 1;

        let span = find_marker_span(&line);
        if span.is_some() {
            report.lines_stamped += 1;
            log::debug!("stamping line {}", report.lines_read);
        }
        writer.write_all(&splice(&line, span, revision))?;
    }

    writer.flush()?;
    Ok(report)
}

/// Resolves the revision once from `source`, then stamps `reader` into `writer`.
///
/// Nothing is written if the revision cannot be resolved.
pub fn run<R, W>(source: &dyn RevisionSource, reader: R, writer: W) -> Result<StampReport>
where
    R: BufRead,
    W: Write,
{
    let revision = source
        .revision()
        .context("Failed to determine the current revision")?;
    log::debug!("Revision: {}", revision);

    let report = stamp_stream(reader, writer, &revision).context("Failed to stamp input")?;
    log::info!(
        "Stamped {} of {} line(s) with {}",
        report.lines_stamped,
        report.lines_read,
        revision
    );
    Ok(report)
}
