//! Locating the insertion region of a template and swapping rendered
//! fixtures into it.
//!
//! The region starts at the marker comment and ends right before the first
//! `</div>` that follows it. That closing tag, and everything after it, is
//! kept. On a document produced by an earlier run the anchor is the
//! generated marker, and the region also covers the blocks that run wrote.

use std::{error::Error, fmt};

use crate::fragment::skeleton;

pub const MARKER: &str = "<!-- Aqui os jogos serão listados diretamente, sem JavaScript -->";
pub const GENERATED_MARKER: &str = "<!-- Jogos gerados automaticamente -->";
pub const CLOSING_TAG: &str = "</div>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    /// Neither marker comment appears in the template.
    MarkerNotFound,
    /// No `</div>` at or after byte offset `after`.
    ClosingTagNotFound { after: usize },
    /// A generated block starting at byte offset `at` is cut short.
    UnterminatedBlock { at: usize },
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkerNotFound => write!(
                f,
                "template contains neither {MARKER:?} nor {GENERATED_MARKER:?}"
            ),
            Self::ClosingTagNotFound { after } => {
                write!(f, "no {CLOSING_TAG:?} after the marker (searched from byte {after})")
            }
            Self::UnterminatedBlock { at } => {
                write!(f, "generated block at byte {at} has no matching {CLOSING_TAG:?}")
            }
        }
    }
}

impl Error for SpliceError {}

/// Byte span `start..end` of the template that gets replaced. `start` is
/// the marker, `end` is the start of the closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

pub fn locate(template: &str) -> Result<Region, SpliceError> {
    if let Some(start) = template.find(MARKER) {
        let end = find_closing_tag(template, start + MARKER.len())?;
        log::debug!("marker at {start}, closing tag at {end}");
        return Ok(Region { start, end });
    }
    let start = template
        .find(GENERATED_MARKER)
        .ok_or(SpliceError::MarkerNotFound)?;
    let mut from = start + GENERATED_MARKER.len();
    let mut skipped = 0usize;
    while let Some(block_end) = generated_block_end(template, from)? {
        from = block_end;
        skipped += 1;
    }
    let end = find_closing_tag(template, from)?;
    log::debug!("generated marker at {start}, {skipped} earlier block(s), closing tag at {end}");
    Ok(Region { start, end })
}

/// Replaces the located region with the generated marker followed by
/// `fragments`.
pub fn splice(template: &str, fragments: &str) -> Result<String, SpliceError> {
    let Region { start, end } = locate(template)?;
    let mut out = String::with_capacity(
        template.len() - (end - start) + GENERATED_MARKER.len() + fragments.len(),
    );
    out.push_str(&template[..start]);
    out.push_str(GENERATED_MARKER);
    out.push_str(fragments);
    out.push_str(&template[end..]);
    Ok(out)
}

fn find_closing_tag(template: &str, from: usize) -> Result<usize, SpliceError> {
    template[from..]
        .find(CLOSING_TAG)
        .map(|i| from + i)
        .ok_or(SpliceError::ClosingTagNotFound { after: from })
}

/// If a block written by [crate::render_fixtures] starts exactly at `from`,
/// the offset just past it.
///
/// Blocks are matched against the fixed fragment text, not by counting
/// tags, so markup inside fixture values does not shift the boundary. A
/// value containing the closing line of the fragment is still ambiguous.
fn generated_block_end(template: &str, from: usize) -> Result<Option<usize>, SpliceError> {
    let pieces = skeleton();
    let Some((first, rest)) = pieces.split_first() else {
        return Ok(None);
    };
    if !template[from..].starts_with(first) {
        return Ok(None);
    }
    let mut pos = from + first.len();
    for piece in rest {
        pos = template[pos..]
            .find(piece)
            .map(|i| pos + i + piece.len())
            .ok_or(SpliceError::UnterminatedBlock { at: from })?;
    }
    Ok(Some(pos))
}
