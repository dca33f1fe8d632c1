//! Extraction of hand-authored region bodies from a previously generated file.

use std::collections::BTreeMap;

use super::{MarkerKind, Markers};
use crate::{Error, MarkerProblem, Result};

/// Immutable mapping from bespoke name to the text authored between its markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreservationStore {
    slots: BTreeMap<String, String>,
}

impl PreservationStore {
    /// An empty store (first generation).
    pub fn new() -> Self {
        Self::default()
    }

    /// The preserved body of `name`, markers excluded.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Names of all preserved regions, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<N: Into<String>, B: Into<String>> FromIterator<(N, B)> for PreservationStore {
    fn from_iter<I: IntoIterator<Item = (N, B)>>(iter: I) -> Self {
        Self {
            slots: iter
                .into_iter()
                .map(|(name, body)| (name.into(), body.into()))
                .collect(),
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

struct OpenRegion<'a> {
    name: &'a str,
    marker_offset: usize,
    marker_len: usize,
    body_start: usize,
}

/// Build a [`PreservationStore`] from the text of a previously generated file.
///
/// A region body runs from the byte after its BEGIN line up to the first byte
/// of its END line, so it keeps its own indentation and final line break.
///
/// An END marker must close the innermost open region. Only outermost regions
/// are stored; balanced regions nested inside them are part of the enclosing
/// body. Any unbalanced, interleaved, reopened or repeated marker is reported
/// as [`Error::MalformedMarker`] and no store is produced.
///
/// A leading byte order mark is skipped.
pub fn extract(src: &str, filename: &str, markers: &Markers) -> Result<PreservationStore> {
    let mut slots = BTreeMap::new();
    let mut open: Vec<OpenRegion<'_>> = Vec::new();
    let (text, mut offset) = match src.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => (rest, BYTE_ORDER_MARK.len_utf8()),
        None => (src, 0),
    };

    let malformed = |name: &str, problem, at: usize, len: usize| {
        Error::malformed_marker(name, problem, src, filename, at, len)
    };

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(marker) = markers.parse(line) else {
            continue;
        };
        let line_len = line.trim_end().len();

        match marker.kind {
            MarkerKind::Begin => {
                if open.iter().any(|region| region.name == marker.name) {
                    return Err(malformed(
                        marker.name,
                        MarkerProblem::Reopened,
                        line_start,
                        line_len,
                    ));
                }
                open.push(OpenRegion {
                    name: marker.name,
                    marker_offset: line_start,
                    marker_len: line_len,
                    body_start: offset,
                });
            }
            MarkerKind::End => {
                let innermost = open.last().map(|region| region.name);
                match innermost {
                    Some(name) if name == marker.name => {}
                    Some(name) if open.iter().any(|region| region.name == marker.name) => {
                        return Err(malformed(
                            marker.name,
                            MarkerProblem::Interleaved {
                                innermost: name.to_string(),
                            },
                            line_start,
                            line_len,
                        ));
                    }
                    _ => {
                        return Err(malformed(
                            marker.name,
                            MarkerProblem::UnexpectedEnd,
                            line_start,
                            line_len,
                        ));
                    }
                }

                let Some(region) = open.pop() else {
                    continue;
                };
                if !open.is_empty() {
                    continue;
                }

                let body = &src[region.body_start..line_start];
                if slots
                    .insert(region.name.to_string(), body.to_string())
                    .is_some()
                {
                    return Err(malformed(
                        region.name,
                        MarkerProblem::Repeated,
                        region.marker_offset,
                        region.marker_len,
                    ));
                }
            }
        }
    }

    if let Some(region) = open.last() {
        return Err(malformed(
            region.name,
            MarkerProblem::Unclosed,
            region.marker_offset,
            region.marker_len,
        ));
    }

    tracing::debug!(file = filename, regions = slots.len(), "extracted bespoke regions");
    Ok(PreservationStore { slots })
}
