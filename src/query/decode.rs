//! Parsing graph request segments back into form values.
//!
//! The inverse of `encode`: used to restore the form from a shared URL.
//! Decoding is best-effort and returns `None` on anything the encoder could
//! not have produced. The grammar is ambiguous for values that happen to end
//! in a marker letter (a time like `1200T` reads as a grid top), which is
//! inherent in the compact format; the encoder's value domains avoid it in
//! practice.

/// One decoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Algorithm(String),
    Grid(DecodedGrid),
    Time(DecodedTime),
}

/// Grid bounds as they appeared in the segment.
///
/// Absent edges stay `None`; the server itself treats a missing `bottom` as
/// equal to `top` and a missing `right` as equal to `left`, but filling that
/// in here would change the form on a decode/encode round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedGrid {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Time range as it appeared in the segment.
///
/// A bare value means a single time point, so both fields are set to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTime {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Decodes a single path segment, dispatching on its shape: `ALG` prefix,
/// then grid markers, then time.
pub fn decode_segment(segment: &str) -> Option<Segment> {
    if segment.is_empty() {
        return None;
    }
    if let Some(name) = segment.strip_prefix("ALG") {
        if name.is_empty() {
            return None;
        }
        return Some(Segment::Algorithm(name.to_string()));
    }
    if let Some(grid) = decode_grid(segment) {
        return Some(Segment::Grid(grid));
    }
    decode_time(segment).map(Segment::Time)
}

/// Parses `<top>T[<bottom>B][<left>L[<right>R]]` where at least one clause
/// is present and the whole segment is consumed.
fn decode_grid(segment: &str) -> Option<DecodedGrid> {
    let mut grid = DecodedGrid::default();
    let mut rest = segment;

    if let Some((value, tail)) = take_coord(rest, 'T') {
        grid.top = Some(value);
        rest = tail;
        if let Some((value, tail)) = take_coord(rest, 'B') {
            grid.bottom = Some(value);
            rest = tail;
        }
    }
    if let Some((value, tail)) = take_coord(rest, 'L') {
        grid.left = Some(value);
        rest = tail;
        if let Some((value, tail)) = take_coord(rest, 'R') {
            grid.right = Some(value);
            rest = tail;
        }
    }

    if !rest.is_empty() || (grid.top.is_none() && grid.left.is_none()) {
        return None;
    }
    Some(grid)
}

/// Splits `<coord><marker>` off the front of `s`. The coordinate must be
/// non-empty and numeric-looking (sign, digits, decimal point).
fn take_coord(s: &str, marker: char) -> Option<(String, &str)> {
    let idx = s.find(marker)?;
    let value = &s[..idx];
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.') {
        return None;
    }
    Some((value.to_string(), &s[idx + marker.len_utf8()..]))
}

/// Parses a time segment: `<start>ST<end>ED`, `<start>ST`, `<end>ED`, or a
/// bare single time point.
fn decode_time(segment: &str) -> Option<DecodedTime> {
    if let Some(stripped) = segment.strip_suffix("ED") {
        if let Some((start, end)) = stripped.split_once("ST") {
            if start.is_empty() || end.is_empty() {
                return None;
            }
            return Some(DecodedTime {
                start: Some(start.to_string()),
                end: Some(end.to_string()),
            });
        }
        if stripped.is_empty() {
            return None;
        }
        return Some(DecodedTime {
            start: None,
            end: Some(stripped.to_string()),
        });
    }
    if let Some(start) = segment.strip_suffix("ST") {
        if start.is_empty() {
            return None;
        }
        return Some(DecodedTime {
            start: Some(start.to_string()),
            end: None,
        });
    }
    // Bare value: a single time point
    Some(DecodedTime {
        start: Some(segment.to_string()),
        end: Some(segment.to_string()),
    })
}
