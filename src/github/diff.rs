//! New-file line ranges covered by a unified diff patch.
//!
//! GitHub only accepts review comments on lines that appear in the pull
//! request diff. Each hunk header `@@ -a,b +c,d @@` covers lines `c` to
//! `c + d - 1` of the head revision; an omitted `d` means one line and
//! `d == 0` means the hunk only removes lines.

use std::ops::RangeInclusive;

/// Head-revision line ranges of every hunk in a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HunkRanges(Vec<RangeInclusive<u32>>);

impl HunkRanges {
    /// Parses the hunk headers of a unified diff patch.
    ///
    /// Lines that are not well-formed hunk headers are skipped.
    #[must_use]
    pub fn parse(patch: &str) -> Self {
        Self(patch.lines().filter_map(parse_hunk_header).collect())
    }

    /// Returns true when `start..=end` lies within a single hunk.
    #[must_use]
    pub fn contains_span(&self, start: u32, end: u32) -> bool {
        start <= end
            && self
                .0
                .iter()
                .any(|range| range.contains(&start) && range.contains(&end))
    }
}

fn parse_hunk_header(line: &str) -> Option<RangeInclusive<u32>> {
    let header = line.strip_prefix("@@ -")?;
    let (_, after_old) = header.split_once(" +")?;
    let (new_range, _) = after_old.split_once(" @@")?;

    let (start, count) = match new_range.split_once(',') {
        Some((start, count)) => (start.parse::<u32>().ok()?, count.parse::<u32>().ok()?),
        None => (new_range.parse::<u32>().ok()?, 1),
    };

    if count == 0 {
        return None;
    }
    let end = start.checked_add(count - 1)?;
    Some(start..=end)
}
