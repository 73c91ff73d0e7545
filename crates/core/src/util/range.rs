use derive_more::Display;
use std::{fmt, ops::RangeInclusive};

/// A range between two integers, inclusive on both ends. This is the building
/// block for stepping over grid elements, e.g. every latitude row between two
/// corners of a selection.
///
/// `min` should never be greater than `max`. Use [SimpleRange::new_ordered] if
/// you don't know which of your two values is smaller.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct SimpleRange {
    min: i32,
    max: i32,
}

impl SimpleRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Create a range from two endpoints in either order. The smaller value
    /// always becomes the min, regardless of which one came first.
    pub fn new_ordered(a: i32, b: i32) -> Self {
        if a < b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Max minus min. Note that this is one less than the number of values
    /// that the range yields while iterating.
    pub fn count(&self) -> i32 {
        self.max - self.min
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Iterate over every value in this range, in ascending order
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Get everything *outside* this range, within a larger full range. The
    /// result wraps around: it starts at this range's max, runs up to the end
    /// of the full range, then picks back up at the start of the full range
    /// and runs to this range's min. Both endpoints of this range are kept in
    /// the output, so the two ranges share their boundary values.
    pub fn invert(&self, full_range: SimpleRange) -> Range {
        Range::Compound(vec![
            Self::new(self.max, full_range.max),
            Self::new(full_range.min, self.min),
        ])
    }
}

impl IntoIterator for SimpleRange {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterable sequence of integers made of one or more [SimpleRange]s. A
/// compound range is used when a selection crosses the seam at the end of the
/// coordinate space, e.g. longitude at ±180°, so it has to be split into two
/// sub-ranges that are iterated back to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Range {
    Simple(SimpleRange),
    /// Iterated in order, **not** sorted. An empty list yields nothing.
    Compound(Vec<SimpleRange>),
}

impl Range {
    /// Get the simple ranges that make up this range, in iteration order
    pub fn parts(&self) -> &[SimpleRange] {
        match self {
            Self::Simple(range) => std::slice::from_ref(range),
            Self::Compound(ranges) => ranges.as_slice(),
        }
    }

    /// Sum of [SimpleRange::count] for every part
    pub fn count(&self) -> i32 {
        self.parts().iter().map(SimpleRange::count).sum()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.parts().iter().any(|range| range.contains(value))
    }

    /// Iterate over every value in each part, one part after another
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.parts().iter().flat_map(SimpleRange::iter)
    }

    /// Get everything outside this range, within a full range. For a simple
    /// range this is the same as [SimpleRange::invert]. For a compound range,
    /// this returns the gaps between its parts, so inverting an inverted range
    /// gives back the original coverage. Boundary values are shared between
    /// a range and its inverse.
    pub fn invert(&self, full_range: SimpleRange) -> Range {
        match self {
            Self::Simple(range) => range.invert(full_range),
            Self::Compound(ranges) => {
                let mut sorted = ranges.clone();
                sorted.sort_unstable_by_key(SimpleRange::min);

                let mut gaps = Vec::new();
                let mut cursor = full_range.min;
                for range in sorted {
                    if range.min > cursor {
                        gaps.push(SimpleRange::new(cursor, range.min));
                    }
                    cursor = cursor.max(range.max);
                }
                if cursor < full_range.max {
                    gaps.push(SimpleRange::new(cursor, full_range.max));
                }

                match gaps.as_slice() {
                    [range] => Self::Simple(*range),
                    _ => Self::Compound(gaps),
                }
            }
        }
    }
}

impl From<SimpleRange> for Range {
    fn from(range: SimpleRange) -> Self {
        Self::Simple(range)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.parts().iter().enumerate() {
            if i > 0 {
                write!(f, " ++ ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}
