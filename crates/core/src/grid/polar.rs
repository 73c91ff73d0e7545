use crate::util::range::SimpleRange;
use derive_more::Display;
use std::f32::consts::TAU;

/// One of the two coordinates (latitude or longitude) of a tile on the grid.
/// The same value can be expressed three ways:
///
/// - **Angle**: continuous angle in radians, relative to the equator (for
///   latitude) or the prime meridian (for longitude)
/// - **Segment**: fractional grid coordinate, as used by the host grid. One
///   whole segment is one major grid cell, and each segment is split into
///   five elements. Segments run from `-N` to `N`, offset by `0.1` towards zero
///   so that they never land on zero itself.
/// - **Element**: integer index of the smallest visible tile. Runs from `-N`
///   to `N`, skipping zero. Element zero is the equator or prime meridian line
///   itself, and is never a valid tile.
///
/// Converting angle to element is lossy (it snaps to a tile), but converting
/// element to angle and back always gives the original element.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "{}", element)]
pub struct PolarCoordinate {
    angle: f32,
    segment: f32,
    element: i32,
}

impl PolarCoordinate {
    /// Number of elements in one whole segment
    pub const ELEMENTS_PER_SEGMENT: i32 = 5;
    /// Shifts segment values half an element towards zero, e.g. element 3 is
    /// segment `0.5` rather than `0.6`
    const SEGMENT_OFFSET: f32 = -0.1;

    /// Snap an angle to the grid. `segments` is the number of segments in a
    /// full circle along this axis.
    ///
    /// The segment is always derived from the snapped element, never from the
    /// raw angle, so all three values stay consistent with each other.
    pub fn from_angle(angle: f32, segments: i32) -> Self {
        let element = Self::segment_to_element(angle / TAU * segments as f32);
        Self {
            angle,
            segment: Self::element_to_segment(element),
            element,
        }
    }

    /// Build a coordinate from a grid element. `segments` is the number of
    /// segments in a full circle along this axis.
    pub fn from_element(element: i32, segments: i32) -> Self {
        let segment = Self::element_to_segment(element);
        Self {
            angle: segment / segments as f32 * TAU,
            segment,
            element,
        }
    }

    /// Get the span of elements covering a full circle of the given number of
    /// segments. This is symmetric around zero.
    pub fn element_range(segments: i32) -> SimpleRange {
        let element_mid = (segments / 2) * Self::ELEMENTS_PER_SEGMENT;
        SimpleRange::new(-element_mid, element_mid)
    }

    /// Convert a fractional segment to an element. Positive values round up
    /// and everything else rounds down. This has to match the host grid
    /// exactly, otherwise tile indices won't line up.
    pub fn segment_to_element(segment: f32) -> i32 {
        let element = segment * Self::ELEMENTS_PER_SEGMENT as f32;
        if element > 0.0 {
            element.ceil() as i32
        } else {
            element.floor() as i32
        }
    }

    /// Convert an element to its (offset) segment value
    pub fn element_to_segment(element: i32) -> f32 {
        let segment = element as f32 / Self::ELEMENTS_PER_SEGMENT as f32;
        let offset = if segment > 0.0 {
            Self::SEGMENT_OFFSET
        } else {
            -Self::SEGMENT_OFFSET
        };
        segment + offset
    }

    /// Angle in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn segment(&self) -> f32 {
        self.segment
    }

    pub fn element(&self) -> i32 {
        self.element
    }

    /// Does this coordinate refer to an actual tile? Element zero is the
    /// equator/prime meridian, which falls between two tiles.
    pub fn is_valid(&self) -> bool {
        self.element != 0
    }
}
