//! Track geometry and pointer region classification.

use crate::constants::{DRAG_STEP, VALUE_MAX, VALUE_MIN};

/// Horizontal extent of the rendered track, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            width: right - left,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Where the pointer sits relative to the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    Left,
    #[default]
    Middle,
    Right,
}

impl Region {
    /// Boundary positions belong to `Middle`.
    #[inline]
    pub fn classify(x: f64, bbox: &BoundingBox) -> Region {
        if x < bbox.left {
            Region::Left
        } else if x > bbox.right {
            Region::Right
        } else {
            Region::Middle
        }
    }

    #[inline]
    pub fn is_edge(self) -> bool {
        self != Region::Middle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Left => "left",
            Region::Middle => "middle",
            Region::Right => "right",
        }
    }
}

/// Distance past the edge the pointer is beyond; 0 inside the track.
#[inline]
pub fn one_sided_displacement(x: f64, bbox: &BoundingBox) -> f64 {
    match Region::classify(x, bbox) {
        Region::Left => bbox.left - x,
        Region::Right => x - bbox.right,
        Region::Middle => 0.0,
    }
}

/// Source of the track's current layout. `None` while the track is not
/// mounted or has no layout yet.
pub trait TrackGeometry {
    fn bounding_box(&self) -> Option<BoundingBox>;
}

impl TrackGeometry for BoundingBox {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(*self)
    }
}

impl TrackGeometry for Option<BoundingBox> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        *self
    }
}

impl<F> TrackGeometry for F
where
    F: Fn() -> Option<BoundingBox>,
{
    fn bounding_box(&self) -> Option<BoundingBox> {
        self()
    }
}

/// Raw drag value for a pointer X over the track: linear over the track,
/// clamped to the value range and quantised to the drag step.
pub fn drag_value_at(x: f64, bbox: &BoundingBox) -> Option<f64> {
    if !(bbox.width > 0.0) || !x.is_finite() {
        return None;
    }
    let t = ((x - bbox.left) / bbox.width).clamp(0.0, 1.0);
    let raw = VALUE_MIN + t * (VALUE_MAX - VALUE_MIN);
    let stepped = (raw / DRAG_STEP).round() * DRAG_STEP;
    Some(stepped.clamp(VALUE_MIN, VALUE_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> BoundingBox {
        BoundingBox::new(100.0, 300.0)
    }

    #[test]
    fn boundaries_belong_to_middle() {
        let b = track();
        assert_eq!(Region::classify(100.0, &b), Region::Middle);
        assert_eq!(Region::classify(300.0, &b), Region::Middle);
        assert_eq!(Region::classify(99.999, &b), Region::Left);
        assert_eq!(Region::classify(300.001, &b), Region::Right);
    }

    #[test]
    fn displacement_is_one_sided() {
        let b = track();
        assert_eq!(one_sided_displacement(70.0, &b), 30.0);
        assert_eq!(one_sided_displacement(340.0, &b), 40.0);
        assert_eq!(one_sided_displacement(200.0, &b), 0.0);
    }

    #[test]
    fn drag_value_spans_the_track() {
        let b = track();
        assert_eq!(drag_value_at(100.0, &b), Some(0.0));
        assert_eq!(drag_value_at(300.0, &b), Some(100.0));
        assert_eq!(drag_value_at(0.0, &b), Some(0.0));
        assert_eq!(drag_value_at(1000.0, &b), Some(100.0));
        let v = drag_value_at(247.2, &b).unwrap();
        assert!((v - 73.6).abs() < 1e-9, "got {v}");
    }

    #[test]
    fn drag_value_needs_layout() {
        let empty = BoundingBox::new(50.0, 50.0);
        assert_eq!(drag_value_at(60.0, &empty), None);
        assert_eq!(drag_value_at(f64::NAN, &track()), None);
    }

    #[test]
    fn closures_and_options_provide_geometry() {
        let missing: Option<BoundingBox> = None;
        assert_eq!(missing.bounding_box(), None);
        let q = || Some(track());
        assert_eq!(q.bounding_box(), Some(track()));
    }
}
