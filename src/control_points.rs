//! The editable list of control points.
//!
//! The order of the points defines the curve: the degree is len() - 1 and the
//! i-th point is weighted by the i-th Bernstein polynomial. Drawing a curve
//! needs at least two points, a lone point can still be shown.
use core::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::point::ControlPoint;
use crate::NativeFloat;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlPointSequence {
    points: Vec<ControlPoint>,
}

impl ControlPointSequence {
    pub fn new() -> Self {
        ControlPointSequence { points: Vec::new() }
    }

    /// Builds a sequence, validating every point.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = ControlPoint>,
    {
        let points = points
            .into_iter()
            .map(ControlPoint::validate)
            .collect::<Result<Vec<_>>>()?;
        Ok(ControlPointSequence { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Append a validated point.
    pub fn push(&mut self, point: ControlPoint) -> Result<()> {
        self.points.push(point.validate()?);
        Ok(())
    }

    /// Append a new point at the origin, the editor's blank row.
    pub fn push_default(&mut self) -> usize {
        self.points.push(ControlPoint::default());
        self.points.len() - 1
    }

    /// Replace the point at `index` with a validated one.
    pub fn set(&mut self, index: usize, point: ControlPoint) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(Error::PointIndex { index, len })?;
        *slot = point.validate()?;
        Ok(())
    }

    /// Remove the point at `index`, later points move down by one.
    pub fn remove(&mut self, index: usize) -> Result<ControlPoint> {
        if index >= self.points.len() {
            return Err(Error::PointIndex {
                index,
                len: self.points.len(),
            });
        }
        let removed = self.points.remove(index);
        debug!(index, remaining = self.points.len(), "removed control point");
        Ok(removed)
    }

    /// Degree of the curve through these points, None for an empty sequence.
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// Whether there are enough points for a curve.
    pub fn can_draw_curve(&self) -> bool {
        self.points.len() >= 2
    }

    /// Split into the scalar control values per axis, mapped by `f` first.
    pub fn axes_with<F>(&self, f: F) -> (Vec<NativeFloat>, Vec<NativeFloat>)
    where
        F: Fn(ControlPoint) -> ControlPoint,
    {
        self.points.iter().map(|p| f(*p)).map(|p| (p.x, p.y)).unzip()
    }

    /// Split into the scalar control values per axis.
    pub fn axes(&self) -> (Vec<NativeFloat>, Vec<NativeFloat>) {
        self.axes_with(|p| p)
    }
}

impl<'a> IntoIterator for &'a ControlPointSequence {
    type Item = &'a ControlPoint;
    type IntoIter = slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> slice::Iter<'a, ControlPoint> {
        self.points.iter()
    }
}
