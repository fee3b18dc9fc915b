// Scroll progress through a trigger region.
//
// A region is bounded by two markers such as `"top bottom"`: the first word
// picks a point on the trigger element, the second a point in the viewport.
// The marker is reached when those two points line up. Progress runs from 0
// at the start marker to 1 at the end marker.

use anyhow::{anyhow, bail, Context};
use std::str::FromStr;

/// A point along a vertical extent (element height or viewport height).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Fraction of the extent, 0 = top, 1 = bottom.
    Fraction(f64),
    /// Fixed offset from the top.
    Pixels(f64),
}

impl Edge {
    #[inline]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Edge::Fraction(f) => f * extent,
            Edge::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "top" => return Ok(Edge::Fraction(0.0)),
            "center" => return Ok(Edge::Fraction(0.5)),
            "bottom" => return Ok(Edge::Fraction(1.0)),
            _ => {}
        }
        if let Some(pct) = s.strip_suffix('%') {
            let v: f64 = pct
                .parse()
                .with_context(|| format!("invalid percentage '{}'", s))?;
            return Ok(Edge::Fraction(v / 100.0));
        }
        if let Some(px) = s.strip_suffix("px") {
            let v: f64 = px
                .parse()
                .with_context(|| format!("invalid pixel offset '{}'", s))?;
            return Ok(Edge::Pixels(v));
        }
        Err(anyhow!("unknown edge '{}'", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub element: Edge,
    pub viewport: Edge,
}

impl Marker {
    /// Distance the page still has to scroll before this marker is reached.
    /// Negative once it has been passed.
    #[inline]
    pub fn distance(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        rect_top + self.element.resolve(rect_height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Marker {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [element, viewport] = parts.as_slice() else {
            bail!("marker '{}' must have exactly two parts", s);
        };
        Ok(Marker {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

/// Clamped progress between two markers for the given layout.
pub fn progress_between(
    start: &Marker,
    end: &Marker,
    rect_top: f64,
    rect_height: f64,
    viewport_height: f64,
) -> f64 {
    let d_start = start.distance(rect_top, rect_height, viewport_height);
    let d_end = end.distance(rect_top, rect_height, viewport_height);
    let span = d_end - d_start;
    if span == 0.0 {
        return if d_start <= 0.0 { 1.0 } else { 0.0 };
    }
    (-d_start / span).clamp(0.0, 1.0)
}

/// Scrubbed trigger: reports progress only when it changes.
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    pub start: Marker,
    pub end: Marker,
    last_progress: f64,
}

impl ScrollTrigger {
    pub fn new(start: Marker, end: Marker) -> Self {
        Self {
            start,
            end,
            last_progress: 0.0,
        }
    }

    pub fn parse(start: &str, end: &str) -> anyhow::Result<Self> {
        let start = start
            .parse()
            .with_context(|| format!("start marker '{}'", start))?;
        let end = end.parse().with_context(|| format!("end marker '{}'", end))?;
        Ok(Self::new(start, end))
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.last_progress
    }

    /// Feed the trigger's current layout. Returns the new progress if it moved.
    pub fn update(&mut self, rect_top: f64, rect_height: f64, viewport_height: f64) -> Option<f64> {
        let p = progress_between(&self.start, &self.end, rect_top, rect_height, viewport_height);
        if p == self.last_progress || p.is_nan() {
            return None;
        }
        self.last_progress = p;
        Some(p)
    }
}
