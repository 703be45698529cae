//! Category Donut Chart
//!
//! Chart model behind the canvas component: per-category aggregation,
//! segment geometry, tooltip text and pointer hit-testing. Segments start
//! at 12 o'clock and run clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::format::format_amount;
use crate::model::Expense;

/// Segment colours, reused in order once exhausted
pub const PALETTE: [&str; 10] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6",
    "#1abc9c", "#34495e", "#e67e22", "#27ae60", "#8e44ad",
];

/// Inner radius as a fraction of the outer radius
pub const CUTOUT: f64 = 0.6;

/// Colour for the segment at `index`.
pub fn segment_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One category slice
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub category: String,
    pub amount: f64,
    pub color: &'static str,
    /// Fraction of the full turn where the slice begins, in `[0, 1)`
    pub start: f64,
    /// Fraction of the full turn where the slice ends
    pub end: f64,
}

impl Segment {
    /// Canvas angles (radians) of the slice.
    pub fn angles(&self) -> (f64, f64) {
        (
            self.start * TAU - FRAC_PI_2,
            self.end * TAU - FRAC_PI_2,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonutChart {
    segments: Vec<Segment>,
    total: f64,
}

impl DonutChart {
    /// Group amounts by exact category, in order of first appearance.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for expense in expenses {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, sum)) => *sum += expense.amount,
                None => totals.push((expense.category.clone(), expense.amount)),
            }
        }

        let total: f64 = totals.iter().map(|(_, sum)| sum).sum();

        let mut cursor = 0.0;
        let mut segments: Vec<Segment> = totals
            .into_iter()
            .enumerate()
            .map(|(idx, (category, amount))| {
                let share = if total > 0.0 { amount / total } else { 0.0 };
                let segment = Segment {
                    category,
                    amount,
                    color: segment_color(idx),
                    start: cursor,
                    end: cursor + share,
                };
                cursor += share;
                segment
            })
            .collect();

        // close the ring exactly so hit-testing never falls off the end
        if total > 0.0 {
            if let Some(last) = segments.last_mut() {
                last.end = 1.0;
            }
        }

        Self { segments, total }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Share of the chart total, rounded to the nearest whole percent.
    pub fn percent(&self, segment: &Segment) -> i64 {
        let total = self.total();
        if total <= 0.0 {
            return 0;
        }
        (segment.amount / total * 100.0).round() as i64
    }

    /// `Food: ₹19.50 (49%)`
    pub fn tooltip_label(&self, segment: &Segment) -> String {
        format!(
            "{}: {} ({}%)",
            segment.category,
            format_amount(segment.amount),
            self.percent(segment)
        )
    }

    /// Index of the segment under `(x, y)`, if the point lies on the ring.
    pub fn segment_at(&self, geometry: &DonutGeometry, x: f64, y: f64) -> Option<usize> {
        let dx = x - geometry.cx;
        let dy = y - geometry.cy;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < geometry.inner_radius() || distance > geometry.radius {
            return None;
        }

        // canvas y grows downward, so atan2 already runs clockwise
        let turn = ((dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU)) / TAU;

        self.segments
            .iter()
            .position(|s| turn >= s.start && turn < s.end)
    }
}

/// Placement of the donut on the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl DonutGeometry {
    /// Centre the donut in a `width` x `height` area with some padding.
    pub fn fit(width: f64, height: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: (width.min(height) / 2.0 - 10.0).max(0.0),
        }
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius * CUTOUT
    }
}

/// A drawn chart plus its hover state
#[derive(Clone, Debug, PartialEq)]
pub struct ChartInstance {
    pub chart: DonutChart,
    pub hovered: Option<usize>,
}

impl ChartInstance {
    /// Tooltip text for the hovered segment.
    pub fn tooltip(&self) -> Option<String> {
        let idx = self.hovered?;
        self.chart
            .segments()
            .get(idx)
            .map(|segment| self.chart.tooltip_label(segment))
    }
}

/// Owns the current chart; every refresh replaces it wholesale.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    instance: Option<ChartInstance>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current chart (and its hover state) and build a new one.
    pub fn replace(&mut self, expenses: &[Expense]) -> &ChartInstance {
        self.destroy();
        self.instance.insert(ChartInstance {
            chart: DonutChart::from_expenses(expenses),
            hovered: None,
        })
    }

    pub fn destroy(&mut self) {
        self.instance = None;
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    /// Update the hovered segment. Returns `true` if it changed.
    pub fn hover(&mut self, geometry: &DonutGeometry, x: f64, y: f64) -> bool {
        let Some(instance) = self.instance.as_mut() else {
            return false;
        };

        let hovered = instance.chart.segment_at(geometry, x, y);
        let changed = hovered != instance.hovered;
        instance.hovered = hovered;
        changed
    }

    /// Clear hover, e.g. when the pointer leaves the canvas.
    pub fn leave(&mut self) -> bool {
        match self.instance.as_mut() {
            Some(instance) if instance.hovered.is_some() => {
                instance.hovered = None;
                true
            }
            _ => false,
        }
    }
}
