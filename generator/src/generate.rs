//! Fixture builders and dataset assembly.

use elements::{Bounds, Coordinate, Dataset, Line, LineStyle, Marker, MarkerKind, Polygon, Widget};

use crate::counts::DatasetCounts;
use crate::rng::Rng;

/// Seed for the canonical fixture artifact.
pub const DEFAULT_SEED: u64 = 42;

/// Degrees between a polygon's center and each triangle vertex.
pub const TRIANGLE_OFFSET: f64 = 0.002;

/// Deterministic fixture generator.
///
/// The random source is consumed in a fixed order: each build method
/// documents its draw sequence, and [`Generator::dataset`] builds
/// categories in the fixed order polygons, markers, widgets, lines.
/// Reordering any of these draws changes the output.
#[derive(Debug)]
pub struct Generator {
    rng: Rng,
    bounds: Bounds,
}

impl Generator {
    /// Creates a generator sampling from the default bounds.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, Bounds::default())
    }

    /// Creates a generator sampling from custom bounds.
    #[must_use]
    pub const fn with_bounds(seed: u64, bounds: Bounds) -> Self {
        Self {
            rng: Rng::new(seed),
            bounds,
        }
    }

    /// Samples one coordinate: latitude first, then longitude.
    pub fn coordinate(&mut self) -> Coordinate {
        let lat = self.rng.range_f64(self.bounds.lat_min, self.bounds.lat_max);
        let lng = self.rng.range_f64(self.bounds.lng_min, self.bounds.lng_max);
        Coordinate { lat, lng }
    }

    /// Samples one center coordinate and builds the fixed triangle around
    /// it: north-west, south-east, north-east, in that order.
    pub fn polygon(&mut self) -> Polygon {
        let center = self.coordinate();
        Polygon {
            points: [
                Coordinate {
                    lat: center.lat + TRIANGLE_OFFSET,
                    lng: center.lng - TRIANGLE_OFFSET,
                },
                Coordinate {
                    lat: center.lat - TRIANGLE_OFFSET,
                    lng: center.lng + TRIANGLE_OFFSET,
                },
                Coordinate {
                    lat: center.lat + TRIANGLE_OFFSET,
                    lng: center.lng + TRIANGLE_OFFSET,
                },
            ],
        }
    }

    /// Samples one coordinate and pairs it with `kind`.
    pub fn marker(&mut self, kind: MarkerKind) -> Marker {
        Marker {
            coordinates: self.coordinate(),
            kind,
        }
    }

    /// Samples one bare coordinate.
    pub fn widget(&mut self) -> Widget {
        Widget {
            coordinates: self.coordinate(),
        }
    }

    /// Samples two independent coordinates (start first) and pairs them
    /// with `style`.
    pub fn line(&mut self, style: LineStyle) -> Line {
        let start = self.coordinate();
        let end = self.coordinate();
        Line { start, end, style }
    }

    /// Assembles the aggregate document.
    ///
    /// Categories are built in wire order, labels assigned by cycling the
    /// closed sets by element index.
    pub fn dataset(&mut self, counts: &DatasetCounts) -> Dataset {
        let mut dataset = Dataset {
            polygons: Vec::with_capacity(counts.polygons),
            custom_markers: Vec::with_capacity(counts.markers),
            pinned_widgets: Vec::with_capacity(counts.widgets),
            lines: Vec::with_capacity(counts.lines),
        };
        for _ in 0..counts.polygons {
            dataset.polygons.push(self.polygon());
        }
        for index in 0..counts.markers {
            dataset
                .custom_markers
                .push(self.marker(MarkerKind::cycle(index)));
        }
        for _ in 0..counts.widgets {
            dataset.pinned_widgets.push(self.widget());
        }
        for index in 0..counts.lines {
            dataset.lines.push(self.line(LineStyle::cycle(index)));
        }
        dataset
    }
}

/// Generates the canonical dataset for `seed`.
#[must_use]
pub fn generate(seed: u64) -> Dataset {
    Generator::new(seed).dataset(&DatasetCounts::default())
}
