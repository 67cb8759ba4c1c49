//! Fixture element definitions.

/// A geographic point.
///
/// Serializes as a two-element `[lat, lng]` array rather than an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.lat, self.lng].serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [lat, lng] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self { lat, lng })
    }
}

/// A small triangle anchored near a sampled center point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: [Coordinate; 3],
}

/// The closed set of marker categories, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerKind {
    Restaurant,
    Hospital,
    School,
    Park,
    Bank,
}

impl MarkerKind {
    /// All categories, in the order markers cycle through them.
    pub const ALL: [Self; 5] = [
        Self::Restaurant,
        Self::Hospital,
        Self::School,
        Self::Park,
        Self::Bank,
    ];

    /// Returns the category assigned to the marker at `index`.
    #[must_use]
    pub const fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The wire label for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hospital => "hospital",
            Self::School => "school",
            Self::Park => "park",
            Self::Bank => "bank",
        }
    }
}

/// A categorized point of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub coordinates: Coordinate,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MarkerKind,
}

/// A pinned widget: a bare location with no other attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Widget {
    pub coordinates: Coordinate,
}

/// The closed set of line styles, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// All styles, in the order lines cycle through them.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Dashed, Self::Dotted];

    /// Returns the style assigned to the line at `index`.
    #[must_use]
    pub const fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The wire label for this style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// A styled segment between two sampled endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Coordinate,
    pub end: Coordinate,
    pub style: LineStyle,
}

/// The aggregate fixture document.
///
/// Field order is the wire order: `polygons`, `customMarkers`,
/// `pinnedWidgets`, `lines`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    pub polygons: Vec<Polygon>,
    #[cfg_attr(feature = "serde", serde(rename = "customMarkers"))]
    pub custom_markers: Vec<Marker>,
    #[cfg_attr(feature = "serde", serde(rename = "pinnedWidgets"))]
    pub pinned_widgets: Vec<Widget>,
    pub lines: Vec<Line>,
}

impl Dataset {
    /// Per-category element counts, for operator reporting.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            polygons: self.polygons.len(),
            custom_markers: self.custom_markers.len(),
            pinned_widgets: self.pinned_widgets.len(),
            lines: self.lines.len(),
        }
    }
}

/// Element counts per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub polygons: usize,
    pub custom_markers: usize,
    pub pinned_widgets: usize,
    pub lines: usize,
}
