// File: crates/chart-core/src/series.rs
// Summary: Series and dataset model for labeled numeric values and scatter points.
// Notes:
// - `Series::try_new` enforces the label/value invariants up front; the renderers
//   re-check through `Series::validate` because the fields stay public.

use crate::axis::AxisSpec;
use crate::error::ValidationError;
use crate::scale::Domain;

/// Ordered (label, value) pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    /// Construct a series enforcing: matching lengths, non-empty, all values finite.
    pub fn try_new<L, S>(name: impl Into<String>, labels: L, values: Vec<f64>) -> Result<Self, ValidationError>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let series = Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            values,
        };
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.labels.len() != self.values.len() {
            return Err(ValidationError::LengthMismatch {
                series: self.name.clone(),
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        if self.values.is_empty() {
            return Err(ValidationError::EmptySeries { series: self.name.clone() });
        }
        if let Some((index, &value)) = self.values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NonFiniteValue { series: self.name.clone(), index, value });
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn total(&self) -> f64 { self.values.iter().sum() }

    /// (label, value) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

/// One or more series plus an optional value domain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub series: Vec<Series>,
    pub domain: Option<Domain>,
}

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series, domain: None }
    }

    pub fn single(series: Series) -> Self {
        Self::new(vec![series])
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Configured domain, or `[0, 100]` when unset.
    pub fn domain(&self) -> Domain {
        self.domain.unwrap_or_default()
    }

    /// Checks every series and the domain bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.series.is_empty() {
            return Err(ValidationError::EmptyDataset);
        }
        for s in &self.series {
            s.validate()?;
        }
        if let Some(d) = self.domain {
            Domain::new(d.min, d.max)?;
        }
        Ok(())
    }

    /// The only series, for chart types that take exactly one.
    pub fn sole_series(&self) -> Result<&Series, ValidationError> {
        match self.series.as_slice() {
            [s] => Ok(s),
            other => Err(ValidationError::SeriesCount { expected: 1, got: other.len() }),
        }
    }
}

/// How scatter points are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Points are already pixel coordinates; axis scales are cosmetic.
    #[default]
    Pixel,
    /// Points are data values mapped through the same scales that lay out the axis ticks.
    Domain,
}

/// Scatter input: raw (x, y) points, how to place them, and the two axis scales.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterData {
    pub points: Vec<(f64, f64)>,
    pub placement: Placement,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
}

impl ScatterData {
    /// Points given directly in pixel space.
    pub fn pixels(points: Vec<(f64, f64)>, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self { points, placement: Placement::Pixel, x_axis, y_axis }
    }

    /// Points given in the axes' data domains.
    pub fn values(points: Vec<(f64, f64)>, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self { points, placement: Placement::Domain, x_axis, y_axis }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.points.is_empty() {
            return Err(ValidationError::EmptySeries { series: "scatter".into() });
        }
        for (index, &(x, y)) in self.points.iter().enumerate() {
            for v in [x, y] {
                if !v.is_finite() {
                    return Err(ValidationError::NonFiniteValue { series: "scatter".into(), index, value: v });
                }
            }
        }
        for axis in [&self.x_axis, &self.y_axis] {
            Domain::new(axis.domain.min, axis.domain.max)?;
            if axis.tick_count == 0 {
                return Err(ValidationError::ZeroTickCount);
            }
        }
        Ok(())
    }
}
