/// An ordered series of samples to plot.
///
/// Sample order is significant: the i:th sample is drawn at the i:th
/// horizontal step. Uses `f64` for the values so that large magnitudes
/// (e.g. unix time) survive the trip to screen coordinates.
///
/// The chart only ever reads this; mutation stays with the owning caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ChartData {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_finite"))]
    points: Vec<f64>,
}

/// Keeps hand-written payloads from bypassing the non-finite filter in
/// [`ChartData::push`].
#[cfg(feature = "serde")]
fn deserialize_finite<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<f64> = serde::Deserialize::deserialize(deserializer)?;
    let data: ChartData = raw.into_iter().collect();
    Ok(data.points)
}

impl From<Vec<f64>> for ChartData {
    fn from(points: Vec<f64>) -> Self {
        points.into_iter().collect()
    }
}

impl From<&[f64]> for ChartData {
    fn from(points: &[f64]) -> Self {
        points.iter().copied().collect()
    }
}

impl<const N: usize> From<[f64; N]> for ChartData {
    fn from(points: [f64; N]) -> Self {
        points.into_iter().collect()
    }
}

impl FromIterator<f64> for ChartData {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut data = Self::default();
        data.extend(iter);
        data
    }
}

impl Extend<f64> for ChartData {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl ChartData {
    pub fn new(points: Vec<f64>) -> Self {
        Self::from(points)
    }

    /// From a series of `f32` values, e.g. sensor readings.
    pub fn from_ys_f32(ys: &[f32]) -> Self {
        ys.iter().map(|&y| f64::from(y)).collect()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a sample.
    ///
    /// Non-finite values (NaN, ±∞) are dropped with a warning instead of
    /// being stored: a single NaN would otherwise poison every derived
    /// vertex handed to the tessellator.
    pub fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.points.push(value);
        } else {
            log::warn!("Ignoring non-finite chart sample {value:?}");
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Smallest sample, or `None` if there are no samples.
    pub fn min(&self) -> Option<f64> {
        self.points.iter().copied().reduce(f64::min)
    }

    /// Largest sample, or `None` if there are no samples.
    pub fn max(&self) -> Option<f64> {
        self.points.iter().copied().reduce(f64::max)
    }
}
