use std::rc::Rc;

use crate::core::ChartSeries;

/// Ordered set of series declarations attached to one chart.
///
/// Membership is by `Rc` identity: two declarations with equal contents are
/// still distinct entries.
pub struct SeriesRegistry<T> {
    entries: Vec<Rc<dyn ChartSeries<T>>>,
}

impl<T> Default for SeriesRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> SeriesRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `series` unless it is already registered. Returns `true` when added.
    pub fn add(&mut self, series: Rc<dyn ChartSeries<T>>) -> bool {
        if self.contains(&series) {
            return false;
        }
        self.entries.push(series);
        true
    }

    /// Removes the first identity match. Returns `true` when removed.
    pub fn remove(&mut self, series: &Rc<dyn ChartSeries<T>>) -> bool {
        if let Some(position) = self
            .entries
            .iter()
            .position(|entry| Rc::ptr_eq(entry, series))
        {
            self.entries.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn contains(&self, series: &Rc<dyn ChartSeries<T>>) -> bool {
        self.entries.iter().any(|entry| Rc::ptr_eq(entry, series))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Rc<dyn ChartSeries<T>>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn ChartSeries<T>>> {
        self.entries.iter()
    }
}
