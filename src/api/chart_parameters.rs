use serde::{Deserialize, Serialize};

use crate::core::{Dimension, XAxisType};
use crate::error::ChartResult;
use crate::options::{ChartOptions, Title, XAxis};

use super::validation::validate_chart_parameters;

/// Component parameters supplied by the owning UI tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartParameters {
    pub title: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub x_axis_type: Option<XAxisType>,
    pub debug: bool,
}

impl ChartParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_x_axis_type(mut self, axis_type: XAxisType) -> Self {
        self.x_axis_type = Some(axis_type);
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Writes the parameters into the base options.
    ///
    /// Size and debug always overwrite; the axis type only when set; an empty
    /// title removes the title section.
    pub(super) fn apply_to<T>(&self, options: &mut ChartOptions<T>) -> ChartResult<()> {
        validate_chart_parameters(self)?;

        options.debug = self.debug;
        options.chart.width = self.width;
        options.chart.height = self.height;

        if let Some(axis_type) = self.x_axis_type {
            options.xaxis.get_or_insert_with(XAxis::default).axis_type = Some(axis_type);
        }

        match self.title.as_deref().filter(|title| !title.is_empty()) {
            Some(text) => {
                options.title.get_or_insert_with(Title::default).text = Some(text.to_owned());
            }
            None => options.title = None,
        }
        Ok(())
    }
}
