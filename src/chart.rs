//! Chart re-styling.
//!
//! The controller never touches a charting library directly. It hands a
//! [`ChartPalette`] to a [`ThemeSink`], and the sink decides how to apply it:
//! in the browser that is Chart.js's global defaults and instance registry,
//! here it is [`ChartRegistry`], an in-process model with the same shape.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::colors::ChartPalette;
use crate::error::ThemeError;

/// Scale ids whose grid and tick colors follow the theme.
pub const THEMED_AXES: [&str; 2] = ["x", "y"];

/// Capability: accept a palette and apply it to every registered consumer.
pub trait ThemeSink {
    /// Apply `palette` to global defaults and all live instances, redrawing
    /// each. Returns the number of redrawn instances.
    fn apply(&mut self, palette: &ChartPalette) -> Result<usize, ThemeError>;
}

/// Library-wide default colors used by charts created after an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefaults {
    pub color: Option<String>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
}

/// A `grid` or `ticks` block inside a scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOptions {
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub grid: Option<ColorOptions>,
    pub ticks: Option<ColorOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub scales: Option<BTreeMap<String, ScaleOptions>>,
}

impl ChartOptions {
    /// Recolor the declared grid and tick blocks of the themed axes. Blocks
    /// the chart does not declare stay absent.
    pub fn restyle_axes(&mut self, palette: &ChartPalette) {
        let Some(scales) = self.scales.as_mut() else {
            return;
        };
        for axis in THEMED_AXES {
            let Some(scale) = scales.get_mut(axis) else {
                continue;
            };
            if let Some(grid) = scale.grid.as_mut() {
                grid.color = Some(palette.grid.to_owned());
            }
            if let Some(ticks) = scale.ticks.as_mut() {
                ticks.color = Some(palette.text.to_owned());
            }
        }
    }
}

/// Restyle every instance, logging and skipping the ones that fail so a
/// single broken chart cannot hold back the rest. Returns how many succeeded.
pub fn restyle_each<T>(
    instances: impl IntoIterator<Item = T>,
    mut restyle: impl FnMut(T) -> Result<(), ThemeError>,
) -> usize {
    let mut redrawn = 0;
    for (index, instance) in instances.into_iter().enumerate() {
        match restyle(instance) {
            Ok(()) => redrawn += 1,
            Err(e) => log::warn!("theme: skipping chart #{index}: {e}"),
        }
    }
    redrawn
}

/// One live chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartInstance {
    pub options: ChartOptions,
    /// Number of times the chart was redrawn.
    pub redraws: usize,
    /// Canvas already destroyed; redraws fail.
    pub detached: bool,
}

impl ChartInstance {
    fn redraw(&mut self) -> Result<(), ThemeError> {
        if self.detached {
            return Err(ThemeError::Chart("canvas detached".into()));
        }
        self.redraws += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ChartRuntime {
    defaults: ChartDefaults,
    instances: Vec<ChartInstance>,
}

/// In-process charting runtime. Clones share defaults and instances.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    runtime: Rc<RefCell<ChartRuntime>>,
}

impl ChartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart and return its index.
    pub fn register(&self, options: ChartOptions) -> usize {
        let mut runtime = self.runtime.borrow_mut();
        runtime.instances.push(ChartInstance { options, ..ChartInstance::default() });
        runtime.instances.len() - 1
    }

    /// Register a chart from Chart.js-shaped JSON options. Keys other than
    /// scale colors are ignored.
    pub fn register_json(&self, options: serde_json::Value) -> Result<usize, ThemeError> {
        let options: ChartOptions =
            serde_json::from_value(options).map_err(|e| ThemeError::Chart(format!("invalid chart options: {e}")))?;
        Ok(self.register(options))
    }

    /// Mark a chart as torn down so its next redraw fails.
    pub fn detach(&self, index: usize) {
        if let Some(instance) = self.runtime.borrow_mut().instances.get_mut(index) {
            instance.detached = true;
        }
    }

    #[must_use]
    pub fn defaults(&self) -> ChartDefaults {
        self.runtime.borrow().defaults.clone()
    }

    #[must_use]
    pub fn instance(&self, index: usize) -> Option<ChartInstance> {
        self.runtime.borrow().instances.get(index).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runtime.borrow().instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ThemeSink for ChartRegistry {
    fn apply(&mut self, palette: &ChartPalette) -> Result<usize, ThemeError> {
        let mut runtime = self.runtime.borrow_mut();
        runtime.defaults = ChartDefaults {
            color: Some(palette.text.to_owned()),
            border_color: Some(palette.grid.to_owned()),
            background_color: Some(palette.background.to_owned()),
        };
        Ok(restyle_each(runtime.instances.iter_mut(), |instance| {
            instance.options.restyle_axes(palette);
            instance.redraw()
        }))
    }
}
