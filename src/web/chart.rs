//! Chart.js global runtime as a [`ThemeSink`].
//!
//! Mirrors [`crate::chart::ChartRegistry`]: defaults first, then every live
//! instance gets its declared `x`/`y` grid and tick blocks recolored and is
//! redrawn with `update()`. An instance that throws is logged and skipped.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::js_error;
use crate::chart::{THEMED_AXES, ThemeSink, restyle_each};
use crate::colors::ChartPalette;
use crate::error::ThemeError;

/// Handle to the global `Chart` constructor.
pub struct ChartJsSink {
    chart: JsValue,
}

impl ChartJsSink {
    /// Look up the global `Chart`. `None` when the library is not loaded.
    #[must_use]
    pub fn detect() -> Option<Self> {
        match Reflect::get(&js_sys::global(), &JsValue::from_str("Chart")) {
            Ok(chart) if chart.is_function() || chart.is_object() => Some(Self { chart }),
            Ok(_) => None,
            Err(e) => {
                log::debug!("theme: probing Chart failed: {}", js_error(e));
                None
            }
        }
    }

    /// Live instances; Chart.js 2 keeps an array, later versions an id-keyed object.
    fn instances(&self) -> Result<Vec<JsValue>, ThemeError> {
        let instances = get(&self.chart, "instances")?;
        if Array::is_array(&instances) {
            Ok(Array::from(&instances).iter().collect())
        } else if instances.is_object() {
            Ok(Object::values(instances.unchecked_ref::<Object>()).iter().collect())
        } else {
            Ok(Vec::new())
        }
    }
}

impl ThemeSink for ChartJsSink {
    fn apply(&mut self, palette: &ChartPalette) -> Result<usize, ThemeError> {
        let defaults = get(&self.chart, "defaults")?;
        if defaults.is_object() {
            set(&defaults, "color", palette.text)?;
            set(&defaults, "borderColor", palette.grid)?;
            set(&defaults, "backgroundColor", palette.background)?;
        }

        let instances = self.instances()?;
        Ok(restyle_each(&instances, |chart| {
            restyle_axes(chart, palette)?;
            redraw(chart)
        }))
    }
}

fn restyle_axes(chart: &JsValue, palette: &ChartPalette) -> Result<(), ThemeError> {
    let options = get(chart, "options")?;
    if !options.is_object() {
        return Ok(());
    }
    let scales = get(&options, "scales")?;
    if !scales.is_object() {
        return Ok(());
    }
    for axis in THEMED_AXES {
        let scale = get(&scales, axis)?;
        if !scale.is_object() {
            continue;
        }
        let grid = get(&scale, "grid")?;
        if grid.is_object() {
            set(&grid, "color", palette.grid)?;
        }
        let ticks = get(&scale, "ticks")?;
        if ticks.is_object() {
            set(&ticks, "color", palette.text)?;
        }
    }
    Ok(())
}

fn redraw(chart: &JsValue) -> Result<(), ThemeError> {
    let update = get(chart, "update")?;
    let Some(update) = update.dyn_ref::<Function>() else {
        return Err(ThemeError::Chart("chart instance has no update()".into()));
    };
    update.call0(chart).map_err(|e| ThemeError::Chart(js_error(e)))?;
    Ok(())
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, ThemeError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|e| ThemeError::Chart(js_error(e)))
}

fn set(target: &JsValue, key: &str, value: &str) -> Result<(), ThemeError> {
    Reflect::set(target, &JsValue::from_str(key), &JsValue::from_str(value))
        .map_err(|e| ThemeError::Chart(js_error(e)))?;
    Ok(())
}
