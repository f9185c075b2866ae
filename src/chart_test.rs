use serde_json::json;

use super::*;
use crate::theme::Theme;

fn dark() -> ChartPalette {
    ChartPalette::for_theme(Theme::Dark)
}

#[test]
fn apply_sets_global_defaults() {
    let mut registry = ChartRegistry::new();
    assert_eq!(registry.apply(&dark()), Ok(0));
    assert_eq!(
        registry.defaults(),
        ChartDefaults {
            color: Some("#cbd5e1".into()),
            border_color: Some("#334155".into()),
            background_color: Some("#1e293b".into()),
        }
    );
}

#[test]
fn apply_recolors_only_declared_blocks_on_x_and_y() {
    let mut registry = ChartRegistry::new();
    let id = registry
        .register_json(json!({
            "responsive": true,
            "scales": {
                "x": { "grid": { "color": "#000000" } },
                "y": { "ticks": {}, "beginAtZero": true },
                "r": { "grid": { "color": "#000000" }, "ticks": { "color": "#000000" } }
            }
        }))
        .unwrap();

    assert_eq!(registry.apply(&dark()), Ok(1));

    let scales = registry.instance(id).unwrap().options.scales.unwrap();
    assert_eq!(scales["x"].grid, Some(ColorOptions { color: Some("#334155".into()) }));
    assert_eq!(scales["x"].ticks, None);
    assert_eq!(scales["y"].grid, None);
    assert_eq!(scales["y"].ticks, Some(ColorOptions { color: Some("#cbd5e1".into()) }));
    assert_eq!(scales["r"].grid, Some(ColorOptions { color: Some("#000000".into()) }));
}

#[test]
fn every_instance_redraws_even_without_scales() {
    let mut registry = ChartRegistry::new();
    let pie = registry.register(ChartOptions::default());
    let bar = registry.register_json(json!({ "scales": { "y": { "grid": {} } } })).unwrap();

    assert_eq!(registry.apply(&dark()), Ok(2));
    assert_eq!(registry.apply(&ChartPalette::for_theme(Theme::Light)), Ok(2));

    assert_eq!(registry.instance(pie).unwrap().redraws, 2);
    assert_eq!(registry.instance(pie).unwrap().options.scales, None);
    let bar = registry.instance(bar).unwrap();
    assert_eq!(bar.redraws, 2);
    assert_eq!(bar.options.scales.unwrap()["y"].grid, Some(ColorOptions { color: Some("#e2e8f0".into()) }));
}

#[test]
fn register_json_rejects_malformed_scales() {
    let registry = ChartRegistry::new();
    let err = registry.register_json(json!({ "scales": 7 })).unwrap_err();
    assert!(matches!(err, ThemeError::Chart(_)));
    assert!(registry.is_empty());
}

#[test]
fn broken_chart_does_not_hold_back_the_rest() {
    let mut registry = ChartRegistry::new();
    let first = registry.register_json(json!({ "scales": { "x": { "grid": {} } } })).unwrap();
    let broken = registry.register_json(json!({ "scales": { "x": { "grid": {} } } })).unwrap();
    let last = registry.register_json(json!({ "scales": { "x": { "grid": {} } } })).unwrap();
    registry.detach(broken);

    assert_eq!(registry.apply(&dark()), Ok(2));

    for id in [first, last] {
        let instance = registry.instance(id).unwrap();
        assert_eq!(instance.redraws, 1);
        assert_eq!(instance.options.scales.unwrap()["x"].grid, Some(ColorOptions { color: Some("#334155".into()) }));
    }
    assert_eq!(registry.instance(broken).unwrap().redraws, 0);
}

#[test]
fn restyle_each_counts_successes_and_visits_every_item() {
    let mut visited = Vec::new();
    let redrawn = restyle_each([1, 2, 3, 4], |n| {
        visited.push(n);
        if n % 2 == 0 { Err(ThemeError::Chart(format!("chart {n} has no update()"))) } else { Ok(()) }
    });
    assert_eq!(redrawn, 2);
    assert_eq!(visited, vec![1, 2, 3, 4]);
}
