//! Layout template resolution (spec §4.3).

use std::collections::HashMap;

use serde_json::Value;

use sizzle_spec::enums::LayoutTemplate;
use sizzle_spec::manifest::Resolution;
use sizzle_spec::scene::Rect;

use crate::config::{f64_or, str_or, u64_or};
use crate::error::LayoutError;

/// Resolves an abstract layout template to a `slot_name -> pixel rect` map
/// (spec §4.3). Rectangles are integer-rounded; last-row/last-column slots
/// are clamped so summed widths/heights equal the canvas exactly.
pub fn resolve_layout(
    template: LayoutTemplate,
    config: &HashMap<String, Value>,
    canvas: Resolution,
) -> Result<HashMap<String, Rect>, LayoutError> {
    match template {
        LayoutTemplate::HeroCenter => Ok(resolve_hero_center(config, canvas)),
        LayoutTemplate::SplitPanel => Ok(resolve_split_panel(config, canvas)),
        LayoutTemplate::MasonryGrid => Ok(resolve_masonry_grid(config, canvas)),
        LayoutTemplate::FullBleed => resolve_full_bleed(config, canvas),
        LayoutTemplate::DeviceMockup => resolve_device_mockup(config, canvas),
    }
}

fn resolve_hero_center(config: &HashMap<String, Value>, canvas: Resolution) -> HashMap<String, Rect> {
    let padding = f64_or(config, "padding", 80.0);
    let max_w_fraction = f64_or(config, "max_w_fraction", 0.6);
    let max_h_fraction = f64_or(config, "max_h_fraction", 0.6);

    let w = (canvas.w as f64 - 2.0 * padding).min(canvas.w as f64 * max_w_fraction);
    let h = (canvas.h as f64 - 2.0 * padding).min(canvas.h as f64 * max_h_fraction);
    let w = w.max(0.0).round() as i64;
    let h = h.max(0.0).round() as i64;
    let x = ((canvas.w as i64) - w) / 2;
    let y = ((canvas.h as i64) - h) / 2;

    HashMap::from([("hero".to_string(), Rect { x, y, w, h })])
}

fn resolve_split_panel(config: &HashMap<String, Value>, canvas: Resolution) -> HashMap<String, Rect> {
    let ratio = f64_or(config, "ratio", 0.5).clamp(0.0, 1.0);
    let gap = f64_or(config, "gap", 0.0).max(0.0);

    let left_w = ((canvas.w as f64) * ratio - gap / 2.0).max(0.0).round() as i64;
    let right_x = left_w + gap.round() as i64;
    let right_w = (canvas.w as i64 - right_x).max(0);

    HashMap::from([
        (
            "left".to_string(),
            Rect { x: 0, y: 0, w: left_w, h: canvas.h as i64 },
        ),
        (
            "right".to_string(),
            Rect { x: right_x, y: 0, w: right_w, h: canvas.h as i64 },
        ),
    ])
}

fn resolve_masonry_grid(config: &HashMap<String, Value>, canvas: Resolution) -> HashMap<String, Rect> {
    let columns = u64_or(config, "columns", 2).max(1);
    let rows = u64_or(config, "rows", 2).max(1);
    let gap = f64_or(config, "gap", 8.0).max(0.0);

    let col_widths = split_with_gap(canvas.w as i64, columns, gap.round() as i64);
    let row_heights = split_with_gap(canvas.h as i64, rows, gap.round() as i64);

    let mut slots = HashMap::new();
    let mut y = 0i64;
    for (row_idx, row_h) in row_heights.iter().enumerate() {
        let mut x = 0i64;
        for (col_idx, col_w) in col_widths.iter().enumerate() {
            let index = row_idx as u64 * columns + col_idx as u64;
            slots.insert(
                format!("cell_{index}"),
                Rect { x, y, w: *col_w, h: *row_h },
            );
            x += col_w + gap.round() as i64;
        }
        y += row_h + gap.round() as i64;
    }
    slots
}

/// Splits `total` pixels into `count` cells separated by `gap`, each cell
/// floor-sized except the last, which absorbs the rounding remainder so the
/// cells (ignoring gaps) sum to `total` minus the gap space exactly.
fn split_with_gap(total: i64, count: u64, gap: i64) -> Vec<i64> {
    let usable = (total - gap * (count as i64 - 1).max(0)).max(0);
    let base = usable / count as i64;
    let remainder = usable - base * count as i64;
    (0..count)
        .map(|i| if i as i64 == count as i64 - 1 { base + remainder } else { base })
        .collect()
}

fn resolve_full_bleed(
    config: &HashMap<String, Value>,
    canvas: Resolution,
) -> Result<HashMap<String, Rect>, LayoutError> {
    let padding = f64_or(config, "padding", 40.0);
    let overlay_w_fraction = f64_or(config, "overlay_w_fraction", 0.3);
    let overlay_h_fraction = f64_or(config, "overlay_h_fraction", 0.2);
    let position = str_or(config, "overlay_position", "bottom-center");

    let overlay_w = (canvas.w as f64 * overlay_w_fraction).round() as i64;
    let overlay_h = (canvas.h as f64 * overlay_h_fraction).round() as i64;

    let (h_part, v_part) = split_nine_way(position)?;
    let x = match h_part {
        HPart::Left => padding.round() as i64,
        HPart::Center => (canvas.w as i64 - overlay_w) / 2,
        HPart::Right => canvas.w as i64 - overlay_w - padding.round() as i64,
    };
    let y = match v_part {
        VPart::Top => padding.round() as i64,
        VPart::Center => (canvas.h as i64 - overlay_h) / 2,
        VPart::Bottom => canvas.h as i64 - overlay_h - padding.round() as i64,
    };

    Ok(HashMap::from([
        (
            "media".to_string(),
            Rect { x: 0, y: 0, w: canvas.w as i64, h: canvas.h as i64 },
        ),
        (
            "overlay".to_string(),
            Rect { x, y, w: overlay_w, h: overlay_h },
        ),
    ]))
}

enum HPart {
    Left,
    Center,
    Right,
}
enum VPart {
    Top,
    Center,
    Bottom,
}

fn split_nine_way(position: &str) -> Result<(HPart, VPart), LayoutError> {
    let (v_str, h_str) = match position {
        "top-left" => ("top", "left"),
        "top-center" => ("top", "center"),
        "top-right" => ("top", "right"),
        "center-left" => ("center", "left"),
        "center" => ("center", "center"),
        "center-right" => ("center", "right"),
        "bottom-left" => ("bottom", "left"),
        "bottom-center" => ("bottom", "center"),
        "bottom-right" => ("bottom", "right"),
        other => {
            return Err(LayoutError::InvalidConfig {
                field: "overlay_position".to_string(),
                detail: format!("unknown 9-way position '{other}'"),
            })
        }
    };
    let h = match h_str {
        "left" => HPart::Left,
        "center" => HPart::Center,
        _ => HPart::Right,
    };
    let v = match v_str {
        "top" => VPart::Top,
        "center" => VPart::Center,
        _ => VPart::Bottom,
    };
    Ok((h, v))
}

fn resolve_device_mockup(
    config: &HashMap<String, Value>,
    canvas: Resolution,
) -> Result<HashMap<String, Rect>, LayoutError> {
    let ratio = f64_or(config, "ratio", 0.45).clamp(0.0, 1.0);
    let device_padding = f64_or(config, "device_padding", 24.0);
    let device_side = str_or(config, "device_side", "left");

    let device_w = (canvas.w as f64 * ratio).round() as i64;
    let content_w = canvas.w as i64 - device_w;

    let (device_x, content_x) = match device_side {
        "left" => (0, device_w),
        "right" => (content_w, 0),
        other => {
            return Err(LayoutError::InvalidConfig {
                field: "device_side".to_string(),
                detail: format!("expected 'left' or 'right', got '{other}'"),
            })
        }
    };

    let inset = device_padding.round() as i64;
    let device_rect = Rect {
        x: device_x + inset,
        y: inset,
        w: (device_w - 2 * inset).max(0),
        h: (canvas.h as i64 - 2 * inset).max(0),
    };
    let content_rect = Rect {
        x: content_x,
        y: 0,
        w: content_w,
        h: canvas.h as i64,
    };

    Ok(HashMap::from([
        ("device".to_string(), device_rect),
        ("content".to_string(), content_rect),
    ]))
}
