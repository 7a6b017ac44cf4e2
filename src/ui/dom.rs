//! Browser rendering glue
//!
//! Draws the wheel onto a 2D canvas and keeps the DOM lists/counters in sync
//! with the sim state. All functions are best-effort: a missing element or a
//! canvas error degrades rendering, never the game.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document};

use super::wheel;

/// Longest name rendered on a segment before truncation
const MAX_LABEL_CHARS: usize = 12;

/// Draw the wheel at the given rotation (radians). `size` is the square
/// canvas edge in CSS pixels; the wheel fills it with a small margin.
pub fn draw_wheel(ctx: &CanvasRenderingContext2d, participants: &[String], rotation: f32, size: f64, glow: bool) {
    let center = size / 2.0;
    let radius = center - 25.0;

    ctx.clear_rect(0.0, 0.0, size, size);

    if participants.is_empty() {
        draw_empty_wheel(ctx, center, radius);
        return;
    }

    let seg = wheel::segment_angle(participants.len()) as f64;

    ctx.save();
    let _ = ctx.translate(center, center);
    let _ = ctx.rotate(rotation as f64);

    for (index, participant) in participants.iter().enumerate() {
        let start = wheel::segment_start(index, participants.len()) as f64;
        let colors = wheel::SEGMENT_COLORS[index % wheel::SEGMENT_COLORS.len()];

        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, radius, start, start + seg);
        ctx.line_to(0.0, 0.0);
        if let Ok(gradient) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, radius) {
            let _ = gradient.add_color_stop(0.0, colors[0]);
            let _ = gradient.add_color_stop(1.0, colors[1]);
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        ctx.fill();
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.5)");
        ctx.set_line_width(3.0);
        ctx.stroke();

        // Name along the segment, pointing outward
        ctx.save();
        let _ = ctx.rotate(start + seg / 2.0);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str("white");
        ctx.set_font(if participants.len() > 20 {
            "bold 13px sans-serif"
        } else {
            "bold 16px sans-serif"
        });
        let _ = ctx.fill_text(&truncate_label(participant), radius - 25.0, 0.0);
        ctx.restore();
    }
    ctx.restore();

    // Outer ring and hub are not rotated
    ctx.begin_path();
    let _ = ctx.arc(center, center, radius + 5.0, 0.0, std::f64::consts::TAU);
    ctx.set_stroke_style_str("rgba(251, 191, 36, 0.8)");
    ctx.set_line_width(6.0);
    if glow {
        ctx.set_shadow_color("rgba(251, 191, 36, 0.8)");
        ctx.set_shadow_blur(20.0);
    }
    ctx.stroke();
    ctx.set_shadow_blur(0.0);

    ctx.begin_path();
    let _ = ctx.arc(center, center, 40.0, 0.0, std::f64::consts::TAU);
    if let Ok(gradient) = ctx.create_radial_gradient(center, center, 0.0, center, center, 40.0) {
        let _ = gradient.add_color_stop(0.0, "#4B5563");
        let _ = gradient.add_color_stop(1.0, "#1F2937");
        ctx.set_fill_style_canvas_gradient(&gradient);
    }
    ctx.fill();
    ctx.set_stroke_style_str("#FCD34D");
    ctx.set_line_width(5.0);
    ctx.stroke();
}

fn draw_empty_wheel(ctx: &CanvasRenderingContext2d, center: f64, radius: f64) {
    ctx.begin_path();
    let _ = ctx.arc(center, center, radius, 0.0, std::f64::consts::TAU);
    if let Ok(gradient) = ctx.create_radial_gradient(center, center, 0.0, center, center, radius) {
        let _ = gradient.add_color_stop(0.0, "rgba(139, 92, 246, 0.3)");
        let _ = gradient.add_color_stop(1.0, "rgba(59, 130, 246, 0.1)");
        ctx.set_fill_style_canvas_gradient(&gradient);
    }
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
    ctx.set_line_width(4.0);
    ctx.stroke();

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font("bold 22px sans-serif");
    let _ = ctx.fill_text("Waiting for participants...", center, center);
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let short: String = name.chars().take(MAX_LABEL_CHARS - 2).collect();
        format!("{short}...")
    } else {
        name.to_string()
    }
}

/// Replace the children of the element `id` with one `<li>` per name.
/// Names are set as text content, never markup.
pub fn render_name_list(document: &Document, id: &str, names: &[String]) {
    let Some(list) = document.get_element_by_id(id) else {
        return;
    };
    list.set_inner_html("");
    for name in names {
        if let Ok(item) = document.create_element("li") {
            item.set_text_content(Some(name));
            let _ = list.append_child(&item);
        }
    }
}

/// Set the text content of the element `id`, if present
pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Toggle the `hidden` class on the element `id`
pub fn set_visible(document: &Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
    }
}

/// Enable/disable a button element
pub fn set_enabled(document: &Document, id: &str, enabled: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        if enabled {
            let _ = el.remove_attribute("disabled");
        } else {
            let _ = el.set_attribute("disabled", "");
        }
    }
}

/// Look up the canvas 2D context for the element `id`
pub fn canvas_context(document: &Document, id: &str) -> Option<(web_sys::HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: web_sys::HtmlCanvasElement =
        document.get_element_by_id(id)?.dyn_into().ok()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;
    Some((canvas, ctx))
}
