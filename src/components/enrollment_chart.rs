//! Enrollment Chart Component
//!
//! Bar chart of enrollments per course using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;
use crate::stats::{self, ChartEntry};

/// Bar colors, cycled per course
const BAR_COLORS: [&str; 8] = [
    "#F59E0B", // Amber
    "#8B5CF6", // Violet
    "#0EA5E9", // Sky
    "#D946EF", // Fuchsia
    "#F43F5E", // Rose
    "#3B82F6", // Blue
    "#22C55E", // Green
    "#A855F7", // Purple
];

/// Enrollments-per-course bar chart
#[component]
pub fn EnrollmentChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the collections change
    create_effect(move |_| {
        let entries = stats::enrollment_chart_data(&state.courses.get(), &state.enrollments.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &entries);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-48 md:h-64 rounded-lg"
        />
    }
}

/// Draw the bar chart on canvas
fn draw_bars(canvas: &HtmlCanvasElement, entries: &[ChartEntry]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if entries.is_empty() {
        return;
    }

    // Integer y-axis: scale to a multiple of 5 ticks
    let max_count = entries
        .iter()
        .map(|entry| entry.enrollment_count)
        .max()
        .unwrap_or(0)
        .max(1);
    let step = ((max_count as f64 / 5.0).ceil() as usize).max(1);
    let y_max = (step * 5) as f64;

    // Horizontal grid lines and y labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("left");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{}", value as usize), 8.0, y + 4.0);
    }

    // Bars with centered x labels
    let slot = chart_width / entries.len() as f64;
    let bar_width = slot * 0.6;
    ctx.set_text_align("center");

    for (i, entry) in entries.iter().enumerate() {
        let bar_height = entry.enrollment_count as f64 / y_max * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        let color = BAR_COLORS[i % BAR_COLORS.len()];
        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&entry.label, x + bar_width / 2.0, height - 10.0);
    }
}
