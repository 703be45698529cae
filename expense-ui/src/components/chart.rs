//! Chart Component
//!
//! Category donut chart on an HTML5 canvas, with hover tooltip and legend.

use leptos::*;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::{ChartInstance, ChartRenderer, DonutGeometry};
use crate::format::format_amount;
use crate::state::use_dashboard_state;

const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 400;

/// Category breakdown chart
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let renderer = Rc::new(RefCell::new(ChartRenderer::new()));
    let (legend, set_legend) = create_signal(Vec::<(String, &'static str, String)>::new());

    // Rebuild the chart whenever the list changes
    let renderer_for_effect = renderer.clone();
    create_effect(move |_| {
        let expenses = state.expenses.get();
        let mut renderer = renderer_for_effect.borrow_mut();
        let instance = renderer.replace(&expenses);

        set_legend.set(
            instance
                .chart
                .segments()
                .iter()
                .map(|s| (s.category.clone(), s.color, format_amount(s.amount)))
                .collect(),
        );

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, instance);
        }
    });

    let renderer_for_move = renderer.clone();
    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (x, y) = canvas_point(&canvas, &ev);

        let mut renderer = renderer_for_move.borrow_mut();
        if renderer.hover(&geometry(&canvas), x, y) {
            if let Some(instance) = renderer.instance() {
                draw_chart(&canvas, instance);
            }
        }
    };

    let on_mouse_leave = move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let mut renderer = renderer.borrow_mut();
        if renderer.leave() {
            if let Some(instance) = renderer.instance() {
                draw_chart(&canvas, instance);
            }
        }
    };

    view! {
        <div class="relative">
            <canvas
                id="category-chart"
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full max-w-md mx-auto"
                on:mousemove=on_mouse_move
                on:mouseleave=on_mouse_leave
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    legend.get()
                        .into_iter()
                        .map(|(category, color, amount)| view! {
                            <div class="flex items-center space-x-2" title=amount>
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{category}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn geometry(canvas: &HtmlCanvasElement) -> DonutGeometry {
    DonutGeometry::fit(canvas.width() as f64, canvas.height() as f64)
}

/// Pointer position in canvas pixels, accounting for CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &web_sys::MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };

    (
        (ev.client_x() as f64 - rect.left()) * scale_x,
        (ev.client_y() as f64 - rect.top()) * scale_y,
    )
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, instance: &ChartInstance) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let geometry = geometry(canvas);

    ctx.clear_rect(0.0, 0.0, width, height);

    let chart = &instance.chart;
    if chart.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", geometry.cx, geometry.cy);
        return;
    }

    ctx.set_stroke_style(&"#ffffff".into());
    ctx.set_line_width(2.0);

    for (idx, segment) in chart.segments().iter().enumerate() {
        let (start, end) = segment.angles();
        // hovered slice pops out a little
        let radius = if instance.hovered == Some(idx) {
            geometry.radius + 6.0
        } else {
            geometry.radius
        };

        ctx.begin_path();
        let _ = ctx.arc(geometry.cx, geometry.cy, radius, start, end);
        let _ = ctx.arc_with_anticlockwise(
            geometry.cx,
            geometry.cy,
            geometry.inner_radius(),
            end,
            start,
            true,
        );
        ctx.close_path();

        ctx.set_fill_style(&segment.color.into());
        ctx.fill();
        ctx.stroke();
    }

    // Tooltip in the hole
    if let Some(label) = instance.tooltip() {
        ctx.set_fill_style(&"rgba(0, 0, 0, 0.8)".into());
        ctx.begin_path();
        let _ = ctx.arc(geometry.cx, geometry.cy, geometry.inner_radius() - 4.0, 0.0, TAU);
        ctx.fill();

        ctx.set_fill_style(&"#ffffff".into());
        ctx.set_font("13px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&label, geometry.cx, geometry.cy + 4.0);
    }
}
