//! Cairo-based rendering functions for shapes.

use super::shape::{Point, Shape};
use super::style::StrokeStyle;
use crate::util::{self, RectBounds};

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], style: &StrokeStyle) {
    for shape in shapes {
        render_shape(ctx, shape, style);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, style: &StrokeStyle) {
    match shape {
        Shape::Arrow { start, end } => render_arrow(ctx, *start, *end, style),
        Shape::Rectangle { start, end } => render_rectangle(ctx, *start, *end, style),
        Shape::Freehand { points } => render_freehand_borrowed(ctx, points, style),
    }
}

/// Render freehand stroke (polyline through points)
///
/// Accepts a borrowed slice so the in-progress path can be drawn on every
/// repaint without cloning it.
pub fn render_freehand_borrowed(ctx: &cairo::Context, points: &[Point], style: &StrokeStyle) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    style.color.apply(ctx);
    ctx.set_line_width(style.freehand_thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }

    let _ = ctx.stroke();
}

/// Render an arrow: round-capped shaft plus a filled triangular head at `end`.
fn render_arrow(ctx: &cairo::Context, start: Point, end: Point, style: &StrokeStyle) {
    style.color.apply(ctx);
    ctx.set_line_width(style.shape_thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();

    let [left, right] = util::arrowhead_points(start, end, style.arrow_length, style.arrow_angle);

    ctx.move_to(end.x, end.y);
    ctx.line_to(left.x, left.y);
    ctx.line_to(right.x, right.y);
    ctx.close_path();
    let _ = ctx.fill_preserve();
    let _ = ctx.stroke();
}

/// Render a rectangle outline, normalizing the raw corners first.
fn render_rectangle(ctx: &cairo::Context, start: Point, end: Point, style: &StrokeStyle) {
    let bounds = RectBounds::from_corners(start, end);

    style.color.apply(ctx);
    ctx.set_line_width(style.shape_thickness);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.rectangle(bounds.left, bounds.top, bounds.width(), bounds.height());
    let _ = ctx.stroke();
}

/// Clears the whole target to fully transparent.
pub fn clear_transparent(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
