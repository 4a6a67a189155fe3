//! Cairo-based execution of draw lists.

use super::commands::{DrawList, DrawOp, Fill, LayerBounds, RadialGradient};
use super::color::Color;
use super::outline::HEART_OUTLINE;
use crate::error::RenderError;

/// Executes a draw list on a Cairo context.
///
/// The context state is saved before the translation and restored afterwards,
/// even when an operation fails, so settings never leak to later drawing
/// operations. Layers opened by the list are balanced by the list itself; an
/// unbalanced `BeginLayer` is closed here before returning.
pub fn render_draw_list(ctx: &cairo::Context, list: &DrawList) -> Result<(), RenderError> {
    if list.is_empty() {
        return Ok(());
    }

    with_saved(ctx, || {
        ctx.translate(list.translate.0, list.translate.1);

        let mut open_layers: Vec<f64> = Vec::new();
        let result = list.ops.iter().try_for_each(|op| match *op {
            DrawOp::FillOutline { scale, fill } => fill_outline(ctx, scale, &fill),
            DrawOp::BeginLayer { bounds, alpha } => {
                begin_layer(ctx, bounds)?;
                open_layers.push(alpha);
                Ok(())
            }
            DrawOp::StrokeAndFillOutline {
                scale,
                color,
                line_width,
            } => stroke_and_fill_outline(ctx, scale, color, line_width),
            DrawOp::EraseOutline { scale } => erase_outline(ctx, scale),
            DrawOp::EndLayer => match open_layers.pop() {
                Some(alpha) => end_layer(ctx, alpha),
                None => {
                    log::warn!("EndLayer without matching BeginLayer, ignoring");
                    Ok(())
                }
            },
        });

        // Every open layer is closed; the first error wins.
        open_layers
            .into_iter()
            .rev()
            .fold(result, |result, alpha| result.and(end_layer(ctx, alpha)))
    })
}

/// Runs `body` between `save` and `restore`. The restore happens whether or
/// not `body` succeeds; an error from `body` takes precedence.
fn with_saved<F>(ctx: &cairo::Context, body: F) -> Result<(), RenderError>
where
    F: FnOnce() -> Result<(), RenderError>,
{
    ctx.save()?;
    let result = body();
    let restored = ctx.restore();
    result?;
    Ok(restored?)
}

/// Fill the outline interior with a solid color or radial gradient.
fn fill_outline(ctx: &cairo::Context, scale: f64, fill: &Fill) -> Result<(), RenderError> {
    with_saved(ctx, || {
        ctx.scale(scale, scale);
        HEART_OUTLINE.append_to(ctx);
        match fill {
            Fill::Solid(color) => ctx.set_source_rgba(color.r, color.g, color.b, color.a),
            Fill::Radial(gradient) => ctx.set_source(&radial_pattern(gradient))?,
        }
        ctx.set_operator(cairo::Operator::Over);
        ctx.fill()?;
        Ok(())
    })
}

fn radial_pattern(gradient: &RadialGradient) -> cairo::RadialGradient {
    let (cx, cy) = gradient.center;
    let pattern = cairo::RadialGradient::new(cx, cy, 0.0, cx, cy, gradient.radius);
    let (inner, outer) = (gradient.inner, gradient.outer);
    pattern.add_color_stop_rgba(0.0, inner.r, inner.g, inner.b, inner.a);
    pattern.add_color_stop_rgba(1.0, outer.r, outer.g, outer.b, outer.a);
    // Hold the outer color beyond the radius.
    pattern.set_extend(cairo::Extend::Pad);
    pattern
}

/// Clip to the layer bounds and redirect drawing into an isolated group.
///
/// Leaves one saved state on the context; `end_layer` restores it.
fn begin_layer(ctx: &cairo::Context, bounds: LayerBounds) -> Result<(), RenderError> {
    ctx.save()?;
    ctx.rectangle(
        bounds.left,
        bounds.top,
        bounds.right - bounds.left,
        bounds.bottom - bounds.top,
    );
    ctx.clip();
    ctx.push_group();
    Ok(())
}

fn end_layer(ctx: &cairo::Context, alpha: f64) -> Result<(), RenderError> {
    let composited = ctx
        .pop_group_to_source()
        .and_then(|()| ctx.paint_with_alpha(alpha.clamp(0.0, 1.0)));
    let restored = ctx.restore();
    composited?;
    Ok(restored?)
}

fn stroke_and_fill_outline(
    ctx: &cairo::Context,
    scale: f64,
    color: Color,
    line_width: f64,
) -> Result<(), RenderError> {
    with_saved(ctx, || {
        ctx.scale(scale, scale);
        HEART_OUTLINE.append_to(ctx);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_line_width(line_width);
        ctx.set_line_join(cairo::LineJoin::Miter);
        ctx.fill_preserve()?;
        ctx.stroke()?;
        Ok(())
    })
}

/// `DestOut` clears destination pixels under the source and, unlike
/// `Operator::Out`, leaves pixels outside the path untouched.
fn erase_outline(ctx: &cairo::Context, scale: f64) -> Result<(), RenderError> {
    with_saved(ctx, || {
        ctx.scale(scale, scale);
        HEART_OUTLINE.append_to(ctx);
        ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
        ctx.set_operator(cairo::Operator::DestOut);
        ctx.fill()?;
        Ok(())
    })
}

/// Creates an ARGB32 surface sized to whole pixels.
pub fn create_surface(width: f64, height: f64) -> Result<cairo::ImageSurface, RenderError> {
    let (w, h) = (width.round(), height.round());
    if !(1.0..=i32::MAX as f64).contains(&w) || !(1.0..=i32::MAX as f64).contains(&h) {
        return Err(RenderError::InvalidSurfaceSize { width, height });
    }
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        w as i32,
        h as i32,
    )?)
}
