//! The drawing surface: committed shapes, the in-progress gesture and repaint requests.

use super::dirty::DirtyTracker;
use super::render::{clear_transparent, render_freehand_borrowed, render_shape, render_shapes};
use super::shape::Shape;
use super::style::StrokeStyle;
use crate::input::{DrawingMode, PointerAction, PointerEvent};
use crate::util::Rect;
use log::{debug, trace};

/// Owns the shape list and turns pointer gestures into shapes.
///
/// Every gesture follows `Press -> Move* -> Release`. Arrow and rectangle
/// gestures keep two endpoints and move the end point; freehand gestures
/// append every position to an open path. A shape is committed to the list
/// exactly once, on release.
///
/// The surface never repaints itself. Mutations raise a repaint request
/// (see [`DrawingSurface::take_repaint_request`]) and accumulate damage
/// regions that the host consumes on its own schedule.
#[derive(Debug)]
pub struct DrawingSurface {
    mode: DrawingMode,
    /// Committed shapes; insertion order is z-order
    shapes: Vec<Shape>,
    /// At most one uncommitted shape, always of the kind `mode` selects
    in_progress: Option<Shape>,
    style: StrokeStyle,
    width: i32,
    height: i32,
    needs_redraw: bool,
    dirty_tracker: DirtyTracker,
    /// Damage of the in-progress shape as last requested for repaint
    last_provisional_bounds: Option<Rect>,
}

impl DrawingSurface {
    /// Creates an empty surface with the given bounds.
    ///
    /// The first repaint covers the whole surface.
    pub fn new(style: StrokeStyle, width: i32, height: i32) -> Self {
        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();
        Self {
            mode: DrawingMode::None,
            shapes: Vec::new(),
            in_progress: None,
            style,
            width,
            height,
            needs_redraw: true,
            dirty_tracker,
            last_provisional_bounds: None,
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Committed shapes in chronological (and z) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The shape the current gesture is building, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        self.in_progress.as_ref()
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Updates the bounds used for snapshots and full-surface damage.
    pub fn resize(&mut self, width: i32, height: i32) {
        if (width, height) != (self.width, self.height) {
            debug!("Drawing surface resized to {width}x{height}");
            self.width = width;
            self.height = height;
            self.request_full_repaint();
        }
    }

    /// Switches the drawing mode.
    ///
    /// Committed shapes are never touched. Switching to a different mode while a
    /// gesture is in flight discards the in-progress shape, so the rest of that
    /// gesture is ignored rather than reinterpreted as the new mode's shape.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if mode == self.mode {
            return;
        }

        debug!("Drawing mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;

        if self.in_progress.take().is_some() {
            debug!("Discarding in-progress shape after mode change");
            self.dirty_tracker
                .mark_optional_rect(self.last_provisional_bounds.take());
            self.needs_redraw = true;
        }
    }

    /// Routes one pointer event through the gesture state machine.
    ///
    /// Returns `false` without touching any state when the mode is
    /// [`DrawingMode::None`], so the host can pass the event to the content
    /// underneath. Every other event is consumed and returns `true`.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        if !self.mode.is_drawing() {
            return false;
        }

        match event.action {
            PointerAction::Press => self.begin_shape(event),
            PointerAction::Move => self.extend_shape(event),
            PointerAction::Release => self.commit_shape(),
        }

        true
    }

    fn begin_shape(&mut self, event: PointerEvent) {
        let point = event.point();
        let shape = match self.mode {
            DrawingMode::Arrow => Shape::Arrow {
                start: point,
                end: point,
            },
            DrawingMode::Rectangle => Shape::Rectangle {
                start: point,
                end: point,
            },
            DrawingMode::Freehand => Shape::Freehand {
                points: vec![point],
            },
            DrawingMode::None => return,
        };

        if self.in_progress.is_some() {
            debug!("Press while a gesture was active; restarting shape");
            self.dirty_tracker
                .mark_optional_rect(self.last_provisional_bounds.take());
        }

        trace!("Begin {:?} at ({}, {})", self.mode, point.x, point.y);
        // Press marks no damage; these bounds are cleared on the first move or a discard.
        self.last_provisional_bounds = shape.bounding_box(&self.style);
        self.in_progress = Some(shape);
    }

    fn extend_shape(&mut self, event: PointerEvent) {
        let point = event.point();
        match self.in_progress.as_mut() {
            Some(Shape::Arrow { end, .. } | Shape::Rectangle { end, .. }) => *end = point,
            Some(Shape::Freehand { points }) => points.push(point),
            None => return,
        }

        self.mark_provisional_damage();
        self.needs_redraw = true;
    }

    fn commit_shape(&mut self) {
        let Some(shape) = self.in_progress.take() else {
            return;
        };

        self.dirty_tracker
            .mark_optional_rect(self.last_provisional_bounds.take());
        self.dirty_tracker.mark_shape(&shape, &self.style);
        self.shapes.push(shape);
        self.needs_redraw = true;

        debug!("Committed shape #{}", self.shapes.len());
    }

    /// Replaces the previous provisional damage with the current one.
    fn mark_provisional_damage(&mut self) {
        let bounds = self
            .in_progress
            .as_ref()
            .and_then(|shape| shape.bounding_box(&self.style));
        self.dirty_tracker
            .mark_optional_rect(self.last_provisional_bounds.take());
        self.dirty_tracker.mark_optional_rect(bounds);
        self.last_provisional_bounds = bounds;
    }

    /// Removes every committed shape and any in-progress shape.
    pub fn clear(&mut self) {
        debug!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.in_progress = None;
        self.last_provisional_bounds = None;
        self.request_full_repaint();
    }

    fn request_full_repaint(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Whether a repaint has been requested and not yet consumed.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consumes the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Whether any damage is waiting to be drained.
    pub fn has_damage(&self) -> bool {
        !self.dirty_tracker.is_clean()
    }

    /// Drains the damage regions accumulated since the previous call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.dirty_tracker.take_regions(self.width, self.height)
    }

    /// Draws every committed shape, then the in-progress shape on top.
    pub fn render(&self, ctx: &cairo::Context) {
        render_shapes(ctx, &self.shapes, &self.style);

        match &self.in_progress {
            Some(Shape::Freehand { points }) => render_freehand_borrowed(ctx, points, &self.style),
            Some(shape) => render_shape(ctx, shape, &self.style),
            None => {}
        }
    }

    /// Clears and redraws only the given regions of `ctx`.
    ///
    /// Pixels outside `regions` are left untouched.
    pub fn render_regions(&self, ctx: &cairo::Context, regions: &[Rect]) {
        if regions.is_empty() {
            return;
        }

        let _ = ctx.save();
        for rect in regions {
            ctx.rectangle(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
        ctx.clip();
        clear_transparent(ctx);
        self.render(ctx);
        let _ = ctx.restore();
    }

    /// Renders the current state into an offscreen ARGB32 image of the surface's size.
    ///
    /// # Errors
    /// Returns an error only if Cairo cannot allocate the image or its context.
    pub fn snapshot(&self) -> Result<cairo::ImageSurface, cairo::Error> {
        let image = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.width.max(0),
            self.height.max(0),
        )?;
        {
            let ctx = cairo::Context::new(&image)?;
            self.render(&ctx);
        }
        image.flush();
        Ok(image)
    }
}
