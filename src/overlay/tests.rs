use super::*;
use crate::config::Config;
use crate::draw::{Point, Shape};
use crate::input::{DrawingMode, PointerEvent};
use crate::toolbar::{Tool, ToolbarButton, WindowPosition};
use crate::util::Rect;
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl RecordingNotifier {
    fn taken(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

struct CountingGate {
    granted: bool,
    requests: Cell<usize>,
}

impl CountingGate {
    fn new(granted: bool) -> Self {
        Self {
            granted,
            requests: Cell::new(0),
        }
    }
}

impl PermissionGate for CountingGate {
    fn can_draw_overlays(&self) -> bool {
        self.granted
    }

    fn request_permission(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

fn start_session(run_state: &RunState) -> OverlaySession<HeadlessHost> {
    OverlaySession::start(
        HeadlessHost::new(),
        &Config::default(),
        &StaticPermission(true),
        &LogNotifier,
        run_state,
    )
    .expect("session starts")
}

fn draw(session: &mut OverlaySession<HeadlessHost>, events: &[PointerEvent]) -> Vec<bool> {
    events.iter().map(|e| session.surface_pointer(*e)).collect()
}

#[test]
fn start_attaches_windows_and_publishes_run_state() {
    let run_state = RunState::new();
    let session = start_session(&run_state);
    assert!(run_state.is_active());

    let host = session.host();
    let surface = host.window(WindowRole::Surface).unwrap();
    assert_eq!(surface.spec.touch, TouchMode::IgnoreTouches);
    assert_eq!(surface.spec.width, WindowExtent::MatchParent);

    let toolbar = host.window(WindowRole::Toolbar).unwrap();
    assert!(toolbar.visible);
    assert_eq!(toolbar.spec.anchor, Anchor::BottomStart);
    assert_eq!(toolbar.spec.position(), WindowPosition::new(20, 200));

    assert!(!host.window(WindowRole::RestoreButton).unwrap().visible);
}

#[test]
fn missing_permission_notifies_once_and_creates_nothing() {
    let run_state = RunState::new();
    let gate = CountingGate::new(false);
    let notifier = RecordingNotifier::default();

    let result = OverlaySession::start(
        HeadlessHost::new(),
        &Config::default(),
        &gate,
        &notifier,
        &run_state,
    );

    assert!(matches!(result, Err(OverlayError::PermissionDenied)));
    assert_eq!(notifier.taken(), vec![Notice::PermissionRequired]);
    assert_eq!(gate.requests.get(), 1);
    assert!(!run_state.is_active());
}

#[test]
fn second_session_is_refused_while_first_is_alive() {
    let run_state = RunState::new();
    let _first = start_session(&run_state);

    let second = OverlaySession::start(
        HeadlessHost::new(),
        &Config::default(),
        &StaticPermission(true),
        &LogNotifier,
        &run_state,
    );
    assert!(matches!(second, Err(OverlayError::AlreadyRunning)));
    assert!(run_state.is_active());
}

#[test]
fn surface_passes_touches_through_until_a_tool_is_picked() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);

    let handled = draw(
        &mut session,
        &[PointerEvent::press(1.0, 1.0), PointerEvent::release(1.0, 1.0)],
    );
    assert_eq!(handled, vec![false, false]);
    assert!(session.surface().shapes().is_empty());
}

#[test]
fn arrow_tool_scenario_draws_one_arrow() {
    let run_state = RunState::new();
    let notifier = RecordingNotifier::default();
    let mut session = start_session(&run_state);

    session.press_button(ToolbarButton::Tool(Tool::Arrow), &notifier);
    assert_eq!(session.surface_touch(), TouchMode::AcceptTouches);
    assert_eq!(session.surface().mode(), DrawingMode::Arrow);
    assert!(notifier.taken().is_empty());

    let host = session.host();
    assert!(!host.window(WindowRole::Toolbar).unwrap().visible);
    assert!(host.window(WindowRole::RestoreButton).unwrap().visible);

    let handled = draw(
        &mut session,
        &[
            PointerEvent::press(10.0, 10.0),
            PointerEvent::moved(50.0, 10.0),
            PointerEvent::release(50.0, 10.0),
        ],
    );
    assert_eq!(handled, vec![true, true, true]);
    assert_eq!(
        session.surface().shapes(),
        &[Shape::Arrow {
            start: Point::new(10.0, 10.0),
            end: Point::new(50.0, 10.0),
        }]
    );
}

#[test]
fn hide_keeps_drawings_but_lets_touches_through() {
    let run_state = RunState::new();
    let notifier = RecordingNotifier::default();
    let mut session = start_session(&run_state);

    session.press_button(ToolbarButton::Tool(Tool::Rectangle), &notifier);
    draw(
        &mut session,
        &[PointerEvent::press(0.0, 0.0), PointerEvent::release(0.0, 0.0)],
    );

    // Bring the toolbar back, then hide it explicitly.
    session.restore_pointer(PointerEvent::press(30.0, 30.0), &notifier);
    session.restore_pointer(PointerEvent::release(30.0, 30.0), &notifier);
    assert!(session.host().window(WindowRole::Toolbar).unwrap().visible);

    session.press_button(ToolbarButton::Hide, &notifier);
    assert_eq!(notifier.taken(), vec![Notice::ToolbarHidden]);
    assert_eq!(session.surface_touch(), TouchMode::IgnoreTouches);
    assert!(!session.surface_pointer(PointerEvent::press(5.0, 5.0)));
    assert_eq!(session.surface().shapes().len(), 1);

    // Tapping restore re-enables drawing because a tool is still selected.
    session.restore_pointer(PointerEvent::press(30.0, 30.0), &notifier);
    session.restore_pointer(PointerEvent::release(30.0, 30.0), &notifier);
    assert_eq!(session.surface_touch(), TouchMode::AcceptTouches);
}

#[test]
fn toolbar_drag_repositions_window() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);

    session.handle_pointer(PointerEvent::press(40.0, 800.0), &LogNotifier);
    session.handle_pointer(PointerEvent::moved(100.0, 700.0), &LogNotifier);
    session.handle_pointer(PointerEvent::release(100.0, 700.0), &LogNotifier);

    let toolbar = session.host().window(WindowRole::Toolbar).unwrap();
    assert_eq!(toolbar.spec.position(), WindowPosition::new(80, 300));
}

#[test]
fn clear_button_empties_surface_and_requests_repaint() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);
    session.press_button(ToolbarButton::Tool(Tool::Freehand), &LogNotifier);
    draw(
        &mut session,
        &[
            PointerEvent::press(0.0, 0.0),
            PointerEvent::moved(5.0, 5.0),
            PointerEvent::release(5.0, 5.0),
        ],
    );
    session.surface_mut().take_repaint_request();

    session.press_button(ToolbarButton::Clear, &LogNotifier);
    assert!(session.surface().shapes().is_empty());
    assert!(session.surface().needs_redraw());
}

#[test]
fn close_button_only_flags_the_request() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);
    session.press_button(ToolbarButton::Close, &LogNotifier);
    assert!(session.close_requested());
    assert!(run_state.is_active());

    let host = session.stop();
    assert!(!run_state.is_active());
    assert_eq!(host.attached().count(), 0);
}

#[test]
fn teardown_continues_past_removal_failures() {
    let run_state = RunState::new();
    let session = OverlaySession::start(
        HeadlessHost::new().fail_removal_of(WindowRole::Surface),
        &Config::default(),
        &StaticPermission(true),
        &LogNotifier,
        &run_state,
    )
    .unwrap();

    let host = session.stop();
    assert_eq!(
        host.removal_attempts(),
        &[
            WindowRole::Surface,
            WindowRole::Toolbar,
            WindowRole::RestoreButton
        ]
    );
    assert_eq!(host.attached().collect::<Vec<_>>(), vec![WindowRole::Surface]);
    assert!(!run_state.is_active());
}

#[test]
fn dropping_a_session_clears_run_state() {
    let run_state = RunState::new();
    {
        let _session = start_session(&run_state);
        assert!(run_state.is_active());
    }
    assert!(!run_state.is_active());
    let _again = start_session(&run_state);
}

#[test]
fn repaint_only_draws_when_requested() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 64).unwrap();
    let ctx = cairo::Context::new(&image).unwrap();

    assert_eq!(
        session.repaint(&ctx),
        vec![Rect::new(0, 0, 1080, 1920).unwrap()]
    );
    assert!(session.repaint(&ctx).is_empty());

    session.press_button(ToolbarButton::Tool(Tool::Arrow), &LogNotifier);
    session.surface_pointer(PointerEvent::press(1.0, 1.0));
    assert!(session.repaint(&ctx).is_empty());
    session.surface_pointer(PointerEvent::moved(30.0, 30.0));
    assert!(!session.repaint(&ctx).is_empty());
}

fn pixel(image: &mut cairo::ImageSurface, x: usize, y: usize) -> u32 {
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y * stride + x * 4;
    u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[test]
fn repaint_leaves_pixels_outside_damage_untouched() {
    const OPAQUE_BLUE: u32 = 0xff00_00ff;

    let run_state = RunState::new();
    let mut session = start_session(&run_state);
    let mut image = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200).unwrap();
    {
        let ctx = cairo::Context::new(&image).unwrap();
        session.repaint(&ctx);
        ctx.set_source_rgba(0.0, 0.0, 1.0, 1.0);
        ctx.paint().unwrap();
    }

    session.press_button(ToolbarButton::Tool(Tool::Arrow), &LogNotifier);
    session.surface_pointer(PointerEvent::press(10.0, 10.0));
    session.surface_pointer(PointerEvent::moved(30.0, 30.0));

    let damage = {
        let ctx = cairo::Context::new(&image).unwrap();
        session.repaint(&ctx)
    };
    assert!(!damage.is_empty());
    for rect in &damage {
        assert!(rect.x + rect.width <= 40 && rect.y + rect.height <= 40, "{rect:?}");
    }

    assert_eq!(pixel(&mut image, 150, 150), OPAQUE_BLUE);
    assert_eq!(pixel(&mut image, 100, 20), OPAQUE_BLUE);

    let shaft = pixel(&mut image, 20, 20);
    assert_eq!(shaft >> 24, 0xff, "shaft should be opaque");
    assert_eq!((shaft >> 16) & 0xff, 0xff, "shaft should be red");
}

#[test]
fn discarding_a_pressed_shape_marks_its_damage() {
    let run_state = RunState::new();
    let mut session = start_session(&run_state);
    session.press_button(ToolbarButton::Tool(Tool::Rectangle), &LogNotifier);
    session.surface_pointer(PointerEvent::press(50.0, 50.0));
    session.surface_mut().take_damage();

    session.press_button(ToolbarButton::Tool(Tool::Freehand), &LogNotifier);

    assert!(session.surface().in_progress().is_none());
    assert!(session.surface().has_damage());
}

#[test]
fn quick_toggle_follows_run_state() {
    let run_state = RunState::new();
    let toggle = QuickToggle::new(run_state.clone());
    let granted = StaticPermission(true);

    assert_eq!(toggle.click(&granted, &LogNotifier), ToggleAction::Start);
    assert!(!toggle.tile_state().active);

    let session = start_session(&run_state);
    assert_eq!(toggle.click(&granted, &LogNotifier), ToggleAction::Stop);
    assert_eq!(
        toggle.tile_state(),
        TileState {
            active: true,
            label: "Annotating"
        }
    );

    drop(session);
    assert_eq!(toggle.tile_state().label, "Annotate screen");
}

#[test]
fn quick_toggle_without_permission_only_prompts() {
    let toggle = QuickToggle::new(RunState::new());
    let gate = CountingGate::new(false);
    let notifier = RecordingNotifier::default();

    assert_eq!(toggle.click(&gate, &notifier), ToggleAction::PermissionRequired);
    assert_eq!(notifier.taken(), vec![Notice::PermissionRequired]);
    assert_eq!(gate.requests.get(), 1);
}
