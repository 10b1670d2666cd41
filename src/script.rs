//! Scripted input for driving an overlay session without a real window host.
//!
//! A script is a TOML file holding an ordered list of `[[step]]` tables. Each
//! step is either a toolbar button press or a pointer event aimed at one of the
//! overlay windows:
//!
//! ```toml
//! [[step]]
//! kind = "button"
//! button = { tool = "arrow" }
//!
//! [[step]]
//! kind = "surface"
//! action = "press"
//! x = 100.0
//! y = 100.0
//!
//! [[step]]
//! kind = "button"
//! button = "hide"
//! ```

use crate::input::{PointerAction, PointerEvent};
use crate::overlay::{Notifier, OverlaySession, WindowHost};
use crate::toolbar::ToolbarButton;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    Button {
        button: ToolbarButton,
    },
    /// Pointer event in surface-local coordinates
    Surface {
        action: PointerAction,
        x: f64,
        y: f64,
    },
    /// Pointer event on the toolbar drag handle, in screen coordinates
    Handle {
        action: PointerAction,
        x: f64,
        y: f64,
    },
    /// Pointer event on the restore button, in screen coordinates
    Restore {
        action: PointerAction,
        x: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps delivered to the session
    pub applied: usize,
    /// Surface events the surface consumed
    pub consumed: usize,
    /// Surface events that passed through to the content underneath
    pub passed_through: usize,
    /// Whether the close button ended the replay early
    pub closed: bool,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        info!("Loaded {} steps from {}", script.steps.len(), path.display());
        Ok(script)
    }

    /// Delivers every step to `session` in order.
    ///
    /// Stops after the step that requests the overlay to close; later steps
    /// are not applied.
    pub fn replay<H: WindowHost>(
        &self,
        session: &mut OverlaySession<H>,
        notifier: &dyn Notifier,
    ) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for step in &self.steps {
            debug!("Replaying {:?}", step);
            match *step {
                Step::Button { button } => session.press_button(button, notifier),
                Step::Surface { action, x, y } => {
                    if session.surface_pointer(PointerEvent::new(action, x, y)) {
                        summary.consumed += 1;
                    } else {
                        summary.passed_through += 1;
                    }
                }
                Step::Handle { action, x, y } => {
                    session.handle_pointer(PointerEvent::new(action, x, y), notifier)
                }
                Step::Restore { action, x, y } => {
                    session.restore_pointer(PointerEvent::new(action, x, y), notifier)
                }
            }
            summary.applied += 1;

            if session.close_requested() {
                summary.closed = true;
                break;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::draw::{Point, Shape};
    use crate::overlay::{HeadlessHost, LogNotifier, RunState, StaticPermission};
    use crate::toolbar::{Tool, WindowPosition};

    const ARROW_SCRIPT: &str = r#"
        [[step]]
        kind = "surface"
        action = "press"
        x = 5.0
        y = 5.0

        [[step]]
        kind = "button"
        button = { tool = "arrow" }

        [[step]]
        kind = "surface"
        action = "press"
        x = 100.0
        y = 100.0

        [[step]]
        kind = "surface"
        action = "move"
        x = 200.0
        y = 120.0

        [[step]]
        kind = "surface"
        action = "release"
        x = 200.0
        y = 120.0
    "#;

    fn session(run_state: &RunState) -> OverlaySession<HeadlessHost> {
        OverlaySession::start(
            HeadlessHost::default(),
            &Config::default(),
            &StaticPermission(true),
            &LogNotifier,
            run_state,
        )
        .expect("session starts")
    }

    #[test]
    fn parses_every_step_kind() {
        let script = Script::parse(
            r#"
            [[step]]
            kind = "button"
            button = "hide"

            [[step]]
            kind = "handle"
            action = "press"
            x = 1.0
            y = 2.0

            [[step]]
            kind = "restore"
            action = "release"
            x = 3.0
            y = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Button {
                    button: ToolbarButton::Hide
                },
                Step::Handle {
                    action: PointerAction::Press,
                    x: 1.0,
                    y: 2.0
                },
                Step::Restore {
                    action: PointerAction::Release,
                    x: 3.0,
                    y: 4.0
                },
            ]
        );
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert!(Script::parse("").unwrap().steps.is_empty());
    }

    #[test]
    fn unknown_step_kind_is_rejected() {
        let err = Script::parse("[[step]]\nkind = \"wave\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Script::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }

    #[test]
    fn replay_draws_an_arrow_after_tool_selection() {
        let run_state = RunState::new();
        let mut session = session(&run_state);
        let script = Script::parse(ARROW_SCRIPT).unwrap();

        let summary = script.replay(&mut session, &LogNotifier);

        assert_eq!(summary.applied, 5);
        assert_eq!(summary.passed_through, 1);
        assert_eq!(summary.consumed, 3);
        assert!(!summary.closed);
        assert_eq!(session.toolbar().active_tool(), Some(Tool::Arrow));
        assert_eq!(
            session.surface().shapes(),
            &[Shape::Arrow {
                start: Point::new(100.0, 100.0),
                end: Point::new(200.0, 120.0),
            }]
        );
    }

    #[test]
    fn replay_stops_at_close() {
        let run_state = RunState::new();
        let mut session = session(&run_state);
        let script = Script {
            steps: vec![
                Step::Button {
                    button: ToolbarButton::Close,
                },
                Step::Button {
                    button: ToolbarButton::Tool(Tool::Freehand),
                },
            ],
        };

        let summary = script.replay(&mut session, &LogNotifier);

        assert_eq!(summary.applied, 1);
        assert!(summary.closed);
        assert_eq!(session.toolbar().active_tool(), None);
    }

    #[test]
    fn replay_drags_the_toolbar() {
        let run_state = RunState::new();
        let mut session = session(&run_state);
        let script = Script {
            steps: vec![
                Step::Handle {
                    action: PointerAction::Press,
                    x: 500.0,
                    y: 500.0,
                },
                Step::Handle {
                    action: PointerAction::Move,
                    x: 560.0,
                    y: 400.0,
                },
            ],
        };

        script.replay(&mut session, &LogNotifier);

        assert_eq!(
            session.toolbar().toolbar_position(),
            WindowPosition::new(80, 300)
        );
    }
}
