//! # App Module
//!
//! The init/event/iterate/quit lifecycle every walkthrough follows.
//!
//! A program is initialised once by its own async constructor, then
//! [`run`] drives it: events are delivered first, the frame is iterated,
//! and the frame is presented. The first non-`Continue` result ends the
//! loop and the program's quit step always runs.

use crate::input::{InputEvent, InputHandler};
use crate::{PrimerError, PrimerResult};
use macroquad::prelude::next_frame;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Outcome of one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// Keep running
    Continue,
    /// Stop, everything went fine
    Success,
    /// Stop, something went wrong
    Failure,
}

/// Shared startup information handed to each program's initialiser.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Root directory for `images/`, `audio/` and other assets
    pub base_path: PathBuf,
    /// Second root searched when an asset is missing under `base_path`
    pub fallback_path: Option<PathBuf>,
}

impl AppContext {
    /// Creates a context rooted at `base_path` only.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            fallback_path: None,
        }
    }

    /// Creates a context rooted at the directory holding the executable,
    /// with the working directory as fallback.
    pub fn from_executable() -> Self {
        let cwd = std::env::current_dir().ok();
        let base_path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| cwd.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base_path).with_fallback(cwd)
    }

    /// Sets the root searched when an asset is missing under the base path.
    pub fn with_fallback(mut self, fallback_path: Option<PathBuf>) -> Self {
        self.fallback_path = fallback_path;
        self
    }

    /// Path of `file` inside the asset directory `dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primer::AppContext;
    /// use std::path::Path;
    ///
    /// let ctx = AppContext::new("/opt/demo");
    /// assert_eq!(ctx.asset_path("audio", "default.wav"), Path::new("/opt/demo/audio/default.wav"));
    /// ```
    pub fn asset_path(&self, dir: &str, file: &str) -> PathBuf {
        self.base_path.join(dir).join(file)
    }

    /// Finds `file` inside `dir`, under the base path first and the fallback
    /// root second.
    ///
    /// When neither exists the base path location is returned, so the
    /// caller's open error names it.
    pub fn locate_asset(&self, dir: &str, file: &str) -> PathBuf {
        let primary = self.asset_path(dir, file);
        if primary.is_file() {
            return primary;
        }

        match &self.fallback_path {
            Some(root) => {
                let candidate = root.join(dir).join(file);
                if candidate.is_file() {
                    debug!("{} not found, using {}", primary.display(), candidate.display());
                    candidate
                } else {
                    primary
                }
            }
            None => primary,
        }
    }
}

/// A walkthrough program.
pub trait App {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Handles one input event.
    ///
    /// By default the window close button and any key press end the program.
    fn event(&mut self, event: &InputEvent) -> AppResult {
        if *event == InputEvent::Quit || event.is_key_down() {
            AppResult::Success
        } else {
            AppResult::Continue
        }
    }

    /// Produces one frame.
    fn iterate(&mut self) -> PrimerResult<AppResult>;

    /// Runs once when the program stops, whatever the reason.
    fn quit(&mut self, result: AppResult) {
        info!("{} finished with {:?}", self.name(), result);
    }
}

/// Delivers one frame's `events` and, unless one of them stops the
/// program, iterates the frame.
///
/// Returns `Ok(None)` while the program keeps running and the stopping
/// result otherwise. Events after the first non-`Continue` result are not
/// delivered, and the frame is not iterated.
pub fn step<A: App>(app: &mut A, events: &[InputEvent]) -> PrimerResult<Option<AppResult>> {
    let stop = events
        .iter()
        .map(|event| app.event(event))
        .find(|result| *result != AppResult::Continue);
    if stop.is_some() {
        return Ok(stop);
    }

    match app.iterate()? {
        AppResult::Continue => Ok(None),
        result => Ok(Some(result)),
    }
}

/// Runs the quit step for `outcome` and turns it into the program's result.
///
/// An error runs quit with [`AppResult::Failure`] and is returned as is. A
/// `Failure` result becomes [`PrimerError::InvalidState`].
pub fn conclude<A: App>(app: &mut A, outcome: PrimerResult<AppResult>) -> PrimerResult<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            error!("{} failed: {}", app.name(), e);
            app.quit(AppResult::Failure);
            return Err(e);
        }
    };

    app.quit(result);

    match result {
        AppResult::Failure => Err(PrimerError::InvalidState(format!(
            "{} stopped with a failure",
            app.name()
        ))),
        _ => Ok(()),
    }
}

/// Runs `app` until an event or frame asks to stop.
pub async fn run<A: App>(app: &mut A, input: &InputHandler) -> PrimerResult<()> {
    let outcome = loop {
        match step(app, &input.poll()) {
            Ok(None) => next_frame().await,
            Ok(Some(result)) => break Ok(result),
            Err(e) => break Err(e),
        }
    };

    conclude(app, outcome)
}
