// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Navigation commands, and what they do to a viewport.

use errors::MandelError;
use std::str::FromStr;
use viewport::Viewport;

/// Default pan distance, as a fraction of the current half-width.
pub const PAN_STEP: f64 = 0.2;

/// Default zoom ratio.  Zooming in divides the half-width by this.
pub const ZOOM_FACTOR: f64 = 1.5;

/// One discrete step of exploration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the view left.
    PanLeft,
    /// Move the view right.
    PanRight,
    /// Move the view up, towards pixel row zero.
    PanUp,
    /// Move the view down.
    PanDown,
    /// Magnify.
    ZoomIn,
    /// Pull back.
    ZoomOut,
    /// Back to the default framing.
    Reset,
}

impl FromStr for Command {
    type Err = MandelError;

    fn from_str(s: &str) -> Result<Command, MandelError> {
        match s {
            "left" => Ok(Command::PanLeft),
            "right" => Ok(Command::PanRight),
            "up" => Ok(Command::PanUp),
            "down" => Ok(Command::PanDown),
            "in" | "+" => Ok(Command::ZoomIn),
            "out" | "-" => Ok(Command::ZoomOut),
            "reset" | "f" => Ok(Command::Reset),
            _ => Err(MandelError::UnknownCommand(s.to_string())),
        }
    }
}

/// How far a pan moves and how hard a zoom zooms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Navigation {
    /// Pan distance as a fraction of the half-width.
    pub pan_step: f64,
    /// Ratio applied to the half-width by a zoom.
    pub zoom_factor: f64,
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation {
            pan_step: PAN_STEP,
            zoom_factor: ZOOM_FACTOR,
        }
    }
}

impl Navigation {
    /// Apply one command to the viewport.
    pub fn apply(&self, viewport: &mut Viewport, command: Command) {
        let step = self.pan_step;
        match command {
            Command::PanLeft => viewport.pan(-step, 0.0),
            Command::PanRight => viewport.pan(step, 0.0),
            Command::PanUp => viewport.pan(0.0, -step),
            Command::PanDown => viewport.pan(0.0, step),
            Command::ZoomIn => viewport.zoom(1.0 / self.zoom_factor),
            Command::ZoomOut => viewport.zoom(self.zoom_factor),
            Command::Reset => viewport.reset(),
        }
    }
}
