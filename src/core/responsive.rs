// Copyright 2026 gym-manager contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Responsive breakpoint tracking for the main window
//!
//! This module classifies the window width into one of three breakpoints
//! (mobile, tablet, desktop) and notifies registered observers when the
//! classification changes. UI panels use the notification to re-flow:
//! swap the member table for stacked cards, collapse the sidebar, scale
//! fonts.
//!
//! # Behaviour
//!
//! - Resize events within 50 px of the last recorded width are ignored
//!   (hysteresis against redraw jitter).
//! - Observers fire only on an actual breakpoint transition, in
//!   registration order.
//! - A panicking observer is isolated: it is caught and skipped, the
//!   remaining observers still run, and the manager's state stays valid.
//!
//! The manager lives on the GTK main thread for the lifetime of the
//! window; interior mutability (`Cell`/`RefCell`) lets GTK signal
//! closures share it through an `Rc` without locking.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Minimum width change (px) considered a real resize rather than jitter.
pub const RESIZE_HYSTERESIS: i32 = 50;

/// Width (px) at which the tablet layout starts.
pub const TABLET_MIN_WIDTH: i32 = 768;

/// Width (px) at which the desktop layout starts.
pub const DESKTOP_MIN_WIDTH: i32 = 1024;

/// Discrete window-size classification
///
/// Ordered by ascending minimum width, so `Mobile < Tablet < Desktop`
/// and classification is monotonic in the window width.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Breakpoint {
    /// Narrow window, below 768 px
    Mobile,
    /// 768 px up to 1023 px
    Tablet,
    /// 1024 px and wider
    Desktop,
}

impl Breakpoint {
    /// Classifies a width into a breakpoint.
    ///
    /// Picks the breakpoint with the largest `min_width` not exceeding
    /// the given width, scanning from widest to narrowest. Total for any
    /// width: the mobile threshold is 0, so everything narrower than a
    /// tablet falls through to `Mobile`.
    pub fn from_width(width: i32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Breakpoint::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// Lower width bound of this breakpoint
    pub fn min_width(&self) -> i32 {
        match self {
            Breakpoint::Mobile => 0,
            Breakpoint::Tablet => TABLET_MIN_WIDTH,
            Breakpoint::Desktop => DESKTOP_MIN_WIDTH,
        }
    }

    /// Stable lowercase name, used in log lines and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout parameters attached to one breakpoint
///
/// Immutable; the three records live in a static table and are looked up
/// through [`Breakpoint::config`] or the manager's accessors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointConfig {
    /// Breakpoint name (matches [`Breakpoint::as_str`])
    pub name: &'static str,

    /// Lower width bound (px)
    pub min_width: i32,

    /// Sidebar width (px) at this breakpoint
    pub sidebar_width: i32,

    /// Multiplier applied to base font sizes
    pub font_scale: f32,

    /// Button padding: [top, end, bottom, start] in px
    pub button_padding: [i32; 4],

    /// Uniform padding (px) inside member cards
    pub card_padding: i32,
}

/// Fixed breakpoint table, ascending by `min_width`.
const BREAKPOINTS: [BreakpointConfig; 3] = [
    BreakpointConfig {
        name: "mobile",
        min_width: 0,
        sidebar_width: 0,
        font_scale: 0.85,
        button_padding: [4, 8, 4, 8],
        card_padding: 8,
    },
    BreakpointConfig {
        name: "tablet",
        min_width: TABLET_MIN_WIDTH,
        sidebar_width: 220,
        font_scale: 0.95,
        button_padding: [6, 12, 6, 12],
        card_padding: 12,
    },
    BreakpointConfig {
        name: "desktop",
        min_width: DESKTOP_MIN_WIDTH,
        sidebar_width: 280,
        font_scale: 1.0,
        button_padding: [8, 16, 8, 16],
        card_padding: 16,
    },
];

impl Breakpoint {
    /// Full layout record for this breakpoint (total lookup)
    pub fn config(&self) -> &'static BreakpointConfig {
        match self {
            Breakpoint::Mobile => &BREAKPOINTS[0],
            Breakpoint::Tablet => &BREAKPOINTS[1],
            Breakpoint::Desktop => &BREAKPOINTS[2],
        }
    }
}

/// Observer invoked with the new breakpoint on every transition
type BreakpointCallback = Box<dyn Fn(Breakpoint)>;

/// Tracks window width and notifies observers on breakpoint transitions.
///
/// One manager is created per window and shared via `Rc` with every
/// component that needs to re-flow. All access happens on the GTK main
/// thread; methods take `&self` so signal closures can hold clones.
///
/// # Example
///
/// ```
/// use gym_manager::core::responsive::{Breakpoint, ResponsiveManager};
///
/// let manager = ResponsiveManager::new();
/// manager.register_callback(|bp| eprintln!("now {}", bp));
///
/// manager.observe_resize(600);
/// assert!(manager.is_mobile());
/// ```
pub struct ResponsiveManager {
    /// Current classification; always one of the three table entries
    current: Cell<Breakpoint>,

    /// Last width that passed the hysteresis filter
    previous_width: Cell<i32>,

    /// Observers in registration order
    callbacks: RefCell<Vec<BreakpointCallback>>,
}

impl ResponsiveManager {
    /// Creates a manager defaulting to the desktop breakpoint.
    ///
    /// The default matches the window's initial geometry (windows open at
    /// desktop size); the first significant resize corrects it if needed.
    pub fn new() -> Self {
        Self {
            current: Cell::new(Breakpoint::Desktop),
            previous_width: Cell::new(0),
            callbacks: RefCell::new(Vec::new()),
        }
    }

    /// Convenience constructor for the usual shared form
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Feeds a width measurement from a window resize event.
    ///
    /// Widths within [`RESIZE_HYSTERESIS`] of the last recorded width are
    /// discarded without re-classification. A significant width is
    /// recorded, classified, and — only if the breakpoint actually
    /// changed — dispatched to every registered observer in order.
    pub fn observe_resize(&self, width: i32) {
        let delta = (width - self.previous_width.get()).abs();
        if delta <= RESIZE_HYSTERESIS {
            return;
        }

        self.previous_width.set(width);

        let next = Breakpoint::from_width(width);
        if next != self.current.get() {
            self.current.set(next);
            self.notify(next);
        }
    }

    /// Classifies a width without touching manager state.
    pub fn breakpoint_for(&self, width: i32) -> Breakpoint {
        Breakpoint::from_width(width)
    }

    /// Current breakpoint
    pub fn current_breakpoint(&self) -> Breakpoint {
        self.current.get()
    }

    /// Layout record for the current breakpoint
    pub fn config(&self) -> &'static BreakpointConfig {
        self.current.get().config()
    }

    /// Sidebar width (px) for the current breakpoint
    pub fn sidebar_width(&self) -> i32 {
        self.config().sidebar_width
    }

    /// Font multiplier for the current breakpoint
    pub fn font_scale(&self) -> f32 {
        self.config().font_scale
    }

    /// Button padding [top, end, bottom, start] for the current breakpoint
    pub fn button_padding(&self) -> [i32; 4] {
        self.config().button_padding
    }

    /// Card padding (px) for the current breakpoint
    pub fn card_padding(&self) -> i32 {
        self.config().card_padding
    }

    /// True while the mobile layout is active
    pub fn is_mobile(&self) -> bool {
        self.current.get() == Breakpoint::Mobile
    }

    /// True while the tablet layout is active
    pub fn is_tablet(&self) -> bool {
        self.current.get() == Breakpoint::Tablet
    }

    /// True while the desktop layout is active
    pub fn is_desktop(&self) -> bool {
        self.current.get() == Breakpoint::Desktop
    }

    /// Registers an observer for breakpoint transitions.
    ///
    /// Observers fire in registration order. There is no deduplication
    /// and no unregistration: components live exactly as long as the
    /// window, so nothing ever needs to detach.
    pub fn register_callback<F>(&self, callback: F)
    where
        F: Fn(Breakpoint) + 'static,
    {
        self.callbacks.borrow_mut().push(Box::new(callback));
    }

    /// Number of registered observers
    pub fn callback_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Dispatches a transition to every observer, isolating panics.
    ///
    /// A panicking observer must not stop the rest of the window from
    /// re-flowing, so each call is wrapped in `catch_unwind` and failures
    /// are dropped.
    fn notify(&self, breakpoint: Breakpoint) {
        let callbacks = self.callbacks.borrow();
        for callback in callbacks.iter() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| callback(breakpoint)));
            if result.is_err() {
                eprintln!("⚠️  Breakpoint observer panicked, skipping");
            }
        }
    }
}

impl Default for ResponsiveManager {
    fn default() -> Self {
        Self::new()
    }
}
