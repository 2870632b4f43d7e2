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

//! Pure layout helpers driven by the current breakpoint
//!
//! Stateless companions to the responsive manager: font scaling, the
//! per-table column sets, the card-vs-table decision, and dialog size
//! hints. Everything here is a lookup or a small arithmetic function;
//! widgets call these at construction and again from breakpoint-change
//! observers.

use crate::core::responsive::Breakpoint;

/// Smallest font size ever produced by scaling, to keep text legible.
pub const MIN_FONT_SIZE: i32 = 8;

/// A font request before it is handed to Pango
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Family name, e.g. "Cairo"
    pub family: String,

    /// Point size
    pub size: i32,

    /// Optional style keyword ("bold", "italic")
    pub style: Option<String>,
}

impl FontSpec {
    /// Plain font with no style keyword
    pub fn new(family: &str, size: i32) -> Self {
        Self {
            family: family.to_string(),
            size,
            style: None,
        }
    }

    /// Font with a style keyword
    pub fn styled(family: &str, size: i32, style: &str) -> Self {
        Self {
            family: family.to_string(),
            size,
            style: Some(style.to_string()),
        }
    }

    /// Pango description string, e.g. "Cairo bold 18"
    pub fn to_pango(&self) -> String {
        match &self.style {
            Some(style) => format!("{} {} {}", self.family, style, self.size),
            None => format!("{} {}", self.family, self.size),
        }
    }
}

/// Scales a font for the active breakpoint.
///
/// The size is multiplied by `scale`, floored to an integer, and clamped
/// to [`MIN_FONT_SIZE`] so aggressive mobile scaling never produces
/// unreadable text. Family and style pass through unchanged.
pub fn create_responsive_font(base: &FontSpec, scale: f32) -> FontSpec {
    let scaled = (base.size as f32 * scale).floor() as i32;

    FontSpec {
        family: base.family.clone(),
        size: scaled.max(MIN_FONT_SIZE),
        style: base.style.clone(),
    }
}

/// The logical tables the interface renders
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TableKind {
    /// Member roster
    Members,
    /// Payment history
    Payments,
    /// Subscription list
    Subscriptions,
    /// Attendance log
    Attendance,
}

/// Column identifiers to display for a table at a breakpoint.
///
/// A static lookup, not computed: each table loses columns as the window
/// narrows, keeping only what fits. Identifiers are resolved to Arabic
/// header labels by the widgets.
pub fn table_columns(breakpoint: Breakpoint, table: TableKind) -> &'static [&'static str] {
    match (table, breakpoint) {
        (TableKind::Members, Breakpoint::Mobile) => &["name", "status"],
        (TableKind::Members, Breakpoint::Tablet) => &["name", "phone", "status"],
        (TableKind::Members, Breakpoint::Desktop) => {
            &["id", "name", "phone", "plan", "status", "join_date"]
        }

        (TableKind::Payments, Breakpoint::Mobile) => &["member", "amount"],
        (TableKind::Payments, Breakpoint::Tablet) => &["member", "amount", "method"],
        (TableKind::Payments, Breakpoint::Desktop) => {
            &["id", "member", "amount", "method", "date", "note"]
        }

        (TableKind::Subscriptions, Breakpoint::Mobile) => &["member", "end_date"],
        (TableKind::Subscriptions, Breakpoint::Tablet) => &["member", "plan", "end_date"],
        (TableKind::Subscriptions, Breakpoint::Desktop) => {
            &["id", "member", "plan", "start_date", "end_date", "remaining"]
        }

        (TableKind::Attendance, Breakpoint::Mobile) => &["member", "time"],
        (TableKind::Attendance, Breakpoint::Tablet) => &["member", "date", "time"],
        (TableKind::Attendance, Breakpoint::Desktop) => &["id", "member", "date", "time"],
    }
}

/// Whether stacked cards should replace the tabular layout.
///
/// Only the mobile breakpoint trades the table for cards; tablet keeps a
/// reduced table.
pub fn should_use_cards(breakpoint: Breakpoint) -> bool {
    breakpoint == Breakpoint::Mobile
}

/// Dialog size hint for a breakpoint.
///
/// Mobile and tablet dialogs size relative to the window (percentage
/// strings); desktop dialogs are fixed-pixel.
pub fn dialog_size(breakpoint: Breakpoint) -> (&'static str, &'static str) {
    match breakpoint {
        Breakpoint::Mobile => ("95%", "90%"),
        Breakpoint::Tablet => ("80%", "75%"),
        Breakpoint::Desktop => ("700", "520"),
    }
}
