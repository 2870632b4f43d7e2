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

//! Theme context
//!
//! One immutable `Theme` is built when the window is composed and passed
//! to every construction function that needs colors. There is no
//! process-wide palette: two windows can carry two themes without stale
//! references.

/// Immutable color palette for one window
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Window background
    pub background: &'static str,
    /// Card / panel surface
    pub surface: &'static str,
    /// Primary accent (buttons, active rows)
    pub primary: &'static str,
    /// Success accent (active status, check-in confirmation)
    pub success: &'static str,
    /// Warning accent (expiring subscriptions)
    pub warning: &'static str,
    /// Danger accent (expired status, delete)
    pub danger: &'static str,
    /// Main text color
    pub text: &'static str,
    /// Secondary text color
    pub text_dim: &'static str,
}

impl Theme {
    /// Default light palette
    pub fn light() -> Self {
        Self {
            background: "#f5f6fa",
            surface: "#ffffff",
            primary: "#2f6fed",
            success: "#2e9e5b",
            warning: "#d98a1f",
            danger: "#d64545",
            text: "#1c1e26",
            text_dim: "#6b7180",
        }
    }

    /// Renders the palette into the application CSS.
    ///
    /// The structural rules live in `ui/style.css`; this only emits the
    /// color classes so the same stylesheet works with any palette.
    pub fn to_css(&self) -> String {
        format!(
            "window {{ background-color: {bg}; color: {text}; }}\n\
             .surface {{ background-color: {surface}; }}\n\
             .member-card {{ background-color: {surface}; }}\n\
             .status-active {{ color: {success}; }}\n\
             .status-expired {{ color: {danger}; }}\n\
             .status-suspended {{ color: {warning}; }}\n\
             .dim-label {{ color: {dim}; }}\n\
             .stat-value {{ color: {primary}; }}\n",
            bg = self.background,
            text = self.text,
            surface = self.surface,
            success = self.success,
            danger = self.danger,
            warning = self.warning,
            dim = self.text_dim,
            primary = self.primary,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
