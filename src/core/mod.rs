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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and logic shared by the CLI
//! and the GTK4 interface, including:
//! - Domain types for members, plans, subscriptions, payments, attendance
//! - Responsive breakpoint tracking and observer notification
//! - Pure layout helpers (font scaling, column sets, dialog sizing)
//! - The per-window theme context
//! - Member input validation
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod layout;
pub mod responsive;
pub mod theme;
pub mod types;
pub mod validator;

pub use layout::{create_responsive_font, dialog_size, should_use_cards, FontSpec, TableKind};
pub use responsive::{Breakpoint, BreakpointConfig, ResponsiveManager};
pub use theme::Theme;
pub use types::*;
pub use validator::{MemberValidator, ValidationError};

#[cfg(test)]
mod tests;
