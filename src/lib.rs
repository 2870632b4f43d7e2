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

//! Gym Manager
//!
//! A front-desk gym management application with an Arabic RTL GTK4
//! interface that adapts to the window width.
//!
//! # Features
//!
//! - **Responsive layout:** Mobile/tablet/desktop breakpoints with
//!   resize hysteresis; the member list switches between cards and
//!   table rows, and panels resize on breakpoint transitions
//! - **Member management:** Registration, search, subscriptions,
//!   payments and daily check-ins with duplicate rejection
//! - **Automatic backups:** Timestamped backups before every save,
//!   writes are atomic
//! - **Live reload:** The UI follows external edits to the data file
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, breakpoints, layout rules,
//!   theme, input validation)
//! - **`store`:** Persistence (JSON document, backups, settings)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Classifying a window width
//!
//! ```
//! use gym_manager::core::responsive::{Breakpoint, ResponsiveManager};
//!
//! let manager = ResponsiveManager::new();
//! manager.observe_resize(800);
//! assert_eq!(manager.current_breakpoint(), Breakpoint::Tablet);
//! ```
//!
//! ## Working with the store
//!
//! ```no_run
//! use gym_manager::store::{GymStore, JsonStore};
//! use std::path::PathBuf;
//!
//! let mut store = JsonStore::open(PathBuf::from("/tmp/gym.json"))?;
//! let member = store.add_member("أحمد علي", "01001234567", None)?;
//! store.check_in(member.id)?;
//! # Ok::<(), gym_manager::store::StoreError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use gym_manager::store::Settings;
//! use gym_manager::ui::App;
//!
//! let app = App::new(Settings::default())?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), String>(())
//! ```

pub mod core;
pub mod store;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Breakpoint, Member, MemberStatus, ResponsiveManager};
