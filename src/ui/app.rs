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

//! GTK4 Application wrapper
//!
//! Sets up the GTK4 application lifecycle, the RTL main window and the
//! responsive wiring: the window's width notifications feed the
//! breakpoint manager, and breakpoint transitions re-render the member
//! list, move the paned divider and collapse the dashboard strip.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Opens the JSON store and creates the Controller
//!   ├─ Builds main window (RTL, themed)
//!   ├─ Feeds resize events to ResponsiveManager
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::responsive::ResponsiveManager;
use crate::core::theme::Theme;
use crate::store::{GymStore, JsonStore, Settings};
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::file_watcher::FileWatcher;
use crate::ui::{actions, Controller};

/// How often the data file watcher is polled
const WATCH_POLL_SECONDS: u32 = 2;

/// GTK4 Application for the gym front desk
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Loaded application settings
    settings: Settings,
}

impl App {
    /// Creates a new App over the data file named in `settings`.
    ///
    /// The store is opened (and initialised on first run) before GTK
    /// starts; a failure here is a startup error, not a broken window.
    /// The file watcher is optional: if it cannot be created the app
    /// runs without live reload.
    pub fn new(settings: Settings) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("com.gymmanager.desk")
            .build();

        let store = JsonStore::open(settings.data_file.clone())
            .map_err(|e| format!("Failed to open data file: {}", e))?;

        let watcher = match FileWatcher::new(settings.data_file.clone()) {
            Ok(w) => Some(w),
            Err(e) => {
                eprintln!("⚠️  File watching unavailable: {}", e);
                None
            }
        };

        let store: Rc<RefCell<dyn GymStore>> = Rc::new(RefCell::new(store));

        let controller = match watcher {
            Some(w) => Controller::with_watcher(store, w),
            None => Controller::new(store),
        };

        Ok(Self {
            app,
            controller: Rc::new(controller),
            settings,
        })
    }

    /// Runs the GTK4 application (blocks until exit).
    pub fn run(self) {
        let controller = self.controller.clone();
        let settings = self.settings.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), &settings);
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads the stylesheet plus the generated theme CSS
    fn load_css() {
        let provider = CssProvider::new();
        let mut css = include_str!("style.css").to_string();
        css.push_str(&Theme::light().to_css());
        provider.load_from_string(&css);

        let Some(display) = gdk::Display::default() else {
            eprintln!("⚠️  No display available, skipping stylesheet");
            return;
        };

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>, settings: &Settings) {
        // Arabic interface: everything lays out right-to-left
        gtk4::Widget::set_default_direction(gtk4::TextDirection::Rtl);

        Self::load_css();

        let loaded = controller.load_members();
        eprintln!("✅ Loaded {} members", loaded);

        let window = ApplicationWindow::builder()
            .application(app)
            .title(settings.gym_name.as_str())
            .default_width(1000)
            .default_height(800)
            .build();

        window.set_titlebar(Some(&build_header_bar(&settings.gym_name)));

        let responsive = ResponsiveManager::shared();

        let layout = build_main_layout(controller.clone(), responsive.clone());
        window.set_child(Some(&layout.main_vbox));

        wire_up_handlers(
            &window,
            controller.clone(),
            responsive.clone(),
            layout.member_list.clone(),
            layout.details_panel.clone(),
            layout.dashboard_panel.clone(),
            &layout.add_button,
        );

        // ============================================================
        // Responsive wiring
        // ============================================================

        // Breakpoint transition: re-render the list in the new
        // presentation and collapse/expand the dashboard strip
        let member_list_for_bp = layout.member_list.clone();
        let dashboard_for_bp = layout.dashboard_panel.clone();
        responsive.register_callback(move |_breakpoint| {
            member_list_for_bp.refresh();
            dashboard_for_bp.refresh();
        });

        // Breakpoint transition: details panel width and visibility.
        // A sidebar width of zero means the panel is hidden entirely.
        let paned_for_bp = layout.paned.clone();
        let details_for_bp = layout.details_panel.clone();
        let responsive_for_bp = responsive.clone();
        let window_for_bp = window.clone();
        responsive.register_callback(move |_breakpoint| {
            let sidebar = responsive_for_bp.sidebar_width();
            details_for_bp.widget().set_visible(sidebar > 0);
            if sidebar > 0 {
                paned_for_bp.set_position(window_for_bp.width() - sidebar);
            }
        });

        // Feed window resizes into the breakpoint manager and keep the
        // divider anchored to the details panel
        let responsive_for_resize = responsive.clone();
        let paned_for_resize = layout.paned.clone();
        window.connect_default_width_notify(move |window| {
            let width = window.default_width();
            responsive_for_resize.observe_resize(width);

            let sidebar = responsive_for_resize.sidebar_width();
            if sidebar > 0 {
                paned_for_resize.set_position(width - sidebar);
            }
        });

        // Poll the data file watcher; reload and re-render on change
        let controller_for_watch = controller.clone();
        let member_list_for_watch = layout.member_list.clone();
        let details_for_watch = layout.details_panel.clone();
        let dashboard_for_watch = layout.dashboard_panel.clone();
        glib::timeout_add_seconds_local(WATCH_POLL_SECONDS, move || {
            if controller_for_watch.check_external_changes() {
                eprintln!("🔄 Data file changed externally, reloading");
                member_list_for_watch.refresh();
                details_for_watch.update_member(None);
                dashboard_for_watch.refresh();
            }
            glib::ControlFlow::Continue
        });

        // App-level actions (header menu)
        actions::setup_quit_action(app);
        actions::setup_export_action(app, &window, controller.clone());

        // Initial display
        layout.member_list.refresh();
        layout.dashboard_panel.refresh();

        window.present();
    }
}
