//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, export)
//! and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow, FileDialog};
use std::rc::Rc;

use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Sets up the export action
///
/// Creates a GTK action that opens a file save dialog and writes the
/// current member list as CSV to the selected file.
pub fn setup_export_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
) {
    let export_action = gio::SimpleAction::new("export", None);
    let controller_for_export = controller.clone();
    let window_for_export = window.clone();

    export_action.connect_activate(move |_, _| {
        let file_dialog = FileDialog::builder()
            .title("تصدير الأعضاء")
            .initial_name("members.csv")
            .build();

        let controller_clone = controller_for_export.clone();
        let window_clone = window_for_export.clone();

        file_dialog.save(Some(&window_clone), None::<&gio::Cancellable>, move |result| {
            match result {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        eprintln!("❌ Export target has no local path");
                        return;
                    };

                    let csv = controller_clone.export_members_csv();
                    match std::fs::write(&path, csv) {
                        Ok(()) => eprintln!("✅ Exported members to {}", path.display()),
                        Err(e) => eprintln!("❌ Export failed: {}", e),
                    }
                }
                Err(_) => eprintln!("🚫 Export cancelled"),
            }
        });
    });

    app.add_action(&export_action);
}
