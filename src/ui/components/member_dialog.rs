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

//! Add/edit member dialog
//!
//! A modal form for the member's name, phone and email. The dialog is
//! sized from the current breakpoint's hints: percentage strings are
//! resolved against the parent window on mobile and tablet, fixed pixel
//! strings are used as-is on desktop.

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box as GtkBox, Button, Entry, Grid, Label, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::layout::dialog_size;
use crate::core::responsive::Breakpoint;
use crate::core::types::Member;

/// The values collected by the form
#[derive(Clone, Debug, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Dialog for adding a new member or editing an existing one
pub struct MemberDialog {
    dialog_window: Window,
    name_entry: Entry,
    phone_entry: Entry,
    email_entry: Entry,
    response: Rc<Cell<Option<DialogResponse>>>,
}

#[derive(Clone, Debug, Copy, PartialEq)]
enum DialogResponse {
    Save,
    Cancel,
}

/// Resolves one breakpoint size hint against a parent dimension.
///
/// `"95%"` becomes 95% of `parent_extent`; `"700"` stays 700 pixels.
fn resolve_size_hint(hint: &str, parent_extent: i32) -> i32 {
    if let Some(percent) = hint.strip_suffix('%') {
        let fraction: i32 = percent.parse().unwrap_or(80);
        parent_extent * fraction / 100
    } else {
        hint.parse().unwrap_or(480)
    }
}

impl MemberDialog {
    /// Creates the dialog, pre-filled when editing an existing member.
    pub fn new(
        parent: &ApplicationWindow,
        breakpoint: Breakpoint,
        member: Option<&Member>,
    ) -> Self {
        let title = if member.is_some() {
            "✏️ تعديل بيانات العضو"
        } else {
            "➕ عضو جديد"
        };

        let (width_hint, height_hint) = dialog_size(breakpoint);
        let width = resolve_size_hint(width_hint, parent.width());
        let height = resolve_size_hint(height_hint, parent.height());

        let dialog_window = Window::builder()
            .title(title)
            .modal(true)
            .transient_for(parent)
            .default_width(width)
            .default_height(height)
            .resizable(false)
            .build();

        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let name_label = Label::builder()
            .label("الاسم:")
            .halign(gtk4::Align::End)
            .build();
        let name_entry = Entry::builder()
            .text(member.map(|m| m.name.as_str()).unwrap_or(""))
            .placeholder_text("الاسم الكامل")
            .hexpand(true)
            .build();
        grid.attach(&name_label, 0, 0, 1, 1);
        grid.attach(&name_entry, 1, 0, 1, 1);

        let phone_label = Label::builder()
            .label("الهاتف:")
            .halign(gtk4::Align::End)
            .build();
        let phone_entry = Entry::builder()
            .text(member.map(|m| m.phone.as_str()).unwrap_or(""))
            .placeholder_text("01XXXXXXXXX")
            .hexpand(true)
            .build();
        grid.attach(&phone_label, 0, 1, 1, 1);
        grid.attach(&phone_entry, 1, 1, 1, 1);

        let email_label = Label::builder()
            .label("البريد:")
            .halign(gtk4::Align::End)
            .build();
        let email_entry = Entry::builder()
            .text(member.and_then(|m| m.email.as_deref()).unwrap_or(""))
            .placeholder_text("اختياري")
            .hexpand(true)
            .build();
        grid.attach(&email_label, 0, 2, 1, 1);
        grid.attach(&email_entry, 1, 2, 1, 1);

        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(gtk4::Align::End)
            .margin_start(20)
            .margin_end(20)
            .margin_bottom(20)
            .build();

        let cancel_button = Button::builder().label("إلغاء").build();

        let save_button = Button::builder().label("💾 حفظ").build();
        save_button.add_css_class("suggested-action");

        button_box.append(&cancel_button);
        button_box.append(&save_button);

        let main_box = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(0)
            .build();

        main_box.append(&grid);
        main_box.append(&button_box);

        dialog_window.set_child(Some(&main_box));

        let response: Rc<Cell<Option<DialogResponse>>> = Rc::new(Cell::new(None));

        {
            let response = response.clone();
            let window = dialog_window.clone();
            cancel_button.connect_clicked(move |_| {
                response.set(Some(DialogResponse::Cancel));
                window.close();
            });
        }

        {
            let response = response.clone();
            let window = dialog_window.clone();
            save_button.connect_clicked(move |_| {
                response.set(Some(DialogResponse::Save));
                window.close();
            });
        }

        // Window X button counts as Cancel
        {
            let response = response.clone();
            dialog_window.connect_close_request(move |_| {
                if response.get().is_none() {
                    response.set(Some(DialogResponse::Cancel));
                }
                glib::Propagation::Proceed
            });
        }

        Self {
            dialog_window,
            name_entry,
            phone_entry,
            email_entry,
            response,
        }
    }

    /// Reads the form fields.
    ///
    /// Deep validation (phone/email format) is the controller's job;
    /// the dialog only normalises whitespace and empty-to-None.
    fn read_form(&self) -> MemberForm {
        let email_text = self.email_entry.text().to_string();
        let email = if email_text.trim().is_empty() {
            None
        } else {
            Some(email_text.trim().to_string())
        };

        MemberForm {
            name: self.name_entry.text().trim().to_string(),
            phone: self.phone_entry.text().trim().to_string(),
            email,
        }
    }

    /// Shows the dialog and blocks on a nested main loop until the user
    /// saves or cancels.
    pub fn show_and_wait(self) -> Option<MemberForm> {
        self.response.set(None);
        self.dialog_window.present();

        let main_context = glib::MainContext::default();
        while self.response.get().is_none() && self.dialog_window.is_visible() {
            main_context.iteration(true);
        }

        match self.response.get() {
            Some(DialogResponse::Save) => {
                let form = self.read_form();
                self.dialog_window.close();
                Some(form)
            }
            _ => {
                self.dialog_window.close();
                None
            }
        }
    }

    /// Shows a validation error in a small modal and waits for dismissal
    pub fn show_error(parent: &ApplicationWindow, message: &str) {
        let error_window = Window::builder()
            .title("❌ بيانات غير صالحة")
            .modal(true)
            .transient_for(parent)
            .default_width(350)
            .default_height(150)
            .resizable(false)
            .build();

        let vbox = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let label = Label::builder()
            .label(message)
            .wrap(true)
            .justify(gtk4::Justification::Center)
            .build();

        let ok_button = Button::builder()
            .label("حسناً")
            .halign(gtk4::Align::Center)
            .build();

        vbox.append(&label);
        vbox.append(&ok_button);

        error_window.set_child(Some(&vbox));

        let error_window_clone = error_window.clone();
        ok_button.connect_clicked(move |_| {
            error_window_clone.close();
        });

        error_window.present();

        let main_context = glib::MainContext::default();
        while error_window.is_visible() {
            main_context.iteration(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_size_hint;

    #[test]
    fn test_percentage_hint_scales_with_parent() {
        assert_eq!(resolve_size_hint("95%", 400), 380);
        assert_eq!(resolve_size_hint("80%", 1000), 800);
    }

    #[test]
    fn test_pixel_hint_ignores_parent() {
        assert_eq!(resolve_size_hint("700", 1920), 700);
        assert_eq!(resolve_size_hint("520", 300), 520);
    }

    #[test]
    fn test_garbage_hint_falls_back() {
        assert_eq!(resolve_size_hint("wat", 1000), 480);
        assert_eq!(resolve_size_hint("wat%", 1000), 800);
    }
}
