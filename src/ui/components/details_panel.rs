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

//! Details panel component for the selected member.
//!
//! Shows the member's contact details, current plan, subscription status
//! and remaining days, with check-in / edit / delete actions. The
//! check-in result (including the duplicate-same-day rejection) is shown
//! inline instead of a modal.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, Button, Frame, Grid, Label,
    Orientation, Separator,
};
use std::{cell::RefCell, rc::Rc};

use crate::{core::types::Member, ui::Controller};

/// Panel displaying details of the selected member.
///
/// The panel width is enforced by the parent Paned widget in app.rs
pub struct DetailsPanel {
    /// Root widget (Frame)
    widget: Frame,
    /// Member name
    name_label: Label,
    /// Phone number
    phone_label: Label,
    /// Email (or placeholder)
    email_label: Label,
    /// Current plan name
    plan_label: Label,
    /// Subscription status and days remaining
    status_label: Label,
    /// Inline result of the last check-in attempt
    feedback_label: Label,
    /// Check-in button
    check_in_button: Button,
    /// Edit button
    edit_button: Button,
    /// Delete button
    delete_button: Button,
    /// Controller for plan/subscription lookups
    controller: Rc<Controller>,
    /// Currently displayed member (for the action buttons)
    current_member: Rc<RefCell<Option<Member>>>,
}

impl DetailsPanel {
    /// Helper to create a label row (header + value) for the details grid
    fn create_label_row(header_text: &str, initial_value: &str) -> (Label, Label) {
        let header = Label::builder()
            .label(header_text)
            .halign(Align::End)
            .xalign(1.0)
            .build();
        header.add_css_class("field-header");

        let value = Label::builder()
            .label(initial_value)
            .halign(Align::Start)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .max_width_chars(20)
            .build();

        (header, value)
    }

    /// Create a new details panel.
    pub fn new(controller: Rc<Controller>) -> Self {
        let frame = Frame::builder()
            .label("العضو المحدد")
            .margin_start(10)
            .margin_end(10)
            .margin_top(10)
            .margin_bottom(10)
            .width_request(280)
            .build();

        let vbox = GtkBox::new(Orientation::Vertical, 10);
        vbox.set_margin_start(15);
        vbox.set_margin_end(15);
        vbox.set_margin_top(15);
        vbox.set_margin_bottom(15);

        let grid = Grid::builder().row_spacing(10).column_spacing(15).build();

        let (name_header, name_label) = Self::create_label_row("الاسم:", "اختر عضواً...");
        grid.attach(&name_header, 0, 0, 1, 1);
        grid.attach(&name_label, 1, 0, 1, 1);

        let (phone_header, phone_label) = Self::create_label_row("الهاتف:", "");
        grid.attach(&phone_header, 0, 1, 1, 1);
        grid.attach(&phone_label, 1, 1, 1, 1);

        let (email_header, email_label) = Self::create_label_row("البريد:", "");
        grid.attach(&email_header, 0, 2, 1, 1);
        grid.attach(&email_label, 1, 2, 1, 1);

        let (plan_header, plan_label) = Self::create_label_row("الخطة:", "");
        grid.attach(&plan_header, 0, 3, 1, 1);
        grid.attach(&plan_label, 1, 3, 1, 1);

        let (status_header, status_label) = Self::create_label_row("الحالة:", "");
        grid.attach(&status_header, 0, 4, 1, 1);
        grid.attach(&status_label, 1, 4, 1, 1);

        vbox.append(&grid);

        let separator = Separator::new(Orientation::Horizontal);
        separator.set_margin_top(10);
        separator.set_margin_bottom(10);
        vbox.append(&separator);

        let check_in_button = Button::builder()
            .label("✅ تسجيل حضور")
            .sensitive(false)
            .build();
        check_in_button.add_css_class("suggested-action");
        vbox.append(&check_in_button);

        let feedback_label = Label::builder()
            .label("")
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        feedback_label.add_css_class("dim-label");
        vbox.append(&feedback_label);

        let edit_button = Button::builder()
            .label("✏️ تعديل البيانات")
            .sensitive(false)
            .build();
        vbox.append(&edit_button);

        let delete_button = Button::builder()
            .label("🗑️  حذف العضو")
            .sensitive(false)
            .build();
        delete_button.add_css_class("destructive-action");
        vbox.append(&delete_button);

        frame.set_child(Some(&vbox));

        Self {
            widget: frame,
            name_label,
            phone_label,
            email_label,
            plan_label,
            status_label,
            feedback_label,
            check_in_button,
            edit_button,
            delete_button,
            controller,
            current_member: Rc::new(RefCell::new(None)),
        }
    }

    /// Update the panel to display a specific member.
    ///
    /// Passing `None` clears the panel and disables the action buttons.
    pub fn update_member(&self, member: Option<&Member>) {
        *self.current_member.borrow_mut() = member.cloned();

        self.check_in_button.set_sensitive(member.is_some());
        self.edit_button.set_sensitive(member.is_some());
        self.delete_button.set_sensitive(member.is_some());
        self.feedback_label.set_label("");

        match member {
            Some(m) => {
                self.name_label.set_label(&m.name);
                self.name_label.set_tooltip_text(Some(&m.name));

                self.phone_label.set_label(&m.phone);

                let email_text = m.email.as_deref().unwrap_or("(لا يوجد)");
                self.email_label.set_label(email_text);

                let plan_text = self
                    .controller
                    .plan_name_for(m.id)
                    .unwrap_or_else(|| "(بدون اشتراك)".to_string());
                self.plan_label.set_label(&plan_text);

                let status_text = self.format_status(m);
                self.status_label.set_label(&status_text);
                self.status_label.remove_css_class("status-active");
                self.status_label.remove_css_class("status-expired");
                self.status_label.remove_css_class("status-suspended");
                self.status_label.add_css_class(m.status.css_class());
            }
            None => {
                self.name_label.set_label("👈 اختر عضواً");
                self.name_label.set_tooltip_text(None);
                self.phone_label.set_label("");
                self.email_label.set_label("");
                self.plan_label.set_label("");
                self.status_label.set_label("");
            }
        }
    }

    /// Status line: Arabic label plus remaining days when active
    fn format_status(&self, member: &Member) -> String {
        let today = chrono::Local::now().date_naive();

        let remaining = self
            .controller
            .subscriptions_for_member(member.id)
            .into_iter()
            .next()
            .map(|s| s.days_remaining(today))
            .unwrap_or(0);

        if remaining > 0 {
            format!("{} — {} يوم متبقي", member.status.label_ar(), remaining)
        } else {
            member.status.label_ar().to_string()
        }
    }

    /// Shows a message under the check-in button (result or error)
    pub fn show_feedback(&self, message: &str) {
        self.feedback_label.set_label(message);
    }

    /// Connects the check-in button to a callback
    pub fn connect_check_in<F>(&self, callback: F)
    where
        F: Fn(&Member) + 'static,
    {
        let current_member = self.current_member.clone();

        self.check_in_button.connect_clicked(move |_button| {
            // Clone out before calling: the callback may refresh the UI
            let member = current_member.borrow().as_ref().cloned();

            if let Some(member) = member {
                callback(&member);
            }
        });
    }

    /// Connects the edit button to a callback
    pub fn connect_edit<F>(&self, callback: F)
    where
        F: Fn(&Member) + 'static,
    {
        let current_member = self.current_member.clone();

        self.edit_button.connect_clicked(move |_button| {
            let member = current_member.borrow().as_ref().cloned();

            if let Some(member) = member {
                callback(&member);
            }
        });
    }

    /// Connects the delete button to a callback
    pub fn connect_delete<F>(&self, callback: F)
    where
        F: Fn(&Member) + 'static,
    {
        let current_member = self.current_member.clone();

        self.delete_button.connect_clicked(move |_button| {
            let member = current_member.borrow().as_ref().cloned();

            if let Some(member) = member {
                callback(&member);
            }
        });
    }

    /// Get the root widget for adding to a container.
    pub fn widget(&self) -> &Frame {
        &self.widget
    }
}
