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

//! Member list component
//!
//! Displays members in a scrollable list. The presentation follows the
//! current breakpoint: compact cards on mobile widths, table rows with a
//! breakpoint-specific column set on tablet and desktop.

use gtk4::{prelude::*, Box as GtkBox, Label, ListBox, Orientation, ScrolledWindow};
use std::{cell::RefCell, rc::Rc};

use crate::core::layout::{should_use_cards, table_columns, TableKind};
use crate::core::responsive::{Breakpoint, ResponsiveManager};
use crate::core::types::Member;
use crate::ui::Controller;

/// Displays a scrollable, breakpoint-aware list of members
pub struct MemberList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// List box containing rows
    list_box: ListBox,
    /// Controller reference for data access
    controller: Rc<Controller>,
    /// Breakpoint source for layout decisions
    responsive: Rc<ResponsiveManager>,
    /// Cache of currently displayed members
    current_members: RefCell<Vec<Member>>,
}

impl MemberList {
    /// Creates a new member list
    ///
    /// # Arguments
    /// * `controller` - Shared Controller reference
    /// * `responsive` - Shared breakpoint manager
    pub fn new(controller: Rc<Controller>, responsive: Rc<ResponsiveManager>) -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::Single)
            .build();

        scrolled_window.set_child(Some(&list_box));

        Self {
            widget: scrolled_window,
            list_box,
            controller,
            responsive,
            current_members: RefCell::new(Vec::new()),
        }
    }

    /// Refreshes the list from the Controller's current view
    /// (search filter applied).
    pub fn refresh(&self) {
        let members = self.controller.get_current_view();
        self.update_with_members(members);
    }

    /// Updates the list with specific members.
    ///
    /// Rebuilds every row so a breakpoint change re-renders the whole
    /// list in the new presentation.
    pub fn update_with_members(&self, members: Vec<Member>) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        *self.current_members.borrow_mut() = members.clone();

        let breakpoint = self.responsive.current_breakpoint();
        let as_cards = should_use_cards(breakpoint);

        for (index, member) in members.iter().enumerate() {
            let row = if as_cards {
                self.create_card(member)
            } else {
                self.create_row(member, breakpoint, index)
            };
            self.list_box.append(&row);
        }
    }

    /// Builds a compact card for mobile widths
    fn create_card(&self, member: &Member) -> GtkBox {
        let card = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(4)
            .margin_start(8)
            .margin_end(8)
            .margin_top(6)
            .margin_bottom(6)
            .build();
        card.add_css_class("member-card");

        let name = Label::builder()
            .label(&member.name)
            .xalign(0.0)
            .build();
        name.add_css_class("heading");

        let status = Label::builder()
            .label(member.status.label_ar())
            .xalign(0.0)
            .build();
        status.add_css_class(member.status.css_class());

        card.append(&name);
        card.append(&status);
        card
    }

    /// Builds a table row with the column set for the breakpoint
    fn create_row(&self, member: &Member, breakpoint: Breakpoint, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(20)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        // Alternating background colours
        if index % 2 == 0 {
            row.add_css_class("even-row");
        } else {
            row.add_css_class("odd-row");
        }

        for column in table_columns(breakpoint, TableKind::Members) {
            let label = self.cell_label(member, column);
            row.append(&label);
        }

        row
    }

    fn cell_label(&self, member: &Member, column: &str) -> Label {
        let (text, hexpand) = match column {
            "id" => (member.id.to_string(), false),
            "name" => (member.name.clone(), true),
            "phone" => (member.phone.clone(), false),
            "plan" => (
                self.controller
                    .plan_name_for(member.id)
                    .unwrap_or_else(|| "—".to_string()),
                false,
            ),
            "status" => (member.status.label_ar().to_string(), false),
            "join_date" => (member.join_date.to_string(), false),
            other => (other.to_string(), false),
        };

        let label = Label::builder()
            .label(&text)
            .xalign(0.0)
            .hexpand(hexpand)
            .build();

        if column == "status" {
            label.add_css_class(member.status.css_class());
        }

        label
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Member at the given display index, honouring the active filter
    pub fn get_member_at_index(&self, index: usize) -> Option<Member> {
        let members = self.current_members.borrow();
        members.get(index).cloned()
    }

    /// Internal ListBox, for connecting row-selection signals
    pub fn list_box(&self) -> &ListBox {
        &self.list_box
    }

    /// Count of currently displayed members
    pub fn count(&self) -> usize {
        self.current_members.borrow().len()
    }
}
