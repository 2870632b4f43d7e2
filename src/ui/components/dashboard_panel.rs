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

//! Dashboard strip component
//!
//! A horizontal strip at the top of the window with the four numbers the
//! front desk actually watches: total members, active subscriptions,
//! today's check-ins and this month's revenue.
//!
//! # Layout
//!
//! ```text
//! ┌──────────┬──────────────┬─────────────┬──────────────┐
//! │ الأعضاء  │ اشتراكات نشطة │ حضور اليوم  │ إيراد الشهر  │
//! │   142    │      97      │     31      │  18,500 ج.م  │
//! └──────────┴──────────────┴─────────────┴──────────────┘
//! ```
//!
//! On mobile widths the strip collapses to the two most useful tiles
//! (check-ins and active subscriptions).

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation};
use std::rc::Rc;

use crate::core::responsive::ResponsiveManager;
use crate::ui::Controller;

/// One stat tile: caption on top, big number below
struct StatTile {
    root: GtkBox,
    value_label: Label,
}

impl StatTile {
    fn new(caption: &str) -> Self {
        let root = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(2)
            .hexpand(true)
            .build();
        root.add_css_class("stat-tile");

        let caption_label = Label::builder().label(caption).build();
        caption_label.add_css_class("dim-label");

        let value_label = Label::builder().label("0").build();
        value_label.add_css_class("stat-value");

        root.append(&caption_label);
        root.append(&value_label);

        Self { root, value_label }
    }

    fn set_value(&self, value: &str) {
        self.value_label.set_label(value);
    }
}

/// Dashboard strip showing aggregate gym numbers
pub struct DashboardPanel {
    /// Root widget
    widget: GtkBox,
    /// Total registered members
    members_tile: StatTile,
    /// Members with a subscription covering today
    active_tile: StatTile,
    /// Check-ins recorded today
    checkins_tile: StatTile,
    /// Sum of this calendar month's payments
    revenue_tile: StatTile,
    /// Controller for stats queries
    controller: Rc<Controller>,
    /// Breakpoint source for compact mode
    responsive: Rc<ResponsiveManager>,
}

impl DashboardPanel {
    /// Creates the strip; call `refresh()` after loading data.
    pub fn new(controller: Rc<Controller>, responsive: Rc<ResponsiveManager>) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .hexpand(true)
            .build();
        widget.add_css_class("dashboard-strip");

        let members_tile = StatTile::new("الأعضاء");
        let active_tile = StatTile::new("اشتراكات نشطة");
        let checkins_tile = StatTile::new("حضور اليوم");
        let revenue_tile = StatTile::new("إيراد الشهر");

        widget.append(&members_tile.root);
        widget.append(&active_tile.root);
        widget.append(&checkins_tile.root);
        widget.append(&revenue_tile.root);

        Self {
            widget,
            members_tile,
            active_tile,
            checkins_tile,
            revenue_tile,
            controller,
            responsive,
        }
    }

    /// Re-reads the stats and applies the compact mode for the current
    /// breakpoint.
    pub fn refresh(&self) {
        let stats = self.controller.get_stats();

        self.members_tile.set_value(&stats.total_members.to_string());
        self.active_tile
            .set_value(&stats.active_subscriptions.to_string());
        self.checkins_tile
            .set_value(&stats.todays_checkins.to_string());
        self.revenue_tile
            .set_value(&format!("{:.0}", stats.monthly_revenue));

        // Mobile keeps only the two tiles the desk glances at
        let compact = self.responsive.is_mobile();
        self.members_tile.root.set_visible(!compact);
        self.revenue_tile.root.set_visible(!compact);
    }

    /// Returns the root widget for adding to a container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
