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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::core::responsive::ResponsiveManager;
use crate::ui::{
    components::{DashboardPanel, DetailsPanel, MemberList, SearchBar},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Button, Orientation, Paned};
use std::rc::Rc;

/// The widgets the rest of the UI wires signals onto
pub struct MainLayout {
    /// Root container, set as the window child
    pub main_vbox: GtkBox,
    /// The paned whose divider tracks the breakpoint's sidebar width
    pub paned: Paned,
    pub member_list: Rc<MemberList>,
    pub details_panel: Rc<DetailsPanel>,
    pub dashboard_panel: Rc<DashboardPanel>,
    pub add_button: Button,
}

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Dashboard strip at top
/// - Paned layout with:
///   - Start: search bar, add button, member list (resizable)
///   - End: details panel (width follows the breakpoint)
pub fn build_main_layout(
    controller: Rc<Controller>,
    responsive: Rc<ResponsiveManager>,
) -> MainLayout {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    // Dashboard strip at top
    let dashboard_panel = Rc::new(DashboardPanel::new(controller.clone(), responsive.clone()));
    main_vbox.append(dashboard_panel.widget());

    // Paned keeps the details panel at a fixed width
    let paned = Paned::new(Orientation::Horizontal);

    // START SIDE: search + list (resizable)
    let list_vbox = GtkBox::new(Orientation::Vertical, 10);
    list_vbox.set_margin_start(10);
    list_vbox.set_margin_end(10);
    list_vbox.set_margin_bottom(10);

    // Single member list instance
    let member_list = Rc::new(MemberList::new(controller.clone(), responsive.clone()));

    let search_bar = SearchBar::new();
    list_vbox.append(search_bar.widget());

    let add_button = Button::builder().label("➕ عضو جديد").build();
    add_button.add_css_class("suggested-action");
    list_vbox.append(&add_button);

    list_vbox.append(member_list.widget());

    // Wire up search: the query lives in the Controller (single source
    // of truth) and the list re-renders from the filtered view
    let member_list_for_search = member_list.clone();
    let controller_for_search = controller.clone();

    search_bar.widget().connect_search_changed(move |entry| {
        let query = entry.text().to_string();
        controller_for_search.set_search_query(query);
        member_list_for_search.refresh();
    });

    // END SIDE: details panel, width from the breakpoint config
    let details_panel = Rc::new(DetailsPanel::new(controller.clone()));

    paned.set_start_child(Some(&list_vbox));
    paned.set_resize_start_child(true);
    paned.set_shrink_start_child(true);

    paned.set_end_child(Some(details_panel.widget()));
    paned.set_resize_end_child(false);
    paned.set_shrink_end_child(false);

    // Initial divider position for the default desktop width
    paned.set_position(1000 - responsive.sidebar_width());

    main_vbox.append(&paned);

    MainLayout {
        main_vbox,
        paned,
        member_list,
        details_panel,
        dashboard_panel,
        add_button,
    }
}
