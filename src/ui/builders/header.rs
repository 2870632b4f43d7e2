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

//! Header bar builder
//!
//! Creates the application header bar with menu

use gtk4::{gio::Menu, prelude::WidgetExt, HeaderBar, Label, MenuButton};

/// Builds the application header bar
///
/// Shows the gym name as the title and a menu with:
/// - Export members CSV (app.export action)
/// - Quit (app.quit action)
pub fn build_header_bar(gym_name: &str) -> HeaderBar {
    let header_bar = HeaderBar::new();

    let title = Label::new(Some(gym_name));
    title.add_css_class("heading");
    header_bar.set_title_widget(Some(&title));

    // Menu options
    let menu = Menu::new();
    menu.append(Some("تصدير الأعضاء CSV..."), Some("app.export"));
    menu.append(Some("خروج"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    header_bar.pack_end(&menu_button);

    header_bar
}
