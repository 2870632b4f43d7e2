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

//! Controller tests
//!
//! Run against the in-memory store; no GTK, no filesystem.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::{GymStore, MemoryStore};
use crate::ui::Controller;

/// Helper: Controller over an in-memory store seeded with two members
/// and one plan.
fn seeded_controller() -> Controller {
    let mut store = MemoryStore::new();
    store.add_member("أحمد علي", "01001234567", None).unwrap();
    store
        .add_member("سارة محمود", "01119876543", Some("sara@gym.example"))
        .unwrap();
    store.add_plan("شهري", 30, 500.0).unwrap();

    let store: Rc<RefCell<dyn GymStore>> = Rc::new(RefCell::new(store));
    let controller = Controller::new(store);
    controller.load_members();
    controller
}

#[test]
fn test_load_members_fills_cache() {
    let controller = seeded_controller();

    assert_eq!(controller.member_count(), 2);
    assert_eq!(controller.get_members().len(), 2);
}

#[test]
fn test_search_query_filters_current_view() {
    let controller = seeded_controller();

    controller.set_search_query("سارة".to_string());
    let view = controller.get_current_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "سارة محمود");

    // Clearing the query restores the full list
    controller.set_search_query(String::new());
    assert_eq!(controller.get_current_view().len(), 2);
}

#[test]
fn test_add_member_refreshes_cache() {
    let controller = seeded_controller();

    let member = controller
        .add_member("خالد حسن", "01223334444", None)
        .unwrap();

    assert_eq!(member.id, 3);
    assert_eq!(controller.member_count(), 3);
}

#[test]
fn test_add_member_rejects_bad_phone() {
    let controller = seeded_controller();

    let result = controller.add_member("خالد حسن", "abc", None);
    assert!(result.is_err());

    // Cache untouched on rejection
    assert_eq!(controller.member_count(), 2);
}

#[test]
fn test_add_member_rejects_empty_name() {
    let controller = seeded_controller();

    assert!(controller.add_member("  ", "01001112222", None).is_err());
}

#[test]
fn test_update_member_validates_input() {
    let controller = seeded_controller();

    let mut member = controller.get_members()[0].clone();
    member.phone = "not-a-phone".to_string();

    assert!(controller.update_member(member).is_err());
}

#[test]
fn test_delete_member_refreshes_cache() {
    let controller = seeded_controller();

    controller.delete_member(1).unwrap();
    assert_eq!(controller.member_count(), 1);
    assert_eq!(controller.get_members()[0].id, 2);
}

#[test]
fn test_duplicate_check_in_reports_error_message() {
    let controller = seeded_controller();

    assert!(controller.check_in(1).is_ok());

    let second = controller.check_in(1);
    assert!(second.is_err());
    assert!(second.unwrap_err().contains("already checked in"));
}

#[test]
fn test_subscribe_activates_member() {
    let controller = seeded_controller();

    controller.subscribe(1, 1).unwrap();

    let member = controller
        .get_members()
        .into_iter()
        .find(|m| m.id == 1)
        .unwrap();
    assert_eq!(member.status, crate::core::types::MemberStatus::Active);
}

#[test]
fn test_plan_name_for_subscribed_member() {
    let controller = seeded_controller();

    assert_eq!(controller.plan_name_for(1), None);

    controller.subscribe(1, 1).unwrap();
    assert_eq!(controller.plan_name_for(1).as_deref(), Some("شهري"));
}

#[test]
fn test_stats_reflect_activity() {
    let controller = seeded_controller();

    controller.subscribe(1, 1).unwrap();
    controller.check_in(1).unwrap();

    let stats = controller.get_stats();
    assert_eq!(stats.total_members, 2);
    assert_eq!(stats.active_subscriptions, 1);
    assert_eq!(stats.todays_checkins, 1);
}

#[test]
fn test_export_csv_has_header_and_rows() {
    let controller = seeded_controller();

    let csv = controller.export_members_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "id,name,phone,email,join_date,status");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,أحمد علي,01001234567"));
    assert!(lines[2].contains("sara@gym.example"));
}

#[test]
fn test_external_change_check_is_inert_without_watcher() {
    let controller = seeded_controller();

    assert!(!controller.check_external_changes());
}
