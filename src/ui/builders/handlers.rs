//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Row selection
//! - Keyboard navigation (Up/Down)
//! - Check-in / Edit / Delete buttons
//! - Add member button

use gtk4::{gdk, gio, prelude::*, ApplicationWindow, Button, EventControllerKey};
use std::rc::Rc;

use crate::core::responsive::ResponsiveManager;
use crate::ui::components::{DashboardPanel, DetailsPanel, MemberDialog, MemberList};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// Sets up:
/// - Row selection in the member list
/// - Keyboard navigation (Up/Down)
/// - Check-in button click handler
/// - Edit button click handler
/// - Delete button click handler
/// - Add member button click handler
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    responsive: Rc<ResponsiveManager>,
    member_list: Rc<MemberList>,
    details_panel: Rc<DetailsPanel>,
    dashboard_panel: Rc<DashboardPanel>,
    add_button: &Button,
) {
    // ============================================================================
    // Row selection handler
    // ============================================================================
    let details_panel_clone = details_panel.clone();
    let member_list_clone = member_list.clone();

    member_list.list_box().connect_row_selected(move |_list_box, row| {
        match row {
            Some(r) => {
                let index = r.index() as usize;
                if let Some(member) = member_list_clone.get_member_at_index(index) {
                    details_panel_clone.update_member(Some(&member));
                }
            }
            None => {
                details_panel_clone.update_member(None);
            }
        }
    });

    // ============================================================================
    // Keyboard navigation
    // ============================================================================
    let key_controller = EventControllerKey::new();
    let list_box_for_keys = member_list.list_box().clone();

    key_controller.connect_key_pressed(move |_controller, key, _code, _modifier| {
        match key {
            gdk::Key::Up => {
                if let Some(selected_row) = list_box_for_keys.selected_row() {
                    let current_index = selected_row.index();
                    if current_index > 0 {
                        if let Some(previous_row) =
                            list_box_for_keys.row_at_index(current_index - 1)
                        {
                            list_box_for_keys.select_row(Some(&previous_row));
                        }
                    }
                }
                glib::Propagation::Stop
            }
            gdk::Key::Down => {
                if let Some(selected_row) = list_box_for_keys.selected_row() {
                    let current_index = selected_row.index();
                    if let Some(next_row) = list_box_for_keys.row_at_index(current_index + 1) {
                        list_box_for_keys.select_row(Some(&next_row));
                    }
                } else if let Some(first_row) = list_box_for_keys.row_at_index(0) {
                    list_box_for_keys.select_row(Some(&first_row));
                }
                glib::Propagation::Stop
            }
            _ => glib::Propagation::Proceed,
        }
    });

    member_list.list_box().add_controller(key_controller);
    member_list.list_box().set_can_focus(true);
    member_list.list_box().grab_focus();

    // ============================================================================
    // Check-in button handler
    // ============================================================================
    let controller_for_checkin = controller.clone();
    let details_panel_for_checkin = details_panel.clone();
    let dashboard_for_checkin = dashboard_panel.clone();

    details_panel.connect_check_in(move |member| {
        match controller_for_checkin.check_in(member.id) {
            Ok(record) => {
                details_panel_for_checkin.show_feedback(&format!(
                    "✅ تم تسجيل حضور {} في {}",
                    member.name,
                    record.checked_in_at.format("%H:%M")
                ));
                dashboard_for_checkin.refresh();
            }
            Err(message) => {
                // Same-day duplicates land here with a readable message
                details_panel_for_checkin.show_feedback(&format!("⚠️ {}", message));
            }
        }
    });

    // ============================================================================
    // Edit button handler
    // ============================================================================
    let window_for_edit = window.clone();
    let controller_for_edit = controller.clone();
    let responsive_for_edit = responsive.clone();
    let member_list_for_edit = member_list.clone();
    let details_panel_for_edit = details_panel.clone();

    details_panel.connect_edit(move |member| {
        let window_clone = window_for_edit.clone();

        let dialog = MemberDialog::new(
            &window_clone,
            responsive_for_edit.current_breakpoint(),
            Some(member),
        );

        if let Some(form) = dialog.show_and_wait() {
            let mut updated = member.clone();
            updated.name = form.name;
            updated.phone = form.phone;
            updated.email = form.email;

            match controller_for_edit.update_member(updated) {
                Ok(()) => {
                    details_panel_for_edit.update_member(None);
                    member_list_for_edit.refresh();
                    eprintln!("✅ Member updated");
                }
                Err(e) => {
                    eprintln!("❌ Failed to update member: {}", e);
                    MemberDialog::show_error(&window_clone, &e);
                }
            }
        }
    });

    // ============================================================================
    // Delete button handler
    // ============================================================================
    let window_for_delete = window.clone();
    let controller_for_delete = controller.clone();
    let member_list_for_delete = member_list.clone();
    let details_panel_for_delete = details_panel.clone();
    let dashboard_for_delete = dashboard_panel.clone();

    details_panel.connect_delete(move |member| {
        let controller_clone = controller_for_delete.clone();
        let member_list_clone = member_list_for_delete.clone();
        let details_panel_clone = details_panel_for_delete.clone();
        let dashboard_clone = dashboard_for_delete.clone();
        let member_id = member.id;
        let window_clone = window_for_delete.clone();

        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message("حذف العضو؟")
            .detail(format!(
                "سيتم حذف {} مع كل الاشتراكات والمدفوعات وسجل الحضور.",
                member.name
            ))
            .buttons(vec!["إلغاء", "حذف"])
            .cancel_button(0)
            .default_button(0)
            .build();

        let window_for_inner = window_clone.clone();

        dialog.choose(
            Some(&window_clone),
            None::<&gio::Cancellable>,
            move |response| match response {
                Ok(1) => match controller_clone.delete_member(member_id) {
                    Ok(()) => {
                        member_list_clone.refresh();
                        details_panel_clone.update_member(None);
                        dashboard_clone.refresh();
                        eprintln!("✅ Member deleted");
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to delete member: {}", e);

                        let error_dialog = gtk4::AlertDialog::builder()
                            .modal(true)
                            .message("فشل الحذف")
                            .detail(e.to_string())
                            .buttons(vec!["حسناً"])
                            .build();
                        error_dialog.show(Some(&window_for_inner));
                    }
                },
                Ok(_) => {}
                Err(_e) => {
                    eprintln!("❌ Delete dialog error");
                }
            },
        );
    });

    // ============================================================================
    // Add member button handler
    // ============================================================================
    let window_for_add = window.clone();
    let controller_for_add = controller.clone();
    let responsive_for_add = responsive.clone();
    let member_list_for_add = member_list.clone();
    let dashboard_for_add = dashboard_panel.clone();

    add_button.connect_clicked(move |_| {
        let window_clone = window_for_add.clone();

        let dialog = MemberDialog::new(
            &window_clone,
            responsive_for_add.current_breakpoint(),
            None,
        );

        if let Some(form) = dialog.show_and_wait() {
            match controller_for_add.add_member(&form.name, &form.phone, form.email.as_deref()) {
                Ok(member) => {
                    member_list_for_add.refresh();
                    dashboard_for_add.refresh();
                    eprintln!("✅ Member #{} registered", member.id);
                }
                Err(e) => {
                    eprintln!("❌ Failed to add member: {}", e);
                    MemberDialog::show_error(&window_clone, &e);
                }
            }
        }
    });
}
