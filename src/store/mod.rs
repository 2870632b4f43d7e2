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

//! Data access layer
//!
//! The UI and CLI only see the [`GymStore`] trait; everything behind it is
//! swappable. Two implementations:
//!
//! - [`JsonStore`]: one JSON document on disk, every save preceded by a
//!   timestamped backup and performed as an atomic write
//! - [`MemoryStore`]: in-memory, for tests
//!
//! The shared business rules (id assignment, status refresh, duplicate
//! check-in rejection) live in [`data::GymData`] so both implementations
//! behave identically.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::types::{
    AttendanceRecord, DashboardStats, Member, Payment, PaymentMethod, Plan, Subscription,
};
use chrono::NaiveDate;

pub mod data;
pub mod json;
pub mod memory;
pub mod settings;

pub use data::GymData;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use settings::Settings;

/// Errors that can occur in the data access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced member does not exist.
    #[error("Member #{0} not found")]
    MemberNotFound(u32),

    /// Referenced plan does not exist.
    #[error("Plan #{0} not found")]
    PlanNotFound(u32),

    /// Plan still referenced by at least one subscription.
    #[error("Plan #{0} is still in use by subscriptions")]
    PlanInUse(u32),

    /// Member already checked in on this day.
    #[error("Member #{member_id} already checked in on {date}")]
    AlreadyCheckedIn {
        /// Member who tried to check in twice
        member_id: u32,
        /// The day in question
        date: NaiveDate,
    },

    /// Data file content is not a valid gym document.
    #[error("Data file corrupt: {0}")]
    Corrupt(String),

    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),

    /// Failed to create a backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The persistence interface the rest of the application talks to.
///
/// Mirrors what the front desk actually does: look up members, record
/// check-ins and payments, manage plans and subscriptions, and read the
/// dashboard numbers. Mutating methods persist before returning (a
/// no-op for the in-memory store).
pub trait GymStore {
    /// Case-insensitive search over member name, phone and id.
    /// An empty query returns every member.
    fn search_members(&self, query: &str) -> Vec<Member>;

    /// Looks up a single member.
    fn get_member(&self, id: u32) -> Option<Member>;

    /// Registers a new member; the store assigns the id and join date.
    fn add_member(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Member, StoreError>;

    /// Replaces an existing member record (matched by id).
    fn update_member(&mut self, member: Member) -> Result<(), StoreError>;

    /// Removes a member together with their subscriptions, payments and
    /// attendance history.
    fn delete_member(&mut self, id: u32) -> Result<(), StoreError>;

    /// Records a check-in for today. A second check-in on the same day
    /// is rejected with [`StoreError::AlreadyCheckedIn`].
    fn check_in(&mut self, member_id: u32) -> Result<AttendanceRecord, StoreError>;

    /// All check-ins on the given calendar day.
    fn get_attendance_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord>;

    /// All plans, in creation order.
    fn list_plans(&self) -> Vec<Plan>;

    /// Creates a plan; the store assigns the id.
    fn add_plan(&mut self, name: &str, duration_days: u32, price: f64)
        -> Result<Plan, StoreError>;

    /// Replaces an existing plan (matched by id).
    fn update_plan(&mut self, plan: Plan) -> Result<(), StoreError>;

    /// Removes a plan. Fails with [`StoreError::PlanInUse`] while any
    /// subscription references it.
    fn delete_plan(&mut self, id: u32) -> Result<(), StoreError>;

    /// Subscribes a member to a plan starting on `start`; the end date is
    /// derived from the plan duration and the member becomes active.
    fn subscribe(
        &mut self,
        member_id: u32,
        plan_id: u32,
        start: NaiveDate,
    ) -> Result<Subscription, StoreError>;

    /// Subscriptions for a member, most recent first.
    fn subscriptions_for_member(&self, member_id: u32) -> Vec<Subscription>;

    /// Records a payment with the current timestamp.
    fn record_payment(
        &mut self,
        member_id: u32,
        amount: f64,
        method: PaymentMethod,
        note: Option<&str>,
    ) -> Result<Payment, StoreError>;

    /// Payments for a member, most recent first.
    fn payments_for_member(&self, member_id: u32) -> Vec<Payment>;

    /// Aggregate numbers for the dashboard strip.
    fn get_dashboard_stats(&self) -> DashboardStats;

    /// Re-reads state from the backing medium after an external change.
    /// In-memory stores have nothing to re-read.
    fn reload(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
