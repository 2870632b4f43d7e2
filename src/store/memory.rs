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

//! In-memory store
//!
//! Wraps [`GymData`] with no persistence. Used by unit tests and by the
//! controller tests; nothing touches the filesystem.

use chrono::{Local, NaiveDate};

use crate::core::types::{
    AttendanceRecord, DashboardStats, Member, Payment, PaymentMethod, Plan, Subscription,
};
use crate::store::{GymData, GymStore, StoreError};

/// In-memory implementation of [`GymStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: GymData,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            data: GymData::new(),
        }
    }

    /// Store seeded with an existing document
    pub fn with_data(mut data: GymData) -> Self {
        data.normalize_counters();
        Self { data }
    }

    /// Read access to the underlying document
    pub fn data(&self) -> &GymData {
        &self.data
    }
}

impl GymStore for MemoryStore {
    fn search_members(&self, query: &str) -> Vec<Member> {
        self.data.search_members(query)
    }

    fn get_member(&self, id: u32) -> Option<Member> {
        self.data.get_member(id)
    }

    fn add_member(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Member, StoreError> {
        Ok(self
            .data
            .add_member(name, phone, email, Local::now().date_naive()))
    }

    fn update_member(&mut self, member: Member) -> Result<(), StoreError> {
        self.data.update_member(member)
    }

    fn delete_member(&mut self, id: u32) -> Result<(), StoreError> {
        self.data.delete_member(id)
    }

    fn check_in(&mut self, member_id: u32) -> Result<AttendanceRecord, StoreError> {
        self.data.check_in(member_id, Local::now().naive_local())
    }

    fn get_attendance_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.data.attendance_by_date(date)
    }

    fn list_plans(&self) -> Vec<Plan> {
        self.data.plans.clone()
    }

    fn add_plan(
        &mut self,
        name: &str,
        duration_days: u32,
        price: f64,
    ) -> Result<Plan, StoreError> {
        Ok(self.data.add_plan(name, duration_days, price))
    }

    fn update_plan(&mut self, plan: Plan) -> Result<(), StoreError> {
        self.data.update_plan(plan)
    }

    fn delete_plan(&mut self, id: u32) -> Result<(), StoreError> {
        self.data.delete_plan(id)
    }

    fn subscribe(
        &mut self,
        member_id: u32,
        plan_id: u32,
        start: NaiveDate,
    ) -> Result<Subscription, StoreError> {
        self.data
            .subscribe(member_id, plan_id, start, Local::now().date_naive())
    }

    fn subscriptions_for_member(&self, member_id: u32) -> Vec<Subscription> {
        self.data.subscriptions_for_member(member_id)
    }

    fn record_payment(
        &mut self,
        member_id: u32,
        amount: f64,
        method: PaymentMethod,
        note: Option<&str>,
    ) -> Result<Payment, StoreError> {
        self.data
            .record_payment(member_id, amount, method, note, Local::now().naive_local())
    }

    fn payments_for_member(&self, member_id: u32) -> Vec<Payment> {
        self.data.payments_for_member(member_id)
    }

    fn get_dashboard_stats(&self) -> DashboardStats {
        self.data.dashboard_stats(Local::now().date_naive())
    }
}
