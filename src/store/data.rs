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

//! The gym document and its business rules
//!
//! `GymData` is the whole database as one serde document: members, plans,
//! subscriptions, payments, attendance, plus the id counters. Both store
//! implementations delegate here so the rules (id assignment, duplicate
//! check-in rejection, status refresh, cascade deletes) exist exactly
//! once.
//!
//! Date-sensitive operations take `today`/`now` as parameters so tests
//! never depend on the wall clock; the store wrappers pass
//! `chrono::Local::now()`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::types::{
    AttendanceRecord, DashboardStats, Member, MemberStatus, Payment, PaymentMethod, Plan,
    Subscription,
};
use crate::store::StoreError;

/// Complete gym state as one serializable document
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GymData {
    /// Registered members
    pub members: Vec<Member>,
    /// Offered plans
    pub plans: Vec<Plan>,
    /// Subscriptions across all members
    pub subscriptions: Vec<Subscription>,
    /// Payment history
    pub payments: Vec<Payment>,
    /// Attendance log
    pub attendance: Vec<AttendanceRecord>,

    /// Next id handed out per record kind
    #[serde(default)]
    next_member_id: u32,
    #[serde(default)]
    next_plan_id: u32,
    #[serde(default)]
    next_subscription_id: u32,
    #[serde(default)]
    next_payment_id: u32,
    #[serde(default)]
    next_attendance_id: u32,
}

impl GymData {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(counter: &mut u32) -> u32 {
        // Counters start at 0 in old documents; ids start at 1
        *counter += 1;
        *counter
    }

    /// Clamps every id counter to the highest id already present.
    ///
    /// Externally authored documents may omit the counters; serde then
    /// defaults them to zero and the next insert would re-issue an id
    /// that is already taken. Must run after every deserialisation.
    pub fn normalize_counters(&mut self) {
        fn max_id<T>(items: &[T], id: impl Fn(&T) -> u32) -> u32 {
            items.iter().map(id).max().unwrap_or(0)
        }

        self.next_member_id = self.next_member_id.max(max_id(&self.members, |m| m.id));
        self.next_plan_id = self.next_plan_id.max(max_id(&self.plans, |p| p.id));
        self.next_subscription_id = self
            .next_subscription_id
            .max(max_id(&self.subscriptions, |s| s.id));
        self.next_payment_id = self.next_payment_id.max(max_id(&self.payments, |p| p.id));
        self.next_attendance_id = self
            .next_attendance_id
            .max(max_id(&self.attendance, |a| a.id));
    }

    /// Case-insensitive search over name, phone and id.
    /// An empty query returns everyone.
    pub fn search_members(&self, query: &str) -> Vec<Member> {
        if query.trim().is_empty() {
            return self.members.clone();
        }

        let query_lower = query.trim().to_lowercase();

        self.members
            .iter()
            .filter(|member| {
                member.name.to_lowercase().contains(&query_lower)
                    || member.phone.contains(&query_lower)
                    || member.id.to_string() == query_lower
            })
            .cloned()
            .collect()
    }

    /// Looks up one member
    pub fn get_member(&self, id: u32) -> Option<Member> {
        self.members.iter().find(|m| m.id == id).cloned()
    }

    /// Registers a new member, joined on `today`.
    ///
    /// New members start `Expired`: status flips to `Active` when the
    /// first subscription is recorded.
    pub fn add_member(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        today: NaiveDate,
    ) -> Member {
        let member = Member {
            id: Self::next_id(&mut self.next_member_id),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.map(|e| e.trim().to_string()),
            join_date: today,
            status: MemberStatus::Expired,
        };

        self.members.push(member.clone());
        member
    }

    /// Replaces a member record (matched by id)
    pub fn update_member(&mut self, member: Member) -> Result<(), StoreError> {
        match self.members.iter_mut().find(|m| m.id == member.id) {
            Some(slot) => {
                *slot = member;
                Ok(())
            }
            None => Err(StoreError::MemberNotFound(member.id)),
        }
    }

    /// Removes a member and everything attached to them
    pub fn delete_member(&mut self, id: u32) -> Result<(), StoreError> {
        if !self.members.iter().any(|m| m.id == id) {
            return Err(StoreError::MemberNotFound(id));
        }

        self.members.retain(|m| m.id != id);
        self.subscriptions.retain(|s| s.member_id != id);
        self.payments.retain(|p| p.member_id != id);
        self.attendance.retain(|a| a.member_id != id);
        Ok(())
    }

    /// Records a check-in at `now`.
    ///
    /// One check-in per member per calendar day; a second attempt is an
    /// error the UI reports rather than a silent duplicate row.
    pub fn check_in(
        &mut self,
        member_id: u32,
        now: NaiveDateTime,
    ) -> Result<AttendanceRecord, StoreError> {
        if !self.members.iter().any(|m| m.id == member_id) {
            return Err(StoreError::MemberNotFound(member_id));
        }

        let today = now.date();
        let already = self
            .attendance
            .iter()
            .any(|a| a.member_id == member_id && a.day() == today);
        if already {
            return Err(StoreError::AlreadyCheckedIn {
                member_id,
                date: today,
            });
        }

        let record = AttendanceRecord {
            id: Self::next_id(&mut self.next_attendance_id),
            member_id,
            checked_in_at: now,
        };

        self.attendance.push(record.clone());
        Ok(record)
    }

    /// All check-ins on one calendar day
    pub fn attendance_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|a| a.day() == date)
            .cloned()
            .collect()
    }

    /// Creates a plan
    pub fn add_plan(&mut self, name: &str, duration_days: u32, price: f64) -> Plan {
        let plan = Plan {
            id: Self::next_id(&mut self.next_plan_id),
            name: name.trim().to_string(),
            duration_days,
            price,
        };

        self.plans.push(plan.clone());
        plan
    }

    /// Replaces a plan (matched by id)
    pub fn update_plan(&mut self, plan: Plan) -> Result<(), StoreError> {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(slot) => {
                *slot = plan;
                Ok(())
            }
            None => Err(StoreError::PlanNotFound(plan.id)),
        }
    }

    /// Removes a plan that no subscription references
    pub fn delete_plan(&mut self, id: u32) -> Result<(), StoreError> {
        if !self.plans.iter().any(|p| p.id == id) {
            return Err(StoreError::PlanNotFound(id));
        }

        if self.subscriptions.iter().any(|s| s.plan_id == id) {
            return Err(StoreError::PlanInUse(id));
        }

        self.plans.retain(|p| p.id != id);
        Ok(())
    }

    /// Subscribes a member to a plan.
    ///
    /// The end date is `start + duration - 1` (inclusive range: a 30-day
    /// plan starting on the 1st ends on the 30th). The member's status
    /// becomes `Active` when the range covers today.
    pub fn subscribe(
        &mut self,
        member_id: u32,
        plan_id: u32,
        start: NaiveDate,
        today: NaiveDate,
    ) -> Result<Subscription, StoreError> {
        if !self.members.iter().any(|m| m.id == member_id) {
            return Err(StoreError::MemberNotFound(member_id));
        }

        let plan = self
            .plans
            .iter()
            .find(|p| p.id == plan_id)
            .ok_or(StoreError::PlanNotFound(plan_id))?;

        let end = start + chrono::Duration::days(plan.duration_days as i64 - 1);

        let subscription = Subscription {
            id: Self::next_id(&mut self.next_subscription_id),
            member_id,
            plan_id,
            start_date: start,
            end_date: end,
        };

        self.subscriptions.push(subscription.clone());
        self.refresh_member_status(member_id, today);
        Ok(subscription)
    }

    /// Subscriptions for a member, most recent first
    pub fn subscriptions_for_member(&self, member_id: u32) -> Vec<Subscription> {
        let mut subs: Vec<Subscription> = self
            .subscriptions
            .iter()
            .filter(|s| s.member_id == member_id)
            .cloned()
            .collect();
        subs.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        subs
    }

    /// Records a payment at `now`
    pub fn record_payment(
        &mut self,
        member_id: u32,
        amount: f64,
        method: PaymentMethod,
        note: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Payment, StoreError> {
        if !self.members.iter().any(|m| m.id == member_id) {
            return Err(StoreError::MemberNotFound(member_id));
        }

        let payment = Payment {
            id: Self::next_id(&mut self.next_payment_id),
            member_id,
            amount,
            method,
            paid_at: now,
            note: note.map(|n| n.trim().to_string()),
        };

        self.payments.push(payment.clone());
        Ok(payment)
    }

    /// Payments for a member, most recent first
    pub fn payments_for_member(&self, member_id: u32) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| p.member_id == member_id)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.paid_at.cmp(&a.paid_at));
        payments
    }

    /// Recomputes one member's status from their subscriptions.
    ///
    /// Suspended members stay suspended until the front desk lifts it.
    pub fn refresh_member_status(&mut self, member_id: u32, today: NaiveDate) {
        let covered = self
            .subscriptions
            .iter()
            .any(|s| s.member_id == member_id && s.covers(today));

        if let Some(member) = self.members.iter_mut().find(|m| m.id == member_id) {
            if member.status != MemberStatus::Suspended {
                member.status = if covered {
                    MemberStatus::Active
                } else {
                    MemberStatus::Expired
                };
            }
        }
    }

    /// Recomputes every member's status; called after loading from disk
    /// so overnight expiries show up on the next launch.
    pub fn refresh_all_statuses(&mut self, today: NaiveDate) {
        let ids: Vec<u32> = self.members.iter().map(|m| m.id).collect();
        for id in ids {
            self.refresh_member_status(id, today);
        }
    }

    /// Aggregates the dashboard numbers for `today`
    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let active_subscriptions = self
            .subscriptions
            .iter()
            .filter(|s| s.covers(today))
            .count();

        let todays_checkins = self.attendance.iter().filter(|a| a.day() == today).count();

        let monthly_revenue = self
            .payments
            .iter()
            .filter(|p| {
                p.paid_at.year() == today.year() && p.paid_at.month() == today.month()
            })
            .map(|p| p.amount)
            .sum();

        DashboardStats {
            total_members: self.members.len(),
            active_subscriptions,
            todays_checkins,
            monthly_revenue,
        }
    }
}
