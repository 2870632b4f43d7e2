//! src/core/types.rs
//!
//! Core type definitions for gym membership management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Member`: A gym member with contact details and status
//! - `Plan`: A subscription plan (duration + price)
//! - `Subscription`: A member's enrolment in a plan over a date range
//! - `Payment`: A recorded payment with method and timestamp
//! - `AttendanceRecord`: A single check-in event
//! - `DashboardStats`: Aggregate numbers shown on the dashboard
//!
//! All types implement serialization for persistence in the JSON data file.
//! UI-facing labels are Arabic (the application is RTL); `Display` impls
//! are plain ASCII for CLI output and log lines.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership status
///
/// Derived from the member's most recent subscription:
/// - `Active`: has a subscription covering today
/// - `Expired`: last subscription ended in the past
/// - `Suspended`: manually frozen by the front desk
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MemberStatus {
    /// Subscription covers today
    Active,
    /// Last subscription has ended
    Expired,
    /// Manually frozen
    Suspended,
}

impl MemberStatus {
    /// Arabic label shown in the RTL interface
    pub fn label_ar(&self) -> &'static str {
        match self {
            MemberStatus::Active => "نشط",
            MemberStatus::Expired => "منتهي",
            MemberStatus::Suspended => "موقوف",
        }
    }

    /// CSS class used by the theme to colour status labels
    pub fn css_class(&self) -> &'static str {
        match self {
            MemberStatus::Active => "status-active",
            MemberStatus::Expired => "status-expired",
            MemberStatus::Suspended => "status-suspended",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Expired => write!(f, "expired"),
            MemberStatus::Suspended => write!(f, "suspended"),
        }
    }
}

/// How a payment was made
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PaymentMethod {
    /// Cash at the front desk
    Cash,
    /// Card terminal
    Card,
    /// Bank or wallet transfer
    Transfer,
}

impl PaymentMethod {
    /// Arabic label shown in the RTL interface
    pub fn label_ar(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "نقدي",
            PaymentMethod::Card => "بطاقة",
            PaymentMethod::Transfer => "تحويل",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Transfer => write!(f, "transfer"),
        }
    }
}

/// A gym member
///
/// Identified by a numeric id assigned by the store. The `status` field is
/// stored rather than recomputed on every read so the member list can render
/// without joining against subscriptions; the store refreshes it whenever a
/// subscription is added or expires.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Member {
    /// Store-assigned identifier
    pub id: u32,

    /// Full name as entered at the front desk
    pub name: String,

    /// Contact phone number (digits, optional leading +)
    pub phone: String,

    /// Optional e-mail address
    pub email: Option<String>,

    /// Date the member first joined
    pub join_date: NaiveDate,

    /// Current membership status
    pub status: MemberStatus,
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({}) [{}]", self.id, self.name, self.phone, self.status)
    }
}

/// A subscription plan offered by the gym
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Plan {
    /// Store-assigned identifier
    pub id: u32,

    /// Plan name, e.g. "شهري" (monthly)
    pub name: String,

    /// Length of the plan in days
    pub duration_days: u32,

    /// Price in the configured currency
    pub price: f64,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} days, {:.2})", self.name, self.duration_days, self.price)
    }
}

/// A member's enrolment in a plan over a date range
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Subscription {
    /// Store-assigned identifier
    pub id: u32,

    /// Member this subscription belongs to
    pub member_id: u32,

    /// Plan the member subscribed to
    pub plan_id: u32,

    /// First covered day
    pub start_date: NaiveDate,

    /// Last covered day (inclusive)
    pub end_date: NaiveDate,
}

impl Subscription {
    /// Whether this subscription covers the given day
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Days remaining from `today` (0 if already ended)
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days().max(0)
    }
}

/// A recorded payment
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Payment {
    /// Store-assigned identifier
    pub id: u32,

    /// Member who paid
    pub member_id: u32,

    /// Amount in the configured currency
    pub amount: f64,

    /// How the payment was made
    pub method: PaymentMethod,

    /// When the payment was recorded
    pub paid_at: NaiveDateTime,

    /// Optional free-text note
    pub note: Option<String>,
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} ({}) member #{} at {}",
            self.amount,
            self.method,
            self.member_id,
            self.paid_at.format("%Y-%m-%d %H:%M")
        )
    }
}

/// A single check-in event
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AttendanceRecord {
    /// Store-assigned identifier
    pub id: u32,

    /// Member who checked in
    pub member_id: u32,

    /// When the check-in happened
    pub checked_in_at: NaiveDateTime,
}

impl AttendanceRecord {
    /// Calendar day of the check-in
    pub fn day(&self) -> NaiveDate {
        self.checked_in_at.date()
    }
}

/// Aggregate numbers shown on the dashboard strip
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Total registered members
    pub total_members: usize,

    /// Subscriptions covering today
    pub active_subscriptions: usize,

    /// Check-ins recorded today
    pub todays_checkins: usize,

    /// Sum of payments recorded in the current calendar month
    pub monthly_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", MemberStatus::Active), "active");
        assert_eq!(format!("{}", MemberStatus::Suspended), "suspended");
    }

    #[test]
    fn test_status_arabic_labels() {
        assert_eq!(MemberStatus::Active.label_ar(), "نشط");
        assert_eq!(MemberStatus::Expired.label_ar(), "منتهي");
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(format!("{}", PaymentMethod::Cash), "cash");
        assert_eq!(format!("{}", PaymentMethod::Transfer), "transfer");
    }

    #[test]
    fn test_subscription_covers_range() {
        let sub = Subscription {
            id: 1,
            member_id: 1,
            plan_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };

        assert!(sub.covers(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(sub.covers(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
        assert!(!sub.covers(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
        assert!(!sub.covers(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }

    #[test]
    fn test_subscription_days_remaining_clamps_at_zero() {
        let sub = Subscription {
            id: 1,
            member_id: 1,
            plan_id: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };

        let today = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        assert_eq!(sub.days_remaining(today), 10);

        let after = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(sub.days_remaining(after), 0);
    }

    #[test]
    fn test_member_display() {
        let member = Member {
            id: 7,
            name: "أحمد علي".to_string(),
            phone: "01001234567".to_string(),
            email: None,
            join_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status: MemberStatus::Active,
        };

        let display = format!("{}", member);
        assert!(display.contains("#7"));
        assert!(display.contains("أحمد علي"));
        assert!(display.contains("active"));
    }
}
