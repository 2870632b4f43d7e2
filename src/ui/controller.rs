//! MVC Controller - Mediates between Model (GymStore) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load and cache the member list from the store
//! - Filter/search members
//! - Validate front-desk input before it reaches the store
//! - Record check-ins and report duplicates as user-facing messages
//! - Provide data to View in UI-friendly form (plan names, stats)
//!
//! # Architecture
//!
//! The Controller holds a trait object for the store and doesn't know
//! about GTK4 widgets. This keeps business logic separate from
//! presentation, and lets the controller tests run against the
//! in-memory store without a display server.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::{AttendanceRecord, DashboardStats, Member, Payment, PaymentMethod, Plan, Subscription};
use crate::core::validator::MemberValidator;
use crate::store::{GymStore, StoreError};
use crate::ui::file_watcher::FileWatcher;

/// MVC Controller coordinating Model and View
///
/// Holds a shared reference to the store and provides methods for the
/// View to query/manipulate data. The data file watcher is an optional
/// collaborator decided once at composition time: when it is `None`
/// (in-memory store, watcher setup failure) external-change polling is
/// simply inert.
pub struct Controller {
    /// Data access object (shared mutable reference)
    store: Rc<RefCell<dyn GymStore>>,
    /// Input validation, compiled once
    validator: MemberValidator,
    /// Cached member list, refreshed on every mutation
    members: RefCell<Vec<Member>>,
    /// Current search query (single source of truth for filtering)
    search_query: RefCell<String>,
    /// Optional watcher over the data file
    watcher: Option<FileWatcher>,
}

impl Controller {
    /// Creates a Controller over any store, without file watching.
    pub fn new(store: Rc<RefCell<dyn GymStore>>) -> Self {
        Self {
            store,
            validator: MemberValidator::new(),
            members: RefCell::new(Vec::new()),
            search_query: RefCell::new(String::new()),
            watcher: None,
        }
    }

    /// Creates a Controller with an attached data file watcher.
    pub fn with_watcher(store: Rc<RefCell<dyn GymStore>>, watcher: FileWatcher) -> Self {
        Self {
            watcher: Some(watcher),
            ..Self::new(store)
        }
    }

    /// Loads the member list from the store into the cache.
    ///
    /// Call this on startup and after any external change.
    ///
    /// # Returns
    ///
    /// Number of members loaded.
    pub fn load_members(&self) -> usize {
        let members = self.store.borrow().search_members("");
        let count = members.len();
        *self.members.borrow_mut() = members;
        count
    }

    /// Returns all cached members
    pub fn get_members(&self) -> Vec<Member> {
        self.members.borrow().clone()
    }

    /// Stores the search query (single source of truth)
    pub fn set_search_query(&self, query: String) {
        *self.search_query.borrow_mut() = query;
    }

    /// Returns the member list filtered by the current search query.
    ///
    /// Delegates matching to the store so CLI search and UI search
    /// behave identically.
    pub fn get_current_view(&self) -> Vec<Member> {
        let query = self.search_query.borrow().clone();
        if query.trim().is_empty() {
            self.get_members()
        } else {
            self.store.borrow().search_members(&query)
        }
    }

    /// Registers a new member after validating the input.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message when validation or the store
    /// rejects the input; the dialog shows it verbatim.
    pub fn add_member(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Member, String> {
        self.validator
            .validate(name, phone, email)
            .map_err(|e| e.to_string())?;

        let member = self
            .store
            .borrow_mut()
            .add_member(name, phone, email)
            .map_err(|e| e.to_string())?;

        self.load_members();
        Ok(member)
    }

    /// Updates a member after validating the changed fields.
    pub fn update_member(&self, member: Member) -> Result<(), String> {
        self.validator
            .validate(&member.name, &member.phone, member.email.as_deref())
            .map_err(|e| e.to_string())?;

        self.store
            .borrow_mut()
            .update_member(member)
            .map_err(|e| e.to_string())?;

        self.load_members();
        Ok(())
    }

    /// Deletes a member together with their history.
    pub fn delete_member(&self, id: u32) -> Result<(), StoreError> {
        self.store.borrow_mut().delete_member(id)?;
        self.load_members();
        Ok(())
    }

    /// Records a check-in for today.
    ///
    /// A duplicate same-day check-in comes back as an error message the
    /// details panel can show directly.
    pub fn check_in(&self, member_id: u32) -> Result<AttendanceRecord, String> {
        self.store
            .borrow_mut()
            .check_in(member_id)
            .map_err(|e| e.to_string())
    }

    /// All plans, for the subscription picker
    pub fn list_plans(&self) -> Vec<Plan> {
        self.store.borrow().list_plans()
    }

    /// Subscribes a member to a plan starting today.
    pub fn subscribe(&self, member_id: u32, plan_id: u32) -> Result<Subscription, StoreError> {
        let today = chrono::Local::now().date_naive();
        let subscription = self.store.borrow_mut().subscribe(member_id, plan_id, today)?;
        self.load_members();
        Ok(subscription)
    }

    /// Records a payment for a member.
    pub fn record_payment(
        &self,
        member_id: u32,
        amount: f64,
        method: PaymentMethod,
        note: Option<&str>,
    ) -> Result<Payment, StoreError> {
        self.store
            .borrow_mut()
            .record_payment(member_id, amount, method, note)
    }

    /// Subscriptions for a member, most recent first
    pub fn subscriptions_for_member(&self, member_id: u32) -> Vec<Subscription> {
        self.store.borrow().subscriptions_for_member(member_id)
    }

    /// Payments for a member, most recent first
    pub fn payments_for_member(&self, member_id: u32) -> Vec<Payment> {
        self.store.borrow().payments_for_member(member_id)
    }

    /// Name of the plan behind the member's most recent subscription
    pub fn plan_name_for(&self, member_id: u32) -> Option<String> {
        let subscription = self
            .store
            .borrow()
            .subscriptions_for_member(member_id)
            .into_iter()
            .next()?;

        self.store
            .borrow()
            .list_plans()
            .into_iter()
            .find(|p| p.id == subscription.plan_id)
            .map(|p| p.name)
    }

    /// Aggregate numbers for the dashboard strip
    pub fn get_stats(&self) -> DashboardStats {
        self.store.borrow().get_dashboard_stats()
    }

    /// Total cached members
    pub fn member_count(&self) -> usize {
        self.members.borrow().len()
    }

    /// Polls the optional data file watcher and reloads on change.
    ///
    /// # Returns
    ///
    /// `true` when the store was reloaded and views should refresh.
    pub fn check_external_changes(&self) -> bool {
        let Some(watcher) = &self.watcher else {
            return false;
        };

        if !watcher.check_for_changes() {
            return false;
        }

        let reloaded = self.store.borrow_mut().reload();
        match reloaded {
            Ok(()) => {
                self.load_members();
                true
            }
            Err(e) => {
                eprintln!("⚠️  Failed to reload data file: {}", e);
                false
            }
        }
    }

    /// Renders the cached member list as CSV for the export action.
    ///
    /// Header row plus one line per member; commas inside fields are
    /// replaced so the output stays a valid simple CSV.
    pub fn export_members_csv(&self) -> String {
        let mut csv = String::from("id,name,phone,email,join_date,status\n");

        for member in self.members.borrow().iter() {
            let clean = |s: &str| s.replace(',', " ");
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                member.id,
                clean(&member.name),
                clean(&member.phone),
                member.email.as_deref().map(clean).unwrap_or_default(),
                member.join_date,
                member.status,
            ));
        }

        csv
    }
}
