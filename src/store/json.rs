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

//! JSON-file-backed store
//!
//! The whole gym document lives in one JSON file. Writes are safe:
//!
//! - **Atomic writes**: temp-file-then-rename, never a partial document
//! - **Automatic backups**: every save first copies the current file into
//!   a timestamped backup next to it
//! - **Restore**: any backup can be validated and promoted back to being
//!   the data file
//!
//! # Example
//!
//! ```no_run
//! use gym_manager::store::{GymStore, JsonStore};
//! use std::path::PathBuf;
//!
//! let mut store = JsonStore::open(PathBuf::from("/tmp/gym.json"))?;
//! let member = store.add_member("أحمد علي", "01001234567", None)?;
//! println!("registered {}", member);
//! # Ok::<(), gym_manager::store::StoreError>(())
//! ```

use atomic_write_file::AtomicWriteFile;
use chrono::{Local, NaiveDate};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::types::{
    AttendanceRecord, DashboardStats, Member, Payment, PaymentMethod, Plan, Subscription,
};
use crate::store::{GymData, GymStore, StoreError};

/// File-backed implementation of [`GymStore`]
#[derive(Debug)]
pub struct JsonStore {
    /// Path to the JSON data file
    data_path: PathBuf,
    /// Directory holding timestamped backups, next to the data file
    backup_dir: PathBuf,
    /// The loaded document; mutations go through here, then `save`
    data: GymData,
}

impl JsonStore {
    /// Opens (or creates) the data file at the given path.
    ///
    /// A missing file is initialised with an empty document so a fresh
    /// install starts without ceremony. The backup directory is created
    /// next to the data file. Member statuses are refreshed after
    /// loading so overnight expiries are visible immediately.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the file exists but is not a
    /// valid gym document, and `StoreError::BackupDirNotWritable` if the
    /// backup directory cannot be created.
    pub fn open(data_path: PathBuf) -> Result<Self, StoreError> {
        let backup_dir = data_path
            .parent()
            .ok_or_else(|| {
                StoreError::BackupDirNotWritable(PathBuf::from(
                    "data file has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| StoreError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        let mut store = Self {
            data_path,
            backup_dir,
            data: GymData::new(),
        };

        if store.data_path.exists() {
            store.data = Self::read_document(&store.data_path)?;
            store.data.refresh_all_statuses(Local::now().date_naive());
        } else {
            // Fresh install: materialise the empty document
            store.save()?;
        }

        Ok(store)
    }

    /// Path of the data file
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Read access to the loaded document
    pub fn data(&self) -> &GymData {
        &self.data
    }

    /// Lists backups, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();

        // Timestamped names sort chronologically
        backups.sort();
        backups.reverse();
        Ok(backups)
    }

    /// Restores a backup as the current data file.
    ///
    /// The backup is parsed first: a corrupt backup is rejected before
    /// anything is overwritten. The current file is backed up as part of
    /// the save, so a restore is itself undoable.
    pub fn restore_backup(&mut self, backup_path: &Path) -> Result<(), StoreError> {
        let restored = Self::read_document(backup_path)?;

        self.data = restored;
        self.data.refresh_all_statuses(Local::now().date_naive());
        self.save()
    }

    /// Deletes a single backup file.
    pub fn delete_backup(&self, backup_path: &Path) -> Result<(), StoreError> {
        // Only touch files inside our backup directory
        if backup_path.parent() != Some(self.backup_dir.as_path()) {
            return Err(StoreError::BackupFailed(format!(
                "not a backup file: {}",
                backup_path.display()
            )));
        }

        fs::remove_file(backup_path)?;
        Ok(())
    }

    fn read_document(path: &Path) -> Result<GymData, StoreError> {
        let content = fs::read_to_string(path)?;
        let mut data: GymData =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        data.normalize_counters();
        Ok(data)
    }

    /// Persists the document: timestamped backup, then atomic write.
    fn save(&self) -> Result<(), StoreError> {
        if self.data_path.exists() {
            self.create_timestamped_backup()?;
        }

        let content = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let mut file = AtomicWriteFile::options()
            .open(&self.data_path)
            .map_err(|e| {
                StoreError::WriteFailed(format!("failed to open for atomic write: {}", e))
            })?;

        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::WriteFailed(format!("failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| StoreError::WriteFailed(format!("failed to commit atomic write: {}", e)))
    }

    fn create_timestamped_backup(&self) -> Result<PathBuf, StoreError> {
        let content = fs::read_to_string(&self.data_path)?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let original_name = self
            .data_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::BackupFailed("data path has no file name".to_string()))?;

        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        fs::write(&backup_path, &content)
            .map_err(|e| StoreError::BackupFailed(e.to_string()))?;

        Ok(backup_path)
    }
}

impl GymStore for JsonStore {
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
        let member = self
            .data
            .add_member(name, phone, email, Local::now().date_naive());
        self.save()?;
        Ok(member)
    }

    fn update_member(&mut self, member: Member) -> Result<(), StoreError> {
        self.data.update_member(member)?;
        self.save()
    }

    fn delete_member(&mut self, id: u32) -> Result<(), StoreError> {
        self.data.delete_member(id)?;
        self.save()
    }

    fn check_in(&mut self, member_id: u32) -> Result<AttendanceRecord, StoreError> {
        let record = self.data.check_in(member_id, Local::now().naive_local())?;
        self.save()?;
        Ok(record)
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
        let plan = self.data.add_plan(name, duration_days, price);
        self.save()?;
        Ok(plan)
    }

    fn update_plan(&mut self, plan: Plan) -> Result<(), StoreError> {
        self.data.update_plan(plan)?;
        self.save()
    }

    fn delete_plan(&mut self, id: u32) -> Result<(), StoreError> {
        self.data.delete_plan(id)?;
        self.save()
    }

    fn subscribe(
        &mut self,
        member_id: u32,
        plan_id: u32,
        start: NaiveDate,
    ) -> Result<Subscription, StoreError> {
        let subscription =
            self.data
                .subscribe(member_id, plan_id, start, Local::now().date_naive())?;
        self.save()?;
        Ok(subscription)
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
        let payment = self.data.record_payment(
            member_id,
            amount,
            method,
            note,
            Local::now().naive_local(),
        )?;
        self.save()?;
        Ok(payment)
    }

    fn payments_for_member(&self, member_id: u32) -> Vec<Payment> {
        self.data.payments_for_member(member_id)
    }

    fn get_dashboard_stats(&self) -> DashboardStats {
        self.data.dashboard_stats(Local::now().date_naive())
    }

    /// Re-reads the document from disk, discarding in-memory state.
    /// Called when the file watcher reports an external modification.
    fn reload(&mut self) -> Result<(), StoreError> {
        self.data = Self::read_document(&self.data_path)?;
        self.data.refresh_all_statuses(Local::now().date_naive());
        Ok(())
    }
}
