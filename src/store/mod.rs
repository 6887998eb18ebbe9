//! Mutable application state and its JSON persistence.
//!
//! The seed configuration never changes at runtime. Everything the
//! workflows touch (the current week, the absences, the leave balances,
//! notifications and the action log) lives in a [`PharmacyStore`], which is
//! saved as one pretty-printed JSON document.

mod journal;

pub use journal::{ActionEntry, BROADCAST_RECIPIENT, Notification, NotificationKind};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{ConfigLoader, SeedConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, ScheduleWeek, Snapshot};

/// The mutable state of one pharmacy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PharmacyStore {
    pub(crate) schedule: ScheduleWeek,
    pub(crate) absences: Vec<Absence>,
    pub(crate) leave_balances: BTreeMap<String, u32>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) history: Vec<ActionEntry>,
}

/// On-disk shape; every key is optional so older files still load.
#[derive(Debug, Deserialize)]
struct StoreFile {
    schedule: Option<ScheduleWeek>,
    absences: Option<Vec<Absence>>,
    leave_balances: Option<BTreeMap<String, u32>>,
    notifications: Option<Vec<Notification>>,
    history: Option<Vec<ActionEntry>>,
}

impl PharmacyStore {
    /// Builds the initial state from the seed configuration.
    pub fn from_seed(seed: &SeedConfig) -> Self {
        Self {
            schedule: seed.schedule().clone(),
            absences: seed.absences().to_vec(),
            leave_balances: seed
                .roster()
                .iter()
                .map(|e| (e.name.clone(), e.remaining_leave_days))
                .collect(),
            notifications: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Loads the store from `path`, or builds it from `seed` if the file
    /// does not exist yet.
    ///
    /// Keys missing from the file fall back to the seed (schedule, absences,
    /// balances) or to empty lists (notifications, history).
    pub fn load<P: AsRef<Path>>(path: P, seed: &SeedConfig) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            debug!(path = %path_str, "No store file, starting from seed");
            return Ok(Self::from_seed(seed));
        }

        let content = fs::read_to_string(path).map_err(|e| EngineError::StoreIo {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        let file: StoreFile =
            serde_json::from_str(&content).map_err(|e| EngineError::StoreCorrupted {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let defaults = Self::from_seed(seed);
        let store = Self {
            schedule: file.schedule.unwrap_or(defaults.schedule),
            absences: file.absences.unwrap_or(defaults.absences),
            leave_balances: file.leave_balances.unwrap_or(defaults.leave_balances),
            notifications: file.notifications.unwrap_or_default(),
            history: file.history.unwrap_or_default(),
        };

        debug!(
            path = %path_str,
            absences = store.absences.len(),
            notifications = store.notifications.len(),
            "Loaded store"
        );
        Ok(store)
    }

    /// Writes the store to `path` as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| EngineError::StoreIo {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        fs::write(path, content).map_err(|e| EngineError::StoreIo {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path_str, "Saved store");
        Ok(())
    }

    /// Builds an evaluation snapshot of the current state.
    ///
    /// Roster employees carry their current store balance; employees with
    /// no stored balance keep the configured one.
    pub fn snapshot(&self, config: &ConfigLoader) -> Snapshot {
        let roster = config
            .roster()
            .iter()
            .cloned()
            .map(|mut employee| {
                if let Some(balance) = self.leave_balances.get(&employee.name) {
                    employee.remaining_leave_days = *balance;
                }
                employee
            })
            .collect();

        Snapshot {
            pharmacy: config.pharmacy().clone(),
            roster,
            schedule: self.schedule.clone(),
            absences: self.absences.clone(),
            coverage_rate: config.config().coverage_rate(),
        }
    }

    /// Returns the current week.
    pub fn schedule(&self) -> &ScheduleWeek {
        &self.schedule
    }

    /// Replaces the current week, e.g. with a generated one.
    pub fn replace_schedule(&mut self, schedule: ScheduleWeek) {
        self.schedule = schedule;
    }

    /// Returns every recorded absence.
    pub fn absences(&self) -> &[Absence] {
        &self.absences
    }

    /// Returns the action log, oldest first.
    pub fn history(&self) -> &[ActionEntry] {
        &self.history
    }

    /// Returns all notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the leave balance of `name` (0 for unknown employees).
    pub fn leave_balance(&self, name: &str) -> u32 {
        self.leave_balances.get(name).copied().unwrap_or(0)
    }

    /// Deducts `days` from the balance of `name`.
    ///
    /// Returns false, leaving the balance untouched, if it is insufficient.
    pub fn deduct_leave(&mut self, name: &str, days: u32) -> bool {
        let balance = self.leave_balance(name);
        if balance < days {
            return false;
        }
        self.leave_balances.insert(name.to_string(), balance - days);
        true
    }

    /// Adds a notification and returns its id.
    pub fn notify(
        &mut self,
        recipient: &str,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> u32 {
        let id = self.notifications.len() as u32 + 1;
        self.notifications.push(Notification {
            id,
            recipient: recipient.to_string(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
            read: false,
        });
        if kind == NotificationKind::Urgent {
            info!(recipient, id, "Urgent notification raised");
        }
        id
    }

    /// Returns the notifications `name` should see: their own and broadcasts.
    pub fn notifications_for(&self, name: &str) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| n.is_for(name)).collect()
    }

    /// Marks every notification visible to `name` as read.
    ///
    /// Returns how many were newly marked.
    pub fn mark_read(&mut self, name: &str) -> usize {
        let mut marked = 0;
        for notification in self.notifications.iter_mut().filter(|n| n.is_for(name)) {
            if !notification.read {
                notification.read = true;
                marked += 1;
            }
        }
        marked
    }

    /// Appends an entry to the action log.
    pub fn log_action(&mut self, action: &str, details: Value) {
        debug!(action, "Recorded action");
        self.history.push(ActionEntry::now(action, details));
    }
}
