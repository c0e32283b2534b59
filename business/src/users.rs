//! Enumerator accounts shown on the users page.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// LGA assigned to enumerators added from the dashboard.
pub const DEFAULT_LGA: &str = "Igabi";
/// Ward assigned to enumerators added from the dashboard.
pub const DEFAULT_WARD: &str = "chukun";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub status: UserStatus,
    /// `None` until the first login.
    pub last_login: Option<NaiveDateTime>,
    pub created_at: NaiveDate,
    pub lga: String,
    pub ward: String,
}

/// Status tab above the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl UserFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn matches(self, user: &UserRecord) -> bool {
        match self {
            Self::All => true,
            Self::Active => user.status == UserStatus::Active,
            Self::Inactive => user.status == UserStatus::Inactive,
        }
    }
}

/// Counts for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub suspended: usize,
}

impl UserStats {
    pub fn from_users(users: &[UserRecord]) -> Self {
        users.iter().fold(
            Self {
                total: users.len(),
                ..Self::default()
            },
            |mut stats, user| {
                match user.status {
                    UserStatus::Active => stats.active += 1,
                    UserStatus::Inactive => stats.inactive += 1,
                    UserStatus::Suspended => stats.suspended += 1,
                }
                stats
            },
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddUserError {
    #[error("User name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// The enumerator list plus the add-enumerator form.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<UserRecord>,
    pub filter: UserFilter,
    pub add_modal_open: bool,
    pub new_user_name: String,
    pub new_user_email: String,
    pub add_error: Option<String>,
}

impl UsersState {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Users visible under the current status tab.
    pub fn filtered(&self) -> Vec<UserRecord> {
        self.users
            .iter()
            .filter(|user| self.filter.matches(user))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> UserStats {
        UserStats::from_users(&self.users)
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
        self.add_error = None;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
        self.new_user_name.clear();
        self.new_user_email.clear();
        self.add_error = None;
    }

    /// Add an active enumerator from the form inputs, created on `today`.
    ///
    /// The form stays open with an error when validation fails.
    pub fn submit_new_user(&mut self, today: NaiveDate) -> Result<(), AddUserError> {
        let result = self.add_user(
            self.new_user_name.trim().to_owned(),
            self.new_user_email.trim().to_owned(),
            today,
        );
        match &result {
            Ok(()) => self.close_add_modal(),
            Err(err) => self.add_error = Some(err.to_string()),
        }
        result
    }

    pub fn add_user(
        &mut self,
        user_name: String,
        email: String,
        today: NaiveDate,
    ) -> Result<(), AddUserError> {
        if user_name.is_empty() {
            return Err(AddUserError::MissingName);
        }
        if email.is_empty() {
            return Err(AddUserError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(AddUserError::InvalidEmail(email));
        }

        let user_id = (self.users.len() + 1).to_string();
        info!("Adding enumerator {user_name} as user {user_id}");
        self.users.push(UserRecord {
            user_id,
            user_name,
            email,
            status: UserStatus::Active,
            last_login: None,
            created_at: today,
            lga: DEFAULT_LGA.to_owned(),
            ward: DEFAULT_WARD.to_owned(),
        });
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn login(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date(year, month, day).and_hms_opt(hour, minute, 0)
}

/// Demo enumerators.
pub fn mock_users() -> Vec<UserRecord> {
    let user = |id: &str,
                name: &str,
                email: &str,
                status: UserStatus,
                last_login: Option<NaiveDateTime>,
                created_at: NaiveDate| UserRecord {
        user_id: id.to_owned(),
        user_name: name.to_owned(),
        email: email.to_owned(),
        status,
        last_login,
        created_at,
        lga: DEFAULT_LGA.to_owned(),
        ward: DEFAULT_WARD.to_owned(),
    };

    vec![
        user("1", "John Doe", "john.doe@example.com", UserStatus::Active, login(2023, 10, 15, 10, 30), date(2023, 1, 1)),
        user("2", "Jane Smith", "jane.smith@example.com", UserStatus::Inactive, login(2023, 9, 20, 14, 15), date(2023, 3, 15)),
        user("3", "Musa Garba", "musa.garba@example.com", UserStatus::Active, login(2023, 10, 14, 8, 5), date(2023, 4, 2)),
        user("4", "Esther Pam", "esther.pam@example.com", UserStatus::Active, login(2023, 10, 12, 16, 45), date(2023, 5, 20)),
        user("5", "Yusuf Danladi", "yusuf.danladi@example.com", UserStatus::Suspended, login(2023, 8, 30, 9, 0), date(2023, 2, 11)),
        user("6", "Ruth Gyang", "ruth.gyang@example.com", UserStatus::Inactive, None, date(2023, 9, 1)),
    ]
}
