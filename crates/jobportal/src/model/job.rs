//! Job posting records.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The sector a job belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobCategory {
    /// Central government ministries and commissions.
    #[default]
    Central,
    /// State government departments and commissions.
    State,
    /// Public sector undertakings.
    Psu,
    /// Public sector banks and financial institutions.
    Banking,
    /// Armed forces and police.
    Defence,
}

impl JobCategory {
    /// Every category, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Central,
        Self::State,
        Self::Psu,
        Self::Banking,
        Self::Defence,
    ];

    /// Human-readable label used in menus and filter lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Central => "Central Government",
            Self::State => "State Government",
            Self::Psu => "PSU",
            Self::Banking => "Banking",
            Self::Defence => "Defence",
        }
    }
}

impl std::fmt::Display for JobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Central => write!(f, "central"),
            Self::State => write!(f, "state"),
            Self::Psu => write!(f, "psu"),
            Self::Banking => write!(f, "banking"),
            Self::Defence => write!(f, "defence"),
        }
    }
}

impl FromStr for JobCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "central" => Ok(Self::Central),
            "state" => Ok(Self::State),
            "psu" => Ok(Self::Psu),
            "banking" => Ok(Self::Banking),
            "defence" => Ok(Self::Defence),
            _ => Err(Error::invalid_filter("category", s)),
        }
    }
}

/// Terms of employment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// Regular, pensionable appointment.
    #[default]
    Permanent,
    /// Fixed-term engagement.
    Contract,
    /// Short-term or session-wise engagement.
    Temporary,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permanent => write!(f, "permanent"),
            Self::Contract => write!(f, "contract"),
            Self::Temporary => write!(f, "temporary"),
        }
    }
}

impl FromStr for JobType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permanent" => Ok(Self::Permanent),
            "contract" => Ok(Self::Contract),
            "temporary" => Ok(Self::Temporary),
            _ => Err(Error::invalid_filter("jobType", s)),
        }
    }
}

/// Where a posting is in its application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepting applications.
    Open,
    /// Application window has ended.
    Closed,
    /// Announced, applications not yet open.
    Upcoming,
}

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// Positive (open).
    Success,
    /// Attention (upcoming).
    Warning,
    /// Negative (closed).
    Danger,
}

impl JobStatus {
    /// Badge used when rendering this status.
    #[must_use]
    pub fn badge(self) -> Badge {
        match self {
            Self::Open => Badge::Success,
            Self::Upcoming => Badge::Warning,
            Self::Closed => Badge::Danger,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(Error::invalid_filter("status", s)),
        }
    }
}

/// Reservation category an application fee applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeCategory {
    /// General / unreserved.
    General,
    /// Other Backward Classes.
    Obc,
    /// Scheduled Castes.
    Sc,
    /// Scheduled Tribes.
    St,
    /// Persons with disabilities.
    Pwd,
}

impl FeeCategory {
    /// Fee rows in display order.
    pub const ALL: [Self; 5] = [Self::General, Self::Obc, Self::Sc, Self::St, Self::Pwd];

    /// Row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Pwd => "PwD",
        }
    }
}

/// Application fee in rupees per reservation category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFee {
    pub general: u32,
    pub obc: u32,
    pub sc: u32,
    pub st: u32,
    pub pwd: u32,
}

impl ApplicationFee {
    /// Fee for one category.
    #[must_use]
    pub fn get(&self, category: FeeCategory) -> u32 {
        match category {
            FeeCategory::General => self.general,
            FeeCategory::Obc => self.obc,
            FeeCategory::Sc => self.sc,
            FeeCategory::St => self.st,
            FeeCategory::Pwd => self.pwd,
        }
    }

    /// All fee rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FeeCategory, u32)> + '_ {
        FeeCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// True when no category pays anything.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.iter().all(|(_, fee)| fee == 0)
    }
}

/// Key dates of a recruitment cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantDates {
    pub application_start: NaiveDate,
    pub application_end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_date: Option<NaiveDate>,
}

/// A government job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Free-form pay band, e.g. "₹25,500 - ₹81,100".
    pub salary: String,
    pub posted_date: NaiveDate,
    pub last_date: NaiveDate,
    pub category: JobCategory,
    /// Eligibility lines in the order they are listed.
    pub qualifications: Vec<String>,
    pub description: String,
    pub vacancies: u32,
    pub job_type: JobType,
    pub age_limit: String,
    pub application_fee: ApplicationFee,
    pub apply_link: String,
    /// Selection stages in order.
    pub selection_process: Vec<String>,
    pub important_dates: ImportantDates,
    pub status: JobStatus,
}

impl Job {
    /// The first `n` qualifications, plus whether any were left out.
    #[must_use]
    pub fn qualification_preview(&self, n: usize) -> (&[String], bool) {
        let shown = &self.qualifications[..n.min(self.qualifications.len())];
        (shown, self.qualifications.len() > n)
    }

    /// Whether the posting is currently accepting applications.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    /// Detail page path.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/jobs/{}", self.id)
    }
}
