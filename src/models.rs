//! Frontend Models
//!
//! Data structures matching the backend's JSON records. The backend speaks
//! Turkish field names; serde renames keep the Rust side readable.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Color the server assigns to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "düşük")]
    Low,
    #[default]
    #[serde(rename = "orta")]
    Medium,
    #[serde(rename = "yüksek")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Stable key used for select values and CSS classes
    pub fn key(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "beklemede")]
    Pending,
    #[serde(rename = "devam-ediyor")]
    InProgress,
    #[serde(rename = "tamamlandı")]
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn key(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

/// Task record (matches backend, with the category join)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(rename = "baslik")]
    pub title: String,
    #[serde(rename = "aciklama", default)]
    pub description: Option<String>,
    #[serde(rename = "kategori_id", default, deserialize_with = "lenient_id")]
    pub category_id: Option<u32>,
    #[serde(rename = "oncelik", default)]
    pub priority: Priority,
    #[serde(rename = "durum", default)]
    pub status: Status,
    #[serde(rename = "bitis_tarihi", default)]
    pub due_date: Option<String>,
    #[serde(rename = "kategori_adi", default)]
    pub category_name: Option<String>,
    #[serde(rename = "kategori_renk", default)]
    pub category_color: Option<String>,
    #[serde(rename = "olusturma_tarihi", default)]
    pub created_at: Option<String>,
    #[serde(rename = "guncelleme_tarihi", default)]
    pub updated_at: Option<String>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Description text, if there is any to show
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Due date as `DD.MM.YYYY`, or the raw value when it is not a date
    pub fn due_date_label(&self) -> Option<String> {
        self.due_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(format_due_date)
    }
}

pub fn format_due_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Category record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "renk", default = "default_color")]
    pub color: String,
    #[serde(rename = "olusturma_tarihi", default)]
    pub created_at: Option<String>,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// Per-category task count computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "gorev_sayisi", default)]
    pub task_count: u32,
}

/// Server-side task statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "toplam", default)]
    pub total: u32,
    #[serde(rename = "tamamlanan", default)]
    pub completed: u32,
    #[serde(rename = "bekleyen", default)]
    pub pending: u32,
    #[serde(rename = "devam_eden", default)]
    pub in_progress: u32,
    #[serde(rename = "kategoriler", default)]
    pub categories: Vec<CategoryCount>,
}

impl DashboardStats {
    /// Task count of the category called `name`; 0 when the server sent none
    pub fn task_count(&self, name: &str) -> u32 {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.task_count)
            .unwrap_or(0)
    }
}

/// Admin dashboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(rename = "istatistikler", default)]
    pub stats: DashboardStats,
    #[serde(rename = "son_gorevler", default)]
    pub recent_tasks: Vec<Task>,
    #[serde(rename = "kategoriler", default)]
    pub categories: Vec<Category>,
}

// ========================
// Request Bodies
// ========================

/// Full task body for create and form updates. `None` fields serialize as
/// `null` so an update can clear them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    #[serde(rename = "baslik")]
    pub title: String,
    #[serde(rename = "aciklama")]
    pub description: String,
    #[serde(rename = "kategori_id")]
    pub category_id: Option<u32>,
    #[serde(rename = "oncelik")]
    pub priority: Priority,
    #[serde(rename = "durum")]
    pub status: Status,
    #[serde(rename = "bitis_tarihi")]
    pub due_date: Option<String>,
}

/// Body of `PUT /tasks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskUpdate {
    Replace(TaskDraft),
    Status {
        #[serde(rename = "durum")]
        status: Status,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "renk")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRename {
    #[serde(rename = "ad")]
    pub name: String,
}

/// Accepts `3`, `"3"`, `""` and `null` for id columns
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(id)) => Ok(Some(id)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
