//! Priority levels and task categories

use serde::{Deserialize, Serialize};

/// Priority level attached to tasks and generated prep work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl PriorityLevel {
    /// All wire values, in ascending order
    pub const LABELS: &'static [&'static str] = &["low", "medium", "high"];
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for PriorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority level: {}", s)),
        }
    }
}

/// The fixed set of task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Health,
    Finance,
    Learning,
    Errands,
    Creative,
    Social,
}

impl Category {
    /// All wire values, matching the serde representation
    pub const LABELS: &'static [&'static str] = &[
        "Work", "Personal", "Health", "Finance", "Learning", "Errands", "Creative", "Social",
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Finance => "Finance",
            Self::Learning => "Learning",
            Self::Errands => "Errands",
            Self::Creative => "Creative",
            Self::Social => "Social",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Work" => Ok(Self::Work),
            "Personal" => Ok(Self::Personal),
            "Health" => Ok(Self::Health),
            "Finance" => Ok(Self::Finance),
            "Learning" => Ok(Self::Learning),
            "Errands" => Ok(Self::Errands),
            "Creative" => Ok(Self::Creative),
            "Social" => Ok(Self::Social),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
