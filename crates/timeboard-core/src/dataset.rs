//! Activity dataset: the built-in report and loading from JSON/YAML files
//!
//! A [`Dataset`] is constructed explicitly and handed to whatever renders it,
//! so the UI never depends on a particular data source.

use crate::error::CoreError;
use crate::models::{Activity, Profile, TimeframeStats, Timeframes};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Ordered list of activities plus the profile they belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub profile: Profile,
    pub activities: Vec<Activity>,
}

/// A parsed JSON or YAML document, before it is mapped onto [`Dataset`]
///
/// Activities are decoded one by one so a schema error can name the
/// activity it comes from.
trait Document: Sized {
    type Error: std::fmt::Display;

    /// Split into the optional profile and the activity entries
    fn into_parts(self) -> Result<(Option<Self>, Vec<Self>), String>;

    fn title(&self) -> Option<&str>;

    fn decode<T: DeserializeOwned>(self) -> Result<T, Self::Error>;
}

const SHAPE_ERROR: &str = "expected a list of activities or an object with an `activities` list";

impl Document for serde_json::Value {
    type Error = serde_json::Error;

    fn into_parts(self) -> Result<(Option<Self>, Vec<Self>), String> {
        use serde_json::Value;
        match self {
            Value::Array(items) => Ok((None, items)),
            Value::Object(mut map) => match map.remove("activities") {
                Some(Value::Array(items)) => {
                    Ok((map.remove("profile").filter(|p| !p.is_null()), items))
                }
                Some(_) => Err("`activities` must be a list".to_string()),
                None => Err("missing field `activities`".to_string()),
            },
            _ => Err(SHAPE_ERROR.to_string()),
        }
    }

    fn title(&self) -> Option<&str> {
        self.get("title").and_then(serde_json::Value::as_str)
    }

    fn decode<T: DeserializeOwned>(self) -> Result<T, Self::Error> {
        serde_json::from_value(self)
    }
}

impl Document for serde_yaml::Value {
    type Error = serde_yaml::Error;

    fn into_parts(self) -> Result<(Option<Self>, Vec<Self>), String> {
        use serde_yaml::Value;
        match self {
            Value::Sequence(items) => Ok((None, items)),
            Value::Mapping(mut map) => match map.remove("activities") {
                Some(Value::Sequence(items)) => {
                    Ok((map.remove("profile").filter(|p| !p.is_null()), items))
                }
                Some(_) => Err("`activities` must be a list".to_string()),
                None => Err("missing field `activities`".to_string()),
            },
            _ => Err(SHAPE_ERROR.to_string()),
        }
    }

    fn title(&self) -> Option<&str> {
        self.get("title").and_then(serde_yaml::Value::as_str)
    }

    fn decode<T: DeserializeOwned>(self) -> Result<T, Self::Error> {
        serde_yaml::from_value(self)
    }
}

/// Map a parsed document onto a dataset, naming the failing entry
fn decode_document<D: Document>(document: D) -> Result<Dataset, String> {
    let (profile, items) = document.into_parts()?;

    let profile = match profile {
        Some(profile) => profile
            .decode::<Profile>()
            .map_err(|e| format!("profile: {}", e))?,
        None => Profile::default(),
    };

    let activities = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let label = match item.title() {
                Some(title) => format!("activity {} ('{}')", index + 1, title),
                None => format!("activity {}", index + 1),
            };
            item.decode::<Activity>()
                .map_err(|e| format!("{}: {}", label, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset {
        profile,
        activities,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    fn from_path(path: &Path) -> Result<Self, CoreError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("yaml") | Some("yml") => Ok(DataFormat::Yaml),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn activity(title: &str, daily: (u32, u32), weekly: (u32, u32), monthly: (u32, u32)) -> Activity {
    Activity::new(
        title,
        Timeframes {
            daily: TimeframeStats::new(daily.0, daily.1),
            weekly: TimeframeStats::new(weekly.0, weekly.1),
            monthly: TimeframeStats::new(monthly.0, monthly.1),
        },
    )
}

impl Dataset {
    /// Build a dataset, rejecting empty lists and duplicate titles
    pub fn new(profile: Profile, activities: Vec<Activity>) -> Result<Self, CoreError> {
        let dataset = Self {
            profile,
            activities,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// The stock report shipped with timeboard
    pub fn builtin() -> Self {
        Self {
            profile: Profile::default(),
            activities: vec![
                activity("Work", (5, 7), (32, 36), (103, 128)),
                activity("Play", (1, 2), (10, 8), (23, 29)),
                activity("Study", (0, 1), (4, 7), (13, 19)),
                activity("Exercise", (1, 1), (4, 5), (11, 18)),
                activity("Social", (1, 3), (5, 10), (21, 23)),
                activity("Self Care", (0, 1), (2, 2), (7, 11)),
            ],
        }
    }

    /// Load a dataset from a `.json`, `.yaml` or `.yml` file
    ///
    /// Accepts either a bare array of activities or an object with
    /// `activities` and an optional `profile`.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = DataFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let document = match format {
            DataFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
                        path: path.to_path_buf(),
                        message: source.to_string(),
                        source,
                    })?;
                decode_document(value)
            }
            DataFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(&content).map_err(|source| CoreError::YamlParse {
                        path: path.to_path_buf(),
                        message: source.to_string(),
                        source,
                    })?;
                decode_document(value)
            }
        };

        let dataset = document.map_err(|message| CoreError::InvalidSchema {
            path: path.to_path_buf(),
            message,
        })?;
        dataset.validate()?;

        debug!(
            path = %path.display(),
            activities = dataset.activities.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Check the shape guarantees the dashboard relies on
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.activities.is_empty() {
            return Err(CoreError::InvalidDataset {
                message: "no activities defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for activity in &self.activities {
            if activity.title.trim().is_empty() {
                return Err(CoreError::InvalidDataset {
                    message: "activity with empty title".to_string(),
                });
            }
            if !seen.insert(activity.title.as_str()) {
                return Err(CoreError::InvalidDataset {
                    message: format!("duplicate activity title '{}'", activity.title),
                });
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeframe;
    use tempfile::TempDir;

    const STOCK_JSON: &str = include_str!("../data/activities.json");

    #[test]
    fn test_builtin_is_valid() {
        let dataset = Dataset::builtin();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.len(), 6);
        let titles: Vec<_> = dataset.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Work", "Play", "Study", "Exercise", "Social", "Self Care"]
        );
    }

    #[test]
    fn test_builtin_matches_stock_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("activities.json");
        std::fs::write(&path, STOCK_JSON).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, Dataset::builtin());
    }

    #[test]
    fn test_load_yaml_with_profile() {
        let yaml = r#"
profile:
  name: Grace Hopper
activities:
  - title: Work
    timeframes:
      daily: { current: 8, previous: 6 }
      weekly: { current: 40, previous: 38 }
      monthly: { current: 160, previous: 150 }
"#;
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.yml");
        std::fs::write(&path, yaml).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.profile.name, "Grace Hopper");
        assert_eq!(dataset.profile.description, "Report for");
        assert_eq!(
            dataset.activities[0].stats(Timeframe::Weekly).current,
            40
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/activities.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("activities.csv");
        std::fs::write(&path, "title,daily").unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_timeframe_key() {
        let json = r#"[{"title":"Work","timeframes":{"daily":{"current":1,"previous":2}}}]"#;
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, json).unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSchema { .. }));
        let message = err.to_string();
        assert!(message.contains("activity 1 ('Work')"), "{}", message);
        assert!(message.contains("missing field `weekly`"), "{}", message);
        assert!(err.hint().unwrap().contains("daily, weekly and monthly"));
    }

    #[test]
    fn test_load_yaml_names_failing_activity() {
        let yaml = r#"
activities:
  - title: Work
    timeframes:
      daily: { current: 8, previous: 6 }
      weekly: { current: 40, previous: 38 }
      monthly: { current: 160, previous: 150 }
  - title: Play
    timeframes:
      daily: { current: 1 }
      weekly: { current: 4, previous: 3 }
      monthly: { current: 9, previous: 8 }
"#;
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.yaml");
        std::fs::write(&path, yaml).unwrap();

        let message = Dataset::load(&path).unwrap_err().to_string();
        assert!(message.contains("activity 2 ('Play')"), "{}", message);
        assert!(message.contains("previous"), "{}", message);
    }

    #[test]
    fn test_load_syntax_error_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, r#"[{"title": "Work",]"#).unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::JsonParse { .. }));
    }

    #[test]
    fn test_load_object_without_activities() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile_only.json");
        std::fs::write(&path, r#"{"profile": {"name": "Ada"}}"#).unwrap();

        let message = Dataset::load(&path).unwrap_err().to_string();
        assert!(message.contains("missing field `activities`"), "{}", message);
    }

    #[test]
    fn test_load_rejects_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDataset { .. }));
    }

    #[test]
    fn test_new_rejects_duplicate_titles() {
        let mut activities = Dataset::builtin().activities;
        activities.push(activities[0].clone());

        let err = Dataset::new(Profile::default(), activities).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dataset: duplicate activity title 'Work'"
        );
    }
}
