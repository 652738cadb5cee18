use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AVAILABLE_COURSES_FN: &str = "available_courses.json";
pub const COURSE_INFORMATION_FN: &str = "course_information.json";
pub const COURSE_STATISTICS_FN: &str = "course_statistics.json";
pub const GRADE_DISTRIBUTIONS_FN: &str = "grade_distributions.json";
pub const TEACHING_TEAM_FN: &str = "teaching_team.json";
pub const PROFESSOR_INFORMATION_FN: &str = "professors_information.json";

const DEFAULT_DATA_DIR: &str = ".";
const DEFAULT_GR_API_URL: &str = "https://ubcgrades.com/api/v2";
const DEFAULT_GR_CAMPUS: &str = "UBCV";
const DEFAULT_EX_API_URL: &str = "https://ubcexplorer.io";
const DEFAULT_RMP_API_URL: &str = "http://www.ratemyprofessors.com/filter/professor";
const DEFAULT_RMP_CAMPUS_ID: u32 = 1413;

/// ubcgrades.com: subjects, courses, terms, grades and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GradesApi {
    pub base_url: String,
    pub campus: String,
}

/// ubcexplorer.io: the course catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerApi {
    pub base_url: String,
}

/// ratemyprofessors.com: the professor roster of one school.
#[derive(Debug, Clone, PartialEq)]
pub struct RmpApi {
    pub base_url: String,
    pub school_id: u32,
}

/// Built once in `main` and only borrowed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub pretty: bool,
    pub grades: GradesApi,
    pub explorer: ExplorerApi,
    pub rmp: RmpApi,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pretty: false,
            grades: GradesApi {
                base_url: DEFAULT_GR_API_URL.to_string(),
                campus: DEFAULT_GR_CAMPUS.to_string(),
            },
            explorer: ExplorerApi {
                base_url: DEFAULT_EX_API_URL.to_string(),
            },
            rmp: RmpApi {
                base_url: DEFAULT_RMP_API_URL.to_string(),
                school_id: DEFAULT_RMP_CAMPUS_ID,
            },
        }
    }
}

impl Config {
    /// Reads overrides from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = lookup("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("GR_API_URL") {
            config.grades.base_url = url;
        }
        if let Some(campus) = lookup("GR_CAMPUS") {
            config.grades.campus = campus;
        }
        if let Some(url) = lookup("EX_API_URL") {
            config.explorer.base_url = url;
        }
        if let Some(url) = lookup("RMP_API_URL") {
            config.rmp.base_url = url;
        }
        if let Some(id) = lookup("RMP_CAMPUS_ID") {
            config.rmp.school_id = id
                .trim()
                .parse()
                .with_context(|| format!("RMP_CAMPUS_ID must be a number, got {id:?}"))?;
        }

        Ok(config)
    }
}
