use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Whatever an upstream record carries once its linking fields are removed.
pub type Record = Map<String, Value>;

/// Subject code -> sorted, deduplicated `"<course><detail>"` labels.
pub type AvailableCourses = BTreeMap<String, Vec<String>>;
/// Course name -> catalog entry.
pub type CourseInformation = BTreeMap<String, Record>;
/// Course name -> aggregate statistics.
pub type CourseStatistics = BTreeMap<String, Record>;
/// Course name -> overall distributions, most recent term first.
pub type GradeDistributions = BTreeMap<String, Vec<Record>>;
/// Course name -> section -> professors, by recency then alphabetically.
pub type TeachingTeam = BTreeMap<String, BTreeMap<String, Vec<String>>>;
/// "First Last" -> every roster entry sharing that name.
pub type ProfessorInformation = BTreeMap<String, Vec<Record>>;

/// Section value of the row that aggregates every section of a course in a term.
pub const OVERALL_SECTION: &str = "OVERALL";

/// Formats the cross-dataset key, e.g. `"APSC 496D"` or `"MATH 210"`.
pub fn course_name(subject: &str, course: &str, detail: &str) -> String {
    format!("{subject} {course}{detail}")
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ubcgrades: /subjects/{campus}
#[derive(Debug, Deserialize, Clone)]
pub struct Subject {
    pub subject: String,
}

// ubcgrades: /courses/{campus}/{subject}
#[derive(Debug, Deserialize, Clone)]
pub struct CourseLabel {
    pub course: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail: String,
}

impl CourseLabel {
    pub fn label(&self) -> String {
        format!("{}{}", self.course, self.detail)
    }
}

// ubcexplorer: /getAllCourses
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogEntry {
    pub code: String,
    #[serde(rename = "dept", default)]
    _dept: Option<IgnoredAny>,
    // Consumers rebuild the link from subject, number and detail.
    #[serde(rename = "link", default)]
    _link: Option<IgnoredAny>,
    #[serde(flatten)]
    pub rest: Record,
}

// ubcgrades: /course-statistics/{campus}/{subject}
#[derive(Debug, Deserialize, Clone)]
pub struct CourseStatisticsEntry {
    pub subject: String,
    pub course: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail: String,
    #[serde(rename = "campus", default)]
    _campus: Option<IgnoredAny>,
    #[serde(flatten)]
    pub rest: Record,
}

impl CourseStatisticsEntry {
    pub fn course_name(&self) -> String {
        course_name(&self.subject, &self.course, &self.detail)
    }
}

// ubcgrades: /grades/{campus}/{term}, one row per section
#[derive(Debug, Deserialize, Clone)]
pub struct SectionGrades {
    pub subject: String,
    pub course: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail: String,
    pub section: String,
    #[serde(rename = "campus", default)]
    _campus: Option<IgnoredAny>,
    #[serde(flatten)]
    pub rest: Record,
}

impl SectionGrades {
    pub fn course_name(&self) -> String {
        course_name(&self.subject, &self.course, &self.detail)
    }

    pub fn is_overall(&self) -> bool {
        self.section == OVERALL_SECTION
    }

    /// Names in the `educators` field, which is `;`-separated and may contain empty entries.
    pub fn educators(&self) -> impl Iterator<Item = &str> {
        self.rest
            .get("educators")
            .and_then(Value::as_str)
            .unwrap_or("")
            .split(';')
            .filter(|name| !name.is_empty())
    }
}

// ratemyprofessors: /filter/professor/?page=N...
#[derive(Debug, Deserialize, Clone)]
pub struct ProfessorPage {
    pub remaining: u64,
    pub professors: Vec<Professor>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Professor {
    #[serde(rename = "tFname")]
    pub first_name: String,
    #[serde(rename = "tLname")]
    pub last_name: String,
    #[serde(rename = "tSid", default)]
    _school_id: Option<IgnoredAny>,
    #[serde(rename = "institution_name", default)]
    _institution_name: Option<IgnoredAny>,
    #[serde(flatten)]
    pub rest: Record,
}

impl Professor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
