use std::collections::BTreeSet;

use anyhow::Result;
use log::info;

use crate::config::GradesApi;
use crate::models::{AvailableCourses, CourseLabel, Subject};
use crate::utils::http::{endpoint, JsonSource};

/// Subject code -> its course labels, e.g. `"APSC" -> ["100", "101", "496D", ...]`.
pub async fn get_available_courses_dict<S: JsonSource>(
    source: &S,
    api: &GradesApi,
) -> Result<AvailableCourses> {
    info!("updating available courses");

    let mut available_courses = AvailableCourses::new();
    for subject in get_subjects_list(source, api).await? {
        let labels = get_course_labels_list(source, api, &subject).await?;
        available_courses.insert(subject, labels);
    }

    Ok(available_courses)
}

/// Every distinct subject across all terms, in the order the API lists them.
pub async fn get_subjects_list<S: JsonSource>(source: &S, api: &GradesApi) -> Result<Vec<String>> {
    let url = endpoint(&api.base_url, &["subjects", &api.campus])?;
    let subjects: Vec<Subject> = source.get_json(url).await?;
    Ok(subjects.into_iter().map(|s| s.subject).collect())
}

async fn get_course_labels_list<S: JsonSource>(
    source: &S,
    api: &GradesApi,
    subject: &str,
) -> Result<Vec<String>> {
    info!("Getting the course labels list for {subject}");

    let url = endpoint(&api.base_url, &["courses", &api.campus, subject])?;
    let courses: Vec<CourseLabel> = source.get_json(url).await?;
    Ok(distinct_labels(&courses))
}

// Titles change over the years, so the same course and detail can be listed more than once.
fn distinct_labels(courses: &[CourseLabel]) -> Vec<String> {
    courses
        .iter()
        .map(CourseLabel::label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
