use anyhow::Result;
use log::info;

use crate::config::GradesApi;
use crate::models::{CourseStatistics, CourseStatisticsEntry};
use crate::scrapers::available_courses::get_subjects_list;
use crate::utils::http::{endpoint, JsonSource};

/// Course name -> statistics without `campus`, `course`, `detail` and `subject`.
pub async fn get_course_statistics_dict<S: JsonSource>(
    source: &S,
    api: &GradesApi,
) -> Result<CourseStatistics> {
    info!("updating course statistics");

    let mut course_stats = CourseStatistics::new();
    for subject in get_subjects_list(source, api).await? {
        info!("Getting the course statistics for the courses in {subject}");

        let url = endpoint(&api.base_url, &["course-statistics", &api.campus, &subject])?;
        let entries: Vec<CourseStatisticsEntry> = source.get_json(url).await?;
        course_stats.extend(entries.into_iter().map(|entry| (entry.course_name(), entry.rest)));
    }

    Ok(course_stats)
}
