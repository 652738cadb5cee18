use std::collections::BTreeSet;

use anyhow::Result;
use log::info;

use crate::config::GradesApi;
use crate::models::{GradeDistributions, SectionGrades, TeachingTeam};
use crate::utils::http::{endpoint, JsonSource};

/// Both datasets built from the per-term section grades.
///
/// - Grade distributions: course name -> the `OVERALL` row of every term the course
///   was offered, most recent first, without `campus`, `course`, `detail`, `section`
///   and `subject`.
/// - Teaching team: course name -> section -> professors who taught it, by recency
///   then alphabetically.
#[derive(Debug, Default, PartialEq)]
pub struct GradeDistributionsAndTeachingTeam {
    pub grade_distributions: GradeDistributions,
    pub teaching_team: TeachingTeam,
}

impl GradeDistributionsAndTeachingTeam {
    /// Folds one term's rows in. Terms must be added from most to least recent.
    pub fn add_term(&mut self, rows: Vec<SectionGrades>) {
        for row in rows {
            let course_name = row.course_name();

            if row.is_overall() {
                self.grade_distributions
                    .entry(course_name)
                    .or_default()
                    .push(row.rest);
                continue;
            }

            let professors = self
                .teaching_team
                .entry(course_name)
                .or_default()
                .entry(row.section.clone())
                .or_default();
            let new_professors: BTreeSet<&str> = row
                .educators()
                .filter(|name| !professors.iter().any(|known| known == name))
                .collect();
            professors.extend(new_professors.into_iter().map(str::to_string));
        }
    }
}

pub async fn get_grade_distributions_and_teaching_team_dicts<S: JsonSource>(
    source: &S,
    api: &GradesApi,
) -> Result<GradeDistributionsAndTeachingTeam> {
    info!("updating grade distributions and teaching team");

    let mut dicts = GradeDistributionsAndTeachingTeam::default();
    for term in get_available_terms_list(source, api).await? {
        info!("Getting the overall grade distributions for the courses in {term}");

        let url = endpoint(&api.base_url, &["grades", &api.campus, &term])?;
        let rows: Vec<SectionGrades> = source.get_json(url).await?;
        dicts.add_term(rows);
    }

    Ok(dicts)
}

/// All available terms, most recent first (the API lists them oldest first).
async fn get_available_terms_list<S: JsonSource>(source: &S, api: &GradesApi) -> Result<Vec<String>> {
    let url = endpoint(&api.base_url, &["yearsessions", &api.campus])?;
    let mut terms: Vec<String> = source.get_json(url).await?;
    terms.reverse();
    Ok(terms)
}
