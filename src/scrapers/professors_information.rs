use anyhow::{Context, Result};
use log::info;
use url::Url;

use crate::config::RmpApi;
use crate::models::{Professor, ProfessorInformation, ProfessorPage};
use crate::utils::http::{endpoint, JsonSource};

/// Professors per roster page.
pub const PAGE_SIZE: u64 = 20;

/// "First Last" -> every roster entry with that name, without `tSid`,
/// `institution_name`, `tFname` and `tLname`.
///
/// The middle name is often missing and nothing ties an entry to a person, so two
/// professors sharing a name both end up in the list under that name.
pub async fn get_professor_information_dict<S: JsonSource>(
    source: &S,
    api: &RmpApi,
) -> Result<ProfessorInformation> {
    info!("updating professor information");

    let mut professors_info = ProfessorInformation::new();
    for professor in get_professor_list(source, api).await? {
        professors_info
            .entry(professor.full_name())
            .or_default()
            .push(professor.rest);
    }

    Ok(professors_info)
}

/// Number of pages needed for the roster, given the `remaining` count on page 1.
pub fn page_count(remaining: u64) -> u64 {
    (remaining + PAGE_SIZE).div_ceil(PAGE_SIZE)
}

async fn get_professor_list<S: JsonSource>(source: &S, api: &RmpApi) -> Result<Vec<Professor>> {
    let first: ProfessorPage = source.get_json(roster_page_url(api, 1)?).await?;
    let num_pages = page_count(first.remaining);
    info!("Getting professor information from page 1 out of {num_pages}");

    let mut professors = first.professors;
    for page in 2..=num_pages {
        info!("Getting professor information from page {page} out of {num_pages}");

        let next: ProfessorPage = source.get_json(roster_page_url(api, page)?).await?;
        professors.extend(next.professors);
    }

    Ok(professors)
}

fn roster_page_url(api: &RmpApi, page: u64) -> Result<Url> {
    let mut url = endpoint(&api.base_url, &[""])
        .with_context(|| format!("Cannot build roster URL for page {page}"))?;
    url.query_pairs_mut()
        .append_pair("page", &page.to_string())
        .append_pair("filter", "teacherlastname_sort_s asc")
        .append_pair("query", "*:*")
        .append_pair("queryoption", "TEACHER")
        .append_pair("queryBy", "schoolId")
        .append_pair("sid", &api.school_id.to_string());
    Ok(url)
}
