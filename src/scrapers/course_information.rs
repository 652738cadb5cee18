use anyhow::Result;
use log::info;

use crate::config::ExplorerApi;
use crate::models::{CatalogEntry, CourseInformation};
use crate::utils::http::{endpoint, JsonSource};

/// Course name -> catalog entry without its `dept`, `code` and `link` fields.
///
/// The link is dropped because this API ignores the course detail, so consumers
/// build it themselves from subject, number and detail.
pub async fn get_course_information_dict<S: JsonSource>(
    source: &S,
    api: &ExplorerApi,
) -> Result<CourseInformation> {
    info!("updating course information");

    let url = endpoint(&api.base_url, &["getAllCourses"])?;
    let catalog: Vec<CatalogEntry> = source.get_json(url).await?;

    Ok(catalog
        .into_iter()
        .map(|entry| (entry.code, entry.rest))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http::testing::{tail, FakeSource};
    use serde_json::json;

    #[tokio::test]
    async fn rekeys_catalog_by_code() {
        let source = FakeSource::new(|url| {
            (tail(url, 0) == ["getAllCourses"]).then(|| {
                json!([
                    {
                        "preq": ["MATH 101"],
                        "creq": ["MATH 215"],
                        "depn": ["CPSC 203"],
                        "_id": "5eb76d718ade8b27172d6363",
                        "dept": "MATH",
                        "code": "MATH 210",
                        "name": "Introduction to Mathematical Computing",
                        "cred": 3,
                        "desc": "Course Description",
                        "prer": "One of MATH 101, MATH 103, MATH 105, MATH 121, SCIE 001.",
                        "link": "https://courses.students.ubc.ca/cs/courseschedule?dept=MATH&course=210"
                    },
                    {"dept": "CPSC", "code": "CPSC 110", "name": "Computation, Programs, and Programming", "cred": 4}
                ])
            })
        });
        let api = ExplorerApi { base_url: "https://explorer.test".to_string() };

        let dict = get_course_information_dict(&source, &api).await.unwrap();

        assert_eq!(dict.len(), 2);
        let math = &dict["MATH 210"];
        for key in ["dept", "code", "link"] {
            assert!(!math.contains_key(key), "{key} should be stripped");
        }
        for key in ["name", "cred", "desc", "preq", "creq", "depn"] {
            assert!(math.contains_key(key), "{key} should be kept");
        }
        assert_eq!(math["cred"], json!(3));
        assert_eq!(dict["CPSC 110"]["cred"], json!(4));
    }

    #[tokio::test]
    async fn entry_without_code_is_fatal() {
        let source = FakeSource::new(|_| Some(json!([{"dept": "MATH", "name": "No code"}])));
        let api = ExplorerApi { base_url: "https://explorer.test".to_string() };

        assert!(get_course_information_dict(&source, &api).await.is_err());
    }
}
