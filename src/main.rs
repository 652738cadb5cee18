mod cli;
mod config;
mod models;
mod scrapers;
mod utils;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use crate::cli::{Cli, Dataset};
use crate::config::{
    Config, AVAILABLE_COURSES_FN, COURSE_INFORMATION_FN, COURSE_STATISTICS_FN,
    GRADE_DISTRIBUTIONS_FN, PROFESSOR_INFORMATION_FN, TEACHING_TEAM_FN,
};
use crate::scrapers::available_courses::get_available_courses_dict;
use crate::scrapers::course_information::get_course_information_dict;
use crate::scrapers::course_statistics::get_course_statistics_dict;
use crate::scrapers::grade_distributions::get_grade_distributions_and_teaching_team_dicts;
use crate::scrapers::professors_information::get_professor_information_dict;
use crate::utils::http::{ApiClient, JsonSource};
use crate::utils::json::dump_json;

// One request at a time, so a single-threaded runtime is all we need.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = TermLogger::init(level, LogConfig::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    config.pretty |= cli.pretty;

    let datasets = cli.datasets();
    if datasets.is_empty() {
        info!("Nothing to update, pass --help to see the available datasets");
        return;
    }

    let client = match ApiClient::new() {
        Ok(client) => client,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };

    for dataset in datasets {
        if let Err(e) = update(&client, &config, dataset).await {
            error!("Error updating {dataset:?}: {e:#}");
            std::process::exit(1);
        }
    }
}

// Fetches one dataset and writes its file(s) into the data directory.
async fn update<S: JsonSource>(source: &S, config: &Config, dataset: Dataset) -> Result<()> {
    let dir = config.data_dir.as_path();
    let pretty = config.pretty;

    match dataset {
        Dataset::AvailableCourses => {
            let dict = get_available_courses_dict(source, &config.grades).await?;
            dump_json(dir, AVAILABLE_COURSES_FN, &dict, pretty)?;
        }
        Dataset::CourseInformation => {
            let dict = get_course_information_dict(source, &config.explorer).await?;
            dump_json(dir, COURSE_INFORMATION_FN, &dict, pretty)?;
        }
        Dataset::CourseStatistics => {
            let dict = get_course_statistics_dict(source, &config.grades).await?;
            dump_json(dir, COURSE_STATISTICS_FN, &dict, pretty)?;
        }
        Dataset::GradeDistributions => {
            let dicts = get_grade_distributions_and_teaching_team_dicts(source, &config.grades).await?;
            dump_json(dir, GRADE_DISTRIBUTIONS_FN, &dicts.grade_distributions, pretty)?;
            dump_json(dir, TEACHING_TEAM_FN, &dicts.teaching_team, pretty)?;
        }
        Dataset::ProfessorInformation => {
            let dict = get_professor_information_dict(source, &config.rmp).await?;
            dump_json(dir, PROFESSOR_INFORMATION_FN, &dict, pretty)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExplorerApi, GradesApi, RmpApi};
    use crate::utils::http::testing::{query, tail, FakeSource};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::tempdir;

    fn config(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            pretty: false,
            grades: GradesApi { base_url: "https://grades.test/api/v2".to_string(), campus: "UBCV".to_string() },
            explorer: ExplorerApi { base_url: "https://explorer.test".to_string() },
            rmp: RmpApi { base_url: "http://rmp.test/filter/professor".to_string(), school_id: 1413 },
        }
    }

    fn route(url: &url::Url) -> Option<Value> {
        match url.host_str()? {
            "explorer.test" => Some(json!([
                {"dept": "MATH", "code": "MATH 210", "name": "Introduction to Mathematical Computing", "cred": 3}
            ])),
            "rmp.test" => (query(url, "page").as_deref() == Some("1")).then(|| {
                json!({"remaining": 0, "professors": [
                    {"tFname": "Robert", "tLname": "Gateman", "tSid": "1413", "tDept": "Economics"}
                ]})
            }),
            "grades.test" => {
                let path = tail(url, 2);
                match path.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
                    ["subjects", "UBCV"] => Some(json!([{"subject": "MATH"}])),
                    ["courses", "UBCV", "MATH"] => Some(json!([{"course": "210", "detail": ""}])),
                    ["course-statistics", "UBCV", "MATH"] => Some(json!([
                        {"subject": "MATH", "course": "210", "detail": "", "campus": "UBCV", "average": 72.5}
                    ])),
                    ["yearsessions", "UBCV"] => Some(json!(["2020W"])),
                    ["grades", "UBCV", "2020W"] => Some(json!([
                        {"subject": "MATH", "course": "210", "detail": "", "section": "OVERALL", "educators": "", "average": 72.5},
                        {"subject": "MATH", "course": "210", "detail": "", "section": "101", "educators": "Ada Lovelace", "average": 72.5}
                    ])),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn read(dir: &std::path::Path, file_name: &str) -> Value {
        serde_json::from_str(&fs::read_to_string(dir.join(file_name)).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn every_dataset_writes_its_files() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let source = FakeSource::new(route);

        for dataset in [
            Dataset::AvailableCourses,
            Dataset::CourseInformation,
            Dataset::CourseStatistics,
            Dataset::GradeDistributions,
            Dataset::ProfessorInformation,
        ] {
            update(&source, &config, dataset).await.unwrap();
        }

        let dir = temp.path();
        assert_eq!(read(dir, AVAILABLE_COURSES_FN), json!({"MATH": ["210"]}));
        assert_eq!(
            read(dir, COURSE_INFORMATION_FN),
            json!({"MATH 210": {"name": "Introduction to Mathematical Computing", "cred": 3}})
        );
        assert_eq!(read(dir, COURSE_STATISTICS_FN), json!({"MATH 210": {"average": 72.5}}));
        assert_eq!(
            read(dir, GRADE_DISTRIBUTIONS_FN),
            json!({"MATH 210": [{"educators": "", "average": 72.5}]})
        );
        assert_eq!(read(dir, TEACHING_TEAM_FN), json!({"MATH 210": {"101": ["Ada Lovelace"]}}));
        assert_eq!(
            read(dir, PROFESSOR_INFORMATION_FN),
            json!({"Robert Gateman": [{"tDept": "Economics"}]})
        );
    }

    #[tokio::test]
    async fn failed_fetch_writes_nothing() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let source = FakeSource::new(|_: &url::Url| None);

        assert!(update(&source, &config, Dataset::CourseInformation).await.is_err());
        assert!(!temp.path().join(COURSE_INFORMATION_FN).exists());
    }
}
