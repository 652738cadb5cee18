use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    AVAILABLE_COURSES_FN, COURSE_INFORMATION_FN, COURSE_STATISTICS_FN, GRADE_DISTRIBUTIONS_FN,
    PROFESSOR_INFORMATION_FN, TEACHING_TEAM_FN,
};

/// Update the files containing the course information data used by the application,
/// scraping it from various websites. Select which files to update using the arguments below.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[arg(short = 'c', long, help = format!("update {AVAILABLE_COURSES_FN}"))]
    pub available_courses: bool,

    #[arg(short = 'i', long, help = format!("update {COURSE_INFORMATION_FN}"))]
    pub course_information: bool,

    #[arg(short = 's', long, help = format!("update {COURSE_STATISTICS_FN}"))]
    pub course_statistics: bool,

    #[arg(
        short = 'd',
        long,
        help = format!("update {GRADE_DISTRIBUTIONS_FN} and {TEACHING_TEAM_FN}")
    )]
    pub grade_distributions: bool,

    #[arg(short = 'p', long, help = format!("update {PROFESSOR_INFORMATION_FN}"))]
    pub professor_information: bool,

    /// update every file
    #[arg(short = 'a', long)]
    pub all: bool,

    /// directory the files are written to [env: DATA_DIR]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// indent the written JSON
    #[arg(long)]
    pub pretty: bool,

    /// log every request
    #[arg(short, long)]
    pub verbose: bool,
}

/// The datasets selected for one run, in the order they are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    AvailableCourses,
    CourseInformation,
    CourseStatistics,
    GradeDistributions,
    ProfessorInformation,
}

impl Cli {
    pub fn datasets(&self) -> Vec<Dataset> {
        [
            (self.available_courses, Dataset::AvailableCourses),
            (self.course_information, Dataset::CourseInformation),
            (self.course_statistics, Dataset::CourseStatistics),
            (self.grade_distributions, Dataset::GradeDistributions),
            (self.professor_information, Dataset::ProfessorInformation),
        ]
        .into_iter()
        .filter(|(selected, _)| self.all || *selected)
        .map(|(_, dataset)| dataset)
        .collect()
    }
}
