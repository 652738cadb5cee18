pub mod available_courses;
pub mod course_information;
pub mod course_statistics;
pub mod grade_distributions;
pub mod professors_information;
