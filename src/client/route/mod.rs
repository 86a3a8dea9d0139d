pub mod courses;
pub mod enrollments;
pub mod not_found;
pub mod students;

pub use courses::Courses;
pub use enrollments::Enrollments;
pub use not_found::NotFound;
pub use students::Students;
