pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::student::Entity as Student;
