#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod course;

#[cfg(feature = "web")]
pub mod enrollment;

#[cfg(feature = "web")]
pub mod student;
