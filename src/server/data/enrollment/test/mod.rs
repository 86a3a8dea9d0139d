mod delete;

use super::*;
use crate::model::enrollment::EnrollmentStatus;
use test_utils::{builder::TestBuilder, factory};
