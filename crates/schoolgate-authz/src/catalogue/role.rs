//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use schoolgate_core::AppError;

/// Organizational positions a principal can hold.
///
/// A principal has exactly one role at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Top-level administrator across the whole installation.
    SuperAdmin,
    /// Administrator of a single school.
    SchoolAdmin,
    /// Assistant to the school administrator.
    AssistantAdmin,
    /// Teacher responsible for a homeroom class.
    HomeroomTeacher,
    /// Teacher of one or more subjects.
    SubjectTeacher,
    /// Enrolled student.
    Student,
    /// Parent or guardian of a student.
    Parent,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::SchoolAdmin,
        Role::AssistantAdmin,
        Role::HomeroomTeacher,
        Role::SubjectTeacher,
        Role::Student,
        Role::Parent,
    ];

    /// Administrator-like roles.
    pub const ADMIN_ROLES: [Role; 3] = [Role::SuperAdmin, Role::SchoolAdmin, Role::AssistantAdmin];

    /// Teacher-like roles.
    pub const TEACHER_ROLES: [Role; 2] = [Role::HomeroomTeacher, Role::SubjectTeacher];

    /// Whether this role belongs to the administrator group.
    pub fn can_access_admin_routes(&self) -> bool {
        Self::ADMIN_ROLES.contains(self)
    }

    /// Whether this role belongs to the teacher group.
    pub fn can_access_teacher_features(&self) -> bool {
        Self::TEACHER_ROLES.contains(self)
    }

    /// Return the role as a snake_case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SchoolAdmin => "school_admin",
            Self::AssistantAdmin => "assistant_admin",
            Self::HomeroomTeacher => "homeroom_teacher",
            Self::SubjectTeacher => "subject_teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == label)
            .ok_or_else(|| AppError::validation(format!("Invalid role: '{s}'")))
    }
}
