//! Capability labels granted to roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use schoolgate_core::AppError;

/// An action category a role may be granted.
///
/// Permissions are capability labels, not grants on individual records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // People
    /// Create, edit and deactivate user accounts.
    ManageUsers,
    /// Manage staff records.
    ManageStaff,
    /// Manage student records.
    ManageStudents,
    /// Manage parent/guardian records.
    ManageParents,

    // Academics
    /// Manage class groups.
    ManageClasses,
    /// Manage the subject catalogue.
    ManageSubjects,
    /// Enter and edit grades.
    ManageGrades,
    /// Record attendance.
    TakeAttendance,
    /// Create assignments.
    CreateAssignments,
    /// View assignments.
    ViewAssignments,
    /// Edit the timetable.
    ManageSchedule,

    // Communication
    /// Send messages to users.
    SendMessages,

    // Reporting
    /// View academic reports.
    ViewReports,
    /// View analytics dashboards.
    ViewAnalytics,

    // Administration
    /// Change school-wide settings.
    ManageSchoolSettings,

    // Billing
    /// View financial reports.
    ViewFinancialReports,
    /// Record and manage payments.
    ManagePayments,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 17] = [
        Permission::ManageUsers,
        Permission::ManageStaff,
        Permission::ManageStudents,
        Permission::ManageParents,
        Permission::ManageClasses,
        Permission::ManageSubjects,
        Permission::ManageGrades,
        Permission::TakeAttendance,
        Permission::CreateAssignments,
        Permission::ViewAssignments,
        Permission::ManageSchedule,
        Permission::SendMessages,
        Permission::ViewReports,
        Permission::ViewAnalytics,
        Permission::ManageSchoolSettings,
        Permission::ViewFinancialReports,
        Permission::ManagePayments,
    ];

    /// Return the permission as a snake_case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageUsers => "manage_users",
            Self::ManageStaff => "manage_staff",
            Self::ManageStudents => "manage_students",
            Self::ManageParents => "manage_parents",
            Self::ManageClasses => "manage_classes",
            Self::ManageSubjects => "manage_subjects",
            Self::ManageGrades => "manage_grades",
            Self::TakeAttendance => "take_attendance",
            Self::CreateAssignments => "create_assignments",
            Self::ViewAssignments => "view_assignments",
            Self::ManageSchedule => "manage_schedule",
            Self::SendMessages => "send_messages",
            Self::ViewReports => "view_reports",
            Self::ViewAnalytics => "view_analytics",
            Self::ManageSchoolSettings => "manage_school_settings",
            Self::ViewFinancialReports => "view_financial_reports",
            Self::ManagePayments => "manage_payments",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == label)
            .ok_or_else(|| AppError::validation(format!("Invalid permission: '{s}'")))
    }
}
