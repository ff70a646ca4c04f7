//! The closed role and permission catalogue plus the two static tables
//! that bind them: role → permissions and route → permissions.

pub mod binding;
pub mod permission;
pub mod role;
pub mod routes;

pub use binding::RolePermissionBinding;
pub use permission::Permission;
pub use role::Role;
pub use routes::RouteTable;
