//! # schoolgate-authz
//!
//! Authorization engine for the SchoolGate administration console.
//!
//! ## Modules
//!
//! - `catalogue` — closed role and permission enumerations, the role binding and the route table
//! - `policy` — the immutable policy value assembled from the catalogue and configuration
//! - `evaluator` — pure permission and route predicates
//! - `dashboard` — canonical landing route per role
//! - `session` — read-only view of the external session collaborator
//! - `facade` — permission predicates bound to the live principal
//! - `navigation` — redirect capability supplied by the view layer
//! - `guard` — navigation-boundary gate with redirect side effects
//! - `gate` — fragment-level render gate without navigation

pub mod catalogue;
pub mod dashboard;
pub mod evaluator;
pub mod facade;
pub mod gate;
pub mod guard;
pub mod navigation;
pub mod policy;
pub mod session;

pub use catalogue::{Permission, Role, RolePermissionBinding, RouteTable};
pub use dashboard::DashboardResolver;
pub use evaluator::PolicyEvaluator;
pub use facade::PermissionFacade;
pub use gate::{MatchMode, RenderGate};
pub use guard::{Decision, Guard, GuardOptions, GuardView};
pub use navigation::{ChannelNavigator, Navigator};
pub use policy::Policy;
pub use session::{Principal, SessionSnapshot, SessionSource};
