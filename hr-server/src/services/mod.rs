//! Services
//!
//! - [`DepartmentService`]: department name uniqueness and the removal guard
//! - [`EmployeeService`]: employee code uniqueness and listings
//! - [`http`]: router assembly and HTTP middleware

pub mod department;
pub mod employee;
pub mod http;

pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use http::build_app;
