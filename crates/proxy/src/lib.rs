//! Proxy pattern: employee DAO with a simulated access check.
//!
//! The proxy guards the mutating operations of a data-access interface
//! behind a client-name check before delegating to the real implementation.

pub mod dao;

pub use dao::{DaoError, EmployeeDao, EmployeeDaoProxy, EmployeeId, EmployeeRecord, InMemoryEmployeeDao};
