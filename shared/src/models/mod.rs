//! Data models shared between client and server

pub mod employee;

pub use employee::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
