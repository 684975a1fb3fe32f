//! Service integrations for external systems.
//!
//! The only external system is an optional database, used solely to report
//! connectivity.  The service defines a generic trait and a concrete
//! implementation, allowing for easy testing.

pub mod db;
