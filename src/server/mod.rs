//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, startup, HTTP
//! routing, controllers, the service layer holding club, player, match and statistics
//! logic, and the repositories that talk to the relational store through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
