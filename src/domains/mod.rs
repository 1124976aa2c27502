//! Domain layer: the contracts the persistence pipeline is built from.
//!
//! - validation: required-field rules for records
//! - storage: segregated storage capabilities (save, update, delete, sync)
//! - activity: timestamped activity logging

pub mod activity;
pub mod storage;
pub mod validation;
