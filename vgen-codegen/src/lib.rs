//! Swift code generation for Vapor resources.
//!
//! Turns a [`Resource`] into three files below the application directory:
//! a Fluent model, a create/drop migration and a route collection.

pub mod builder;
pub mod files;

mod generator;
mod resource;
mod type_mapper;

pub use generator::{GenerateResult, Generator};
pub use resource::Resource;
pub use type_mapper::VaporTypeMapper;
