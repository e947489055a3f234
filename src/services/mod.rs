pub mod activities_service;
pub mod registry;
