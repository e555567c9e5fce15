//! Application layer - the request router / session service.

mod service;

pub use service::SkillService;
