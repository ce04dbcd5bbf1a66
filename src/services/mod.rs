pub mod dashboard_service;
pub mod event_service;
pub mod fixture_service;
pub mod hardware_service;
pub mod scan_service;
pub mod skill_service;
pub mod user_service;
