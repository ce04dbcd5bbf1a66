pub mod event;
pub mod hardware;
pub mod scan_event;
pub mod skill;
pub mod user;
