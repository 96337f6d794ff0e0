//! Browser-side services

pub mod facade;
pub mod freighter;
pub mod scheduler;

pub use facade::BrowserFacade;
pub use scheduler::BrowserScheduler;
