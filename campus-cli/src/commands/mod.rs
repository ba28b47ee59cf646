pub mod calendar;
pub mod config;
pub mod event;
pub mod events;
pub mod page;
pub mod post;
pub mod search;
pub mod weather;
