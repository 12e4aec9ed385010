pub mod alerts;
pub mod level;
pub mod level_list;
pub mod pending;
pub mod unavailable;
