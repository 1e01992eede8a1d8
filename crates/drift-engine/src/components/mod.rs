pub mod asteroid;
pub mod rocket;
pub mod station;
