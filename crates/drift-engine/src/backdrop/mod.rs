mod station;

pub use station::StationBackdrop;
