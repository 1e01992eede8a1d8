use std::fmt;

/// Load lifecycle of an asset-backed scene object.
/// A load either succeeds (the object is admitted) or fails (logged, the
/// member stays absent for the whole session); there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Pending,
    Ready,
    Failed,
}

impl SlotStatus {
    pub fn is_ready(self) -> bool {
        matches!(self, SlotStatus::Ready)
    }
}

/// Which loader an asset notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Station,
    Rocket,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Station => write!(f, "station model"),
            AssetKind::Rocket => write!(f, "rocket model"),
        }
    }
}
