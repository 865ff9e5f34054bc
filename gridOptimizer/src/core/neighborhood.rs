use serde::{Deserialize, Serialize};
use std::fmt;

/// Move families explored by the local search, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighborhood {
    ReassignTurbine,
    ChangeSubstationType,
    ChangeCableType,
    CloseStation,
    OpenStation,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 5] = [
        Neighborhood::ReassignTurbine,
        Neighborhood::ChangeSubstationType,
        Neighborhood::ChangeCableType,
        Neighborhood::CloseStation,
        Neighborhood::OpenStation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Neighborhood::ReassignTurbine => "Reassign Turbine",
            Neighborhood::ChangeSubstationType => "Change Substation Type",
            Neighborhood::ChangeCableType => "Change Cable Type",
            Neighborhood::CloseStation => "Close Station",
            Neighborhood::OpenStation => "Open Station",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    PreconditionUnmet,
    NoImprovement,
}

/// Result of one operator call. `delta` is objective before minus after,
/// so an accepted move always carries a strictly positive delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Accepted { delta: f64 },
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn gain(&self) -> f64 {
        match self {
            MoveOutcome::Accepted { delta } => *delta,
            MoveOutcome::Rejected(_) => 0.0,
        }
    }
}
