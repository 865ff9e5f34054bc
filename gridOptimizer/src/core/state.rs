use crate::core::ledger::SolutionLedger;
use crate::core::objective::{self, ObjectiveBreakdown};
use crate::core::solution::Solution;
use crate::models::instance::Instance;
use crate::utils::errors::WindGridError;

/// A solution and its ledger, mutated together by the neighborhood moves.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<'a> {
    pub(crate) solution: Solution<'a>,
    pub(crate) ledger: SolutionLedger,
}

impl<'a> SearchState<'a> {
    pub fn new(solution: Solution<'a>) -> Self {
        let ledger = SolutionLedger::build(&solution);
        Self { solution, ledger }
    }

    pub fn instance(&self) -> &'a Instance {
        self.solution.instance()
    }

    pub fn solution(&self) -> &Solution<'a> {
        &self.solution
    }

    pub fn ledger(&self) -> &SolutionLedger {
        &self.ledger
    }

    pub fn objective(&self) -> f64 {
        objective::objective(&self.solution, &self.ledger)
    }

    pub fn breakdown(&self) -> ObjectiveBreakdown {
        objective::evaluate(&self.solution, &self.ledger)
    }

    /// Solution invariants plus equality of the ledger with a full rebuild.
    pub fn verify(&self) -> Result<(), WindGridError> {
        self.solution.check_invariants()?;
        let rebuilt = SolutionLedger::build(&self.solution);
        if let Some(station) = self.ledger.first_divergence(&rebuilt) {
            return Err(WindGridError::InvariantViolation(format!(
                "ledger row for station {} diverges from recomputation", station
            )));
        }
        Ok(())
    }
}
