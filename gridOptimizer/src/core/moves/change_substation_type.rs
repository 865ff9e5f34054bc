use rand::Rng;
use tracing::trace;
use crate::core::moves::{random_alternative, random_open_station};
use crate::core::neighborhood::{MoveOutcome, RejectReason};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;

/// Swaps the substation type of a random open station for a random other
/// type when the cost difference plus the change in losses pays for it.
pub fn change_substation_type<R: Rng>(state: &mut SearchState, rng: &mut R) -> Result<MoveOutcome, WindGridError> {
    let instance = state.instance();
    let Some(site) = random_open_station(state, rng) else {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    };
    let current = state.solution.station_type(site).ok_or_else(|| {
        WindGridError::InvariantViolation(format!("open station {} has no substation type", site))
    })?;
    let Some(replacement) = random_alternative(instance.get_substation_types().len(), current, rng) else {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    };

    let curtailing_cost = instance.get_parameters().curtailing_cost;
    let cost_before = state.solution.station_install_cost(site);
    let loss_before = state.ledger.station_loss(site);

    state.solution.set_station_type(site, replacement);
    state.ledger.refresh_station(&state.solution, site);

    let delta = (cost_before - state.solution.station_install_cost(site))
        + curtailing_cost * (loss_before - state.ledger.station_loss(site));
    if delta > 0.0 {
        trace!("Station {} type {} -> {} (delta {:.3})", site, current, replacement, delta);
        return Ok(MoveOutcome::Accepted { delta });
    }

    state.solution.set_station_type(site, current);
    state.ledger.refresh_station(&state.solution, site);
    Ok(MoveOutcome::Rejected(RejectReason::NoImprovement))
}
