use rand::Rng;
use tracing::trace;
use crate::core::moves::{random_alternative, random_open_station};
use crate::core::neighborhood::{MoveOutcome, RejectReason};
use crate::core::state::SearchState;
use crate::utils::errors::WindGridError;

/// Land-cable counterpart of the substation type change: the delta covers
/// the cable's installed cost to shore and the cable-side losses.
pub fn change_cable_type<R: Rng>(state: &mut SearchState, rng: &mut R) -> Result<MoveOutcome, WindGridError> {
    let instance = state.instance();
    let Some(site) = random_open_station(state, rng) else {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    };
    let current = state.solution.land_cable(site).ok_or_else(|| {
        WindGridError::InvariantViolation(format!("open station {} has no land cable", site))
    })?;
    let Some(replacement) = random_alternative(instance.get_land_cables().len(), current, rng) else {
        return Ok(MoveOutcome::Rejected(RejectReason::PreconditionUnmet));
    };

    let curtailing_cost = instance.get_parameters().curtailing_cost;
    let cost_before = state.solution.station_install_cost(site);
    let loss_before = state.ledger.station_loss(site);

    state.solution.set_land_cable(site, replacement);
    state.ledger.refresh_station(&state.solution, site);

    let delta = (cost_before - state.solution.station_install_cost(site))
        + curtailing_cost * (loss_before - state.ledger.station_loss(site));
    if delta > 0.0 {
        trace!("Station {} cable {} -> {} (delta {:.3})", site, current, replacement, delta);
        return Ok(MoveOutcome::Accepted { delta });
    }

    state.solution.set_land_cable(site, current);
    state.ledger.refresh_station(&state.solution, site);
    Ok(MoveOutcome::Rejected(RejectReason::NoImprovement))
}
