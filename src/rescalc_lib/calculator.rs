use crate::constants::MAX_CAPACITY;
use crate::error::InvalidInputError;
use crate::request::Capacity;
use crate::request::Provided;
use crate::request::ReservationRequest;

/// The outcome of a calculation: all three capacities, one of them derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The capacity that was calculated.
    pub missing: Capacity,

    /// Job count.
    pub jobs: f64,

    /// Node count.
    pub nodes: f64,

    /// Hours.
    pub hours: f64,

    /// The node-hours per job, buffer included, the result is based on.
    pub effective_node_hours: f64,
}

impl Solution {
    /// The value of the capacity that was calculated.
    pub fn value(&self) -> f64 {
        self.get(self.missing)
    }

    /// The value of any of the three capacities.
    pub fn get(&self, capacity: Capacity) -> f64 {
        match capacity {
            Capacity::Jobs => self.jobs,
            Capacity::Nodes => self.nodes,
            Capacity::Hours => self.hours,
        }
    }
}

/// Derive the missing capacity of a request.
///
/// Jobs are rounded down so the batch never needs more node-hours than
/// reserved, nodes are rounded up so the reservation always fits all jobs,
/// hours are left exact.
///
/// A capacity, given or calculated, that is not finite or exceeds
/// [MAX_CAPACITY] is rejected, so nothing gets printed for it.
pub fn solve(request: &ReservationRequest) -> Result<Solution, InvalidInputError> {
    let nh = request.shape.effective_node_hours();
    let missing = request.provided.missing();

    let (jobs, nodes, hours) = match request.provided {
        Provided::NodesAndHours { nodes, hours } => (jobs_for(nodes, hours, nh), nodes, hours),
        Provided::JobsAndHours { jobs, hours } => (jobs, nodes_for(jobs, hours, nh), hours),
        Provided::JobsAndNodes { jobs, nodes } => (jobs, nodes, hours_for(jobs, nodes, nh)),
    };

    let solution = Solution {
        missing,
        jobs,
        nodes,
        hours,
        effective_node_hours: nh,
    };

    for capacity in [Capacity::Jobs, Capacity::Nodes, Capacity::Hours] {
        let value = solution.get(capacity);

        if !value.is_finite() || value > MAX_CAPACITY {
            return Err(InvalidInputError::OutOfRange {
                flag: capacity.flag(),
                value,
            });
        }
    }

    Ok(solution)
}

/// `floor(R * H / NH)`
pub fn jobs_for(nodes: f64, hours: f64, node_hours_per_job: f64) -> f64 {
    ((nodes * hours) / node_hours_per_job).floor()
}

/// `ceil(Q * NH / H)`
pub fn nodes_for(jobs: f64, hours: f64, node_hours_per_job: f64) -> f64 {
    ((jobs * node_hours_per_job) / hours).ceil()
}

/// `Q * NH / R`
pub fn hours_for(jobs: f64, nodes: f64, node_hours_per_job: f64) -> f64 {
    (jobs * node_hours_per_job) / nodes
}

#[cfg(test)]
#[path = "tests/calculator.rs"]
mod tests;
