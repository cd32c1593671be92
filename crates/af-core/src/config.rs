//! Planning-run configuration.

use crate::{CoreError, CoreResult};

/// Internal capacity given to the start and end rooms' in→out edge.
///
/// Single occupancy does not apply to the two endpoint rooms.  Because no
/// more than `ant_count` units exist, capping them at `ant_count` is
/// equivalent to leaving them unconstrained; both options are kept so the
/// equivalence stays testable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointCapacity {
    /// Capacity equals the ant count.
    #[default]
    AntCount,
    /// Capacity large enough to never bind.
    Unbounded,
}

impl EndpointCapacity {
    /// Capacity value used for the flow edge.  `Unbounded` stays far below
    /// `i32::MAX` so flows and their negated reverse flows never overflow.
    pub const UNBOUNDED_CAP: u32 = (i32::MAX / 2) as u32;

    #[inline]
    pub fn capacity(self, ant_count: u32) -> u32 {
        match self {
            EndpointCapacity::AntCount  => ant_count,
            EndpointCapacity::Unbounded => Self::UNBOUNDED_CAP,
        }
    }
}

/// Top-level configuration for one planning run.
///
/// Typically built by the application from the parsed input (the ant count)
/// and command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    /// Number of ants to route from start to end.  Must be ≥ 1.
    pub ant_count: u32,

    /// Capacity of the start and end rooms in the flow network.
    pub endpoint_capacity: EndpointCapacity,

    /// Run the post-solve flow invariant sweep and cross-check the simulated
    /// round count against the assignment makespan.
    pub verify: bool,
}

impl PlanConfig {
    /// Default configuration for `ant_count` ants.
    pub fn new(ant_count: u32) -> Self {
        Self {
            ant_count,
            endpoint_capacity: EndpointCapacity::AntCount,
            verify: true,
        }
    }

    /// Capacity of the start/end internal edge under this configuration.
    #[inline]
    pub fn endpoint_cap(&self) -> u32 {
        self.endpoint_capacity.capacity(self.ant_count)
    }

    /// Reject configurations no run can use.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ant_count == 0 {
            return Err(CoreError::Config("ant_count must be at least 1".into()));
        }
        if self.ant_count > EndpointCapacity::UNBOUNDED_CAP {
            return Err(CoreError::Config(format!(
                "ant_count {} exceeds the supported maximum {}",
                self.ant_count,
                EndpointCapacity::UNBOUNDED_CAP
            )));
        }
        Ok(())
    }
}
