//! Presence detection: a single forward pass over time-ordered fixes that
//! turns runs of in-radius points into entry/exit intervals.

use crate::core::geofence::Geofence;
use crate::models::{LocationPoint, PresenceInterval};
use chrono::{NaiveDateTime, TimeDelta};

/// Fixes closer than this to the previous cluster member are not recorded as members.
pub const MEMBER_GAP: TimeDelta = TimeDelta::seconds(60);

/// Scan state carried from one point to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanState {
    Idle,
    InCluster {
        first: NaiveDateTime,
        last_member: NaiveDateTime,
        members: usize,
        last_in_radius: NaiveDateTime,
    },
}

/// Accumulator for the fold: current state plus everything emitted so far.
#[derive(Debug, Clone)]
pub struct Scan {
    pub state: ScanState,
    pub intervals: Vec<PresenceInterval>,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            state: ScanState::Idle,
            intervals: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClusterDetector {
    pub fence: Geofence,
    pub min_cluster_minutes: f64,
}

impl ClusterDetector {
    pub fn new(fence: Geofence, min_cluster_minutes: f64) -> Self {
        Self {
            fence,
            min_cluster_minutes,
        }
    }

    /// One transition of the state machine.
    pub fn step(&self, mut scan: Scan, point: &LocationPoint) -> Scan {
        let t = point.timestamp;

        scan.state = if self.fence.contains(point.coord) {
            match scan.state {
                ScanState::Idle => ScanState::InCluster {
                    first: t,
                    last_member: t,
                    members: 1,
                    last_in_radius: t,
                },
                ScanState::InCluster {
                    first,
                    last_member,
                    members,
                    ..
                } => {
                    let (last_member, members) = if t - last_member > MEMBER_GAP {
                        (t, members + 1)
                    } else {
                        (last_member, members)
                    };
                    ScanState::InCluster {
                        first,
                        last_member,
                        members,
                        last_in_radius: t,
                    }
                }
            }
        } else {
            if let ScanState::InCluster {
                first,
                last_in_radius,
                ..
            } = scan.state
            {
                let candidate = PresenceInterval::new(first, last_in_radius);
                if candidate.duration_minutes() >= self.min_cluster_minutes {
                    scan.intervals.push(candidate);
                }
            }
            ScanState::Idle
        };

        scan
    }

    /// Run the whole pass. A cluster still open when the points run out is dropped.
    pub fn detect(&self, points: &[LocationPoint]) -> Vec<PresenceInterval> {
        self.scan(points).intervals
    }

    /// Like [`detect`](Self::detect) but also returns the final state, so callers
    /// can report an unterminated cluster.
    pub fn scan(&self, points: &[LocationPoint]) -> Scan {
        points
            .iter()
            .fold(Scan::default(), |scan, p| self.step(scan, p))
    }
}
