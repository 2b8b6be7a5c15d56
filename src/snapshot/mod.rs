//! Snapshot and restore for transition machines.
//!
//! A snapshot captures the machine's durable state so a host can persist it
//! across remounts or process restarts (server-side rendering handoff, tab
//! restore). Frame timers and handlers are runtime wiring and are not part
//! of a snapshot; a machine restored mid-flight resumes at the resting
//! destination of its direction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{StateId, TransitionLog};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a transition machine.
///
/// # Example
///
/// ```rust
/// use segue::core::{StateId, TransitionLog};
/// use segue::snapshot::{Snapshot, SNAPSHOT_VERSION};
///
/// let snapshot = Snapshot::capture(StateId::Entered, true, TransitionLog::new());
///
/// assert_eq!(snapshot.version, SNAPSHOT_VERSION);
/// assert_eq!(snapshot.resume_state().unwrap(), StateId::Entered);
///
/// let bytes = snapshot.to_bytes().unwrap();
/// let restored = Snapshot::from_bytes(&bytes).unwrap();
/// assert_eq!(restored.state_id, snapshot.state_id);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// The machine's state at capture time
    pub state_id: StateId,

    /// The boundary flag at capture time
    pub active: bool,

    /// Complete dispatch history
    pub log: TransitionLog,
}

impl Snapshot {
    /// Capture a snapshot of the given machine state.
    pub fn capture(state_id: StateId, active: bool, log: TransitionLog) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state_id,
            active,
            log,
        }
    }

    /// The state a restored machine resumes in.
    ///
    /// A persisted process cannot resume a browser transition, so in-flight
    /// states clamp to the resting destination of their direction: an
    /// interrupted enter resumes entered, an interrupted exit resumes
    /// exited. The entry point resumes at the init state for `active`.
    pub fn resume_state(&self) -> Result<StateId, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(match self.state_id {
            StateId::EnterPending | StateId::Entering => StateId::Entered,
            StateId::ExitPending | StateId::Exiting => StateId::Exited,
            StateId::EntryPoint => {
                if self.active {
                    StateId::EnteredInit
                } else {
                    StateId::ExitedInit
                }
            }
            resting => resting,
        })
    }

    /// Encode as human-readable JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
