//! Host-owned simulation data the controller reads and patches.
//!
//! The controller never spawns any of these. Residents, stands, requests and
//! vehicles are created and despawned by the host simulation; the controller
//! only flips flags, clears references and tags orphaned requests with
//! [`Deleted`].

pub mod agents;
pub mod flags;
pub mod lifecycle;
pub mod transport;

pub use agents::*;
pub use flags::*;
pub use lifecycle::*;
pub use transport::*;
