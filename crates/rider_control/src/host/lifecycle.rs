use bevy::prelude::*;

/// Tagged entities are despawned by the host at the end of the frame.
/// Every controller query skips them.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Deleted;

/// Preview entity owned by a tool; never real simulation state.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Temp;
