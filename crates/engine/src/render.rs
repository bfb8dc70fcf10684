use anyhow::Result;

use crate::core::GameSnapshot;

/// Render collaborator.
///
/// Receives a snapshot after every state change. Implementations must tolerate
/// redundant calls with an unchanged snapshot.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Discards every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _snapshot: &GameSnapshot) -> Result<()> {
        Ok(())
    }
}
