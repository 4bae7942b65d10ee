use crate::SelectedFile;

/// Epoch count sent with every retrain request.
pub const RETRAIN_EPOCHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Best-effort health probe; its outcome never reaches the state.
    ProbeHealth,
    Predict { file: SelectedFile },
    TriggerRetrain { epochs: u32 },
}
