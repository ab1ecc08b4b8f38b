use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PipelineStage {
    Idle,
    Detecting,
    Extracting,
    Normalizing,
    Prompting,
    Summarizing,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "IDLE",
            PipelineStage::Detecting => "DETECTING",
            PipelineStage::Extracting => "EXTRACTING",
            PipelineStage::Normalizing => "NORMALIZING",
            PipelineStage::Prompting => "PROMPTING",
            PipelineStage::Summarizing => "SUMMARIZING",
            PipelineStage::Done => "DONE",
            PipelineStage::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
