use super::mutation::MutationOutcome;
use super::schema::ResourceSchema;

pub enum Msg<S: ResourceSchema> {
    /// Collection fetched; `epoch` identifies which `load()` produced it.
    Loaded {
        epoch: u32,
        records: Vec<S::Record>,
    },
    LoadFailed {
        epoch: u32,
        reason: String,
    },
    SearchChanged(String),
    StartCreate,
    StartEdit(String),
    FieldInput(usize, String),
    TogglePreview(bool),
    Cancel,
    Submit,
    SubmitFinished(MutationOutcome),
    /// Delete button pressed; confirmation happens in `update`.
    Delete(String),
    DeleteFinished {
        id: String,
        outcome: MutationOutcome,
    },
}
