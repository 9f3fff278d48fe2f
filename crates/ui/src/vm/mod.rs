mod progress_vm;

pub use progress_vm::{ProgressVm, map_progress};
