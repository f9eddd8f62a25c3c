mod patch;

pub use patch::{PatchArgs, handle_patch};
