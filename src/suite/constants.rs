//! Literal expectations of the story service contract

/// Message returned after a successful edit
pub const MSG_SUCCESSFULLY_EDITED: &str = "Successfully edited";

/// Message returned after a successful delete
pub const MSG_DELETED_SUCCESSFULLY: &str = "Deleted successfully!";

/// Message returned when editing an unknown story
pub const MSG_NO_SPOILERS: &str = "No spoilers...";

/// Message returned when deleting an unknown story
pub const MSG_UNABLE_TO_DELETE: &str = "Unable to delete this story spoiler!";

/// Story id the demo server never hands out (used for the 404 edit check)
pub const NON_EXISTING_EDIT_ID: u64 = 12345;

/// Story id the demo server never hands out (used for the 400 delete check)
pub const NON_EXISTING_DELETE_ID: u64 = 111111;
