/// Tag for the Transfer event. Also covers mints (`from` absent) and burns
/// (`to` absent).
pub const TRANSFER_EVENT_TAG: u8 = u8::MAX;

/// Tag for the Approval event.
pub const APPROVAL_EVENT_TAG: u8 = u8::MAX - 1;

/// Tag for the ApprovalForAll event.
pub const APPROVAL_FOR_ALL_EVENT_TAG: u8 = u8::MAX - 2;
