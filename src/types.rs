use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are 256-bit values, kept as a fixed 32 byte identifier.
pub type ContractTokenId = TokenIdFixed<32>;

/// Number of tokens held by a single address. Each token is unique, so this
/// counts distinct token IDs rather than copies.
pub type TokenCount = u64;

/// Outstanding single approval for a token, absent when none is set.
pub type TokenApproval = Option<Address>;

/// Wrapping the custom errors in a type with CIS errors.
pub type ContractError = Cis2Error<CustomContractError>;
