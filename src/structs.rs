use super::*;

/// The contract state.
///
/// A token exists exactly when it has an entry in `tokens`; removing the
/// entry is what marks a token as burned. `balances` is kept in lockstep
/// with `tokens`: for every address it holds the number of token entries
/// mapping to that address (absent entry reads as zero).
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Mapping from token ID to its current owner.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Number of tokens owned by each address.
    pub balances: StateMap<Address, TokenCount, S>,
    /// Per-token transfer approvals. Cleared on every ownership change, so
    /// an approval never survives a transfer or burn of its token.
    pub approvals: StateMap<ContractTokenId, Address, S>,
    /// The addresses currently enabled as operators for each owner. An
    /// operator may transfer and approve any of the owner's tokens; the
    /// grant is not tied to specific token IDs and persists across
    /// transfers.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Display name of the collection, fixed at init.
    pub name: String,
    /// Display symbol of the collection, fixed at init.
    pub symbol: String,
}

/// Setup parameters fixing the collection name and symbol.
#[derive(Serialize, SchemaType)]
pub struct InitParams {
    /// Display name of the collection.
    pub name: String,
    /// Display symbol of the collection.
    pub symbol: String,
}

/// Parameter type for the contract function `mint`.
#[derive(Serialize, SchemaType)]
pub struct MintParams {
    /// The ID of the token to create.
    pub token_id: ContractTokenId,
    /// The address receiving the new token. `None` is rejected with
    /// `InvalidRecipient`.
    pub to: Option<Address>,
}

/// Parameter type for the contract function `burn`.
#[derive(Serialize, SchemaType)]
pub struct BurnParams {
    /// The ID of the token to destroy.
    pub token_id: ContractTokenId,
}

/// Parameter type for the contract function `approve`.
#[derive(Serialize, SchemaType)]
pub struct ApproveParams {
    /// The ID of the token the approval is scoped to.
    pub token_id: ContractTokenId,
    /// The address being approved, or `None` to revoke any outstanding
    /// approval for the token.
    pub spender: Option<Address>,
}

/// Parameter type for the contract function `transferFrom`.
#[derive(Serialize, SchemaType)]
pub struct TransferFromParams {
    /// The ID of the token to transfer.
    pub token_id: ContractTokenId,
    /// The asserted current owner of the token.
    pub from: Address,
    /// The address receiving the token. `None` is rejected with
    /// `InvalidRecipient`.
    pub to: Option<Address>,
}

/// Parameter type for the contract function `setApprovalForAll`.
#[derive(Serialize, SchemaType)]
pub struct UpdateOperatorParams {
    /// The address whose operator status for the sender is being updated.
    pub operator: Address,
    /// Whether the operator grant is enabled or disabled.
    pub approved: bool,
}
