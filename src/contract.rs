use super::*;

/// Initialize the contract instance with no tokens and a fixed display name
/// and symbol.
#[init(contract = "NFTLedger", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    // Construct the initial contract state.
    let state = State::new(params, state_builder);
    Ok(state)
}

/// Mint a new token with the given address as the owner.
/// Logs a `Transfer` event with no `from` address.
///
/// Who may mint is a concern of whatever wraps this contract; no caller
/// check happens here.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The recipient is absent.
/// - The token ID already exists.
/// - Fails to log Transfer event.
#[receive(
    contract = "NFTLedger",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;

    let to = params
        .to
        .ok_or(ContractError::Custom(CustomContractError::InvalidRecipient))?;

    // Mint the token in the state.
    host.state_mut().mint(params.token_id, &to)?;

    // Event for the minted token.
    logger.log(&LedgerEvent::Transfer(TransferEvent {
        token_id: params.token_id,
        from: None,
        to: Some(to),
    }))?;

    Ok(())
}

/// Destroy a token, clearing its ownership entry and any outstanding single
/// approval. Logs a `Transfer` event with no `to` address.
///
/// Only the current owner may burn. A single approval or operator grant for
/// the token does not delegate burning.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID does not exist.
/// - The sender is not the token owner.
/// - Fails to log Transfer event.
#[receive(
    contract = "NFTLedger",
    name = "burn",
    parameter = "BurnParams",
    mutable,
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: BurnParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&params.token_id)?;

    // Authenticate the sender for this burn.
    ensure!(sender == owner, ContractError::Unauthorized);

    // Burning the token.
    state.burn(&params.token_id, &owner)?;

    // Event for the burned token.
    logger.log(&LedgerEvent::Transfer(TransferEvent {
        token_id: params.token_id,
        from: Some(owner),
        to: None,
    }))?;

    Ok(())
}

/// Set or revoke the single approval for a token. An absent spender revokes
/// any outstanding approval. Logs an `Approval` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID does not exist.
/// - The sender is neither the token owner nor an operator of the owner.
/// - Fails to log Approval event.
#[receive(
    contract = "NFTLedger",
    name = "approve",
    parameter = "ApproveParams",
    mutable,
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: ApproveParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&params.token_id)?;

    // Authenticate the sender for this approval.
    ensure!(
        sender == owner || state.is_operator(&owner, &sender),
        ContractError::Unauthorized
    );

    // Update the approval in the state.
    state.set_approval(params.token_id, params.spender);

    // Log the approval event.
    logger.log(&LedgerEvent::Approval(ApprovalEvent {
        token_id: params.token_id,
        owner: sender,
        spender: params.spender,
    }))?;

    Ok(())
}

/// Execute a token transfer from `from` to `to`, clearing any outstanding
/// single approval for the token. Logs a `Transfer` event.
///
/// The sender must be the token owner, hold the token's single approval, or
/// be an operator of the owner.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID does not exist.
/// - The `from` address is not the current owner of the token.
/// - The recipient is absent.
/// - The sender is not authorized for the transfer.
/// - Fails to log Transfer event.
#[receive(
    contract = "NFTLedger",
    name = "transferFrom",
    parameter = "TransferFromParams",
    mutable,
    enable_logger
)]
fn transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: TransferFromParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&params.token_id)?;

    ensure!(
        owner == params.from,
        CustomContractError::OwnerMismatch.into()
    );

    let to = params
        .to
        .ok_or(ContractError::Custom(CustomContractError::InvalidRecipient))?;

    // Authenticate the sender for this transfer.
    ensure!(
        state.is_approved_or_owner(&owner, &sender, &params.token_id),
        ContractError::Unauthorized
    );

    // Update the contract state.
    state.transfer(&params.token_id, &params.from, &to)?;

    // Log transfer event.
    logger.log(&LedgerEvent::Transfer(TransferEvent {
        token_id: params.token_id,
        from: Some(params.from),
        to: Some(to),
    }))?;

    Ok(())
}

/// Enable or disable an address as an operator of the sender address. An
/// operator may transfer and approve any of the sender's tokens, current and
/// future, until the grant is revoked. Logs an `ApprovalForAll` event.
///
/// It rejects if:
/// - Fails to parse the parameter.
/// - Fails to log ApprovalForAll event.
#[receive(
    contract = "NFTLedger",
    name = "setApprovalForAll",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn set_approval_for_all<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: UpdateOperatorParams = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    // Update the operator in the state.
    let (state, state_builder) = host.state_and_builder();
    state.update_operator(sender, params.operator, params.approved, state_builder);

    // Log the operator update event.
    logger.log(&LedgerEvent::<ContractTokenId>::ApprovalForAll(
        ApprovalForAllEvent {
            owner: sender,
            operator: params.operator,
            approved: params.approved,
        },
    ))?;

    Ok(())
}

/// Get the number of tokens currently owned by an address. An address never
/// seen before holds zero tokens.
#[receive(
    contract = "NFTLedger",
    name = "balanceOf",
    parameter = "Address",
    return_value = "TokenCount"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<TokenCount> {
    // Parse the parameter.
    let address: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance_of(&address))
}

/// Get the current owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID does not exist.
#[receive(
    contract = "NFTLedger",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Get the outstanding single approval for a token, absent when none is set.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID does not exist.
#[receive(
    contract = "NFTLedger",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "TokenApproval"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenApproval> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().approved_for(&token_id)
}

/// Get the display name fixed at initialization.
#[receive(contract = "NFTLedger", name = "getName", return_value = "String")]
fn get_name<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<String> {
    Ok(host.state().name.clone())
}

/// Get the display symbol fixed at initialization.
#[receive(contract = "NFTLedger", name = "getSymbol", return_value = "String")]
fn get_symbol<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<String> {
    Ok(host.state().symbol.clone())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ACCOUNT_2: AccountAddress = AccountAddress([2u8; 32]);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);
    const ACCOUNT_3: AccountAddress = AccountAddress([3u8; 32]);
    const ADDRESS_3: Address = Address::Account(ACCOUNT_3);

    const TOKEN_0: ContractTokenId = TokenIdFixed([0u8; 32]);
    const TOKEN_1: ContractTokenId = TokenIdFixed([1u8; 32]);

    fn init_params() -> InitParams {
        InitParams {
            name: "Test Collection".into(),
            symbol: "TST".into(),
        }
    }

    /// Test helper function which creates a contract state with `TOKEN_0`
    /// owned by `ADDRESS_0`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>) -> State<S> {
        let mut state = State::new(init_params(), state_builder);
        state
            .mint(TOKEN_0, &ADDRESS_0)
            .expect_report("Failed to mint TOKEN_0");
        state
    }

    /// Test initialization succeeds and stores the name and symbol.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let mut ctx = TestInitContext::empty();
        let parameter_bytes = to_bytes(&init_params());
        ctx.set_parameter(&parameter_bytes);

        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(
            state.tokens.iter().count(),
            0,
            "No token should be initialized"
        );
        claim_eq!(state.name, "Test Collection", "Name should be stored");
        claim_eq!(state.symbol, "TST", "Symbol should be stored");
    }

    /// Test minting, ensuring the new token is owned by the given address
    /// and the appropriate event is logged.
    #[concordium_test]
    fn test_mint() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&MintParams {
            token_id: TOKEN_0,
            to: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(init_params(), &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_1, "Token should be owned by the recipient");
        claim_eq!(
            host.state().balance_of(&ADDRESS_1),
            1,
            "Recipient balance should be 1"
        );

        // Check the logs
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Transfer(TransferEvent {
                token_id: TOKEN_0,
                from: None,
                to: Some(ADDRESS_1),
            })),
            "Incorrect event emitted"
        );
    }

    /// Test minting to an absent recipient fails and leaves the state
    /// untouched.
    #[concordium_test]
    fn test_mint_invalid_recipient() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&MintParams {
            token_id: TOKEN_0,
            to: None,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(init_params(), &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::InvalidRecipient),
            "Error is expected to be InvalidRecipient"
        );

        // Check the state.
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No token should have been minted"
        );
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test minting an already existing token ID fails and keeps the
    /// original owner.
    #[concordium_test]
    fn test_mint_token_already_exists() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&MintParams {
            token_id: TOKEN_0,
            to: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::TokenIdAlreadyExists),
            "Error is expected to be TokenIdAlreadyExists"
        );

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_0, "Token owner should be unchanged");
    }

    /// Test the balanceOf view, including the zero default for an address
    /// never seen.
    #[concordium_test]
    fn test_balance_of() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&ADDRESS_0);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ReceiveResult<TokenCount> = balance_of(&ctx, &host);
        claim_eq!(
            result.expect_report("Query failed"),
            1,
            "ADDRESS_0 should own one token"
        );

        // Query an address the ledger has never seen.
        let parameter_bytes = to_bytes(&ADDRESS_3);
        ctx.set_parameter(&parameter_bytes);
        let result: ReceiveResult<TokenCount> = balance_of(&ctx, &host);
        claim_eq!(
            result.expect_report("Query failed"),
            0,
            "Unseen address should have balance zero"
        );
    }

    /// Test the ownerOf view rejects for a token that does not exist.
    #[concordium_test]
    fn test_owner_of_nonexistent() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<Address> = owner_of(&ctx, &host);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test the getApproved view rejects for a token that does not exist.
    #[concordium_test]
    fn test_get_approved_nonexistent() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<TokenApproval> = get_approved(&ctx, &host);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test the getName and getSymbol views.
    #[concordium_test]
    fn test_get_name_and_symbol() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        let mut state_builder = TestStateBuilder::new();
        let state = State::new(init_params(), &mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract functions.
        let name: ReceiveResult<String> = get_name(&ctx, &host);
        claim_eq!(
            name.expect_report("Query failed"),
            "Test Collection",
            "Incorrect name returned"
        );
        let symbol: ReceiveResult<String> = get_symbol(&ctx, &host);
        claim_eq!(
            symbol.expect_report("Query failed"),
            "TST",
            "Incorrect symbol returned"
        );
    }

    /// Test burning, ensuring ownership, balance and any single approval are
    /// cleared and the appropriate event is logged.
    #[concordium_test]
    fn test_burn() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&BurnParams { token_id: TOKEN_0 });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        // An outstanding approval must not survive the burn.
        state.set_approval(TOKEN_0, Some(ADDRESS_1));
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim!(
            host.state().owner_of(&TOKEN_0).is_err(),
            "Token should no longer exist"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            0,
            "Owner balance should drop to zero"
        );
        claim_eq!(
            host.state().approvals.iter().count(),
            0,
            "Single approval should be cleared"
        );

        // Check the logs
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Transfer(TransferEvent {
                token_id: TOKEN_0,
                from: Some(ADDRESS_0),
                to: None,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test burn fails for any sender but the owner, even one holding the
    /// token's single approval and an operator grant from the owner.
    #[concordium_test]
    fn test_burn_not_owner() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&BurnParams { token_id: TOKEN_0 });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        // Neither permission delegates burning.
        state.set_approval(TOKEN_0, Some(ADDRESS_1));
        state.update_operator(ADDRESS_0, ADDRESS_1, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_0, "Token owner should be unchanged");
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            1,
            "Owner balance should be unchanged"
        );
    }

    /// Test burn of a token that does not exist rejects.
    #[concordium_test]
    fn test_burn_nonexistent() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&BurnParams { token_id: TOKEN_1 });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test approving by the owner succeeds and the appropriate event is
    /// logged.
    #[concordium_test]
    fn test_approve() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&ApproveParams {
            token_id: TOKEN_0,
            spender: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        let approved = host
            .state()
            .approved_for(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(approved, Some(ADDRESS_1), "ADDRESS_1 should be approved");

        // Check the logs
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Approval(ApprovalEvent {
                token_id: TOKEN_0,
                owner: ADDRESS_0,
                spender: Some(ADDRESS_1),
            })),
            "Incorrect event emitted"
        );
    }

    /// Test approving succeeds when the sender is an operator of the owner,
    /// with the sender recorded as the grantor in the event.
    #[concordium_test]
    fn test_approve_by_operator() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&ApproveParams {
            token_id: TOKEN_0,
            spender: Some(ADDRESS_2),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.update_operator(ADDRESS_0, ADDRESS_1, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        let approved = host
            .state()
            .approved_for(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(approved, Some(ADDRESS_2), "ADDRESS_2 should be approved");

        // Check the logs
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Approval(ApprovalEvent {
                token_id: TOKEN_0,
                owner: ADDRESS_1,
                spender: Some(ADDRESS_2),
            })),
            "Incorrect event emitted"
        );
    }

    /// Test approving fails when the sender is neither the owner nor an
    /// operator of the owner.
    #[concordium_test]
    fn test_approve_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_2);
        let parameter_bytes = to_bytes(&ApproveParams {
            token_id: TOKEN_0,
            spender: Some(ADDRESS_2),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
    }

    /// Test an absent spender revokes an outstanding approval.
    #[concordium_test]
    fn test_approve_revoke() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&ApproveParams {
            token_id: TOKEN_0,
            spender: None,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_approval(TOKEN_0, Some(ADDRESS_1));
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        let approved = host
            .state()
            .approved_for(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(approved, None, "Approval should be revoked");

        // Check the logs
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Approval(ApprovalEvent {
                token_id: TOKEN_0,
                owner: ADDRESS_0,
                spender: None,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer succeeds when the sender is the owner.
    #[concordium_test]
    fn test_transfer_by_owner() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_0,
            to: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_1, "Token should be owned by the recipient");
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            0,
            "Sender balance should drop to zero"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_1),
            1,
            "Recipient balance should be 1"
        );

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::Transfer(TransferEvent {
                token_id: TOKEN_0,
                from: Some(ADDRESS_0),
                to: Some(ADDRESS_1),
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer succeeds when the sender holds the token's single
    /// approval, and the approval is cleared by the transfer.
    #[concordium_test]
    fn test_transfer_by_approved() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_0,
            to: Some(ADDRESS_2),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_approval(TOKEN_0, Some(ADDRESS_1));
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_2, "Token should be owned by the recipient");
        let approved = host
            .state()
            .approved_for(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(approved, None, "Approval should not survive the transfer");
    }

    /// Test transfer succeeds when the sender is an operator of the owner.
    #[concordium_test]
    fn test_transfer_by_operator() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_0,
            to: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.update_operator(ADDRESS_0, ADDRESS_1, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_1, "Token should be owned by the operator");
    }

    /// Test transfer fails when the sender has no permission at all, and the
    /// state is left untouched.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_3);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_0,
            to: Some(ADDRESS_3),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_0, "Token owner should be unchanged");
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            1,
            "Owner balance should be unchanged"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_3),
            0,
            "Sender balance should be unchanged"
        );
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test transfer fails when the asserted `from` is not the actual owner.
    #[concordium_test]
    fn test_transfer_owner_mismatch() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_1,
            to: Some(ADDRESS_2),
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::OwnerMismatch),
            "Error is expected to be OwnerMismatch"
        );
    }

    /// Test transfer to an absent recipient fails.
    #[concordium_test]
    fn test_transfer_invalid_recipient() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_0,
            from: ADDRESS_0,
            to: None,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::InvalidRecipient),
            "Error is expected to be InvalidRecipient"
        );

        // Check the state.
        let owner = host
            .state()
            .owner_of(&TOKEN_0)
            .expect_report("Token is expected to exist");
        claim_eq!(owner, ADDRESS_0, "Token owner should be unchanged");
    }

    /// Test granting and revoking an operator, ensuring other pairs are
    /// unaffected and the appropriate events are logged.
    #[concordium_test]
    fn test_set_approval_for_all() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&UpdateOperatorParams {
            operator: ADDRESS_1,
            approved: true,
        });
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(init_params(), &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = set_approval_for_all(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim!(
            host.state().is_operator(&ADDRESS_0, &ADDRESS_1),
            "ADDRESS_1 should be an operator of ADDRESS_0"
        );
        claim!(
            !host.state().is_operator(&ADDRESS_0, &ADDRESS_2),
            "No other operator should be enabled for ADDRESS_0"
        );
        claim!(
            !host.state().is_operator(&ADDRESS_1, &ADDRESS_0),
            "The reverse pair should be unaffected"
        );

        // Check the logs.
        claim_eq!(
            logger.logs[0],
            to_bytes(&LedgerEvent::<ContractTokenId>::ApprovalForAll(
                ApprovalForAllEvent {
                    owner: ADDRESS_0,
                    operator: ADDRESS_1,
                    approved: true,
                }
            )),
            "Incorrect event emitted"
        );

        // Revoke the grant again.
        let parameter_bytes = to_bytes(&UpdateOperatorParams {
            operator: ADDRESS_1,
            approved: false,
        });
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result: ContractResult<()> = set_approval_for_all(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim!(
            !host.state().is_operator(&ADDRESS_0, &ADDRESS_1),
            "Operator status should be revoked"
        );

        // Check the logs.
        claim_eq!(logger.logs.len(), 2, "Two events should be logged");
        claim_eq!(
            logger.logs[1],
            to_bytes(&LedgerEvent::<ContractTokenId>::ApprovalForAll(
                ApprovalForAllEvent {
                    owner: ADDRESS_0,
                    operator: ADDRESS_1,
                    approved: false,
                }
            )),
            "Incorrect event emitted"
        );
    }

    /// End-to-end scenario: mint to ADDRESS_0, approve ADDRESS_1, ADDRESS_1
    /// transfers to ADDRESS_2.
    #[concordium_test]
    fn test_scenario_approved_transfer() {
        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(init_params(), &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Mint TOKEN_1 to ADDRESS_0.
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        let parameter_bytes = to_bytes(&MintParams {
            token_id: TOKEN_1,
            to: Some(ADDRESS_0),
        });
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Minting results in rejection");
        claim_eq!(
            host.state()
                .owner_of(&TOKEN_1)
                .expect_report("Token is expected to exist"),
            ADDRESS_0,
            "Token should be owned by ADDRESS_0"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_0), 1, "Balance should be 1");

        // ADDRESS_0 approves ADDRESS_1.
        let parameter_bytes = to_bytes(&ApproveParams {
            token_id: TOKEN_1,
            spender: Some(ADDRESS_1),
        });
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Approval results in rejection");
        claim_eq!(
            host.state()
                .approved_for(&TOKEN_1)
                .expect_report("Token is expected to exist"),
            Some(ADDRESS_1),
            "ADDRESS_1 should be approved"
        );

        // ADDRESS_1 transfers the token from ADDRESS_0 to ADDRESS_2.
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        let parameter_bytes = to_bytes(&TransferFromParams {
            token_id: TOKEN_1,
            from: ADDRESS_0,
            to: Some(ADDRESS_2),
        });
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Transfer results in rejection");

        // Check the final state.
        claim_eq!(
            host.state()
                .owner_of(&TOKEN_1)
                .expect_report("Token is expected to exist"),
            ADDRESS_2,
            "Token should be owned by ADDRESS_2"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_0),
            0,
            "ADDRESS_0 balance should drop to zero"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_2),
            1,
            "ADDRESS_2 balance should be 1"
        );
        claim_eq!(
            host.state()
                .approved_for(&TOKEN_1)
                .expect_report("Token is expected to exist"),
            None,
            "Approval should be cleared by the transfer"
        );
    }
}
