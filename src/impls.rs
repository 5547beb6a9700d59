use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an empty ledger holding no tokens.
    pub fn new(params: InitParams, state_builder: &mut StateBuilder<S>) -> Self {
        State {
            tokens: state_builder.new_map(),
            balances: state_builder.new_map(),
            approvals: state_builder.new_map(),
            operators: state_builder.new_map(),
            name: params.name,
            symbol: params.symbol,
        }
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    /// Get the number of tokens currently owned by the given address.
    /// An address never seen before holds zero tokens.
    pub fn balance_of(&self, address: &Address) -> TokenCount {
        self.balances.get(address).map_or(0, |count| *count)
    }

    /// Get the current owner of a token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the outstanding single approval for a token, if any.
    /// Results in an error if the token ID does not exist in the state.
    pub fn approved_for(&self, token_id: &ContractTokenId) -> ContractResult<TokenApproval> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);
        Ok(self.approvals.get(token_id).map(|spender| *spender))
    }

    /// Check if a given address is an operator of a given owner address.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Check if `spender` may transfer the given token on behalf of `owner`:
    /// it is the owner itself, an operator of the owner, or it holds the
    /// token's single approval.
    pub fn is_approved_or_owner(
        &self,
        owner: &Address,
        spender: &Address,
        token_id: &ContractTokenId,
    ) -> bool {
        spender == owner
            || self.is_operator(owner, spender)
            || self
                .approvals
                .get(token_id)
                .map_or(false, |approved| *approved == *spender)
    }

    /// Mint a new token with the given address as the owner.
    /// Results in an error if the token ID already exists in the state.
    pub fn mint(&mut self, token_id: ContractTokenId, to: &Address) -> ContractResult<()> {
        ensure!(
            !self.contains_token(&token_id),
            CustomContractError::TokenIdAlreadyExists.into()
        );
        self.tokens.insert(token_id, *to);
        self.credit(to);
        Ok(())
    }

    /// Remove a token from the ledger, clearing its ownership entry and any
    /// outstanding single approval. The caller is responsible for checking
    /// that `owner` is the token's current owner.
    pub fn burn(&mut self, token_id: &ContractTokenId, owner: &Address) -> ContractResult<()> {
        self.debit(owner)?;
        self.tokens.remove(token_id);
        self.approvals.remove(token_id);
        Ok(())
    }

    /// Update the state with a transfer of a token from `from` to `to`,
    /// clearing any outstanding single approval for it. Results in an error
    /// if the token ID does not exist in the state or `from` is not its
    /// current owner.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let owner = self.owner_of(token_id)?;
        ensure!(owner == *from, CustomContractError::OwnerMismatch.into());
        self.debit(from)?;
        self.credit(to);
        self.tokens.insert(*token_id, *to);
        self.approvals.remove(token_id);
        Ok(())
    }

    /// Set or revoke the single approval for a token. The caller is
    /// responsible for checking that the token exists and that the grantor
    /// is authorized.
    pub fn set_approval(&mut self, token_id: ContractTokenId, spender: TokenApproval) {
        match spender {
            Some(spender) => {
                self.approvals.insert(token_id, spender);
            }
            None => {
                self.approvals.remove(&token_id);
            }
        }
    }

    /// Enable or disable an address as an operator of a given owner address.
    /// Succeeds regardless of the previous operator status.
    pub fn update_operator(
        &mut self,
        owner: Address,
        operator: Address,
        approved: bool,
        state_builder: &mut StateBuilder<S>,
    ) {
        if approved {
            let mut operators = self
                .operators
                .entry(owner)
                .or_insert_with(|| state_builder.new_set());
            operators.insert(operator);
        } else if let Some(mut operators) = self.operators.get_mut(&owner) {
            operators.remove(&operator);
        }
    }

    fn credit(&mut self, address: &Address) {
        let mut count = self.balances.entry(*address).or_insert_with(|| 0);
        *count += 1;
    }

    // The guard is defensive: the balance of an address that owns a token is
    // always at least one while `tokens` and `balances` agree.
    fn debit(&mut self, address: &Address) -> ContractResult<()> {
        let mut count = self
            .balances
            .entry(*address)
            .occupied_or(CustomContractError::Underflow)?;
        ensure!(*count > 0, CustomContractError::Underflow.into());
        *count -= 1;
        Ok(())
    }
}
