use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failing to mint a new token because the token ID already exists in
    /// this contract (Error code: -4).
    TokenIdAlreadyExists,
    /// The recipient of a mint or transfer is absent (Error code: -5).
    InvalidRecipient,
    /// The `from` address of a transfer is not the actual owner of the token
    /// (Error code: -6).
    OwnerMismatch,
    /// A balance decrement would drop below zero. Unreachable while the
    /// ownership and balance maps agree (Error code: -7).
    Underflow,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
