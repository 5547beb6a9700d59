use super::*;

/// An untagged event of a token changing owner. Covers the whole token
/// lifecycle: a mint carries no `from` and a burn carries no `to`.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct TransferEvent<T: IsTokenId> {
    /// The ID of the token that changed owner.
    pub token_id: T,
    /// The previous owner, absent when the token was just minted.
    pub from: Option<Address>,
    /// The new owner, absent when the token was burned.
    pub to: Option<Address>,
}

/// An untagged event of a per-token approval being set or revoked.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ApprovalEvent<T: IsTokenId> {
    /// The ID of the token the approval is scoped to.
    pub token_id: T,
    /// The address which granted the approval.
    pub owner: Address,
    /// The approved address, absent when the approval was revoked.
    pub spender: Option<Address>,
}

/// An untagged event of an operator grant being updated.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ApprovalForAllEvent {
    /// The address granting or revoking the operator status.
    pub owner: Address,
    /// The address whose operator status changed.
    pub operator: Address,
    /// The new operator status.
    pub approved: bool,
}

/// Tagged event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum LedgerEvent<T: IsTokenId> {
    /// A token was minted, transferred or burned.
    Transfer(TransferEvent<T>),
    /// A per-token approval was set or revoked.
    Approval(ApprovalEvent<T>),
    /// An operator grant was updated.
    ApprovalForAll(ApprovalForAllEvent),
}

impl<T: IsTokenId> Serial for LedgerEvent<T> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            LedgerEvent::Transfer(event) => {
                out.write_u8(TRANSFER_EVENT_TAG)?;
                event.serial(out)
            }
            LedgerEvent::Approval(event) => {
                out.write_u8(APPROVAL_EVENT_TAG)?;
                event.serial(out)
            }
            LedgerEvent::ApprovalForAll(event) => {
                out.write_u8(APPROVAL_FOR_ALL_EVENT_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl<T: IsTokenId> Deserial for LedgerEvent<T> {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            TRANSFER_EVENT_TAG => TransferEvent::<T>::deserial(source).map(LedgerEvent::Transfer),
            APPROVAL_EVENT_TAG => ApprovalEvent::<T>::deserial(source).map(LedgerEvent::Approval),
            APPROVAL_FOR_ALL_EVENT_TAG => {
                ApprovalForAllEvent::deserial(source).map(LedgerEvent::ApprovalForAll)
            }
            _ => Err(ParseError::default()),
        }
    }
}
