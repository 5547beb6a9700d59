//! An NFT ownership ledger smart contract.
//!
//! # Description
//! An instance of this contract tracks, for a set of unique token IDs, which
//! address currently owns each token, how many tokens each address owns, and
//! which addresses may transfer a given token on behalf of its owner.
//!
//! Tokens are minted through the `mint` function and destroyed through
//! `burn`. A token exists exactly when it has an entry in the ownership map,
//! so a burned token ID may be minted again later.
//!
//! Two kinds of transfer permission exist besides ownership itself: a single
//! approval scoped to one token, granted with `approve` and cleared whenever
//! the token changes hands, and an operator grant covering all of an
//! address's tokens, toggled with `setApprovalForAll`. Burning is restricted
//! to the owner alone; neither kind of approval delegates it.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, structs::*, types::*};
use concordium_cis2::{Cis2Error, IsTokenId, TokenIdFixed};
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod events;
mod impls;
mod structs;
mod types;
