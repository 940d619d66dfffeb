#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String};

contractmeta!(key = "Description", val = "Star Notary");

mod contract;
mod storage;

mod errors;
mod events;

pub use errors::StarNotaryError;

#[contract]
pub struct StarNotary;

pub trait StarNotaryContract {

    /// Deploys the registry.
    ///
    /// Writes the collection metadata and records the token contract used
    /// to settle star sales.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `payment_token` - SEP-41 token contract sales are paid in.
    fn __constructor(e: &Env, payment_token: Address);

    /// Creates a new star owned by `owner`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account creating the star, becomes its owner.
    /// * `name` - Free-form star name.
    /// * `token_id` - Caller chosen identifier, must be non-zero and unused.
    ///
    /// # Events
    ///
    /// * topics - `["mint", to: Address]`
    /// * data - `[token_id: u64]`
    fn create_star(e: &Env, owner: Address, name: String, token_id: u64);

    /// Returns the name of `token_id`, or an empty string if the star does
    /// not exist.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    fn look_up_token_id_to_star_info(e: &Env, token_id: u64) -> String;

    /// Returns the name of `token_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_id_to_star(e: &Env, token_id: u64) -> String;

    /// Returns the asking price of `token_id`, `0` when it is not for sale.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    fn stars_for_sale(e: &Env, token_id: u64) -> i128;

    /// Lists `token_id` for sale at `price`, replacing any earlier listing.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Current owner of the star.
    /// * `token_id` - Token id as a number.
    /// * `price` - Asking price in the payment token's base unit.
    ///
    /// # Events
    ///
    /// * topics - `["listed", owner: Address, token_id: u64]`
    /// * data - `[price: i128]`
    fn put_star_up_for_sale(e: &Env, owner: Address, token_id: u64, price: i128);

    /// Buys a listed star.
    ///
    /// The whole `payment` is taken from `buyer`, the asking price goes to
    /// the seller and the remainder is refunded to `buyer`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `buyer` - Account paying for the star, becomes its owner.
    /// * `token_id` - Token id as a number.
    /// * `payment` - Amount offered, must cover the asking price.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u64]`
    ///
    /// * topics - `["sold", token_id: u64]`
    /// * data - `[seller: Address, buyer: Address, price: i128]`
    fn buy_star(e: &Env, buyer: Address, token_id: u64, payment: i128);

    /// Transfers `token_id` from `from` to `to`. Any open listing is
    /// cancelled.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u64]`
    fn transfer_star(e: &Env, from: Address, to: Address, token_id: u64);

    /// Swaps the owners of two stars.
    ///
    /// `caller` must own one of the stars; the owner of the other one has
    /// to authorize the swap as well. Open listings on both stars are
    /// cancelled.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Owner of one of the two stars.
    /// * `token_id1` - First token id.
    /// * `token_id2` - Second token id.
    ///
    /// # Events
    ///
    /// One `transfer` event per star.
    fn exchange_stars(e: &Env, caller: Address, token_id1: u64, token_id2: u64);

    /// Returns the address of the owner of the given `token_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn owner_of(e: &Env, token_id: u64) -> Address;

    /// Returns the number of stars in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account of the stars' owner.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the token collection name.
    fn name(e: &Env) -> String;

    /// Returns the token collection symbol.
    fn symbol(e: &Env) -> String;

    /// Returns the token contract sales are settled in.
    fn payment_token(e: &Env) -> Address;
}
