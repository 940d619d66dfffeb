use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};

use crate::errors::StarNotaryError;

pub(crate) const DAY_IN_LEDGERS: u32 = 60 * 60 * 24 / 5;
pub(crate) const TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    PaymentToken,
}

#[contracttype]
pub enum StarStorageKey {
    Star(u64),
    Owner(u64),
    Balance(Address),
    Listing(u64),
    Name,
    Symbol,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Star {
    pub name: String,
}

fn bump(e: &Env, key: &StarStorageKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn bump_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// Metadata

pub fn set_metadata(e: &Env, name: &String, symbol: &String, payment_token: &Address) {
    e.storage().instance().set(&StarStorageKey::Name, name);
    e.storage().instance().set(&StarStorageKey::Symbol, symbol);
    e.storage().instance().set(&DataKey::PaymentToken, payment_token);
}

pub fn get_name(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&StarStorageKey::Name)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::UnsetMetadata))
}

pub fn get_symbol(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&StarStorageKey::Symbol)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::UnsetMetadata))
}

pub fn get_payment_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::UnsetMetadata))
}

// Stars

pub fn has_star(e: &Env, token_id: u64) -> bool {
    e.storage().persistent().has(&StarStorageKey::Star(token_id))
}

pub fn get_star(e: &Env, token_id: u64) -> Option<Star> {
    let key = StarStorageKey::Star(token_id);
    let star = e.storage().persistent().get(&key);
    if star.is_some() {
        bump(e, &key);
    }
    star
}

pub fn set_star(e: &Env, token_id: u64, star: &Star) {
    let key = StarStorageKey::Star(token_id);
    e.storage().persistent().set(&key, star);
    bump(e, &key);
}

// Ownership

pub fn get_owner(e: &Env, token_id: u64) -> Option<Address> {
    let key = StarStorageKey::Owner(token_id);
    let owner = e.storage().persistent().get(&key);
    if owner.is_some() {
        bump(e, &key);
    }
    owner
}

pub fn owner_or_panic(e: &Env, token_id: u64) -> Address {
    get_owner(e, token_id)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::NonExistentToken))
}

pub fn set_owner(e: &Env, token_id: u64, owner: &Address) {
    let key = StarStorageKey::Owner(token_id);
    e.storage().persistent().set(&key, owner);
    bump(e, &key);
}

pub fn get_balance(e: &Env, owner: &Address) -> u32 {
    let key = StarStorageKey::Balance(owner.clone());
    let balance = e.storage().persistent().get(&key);
    if balance.is_some() {
        bump(e, &key);
    }
    balance.unwrap_or(0)
}

fn set_balance(e: &Env, owner: &Address, balance: u32) {
    let key = StarStorageKey::Balance(owner.clone());
    e.storage().persistent().set(&key, &balance);
    bump(e, &key);
}

pub fn increment_balance(e: &Env, owner: &Address) {
    let balance = get_balance(e, owner)
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::MathOverflow));
    set_balance(e, owner, balance);
}

pub fn decrement_balance(e: &Env, owner: &Address) {
    let balance = get_balance(e, owner)
        .checked_sub(1)
        .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::MathOverflow));
    set_balance(e, owner, balance);
}

// Listings

pub fn get_listing(e: &Env, token_id: u64) -> Option<i128> {
    let key = StarStorageKey::Listing(token_id);
    let price = e.storage().persistent().get(&key);
    if price.is_some() {
        bump(e, &key);
    }
    price
}

pub fn set_listing(e: &Env, token_id: u64, price: i128) {
    let key = StarStorageKey::Listing(token_id);
    e.storage().persistent().set(&key, &price);
    bump(e, &key);
}

pub fn remove_listing(e: &Env, token_id: u64) {
    e.storage()
        .persistent()
        .remove(&StarStorageKey::Listing(token_id));
}
