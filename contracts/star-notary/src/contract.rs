//! Star registry binding

use soroban_sdk::{contractimpl, log, panic_with_error, token, Address, Env, String};
use crate::{errors::StarNotaryError, events, storage, StarNotary, StarNotaryArgs, StarNotaryClient, StarNotaryContract};
use crate::storage::Star;

pub const COLLECTION_NAME: &str = "SGStarToken";
pub const COLLECTION_SYMBOL: &str = "SGSTR";

/// Hands `token_id` from `from` to `to` and cancels its listing.
fn move_star(e: &Env, token_id: u64, from: &Address, to: &Address) {
    storage::set_owner(e, token_id, to);
    storage::decrement_balance(e, from);
    storage::increment_balance(e, to);
    storage::remove_listing(e, token_id);

    events::Transfer { from: from.clone(), to: to.clone(), token_id }.publish(e);
}

fn require_owner(e: &Env, token_id: u64, who: &Address) {
    if storage::owner_or_panic(e, token_id) != *who {
        panic_with_error!(e, StarNotaryError::IncorrectOwner);
    }
}

#[contractimpl]
impl StarNotaryContract for StarNotary {

    fn __constructor(e: &Env, payment_token: Address) {
        storage::set_metadata(
            e,
            &String::from_str(e, COLLECTION_NAME),
            &String::from_str(e, COLLECTION_SYMBOL),
            &payment_token,
        );
    }

    fn create_star(e: &Env, owner: Address, name: String, token_id: u64) {
        owner.require_auth();

        if token_id == 0 {
            panic_with_error!(e, StarNotaryError::InvalidTokenId);
        }
        if storage::has_star(e, token_id) {
            panic_with_error!(e, StarNotaryError::StarAlreadyExists);
        }

        storage::set_star(e, token_id, &Star { name });
        storage::set_owner(e, token_id, &owner);
        storage::increment_balance(e, &owner);
        storage::bump_instance(e);

        log!(e, "star {} created by {}", token_id, owner);
        events::Mint { to: owner, token_id }.publish(e);
    }

    fn look_up_token_id_to_star_info(e: &Env, token_id: u64) -> String {
        storage::get_star(e, token_id)
            .map(|star| star.name)
            .unwrap_or_else(|| String::from_str(e, ""))
    }

    fn token_id_to_star(e: &Env, token_id: u64) -> String {
        storage::get_star(e, token_id)
            .map(|star| star.name)
            .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::NonExistentToken))
    }

    fn stars_for_sale(e: &Env, token_id: u64) -> i128 {
        storage::get_listing(e, token_id).unwrap_or(0)
    }

    fn put_star_up_for_sale(e: &Env, owner: Address, token_id: u64, price: i128) {
        owner.require_auth();

        require_owner(e, token_id, &owner);
        if price <= 0 {
            panic_with_error!(e, StarNotaryError::InvalidPrice);
        }

        storage::set_listing(e, token_id, price);

        log!(e, "star {} listed at {}", token_id, price);
        events::Listed { owner, token_id, price }.publish(e);
    }

    fn buy_star(e: &Env, buyer: Address, token_id: u64, payment: i128) {
        buyer.require_auth();

        let price = storage::get_listing(e, token_id)
            .unwrap_or_else(|| panic_with_error!(e, StarNotaryError::StarNotForSale));
        if payment < price {
            panic_with_error!(e, StarNotaryError::InsufficientPayment);
        }
        let seller = storage::owner_or_panic(e, token_id);

        // Escrow the full payment, settle the seller, return the change.
        let token = token::TokenClient::new(e, &storage::get_payment_token(e));
        let escrow = e.current_contract_address();
        token.transfer(&buyer, &escrow, &payment);
        token.transfer(&escrow, &seller, &price);
        let change = payment - price;
        if change > 0 {
            token.transfer(&escrow, &buyer, &change);
        }

        move_star(e, token_id, &seller, &buyer);
        storage::bump_instance(e);

        log!(e, "star {} sold for {}, refunded {}", token_id, price, change);
        events::Sold { token_id, seller, buyer, price }.publish(e);
    }

    fn transfer_star(e: &Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        require_owner(e, token_id, &from);
        move_star(e, token_id, &from, &to);

        log!(e, "star {} transferred to {}", token_id, to);
    }

    fn exchange_stars(e: &Env, caller: Address, token_id1: u64, token_id2: u64) {
        caller.require_auth();

        if token_id1 == token_id2 {
            panic_with_error!(e, StarNotaryError::SameToken);
        }
        let owner1 = storage::owner_or_panic(e, token_id1);
        let owner2 = storage::owner_or_panic(e, token_id2);

        let counterparty = if caller == owner1 {
            &owner2
        } else if caller == owner2 {
            &owner1
        } else {
            panic_with_error!(e, StarNotaryError::IncorrectOwner)
        };
        if *counterparty != caller {
            counterparty.require_auth();
        }

        move_star(e, token_id1, &owner1, &owner2);
        move_star(e, token_id2, &owner2, &owner1);

        log!(e, "stars {} and {} exchanged", token_id1, token_id2);
    }

    fn owner_of(e: &Env, token_id: u64) -> Address {
        storage::owner_or_panic(e, token_id)
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        storage::get_balance(e, &owner)
    }

    fn name(e: &Env) -> String {
        storage::get_name(e)
    }

    fn symbol(e: &Env) -> String {
        storage::get_symbol(e)
    }

    fn payment_token(e: &Env) -> Address {
        storage::get_payment_token(e)
    }
}
