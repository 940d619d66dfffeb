use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StarNotaryError {
    /// Indicates a non-existent `token_id`.
    NonExistentToken = 200,
    /// Indicates an error related to the ownership over a particular star.
    /// Used in listings, transfers and exchanges.
    IncorrectOwner = 201,
    /// Indicates overflow when adding two values
    MathOverflow = 205,
    /// Indicates the `token_id` is already taken by another star.
    StarAlreadyExists = 210,
    /// Indicates the collection metadata was never written.
    UnsetMetadata = 213,
    /// Indicates a zero `token_id`.
    InvalidTokenId = 215,
    /// Indicates a non-positive asking price.
    InvalidPrice = 300,
    /// Indicates the star has no open listing.
    StarNotForSale = 301,
    /// Indicates the payment does not cover the asking price.
    InsufficientPayment = 302,
    /// Indicates an exchange of a star with itself.
    SameToken = 303,
}
