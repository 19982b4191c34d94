//! # Paper Backups with Shamir Secret Sharing
//!
//! This library splits a human readable secret, typically a mnemonic phrase, into `n` shares such
//! that any `k` of them rebuild the secret exactly while fewer than `k` reveal nothing about it.
//! Shares are short hex strings meant to be written down or printed and stored apart.
//!
//! ## Shamir's Secret Sharing (SSS)
//!
//! Shamir's Secret Sharing is a cryptographic algorithm created by Adi Shamir. The secret is
//! divided into parts, giving each participant its own unique part, with the property that a
//! certain number of these parts are needed to reconstruct the secret.
//!
//! ### The Mathematics Behind SSS
//!
//! Every byte `S` of the secret gets its own random polynomial of degree `k-1` over GF(2^8):
//!
//! ```ignore
//! f(x) = a0 + a1*x + a2*x^2 + ... + a(k-1)*x^(k-1)
//! ```
//!
//! where `a0 = S` and `a1, ..., a(k-1)` are drawn from a cryptographically secure random source.
//! Share number `x` (1 to 255) stores `f(x)` for every byte. With at least `k` points the
//! polynomial, and hence `f(0) = S`, is recovered by Lagrange interpolation.
//!
//! The field uses the AES reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! ### Share Format
//!
//! A share is `[x] || f_0(x) || f_1(x) || ...`, one byte longer than the secret, written as
//! uppercase hex:
//!
//! ```rust
//! use scrux::mnemonic::recover_text;
//! use scrux::share::Share;
//! use scrux::sss::{combine_shares, split_secret};
//!
//! let phrase = "abandon ability able about above absent";
//! let shares = split_secret(phrase.as_bytes(), 2, 3, &mut rand::rngs::OsRng).unwrap();
//!
//! let written: Vec<String> = shares.values().map(Share::to_hex).collect();
//! assert!(written[0].starts_with("01"));
//!
//! let entered: Vec<Share> = written[1..].iter().map(|s| s.parse().unwrap()).collect();
//! let recovered = recover_text(combine_shares(&entered).unwrap()).unwrap();
//! assert_eq!(recovered, phrase);
//! ```
//!
//! ### Proactive Refresh
//!
//! A full set of shares can be re-randomized without changing the secret by adding a random
//! polynomial with a zero constant term to every share. Old and new shares must not be mixed.
//!
//! ## Modules
//!
//! - `gf256`: Arithmetic over GF(2^8).
//! - `sss`: Splitting, combining and refreshing shares.
//! - `share`: The share type and its hex representation.
//! - `mnemonic`: Word lists, phrase generation and recovered text handling.
//! - `config`: Defaults for the command line front end.
//! - `error`: The crate error type.

/// The `gf256` module implements addition, subtraction, multiplication, division and inversion
/// in GF(2^8), both as free functions over bytes and through the `Gf256` element type.
pub mod gf256;

/// The `sss` (Shamir's Secret Sharing) module is the core of the library. It splits secrets into
/// shares, combines shares back into the secret, optionally verifies surplus shares, and refreshes
/// share sets.
pub mod sss;

/// The `share` module defines a single share and its textual form.
pub mod share;

/// The `mnemonic` module loads word lists, generates phrases and post-processes recovered secrets.
pub mod mnemonic;

/// The `config` module loads `conf.toml` and environment overrides for the binary.
pub mod config;

/// The `constants` module defines various constants used in the library.
pub mod constants;

pub mod error;

pub use error::{Error, ErrorKind, Result};
