use std::collections::BTreeMap;

use rand::{CryptoRng, Rng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::gf256::Gf256;
use crate::share::Share;

/// Largest number of shares a split can produce; the index must fit in one byte.
pub const MAX_SHARES: usize = 255;

/// Smallest threshold that still splits anything.
pub const MIN_THRESHOLD: usize = 2;

/// Represents a polynomial over the Galois field GF(2^8).
///
/// Coefficients are stored in ascending degree order, so `coefficients[0]`
/// is the constant term. The coefficients are wiped when the polynomial is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    pub coefficients: Vec<Gf256>,
}

impl Polynomial {
    /// Constructs a new polynomial of a given degree with random coefficients,
    /// where the constant term is the provided value.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the polynomial.
    /// * `constant` - The constant term of the polynomial.
    /// * `rng` - Source of the remaining `degree` coefficients.
    pub fn random<R: RngCore + CryptoRng>(degree: usize, constant: Gf256, rng: &mut R) -> Self {
        let mut coefficients = vec![constant; degree + 1];

        for coeff in coefficients.iter_mut().skip(1) {
            *coeff = Gf256::new(rng.gen());
        }

        Polynomial { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x` with Horner's method, walking from the
    /// highest degree coefficient down to the constant term.
    pub fn evaluate(&self, x: Gf256) -> Gf256 {
        self.coefficients
            .iter()
            .rev()
            .fold(Gf256::ZERO, |acc, &coeff| acc * x + coeff)
    }
}

/// Splits a secret into a specified number of shares using Shamir's Secret Sharing Scheme.
///
/// Every byte of the secret gets its own polynomial of degree `threshold - 1`
/// whose constant term is that byte. Share `x` holds the evaluations of all
/// those polynomials at `x`, prefixed with `x` itself.
///
/// # Arguments
/// * `secret` - A byte slice representing the secret to be split.
/// * `threshold` - The minimum number of shares required to reconstruct the secret.
/// * `shares` - The total number of shares to be created.
/// * `rng` - A cryptographically secure source for the polynomial coefficients.
///
/// # Returns
/// The shares keyed by their index, in index order `1..=shares`.
///
/// # Errors
/// Returns an error if the secret is empty, if the threshold is below 2, if
/// the number of shares is less than the threshold or if it exceeds 255.
///
/// # Examples
/// ```rust
/// use scrux::sss::split_secret;
///
/// let secret = b"hello world";
/// let shares = split_secret(secret, 3, 5, &mut rand::rngs::OsRng).unwrap();
/// assert_eq!(shares.len(), 5);
/// assert_eq!(shares[&1].index(), 1);
/// ```
pub fn split_secret<R: RngCore + CryptoRng>(
    secret: &[u8],
    threshold: usize,
    shares: usize,
    rng: &mut R,
) -> Result<BTreeMap<u8, Share>> {
    validate_parameters(secret.len(), threshold, shares)?;

    let blank = vec![0u8; secret.len()];
    let mut split: Vec<Share> = (1..=shares as u8).map(|x| Share::new(x, &blank)).collect();

    for (i, &byte) in secret.iter().enumerate() {
        let poly = Polynomial::random(threshold - 1, Gf256::new(byte), rng);

        for share in split.iter_mut() {
            let y = poly.evaluate(Gf256::new(share.index()));
            share.payload_mut()[i] = y.into();
        }
    }

    debug!(threshold, shares, secret_len = secret.len(), "split secret");
    Ok(split.into_iter().map(|share| (share.index(), share)).collect())
}

fn validate_parameters(secret_len: usize, threshold: usize, shares: usize) -> Result<()> {
    if secret_len == 0 {
        return Err(Error::EmptySecret);
    }
    if threshold < MIN_THRESHOLD {
        return Err(Error::InvalidThreshold(threshold));
    }
    if shares < threshold {
        return Err(Error::ShareCountBelowThreshold { threshold, shares });
    }
    if shares > MAX_SHARES {
        return Err(Error::TooManyShares(shares));
    }
    Ok(())
}

/// Checks that a set of shares can be interpolated: at least two shares,
/// equal lengths of at least two bytes, and distinct nonzero indices.
pub fn validate_shares<S: AsRef<Share>>(shares: &[S]) -> Result<()> {
    if shares.len() < MIN_THRESHOLD {
        return Err(Error::NotEnoughShares {
            have: shares.len(),
            need: MIN_THRESHOLD,
        });
    }

    let expected = shares[0].as_ref().len();
    if expected < 2 {
        return Err(Error::ShareTooShort(expected));
    }

    let mut seen = [false; 256];
    for share in shares.iter().map(AsRef::as_ref) {
        if share.len() != expected {
            return Err(Error::SharesUnequalLength {
                expected,
                found: share.len(),
            });
        }
        let index = share.index();
        if index == 0 {
            return Err(Error::ZeroShareIndex);
        }
        if std::mem::replace(&mut seen[index as usize], true) {
            return Err(Error::DuplicateShareIndex(index));
        }
    }
    Ok(())
}

/// Combines shares to reconstruct a secret using Shamir's Secret Sharing Scheme.
///
/// All supplied shares take part in the interpolation. Supplying more shares
/// than the original threshold still yields the secret. Supplying fewer
/// yields wrong bytes without any error; the scheme cannot tell, so picking
/// enough shares is up to the caller. See [`combine_shares_checked`] for a
/// variant that knows the threshold and verifies surplus shares.
///
/// The result is the raw secret; see [`crate::mnemonic::recover_text`] for
/// turning it back into a phrase.
///
/// # Examples
/// ```rust
/// use scrux::sss::{combine_shares, split_secret};
///
/// let shares = split_secret(b"AB", 2, 3, &mut rand::rngs::OsRng).unwrap();
/// let subset = [&shares[&1], &shares[&3]];
/// assert_eq!(combine_shares(&subset).unwrap(), b"AB");
/// ```
pub fn combine_shares<S: AsRef<Share>>(shares: &[S]) -> Result<Vec<u8>> {
    validate_shares(shares)?;
    let secret = reconstruct(shares)?;
    debug!(shares = shares.len(), secret_len = secret.len(), "combined shares");
    Ok(secret)
}

/// Combines shares for a secret split with a known `threshold`.
///
/// The first `threshold` shares reconstruct the secret. Every further share
/// must lie on the same polynomials, otherwise the set is rejected with
/// [`Error::InconsistentShares`] naming the first share that disagrees.
pub fn combine_shares_checked<S: AsRef<Share>>(shares: &[S], threshold: usize) -> Result<Vec<u8>> {
    if threshold < MIN_THRESHOLD {
        return Err(Error::InvalidThreshold(threshold));
    }
    if shares.len() < threshold {
        return Err(Error::NotEnoughShares {
            have: shares.len(),
            need: threshold,
        });
    }
    validate_shares(shares)?;

    let (basis, surplus) = shares.split_at(threshold);
    let secret = reconstruct(basis)?;

    let payload_len = secret.len();
    let mut points = Vec::with_capacity(threshold);
    for i in 0..payload_len {
        collect_points(basis, i, &mut points);
        for share in surplus.iter().map(AsRef::as_ref) {
            let expected = interpolate(&points, Gf256::new(share.index()))?;
            if u8::from(expected) != share.payload()[i] {
                return Err(Error::InconsistentShares {
                    index: share.index(),
                });
            }
        }
    }

    debug!(
        threshold,
        surplus = surplus.len(),
        secret_len = secret.len(),
        "combined and verified shares"
    );
    Ok(secret)
}

fn collect_points<S: AsRef<Share>>(shares: &[S], i: usize, points: &mut Vec<(Gf256, Gf256)>) {
    points.clear();
    points.extend(shares.iter().map(AsRef::as_ref).map(|share| {
        (
            Gf256::new(share.index()),
            Gf256::new(share.payload()[i]),
        )
    }));
}

fn reconstruct<S: AsRef<Share>>(shares: &[S]) -> Result<Vec<u8>> {
    let secret_len = shares[0].as_ref().payload().len();
    let mut secret = vec![0; secret_len];
    let mut points = Vec::with_capacity(shares.len());

    for (i, byte) in secret.iter_mut().enumerate() {
        collect_points(shares, i, &mut points);
        *byte = interpolate(&points, Gf256::ZERO)?.into();
    }

    Ok(secret)
}

/// Performs Lagrange interpolation on a set of points to find the value of the polynomial at a specific point.
///
/// # Arguments
///
/// * `points` - A slice of tuples, each representing a point `(x, y)` on the polynomial.
/// * `x` - The `x` value at which to evaluate the polynomial.
///
/// # Errors
///
/// Two points sharing an `x` coordinate make a denominator zero, which is
/// reported as [`Error::DivisionByZero`].
pub fn interpolate(points: &[(Gf256, Gf256)], x: Gf256) -> Result<Gf256> {
    let mut value = Gf256::ZERO;

    for (i, &(a_x, a_y)) in points.iter().enumerate() {
        let mut weight = Gf256::ONE;

        for (j, &(b_x, _)) in points.iter().enumerate() {
            if i != j {
                let top = x - b_x;
                let bottom = a_x - b_x;
                weight *= top.checked_div(bottom)?;
            }
        }

        value += weight * a_y;
    }

    Ok(value)
}

/// https://en.wikipedia.org/wiki/Proactive_secret_sharing#Mathematics
/// Generates one zero-constant polynomial per secret byte for refreshing shares.
///
/// Adding a polynomial that vanishes at 0 to every share changes all shares
/// while leaving the secret untouched.
///
/// # Errors
///
/// * Returns `Err` if `threshold` is below 2.
pub fn generate_refresh_key<R: RngCore + CryptoRng>(
    threshold: usize,
    secret_length: usize,
    rng: &mut R,
) -> Result<Vec<Polynomial>> {
    if threshold < MIN_THRESHOLD {
        return Err(Error::InvalidThreshold(threshold));
    }

    Ok((0..secret_length)
        .map(|_| Polynomial::random(threshold - 1, Gf256::ZERO, rng))
        .collect())
}

/// Refreshes a single share with a key from [`generate_refresh_key`].
///
/// Every holder must apply the same key; a set mixing refreshed and stale
/// shares no longer reconstructs the secret.
///
/// # Errors
///
/// * Returns `Err` if the share has no payload.
/// * Returns `Err` if the payload length does not match the number of polynomials.
pub fn refresh_share(share: &mut Share, polynomials: &[Polynomial]) -> Result<()> {
    if share.len() < 2 {
        return Err(Error::ShareTooShort(share.len()));
    }

    if share.payload().len() != polynomials.len() {
        return Err(Error::RefreshKeyMismatch {
            share: share.payload().len(),
            key: polynomials.len(),
        });
    }

    let x = Gf256::new(share.index());
    for (y, poly) in share.payload_mut().iter_mut().zip(polynomials) {
        *y = u8::from(Gf256::new(*y) + poly.evaluate(x));
    }

    Ok(())
}

/// Refreshes a whole set of shares in place without changing the secret.
///
/// `threshold` should be the one the secret was split with. A larger value
/// raises the number of shares needed to reconstruct, so it must never exceed
/// the number of shares being refreshed; such a set is rejected before any
/// share is touched.
pub fn refresh_shares<R: RngCore + CryptoRng>(
    shares: &mut [Share],
    threshold: usize,
    rng: &mut R,
) -> Result<()> {
    validate_shares(shares)?;
    if threshold < MIN_THRESHOLD {
        return Err(Error::InvalidThreshold(threshold));
    }
    if shares.len() < threshold {
        return Err(Error::NotEnoughShares {
            have: shares.len(),
            need: threshold,
        });
    }

    let secret_length = shares[0].payload().len();
    let polynomials = generate_refresh_key(threshold, secret_length, rng)?;

    for share in shares.iter_mut() {
        refresh_share(share, &polynomials)?;
    }

    debug!(threshold, shares = shares.len(), "refreshed shares");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;
    use rand::seq::IteratorRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::error::ErrorKind;

    /// Hands out the same byte for every coefficient.
    struct FixedRng(u8);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_le_bytes([self.0; 4])
        }

        fn next_u64(&mut self) -> u64 {
            u64::from_le_bytes([self.0; 8])
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for FixedRng {}

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5c7a)
    }

    fn values(shares: &BTreeMap<u8, Share>) -> Vec<Share> {
        shares.values().cloned().collect()
    }

    #[test]
    fn test_polynomial_evaluate_uses_horner() {
        // 3 + 2x + x^2
        let poly = Polynomial {
            coefficients: vec![Gf256(3), Gf256(2), Gf256(1)],
        };
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.evaluate(Gf256::ZERO), Gf256(3));
        assert_eq!(poly.evaluate(Gf256::ONE), Gf256(3 ^ 2 ^ 1));
        let x = Gf256(0x57);
        assert_eq!(poly.evaluate(x), Gf256(3) + Gf256(2) * x + x * x);
    }

    #[test]
    fn test_polynomial_random_keeps_constant() {
        let poly = Polynomial::random(4, Gf256(0x41), &mut rng());
        assert_eq!(poly.coefficients.len(), 5);
        assert_eq!(poly.coefficients[0], Gf256(0x41));
        assert_eq!(poly.evaluate(Gf256::ZERO), Gf256(0x41));
    }

    #[test]
    fn test_split_with_fixed_coefficients() {
        let shares = split_secret(b"AB", 2, 3, &mut FixedRng(0x01)).unwrap();
        let hex: Vec<String> = shares.values().map(Share::to_hex).collect();
        assert_eq!(hex, vec!["014043", "024340", "034241"]);
    }

    #[test]
    fn test_split_and_combine_ab_every_pair() {
        let shares = split_secret(&[0x41, 0x42], 2, 3, &mut rng()).unwrap();
        assert_eq!(shares.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        for (&index, share) in &shares {
            assert_eq!(share.index(), index);
            assert_eq!(share.len(), 3);
        }

        for a in 1..=3u8 {
            for b in 1..=3u8 {
                if a != b {
                    let pair = [&shares[&a], &shares[&b]];
                    assert_eq!(combine_shares(&pair).unwrap(), vec![0x41, 0x42]);
                }
            }
        }
    }

    #[test]
    fn test_split_and_combine_secret() {
        let secret = "test secret";
        let shares = split_secret(secret.as_bytes(), 3, 5, &mut OsRng).unwrap();
        let recovered = combine_shares(&values(&shares)).unwrap();
        assert_eq!(secret.as_bytes(), recovered.as_slice());
    }

    #[test]
    fn test_every_threshold_subset_recovers() {
        let secret = b"legal winner thank year wave sausage worth useful legal winner thank yellow";
        let shares = split_secret(secret, 3, 5, &mut rng()).unwrap();

        for a in 1..=5u8 {
            for b in (a + 1)..=5 {
                for c in (b + 1)..=5 {
                    let subset = [&shares[&c], &shares[&a], &shares[&b]];
                    assert_eq!(combine_shares(&subset).unwrap(), secret);
                }
            }
        }
    }

    #[test]
    fn test_share_subset_combination() {
        let secret = "subset test";
        let threshold = 4;
        let shares = split_secret(secret.as_bytes(), threshold, 9, &mut rng()).unwrap();

        let mut picker = rng();
        for _ in 0..10 {
            let subset: Vec<&Share> = shares.values().choose_multiple(&mut picker, threshold);
            assert_eq!(combine_shares(&subset).unwrap(), secret.as_bytes());
        }
    }

    #[test]
    fn test_extreme_parameters() {
        let secret = b"Z\x00\xff";
        let shares = split_secret(secret, 255, 255, &mut rng()).unwrap();
        assert_eq!(shares.len(), 255);
        assert_eq!(shares[&255].index(), 255);
        assert_eq!(combine_shares(&values(&shares)).unwrap(), secret);

        let shares = split_secret(secret, 2, 255, &mut rng()).unwrap();
        let pair = [&shares[&200], &shares[&17]];
        assert_eq!(combine_shares(&pair).unwrap(), secret);
    }

    #[test]
    fn test_more_shares_than_threshold_still_recover() {
        let secret = b"Remember what the dormouse said.";
        let shares = split_secret(secret, 2, 6, &mut rng()).unwrap();
        assert_eq!(combine_shares(&values(&shares)).unwrap(), secret);
    }

    #[test]
    fn test_should_fail_with_shares_below_threshold() {
        let secret = b"Remember what the dormouse said.";
        let threshold = 12;
        let shares = split_secret(secret, threshold, 30, &mut rng()).unwrap();

        let subset: Vec<&Share> = shares.values().take(threshold - 1).collect();
        let recovered = combine_shares(&subset).unwrap();
        assert_ne!(recovered.as_slice(), secret);
    }

    #[test]
    fn test_share_uniqueness() {
        let shares = split_secret(b"unique shares", 3, 5, &mut rng()).unwrap();
        let all: Vec<_> = shares.values().collect();
        let all_unique = all
            .iter()
            .all(|&v| all.iter().filter(|&&x| x == v).count() == 1);
        assert!(all_unique);
    }

    #[test]
    fn test_invalid_split_parameters() {
        let secret = b"abandon abandon about";
        let mut rng = rng();
        assert!(matches!(
            split_secret(secret, 1, 5, &mut rng),
            Err(Error::InvalidThreshold(1))
        ));
        assert!(matches!(
            split_secret(secret, 0, 5, &mut rng),
            Err(Error::InvalidThreshold(0))
        ));
        assert!(matches!(
            split_secret(secret, 5, 3, &mut rng),
            Err(Error::ShareCountBelowThreshold { threshold: 5, shares: 3 })
        ));
        assert!(matches!(
            split_secret(secret, 2, 300, &mut rng),
            Err(Error::TooManyShares(300))
        ));
        assert!(matches!(
            split_secret(b"", 2, 3, &mut rng),
            Err(Error::EmptySecret)
        ));
    }

    #[test]
    fn test_combine_rejects_single_share() {
        let shares = split_secret(b"secret", 2, 3, &mut rng()).unwrap();
        let err = combine_shares(&[&shares[&1]]).unwrap_err();
        assert!(matches!(err, Error::NotEnoughShares { have: 1, need: 2 }));
        assert!(combine_shares::<Share>(&[]).is_err());
    }

    #[test]
    fn test_combine_rejects_duplicate_index() {
        let shares = split_secret(b"secret", 2, 3, &mut rng()).unwrap();
        let twin = Share::new(1, shares[&2].payload());
        let err = combine_shares(&[shares[&1].clone(), twin]).unwrap_err();
        assert!(matches!(err, Error::DuplicateShareIndex(1)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_combine_rejects_zero_index() {
        let shares = split_secret(b"secret", 2, 3, &mut rng()).unwrap();
        let zero = Share::new(0, shares[&2].payload());
        assert!(matches!(
            combine_shares(&[shares[&1].clone(), zero]),
            Err(Error::ZeroShareIndex)
        ));
    }

    #[test]
    fn test_combine_rejects_malformed_lengths() {
        let a = Share::from_hex("0141").unwrap();
        let b = Share::from_hex("024142").unwrap();
        assert!(matches!(
            combine_shares(&[a, b]),
            Err(Error::SharesUnequalLength { expected: 2, found: 3 })
        ));

        let short = [Share::from_hex("01").unwrap(), Share::from_hex("02").unwrap()];
        assert!(matches!(combine_shares(&short), Err(Error::ShareTooShort(1))));
    }

    #[test]
    fn test_order_independence() {
        let secret = b"order does not matter";
        let shares = split_secret(secret, 3, 6, &mut rng()).unwrap();
        let forward = combine_shares(&[&shares[&1], &shares[&4], &shares[&6]]).unwrap();
        let backward = combine_shares(&[&shares[&6], &shares[&4], &shares[&1]]).unwrap();
        let other = combine_shares(&[&shares[&2], &shares[&3], &shares[&5]]).unwrap();
        assert_eq!(forward, secret);
        assert_eq!(forward, backward);
        assert_eq!(forward, other);
    }

    #[test]
    fn test_interpolate_duplicate_x_is_arithmetic_error() {
        let points = [(Gf256(1), Gf256(5)), (Gf256(1), Gf256(9))];
        let err = interpolate(&points, Gf256::ZERO).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_interpolate_at_nonzero_point() {
        let poly = Polynomial::random(2, Gf256(0x99), &mut rng());
        let points: Vec<_> = (1..=3u8)
            .map(|x| (Gf256(x), poly.evaluate(Gf256(x))))
            .collect();
        for x in [0u8, 4, 77, 255] {
            assert_eq!(interpolate(&points, Gf256(x)).unwrap(), poly.evaluate(Gf256(x)));
        }
    }

    #[test]
    fn test_checked_combine_accepts_consistent_surplus() {
        let secret = b"checked";
        let shares = split_secret(secret, 3, 5, &mut rng()).unwrap();
        assert_eq!(combine_shares_checked(&values(&shares), 3).unwrap(), secret);
    }

    #[test]
    fn test_checked_combine_detects_tampered_share() {
        let secret = b"checked";
        let shares = split_secret(secret, 3, 5, &mut rng()).unwrap();
        let mut set = values(&shares);
        let mut bytes = set[4].as_bytes().to_vec();
        bytes[3] ^= 0x20;
        set[4] = Share::from_bytes(bytes);

        assert!(matches!(
            combine_shares_checked(&set, 3),
            Err(Error::InconsistentShares { index: 5 })
        ));
    }

    #[test]
    fn test_checked_combine_requires_threshold_shares() {
        let shares = split_secret(b"checked", 3, 5, &mut rng()).unwrap();
        let subset = [&shares[&1], &shares[&2]];
        assert!(matches!(
            combine_shares_checked(&subset, 3),
            Err(Error::NotEnoughShares { have: 2, need: 3 })
        ));
        assert!(matches!(
            combine_shares_checked(&subset, 1),
            Err(Error::InvalidThreshold(1))
        ));
    }

    #[test]
    fn test_refresh_shares() {
        let secret = "refresh test";
        let threshold = 3;
        let mut rng = rng();
        let original = values(&split_secret(secret.as_bytes(), threshold, 5, &mut rng).unwrap());

        let mut refreshed = original.clone();
        refresh_shares(&mut refreshed, threshold, &mut rng).unwrap();
        assert_ne!(refreshed, original);
        for (old, new) in original.iter().zip(&refreshed) {
            assert_eq!(old.index(), new.index());
        }

        assert_eq!(combine_shares(&refreshed[1..4]).unwrap(), secret.as_bytes());

        let mixed = [&original[0], &refreshed[1], &refreshed[2]];
        assert_ne!(combine_shares(&mixed).unwrap(), secret.as_bytes());
    }

    #[test]
    fn test_refresh_share_end_to_end() {
        let secret = "refresh share end to end";
        let threshold = 3;
        let mut rng = rng();
        let mut shares = values(&split_secret(secret.as_bytes(), threshold, 5, &mut rng).unwrap());

        let polynomials = generate_refresh_key(threshold, secret.len(), &mut rng).unwrap();
        for share in shares.iter_mut() {
            refresh_share(share, &polynomials).unwrap();
        }

        assert_eq!(combine_shares(&shares[..threshold]).unwrap(), secret.as_bytes());
    }

    #[test]
    fn test_refresh_key_validation() {
        assert!(matches!(
            generate_refresh_key(1, 4, &mut rng()),
            Err(Error::InvalidThreshold(1))
        ));
        let key = generate_refresh_key(2, 4, &mut rng()).unwrap();
        assert!(key.iter().all(|p| p.evaluate(Gf256::ZERO) == Gf256::ZERO));

        let mut share = Share::new(1, &[1, 2, 3]);
        assert!(matches!(
            refresh_share(&mut share, &key),
            Err(Error::RefreshKeyMismatch { share: 3, key: 4 })
        ));
        let mut empty = Share::from_bytes(vec![1]);
        assert!(matches!(
            refresh_share(&mut empty, &key),
            Err(Error::ShareTooShort(1))
        ));
    }

    #[test]
    fn test_refresh_rejects_threshold_above_share_count() {
        let secret = b"abandon ability able";
        let mut rng = rng();
        let original = values(&split_secret(secret, 2, 3, &mut rng).unwrap());

        let mut shares = original.clone();
        assert!(matches!(
            refresh_shares(&mut shares, 5, &mut rng),
            Err(Error::NotEnoughShares { have: 3, need: 5 })
        ));
        assert_eq!(shares, original);
        assert_eq!(combine_shares(&shares).unwrap(), secret);

        refresh_shares(&mut shares, 3, &mut rng).unwrap();
        assert_eq!(combine_shares(&shares).unwrap(), secret);
    }
}
