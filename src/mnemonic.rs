//! Mnemonic phrases: the human readable secrets this tool backs up.
//!
//! The sharing engine only sees bytes. This module supplies the word list
//! that phrases are drawn from and the post-processing that turns recovered
//! bytes back into a phrase.

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::error::{Error, Result};

/// An ordered list of candidate words, e.g. a 2048 word BIP-39 list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Parses one word per line. Lines are trimmed and blank lines skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(Error::EmptyWordlist);
        }
        Ok(Wordlist { words })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let wordlist = Self::parse(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), words = wordlist.len(), "loaded word list");
        Ok(wordlist)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draws `count` words uniformly at random, with replacement.
    pub fn generate_mnemonic<R: RngCore + CryptoRng>(&self, count: usize, rng: &mut R) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.words.choose(rng).cloned())
            .collect()
    }

    /// Same as [`Wordlist::generate_mnemonic`], joined with single spaces.
    pub fn generate_phrase<R: RngCore + CryptoRng>(&self, count: usize, rng: &mut R) -> String {
        self.generate_mnemonic(count, rng).join(" ")
    }
}

/// Turns recovered secret bytes back into a phrase.
///
/// Trailing whitespace carries no meaning in a mnemonic and is removed.
/// Leading whitespace is kept.
///
/// Decoding is strict: bytes that are not UTF-8, the usual outcome of
/// combining too few shares, fail with [`Error::InvalidUtf8`] instead of
/// producing garbage text. Use [`recover_text_lossy`] to see the garbage.
pub fn recover_text(secret: Vec<u8>) -> Result<String> {
    let mut text = String::from_utf8(secret)?;
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
    Ok(text)
}

/// Like [`recover_text`], but invalid sequences become U+FFFD and decoding
/// never fails. The flag is `false` when any replacement happened.
pub fn recover_text_lossy(secret: &[u8]) -> (String, bool) {
    let (text, valid) = match String::from_utf8_lossy(secret) {
        Cow::Borrowed(text) => (text.to_string(), true),
        Cow::Owned(text) => (text, false),
    };
    (text.trim_end().to_string(), valid)
}

/// Reads a secret phrase, e.g. from stdin, dropping the trailing line break.
pub fn read_phrase<R: Read>(mut reader: R) -> Result<String> {
    let mut phrase = String::new();
    reader.read_to_string(&mut phrase)?;
    let trimmed = phrase.trim_end_matches(['\r', '\n']).len();
    phrase.truncate(trimmed);
    if phrase.is_empty() {
        return Err(Error::EmptySecret);
    }
    Ok(phrase)
}
