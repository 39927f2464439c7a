// Copyright 2026 The digitring developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Digit Rings
//!
//! A `DigitRing` stores a non-negative integer as its digits in some base,
//! most significant digit first, inside a circular doubly linked list.
//! Addition walks both operands from their least significant ends in
//! lock-step, propagating a carry exactly like long addition on paper;
//! no big-integer arithmetic is involved.
//!
//! Base conversion folds the digits through a `BigUint` which acts as a
//! bridge between two positional representations.
//!
//! Because the list is circular, the "first" digit is only a choice of
//! head node: [`DigitRing::shift_left`] and [`DigitRing::shift_right`]
//! rotate the digit sequence in constant time without moving any node.
//!
//! # Example
//!
//! ```
//! use digitring::DigitRing;
//!
//! let eight = DigitRing::from_digits(3, [2, 2]).unwrap();
//! let one = DigitRing::from_digits(3, [1]).unwrap();
//!
//! let nine = &eight + &one;
//! assert_eq!(nine.to_vec(), vec![1, 0, 0]);
//! assert_eq!(nine.to_decimal_string(), "9");
//!
//! let octal = nine.convert_base(8).unwrap();
//! assert_eq!(octal.to_vec(), vec![1, 1]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::Vec;

use num_bigint::ParseBigIntError;


// pub const DEFAULT_BASE: u32 = ${RUST_DIGITRING_DEFAULT_BASE} or 3;
// pub const DEFAULT_TARGET_BASE: u32 = ${RUST_DIGITRING_DEFAULT_TARGET_BASE} or 8;
include!(concat!(env!("OUT_DIR"), "/default_base.rs"));

mod node;
use node::{NodeArena, NodeIdx};

mod iter;
pub use iter::Iter;

// swap, sort, shift
mod reorder;

// digit-wise addition & base conversion
mod arithmetic;

// Add<T>, AddAssign<T>
mod impl_ops_add;

// PartialEq, Hash
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// BigUint <-> DigitRing
mod impl_convert;

mod parsing;
mod impl_trait_from_str;

#[cfg(feature = "std")]
mod persistence;

#[cfg(feature = "serde")]
mod impl_serde;


/// A single positional digit; valid values lie in `[0, base)`
pub type Digit = u32;


/// Errors raised by structural operations on a [`DigitRing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitRingError {
    /// Digit is not smaller than the ring's base
    InvalidDigit { digit: Digit, base: u32 },
    /// Position outside `[0, len)` (reads) or `[0, len]` (inserts)
    IndexOutOfRange { index: usize, len: usize },
    /// Base is unusable: less than 2, or too large for character digits
    InvalidBase(u32),
    /// Operands of a binary operation use different bases
    BaseMismatch { lhs: u32, rhs: u32 },
    /// Operation needs at least one digit
    EmptyOperation,
}

impl fmt::Display for DigitRingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DigitRingError::*;

        match *self {
            InvalidDigit { digit, base } => {
                write!(f, "Digit {} is not valid for base {}", digit, base)
            }
            IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for ring of length {}", index, len)
            }
            InvalidBase(base) => {
                write!(f, "Invalid base {}", base)
            }
            BaseMismatch { lhs, rhs } => {
                write!(f, "Cannot combine rings of base {} and base {}", lhs, rhs)
            }
            EmptyOperation => f.write_str("Operation requires a non-empty ring"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitRingError {}


/// Errors raised while reading a [`DigitRing`] from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDigitRingError {
    /// Input held no digits
    Empty,
    /// Input had a leading minus sign on a non-zero value
    Negative,
    /// Character is not a digit of the requested radix
    InvalidCharacter(char),
    /// Decimal text was rejected by `BigUint`
    ParseBigInt(ParseBigIntError),
    /// Parsed digits could not form a ring
    Ring(DigitRingError),
}

impl fmt::Display for ParseDigitRingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitRingError::*;

        match *self {
            Empty => f.write_str("Failed to parse empty string"),
            Negative => f.write_str("Number must not be negative"),
            InvalidCharacter(c) => write!(f, "Invalid digit character {:?}", c),
            ParseBigInt(ref e) => fmt::Display::fmt(e, f),
            Ring(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDigitRingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseDigitRingError::ParseBigInt(e) => Some(e),
            ParseDigitRingError::Ring(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBigIntError> for ParseDigitRingError {
    fn from(err: ParseBigIntError) -> ParseDigitRingError {
        ParseDigitRingError::ParseBigInt(err)
    }
}

impl From<DigitRingError> for ParseDigitRingError {
    fn from(err: DigitRingError) -> ParseDigitRingError {
        ParseDigitRingError::Ring(err)
    }
}


/// Check base is usable for positional notation
pub(crate) fn check_base(base: u32) -> Result<u32, DigitRingError> {
    if base < 2 {
        Err(DigitRingError::InvalidBase(base))
    } else {
        Ok(base)
    }
}


/// Non-negative integer stored digit-by-digit in a circular doubly
/// linked list
///
/// Index 0 is the most significant digit, index `len()-1` the least
/// significant. The least significant digit is always the node
/// preceding head, so both ends are reachable in constant time.
///
#[derive(Clone)]
pub struct DigitRing {
    nodes: NodeArena,
    // absent iff the ring is empty
    head: Option<NodeIdx>,
    base: u32,
}

impl Default for DigitRing {
    fn default() -> DigitRing {
        DigitRing::with_base(DEFAULT_BASE)
    }
}

impl DigitRing {
    /// Create empty ring of digits in given base
    ///
    /// Fails with [`DigitRingError::InvalidBase`] if base is less than 2.
    ///
    pub fn new(base: u32) -> Result<DigitRing, DigitRingError> {
        check_base(base).map(DigitRing::with_base)
    }

    /// Create empty ring from an already-checked base
    pub(crate) fn with_base(base: u32) -> DigitRing {
        debug_assert!(base >= 2);
        DigitRing {
            nodes: NodeArena::new(),
            head: None,
            base: base,
        }
    }

    /// Build ring from digits, most significant first
    ///
    /// Every digit is validated before the ring is built.
    ///
    pub fn from_digits<I>(base: u32, digits: I) -> Result<DigitRing, DigitRingError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut ring = DigitRing::new(base)?;
        ring.extend_digits(digits)?;
        Ok(ring)
    }

    /// The radix of this ring
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of digits stored
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Return error if digit is not in `[0, base)`
    #[inline]
    pub(crate) fn check_digit(&self, digit: Digit) -> Result<(), DigitRingError> {
        if digit < self.base {
            Ok(())
        } else {
            Err(DigitRingError::InvalidDigit { digit, base: self.base })
        }
    }

    /// Return error if index does not refer to a stored digit
    #[inline]
    fn check_index(&self, index: usize) -> Result<(), DigitRingError> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(DigitRingError::IndexOutOfRange { index, len })
        }
    }

    /// Key of the least significant node
    #[inline]
    pub(crate) fn tail(&self) -> Option<NodeIdx> {
        self.head.map(|head| self.nodes.prev(head))
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<NodeIdx> {
        self.head
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    /// Link new node at the least significant end without validation
    pub(crate) fn push_back_unchecked(&mut self, digit: Digit) {
        debug_assert!(digit < self.base);
        match self.head {
            None => {
                self.head = Some(self.nodes.alloc_singleton(digit));
            }
            Some(head) => {
                // the slot before head is the tail
                self.nodes.insert_before(head, digit);
            }
        }
    }

    /// Link new node at the most significant end without validation
    pub(crate) fn push_front_unchecked(&mut self, digit: Digit) {
        debug_assert!(digit < self.base);
        let idx = match self.head {
            None => self.nodes.alloc_singleton(digit),
            Some(head) => self.nodes.insert_before(head, digit),
        };
        self.head = Some(idx);
    }

    /// Unlink node, moving head forward if it was the head
    fn remove_node(&mut self, idx: NodeIdx) -> Digit {
        if self.head == Some(idx) {
            let next = self.nodes.next(idx);
            self.head = if next == idx { None } else { Some(next) };
        }
        self.nodes.unlink(idx).value
    }

    /// Locate node holding the digit at `index`
    ///
    /// Walks forward from head when index is in the first half of the
    /// ring, otherwise backward from the tail, so at most `len/2` links
    /// are followed.
    ///
    pub(crate) fn node_at(&self, index: usize) -> Result<NodeIdx, DigitRingError> {
        self.check_index(index)?;
        let len = self.len();
        let head = match self.head {
            Some(head) => head,
            None => return Err(DigitRingError::IndexOutOfRange { index, len }),
        };

        if index < len / 2 {
            let mut cursor = head;
            for _ in 0..index {
                cursor = self.nodes.next(cursor);
            }
            Ok(cursor)
        } else {
            let mut cursor = self.nodes.prev(head);
            for _ in index..len - 1 {
                cursor = self.nodes.prev(cursor);
            }
            Ok(cursor)
        }
    }

    /// Append digit as the new least significant digit
    pub fn append(&mut self, digit: Digit) -> Result<(), DigitRingError> {
        self.check_digit(digit)?;
        self.push_back_unchecked(digit);
        Ok(())
    }

    /// Insert digit as the new most significant digit
    pub fn push_front(&mut self, digit: Digit) -> Result<(), DigitRingError> {
        self.check_digit(digit)?;
        self.push_front_unchecked(digit);
        Ok(())
    }

    /// Insert digit so it ends up at position `index`
    ///
    /// `index` may equal `len()`, which appends.
    ///
    pub fn insert_at(&mut self, index: usize, digit: Digit) -> Result<(), DigitRingError> {
        let len = self.len();
        if index > len {
            return Err(DigitRingError::IndexOutOfRange { index, len });
        }
        self.check_digit(digit)?;

        if index == len {
            self.push_back_unchecked(digit);
        } else if index == 0 {
            self.push_front_unchecked(digit);
        } else {
            let at = self.node_at(index)?;
            self.nodes.insert_before(at, digit);
        }
        Ok(())
    }

    /// Remove and return the digit at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Digit, DigitRingError> {
        let idx = self.node_at(index)?;
        Ok(self.remove_node(idx))
    }

    /// Remove first occurrence of digit, scanning from the most
    /// significant end
    ///
    /// Returns true if a digit was removed.
    ///
    pub fn remove_value(&mut self, digit: Digit) -> bool {
        match self.find_forward(digit) {
            Some((_, idx)) => {
                self.remove_node(idx);
                true
            }
            None => false,
        }
    }

    /// Remove and return the most significant digit
    pub fn pop_front(&mut self) -> Result<Digit, DigitRingError> {
        let head = self.head.ok_or(DigitRingError::EmptyOperation)?;
        Ok(self.remove_node(head))
    }

    /// Remove and return the least significant digit
    pub fn pop_back(&mut self) -> Result<Digit, DigitRingError> {
        let tail = self.tail().ok_or(DigitRingError::EmptyOperation)?;
        Ok(self.remove_node(tail))
    }

    /// Digit at position `index`
    pub fn get(&self, index: usize) -> Result<Digit, DigitRingError> {
        self.node_at(index).map(|idx| self.nodes.value(idx))
    }

    /// Replace digit at `index`, returning the previous digit
    pub fn set(&mut self, index: usize, digit: Digit) -> Result<Digit, DigitRingError> {
        let idx = self.node_at(index)?;
        self.check_digit(digit)?;
        Ok(self.nodes.replace_value(idx, digit))
    }

    /// Most significant digit
    pub fn first(&self) -> Option<Digit> {
        self.head.map(|idx| self.nodes.value(idx))
    }

    /// Least significant digit
    pub fn last(&self) -> Option<Digit> {
        self.tail().map(|idx| self.nodes.value(idx))
    }

    fn find_forward(&self, digit: Digit) -> Option<(usize, NodeIdx)> {
        let mut cursor = self.head?;
        for i in 0..self.len() {
            if self.nodes.value(cursor) == digit {
                return Some((i, cursor));
            }
            cursor = self.nodes.next(cursor);
        }
        None
    }

    /// Position of the first occurrence of digit (from head)
    pub fn index_of(&self, digit: Digit) -> Option<usize> {
        self.find_forward(digit).map(|(i, _)| i)
    }

    /// Position of the last occurrence of digit (scanning from the tail)
    pub fn last_index_of(&self, digit: Digit) -> Option<usize> {
        let mut cursor = self.tail()?;
        for i in (0..self.len()).rev() {
            if self.nodes.value(cursor) == digit {
                return Some(i);
            }
            cursor = self.nodes.prev(cursor);
        }
        None
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.index_of(digit).is_some()
    }

    /// True if every digit from the iterator occurs in this ring
    pub fn contains_all<I>(&self, digits: I) -> bool
    where
        I: IntoIterator<Item = Digit>,
    {
        digits.into_iter().all(|d| self.contains(d))
    }

    /// Drop every digit
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Iterate over digits, most significant first
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Copy digits into a vector, most significant first
    pub fn to_vec(&self) -> Vec<Digit> {
        self.iter().collect()
    }

    /// Append all digits
    ///
    /// Nothing is appended unless every digit is valid.
    ///
    pub fn extend_digits<I>(&mut self, digits: I) -> Result<(), DigitRingError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let digits: Vec<Digit> = digits.into_iter().collect();
        for &digit in digits.iter() {
            self.check_digit(digit)?;
        }
        for digit in digits {
            self.push_back_unchecked(digit);
        }
        Ok(())
    }

    /// Insert all digits, in order, starting at position `index`
    ///
    /// Nothing is inserted unless the index and every digit are valid.
    ///
    pub fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<(), DigitRingError>
    where
        I: IntoIterator<Item = Digit>,
    {
        let len = self.len();
        if index > len {
            return Err(DigitRingError::IndexOutOfRange { index, len });
        }
        let digits: Vec<Digit> = digits.into_iter().collect();
        for &digit in digits.iter() {
            self.check_digit(digit)?;
        }

        if index == len {
            for digit in digits {
                self.push_back_unchecked(digit);
            }
            return Ok(());
        }

        let at = self.node_at(index)?;
        let mut first_inserted = None;
        for digit in digits {
            let idx = self.nodes.insert_before(at, digit);
            if first_inserted.is_none() {
                first_inserted = Some(idx);
            }
        }
        if index == 0 && first_inserted.is_some() {
            self.head = first_inserted;
        }
        Ok(())
    }

    /// Keep only the digits for which `keep` returns true
    ///
    /// Returns true if any digit was removed.
    ///
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(Digit) -> bool,
    {
        let mut removed = false;
        let mut cursor = self.head;
        for _ in 0..self.len() {
            let idx = match cursor {
                Some(idx) => idx,
                None => break,
            };
            let next = self.nodes.next(idx);
            if !keep(self.nodes.value(idx)) {
                self.remove_node(idx);
                removed = true;
            }
            cursor = self.head.map(|_| next);
        }
        removed
    }

    /// Remove every occurrence of each listed digit
    ///
    /// Returns true if any digit was removed.
    ///
    pub fn remove_all<I>(&mut self, digits: I) -> bool
    where
        I: IntoIterator<Item = Digit>,
    {
        let targets: Vec<Digit> = digits.into_iter().collect();
        self.retain(|d| !targets.contains(&d))
    }
}


#[cfg(test)]
mod digitring_tests {
    use super::*;

    include!("lib.tests.rs");
}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
