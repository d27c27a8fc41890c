// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::strings::*;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr, slice};

/// Classification of a parsed pool expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolKind {
    /// one address (possibly written in CIDR form)
    Single,
    /// a whole CIDR block, enumerated hosts only
    Network,
    /// an explicit first-to-last address range
    Range,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Single => write!(f, "single"),
            PoolKind::Network => write!(f, "network"),
            PoolKind::Range => write!(f, "range"),
        }
    }
}

/**
Outcome of a successful pool parse: classification, netmask and the
enumerated addresses.

Built fresh on every parse call and never mutated afterwards; there
is no cached or shared state behind it.
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParsedPool {
    pub kind: PoolKind,
    /// CIDR prefix as given in the expression
    pub prefix: u8,
    pub netmask: Ipv4Addr,
    /// base address as written (the first address for ranges)
    pub addr: Ipv4Addr,
    /// enumerated addresses, ascending
    pub addrs: Vec<Ipv4Addr>,
}

impl ParsedPool {
    /// Number of addresses in the pool.
    pub fn count(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// The addresses joined one per line, for list-style text fields.
    pub fn addr_lines(&self) -> String {
        let lines: Vec<String> = self.addrs.iter().map(|a| a.to_string()).collect();
        lines.join("\n")
    }

    /// The pool as an [Ipv4Net], for [PoolKind::Network] pools only.
    pub fn network(&self) -> Option<Ipv4Net> {
        match self.kind {
            PoolKind::Network => Ipv4Net::new(self.addr, self.prefix).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.addr, self.prefix)
    }
}

impl<'a> IntoIterator for &'a ParsedPool {
    type Item = &'a Ipv4Addr;
    type IntoIter = slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.iter()
    }
}

/* -------------------------------------------------------------------------- */
