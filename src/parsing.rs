// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    arithmetic::{int_to_ip, is_network_address, netmask},
    expansion::{expand_network, expand_range},
    strings::*,
    structs::{ParsedPool, PoolKind},
    validation::{validate_address, validate_prefix},
    PoolError, IPV4_BITS,
};
use std::net::Ipv4Addr;
use tracing::trace;

/**
Parse a pool expression and enumerate its addresses.

Recognized formats, tried in order, first match wins:
- single address or CIDR network: `198.18.0.1/32`, `192.168.0.0/24`
- short range (last octet only): `192.168.0.1-16/24`
- long range (two full addresses): `192.168.0.1-192.168.0.16/24`

Whitespace anywhere in the input is ignored. The CIDR prefix must be
in `16..=32`; a network pool enumerates host addresses only (network
and broadcast excluded).

### Returns
- `Ok(Some(pool))` for a recognized, valid expression
- `Ok(None)` when the input matches none of the formats (not an
  error; typically the input is simply not finished yet)
- `Err(_)` when a recognized format carries an invalid field
*/
pub fn parse_pool(arg: impl AsRef<str>) -> Result<Option<ParsedPool>, PoolError> {
    let expr: String = arg
        .as_ref()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    // every format ends in "/prefix"
    let Some((body, prefix_text)) = expr.split_once(SLASH) else {
        return Ok(None);
    };

    // single address or CIDR network
    if is_quad(body) {
        return single_or_network(body, prefix_text).map(Some);
    }

    if let Some((beg_text, end_text)) = body.split_once(DASH) {
        if !is_quad(beg_text) {
            return Ok(None);
        }
        // short range: the end replaces the last octet of the start
        if is_octet_text(end_text) {
            return short_range(beg_text, end_text, prefix_text).map(Some);
        }
        // long range: both endpoints written out
        if is_quad(end_text) {
            return long_range(beg_text, end_text, prefix_text).map(Some);
        }
    }

    Ok(None)
}

/// `A.B.C.D/P`: one address, or a whole network if the address is
/// the network address of its block.
fn single_or_network(addr_text: &str, prefix_text: &str) -> Result<ParsedPool, PoolError> {
    let addr: Ipv4Addr = validate_address(addr_text)?;
    let prefix: u8 = validate_prefix(prefix_text)?;
    let addr_int: u32 = u32::from(addr);

    // a /32 "block" is just the address itself
    if prefix < IPV4_BITS && is_network_address(addr_int, prefix) {
        let addrs: Vec<Ipv4Addr> = expand_network(addr_int, prefix)?;
        trace!("{addr}/{prefix}: network, {} hosts", addrs.len());
        return Ok(ParsedPool {
            kind: PoolKind::Network,
            prefix,
            netmask: int_to_ip(netmask(prefix)),
            addr,
            addrs,
        });
    }

    trace!("{addr}/{prefix}: single address");
    Ok(ParsedPool {
        kind: PoolKind::Single,
        prefix,
        netmask: int_to_ip(netmask(prefix)),
        addr,
        addrs: vec![addr],
    })
}

/// `A.B.C.D-E/P`: `E` replaces the last octet of the start address
/// and must be greater than it.
fn short_range(beg_text: &str, end_octet: &str, prefix_text: &str) -> Result<ParsedPool, PoolError> {
    let Some((stem, beg_octet)) = beg_text.rsplit_once(DOT) else {
        return Err(PoolError::Malformed(beg_text.into()));
    };
    let beg_val: u32 = beg_octet
        .parse()
        .map_err(|_| PoolError::Malformed(beg_text.into()))?;
    let end_val: u32 = end_octet
        .parse()
        .map_err(|_| PoolError::Malformed(end_octet.into()))?;

    // ordering is checked on the raw octet values, before validation
    if end_val <= beg_val {
        return Err(PoolError::RangeOrder {
            beg: beg_val,
            end: end_val,
        });
    }

    let end_text: String = format!("{stem}{DOT}{end_octet}");
    let beg: Ipv4Addr = validate_address(beg_text)?;
    let end: Ipv4Addr = validate_address(&end_text)?;
    let prefix: u8 = validate_prefix(prefix_text)?;

    let addrs: Vec<Ipv4Addr> = expand_range(u32::from(beg), u32::from(end))?;
    trace!("{beg}-{end_val}/{prefix}: short range, {} addrs", addrs.len());
    Ok(ParsedPool {
        kind: PoolKind::Range,
        prefix,
        netmask: int_to_ip(netmask(prefix)),
        addr: beg,
        addrs,
    })
}

/// `A.B.C.D-E.F.G.H/P`: both endpoints written out. Endpoint order is
/// not enforced; an inverted interval expands to an empty pool.
fn long_range(beg_text: &str, end_text: &str, prefix_text: &str) -> Result<ParsedPool, PoolError> {
    let beg: Ipv4Addr = validate_address(beg_text)?;
    let end: Ipv4Addr = validate_address(end_text)?;
    let prefix: u8 = validate_prefix(prefix_text)?;

    let addrs: Vec<Ipv4Addr> = expand_range(u32::from(beg), u32::from(end))?;
    trace!("{beg}-{end}/{prefix}: long range, {} addrs", addrs.len());
    Ok(ParsedPool {
        kind: PoolKind::Range,
        prefix,
        netmask: int_to_ip(netmask(prefix)),
        addr: beg,
        addrs,
    })
}

/* ---------------------------------- */

/// Four dot-separated groups of 1-3 digits.
fn is_quad(s: &str) -> bool {
    let mut groups: usize = 0;
    for part in s.split('.') {
        if !is_octet_text(part) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/// 1-3 ASCII digits.
fn is_octet_text(s: &str) -> bool {
    !s.is_empty() && s.len() <= 3 && s.bytes().all(|b| b.is_ascii_digit())
}

/* -------------------------------------------------------------------------- */
