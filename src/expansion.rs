// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    arithmetic::{int_to_ip, netmask},
    PoolError, IPV4_BITS, MAX_POOL_SIZE,
};
use std::net::Ipv4Addr;

/**
Enumerate every address from `beg` to `end` inclusive, ascending.

An inverted interval (`end` < `beg`) yields an empty list. Refuses
to generate more than [MAX_POOL_SIZE] addresses to guard against an
obvious footgun scenario with wide intervals.

[MAX_POOL_SIZE]: crate::MAX_POOL_SIZE
*/
pub fn expand_range(beg: u32, end: u32) -> Result<Vec<Ipv4Addr>, PoolError> {
    let count: u64 = end.saturating_sub(beg) as u64 + 1;
    if count > MAX_POOL_SIZE as u64 {
        return Err(PoolError::RangeTooLarge(count));
    }

    Ok((beg..=end).map(int_to_ip).collect())
}

/**
Enumerate the host addresses of the CIDR block containing `addr`:
the block's network and broadcast addresses are excluded.

Blocks of prefix 31 and 32 have no host addresses distinct from the
network/broadcast pair and yield an empty list.
*/
pub fn expand_network(addr: u32, prefix: u8) -> Result<Vec<Ipv4Addr>, PoolError> {
    if prefix >= IPV4_BITS - 1 {
        return Ok(Vec::new());
    }

    let mask: u32 = netmask(prefix);
    let net: u32 = addr & mask;
    let bcast: u32 = net | !mask;
    expand_range(net + 1, bcast - 1)
}

/* -------------------------------------------------------------------------- */
