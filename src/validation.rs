// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    arithmetic::{int_to_ip, ip_to_int},
    PoolError, IPV4_BITS, MIN_PREFIX,
};
use std::net::Ipv4Addr;

/**
Validate a dotted-quad address string.

Each octet must be an integer in `0..=255`, and the whole text must
round-trip exactly through integer conversion. The round-trip check
rejects non-canonical forms such as leading zeros ("010.0.0.1") on
top of structural damage.

### Returns
- the parsed [Ipv4Addr] on success
- [PoolError::InvalidOctet] for an octet outside `0..=255`
- [PoolError::Malformed] for anything else
*/
pub fn validate_address(text: impl AsRef<str>) -> Result<Ipv4Addr, PoolError> {
    let text: &str = text.as_ref();

    for part in text.split('.') {
        let value: u32 = part
            .parse()
            .map_err(|_| PoolError::Malformed(text.into()))?;
        if value > u8::MAX as u32 {
            return Err(PoolError::InvalidOctet(value));
        }
    }

    let addr: Ipv4Addr = int_to_ip(ip_to_int(text)?);
    if addr.to_string() != text {
        return Err(PoolError::Malformed(text.into()));
    }
    Ok(addr)
}

/**
Validate a CIDR prefix string.

Accepted prefixes are `16..=32`: the /16 floor bounds the largest
possible expansion to [MAX_POOL_SIZE] host addresses.

[MAX_POOL_SIZE]: crate::MAX_POOL_SIZE
*/
pub fn validate_prefix(text: impl AsRef<str>) -> Result<u8, PoolError> {
    let text: &str = text.as_ref();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PoolError::PrefixNotNumeric(text.into()));
    }

    // digits-only text too long for u32 is simply a huge prefix
    let value: u32 = text
        .parse()
        .map_err(|_| PoolError::PrefixTooLarge(text.into()))?;
    if value > IPV4_BITS as u32 {
        return Err(PoolError::PrefixTooLarge(text.into()));
    }
    if value < MIN_PREFIX as u32 {
        return Err(PoolError::PrefixTooSmall(text.into()));
    }
    Ok(value as u8)
}

/* -------------------------------------------------------------------------- */
