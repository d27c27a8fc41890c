// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DASH: &str = "-";
pub(crate) static DOT: &str = ".";
pub(crate) static SLASH: &str = "/";

// lib.rs
pub(crate) static ERR_MALFORMED: &str = "is not a valid IPv4 address";
pub(crate) static ERR_OCTET: &str = "is not between 0 and 255";
pub(crate) static ERR_PRE_NAN: &str = "CIDR prefix must be a number";
pub(crate) static ERR_PRE_MAX: &str = "CIDR prefix must be <= 32";
pub(crate) static ERR_PRE_MIN: &str = "CIDR prefix must be >= 16";
pub(crate) static ERR_RNG_ORDER: &str = "last octet of a short range must be greater than the first";
pub(crate) static ERR_RNG_TOOLARGE: &str = "too many addresses in range";
