// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-strength
// ABOUTME: Provides recommendation, planning, and personal-record commands

pub mod analysis;
pub mod recommend;
