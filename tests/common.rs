//! Common test utilities for the sapper test suite.

#![allow(dead_code)]

use std::collections::HashSet;

use sapper::{Cell, SapperAgent};

/// Build a cell set from coordinate pairs.
pub fn cells(coords: &[(usize, usize)]) -> HashSet<Cell> {
    coords.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

/// Assert the knowledge base is saturated: no stored sentence is
/// resolvable and no sentence's cell set is a proper subset of another's.
pub fn assert_saturated(agent: &SapperAgent) {
    for sentence in agent.knowledge() {
        let size = sentence.cells().len();
        assert!(size > 0, "vacuous sentence stored: {sentence}");
        assert!(
            sentence.count() > 0,
            "all-safe sentence left unresolved: {sentence}"
        );
        assert!(
            sentence.count() < size,
            "all-mine sentence left unresolved: {sentence}"
        );
    }

    for (i, a) in agent.knowledge().iter().enumerate() {
        for (j, b) in agent.knowledge().iter().enumerate() {
            if i != j {
                assert!(
                    !a.is_proper_subset_of(b),
                    "subset pair left unresolved: {a} within {b}"
                );
            }
        }
    }
}

/// Assert the confirmed fact sets never overlap.
pub fn assert_facts_disjoint(agent: &SapperAgent) {
    let overlap: Vec<&Cell> = agent
        .confirmed_mines()
        .intersection(agent.confirmed_safes())
        .collect();
    assert!(
        overlap.is_empty(),
        "cells confirmed both mine and safe: {overlap:?}"
    );
}
