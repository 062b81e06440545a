/*
weapons.rs

Copyright 2026 Hervé Quatremain

This file is part of Hydraheads.

Hydraheads is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hydraheads is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hydraheads. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Weapon catalogs.
//!
//! Every weapon applies an arithmetic operation to the hydra's head count: it removes heads,
//! grows new ones, or cuts the count down by an exact divisor.
//! The three catalogs, [`SUBTRACTING_WEAPONS`], [`ADDING_WEAPONS`], and [`DIVIDING_WEAPONS`],
//! are fixed at build time.
//! A puzzle is played with one weapon from each catalog.
//!
//! The [`Weapon::can_use`] and [`Weapon::apply`] methods are the single source of truth for
//! weapon semantics: the solver and the interactive game both go through them, so the optimal
//! move counts that the solver computes always match the moves the player can actually make.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Weapon operation applied to the head count.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum WeaponKind {
    /// Remove heads.
    #[strum(serialize = "-")]
    Subtract,

    /// Grow new heads.
    #[strum(serialize = "+")]
    Add,

    /// Divide the head count. Only usable when the division is exact.
    #[strum(serialize = "/")]
    Divide,
}

/// A weapon from one of the three catalogs.
///
/// Serialization is implemented in [`crate::saver::game`]: only the kind and the magnitude are
/// stored, and the weapon is resolved back from the catalogs when a saved game is restored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Weapon {
    /// Operation performed on the head count.
    pub kind: WeaponKind,

    /// Magnitude of the operation. Always positive; at least 2 for dividing weapons.
    pub value: u64,

    /// Display name.
    pub name: &'static str,
}

// Note that all the weapons in a catalog have distinct starting letters, so that a solution
// sequence can be abbreviated to initials.
/// Weapons that remove heads.
pub const SUBTRACTING_WEAPONS: [Weapon; 15] = [
    Weapon::new(WeaponKind::Subtract, 1, "Arbalest"),
    Weapon::new(WeaponKind::Subtract, 2, "Axe"),
    Weapon::new(WeaponKind::Subtract, 3, "Canon"),
    Weapon::new(WeaponKind::Subtract, 4, "Club"),
    Weapon::new(WeaponKind::Subtract, 5, "Crossbow"),
    Weapon::new(WeaponKind::Subtract, 6, "Elephant Gun"),
    Weapon::new(WeaponKind::Subtract, 7, "Flail"),
    Weapon::new(WeaponKind::Subtract, 8, "Katana"),
    Weapon::new(WeaponKind::Subtract, 9, "Knife"),
    Weapon::new(WeaponKind::Subtract, 10, "Saber"),
    Weapon::new(WeaponKind::Subtract, 11, "Scythe"),
    Weapon::new(WeaponKind::Subtract, 12, "Shillelagh"),
    Weapon::new(WeaponKind::Subtract, 13, "Shortsword"),
    Weapon::new(WeaponKind::Subtract, 14, "Sling"),
    Weapon::new(WeaponKind::Subtract, 15, "Spear"),
];

/// Weapons that grow new heads.
pub const ADDING_WEAPONS: [Weapon; 15] = [
    Weapon::new(WeaponKind::Add, 1, "Dagger"),
    Weapon::new(WeaponKind::Add, 2, "Halberd"),
    Weapon::new(WeaponKind::Add, 3, "Glaive"),
    Weapon::new(WeaponKind::Add, 4, "Lance"),
    Weapon::new(WeaponKind::Add, 5, "Longbow"),
    Weapon::new(WeaponKind::Add, 6, "Longsword"),
    Weapon::new(WeaponKind::Add, 7, "Mace"),
    Weapon::new(WeaponKind::Add, 8, "Man Catcher"),
    Weapon::new(WeaponKind::Add, 9, "Morning Star"),
    Weapon::new(WeaponKind::Add, 10, "Pike"),
    Weapon::new(WeaponKind::Add, 11, "Quarterstaff"),
    Weapon::new(WeaponKind::Add, 12, "Rapier"),
    Weapon::new(WeaponKind::Add, 13, "Voulge"),
    Weapon::new(WeaponKind::Add, 14, "Xiphos"),
    Weapon::new(WeaponKind::Add, 15, "War hammer"),
];

/// Weapons that divide the head count.
pub const DIVIDING_WEAPONS: [Weapon; 2] = [
    Weapon::new(WeaponKind::Divide, 2, "Bisector"),
    Weapon::new(WeaponKind::Divide, 3, "Trisector"),
];

impl Weapon {
    /// Create a [`Weapon`] object. Only used to build the catalogs.
    const fn new(kind: WeaponKind, value: u64, name: &'static str) -> Self {
        Self { kind, value, name }
    }

    /// Whether the weapon can be used on the given head count.
    ///
    /// An adding weapon is always usable.
    /// A subtracting weapon cannot remove more heads than the hydra has.
    /// A dividing weapon is only usable when the division is exact, which keeps the head count
    /// an integer.
    pub fn can_use(&self, heads: u64) -> bool {
        match self.kind {
            WeaponKind::Subtract => heads >= self.value,
            WeaponKind::Add => true,
            WeaponKind::Divide => heads % self.value == 0,
        }
    }

    /// Apply the weapon to the given head count and return the new head count, or None if the
    /// weapon is not usable on that count.
    pub fn apply(&self, heads: u64) -> Option<u64> {
        if !self.can_use(heads) {
            return None;
        }
        Some(match self.kind {
            WeaponKind::Subtract => heads - self.value,
            WeaponKind::Add => heads + self.value,
            WeaponKind::Divide => heads / self.value,
        })
    }

    /// Return the weapon display string, such as `Canon -3`.
    pub fn label(&self) -> String {
        format!("{} {}{}", self.name, self.kind, self.value)
    }
}

/// Return the catalog weapon with the given kind and magnitude, or None if no such weapon
/// exists.
pub fn find(kind: WeaponKind, value: u64) -> Option<Weapon> {
    let catalog: &[Weapon] = match kind {
        WeaponKind::Subtract => &SUBTRACTING_WEAPONS,
        WeaponKind::Add => &ADDING_WEAPONS,
        WeaponKind::Divide => &DIVIDING_WEAPONS,
    };
    catalog.iter().find(|w| w.value == value).copied()
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_well_formed() {
        assert_eq!(SUBTRACTING_WEAPONS.len(), 15);
        assert_eq!(ADDING_WEAPONS.len(), 15);
        assert_eq!(DIVIDING_WEAPONS.len(), 2);

        for w in SUBTRACTING_WEAPONS.iter().chain(&ADDING_WEAPONS) {
            assert!(w.value >= 1);
        }
        for w in &DIVIDING_WEAPONS {
            assert!(w.value >= 2);
        }

        // Every subtracting weapon must have at least one coprime adding weapon, otherwise
        // the generator could never satisfy its precondition for that weapon.
        for sub in &SUBTRACTING_WEAPONS {
            assert!(
                ADDING_WEAPONS.iter().any(|add| gcd(sub.value, add.value) == 1),
                "no coprime adding weapon for {}",
                sub.label()
            );
        }
    }

    #[test]
    fn subtract_usable_boundary() {
        let crossbow: Weapon = find(WeaponKind::Subtract, 5).unwrap();
        assert!(!crossbow.can_use(4));
        assert!(crossbow.can_use(5));
        assert_eq!(crossbow.apply(4), None);
        assert_eq!(crossbow.apply(5), Some(0));
    }

    #[test]
    fn divide_usable_boundary() {
        let trisector: Weapon = find(WeaponKind::Divide, 3).unwrap();
        assert!(!trisector.can_use(7));
        assert!(trisector.can_use(9));
        assert_eq!(trisector.apply(7), None);
        assert_eq!(trisector.apply(9), Some(3));
    }

    #[test]
    fn add_always_usable() {
        for add in &ADDING_WEAPONS {
            assert!(add.can_use(0));
            assert_eq!(add.apply(0), Some(add.value));
        }
    }

    #[test]
    fn find_resolves_catalog_weapons() {
        let axe: Weapon = find(WeaponKind::Subtract, 2).unwrap();
        assert_eq!(axe.name, "Axe");
        assert_eq!(find(WeaponKind::Divide, 4), None);
        assert_eq!(find(WeaponKind::Add, 0), None);
    }

    #[test]
    fn weapon_label() {
        let canon: Weapon = find(WeaponKind::Subtract, 3).unwrap();
        assert_eq!(canon.label(), "Canon -3");
        let bisector: Weapon = find(WeaponKind::Divide, 2).unwrap();
        assert_eq!(bisector.label(), "Bisector /2");
    }

    #[test]
    fn gcd_properties() {
        for a in 1..=15u64 {
            assert_eq!(gcd(a, 0), a);
            assert_eq!(gcd(0, a), a);
            for b in 1..=15u64 {
                assert_eq!(gcd(a, b), gcd(b, a));
            }
        }
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 15), 1);
    }
}
