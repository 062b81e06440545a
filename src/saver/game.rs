/*
game.rs

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

//! Save and restore the game in progress when quitting or starting Hydraheads.
//!
//! When a fight is in progress and the player quits Hydraheads, the game status is saved in
//! the `savegame.json` file.
//! When Hydraheads is restarted, the saved game is loaded, and the player can finish the
//! fight.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format by using
//! [`serde`].
//! Weapons are serialized as their kind and magnitude only, and are resolved back from the
//! catalogs when the file is loaded, so a saved game can never bring in a weapon that does
//! not exist.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::game::Game;
use crate::generator::weapons::{self, Weapon, WeaponKind};

/// Serialize and deserialize [`std::time::Instant`] objects with Serde.
pub mod instant {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::time::{Duration, Instant};

    /// Serialize an [`std::time::Instant`] object.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration: Duration = instant.elapsed();
        duration.serialize(serializer)
    }

    /// Deserialize an [`std::time::Instant`] object.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: Duration = Duration::deserialize(deserializer)?;
        let now: Instant = Instant::now();
        let instant: Instant = now
            .checked_sub(duration)
            .ok_or_else(|| Error::custom("Cannot compute the saved game duration"))?;
        Ok(instant)
    }
}

/// Serialize a [`Weapon`] object.
impl Serialize for Weapon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `2` is the number of fields to serialize
        let mut state = serializer.serialize_struct("Weapon", 2)?;

        // Only serialize the weapon kind and magnitude. During deserialization, a complete
        // Weapon object is retrieved from these two fields.
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

/// Deserialize a [`Weapon`] object.
impl<'de> Deserialize<'de> for Weapon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        enum Field {
            Kind,
            Value,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct FieldVisitor;

                impl Visitor<'_> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("`kind` or `value`")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "kind" => Ok(Field::Kind),
                            "value" => Ok(Field::Value),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        /// Retrieve the catalog weapon with the given kind and magnitude.
        fn resolve<E>(kind: WeaponKind, value: u64) -> Result<Weapon, E>
        where
            E: de::Error,
        {
            match weapons::find(kind, value) {
                Some(w) => Ok(w),
                None => Err(de::Error::custom(format!(
                    "no weapon {kind}{value} in the catalogs"
                ))),
            }
        }

        struct WeaponVisitor;

        impl<'de> Visitor<'de> for WeaponVisitor {
            type Value = Weapon;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Weapon")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Weapon, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let kind: WeaponKind = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let value: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                resolve(kind, value)
            }

            fn visit_map<V>(self, mut map: V) -> Result<Weapon, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut kind: Option<WeaponKind> = None;
                let mut value: Option<u64> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Kind => {
                            if kind.is_some() {
                                return Err(de::Error::duplicate_field("kind"));
                            }
                            kind = Some(map.next_value()?);
                        }
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                    }
                }
                let kind: WeaponKind = kind.ok_or_else(|| de::Error::missing_field("kind"))?;
                let value: u64 = value.ok_or_else(|| de::Error::missing_field("value"))?;
                resolve(kind, value)
            }
        }

        const FIELDS: &[&str] = &["kind", "value"];
        deserializer.deserialize_struct("Weapon", FIELDS, WeaponVisitor)
    }
}

/// Object to save and restore a fight in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savegame.json");
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Game`] object for the saved fight.
    ///
    /// Return the [`Game`] object or None if there is no saved fight.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let game: Game = serde_json::from_reader(reader)?;
        Ok(Some(game))
    }

    /// Save the provided [`Game`] object.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, game)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_round_trip_restores_the_name() {
        let spear: Weapon = weapons::find(WeaponKind::Subtract, 15).unwrap();
        let json: String = serde_json::to_string(&spear).unwrap();
        assert_eq!(json, r#"{"kind":"Subtract","value":15}"#);

        let restored: Weapon = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, spear);
        assert_eq!(restored.name, "Spear");
    }

    #[test]
    fn unknown_weapon_is_rejected() {
        // There is no dividing weapon with magnitude 7 in the catalogs.
        let res: Result<Weapon, _> = serde_json::from_str(r#"{"kind":"Divide","value":7}"#);
        assert!(res.is_err());
    }
}
