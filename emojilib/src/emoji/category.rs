//
// emojilib
//
// Copyright 2024 emojicon contributors
//
// This file is part of emojicon.
//
// emojicon is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojicon is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojicon. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The fixed emoji categories and modifier code points of `emoji-test.txt`.

use std::fmt;

/// Semantic grouping of emoji, one per `# group:` header of
/// `emoji-test.txt` except `Component`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SmileysEmotion,
    PeopleBody,
    AnimalsNature,
    FoodDrink,
    TravelPlaces,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    /// All categories, in output order.
    pub const ALL: [Self; 9] = [
        Self::SmileysEmotion,
        Self::PeopleBody,
        Self::AnimalsNature,
        Self::FoodDrink,
        Self::TravelPlaces,
        Self::Activities,
        Self::Objects,
        Self::Symbols,
        Self::Flags,
    ];

    /// Identifier used in section headers of the output format.
    pub const fn id(self) -> &'static str {
        match self {
            Self::SmileysEmotion => "smileys_emotion",
            Self::PeopleBody => "people_body",
            Self::AnimalsNature => "animals_nature",
            Self::FoodDrink => "food_drink",
            Self::TravelPlaces => "travel_places",
            Self::Activities => "activities",
            Self::Objects => "objects",
            Self::Symbols => "symbols",
            Self::Flags => "flags",
        }
    }

    /// Group display name as it appears in `emoji-test.txt`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmileysEmotion => "Smileys & Emotion",
            Self::PeopleBody => "People & Body",
            Self::AnimalsNature => "Animals & Nature",
            Self::FoodDrink => "Food & Drink",
            Self::TravelPlaces => "Travel & Places",
            Self::Activities => "Activities",
            Self::Objects => "Objects",
            Self::Symbols => "Symbols",
            Self::Flags => "Flags",
        }
    }

    /// Exact, case-sensitive lookup of a group display name.
    pub fn from_group_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Group name of the standalone components (skin tones, hair styles), which
/// are not filed under any category.
pub const GROUP_COMPONENT: &str = "component";

/// Emoji modifiers. A sequence whose second code point is one of these is a
/// variant of the preceding base emoji.
pub const MODIFIERS: [(&str, char); 9] = [
    ("light_skin_tone", '\u{1F3FB}'),
    ("medium_light_skin_tone", '\u{1F3FC}'),
    ("medium_skin_tone", '\u{1F3FD}'),
    ("medium_dark_skin_tone", '\u{1F3FE}'),
    ("dark_skin_tone", '\u{1F3FF}'),
    ("red_hair", '\u{1F9B0}'),
    ("curly_hair", '\u{1F9B1}'),
    ("white_hair", '\u{1F9B2}'),
    ("bald", '\u{1F9B3}'),
];

pub fn is_modifier(c: char) -> bool {
    MODIFIERS.iter().any(|&(_, m)| m == c)
}
