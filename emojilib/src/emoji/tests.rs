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

use super::*;
use crate::{
    annotations::{merge, parse_annotations, AnnotationEntry, AnnotationMapping},
    error::ErrorKind,
};

const EMOJI_TEST: &str = r#"# emoji-test.txt
# Date: 2023-06-05, 21:39:54 GMT
# © 2023 Unicode®, Inc.

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
1F603                                                  ; fully-qualified     # 😃 E0.6 grinning face with big eyes

# subgroup: face-affection
263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
263A                                                   ; unqualified         # ☺ E0.6 smiling face

# Smileys & Emotion subtotal:		4
# Smileys & Emotion subtotal:		4	w/o modifiers

# group: People & Body

# subgroup: hand-fingers-open
1F44B                                                  ; fully-qualified     # 👋 E0.6 waving hand
1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone
1F44B 1F3FF                                            ; fully-qualified     # 👋🏿 E1.0 waving hand: dark skin tone

# subgroup: person
1F9D1 200D 1F9B0                                       ; fully-qualified     # 🧑‍🦰 E12.1 person: red hair
1F9D1 1F3FB 200D 1F9B0                                 ; fully-qualified     # 🧑🏻‍🦰 E12.1 person: light skin tone, red hair
1F471 1F3FB 200D 2640 FE0F                             ; fully-qualified     # 👱🏻‍♀️ E4.0 woman: light skin tone, blond hair
1F471 1F3FB 200D 2640                                  ; minimally-qualified # 👱🏻‍♀ E4.0 woman: light skin tone, blond hair

# group: Component

# subgroup: skin-tone
1F3FB                                                  ; component           # 🏻 E1.0 light skin tone
1F3FC                                                  ; component           # 🏼 E1.0 medium-light skin tone

# subgroup: hair-style
1F9B0                                                  ; component           # 🦰 E11.0 red hair

# group: Flags

# subgroup: flag
1F3C1                                                  ; fully-qualified     # 🏁 E0.6 chequered flag
1F3F3 FE0F 200D 1F308                                  ; fully-qualified     # 🏳️‍🌈 E4.0 rainbow flag

#EOF
1F600                                                  ; fully-qualified     # 😀 E1.0 after end of file
"#;

fn qualified(sets: &[EmojiSet]) -> Vec<(&str, Vec<&str>)> {
    sets.iter()
        .map(|s| {
            (
                s.base().qualified(),
                s.variants().iter().map(Emoji::qualified).collect(),
            )
        })
        .collect()
}

#[test]
fn test_emoji_unqualified_form() {
    let emoji = Emoji::from_code_points(['\u{1F3F3}', '\u{FE0F}', '\u{200D}', '\u{1F308}']);
    assert_eq!(emoji.qualified(), "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}");
    assert_eq!(emoji.unqualified(), "\u{1F3F3}\u{200D}\u{1F308}");
    assert!(emoji.unqualified().len() <= emoji.qualified().len());

    let emoji = Emoji::from_code_points(['\u{FE0F}', '\u{263A}', '\u{FE0F}']);
    assert_eq!(emoji.unqualified(), "\u{263A}");

    let emoji = Emoji::from_code_points(['\u{1F600}']);
    assert_eq!(emoji.qualified(), emoji.unqualified());
    assert_eq!(emoji.to_string(), "😀");
}

#[test]
fn test_emoji_test_parse() {
    let grouping = parse_emoji_test(EMOJI_TEST).unwrap();
    assert_eq!(grouping.categories().collect::<Vec<_>>(), Category::ALL);

    assert_eq!(
        qualified(grouping.get(Category::SmileysEmotion)),
        vec![
            ("😀", vec![]),
            ("😃", vec![]),
            ("\u{263A}\u{FE0F}", vec![]),
        ]
    );
    assert_eq!(
        qualified(grouping.get(Category::PeopleBody)),
        vec![
            ("👋", vec!["👋🏻", "👋🏿"]),
            ("🧑‍🦰", vec!["🧑🏻‍🦰", "👱🏻‍♀️"]),
        ]
    );
    assert_eq!(
        qualified(grouping.get(Category::Flags)),
        vec![("🏁", vec![]), ("🏳️‍🌈", vec![])]
    );
    for category in [
        Category::AnimalsNature,
        Category::FoodDrink,
        Category::TravelPlaces,
        Category::Activities,
        Category::Objects,
        Category::Symbols,
    ] {
        assert!(grouping.get(category).is_empty(), "{category}");
    }
    assert_eq!(grouping.len(), 11);
    assert!(!grouping.is_empty());

    let stats = grouping.stats();
    assert_eq!(stats.len(), 9);
    assert_eq!(
        stats[1],
        GroupStats {
            category: Category::PeopleBody,
            bases: 2,
            variants: 4,
        }
    );
}

#[test]
fn test_emoji_test_empty_input() {
    for input in ["", "\n\n", "#EOF\n", "# group: Component\n1F3FB ; component\n"] {
        let grouping = parse_emoji_test(input).unwrap();
        assert_eq!(grouping.categories().collect::<Vec<_>>(), Category::ALL);
        assert!(grouping.is_empty());
        assert_eq!(grouping, EmojiGrouping::new());
    }
}

#[test]
fn test_emoji_test_component_group_skipped() {
    let grouping = parse_emoji_test(concat!(
        "# group: Component\n",
        "1F3FB ; fully-qualified # 🏻 light skin tone\n",
        "1F600 ; fully-qualified # 😀 not filed anywhere\n",
        "# group: COMPONENT\n",
        "1F601 ; fully-qualified # 😁\n",
        "# group: Objects\n",
        "1F453 ; fully-qualified # 👓 glasses\n",
    ))
    .unwrap();
    assert_eq!(grouping.len(), 1);
    assert_eq!(qualified(grouping.get(Category::Objects)), vec![("👓", vec![])]);
}

#[test]
fn test_emoji_test_unknown_group_skipped() {
    let grouping = parse_emoji_test(concat!(
        "1F600 ; fully-qualified # before any group\n",
        "# group: smileys & emotion\n",
        "1F601 ; fully-qualified # wrong case\n",
        "# group: Activities\n",
        "1F383 ; fully-qualified # 🎃 jack-o-lantern\n",
        "# group: Extras\n",
        "1F384 ; fully-qualified # 🎄 unknown group\n",
    ))
    .unwrap();
    assert_eq!(grouping.len(), 1);
    assert_eq!(
        qualified(grouping.get(Category::Activities)),
        vec![("🎃", vec![])]
    );
}

#[test]
fn test_emoji_test_only_fully_qualified() {
    let grouping = parse_emoji_test(concat!(
        "# group: Symbols\n",
        "2764 ; unqualified # ❤\n",
        "2764 FE0F ; minimally-qualified # not really\n",
        "1F3FB ; component # 🏻\n",
        "2764 ; Fully-Qualified # wrong case\n",
        "2764 FE0F ; fully-qualified # ❤️ red heart\n",
    ))
    .unwrap();
    assert_eq!(
        qualified(grouping.get(Category::Symbols)),
        vec![("\u{2764}\u{FE0F}", vec![])]
    );
}

#[test]
fn test_emoji_test_orphan_variant() {
    let err = parse_emoji_test(concat!(
        "# group: People & Body\n",
        "\n",
        "1F44B 1F3FB ; fully-qualified # 👋🏻 waving hand: light skin tone\n",
    ))
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ValueError);
    assert!(err.summary.starts_with("line 3:"), "{}", err.summary);

    // A base from another category does not count.
    let err = parse_emoji_test(concat!(
        "# group: Smileys & Emotion\n",
        "1F600 ; fully-qualified # 😀\n",
        "# group: People & Body\n",
        "1F44B 1F3FB ; fully-qualified # 👋🏻\n",
    ))
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ValueError);
}

#[test]
fn test_emoji_test_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("emoji-test.txt");
    assert_eq!(
        parse_emoji_test_file(&path).unwrap_err().kind,
        ErrorKind::NotFound
    );
    std::fs::write(&path, EMOJI_TEST).unwrap();
    assert_eq!(
        parse_emoji_test_file(&path).unwrap(),
        parse_emoji_test(EMOJI_TEST).unwrap()
    );
}

#[test]
fn test_emoji_data_output() {
    let grouping = parse_emoji_test(concat!(
        "# group: Smileys & Emotion\n",
        "1F600 ; fully-qualified # 😀 grinning face\n",
        "1F600 1F3FB ; fully-qualified # skin tone variant (illustrative)\n",
        "#EOF\n",
    ))
    .unwrap();
    let mut mapping = AnnotationMapping::new();
    mapping.insert(
        "😀".to_string(),
        AnnotationEntry {
            name: "grinning face".to_string(),
            keywords: vec!["face".to_string(), "grin".to_string()],
        },
    );

    let output = emoji_data_to_string(&grouping, &mapping).unwrap();
    assert_eq!(
        output,
        concat!(
            "[smileys_emotion]\n",
            "😀;grinning face;face|grin\n",
            "\t😀🏻;;\n",
            "\n",
            "[people_body]\n\n",
            "[animals_nature]\n\n",
            "[food_drink]\n\n",
            "[travel_places]\n\n",
            "[activities]\n\n",
            "[objects]\n\n",
            "[symbols]\n\n",
            "[flags]\n\n",
        )
    );
}

#[test]
fn test_emoji_data_output_name_and_keywords() {
    let grouping =
        parse_emoji_test("# group: Smileys & Emotion\n1F600 ; fully-qualified # 😀 grinning face\n")
            .unwrap();
    let keywords = r#"<annotation cp="😀">face | grin</annotation>"#;
    let name = r#"<annotation cp="😀" type="tts">grinning face</annotation>"#;

    // Both lines of one source fill one entry.
    let annotations = parse_annotations(&format!("{}\n{}\n", keywords, name));
    let output = emoji_data_to_string(&grouping, &annotations).unwrap();
    assert!(output.starts_with("[smileys_emotion]\n😀;grinning face;face|grin\n"));

    // Across sources the later entry replaces the earlier one whole.
    let merged = merge(parse_annotations(keywords), parse_annotations(name));
    let output = emoji_data_to_string(&grouping, &merged).unwrap();
    assert!(output.starts_with("[smileys_emotion]\n😀;grinning face;\n"));
}

#[test]
fn test_emoji_data_output_lookup_by_unqualified() {
    let grouping = parse_emoji_test(EMOJI_TEST).unwrap();
    let mapping = parse_annotations(concat!(
        "<annotation cp=\"☺\">face | smile</annotation>\n",
        "<annotation cp=\"☺\" type=\"tts\">smiling face</annotation>\n",
        "<annotation cp=\"🏳‍🌈\" type=\"tts\">rainbow flag</annotation>\n",
        "<annotation cp=\"👋🏻\" type=\"tts\">waving hand: light skin tone</annotation>\n",
    ));
    let output = emoji_data_to_string(&grouping, &mapping).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert!(lines.contains(&"\u{263A}\u{FE0F};smiling face;face|smile"));
    assert!(lines.contains(&"🏳️‍🌈;rainbow flag;"));
    assert!(lines.contains(&"\t👋🏻;waving hand: light skin tone;"));
    assert!(lines.contains(&"\t👋🏿;;"));
    assert!(lines.contains(&"😀;;"));
    assert_eq!(lines.iter().filter(|l| l.starts_with('[')).count(), 9);
    assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 9);

    // Without annotations every field is empty.
    let root = emoji_data_to_string(&grouping, &AnnotationMapping::new()).unwrap();
    assert!(root
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('['))
        .all(|l| l.ends_with(";;")));
}

#[test]
fn test_emoji_data_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("en.txt");
    let grouping = parse_emoji_test(EMOJI_TEST).unwrap();
    let mapping = AnnotationMapping::new();
    std::fs::write(&path, "stale contents that must be truncated\n".repeat(1000)).unwrap();
    write_emoji_data_file(&path, &grouping, &mapping).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        emoji_data_to_string(&grouping, &mapping).unwrap()
    );

    let err = write_emoji_data_file(tempdir.path().join("missing/en.txt"), &grouping, &mapping)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
