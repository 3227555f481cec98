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
use crate::error::ErrorKind;

const EN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
	<identity>
		<version number="$Revision$"/>
		<language type="en"/>
	</identity>
	<annotations>
		<annotation cp="😀">face | grin | grinning face</annotation>
		<annotation cp="😀" type="tts">grinning face</annotation>
		<annotation cp="☺">face | outlined | relaxed | smile | smiling face</annotation>
		<annotation cp="☺" type="tts">smiling face</annotation>
		<annotation cp="👋" type="tts">waving hand</annotation>
	</annotations>
</ldml>
"#;

#[test]
fn test_annotations_parse() {
    let mapping = parse_annotations(EN_XML);
    assert_eq!(mapping.len(), 3);

    let grin = mapping.get("😀").unwrap();
    assert_eq!(grin.name, "grinning face");
    assert_eq!(grin.keywords, vec!["face", "grin", "grinning face"]);

    let smiling = mapping.get("☺").unwrap();
    assert_eq!(smiling.name, "smiling face");
    assert_eq!(smiling.keywords.len(), 5);

    // Name only, keywords never seen.
    let wave = mapping.get("👋").unwrap();
    assert_eq!(wave.name, "waving hand");
    assert!(wave.keywords.is_empty());

    assert!(mapping.get("☺\u{FE0F}").is_none());
    assert_eq!(
        mapping.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec!["😀", "☺", "👋"]
    );
}

#[test]
fn test_annotations_name_then_keywords() {
    let mapping = parse_annotations(concat!(
        "<annotation cp=\"😀\" type=\"tts\">grinning face</annotation>\n",
        "<annotation cp=\"😀\">face|grin|happy</annotation>\n",
    ));
    assert_eq!(mapping.len(), 1);
    assert_eq!(
        mapping.get("😀"),
        Some(&AnnotationEntry {
            name: "grinning face".to_string(),
            keywords: vec!["face".into(), "grin".into(), "happy".into()],
        })
    );
}

#[test]
fn test_annotations_tts_line_is_not_keywords() {
    let mapping = parse_annotations("<annotation cp=\"😀\" type=\"tts\">grinning face</annotation>");
    let entry = mapping.get("😀").unwrap();
    assert_eq!(entry.name, "grinning face");
    assert!(entry.keywords.is_empty());
    assert!(mapping.iter().all(|(k, _)| !k.contains("type=")));
}

#[test]
fn test_annotations_last_write_wins_per_field() {
    let mapping = parse_annotations(concat!(
        "<annotation cp=\"😀\">a | b</annotation>\n",
        "<annotation cp=\"😀\" type=\"tts\">first</annotation>\n",
        "<annotation cp=\"😀\" type=\"tts\">second</annotation>\n",
    ));
    let entry = mapping.get("😀").unwrap();
    assert_eq!(entry.name, "second");
    assert_eq!(entry.keywords, vec!["a", "b"]);
}

#[test]
fn test_annotations_ignores_other_lines() {
    let mapping = parse_annotations(concat!(
        "<annotations>\n",
        "<annotation cp=\"😀\" type=\"tts\"></annotation>\n",
        "<annotation cp=\"\">x</annotation>\n",
        "<annotation cp=\"😀\" type=\"tts\">two</annotation> <annotation cp=\"😀\">x</annotation> trailing\n",
        "garbage\n",
        "\n",
    ));
    assert!(mapping.is_empty());
}

#[test]
fn test_annotations_parse_is_idempotent() {
    assert_eq!(parse_annotations(EN_XML), parse_annotations(EN_XML));
}

#[test]
fn test_annotations_merge() {
    let base = parse_annotations(concat!(
        "<annotation cp=\"😀\">face | grin</annotation>\n",
        "<annotation cp=\"😀\" type=\"tts\">grinning face</annotation>\n",
        "<annotation cp=\"👋\" type=\"tts\">waving hand</annotation>\n",
    ));
    let derived = parse_annotations(concat!(
        "<annotation cp=\"😀\" type=\"tts\">grinning face (derived)</annotation>\n",
        "<annotation cp=\"👋🏻\" type=\"tts\">waving hand: light skin tone</annotation>\n",
    ));

    let merged = merge(base.clone(), derived.clone());
    assert_eq!(merged.len(), 3);
    // Entries are replaced whole, not merged field by field.
    assert_eq!(merged.get("😀"), derived.get("😀"));
    assert!(merged.get("😀").unwrap().keywords.is_empty());
    assert_eq!(merged.get("👋"), base.get("👋"));
    assert_eq!(merged.get("👋🏻"), derived.get("👋🏻"));

    assert_eq!(merge_all(vec![base.clone(), derived.clone()]), merged);
    assert_eq!(merge_all(vec![derived, base.clone()]).get("😀"), base.get("😀"));
    assert!(merge_all(std::iter::empty()).is_empty());
}

#[test]
fn test_annotations_file_preconditions() {
    let tempdir = tempfile::tempdir().unwrap();
    let err = parse_annotation_file(tempdir.path().join("en.xml")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    let err = parse_annotation_file(tempdir.path()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);

    let path = tempdir.path().join("en.xml");
    std::fs::write(&path, EN_XML).unwrap();
    assert_eq!(parse_annotation_file(&path).unwrap(), parse_annotations(EN_XML));
}
