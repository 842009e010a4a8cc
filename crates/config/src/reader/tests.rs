//! Tests for typed parameter lookups.
//!
//! Responsibilities:
//! - Test scalar lookups for every supported type, including fallbacks.
//! - Test fixed-size array lookups, length checks and partial writes.
//! - Test lazy validation and the diagnostics emitted per lookup.

use std::sync::Arc;

use super::*;
use crate::report::{MemoryReporter, Severity};

fn reader_with(text: &str) -> (ParamReader, Arc<MemoryReporter>) {
    let reporter = Arc::new(MemoryReporter::new());
    let reader = ParamReader::builder()
        .with_reporter(Arc::clone(&reporter))
        .from_text(text);
    reporter.clear();
    (reader, reporter)
}

const SAMPLE: &str = "\
# Example parameter file
string_example: /home/user/workspace/blubb
character: x
number_int: 12   # inline comment
number_float: 4234.25
number_bool: 1
word_bool: false
number_int_array: [2, 3, 4, 5, 6]
number_float_array: (1.5, 2, 3.25)
character_array: {a, b, c, d, e, f, g}
string_array: [Hello, World, !]
";

#[test]
fn test_scalar_lookups() {
    let (reader, _) = reader_with(SAMPLE);

    let mut path = String::new();
    let mut character = 'a';
    let mut int = 0i32;
    let mut float = 0.0f32;
    let mut bool_1 = false;
    let mut bool_2 = true;

    assert_eq!(reader.get("string_example", &mut path), Lookup::Found);
    assert_eq!(reader.get("character", &mut character), Lookup::Found);
    assert_eq!(reader.get("number_int", &mut int), Lookup::Found);
    assert_eq!(reader.get("number_float", &mut float), Lookup::Found);
    assert_eq!(reader.get("number_bool", &mut bool_1), Lookup::Found);
    assert_eq!(reader.get("word_bool", &mut bool_2), Lookup::Found);

    assert_eq!(path, "/home/user/workspace/blubb");
    assert_eq!(character, 'x');
    assert_eq!(int, 12);
    assert_eq!(float, 4234.25);
    assert!(bool_1);
    assert!(!bool_2);
}

#[test]
fn test_array_lookups() {
    let (reader, _) = reader_with(SAMPLE);

    let mut ints = [0i32; 5];
    let mut floats = [0.0f64; 3];
    let mut chars = ['z'; 7];
    let mut strings = [String::new(), String::new(), String::new()];

    assert!(reader.get_array("number_int_array", &mut ints).is_found());
    assert!(reader.get_array("number_float_array", &mut floats).is_found());
    assert!(reader.get_array("character_array", &mut chars).is_found());
    assert!(reader.get_array("string_array", &mut strings).is_found());

    assert_eq!(ints, [2, 3, 4, 5, 6]);
    assert_eq!(floats, [1.5, 2.0, 3.25]);
    assert_eq!(chars, ['a', 'b', 'c', 'd', 'e', 'f', 'g']);
    assert_eq!(strings, ["Hello", "World", "!"]);
}

#[test]
fn test_missing_key_preserves_default() {
    let (reader, reporter) = reader_with("number_int: 12\n");

    let mut value = 7;
    assert_eq!(reader.get("missing_key", &mut value), Lookup::NotFound);
    assert_eq!(value, 7);
    assert_eq!(
        reporter.lines(),
        ["Could not find the parameter for missing_key. Using instead the initial value: 7"]
    );
}

#[test]
fn test_first_match_wins_on_duplicate_keys() {
    let (reader, _) = reader_with("a: 1\na: 2\n");
    assert_eq!(reader.get_or("a", 0), 1);
}

#[test]
fn test_boolean_literals() {
    let (reader, _) = reader_with(
        "t1: 1\nt2: true\nt3: TRUE\nf1: 0\nf2: false\nf3: FALSE\nbad: yes\n",
    );

    for name in ["t1", "t2", "t3"] {
        assert!(reader.get_or(name, false), "{name}");
    }
    for name in ["f1", "f2", "f3"] {
        assert!(!reader.get_or(name, true), "{name}");
    }

    let mut value = true;
    let outcome = reader.get("bad", &mut value);
    assert!(matches!(
        outcome,
        Lookup::Malformed(CoercionError::InvalidBool { .. })
    ));
    assert!(value);
}

#[test]
fn test_character_with_wrong_length_keeps_default() {
    let (reader, reporter) = reader_with("character: xy\n");

    let mut value = 'a';
    let outcome = reader.get("character", &mut value);

    assert_eq!(
        outcome,
        Lookup::Malformed(CoercionError::UnexpectedLength { found: 2 })
    );
    assert_eq!(value, 'a');
    assert_eq!(reporter.entries()[0].0, Severity::Warning);
}

#[test]
fn test_malformed_numbers_keep_default() {
    let (reader, _) = reader_with("int: twelve\nfloat: 1.2.3\n");

    let mut int = 5i64;
    let mut float = 0.5f64;

    assert!(matches!(
        reader.get("int", &mut int),
        Lookup::Malformed(CoercionError::InvalidInteger { .. })
    ));
    assert!(matches!(
        reader.get("float", &mut float),
        Lookup::Malformed(CoercionError::InvalidFloat { .. })
    ));
    assert_eq!(int, 5);
    assert_eq!(float, 0.5);
}

#[test]
fn test_array_length_mismatch_keeps_buffer() {
    let (reader, reporter) = reader_with("arr: [1,2,3]\n");

    let mut buffer = [0i32; 5];
    let outcome = reader.get_array("arr", &mut buffer);

    assert_eq!(
        outcome,
        Lookup::Malformed(CoercionError::ArrayLength {
            requested: 5,
            found: 3
        })
    );
    assert_eq!(buffer, [0; 5]);
    let line = &reporter.lines()[0];
    assert!(line.contains("5 fields"));
    assert!(line.contains("3 fields"));
}

#[test]
fn test_character_array_bad_element_leaves_partial_write() {
    let (reader, _) = reader_with("chars: [a, b, cc, d]\n");

    let mut buffer = ['z'; 4];
    let outcome = reader.get_array("chars", &mut buffer);

    assert!(matches!(
        outcome,
        Lookup::Malformed(CoercionError::ArrayElement { index: 2, .. })
    ));
    assert_eq!(buffer, ['a', 'b', 'z', 'z']);
}

#[test]
fn test_malformed_array_elements_keep_buffer() {
    let (reader, reporter) =
        reader_with("ints: [1, x, 3]\nfloats: [1.5, abc]\nflags: [true, yes]\n");

    let mut ints = [9i32; 3];
    let mut floats = [0.5f32; 2];
    let mut flags = [false; 2];

    assert!(matches!(
        reader.get_array("ints", &mut ints),
        Lookup::Malformed(CoercionError::ArrayElement { index: 1, .. })
    ));
    assert!(matches!(
        reader.get_array("floats", &mut floats),
        Lookup::Malformed(CoercionError::ArrayElement { index: 1, .. })
    ));
    assert!(matches!(
        reader.get_array("flags", &mut flags),
        Lookup::Malformed(CoercionError::ArrayElement { index: 1, .. })
    ));

    assert_eq!(ints, [9, 9, 9]);
    assert_eq!(floats, [0.5, 0.5]);
    assert_eq!(flags, [false, false]);
    assert!(reporter.lines()[0].ends_with("initial value: [9, 9, 9]"));
}

#[test]
fn test_missing_array_reports_defaults() {
    let (reader, reporter) = reader_with("a: 1\n");

    let mut buffer = [1, 2];
    assert_eq!(reader.get_array("arr", &mut buffer), Lookup::NotFound);
    assert_eq!(buffer, [1, 2]);
    assert!(reporter.lines()[0].ends_with("initial value: [1, 2]"));
}

#[test]
fn test_found_diagnostic_renders_resolved_value() {
    let (reader, reporter) = reader_with("arr: {2,3,4}\nname: spfr\n");

    let mut buffer = [0u8; 3];
    reader.get_array("arr", &mut buffer);
    let mut name = String::from("default");
    reader.get("name", &mut name);

    assert_eq!(
        reporter.lines(),
        [
            "Parameter for arr is: [2, 3, 4]",
            "Parameter for name is: spfr"
        ]
    );
}

#[test]
fn test_odd_pair_count_falls_back_to_defaults() {
    let (reader, reporter) = reader_with("a: 1\nb: 2\nc\n");

    let mut a = 0;
    let mut b = 0;
    assert_eq!(reader.get("a", &mut a), Lookup::InvalidConfig);
    assert_eq!(reader.get("b", &mut b), Lookup::InvalidConfig);
    assert_eq!((a, b), (0, 0));
    assert_eq!(reader.raw("a"), None);

    // Invalid data is reported once; each lookup still reports its fallback.
    let lines = reporter.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Data invalid!"));
    assert!(lines[1].starts_with("Could not find the parameter for a."));
}

#[test]
fn test_empty_source_is_invalid() {
    let (reader, _) = reader_with("# nothing but comments\n");

    assert!(reader.is_empty());
    assert!(!reader.is_valid());
    assert_eq!(reader.get_or("a", 3), 3);
}

#[test]
fn test_validation_is_lazy_and_cached() {
    let (reader, reporter) = reader_with("a\n");

    assert!(reporter.lines().is_empty());
    assert!(!reader.is_valid());
    assert!(!reader.is_valid());
    assert_eq!(reporter.lines().len(), 1);
}

#[test]
fn test_pairs_and_raw_access() {
    let (reader, _) = reader_with("a: 1\nb: [1, 2]\na: 3\n");

    assert_eq!(reader.len(), 3);
    assert_eq!(reader.raw("b"), Some("[1,2]"));
    let keys: Vec<&str> = reader.pairs().map(|pair| pair.key).collect();
    assert_eq!(keys, ["a", "b", "a"]);
}

#[test]
fn test_value_with_space_is_collapsed() {
    // Spaces are stripped from every token, including inside values.
    let (reader, _) = reader_with("path: /tmp/my dir\n");
    assert_eq!(reader.get_or("path", String::new()), "/tmp/mydir");
}
